use crate::{
    constants::{SNAPSHOT_FILE_NAME, SNAPSHOT_INDENT},
    error::{FieldError, Result},
    types::Positions,
};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs::{self, File},
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

/// Flat `{ "name": [x, y], ... }` form of a field setup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    positions: Positions,
}

impl Snapshot {
    pub fn new(positions: Positions) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    pub fn into_positions(self) -> Positions {
        self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Strict parse; anything but an object of `name → [number, number]` is rejected
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(raw)?;
        if let Some((name, p)) = snapshot.positions.iter().find(|(_, p)| !p.is_finite()) {
            return Err(FieldError::MalformedSnapshot(format!(
                "non-finite coordinate for {name}: [{}, {}]",
                p.x, p.y
            )));
        }
        Ok(snapshot)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Self::from_json_str(&raw)
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading snapshot from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Pretty-printed JSON, 4-space indent
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_json(&mut buf)?;
        // serde_json only emits UTF-8
        String::from_utf8(buf).map_err(|e| FieldError::MalformedSnapshot(e.to_string()))
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(SNAPSHOT_INDENT);
        let mut ser = Serializer::with_formatter(writer, formatter);
        self.serialize(&mut ser)?;
        Ok(())
    }

    /// Write `field_setup.json` into `dir` (created if missing)
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| FieldError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let file_path = dir.join(SNAPSHOT_FILE_NAME);
        self.write_to_path(&file_path)?;
        Ok(file_path)
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| FieldError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        self.write_json(&mut writer)?;
        writer.flush().map_err(|e| FieldError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(
            "Snapshot with {} fielders written to {}",
            self.len(),
            path.display()
        );
        Ok(())
    }
}

impl From<Positions> for Snapshot {
    fn from(positions: Positions) -> Self {
        Self::new(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use tempfile::TempDir;

    fn sample() -> Snapshot {
        let mut positions = Positions::new();
        positions.insert("Wicketkeeper".to_string(), Point::new(5.0, -28.0));
        positions.insert("Long Off".to_string(), Point::new(39.4654, 30.6953));
        positions.insert("Bowler".to_string(), Point::new(0.0, 28.0));
        Snapshot::new(positions)
    }

    #[test]
    fn test_pretty_output_uses_four_spaces() {
        let mut positions = Positions::new();
        positions.insert("Bowler".to_string(), Point::new(0.0, 28.0));
        let json = Snapshot::new(positions).to_json_pretty().unwrap();
        assert_eq!(
            json,
            "{\n    \"Bowler\": [\n        0.0,\n        28.0\n    ]\n}"
        );
    }

    #[test]
    fn test_json_round_trip_is_exact() {
        let original = sample();
        let json = original.to_json_pretty().unwrap();
        let parsed = Snapshot::from_json_str(&json).unwrap();
        assert_eq!(parsed, original);
        // stable across repeated calls
        assert_eq!(json, original.to_json_pretty().unwrap());
    }

    #[test]
    fn test_accepts_integer_coordinates() {
        let snapshot = Snapshot::from_json_str(r#"{"Gully": [26, -15]}"#).unwrap();
        assert_eq!(snapshot.positions()["Gully"], Point::new(26.0, -15.0));
    }

    #[test]
    fn test_rejects_malformed_payloads() {
        let cases = [
            "",
            "[]",
            "[[1, 2]]",
            r#"{"A": [1]}"#,
            r#"{"A": [1, 2, 3]}"#,
            r#"{"A": ["1", 2]}"#,
            r#"{"A": {"x": 1, "y": 2}}"#,
            r#"{"A": null}"#,
            r#"{"A": [1e400, 0]}"#,
        ];
        for raw in cases {
            let result = Snapshot::from_json_str(raw);
            assert!(
                matches!(result, Err(FieldError::MalformedSnapshot(_))),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn test_empty_object_is_valid() {
        let snapshot = Snapshot::from_json_str("{}").unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_write_to_dir_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("exports");
        let original = sample();

        let path = original.write_to_dir(&nested).unwrap();
        assert_eq!(path.file_name().unwrap(), "field_setup.json");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n    \""));

        let loaded = Snapshot::read_from_path(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_read_missing_file() {
        let result = Snapshot::read_from_path("nonexistent_dir/field_setup.json");
        assert!(matches!(result, Err(FieldError::Io(_))));
    }
}
