use crate::{
    constants::{ENV_OUTPUT_DIR, FIELD_RADIUS, INNER_CIRCLE_RADIUS, PITCH_LENGTH, PITCH_WIDTH},
    error::{FieldError, Result},
    types::{Handedness, MatchFormat},
};
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

/// Top-level configuration (`config/field.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub field: FieldConfig,
    pub session: SessionConfig,
}

/// Field dimensions [yd]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FieldConfig {
    pub field_radius: f64,
    pub inner_radius: f64,
    pub pitch_length: f64,
    pub pitch_width: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            field_radius: FIELD_RADIUS,
            inner_radius: INNER_CIRCLE_RADIUS,
            pitch_length: PITCH_LENGTH,
            pitch_width: PITCH_WIDTH,
        }
    }
}

/// Session defaults
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    pub handedness: Handedness,
    pub format: MatchFormat,
    pub import_policy: ImportPolicy,
}

/// What to do with imported coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportPolicy {
    /// Keep points exactly as given, even beyond the boundary
    #[default]
    Trusted,
    /// Clip every imported point to the field radius
    Clip,
}

impl Config {
    /// Load and validate a TOML configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FieldError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            FieldError::Config(msg) => {
                FieldError::Config(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let field = &self.field;
        for (label, value) in [
            ("field_radius", field.field_radius),
            ("inner_radius", field.inner_radius),
            ("pitch_length", field.pitch_length),
            ("pitch_width", field.pitch_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FieldError::Config(format!(
                    "{label} must be a positive number, got {value}"
                )));
            }
        }

        if field.inner_radius >= field.field_radius {
            return Err(FieldError::Config(format!(
                "inner_radius ({}) must be smaller than field_radius ({})",
                field.inner_radius, field.field_radius
            )));
        }

        Ok(())
    }
}

/// Export directory from `FIELD_SIM_OUTPUT_DIR` (None when unset or blank)
pub fn output_dir_from_env() -> Result<Option<PathBuf>> {
    match env::var(ENV_OUTPUT_DIR) {
        Ok(dir) if !dir.trim().is_empty() => {
            let path = PathBuf::from(dir);
            // If the path already exists but is not a directory, reject early.
            if path.exists() && !path.is_dir() {
                return Err(FieldError::Config(format!(
                    "Output path is not a directory: {}",
                    path.display()
                )));
            }
            Ok(Some(path))
        }
        _ => Ok(None),
    }
}
