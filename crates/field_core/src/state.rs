use crate::{
    config::ImportPolicy,
    constants::{DEFAULT_FIELDERS, FIELD_RADIUS},
    error::{FieldError, Result},
    geometry::{Point, clip_to_circle, mirror_horizontal},
    presets::adjusted_preset,
    snapshot::Snapshot,
    types::{Handedness, Positions},
};
use log::{debug, warn};

/// Fielders placed during one session, together with the handedness their
/// coordinates are currently oriented for.
///
/// Every transition either applies completely or returns an error and leaves
/// the state untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    handedness: Handedness,
    positions: Positions,
    field_radius: f64,
    import_policy: ImportPolicy,
}

impl FieldState {
    /// Standard field with Wicketkeeper and Bowler placed for `handedness`
    pub fn initialize(handedness: Handedness) -> Self {
        Self::with_field(handedness, FIELD_RADIUS, ImportPolicy::default())
    }

    pub fn with_field(
        handedness: Handedness,
        field_radius: f64,
        import_policy: ImportPolicy,
    ) -> Self {
        let mut state = Self {
            handedness,
            positions: Positions::new(),
            field_radius,
            import_policy,
        };
        state.place_defaults();
        state
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    pub fn get(&self, name: &str) -> Option<Point> {
        self.positions.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn field_radius(&self) -> f64 {
        self.field_radius
    }

    /// Re-orient stored fielders for a new batsman.
    ///
    /// Mirroring keeps the distance from the origin, so points are not re-clipped.
    /// Returns `true` if a mirroring pass ran.
    pub fn on_handedness_changed(&mut self, new_handedness: Handedness) -> bool {
        if new_handedness == self.handedness {
            return false;
        }
        for point in self.positions.values_mut() {
            *point = mirror_horizontal(*point);
        }
        debug!(
            "Handedness {} -> {}, mirrored {} fielders",
            self.handedness,
            new_handedness,
            self.positions.len()
        );
        self.handedness = new_handedness;
        true
    }

    /// Place (or move) a catalog fielder at its position for the current batsman
    pub fn add_preset(&mut self, name: &str) -> Result<Point> {
        let point = adjusted_preset(name, self.handedness, self.field_radius).ok_or_else(|| {
            FieldError::UnknownPreset {
                name: name.to_string(),
            }
        })?;
        self.positions.insert(name.to_string(), point);
        debug!("Preset {name} placed at ({:.2}, {:.2})", point.x, point.y);
        Ok(point)
    }

    /// Place (or move) a fielder anywhere; points beyond the rope are pulled back onto it
    pub fn add_custom(&mut self, name: &str, x: f64, y: f64) -> Result<Point> {
        let requested = Point::new(x, y);
        if !requested.is_finite() {
            return Err(FieldError::InvalidCoordinate {
                name: name.to_string(),
                x,
                y,
            });
        }
        let point = clip_to_circle(requested, self.field_radius);
        if point != requested {
            debug!(
                "Custom {name} clipped from ({x}, {y}) to ({:.2}, {:.2})",
                point.x, point.y
            );
        }
        self.positions.insert(name.to_string(), point);
        Ok(point)
    }

    pub fn remove(&mut self, name: &str) -> Option<Point> {
        let removed = self.positions.remove(name);
        if removed.is_some() {
            debug!("Removed {name}");
        }
        removed
    }

    /// Back to Wicketkeeper and Bowler for the current batsman
    pub fn reset(&mut self) {
        self.positions.clear();
        self.place_defaults();
        debug!("Field reset for {}", self.handedness);
    }

    /// Replace every fielder with the contents of a JSON snapshot
    pub fn import_snapshot(&mut self, raw: &str) -> Result<()> {
        let snapshot = Snapshot::from_json_str(raw)?;
        self.load_snapshot(snapshot);
        Ok(())
    }

    /// Replace every fielder with an already parsed snapshot
    pub fn load_snapshot(&mut self, snapshot: Snapshot) {
        let mut positions = snapshot.into_positions();
        match self.import_policy {
            ImportPolicy::Trusted => {
                let beyond = positions
                    .values()
                    .filter(|p| p.distance() > self.field_radius)
                    .count();
                if beyond > 0 {
                    warn!("Imported setup has {beyond} fielders beyond the boundary");
                }
            }
            ImportPolicy::Clip => {
                for point in positions.values_mut() {
                    *point = clip_to_circle(*point, self.field_radius);
                }
            }
        }
        debug!("Imported {} fielders", positions.len());
        self.positions = positions;
    }

    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot::new(self.positions.clone())
    }

    fn place_defaults(&mut self) {
        for name in DEFAULT_FIELDERS {
            if let Some(point) = adjusted_preset(name, self.handedness, self.field_radius) {
                self.positions.insert(name.to_string(), point);
            }
        }
    }
}

impl Default for FieldState {
    fn default() -> Self {
        Self::initialize(Handedness::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_right() {
        let state = FieldState::initialize(Handedness::Right);
        assert_eq!(state.handedness(), Handedness::Right);
        assert_eq!(state.len(), 2);
        assert_eq!(state.get("Wicketkeeper"), Some(Point::new(5.0, -28.0)));
        assert_eq!(state.get("Bowler"), Some(Point::new(0.0, 28.0)));
    }

    #[test]
    fn test_initialize_left() {
        let state = FieldState::initialize(Handedness::Left);
        assert_eq!(state.get("Wicketkeeper"), Some(Point::new(-5.0, -28.0)));
        assert_eq!(state.get("Bowler").map(|p| p.y), Some(28.0));
    }

    #[test]
    fn test_add_preset_overwrites() {
        let mut state = FieldState::initialize(Handedness::Right);
        state.add_custom("Gully", 0.0, 0.0).unwrap();
        let p = state.add_preset("Gully").unwrap();
        assert_eq!(p, Point::new(26.0, -15.0));
        assert_eq!(state.get("Gully"), Some(p));
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_add_preset_follows_current_handedness() {
        let mut state = FieldState::initialize(Handedness::Right);
        state.on_handedness_changed(Handedness::Left);
        let p = state.add_preset("First Slip").unwrap();
        assert_eq!(p, Point::new(-12.0, -21.0));
    }

    #[test]
    fn test_unknown_preset_leaves_state() {
        let mut state = FieldState::initialize(Handedness::Right);
        let before = state.clone();
        let err = state.add_preset("Cow Corner").unwrap_err();
        assert!(matches!(err, FieldError::UnknownPreset { ref name } if name == "Cow Corner"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_add_custom_clips_far_point() {
        let mut state = FieldState::initialize(Handedness::Right);
        let p = state.add_custom("X", 1000.0, 0.0).unwrap();
        assert_eq!(p.y, 0.0);
        assert!(p.x > 0.0);
        assert!((p.distance() - 50.0).abs() < 1e-9);
        assert_eq!(state.get("X"), Some(p));
    }

    #[test]
    fn test_add_custom_huge_values_stay_on_field() {
        let mut state = FieldState::initialize(Handedness::Right);
        for (name, x, y) in [
            ("A", 1e307, 0.0),
            ("B", 1.5e308, 1.5e308),
            ("C", -f64::MAX, -f64::MAX),
        ] {
            let p = state.add_custom(name, x, y).unwrap();
            assert!(p.is_finite(), "{name} stored as {p:?}");
            assert!((p.distance() - 50.0).abs() < 1e-9, "{name} stored as {p:?}");
            assert_eq!(state.get(name), Some(p));
        }
        assert_eq!(state.get("A").map(|p| p.y), Some(0.0));

        // still exportable and importable
        let json = state.export_snapshot().to_json_pretty().unwrap();
        let mut other = FieldState::initialize(Handedness::Right);
        other.import_snapshot(&json).unwrap();
        assert_eq!(other.positions(), state.positions());
    }

    #[test]
    fn test_add_custom_inside_kept_exactly() {
        let mut state = FieldState::initialize(Handedness::Right);
        let p = state.add_custom("Fielder", -12.5, 33.25).unwrap();
        assert_eq!(p, Point::new(-12.5, 33.25));
    }

    #[test]
    fn test_add_custom_rejects_non_finite() {
        let mut state = FieldState::initialize(Handedness::Right);
        let before = state.clone();
        for (x, y) in [(f64::NAN, 0.0), (0.0, f64::INFINITY), (f64::NEG_INFINITY, 1.0)] {
            let result = state.add_custom("Bad", x, y);
            assert!(matches!(result, Err(FieldError::InvalidCoordinate { .. })));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_twice_restores_coordinates() {
        let mut state = FieldState::initialize(Handedness::Right);
        state.add_preset("Long Off").unwrap();
        state.add_custom("Sweeper", -17.3, 44.1).unwrap();
        let original = state.positions().clone();

        assert!(state.on_handedness_changed(Handedness::Left));
        assert_ne!(state.positions(), &original);
        assert!(state.on_handedness_changed(Handedness::Right));
        assert_eq!(state.positions(), &original);
    }

    #[test]
    fn test_same_handedness_is_noop() {
        let mut state = FieldState::initialize(Handedness::Left);
        let before = state.clone();
        assert!(!state.on_handedness_changed(Handedness::Left));
        assert_eq!(state, before);
    }

    #[test]
    fn test_mirror_matches_presets_for_new_handedness() {
        let mut state = FieldState::initialize(Handedness::Right);
        state.add_preset("Third Man").unwrap();
        state.on_handedness_changed(Handedness::Left);

        let fresh = FieldState::initialize(Handedness::Left);
        assert_eq!(state.get("Wicketkeeper"), fresh.get("Wicketkeeper"));
        let expected = adjusted_preset("Third Man", Handedness::Left, 50.0).unwrap();
        assert_eq!(state.get("Third Man"), Some(expected));
    }

    #[test]
    fn test_reset_uses_current_handedness() {
        let mut state = FieldState::initialize(Handedness::Right);
        state.add_preset("Cover").unwrap();
        state.on_handedness_changed(Handedness::Left);
        state.reset();
        assert_eq!(state, FieldState::initialize(Handedness::Left));
    }

    #[test]
    fn test_remove() {
        let mut state = FieldState::initialize(Handedness::Right);
        assert_eq!(state.remove("Bowler"), Some(Point::new(0.0, 28.0)));
        assert_eq!(state.remove("Bowler"), None);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_import_replaces_everything_trusted() {
        let mut state = FieldState::initialize(Handedness::Right);
        state
            .import_snapshot(r#"{"A": [0, 35], "Far": [80, 0]}"#)
            .unwrap();
        assert_eq!(state.len(), 2);
        assert!(state.get("Wicketkeeper").is_none());
        // trusted import keeps out-of-bounds points verbatim
        assert_eq!(state.get("Far"), Some(Point::new(80.0, 0.0)));
        assert_eq!(state.handedness(), Handedness::Right);
    }

    #[test]
    fn test_import_with_clip_policy() {
        let mut state = FieldState::with_field(Handedness::Right, 50.0, ImportPolicy::Clip);
        state
            .import_snapshot(r#"{"Far": [0, -80], "Near": [3, 4]}"#)
            .unwrap();
        assert_eq!(state.get("Far"), Some(Point::new(0.0, -50.0)));
        assert_eq!(state.get("Near"), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_malformed_import_leaves_state() {
        let mut state = FieldState::initialize(Handedness::Right);
        state.add_preset("Point").unwrap();
        let before = state.clone();
        let result = state.import_snapshot(r#"{"A": [1, 2], "B": [3]}"#);
        assert!(matches!(result, Err(FieldError::MalformedSnapshot(_))));
        assert_eq!(state, before);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut state = FieldState::initialize(Handedness::Left);
        state.add_preset("Long On").unwrap();
        state.add_custom("Sweeper", 31.7, -41.9).unwrap();

        let first = state.export_snapshot();
        assert_eq!(first, state.export_snapshot());

        let json = first.to_json_pretty().unwrap();
        let mut other = FieldState::initialize(Handedness::Left);
        other.import_snapshot(&json).unwrap();
        assert_eq!(other.positions(), state.positions());
    }
}
