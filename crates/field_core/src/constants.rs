/// Field dimensions [yd]
pub const FIELD_RADIUS: f64 = 50.0; // boundary
pub const INNER_CIRCLE_RADIUS: f64 = 30.0; // fielding restriction circle
pub const PITCH_LENGTH: f64 = 22.0;
pub const PITCH_WIDTH: f64 = 2.0;

/// Restriction limits
pub const UNRESTRICTED_OUTSIDE: usize = 11; // Test and unknown formats
pub const T20_POWERPLAY_OVERS: u32 = 6;
pub const ODI_FIRST_POWERPLAY_OVERS: u32 = 10;
pub const ODI_SECOND_POWERPLAY_OVERS: u32 = 40;

/// Innings length [overs]
pub const T20_OVERS: u32 = 20;
pub const ODI_OVERS: u32 = 50;

/// Default fielders placed at session start
pub const DEFAULT_FIELDERS: [&str; 2] = ["Wicketkeeper", "Bowler"];

/// Snapshot export
pub const SNAPSHOT_FILE_NAME: &str = "field_setup.json";
pub const SNAPSHOT_MIME_TYPE: &str = "application/json";
pub const SNAPSHOT_INDENT: &[u8] = b"    ";

/// Environment
pub const ENV_OUTPUT_DIR: &str = "FIELD_SIM_OUTPUT_DIR";
