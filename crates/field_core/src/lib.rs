pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod presets;
pub mod render;
pub mod rules;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod types;

pub use config::{Config, FieldConfig, ImportPolicy, SessionConfig, output_dir_from_env};
pub use constants::{
    FIELD_RADIUS, INNER_CIRCLE_RADIUS, PITCH_LENGTH, PITCH_WIDTH, SNAPSHOT_FILE_NAME,
    SNAPSHOT_MIME_TYPE,
};
pub use error::{FieldError, Result};
pub use geometry::{Point, clip_to_circle, mirror_horizontal};
pub use presets::{PRESET_CATALOG, PresetEntry, adjusted_presets, preset_by_name, preset_names};
pub use render::{RenderOptions, render_field_svg, save_field_svg};
pub use rules::{
    MatchContext, Verdict, count_outside, max_allowed_outside_circle, outside_fielders, validate,
};
pub use session::Session;
pub use snapshot::Snapshot;
pub use state::FieldState;
pub use types::{Handedness, MatchFormat, Positions};
