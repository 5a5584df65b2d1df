use clap::Parser;
use field_core::{Handedness, MatchFormat};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Arrange fielders on a cricket field and check fielding restrictions",
    long_about = None
)]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = "config/field.toml")]
    pub config: PathBuf,

    /// Batsman handedness at session start (right | left)
    #[arg(long = "handedness")]
    pub handedness: Option<Handedness>,

    /// Batsman handedness after placing fielders; mirrors the whole field
    #[arg(long = "switch-to")]
    pub switch_to: Option<Handedness>,

    /// Match format (T20 | ODI | Test)
    #[arg(short = 'f', long = "format")]
    pub format: Option<MatchFormat>,

    /// Overs completed (ignored for Test)
    #[arg(short = 'o', long = "overs", default_value_t = 0)]
    pub overs: u32,

    /// Replace the field with a saved setup (JSON)
    #[arg(short = 'i', long = "import")]
    pub import: Option<PathBuf>,

    /// Start over from Wicketkeeper and Bowler
    #[arg(long = "reset")]
    pub reset: bool,

    /// Add a preset fielder (repeatable)
    #[arg(short = 'p', long = "preset")]
    pub presets: Vec<String>,

    /// Add a custom fielder as NAME:X:Y (repeatable)
    #[arg(long = "custom", value_parser = parse_custom, allow_hyphen_values = true)]
    pub customs: Vec<CustomPlacement>,

    /// Remove a fielder by name (repeatable)
    #[arg(long = "remove")]
    pub removes: Vec<String>,

    /// Save field_setup.json to DIR (default: FIELD_SIM_OUTPUT_DIR or current directory)
    #[arg(short = 'e', long = "export", value_name = "DIR", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Render the field as SVG (file, or directory for a timestamped name)
    #[arg(long = "svg")]
    pub svg: Option<PathBuf>,

    /// Print preset positions for the batsman and exit
    #[arg(long = "list-presets")]
    pub list_presets: bool,
}

/// Custom fielder from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct CustomPlacement {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// `NAME:X:Y`; the name itself may contain colons
pub fn parse_custom(value: &str) -> Result<CustomPlacement, String> {
    let mut parts = value.rsplitn(3, ':');
    let (Some(y), Some(x), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected NAME:X:Y, got '{value}'"));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err("fielder name must not be empty".to_string());
    }
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid x '{x}': {e}"))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid y '{y}': {e}"))?;
    Ok(CustomPlacement {
        name: name.to_string(),
        x,
        y,
    })
}
