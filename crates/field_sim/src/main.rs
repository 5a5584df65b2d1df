mod cli;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use cli::{Args, CustomPlacement};
use field_core::{
    Config, RenderOptions, Session, Snapshot, Verdict, output_dir_from_env,
    presets::adjusted_presets_within, save_field_svg,
};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

const EXIT_ILLEGAL: i32 = 2;

fn main() {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();
    match run(&args) {
        Ok(verdict) if verdict.is_legal => std::process::exit(0),
        Ok(_) => std::process::exit(EXIT_ILLEGAL),
        Err(e) => {
            error!("Error: {e}");
            for cause in e.chain().skip(1) {
                error!("  caused by: {cause}");
            }
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<Verdict> {
    let mut config = load_config(&args.config)?;
    if let Some(handedness) = args.handedness {
        config.session.handedness = handedness;
    }
    let mut session = Session::new(config)?;

    if args.list_presets {
        list_presets(&session);
        return Ok(session.verdict());
    }

    apply_placements(&mut session, args)?;

    if let Some(handedness) = args.switch_to
        && session.sync_handedness(handedness)
    {
        info!("Switched to {handedness} batsman, field mirrored");
    }

    let format = args
        .format
        .clone()
        .unwrap_or_else(|| session.config().session.format.clone());
    session.set_match(format, args.overs);

    let verdict = session.verdict();
    print_field(&session, &verdict);

    if let Some(ref export) = args.export {
        let dir = match export {
            Some(dir) => dir.clone(),
            None => output_dir_from_env()?.unwrap_or_else(|| PathBuf::from(".")),
        };
        let path = session
            .state()
            .export_snapshot()
            .write_to_dir(&dir)
            .with_context(|| format!("exporting field setup to {}", dir.display()))?;
        info!("Field setup saved to: {}", path.display());
    }

    if let Some(ref svg) = args.svg {
        let path = svg_path(svg);
        save_field_svg(
            &path,
            session.state().positions(),
            &verdict,
            &session.config().field,
            &RenderOptions::default(),
        )
        .with_context(|| format!("rendering field to {}", path.display()))?;
        info!("Field diagram saved to: {}", path.display());
    }

    Ok(verdict)
}

fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        let config = Config::load_from_file(path)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    } else {
        warn!(
            "Config file not found: {}, using default settings",
            path.display()
        );
        Ok(Config::default())
    }
}

/// import → reset → presets → custom → remove
fn apply_placements(session: &mut Session, args: &Args) -> Result<()> {
    if let Some(ref path) = args.import {
        let snapshot = Snapshot::read_from_path(path)
            .with_context(|| format!("importing {}", path.display()))?;
        info!("Imported {} fielders from {}", snapshot.len(), path.display());
        session.state_mut().load_snapshot(snapshot);
    }

    if args.reset {
        session.state_mut().reset();
    }

    for name in &args.presets {
        session.state_mut().add_preset(name)?;
    }

    for CustomPlacement { name, x, y } in &args.customs {
        let placed = session.state_mut().add_custom(name, *x, *y)?;
        if (placed.x, placed.y) != (*x, *y) {
            info!(
                "{name} pulled back to the boundary at ({:.2}, {:.2})",
                placed.x, placed.y
            );
        }
    }

    for name in &args.removes {
        if session.state_mut().remove(name).is_none() {
            warn!("No fielder named {name} to remove");
        }
    }
    Ok(())
}

fn list_presets(session: &Session) {
    let state = session.state();
    let presets = adjusted_presets_within(state.handedness(), state.field_radius());
    println!("Preset positions ({}):", state.handedness());
    for name in field_core::preset_names() {
        let p = presets[name];
        println!("  {:<16} ({:>7.2}, {:>7.2})", name, p.x, p.y);
    }
}

fn print_field(session: &Session, verdict: &Verdict) {
    let state = session.state();
    let context = session.context();
    println!(
        "Batsman: {} | Format: {} | Overs completed: {}",
        state.handedness(),
        context.format,
        context.overs_completed
    );
    let outside = session.outside_fielders();
    for (name, p) in state.positions() {
        let marker = if outside.contains(&name.as_str()) { "*" } else { " " };
        println!(
            "{marker} {:<16} ({:>7.2}, {:>7.2})  {:>5.1} yd",
            name,
            p.x,
            p.y,
            p.distance()
        );
    }
    println!("{}", verdict);
}

/// A directory gets a timestamped file name
fn svg_path(target: &Path) -> PathBuf {
    if target.is_dir() {
        let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
        target.join(format!("field_{timestamp}.svg"))
    } else {
        target.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_core::MatchFormat;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["field_sim", "--config", "nonexistent/field.toml"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_default_run_is_legal() {
        let verdict = run(&args(&[])).unwrap();
        assert!(verdict.is_legal);
        assert_eq!(verdict.outside_count, 0);
    }

    #[test]
    fn test_run_reports_illegal_powerplay() {
        let verdict = run(&args(&[
            "--format", "T20", "--overs", "3", "--preset", "Third Man", "--preset",
            "Long Off", "--preset", "Long On",
        ]))
        .unwrap();
        assert!(!verdict.is_legal);
        assert_eq!(verdict.outside_count, 3);
        assert_eq!(verdict.format, MatchFormat::T20);
    }

    #[test]
    fn test_unknown_preset_fails() {
        assert!(run(&args(&["--preset", "Cow Corner"])).is_err());
    }

    #[test]
    fn test_export_and_svg_written() {
        let dir = TempDir::new().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        let svg = dir.path().join("field.svg");
        let svg_str = svg.to_str().unwrap();
        run(&args(&[
            "--custom", "Sweeper:-20:60", "--export", dir_str, "--svg", svg_str,
        ]))
        .unwrap();

        let snapshot = Snapshot::read_from_path(dir.path().join("field_setup.json")).unwrap();
        assert_eq!(snapshot.len(), 3);
        assert!(snapshot.positions()["Sweeper"].distance() <= 50.0 + 1e-9);
        assert!(svg.exists());
    }

    #[test]
    fn test_import_then_switch() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.json");
        std::fs::write(&input, r#"{"Gully": [26, -15]}"#).unwrap();
        let out = dir.path().join("out");
        run(&args(&[
            "--import",
            input.to_str().unwrap(),
            "--switch-to",
            "left",
            "--export",
            out.to_str().unwrap(),
        ]))
        .unwrap();

        let snapshot = Snapshot::read_from_path(out.join("field_setup.json")).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.positions()["Gully"].x, -26.0);
    }

    #[test]
    fn test_svg_path_for_directory() {
        let dir = TempDir::new().unwrap();
        let path = svg_path(dir.path());
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("field_"));
        assert!(name.ends_with(".svg"));
    }
}
