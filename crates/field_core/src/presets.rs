use crate::{
    constants::FIELD_RADIUS,
    geometry::{Point, clip_to_circle, mirror_horizontal},
    types::{Handedness, Positions},
};

/// Named fielding position (right-handed orientation)
#[derive(Debug, Clone, Copy)]
pub struct PresetEntry {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
}

impl PresetEntry {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

const fn preset(name: &'static str, x: f64, y: f64) -> PresetEntry {
    PresetEntry { name, x, y }
}

/// Reference coordinates for a right-handed batsman [yd]
/// (+x = off side, +y = bowler's end)
pub const PRESET_CATALOG: &[PresetEntry] = &[
    preset("Wicketkeeper", 5.0, -28.0),
    preset("First Slip", 12.0, -21.0),
    preset("Second Slip", 15.0, -20.0),
    preset("Third Slip", 18.0, -18.0),
    preset("Gully", 26.0, -15.0),
    preset("Leg Slip", -12.0, -21.0),
    preset("Silly Point", 18.0, -9.0),
    preset("Short Leg", -15.0, -7.0),
    preset("Point", 26.0, -10.0),
    preset("Cover", 24.0, 0.0),
    preset("Mid-Off", 26.0, 14.0),
    preset("Mid-On", -26.0, 14.0),
    preset("Mid-Wicket", -27.0, 0.0),
    preset("Square Leg", -27.0, -11.0),
    preset("Short Fine Leg", -20.0, -20.0),
    preset("Third Man", 40.0, -35.0),
    preset("Deep Cover", 45.0, 15.0),
    preset("Long Off", 45.0, 35.0),
    preset("Long On", -45.0, 35.0),
    preset("Deep Mid-Wicket", -40.0, 15.0),
    preset("Deep Square Leg", -40.0, -5.0),
    preset("Fine Leg", -35.0, -25.0),
    preset("Bowler", 0.0, 28.0),
];

pub fn preset_by_name(name: &str) -> Option<&'static PresetEntry> {
    PRESET_CATALOG.iter().find(|entry| entry.name == name)
}

/// Catalog names in listing order
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESET_CATALOG.iter().map(|entry| entry.name)
}

/// Single catalog point after mirroring for `handedness` and clipping to `field_radius`.
pub fn adjusted_preset(name: &str, handedness: Handedness, field_radius: f64) -> Option<Point> {
    preset_by_name(name).map(|entry| adjust(entry.point(), handedness, field_radius))
}

/// Whole catalog mirrored for `handedness` and clipped to the standard boundary.
pub fn adjusted_presets(handedness: Handedness) -> Positions {
    adjusted_presets_within(handedness, FIELD_RADIUS)
}

pub fn adjusted_presets_within(handedness: Handedness, field_radius: f64) -> Positions {
    PRESET_CATALOG
        .iter()
        .map(|entry| {
            (
                entry.name.to_string(),
                adjust(entry.point(), handedness, field_radius),
            )
        })
        .collect()
}

#[inline]
fn adjust(point: Point, handedness: Handedness, field_radius: f64) -> Point {
    let oriented = if handedness.is_mirrored() {
        mirror_horizontal(point)
    } else {
        point
    };
    clip_to_circle(oriented, field_radius)
}
