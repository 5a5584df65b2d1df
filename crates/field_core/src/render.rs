use crate::{
    config::FieldConfig,
    error::{FieldError, Result},
    rules::Verdict,
    types::Positions,
};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

/// SVG drawing options (px)
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub scale_px_per_yd: f64,
    pub margin_px: f64,
    pub banner_height_px: f64,
    pub font_size_px: f64,
    pub marker_radius_px: f64,
    pub label_offset_yd: (f64, f64),
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale_px_per_yd: 6.0,
            margin_px: 40.0,
            banner_height_px: 36.0,
            font_size_px: 10.0,
            marker_radius_px: 4.0,
            label_offset_yd: (2.0, 2.0),
            title: "Cricket Field Layout".to_string(),
        }
    }
}

/// Escape text placed inside SVG elements
pub fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Field, inner circle, pitch, fielders and verdict banner as SVG
pub fn render_field_svg<W: Write>(
    out: &mut W,
    positions: &Positions,
    verdict: &Verdict,
    field: &FieldConfig,
    opt: &RenderOptions,
) -> Result<()> {
    let s = opt.scale_px_per_yd;
    let m = opt.margin_px;
    let r = field.field_radius;
    let side = 2.0 * r * s + 2.0 * m;
    let w = side.ceil() as i64;
    let h = (side + opt.banner_height_px).ceil() as i64;

    // field yards → px, y axis up
    let sx = |x: f64| -> f64 { m + (x + r) * s };
    let sy = |y: f64| -> f64 { m + (r - y) * s };

    writeln!(
        out,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"##
    )?;
    writeln!(
        out,
        r##"<rect x="0" y="0" width="{w}" height="{h}" fill="white"/>"##
    )?;
    writeln!(
        out,
        r##"<text x="{x}" y="{y}" font-size="{fs}" text-anchor="middle" font-family="sans-serif">{t}</text>"##,
        x = w as f64 / 2.0,
        y = m * 0.6,
        fs = opt.font_size_px * 1.6,
        t = xml_escape(&opt.title)
    )?;

    // boundary
    writeln!(
        out,
        r##"<circle cx="{cx}" cy="{cy}" r="{rr}" fill="green" fill-opacity="0.3" stroke="black"/>"##,
        cx = sx(0.0),
        cy = sy(0.0),
        rr = r * s
    )?;
    // 30-yard circle
    writeln!(
        out,
        r##"<circle cx="{cx}" cy="{cy}" r="{rr}" fill="none" stroke="white" stroke-width="1.5" stroke-dasharray="6 4"/>"##,
        cx = sx(0.0),
        cy = sy(0.0),
        rr = field.inner_radius * s
    )?;
    // pitch
    writeln!(
        out,
        r##"<rect x="{x}" y="{y}" width="{pw}" height="{ph}" fill="#8b5a2b"/>"##,
        x = sx(-field.pitch_width / 2.0),
        y = sy(field.pitch_length / 2.0),
        pw = field.pitch_width * s,
        ph = field.pitch_length * s
    )?;

    let (dx, dy) = opt.label_offset_yd;
    for (name, p) in positions {
        writeln!(
            out,
            r##"<circle cx="{cx:.2}" cy="{cy:.2}" r="{mr}" fill="red" stroke="black" stroke-width="1.2"/>"##,
            cx = sx(p.x),
            cy = sy(p.y),
            mr = opt.marker_radius_px
        )?;
        let label = xml_escape(name);
        // approximate text box, no font metrics available
        let box_w = label.chars().count() as f64 * opt.font_size_px * 0.6 + 4.0;
        let box_h = opt.font_size_px + 4.0;
        let lx = sx(p.x + dx);
        let ly = sy(p.y + dy);
        writeln!(
            out,
            r##"<rect x="{x:.2}" y="{y:.2}" width="{bw:.2}" height="{bh:.2}" fill="black" fill-opacity="0.5"/>"##,
            x = lx - 2.0,
            y = ly - opt.font_size_px - 1.0,
            bw = box_w,
            bh = box_h
        )?;
        writeln!(
            out,
            r##"<text x="{x:.2}" y="{y:.2}" font-size="{fs}" fill="white" font-family="sans-serif">{label}</text>"##,
            x = lx,
            y = ly,
            fs = opt.font_size_px
        )?;
    }

    let banner_color = if verdict.is_legal { "#1e7e34" } else { "#c0392b" };
    writeln!(
        out,
        r##"<text x="{x}" y="{y}" font-size="{fs}" text-anchor="middle" fill="{c}" font-family="sans-serif">{t}</text>"##,
        x = w as f64 / 2.0,
        y = side + opt.banner_height_px / 2.0,
        fs = opt.font_size_px * 1.4,
        c = banner_color,
        t = xml_escape(&verdict.banner())
    )?;
    writeln!(out, "</svg>")?;
    Ok(())
}

/// Write the SVG to `path`, creating parent directories
pub fn save_field_svg<P: AsRef<Path>>(
    path: P,
    positions: &Positions,
    verdict: &Verdict,
    field: &FieldConfig,
    opt: &RenderOptions,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| FieldError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let file = File::create(path).map_err(|e| FieldError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut f = BufWriter::new(file);
    render_field_svg(&mut f, positions, verdict, field, opt)?;
    f.flush()?;
    Ok(())
}
