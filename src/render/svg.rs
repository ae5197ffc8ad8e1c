use crate::domain::model::MatrixProfile;
use crate::render::layout::{LayoutModel, TextContent, TextSpec, ValueBinding};

/// Placeholder glyph for zero counts and an empty name. The life-path value
/// never goes through it.
pub const EM_DASH: &str = "—";

/// Composes the full SVG document for one render: background, every card's
/// rounded rectangle, then its centered text lines.
pub fn document(
    layout: &LayoutModel,
    name: &str,
    profile: &MatrixProfile,
    font_family: &str,
) -> String {
    let width = layout.width;
    let height = layout.height;
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        layout.background.hex()
    ));

    for region in &layout.regions {
        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{:.2}\" ry=\"{:.2}\" fill=\"{}\"/>",
            region.rect.x,
            region.rect.y,
            region.rect.w,
            region.rect.h,
            region.radius,
            region.radius,
            region.fill.hex()
        ));
        for line in &region.lines {
            svg.push_str(&text_svg(line, &region.text.hex(), name, profile, font_family));
        }
    }

    svg.push_str("</svg>");
    svg
}

/// A single text line centered in its sub-box: the anchor handles the
/// horizontal measurement, the baseline sits at center plus a cap-height
/// offset for the vertical one.
fn text_svg(
    spec: &TextSpec,
    fill: &str,
    name: &str,
    profile: &MatrixProfile,
    font_family: &str,
) -> String {
    let content = match &spec.content {
        TextContent::Literal(text) => text.clone(),
        TextContent::Value(binding) => value_text(*binding, name, profile),
    };
    let baseline = spec.rect.center_y() + spec.font_px * 0.35;

    format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{:.1}\" fill=\"{}\">{}</text>",
        spec.rect.center_x(),
        baseline,
        escape_xml(font_family),
        spec.font_px,
        fill,
        escape_xml(&content)
    )
}

fn value_text(binding: ValueBinding, name: &str, profile: &MatrixProfile) -> String {
    match binding {
        ValueBinding::Name => {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                EM_DASH.to_string()
            } else {
                trimmed.to_string()
            }
        }
        ValueBinding::BirthDate => profile.date.format_dmy(),
        ValueBinding::LifePath => profile.life_path.to_string(),
        ValueBinding::SectorCount(sector) => dash_if_zero(profile.counts.count(sector)),
        ValueBinding::Indicator(indicator) => dash_if_zero(profile.indicators.value(indicator)),
    }
}

fn dash_if_zero(value: u32) -> String {
    if value == 0 {
        EM_DASH.to_string()
    } else {
        value.to_string()
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
