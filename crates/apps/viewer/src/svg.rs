use projection::PathCommand;
use render::{ScenePaint, Viewport};

const OCEAN_FILL: &str = "#e8f0f8";
const STROKE: &str = "#666666";

/// Serializes one rendered frame as a standalone SVG document.
pub fn scene_to_svg(paint: &ScenePaint, viewport: Viewport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" \
viewBox=\"0 0 {:.0} {:.0}\">\n",
        viewport.width, viewport.height, viewport.width, viewport.height
    ));

    if let Some(outline) = &paint.outline {
        out.push_str(&format!(
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" stroke=\"{}\"/>\n",
            outline.center.x, outline.center.y, outline.radius, OCEAN_FILL, STROKE
        ));
    }

    for feature in &paint.features {
        if feature.path.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "  <path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"0.5\"/>\n",
            path_data(&feature.path.commands),
            feature.fill,
            STROKE
        ));
    }

    out.push_str("</svg>\n");
    out
}

fn path_data(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for command in commands {
        if !d.is_empty() {
            d.push(' ');
        }
        match command {
            PathCommand::MoveTo(p) => d.push_str(&format!("M{:.2},{:.2}", p.x, p.y)),
            PathCommand::LineTo(p) => d.push_str(&format!("L{:.2},{:.2}", p.x, p.y)),
            PathCommand::Close => d.push('Z'),
        }
    }
    d
}
