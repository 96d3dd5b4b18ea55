use crate::error::ApiError;
use crate::tree::grammar::TreeNode;

const FONT_SIZE: f32 = 14.0;
const CHAR_WIDTH: f32 = 8.5;
const LEVEL_HEIGHT: f32 = 52.0;
const NODE_GAP: f32 = 18.0;
const MARGIN: f32 = 16.0;
const MIN_NODE_WIDTH: f32 = 30.0;

/// Raster scale applied when converting the vector layout to pixels.
const RASTER_SCALE: f32 = 2.0;
/// 300 DPI expressed as pixels per meter for the PNG pHYs chunk.
const PIXELS_PER_METER: u32 = 11811;

struct Canvas {
    lines: Vec<(f32, f32, f32, f32)>,
    labels: Vec<(f32, f32, String)>,
}

/// Render a parse tree to PNG bytes, entirely in memory: layout -> SVG
/// document -> rasterized pixmap -> PNG with DPI metadata.
pub fn render_png(tree: &TreeNode) -> Result<Vec<u8>, ApiError> {
    let mut canvas = Canvas {
        lines: Vec::new(),
        labels: Vec::new(),
    };

    let tree_width = measure(tree);
    let tree_depth = depth(tree);
    place(tree, MARGIN, 0, &mut canvas);

    let width = tree_width + 2.0 * MARGIN;
    let height = tree_depth as f32 * LEVEL_HEIGHT + 2.0 * MARGIN + FONT_SIZE;

    let svg = to_svg(&canvas, width, height);
    rasterize(&svg)
}

fn text_width(text: &str) -> f32 {
    (text.chars().count() as f32 * CHAR_WIDTH).max(MIN_NODE_WIDTH)
}

/// Width a subtree needs, including inter-sibling gaps.
fn measure(node: &TreeNode) -> f32 {
    match node {
        TreeNode::Leaf { word, tag } => text_width(word).max(text_width(tag)) + NODE_GAP,
        TreeNode::Phrase { label, children } => {
            let children_width: f32 = children.iter().map(measure).sum();
            children_width.max(text_width(label) + NODE_GAP)
        }
    }
}

/// Levels of text this subtree occupies. A leaf takes two: the tag row and
/// the word row under it.
fn depth(node: &TreeNode) -> usize {
    match node {
        TreeNode::Leaf { .. } => 2,
        TreeNode::Phrase { children, .. } => {
            1 + children.iter().map(depth).max().unwrap_or(0)
        }
    }
}

/// Place a subtree starting at `x`, on text row `level`, and record its
/// labels and connector lines. Returns the x coordinate of the node center.
fn place(node: &TreeNode, x: f32, level: usize, canvas: &mut Canvas) -> f32 {
    let y = MARGIN + level as f32 * LEVEL_HEIGHT + FONT_SIZE;

    match node {
        TreeNode::Leaf { word, tag } => {
            let width = measure(node);
            let cx = x + width / 2.0;
            let word_y = y + LEVEL_HEIGHT;
            canvas.labels.push((cx, y, tag.clone()));
            canvas.labels.push((cx, word_y, word.clone()));
            canvas.lines.push((cx, y + 4.0, cx, word_y - FONT_SIZE));
            cx
        }
        TreeNode::Phrase { label, children } => {
            let width = measure(node);
            let cx = x + width / 2.0;
            canvas.labels.push((cx, y, label.clone()));

            let children_width: f32 = children.iter().map(measure).sum();
            let mut child_x = x + (width - children_width) / 2.0;
            for child in children {
                let child_width = measure(child);
                let child_cx = place(child, child_x, level + 1, canvas);
                let child_y = MARGIN + (level + 1) as f32 * LEVEL_HEIGHT + FONT_SIZE;
                canvas
                    .lines
                    .push((cx, y + 4.0, child_cx, child_y - FONT_SIZE));
                child_x += child_width;
            }
            cx
        }
    }
}

fn to_svg(canvas: &Canvas, width: f32, height: f32) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}">"#
    );
    svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);

    for (x1, y1, x2, y2) in &canvas.lines {
        svg.push_str(&format!(
            r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="black" stroke-width="1"/>"#
        ));
    }
    for (x, y, text) in &canvas.labels {
        svg.push_str(&format!(
            r#"<text x="{x:.1}" y="{y:.1}" font-family="sans-serif" font-size="{FONT_SIZE}" text-anchor="middle">{}</text>"#,
            escape_xml(text)
        ));
    }
    svg.push_str("</svg>");
    svg
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn rasterize(svg: &str) -> Result<Vec<u8>, ApiError> {
    let mut options = resvg::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let rtree = resvg::usvg::Tree::from_str(svg, &options)
        .map_err(|err| ApiError::internal(format!("svg parse failed: {err}")))?;

    let size = rtree.size();
    let width = (size.width() * RASTER_SCALE).ceil() as u32;
    let height = (size.height() * RASTER_SCALE).ceil() as u32;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width.max(1), height.max(1))
        .ok_or_else(|| ApiError::internal("could not allocate pixmap"))?;
    pixmap.fill(resvg::tiny_skia::Color::WHITE);

    resvg::render(
        &rtree,
        resvg::tiny_skia::Transform::from_scale(RASTER_SCALE, RASTER_SCALE),
        &mut pixmap.as_mut(),
    );

    encode_png(&pixmap)
}

fn encode_png(pixmap: &resvg::tiny_skia::Pixmap) -> Result<Vec<u8>, ApiError> {
    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: PIXELS_PER_METER,
            yppu: PIXELS_PER_METER,
            unit: png::Unit::Meter,
        }));
        let mut writer = encoder
            .write_header()
            .map_err(|err| ApiError::internal(format!("png header failed: {err}")))?;
        writer
            .write_image_data(&rgba)
            .map_err(|err| ApiError::internal(format!("png encode failed: {err}")))?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

    fn leaf(word: &str, tag: &str) -> TreeNode {
        TreeNode::Leaf {
            word: word.to_string(),
            tag: tag.to_string(),
        }
    }

    #[test]
    fn renders_png_bytes() {
        let tree = TreeNode::Phrase {
            label: "S".to_string(),
            children: vec![
                TreeNode::Phrase {
                    label: "NP".to_string(),
                    children: vec![leaf("The", "DT"), leaf("dog", "NN")],
                },
                leaf("barks", "VBZ"),
            ],
        };

        let bytes = render_png(&tree).unwrap();
        assert_eq!(&bytes[..4], &PNG_MAGIC);
    }

    #[test]
    fn renders_bare_root() {
        let tree = TreeNode::Phrase {
            label: "S".to_string(),
            children: Vec::new(),
        };
        let bytes = render_png(&tree).unwrap();
        assert_eq!(&bytes[..4], &PNG_MAGIC);
    }

    #[test]
    fn escapes_markup_in_tokens() {
        let tree = TreeNode::Phrase {
            label: "S".to_string(),
            children: vec![leaf("<tag>", "SYM"), leaf("a&b", "NN")],
        };
        let bytes = render_png(&tree).unwrap();
        assert_eq!(&bytes[..4], &PNG_MAGIC);
    }
}
