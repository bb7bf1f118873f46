//! Vector serialization of a visual tree.
//!
//! Builds a standalone SVG document by pure string building: a background
//! surface (fill, border, corner radius), then each styled block laid out
//! top to bottom with greedy word wrapping. Text metrics are estimated from
//! average glyph advance ratios, which keeps the serializer dependency-free
//! and deterministic; the result is resolution-independent by construction.
//!
//! Box shadows are carried in the style model but not painted here: a
//! drop shadow on the outermost surface would fall entirely outside the
//! canvas.

use std::fmt::Write as _;

use markframe_render::{Block, Color, Span, StyleGroup, VisualTree};

/// Surface width used when the container sets no max-width.
pub const FALLBACK_WIDTH: u32 = 800;

const FALLBACK_FONT_SIZE: f32 = 16.0;
const FALLBACK_LINE_HEIGHT: f32 = 1.5;
const HEADING_LINE_HEIGHT: f32 = 1.3;
const CODE_LINE_HEIGHT: f32 = 1.45;

/// Average glyph advance relative to font size.
const CHAR_WIDTH_RATIO: f32 = 0.55;
const MONO_CHAR_WIDTH_RATIO: f32 = 0.62;
const SPACE_WIDTH_RATIO: f32 = 0.28;

/// Per-level heading size multipliers (h1..h6), matching the conventional
/// browser defaults templates are written against.
const HEADING_SCALE: [f32; 6] = [2.0, 1.5, 1.17, 1.0, 0.83, 0.67];

const LIST_INDENT: f32 = 8.0;
const CODE_PADDING: f32 = 12.0;
const CODE_BACKGROUND: &str = "#f5f5f5";
const RULE_COLOR: &str = "#cccccc";

/// Resolved typographic defaults from the container scope.
struct BaseStyle {
    font_family: String,
    font_size: f32,
    line_height: f32,
    color: Color,
}

/// One styled run within a laid-out line.
#[derive(Debug, Clone)]
struct Run {
    text: String,
    bold: bool,
    italic: bool,
    mono: bool,
}

type Line = Vec<Run>;

/// Serializes the tree into a complete SVG document.
pub fn render_svg(tree: &VisualTree) -> String {
    let container = &tree.container;
    let width = container.max_width.unwrap_or(FALLBACK_WIDTH) as f32;
    let pad = container.padding.unwrap_or(0) as f32;
    let content_width = (width - 2.0 * pad).max(1.0);

    let base = BaseStyle {
        font_family: container
            .font_family
            .clone()
            .unwrap_or_else(|| "sans-serif".to_string()),
        font_size: container.font_size.map(|v| v as f32).unwrap_or(FALLBACK_FONT_SIZE),
        line_height: container.line_height.unwrap_or(FALLBACK_LINE_HEIGHT),
        color: container.color.unwrap_or(Color::BLACK),
    };

    let mut body = String::new();
    let mut y = pad;

    for styled in &tree.blocks {
        match &styled.block {
            Block::Heading { level, spans } => {
                heading_block(&mut body, *level, spans, &styled.style, &base, pad, &mut y, content_width, width);
            }
            Block::Paragraph { spans } => {
                paragraph_block(&mut body, spans, &styled.style, &base, pad, &mut y, content_width);
            }
            Block::List { ordered, items } => {
                list_block(&mut body, *ordered, items, &base, pad, &mut y, content_width);
            }
            Block::CodeBlock { text } => {
                code_block(&mut body, text, &base, pad, &mut y, content_width);
            }
            Block::Rule => {
                y += base.font_size * 0.5;
                let _ = writeln!(
                    body,
                    r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
                    pad,
                    y,
                    width - pad,
                    y,
                    RULE_COLOR
                );
                y += base.font_size * 0.5;
            }
        }
    }

    let height = (y + pad).ceil().max(1.0) as u32;
    let width = width as u32;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    background(&mut svg, container, width as f32, height as f32);
    svg.push_str(&body);
    svg.push_str("</svg>\n");
    svg
}

/// Paints the container surface: background fill, then an inset border
/// stroke when the container defines one.
fn background(svg: &mut String, container: &StyleGroup, width: f32, height: f32) {
    let fill = container
        .background_color
        .map(|c| c.to_string())
        .unwrap_or_else(|| "#ffffff".to_string());
    let radius = container.border_radius.unwrap_or(0);
    let _ = writeln!(
        svg,
        r#"<rect x="0" y="0" width="{width:.0}" height="{height:.0}" rx="{radius}" fill="{fill}"/>"#
    );

    if let Some((stroke_width, stroke)) = container.border.as_deref().and_then(parse_border) {
        let inset = stroke_width / 2.0;
        let _ = writeln!(
            svg,
            r#"<rect x="{inset:.1}" y="{inset:.1}" width="{:.1}" height="{:.1}" rx="{radius}" fill="none" stroke="{stroke}" stroke-width="{stroke_width:.1}"/>"#,
            width - stroke_width,
            height - stroke_width,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn heading_block(
    body: &mut String,
    level: u8,
    spans: &[Span],
    style: &StyleGroup,
    base: &BaseStyle,
    pad: f32,
    y: &mut f32,
    content_width: f32,
    surface_width: f32,
) {
    let scale = HEADING_SCALE[usize::from(level.clamp(1, 6)) - 1];
    let font_size = style
        .font_size
        .map(|v| v as f32)
        .unwrap_or(base.font_size * scale);
    let line_height = style.line_height.unwrap_or(HEADING_LINE_HEIGHT);
    let color = style.color.unwrap_or(base.color);
    let family = style.font_family.as_deref().unwrap_or(&base.font_family);
    let weight = style.font_weight.unwrap_or(700);

    let accent = style.border_left.as_deref().and_then(parse_border);
    let pad_left = style.padding_left.unwrap_or(0) as f32;
    let indent = accent.as_ref().map(|(w, _)| *w).unwrap_or(0.0) + pad_left;

    let top = *y;
    let lines = wrap_spans(spans, font_size, (content_width - indent).max(1.0));
    let text_height = lines.len().max(1) as f32 * font_size * line_height;

    if let Some((accent_width, accent_color)) = accent {
        let _ = writeln!(
            body,
            r#"<rect x="{pad:.1}" y="{top:.1}" width="{accent_width:.1}" height="{text_height:.1}" fill="{accent_color}"/>"#
        );
    }

    emit_lines(body, &lines, pad + indent, y, family, font_size, line_height, color, Some(weight));

    if let Some(px) = style.padding_bottom {
        *y += px as f32;
    }
    if let Some((rule_width, rule_color)) = style.border_bottom.as_deref().and_then(parse_border) {
        let _ = writeln!(
            body,
            r#"<line x1="{pad:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{rule_color}" stroke-width="{rule_width:.1}"/>"#,
            *y,
            surface_width - pad,
            *y,
        );
        *y += rule_width;
    }
    *y += style
        .margin_bottom
        .map(|v| v as f32)
        .unwrap_or(font_size * 0.5);
}

fn paragraph_block(
    body: &mut String,
    spans: &[Span],
    style: &StyleGroup,
    base: &BaseStyle,
    pad: f32,
    y: &mut f32,
    content_width: f32,
) {
    let font_size = style.font_size.map(|v| v as f32).unwrap_or(base.font_size);
    let line_height = style.line_height.unwrap_or(base.line_height);
    let color = style.color.unwrap_or(base.color);
    let family = style.font_family.as_deref().unwrap_or(&base.font_family);

    let lines = wrap_spans(spans, font_size, content_width);
    emit_lines(body, &lines, pad, y, family, font_size, line_height, color, style.font_weight);

    *y += style.margin_bottom.map(|v| v as f32).unwrap_or(font_size);
}

fn list_block(
    body: &mut String,
    ordered: bool,
    items: &[Vec<Span>],
    base: &BaseStyle,
    pad: f32,
    y: &mut f32,
    content_width: f32,
) {
    for (index, item) in items.iter().enumerate() {
        let marker = if ordered {
            format!("{}. ", index + 1)
        } else {
            "\u{2022} ".to_string()
        };
        let mut spans = Vec::with_capacity(item.len() + 1);
        spans.push(Span {
            text: marker,
            ..Span::default()
        });
        spans.extend(item.iter().cloned());

        let lines = wrap_spans(&spans, base.font_size, (content_width - LIST_INDENT).max(1.0));
        emit_lines(
            body,
            &lines,
            pad + LIST_INDENT,
            y,
            &base.font_family,
            base.font_size,
            base.line_height,
            base.color,
            None,
        );
    }
    *y += base.font_size;
}

fn code_block(
    body: &mut String,
    text: &str,
    base: &BaseStyle,
    pad: f32,
    y: &mut f32,
    content_width: f32,
) {
    let font_size = base.font_size * 0.9;
    let char_width = font_size * MONO_CHAR_WIDTH_RATIO;
    let max_chars = (((content_width - 2.0 * CODE_PADDING) / char_width) as usize).max(1);

    let mut lines: Vec<String> = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            lines.push(String::new());
            continue;
        }
        let chars: Vec<char> = line.chars().collect();
        for chunk in chars.chunks(max_chars) {
            lines.push(chunk.iter().collect());
        }
    }

    let box_height = lines.len().max(1) as f32 * font_size * CODE_LINE_HEIGHT + 2.0 * CODE_PADDING;
    let _ = writeln!(
        body,
        r#"<rect x="{pad:.1}" y="{:.1}" width="{content_width:.1}" height="{box_height:.1}" rx="4" fill="{CODE_BACKGROUND}"/>"#,
        *y,
    );

    let mut text_y = *y + CODE_PADDING;
    for line in &lines {
        text_y += font_size * CODE_LINE_HEIGHT;
        if line.is_empty() {
            continue;
        }
        let _ = writeln!(
            body,
            r#"<text x="{:.1}" y="{:.1}" font-family="monospace" font-size="{font_size:.1}" fill="{}">{}</text>"#,
            pad + CODE_PADDING,
            text_y - font_size * 0.35,
            base.color,
            escape(line),
        );
    }

    *y += box_height + base.font_size;
}

/// Emits one `<text>` element per wrapped line and advances the cursor.
#[allow(clippy::too_many_arguments)]
fn emit_lines(
    body: &mut String,
    lines: &[Line],
    x: f32,
    y: &mut f32,
    family: &str,
    font_size: f32,
    line_height: f32,
    color: Color,
    weight: Option<u16>,
) {
    for line in lines {
        let baseline = *y + font_size;
        let mut text = String::new();
        let _ = write!(
            text,
            r#"<text x="{x:.1}" y="{baseline:.1}" font-family="{}" font-size="{font_size:.1}" fill="{color}""#,
            escape(family),
        );
        if let Some(weight) = weight {
            let _ = write!(text, r#" font-weight="{weight}""#);
        }
        text.push('>');
        for run in line {
            run_tspan(&mut text, run);
        }
        text.push_str("</text>");
        body.push_str(&text);
        body.push('\n');
        *y += font_size * line_height;
    }
}

fn run_tspan(out: &mut String, run: &Run) {
    if !run.bold && !run.italic && !run.mono {
        out.push_str(&escape(&run.text));
        return;
    }
    out.push_str("<tspan");
    if run.bold {
        out.push_str(r#" font-weight="700""#);
    }
    if run.italic {
        out.push_str(r#" font-style="italic""#);
    }
    if run.mono {
        out.push_str(r#" font-family="monospace""#);
    }
    out.push('>');
    out.push_str(&escape(&run.text));
    out.push_str("</tspan>");
}

/// Greedy word wrap over styled spans, estimating advance widths from
/// average glyph ratios. Spans that abut without whitespace stay glued
/// (e.g. inline code followed by punctuation).
fn wrap_spans(spans: &[Span], font_size: f32, max_width: f32) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut current: Line = Vec::new();
    let mut width = 0.0f32;
    let mut prev_ends_ws = true;

    let space_width = font_size * SPACE_WIDTH_RATIO;

    for span in spans {
        let ratio = if span.code {
            MONO_CHAR_WIDTH_RATIO
        } else {
            CHAR_WIDTH_RATIO
        };
        let char_width = font_size * ratio;
        let mut glue = !span.text.starts_with(char::is_whitespace) && !prev_ends_ws;

        for word in span.text.split_whitespace() {
            let word_width = word.chars().count() as f32 * char_width;
            let join = !current.is_empty();
            let advance = if join && !glue {
                space_width + word_width
            } else {
                word_width
            };

            if join && width + advance > max_width {
                lines.push(std::mem::take(&mut current));
                width = 0.0;
                glue = false;
            }

            let separator = if current.is_empty() || glue { "" } else { " " };
            push_word(&mut current, span, separator, word);
            width += if separator.is_empty() {
                word_width
            } else {
                space_width + word_width
            };
            glue = false;
        }

        prev_ends_ws =
            span.text.ends_with(char::is_whitespace) || span.text.trim().is_empty();
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn push_word(line: &mut Line, span: &Span, separator: &str, word: &str) {
    if let Some(last) = line.last_mut() {
        if last.bold == span.strong && last.italic == span.emphasis && last.mono == span.code {
            last.text.push_str(separator);
            last.text.push_str(word);
            return;
        }
        last.text.push_str(separator);
    }
    line.push(Run {
        text: word.to_string(),
        bold: span.strong,
        italic: span.emphasis,
        mono: span.code,
    });
}

/// Parses a CSS border shorthand like `"4px solid #5a67d8"` into width and
/// color. Colors pass through verbatim; SVG accepts the same hex and
/// functional notations.
fn parse_border(value: &str) -> Option<(f32, String)> {
    let mut parts = value.split_whitespace();
    let width = parts.next()?.trim_end_matches("px").parse::<f32>().ok()?;
    let color = value.split_whitespace().last()?.to_string();
    Some((width, color))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use markframe_render::{compose, find_template, render, OverrideSettings};

    fn classic_tree(source: &str) -> VisualTree {
        let style = compose(find_template("classic"), &OverrideSettings::default());
        render(source, &style)
    }

    #[test]
    fn test_svg_document_shape() {
        let svg = render_svg(&classic_tree("# Title\n\nBody text."));
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"width="800""#));
    }

    #[test]
    fn test_container_styling_is_painted() {
        let svg = render_svg(&classic_tree("hello"));
        // Background from overrides default, border from the template.
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(svg.contains(r##"stroke="#e0e0e0""##));
        assert!(svg.contains("Georgia, serif"));
    }

    #[test]
    fn test_heading_uses_heading_group() {
        let svg = render_svg(&classic_tree("# Title"));
        // Classic headings are #222222 with a bottom rule.
        assert!(svg.contains(r##"fill="#222222""##));
        assert!(svg.contains(r##"stroke="#e0e0e0""##));
    }

    #[test]
    fn test_modern_heading_accent_bar() {
        let style = compose(find_template("modern"), &OverrideSettings::default());
        let svg = render_svg(&render("# Title", &style));
        assert!(svg.contains(r##"fill="#5a67d8""##));
        assert!(svg.contains(r#"font-weight="700""#));
    }

    #[test]
    fn test_markup_text_is_escaped() {
        let svg = render_svg(&classic_tree("a < b & c > \"d\""));
        assert!(svg.contains("a &lt; b &amp; c &gt;"));
        assert!(!svg.contains("a < b"));
    }

    #[test]
    fn test_empty_tree_renders_styled_surface() {
        let svg = render_svg(&classic_tree(""));
        assert!(svg.contains("<rect"));
        assert!(!svg.contains("<text"));
        // Height collapses to the padding box (20px override default, twice).
        assert!(svg.contains(r#"height="40""#));
    }

    #[test]
    fn test_long_paragraph_wraps() {
        let source = "word ".repeat(120);
        let svg = render_svg(&classic_tree(&source));
        let text_lines = svg.matches("<text").count();
        assert!(text_lines > 1, "expected wrapping, got {text_lines} line(s)");
    }

    #[test]
    fn test_inline_styles_emit_tspans() {
        let svg = render_svg(&classic_tree("some **bold** and _italic_ and `code`"));
        assert!(svg.contains(r#"<tspan font-weight="700">bold"#));
        assert!(svg.contains(r#"<tspan font-style="italic">italic"#));
        assert!(svg.contains(r#"<tspan font-family="monospace">code"#));
    }

    #[test]
    fn test_parse_border_shorthand() {
        assert_eq!(
            parse_border("4px solid #5a67d8"),
            Some((4.0, "#5a67d8".to_string()))
        );
        assert_eq!(parse_border(""), None);
    }

    #[test]
    fn test_list_markers() {
        let svg = render_svg(&classic_tree("- alpha\n- beta\n\n1. one\n"));
        assert!(svg.contains('\u{2022}'));
        assert!(svg.contains("1. one"));
    }
}
