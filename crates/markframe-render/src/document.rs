//! Markdown parsing and style-to-role mapping.
//!
//! Parsing is delegated to pulldown-cmark; this module adapts its event
//! stream into a flat sequence of typed [`Block`]s and then maps the
//! effective style configuration onto each block by role:
//!
//! - heading (any level 1-6) receives the `heading` style group
//! - paragraph receives the `content` style group
//! - pass-through kinds (lists, code blocks, rules) receive no
//!   role-specific style and render in their default presentation
//!
//! The tree root carries the `container` style group. Empty input is not an
//! error: it renders as an empty, still-styled container.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::compose::EffectiveStyle;
use crate::style::StyleGroup;

/// A run of inline text with its formatting flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub text: String,
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            ..Span::default()
        }
    }
}

/// A block-level node produced by the markup parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, spans: Vec<Span> },
    Paragraph { spans: Vec<Span> },
    List { ordered: bool, items: Vec<Vec<Span>> },
    CodeBlock { text: String },
    Rule,
}

/// The structural classification used to select a style group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    Paragraph,
    Passthrough,
}

impl Block {
    pub fn role(&self) -> Role {
        match self {
            Block::Heading { .. } => Role::Heading,
            Block::Paragraph { .. } => Role::Paragraph,
            Block::List { .. } | Block::CodeBlock { .. } | Block::Rule => Role::Passthrough,
        }
    }
}

/// A block paired with the style group its role selected.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledBlock {
    pub block: Block,
    pub style: StyleGroup,
}

/// The styled structural representation of a document, ready for display
/// or capture.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualTree {
    /// Style applied to the whole document surface.
    pub container: StyleGroup,
    /// Styled blocks in document order.
    pub blocks: Vec<StyledBlock>,
}

impl VisualTree {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Parses markup source into typed blocks.
///
/// Tables and strikethrough are enabled to match common markdown usage;
/// table rows surface as plain paragraphs, strikethrough renders as plain
/// text. Inline and block HTML is ignored.
pub fn parse(source: &str) -> Vec<Block> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);

    let mut blocks = Vec::new();
    let mut spans: Vec<Span> = Vec::new();
    let mut strong_depth = 0usize;
    let mut emphasis_depth = 0usize;
    let mut heading_level: Option<u8> = None;
    let mut code_block: Option<String> = None;
    let mut list_stack: Vec<(bool, Vec<Vec<Span>>)> = Vec::new();

    fn flush_paragraph(spans: &mut Vec<Span>, blocks: &mut Vec<Block>) {
        if !spans.is_empty() {
            blocks.push(Block::Paragraph {
                spans: std::mem::take(spans),
            });
        }
    }

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush_paragraph(&mut spans, &mut blocks);
                heading_level = Some(level as u8);
            }
            Event::End(TagEnd::Heading(_)) => {
                let level = heading_level.take().unwrap_or(1);
                blocks.push(Block::Heading {
                    level,
                    spans: std::mem::take(&mut spans),
                });
            }
            Event::End(TagEnd::Paragraph) => {
                // Paragraphs inside list items accumulate into the item.
                if list_stack.is_empty() {
                    flush_paragraph(&mut spans, &mut blocks);
                } else {
                    let needs_space = spans.last().is_some_and(|s| !s.text.ends_with(' '));
                    if needs_space {
                        spans.push(Span::plain(" "));
                    }
                }
            }
            Event::Start(Tag::List(start)) => {
                if list_stack.is_empty() {
                    flush_paragraph(&mut spans, &mut blocks);
                } else if !spans.is_empty() {
                    // A nested list interrupts the parent item's text; commit
                    // what we have as its own item row.
                    if let Some((_, items)) = list_stack.last_mut() {
                        items.push(std::mem::take(&mut spans));
                    }
                }
                list_stack.push((start.is_some(), Vec::new()));
            }
            Event::End(TagEnd::List(_)) => {
                if let Some((ordered, items)) = list_stack.pop() {
                    // Nested list items flatten into the parent list.
                    if let Some((_, parent_items)) = list_stack.last_mut() {
                        parent_items.extend(items);
                    } else {
                        blocks.push(Block::List { ordered, items });
                    }
                }
            }
            Event::End(TagEnd::Item) => {
                if !spans.is_empty() {
                    if let Some((_, items)) = list_stack.last_mut() {
                        items.push(std::mem::take(&mut spans));
                    }
                }
            }
            Event::Start(Tag::CodeBlock(_)) => {
                flush_paragraph(&mut spans, &mut blocks);
                code_block = Some(String::new());
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(text) = code_block.take() {
                    blocks.push(Block::CodeBlock { text });
                }
            }
            Event::Start(Tag::Strong) => strong_depth += 1,
            Event::End(TagEnd::Strong) => strong_depth = strong_depth.saturating_sub(1),
            Event::Start(Tag::Emphasis) => emphasis_depth += 1,
            Event::End(TagEnd::Emphasis) => emphasis_depth = emphasis_depth.saturating_sub(1),
            Event::Text(text) => {
                if let Some(code) = code_block.as_mut() {
                    code.push_str(&text);
                } else {
                    spans.push(Span {
                        text: text.to_string(),
                        strong: strong_depth > 0,
                        emphasis: emphasis_depth > 0,
                        code: false,
                    });
                }
            }
            Event::Code(text) => {
                spans.push(Span {
                    text: text.to_string(),
                    strong: strong_depth > 0,
                    emphasis: emphasis_depth > 0,
                    code: true,
                });
            }
            Event::SoftBreak | Event::HardBreak => {
                spans.push(Span {
                    text: " ".to_string(),
                    strong: strong_depth > 0,
                    emphasis: emphasis_depth > 0,
                    code: false,
                });
            }
            Event::Rule => {
                flush_paragraph(&mut spans, &mut blocks);
                blocks.push(Block::Rule);
            }
            Event::End(TagEnd::TableCell) => {
                if spans.last().map(|s| !s.text.ends_with(' ')).unwrap_or(false) {
                    spans.push(Span::plain(" "));
                }
            }
            Event::End(TagEnd::TableHead) | Event::End(TagEnd::TableRow) => {
                flush_paragraph(&mut spans, &mut blocks);
            }
            // Anything else (block quotes open/close, html, footnotes) is
            // pass-through: its text content still arrives as Text events.
            _ => {}
        }
    }

    // Input without a closing block terminator still flushes.
    flush_paragraph(&mut spans, &mut blocks);

    blocks
}

/// Renders markup source under an effective style configuration.
///
/// This is pure style-to-role mapping: the container group lands on the
/// tree root, heading blocks get the heading group, paragraphs get the
/// content group, and pass-through blocks get an empty group.
pub fn render(source: &str, config: &EffectiveStyle) -> VisualTree {
    let blocks = parse(source)
        .into_iter()
        .map(|block| {
            let style = match block.role() {
                Role::Heading => config.heading.clone(),
                Role::Paragraph => config.content.clone(),
                Role::Passthrough => StyleGroup::default(),
            };
            StyledBlock { block, style }
        })
        .collect();

    VisualTree {
        container: config.container.clone(),
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::overrides::OverrideSettings;
    use crate::template::find_template;

    fn config() -> EffectiveStyle {
        compose(find_template("classic"), &OverrideSettings::default())
    }

    fn text_of(spans: &[Span]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_heading_levels() {
        let blocks = parse("# One\n\n###### Six");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));
        assert!(matches!(blocks[1], Block::Heading { level: 6, .. }));
    }

    #[test]
    fn test_parse_paragraph_with_inline_styles() {
        let blocks = parse("This is **bold** and _italic_ and `code`.");
        let Block::Paragraph { spans } = &blocks[0] else {
            panic!("expected paragraph, got {:?}", blocks[0]);
        };

        let bold = spans.iter().find(|s| s.strong).unwrap();
        assert_eq!(bold.text, "bold");
        let italic = spans.iter().find(|s| s.emphasis).unwrap();
        assert_eq!(italic.text, "italic");
        let code = spans.iter().find(|s| s.code).unwrap();
        assert_eq!(code.text, "code");
    }

    #[test]
    fn test_parse_unordered_and_ordered_lists() {
        let blocks = parse("- one\n- two\n\n1. first\n2. second\n");
        assert_eq!(blocks.len(), 2);

        let Block::List { ordered, items } = &blocks[0] else {
            panic!("expected list");
        };
        assert!(!ordered);
        assert_eq!(items.len(), 2);
        assert_eq!(text_of(&items[0]), "one");

        let Block::List { ordered, items } = &blocks[1] else {
            panic!("expected list");
        };
        assert!(*ordered);
        assert_eq!(text_of(&items[1]), "second");
    }

    #[test]
    fn test_parse_code_block() {
        let blocks = parse("```\nlet x = 1;\nlet y = 2;\n```");
        let Block::CodeBlock { text } = &blocks[0] else {
            panic!("expected code block");
        };
        assert_eq!(text, "let x = 1;\nlet y = 2;\n");
    }

    #[test]
    fn test_parse_rule() {
        let blocks = parse("above\n\n---\n\nbelow");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[1], Block::Rule));
    }

    #[test]
    fn test_parse_empty_source() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\n  ").is_empty());
    }

    #[test]
    fn test_soft_break_becomes_space() {
        let blocks = parse("line one\nline two");
        let Block::Paragraph { spans } = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(text_of(spans), "line one line two");
    }

    // =========================================================================
    // Style-to-role mapping
    // =========================================================================

    #[test]
    fn test_render_maps_roles_to_style_groups() {
        let config = config();
        let tree = render("# Title\n\nBody text.\n\n- item\n", &config);

        assert_eq!(tree.container, config.container);
        assert_eq!(tree.blocks.len(), 3);

        assert_eq!(tree.blocks[0].block.role(), Role::Heading);
        assert_eq!(tree.blocks[0].style, config.heading);

        assert_eq!(tree.blocks[1].block.role(), Role::Paragraph);
        assert_eq!(tree.blocks[1].style, config.content);

        assert_eq!(tree.blocks[2].block.role(), Role::Passthrough);
        assert!(tree.blocks[2].style.is_empty());
    }

    #[test]
    fn test_all_heading_levels_share_one_style_group() {
        let config = config();
        let tree = render("# a\n## b\n### c\n#### d\n##### e\n###### f\n", &config);
        assert_eq!(tree.blocks.len(), 6);
        for styled in &tree.blocks {
            assert_eq!(styled.style, config.heading);
        }
    }

    #[test]
    fn test_empty_source_renders_styled_empty_tree() {
        let config = config();
        let tree = render("", &config);
        assert!(tree.is_empty());
        assert_eq!(tree.container, config.container);
    }
}
