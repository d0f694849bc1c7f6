//! HTML renderer for pulldown-cmark events.
//!
//! Produces semantic HTML5. Text content is escaped on the way out; raw HTML
//! embedded in the markdown source passes through unchanged. Code blocks are
//! offered to the injected [`Highlighter`] before falling back to escaped
//! plain text.

use std::fmt::Write;

use pulldown_cmark::{Alignment, CodeBlockKind, Event, HeadingLevel, Tag, TagEnd};

use crate::highlight::Highlighter;

/// State for tracking code block rendering.
#[derive(Default)]
struct CodeBlockState {
    active: bool,
    /// Fence language hint (e.g. "rust", "sh").
    language: Option<String>,
    buffer: String,
}

impl CodeBlockState {
    fn start(&mut self, language: Option<String>) {
        self.active = true;
        self.language = language;
        self.buffer.clear();
    }

    fn end(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.language.take(), std::mem::take(&mut self.buffer))
    }
}

/// State for tracking table rendering.
#[derive(Default)]
struct TableState {
    in_head: bool,
    alignments: Vec<Alignment>,
    cell_index: usize,
}

impl TableState {
    fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
    }

    fn alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// State for capturing image alt text.
#[derive(Default)]
struct ImageState {
    active: bool,
    alt_text: String,
}

impl ImageState {
    fn start(&mut self) {
        self.active = true;
        self.alt_text.clear();
    }

    fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.alt_text)
    }
}

/// Renders pulldown-cmark events to semantic HTML5.
///
/// The renderer is single-use: feed one event stream to
/// [`render`](Self::render) and take the output.
pub struct HtmlRenderer<'h> {
    output: String,
    /// Stack of nested list types (true = ordered).
    list_stack: Vec<bool>,
    code: CodeBlockState,
    table: TableState,
    image: ImageState,
    /// URL and title buffered until the alt text is collected.
    pending_image: Option<(String, String)>,
    highlighter: &'h dyn Highlighter,
}

impl<'h> HtmlRenderer<'h> {
    /// Create a renderer that offers code blocks to `highlighter`.
    #[must_use]
    pub fn new(highlighter: &'h dyn Highlighter) -> Self {
        Self {
            output: String::with_capacity(4096),
            list_stack: Vec::new(),
            code: CodeBlockState::default(),
            table: TableState::default(),
            image: ImageState::default(),
            pending_image: None,
            highlighter,
        }
    }

    /// Write inline markup, dropping it while image alt text is collected.
    fn push_inline(&mut self, content: &str) {
        if !self.image.active {
            self.output.push_str(content);
        }
    }

    /// Render markdown events and return the HTML output.
    pub fn render<'a, I>(mut self, events: I) -> String
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }
        self.output
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                if self.image.active {
                    self.image.alt_text.push_str(&code);
                } else {
                    write!(self.output, "<code>{}</code>", escape_html(&code)).unwrap();
                }
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                if !self.image.active {
                    self.output.push_str(&html);
                }
            }
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => {
                if self.image.active {
                    self.image.alt_text.push(' ');
                } else {
                    self.output.push_str("<br>");
                }
            }
            Event::Rule => self.output.push_str("<hr>"),
            Event::TaskListMarker(checked) => self.task_list_marker(checked),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not supported
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if !self.code.active {
                    self.output.push_str("<p>");
                }
            }
            Tag::Heading { level, .. } => {
                write!(self.output, "<h{}>", heading_level_to_num(level)).unwrap();
            }
            Tag::BlockQuote(_) => {
                self.output.push_str("<blockquote>");
            }
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) if !info.is_empty() => info
                        .split_whitespace()
                        .next()
                        .map(std::borrow::ToOwned::to_owned),
                    _ => None,
                };
                self.code.start(lang);
            }
            Tag::List(start) => {
                self.list_stack.push(start.is_some());
                match start {
                    Some(1) => self.output.push_str("<ol>"),
                    Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                    None => self.output.push_str("<ul>"),
                }
            }
            Tag::Item => {
                self.output.push_str("<li>");
            }
            Tag::FootnoteDefinition(_) | Tag::HtmlBlock | Tag::MetadataBlock(_) => {}
            Tag::DefinitionList => {
                self.output.push_str("<dl>");
            }
            Tag::DefinitionListTitle => {
                self.output.push_str("<dt>");
            }
            Tag::DefinitionListDefinition => {
                self.output.push_str("<dd>");
            }
            Tag::Table(alignments) => {
                self.table.start(alignments);
                self.output.push_str("<table>");
            }
            Tag::TableHead => {
                self.table.in_head = true;
                self.table.cell_index = 0;
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.cell_index = 0;
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let style = self.table.alignment_style();
                let tag = if self.table.in_head { "th" } else { "td" };
                write!(self.output, "<{tag}{style}>").unwrap();
            }
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<del>"),
            Tag::Superscript => self.push_inline("<sup>"),
            Tag::Subscript => self.push_inline("<sub>"),
            Tag::Link { dest_url, .. } => {
                let link = format!(r#"<a href="{}">"#, escape_html(&dest_url));
                self.push_inline(&link);
            }
            Tag::Image { dest_url, title, .. } => {
                // Alt text arrives as child events; the tag is emitted in end_tag.
                self.image.start();
                self.pending_image = Some((dest_url.to_string(), title.to_string()));
            }
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if !self.code.active {
                    self.output.push_str("</p>");
                }
            }
            TagEnd::Heading(level) => {
                write!(self.output, "</h{}>", heading_level_to_num(level)).unwrap();
            }
            TagEnd::BlockQuote(_) => {
                self.output.push_str("</blockquote>");
            }
            TagEnd::CodeBlock => self.code_block(),
            TagEnd::List(ordered) => {
                self.list_stack.pop();
                self.output.push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => {
                self.output.push_str("</li>");
            }
            TagEnd::FootnoteDefinition | TagEnd::HtmlBlock | TagEnd::MetadataBlock(_) => {}
            TagEnd::Image => {
                let alt = self.image.end();
                if let Some((src, title)) = self.pending_image.take() {
                    write!(self.output, r#"<img src="{}""#, escape_html(&src)).unwrap();
                    if !title.is_empty() {
                        write!(self.output, r#" title="{}""#, escape_html(&title)).unwrap();
                    }
                    write!(self.output, r#" alt="{}">"#, escape_html(&alt)).unwrap();
                }
            }
            TagEnd::DefinitionList => {
                self.output.push_str("</dl>");
            }
            TagEnd::DefinitionListTitle => {
                self.output.push_str("</dt>");
            }
            TagEnd::DefinitionListDefinition => {
                self.output.push_str("</dd>");
            }
            TagEnd::Table => {
                self.output.push_str("</tbody></table>");
            }
            TagEnd::TableHead => {
                self.output.push_str("</tr></thead><tbody>");
                self.table.in_head = false;
            }
            TagEnd::TableRow => {
                self.output.push_str("</tr>");
            }
            TagEnd::TableCell => {
                self.output.push_str(if self.table.in_head { "</th>" } else { "</td>" });
                self.table.cell_index += 1;
            }
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</del>"),
            TagEnd::Superscript => self.push_inline("</sup>"),
            TagEnd::Subscript => self.push_inline("</sub>"),
            TagEnd::Link => self.push_inline("</a>"),
        }
    }

    /// Close a code block, offering its content to the highlighter first.
    fn code_block(&mut self) {
        let (lang, code) = self.code.end();
        let inner = self
            .highlighter
            .highlight(lang.as_deref(), &code)
            .unwrap_or_else(|| escape_html(&code));

        if let Some(lang) = lang {
            write!(
                self.output,
                r#"<pre><code class="language-{}">{inner}</code></pre>"#,
                escape_html(&lang)
            )
            .unwrap();
        } else {
            write!(self.output, "<pre><code>{inner}</code></pre>").unwrap();
        }
    }

    fn text(&mut self, text: &str) {
        if self.code.active {
            self.code.buffer.push_str(text);
        } else if self.image.active {
            self.image.alt_text.push_str(text);
        } else {
            self.output.push_str(&escape_html(text));
        }
    }

    fn soft_break(&mut self) {
        if self.code.active {
            self.code.buffer.push('\n');
        } else if self.image.active {
            self.image.alt_text.push(' ');
        } else {
            self.output.push('\n');
        }
    }

    fn task_list_marker(&mut self, checked: bool) {
        self.output.push_str(if checked {
            r#"<input type="checkbox" checked disabled> "#
        } else {
            r#"<input type="checkbox" disabled> "#
        });
    }
}

/// Convert heading level enum to number.
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pulldown_cmark::{Options, Parser};

    use super::*;
    use crate::highlight::NullHighlighter;

    fn render(markdown: &str) -> String {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        let parser = Parser::new_ext(markdown, options);
        HtmlRenderer::new(&NullHighlighter).render(parser)
    }

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(render("Hello, world!"), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_heading() {
        assert_eq!(render("## Section Title"), "<h2>Section Title</h2>");
    }

    #[test]
    fn test_emphasis_and_strong() {
        let html = render("*italic* and **bold**");
        assert!(html.contains("<em>italic</em>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(render("~~deleted~~"), "<p><del>deleted</del></p>");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            render("[Rust](https://rust-lang.org)"),
            r#"<p><a href="https://rust-lang.org">Rust</a></p>"#
        );
    }

    #[test]
    fn test_image_with_alt() {
        assert_eq!(
            render("![Alt text](image.png)"),
            r#"<p><img src="image.png" alt="Alt text"></p>"#
        );
    }

    #[test]
    fn test_image_alt_with_emphasis() {
        // Inline formatting inside alt text is flattened to plain text and
        // must not leak markup into the <img> tag.
        assert_eq!(
            render("![*bold* alt](img.png)"),
            r#"<p><img src="img.png" alt="bold alt"></p>"#
        );
    }

    #[test]
    fn test_image_alt_with_inline_code() {
        assert_eq!(
            render("![`code` alt](img.png)"),
            r#"<p><img src="img.png" alt="code alt"></p>"#
        );
    }

    #[test]
    fn test_image_alt_with_link() {
        assert_eq!(
            render("![see [docs](http://x.com)](img.png)"),
            r#"<p><img src="img.png" alt="see docs"></p>"#
        );
    }

    #[test]
    fn test_image_with_title() {
        assert_eq!(
            render(r#"![Alt](image.png "A title")"#),
            r#"<p><img src="image.png" title="A title" alt="Alt"></p>"#
        );
    }

    #[test]
    fn test_code_block_with_language() {
        assert_eq!(
            render("```rust\nfn main() {}\n```"),
            "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>"
        );
    }

    #[test]
    fn test_code_block_without_language() {
        assert_eq!(render("```\nplain code\n```"), "<pre><code>plain code\n</code></pre>");
    }

    #[test]
    fn test_code_block_escapes_content() {
        let html = render("```\n<script>alert(1)</script>\n```");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(render("Use `println!`"), "<p>Use <code>println!</code></p>");
    }

    #[test]
    fn test_lists() {
        let html = render("- Item 1\n- Item 2");
        assert_eq!(html, "<ul><li>Item 1</li><li>Item 2</li></ul>");

        let html = render("1. First\n2. Second");
        assert_eq!(html, "<ol><li>First</li><li>Second</li></ol>");
    }

    #[test]
    fn test_ordered_list_with_start() {
        let html = render("3. Third\n4. Fourth");
        assert!(html.contains(r#"<ol start="3">"#));
    }

    #[test]
    fn test_table() {
        let html = render("| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table><thead><tr><th>A</th><th>B</th></tr></thead>"));
        assert!(html.contains("<tbody><tr><td>1</td><td>2</td></tr></tbody></table>"));
    }

    #[test]
    fn test_table_alignment() {
        let html = render("| L | C | R |\n|:--|:-:|--:|\n| a | b | c |");
        assert!(html.contains(r#"<th style="text-align:left">L</th>"#));
        assert!(html.contains(r#"<th style="text-align:center">C</th>"#));
        assert!(html.contains(r#"<td style="text-align:right">c</td>"#));
    }

    #[test]
    fn test_blockquote() {
        let html = render("> Note");
        assert!(html.starts_with("<blockquote>"));
        assert!(html.ends_with("</blockquote>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        // The markdown source is trusted; embedded HTML is not sanitized.
        let html = render("before\n\n<div class=\"raw\">kept</div>\n\nafter");
        assert!(html.contains(r#"<div class="raw">kept</div>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(render("a < b & c"), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(render("---"), "<hr>");
    }

    struct UppercaseHighlighter;

    impl Highlighter for UppercaseHighlighter {
        fn highlight(&self, language: Option<&str>, code: &str) -> Option<String> {
            (language == Some("shout")).then(|| escape_html(&code.to_uppercase()))
        }
    }

    #[test]
    fn test_highlighter_rewrites_matching_blocks() {
        let parser = Parser::new("```shout\nquiet\n```");
        let html = HtmlRenderer::new(&UppercaseHighlighter).render(parser);
        assert_eq!(html, "<pre><code class=\"language-shout\">QUIET\n</code></pre>");
    }

    #[test]
    fn test_highlighter_decline_falls_back_to_escaped_text() {
        let parser = Parser::new("```rust\nlet x = 1;\n```");
        let html = HtmlRenderer::new(&UppercaseHighlighter).render(parser);
        assert_eq!(html, "<pre><code class=\"language-rust\">let x = 1;\n</code></pre>");
    }

    #[test]
    fn test_highlighter_sees_every_block() {
        let parser = Parser::new("```shout\na\n```\n\n```shout\nb\n```");
        let html = HtmlRenderer::new(&UppercaseHighlighter).render(parser);
        assert!(html.contains("A\n"));
        assert!(html.contains("B\n"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
    }
}
