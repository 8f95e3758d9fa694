//! Task Text Rendering
//!
//! Task text is rendered as inline Markdown via pulldown-cmark:
//! - Emphasis, strong, strikethrough and inline code
//! - Raw HTML is escaped, never injected
//! - Links and images collapse to their text
//! - Any block syntax (`#`, `*`, `1)`, `>`, `---`, fences, reference
//!   definitions) stays visible exactly as typed

use std::ops::Range;

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
}

/// Render task text to safe inline HTML
///
/// Source outside the inline content is copied verbatim, so block markers
/// are never dropped or rewritten.
pub fn render_task_text(text: &str) -> String {
    let mut inline = Vec::new();
    let mut span: Option<Range<usize>> = None;

    for (event, range) in Parser::new_ext(text, get_options()).into_offset_iter() {
        if !is_inline(&event) {
            continue;
        }
        span = Some(match span {
            Some(s) => s.start.min(range.start)..s.end.max(range.end),
            None => range,
        });
        if let Some(event) = keep_inline(event) {
            inline.push(event);
        }
    }

    let mut events = Vec::with_capacity(inline.len() + 2);
    match span {
        Some(span) => {
            if span.start > 0 {
                events.push(Event::Text(CowStr::Borrowed(&text[..span.start])));
            }
            events.extend(inline);
            if span.end < text.len() {
                events.push(Event::Text(CowStr::Borrowed(&text[span.end..])));
            }
        }
        // Rules, empty fences, reference definitions: nothing inline at all
        None => events.push(Event::Text(CowStr::Borrowed(text))),
    }

    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Events that belong to the inline content of a block
fn is_inline(event: &Event<'_>) -> bool {
    matches!(
        event,
        Event::Text(_)
            | Event::Code(_)
            | Event::Html(_)
            | Event::InlineHtml(_)
            | Event::SoftBreak
            | Event::HardBreak
            | Event::Start(
                Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. }
            )
            | Event::End(
                TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link | TagEnd::Image
            )
    )
}

/// Keep inline formatting, flatten the rest to text
fn keep_inline(event: Event<'_>) -> Option<Event<'_>> {
    match event {
        Event::Start(Tag::Emphasis | Tag::Strong | Tag::Strikethrough)
        | Event::End(TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough)
        | Event::Text(_)
        | Event::Code(_) => Some(event),

        // Escaped on output
        Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),

        Event::SoftBreak | Event::HardBreak => Some(Event::Text(CowStr::Borrowed(" "))),

        // Links and images: only their text survives
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(render_task_text("buy milk"), "buy milk");
    }

    #[test]
    fn test_inline_formatting() {
        assert_eq!(render_task_text("**call** mum"), "<strong>call</strong> mum");
        assert_eq!(render_task_text("*maybe* later"), "<em>maybe</em> later");
        assert_eq!(render_task_text("~~skip~~ gym"), "<del>skip</del> gym");
        assert_eq!(render_task_text("run `cargo`"), "run <code>cargo</code>");
    }

    #[test]
    fn test_html_is_escaped() {
        let html = render_task_text("<b>bold</b> <img src=x onerror=alert(1)>");
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn test_links_collapse_to_text() {
        let html = render_task_text("read [docs](javascript:alert(1))");
        assert_eq!(html, "read docs");
    }

    #[test]
    fn test_block_markers_stay_visible() {
        assert_eq!(render_task_text("# Title"), "# Title");
        assert_eq!(render_task_text("- groceries"), "- groceries");
        assert_eq!(render_task_text("2. step two"), "2. step two");
        assert_eq!(render_task_text("> quote"), "&gt; quote");
        assert_eq!(render_task_text("* item"), "* item");
        assert_eq!(render_task_text("+ item"), "+ item");
        assert_eq!(render_task_text("1) step"), "1) step");
        assert_eq!(render_task_text("# Title #"), "# Title #");
    }

    #[test]
    fn test_block_only_input_kept_verbatim() {
        assert_eq!(render_task_text("---"), "---");
        assert_eq!(render_task_text("***"), "***");
        assert_eq!(render_task_text("___"), "___");
        assert_eq!(render_task_text("```rust"), "```rust");
        assert_eq!(render_task_text("[todo]: later"), "[todo]: later");
        assert_eq!(render_task_text("#"), "#");
    }

    #[test]
    fn test_markers_around_formatting() {
        assert_eq!(render_task_text("- **urgent** call"), "- <strong>urgent</strong> call");
        assert_eq!(render_task_text("## *soon*"), "## <em>soon</em>");
    }

    #[test]
    fn test_ampersand_escaped() {
        assert_eq!(render_task_text("salt & pepper"), "salt &amp; pepper");
    }
}
