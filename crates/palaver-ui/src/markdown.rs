//! Markup rendering for bot replies.
//!
//! Replies are CommonMark. Only a small formatting subset survives:
//! paragraphs, inline code, code blocks, lists, bold, italic, and line
//! breaks. Headings become paragraphs, links and images keep their text,
//! and raw HTML is escaped so nothing from the service runs in the host page.

use pulldown_cmark::{Event, Parser, Tag, TagEnd, html};

/// Render reply markup to sanitized HTML.
pub fn render_markup_to_html(markup: &str) -> String {
    let parser = Parser::new(markup).filter_map(allowed_event);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

fn allowed_event(event: Event<'_>) -> Option<Event<'_>> {
    match event {
        Event::Start(tag) => allowed_start(tag).map(Event::Start),
        Event::End(tag) => allowed_end(tag).map(Event::End),
        Event::Text(_) | Event::Code(_) | Event::SoftBreak | Event::HardBreak => Some(event),
        // Escaped by push_html like any other text.
        Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
        _ => None,
    }
}

fn allowed_start(tag: Tag<'_>) -> Option<Tag<'_>> {
    match tag {
        Tag::Paragraph
        | Tag::CodeBlock(_)
        | Tag::List(_)
        | Tag::Item
        | Tag::Emphasis
        | Tag::Strong => Some(tag),
        Tag::Heading { .. } => Some(Tag::Paragraph),
        _ => None,
    }
}

fn allowed_end(tag: TagEnd) -> Option<TagEnd> {
    match tag {
        TagEnd::Paragraph
        | TagEnd::CodeBlock
        | TagEnd::List(_)
        | TagEnd::Item
        | TagEnd::Emphasis
        | TagEnd::Strong => Some(tag),
        TagEnd::Heading(_) => Some(TagEnd::Paragraph),
        _ => None,
    }
}
