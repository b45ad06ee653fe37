use pulldown_cmark::{html, Event, Options, Parser, Tag};

/// Renders the matching-comments markup of one result as safe HTML.
///
/// The comments come back from the service verbatim and are treated as
/// hostile: raw and inline HTML events are demoted to text so they end up
/// entity-escaped, and link destinations outside http/https/mailto (or
/// relative references) are dropped. Only the limited formatting grammar
/// survives. Empty input renders to empty output.
pub fn render_markup(markup: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = Parser::new_ext(markup, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if !safe_link(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: "".into(),
            title,
            id,
        }),
        other => other,
    });

    let mut output = String::new();
    html::push_html(&mut output, events);
    output
}

fn safe_link(destination: &str) -> bool {
    let lowered = destination.trim().to_ascii_lowercase();
    // Protocol-relative links inherit whatever scheme the page has.
    if lowered.starts_with("//") {
        return false;
    }
    if let Some(scheme) = lowered.split_once(':').map(|(scheme, _)| scheme) {
        return matches!(scheme, "http" | "https" | "mailto");
    }
    // No scheme at all: a relative reference or fragment.
    true
}
