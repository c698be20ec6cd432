use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"));

static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold regex"));

// A URL token stops at whitespace or the start of the next tag.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s<]+").expect("Invalid URL regex"));

/// Replace every `[label](url)` with an anchor tag.
pub fn substitute_links(line: &str) -> Cow<'_, str> {
    LINK_PATTERN.replace_all(line, r#"<a href="$2">$1</a>"#)
}

/// Replace every `**text**` with a `<strong>` tag.
///
/// An unmatched `**` is left as literal text.
pub fn substitute_bold(line: &str) -> Cow<'_, str> {
    BOLD_PATTERN.replace_all(line, "<strong>$1</strong>")
}

/// Link substitution followed by bold substitution, in that order.
pub fn substitute_inline(line: &str) -> String {
    substitute_bold(&substitute_links(line)).into_owned()
}

/// Replace bare `http://` and `https://` tokens with image tags.
///
/// Tokens inside a tag (an attribute value) or inside the text of an
/// `<a>...</a>` element are kept as they are.
pub fn embed_urls_as_images(text: &str) -> String {
    URL_PATTERN
        .replace_all(text, |caps: &Captures| {
            let url = caps.get(0).map_or("", |m| m.as_str());
            let start = caps.get(0).map_or(0, |m| m.start());
            if inside_markup(&text[..start]) {
                url.to_string()
            } else {
                format!(r#"<img src="{url}" alt="Image" />"#)
            }
        })
        .into_owned()
}

/// Whether the position right after `before` is inside an open tag or an
/// unclosed anchor.
fn inside_markup(before: &str) -> bool {
    // `None` orders below any `Some`, so a missing closer counts as earlier.
    if before.rfind('<') > before.rfind('>') {
        return true;
    }
    let anchor_open = before.rfind("<a ").max(before.rfind("<a>"));
    anchor_open > before.rfind("</a>")
}
