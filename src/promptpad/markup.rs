//! Plain-text views of the rich markup stored in prompt content.
//!
//! Content comes from a rich text field, so it holds inline formatting tags and
//! HTML entities. Two renderings are offered:
//!
//! - [`plain_text`]: tags dropped, entities decoded, nothing inserted. Used for
//!   emptiness checks, where `<p></p>` has to count as empty.
//! - [`inner_text`]: like `plain_text` but line breaks and block boundaries
//!   become newlines. Used for the clipboard.

use std::borrow::Cow;

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "pre", "blockquote", "tr",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Tag { name: String, closing: bool },
}

/// Byte offset of the `>` closing a tag body, skipping quoted attribute values.
fn tag_end(body: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in body.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '>') => return Some(i),
            (None, _) => {}
        }
    }
    None
}

fn tokenize(markup: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut rest = markup;
    let mut offset = 0;

    while let Some(lt) = rest.find('<') {
        let after = &rest[lt + 1..];
        let tag_start = offset + lt;

        // Comments run to `-->`, or to the end of input when unterminated.
        if let Some(comment) = after.strip_prefix("!--") {
            if tag_start > text_start {
                tokens.push(Token::Text(&markup[text_start..tag_start]));
            }
            let consumed = match comment.find("-->") {
                Some(end) => lt + 1 + 3 + end + 3,
                None => rest.len(),
            };
            offset += consumed;
            rest = &rest[consumed..];
            text_start = offset;
            continue;
        }

        let starts_tag = after
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!');

        match (starts_tag, tag_end(after)) {
            (true, Some(gt)) => {
                if tag_start > text_start {
                    tokens.push(Token::Text(&markup[text_start..tag_start]));
                }
                let inner = &after[..gt];
                let closing = inner.starts_with('/');
                let name: String = inner
                    .trim_start_matches('/')
                    .chars()
                    .take_while(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
                    .to_ascii_lowercase();
                tokens.push(Token::Tag { name, closing });

                let consumed = lt + 1 + gt + 1;
                offset += consumed;
                rest = &rest[consumed..];
                text_start = offset;
            }
            _ => {
                // A bare '<' is literal text.
                offset += lt + 1;
                rest = &rest[lt + 1..];
            }
        }
    }

    if text_start < markup.len() {
        tokens.push(Token::Text(&markup[text_start..]));
    }
    tokens
}

fn decode(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}

/// Text content of `markup`: tags removed, entities decoded.
pub fn plain_text(markup: &str) -> String {
    tokenize(markup)
        .into_iter()
        .filter_map(|token| match token {
            Token::Text(text) => Some(decode(text).into_owned()),
            Token::Tag { .. } => None,
        })
        .collect()
}

/// Rendered text of `markup` with `<br>` and block boundaries as newlines.
pub fn inner_text(markup: &str) -> String {
    let mut out = String::new();
    for token in tokenize(markup) {
        match token {
            Token::Text(text) => out.push_str(&decode(text)),
            Token::Tag { name, closing } => {
                let block = BLOCK_TAGS.contains(&name.as_str()) && !out.is_empty();
                let breaks = name == "br" || block;
                if breaks && !(closing && name == "br") && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
        }
    }
    out.trim_end_matches('\n').to_string()
}

/// Single-line preview of `markup`, whitespace collapsed, cut to `max_chars`.
pub fn preview(markup: &str, max_chars: usize) -> String {
    let text = plain_text(markup);
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let mut cut: String = collapsed.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_inline_tags() {
        assert_eq!(plain_text("<p>Hello <b>there</b></p>"), "Hello there");
    }

    #[test]
    fn empty_tags_have_no_text() {
        assert_eq!(plain_text("<p></p><div><br></div>"), "");
    }

    #[test]
    fn decodes_entities() {
        assert_eq!(plain_text("a &amp; b &lt;c&gt;"), "a & b <c>");
    }

    #[test]
    fn bare_angle_bracket_is_text() {
        assert_eq!(plain_text("1 < 2 and 3 > 2"), "1 < 2 and 3 > 2");
    }

    #[test]
    fn quoted_gt_does_not_end_tag() {
        assert_eq!(plain_text(r#"<img alt="a>b">"#), "");
        assert_eq!(plain_text("<img alt='x>y' src=\"z\">after"), "after");
        assert_eq!(inner_text(r#"<p title="1>0">hi</p>"#), "hi");
    }

    #[test]
    fn comments_are_skipped_whole() {
        assert_eq!(plain_text("<!-- <b> -->"), "");
        assert_eq!(plain_text("a<!-- x > y -->b"), "ab");
        assert_eq!(plain_text("kept<!-- never closed <p>"), "kept");
    }

    #[test]
    fn inner_text_breaks_blocks() {
        assert_eq!(
            inner_text("<div>first</div><div>second<br>third</div>"),
            "first\nsecond\nthird"
        );
    }

    #[test]
    fn preview_collapses_and_truncates() {
        assert_eq!(preview("<p>a\n  b</p>", 10), "a b");
        assert_eq!(preview("abcdefghij", 5), "abcd…");
    }
}
