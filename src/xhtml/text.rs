//! Text-content rules shared by the document and cell encoders

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_RUN: hardcoded regex is valid")
});

/// Named or numeric entity reference at the start of the haystack
static ENTITY_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);")
        .expect("ENTITY_REF: hardcoded regex is valid")
});

/// Apply the XHTML text rules to a string that contains no markup
///
/// - parentheses are removed
/// - each non-ASCII character becomes a space, then whitespace runs
///   collapse to one space (no trimming)
/// - bare `&` becomes `&amp;`; existing entity references are kept
/// - `<` and `>` become `&lt;` and `&gt;`
///
/// # Examples
/// ```
/// # use kodegen_tools_content_table::xhtml::encode_cell_value;
/// assert_eq!(encode_cell_value("Price: $100 (USD)"), "Price: $100 USD");
/// ```
#[must_use]
pub fn encode_cell_value(text: &str) -> String {
    let ascii: String = text
        .chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .map(|c| if c.is_ascii() { c } else { ' ' })
        .collect();
    let collapsed = WHITESPACE_RUN.replace_all(&ascii, " ");
    escape_text(&collapsed)
}

/// Escape `&`, `<`, `>` while leaving valid entity references intact
pub(crate) fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(['&', '<', '>']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match tail.as_bytes()[0] {
            b'&' => match ENTITY_REF.find(tail) {
                Some(entity) => {
                    out.push_str(entity.as_str());
                    rest = &tail[entity.end()..];
                    continue;
                }
                None => out.push_str("&amp;"),
            },
            b'<' => out.push_str("&lt;"),
            _ => out.push_str("&gt;"),
        }
        rest = &tail[1..];
    }
    out.push_str(rest);
    out
}

/// Length of the entity reference starting at `text[0]`, if any
pub(crate) fn entity_len(text: &str) -> Option<usize> {
    ENTITY_REF.find(text).map(|m| m.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_vector() {
        assert_eq!(encode_cell_value("Price: $100 (USD)"), "Price: $100 USD");
    }

    #[test]
    fn test_entities_preserved() {
        assert_eq!(encode_cell_value("a &amp; b"), "a &amp; b");
        assert_eq!(encode_cell_value("&#169; &#xA9; &copy;"), "&#169; &#xA9; &copy;");
        assert_eq!(encode_cell_value("&#x27;"), "&#x27;");
    }

    #[test]
    fn test_bare_ampersands_escaped() {
        assert_eq!(encode_cell_value("R&D"), "R&amp;D");
        assert_eq!(encode_cell_value("&;"), "&amp;;");
        assert_eq!(encode_cell_value("& amp;"), "&amp; amp;");
        assert_eq!(encode_cell_value("&#xZZ;"), "&amp;#xZZ;");
        assert_eq!(encode_cell_value("&"), "&amp;");
    }

    #[test]
    fn test_non_ascii_and_whitespace() {
        assert_eq!(encode_cell_value("naïve  café\n\tok"), "na ve caf ok");
        assert_eq!(encode_cell_value("😀😀"), " ");
        assert_eq!(encode_cell_value("  "), " ");
        assert_eq!(encode_cell_value(""), "");
    }

    #[test]
    fn test_angle_brackets() {
        assert_eq!(encode_cell_value("<b>"), "&lt;b&gt;");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let once = encode_cell_value("Fish & Chips (large) – £5 <hot>");
        assert_eq!(encode_cell_value(&once), once);
    }

    #[test]
    fn test_entity_len() {
        assert_eq!(entity_len("&amp;rest"), Some(5));
        assert_eq!(entity_len("&amp rest"), None);
    }
}
