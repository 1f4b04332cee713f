//! Whole-document XHTML encoding

use super::VOID_ELEMENTS;
use super::text::encode_cell_value;
use super::tokenizer::{Segment, tokenize};

/// Convert an HTML fragment into strict XHTML
///
/// Passes, in order:
/// 1. double-quoted attribute values become single-quoted
/// 2. unclosed void elements become self-closed (`<br>` to `<br />`)
/// 3. character data gets the text rules of [`encode_cell_value`]
///
/// Tag markup is otherwise copied unchanged. Malformed input is encoded
/// best-effort; there is no failure case.
///
/// # Examples
/// ```
/// # use kodegen_tools_content_table::xhtml::encode_document;
/// assert_eq!(
///     encode_document(r#"<br><img src="test.jpg">"#),
///     "<br /><img src='test.jpg' />"
/// );
/// ```
#[must_use]
pub fn encode_document(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + html.len() / 8);
    for segment in tokenize(html) {
        match segment {
            Segment::Tag(tag) if tag.starts_with("<!") || tag.starts_with("<?") => {
                out.push_str(tag);
            }
            Segment::Tag(tag) => {
                let quoted = normalize_attribute_quotes(tag);
                out.push_str(&self_close_void_element(&quoted));
            }
            Segment::Text(text) => out.push_str(&encode_cell_value(text)),
        }
    }
    out
}

/// Rewrite `attr="value"` as `attr='value'` within one tag
///
/// Values that are already single-quoted are left alone. A `'` inside a
/// converted value is written as `&#39;` so the new quoting stays balanced.
#[must_use]
pub fn normalize_attribute_quotes(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len());
    let mut quote: Option<char> = None;
    let mut last_significant: Option<char> = None;

    for ch in tag.chars() {
        match quote {
            Some('"') => match ch {
                '"' => {
                    out.push('\'');
                    quote = None;
                    last_significant = Some(ch);
                }
                '\'' => out.push_str("&#39;"),
                c => out.push(c),
            },
            Some(q) => {
                out.push(ch);
                if ch == q {
                    quote = None;
                    last_significant = Some(ch);
                }
            }
            None => match ch {
                '"' if last_significant == Some('=') => {
                    out.push('\'');
                    quote = Some('"');
                }
                '\'' if last_significant == Some('=') => {
                    out.push(ch);
                    quote = Some('\'');
                }
                c => {
                    out.push(c);
                    if !c.is_whitespace() {
                        last_significant = Some(c);
                    }
                }
            },
        }
    }
    out
}

/// Self-close an opening void-element tag; other tags pass through
#[must_use]
pub fn self_close_void_element(tag: &str) -> String {
    let Some(body) = tag.strip_prefix('<').and_then(|t| t.strip_suffix('>')) else {
        return tag.to_string();
    };
    let name_len = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len());
    let name = body[..name_len].to_ascii_lowercase();

    if !VOID_ELEMENTS.contains(&name.as_str()) || body.trim_end().ends_with('/') {
        return tag.to_string();
    }
    format!("<{} />", body.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_normalization() {
        assert_eq!(normalize_attribute_quotes(r#"<div class="test">"#), "<div class='test'>");
        assert_eq!(normalize_attribute_quotes("<div class='test'>"), "<div class='test'>");
        assert_eq!(
            normalize_attribute_quotes(r#"<a title="it's" href='x"y'>"#),
            r#"<a title='it&#39;s' href='x"y'>"#
        );
        assert_eq!(
            normalize_attribute_quotes(r#"<td style="border: 1px solid #ccc;">"#),
            "<td style='border: 1px solid #ccc;'>"
        );
    }

    #[test]
    fn test_void_elements() {
        assert_eq!(self_close_void_element("<br>"), "<br />");
        assert_eq!(self_close_void_element("<BR>"), "<BR />");
        assert_eq!(self_close_void_element("<br/>"), "<br/>");
        assert_eq!(self_close_void_element("<br />"), "<br />");
        assert_eq!(self_close_void_element("<hr class='x' >"), "<hr class='x' />");
        assert_eq!(self_close_void_element("<bra>"), "<bra>");
        assert_eq!(self_close_void_element("</br>"), "</br>");
        assert_eq!(self_close_void_element("<p>"), "<p>");
    }

    #[test]
    fn test_document_vectors() {
        assert_eq!(
            encode_document(r#"<div class="test">Hello (world) & café</div>"#),
            "<div class='test'>Hello world &amp; caf </div>"
        );
        assert_eq!(
            encode_document(r#"<br><img src="test.jpg">"#),
            "<br /><img src='test.jpg' />"
        );
        assert_eq!(encode_document("Text with &amp; entity"), "Text with &amp; entity");
    }

    #[test]
    fn test_tag_markup_untouched_by_text_rules() {
        assert_eq!(
            encode_document(r#"<a href="/x?a=1&b=(2)" title="café">(x)</a>"#),
            "<a href='/x?a=1&b=(2)' title='café'>x</a>"
        );
    }

    #[test]
    fn test_text_angle_brackets_escaped() {
        assert_eq!(encode_document("<p>1 < 2 > 0</p>"), "<p>1 &lt; 2 &gt; 0</p>");
    }

    #[test]
    fn test_comments_pass_through() {
        assert_eq!(encode_document("<!-- (note) --><b>é</b>"), "<!-- (note) --><b> </b>");
    }
}
