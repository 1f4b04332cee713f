//! URL encoding for attribute values

use super::text::entity_len;

/// Make a URL safe to place inside a quoted XHTML attribute
///
/// Conservative: spaces, quotes, angle brackets and non-ASCII bytes are
/// percent-encoded, bare `&` becomes `&amp;`. Existing `%XX` sequences and
/// entity references are kept, so encoding an encoded URL is a no-op.
///
/// # Examples
/// ```
/// # use kodegen_tools_content_table::xhtml::encode_url_for_attribute;
/// let url = "https://figma.com/file/a?node-id=1:2&t=x y";
/// let once = encode_url_for_attribute(url);
/// assert_eq!(once, "https://figma.com/file/a?node-id=1:2&amp;t=x%20y");
/// assert_eq!(encode_url_for_attribute(&once), once);
/// ```
#[must_use]
pub fn encode_url_for_attribute(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    let mut skip_until = 0;

    for (index, ch) in url.char_indices() {
        if index < skip_until {
            continue;
        }
        match ch {
            ' ' => out.push_str("%20"),
            '"' => out.push_str("%22"),
            '\'' => out.push_str("%27"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '%' if is_percent_escape(&url[index..]) => out.push('%'),
            '%' => out.push_str("%25"),
            '&' => match entity_len(&url[index..]) {
                Some(len) => {
                    out.push_str(&url[index..index + len]);
                    skip_until = index + len;
                }
                None => out.push_str("&amp;"),
            },
            c if c.is_ascii() => out.push(c),
            c => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{byte:02X}"));
                }
            }
        }
    }
    out
}

fn is_percent_escape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 3 && bytes[1].is_ascii_hexdigit() && bytes[2].is_ascii_hexdigit()
}
