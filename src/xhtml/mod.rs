//! Strict XHTML encoding for the Confluence document API
//!
//! The document API rejects markup that is not XHTML and mishandles bare
//! ampersands and non-ASCII bytes. These encoders make renderer output
//! acceptable to it without the renderer knowing about the API:
//!
//! - [`encode_document`] rewrites a whole HTML fragment
//! - [`encode_cell_value`] applies only the text rules, for markup-free strings
//! - [`encode_url_for_attribute`] makes a URL safe inside an attribute value
//!
//! All three are total over any input. Non-ASCII stripping is lossy and is
//! only meant for the Confluence export path.

mod document;
mod text;
mod tokenizer;
mod url;

pub use document::{encode_document, normalize_attribute_quotes, self_close_void_element};
pub use text::encode_cell_value;
pub use tokenizer::{Segment, tokenize};
pub use url::encode_url_for_attribute;

/// Elements that never have content and must be written self-closed
pub const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];
