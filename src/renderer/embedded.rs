//! Recovering a table from its own HTML projection

use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::LazyLock;

use crate::schema::ContentTable;
use crate::utils::{CONTENT_TABLE_TYPE, CONTENT_TABLE_VERSION, EMBEDDED_JSON_SCRIPT_ID};

static EMBEDDED_SCRIPT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!(
        "script[type=\"application/json\"]#{EMBEDDED_JSON_SCRIPT_ID}"
    ))
    .expect("BUG: hardcoded embedded-json selector is statically valid")
});

/// Extract the table embedded by `Renderer::to_html` from arbitrary HTML
///
/// Returns `None` when there is no embedded block, the payload is not JSON,
/// its `type`/`version` do not match this schema, or it does not
/// deserialize. The result should be validated again by the caller if it
/// came from an untrusted clipboard.
#[must_use]
pub fn extract_from_html(html: &str) -> Option<ContentTable> {
    let document = Html::parse_fragment(html);
    let script = document.select(&EMBEDDED_SCRIPT).next()?;
    let payload: String = script.text().collect();

    let value: Value = match serde_json::from_str(payload.trim()) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Embedded content JSON is not valid JSON: {e}");
            return None;
        }
    };

    if value.get("type").and_then(Value::as_str) != Some(CONTENT_TABLE_TYPE)
        || value.get("version").and_then(Value::as_u64) != Some(CONTENT_TABLE_VERSION)
    {
        log::debug!("Embedded content JSON has an unexpected type or version");
        return None;
    }

    serde_json::from_value(value)
        .map_err(|e| log::debug!("Embedded content JSON does not match the schema: {e}"))
        .ok()
}
