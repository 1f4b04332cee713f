//! Shared fixtures for the content-table test suite

use chrono::{DateTime, TimeZone, Utc};
use kodegen_tools_content_table::{ContentTable, normalize_at};
use serde_json::{Value, json};

/// Fixed clock so synthesized timestamps are reproducible
#[allow(dead_code)]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
}

/// Raw item as the canvas scanner emits it
#[allow(dead_code)]
pub fn raw_item(id: &str, name: &str, label: &str, value: &str) -> Value {
    json!({
        "id": id,
        "nodeId": format!("1:{id}"),
        "nodeUrl": format!("https://design.example.com/file/abc?node-id=1-{id}"),
        "component": {"kind": "instance", "name": name},
        "field": {"label": label, "path": format!("{name}/{label}")},
        "content": {"type": "text", "value": value},
        "meta": {"visible": true, "locked": false}
    })
}

/// Fully valid raw table with the given items
#[allow(dead_code)]
pub fn raw_table(items: Vec<Value>) -> Value {
    json!({
        "type": "universal-content-table",
        "version": 1,
        "generatedAtISO": "2025-03-14T09:26:53.000Z",
        "source": {
            "pageId": "0:1",
            "pageName": "Checkout",
            "selectionNodeId": "12:34",
            "selectionName": "Cart Summary"
        },
        "meta": {
            "contentModel": "Universal",
            "contentStage": "Draft",
            "adaStatus": "⏳",
            "legalStatus": "⏳",
            "lastUpdated": "2025-03-14T09:26:53.000Z",
            "version": "1",
            "rootNodeId": "12:34",
            "rootNodeName": "Cart Summary",
            "rootNodeUrl": ""
        },
        "items": items
    })
}

/// The single-item table used by the end-to-end checks
#[allow(dead_code)]
pub fn button_table() -> ContentTable {
    let mut item = raw_item("a", "Button", "CTA", "Buy\tNow");
    item["nodeUrl"] = json!("");
    normalize_at(&raw_table(vec![item]), fixed_now())
}

/// A table exercising annotations, variants and awkward characters
#[allow(dead_code)]
pub fn rich_table() -> ContentTable {
    let mut first = raw_item("a", "Button", "CTA", "Save & continue");
    first["component"]["variantProperties"] = json!({"Size": "Large", "State": "Hover"});
    first["component"]["key"] = json!("btn-primary");
    first["contentKey"] = json!("checkout.cta");
    first["notes"] = json!("Check \"tone\" with legal");

    let mut second = raw_item("b", "Banner", "Body", "Line one\nLine two");
    second["meta"]["visible"] = json!(false);
    second["adaNotes"] = json!("Contrast <4.5:1");

    let third = raw_item("c", "Footer", "Legal", "© 2025 </script> Example");

    normalize_at(&raw_table(vec![first, second, third]), fixed_now())
}
