//! Wire-format tests: the JSON shape consumed downstream must stay stable.

use url::Url;

use seo_inspector::analyze::analyze;
use seo_inspector::extract::extract;
use seo_inspector::SeoReport;

fn report_for(html: &str) -> serde_json::Value {
    let base = Url::parse("https://example.com").expect("static test URL should parse");
    let meta_tags = extract(html, &base);
    let analysis = analyze(&meta_tags);
    let report = SeoReport {
        url: "https://example.com".to_string(),
        meta_tags,
        analysis,
    };
    serde_json::to_value(&report).expect("report should serialize")
}

#[test]
fn test_report_top_level_shape() {
    let value = report_for("<html><head><title>Shape Test Page Title</title></head></html>");

    assert!(value.get("url").is_some());
    assert!(value.get("meta_tags").is_some());
    assert!(value.get("analysis").is_some());
    assert!(value["analysis"].get("findings").is_some());
    assert!(value["analysis"]["score"].is_u64());
}

#[test]
fn test_nested_wire_names() {
    let html = r#"<html><head>
        <meta property="og:title" content="OG Title">
        <meta property="og:type" content="article">
        <meta name="twitter:image" content="https://example.com/t.png">
    </head></html>"#;
    let value = report_for(html);

    // og.* and twitter.* nesting, and og "type" under its wire name
    assert_eq!(value["meta_tags"]["og"]["title"], "OG Title");
    assert_eq!(value["meta_tags"]["og"]["type"], "article");
    assert_eq!(
        value["meta_tags"]["twitter"]["image"],
        "https://example.com/t.png"
    );
}

#[test]
fn test_missing_fields_serialize_as_null() {
    let value = report_for("<html><head></head></html>");

    assert!(value["meta_tags"]["title"].is_null());
    assert!(value["meta_tags"]["description"].is_null());
    assert!(value["meta_tags"]["canonical"].is_null());
    assert!(value["meta_tags"]["og"]["image"].is_null());
    assert!(value["meta_tags"]["favicon"].is_null());
}

#[test]
fn test_findings_carry_severity_and_guidance() {
    let value = report_for("<html><head></head></html>");
    let findings = value["analysis"]["findings"]
        .as_array()
        .expect("findings array");

    assert_eq!(findings.len(), 9);
    for finding in findings {
        let severity = finding["severity"].as_str().expect("severity string");
        assert!(
            matches!(severity, "good" | "warning" | "critical"),
            "unexpected severity '{}'",
            severity
        );
        assert!(finding["message"].as_str().is_some_and(|m| !m.is_empty()));
    }

    // The empty page's title finding is critical and carries a suggestion
    let title = findings
        .iter()
        .find(|f| f["signal"] == "title")
        .expect("title finding");
    assert_eq!(title["severity"], "critical");
    assert!(title["suggestion"].as_str().is_some());
}
