use std::collections::BTreeMap;

use gotenberg_core::{GotenbergHeader, HeaderOptions, HeaderSet, WebhookMethod, WebhookOptions};
use pretty_assertions::assert_eq;

#[test]
fn trace_only_yields_single_header() {
    let set = HeaderSet::from_options(&HeaderOptions::default().with_trace("req-42"));

    assert_eq!(set.iter().collect::<Vec<_>>(), vec![("Gotenberg-Trace", "req-42")]);
    assert!(!set.contains(GotenbergHeader::OutputFilename));
}

#[test]
fn no_options_yield_no_headers() {
    let set = HeaderSet::from_options(&HeaderOptions::default())
        .with_webhook(&WebhookOptions::default());
    assert!(set.is_empty());
}

#[test]
fn webhook_headers_follow_presence_of_each_option() {
    let webhook = WebhookOptions {
        url: Some("https://hooks.example.com/done".to_string()),
        method: Some(WebhookMethod::Put),
        ..WebhookOptions::default()
    };
    let set = HeaderSet::new().with_webhook(&webhook);

    assert_eq!(
        set.iter().collect::<Vec<_>>(),
        vec![
            ("Gotenberg-Webhook-Url", "https://hooks.example.com/done"),
            ("Gotenberg-Webhook-Method", "PUT"),
        ]
    );
    assert!(!set.contains(GotenbergHeader::WebhookErrorUrl));
    assert!(!set.contains(GotenbergHeader::WebhookErrorMethod));
    assert!(!set.contains(GotenbergHeader::WebhookExtraHttpHeaders));
}

#[test]
fn empty_string_is_a_present_value() {
    let set = HeaderSet::from_options(&HeaderOptions::default().with_output_filename(""));
    assert_eq!(set.get(GotenbergHeader::OutputFilename), Some(""));
}

#[test]
fn full_webhook_configuration_sets_all_five_headers() {
    let mut extra = BTreeMap::new();
    extra.insert("Authorization".to_string(), "Bearer token".to_string());
    let webhook = WebhookOptions::new("https://a.example/ok", "https://a.example/err")
        .with_method(WebhookMethod::Post)
        .with_error_method(WebhookMethod::Patch)
        .with_extra_http_headers(&extra)
        .unwrap();

    let set = HeaderSet::new().with_webhook(&webhook);
    assert_eq!(set.len(), 5);
    assert_eq!(set.get(GotenbergHeader::WebhookErrorMethod), Some("PATCH"));
    assert_eq!(
        set.get(GotenbergHeader::WebhookExtraHttpHeaders),
        Some(r#"{"Authorization":"Bearer token"}"#)
    );
}

#[test]
fn per_call_overrides_replace_only_present_headers() {
    let base = HeaderSet::from_options(
        &HeaderOptions::default()
            .with_trace("default-trace")
            .with_output_filename("report"),
    );
    let merged = base.merged(&HeaderOptions::default().with_trace("call-trace"));

    assert_eq!(merged.get(GotenbergHeader::Trace), Some("call-trace"));
    assert_eq!(merged.get(GotenbergHeader::OutputFilename), Some("report"));
    assert_eq!(base.get(GotenbergHeader::Trace), Some("default-trace"));
}
