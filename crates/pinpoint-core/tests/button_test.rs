mod common;

use common::{FakeElement, FakePage};
use pinpoint_core::{ResolveError, Resolver};

#[tokio::test]
async fn test_button_raw_selector_first() {
    let page = FakePage::new()
        .with("body button.primary", FakeElement::new("primary"))
        .with("body button", FakeElement::new("other").text("button.primary"));
    let resolver = Resolver::new(&page);

    let element = resolver.resolve_for_button_press("button.primary").await.unwrap();
    assert_eq!(element.label, "primary");
    assert_eq!(page.queries(), vec!["css:body button.primary"]);
}

#[tokio::test]
async fn test_submit_name_before_button_name() {
    let page = FakePage::new()
        .with("body input[type=submit][name=save]", FakeElement::new("submit"))
        .with("body button[name=save]", FakeElement::new("button"));
    let resolver = Resolver::new(&page);

    let element = resolver.resolve_for_button_press("save").await.unwrap();
    assert_eq!(element.label, "submit");
}

#[tokio::test]
async fn test_button_name() {
    let page = FakePage::new().with("body button[name=save]", FakeElement::new("button"));
    let resolver = Resolver::new(&page);

    let element = resolver.resolve_for_button_press("save").await.unwrap();
    assert_eq!(element.label, "button");
}

#[tokio::test]
async fn test_submit_value_must_match_exactly() {
    let page = FakePage::new()
        .with(
            "body input[type=submit]",
            FakeElement::new("save-all").attr("value", "Save all"),
        )
        .with(
            "body input[type=submit]",
            FakeElement::new("no-value"),
        )
        .with(
            "body input[type=submit]",
            FakeElement::new("save").attr("value", "Save"),
        );
    let resolver = Resolver::new(&page);

    let element = resolver.resolve_for_button_press("Save").await.unwrap();
    assert_eq!(element.label, "save");
}

#[tokio::test]
async fn test_submit_value_before_button_text() {
    let page = FakePage::new()
        .with("body button", FakeElement::new("text").text("Save"))
        .with(
            "body input[type=submit]",
            FakeElement::new("value").attr("value", "Save"),
        );
    let resolver = Resolver::new(&page);

    let element = resolver.resolve_for_button_press("Save").await.unwrap();
    assert_eq!(element.label, "value");
}

#[tokio::test]
async fn test_falls_through_to_text_substring() {
    let page = FakePage::new()
        .with(
            "body input[type=submit]",
            FakeElement::new("submit").attr("value", "Cancel"),
        )
        .with("body button", FakeElement::new("delete").text("Delete"))
        .with("body button", FakeElement::new("save").text("Save Changes"));
    let resolver = Resolver::new(&page);

    let element = resolver.resolve_for_button_press("Save").await.unwrap();
    assert_eq!(element.label, "save");
    assert_eq!(
        page.queries(),
        vec![
            "css:body Save",
            "css:body input[type=submit][name=Save]",
            "css:body button[name=Save]",
            "all:body input[type=submit]",
            "all:body button",
        ]
    );
}

#[tokio::test]
async fn test_text_match_is_case_sensitive_and_untrimmed() {
    let page = FakePage::new()
        .with("body button", FakeElement::new("lower").text("save changes"))
        .with("body button", FakeElement::new("spaced").text(" Save"));
    let resolver = Resolver::new(&page);

    assert!(resolver.resolve_for_button_press("Save").await.is_ok());
    assert_eq!(
        resolver.resolve_for_button_press("Save").await.unwrap().label,
        "spaced"
    );
    assert!(resolver.resolve_for_button_press("Save ").await.is_err());
}

#[tokio::test]
async fn test_unreadable_elements_are_skipped() {
    let page = FakePage::new()
        .with("body input[type=submit]", FakeElement::new("stale").stale())
        .with("body button", FakeElement::new("stale-button").stale())
        .with("body button", FakeElement::new("ok").text("Go"));
    let resolver = Resolver::new(&page);

    let element = resolver.resolve_for_button_press("Go").await.unwrap();
    assert_eq!(element.label, "ok");
}

#[tokio::test]
async fn test_button_not_found() {
    let page = FakePage::new().with("body button", FakeElement::new("b").text("Cancel"));
    let resolver = Resolver::new(&page);

    let err = resolver.resolve_for_button_press("Save").await.unwrap_err();
    match &err {
        ResolveError::ButtonNotFound { button, attempted } => {
            assert_eq!(button, "Save");
            assert_eq!(attempted.len(), 5);
            assert_eq!(attempted[0], "body Save");
            assert_eq!(attempted[4], "body button containing text \"Save\"");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().starts_with("Button not found: 'Save'"));
}

#[tokio::test]
async fn test_broken_session_still_reports_button_not_found() {
    // Every step of the button chain is a best-effort probe.
    let page = FakePage::new().disconnected();
    let resolver = Resolver::new(&page);

    let err = resolver.resolve_for_button_press("Save").await.unwrap_err();
    assert!(matches!(err, ResolveError::ButtonNotFound { .. }));
}
