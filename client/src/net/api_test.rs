use super::*;

#[test]
fn blueprint_request_body_trims_requirements() {
    let body = blueprint_request_body("  a chat app \n");
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "requirements": "a chat app" }));
}

#[test]
fn failure_message_prefers_server_error() {
    assert_eq!(
        failure_message(503, r#"{"error":"AI blueprint generation is not configured"}"#),
        "AI blueprint generation is not configured"
    );
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message(502, "<html>bad gateway</html>"), "blueprint request failed: 502");
    assert_eq!(failure_message(500, r#"{"error":"  "}"#), "blueprint request failed: 500");
}
