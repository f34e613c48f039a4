use super::*;

#[test]
fn diagram_markup_renders_svg() {
    let svg = diagram_markup("graph TD\nA[Web] --> B[API]").unwrap();
    assert!(svg.starts_with("<svg"));
}

#[test]
fn diagram_markup_uses_placeholder_on_error() {
    assert_eq!(diagram_markup(""), Err("Diagram rendering failed."));
    assert_eq!(diagram_markup("sequenceDiagram\nA->>B: hi"), Err(RENDER_FAILED));
}
