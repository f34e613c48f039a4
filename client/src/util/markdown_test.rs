use super::*;

#[test]
fn renders_basic_markdown() {
    let html = render_markdown_html("## Parts\n\n- **API** talks to the *queue*");
    assert!(html.contains("<h2>Parts</h2>"));
    assert!(html.contains("<strong>API</strong>"));
    assert!(html.contains("<em>queue</em>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!html.contains("<script>"));
    assert!(html.contains("before"));
    assert!(html.contains("after"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>2</td>"));
}
