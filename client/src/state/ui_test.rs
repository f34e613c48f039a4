use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_shows_everything() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert_eq!(state.category_filter, None);
    assert_eq!(state.visible_labs().len(), LABS.len());
}

// =============================================================
// visible_labs
// =============================================================

#[test]
fn visible_labs_filters_by_category() {
    let state = UiState { category_filter: Some(Category::Sandbox), ..UiState::default() };
    let slugs: Vec<&str> = state.visible_labs().iter().map(|l| l.slug).collect();
    assert_eq!(slugs, vec!["sql", "portscan"]);
}

#[test]
fn visible_labs_search_is_case_insensitive() {
    let state = UiState { search: "  WCAG ".into(), ..UiState::default() };
    let slugs: Vec<&str> = state.visible_labs().iter().map(|l| l.slug).collect();
    assert_eq!(slugs, vec!["contrast"]);
}

#[test]
fn visible_labs_search_and_filter_combine() {
    let state = UiState {
        category_filter: Some(Category::Encoder),
        search: "base64".into(),
        ..UiState::default()
    };
    let slugs: Vec<&str> = state.visible_labs().iter().map(|l| l.slug).collect();
    assert_eq!(slugs, vec!["base64"]);
}

// =============================================================
// categories
// =============================================================

#[test]
fn categories_are_unique_in_catalog_order() {
    assert_eq!(
        categories(),
        vec![
            Category::Simulator,
            Category::Generator,
            Category::Encoder,
            Category::Calculator,
            Category::Sandbox,
        ]
    );
}
