//! Theme preference: read, apply, persist.
//!
//! The choice lives in `localStorage` under [`STORAGE_KEY`] and is applied as
//! a `data-theme` attribute on `<html>`. With nothing stored, the system
//! `prefers-color-scheme` wins. SSR paths do nothing so server output stays
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const STORAGE_KEY: &str = "labdeck_dark";

/// Value written to `data-theme`.
#[must_use]
pub fn theme_attr(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Interpret a stored preference. Anything unrecognised counts as unset.
#[must_use]
pub fn parse_stored(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Stored preference, falling back to the system setting. Always `false` on
/// the server.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(stored) = storage.get_item(STORAGE_KEY).ok().flatten().as_deref().and_then(parse_stored) {
                return stored;
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(e) = el.set_attribute("data-theme", theme_attr(enabled)) {
                log::warn!("set data-theme failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist it. Returns the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if let Err(e) = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" }) {
                log::warn!("persisting theme failed: {e:?}");
            }
        }
    }
    next
}
