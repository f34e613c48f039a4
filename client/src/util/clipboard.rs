//! Clipboard write helper.

/// Copy `text` to the system clipboard. Returns `true` once the browser
/// confirms the write; always `false` on the server.
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(clipboard) = web_sys::window().map(|w| w.navigator().clipboard()) else {
            return false;
        };
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await {
            Ok(_) => true,
            Err(e) => {
                log::warn!("clipboard write failed: {e:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}
