//! "Copy" button with a short confirmation state.

use leptos::prelude::*;

/// Copies whatever `text` yields at click time. Shows "Copied" until the next
/// click, or "Copy failed" if the browser refuses.
#[component]
pub fn CopyButton(#[prop(into)] text: Signal<String>) -> impl IntoView {
    let status = RwSignal::new(None::<bool>);

    let on_click = move |_| {
        let value = text.get_untracked();
        if value.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            let ok = crate::util::clipboard::copy_text(&value).await;
            status.set(Some(ok));
        });
    };

    view! {
        <button class="btn btn--small copy-button" on:click=on_click disabled=move || text.with(String::is_empty)>
            {move || match status.get() {
                Some(true) => "Copied",
                Some(false) => "Copy failed",
                None => "Copy",
            }}
        </button>
    }
}
