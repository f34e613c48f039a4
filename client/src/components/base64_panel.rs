//! Base64 encode/decode panel.

use leptos::prelude::*;

use crate::components::copy_button::CopyButton;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Encode,
    Decode,
}

#[component]
pub fn Base64Panel() -> impl IntoView {
    let mode = RwSignal::new(Mode::Encode);
    let input = RwSignal::new(String::new());

    let output = Memo::new(move |_| {
        input.with(|text| match mode.get() {
            Mode::Encode => Ok(labs::base64::encode(text)),
            Mode::Decode if text.trim().is_empty() => Ok(String::new()),
            Mode::Decode => labs::base64::decode(text).map_err(|e| e.to_string()),
        })
    });
    let copyable = Signal::derive(move || output.with(|o| o.clone().unwrap_or_default()));

    view! {
        <section class="codec">
            <div class="codec__modes">
                <button class="chip" class:chip--active=move || mode.get() == Mode::Encode on:click=move |_| mode.set(Mode::Encode)>
                    "Encode"
                </button>
                <button class="chip" class:chip--active=move || mode.get() == Mode::Decode on:click=move |_| mode.set(Mode::Decode)>
                    "Decode"
                </button>
            </div>
            <textarea
                class="codec__input"
                rows="5"
                placeholder=move || if mode.get() == Mode::Encode { "Text to encode" } else { "Base64 to decode" }
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            ></textarea>
            {move || match output.get() {
                Ok(text) => view! { <pre class="codec__output">{text}</pre> }.into_any(),
                Err(message) => view! { <p class="lab-error">{message}</p> }.into_any(),
            }}
            <CopyButton text=copyable/>
        </section>
    }
}
