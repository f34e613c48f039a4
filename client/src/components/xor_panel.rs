//! Repeating-key XOR panel.

use leptos::prelude::*;

use crate::components::copy_button::CopyButton;

#[component]
pub fn XorPanel() -> impl IntoView {
    let decrypt = RwSignal::new(false);
    let input = RwSignal::new(String::new());
    let key = RwSignal::new(String::new());

    let output = Memo::new(move |_| {
        let text = input.get();
        if text.is_empty() {
            return Ok(String::new());
        }
        let key = key.get();
        let result = if decrypt.get() { labs::xor::unxor_hex(&text, &key) } else { labs::xor::xor_hex(&text, &key) };
        result.map_err(|e| e.to_string())
    });
    let copyable = Signal::derive(move || output.with(|o| o.clone().unwrap_or_default()));

    view! {
        <section class="codec">
            <label class="codec__toggle">
                <input
                    type="checkbox"
                    prop:checked=move || decrypt.get()
                    on:change=move |ev| decrypt.set(event_target_checked(&ev))
                />
                "Decode hex back to text"
            </label>
            <input
                class="codec__key"
                type="text"
                placeholder="Key"
                prop:value=move || key.get()
                on:input=move |ev| key.set(event_target_value(&ev))
            />
            <textarea
                class="codec__input"
                rows="4"
                placeholder=move || if decrypt.get() { "Hex ciphertext" } else { "Plain text" }
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
