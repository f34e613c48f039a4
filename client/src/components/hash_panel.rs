//! SHA-2 digest panel.

use labs::hash::digest_all;
use leptos::prelude::*;

use crate::components::copy_button::CopyButton;

#[component]
pub fn HashPanel() -> impl IntoView {
    let input = RwSignal::new(String::new());

    view! {
        <section class="hash">
            <textarea
                class="codec__input"
                rows="4"
                placeholder="Text to hash"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            ></textarea>
            <dl class="hash__digests">
                {move || {
                    input.with(|text| digest_all(text))
                        .into_iter()
                        .map(|(algorithm, hex)| {
                            let copy = Signal::stored(hex.clone());
                            view! {
                                <dt>{algorithm.label()}</dt>
                                <dd>
                                    <code>{hex}</code>
                                    <CopyButton text=copy/>
                                </dd>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </dl>
        </section>
    }
}
