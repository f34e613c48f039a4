//! UUID v4 batch generator panel.

use labs::ids::{Format, MAX_BATCH};
use leptos::prelude::*;

use crate::components::copy_button::CopyButton;

fn parse_format(raw: &str) -> Format {
    match raw {
        "simple" => Format::Simple,
        "uppercase" => Format::Uppercase,
        _ => Format::Hyphenated,
    }
}

#[component]
pub fn UuidPanel() -> impl IntoView {
    let count = RwSignal::new(5usize);
    let format = RwSignal::new(Format::Hyphenated);
    let batch = RwSignal::new(Ok::<Vec<String>, String>(Vec::new()));

    let generate = move |_| {
        let result = labs::ids::generate(count.get_untracked(), format.get_untracked()).map_err(|e| e.to_string());
        batch.set(result);
    };
    let joined = Signal::derive(move || batch.with(|b| b.as_ref().map(|ids| ids.join("\n")).unwrap_or_default()));

    view! {
        <section class="uuid">
            <div class="uuid__controls">
                <label>
                    "Count"
                    <input
                        type="number"
                        min="1"
                        max=MAX_BATCH.to_string()
                        prop:value=move || count.get().to_string()
                        on:input=move |ev| count.set(event_target_value(&ev).trim().parse().unwrap_or(0))
                    />
                </label>
                <select on:change=move |ev| format.set(parse_format(&event_target_value(&ev)))>
                    <option value="hyphenated">"Hyphenated"</option>
                    <option value="simple">"Simple"</option>
                    <option value="uppercase">"Uppercase"</option>
                </select>
                <button class="btn btn--primary" on:click=generate>"Generate"</button>
            </div>
            {move || match batch.get() {
                Ok(ids) => view! { <pre class="uuid__list">{ids.join("\n")}</pre> }.into_any(),
                Err(message) => view! { <p class="lab-error">{message}</p> }.into_any(),
            }}
            <CopyButton text=joined/>
        </section>
    }
}
