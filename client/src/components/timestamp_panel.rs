//! Unix timestamp <-> RFC 3339 converter panel.

use labs::timestamp::{Unit, from_unix, to_unix};
use leptos::prelude::*;

#[component]
pub fn TimestampPanel() -> impl IntoView {
    let unix_input = RwSignal::new(String::new());
    let date_input = RwSignal::new(String::new());

    let use_now = move |_| {
        let now = time::OffsetDateTime::now_utc().unix_timestamp();
        unix_input.set(now.to_string());
    };

    view! {
        <section class="timestamp">
            <h3>"Unix → date"</h3>
            <div class="timestamp__row">
                <input
                    type="text"
                    placeholder="1700000000 or 1700000000000"
                    prop:value=move || unix_input.get()
                    on:input=move |ev| unix_input.set(event_target_value(&ev))
                />
                <button class="btn" on:click=use_now>"Now"</button>
            </div>
            {move || {
                let raw = unix_input.get();
                if raw.trim().is_empty() {
                    return ().into_any();
                }
                match from_unix(&raw) {
                    Ok(c) => {
                        let unit = match c.unit {
                            Unit::Seconds => "seconds",
                            Unit::Milliseconds => "milliseconds",
                        };
                        view! { <p class="timestamp__result"><code>{c.rfc3339}</code>" (read as "{unit}")"</p> }
                            .into_any()
                    }
                    Err(e) => view! { <p class="lab-error">{e.to_string()}</p> }.into_any(),
                }
            }}

            <h3>"Date → unix"</h3>
            <input
                type="text"
                placeholder="2024-01-01T00:00:00Z"
                prop:value=move || date_input.get()
                on:input=move |ev| date_input.set(event_target_value(&ev))
            />
            {move || {
                let raw = date_input.get();
                if raw.trim().is_empty() {
                    return ().into_any();
                }
                match to_unix(&raw) {
                    Ok(secs) => view! { <p class="timestamp__result"><code>{secs}</code></p> }.into_any(),
                    Err(e) => view! { <p class="lab-error">{e.to_string()}</p> }.into_any(),
                }
            }}
        </section>
    }
}
