//! WCAG contrast checker panel with a live preview swatch.

use labs::contrast::{assess, parse_hex_rgb};
use leptos::prelude::*;

fn grade(pass: bool) -> &'static str {
    if pass { "Pass" } else { "Fail" }
}

#[component]
pub fn ContrastPanel() -> impl IntoView {
    let foreground = RwSignal::new("#1f2933".to_owned());
    let background = RwSignal::new("#ffffff".to_owned());

    let assessment = Memo::new(move |_| assess(&foreground.get(), &background.get()).map_err(|e| e.to_string()));
    let preview_style = move || {
        let ok = foreground.with(|f| parse_hex_rgb(f).is_ok()) && background.with(|b| parse_hex_rgb(b).is_ok());
        if ok {
            format!("color: {}; background: {};", foreground.get().trim(), background.get().trim())
        } else {
            String::new()
        }
    };

    view! {
        <section class="contrast">
            <div class="contrast__inputs">
                <label>
                    "Text"
                    <input type="text" prop:value=move || foreground.get() on:input=move |ev| foreground.set(event_target_value(&ev))/>
                </label>
                <label>
                    "Background"
                    <input type="text" prop:value=move || background.get() on:input=move |ev| background.set(event_target_value(&ev))/>
                </label>
            </div>
            <div class="contrast__preview" style=preview_style>
                <p class="contrast__large">"Large text sample"</p>
                <p>"Normal body text sample."</p>
            </div>
            {move || match assessment.get() {
                Ok(a) => view! {
                    <p class="contrast__ratio">{format!("{:.2}:1", a.ratio)}</p>
                    <table class="lab-table">
                        <tr><th></th><th>"Normal"</th><th>"Large"</th></tr>
                        <tr><th>"AA"</th><td>{grade(a.aa_normal)}</td><td>{grade(a.aa_large)}</td></tr>
                        <tr><th>"AAA"</th><td>{grade(a.aaa_normal)}</td><td>{grade(a.aaa_large)}</td></tr>
                    </table>
                }
                    .into_any(),
                Err(message) => view! { <p class="lab-error">{message}</p> }.into_any(),
            }}
        </section>
    }
}
