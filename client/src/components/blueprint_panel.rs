//! AI blueprint panel: requirements in, flowchart and explanation out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts to `/api/blueprint` and renders the reply. The diagram text goes
//! through `labs::diagram::render_svg`; any render error shows the fixed
//! failure placeholder rather than a partial drawing. The button stays
//! disabled while a request is in flight and there is no retry.

#[cfg(test)]
#[path = "blueprint_panel_test.rs"]
mod blueprint_panel_test;

use labs::blueprint::Blueprint;
use labs::diagram::{RENDER_FAILED, render_svg};
use leptos::prelude::*;

use crate::components::copy_button::CopyButton;
use crate::util::markdown::render_markdown_html;

/// Rendered diagram: SVG markup, or `Err` with the placeholder text.
fn diagram_markup(diagram: &str) -> Result<String, &'static str> {
    render_svg(diagram).map_err(|_| RENDER_FAILED)
}

#[component]
pub fn BlueprintPanel() -> impl IntoView {
    let requirements = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let result = RwSignal::new(None::<Result<Blueprint, String>>);

    let generate = move |_| {
        let text = requirements.get_untracked();
        if text.trim().is_empty() || loading.get_untracked() {
            return;
        }
        loading.set(true);
        leptos::task::spawn_local(async move {
            let reply = crate::net::api::request_blueprint(&text).await;
            result.set(Some(reply));
            loading.set(false);
        });
    };

    let can_generate = move || !loading.get() && !requirements.with(|r| r.trim().is_empty());
    let diagram_source = Signal::derive(move || {
        result.with(|r| match r {
            Some(Ok(bp)) => bp.diagram.clone(),
            _ => String::new(),
        })
    });

    view! {
        <section class="blueprint">
            <textarea
                class="blueprint__input"
                rows="6"
                placeholder="Describe the system: users, services, storage, integrations..."
                prop:value=move || requirements.get()
                on:input=move |ev| requirements.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" on:click=generate disabled=move || !can_generate()>
                {move || if loading.get() { "Generating..." } else { "Generate blueprint" }}
            </button>

            {move || {
                result.with(|r| match r {
                    None => ().into_any(),
                    Some(Err(message)) => view! { <p class="lab-error">{message.clone()}</p> }.into_any(),
                    Some(Ok(bp)) => {
                        let diagram = match diagram_markup(&bp.diagram) {
                            Ok(svg) => view! { <div class="blueprint__diagram" inner_html=svg></div> }.into_any(),
                            Err(placeholder) => {
                                view! { <p class="blueprint__diagram blueprint__diagram--failed">{placeholder}</p> }
                                    .into_any()
                            }
                        };
                        let explanation = render_markdown_html(&bp.explanation);
                        view! {
                            {diagram}
                            <details class="blueprint__source">
                                <summary>"Diagram source"</summary>
                                <pre>{bp.diagram.clone()}</pre>
                                <CopyButton text=diagram_source/>
                            </details>
                            <div class="blueprint__explanation markdown-body" inner_html=explanation></div>
                        }
                            .into_any()
                    }
                })
            }}
        </section>
    }
}
