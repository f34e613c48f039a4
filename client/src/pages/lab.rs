//! Single-lab page: header, back link, and the panel for the route slug.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::theme_toggle::ThemeToggle;
use crate::components::{
    adventure_panel::AdventurePanel, base64_panel::Base64Panel, blueprint_panel::BlueprintPanel,
    contrast_panel::ContrastPanel, cron_panel::CronPanel, hash_panel::HashPanel, incident_panel::IncidentPanel,
    jwt_panel::JwtPanel, pomodoro_panel::PomodoroPanel, portscan_panel::PortscanPanel, sql_panel::SqlPanel,
    subnet_panel::SubnetPanel, timestamp_panel::TimestampPanel, uuid_panel::UuidPanel, xor_panel::XorPanel,
};

/// Mount the panel registered for `slug`, or `None` for an unknown slug.
fn panel_for(slug: &str) -> Option<AnyView> {
    let view = match slug {
        "incident" => view! { <IncidentPanel/> }.into_any(),
        "pomodoro" => view! { <PomodoroPanel/> }.into_any(),
        "adventure" => view! { <AdventurePanel/> }.into_any(),
        "blueprint" => view! { <BlueprintPanel/> }.into_any(),
        "uuid" => view! { <UuidPanel/> }.into_any(),
        "base64" => view! { <Base64Panel/> }.into_any(),
        "xor" => view! { <XorPanel/> }.into_any(),
        "hash" => view! { <HashPanel/> }.into_any(),
        "jwt" => view! { <JwtPanel/> }.into_any(),
        "subnet" => view! { <SubnetPanel/> }.into_any(),
        "contrast" => view! { <ContrastPanel/> }.into_any(),
        "cron" => view! { <CronPanel/> }.into_any(),
        "timestamp" => view! { <TimestampPanel/> }.into_any(),
        "sql" => view! { <SqlPanel/> }.into_any(),
        "portscan" => view! { <PortscanPanel/> }.into_any(),
        _ => return None,
    };
    Some(view)
}

#[component]
pub fn LabPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());

    view! {
        <div class="lab-page">
            <header class="lab-page__header">
                <A href="/" attr:class="lab-page__back">"← All labs"</A>
                {move || {
                    labs::catalog::find(&slug.get())
                        .map(|lab| {
                            view! {
                                <h1>{lab.title}</h1>
                                <p class="lab-page__blurb">{lab.blurb}</p>
                            }
                        })
                }}
                <ThemeToggle/>
            </header>

            // Re-keyed on slug so navigating between labs drops the old panel's state.
            {move || {
                let slug = slug.get();
                panel_for(&slug).unwrap_or_else(|| {
                    view! { <p class="lab-page__missing">{format!("No lab called '{slug}'.")}</p> }.into_any()
                })
            }}
        </div>
    }
}
