//! Dashboard page: a filterable grid of lab cards.

use leptos::prelude::*;

use crate::components::lab_card::LabCard;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::{UiState, categories};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let chips = categories()
        .into_iter()
        .map(|category| {
            let active = move || ui.with(|u| u.category_filter == Some(category));
            let on_click = move |_| {
                ui.update(|u| {
                    u.category_filter = if u.category_filter == Some(category) { None } else { Some(category) };
                });
            };
            view! {
                <button class="chip" class:chip--active=active on:click=on_click>
                    {category.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Labdeck"</h1>
                <input
                    class="dashboard-page__search"
                    type="search"
                    placeholder="Filter labs..."
                    prop:value=move || ui.with(|u| u.search.clone())
                    on:input=move |ev| ui.update(|u| u.search = event_target_value(&ev))
                />
                <ThemeToggle/>
            </header>

            <nav class="dashboard-page__chips">{chips}</nav>

            <div class="dashboard-page__cards">
                {move || {
                    let labs = ui.with(UiState::visible_labs);
                    if labs.is_empty() {
                        return view! { <p class="dashboard-page__empty">"No labs match."</p> }.into_any();
                    }
                    labs.into_iter()
                        .map(|lab| view! { <LabCard lab=lab/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </div>
    }
}
