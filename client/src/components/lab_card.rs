//! Dashboard card linking to one lab.

use labs::catalog::LabInfo;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LabCard(lab: &'static LabInfo) -> impl IntoView {
    view! {
        <A href=format!("/lab/{}", lab.slug) attr:class="lab-card">
            <span class="lab-card__category">{lab.category.label()}</span>
            <h2 class="lab-card__title">{lab.title}</h2>
            <p class="lab-card__blurb">{lab.blurb}</p>
        </A>
    }
}
