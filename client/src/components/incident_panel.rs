//! On-call incident simulator panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The scenario graph and session logic live in `labs::incident`. This panel
//! renders the current scene, forwards option clicks to
//! `Session::select_option`, and feeds the returned `TimerEffect` to a
//! `Ticker` that owns the one-second elapsed counter. The ticker is stopped on
//! cleanup so leaving the page never strands an interval.

#[cfg(test)]
#[path = "incident_panel_test.rs"]
mod incident_panel_test;

use labs::clock::{TimerEffect, Ticker};
use labs::incident::{Outcome, Scenario, Session};
use leptos::prelude::*;

use crate::util::clock::BrowserClock;

/// Status line under the timer.
fn status_label(outcome: Outcome, active: bool) -> &'static str {
    match outcome {
        Outcome::Resolved => "Resolved",
        Outcome::Failed => "Outage extended",
        Outcome::Live if active => "Incident in progress",
        Outcome::Live => "Paged. Awaiting your first move",
    }
}

/// Scene titles along the path taken, joined with arrows.
fn trail(scenario: &Scenario, session: &Session) -> String {
    session
        .history()
        .iter()
        .map(|id| scenario.scene(id).map_or(id.as_str(), |s| s.title.as_str()))
        .collect::<Vec<_>>()
        .join(" → ")
}

#[component]
pub fn IncidentPanel() -> impl IntoView {
    let scenario = match labs::incident::database_outage() {
        Ok(scenario) => scenario,
        Err(e) => {
            return view! { <p class="lab-error">{format!("Scenario failed to load: {e}")}</p> }.into_any();
        }
    };
    let session = RwSignal::new(Session::new(&scenario));
    let scenario = StoredValue::new(scenario);
    let ticker = StoredValue::new_local(Ticker::per_second(BrowserClock::default()));

    let on_tick = move || {
        session.update(|s| {
            s.tick();
        });
    };
    let apply = move |effect: TimerEffect| ticker.update_value(|t| t.apply(effect, on_tick));

    let select = move |index: usize| {
        let mut effect = TimerEffect::Keep;
        scenario.with_value(|sc| session.update(|s| effect = s.select_option(sc, index)));
        apply(effect);
    };
    let restart = move |_| {
        let mut effect = TimerEffect::Keep;
        scenario.with_value(|sc| session.update(|s| effect = s.restart(sc)));
        apply(effect);
    };

    on_cleanup(move || {
        ticker.update_value(|t| {
            t.stop();
        });
    });

    let scene_view = move || {
        scenario.with_value(|sc| {
            session.with(|s| {
                let Some(scene) = s.current_scene(sc) else {
                    return view! { <p class="lab-error">"Unknown scene."</p> }.into_any();
                };
                let outcome = scene.outcome();
                let options = scene
                    .options()
                    .iter()
                    .enumerate()
                    .map(|(index, option)| {
                        let class = format!("incident__option incident__option--{}", option.risk.css_modifier());
                        view! {
                            <button class=class on:click=move |_| select(index)>
                                {option.label.clone()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <article
                        class="incident__scene"
                        class:incident__scene--resolved=outcome == Outcome::Resolved
                        class:incident__scene--failed=outcome == Outcome::Failed
                    >
                        <h2>{scene.title.clone()}</h2>
                        <p class="incident__text">{scene.text.clone()}</p>
                        <div class="incident__options">{options}</div>
                    </article>
                }
                    .into_any()
            })
        })
    };

    view! {
        <section class="incident">
            <div class="incident__status">
                <span class="incident__clock">{move || session.with(Session::elapsed_label)}</span>
                <span class="incident__state">
                    {move || {
                        scenario.with_value(|sc| {
                            session.with(|s| {
                                let outcome = s.current_scene(sc).map_or(Outcome::Live, |scene| scene.outcome());
                                status_label(outcome, s.is_active())
                            })
                        })
                    }}
                </span>
                <button class="btn incident__restart" on:click=restart>"Restart"</button>
            </div>
            {scene_view}
            <p class="incident__trail">{move || scenario.with_value(|sc| session.with(|s| trail(sc, s)))}</p>
        </section>
    }
        .into_any()
}
