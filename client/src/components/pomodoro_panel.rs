//! Pomodoro timer panel.
//!
//! Same timer wiring as the incident panel: transitions return a
//! `TimerEffect`, a `Ticker` applies it, cleanup stops it.

use labs::clock::{TimerEffect, Ticker};
use labs::pomodoro::{LONG_BREAK_EVERY, Pomodoro};
use leptos::prelude::*;

use crate::util::clock::BrowserClock;

#[component]
pub fn PomodoroPanel() -> impl IntoView {
    let pomodoro = RwSignal::new(Pomodoro::new());
    let ticker = StoredValue::new_local(Ticker::per_second(BrowserClock::default()));

    // A tick can only arrive while running, so its effect is always Keep.
    let on_tick = move || {
        pomodoro.update(|p| {
            p.tick();
        });
    };
    let transition = move |step: fn(&mut Pomodoro) -> TimerEffect| {
        let mut effect = TimerEffect::Keep;
        pomodoro.update(|p| effect = step(p));
        ticker.update_value(|t| t.apply(effect, on_tick));
    };

    on_cleanup(move || {
        ticker.update_value(|t| {
            t.stop();
        });
    });

    let progress_style = move || format!("width: {:.1}%", pomodoro.with(Pomodoro::progress) * 100.0);

    view! {
        <section class="pomodoro">
            <p class="pomodoro__phase">{move || pomodoro.with(|p| p.phase().label())}</p>
            <p class="pomodoro__time">{move || pomodoro.with(Pomodoro::remaining_label)}</p>
            <div class="pomodoro__bar">
                <div class="pomodoro__fill" style=progress_style></div>
            </div>
            <div class="pomodoro__controls">
                {move || {
                    if pomodoro.with(Pomodoro::is_running) {
                        view! { <button class="btn" on:click=move |_| transition(Pomodoro::pause)>"Pause"</button> }
                            .into_any()
                    } else {
                        view! {
                            <button class="btn btn--primary" on:click=move |_| transition(Pomodoro::start)>
                                "Start"
                            </button>
                        }
                            .into_any()
                    }
                }}
                <button class="btn" on:click=move |_| transition(Pomodoro::skip)>"Skip"</button>
                <button class="btn" on:click=move |_| transition(Pomodoro::reset)>"Reset"</button>
            </div>
            <p class="pomodoro__count">
                {move || {
                    let done = pomodoro.with(Pomodoro::completed_work);
                    format!("{done} focus blocks done · long break every {LONG_BREAK_EVERY}")
                }}
            </p>
        </section>
    }
}
