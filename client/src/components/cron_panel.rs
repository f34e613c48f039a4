//! Cron explainer panel: English summary plus the next few run times.

use labs::cron::CronSchedule;
use leptos::prelude::*;
use time::format_description::well_known::Rfc3339;

const PREVIEW_RUNS: usize = 5;

#[component]
pub fn CronPanel() -> impl IntoView {
    let expr = RwSignal::new("*/15 9-17 * * mon-fri".to_owned());

    let parsed = Memo::new(move |_| expr.with(|e| CronSchedule::parse(e)).map_err(|e| e.to_string()));

    view! {
        <section class="cron">
            <input
                class="cron__input"
                type="text"
                placeholder="minute hour day-of-month month day-of-week"
                prop:value=move || expr.get()
                on:input=move |ev| expr.set(event_target_value(&ev))
            />
            {move || match parsed.get() {
                Ok(schedule) => {
                    let now = time::OffsetDateTime::now_utc();
                    let runs = schedule
                        .next_runs(now, PREVIEW_RUNS)
                        .into_iter()
                        .map(|t| {
                            let text = t.format(&Rfc3339).unwrap_or_else(|e| e.to_string());
                            view! { <li><code>{text}</code></li> }
                        })
                        .collect::<Vec<_>>();
                    let empty = runs.is_empty();
                    view! {
                        <p class="cron__summary">{schedule.describe()}</p>
                        <h3>"Next runs (UTC)"</h3>
                        <ol class="cron__runs">{runs}</ol>
                        {empty.then(|| view! { <p class="lab-hint">"No run in the next five years."</p> })}
                    }
                        .into_any()
                }
                Err(message) => view! { <p class="lab-error">{message}</p> }.into_any(),
            }}
        </section>
    }
}
