//! Mock SQL sandbox panel. Queries run against the fixed in-memory dataset.

#[cfg(test)]
#[path = "sql_panel_test.rs"]
mod sql_panel_test;

use labs::sql::{QueryResult, execute, tables};
use leptos::prelude::*;

const EXAMPLE_QUERY: &str = "SELECT name, country FROM users WHERE age > 35 ORDER BY name";

fn row_summary(result: &QueryResult) -> String {
    match result.rows.len() {
        1 => "1 row".to_owned(),
        n => format!("{n} rows"),
    }
}

#[component]
pub fn SqlPanel() -> impl IntoView {
    let query = RwSignal::new(EXAMPLE_QUERY.to_owned());
    let result = RwSignal::new(None::<Result<QueryResult, String>>);

    let run = move || {
        let outcome = query.with_untracked(|q| execute(q)).map_err(|e| e.to_string());
        result.set(Some(outcome));
    };

    let schema = tables()
        .iter()
        .map(|t| {
            view! {
                <li>
                    <code>{t.name}</code>
                    {format!(" ({}) · {} rows", t.columns.join(", "), t.row_count())}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="sql">
            <ul class="sql__schema">{schema}</ul>
            <textarea
                class="sql__query"
                rows="4"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
                        ev.prevent_default();
                        run();
                    }
                }
            ></textarea>
            <button class="btn btn--primary" on:click=move |_| run()>"Run (Ctrl+Enter)"</button>
            {move || match result.get() {
                None => ().into_any(),
                Some(Err(message)) => view! { <p class="lab-error">{message}</p> }.into_any(),
                Some(Ok(res)) => {
                    let summary = row_summary(&res);
                    let head = res.columns.iter().map(|c| view! { <th>{c.clone()}</th> }).collect::<Vec<_>>();
                    let body = res
                        .rows
                        .iter()
                        .map(|row| {
                            let cells = row.iter().map(|v| view! { <td>{v.to_string()}</td> }).collect::<Vec<_>>();
                            view! { <tr>{cells}</tr> }
                        })
                        .collect::<Vec<_>>();
                    view! {
                        <p class="lab-hint">{summary}</p>
                        <table class="lab-table sql__result">
                            <thead><tr>{head}</tr></thead>
                            <tbody>{body}</tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
