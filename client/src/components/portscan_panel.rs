//! Simulated port scanner panel. Nothing leaves the browser.

#[cfg(test)]
#[path = "portscan_panel_test.rs"]
mod portscan_panel_test;

use labs::portscan::{PortState, ScanReport, scan};
use leptos::prelude::*;

fn summary(report: &ScanReport) -> String {
    let count = |state: PortState| report.results.iter().filter(|r| r.state == state).count();
    format!(
        "{}: {} open, {} closed, {} filtered of {} scanned",
        report.host,
        count(PortState::Open),
        count(PortState::Closed),
        count(PortState::Filtered),
        report.results.len()
    )
}

#[component]
pub fn PortscanPanel() -> impl IntoView {
    let host = RwSignal::new("scanme.example".to_owned());
    let ports = RwSignal::new("20-25,53,80,443,3306,8080".to_owned());
    let show_all = RwSignal::new(false);
    let report = RwSignal::new(None::<Result<ScanReport, String>>);

    let run = move |_| {
        let outcome = scan(&host.get_untracked(), &ports.get_untracked()).map_err(|e| e.to_string());
        report.set(Some(outcome));
    };

    view! {
        <section class="portscan">
            <p class="lab-hint">"Results are simulated from the host name. No packets are sent."</p>
            <div class="portscan__inputs">
                <input type="text" placeholder="host" prop:value=move || host.get() on:input=move |ev| host.set(event_target_value(&ev))/>
                <input type="text" placeholder="ports, e.g. 1-1024,8080" prop:value=move || ports.get() on:input=move |ev| ports.set(event_target_value(&ev))/>
                <button class="btn btn--primary" on:click=run>"Scan"</button>
            </div>
            <label class="codec__toggle">
                <input type="checkbox" prop:checked=move || show_all.get() on:change=move |ev| show_all.set(event_target_checked(&ev))/>
                "Show closed and filtered ports"
            </label>
            {move || match report.get() {
                None => ().into_any(),
                Some(Err(message)) => view! { <p class="lab-error">{message}</p> }.into_any(),
                Some(Ok(rep)) => {
                    let all = show_all.get();
                    let rows = rep
                        .results
                        .iter()
                        .filter(|r| all || r.state == PortState::Open)
                        .map(|r| {
                            let class = format!("portscan__state portscan__state--{}", r.state.label());
                            view! {
                                <tr>
                                    <td>{r.port}</td>
                                    <td class=class>{r.state.label()}</td>
                                    <td>{r.service.unwrap_or("unknown")}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>();
                    view! {
                        <p class="portscan__summary">{summary(&rep)}</p>
                        <table class="lab-table">
                            <thead><tr><th>"Port"</th><th>"State"</th><th>"Service"</th></tr></thead>
                            <tbody>{rows}</tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
