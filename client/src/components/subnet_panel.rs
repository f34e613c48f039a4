//! IPv4 subnet calculator panel.

#[cfg(test)]
#[path = "subnet_panel_test.rs"]
mod subnet_panel_test;

use labs::subnet::{AddressClass, SubnetInfo, calculate};
use leptos::prelude::*;

fn class_label(class: AddressClass) -> &'static str {
    match class {
        AddressClass::A => "A",
        AddressClass::B => "B",
        AddressClass::C => "C",
        AddressClass::D => "D (multicast)",
        AddressClass::E => "E (reserved)",
    }
}

/// Label/value rows shown in the result table.
fn rows(info: &SubnetInfo) -> Vec<(&'static str, String)> {
    vec![
        ("Network", format!("{}/{}", info.network, info.prefix)),
        ("Netmask", info.netmask.to_string()),
        ("Wildcard", info.wildcard.to_string()),
        ("Broadcast", info.broadcast.to_string()),
        ("Host range", format!("{} - {}", info.first_host, info.last_host)),
        ("Usable hosts", info.usable_hosts.to_string()),
        ("Total addresses", info.total_addresses.to_string()),
        ("Class", class_label(info.class).to_owned()),
        ("Scope", if info.private { "Private" } else { "Public" }.to_owned()),
    ]
}

#[component]
pub fn SubnetPanel() -> impl IntoView {
    let cidr = RwSignal::new("192.168.1.0/24".to_owned());

    view! {
        <section class="subnet">
            <input
                class="subnet__input"
                type="text"
                placeholder="a.b.c.d/n"
                prop:value=move || cidr.get()
                on:input=move |ev| cidr.set(event_target_value(&ev))
            />
            {move || match cidr.with(|c| calculate(c)) {
                Ok(info) => {
                    let body = rows(&info)
                        .into_iter()
                        .map(|(label, value)| view! { <tr><th>{label}</th><td><code>{value}</code></td></tr> })
                        .collect::<Vec<_>>();
                    view! { <table class="lab-table">{body}</table> }.into_any()
                }
                Err(e) => view! { <p class="lab-error">{e.to_string()}</p> }.into_any(),
            }}
        </section>
    }
}
