//! JWT inspector panel: decoded parts, time claims, optional HS256 check.

#[cfg(test)]
#[path = "jwt_panel_test.rs"]
mod jwt_panel_test;

use labs::jwt::{JwtError, inspect, verify_hs256};
use leptos::prelude::*;

/// Badge text for an HS256 check.
fn verification_label(result: &Result<bool, JwtError>) -> String {
    match result {
        Ok(true) => "Signature valid".to_owned(),
        Ok(false) => "Signature does not match".to_owned(),
        Err(e) => e.to_string(),
    }
}

fn expiry_label(expired: Option<bool>) -> &'static str {
    match expired {
        Some(true) => "Expired",
        Some(false) => "Not expired",
        None => "No exp claim",
    }
}

#[component]
pub fn JwtPanel() -> impl IntoView {
    let token = RwSignal::new(String::new());
    let secret = RwSignal::new(String::new());

    let inspection = Memo::new(move |_| {
        let token = token.get();
        if token.trim().is_empty() {
            return None;
        }
        let now = time::OffsetDateTime::now_utc().unix_timestamp();
        Some(inspect(&token, now).map_err(|e| e.to_string()))
    });

    let verification = move || {
        let secret = secret.get();
        if secret.is_empty() {
            return None;
        }
        Some(token.with(|t| verification_label(&verify_hs256(t, &secret))))
    };

    view! {
        <section class="jwt">
            <textarea
                class="codec__input"
                rows="4"
                placeholder="Paste a JWT (header.payload.signature)"
                prop:value=move || token.get()
                on:input=move |ev| token.set(event_target_value(&ev))
            ></textarea>
            {move || match inspection.get() {
                None => ().into_any(),
                Some(Err(message)) => view! { <p class="lab-error">{message}</p> }.into_any(),
                Some(Ok(jwt)) => {
                    let claims = jwt
                        .time_claims
                        .iter()
                        .map(|c| view! { <li><code>{c.name}</code>" "{c.rfc3339.clone()}</li> })
                        .collect::<Vec<_>>();
                    view! {
                        <div class="jwt__summary">
                            <span class="jwt__alg">{jwt.algorithm.clone().unwrap_or_else(|| "no alg".to_owned())}</span>
                            <span class="jwt__expiry" class:jwt__expiry--expired=jwt.expired == Some(true)>
                                {expiry_label(jwt.expired)}
                            </span>
                        </div>
                        <h3>"Header"</h3>
                        <pre class="jwt__json">{jwt.header_pretty.clone()}</pre>
                        <h3>"Payload"</h3>
                        <pre class="jwt__json">{jwt.payload_pretty.clone()}</pre>
                        <ul class="jwt__claims">{claims}</ul>
                    }
                        .into_any()
                }
            }}
            <input
                class="codec__key"
                type="password"
                placeholder="HS256 secret (optional)"
                prop:value=move || secret.get()
                on:input=move |ev| secret.set(event_target_value(&ev))
            />
            {move || verification().map(|label| view! { <p class="jwt__verify">{label}</p> })}
        </section>
    }
}
