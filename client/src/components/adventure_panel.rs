//! Text adventure panel: transcript plus a command line.

use labs::adventure::{Adventure, HELP};
use leptos::prelude::*;

#[derive(Clone)]
struct Line {
    command: Option<String>,
    reply: String,
}

fn opening(game: &Adventure) -> Vec<Line> {
    vec![Line { command: None, reply: format!("{}\n\n{HELP}", game.look()) }]
}

#[component]
pub fn AdventurePanel() -> impl IntoView {
    let game = RwSignal::new(Adventure::new());
    let transcript = RwSignal::new(game.with_untracked(opening));
    let input = RwSignal::new(String::new());

    let submit = move || {
        let command = input.get_untracked();
        if command.trim().is_empty() {
            return;
        }
        let mut reply = String::new();
        game.update(|g| reply = g.command(&command));
        transcript.update(|t| t.push(Line { command: Some(command.trim().to_owned()), reply }));
        input.set(String::new());
    };

    let restart = move |_| {
        game.set(Adventure::new());
        transcript.set(game.with_untracked(opening));
    };

    view! {
        <section class="adventure">
            <div class="adventure__transcript">
                {move || {
                    transcript
                        .get()
                        .into_iter()
                        .map(|line| {
                            view! {
                                <div class="adventure__entry">
                                    {line.command.map(|c| view! { <p class="adventure__command">{format!("> {c}")}</p> })}
                                    <pre class="adventure__reply">{line.reply}</pre>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class="adventure__input-row">
                <input
                    class="adventure__input"
                    type="text"
                    placeholder="go north, take lamp, look..."
                    disabled=move || game.with(Adventure::is_won)
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| submit()>"Go"</button>
                <button class="btn" on:click=restart>"Restart"</button>
            </div>
            <p class="adventure__moves">
                {move || {
                    game.with(|g| {
                        if g.is_won() {
                            format!("You won in {} moves.", g.moves())
                        } else {
                            format!("Moves: {}", g.moves())
                        }
                    })
                }}
            </p>
        </section>
    }
}
