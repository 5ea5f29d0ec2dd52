//! Log Panel Component
//!
//! Collapsible view of the recent log history kept by the rolling logger.

use leptos::prelude::*;
use rolling_logger::LogEntry;

use crate::browser::recent_logs;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (entries, set_entries) = signal(Vec::<LogEntry>::new());
    let refresh = move |_| set_entries.set(recent_logs());

    view! {
        <details class="log-panel">
            <summary on:click=refresh>"Diagnóstico"</summary>
            <button class="btn btn-sm btn-primary" on:click=refresh>"Atualizar"</button>
            <Show
                when=move || entries.with(|e| !e.is_empty())
                fallback=|| view! { <p class="log-empty">"Nenhum registro."</p> }
            >
                <ul class="log-list">
                    <For
                        each=move || entries.get()
                        key=|entry| entry.seq
                        children=|entry| {
                            let class = format!("log-{}", entry.level.as_str().to_lowercase());
                            view! { <li class=class>{entry.to_string()}</li> }
                        }
                    />
                </ul>
            </Show>
        </details>
    }
}
