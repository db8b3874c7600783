//! Chat view: sidebar, transcript, composer, status bar, context panel.

use leptos::prelude::*;

use crate::components::composer::Composer;
use crate::components::context_panel::ContextPanel;
use crate::components::sidebar::Sidebar;
use crate::components::status_bar::StatusBar;
use crate::components::transcript::Transcript;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::chat::ChatState;
use crate::state::ui::UiState;
use crate::util::clock;

/// Chat page. Owns the conversation and panel state for its lifetime.
///
/// Fetches host status once on mount; a failed fetch is only logged. Each
/// send appends the user message at once, then exactly one assistant message
/// when the `vault_memory` call settles.
#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState::default());
    let draft = RwSignal::new(String::new());
    provide_context(chat);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api::get_system_status().await {
                Ok(status) => chat.update(|c| c.set_status(status)),
                Err(e) => leptos::logging::error!("Failed to get status: {e}"),
            }
        });
    });

    let send = Callback::new(move |()| {
        let text = draft.get_untracked();
        let Some(payload) = chat.try_update(|c| c.begin_send(&text, clock::now_ms())).flatten() else {
            return;
        };
        draft.set(String::new());
        let model = ui.with_untracked(|u| u.selected_model);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::vault_memory(&payload).await;
            if let Err(e) = &result {
                leptos::logging::error!("Error: {e}");
            }
            chat.update(|c| c.finish_send(result, model, clock::now_ms()));
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            chat.update(|c| c.finish_send(Err("not available on server".to_owned()), model, clock::now_ms()));
        }
    });

    view! {
        <div class="chat-page">
            <Sidebar/>
            <main class="chat-page__main">
                <Transcript/>
                <Composer draft on_send=send/>
                <StatusBar/>
            </main>
            <ContextPanel/>
        </div>
    }
}
