//! Launcher view: a single quick-capture field.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::launcher::LauncherState;

/// Compact capture window. Enter vaults the text, Escape clears it.
#[component]
pub fn LauncherPage() -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let launcher = RwSignal::new(LauncherState::default());

    let submit = move || {
        let text = draft.get_untracked();
        let Some(payload) = launcher.try_update(|l| l.begin_capture(&text)).flatten() else {
            return;
        };
        draft.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::vault_memory(&payload).await;
            if let Err(e) = &result {
                leptos::logging::error!("launcher capture failed: {e}");
            }
            launcher.update(|l| l.finish_capture(result));
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            launcher.update(|l| l.finish_capture(Err("not available on server".to_owned())));
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            submit();
        }
        "Escape" => {
            draft.set(String::new());
            launcher.update(LauncherState::clear);
        }
        _ => {}
    };

    view! {
        <div class="launcher-page">
            <input
                class="launcher-page__input"
                type="text"
                placeholder="Capture a memory..."
                autofocus=true
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=on_keydown
                disabled=move || launcher.with(|l| l.pending)
            />
            <div class="launcher-page__outcome">{move || launcher.with(|l| l.outcome.clone())}</div>
            <div class="launcher-page__hint">"Enter to vault · Esc to clear"</div>
        </div>
    }
}
