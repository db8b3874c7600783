//! Footer status bar under the composer.

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Product label and enclave indicator. The enclave reads as active until a
/// fetched status says otherwise.
#[component]
pub fn StatusBar() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let active = move || chat.with(ChatState::enclave_active);
    let label = move || if active() { "SECURE ENCLAVE ACTIVE" } else { "SECURE ENCLAVE OFFLINE" };

    view! {
        <div class="status-bar">
            <span>"IDENTRA OS V1.0"</span>
            <span class="status-bar__divider">"•"</span>
            <span class="status-bar__enclave">
                <span class="status-dot" class:status-dot--offline=move || !active()></span>
                {label}
            </span>
        </div>
    }
}
