//! Message input with send button.

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Composer bound to the page's draft signal.
///
/// The input is disabled while a call is in flight; the button additionally
/// stays disabled while the draft is blank. Enter sends, Shift+Enter does not.
#[component]
pub fn Composer(draft: RwSignal<String>, on_send: Callback<()>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let processing = Memo::new(move |_| chat.with(|c| c.processing));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_send.run(());
        }
    };

    view! {
        <div class="composer">
            <div class="composer__row">
                <input
                    class="composer__input"
                    type="text"
                    placeholder="Type a message to Identra..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=move || processing.get()
                />
                <button
                    class="composer__send"
                    title="Send"
                    on:click=move |_| on_send.run(())
                    disabled=move || processing.get() || draft.with(|d| d.trim().is_empty())
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
