//! Conversation transcript: empty state, message bubbles, and the typing
//! indicator shown while a call is in flight.

use leptos::prelude::*;

use crate::state::catalog::{ModelId, descriptor};
use crate::state::chat::{ChatMessage, ChatState, Role};
use crate::util::clock::local_clock_label;

/// Scrolling message list for the chat view.
#[component]
pub fn Transcript() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages = Memo::new(move |_| chat.with(|c| c.messages.clone()));
    let count = Memo::new(move |_| messages.with(Vec::len));
    let processing = Memo::new(move |_| chat.with(|c| c.processing));
    let end_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = count.get();
        let _ = processing.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = end_ref.get() {
                el.scroll_into_view();
            }
        }
    });

    view! {
        <div class="transcript">
            <div class="transcript__inner">
                <Show
                    when=move || { count.get() > 0 }
                    fallback=|| {
                        view! {
                            <div class="transcript__empty">
                                <h3>"Talk to Identra OS"</h3>
                                <p>
                                    "Ask anything about your work, and keep the conversation flowing in a calm, focused space."
                                </p>
                            </div>
                        }
                    }
                >
                    <div class="transcript__list">
                        <For
                            each=move || messages.get()
                            key=|message| message.id
                            children=|message| view! { <MessageBubble message=message/> }
                        />
                        <Show when=move || processing.get()>
                            <TypingIndicator/>
                        </Show>
                    </div>
                </Show>
                <div class="transcript__end" node_ref=end_ref></div>
            </div>
        </div>
    }
}

/// One message, aligned by role, with engine name and clock label.
#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == Role::User;
    let model_key = message.model.map(ModelId::as_str);
    let model_name = message.model.map(|m| descriptor(m).name);
    let time = local_clock_label(message.timestamp);

    view! {
        <div class="message" class:message--user=is_user class:message--assistant={!is_user} data-model=model_key>
            <div class="chat-bubble" class:chat-bubble-user=is_user class:chat-bubble-assistant={!is_user}>
                <p class="chat-bubble__text">{message.content}</p>
            </div>
            <div class="message__meta">
                {model_name.map(|name| view! { <span class="message__model">{name}</span> })}
                <span class="message__time">{time}</span>
            </div>
        </div>
    }
}

#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="message message--assistant">
            <div class="typing-indicator">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    }
}
