#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use gateway::SystemStatus;

use super::catalog::ModelId;

/// Conversation state for the chat view.
///
/// Provided to components as an `RwSignal<ChatState>` context. The message
/// list is append-only; `processing` is set while one gateway call is in
/// flight and blocks further sends until the call settles. The composer's
/// draft lives in its own signal so typing never notifies the transcript.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub processing: bool,
    /// Last successful `get_system_status` result.
    pub status: Option<SystemStatus>,
}

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single transcript message. Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
    /// Engine that answered. `None` for user messages and failures.
    pub model: Option<ModelId>,
}

/// Text shown in place of a reply when the gateway call fails.
#[must_use]
pub fn failure_text(err: &str) -> String {
    format!("Error: {err}")
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn time_derived_id(now_ms: f64, last: Option<u64>) -> u64 {
    let now = if now_ms.is_finite() && now_ms > 0.0 { now_ms as u64 } else { 0 };
    match last {
        Some(last) if now <= last => last + 1,
        _ => now,
    }
}

impl ChatState {
    /// Whether the composer may send `draft` right now.
    #[must_use]
    pub fn can_send(&self, draft: &str) -> bool {
        !self.processing && !draft.trim().is_empty()
    }

    fn push(&mut self, role: Role, content: String, now_ms: f64, model: Option<ModelId>) {
        let id = time_derived_id(now_ms, self.messages.last().map(|m| m.id));
        self.messages.push(ChatMessage { id, role, content, timestamp: now_ms, model });
    }

    /// Start a send from the composer draft.
    ///
    /// Appends the user message and marks the state as processing. Returns
    /// the payload to forward to the gateway, or `None` (with no change)
    /// when the draft is blank or a call is in flight. The caller clears the
    /// draft only on `Some`.
    pub fn begin_send(&mut self, draft: &str, now_ms: f64) -> Option<String> {
        if !self.can_send(draft) {
            return None;
        }
        let payload = draft.to_owned();
        self.push(Role::User, payload.clone(), now_ms, None);
        self.processing = true;
        Some(payload)
    }

    /// Settle the in-flight call with exactly one assistant message.
    pub fn finish_send(&mut self, result: Result<String, String>, model: ModelId, now_ms: f64) {
        match result {
            Ok(reply) => self.push(Role::Assistant, reply, now_ms, Some(model)),
            Err(err) => self.push(Role::Assistant, failure_text(&err), now_ms, None),
        }
        self.processing = false;
    }

    pub fn set_status(&mut self, status: SystemStatus) {
        self.status = Some(status);
    }

    /// Whether the footer should report the enclave as active. Unknown
    /// status counts as active.
    #[must_use]
    pub fn enclave_active(&self) -> bool {
        self.status.as_ref().map_or(true, |s| s.enclave_connection)
    }
}
