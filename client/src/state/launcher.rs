#[cfg(test)]
#[path = "launcher_test.rs"]
mod launcher_test;

use super::chat::failure_text;

/// Quick-capture state for the launcher view.
///
/// At most one capture is in flight. `outcome` holds the line shown under
/// the field for the last settled capture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LauncherState {
    pub pending: bool,
    pub outcome: Option<String>,
}

impl LauncherState {
    /// Start a capture of `draft`. Returns the payload to vault, or `None`
    /// when the draft is blank or a capture is already pending.
    pub fn begin_capture(&mut self, draft: &str) -> Option<String> {
        if self.pending || draft.trim().is_empty() {
            return None;
        }
        self.pending = true;
        Some(draft.to_owned())
    }

    pub fn finish_capture(&mut self, result: Result<String, String>) {
        self.outcome = Some(match result {
            Ok(reply) => reply,
            Err(err) => failure_text(&err),
        });
        self.pending = false;
    }

    /// Escape: drop the outcome line. A pending capture still settles.
    pub fn clear(&mut self) {
        self.outcome = None;
    }
}
