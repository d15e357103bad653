//! Transient feedback messages shown after form submissions.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays visible.
pub const TOAST_AUTO_HIDE_MS: u32 = 3_000;
/// Delay between a successful save and its modal closing.
pub const MODAL_CLOSE_DELAY_MS: u32 = 1_500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Stack of visible toasts; ids are never reused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Push a toast and return its id for the auto-hide timer.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, message: message.into(), severity });
        id
    }

    /// Remove toast `id`; dismissing twice is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
