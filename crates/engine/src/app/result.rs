//! The result envelope every dispatched action reports through.
//!
//! Dual-channel by design: `message` is a short status line for compact
//! UIs, `detail` is the multi-line narrative text. The payload carries a
//! value (the destination room, for movement) and is present only on
//! success. No markup, no rendering decisions - those belong to the caller.

/// Outcome envelope for one dispatched action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResult<T = ()> {
    pub success: bool,
    pub message: String,
    pub detail: String,
    pub payload: Option<T>,
}

impl<T> ActionResult<T> {
    /// A successful outcome without a payload.
    pub fn ok(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            detail: detail.into(),
            payload: None,
        }
    }

    /// A successful outcome carrying a payload.
    pub fn ok_with(message: impl Into<String>, detail: impl Into<String>, payload: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            detail: detail.into(),
            payload: Some(payload),
        }
    }

    /// A failed outcome. The message doubles as the detail text.
    pub fn fail(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            detail: message.clone(),
            message,
            payload: None,
        }
    }

    /// Drop the payload type, keeping the displayable parts.
    pub fn erase(self) -> ActionResult {
        ActionResult {
            success: self.success,
            message: self.message,
            detail: self.detail,
            payload: self.payload.map(|_| ()),
        }
    }
}
