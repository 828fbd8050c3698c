//! Inline feedback state for a screen's banner slot.

/// What the banner slot at the top of a screen shows.
///
/// Errors stay until the next operation replaces them; success messages
/// are transient toasts the renderer auto-dismisses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Banner {
    #[default]
    None,
    Error(String),
    Success(String),
}

impl Banner {
    pub fn error(message: impl Into<String>) -> Self {
        Banner::Error(message.into())
    }

    pub fn success(message: impl Into<String>) -> Self {
        Banner::Success(message.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Banner::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Banner::Success(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Banner::None => None,
            Banner::Error(m) | Banner::Success(m) => Some(m),
        }
    }

    pub fn clear(&mut self) {
        *self = Banner::None;
    }
}
