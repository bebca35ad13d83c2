use std::cell::RefCell;

/// Transient, non-blocking user notifications ("toasts").
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

/// Collects toasts raised during an `update` so the caller can display them.
#[derive(Debug, Default)]
pub struct ToastLog {
    toasts: RefCell<Vec<Toast>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Toast> {
        self.toasts.borrow_mut().drain(..).collect()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts.borrow().last().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.borrow().is_empty()
    }
}

impl Notifier for ToastLog {
    fn success(&self, message: &str) {
        self.toasts.borrow_mut().push(Toast::success(message));
    }

    fn error(&self, message: &str) {
        self.toasts.borrow_mut().push(Toast::error(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_log() {
        let log = ToastLog::new();
        log.success("saved");
        log.error("broken");

        assert_eq!(
            log.drain(),
            vec![Toast::success("saved"), Toast::error("broken")]
        );
        assert!(log.is_empty());
    }
}
