/// Delete confirmation modal state.
///
/// ```text
/// Closed --open--> Open --confirm--> Confirming --succeed--> Closed
///                   ^  \                 |
///                   |   `--cancel--> Closed
///                   `------fail----------'
/// ```
///
/// Invalid transitions are ignored and reported through the return value.
/// No I/O happens here; the owning screen issues the delete request.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteConfirmation<T> {
    Closed,
    Open(T),
    Confirming(T),
}

impl<T> Default for DeleteConfirmation<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T> DeleteConfirmation<T> {
    /// Captures `target`. Refused while a delete is being confirmed.
    pub fn open(&mut self, target: T) -> bool {
        if matches!(self, Self::Confirming(_)) {
            return false;
        }
        *self = Self::Open(target);
        true
    }

    /// Moves to confirming and returns the target to delete.
    pub fn confirm(&mut self) -> Option<&T> {
        match std::mem::take(self) {
            Self::Open(target) => {
                *self = Self::Confirming(target);
                self.target()
            }
            other => {
                *self = other;
                None
            }
        }
    }

    pub fn succeed(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Self::Confirming(target) => Some(target),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Back to open-idle so the user can retry or cancel.
    pub fn fail(&mut self) -> bool {
        match std::mem::take(self) {
            Self::Confirming(target) => {
                *self = Self::Open(target);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// Only permitted from open-idle: the cancel control is disabled while confirming.
    pub fn cancel(&mut self) -> bool {
        match self {
            Self::Open(_) => {
                *self = Self::Closed;
                true
            }
            _ => false,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Confirming(_))
    }

    pub fn target(&self) -> Option<&T> {
        match self {
            Self::Closed => None,
            Self::Open(target) | Self::Confirming(target) => Some(target),
        }
    }
}

/// Copy of a delete dialog, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDialog {
    pub title: &'static str,
    pub message: &'static str,
    pub item_name: Option<String>,
    pub is_open: bool,
    pub loading: bool,
}

impl DeleteDialog {
    pub fn new<T>(
        title: &'static str,
        message: &'static str,
        state: &DeleteConfirmation<T>,
        item_name: impl Fn(&T) -> String,
    ) -> Self {
        Self {
            title,
            message,
            item_name: state.target().map(item_name),
            is_open: state.is_open(),
            loading: state.is_loading(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let mut modal = DeleteConfirmation::default();
        assert!(!modal.is_open());

        assert!(modal.open("abc123"));
        assert!(modal.is_open());
        assert!(!modal.is_loading());

        assert_eq!(modal.confirm(), Some(&"abc123"));
        assert!(modal.is_loading());

        assert_eq!(modal.succeed(), Some("abc123"));
        assert_eq!(modal, DeleteConfirmation::Closed);
    }

    #[test]
    fn failure_returns_to_open_idle() {
        let mut modal = DeleteConfirmation::default();
        modal.open(7);
        modal.confirm();

        assert!(modal.fail());
        assert_eq!(modal, DeleteConfirmation::Open(7));
        assert!(!modal.is_loading());
        assert_eq!(modal.confirm(), Some(&7));
    }

    #[test]
    fn cancel_is_refused_while_confirming() {
        let mut modal = DeleteConfirmation::default();
        modal.open(1);
        modal.confirm();

        assert!(!modal.cancel());
        assert!(!modal.open(2));
        assert_eq!(modal.target(), Some(&1));
    }

    #[test]
    fn stray_transitions_are_ignored() {
        let mut modal: DeleteConfirmation<u8> = DeleteConfirmation::default();

        assert!(modal.confirm().is_none());
        assert!(modal.succeed().is_none());
        assert!(!modal.fail());
        assert!(!modal.cancel());
        assert_eq!(modal, DeleteConfirmation::Closed);

        modal.open(3);
        assert!(modal.succeed().is_none());
        assert_eq!(modal, DeleteConfirmation::Open(3));
    }

    #[test]
    fn dialog_reflects_state() {
        let mut modal = DeleteConfirmation::default();
        modal.open(String::from("Hello world"));
        modal.confirm();

        let dialog = DeleteDialog::new("Delete", "Sure?", &modal, |title| title.clone());
        assert!(dialog.is_open);
        assert!(dialog.loading);
        assert_eq!(dialog.item_name.as_deref(), Some("Hello world"));
    }
}
