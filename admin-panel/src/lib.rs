//! Headless admin screens.
//!
//! Each screen is a state value driven by messages. `update` applies a
//! message, raises toasts through the injected [`Notifier`] and returns at
//! most one [`Command`]: the network or download effect the screen wants
//! performed. Executing the command yields the completion message, which is
//! fed back to `update`. The browser frontend runs commands with
//! `spawn_local`; native callers use [`dispatch`].

pub mod blog;
pub mod confirm;
pub mod download;
pub mod newsletter;
pub mod notify;
pub mod pagination;
pub mod search;
pub mod sequence;
pub mod view;

pub use blog::{BlogCommand, BlogMsg, BlogScreen};
pub use confirm::{DeleteConfirmation, DeleteDialog};
pub use download::{DownloadError, Downloader, EXPORT_FILENAME};
pub use newsletter::{NewsletterCommand, NewsletterMsg, NewsletterScreen};
pub use notify::{Notifier, Toast, ToastKind, ToastLog};

use admin_client::AdminApi;
use async_trait::async_trait;

/// Capabilities commands are executed against.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    pub api: &'a dyn AdminApi,
    pub downloader: &'a dyn Downloader,
}

impl<'a> Services<'a> {
    pub fn new(api: &'a dyn AdminApi, downloader: &'a dyn Downloader) -> Self {
        Self { api, downloader }
    }
}

/// A side effect requested by a screen.
#[async_trait(?Send)]
pub trait Command {
    type Msg;

    /// Performs the effect and returns the message describing its outcome.
    async fn execute(self, services: &Services<'_>) -> Self::Msg;
}

pub trait Screen {
    type Msg;
    type Command: Command<Msg = Self::Msg>;

    fn update(&mut self, msg: Self::Msg, notifier: &dyn Notifier) -> Option<Self::Command>;
}

/// Applies `msg` and runs the resulting commands to completion, one at a time.
pub async fn dispatch<S: Screen>(
    screen: &mut S,
    msg: S::Msg,
    services: &Services<'_>,
    notifier: &dyn Notifier,
) {
    let mut next = screen.update(msg, notifier);
    while let Some(command) = next {
        let msg = command.execute(services).await;
        next = screen.update(msg, notifier);
    }
}
