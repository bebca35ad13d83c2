use crate::confirm::{DeleteConfirmation, DeleteDialog};
use crate::download::{DownloadError, EXPORT_FILENAME};
use crate::notify::Notifier;
use crate::pagination::PageControls;
use crate::search;
use crate::sequence::{Completion, RequestTracker, Seq};
use crate::view::SubscriberRow;
use crate::{Command, Screen, Services};
use admin_client::models::{
    Pagination, StatusFilter, Subscriber, SubscriberId, SubscriberPage, SubscriberQuery,
    SubscriberStatus,
};
use admin_client::AdminClientError;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

pub const DELETE_TITLE: &str = "Delete Subscriber";
pub const DELETE_MESSAGE: &str =
    "Are you sure you want to delete this subscriber? This action cannot be undone.";

#[derive(Debug)]
pub enum NewsletterMsg {
    Mount,
    Refresh,
    SetFilter(StatusFilter<SubscriberStatus>),
    GoToPage(u32),
    NextPage,
    PreviousPage,
    SetSearch(String),
    Loaded {
        seq: Seq,
        result: Result<SubscriberPage, AdminClientError>,
    },
    ChangeStatus {
        id: SubscriberId,
        status: SubscriberStatus,
    },
    StatusChanged {
        id: SubscriberId,
        result: Result<(), AdminClientError>,
    },
    RequestDelete(SubscriberId),
    ConfirmDelete,
    CancelDelete,
    Deleted {
        id: SubscriberId,
        result: Result<(), AdminClientError>,
    },
    Export,
    Exported(Result<Vec<u8>, AdminClientError>),
    Saved(Result<(), DownloadError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NewsletterCommand {
    Fetch {
        seq: Seq,
        query: SubscriberQuery,
    },
    UpdateStatus {
        id: SubscriberId,
        status: SubscriberStatus,
    },
    Delete(SubscriberId),
    Export,
    Save {
        filename: &'static str,
        bytes: Vec<u8>,
    },
}

#[async_trait(?Send)]
impl Command for NewsletterCommand {
    type Msg = NewsletterMsg;

    async fn execute(self, services: &Services<'_>) -> NewsletterMsg {
        match self {
            NewsletterCommand::Fetch { seq, query } => NewsletterMsg::Loaded {
                seq,
                result: services.api.list_subscribers(&query).await,
            },
            NewsletterCommand::UpdateStatus { id, status } => {
                let result = services.api.update_subscriber_status(&id, status).await;
                NewsletterMsg::StatusChanged { id, result }
            }
            NewsletterCommand::Delete(id) => {
                let result = services.api.delete_subscriber(&id).await;
                NewsletterMsg::Deleted { id, result }
            }
            NewsletterCommand::Export => {
                NewsletterMsg::Exported(services.api.export_subscribers().await)
            }
            NewsletterCommand::Save { filename, bytes } => {
                NewsletterMsg::Saved(services.downloader.save(filename, &bytes))
            }
        }
    }
}

/// Figures for the stats cards above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberStats {
    /// Server-side total across all pages.
    pub total: u64,
    /// Active subscribers on the current page.
    pub active: usize,
    /// Unsubscribed subscribers on the current page.
    pub unsubscribed: usize,
}

/// Newsletter subscriber management: paginated, status-filtered list with
/// local search, inline status edits, CSV export and delete-with-confirmation.
#[derive(Debug, Default)]
pub struct NewsletterScreen {
    subscribers: Vec<Subscriber>,
    pagination: Pagination,
    query: SubscriberQuery,
    search: String,
    requests: RequestTracker,
    loaded: bool,
    confirm: DeleteConfirmation<Subscriber>,
    pending_status: HashSet<SubscriberId>,
    status_revisions: HashMap<SubscriberId, u32>,
    exporting: bool,
}

impl NewsletterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribers(&self) -> &[Subscriber] {
        &self.subscribers
    }

    /// Current page narrowed by the search box.
    pub fn visible_subscribers(&self) -> Vec<&Subscriber> {
        search::filter_subscribers(&self.subscribers, &self.search)
    }

    pub fn rows(&self) -> Vec<SubscriberRow> {
        self.visible_subscribers()
            .into_iter()
            .map(|s| {
                SubscriberRow::new(
                    s,
                    self.pending_status.contains(&s.id),
                    self.status_revision(&s.id),
                )
            })
            .collect()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn page_controls(&self) -> PageControls {
        PageControls::new(&self.pagination)
    }

    /// Page and filter the next list request will carry.
    pub fn query(&self) -> SubscriberQuery {
        self.query
    }

    pub fn filter(&self) -> StatusFilter<SubscriberStatus> {
        self.query.status
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn stats(&self) -> SubscriberStats {
        let count = |status: SubscriberStatus| {
            self.subscribers
                .iter()
                .filter(|s| s.status == status)
                .count()
        };

        SubscriberStats {
            total: self.pagination.total,
            active: count(SubscriberStatus::Active),
            unsubscribed: count(SubscriberStatus::Unsubscribed),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.requests.is_loading()
    }

    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_empty(&self) -> bool {
        self.loaded && self.visible_subscribers().is_empty()
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    pub fn is_status_pending(&self, id: &SubscriberId) -> bool {
        self.pending_status.contains(id)
    }

    /// Number of failed status updates for `id` so far.
    pub fn status_revision(&self, id: &SubscriberId) -> u32 {
        self.status_revisions.get(id).copied().unwrap_or(0)
    }

    pub fn confirmation(&self) -> &DeleteConfirmation<Subscriber> {
        &self.confirm
    }

    pub fn delete_dialog(&self) -> DeleteDialog {
        DeleteDialog::new(DELETE_TITLE, DELETE_MESSAGE, &self.confirm, |s| {
            s.email.clone()
        })
    }

    fn fetch(&mut self) -> Option<NewsletterCommand> {
        let seq = self.requests.begin()?;
        tracing::debug!(
            seq,
            page = self.query.page,
            status = self.query.status.as_query_value(),
            "fetching subscribers"
        );
        Some(NewsletterCommand::Fetch {
            seq,
            query: self.query,
        })
    }

    fn go_to_page(&mut self, page: u32) -> Option<NewsletterCommand> {
        let page = self.page_controls().clamp(page);
        if page == self.query.page {
            return None;
        }
        self.query.page = page;
        self.fetch()
    }

    fn apply_page(&mut self, page: SubscriberPage) {
        self.subscribers = page.subscribers;
        self.pagination = page.pagination;
        self.query.page = page.pagination.current.max(1);
        self.loaded = true;
    }
}

impl Screen for NewsletterScreen {
    type Msg = NewsletterMsg;
    type Command = NewsletterCommand;

    fn update(&mut self, msg: NewsletterMsg, notifier: &dyn Notifier) -> Option<NewsletterCommand> {
        match msg {
            NewsletterMsg::Mount | NewsletterMsg::Refresh => self.fetch(),

            NewsletterMsg::SetFilter(status) => {
                if status == self.query.status {
                    return None;
                }
                self.query = SubscriberQuery { page: 1, status };
                self.fetch()
            }

            NewsletterMsg::GoToPage(page) => self.go_to_page(page),
            NewsletterMsg::NextPage => self.go_to_page(self.query.page.saturating_add(1)),
            NewsletterMsg::PreviousPage => self.go_to_page(self.query.page.saturating_sub(1)),

            NewsletterMsg::SetSearch(query) => {
                self.search = query;
                None
            }

            NewsletterMsg::Loaded { seq, result } => match self.requests.complete(seq) {
                Completion::Ignored => {
                    tracing::debug!(seq, "dropping response for unknown request");
                    None
                }
                Completion::Superseded => {
                    tracing::debug!(seq, "query changed during fetch, refetching");
                    self.fetch()
                }
                Completion::Current => {
                    match result {
                        Ok(page) => {
                            tracing::debug!(
                                seq,
                                count = page.subscribers.len(),
                                total = page.pagination.total,
                                "subscribers loaded"
                            );
                            self.apply_page(page);
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Error fetching subscribers");
                            notifier.error("Failed to load subscribers");
                        }
                    }
                    None
                }
            },

            NewsletterMsg::ChangeStatus { id, status } => {
                if self.pending_status.contains(&id) {
                    return None;
                }
                let current = self
                    .subscribers
                    .iter()
                    .find(|s| s.id == id)
                    .map(|s| s.status);

                match current {
                    Some(current) if current != status => {
                        self.pending_status.insert(id.clone());
                        Some(NewsletterCommand::UpdateStatus { id, status })
                    }
                    Some(_) => None,
                    None => {
                        tracing::warn!(%id, "status change for a subscriber not on screen");
                        None
                    }
                }
            }

            NewsletterMsg::StatusChanged { id, result } => {
                self.pending_status.remove(&id);
                match result {
                    Ok(()) => {
                        notifier.success("Subscriber status updated");
                        self.fetch()
                    }
                    Err(e) => {
                        tracing::error!(error = %e, %id, "Error updating status");
                        notifier.error("Failed to update status");
                        *self.status_revisions.entry(id).or_insert(0) += 1;
                        None
                    }
                }
            }

            NewsletterMsg::RequestDelete(id) => {
                match self.subscribers.iter().find(|s| s.id == id) {
                    Some(subscriber) => {
                        self.confirm.open(subscriber.clone());
                    }
                    None => tracing::warn!(%id, "delete requested for a subscriber not on screen"),
                }
                None
            }

            NewsletterMsg::ConfirmDelete => self
                .confirm
                .confirm()
                .map(|s| NewsletterCommand::Delete(s.id.clone())),

            NewsletterMsg::CancelDelete => {
                self.confirm.cancel();
                None
            }

            NewsletterMsg::Deleted { id, result } => {
                if !self.confirm.is_loading() {
                    tracing::warn!(%id, "delete completion without a pending confirmation");
                    return None;
                }

                match result {
                    Ok(()) => {
                        self.confirm.succeed();
                        notifier.success("Subscriber deleted successfully");
                        self.fetch()
                    }
                    Err(e) => {
                        tracing::error!(error = %e, %id, "Error deleting subscriber");
                        notifier.error("Failed to delete subscriber");
                        self.confirm.fail();
                        None
                    }
                }
            }

            NewsletterMsg::Export => {
                if self.exporting {
                    return None;
                }
                self.exporting = true;
                Some(NewsletterCommand::Export)
            }

            NewsletterMsg::Exported(Ok(bytes)) => Some(NewsletterCommand::Save {
                filename: EXPORT_FILENAME,
                bytes,
            }),

            NewsletterMsg::Exported(Err(e)) => {
                self.exporting = false;
                tracing::error!(error = %e, "Error exporting subscribers");
                notifier.error("Failed to export subscribers");
                None
            }

            NewsletterMsg::Saved(result) => {
                self.exporting = false;
                match result {
                    Ok(()) => notifier.success("Subscribers exported successfully"),
                    Err(e) => {
                        tracing::error!(error = %e, "Error saving subscriber export");
                        notifier.error("Failed to export subscribers");
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastLog;
    use chrono::{TimeZone, Utc};

    fn subscriber(id: &str, email: &str, status: SubscriberStatus) -> Subscriber {
        Subscriber {
            id: SubscriberId::from(id),
            email: email.into(),
            name: None,
            status,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    fn loaded_screen(current: u32, pages: u32) -> NewsletterScreen {
        let mut screen = NewsletterScreen::new();
        let log = ToastLog::new();
        let Some(NewsletterCommand::Fetch { seq, .. }) = screen.update(NewsletterMsg::Mount, &log)
        else {
            panic!("mount must fetch");
        };
        screen.update(
            NewsletterMsg::Loaded {
                seq,
                result: Ok(SubscriberPage {
                    subscribers: vec![
                        subscriber("1", "a@example.com", SubscriberStatus::Active),
                        subscriber("2", "b@example.com", SubscriberStatus::Unsubscribed),
                        subscriber("3", "c@example.com", SubscriberStatus::Active),
                    ],
                    pagination: Pagination {
                        current,
                        pages,
                        total: 45,
                    },
                }),
            },
            &log,
        );
        screen
    }

    #[test]
    fn stats_count_current_page() {
        let screen = loaded_screen(1, 3);

        assert_eq!(
            screen.stats(),
            SubscriberStats {
                total: 45,
                active: 2,
                unsubscribed: 1,
            }
        );
    }

    #[test]
    fn paging_clamps_and_skips_current_page() {
        let log = ToastLog::new();
        let mut screen = loaded_screen(3, 3);

        assert!(screen.update(NewsletterMsg::NextPage, &log).is_none());
        assert!(screen.update(NewsletterMsg::GoToPage(3), &log).is_none());

        let cmd = screen.update(NewsletterMsg::GoToPage(99), &log);
        assert!(cmd.is_none());

        let cmd = screen.update(NewsletterMsg::PreviousPage, &log);
        assert!(matches!(
            cmd,
            Some(NewsletterCommand::Fetch { query: SubscriberQuery { page: 2, .. }, .. })
        ));
    }

    #[test]
    fn filter_change_resets_to_first_page() {
        let log = ToastLog::new();
        let mut screen = loaded_screen(2, 3);

        let cmd = screen.update(
            NewsletterMsg::SetFilter(StatusFilter::Only(SubscriberStatus::Pending)),
            &log,
        );

        assert!(matches!(
            cmd,
            Some(NewsletterCommand::Fetch {
                query: SubscriberQuery {
                    page: 1,
                    status: StatusFilter::Only(SubscriberStatus::Pending)
                },
                ..
            })
        ));
    }

    #[test]
    fn selecting_the_same_status_is_a_no_op() {
        let log = ToastLog::new();
        let mut screen = loaded_screen(1, 1);

        let cmd = screen.update(
            NewsletterMsg::ChangeStatus {
                id: SubscriberId::from("1"),
                status: SubscriberStatus::Active,
            },
            &log,
        );

        assert!(cmd.is_none());
        assert!(!screen.is_status_pending(&SubscriberId::from("1")));
    }

    #[test]
    fn search_narrows_rows_without_fetching() {
        let log = ToastLog::new();
        let mut screen = loaded_screen(1, 1);

        assert!(screen
            .update(NewsletterMsg::SetSearch("B@EXAMPLE".into()), &log)
            .is_none());

        let rows = screen.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].email, "b@example.com");
        assert_eq!(screen.subscribers().len(), 3);
        assert!(!screen.is_loading());
    }

    #[test]
    fn second_export_is_ignored_while_running() {
        let log = ToastLog::new();
        let mut screen = loaded_screen(1, 1);

        assert_eq!(
            screen.update(NewsletterMsg::Export, &log),
            Some(NewsletterCommand::Export)
        );
        assert!(screen.update(NewsletterMsg::Export, &log).is_none());
        assert!(screen.is_exporting());
    }

    #[test]
    fn failed_status_update_bumps_row_revision() {
        let log = ToastLog::new();
        let mut screen = loaded_screen(1, 1);
        let id = SubscriberId::from("2");
        assert_eq!(screen.rows()[1].revision, 0);

        screen.update(
            NewsletterMsg::ChangeStatus {
                id: id.clone(),
                status: SubscriberStatus::Active,
            },
            &log,
        );
        screen.update(
            NewsletterMsg::StatusChanged {
                id: id.clone(),
                result: Err(AdminClientError::TransportError("boom".into())),
            },
            &log,
        );

        let rows = screen.rows();
        assert_eq!(rows[1].status, SubscriberStatus::Unsubscribed);
        assert_eq!(rows[1].revision, 1);
        assert!(!rows[1].pending);
        assert_eq!(rows[0].revision, 0);
        assert_eq!(screen.status_revision(&id), 1);
    }
}
