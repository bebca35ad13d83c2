use crate::confirm::{DeleteConfirmation, DeleteDialog};
use crate::notify::Notifier;
use crate::sequence::{Completion, RequestTracker, Seq};
use crate::view::PostRow;
use crate::{Command, Screen, Services};
use admin_client::models::{Post, PostId, PostStatus, StatusFilter};
use admin_client::AdminClientError;
use async_trait::async_trait;

pub const DELETE_TITLE: &str = "Delete Blog Post";
pub const DELETE_MESSAGE: &str =
    "Are you sure you want to delete this blog post? This action cannot be undone.";

#[derive(Debug)]
pub enum BlogMsg {
    Mount,
    Refresh,
    SetFilter(StatusFilter<PostStatus>),
    Loaded {
        seq: Seq,
        result: Result<Vec<Post>, AdminClientError>,
    },
    RequestDelete(PostId),
    ConfirmDelete,
    CancelDelete,
    Deleted {
        id: PostId,
        result: Result<(), AdminClientError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlogCommand {
    Fetch {
        seq: Seq,
        filter: StatusFilter<PostStatus>,
    },
    Delete(PostId),
}

#[async_trait(?Send)]
impl Command for BlogCommand {
    type Msg = BlogMsg;

    async fn execute(self, services: &Services<'_>) -> BlogMsg {
        match self {
            BlogCommand::Fetch { seq, filter } => BlogMsg::Loaded {
                seq,
                result: services.api.list_blogs(filter).await,
            },
            BlogCommand::Delete(id) => {
                let result = services.api.delete_blog(&id).await;
                BlogMsg::Deleted { id, result }
            }
        }
    }
}

/// Blog post management: status-filtered list with delete-with-confirmation.
#[derive(Debug, Default)]
pub struct BlogScreen {
    posts: Vec<Post>,
    filter: StatusFilter<PostStatus>,
    requests: RequestTracker,
    loaded: bool,
    confirm: DeleteConfirmation<Post>,
}

impl BlogScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn rows(&self) -> Vec<PostRow> {
        self.posts.iter().map(PostRow::new).collect()
    }

    pub fn filter(&self) -> StatusFilter<PostStatus> {
        self.filter
    }

    pub fn is_loading(&self) -> bool {
        self.requests.is_loading()
    }

    /// True once any list request has succeeded.
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    /// Zero rows after a successful load. Not an error.
    pub fn is_empty(&self) -> bool {
        self.loaded && self.posts.is_empty()
    }

    pub fn confirmation(&self) -> &DeleteConfirmation<Post> {
        &self.confirm
    }

    pub fn delete_dialog(&self) -> DeleteDialog {
        DeleteDialog::new(DELETE_TITLE, DELETE_MESSAGE, &self.confirm, |post| {
            post.title.clone()
        })
    }

    fn fetch(&mut self) -> Option<BlogCommand> {
        let seq = self.requests.begin()?;
        tracing::debug!(seq, status = self.filter.as_query_value(), "fetching blogs");
        Some(BlogCommand::Fetch {
            seq,
            filter: self.filter,
        })
    }
}

impl Screen for BlogScreen {
    type Msg = BlogMsg;
    type Command = BlogCommand;

    fn update(&mut self, msg: BlogMsg, notifier: &dyn Notifier) -> Option<BlogCommand> {
        match msg {
            BlogMsg::Mount | BlogMsg::Refresh => self.fetch(),

            BlogMsg::SetFilter(filter) => {
                if filter == self.filter {
                    return None;
                }
                self.filter = filter;
                self.fetch()
            }

            BlogMsg::Loaded { seq, result } => match self.requests.complete(seq) {
                Completion::Ignored => {
                    tracing::debug!(seq, "dropping response for unknown request");
                    None
                }
                Completion::Superseded => {
                    tracing::debug!(seq, "filter changed during fetch, refetching");
                    self.fetch()
                }
                Completion::Current => {
                    match result {
                        Ok(posts) => {
                            tracing::debug!(seq, count = posts.len(), "blogs loaded");
                            self.posts = posts;
                            self.loaded = true;
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Error fetching blogs");
                            notifier.error("Failed to load blogs");
                        }
                    }
                    None
                }
            },

            BlogMsg::RequestDelete(id) => {
                match self.posts.iter().find(|post| post.id == id) {
                    Some(post) => {
                        self.confirm.open(post.clone());
                    }
                    None => tracing::warn!(%id, "delete requested for a post not on screen"),
                }
                None
            }

            BlogMsg::ConfirmDelete => self
                .confirm
                .confirm()
                .map(|post| BlogCommand::Delete(post.id.clone())),

            BlogMsg::CancelDelete => {
                self.confirm.cancel();
                None
            }

            BlogMsg::Deleted { id, result } => {
                if !self.confirm.is_loading() {
                    tracing::warn!(%id, "delete completion without a pending confirmation");
                    return None;
                }

                match result {
                    Ok(()) => {
                        self.confirm.succeed();
                        notifier.success("Blog post deleted successfully");
                        self.fetch()
                    }
                    Err(e) => {
                        tracing::error!(error = %e, %id, "Error deleting blog");
                        notifier.error("Failed to delete blog post");
                        self.confirm.fail();
                        None
                    }
                }
            }
        }
    }
}
