pub mod config;
pub mod error;
pub mod http_client;
pub mod models;

pub use config::ClientConfig;
pub use error::AdminClientError;
pub use http_client::HttpClient;

use async_trait::async_trait;
use error::Result;
use models::{
    Post, PostId, PostStatus, StatusFilter, SubscriberId, SubscriberPage, SubscriberQuery,
    SubscriberStatus,
};

/// Admin endpoints of the blog backend.
///
/// Futures are not `Send`: the same trait is implemented on top of the
/// browser fetch API, where nothing is.
#[async_trait(?Send)]
pub trait AdminApi {
    /// `GET /blog/admin/all`, `status` only when the filter is not `All`.
    async fn list_blogs(&self, filter: StatusFilter<PostStatus>) -> Result<Vec<Post>>;

    /// `DELETE /blog/admin/{id}`
    async fn delete_blog(&self, id: &PostId) -> Result<()>;

    /// `GET /admin/newsletter?page=<n>&status=<all|status>`
    async fn list_subscribers(&self, query: &SubscriberQuery) -> Result<SubscriberPage>;

    /// `DELETE /admin/newsletter/{id}`
    async fn delete_subscriber(&self, id: &SubscriberId) -> Result<()>;

    /// `PUT /admin/newsletter/{id}/status` with `{ "status": .. }`
    async fn update_subscriber_status(
        &self,
        id: &SubscriberId,
        status: SubscriberStatus,
    ) -> Result<()>;

    /// `GET /admin/newsletter/export`, raw CSV bytes.
    async fn export_subscribers(&self) -> Result<Vec<u8>>;
}
