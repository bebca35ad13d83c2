use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==================== Статусы ====================

/// A closed set of statuses an admin screen can filter and display.
pub trait Status: Copy + PartialEq + fmt::Debug + 'static {
    /// Every status, in display order.
    const ALL: &'static [Self];

    /// Wire name, as used in query strings and JSON bodies.
    fn as_str(&self) -> &'static str;

    /// Human readable name for selects and badges.
    fn label(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Published,
    Draft,
    Archived,
}

impl Status for PostStatus {
    const ALL: &'static [Self] = &[Self::Published, Self::Draft, Self::Archived];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
            Self::Archived => "archived",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
            Self::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberStatus {
    Active,
    Unsubscribed,
    Pending,
}

impl Status for SubscriberStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Unsubscribed, Self::Pending];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Unsubscribed => "unsubscribed",
            Self::Pending => "pending",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Unsubscribed => "Unsubscribed",
            Self::Pending => "Pending",
        }
    }
}

/// Status filter of a list screen: everything, or a single status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        Self::All
    }
}

impl<S: Status> StatusFilter<S> {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    pub fn status(&self) -> Option<S> {
        match self {
            Self::All => None,
            Self::Only(status) => Some(*status),
        }
    }

    /// Filter options for a select control: `all` first, then every status.
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(S::ALL.iter().copied().map(Self::Only))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Only(status) => status.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status filter: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl<S: Status> FromStr for StatusFilter<S> {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "all" {
            return Ok(Self::All);
        }
        S::parse(value)
            .map(Self::Only)
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

// ==================== Идентификаторы ====================

/// Backend-issued post identifier. Never generated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

/// Backend-issued subscriber identifier. Never generated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriberId(pub String);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for SubscriberId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// ==================== Модели постов ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub fullname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: PostId,
    pub title: String,
    pub status: PostStatus,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub views: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogList {
    pub blogs: Vec<Post>,
}

// ==================== Модели подписчиков ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    #[serde(rename = "_id")]
    pub id: SubscriberId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub status: SubscriberStatus,
    pub created_at: DateTime<Utc>,
}

/// Server-computed pagination cursor. The client only reflects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: u32,
    pub pages: u32,
    pub total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            pages: 1,
            total: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberPage {
    pub subscribers: Vec<Subscriber>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberQuery {
    pub page: u32,
    pub status: StatusFilter<SubscriberStatus>,
}

impl Default for SubscriberQuery {
    fn default() -> Self {
        Self {
            page: 1,
            status: StatusFilter::All,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: SubscriberStatus,
}

// ==================== Общие ответы ====================

/// `{ success, data, message }` envelope every admin endpoint answers with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_parses_select_values() {
        assert_eq!(
            "all".parse::<StatusFilter<PostStatus>>(),
            Ok(StatusFilter::All)
        );
        assert_eq!(
            "draft".parse::<StatusFilter<PostStatus>>(),
            Ok(StatusFilter::Only(PostStatus::Draft))
        );
        assert!("active".parse::<StatusFilter<PostStatus>>().is_err());
        assert_eq!(
            StatusFilter::Only(SubscriberStatus::Unsubscribed).as_query_value(),
            "unsubscribed"
        );
    }

    #[test]
    fn filter_options_start_with_all() {
        let options = StatusFilter::<SubscriberStatus>::options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], StatusFilter::All);
        assert_eq!(options[0].label(), "All Status");
        assert_eq!(options[3].label(), "Pending");
    }

    #[test]
    fn post_deserializes_backend_shape() {
        let json = r##"{
            "_id": "abc123",
            "title": "Hello",
            "status": "published",
            "author": { "_id": "u1", "fullname": "Ada Lovelace" },
            "category": { "_id": "c1", "name": "Tech", "color": "#336699" },
            "views": 42,
            "createdAt": "2024-01-05T10:00:00.000Z",
            "featuredImage": "https://cdn.example.com/a.png"
        }"##;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, PostId::from("abc123"));
        assert_eq!(post.status, PostStatus::Published);
        assert_eq!(post.views, 42);
        assert_eq!(post.author.unwrap().fullname.as_deref(), Some("Ada Lovelace"));
        assert!(post.excerpt.is_none());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let json = r#"{
            "_id": "s1",
            "email": "a@example.com",
            "status": "bounced",
            "createdAt": "2024-01-05T10:00:00Z"
        }"#;

        assert!(serde_json::from_str::<Subscriber>(json).is_err());
    }

    #[test]
    fn envelope_without_data_is_a_failure_shape() {
        let envelope: ApiEnvelope<BlogList> =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("nope"));
    }
}
