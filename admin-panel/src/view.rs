//! Row view-models: what a table row shows, independent of the renderer.

use admin_client::models::{
    Post, PostId, PostStatus, Status, Subscriber, SubscriberId, SubscriberStatus,
};
use chrono::{DateTime, Utc};

const EXCERPT_PREVIEW_CHARS: usize = 80;

/// Colour family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Neutral => "neutral",
        }
    }
}

pub fn post_tone(status: PostStatus) -> Tone {
    match status {
        PostStatus::Published => Tone::Success,
        PostStatus::Draft => Tone::Warning,
        PostStatus::Archived => Tone::Neutral,
    }
}

pub fn subscriber_tone(status: SubscriberStatus) -> Tone {
    match status {
        SubscriberStatus::Active => Tone::Success,
        SubscriberStatus::Unsubscribed => Tone::Danger,
        SubscriberStatus::Pending => Tone::Warning,
    }
}

/// `Jan 5, 2024`
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

pub fn excerpt_preview(excerpt: &str) -> String {
    if excerpt.chars().count() > EXCERPT_PREVIEW_CHARS {
        let cut: String = excerpt.chars().take(EXCERPT_PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        excerpt.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBadge {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRow {
    pub id: PostId,
    pub title: String,
    pub author: String,
    pub category: Option<CategoryBadge>,
    pub status: PostStatus,
    pub status_label: &'static str,
    pub tone: Tone,
    pub views: u64,
    pub date: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub view_href: String,
    pub edit_href: String,
}

pub const NEW_POST_HREF: &str = "/admin/blog/new";

impl PostRow {
    pub fn new(post: &Post) -> Self {
        let author = post
            .author
            .as_ref()
            .and_then(|a| a.fullname.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            author,
            category: post.category.as_ref().map(|c| CategoryBadge {
                name: c.name.clone(),
                color: c.color.clone(),
            }),
            status: post.status,
            status_label: post.status.as_str(),
            tone: post_tone(post.status),
            views: post.views,
            date: format_date(&post.created_at),
            excerpt: post.excerpt.as_deref().map(excerpt_preview),
            featured_image: post.featured_image.clone(),
            view_href: format!("/admin/blog/{}", post.id),
            edit_href: format!("/admin/blog/edit/{}", post.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberRow {
    pub id: SubscriberId,
    pub display_name: String,
    pub email: String,
    pub status: SubscriberStatus,
    pub tone: Tone,
    pub date: String,
    /// A status update for this row is outstanding.
    pub pending: bool,
    /// Bumped when a status update fails, so a renderer can reset a control
    /// that still shows the rejected choice.
    pub revision: u32,
}

impl SubscriberRow {
    pub fn new(subscriber: &Subscriber, pending: bool, revision: u32) -> Self {
        Self {
            id: subscriber.id.clone(),
            display_name: subscriber
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Anonymous".to_string()),
            email: subscriber.email.clone(),
            status: subscriber.status,
            tone: subscriber_tone(subscriber.status),
            date: format_date(&subscriber.created_at),
            pending,
            revision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_client::models::{Author, Category};
    use chrono::TimeZone;

    fn post() -> Post {
        Post {
            id: PostId::from("abc123"),
            title: "Hello".into(),
            status: PostStatus::Draft,
            author: None,
            category: None,
            views: 12,
            created_at: Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap(),
            featured_image: None,
            excerpt: None,
            slug: None,
        }
    }

    #[test]
    fn post_row_falls_back_for_missing_references() {
        let row = PostRow::new(&post());

        assert_eq!(row.author, "Unknown");
        assert!(row.category.is_none());
        assert_eq!(row.date, "Jan 5, 2024");
        assert_eq!(row.tone, Tone::Warning);
        assert_eq!(row.status_label, "draft");
        assert_eq!(row.view_href, "/admin/blog/abc123");
        assert_eq!(row.edit_href, "/admin/blog/edit/abc123");
    }

    #[test]
    fn post_row_uses_author_and_category() {
        let mut post = post();
        post.author = Some(Author {
            id: Some("u1".into()),
            fullname: Some("Ada Lovelace".into()),
        });
        post.category = Some(Category {
            id: None,
            name: "Tech".into(),
            color: Some("#336699".into()),
        });

        let row = PostRow::new(&post);
        assert_eq!(row.author, "Ada Lovelace");
        assert_eq!(row.category.unwrap().color.as_deref(), Some("#336699"));
    }

    #[test]
    fn long_excerpts_are_truncated_to_80_chars() {
        let long = "é".repeat(100);
        let preview = excerpt_preview(&long);

        assert_eq!(preview.chars().count(), 83);
        assert!(preview.ends_with("..."));
        assert_eq!(excerpt_preview("short"), "short");
        assert_eq!(excerpt_preview(&"a".repeat(80)), "a".repeat(80));
    }

    #[test]
    fn subscriber_row_defaults_to_anonymous() {
        let subscriber = Subscriber {
            id: SubscriberId::from("s1"),
            email: "a@example.com".into(),
            name: None,
            status: SubscriberStatus::Unsubscribed,
            created_at: Utc.with_ymd_and_hms(2023, 12, 25, 0, 0, 0).unwrap(),
        };

        let row = SubscriberRow::new(&subscriber, true, 0);
        assert_eq!(row.display_name, "Anonymous");
        assert_eq!(row.tone, Tone::Danger);
        assert_eq!(row.date, "Dec 25, 2023");
        assert!(row.pending);
    }
}
