use admin_client::models::Subscriber;

/// Case-insensitive substring match against email and name.
/// An empty query matches every subscriber.
pub fn matches(subscriber: &Subscriber, query: &str) -> bool {
    let needle = query.to_lowercase();

    subscriber.email.to_lowercase().contains(&needle)
        || subscriber
            .name
            .as_ref()
            .is_some_and(|name| name.to_lowercase().contains(&needle))
}

/// Local filter over the already fetched page. Never requests anything.
pub fn filter_subscribers<'a>(subscribers: &'a [Subscriber], query: &str) -> Vec<&'a Subscriber> {
    subscribers.iter().filter(|s| matches(s, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_client::models::{SubscriberId, SubscriberStatus};
    use chrono::{TimeZone, Utc};

    fn subscriber(id: &str, email: &str, name: Option<&str>) -> Subscriber {
        Subscriber {
            id: SubscriberId::from(id),
            email: email.to_string(),
            name: name.map(str::to_string),
            status: SubscriberStatus::Active,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn matches_email_or_name_case_insensitively() {
        let list = vec![
            subscriber("1", "Alice@Example.com", None),
            subscriber("2", "bob@example.com", Some("Bobby ALICEson")),
            subscriber("3", "carol@example.org", Some("Carol")),
        ];

        let ids: Vec<_> = filter_subscribers(&list, "alice")
            .into_iter()
            .map(|s| s.id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);

        assert_eq!(filter_subscribers(&list, "EXAMPLE.ORG").len(), 1);
        assert!(filter_subscribers(&list, "zed").is_empty());
    }

    #[test]
    fn empty_query_keeps_everything() {
        let list = vec![
            subscriber("1", "a@example.com", None),
            subscriber("2", "b@example.com", None),
        ];

        assert_eq!(filter_subscribers(&list, "").len(), 2);
    }

    #[test]
    fn missing_name_never_matches_on_name() {
        let s = subscriber("1", "x@example.com", None);
        assert!(!matches(&s, "anonymous"));
    }
}
