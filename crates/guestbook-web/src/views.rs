//! View types rendered by the index template.

use chrono::{DateTime, Utc};

use guestbook_state::Greeting;

/// One greeting row as rendered.
#[derive(Debug, Clone)]
pub struct GreetingView {
    pub author: String,
    pub content: String,
    pub date: String,
}

impl GreetingView {
    pub fn from_greeting(greeting: &Greeting) -> Self {
        let author = match &greeting.author {
            Some(author) => format!("{} ({})", author.identity, author.email),
            None => "An anonymous person".to_string(),
        };
        Self {
            author,
            content: greeting.content.clone(),
            date: format_millis(greeting.created_at),
        }
    }
}

/// Epoch milliseconds as a UTC display timestamp.
pub fn format_millis(millis: u64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| millis.to_string())
}
