//! Session query client.
//!
//! Turns the current selection into a query key and fetches the matching
//! session buckets. Each issued query carries a generation number; only the
//! most recently issued generation is current, so a slow response for an
//! older selection can be recognised and dropped when it finally arrives.

use std::future::Future;
use std::sync::Arc;

use shared::{SessionBucket, SessionQueryKey};
use tracing::debug;

use crate::error::ApiError;
use crate::services::api::SessionSource;
use crate::state::selection_state::Selection;

/// A query that has been issued but not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub generation: u64,
    pub key: SessionQueryKey,
}

/// Outcome of a fetch, tagged with the query that produced it
#[derive(Debug)]
pub struct QueryCompletion {
    pub pending: PendingQuery,
    pub result: Result<Vec<SessionBucket>, ApiError>,
}

pub struct SessionQueryClient {
    source: Arc<dyn SessionSource>,
    latest_generation: u64,
}

impl SessionQueryClient {
    pub fn new(source: Arc<dyn SessionSource>) -> Self {
        Self {
            source,
            latest_generation: 0,
        }
    }

    /// Issue a query for `selection`, superseding every earlier one
    pub fn issue(&mut self, selection: &Selection) -> PendingQuery {
        self.latest_generation += 1;
        let pending = PendingQuery {
            generation: self.latest_generation,
            key: selection.query_key(),
        };
        debug!(generation = pending.generation, key = %pending.key, "session query issued");
        pending
    }

    /// Whether `pending` is the latest issued query
    pub fn is_current(&self, pending: &PendingQuery) -> bool {
        pending.generation == self.latest_generation
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    /// Fetch the sessions for `pending`.
    ///
    /// The returned future owns everything it needs, so several fetches can be
    /// in flight at once while the caller keeps handling events.
    pub fn fetch(&self, pending: PendingQuery) -> impl Future<Output = QueryCompletion> + Send + 'static {
        let source = Arc::clone(&self.source);
        async move {
            let result = source.get_sessions(&pending.key).await;
            QueryCompletion { pending, result }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::date_utils::FixedClock;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use shared::ActivityType;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSource {
        keys: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SessionSource for RecordingSource {
        async fn get_sessions(&self, key: &SessionQueryKey) -> Result<Vec<SessionBucket>, ApiError> {
            if let Ok(mut keys) = self.keys.lock() {
                keys.push(key.to_string());
            }
            Ok(Vec::new())
        }
    }

    fn selection() -> Selection {
        Selection::today(&FixedClock(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()))
    }

    #[test]
    fn test_generations_increase_and_supersede() {
        let mut client = SessionQueryClient::new(Arc::new(RecordingSource::default()));
        let first = client.issue(&selection());
        let second = client.issue(&selection());

        assert_eq!(first.generation, 1);
        assert_eq!(second.generation, 2);
        assert!(!client.is_current(&first));
        assert!(client.is_current(&second));
        assert_eq!(client.latest_generation(), 2);
    }

    #[tokio::test]
    async fn test_fetch_uses_selection_key() {
        let source = Arc::new(RecordingSource::default());
        let mut client = SessionQueryClient::new(source.clone());

        let mut selection = selection();
        selection.activity_type = ActivityType::All;
        let pending = client.issue(&selection);
        let completion = client.fetch(pending.clone()).await;

        assert_eq!(completion.pending, pending);
        assert!(completion.result.is_ok());
        assert_eq!(*source.keys.lock().unwrap(), vec!["2026-10-18-all".to_string()]);
    }
}
