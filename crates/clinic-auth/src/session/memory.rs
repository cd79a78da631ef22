//! In-memory session store using the moka crate.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;
use uuid::Uuid;

use clinic_core::config::SessionConfig;
use clinic_core::result::AppResult;
use clinic_core::traits::SessionStore;

/// Session values for one session.
type SessionValues = Arc<HashMap<String, String>>;

/// In-memory session store with idle expiry.
///
/// The login flow writes whole sessions through [`insert`](Self::insert);
/// the authorization layer only reads through [`SessionStore`].
#[derive(Debug, Clone)]
pub struct MemorySessionStore {
    /// Session id → values.
    sessions: Cache<String, SessionValues>,
}

impl MemorySessionStore {
    /// Create a new session store from configuration.
    pub fn new(config: &SessionConfig) -> Self {
        let sessions = Cache::builder()
            .max_capacity(config.max_sessions)
            .time_to_idle(Duration::from_secs(config.idle_timeout_minutes * 60))
            .build();
        Self { sessions }
    }

    /// Stores a new session and returns its generated id.
    pub async fn create<I>(&self, values: I) -> String
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let id = Uuid::new_v4().to_string();
        self.insert(&id, values).await;
        id
    }

    /// Replaces the values of a session.
    pub async fn insert<I>(&self, session_id: &str, values: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let values: HashMap<String, String> = values.into_iter().collect();
        debug!(session_id, keys = values.len(), "Storing session");
        self.sessions
            .insert(session_id.to_string(), Arc::new(values))
            .await;
    }

    /// Drops a session (logout).
    pub async fn remove(&self, session_id: &str) {
        self.sessions.invalidate(session_id).await;
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get_string(&self, session_id: &str, key: &str) -> AppResult<Option<String>> {
        Ok(self
            .sessions
            .get(session_id)
            .await
            .and_then(|values| values.get(key).cloned()))
    }

    async fn get_strings(
        &self,
        session_id: &str,
        keys: &[&str],
    ) -> AppResult<Vec<Option<String>>> {
        let snapshot = self.sessions.get(session_id).await;
        Ok(keys
            .iter()
            .map(|key| snapshot.as_ref().and_then(|values| values.get(*key).cloned()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::keys;

    fn make_store() -> MemorySessionStore {
        MemorySessionStore::new(&SessionConfig::default())
    }

    #[tokio::test]
    async fn test_create_and_read() {
        let store = make_store();
        let id = store
            .create([(keys::USER_ROLE.to_string(), "Staff".to_string())])
            .await;
        assert_eq!(
            store.get_string(&id, keys::USER_ROLE).await.unwrap(),
            Some("Staff".to_string())
        );
        assert_eq!(store.get_string(&id, keys::USER_ID).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = make_store();
        store
            .insert("s1", [(keys::USER_ID.to_string(), "9".to_string())])
            .await;
        store.remove("s1").await;
        assert_eq!(store.get_string("s1", keys::USER_ID).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_strings_reads_one_session_in_key_order() {
        let store = make_store();
        store
            .insert(
                "s1",
                [
                    (keys::USER_ROLE.to_string(), "Doctor".to_string()),
                    (keys::USER_ID.to_string(), "4".to_string()),
                ],
            )
            .await;

        let values = store
            .get_strings("s1", &[keys::USER_ID, "Missing", keys::USER_ROLE])
            .await
            .unwrap();
        assert_eq!(
            values,
            vec![Some("4".to_string()), None, Some("Doctor".to_string())]
        );

        let values = store.get_strings("gone", &[keys::USER_ROLE]).await.unwrap();
        assert_eq!(values, vec![None]);
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let store = make_store();
        assert_eq!(store.get_string("missing", keys::USER_ROLE).await.unwrap(), None);
    }
}
