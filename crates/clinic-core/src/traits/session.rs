//! Session store trait for server-side session state.

use async_trait::async_trait;

use crate::result::AppResult;

/// Read access to server-side session values.
///
/// The authorization layer only ever reads through this trait. Writing
/// session state belongs to the login flow, which owns a concrete store.
#[async_trait]
pub trait SessionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a string value from a session.
    ///
    /// Returns `Ok(None)` when the session or the key does not exist. An
    /// `Err` means the store itself failed and is propagated as an
    /// infrastructure fault.
    async fn get_string(&self, session_id: &str, key: &str) -> AppResult<Option<String>>;

    /// Get several values from one session, in the order of `keys`.
    ///
    /// The default reads key by key, so a session replaced between reads can
    /// yield values from both versions. Stores that hold a session as a
    /// single value override this to answer from one snapshot.
    async fn get_strings(
        &self,
        session_id: &str,
        keys: &[&str],
    ) -> AppResult<Vec<Option<String>>> {
        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            values.push(self.get_string(session_id, key).await?);
        }
        Ok(values)
    }
}
