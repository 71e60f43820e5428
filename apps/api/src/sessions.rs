//! In-memory session store. Sessions live for the process lifetime — no
//! persistence, no cross-session identity.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::analysis::orchestrator::Session;
use crate::errors::AppError;

/// Shared handle to all live sessions. Cloning is cheap.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh idle session and returns its id.
    pub async fn create(&self) -> Uuid {
        let session = Session::new();
        let id = session.id;
        self.inner.write().await.insert(id, session);
        id
    }

    /// Runs `f` against the session under a read lock.
    pub async fn with<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&Session) -> R + Send,
    ) -> Result<R, AppError> {
        let sessions = self.inner.read().await;
        sessions
            .get(&id)
            .map(f)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    /// Runs `f` against the session under a write lock.
    pub async fn update<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> R + Send,
    ) -> Result<R, AppError> {
        let mut sessions = self.inner.write().await;
        sessions
            .get_mut(&id)
            .map(f)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }
}
