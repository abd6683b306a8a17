//! Graph sessions and the registry that resolves them
//!
//! Vertices do not hold a reference to the manager that produced them; they
//! carry a [`SessionId`] which the owning [`HugeClient`](super::HugeClient)
//! maps back to a [`GraphManager`].

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::driver::GraphManager;

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// Handle of a graph session, unique within the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    pub(crate) fn next() -> Self {
        SessionId(NEXT_SESSION.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

#[derive(Default)]
pub(crate) struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, GraphManager>>,
}

impl SessionRegistry {
    /// The session already open on `graph`, or a new one built by `open`
    pub(crate) fn get_or_register<F>(&self, graph: &str, open: F) -> GraphManager
    where
        F: FnOnce() -> GraphManager,
    {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = sessions.values().find(|m| m.graph() == graph) {
            return existing.clone();
        }
        let manager = open();
        sessions.insert(manager.session(), manager.clone());
        manager
    }

    pub(crate) fn remove(&self, session: SessionId) -> Option<GraphManager> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&session)
    }

    pub(crate) fn get(&self, session: SessionId) -> Option<GraphManager> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&session)
            .cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
