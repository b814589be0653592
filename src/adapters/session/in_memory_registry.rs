//! In-memory registry of live interview sessions.
//!
//! Every session sits behind its own async mutex, so turns for one candidate
//! run strictly one after another while separate candidates proceed in
//! parallel.
//!
//! Nothing is removed on its own: call [`InMemorySessionRegistry::evict_stale`]
//! periodically (see [`InMemorySessionRegistry::spawn_sweeper`]) to drop ended
//! and abandoned sessions.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::interview::InterviewSession;

/// Handle to a session; hold the lock for the whole turn.
pub type SharedSession = Arc<Mutex<InterviewSession>>;

/// How long sessions stay registered after their last change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvictionPolicy {
    /// Retention for sessions that reached `Ended`.
    pub ended_ttl: Duration,
    /// Retention for open sessions with no activity.
    pub idle_ttl: Duration,
}

impl EvictionPolicy {
    pub fn new(ended_ttl: Duration, idle_ttl: Duration) -> Self {
        Self { ended_ttl, idle_ttl }
    }

    /// True when a session last changed at `updated_at` should be dropped.
    pub fn is_stale(&self, closed: bool, updated_at: Timestamp, now: Timestamp) -> bool {
        let age = now
            .as_datetime()
            .signed_duration_since(*updated_at.as_datetime())
            .to_std()
            .unwrap_or_default();
        let ttl = if closed { self.ended_ttl } else { self.idle_ttl };
        age >= ttl
    }
}

impl Default for EvictionPolicy {
    fn default() -> Self {
        Self {
            ended_ttl: Duration::from_secs(300),
            idle_ttl: Duration::from_secs(3600),
        }
    }
}

/// Process-local map of sessions keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRegistry {
    sessions: Arc<RwLock<HashMap<SessionId, SharedSession>>>,
}

impl InMemorySessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a session and returns its shared handle.
    pub async fn insert(&self, session: InterviewSession) -> SharedSession {
        let id = session.id();
        let handle = Arc::new(Mutex::new(session));
        self.sessions.write().await.insert(id, Arc::clone(&handle));
        handle
    }

    pub async fn get(&self, id: &SessionId) -> Option<SharedSession> {
        self.sessions.read().await.get(id).cloned()
    }

    pub async fn remove(&self, id: &SessionId) -> Option<SharedSession> {
        self.sessions.write().await.remove(id)
    }

    /// Number of registered sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drops every session the policy considers stale and returns how many
    /// were removed. Sessions locked by an in-flight turn are skipped.
    pub async fn evict_stale(&self, policy: &EvictionPolicy) -> usize {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(session) => !policy.is_stale(session.is_closed(), session.updated_at(), now),
            Err(_) => true,
        });

        before - sessions.len()
    }

    /// Runs [`evict_stale`](Self::evict_stale) every `interval` on a
    /// background task.
    pub fn spawn_sweeper(&self, policy: EvictionPolicy, interval: Duration) -> JoinHandle<()> {
        let registry = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let evicted = registry.evict_stale(&policy).await;
                if evicted > 0 {
                    let remaining = registry.len().await;
                    tracing::debug!(
                        evicted,
                        remaining,
                        "Evicted stale interview sessions"
                    );
                }
            }
        })
    }
}
