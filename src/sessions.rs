use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::{Rng, distributions::Alphanumeric};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Role;

/// Number of random alphanumeric characters in a session token. The token is
/// opaque: it carries no identity information, only a key into the store.
const TOKEN_LEN: usize = 48;

/// Session
///
/// The server-side state bound to one opaque cookie token. Per session the
/// state machine is `Anonymous -> Authenticated(role, identity) ->
/// Terminated`; `Anonymous` and `Terminated` are represented by the token
/// simply resolving to nothing.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    /// Exact role flag required by the Authorization Guard.
    pub role: Role,
    /// The authenticated identity (admin/college/teacher/student/club-rep id).
    pub identity_id: Uuid,
    /// Owning college, denormalized for ownership checks. For a College
    /// session this equals `identity_id`; Admin sessions carry none.
    pub college_id: Option<Uuid>,
    /// Denormalized display name for rendering without a lookup.
    pub display_name: String,
    /// Fixed absolute expiry set at issuance.
    pub expires_at: DateTime<Utc>,
}

/// Clock
///
/// Injected time source so expiry behavior is deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time. The implementation shipped in production.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// ManualClock
///
/// A hand-advanced clock for tests; never moves on its own.
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.write().expect("clock lock poisoned");
        *now = *now + by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().expect("clock lock poisoned")
    }
}

/// SessionStore
///
/// The abstract contract for the server-side session table, keyed by the
/// opaque cookie token. Injected as `Arc<dyn SessionStore>` so the HTTP layer
/// never depends on a concrete store and tests can swap in one with a fake
/// clock. No concurrent-session limit: one identity may hold many tokens.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Issues a fresh opaque token bound to an Authenticated session with a
    /// fixed absolute expiry.
    async fn create(
        &self,
        role: Role,
        identity_id: Uuid,
        college_id: Option<Uuid>,
        display_name: String,
    ) -> String;

    /// Resolves a token to its session. Unknown, terminated, and expired
    /// tokens all resolve to `None`; absence is a valid state, never an
    /// error. Expiry is passive: checked here, not actively swept.
    async fn resolve(&self, token: &str) -> Option<Session>;

    /// Invalidates a token immediately. Idempotent: terminating an absent or
    /// already-terminated session is a no-op.
    async fn terminate(&self, token: &str);
}

/// The concrete type used to share the session store across the application
/// state.
pub type SessionState = Arc<dyn SessionStore>;

/// InMemorySessionStore
///
/// The shipped implementation: a lock-guarded map from token to session
/// state. Expired entries are dropped lazily when their token is next
/// resolved.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl InMemorySessionStore {
    /// Store with the wall clock and the configured absolute lifetime.
    pub fn new(ttl_secs: i64) -> Self {
        Self::with_clock(ttl_secs, Arc::new(SystemClock))
    }

    /// Store with an injected clock. Used by tests to exercise expiry
    /// deterministically.
    pub fn with_clock(ttl_secs: i64, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            clock,
            ttl: Duration::seconds(ttl_secs),
        }
    }

    fn generate_token() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(
        &self,
        role: Role,
        identity_id: Uuid,
        college_id: Option<Uuid>,
        display_name: String,
    ) -> String {
        let token = Self::generate_token();
        let session = Session {
            role,
            identity_id,
            college_id,
            display_name,
            expires_at: self.clock.now() + self.ttl,
        };

        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.insert(token.clone(), session);
        token
    }

    async fn resolve(&self, token: &str) -> Option<Session> {
        let now = self.clock.now();

        {
            let sessions = self.sessions.read().expect("session lock poisoned");
            match sessions.get(token) {
                Some(session) if session.expires_at > now => return Some(session.clone()),
                Some(_) => {} // expired, fall through to remove
                None => return None,
            }
        }

        // Lazy sweep of the expired entry under the write lock.
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.remove(token);
        None
    }

    async fn terminate(&self, token: &str) {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.remove(token);
    }
}
