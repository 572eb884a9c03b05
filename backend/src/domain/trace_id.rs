//! Correlation identifier carried by each HTTP request.
//!
//! The active identifier sits in a tokio task-local, so domain errors can
//! stamp it without threading a parameter through the ports. Work moved onto
//! another task must re-enter it with [`TraceId::in_scope`].

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use uuid::Uuid;

tokio::task_local! {
    static ACTIVE_TRACE_ID: TraceId;
}

/// UUID naming one request in logs, error bodies, and the `trace-id` header.
///
/// # Examples
/// ```
/// use ecoscholar_backend::TraceId;
///
/// # tokio::runtime::Builder::new_current_thread().build().map(|rt| rt.block_on(async {
/// let id = TraceId::random();
/// assert_eq!(id.in_scope(async { TraceId::current() }).await, Some(id));
/// assert_eq!(TraceId::current(), None);
/// # })).ok();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh identifier for a request that arrived without one.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Accept an identifier supplied by a caller or proxy.
    ///
    /// Only non-nil UUIDs are honoured; anything else is ignored so log
    /// fields keep a single shape.
    #[must_use]
    pub fn from_upstream(raw: &str) -> Option<Self> {
        Uuid::try_parse(raw.trim())
            .ok()
            .filter(|uuid| !uuid.is_nil())
            .map(Self)
    }

    /// Identifier of the request being served by this task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        ACTIVE_TRACE_ID.try_with(|id| *id).ok()
    }

    /// Run `fut` with this identifier active.
    pub async fn in_scope<F: Future>(self, fut: F) -> F::Output {
        ACTIVE_TRACE_ID.scope(self, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s).map(Self)
    }
}
