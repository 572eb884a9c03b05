//! Document store connection management.
//!
//! The store is SurrealDB reached through the `any` engine, so the URL scheme
//! selects the transport at runtime:
//! - `ws://` / `wss://` for WebSocket connections
//! - `http://` / `https://` for HTTP connections
//! - `mem://` for an in-process database (tests)

use std::fmt;

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;
use tracing::{debug, info};
use zeroize::Zeroizing;

/// Client handle shared by persistence adapters. Cloning is cheap.
pub type StoreClient = Surreal<Any>;

/// Namespace holding the application database.
pub const STORE_NAMESPACE: &str = "ecoscholar";
/// Database name; fixed for every deployment.
pub const STORE_DATABASE: &str = "ecoscholardb";

/// Errors raised while establishing or preparing the store connection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The URL could not be reached or the handshake failed.
    #[error("failed to connect to document store at {url}: {message}")]
    Connect { url: String, message: String },
    /// Root sign-in was rejected.
    #[error("failed to authenticate with document store at {url}: {message}")]
    Authenticate { url: String, message: String },
    /// Namespace or database selection failed.
    #[error("failed to select namespace {namespace} / database {database}: {message}")]
    Select {
        namespace: String,
        database: String,
        message: String,
    },
    /// Schema definition statements were rejected.
    #[error("failed to apply user schema: {message}")]
    Schema { message: String },
}

/// Root credentials for stores that require sign-in.
#[derive(Clone)]
struct StoreCredentials {
    username: String,
    password: Zeroizing<String>,
}

/// Connection settings for the document store.
///
/// # Examples
/// ```
/// use ecoscholar_backend::outbound::persistence::{STORE_DATABASE, StoreConfig};
///
/// let config = StoreConfig::new("ws://127.0.0.1:8000").with_credentials("root", "root");
/// assert_eq!(config.database(), STORE_DATABASE);
/// assert!(!format!("{config:?}").contains("password: \"root\""));
/// ```
#[derive(Clone)]
pub struct StoreConfig {
    url: String,
    namespace: String,
    database: String,
    credentials: Option<StoreCredentials>,
}

impl StoreConfig {
    /// Configuration for `url` using the fixed namespace and database.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            namespace: STORE_NAMESPACE.to_owned(),
            database: STORE_DATABASE.to_owned(),
            credentials: None,
        }
    }

    /// Sign in as a root user after connecting.
    #[must_use]
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(StoreCredentials {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        });
        self
    }

    /// Connection URL as configured (may contain credentials; log
    /// [`sanitize_url`] instead).
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Namespace selected after connecting.
    pub fn namespace(&self) -> &str {
        self.namespace.as_str()
    }

    /// Database selected after connecting.
    pub fn database(&self) -> &str {
        self.database.as_str()
    }

    /// Whether root sign-in is configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &sanitize_url(&self.url))
            .field("namespace", &self.namespace)
            .field("database", &self.database)
            .field(
                "username",
                &self.credentials.as_ref().map(|c| c.username.as_str()),
            )
            .finish_non_exhaustive()
    }
}

/// Strip user information from a connection URL so it can be logged.
///
/// # Examples
/// ```
/// use ecoscholar_backend::outbound::persistence::sanitize_url;
///
/// assert_eq!(sanitize_url("ws://user:pass@db:8000"), "ws://***@db:8000");
/// assert_eq!(sanitize_url("mem://"), "mem://");
/// ```
pub fn sanitize_url(url: &str) -> String {
    let (prefix, rest) = match url.split_once("://") {
        Some((scheme, rest)) => (format!("{scheme}://"), rest),
        None => (String::new(), url),
    };
    match rest.rsplit_once('@') {
        Some((_, host)) => format!("{prefix}***@{host}"),
        None => url.to_owned(),
    }
}

/// Connect to the store, sign in when credentials are configured, and select
/// the namespace and database.
///
/// # Errors
/// Returns [`StoreError`] describing the step that failed. There is no retry;
/// callers treat a failure as fatal.
pub async fn connect(config: &StoreConfig) -> Result<StoreClient, StoreError> {
    let safe_url = sanitize_url(&config.url);
    debug!(url = %safe_url, "connecting to document store");

    let client = any::connect(config.url.as_str())
        .await
        .map_err(|err| StoreError::Connect {
            url: safe_url.clone(),
            message: err.to_string(),
        })?;

    if let Some(credentials) = &config.credentials {
        client
            .signin(Root {
                username: credentials.username.as_str(),
                password: credentials.password.as_str(),
            })
            .await
            .map_err(|err| StoreError::Authenticate {
                url: safe_url.clone(),
                message: err.to_string(),
            })?;
    }

    client
        .use_ns(config.namespace.as_str())
        .use_db(config.database.as_str())
        .await
        .map_err(|err| StoreError::Select {
            namespace: config.namespace.clone(),
            database: config.database.clone(),
            message: err.to_string(),
        })?;

    info!(
        url = %safe_url,
        namespace = %config.namespace,
        database = %config.database,
        "document store connected"
    );
    Ok(client)
}
