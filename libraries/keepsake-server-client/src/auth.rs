//! Explicit authentication session.
//!
//! Login state is an ordinary value handed to whatever needs it instead of
//! ambient global storage. Credentials persist through a [`CredentialStore`].

use crate::error::{Result, ServerClientError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

/// Token and role of a logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Bearer token
    pub token: String,
    /// Role as issued by the backend (e.g. "admin", "cliente")
    pub role: String,
}

/// Persistent storage for credentials.
pub trait CredentialStore: Send + Sync {
    /// Read stored credentials. Incomplete records read as `None`.
    fn load(&self) -> Result<Option<Credentials>>;

    /// Replace stored credentials.
    fn save(&self, credentials: &Credentials) -> Result<()>;

    /// Remove everything stored.
    fn clear(&self) -> Result<()>;
}

/// On-disk record. Both fields optional so half-written files read as logged out.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredCredentials {
    token: Option<String>,
    role: Option<String>,
}

/// JSON file credential store.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store credentials at `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the credentials file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<Credentials>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let stored: StoredCredentials = serde_json::from_str(&contents).map_err(|e| {
            ServerClientError::CredentialStore(format!(
                "{} is not a credentials file: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(match (stored.token, stored.role) {
            (Some(token), Some(role)) => Some(Credentials { token, role }),
            _ => None,
        })
    }

    fn save(&self, credentials: &Credentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let stored = StoredCredentials {
            token: Some(credentials.token.clone()),
            role: Some(credentials.role.clone()),
        };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| ServerClientError::CredentialStore(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory credential store.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: Mutex<Option<Credentials>>,
}

impl MemoryCredentialStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `credentials`
    pub fn with(credentials: Credentials) -> Self {
        Self {
            inner: Mutex::new(Some(credentials)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<Credentials>>> {
        self.inner
            .lock()
            .map_err(|_| ServerClientError::CredentialStore("store lock poisoned".into()))
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<Credentials>> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, credentials: &Credentials) -> Result<()> {
        *self.lock()? = Some(credentials.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}

/// Current login state backed by a store.
#[derive(Debug)]
pub struct AuthSession<S: CredentialStore> {
    store: S,
    current: Option<Credentials>,
}

impl<S: CredentialStore> AuthSession<S> {
    /// Restore the session from `store`.
    ///
    /// Logged in only if both token and role were persisted.
    pub fn init(store: S) -> Result<Self> {
        let current = store.load()?;
        debug!(logged_in = current.is_some(), "Auth session restored");
        Ok(Self { store, current })
    }

    /// Persist and activate credentials.
    pub fn login(&mut self, token: impl Into<String>, role: impl Into<String>) -> Result<()> {
        let credentials = Credentials {
            token: token.into(),
            role: role.into(),
        };
        self.store.save(&credentials)?;
        info!(role = %credentials.role, "Logged in");
        self.current = Some(credentials);
        Ok(())
    }

    /// Clear persisted and in-memory credentials.
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        self.current = None;
        info!("Logged out");
        Ok(())
    }

    /// Role of the logged-in user
    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.role.as_str())
    }

    /// Token to send as `Authorization: Bearer`
    pub fn bearer(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.token.as_str())
    }

    /// Whether anyone is logged in
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}
