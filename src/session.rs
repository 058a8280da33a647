//! Contracts for the collaborators around the engine: where the master
//! password lives and who confirms the user is present. The engine itself
//! depends on neither.

use thiserror::Error;
use zeroize::Zeroizing;

use crate::engine::{self, Derived, EngineError, Mode};

/// Holds the master password between derivations.
pub trait SecretStore {
    fn save(&mut self, password: &str);
    fn load(&self) -> Option<Zeroizing<String>>;
    fn exists(&self) -> bool;
    fn delete(&mut self);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Cancelled,
    Error(String),
}

/// Biometric / user-presence check run before the engine is called.
pub trait PresenceGate {
    fn authenticate(&mut self) -> AuthOutcome;
}

/// Process-local store; the secret is wiped when replaced, deleted or dropped.
#[derive(Default)]
pub struct MemoryStore {
    secret: Option<Zeroizing<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecretStore for MemoryStore {
    fn save(&mut self, password: &str) {
        self.secret = Some(Zeroizing::new(password.to_string()));
    }

    fn load(&self) -> Option<Zeroizing<String>> {
        self.secret.clone()
    }

    fn exists(&self) -> bool {
        self.secret.as_ref().is_some_and(|s| !s.is_empty())
    }

    fn delete(&mut self) {
        self.secret = None;
    }
}

/// Gate for front ends without a presence check.
pub struct AllowAll;

impl PresenceGate for AllowAll {
    fn authenticate(&mut self) -> AuthOutcome {
        AuthOutcome::Success
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no master password stored; run setup first")]
    MissingMasterPassword,
    #[error("authentication cancelled")]
    AuthenticationCancelled,
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Fetches the stored master password behind a presence check and hands it to
/// the engine.
pub struct Session<S, G> {
    store: S,
    gate: G,
}

impl<S: SecretStore, G: PresenceGate> Session<S, G> {
    pub fn new(store: S, gate: G) -> Self {
        Self { store, gate }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn generate(&mut self, raw_site: &str, mode: Mode) -> Result<Derived, SessionError> {
        if !self.store.exists() {
            return Err(SessionError::MissingMasterPassword);
        }
        match self.gate.authenticate() {
            AuthOutcome::Success => {}
            AuthOutcome::Cancelled => return Err(SessionError::AuthenticationCancelled),
            AuthOutcome::Error(msg) => return Err(SessionError::AuthenticationFailed(msg)),
        }
        let master = self
            .store
            .load()
            .ok_or(SessionError::MissingMasterPassword)?;
        Ok(engine::derive(&master, raw_site, mode)?)
    }
}
