//! # Identity-Provider Boundary
//!
//! ArqCalc's calculators sit behind a login wall, but the calculation
//! engine itself knows nothing about any particular auth backend. This
//! module defines the boundary: the [`AuthProvider`] trait any concrete
//! provider (hosted backend-as-a-service or self-hosted) implements, the
//! session-change event stream presentation layers subscribe to for
//! redirect decisions, and [`DemoProvider`], the in-memory implementation
//! used by the CLI and by tests.
//!
//! Failures surface as [`ArqError::AuthFailed`] with a human-readable
//! reason suitable for direct display.
//!
//! ## Example
//!
//! ```rust
//! use arq_core::auth::{AuthProvider, DemoProvider};
//!
//! let provider = DemoProvider::new();
//! let events = provider.subscribe();
//!
//! let user = provider.login("demo@arqcalc.com", "password").unwrap();
//! assert_eq!(user.name, "Demo User");
//! assert!(events.try_recv().is_ok());
//! ```

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::errors::{ArqError, ArqResult};

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Session-change notification.
///
/// Presentation layers subscribe to these to decide when to show the
/// login page versus the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthEvent {
    SignedIn(UserProfile),
    SignedOut,
}

/// The identity-provider interface.
///
/// Every operation returns either success or an [`ArqError::AuthFailed`]
/// carrying a human-readable reason. Implementations must be callable
/// from any thread (the CLI keeps the provider behind a shared reference).
pub trait AuthProvider: Send + Sync {
    /// Authenticate with email and password.
    fn login(&self, email: &str, password: &str) -> ArqResult<UserProfile>;

    /// Register a new account and sign it in.
    fn sign_up(&self, email: &str, password: &str, name: &str) -> ArqResult<UserProfile>;

    /// End the current session. A no-op when nobody is signed in.
    fn logout(&self);

    /// Request a password reset for the given email.
    fn reset_password(&self, email: &str) -> ArqResult<()>;

    /// The currently signed-in user, if any.
    fn current_user(&self) -> Option<UserProfile>;

    /// Subscribe to session-change events.
    ///
    /// Each subscriber gets its own receiver; events are delivered to all
    /// live subscribers. Dropped receivers are pruned on the next send.
    fn subscribe(&self) -> Receiver<AuthEvent>;
}

/// Demo credential accepted by [`DemoProvider`]
pub const DEMO_EMAIL: &str = "demo@arqcalc.com";
/// Demo password accepted by [`DemoProvider`]
pub const DEMO_PASSWORD: &str = "password";

#[derive(Debug, Clone)]
struct Account {
    password: String,
    profile: UserProfile,
}

#[derive(Debug, Default)]
struct DemoState {
    accounts: Vec<Account>,
    session: Option<UserProfile>,
    next_id: u64,
}

/// In-memory identity provider simulating the hosted backend.
///
/// Ships with the fixed demo account (`demo@arqcalc.com` / `password`);
/// sign-ups are accepted into the in-memory store and lost on drop.
/// Password resets are acknowledged for any known email without sending
/// anything anywhere.
pub struct DemoProvider {
    state: Mutex<DemoState>,
    subscribers: Mutex<Vec<Sender<AuthEvent>>>,
}

impl DemoProvider {
    pub fn new() -> Self {
        let demo = Account {
            password: DEMO_PASSWORD.to_string(),
            profile: UserProfile {
                id: "1".to_string(),
                name: "Demo User".to_string(),
                email: DEMO_EMAIL.to_string(),
            },
        };
        DemoProvider {
            state: Mutex::new(DemoState {
                accounts: vec![demo],
                session: None,
                next_id: 2,
            }),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    fn notify(&self, event: AuthEvent) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for DemoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for DemoProvider {
    fn login(&self, email: &str, password: &str) -> ArqResult<UserProfile> {
        let profile = {
            let mut state = self.state.lock().unwrap();
            let account = state
                .accounts
                .iter()
                .find(|a| a.profile.email == email && a.password == password)
                .cloned()
                .ok_or_else(|| ArqError::auth_failed("Invalid email or password"))?;
            state.session = Some(account.profile.clone());
            account.profile
        };
        self.notify(AuthEvent::SignedIn(profile.clone()));
        Ok(profile)
    }

    fn sign_up(&self, email: &str, password: &str, name: &str) -> ArqResult<UserProfile> {
        let profile = {
            let mut state = self.state.lock().unwrap();
            if state.accounts.iter().any(|a| a.profile.email == email) {
                return Err(ArqError::auth_failed("An account with this email already exists"));
            }
            let profile = UserProfile {
                id: state.next_id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
            };
            state.next_id += 1;
            state.accounts.push(Account {
                password: password.to_string(),
                profile: profile.clone(),
            });
            state.session = Some(profile.clone());
            profile
        };
        self.notify(AuthEvent::SignedIn(profile.clone()));
        Ok(profile)
    }

    fn logout(&self) {
        let had_session = {
            let mut state = self.state.lock().unwrap();
            state.session.take().is_some()
        };
        if had_session {
            self.notify(AuthEvent::SignedOut);
        }
    }

    fn reset_password(&self, email: &str) -> ArqResult<()> {
        let state = self.state.lock().unwrap();
        if state.accounts.iter().any(|a| a.profile.email == email) {
            Ok(())
        } else {
            Err(ArqError::auth_failed("No account found for this email"))
        }
    }

    fn current_user(&self) -> Option<UserProfile> {
        self.state.lock().unwrap().session.clone()
    }

    fn subscribe(&self) -> Receiver<AuthEvent> {
        let (tx, rx) = channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }
}
