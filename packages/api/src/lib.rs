//! # API crate: identity provider client for Summarist
//!
//! Everything the frontend needs to talk to the hosted identity service lives here.
//! UI code never reaches past the [`IdentityProvider`] trait: it collects credentials,
//! forwards them verbatim and reacts to the answer.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | `[identity]` and `[auth]` configuration sections plus environment overrides |
//! | [`error`] | [`AuthError`], the provider error surfaced to users verbatim |
//! | [`firebase`] | Identity Toolkit REST client with browser popup/redirect federated sign-in |
//! | [`memory`] | In-process provider used for offline demo mode and tests |
//! | [`models`] | [`User`] and the persisted [`Session`] |
//! | [`provider`] | The [`IdentityProvider`] trait and [`FederatedProvider`] |
//!
//! [`Identity`] picks one implementation at start-up from [`IdentityConfig`].

pub mod config;
pub mod error;
pub mod firebase;
mod identity;
pub mod memory;
pub mod models;
mod persistence;
pub mod provider;

pub use config::{AuthConfig, GuestCredentials, IdentityConfig};
pub use error::AuthError;
pub use firebase::FirebaseAuth;
pub use identity::Identity;
pub use memory::{IdentityCall, MemoryIdentity};
pub use models::{Session, User};
pub use provider::{FederatedProvider, IdentityProvider};
