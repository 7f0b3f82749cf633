//! # Colegio - School Account Service Library
//!
//! Facade crate that re-exports the public APIs of the account service
//! components.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! colegio = { path = "../colegio" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Account`, `Email`, `ActivationToken`, `RoleAssignment`, etc.
//! - **Ports**: `AccountStore`, `ActivationTokenStore`, `RoleAssignmentStore`, `EmailClient`, etc.
//! - **Application**: `AccountService`
//! - **Adapters**: `PostgresAccountStore`, `Argon2PasswordHasher`, `PostmarkEmailClient`, etc.
//! - **Service**: `ColegioService` - the HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use colegio_core::*;
}

pub use colegio_core::{
    Account, AccountCandidate, AccountFilter, AccountId, AccountUpdate, ActivationLinks,
    ActivationToken, AuthContext, CollaboratorId, Email, GuardianId, Password, RoleAssignment,
    RoleAssignmentId, RoleId, TokenValue,
};

// ============================================================================
// Ports
// ============================================================================

/// Storage and service traits
pub mod ports {
    pub use colegio_core::{
        AccountStore, ActivationTokenStore, EmailClient, EmailError, HasherError,
        PasswordHasher, RoleAssignmentStore, StoreError, TemplateError, TemplateRenderer,
    };
}

pub use ports::{AccountStore, ActivationTokenStore, EmailClient, RoleAssignmentStore, StoreError};

// ============================================================================
// Application Layer
// ============================================================================

pub use colegio_application::{AccountService, AccountServiceError, DeliveryStatus, ErrorKind};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use colegio_adapters::persistence::*;
    }

    /// Email client implementations
    pub mod email {
        pub use colegio_adapters::email::*;
    }

    /// Configuration
    pub mod config {
        pub use colegio_adapters::config::*;
    }
}

pub use colegio_adapters::{
    Argon2PasswordHasher, AskamaTemplateRenderer, HashMapAccountStore,
    HashMapActivationTokenStore, HashMapRoleAssignmentStore, MockEmailClient,
    PostgresAccountStore, PostgresActivationTokenStore, PostgresRoleAssignmentStore,
    PostmarkEmailClient,
};

// ============================================================================
// HTTP Service (Main Entry Point)
// ============================================================================

pub use colegio_axum::{ApiError, AppState};
pub use colegio_service::ColegioService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use tokio;
