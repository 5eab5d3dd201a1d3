//! Authentication configuration for the hpcview console
//!
//! The console delegates sign-in to one of three identity providers.
//! This crate models that configuration and derives a stable fingerprint
//! from it, so deployments can detect when the identity configuration
//! changed without storing any of the secret material itself.
//!
//! # Example
//!
//! ```
//! use hv_auth::{fingerprint, AuthKind, AuthScheme};
//!
//! let scheme = AuthScheme::AzureAd {
//!     client_id: "console-client".to_string(),
//!     client_secret: "s3cret".to_string(),
//! };
//!
//! assert_eq!(scheme.kind(), AuthKind::AzureAd);
//! // 32 bytes of PBKDF2-HMAC-SHA256, hex encoded.
//! assert_eq!(fingerprint(&scheme).len(), 64);
//! ```

pub mod errors;
pub mod fingerprint;
pub mod scheme;

pub use errors::{AuthError, Result};
pub use fingerprint::fingerprint;
pub use scheme::{AuthKind, AuthScheme};
