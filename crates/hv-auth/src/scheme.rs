use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::AuthError;

/// Identity provider backing the console's sign-in flow.
///
/// This is the discriminant the rest of the console switches on (the
/// sidebar hides user management under Azure AD, where users are managed
/// in the directory instead). Config files spell it `cognito`, `azuread`
/// or `identity-center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthKind {
    Cognito,
    #[serde(rename = "azuread")]
    AzureAd,
    IdentityCenter,
}

impl AuthKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cognito => "cognito",
            Self::AzureAd => "azuread",
            Self::IdentityCenter => "identity-center",
        }
    }
}

impl fmt::Display for AuthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthKind {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cognito" => Ok(Self::Cognito),
            "azuread" => Ok(Self::AzureAd),
            "identity-center" => Ok(Self::IdentityCenter),
            other => Err(AuthError::UnknownProvider(other.to_string())),
        }
    }
}

/// Full identity-provider configuration, one variant per provider, each
/// carrying exactly the fields the fingerprint consumes.
///
/// Secret material is zeroized on drop and never appears in `Debug`
/// output.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(tag = "provider", rename_all = "kebab-case")]
pub enum AuthScheme {
    Cognito {
        client_id: String,
        client_secret: String,
        user_pool_id: String,
    },
    #[serde(rename = "azuread")]
    AzureAd {
        client_id: String,
        client_secret: String,
    },
    IdentityCenter {
        entity_id: String,
        certificate: String,
    },
}

impl AuthScheme {
    pub fn kind(&self) -> AuthKind {
        match self {
            Self::Cognito { .. } => AuthKind::Cognito,
            Self::AzureAd { .. } => AuthKind::AzureAd,
            Self::IdentityCenter { .. } => AuthKind::IdentityCenter,
        }
    }
}

impl fmt::Debug for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cognito {
                client_id,
                user_pool_id,
                ..
            } => f
                .debug_struct("Cognito")
                .field("client_id", client_id)
                .field("client_secret", &"[REDACTED]")
                .field("user_pool_id", user_pool_id)
                .finish(),
            Self::AzureAd { client_id, .. } => f
                .debug_struct("AzureAd")
                .field("client_id", client_id)
                .field("client_secret", &"[REDACTED]")
                .finish(),
            Self::IdentityCenter { entity_id, .. } => f
                .debug_struct("IdentityCenter")
                .field("entity_id", entity_id)
                .field("certificate", &"[REDACTED]")
                .finish(),
        }
    }
}
