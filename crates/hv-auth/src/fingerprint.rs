use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::scheme::AuthScheme;

/// Salt for the auth-config fingerprint. Must stay stable across
/// releases: stored fingerprints are compared against freshly derived
/// ones to detect configuration drift.
const SALT: &[u8] = b"fingerprint-salt";

/// PBKDF2 round count. Deliberately slow: the input includes a client
/// secret, and the fingerprint may end up in logs or state files.
const ROUNDS: u32 = 500_000;

/// Derive a stable fingerprint of the identity-provider configuration.
///
/// Concatenates the scheme's identifying material and derives 32 bytes of
/// PBKDF2-HMAC-SHA256 over it, hex encoded. Changing any field changes
/// the fingerprint; the secret itself cannot be recovered from it.
pub fn fingerprint(scheme: &AuthScheme) -> String {
    let mut material = match scheme {
        AuthScheme::Cognito {
            client_id,
            client_secret,
            user_pool_id,
        } => format!("{client_id}{client_secret}{user_pool_id}"),
        AuthScheme::AzureAd {
            client_id,
            client_secret,
        } => format!("{client_id}{client_secret}"),
        AuthScheme::IdentityCenter {
            entity_id,
            certificate,
        } => format!("{entity_id}{certificate}"),
    };

    let mut digest = [0u8; 32];
    pbkdf2_hmac::<Sha256>(material.as_bytes(), SALT, ROUNDS, &mut digest);
    material.zeroize();

    hex::encode(digest)
}
