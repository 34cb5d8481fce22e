//! Password digests for account registration.
//!
//! Digests are salted SHA-256 in the form `sha256$<salt>$<hex>`. The
//! store only ever sees the digest; plaintext passwords stay at the API
//! boundary.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Hash a password with a fresh random salt.
///
/// # Examples
///
/// ```
/// use chronicle::{hash_password, verify_password};
///
/// let digest = hash_password("correct horse");
/// assert!(verify_password("correct horse", &digest));
/// assert!(!verify_password("wrong horse", &digest));
/// ```
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("sha256${}${}", salt, digest(&salt, password))
}

/// Check a password against a stored digest.
///
/// Returns `false` for malformed digests rather than erroring; a corrupt
/// digest should never authenticate.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some("sha256"), Some(salt), Some(hex), None) => digest(salt, password) == hex,
        _ => false,
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digests_are_salted() {
        let a = hash_password("secret");
        let b = hash_password("secret");
        assert_ne!(a, b);
        assert!(verify_password("secret", &a));
        assert!(verify_password("secret", &b));
    }

    #[test]
    fn malformed_digests_never_authenticate() {
        assert!(!verify_password("secret", "not-a-digest"));
        assert!(!verify_password("secret", "md5$salt$abcd"));
    }
}
