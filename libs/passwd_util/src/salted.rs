//! Jupyter's legacy `<alg>:<salt>:<hexdigest>` tokens, where the digest is
//! taken over the password bytes followed by the ASCII salt.

use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha256, Sha512};

/// Salt length in hex characters.
pub const SALT_LEN: usize = 12;

pub(crate) fn create<D: Digest>(name: &str, password: &[u8]) -> String {
    let mut salt = [0u8; SALT_LEN / 2];
    OsRng.fill_bytes(&mut salt);
    let salt = hex::encode(salt);
    let digest = digest::<D>(password, &salt);
    format!("{}:{}:{}", name, salt, digest)
}

pub(crate) fn verify(token: &str, password: &[u8]) -> bool {
    let mut parts = token.splitn(3, ':');
    let (name, salt, expected) = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(salt), Some(expected)) => (name, salt, expected),
        _ => return false,
    };

    let expected = match hex::decode(expected) {
        Ok(expected) => expected,
        Err(_) => return false,
    };
    let actual = match name {
        "sha256" => digest_bytes::<Sha256>(password, salt),
        "sha512" => digest_bytes::<Sha512>(password, salt),
        _ => return false,
    };
    constant_time_eq(&actual, &expected)
}

fn digest<D: Digest>(password: &[u8], salt: &str) -> String {
    hex::encode(digest_bytes::<D>(password, salt))
}

fn digest_bytes<D: Digest>(password: &[u8], salt: &str) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(password);
    hasher.update(salt.as_bytes());
    hasher.finalize().to_vec()
}

/// Compares every byte regardless of where the first mismatch is.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let token = create::<Sha256>("sha256", b"123456");
        let parts: Vec<_> = token.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "sha256");
        assert_eq!(parts[1].len(), SALT_LEN);
        assert_eq!(parts[2].len(), 64);
    }

    #[test]
    fn test_known_digest() {
        // sha256("password" ++ "0123456789ab")
        let expected = digest::<Sha256>(b"password0123456789ab", "");
        let token = format!("sha256:0123456789ab:{}", expected);
        assert!(verify(&token, b"password"));
        let upper = format!("sha256:0123456789ab:{}", expected.to_uppercase());
        assert!(verify(&upper, b"password"));
        assert!(!verify(&token, b"passwore"));
    }

    #[test]
    fn test_digest_mismatch() {
        let token = create::<Sha512>("sha512", b"123456");
        let (head, digest) = token.split_at(token.len() - 2);
        let flipped = if digest == "00" { "01" } else { "00" };
        assert!(!verify(&format!("{}{}", head, flipped), b"123456"));

        // truncated and non-hex digests
        assert!(!verify(&token[..token.len() - 2], b"123456"));
        assert!(!verify(&format!("{}zz", head), b"123456"));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn test_malformed() {
        assert!(!verify("sha256", b"123456"));
        assert!(!verify("sha256:abc", b"123456"));
        assert!(!verify("md5:0123456789ab:00", b"123456"));
    }
}
