#![forbid(unsafe_code)]
#![warn(clippy::default_trait_access)]

mod error;
mod phc;
mod salted;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Sha256, Sha512};

pub use error::{Error, Result};
pub use phc::{verify_password, ARGON2_MEMORY_COST, ARGON2_PARALLELISM, ARGON2_TIME_COST};
pub use salted::SALT_LEN;

/// Prefix Jupyter puts in front of an Argon2 PHC string.
const ARGON2_PREFIX: &str = "argon2:";

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HashType {
    #[default]
    #[serde(rename = "argon2")]
    Argon2,

    #[serde(rename = "sha256")]
    Sha256,

    #[serde(rename = "sha512")]
    Sha512,

    #[serde(rename = "pbkdf2-sha256")]
    Pbkdf2Sha256,

    #[serde(rename = "pbkdf2-sha512")]
    Pbkdf2Sha512,

    #[serde(rename = "scrypt")]
    Scrypt,
}

impl FromStr for HashType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use HashType::*;

        let ty = match s {
            "argon2" => Argon2,
            "sha256" => Sha256,
            "sha512" => Sha512,
            "pbkdf2-sha256" => Pbkdf2Sha256,
            "pbkdf2-sha512" => Pbkdf2Sha512,
            "scrypt" => Scrypt,
            _ => return Err(Error::UnknownHashType(s.to_string())),
        };
        Ok(ty)
    }
}

impl Display for HashType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use HashType::*;

        match self {
            Argon2 => write!(f, "argon2"),
            Sha256 => write!(f, "sha256"),
            Sha512 => write!(f, "sha512"),
            Pbkdf2Sha256 => write!(f, "pbkdf2-sha256"),
            Pbkdf2Sha512 => write!(f, "pbkdf2-sha512"),
            Scrypt => write!(f, "scrypt"),
        }
    }
}

impl HashType {
    pub const ALL: [HashType; 6] = [
        HashType::Argon2,
        HashType::Sha256,
        HashType::Sha512,
        HashType::Pbkdf2Sha256,
        HashType::Pbkdf2Sha512,
        HashType::Scrypt,
    ];

    /// Hashes `password` with a fresh random salt.
    ///
    /// `Argon2`, `Sha256` and `Sha512` produce tokens in the form Jupyter's
    /// `passwd()` emits (`argon2:$argon2id$...`, `sha256:<salt>:<digest>`);
    /// the remaining types produce bare PHC strings.
    pub fn create_token(&self, password: impl AsRef<[u8]>) -> Result<String> {
        let password = password.as_ref();

        match self {
            HashType::Argon2 => Ok(format!(
                "{}{}",
                ARGON2_PREFIX,
                phc::create_argon2id(password)?
            )),
            HashType::Sha256 => Ok(salted::create::<Sha256>("sha256", password)),
            HashType::Sha512 => Ok(salted::create::<Sha512>("sha512", password)),
            HashType::Pbkdf2Sha256 => phc::create_pbkdf2(password, phc::PBKDF2_SHA256),
            HashType::Pbkdf2Sha512 => phc::create_pbkdf2(password, phc::PBKDF2_SHA512),
            HashType::Scrypt => phc::create_scrypt(password),
        }
    }
}

/// Checks `password` against any token produced by [`HashType::create_token`].
pub fn verify_token(token: impl AsRef<str>, password: impl AsRef<[u8]>) -> bool {
    let token = token.as_ref();
    let password = password.as_ref();

    if let Some(phc) = token.strip_prefix(ARGON2_PREFIX) {
        phc.starts_with("$argon2") && verify_password(phc, password)
    } else if token.starts_with('$') {
        verify_password(token, password)
    } else {
        salted::verify(token, password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash() {
        for hash_type in HashType::ALL {
            let password = "123456";
            let token = hash_type.create_token(password).unwrap();
            assert!(verify_token(&token, password), "{}", hash_type);
            assert!(!verify_token(&token, "abcdef"), "{}", hash_type);
        }
    }

    #[test]
    fn test_salted() {
        for hash_type in HashType::ALL {
            let a = hash_type.create_token("hunter2").unwrap();
            let b = hash_type.create_token("hunter2").unwrap();
            assert_ne!(a, b, "{}", hash_type);
            assert_ne!(a, "hunter2");
            assert!(!a.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn test_token_prefix() {
        let token = HashType::Argon2.create_token("123456").unwrap();
        assert!(token.starts_with("argon2:$argon2id$"));

        let token = HashType::Sha512.create_token("123456").unwrap();
        assert!(token.starts_with("sha512:"));

        let token = HashType::Scrypt.create_token("123456").unwrap();
        assert!(token.starts_with("$scrypt$"));
    }

    #[test]
    fn test_empty_password() {
        let token = HashType::default().create_token("").unwrap();
        assert!(verify_token(&token, ""));
        assert!(!verify_token(&token, " "));
    }

    #[test]
    fn test_parse_hash_type() {
        for hash_type in HashType::ALL {
            assert_eq!(hash_type.to_string().parse::<HashType>().unwrap(), hash_type);
        }
        assert!(matches!(
            "md5".parse::<HashType>(),
            Err(Error::UnknownHashType(name)) if name == "md5"
        ));
    }

    #[test]
    fn test_default_hash_type() {
        assert_eq!(HashType::default(), HashType::Argon2);
        assert_eq!(HashType::default().to_string(), "argon2");
    }

    #[test]
    fn test_serde_names() {
        for hash_type in HashType::ALL {
            let value = serde_yaml::to_value(hash_type).unwrap();
            assert_eq!(value, serde_yaml::Value::String(hash_type.to_string()));

            let parsed: HashType = serde_yaml::from_str(&hash_type.to_string()).unwrap();
            assert_eq!(parsed, hash_type);
        }
        assert!(serde_yaml::from_str::<HashType>("md5").is_err());
    }

    #[test]
    fn test_malformed_token() {
        assert!(!verify_token("", "123456"));
        assert!(!verify_token("123456", "123456"));
        assert!(!verify_token("argon2:", "123456"));

        let scrypt = HashType::Scrypt.create_token("123456").unwrap();
        assert!(!verify_token(format!("{}{}", ARGON2_PREFIX, scrypt), "123456"));
    }
}
