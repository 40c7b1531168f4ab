use argon2::{Algorithm, Argon2, Params, Version};
use password_hash::{Ident, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use pbkdf2::Pbkdf2;
use rand_core::OsRng;
use scrypt::Scrypt;

use crate::error::{Error, Result};

/// Argon2 costs used by Jupyter's `passwd()`: 10 MiB, 10 passes, 8 lanes.
pub const ARGON2_MEMORY_COST: u32 = 10240;
pub const ARGON2_TIME_COST: u32 = 10;
pub const ARGON2_PARALLELISM: u32 = 8;

pub(crate) const PBKDF2_SHA256: Ident<'static> = Ident::new_unwrap("pbkdf2-sha256");
pub(crate) const PBKDF2_SHA512: Ident<'static> = Ident::new_unwrap("pbkdf2-sha512");

pub(crate) fn create_argon2id(password: &[u8]) -> Result<String> {
    let params = Params::new(
        ARGON2_MEMORY_COST,
        ARGON2_TIME_COST,
        ARGON2_PARALLELISM,
        None,
    )
    .map_err(Error::InvalidParams)?;
    let salt = SaltString::generate(&mut OsRng);

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password, &salt)?
        .to_string())
}

pub(crate) fn create_pbkdf2(password: &[u8], algorithm: Ident<'static>) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Ok(Pbkdf2
        .hash_password_customized(
            password,
            Some(algorithm),
            None,
            pbkdf2::Params::default(),
            &salt,
        )?
        .to_string())
}

pub(crate) fn create_scrypt(password: &[u8]) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Scrypt.hash_password(password, &salt)?.to_string())
}

/// Verifies a bare PHC string (`$alg$params$salt$hash`) against `password`.
///
/// Malformed strings and unsupported algorithms never verify.
pub fn verify_password(phc: impl AsRef<str>, password: impl AsRef<[u8]>) -> bool {
    let parsed_hash = match PasswordHash::new(phc.as_ref()) {
        Ok(parsed_hash) => parsed_hash,
        Err(_) => return false,
    };

    match parsed_hash.algorithm.as_str() {
        "argon2d" | "argon2i" | "argon2id" => Argon2::default()
            .verify_password(password.as_ref(), &parsed_hash)
            .is_ok(),
        "pbkdf2-sha256" | "pbkdf2-sha512" => Pbkdf2
            .verify_password(password.as_ref(), &parsed_hash)
            .is_ok(),
        "scrypt" => Scrypt
            .verify_password(password.as_ref(), &parsed_hash)
            .is_ok(),
        _ => false,
    }
}
