use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown hash type: {0}")]
    UnknownHashType(String),

    #[error("invalid hash params: {0}")]
    InvalidParams(argon2::Error),

    #[error("hash password: {0}")]
    HashPassword(password_hash::Error),
}

impl From<password_hash::Error> for Error {
    #[inline]
    fn from(err: password_hash::Error) -> Self {
        Self::HashPassword(err)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
