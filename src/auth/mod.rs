//! Principal authentication: token codec, credential hashing, principal
//! resolution and the role gate.

pub mod credential;
pub mod resolver;
pub mod role;
pub mod token;

use thiserror::Error;

pub use credential::CredentialHash;
pub use resolver::PrincipalResolver;
pub use role::{require, Role};
pub use token::{Claims, TokenCodec, TokenError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("User for token no longer exists")]
    PrincipalNotFound,

    #[error("Requires {required} role")]
    Forbidden { required: Role },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Token(TokenError),

    #[error(transparent)]
    Repository(#[from] crate::database::RepositoryError),
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidToken => AuthError::InvalidToken,
            TokenError::ExpiredToken => AuthError::ExpiredToken,
            other => AuthError::Token(other),
        }
    }
}
