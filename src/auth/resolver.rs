use std::sync::Arc;

use chrono::Utc;

use super::{AuthError, TokenCodec};
use crate::database::models::User;
use crate::database::Repository;

/// Maps credentials and tokens onto live principals.
#[derive(Clone)]
pub struct PrincipalResolver {
    codec: TokenCodec,
    users: Arc<dyn Repository<User>>,
}

impl PrincipalResolver {
    pub fn new(codec: TokenCodec, users: Arc<dyn Repository<User>>) -> Self {
        Self { codec, users }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Verify `token` and look up the principal it names.
    pub async fn resolve(&self, token: Option<&str>) -> Result<User, AuthError> {
        let token = token.ok_or(AuthError::Unauthenticated)?;
        let principal_id = self.codec.verify(token)?;

        match self.users.find(&principal_id).await? {
            Some(user) => Ok(user),
            None => {
                tracing::warn!("Token for unknown principal '{}' rejected", principal_id);
                Err(AuthError::PrincipalNotFound)
            }
        }
    }

    /// Check an email/password pair, refresh the login timestamp and issue a token.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AuthError> {
        let email = email.trim().to_string();
        let user = self
            .users
            .find_by(&|u: &User| u.has_email(&email))
            .await?
            .filter(|u| u.credential.verify(password))
            .ok_or_else(|| {
                tracing::warn!("Failed login attempt for '{}'", email);
                AuthError::InvalidCredentials
            })?;

        let now = Utc::now();
        let user = self
            .users
            .update(&user.id, Box::new(move |u: &mut User| u.last_login = Some(now)))
            .await?;

        let token = self.codec.issue(&user.id)?;
        tracing::info!("User '{}' logged in", user.id);
        Ok((user, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::fixtures::{self, FIXTURE_PASSWORD};
    use crate::database::MemoryRepository;
    use chrono::Duration;

    fn resolver() -> PrincipalResolver {
        let codec = TokenCodec::new("resolver-secret", Duration::days(7)).unwrap();
        PrincipalResolver::new(codec, Arc::new(MemoryRepository::with_records(fixtures::users())))
    }

    #[tokio::test]
    async fn login_round_trips_to_same_principal() {
        let resolver = resolver();
        for user in fixtures::users() {
            let (logged_in, token) = resolver.login(&user.email, FIXTURE_PASSWORD).await.unwrap();
            assert_eq!(logged_in.id, user.id);
            assert!(logged_in.last_login.is_some());
            assert_eq!(resolver.resolve(Some(&token)).await.unwrap().id, user.id);
        }
    }

    #[tokio::test]
    async fn login_matches_email_case_insensitively() {
        let (user, _) = resolver().login(" CUSTOMER@example.com ", FIXTURE_PASSWORD).await.unwrap();
        assert_eq!(user.id, "user-1");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let resolver = resolver();
        assert!(matches!(
            resolver.login("customer@example.com", "nope").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            resolver.login("ghost@example.com", FIXTURE_PASSWORD).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn missing_token_is_unauthenticated() {
        assert!(matches!(resolver().resolve(None).await, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn expired_and_forged_tokens_are_rejected() {
        let resolver = resolver();
        let expired = resolver
            .codec()
            .issue_at("user-1", Utc::now() - Duration::days(30))
            .unwrap();
        assert!(matches!(resolver.resolve(Some(&expired)).await, Err(AuthError::ExpiredToken)));
        assert!(matches!(resolver.resolve(Some("abc.def.ghi")).await, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn valid_token_for_vanished_principal_is_rejected() {
        let resolver = resolver();
        let token = resolver.codec().issue("user-from-previous-run").unwrap();
        assert!(matches!(resolver.resolve(Some(&token)).await, Err(AuthError::PrincipalNotFound)));
    }
}
