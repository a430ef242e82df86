use chrono::{DateTime, Utc};

use crate::auth::{CredentialHash, Role};
use crate::database::repository::Record;
use crate::query::{Field, Queryable};

/// A principal. Deliberately not `Serialize`: responses go through
/// `api::format::PublicUser`, which has no credential field.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub credential: CredentialHash,
    pub role: Role,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub address: Option<String>,
    /// Vendor profile owned by a vendor-role principal.
    pub vendor_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Emails are unique and matched case-insensitively, non-ASCII letters included.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.trim().to_lowercase()
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Queryable for User {
    fn text(&self, field: Field) -> Vec<&str> {
        match field {
            Field::Name => vec![self.name.as_str()],
            Field::Email => vec![self.email.as_str()],
            Field::Role => vec![self.role.as_str()],
            _ => vec![],
        }
    }

    fn sort_name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use crate::database::fixtures;

    #[test]
    fn email_match_ignores_case_and_whitespace() {
        let user = fixtures::users().remove(0);
        assert!(user.has_email(" Customer@EXAMPLE.com "));
        assert!(!user.has_email("customer@example.org"));
    }

    #[test]
    fn email_match_folds_non_ascii_case() {
        let mut user = fixtures::users().remove(0);
        user.email = "Émile@x.com".to_string();
        assert!(user.has_email("émile@x.com"));
        assert!(user.has_email("ÉMILE@X.COM"));
    }
}
