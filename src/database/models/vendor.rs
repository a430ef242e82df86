use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::repository::Record;
use crate::query::{Field, Flag, Queryable};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub rating: Option<f64>,
    pub review_count: u32,
    pub verified: bool,
    pub featured: bool,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Record for Vendor {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Queryable for Vendor {
    fn text(&self, field: Field) -> Vec<&str> {
        match field {
            Field::Name => vec![self.name.as_str()],
            Field::Description => vec![self.description.as_str()],
            Field::Category => vec![self.category.as_str()],
            Field::Location => vec![self.location.as_str()],
            Field::Tags => self.tags.iter().map(String::as_str).collect(),
            _ => vec![],
        }
    }

    fn sort_name(&self) -> &str {
        &self.name
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::Verified => self.verified,
            Flag::Featured => self.featured,
            Flag::InStock => false,
        }
    }
}
