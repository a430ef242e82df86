use rust_decimal::Decimal;

use super::filter_order::FilterOrder;
use super::paginate::paginate;
use super::types::{Field, Flag, Page, PageRequest, Predicate, Queryable, SortKey};

/// Conjunctive filter, sort key and page request for one listing.
#[derive(Debug, Clone)]
pub struct Filter {
    predicates: Vec<Predicate>,
    sort: SortKey,
    page: PageRequest,
}

impl Filter {
    pub fn new(page: PageRequest) -> Self {
        Self {
            predicates: vec![],
            sort: SortKey::default(),
            page,
        }
    }

    /// Exact match on `field`. Empty values are ignored.
    pub fn where_eq(&mut self, field: Field, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.predicates.push(Predicate::Equals { field, value: value.to_string() });
        }
        self
    }

    /// Case-insensitive substring match over any of `fields`. Empty needles are ignored.
    pub fn where_contains(&mut self, fields: &[Field], needle: Option<&str>) -> &mut Self {
        if let Some(needle) = needle.map(str::trim).filter(|n| !n.is_empty()) {
            self.predicates.push(Predicate::Contains {
                fields: fields.to_vec(),
                needle: needle.to_lowercase(),
            });
        }
        self
    }

    pub fn where_price(&mut self, min: Option<Decimal>, max: Option<Decimal>) -> &mut Self {
        if min.is_some() || max.is_some() {
            self.predicates.push(Predicate::PriceRange { min, max });
        }
        self
    }

    pub fn where_flag(&mut self, flag: Flag, value: Option<bool>) -> &mut Self {
        if let Some(value) = value {
            self.predicates.push(Predicate::Flag { flag, value });
        }
        self
    }

    pub fn order(&mut self, sort: SortKey) -> &mut Self {
        self.sort = sort;
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn matches<T: Queryable>(&self, record: &T) -> bool {
        self.predicates.iter().all(|p| Self::test(p, record))
    }

    /// Filter, stably sort and page `records`.
    pub fn apply<T: Queryable>(&self, records: Vec<T>) -> Page<T> {
        let before = records.len();
        let mut matched: Vec<T> = records.into_iter().filter(|r| self.matches(r)).collect();
        FilterOrder::sort(self.sort, &mut matched);

        if crate::config::CONFIG.query.debug_logging {
            tracing::debug!(
                "Query narrowed {} records to {} ({} predicates, sort {:?}, page {} x {})",
                before,
                matched.len(),
                self.predicates.len(),
                self.sort,
                self.page.page,
                self.page.limit
            );
        }

        paginate(matched, self.page)
    }

    fn test<T: Queryable>(predicate: &Predicate, record: &T) -> bool {
        match predicate {
            Predicate::Equals { field, value } => record.text(*field).iter().any(|v| v == value),
            Predicate::Contains { fields, needle } => fields
                .iter()
                .flat_map(|f| record.text(*f))
                .any(|v| v.to_lowercase().contains(needle.as_str())),
            Predicate::PriceRange { min, max } => match record.price() {
                Some(price) => min.map_or(true, |m| price >= m) && max.map_or(true, |m| price <= m),
                None => false,
            },
            Predicate::Flag { flag, value } => record.flag(*flag) == *value,
        }
    }
}
