use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use super::error::QueryError;
use super::filter::Filter;
use super::filter_order::FilterOrder;
use super::types::PageRequest;

/// Raw query-string parameters shared by every list endpoint.
///
/// Values stay as strings until `page_request`/the typed accessors parse them,
/// so malformed numbers surface as `QueryError` rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "q")]
    pub search: Option<String>,
    pub featured: Option<String>,
    pub verified: Option<String>,
    pub in_stock: Option<String>,
    pub location: Option<String>,
    pub vendor: Option<String>,
    pub role: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort_by: Option<String>,
}

impl ListQuery {
    /// Start a filter with this query's page request and sort key.
    pub fn filter(&self) -> Result<Filter, QueryError> {
        let mut filter = Filter::new(self.page_request()?);
        filter.order(FilterOrder::parse(self.sort_by.as_deref()));
        Ok(filter)
    }

    pub fn page_request(&self) -> Result<PageRequest, QueryError> {
        let page = parse_number::<i64>("page", self.page.as_deref())?;
        let limit = parse_number::<i64>("limit", self.limit.as_deref())?;
        Ok(PageRequest::from_config(page, limit))
    }

    pub fn min_price(&self) -> Result<Option<Decimal>, QueryError> {
        parse_number("minPrice", self.min_price.as_deref())
    }

    pub fn max_price(&self) -> Result<Option<Decimal>, QueryError> {
        parse_number("maxPrice", self.max_price.as_deref())
    }

    pub fn featured(&self) -> Result<Option<bool>, QueryError> {
        parse_bool("featured", self.featured.as_deref())
    }

    pub fn verified(&self) -> Result<Option<bool>, QueryError> {
        parse_bool("verified", self.verified.as_deref())
    }

    pub fn in_stock(&self) -> Result<Option<bool>, QueryError> {
        parse_bool("inStock", self.in_stock.as_deref())
    }
}

fn parse_number<N: FromStr>(param: &'static str, raw: Option<&str>) -> Result<Option<N>, QueryError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| QueryError::InvalidNumber { param, value: value.to_string() }),
    }
}

fn parse_bool(param: &'static str, raw: Option<&str>) -> Result<Option<bool>, QueryError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") => Ok(None),
        Some("true") | Some("1") | Some("yes") => Ok(Some(true)),
        Some("false") | Some("0") | Some("no") => Ok(Some(false)),
        Some(other) => Err(QueryError::InvalidBoolean { param, value: other.to_string() }),
    }
}
