use super::types::{Page, PageRequest, Pagination};

impl PageRequest {
    /// Resolve raw `page`/`limit` input. Non-positive or missing values fall back
    /// to page 1 and `default_limit`; limits above `max_limit` are capped.
    pub fn resolve(page: Option<i64>, limit: Option<i64>, default_limit: u32, max_limit: u32) -> Self {
        let max_limit = max_limit.max(1);
        let page = match page {
            Some(p) if p > 0 => u32::try_from(p).unwrap_or(u32::MAX),
            _ => 1,
        };
        let limit = match limit {
            Some(l) if l > 0 => u32::try_from(l).unwrap_or(u32::MAX),
            _ => default_limit.max(1),
        };
        if limit > max_limit {
            tracing::debug!("Limit {} exceeds max {}, capping to max", limit, max_limit);
        }
        Self {
            page,
            limit: limit.min(max_limit),
        }
    }

    pub fn from_config(page: Option<i64>, limit: Option<i64>) -> Self {
        let query = &crate::config::config().query;
        Self::resolve(page, limit, query.default_limit, query.max_limit)
    }
}

/// Slice `records` to the requested page. Out-of-range pages are empty, not errors.
pub fn paginate<T>(records: Vec<T>, request: PageRequest) -> Page<T> {
    let total = records.len();
    let size = (request.limit as usize).max(1);
    let start = (request.page as usize).saturating_sub(1).saturating_mul(size);
    let end = start.saturating_add(size);

    let items = records.into_iter().skip(start).take(size).collect();

    Page {
        items,
        pagination: Pagination {
            current_page: request.page,
            total_pages: total.div_ceil(size),
            total,
            has_next: end < total,
            has_prev: request.page > 1,
        },
    }
}
