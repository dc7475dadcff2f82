use crate::models::server::{ModerationStatus, Server};

/// Filters the vote-ranked server list. An empty query and empty category
/// set returns the full list; a `None` status disables the status check.
///
/// Query matching is a case-insensitive substring match on name or short
/// description. Category matching requires every requested category to be
/// present on the server. Input order is preserved, so results stay in the
/// vote-descending order applied at load time.
pub fn search(
    servers: &[Server],
    query: &str,
    categories: &[String],
    status: Option<ModerationStatus>,
) -> Vec<Server> {
    let query = query.trim().to_lowercase();

    servers
        .iter()
        .filter(|server| {
            let matches_query = query.is_empty()
                || server.name.to_lowercase().contains(&query)
                || server.description.to_lowercase().contains(&query);

            let matches_categories = categories.is_empty()
                || categories
                    .iter()
                    .all(|category| server.categories.iter().any(|c| c == category));

            let matches_status = status.is_none_or(|wanted| server.status == wanted);

            matches_query && matches_categories && matches_status
        })
        .cloned()
        .collect()
}

/// Returns the 1-indexed page `[(page-1)*per_page, page*per_page)` of an
/// already sorted list. Pages past the end are empty; the last page may be
/// short. `per_page` must be non-zero (callers clamp query parameters).
pub fn paginate(servers: &[Server], page: usize, per_page: usize) -> &[Server] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= servers.len() {
        return &[];
    }
    let end = (start + per_page).min(servers.len());
    &servers[start..end]
}

pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page)
}
