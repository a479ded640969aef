use std::future::Future;

use super::types::ApiError;

/// Largest page the list endpoints hand out.
pub const PAGE_LIMIT: usize = 100;

/// Calls `fetch` with the running offset until a page comes back shorter
/// than [`PAGE_LIMIT`], and returns every item in order.
pub async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>, ApiError>>,
{
    let mut items = Vec::new();
    loop {
        let page = fetch(items.len()).await?;
        let last = page.len() < PAGE_LIMIT;
        items.extend(page);
        if last {
            return Ok(items);
        }
    }
}
