//! Draining paged data sources.

use std::collections::HashSet;

use thiserror::Error;

/// One page of results from a [`DataProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Token for the next page. `None` or empty means this was the last page.
    pub next_token: Option<String>,
}

/// A source that returns items one page at a time.
pub trait DataProvider<T> {
    type Error: std::error::Error + 'static;

    /// Fetches the page identified by `token`; `None` requests the first page.
    fn fetch(&self, token: Option<&str>) -> Result<Page<T>, Self::Error>;
}

/// Errors raised while draining a provider.
#[derive(Debug, Error)]
pub enum PagingError<E: std::error::Error + 'static> {
    /// The provider failed to return a page.
    #[error("failed to fetch page")]
    Provider(#[source] E),

    /// The provider handed out a token it had already returned.
    #[error("page token {token} was returned twice")]
    TokenCycle { token: String },
}

/// Fetches every page from `provider` and concatenates their items in order.
pub fn fetch_all<T, P>(provider: &P) -> Result<Vec<T>, PagingError<P::Error>>
where
    P: DataProvider<T> + ?Sized,
{
    let mut items = Vec::new();
    let mut seen_tokens = HashSet::new();
    let mut token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = provider
            .fetch(token.as_deref())
            .map_err(PagingError::Provider)?;
        pages += 1;
        items.extend(page.items);

        match page.next_token.filter(|t| !t.is_empty()) {
            Some(next) => {
                if !seen_tokens.insert(next.clone()) {
                    return Err(PagingError::TokenCycle { token: next });
                }
                token = Some(next);
            }
            None => break,
        }
    }

    tracing::debug!(pages, items = items.len(), "fetched all pages");
    Ok(items)
}
