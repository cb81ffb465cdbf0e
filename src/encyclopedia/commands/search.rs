use crate::commands::{view, Page};
use crate::error::Result;
use crate::markup::Renderer;
use crate::store::DataStore;
use tracing::debug;

/// Searches entry names.
///
/// A query naming an entry exactly (case-sensitive) shows that entry.
/// Otherwise every name containing the query, ignoring case, is listed in
/// store order. No query, or no match, is `not_found`.
pub fn run<S: DataStore, R: Renderer>(
    store: &S,
    renderer: &R,
    query: Option<&str>,
) -> Result<Page> {
    let query = match query {
        Some(q) if !q.is_empty() => q,
        _ => {
            debug!("search without a query");
            return Ok(Page::not_found());
        }
    };

    if store.get_entry(query)?.is_some() {
        return view::run(store, renderer, query);
    }

    let needle = query.to_lowercase();
    let results: Vec<String> = store
        .list_entries()?
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect();

    debug!(query, hits = results.len(), "search");
    if results.is_empty() {
        return Ok(Page::not_found());
    }

    Ok(Page::SearchResults {
        query: query.to_string(),
        results,
    })
}
