use crate::commands::{view, ErrorCode, Page};
use crate::error::Result;
use crate::markup::Renderer;
use crate::store::DataStore;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

pub fn run<S: DataStore, R: Renderer>(store: &S, renderer: &R) -> Result<Page> {
    run_with_rng(store, renderer, &mut rand::thread_rng())
}

/// Views an entry picked uniformly from the whole store.
pub fn run_with_rng<S: DataStore, R: Renderer, G: Rng + ?Sized>(
    store: &S,
    renderer: &R,
    rng: &mut G,
) -> Result<Page> {
    let names = store.list_entries()?;
    let Some(name) = names.choose(rng) else {
        return Ok(Page::error(ErrorCode::EmptyStore));
    };
    debug!(name = %name, "random pick");
    view::run(store, renderer, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::MarkdownRenderer;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn only_ever_views_stored_entries() {
        let store = StoreFixture::new()
            .with_entry("A", "a")
            .with_entry("B", "b")
            .with_entry("C", "c")
            .store;
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            match run_with_rng(&store, &MarkdownRenderer, &mut rng).unwrap() {
                Page::Entry { name, content } => {
                    assert!(["A", "B", "C"].contains(&name.as_str()));
                    assert_eq!(content, MarkdownRenderer.render(&name.to_lowercase()));
                    seen.insert(name);
                }
                other => panic!("expected an entry, got {:?}", other),
            }
        }
        // 200 uniform draws over three names hit all of them
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn single_entry_always_chosen() {
        let store = StoreFixture::new().with_entry("Only", "# Only").store;
        let page = run(&store, &MarkdownRenderer).unwrap();
        assert_eq!(page, view::run(&store, &MarkdownRenderer, "Only").unwrap());
    }

    #[test]
    fn empty_store_is_empty_store_error() {
        let store = InMemoryStore::new();
        let page = run(&store, &MarkdownRenderer).unwrap();
        assert_eq!(page, Page::error(ErrorCode::EmptyStore));
    }
}
