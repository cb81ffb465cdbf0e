use crate::commands::Page;
use crate::error::Result;
use crate::markup::Renderer;
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore, R: Renderer>(store: &S, renderer: &R, name: &str) -> Result<Page> {
    match store.get_entry(name)? {
        Some(markup) => Ok(Page::Entry {
            name: name.to_string(),
            content: renderer.render(&markup),
        }),
        None => {
            debug!(name, "view: no such entry");
            Ok(Page::not_found())
        }
    }
}
