use crate::commands::Page;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<Page> {
    let entries = store.list_entries()?;
    Ok(Page::Index { entries })
}
