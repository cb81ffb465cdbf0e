use crate::commands::{ErrorCode, Page};
use crate::error::Result;
use crate::forms::{validate_new_entry, Form, NewEntryInput};
use crate::routes::Route;
use crate::store::DataStore;
use tracing::{debug, info};

/// Creates a new entry.
///
/// Without a submission this just hands back the blank form. An invalid
/// submission gets the same blank form: field errors are dropped and the
/// submitted values are not echoed back. Taken names are refused with
/// `exist`; success redirects to the new entry.
pub fn run<S: DataStore>(store: &mut S, submission: Option<&NewEntryInput>) -> Result<Page> {
    let Some(input) = submission else {
        return Ok(blank_form());
    };

    let entry = match validate_new_entry(input) {
        Ok(entry) => entry,
        Err(errors) => {
            debug!(%errors, "add: invalid submission, showing blank form");
            return Ok(blank_form());
        }
    };

    if store.get_entry(&entry.title)?.is_some() {
        info!(title = %entry.title, "add: title already taken");
        return Ok(Page::error(ErrorCode::Exist));
    }

    store.save_entry(&entry.title, &entry.content)?;
    Ok(Page::Redirect {
        location: Route::Entry(entry.title),
    })
}

fn blank_form() -> Page {
    Page::NewEntryForm {
        form: Form::new_entry(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WikiError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_fresh_entry_and_redirects() {
        let mut store = InMemoryStore::new();
        let input = NewEntryInput::new("Rust", "# Rust\nSystems language.");
        let page = run(&mut store, Some(&input)).unwrap();

        assert_eq!(
            page,
            Page::Redirect {
                location: Route::Entry("Rust".into())
            }
        );
        assert_eq!(
            store.get_entry("Rust").unwrap().as_deref(),
            Some("# Rust\nSystems language.")
        );
    }

    #[test]
    fn existing_title_is_refused_and_untouched() {
        let mut store = StoreFixture::new()
            .with_entry("Python", "# Python\nA language.")
            .store;
        let input = NewEntryInput::new("Python", "x");

        let page = run(&mut store, Some(&input)).unwrap();
        assert_eq!(page, Page::error(ErrorCode::Exist));
        assert_eq!(
            store.get_entry("Python").unwrap().as_deref(),
            Some("# Python\nA language.")
        );
        assert_eq!(store.list_entries().unwrap(), vec!["Python"]);
    }

    #[test]
    fn title_clash_checked_after_trimming() {
        let mut store = StoreFixture::new().with_entry("Git", "old").store;
        let input = NewEntryInput::new("  Git  ", "new");
        assert_eq!(
            run(&mut store, Some(&input)).unwrap(),
            Page::error(ErrorCode::Exist)
        );
        assert_eq!(store.get_entry("Git").unwrap().as_deref(), Some("old"));
    }

    #[test]
    fn no_submission_shows_blank_form() {
        let mut store = InMemoryStore::new();
        let page = run(&mut store, None).unwrap();
        assert_eq!(
            page,
            Page::NewEntryForm {
                form: Form::new_entry()
            }
        );
    }

    #[test]
    fn invalid_submission_falls_back_to_blank_form() {
        let mut store = InMemoryStore::new();
        let input = NewEntryInput::new("Has Title", "");
        let page = run(&mut store, Some(&input)).unwrap();

        match page {
            Page::NewEntryForm { form } => {
                // Not re-populated with what was submitted
                assert_eq!(form.value("title"), Some(""));
            }
            other => panic!("expected blank form, got {:?}", other),
        }
        assert!(store.list_entries().unwrap().is_empty());
    }

    #[test]
    fn save_failure_propagates() {
        let mut store = StoreFixture::new().failing_writes().store;
        let input = NewEntryInput::new("Rust", "x");
        assert!(matches!(
            run(&mut store, Some(&input)),
            Err(WikiError::Store(_))
        ));
    }
}
