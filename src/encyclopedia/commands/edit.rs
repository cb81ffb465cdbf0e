use crate::commands::{ErrorCode, Page};
use crate::error::Result;
use crate::forms::{validate_edit, EditEntryInput, Form};
use crate::markup::Renderer;
use crate::store::DataStore;
use tracing::{debug, warn};

/// Edits an existing entry.
///
/// Without a submission, returns the edit form pre-filled with the current
/// markup. With one, the content is validated (`error` if invalid), the
/// entry must already exist (`not_found` otherwise; edit never creates), and
/// the saved entry is returned rendered. A failed save becomes `error`
/// instead of propagating.
pub fn run<S: DataStore, R: Renderer>(
    store: &mut S,
    renderer: &R,
    name: &str,
    submission: Option<&EditEntryInput>,
) -> Result<Page> {
    let Some(input) = submission else {
        return Ok(match store.get_entry(name)? {
            Some(current) => Page::EditForm {
                name: name.to_string(),
                form: Form::edit_entry(current),
            },
            None => Page::not_found(),
        });
    };

    let content = match validate_edit(input) {
        Ok(content) => content,
        Err(errors) => {
            debug!(name, %errors, "edit: invalid submission");
            return Ok(Page::error(ErrorCode::Error));
        }
    };

    if store.get_entry(name)?.is_none() {
        debug!(name, "edit: no such entry");
        return Ok(Page::not_found());
    }

    if let Err(e) = store.save_entry(name, &content) {
        warn!(name, error = %e, "edit: save failed");
        return Ok(Page::error(ErrorCode::Error));
    }

    Ok(Page::Entry {
        name: name.to_string(),
        content: renderer.render(&content),
    })
}
