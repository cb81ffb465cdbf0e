use colored::Colorize;
use encyclopedia::commands::Page;
use encyclopedia::config::WikiConfig;
use encyclopedia::error::Result;
use std::path::Path;

const RULE: &str = "--------------------------------";

/// Renders a non-error page for the terminal.
pub(super) fn render_page(page: &Page) -> String {
    match page {
        Page::Index { entries } => render_name_list(entries, "No entries yet."),
        Page::Entry { name, content } => {
            format!("{}\n{}\n{}", name.bold(), RULE, content)
        }
        Page::SearchResults { query, results } => {
            let header = format!("Results for \"{}\":", query).dimmed();
            format!("{}\n{}", header, render_name_list(results, ""))
        }
        Page::NewEntryForm { form } | Page::EditForm { form, .. } => {
            let mut out = Vec::new();
            if let Page::EditForm { name, .. } = page {
                out.push(format!("Editing {}", name.bold()));
            }
            for field in &form.fields {
                out.push(format!(
                    "{} {}",
                    format!("{} (max {} chars):", field.label, field.max_length).dimmed(),
                    field.value
                ));
            }
            out.join("\n")
        }
        Page::Redirect { location } => {
            format!("{} {}", "Entry created:".green(), location)
        }
        Page::Exported { path, count } => format!(
            "{}",
            format!("Exported {} entries to {}", count, path.display()).green()
        ),
        Page::Error { code } => format!("{}", code.message().red()),
    }
}

fn render_name_list(names: &[String], empty: &str) -> String {
    if names.is_empty() {
        return empty.dimmed().to_string();
    }
    names.join("\n")
}

pub(super) fn render_json(page: &Page) -> Result<String> {
    Ok(serde_json::to_string_pretty(page)?)
}

pub(super) fn render_config(config: &WikiConfig, entries_dir: &Path) -> String {
    format!(
        "entries_dir = {}\nfile_ext = {}",
        entries_dir.display(),
        config.file_ext()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use encyclopedia::commands::ErrorCode;
    use encyclopedia::forms::Form;
    use encyclopedia::routes::Route;
    use std::path::PathBuf;

    fn plain(page: &Page) -> String {
        colored::control::set_override(false);
        render_page(page)
    }

    #[test]
    fn index_lists_names() {
        let page = Page::Index {
            entries: vec!["CSS".into(), "Git".into()],
        };
        assert_eq!(plain(&page), "CSS\nGit");
        assert_eq!(plain(&Page::Index { entries: vec![] }), "No entries yet.");
    }

    #[test]
    fn entry_shows_name_and_html() {
        let page = Page::Entry {
            name: "Python".into(),
            content: "<h1>Python</h1>".into(),
        };
        assert_eq!(plain(&page), format!("Python\n{}\n<h1>Python</h1>", RULE));
    }

    #[test]
    fn search_results_have_header() {
        let page = Page::SearchResults {
            query: "py".into(),
            results: vec!["Python".into()],
        };
        assert_eq!(plain(&page), "Results for \"py\":\nPython");
    }

    #[test]
    fn forms_show_fields() {
        let out = plain(&Page::NewEntryForm {
            form: Form::new_entry(),
        });
        assert!(out.contains("New Page Title (max 60 chars):"));
        assert!(out.contains("Markdown Content (max 5000 chars):"));

        let out = plain(&Page::EditForm {
            name: "Git".into(),
            form: Form::edit_entry("# Git"),
        });
        assert!(out.starts_with("Editing Git"));
        assert!(out.contains("# Git"));
    }

    #[test]
    fn redirect_and_export() {
        let out = plain(&Page::Redirect {
            location: Route::Entry("C++".into()),
        });
        assert_eq!(out, "Entry created: /wiki/C%2B%2B");

        let out = plain(&Page::Exported {
            path: PathBuf::from("wiki.tar.gz"),
            count: 3,
        });
        assert_eq!(out, "Exported 3 entries to wiki.tar.gz");
    }

    #[test]
    fn error_uses_message() {
        let out = plain(&Page::error(ErrorCode::Exist));
        assert_eq!(out, ErrorCode::Exist.message());
    }

    #[test]
    fn json_is_tagged() {
        let json = render_json(&Page::not_found()).unwrap();
        assert!(json.contains("\"kind\": \"error\""));
        assert!(json.contains("\"code\": \"not_found\""));
    }
}
