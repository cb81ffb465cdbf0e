use crate::commands::{ErrorCode, Page};
use crate::error::{Result, WikiError};
use crate::model::Entry;
use crate::store::DataStore;
use flate2::write::GzEncoder;
use flate2::Compression;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use pulldown_cmark_to_cmark::cmark;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Output format, picked from the destination's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// `.tar.gz` with one `<name>.md` file per entry.
    Archive,
    /// One Markdown document holding every entry.
    Markdown,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Self {
        let lower = path.to_string_lossy().to_lowercase();
        if lower.ends_with(".md") || lower.ends_with(".markdown") {
            ExportFormat::Markdown
        } else {
            ExportFormat::Archive
        }
    }
}

pub fn run<S: DataStore>(store: &S, output: &Path, format: ExportFormat) -> Result<Page> {
    let entries = load_entries(store)?;
    if entries.is_empty() {
        return Ok(Page::error(ErrorCode::EmptyStore));
    }

    match format {
        ExportFormat::Archive => {
            let file = File::create(output).map_err(WikiError::Io)?;
            write_archive(file, &entries)?;
        }
        ExportFormat::Markdown => {
            let doc = merge_as_markdown(&entries)?;
            std::fs::write(output, doc).map_err(WikiError::Io)?;
        }
    }

    info!(path = %output.display(), count = entries.len(), ?format, "exported entries");
    Ok(Page::Exported {
        path: output.to_path_buf(),
        count: entries.len(),
    })
}

fn load_entries<S: DataStore>(store: &S) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for name in store.list_entries()? {
        // Listed then vanished: another writer got there first
        if let Some(content) = store.get_entry(&name)? {
            entries.push(Entry { name, content });
        }
    }
    Ok(entries)
}

fn write_archive<W: Write>(writer: W, entries: &[Entry]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for entry in entries {
        let path = format!("entries/{}.md", entry.name);

        let mut header = tar::Header::new_gnu();
        header.set_size(entry.content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, path, entry.content.as_bytes())
            .map_err(WikiError::Io)?;
    }

    tar.into_inner()
        .and_then(|enc| enc.finish())
        .map_err(WikiError::Io)?;
    Ok(())
}

/// Merge entries into one document: entry names become H2, their own
/// headings move down two levels.
fn merge_as_markdown(entries: &[Entry]) -> Result<String> {
    let mut output = String::from("# Encyclopedia\n\n");

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            output.push_str("\n\n---\n\n");
        }
        output.push_str("## ");
        output.push_str(&entry.name);
        output.push_str("\n\n");
        output.push_str(&bump_markdown_headers(entry.content.trim())?);
    }
    output.push('\n');

    Ok(output)
}

/// Bump all markdown header levels by 2 (H1->H3, H2->H4, etc., H6 stays H6).
pub fn bump_markdown_headers(content: &str) -> Result<String> {
    let parser = Parser::new_ext(content, Options::all());

    let events: Vec<Event> = parser
        .map(|event| match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => Event::Start(Tag::Heading {
                level: bump_heading_level(level),
                id,
                classes,
                attrs,
            }),
            Event::End(TagEnd::Heading(level)) => {
                Event::End(TagEnd::Heading(bump_heading_level(level)))
            }
            other => other,
        })
        .collect();

    let mut output = String::new();
    cmark(events.iter(), &mut output)
        .map_err(|e| WikiError::Store(format!("Failed to write markdown: {}", e)))?;
    Ok(output)
}

fn bump_heading_level(level: HeadingLevel) -> HeadingLevel {
    match level {
        HeadingLevel::H1 => HeadingLevel::H3,
        HeadingLevel::H2 => HeadingLevel::H4,
        HeadingLevel::H3 => HeadingLevel::H5,
        HeadingLevel::H4 | HeadingLevel::H5 | HeadingLevel::H6 => HeadingLevel::H6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("wiki.md")),
            ExportFormat::Markdown
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("WIKI.Markdown")),
            ExportFormat::Markdown
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("wiki.tar.gz")),
            ExportFormat::Archive
        );
    }

    #[test]
    fn archive_holds_every_entry() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("wiki.tar.gz");
        let store = StoreFixture::new()
            .with_entry("Git", "# Git")
            .with_entry("CSS", "# CSS")
            .store;

        let page = run(&store, &out, ExportFormat::Archive).unwrap();
        assert_eq!(
            page,
            Page::Exported {
                path: out.clone(),
                count: 2
            }
        );

        let mut archive = tar::Archive::new(GzDecoder::new(File::open(&out).unwrap()));
        let mut found = Vec::new();
        for file in archive.entries().unwrap() {
            let mut file = file.unwrap();
            let path = file.path().unwrap().to_string_lossy().to_string();
            let mut body = String::new();
            file.read_to_string(&mut body).unwrap();
            found.push((path, body));
        }
        assert_eq!(
            found,
            vec![
                ("entries/CSS.md".to_string(), "# CSS".to_string()),
                ("entries/Git.md".to_string(), "# Git".to_string()),
            ]
        );
    }

    #[test]
    fn markdown_export_bumps_headings() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("wiki.md");
        let store = StoreFixture::new()
            .with_entry("Python", "# Python\n\nA language.")
            .store;

        run(&store, &out, ExportFormat::Markdown).unwrap();
        let doc = std::fs::read_to_string(&out).unwrap();

        assert!(doc.starts_with("# Encyclopedia\n\n## Python\n\n"));
        assert!(doc.contains("### Python"));
        assert!(doc.contains("A language."));
    }

    #[test]
    fn deep_headings_cap_at_h6() {
        let bumped = bump_markdown_headers("##### Deep").unwrap();
        assert!(bumped.starts_with("###### Deep"));
    }

    #[test]
    fn empty_store_exports_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("wiki.tar.gz");
        let store = InMemoryStore::new();

        let page = run(&store, &out, ExportFormat::Archive).unwrap();
        assert_eq!(page, Page::error(ErrorCode::EmptyStore));
        assert!(!out.exists());
    }
}
