use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wiki", bin_name = "wiki", version)]
#[command(about = "A small file-backed encyclopedia of Markdown entries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Entries directory (overrides wiki.toml and WIKI_ENTRIES_DIR)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Print pages as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all entries
    #[command(alias = "ls")]
    List,

    /// Show an entry rendered to HTML
    #[command(alias = "v")]
    View {
        /// Exact, case-sensitive entry name
        name: String,
    },

    /// Search entry names (an exact name shows the entry)
    #[command(alias = "s")]
    Search {
        /// Words of the query, joined with spaces
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },

    /// Create a new entry
    #[command(alias = "n")]
    Add {
        /// Title of the new entry (omit to show the form)
        #[arg(num_args = 0..)]
        title: Vec<String>,

        /// Markdown content (otherwise read from stdin or $EDITOR)
        #[arg(short, long)]
        content: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Replace the content of an existing entry
    #[command(alias = "e")]
    Edit {
        /// Exact, case-sensitive entry name
        name: String,

        /// New Markdown content (otherwise read from stdin or $EDITOR)
        #[arg(short, long)]
        content: Option<String>,

        /// Show the current content instead of opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Show a random entry
    Random,

    /// Export every entry (.md/.markdown: one document, otherwise .tar.gz)
    Export {
        /// Output file
        path: PathBuf,
    },

    /// Show the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_words() {
        let cli = Cli::try_parse_from(["wiki", "search", "web", "framework"]).unwrap();
        match cli.command {
            Some(Commands::Search { query }) => assert_eq!(query, vec!["web", "framework"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_add_with_content() {
        let cli = Cli::try_parse_from(["wiki", "n", "Rust", "Lang", "-c", "# Rust"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                title,
                content,
                no_editor,
            }) => {
                assert_eq!(title, vec!["Rust", "Lang"]);
                assert_eq!(content.as_deref(), Some("# Rust"));
                assert!(!no_editor);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn global_flags_anywhere() {
        let cli = Cli::try_parse_from(["wiki", "view", "Git", "--json", "--dir", "/tmp/w"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/w")));
    }

    #[test]
    fn edit_requires_name() {
        assert!(Cli::try_parse_from(["wiki", "edit"]).is_err());
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::try_parse_from(["wiki"]).unwrap();
        assert!(cli.command.is_none());
    }
}
