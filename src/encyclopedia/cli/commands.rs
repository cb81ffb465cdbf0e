use super::render::{render_config, render_json, render_page};
use super::setup::{Cli, Commands};
use super::tracing_setup::init_tracing;
use clap::Parser;
use encyclopedia::api::{ExportFormat, WikiApi};
use encyclopedia::commands::Page;
use encyclopedia::config::WikiConfig;
use encyclopedia::editor::edit_text;
use encyclopedia::error::{Result, WikiError};
use encyclopedia::forms::{EditEntryInput, NewEntryInput};
use encyclopedia::store::fs::FileStore;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: WikiApi<FileStore>,
    config: WikiConfig,
    entries_dir: PathBuf,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::List) => {
            let page = ctx.api.list()?;
            emit(&ctx, &page)
        }
        Some(Commands::View { name }) => {
            let page = ctx.api.view(&name)?;
            emit(&ctx, &page)
        }
        Some(Commands::Search { query }) => {
            let query = query.join(" ");
            let page = ctx.api.search(Some(query.as_str()))?;
            emit(&ctx, &page)
        }
        Some(Commands::Add {
            title,
            content,
            no_editor,
        }) => handle_add(&mut ctx, title, content, no_editor),
        Some(Commands::Edit {
            name,
            content,
            no_editor,
        }) => handle_edit(&mut ctx, name, content, no_editor),
        Some(Commands::Random) => {
            let page = ctx.api.random()?;
            emit(&ctx, &page)
        }
        Some(Commands::Export { path }) => {
            let format = ExportFormat::from_path(&path);
            let page = ctx.api.export(&path, format)?;
            emit(&ctx, &page)
        }
        Some(Commands::Config) => handle_config(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().map_err(WikiError::Io)?;
    let config = WikiConfig::load(&cwd)?;

    let entries_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => config.entries_dir_in(&cwd),
    };
    debug!(dir = %entries_dir.display(), "using entries dir");

    let store = FileStore::new(entries_dir.clone()).with_file_ext(&config.file_ext());
    Ok(AppContext {
        api: WikiApi::new(store),
        config,
        entries_dir,
        json: cli.json,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    title: Vec<String>,
    content: Option<String>,
    no_editor: bool,
) -> Result<()> {
    if title.is_empty() {
        let page = ctx.api.add(None)?;
        return emit(ctx, &page);
    }

    let file_ext = ctx.config.file_ext();
    let content = match gather_content(content, no_editor)? {
        Some(text) => text,
        None if no_editor => String::new(),
        None => edit_text("", &file_ext)?,
    };

    let input = NewEntryInput::new(title.join(" "), content);
    let page = ctx.api.add(Some(&input))?;
    emit(ctx, &page)?;

    // The blank form coming back means the submission was rejected
    if matches!(page, Page::NewEntryForm { .. }) {
        return Err(WikiError::Api(
            "Entry not created: title must be 1-60 characters and content 1-5000 characters"
                .to_string(),
        ));
    }
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    name: String,
    content: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let content = match gather_content(content, no_editor)? {
        Some(text) => text,
        None => {
            let page = ctx.api.edit(&name, None)?;
            let current = match &page {
                Page::EditForm { form, .. } if !no_editor => form.value("content").map(String::from),
                _ => None,
            };
            match current {
                Some(current) => edit_text(&current, &ctx.config.file_ext())?,
                None => return emit(ctx, &page),
            }
        }
    };

    let page = ctx.api.edit(&name, Some(&EditEntryInput::new(content)))?;
    emit(ctx, &page)
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    if ctx.json {
        let mut config = ctx.config.clone();
        config.entries_dir = ctx.entries_dir.clone();
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", render_config(&ctx.config, &ctx.entries_dir));
    }
    Ok(())
}

/// Content from `--content` or piped stdin, if either was given.
fn gather_content(content: Option<String>, no_editor: bool) -> Result<Option<String>> {
    if content.is_some() {
        return Ok(content);
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer).map_err(WikiError::Io)?;
    if buffer.is_empty() && !no_editor {
        return Ok(None);
    }
    Ok(Some(buffer))
}

/// Prints a page; error pages also fail the command.
fn emit(ctx: &AppContext, page: &Page) -> Result<()> {
    if ctx.json {
        println!("{}", render_json(page)?);
    } else if !page.is_error() {
        println!("{}", render_page(page));
    }

    match page.error_code() {
        Some(code) => Err(WikiError::Api(format!("{} ({})", code.message(), code))),
        None => Ok(()),
    }
}
