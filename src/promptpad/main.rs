use clap::Parser;
use directories::ProjectDirs;
use promptpad::app::{App, Command, Dispatched};
use promptpad::clipboard::SystemClipboard;
use promptpad::config::AppConfig;
use promptpad::error::{PromptError, Result};
use promptpad::index::{display_index, PromptSelector};
use promptpad::model::Prompt;
use promptpad::render::{ListAction, ListRenderer};
use promptpad::repository::SaveOutcome;
use promptpad::store::fs::FileStore;
use promptpad::store::PromptStore;
use promptpad::surface::{BufferSurface, Field, Surface};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_info, print_list, print_message, print_prompt, MessageLevel};

type CliApp = App<FileStore, BufferSurface, SystemClipboard>;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct AppContext {
    app: CliApp,
    data_dir: PathBuf,
    config: AppConfig,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search, html }) => handle_list(&mut ctx, search, html),
        Some(Commands::Show { prompt }) => handle_show(&mut ctx, &prompt),
        Some(Commands::Create { title, content }) => handle_create(&mut ctx, &title, &content),
        Some(Commands::Edit {
            prompt,
            title,
            content,
        }) => handle_edit(&mut ctx, &prompt, title, content),
        Some(Commands::Remove { prompt }) => handle_remove(&mut ctx, &prompt),
        Some(Commands::Copy { prompt }) => handle_copy(&mut ctx, &prompt),
        Some(Commands::Info) => handle_info(&ctx),
        None => handle_list(&mut ctx, None, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "promptpad", "promptpad")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| PromptError::Api("Could not determine data dir".to_string()))?,
    };

    let config = AppConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        AppConfig::default()
    });
    tracing::info!(data_dir = %data_dir.display(), key = %config.storage_key, "opening store");

    let store = PromptStore::with_key(FileStore::new(data_dir.clone()), &config.storage_key);
    let app = App::start(
        store,
        BufferSurface::new(),
        SystemClipboard,
        ListRenderer::new(config.preview_chars),
    );

    Ok(AppContext {
        app,
        data_dir,
        config,
    })
}

fn resolve(ctx: &AppContext, selector: &str) -> Result<(usize, Prompt)> {
    let selector: PromptSelector = selector.parse()?;
    let prompts = ctx.app.repository().prompts();
    let prompt = selector.resolve(prompts)?;
    let index = display_index(prompts, &prompt.id).unwrap_or(0);
    Ok((index, prompt.clone()))
}

fn handle_list(ctx: &mut AppContext, search: Option<String>, html: bool) -> Result<()> {
    if let Some(term) = search {
        ctx.app.dispatch(Command::Search(term))?;
    }

    let view = &ctx.app.surface().list;
    if html {
        print!("{}", view.to_html()?);
    } else {
        print_list(view, ctx.app.repository().prompts());
    }
    Ok(())
}

fn handle_show(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let (index, prompt) = resolve(ctx, selector)?;
    ctx.app.dispatch(Command::List(ListAction::Select, prompt.id.clone()))?;

    let surface = ctx.app.surface();
    print_prompt(
        index,
        &surface.plain_text(Field::Title),
        &promptpad::markup::inner_text(&surface.markup(Field::Content)),
    );
    Ok(())
}

fn handle_create(ctx: &mut AppContext, title: &str, content: &str) -> Result<()> {
    ctx.app.dispatch(Command::New)?;
    fill_editor(&mut ctx.app, Some(title), Some(content))?;

    if let Dispatched::Saved(outcome) = ctx.app.dispatch(Command::Save)? {
        report_saved(ctx, &outcome);
    }
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    selector: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    if title.is_none() && content.is_none() {
        return Err(PromptError::Api(
            "Nothing to change: pass --title and/or --content".to_string(),
        ));
    }

    let (_, prompt) = resolve(ctx, selector)?;
    ctx.app.dispatch(Command::List(ListAction::Select, prompt.id))?;
    fill_editor(&mut ctx.app, title.as_deref(), content.as_deref())?;

    if let Dispatched::Saved(outcome) = ctx.app.dispatch(Command::Save)? {
        report_saved(ctx, &outcome);
    }
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let (index, prompt) = resolve(ctx, selector)?;
    if let Dispatched::Removed(Some(removed)) = ctx
        .app
        .dispatch(Command::List(ListAction::Remove, prompt.id))?
    {
        print_message(
            MessageLevel::Success,
            &format!("Prompt removed ({}): {}", index, removed.title),
        );
    }
    Ok(())
}

fn handle_copy(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let (index, prompt) = resolve(ctx, selector)?;
    ctx.app.dispatch(Command::List(ListAction::Select, prompt.id))?;

    match ctx.app.dispatch(Command::Copy)? {
        Dispatched::Copied(true) => print_message(
            MessageLevel::Success,
            &format!("Prompt copied to clipboard ({}): {}", index, prompt.title),
        ),
        _ => print_message(
            MessageLevel::Warning,
            "Could not copy to clipboard (run with --verbose for details)",
        ),
    }
    Ok(())
}

fn handle_info(ctx: &AppContext) -> Result<()> {
    let store = ctx.app.repository().store();
    let discarded = match store.try_load() {
        Ok(report) => report.discarded,
        Err(e) => {
            print_message(MessageLevel::Error, &format!("Store unreadable: {}", e));
            0
        }
    };
    let path = store.backend().item_path(store.key())?;
    print_info(
        &ctx.data_dir,
        &path,
        &ctx.config.storage_key,
        ctx.app.repository().len(),
        discarded,
    );
    Ok(())
}

/// Types into the editor fields the way a user would, leaving `None` fields as loaded.
fn fill_editor(app: &mut CliApp, title: Option<&str>, content: Option<&str>) -> Result<()> {
    if let Some(title) = title {
        app.surface_mut().set_plain_text(Field::Title, title);
        app.dispatch(Command::Input(Field::Title))?;
    }
    if let Some(content) = content {
        app.surface_mut().set_markup(Field::Content, content);
        app.dispatch(Command::Input(Field::Content))?;
    }
    Ok(())
}

fn report_saved(ctx: &AppContext, outcome: &SaveOutcome) {
    let prompts = ctx.app.repository().prompts();
    let index = display_index(prompts, outcome.id()).unwrap_or(0);
    let title = ctx
        .app
        .repository()
        .find_by_id(outcome.id())
        .map(|p| p.title.as_str())
        .unwrap_or_default();

    let verb = match outcome {
        SaveOutcome::Created(_) => "created",
        SaveOutcome::Updated(_) => "updated",
    };
    print_message(
        MessageLevel::Success,
        &format!("Prompt {} ({}): {}", verb, index, title),
    );
}
