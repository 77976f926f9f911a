//! # CLI Layer
//!
//! This module is **one possible UI client** for cards. It is the only place that
//! knows about stdout, stderr and argument parsing.
//!
//! - `run()`: parses arguments, opens the database and dispatches (called by `main.rs`)
//! - `handle_*()`: per-command handlers that call the API and format output
//!
//! Mutating commands are quiet, as scripts expect. Success and no-op notices only
//! show up with `--verbose`; warnings are always printed.

use super::render::{print_messages, render_card_table};
use super::setup::{Cli, Commands, ListArgs};
use cards::api::{CardFilter, CardsApi, CmdMessage, MessageLevel};
use cards::config::{CardsConfig, TableFormat};
use cards::error::Result;
use cards::init::initialize;
use cards::logging::{default_log_level, init_logging};
use cards::model::{CardPatch, CardState, NewCard};
use cards::store::fs::FileStore;
use clap::Parser;
use log::{debug, warn};

struct AppContext {
    api: CardsApi<FileStore>,
    table_format: TableFormat,
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if let Err(e) = init_logging(default_log_level(cli.verbose)) {
        eprintln!("Warning: {}", e);
    }

    if let Some(Commands::Version) = cli.command {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = CardsConfig::from_env()?;
    debug!(
        "event=cli_start module=cli status=ok db_dir={} table_format={}",
        config.db_dir.display(),
        config.table_format
    );
    let ctx = initialize(config)?;
    let mut app = AppContext {
        api: ctx.api,
        table_format: ctx.config.table_format,
        verbose: cli.verbose,
    };

    let outcome = match cli.command {
        Some(Commands::Add { summary, owner }) => handle_add(&mut app, summary, owner),
        Some(Commands::Delete { card_id }) => handle_delete(&mut app, card_id),
        Some(Commands::List(args)) => handle_list(&app, args),
        Some(Commands::Update {
            card_id,
            owner,
            summary,
            state,
        }) => handle_update(&mut app, card_id, owner, summary, state),
        Some(Commands::Path) => handle_path(&app),
        Some(Commands::Count) => handle_count(&app),
        Some(Commands::Version) => Ok(()),
        None => handle_list(&app, ListArgs::default()),
    };

    let closed = app.api.close();
    if let Err(e) = &closed {
        warn!("event=store_close module=cli status=error error={}", e);
    }
    outcome.and(closed)
}

fn handle_add(app: &mut AppContext, summary: Vec<String>, owner: Option<String>) -> Result<()> {
    let card = NewCard {
        summary: join_words(summary),
        owner,
        state: CardState::default(),
    };
    let result = app.api.add_card(card)?;
    report(app, &result.messages);
    Ok(())
}

fn handle_delete(app: &mut AppContext, card_id: u64) -> Result<()> {
    let result = app.api.delete_card(card_id)?;
    report(app, &result.messages);
    Ok(())
}

fn handle_list(app: &AppContext, args: ListArgs) -> Result<()> {
    let filter = CardFilter {
        owner: args.owner,
        no_owner: args.no_owner,
        state: args.state,
    };
    let result = app.api.list_cards(&filter)?;
    print!("{}", render_card_table(&result.listed_cards, app.table_format));
    report(app, &result.messages);
    Ok(())
}

fn handle_update(
    app: &mut AppContext,
    card_id: u64,
    owner: Option<String>,
    summary: Option<Vec<String>>,
    state: Option<CardState>,
) -> Result<()> {
    let patch = CardPatch {
        summary: summary.and_then(join_words),
        owner,
        state,
    };
    let result = app.api.update_card(card_id, patch)?;
    report(app, &result.messages);
    Ok(())
}

fn handle_path(app: &AppContext) -> Result<()> {
    println!("{}", app.api.path().display());
    Ok(())
}

fn handle_count(app: &AppContext) -> Result<()> {
    println!("{}", app.api.count()?);
    Ok(())
}

fn report(app: &AppContext, messages: &[CmdMessage]) {
    print_messages(&visible_messages(messages, app.verbose));
}

fn visible_messages(messages: &[CmdMessage], verbose: bool) -> Vec<CmdMessage> {
    messages
        .iter()
        .filter(|m| verbose || m.level == MessageLevel::Warning)
        .cloned()
        .collect()
}

/// Joins positional words into one summary; no words means no summary.
fn join_words(words: Vec<String>) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
