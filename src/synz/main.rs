use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use synz::api::{CmdMessage, ConfigAction, MessageLevel, SynzApi};
use synz::config::SynzConfig;
use synz::error::{Result, SynzError};
use synz::model::Entry;
use synz::store::{fs as store_fs, SynonymStore};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    data_file: PathBuf,
    config_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Get { word }) => handle_get(&ctx, &word),
        Some(Commands::Add { word, synonyms }) => handle_add(&ctx, word, synonyms),
        Some(Commands::Remove { word }) => handle_remove(&ctx, &word),
        Some(Commands::AddSyn { word, synonym }) => handle_add_syn(&ctx, &word, &synonym),
        Some(Commands::RemoveSyn { word, synonym }) => handle_remove_syn(&ctx, &word, &synonym),
        Some(Commands::Sort) => handle_sort(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::List) | None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    // SYNZ_DATA_DIR overrides the platform data dir (used by tests).
    let data_dir = match std::env::var_os("SYNZ_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "synz", "synz")
            .ok_or_else(|| SynzError::Config("could not determine data dir".into()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = SynzConfig::load(&data_dir).unwrap_or_default();
    let data_file = match &cli.file {
        Some(path) => path.clone(),
        None => config.resolve_data_file(&data_dir),
    };

    Ok(AppContext {
        data_file,
        config_dir: data_dir,
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let api = SynzApi::new(store_fs::load(&ctx.data_file)?);
    let result = api.list()?;
    print_entries(&result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(ctx: &AppContext, word: &str) -> Result<()> {
    let api = SynzApi::new(store_fs::load(&ctx.data_file)?);
    let result = api.get(word)?;
    print_entries(&result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &AppContext, word: String, synonyms: Vec<String>) -> Result<()> {
    // A missing dictionary is fine here: add starts a fresh one and save
    // creates the file.
    let store = if ctx.data_file.exists() {
        store_fs::load(&ctx.data_file)?
    } else {
        SynonymStore::new()
    };
    let mut api = SynzApi::new(store);
    let result = api.add_entry(word, synonyms)?;
    save_if_mutated(&api, ctx, result.mutated)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &AppContext, word: &str) -> Result<()> {
    let mut api = SynzApi::new(store_fs::load(&ctx.data_file)?);
    let result = api.remove_entry(word)?;
    save_if_mutated(&api, ctx, result.mutated)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add_syn(ctx: &AppContext, word: &str, synonym: &str) -> Result<()> {
    let mut api = SynzApi::new(store_fs::load(&ctx.data_file)?);
    let result = api.add_synonym(word, synonym)?;
    save_if_mutated(&api, ctx, result.mutated)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove_syn(ctx: &AppContext, word: &str, synonym: &str) -> Result<()> {
    let mut api = SynzApi::new(store_fs::load(&ctx.data_file)?);
    let result = api.remove_synonym(word, synonym)?;
    save_if_mutated(&api, ctx, result.mutated)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_sort(ctx: &AppContext) -> Result<()> {
    let mut api = SynzApi::new(store_fs::load(&ctx.data_file)?);
    let result = api.sort()?;
    save_if_mutated(&api, ctx, result.mutated)?;
    print_entries(&result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), Some(v)) if key == "data-file" => ConfigAction::SetDataFile(v),
        // Unknown keys fall through to ShowKey, which rejects them.
        (Some(key), _) => ConfigAction::ShowKey(key),
    };

    let api = SynzApi::new(SynonymStore::new());
    let result = api.config(&ctx.config_dir, action)?;
    if let Some(config) = &result.config {
        println!("data-file = {}", config.data_file);
    }
    print_messages(&result.messages);
    Ok(())
}

fn save_if_mutated(api: &SynzApi, ctx: &AppContext, mutated: bool) -> Result<()> {
    if mutated {
        store_fs::save(api.store(), &ctx.data_file)?;
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_entries(entries: &[Entry]) {
    if entries.is_empty() {
        println!("No entries found.");
        return;
    }

    let word_width = entries
        .iter()
        .map(|e| e.word.width())
        .max()
        .unwrap_or(0);

    for entry in entries {
        let padding = word_width.saturating_sub(entry.word.width());
        println!(
            "{}{} {} {}",
            entry.word.bold(),
            " ".repeat(padding),
            "|".dimmed(),
            entry.synonyms.join(", ")
        );
    }
}
