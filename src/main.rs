use std::error::Error;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tag_suggest::config::SuggestConfig;
use tag_suggest::runtime::effect::Effect;
use tag_suggest::state::suggestions::TagSuggestions;
use tag_suggest::tag_file::load_tags;
use tag_suggest::terminal::write_lines;
use tag_suggest::ui::render_suggestions;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tag-suggest", about = "Suggest tags for the last word of a note search")]
struct Args {
    /// YAML or JSON file with a list of `{id, name}` tags.
    #[arg(long, value_name = "FILE")]
    tags: PathBuf,

    /// Suggestion settings (YAML).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Accept the named tag and print the rewritten query.
    #[arg(long, value_name = "NAME")]
    select: Option<String>,

    /// Truncate rows to this many columns.
    #[arg(long)]
    width: Option<usize>,

    /// Print suggestions as JSON instead of a list.
    #[arg(long, conflicts_with = "select")]
    json: bool,

    /// Current search query.
    #[arg(default_value = "")]
    query: String,
}

fn main() -> ExitCode {
    init_tracing();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut config = match args.config.as_deref() {
        Some(path) => SuggestConfig::from_yaml_file(path)?,
        None => SuggestConfig::default(),
    };
    if args.width.is_some() {
        config.max_width = args.width;
        config.validate()?;
    }

    let tags = load_tags(&args.tags)?;
    let mut suggestions = TagSuggestions::new(config.tag_filter());
    let mut stdout = io::stdout().lock();

    if let Some(name) = args.select.as_deref() {
        let tag = tags
            .iter()
            .find(|tag| tag.name == name)
            .ok_or_else(|| format!("no tag named {name:?}"))?;
        for effect in suggestions.select(&args.query, tag) {
            if let Effect::Search(query) = effect {
                writeln!(stdout, "{query}")?;
            }
        }
        return Ok(());
    }

    let matches = suggestions.suggestions(&tags, &args.query);
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &*matches)?;
        writeln!(stdout)?;
        return Ok(());
    }

    let colored = io::stdout().is_terminal();
    write_lines(&mut stdout, &render_suggestions(&matches, &config), colored)?;
    Ok(())
}
