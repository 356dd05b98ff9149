use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dialogbox", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dispatch dialogs against an in-memory scene and print each layout as JSON.
    Play(PlayArgs),
    /// Check a dialog config without dispatching anything.
    Validate(ValidateArgs),
    /// Print the flags and pivot of every anchor.
    Anchors,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input dialog config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Modification JSON to use for the first dispatch instead of the dialog's own.
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Number of dialogs to dispatch (defaults to all of them).
    #[arg(long)]
    count: Option<usize>,

    /// Viewport width divided by height.
    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect: f64,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input dialog config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Anchors => cmd_anchors(),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    let value = serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))?;
    Ok(value)
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let config: dialogbox::DialogConfig = read_json(&args.in_path, "dialog config")?;
    let host = dialogbox::SceneTree::new(args.aspect)?;
    let mut manager = dialogbox::DialogManager::try_new(host, config)?;

    if let Some(path) = &args.plan {
        let planned: dialogbox::Modification = read_json(path, "modification")?;
        planned.validate()?;
        manager.plan_modification(planned);
    }

    let count = args.count.unwrap_or(manager.dialogs().len());
    for _ in 0..count {
        let index = manager.next_index();
        manager.dispatch_next()?;
        let active = manager
            .active_dialog()
            .context("dispatch succeeded without an active dialog")?;
        let snapshot = manager.host().snapshot(active.content.root)?;
        let line = serde_json::json!({ "index": index, "content": snapshot });
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let config: dialogbox::DialogConfig = read_json(&args.in_path, "dialog config")?;
    config.validate()?;
    eprintln!(
        "ok: {} dialogs, {} name tag and {} content backgrounds",
        config.dialogs.len(),
        config.backgrounds.name_tags.len(),
        config.backgrounds.contents.len()
    );
    Ok(())
}

fn cmd_anchors() -> anyhow::Result<()> {
    for anchor in dialogbox::Anchor::ALL {
        let flags = dialogbox::anchor_to_flags(anchor);
        let pivot = dialogbox::pivot_for_flags(flags);
        println!(
            "{:<13} flags={:06b} pivot=({}, {})",
            format!("{anchor:?}"),
            flags.bits(),
            pivot.x,
            pivot.y
        );
    }
    Ok(())
}
