use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use tracing::{debug, info};

use converse::config::Config;
use converse::conversation::Conversation;
use converse::layer::render::{buffer_lines, draw};
use converse::layer::LayerTree;
use converse::stack::SegmentStack;

#[derive(Parser)]
#[command(name = "converse", about = "Render a conversation as stacked segments.")]
struct Cli {
    /// Config file (defaults to project, then user config)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Display width in cells (defaults to the terminal width)
    #[arg(short, long, global = true)]
    width: Option<u16>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw the whole conversation to stdout
    Preview { file: PathBuf },
    /// List each segment's kind, label, and frame
    Inspect { file: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("converse=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load(),
    };
    let width = cli
        .width
        .or_else(|| crossterm::terminal::size().ok().map(|(w, _)| w))
        .unwrap_or(config.display.width)
        .max(1);

    match cli.command {
        Command::Preview { file } => preview(&file, width, &config),
        Command::Inspect { file } => inspect(&file, width, &config),
    }
}

/// Load `file` and lay it out in a fresh tree.
fn build(file: &Path, width: u16, config: &Config) -> Result<(LayerTree, SegmentStack)> {
    let conversation = Conversation::load(file)?;
    info!("{} entries from {}", conversation.len(), file.display());

    let mut tree = LayerTree::new();
    let mut stack = SegmentStack::new(
        &mut tree,
        Rect::new(0, 0, width, config.display.height),
        config.segments.clone(),
    );
    stack.sync(&mut tree, &conversation);
    Ok((tree, stack))
}

fn preview(file: &Path, width: u16, config: &Config) -> Result<()> {
    let (mut tree, stack) = build(file, width, config)?;
    let height = stack.content_height(&tree).max(1);
    tree.set_frame(stack.root(), Rect::new(0, 0, width, height));

    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    draw(&tree, stack.root(), area, &mut buf);
    for line in buffer_lines(&buf) {
        println!("{line}");
    }
    debug!(height, "preview drawn");

    stack.destroy(&mut tree);
    Ok(())
}

fn inspect(file: &Path, width: u16, config: &Config) -> Result<()> {
    let (mut tree, stack) = build(file, width, config)?;
    for (index, segment) in stack.segments().iter().enumerate() {
        let frame = segment.frame(&tree);
        println!(
            "{index:>3}  {:<18} {:<5} y={:<4} h={:<3} w={}",
            segment.kind().as_str(),
            if segment.has_label() { "label" } else { "" },
            frame.y,
            frame.height,
            frame.width,
        );
    }
    println!("total height {}", stack.content_height(&tree));

    stack.destroy(&mut tree);
    Ok(())
}
