mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use blockmark_lib::content::Align;

#[derive(Parser)]
#[command(name = "blockmark-cli", about = "Convert stored document content to HTML or text", version)]
struct Cli {
    /// Config file (default: <config dir>/blockmark/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Alignment for blocks without one
    #[arg(long, global = true)]
    align: Option<AlignArg>,

    /// Background color for runs highlighted without a color
    #[arg(long, global = true)]
    highlight_color: Option<String>,

    /// Escape text content in the generated markup
    #[arg(long, global = true)]
    escape_text: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum AlignArg {
    Left,
    Center,
    Right,
}

impl From<AlignArg> for Align {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => Align::Left,
            AlignArg::Center => Align::Center,
            AlignArg::Right => Align::Right,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the detected content type
    Detect {
        /// Input file ("-" or omitted reads stdin)
        input: Option<PathBuf>,
    },

    /// Convert content to HTML
    Html {
        /// Input file ("-" or omitted reads stdin)
        input: Option<PathBuf>,
    },

    /// Extract plain text for indexing
    Text {
        /// Input file ("-" or omitted reads stdin)
        input: Option<PathBuf>,
    },

    /// List the blocks of a block-map document in reading order
    Blocks {
        /// Input file ("-" or omitted reads stdin)
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();

    let overrides = app::RenderOverrides {
        align: cli.align.map(Align::from),
        highlight_color: cli.highlight_color,
        escape_text: cli.escape_text,
    };
    let app = app::App::new(cli.config.as_deref(), overrides)?;

    match cli.command {
        Command::Detect { input } => {
            let content = app::read_input(input.as_deref())?;
            commands::detect::run(&app, &content, &cli.format)?;
        }
        Command::Html { input } => {
            let content = app::read_input(input.as_deref())?;
            commands::html::run(&app, &content, &cli.format)?;
        }
        Command::Text { input } => {
            let content = app::read_input(input.as_deref())?;
            commands::text::run(&app, &content, &cli.format)?;
        }
        Command::Blocks { input } => {
            let content = app::read_input(input.as_deref())?;
            commands::blocks::run(&app, &content, &cli.format, use_color)?;
        }
    }

    Ok(())
}
