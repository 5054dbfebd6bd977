use std::io::{IsTerminal, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

use blockmark_lib::config::Config;
use blockmark_lib::content::Align;
use blockmark_lib::Converter;

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Default)]
pub struct RenderOverrides {
    pub align: Option<Align>,
    pub highlight_color: Option<String>,
    pub escape_text: bool,
}

/// Shared state for CLI commands
pub struct App {
    pub converter: Converter,
}

impl App {
    pub fn new(config_path: Option<&Path>, overrides: RenderOverrides) -> Result<Self> {
        let config = Config::load_or_default(config_path).context("Failed to load config")?;

        let mut options = config.render;
        if let Some(align) = overrides.align {
            options.default_align = align;
        }
        if let Some(color) = overrides.highlight_color {
            options.highlight_color = color;
        }
        if overrides.escape_text {
            options.escape_text = true;
        }

        Ok(Self {
            converter: Converter::new(options),
        })
    }
}

/// Read command input from a file, or from stdin for "-" or no argument.
pub fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut stdin = std::io::stdin();
            if input.is_none() && stdin.is_terminal() {
                bail!("No input file given and stdin is a terminal");
            }
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
