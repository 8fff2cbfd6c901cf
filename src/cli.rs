//! Command-line argument parsing.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Terminal password generator with copy and regenerate feedback widgets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file path (default: ~/.config/passforge/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Password length
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Include digits in the pool
    #[arg(long, value_name = "BOOL")]
    pub numbers: Option<bool>,

    /// Include symbols in the pool
    #[arg(long, value_name = "BOOL")]
    pub symbols: Option<bool>,

    /// Number of independent widgets to render
    #[arg(short, long)]
    pub widgets: Option<usize>,
}

impl Args {
    /// Overlay the given flags onto file-loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(length) = self.length {
            config.defaults.length = length;
        }
        if let Some(numbers) = self.numbers {
            config.defaults.numbers = numbers;
        }
        if let Some(symbols) = self.symbols {
            config.defaults.symbols = symbols;
        }
        if let Some(widgets) = self.widgets {
            config.defaults.widgets = widgets;
        }
    }
}
