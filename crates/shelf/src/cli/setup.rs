use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "Menu-driven catalog for a personal book collection", long_about = None)]
pub struct Cli {
    /// JSON file holding the catalog (defaults to books_data.json, or the
    /// `data_file` configuration value)
    pub data_file: Option<PathBuf>,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
