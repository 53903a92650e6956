use crate::utils::Glyphs;
use clap::Parser;
use std::path::PathBuf;

/// Practice finding the number that makes 10
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "make-ten", version)]
pub struct Config {
    /// Seed for the question order (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Append session events to this file
    #[arg(short, long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Draw marks with plain ASCII characters
    #[arg(short, long)]
    pub ascii: bool,
}

impl Config {
    pub fn glyphs(&self) -> Glyphs {
        if self.ascii {
            Glyphs::ASCII
        } else {
            Glyphs::UNICODE
        }
    }
}
