use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(about = "Prints the tokens of a PQ source file", version)]
pub struct Options {
    /// The source file to tokenize, ending in `.pq`
    pub file: Option<PathBuf>,
    /// Log verbosity: 0 for errors only, up to 4 for tracing every token
    #[clap(short, long, default_value_t = 1)]
    pub verbose: usize,
}
