use std::{ffi::OsStr, fs, iter};

use clap::{CommandFactory, Parser};
use pq::{
    error::PositionalError,
    lexer,
    prelude::*,
    source_map::find_line,
};

use commandline::Options;

mod commandline;

const SOURCE_EXTENSION: &str = "pq";

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(options.verbose)
        .init()?;

    let Some(file) = options.file else {
        Options::command().print_help()?;
        println!();
        return Ok(());
    };

    if file.extension() != Some(OsStr::new(SOURCE_EXTENSION)) {
        println!("You can only run files that end with '.{}'", SOURCE_EXTENSION);
        return Ok(());
    }

    let content = fs::read_to_string(&file)
        .with_context(|| format!("Unable to read {}", file.display()))?;
    info!("Read {} bytes from {}", content.len(), file.display());

    match lexer::lex(&content) {
        Ok(tokens) => {
            for token in tokens.iter() {
                println!("{}", token);
            }
        }
        Err(err) => {
            warn!("Lexing {} failed", file.display());
            describe_error(&err, &content);
        }
    }

    Ok(())
}

fn describe_error(err: &impl PositionalError, content: &str) {
    let position = err.position();

    fn pad_char(ch: char, times: usize) -> String {
        iter::repeat(ch).take(times).collect()
    }

    if let Some(line) = find_line(content, position.row) {
        let gutter = format!("{}", line.line_no());

        println!("{}| {}", gutter, line.for_display());
        println!(
            "{}| {}^--- {}",
            pad_char(' ', gutter.len()),
            pad_char(' ', position.column),
            err.describe()
        );
    }

    println!("Lexer error: {} at {}", err.describe(), position);
}
