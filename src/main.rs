//! Framed Diamond CLI
//!
//! Usage:
//!   framed-diamond [OPTIONS] [SIZE]
//!
//! Options:
//!   -c, --charset <FILE>  Charset file for glyph substitution (TOML format)
//!   -o, --output <FILE>   Write the picture to a file instead of stdout
//!   -d, --debug           Trace row classification while drawing
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use framed_diamond::{render_with_config, Charset, RenderConfig};

#[derive(Parser)]
#[command(name = "framed-diamond")]
#[command(about = "Renders a framed ASCII-art diamond of a given size")]
struct Cli {
    /// Diamond size (reads from stdin if not provided)
    size: Option<usize>,

    /// Charset file for glyph substitution (TOML format)
    #[arg(short, long)]
    charset: Option<PathBuf>,

    /// Write the picture to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Debug mode: trace row classification while drawing
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.debug { "trace" } else { "warn" }),
    )
    .init();

    // If no size argument and stdin is a terminal (interactive), show intro help
    let size = match cli.size {
        Some(size) => size,
        None => {
            if io::stdin().is_terminal() {
                print_intro();
                return;
            }
            match read_size_from_stdin() {
                Ok(size) => size,
                Err(e) => {
                    eprintln!("Error reading size from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    // Load charset
    let charset = match &cli.charset {
        Some(path) => match Charset::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading charset '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Charset::default(),
    };

    // Render with charset and debug mode
    let config = RenderConfig::new()
        .with_charset(charset)
        .with_debug(cli.debug);
    let picture = render_with_config(size, config);

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &picture) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => {
            print!("{}", picture);
        }
    }
}

/// Read the size from the first whitespace-separated token on stdin
fn read_size_from_stdin() -> Result<usize, String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| e.to_string())?;

    let token = buffer
        .split_whitespace()
        .next()
        .ok_or_else(|| "no size given".to_string())?;
    token
        .parse::<usize>()
        .map_err(|e| format!("invalid size '{}': {}", token, e))
}

fn print_intro() {
    println!(
        r#"Framed Diamond - ASCII-art diamond picture renderer

USAGE:
    framed-diamond [OPTIONS] [SIZE]
    echo <size> | framed-diamond

OPTIONS:
    -c, --charset <FILE>  Charset file for glyph substitution (TOML)
    -o, --output <FILE>   Write the picture to a file instead of stdout
    -d, --debug           Trace row classification while drawing
    -h, --help            Print help

QUICK START:
    framed-diamond 3

This draws a framed diamond picture 7 rows tall and 8 columns wide:

    +------+
    |  /\  |
    | /--\ |
    |<====>|
    | \--/ |
    |  \/  |
    +------+

A size of n gives 2n+1 rows and 2n+2 columns; the interior fill alternates
between '-' and '=' from row to row. Pass --charset to swap any of the
characters for your own."#
    );
}
