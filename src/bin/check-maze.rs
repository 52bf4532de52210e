//! CLI for checking a rendered maze

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::debug;
use solvable_maze::Maze;

/// Is there a way from the top-left to the bottom-right corner of a maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the maze with one way out marked
    #[arg(short, long)]
    route: bool,

    /// Enable debug messages
    #[arg(short, long)]
    debug: bool,

    /// File, where to read the maze. Use `-` for stdin.
    file: PathBuf,
}

/// Read maze from file, print output
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(if args.debug {
        "debug"
    } else {
        "warn"
    }))
    .init();

    let text = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .context("Could not read maze from stdin")?;
        buf
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("Could not read maze from {}", args.file.display()))?
    };
    // Spaces are open cells, so only blank lines around the maze are dropped
    let mut maze = Maze::parse(text.trim_matches(['\n', '\r']))?;
    debug!("Read {}x{} maze", maze.width(), maze.height());

    let Some(length) = maze.mark_winning_route() else {
        bail!("No way from start to target");
    };
    if args.route {
        println!("{}", maze);
    }
    println!("The maze is solvable, the marked way visits {} cells.", length);
    Ok(())
}
