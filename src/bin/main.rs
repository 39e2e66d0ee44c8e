use std::path::PathBuf;
use std::process::ExitCode;

use anstream::{eprintln, print, println};
use clap::Parser;
use owo_colors::OwoColorize;

use gridpath::astar::{SearchOutcome, search};
use gridpath::grid::Pos;
use gridpath::heuristic::Heuristic;
use gridpath::loader::load_grid;
use gridpath::render::render;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn parse_pos(s: &str) -> Result<Pos, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected 'row,col', got '{s}'"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column: {e}"))?;
    Ok(Pos::new(row, col))
}

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(long_version = gridpath::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File containing the grid
    #[arg()]
    pub grid: PathBuf,

    /// Heuristic guiding the search: manhattan, euclidean, zero, or dijkstra
    #[arg(default_value = "zero")]
    pub heuristic: String,

    /// Allow diagonal movement
    #[arg(long)]
    pub diagonal: bool,

    /// Start position as 'row,col' (default: top-left corner)
    #[arg(long, value_parser = parse_pos)]
    pub start: Option<Pos>,

    /// Goal position as 'row,col' (default: bottom-right corner)
    #[arg(long, value_parser = parse_pos)]
    pub goal: Option<Pos>,

    /// Cap on node expansions before the search gives up
    #[arg(long, env = "GRIDPATH_MAX_EXPANSIONS")]
    pub max_expansions: Option<usize>,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let grid = load_grid(&args.grid)?;
    let heuristic = Heuristic::from_name(&args.heuristic)?;

    let (rows, cols) = grid.dimensions();
    let start = args.start.unwrap_or(Pos::new(0, 0));
    let goal = args.goal.unwrap_or(Pos::new(rows - 1, cols - 1));

    println!("The original grid is:");
    print!("{}", render(&grid, None));
    println!();
    println!("Size: {rows} x {cols}");
    println!("Start: {start}");
    println!("Goal: {goal}");
    println!("Heuristic: {heuristic}");

    let max_expansions = args.max_expansions.unwrap_or(usize::MAX);
    let outcome = search(&grid, start, goal, heuristic, args.diagonal, max_expansions)?;

    match &outcome {
        SearchOutcome::Found {
            path,
            cost,
            expanded,
        } => {
            println!("Cost: {}", cost.green());
            println!("Nodes expanded: {expanded}");
            print!("{}", render(&grid, Some(path.as_slice())));
            println!("Path: {}", format_path(path));
        }
        SearchOutcome::Truncated {
            path,
            cost,
            expanded,
        } => {
            println!(
                "{} expansion budget exhausted after {expanded} nodes; \
                 showing the partial path ({} steps, cost {cost})",
                "Truncated:".yellow(),
                path.len()
            );
            print!("{}", render(&grid, Some(path.as_slice())));
            println!("Partial path: {}", format_path(path));
        }
        SearchOutcome::NoPath { expanded } => {
            println!(
                "{} after expanding {expanded} nodes",
                "No path found".yellow()
            );
        }
    }

    Ok(())
}

fn format_path(path: &[Pos]) -> String {
    let steps: Vec<String> = path.iter().map(Pos::to_string).collect();
    steps.join(" ")
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.color.write_global();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}
