use std::path::PathBuf;

use anstream::println;
use clap::Parser;
use owo_colors::OwoColorize;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use gridpath::generator::{generate, save_grid};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(long_version = gridpath::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = "generated_grid.txt")]
    pub output: PathBuf,

    /// Number of rows and columns
    #[arg(long, default_value_t = 16u32, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Seed for the random source; equal seeds produce equal grids
    #[arg(long, default_value_t = 0u64)]
    pub seed: u64,

    /// Guarantee cycles by re-opening links along the off-diagonals
    #[arg(long)]
    pub cycles: bool,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    args.color.write_global();

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let grid = generate(&mut rng, args.size, args.cycles);
    save_grid(&grid, &args.output)?;

    println!(
        "Grid of size {}x{} saved to {:?}",
        args.size,
        args.size,
        args.output.yellow()
    );

    Ok(())
}
