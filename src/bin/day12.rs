use anyhow::{Context, Result};
use clap::Parser;
use day12::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let graph = day12::read_graph(&args.input_path).with_context(|| {
        format!(
            "Failed to read pipes from given file({}).",
            args.input_path.display()
        )
    })?;

    let group_size = day12::reachable_from(&graph, "0")
        .context("Failed to find the group that contains program 0.")?
        .len();
    let groups_n = day12::all_components(&graph)
        .context("Failed to split programs into groups.")?
        .len();
    println!("Day 12 Part 1: {}", group_size);
    println!("Day 12 Part 2: {}", groups_n);

    Ok(())
}
