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

    let groups = graph
        .all_groups()
        .context("Failed to split programs into groups.")?;
    println!("The number of groups in given pipes is {}.", groups.len());

    Ok(())
}
