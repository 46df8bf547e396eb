use anyhow::{Context, Result};
use clap::Parser;
use day12::{CLIArgs, Program};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let graph = day12::read_graph(&args.input_path).with_context(|| {
        format!(
            "Failed to read pipes from given file({}).",
            args.input_path.display()
        )
    })?;

    let start = Program::new("0");
    let group = graph
        .group_of(&start)
        .with_context(|| format!("Failed to find the group that contains program {}.", start))?;
    println!(
        "The number of programs in the group that contains program {} is {}.",
        start,
        group.len()
    );

    Ok(())
}
