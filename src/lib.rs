use std::{
    collections::{HashMap, HashSet, VecDeque},
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidPipeText(String),
    ProgramNotFound(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPipeText(s) => write!(
                f,
                "Invalid text({}) for pipes, expect \"<id> <-> <id>[, <id>]*\".",
                s
            ),
            Error::ProgramNotFound(id) => {
                write!(f, "Program({}) is not declared in given pipes.", id)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    #[arg(default_value = "day12.txt")]
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Program {
    id: String,
}

impl Program {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// One input line: a program and the programs it declares pipes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeRecord {
    program: Program,
    neighbors: Vec<Program>,
}

impl PipeRecord {
    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn neighbors(&self) -> &[Program] {
        &self.neighbors
    }
}

impl TryFrom<&str> for PipeRecord {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static PIPE_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\w+) <-> (\w+(?:, \w+)*)$").unwrap());

        let caps = PIPE_PATTERN
            .captures(value)
            .ok_or_else(|| Error::InvalidPipeText(value.to_string()))?;
        let program = Program::new(&caps[1]);
        let neighbors = caps[2].split(", ").map(Program::new).collect();

        Ok(Self { program, neighbors })
    }
}

/// Adjacency list of programs, as declared by the input.
///
/// Pipes are bidirectional, but the graph keeps each program's own list
/// without completing missing mirror entries, so traversal results are only
/// exact groups when the input lists every pipe from both ends.
#[derive(Debug, Clone, Default)]
pub struct PipeGraph {
    pipe_map: HashMap<Program, Vec<Program>>,
}

impl PipeGraph {
    pub fn new<I: IntoIterator<Item = PipeRecord>>(records: I) -> Self {
        let pipe_map = records
            .into_iter()
            .map(|record| (record.program, record.neighbors))
            .collect();

        Self { pipe_map }
    }

    /// Parse every line and build the graph, stopping at the first invalid one.
    pub fn build<I, S>(lines: I) -> std::result::Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records = lines
            .into_iter()
            .map(|line| PipeRecord::try_from(line.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self::new(records))
    }

    pub fn programs_n(&self) -> usize {
        self.pipe_map.len()
    }

    pub fn contains(&self, program: &Program) -> bool {
        self.pipe_map.contains_key(program)
    }

    pub fn neighbors(&self, program: &Program) -> Option<&[Program]> {
        self.pipe_map.get(program).map(|neighbors| neighbors.as_slice())
    }

    pub fn programs(&self) -> impl Iterator<Item = &Program> {
        self.pipe_map.keys()
    }

    /// All programs reachable from `start` by following declared pipes, `start` included.
    pub fn group_of(&self, start: &Program) -> std::result::Result<HashSet<Program>, Error> {
        let mut visited = HashSet::new();
        self.search_group(start, &mut visited)
    }

    /// Split all programs into groups, each program in exactly one of them.
    pub fn all_groups(&self) -> std::result::Result<Vec<HashSet<Program>>, Error> {
        let mut covered = HashSet::with_capacity(self.pipe_map.len());
        let mut groups = Vec::new();
        for program in self.pipe_map.keys() {
            if !covered.contains(program) {
                groups.push(self.search_group(program, &mut covered)?);
            }
        }

        Ok(groups)
    }

    // BFS from start, skipping (and marking) programs in visited.
    fn search_group(
        &self,
        start: &Program,
        visited: &mut HashSet<Program>,
    ) -> std::result::Result<HashSet<Program>, Error> {
        if !self.contains(start) {
            return Err(Error::ProgramNotFound(start.id().to_string()));
        }

        let mut group = HashSet::new();
        let mut search_queue = VecDeque::new();
        visited.insert(start.clone());
        search_queue.push_back(start.clone());
        while let Some(program) = search_queue.pop_front() {
            let neighbors = self
                .pipe_map
                .get(&program)
                .ok_or_else(|| Error::ProgramNotFound(program.id().to_string()))?;
            for neighbor in neighbors {
                if !visited.contains(neighbor) {
                    visited.insert(neighbor.clone());
                    search_queue.push_back(neighbor.clone());
                }
            }
            group.insert(program);
        }

        Ok(group)
    }
}

pub fn reachable_from(
    graph: &PipeGraph,
    start_id: &str,
) -> std::result::Result<HashSet<Program>, Error> {
    graph.group_of(&Program::new(start_id))
}

pub fn all_components(graph: &PipeGraph) -> std::result::Result<Vec<HashSet<Program>>, Error> {
    graph.all_groups()
}

pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<PipeGraph> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let records = reader
        .lines()
        .enumerate()
        .map(|(ind, line)| {
            line.with_context(|| {
                format!(
                    "Failed to read line {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
            .and_then(|s| {
                PipeRecord::try_from(s.as_str()).with_context(|| {
                    format!(
                        "Failed to read pipes from line {} in given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PipeGraph::new(records))
}
