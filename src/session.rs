use std::{
    fmt::Write as _,
    io::{self, BufRead, Write},
    path::PathBuf,
    str::FromStr,
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    compare::evaluate,
    error::{GraphError, Result},
    graph::{compute_mst, mst::UnknownAlgorithm, Algorithm, Graph},
    render::{evaluation_report, mst_report, render_evaluation, RenderOptions},
};

pub const HELP: &str = "\
commands:
  add <city> <city> <km>      add a connection (use commas for names with spaces: add New Delhi, Agra, 200)
  remove <index>              remove the connection at index
  list                        show all connections
  reset                       remove everything
  sample                      load the sample Indian cities
  start [city]                start Prim's algorithm from city (no city: first added)
  mst prim|kruskal            compute one minimum spanning tree
  compare                     compute both and compare them
  render [dir]                write prim.svg and kruskal.svg
  help                        show this message
  quit                        leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        city_a: String,
        city_b: String,
        weight: i64,
    },
    Remove(usize),
    List,
    Reset,
    Sample,
    Start(Option<String>),
    Mst(Algorithm),
    Compare,
    Render(Option<PathBuf>),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', try help")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    #[error(transparent)]
    Algorithm(#[from] UnknownAlgorithm),
}

fn parse_number<T: FromStr>(input: &str) -> Result<T, CommandError> {
    input
        .trim()
        .parse()
        .map_err(|_| CommandError::NotANumber(input.trim().to_owned()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (keyword, rest) = input
            .split_once(char::is_whitespace)
            .map(|(keyword, rest)| (keyword, rest.trim()))
            .unwrap_or((input, ""));

        match keyword.to_lowercase().as_str() {
            "add" => {
                const USAGE: &str = "add <city> <city> <km>";
                let fields = if rest.contains(',') {
                    rest.split(',').map(str::trim).collect::<Vec<_>>()
                } else {
                    rest.split_whitespace().collect::<Vec<_>>()
                };
                match fields.as_slice() {
                    [city_a, city_b, weight] => Ok(Self::Add {
                        city_a: city_a.to_string(),
                        city_b: city_b.to_string(),
                        weight: parse_number(weight)?,
                    }),
                    _ => Err(CommandError::Usage(USAGE)),
                }
            }
            "remove" | "rm" => match rest {
                "" => Err(CommandError::Usage("remove <index>")),
                index => Ok(Self::Remove(parse_number(index)?)),
            },
            "list" | "ls" => Ok(Self::List),
            "reset" | "clear" => Ok(Self::Reset),
            "sample" => Ok(Self::Sample),
            "start" => Ok(Self::Start(Some(rest.to_owned()).filter(|city| !city.is_empty()))),
            "mst" => match rest {
                "" => Err(CommandError::Usage("mst prim|kruskal")),
                algorithm => Ok(Self::Mst(algorithm.parse()?)),
            },
            "compare" | "calculate" => Ok(Self::Compare),
            "render" => Ok(Self::Render(Some(rest).filter(|dir| !dir.is_empty()).map(PathBuf::from))),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(keyword.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Text(String),
    Quit,
}

/// An interactive editing session over one graph.
#[derive(Debug, Clone, Default)]
pub struct Session {
    graph: Graph,
    start: Option<String>,
    render_options: RenderOptions,
    out_dir: Option<PathBuf>,
}

impl Session {
    pub fn new(graph: Graph, render_options: RenderOptions) -> Self {
        Self {
            graph,
            render_options,
            ..Default::default()
        }
    }

    pub fn with_start(mut self, start: Option<String>) -> Self {
        self.start = start;
        self
    }

    /// Default directory for `render` without an argument.
    pub fn with_out_dir(mut self, out_dir: Option<PathBuf>) -> Self {
        self.out_dir = out_dir;
        self
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!("Executing {:?}", command);
        let text = match command {
            Command::Add {
                city_a,
                city_b,
                weight,
            } => {
                let index = self.graph.add_edge(&city_a, &city_b, weight)?;
                let edge = &self.graph.edges()[index];
                format!(
                    "[{}] {} ↔ {}: {} km",
                    index, edge.city_a, edge.city_b, edge.weight
                )
            }
            Command::Remove(index) => {
                let edge = self.graph.remove_edge(index)?;
                format!("Removed {} ↔ {}: {} km", edge.city_a, edge.city_b, edge.weight)
            }
            Command::List => self.listing(),
            Command::Reset => {
                self.graph.reset();
                "Cleared all connections".to_owned()
            }
            Command::Sample => {
                self.graph.load_sample();
                format!(
                    "Sample Indian cities loaded! {} cities, {} connections",
                    self.graph.vertices().len(),
                    self.graph.edges().len()
                )
            }
            Command::Start(start) => {
                let text = match &start {
                    Some(city) => format!("Prim's algorithm will start from {}", city),
                    None => "Prim's algorithm will start from the first city".to_owned(),
                };
                self.start = start;
                text
            }
            Command::Mst(algorithm) => {
                if self.graph.is_empty() {
                    return Err(GraphError::EmptyGraph.into());
                }
                let mst = compute_mst(&self.graph, algorithm, self.start.as_deref())?;
                mst_report(algorithm, &mst).trim_end().to_owned()
            }
            Command::Compare => {
                let evaluation = evaluate(&self.graph, self.start.as_deref())?;
                evaluation_report(&evaluation).trim_end().to_owned()
            }
            Command::Render(dir) => {
                let dir = dir
                    .or_else(|| self.out_dir.clone())
                    .unwrap_or_else(|| PathBuf::from("."));
                let evaluation = evaluate(&self.graph, self.start.as_deref())?;
                let written =
                    render_evaluation(&self.graph, &evaluation, &self.render_options, &dir)?;
                written
                    .iter()
                    .map(|path| format!("Wrote {}", path.display()))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Command::Help => HELP.trim_end().to_owned(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Text(text))
    }

    fn listing(&self) -> String {
        if self.graph.is_empty() {
            return "No connections yet".to_owned();
        }
        let mut listing = String::new();
        for (index, edge) in self.graph.edges().iter().enumerate() {
            let _ = writeln!(
                listing,
                "[{}] {} ↔ {}: {} km",
                index, edge.city_a, edge.city_b, edge.weight
            );
        }
        let _ = write!(listing, "{} cities", self.graph.vertices().len());
        listing
    }

    /// Read commands line by line until `quit` or end of input.
    ///
    /// A failing command is reported and the session carries on with the graph unchanged.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let outcome = line
                .parse::<Command>()
                .map_err(crate::Error::from)
                .and_then(|command| self.execute(command));
            match outcome {
                Ok(Outcome::Text(text)) => writeln!(output, "{}", text)?,
                Ok(Outcome::Quit) => break,
                Err(e) => {
                    warn!("{}: {}", line, e);
                    writeln!(output, "error: {}", e)?;
                }
            }
        }
        output.flush()
    }
}
