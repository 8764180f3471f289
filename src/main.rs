use citymst::{
    color::Color,
    evaluate,
    graph::GraphFile,
    render::{evaluation_report, render_evaluation, RenderOptions},
    session::{Session, HELP},
    Graph, Result,
};
use clap::Parser;
use std::{
    fs::File,
    io::{self, BufReader, IsTerminal, Write},
    path::PathBuf,
};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Opt {
    /// A JSON graph file ({"edges": [{"cityA", "cityB", "weight"}]}) to compare right away.
    /// Without it (and without --sample) commands are read from stdin
    file: Option<PathBuf>,

    /// Compare the built-in sample of Indian cities, plus the edges of FILE if given
    #[arg(long)]
    sample: bool,

    /// City Prim's algorithm starts from, defaults to the first one added
    #[arg(long)]
    start: Option<String>,

    /// Directory for prim.svg and kruskal.svg
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 600.)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 400.)]
    height: f64,

    /// Radius of the vertex circle as a fraction of the shorter canvas side
    #[arg(long, default_value_t = 0.35)]
    radius_fraction: f64,

    /// Color of tree edges
    #[arg(long, default_value = "#28a745")]
    edge_color: Color,

    /// Color of vertices
    #[arg(long, default_value = "#667eea")]
    vertex_color: Color,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) if opt.verbose => EnvFilter::default().add_directive(Level::DEBUG.into()),
        Err(_) => EnvFilter::new("citymst=info"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let render_options = RenderOptions {
        width: opt.width,
        height: opt.height,
        radius_fraction: opt.radius_fraction,
        edge_color: opt.edge_color,
        vertex_color: opt.vertex_color,
    };

    let mut graph = Graph::new();
    if opt.sample {
        graph.load_sample();
    }

    if let Some(path) = &opt.file {
        info!("Reading graph from {}", path.display());
        let file: GraphFile = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        graph.extend_from(file)?;
    }

    if opt.file.is_some() || opt.sample {
        return report(&graph, &opt, &render_options);
    }

    if io::stdin().is_terminal() {
        eprint!("{}", HELP);
    } else {
        info!("Reading commands from stdin");
    }
    let mut session = Session::new(graph, render_options)
        .with_start(opt.start)
        .with_out_dir(opt.out);
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

/// Non-interactive run: compare both trees, print them and optionally draw them.
fn report(graph: &Graph, opt: &Opt, render_options: &RenderOptions) -> Result<()> {
    let evaluation = evaluate(graph, opt.start.as_deref())?;

    let mut stdout = io::stdout().lock();
    if opt.json {
        serde_json::to_writer_pretty(&mut stdout, &evaluation)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", evaluation_report(&evaluation))?;
    }

    if let Some(dir) = &opt.out {
        render_evaluation(graph, &evaluation, render_options, dir)?;
    }
    Ok(())
}
