use std::io;

use anyhow::{Context, bail};
use clap::Parser;
use kruskal_mst::{
    Edge, Graph, MstConfig, MstError, TieBreak, compute_mst_with_config,
    prim::minimum_spanning_weight, sample_graph, write_report,
};

#[derive(Parser, Debug)]
#[command(
    name = "kruskal",
    about = "Minimum spanning tree via Kruskal's algorithm",
    version
)]
struct Args {
    /// Number of vertices of an inline graph
    #[arg(long, value_name = "N")]
    vertices: Option<usize>,

    /// Edge as SRC,DEST,WEIGHT (repeatable). Without edges the demo graph is used
    #[arg(
        long = "edge",
        value_name = "SRC,DEST,WEIGHT",
        value_parser = parse_edge,
        requires = "vertices"
    )]
    edges: Vec<Edge>,

    /// Use an unstable sort; equal-weight edges may be picked in any order
    #[arg(long)]
    unstable: bool,

    /// Fail if the graph is disconnected instead of printing a spanning forest
    #[arg(long)]
    require_spanning: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Cross-check the total weight with Prim's algorithm
    #[arg(long)]
    verify: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_edge(s: &str) -> Result<Edge, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [src, dest, weight] = parts.as_slice() else {
        return Err(format!("expected SRC,DEST,WEIGHT, got '{s}'"));
    };
    let src = src
        .parse()
        .map_err(|e| format!("invalid source vertex '{src}': {e}"))?;
    let dest = dest
        .parse()
        .map_err(|e| format!("invalid destination vertex '{dest}': {e}"))?;
    let weight = weight
        .parse()
        .map_err(|e| format!("invalid weight '{weight}': {e}"))?;
    Ok(Edge::new(src, dest, weight))
}

fn init_logger(verbose: u8) {
    let env = env_logger::Env::new()
        .filter("KRUSKAL_LOG")
        .write_style("KRUSKAL_LOG_STYLE");
    let mut builder = env_logger::Builder::new();
    builder.filter_level(match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    });
    // KRUSKAL_LOG overrides the -v level
    builder.parse_env(env);
    builder.init();
}

fn build_graph(args: &Args) -> Result<Graph, MstError> {
    match args.vertices {
        Some(vertices) => Graph::from_edges(vertices, args.edges.clone()),
        None => Ok(sample_graph()),
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let graph = build_graph(args).context("invalid graph")?;
    log::debug!(
        "graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let config = MstConfig {
        tie_break: if args.unstable {
            TieBreak::Unstable
        } else {
            TieBreak::InputOrder
        },
        require_spanning: args.require_spanning,
    };
    let result = compute_mst_with_config(&graph, &config)?;

    if args.verify {
        let expected = minimum_spanning_weight(&graph)?;
        if expected != result.total_weight {
            bail!(
                "verification failed: kruskal total {} but prim total {}",
                result.total_weight,
                expected
            );
        }
        log::info!("verified total weight {expected} against prim");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        write_report(&mut io::stdout().lock(), &result)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        let code = match e.downcast_ref::<MstError>() {
            Some(MstError::Disconnected { .. }) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}
