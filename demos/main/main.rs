use anyhow::Context;
use ising_bisection::{bisect, BisectionConfig, Graph, IsakovSolver};
use std::env;
use std::time;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut args = env::args().skip(1);
    let graph_file = args.next();

    let solver = match args.next() {
        Some(binary) => IsakovSolver::new(binary),
        None => IsakovSolver::for_host().context("no solver binary for this platform")?,
    };

    let t1 = time::Instant::now();
    let bisection = match graph_file {
        Some(path) => Graph::deserialize_edge_list(&path)
            .with_context(|| format!("could not read graph from {path}"))?
            .partition_bisection(&solver, &BisectionConfig::default()),
        None => bisect(&[(0, 1), (1, 3), (2, 0)], &solver, &BisectionConfig::default()),
    }
    .context("bisection failed")?;
    println!("time: {}ms", t1.elapsed().as_millis());

    println!("The first group is: {:?}", bisection.first);
    println!("The second group is: {:?}", bisection.second);
    println!(
        "This solution has {} edge(s) between the two groups",
        bisection.edge_cut
    );
    Ok(())
}
