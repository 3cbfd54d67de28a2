//! Batch CLI: load a map, build either its well-separated pair decomposition
//! or its node-selection clustering, and write the result to a file.

mod args;
mod map_file;
mod output;

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::{CliArgs, Mode};
use gridwspd::{calculate_separation, Dijkstra, FullNodeSelectionCalculator, SelectionLookupOptimizer};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let graph = map_file::load(&args.graph, args.neighbour_mode.into())
        .with_context(|| format!("loading map {}", args.graph.display()))?;
    let output_path = args.output_path();
    let worker_count = args.worker_count();
    info!(mode = %args.mode, workers = worker_count, path = %args.graph.display(), "starting run");

    match args.mode {
        Mode::Separation => {
            let separations = run_with_spinner("building well-separated pair decomposition", {
                let graph = graph.clone();
                move || {
                    let mut pathfinder = Dijkstra::new(&graph);
                    calculate_separation(&graph, &mut pathfinder)
                }
            });
            info!(count = separations.len(), "decomposition complete");
            output::write_separations(&output_path, &separations, &graph)
                .with_context(|| format!("writing {}", output_path.display()))?;
        }
        Mode::Selection => {
            let selections = run_with_spinner("computing full node-selection clustering", {
                let graph = graph.clone();
                move || {
                    let mut pathfinder = Dijkstra::new(&graph);
                    let mut rng = StdRng::from_entropy();
                    let mut full = FullNodeSelectionCalculator::new(&graph);
                    let selections = full.calculate_full_node_selection(&mut pathfinder, &mut rng);

                    let mut optimizer = SelectionLookupOptimizer::new(&graph, selections);
                    optimizer.optimize();
                    optimizer.into_parts().0
                }
            });
            info!(count = selections.len(), "selection clustering complete");
            output::write_selections(&output_path, &selections)
                .with_context(|| format!("writing {}", output_path.display()))?;
        }
    }

    info!(path = %output_path.display(), "wrote output");
    Ok(())
}

/// Run `work` on its own thread while rendering a cosmetic spinner on
/// stderr; the computation itself is unaffected by whether anything is
/// watching it. See §6: the bar never gates correctness.
fn run_with_spinner<T, F>(message: &str, work: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner} {msg}").expect("valid spinner template"));
    bar.set_message(message.to_string());

    let handle = thread::spawn(work);
    while !handle.is_finished() {
        bar.tick();
        thread::sleep(Duration::from_millis(100));
    }
    bar.finish_and_clear();

    handle.join().expect("worker thread panicked")
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
