/*!
 * Round-Robin Scheduling Simulator - Main Entry Point
 *
 * Usage: rr-sched-sim <batch.csv> [--json]
 */

use anyhow::{bail, Context, Result};
use tracing::info;

use rr_sched_sim::report::render_input_table;
use rr_sched_sim::{init_tracing, load_batch, LoaderConfig, SimulationConfig, Simulator, Summary};

fn main() -> Result<()> {
    init_tracing();

    let mut path = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if path.is_none() {
            path = Some(arg);
        } else {
            bail!("unexpected argument '{}'", arg);
        }
    }
    let Some(path) = path else {
        bail!("usage: rr-sched-sim <batch.csv> [--json]");
    };

    let config = SimulationConfig::from_env().context("invalid simulation settings")?;
    let loader_config = LoaderConfig::from_env().context("invalid loader settings")?;
    info!(
        quantum = config.quantum.units(),
        io_completion = config.io_completion.as_str(),
        ready_order = config.ready_order.as_str(),
        "Configuration loaded"
    );

    let batch = load_batch(&path, &loader_config)
        .with_context(|| format!("failed to load batch from {}", path))?;
    let input_table = render_input_table(&batch);

    let outcome = Simulator::new(config)
        .run(batch)
        .context("simulation rejected the batch")?;
    let summary = Summary::from_outcome(&outcome);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Input");
        print!("{}", input_table);
        println!();
        println!("Results");
        print!("{}", summary.render_table());
    }

    Ok(())
}
