//! grid_demo — end-to-end run of the meshflow traffic model.
//!
//! Builds a synthetic 12 × 12 block of quadrant mesh cells around central
//! Tokyo, derives AM-peak demand from random residents and jobs, loads it in
//! increments and writes the per-zone flow report.
//!
//! ```text
//! grid_demo [config.json] [template.csv]
//! ```
//!
//! Without arguments the default model configuration and the default column
//! template are used.  Set `RUST_LOG=info` for stage-by-stage logs.

mod grid;

use std::fs::File;
use std::time::Instant;

use anyhow::{Context, Result};

use mf_assign::{AssignmentEngine, AssignmentObserver, StepReport};
use mf_core::ModelConfig;
use mf_demand::{DemandGenerator, zones_from_statistics};
use mf_network::{FlowNetwork, NetworkBuilder, YenPathFinder};
use mf_report::{ColumnTemplate, CsvReportWriter, FlowAggregator};

use grid::{grid_codes, synthetic_statistics};

// ── Constants ─────────────────────────────────────────────────────────────────

const ORIGIN:     &str  = "533945111"; // south-west cell
const GRID_SIZE:  usize = 12;
const SEED:       u64   = 42;
const TOP_ZONES:  usize = 5;
const OUTPUT_DIR: &str  = "output/grid_demo";

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressObserver {
    started: Instant,
}

impl AssignmentObserver for ProgressObserver {
    fn on_step_end(&mut self, report: &StepReport, network: &FlowNetwork) {
        println!(
            "  step {:>2}  fraction {:.2}  loaded {:>9.1}  dropped {:>7.1}  network flow {:>11.1}  ({:.3} s)",
            report.step + 1,
            report.fraction,
            report.loaded_volume,
            report.dropped_volume,
            network.total_flow(),
            self.started.elapsed().as_secs_f64(),
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let mut args = std::env::args().skip(1);

    // 1. Configuration.
    let config: ModelConfig = match args.next() {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening config {path}"))?;
            serde_json::from_reader(file).with_context(|| format!("parsing config {path}"))?
        }
        None => ModelConfig::default(),
    };
    config.validate()?;
    let template = match args.next() {
        Some(path) => ColumnTemplate::from_path(&path).with_context(|| format!("reading template {path}"))?,
        None => ColumnTemplate::default(),
    };

    println!("=== grid_demo — meshflow ===");
    println!("Period: {} ({})", config.period.key, config.period.window);
    println!("Config:\n{}", serde_json::to_string_pretty(&config)?);
    println!();

    // 2. Zones.
    let codes = grid_codes(ORIGIN, GRID_SIZE)?;
    let stats = synthetic_statistics(&codes, GRID_SIZE, SEED);
    let zones = zones_from_statistics(&stats, &config.units)?;
    println!("Zones: {} cells, {} with trip potential", codes.len(), zones.len());

    // 3. Network.
    let network_builder = NetworkBuilder::new(config.links)?;
    let mut network = network_builder.build(codes.iter().map(String::as_str))?;
    println!(
        "Network: {} nodes, {} links, {} connector pairs",
        network.node_count(),
        network.link_count(),
        network.connector_pairs(),
    );

    // 4. Demand.
    let demand = DemandGenerator::new().generate(&zones);
    println!(
        "Demand: {} of {} OD pairs kept ({:.1} of {:.1} trips)",
        demand.len(),
        demand.candidate_pairs,
        demand.retained_volume,
        demand.candidate_volume,
    );
    println!();

    // 5. Assignment.
    let engine = AssignmentEngine::new(config.assignment.clone(), YenPathFinder)?;
    let mut observer = ProgressObserver { started: Instant::now() };
    let summary = engine.run(&mut network, &demand, &mut observer);
    println!(
        "Assignment: {} steps, {:.1} loaded, {:.1} dropped",
        summary.steps.len(),
        summary.loaded_volume(),
        summary.dropped_volume(),
    );
    println!();

    // 6. Report.
    let report = FlowAggregator::new(template).aggregate(&network);
    let headline = report.summary(TOP_ZONES);
    println!("Report: {} zones, {} active", headline.total_zones, headline.active_zones);
    println!("Total network flow: {}", headline.total_flow);
    println!();
    println!("{:<12} {:>10}", "Zone", "Flow");
    println!("{}", "-".repeat(23));
    for (code, total) in &headline.top_zones {
        println!("{:<12} {:>10}", code.as_str(), total);
    }

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let path = format!("{OUTPUT_DIR}/flows.csv");
    CsvReportWriter::create(&path)?.write(&report)?;
    println!();
    println!("Wrote {path}");

    Ok(())
}
