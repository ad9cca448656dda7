//! Patterns workbench demo entry point.
//!
//! Initialises structured logging and runs the three walkthroughs against
//! the process-wide settings store and the patterns-core domain types.
//!
//! # Flow
//!
//! ```text
//! main()
//!  └─ singleton walkthrough
//!       ├─ probe_shared_handle(6)    -- N threads race on first access
//!       └─ exercise_store::run(...)  -- load once, mutate, dump, save
//!  └─ builder walkthrough
//!       └─ compose_reports           -- director over text + HTML builders
//!  └─ prototype walkthrough
//!       └─ clone_orders::run()       -- deep duplicate, edit the copy
//! ```
//!
//! Paths are fixed (`config.txt` in, `config_saved.txt` out); the only
//! external knob is `RUST_LOG` for the log level.

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use patterns_demo::application::{clone_orders, compose_reports, exercise_store, verify_handle};
use patterns_demo::infrastructure::storage::store::ConfigStore;

const CONFIG_PATH: &str = "config.txt";
const SAVED_CONFIG_PATH: &str = "config_saved.txt";
const PROBE_THREADS: usize = 6;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("patterns workbench starting");

    // ── Singleton walkthrough ─────────────────────────────────────────────────
    let probe = verify_handle::probe_shared_handle(PROBE_THREADS);
    info!(
        "one instance across {PROBE_THREADS} threads: {}",
        probe.all_identical()
    );

    let store = ConfigStore::shared();
    exercise_store::run(store, Path::new(CONFIG_PATH), Path::new(SAVED_CONFIG_PATH))?;

    // ── Builder walkthrough ───────────────────────────────────────────────────
    info!("\n{}", compose_reports::sales_text_report().render());
    info!("\n{}", compose_reports::markup_html_report().render());

    // ── Prototype walkthrough ─────────────────────────────────────────────────
    let what_if = clone_orders::run();
    info!("prototype: {}", what_if.original);
    info!("variant:   {}", what_if.variant);
    info!(
        "totals: original {} vs variant {}",
        what_if.original.total(),
        what_if.variant.total()
    );

    info!("patterns workbench finished");
    Ok(())
}
