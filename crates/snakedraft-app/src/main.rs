// Snake draft entry point.
//
// 1. Check arguments (exactly one: the rankings file)
// 2. Initialize tracing (stderr, so stdout carries only the report)
// 3. Load config
// 4. Read rankings and build the preference store
// 5. Run the draft
// 6. Print the report

use snakedraft_app::{cli, config, rankings, report, rng_from_seed};

use anyhow::Context;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // 1. Wrong argument count: usage on stdout, status 1, nothing else runs
    let path = match cli::parse_args(std::env::args().skip(1)) {
        Ok(path) => path,
        Err(_) => {
            println!("{}", cli::USAGE);
            std::process::exit(1);
        }
    };

    // 2. Initialize tracing
    init_tracing()?;

    // 3. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        team_size = config.draft.team_size,
        supply = config.draft.supply_per_contestant(),
        seeded = config.draft.seed.is_some(),
        "config loaded"
    );

    // 4. Read rankings and build the preference store
    let rows = rankings::load_rankings(&path)
        .with_context(|| format!("failed to read rankings from {}", path.display()))?;
    let mut store =
        rankings::build_store(rows, &config).context("failed to prepare preferences")?;

    // 5. Run the draft
    let mut rng = rng_from_seed(config.draft.seed);
    let outcome = snakedraft_core::run(&mut store, config.draft.team_size, &mut rng)
        .context("draft failed")?;
    info!(picks = outcome.picks.len(), "draft complete");

    // 6. Print the report
    let text = report::render(&outcome).context("failed to render rosters")?;
    print!("{text}");

    Ok(())
}

/// Initialize tracing to log to stderr; stdout is reserved for the report.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
