use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use deltapath_lib::{plan_path, PathRequest, PathSummary, DEFAULT_OPTIONS};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find the shortest sequence of operations reaching a target value"
)]
struct Cli {
    /// Target value to reach.
    #[arg(allow_negative_numbers = true)]
    target: i64,

    /// Starting value.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    start: i64,

    /// Available operations.
    #[arg(long, num_args = 1.., allow_negative_numbers = true, default_values_t = DEFAULT_OPTIONS)]
    options: Vec<i64>,

    /// Operations that must end the path, in order.
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    required: Vec<i64>,

    /// Emit the result as pretty-printed JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let request = PathRequest {
        start: cli.start,
        target: cli.target,
        options: cli.options,
        required: cli.required,
    };

    let plan = plan_path(&request).context("failed to run the path search")?;
    let summary = plan.as_ref().map(PathSummary::from_plan);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    match summary {
        Some(summary) => print!("{}", summary.render_plain()),
        // A bounded miss is a reportable outcome, not a failure.
        None => println!(
            "No solution found to reach {} from {}",
            request.target, request.start
        ),
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
