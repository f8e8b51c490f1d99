//! `copy-kibana-dashboard` entry point.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use kibana_cli::args::{CopyArgs, parse_or_usage_exit, print_usage};
use kibana_cli::commands;
use kibana_cli::error::ExitCode;
use kibana_client::ClusterEndpoint;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let args: CopyArgs = parse_or_usage_exit();

    let Some(dashboard_id) = args.dashboard.clone() else {
        eprintln!("Missing argument --dashboard");
        print_usage::<CopyArgs>();
        std::process::exit(ExitCode::GeneralError.as_i32());
    };

    let source = ClusterEndpoint::new(args.from_host.clone(), args.from_port, args.from_index.clone());
    let dest = ClusterEndpoint::new(args.to_host.clone(), args.to_port, args.to_index.clone());

    if source == dest {
        eprintln!("The source and destination clusters are the same.");
        print_usage::<CopyArgs>();
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let exit_code = match commands::copy_dashboard::run(
        source,
        dest,
        &dashboard_id,
        args.to_saved_search_index.clone(),
        args.is_verbose(),
    )
    .await
    {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::GeneralError
        }
    };

    std::process::exit(exit_code.as_i32());
}
