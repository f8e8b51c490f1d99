//! `import-csv` entry point.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use kibana_cli::args::{ImportArgs, parse_or_usage_exit};
use kibana_cli::commands;
use kibana_cli::error::ExitCode;
use kibana_client::ClusterEndpoint;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let args: ImportArgs = parse_or_usage_exit();

    let Some(index) = args.index.clone() else {
        eprintln!("missing argument: --index");
        std::process::exit(ExitCode::GeneralError.as_i32());
    };
    let Some(doc_type) = args.doc_type.clone() else {
        eprintln!("missing argument: --type");
        std::process::exit(ExitCode::GeneralError.as_i32());
    };
    let Some(file) = args.file.clone() else {
        eprintln!("Missing argument: file");
        std::process::exit(ExitCode::GeneralError.as_i32());
    };

    let endpoint = ClusterEndpoint::new(args.host.clone(), args.port, index);

    let exit_code =
        match commands::import_csv::run(endpoint, &doc_type, args.column_list(), &file).await {
            Ok(_) => ExitCode::Success,
            Err(e) => {
                eprintln!("{e:#}");
                ExitCode::GeneralError
            }
        };

    std::process::exit(exit_code.as_i32());
}
