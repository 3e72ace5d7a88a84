use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use friends_da::{DaClient, DaConfig, APP_ID_ENV, DEFAULT_ENDPOINT};
use friends_generator::Friends;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "FRIENDS_LOG";

#[derive(Parser, Debug)]
#[command(author, version, about = "Turns \"X is good at Y\" sentences into friends statements")]
struct Cli {
    /// Yahoo! Application ID.
    #[arg(long = "appid", env = APP_ID_ENV, hide_env_values = true)]
    app_id: Option<String>,

    /// DA V2 endpoint.
    #[arg(long, env = "FRIENDS_DA_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    timeout: u64,

    /// Print the parse result as JSON on stderr.
    #[arg(long)]
    dump_parse: bool,

    /// Japanese sentence to analyse.
    text: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Runs one request and returns the process exit code.
async fn run(cli: Cli) -> anyhow::Result<u8> {
    let Some(app_id) = cli.app_id.filter(|id| !id.trim().is_empty()) else {
        eprint!("Yahoo! Application ID is not specified.\n\n");
        Cli::command().print_help()?;
        return Ok(2);
    };

    let config = DaConfig::new(app_id)
        .with_endpoint(cli.endpoint)
        .with_timeout(Duration::from_secs(cli.timeout));
    debug!(endpoint = %config.endpoint, timeout = cli.timeout, "configured DA client");
    let friends = Friends::new(DaClient::new(config)?);

    let analysis = friends.analyze(&cli.text).await?;

    if cli.dump_parse {
        let mut stderr = std::io::stderr().lock();
        serde_json::to_writer_pretty(&mut stderr, &analysis.parse)?;
        writeln!(stderr)?;
    }

    if let Some(statement) = analysis.statement {
        println!("{}", statement);
    }

    Ok(0)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error : {:#}", e);
            ExitCode::from(1)
        }
    }
}
