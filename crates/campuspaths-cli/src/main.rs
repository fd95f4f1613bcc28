mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campuspaths_lib::{resolve_data_dir, LoadPolicy};

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus walking directions and graph scripts")]
struct Cli {
    /// Directory holding campus_buildings.csv and campus_paths.csv.
    #[arg(long, env = "CAMPUSPATHS_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Fail on the first malformed path record instead of skipping it.
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every building as `SHORT: Long Name`.
    Buildings,
    /// Print walking directions between two buildings.
    Route {
        /// Starting building short name.
        #[arg(long = "from")]
        from: String,
        /// Destination building short name.
        #[arg(long = "to")]
        to: String,
    },
    /// Run a graph test script from a file, or stdin when no file is given.
    Script {
        /// Script file to execute.
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    let policy = if cli.strict {
        LoadPolicy::Strict
    } else {
        LoadPolicy::Tolerant
    };

    match cli.command {
        Command::Buildings => commands::buildings::handle_buildings(&data_dir, policy),
        Command::Route { from, to } => commands::route::handle_route(&data_dir, policy, &from, &to),
        Command::Script { file } => commands::script::handle_script(file.as_deref()),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
