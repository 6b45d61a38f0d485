use anyhow::Result;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod edit;
mod import_string;
mod path;
mod walk;

#[derive(StructOpt)]
#[structopt(about = "Fix relative import paths in javascript modules")]
struct Cli {
    /// Log every visited file
    #[structopt(short, long, global = true)]
    verbose: bool,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Append .js to relative imports that lack an explicit extension
    Extensions {
        #[structopt(parse(from_os_str), default_value = "modules")]
        root: PathBuf,
    },
    /// Point engine imports at the right number of parent directories
    Slots {
        #[structopt(parse(from_os_str), default_value = "modules/slots")]
        root: PathBuf,
        #[structopt(long, default_value = "engine/index.js")]
        target: String,
    },
}

fn init_logging(verbose: bool) {
    let level = match verbose {
        true => LevelFilter::DEBUG,
        false => LevelFilter::INFO,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(level)
        .init();
}

fn main() -> Result<()> {
    let Cli { verbose, command } = Cli::from_args();

    init_logging(verbose);

    match command {
        Command::Extensions { root } => {
            info!(root = ?root, "appending extensions");
            edit::fix_extensions(&root)?;
        }
        Command::Slots { root, target } => {
            info!(root = ?root, target = %target, "fixing slot imports");
            edit::fix_slot_imports(&root, &target)?;
        }
    }

    Ok(())
}
