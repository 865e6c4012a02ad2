mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub const BANNER: &str = r#"
   ____     _       _           ____      __   __  _   _      ____
U /"___|U  /"\  u  |"|         / __"| u   \ \ / / | \ |"|  U /"___|
\| | u   \/ _ \/ U | | u      <\___ \/     \ V / <|  \| |> \| | u
 | |/__  / ___ \  \| |/__      u___) |    U_|"|_uU| |\  |u  | |/__
  \____|/_/   \_\  |_____|     |____/>>     |_|   |_| \_|    \____|
 _// \\  \\    >>  //  \\       )(  (__).-,//|(_  ||   \\,-._// \\
(__)(__)(__)  (__)("_")("_)     (__)      \_) (__) ("_)  (_/(__)(__)
"#;

#[derive(Parser)]
#[command(name = "calsync")]
#[command(about = "Sync calendars in a way that keeps event details private")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all configured syncs
    Run {
        /// Provider binary to sync through (defaults to the configured one)
        #[arg(long)]
        provider: Option<String>,
    },
    /// List configured syncs
    List,
    /// Add a sync interactively
    Add {
        /// Provider binary to sync through (defaults to the configured one)
        #[arg(long)]
        provider: Option<String>,
    },
    /// Remove a sync
    Remove {
        /// Id of the sync to remove (see `calsync list`)
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("{}", BANNER);
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Run { provider } => commands::run::run(provider.as_deref()).await,
        Commands::List => commands::list::run(),
        Commands::Add { provider } => commands::add::run(provider.as_deref()).await,
        Commands::Remove { id } => commands::remove::run(&id),
    }
}
