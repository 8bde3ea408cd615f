mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "lumos-site")]
#[command(version, about = "SEO endpoint toolkit for lumoslab.tech", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Serve sitemap.xml and robots.txt over HTTP
    Serve {
        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Write sitemap.xml and robots.txt to a directory
    Build {
        /// Output directory for generated documents
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port } => commands::serve::run(port).await,
        Command::Build { output } => commands::build::run(output).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "lumos-site", &mut io::stdout());
            Ok(())
        }
    }
}
