use crate::prelude::*;
use clap::Parser;

mod api;
mod article;
mod error;
mod files;
mod init;
mod new;
mod prelude;
mod push;
mod repo;
mod stats;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Mirror a markdown blog repository to dev.to"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// dev.to API key
    #[clap(long = "token", env = "DEVTO_TOKEN", global = true)]
    devto_key: Option<String>,

    /// GitHub repository (username/repository)
    #[clap(long, env = "DEVTO_REPO", global = true)]
    repo: Option<String>,

    /// Branch used in generated raw-content URLs
    #[clap(long, env = "DEVTO_BRANCH", global = true)]
    branch: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "DEVMIRROR_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Initialize a blog repository mirrored to dev.to
    Init(init::InitOptions),

    /// Create a new article draft
    New(new::NewOptions),

    /// Publish local articles to dev.to
    Push(push::PushOptions),

    /// Show stats for published articles
    Stats(stats::StatsOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Init(options) => init::run(options, app.global).await,
        SubCommands::New(options) => new::run(options, app.global).await,
        SubCommands::Push(options) => push::run(options, app.global).await,
        SubCommands::Stats(options) => stats::run(options, app.global).await,
    }
}
