use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use shorturl::{cli, client::UrlClient, config, view::ViewState, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Base URL of the shortening backend (overrides SHORTURL_API_URL)
    #[clap(long, global = true)]
    api_url: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a short URL for a full URL
    Shorten(ShortenOptions),

    /// Resolve a short URL to its full URL
    Expand(ExpandOptions),

    /// Read shorten/expand commands from stdin
    Shell,

    /// Run the reference backend
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ShortenOptions {
    /// The full URL to shorten
    pub full_url: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ExpandOptions {
    /// The short URL to resolve
    pub short_url: String,

    /// Open the resolved URL in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind (overrides SERVER_ADDRESS)
    #[clap(long)]
    pub addr: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn exit_on_error(view: &ViewState) {
    if view.has_error() {
        std::process::exit(1);
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment, using defaults. Err: {}", e);
    }

    let cli = Cli::parse();
    let client = match cli.api_url {
        Some(url) => UrlClient::new(url),
        None => UrlClient::from_env(),
    };

    match cli.command {
        Command::Shorten(opt) => {
            let view = cli::shorten(&client, ViewState::default(), &opt.full_url).await;
            exit_on_error(&view);
        }
        Command::Expand(opt) => {
            let view = cli::expand(&client, ViewState::default(), &opt.short_url, opt.open).await;
            exit_on_error(&view);
        }
        Command::Shell => {
            cli::shell(&client).await;
        }
        Command::Serve(opt) => cli::serve(opt.addr).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
