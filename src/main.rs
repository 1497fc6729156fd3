use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use userfetch::api::{self, UserFetcher};
use userfetch::config;
use userfetch::models::UserSummary;
use userfetch::utils::field_display;

#[derive(Parser)]
#[command(
    name = "userfetch",
    author,
    version,
    about = "Fetch user summaries from a REST API",
    long_about = r#"userfetch: look up a user record by id and print its name, email and role.

Requests go to `$API_BASE_URL/api/users/<USER_ID>`. Use the `--env-file` option or environment variables to provide the base URL.

Examples:
  userfetch get 42
  userfetch get 42 --json
  userfetch --silent get 42 --base-url http://localhost:5000
"#,
    after_help = "Use `userfetch <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Fetch a user by id", long_about = "Fetch `/api/users/<USER_ID>` and print the user's name, email and role. Any failure is logged and reported as no user; the exit code is 1 in that case.")]
    Get {
        /// User identifier, inserted into the request path as-is
        user_id: String,
        /// Print the summary as JSON (`null` when no user was returned)
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Override API_BASE_URL for this call
        #[arg(long)]
        base_url: Option<String>,
    },
    #[command(about = "Show the effective configuration")]
    CheckConfig,
}

fn print_summary_table(summary: &UserSummary) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["Field", "Value"]);
    for (field, value) in summary.fields() {
        table.add_row(vec![field.to_string(), field_display(value)]);
    }
    println!("{table}");
}

fn build_fetcher(base_url: Option<String>) -> UserFetcher {
    let fetcher = match UserFetcher::from_env() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::new("Failed to create HTTP client").red(), e);
            process::exit(1);
        }
    };
    match base_url {
        Some(url) => fetcher.with_api_base_url(config::sanitize_base_url(&url)),
        None => fetcher,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    config::load_env_file(cli.env_file.as_deref());

    api::set_silent(cli.silent || config::get_silent());

    match cli.command {
        Commands::Get { user_id, json, base_url } => {
            let fetcher = build_fetcher(base_url);
            let result = fetcher.fetch_user_data(&user_id).await;
            if json {
                match serde_json::to_string_pretty(&result) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("{}: {}", yansi::Paint::new("Failed to encode result").red(), e);
                        process::exit(1);
                    }
                }
            } else if let Some(summary) = &result {
                print_summary_table(summary);
            } else {
                eprintln!("{} '{}'", yansi::Paint::new("No user data returned for").red(), user_id);
            }
            if result.is_none() {
                process::exit(1);
            }
        }
        Commands::CheckConfig => {
            println!("{} {}", yansi::Paint::new("API_BASE_URL:").green(), config::get_api_base_url());
            println!(
                "{} {}",
                yansi::Paint::new("Request preview:").green(),
                if api::client::is_silent() { "off" } else { "on" }
            );
        }
    }
}
