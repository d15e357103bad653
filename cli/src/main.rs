mod backend;
mod commands;
mod render;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use contracts::export::alerts_csv;
use contracts::{AlertCategory, Permission, SubCategoryQuery, UnlockContactRequest};

use backend::Backend;
use commands::{AlertFilterArgs, AlertShowArgs, EditOperatorArgs, NewOperatorArgs};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing API token; pass --token or set SCANNER_API_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "scanner-cli", about = "Scanner alert backend CLI")]
struct Cli {
    #[arg(long, env = "SCANNER_API_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "SCANNER_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Prefix for alert audio file links.
    #[arg(long, env = "SCANNER_AUDIO_BASE_URL", default_value = "")]
    audio_base_url: String,

    /// Print raw JSON instead of tables.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    /// Exchange credentials for a bearer token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SCANNER_API_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Alerts(AlertsCommand),
    Users(UsersCommand),
    Settings(SettingsCommand),
}

#[derive(Args, Debug)]
struct AlertsCommand {
    #[command(subcommand)]
    command: AlertsSubcommand,
}

#[derive(Subcommand, Debug)]
enum AlertsSubcommand {
    List {
        #[command(flatten)]
        filter: AlertFilterArgs,
        /// Write the page as CSV (`-` for stdout).
        #[arg(long)]
        csv: Option<String>,
    },
    Show(AlertShowArgs),
    /// Unlock contact records for an address candidate.
    Unlock { address_id: i64 },
    Grantees { address_id: i64 },
    /// Counties known to the billing service.
    Counties,
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        permission: Option<Permission>,
    },
    Add(NewOperatorArgs),
    Edit(EditOperatorArgs),
}

#[derive(Args, Debug)]
struct SettingsCommand {
    #[command(subcommand)]
    command: SettingsSubcommand,
}

#[derive(Subcommand, Debug)]
enum SettingsSubcommand {
    /// Keyword sub-categories, sorted by id.
    SubCategories {
        #[arg(long, default_value = "all")]
        category: AlertCategory,
        #[arg(long)]
        search: Option<String>,
    },
}

struct CliContext {
    backend: Backend,
    audio_base_url: String,
    json: bool,
    authenticated: bool,
}

impl CliContext {
    fn require_token(&self) -> Result<(), CliError> {
        if self.authenticated { Ok(()) } else { Err(CliError::MissingToken) }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let token = cli.token.filter(|t| !t.trim().is_empty());
    let ctx = CliContext {
        authenticated: token.is_some(),
        backend: Backend::new(&cli.base_url, token)?,
        audio_base_url: cli.audio_base_url,
        json: cli.json,
    };

    match cli.command {
        Command::Ping => {
            ctx.backend.ping().await?;
            println!("ok");
            Ok(())
        }
        Command::Login { email, password } => run_login(&ctx, &email, &password).await,
        Command::Alerts(alerts) => {
            ctx.require_token()?;
            run_alerts(&ctx, alerts).await
        }
        Command::Users(users) => {
            ctx.require_token()?;
            run_users(&ctx, users).await
        }
        Command::Settings(settings) => {
            ctx.require_token()?;
            run_settings(&ctx, settings).await
        }
    }
}

async fn run_login(ctx: &CliContext, email: &str, password: &str) -> Result<(), CliError> {
    let request = commands::login_request(email, password)?;
    let response = ctx.backend.login(&request).await?;
    if ctx.json {
        return print_json(&response);
    }
    let token = response
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| CliError::Status { status: 200, message: "login response carried no token".to_owned() })?;
    if let Some(user) = response.user {
        eprintln!("signed in as {} <{}>", user.full_name(), user.email);
    }
    println!("{token}");
    Ok(())
}

async fn run_alerts(ctx: &CliContext, alerts: AlertsCommand) -> Result<(), CliError> {
    match alerts.command {
        AlertsSubcommand::List { filter, csv } => {
            let query = filter.to_query()?;
            let page = ctx.backend.alerts_by_filter(&query).await?;
            match csv.as_deref() {
                Some("-") => print!("{}", alerts_csv(&page.alerts)),
                Some(path) => {
                    std::fs::write(path, alerts_csv(&page.alerts))?;
                    eprintln!("wrote {} alert(s) to {path}", page.alerts.len());
                }
                None if ctx.json => print_json(&page)?,
                None => print!("{}", render::alerts_page(&page, query.page, query.limit)),
            }
            Ok(())
        }
        AlertsSubcommand::Show(args) => {
            let detail = ctx.backend.alert_by_id(&args.to_query()).await?;
            if ctx.json {
                return print_json(&detail);
            }
            print!("{}", render::alert_detail(&detail, &ctx.audio_base_url));
            Ok(())
        }
        AlertsSubcommand::Unlock { address_id } => {
            let request = UnlockContactRequest { address_id: Some(address_id) };
            let status = ctx.backend.unlock_contact_info(&request).await?;
            if ctx.json {
                return print_json(&status);
            }
            println!("{}", if status.message.is_empty() { "unlocked" } else { &status.message });
            Ok(())
        }
        AlertsSubcommand::Grantees { address_id } => {
            let request = UnlockContactRequest { address_id: Some(address_id) };
            let response = ctx.backend.grantee_info(&request).await?;
            if ctx.json {
                return print_json(&response);
            }
            print!("{}", render::grantees(&response));
            Ok(())
        }
        AlertsSubcommand::Counties => {
            let states = ctx.backend.state_list().await?;
            if ctx.json {
                return print_json(&states);
            }
            for county in contracts::settings::county_names(&states) {
                println!("{county}");
            }
            Ok(())
        }
    }
}

async fn run_users(ctx: &CliContext, users: UsersCommand) -> Result<(), CliError> {
    match users.command {
        UsersSubcommand::List { search, permission } => {
            let operators = ctx.backend.operators().await?;
            let rows = commands::filter_operators(&operators, &search, permission);
            if ctx.json {
                return print_json(&rows);
            }
            print!("{}", render::operators(&rows));
            Ok(())
        }
        UsersSubcommand::Add(args) => {
            let request = args.to_request()?;
            ctx.backend.insert_operator(&request).await?;
            println!("created operator {}", request.email);
            Ok(())
        }
        UsersSubcommand::Edit(args) => {
            let operators = ctx.backend.operators().await?;
            let current = operators
                .iter()
                .find(|op| op.id == args.id)
                .ok_or_else(|| CliError::InvalidInput(format!("no operator with id {}", args.id)))?;
            let update = args.to_update(current)?;
            ctx.backend.update_operator(&update).await?;
            println!("updated operator {}", update.id);
            Ok(())
        }
    }
}

async fn run_settings(ctx: &CliContext, settings: SettingsCommand) -> Result<(), CliError> {
    match settings.command {
        SettingsSubcommand::SubCategories { category, search } => {
            let query = SubCategoryQuery { category, search: search.filter(|s| !s.trim().is_empty()) };
            let mut rows = ctx.backend.sub_categories(&query).await?;
            contracts::settings::sort_by_id(&mut rows);
            if ctx.json {
                return print_json(&rows);
            }
            print!("{}", render::sub_categories(&rows));
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
