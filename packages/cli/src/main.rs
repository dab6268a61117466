use anyhow::Result;
use auth_core::{FlowKind, WizardResult};
use clap::{Parser, Subcommand};
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Select};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;
mod context;
mod menu;

use context::AppContext;
use menu::MenuAction;

#[derive(Parser)]
#[command(name = "baynana", about = "Log in to Baynana from the terminal")]
struct Cli {
    /// Backend base URL (overrides BAYNANA_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Session file (overrides BAYNANA_SESSION_FILE)
    #[arg(long)]
    session_file: Option<PathBuf>,

    /// Skip confirmations and informational output
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Log in with an OTP sent to your phone
    Login,
    /// Create an account
    Signup,
    /// Sign in (or up) to list a business for free
    ListBusiness,
    /// Show the saved session
    Whoami,
    /// Forget the saved session
    Logout,
}

impl From<Command> for MenuAction {
    fn from(command: Command) -> Self {
        match command {
            Command::Login => MenuAction::Login,
            Command::Signup => MenuAction::Signup,
            Command::ListBusiness => MenuAction::ListBusiness,
            Command::Whoami => MenuAction::WhoAmI,
            Command::Logout => MenuAction::Logout,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with prompts on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,auth_core=info,baynana_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.api_url, cli.session_file, cli.quiet)?;
    tracing::debug!(api_url = %ctx.config.api_url, "Configuration loaded");

    if let Some(command) = cli.command {
        dispatch(&ctx, command.into()).await?;
        return Ok(());
    }

    let term = Term::stdout();
    print_banner(&term)?;

    // Main interactive loop
    loop {
        println!();
        let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact_on(&term)?;

        let action = MenuAction::ALL[selection];
        if action == MenuAction::Exit {
            println!("{}", "👋 Goodbye!".bright_blue());
            break;
        }
        if let Err(e) = dispatch(&ctx, action).await {
            ctx.print_error(&format!("{e:#}"));
        }
    }

    Ok(())
}

async fn dispatch(ctx: &AppContext, action: MenuAction) -> Result<()> {
    if let Some(kind) = action.flow() {
        return run_flow(ctx, kind).await;
    }
    match action {
        MenuAction::WhoAmI => cmd::session::whoami(ctx),
        MenuAction::Logout => cmd::session::logout(ctx),
        _ => Ok(()),
    }
}

async fn run_flow(ctx: &AppContext, kind: FlowKind) -> Result<()> {
    match cmd::auth::run(ctx, kind).await? {
        WizardResult::Completed(session) => {
            let name = session.user_name.as_deref().unwrap_or("there");
            ctx.print_success(&format!("✅ Welcome, {name}!"));
            cmd::session::print_profile(&session);
            if kind == FlowKind::FreeListing {
                ctx.print_info("You can now add your business listing.");
            }
        }
        WizardResult::Cancelled => ctx.print_warning("Cancelled. Nothing was saved."),
    }
    Ok(())
}

fn print_banner(term: &Term) -> Result<()> {
    term.clear_screen()?;
    println!(
        "{}",
        "╔════════════════════════════════════════╗".bright_cyan()
    );
    println!(
        "{}",
        "║              Baynana                   ║".bright_cyan()
    );
    println!(
        "{}",
        "╚════════════════════════════════════════╝".bright_cyan()
    );
    println!();
    Ok(())
}
