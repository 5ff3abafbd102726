// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI entry point for account-manager
//!
//! Provides a command-line interface for inspecting the account book and
//! route table, and launches the GTK4 GUI (the default when no subcommand
//! is given).

use account_manager::{
    config::Settings,
    core::{AccountRecord, Route},
    ui::{App, Controller},
};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base path the routes are mounted under
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Start with an empty book instead of the sample accounts
    #[arg(long, global = true)]
    no_sandbox: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the GUI
    Gui,

    /// List accounts
    List {
        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Accounts per page (defaults to ACCOUNT_MANAGER_PAGE_SIZE)
        #[arg(short, long)]
        count: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the details of one account
    Show {
        /// Account number to look up
        account_number: String,
    },

    /// Print the route table
    Routes,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(base_url) = cli.base_url {
        settings.base_url = base_url;
    }
    if cli.no_sandbox {
        settings.sandbox = false;
    }

    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => {
            let code = App::new(settings).run();
            if code != gtk4::glib::ExitCode::SUCCESS {
                anyhow::bail!("GUI exited with {:?}", code);
            }
        }
        Commands::List { page, count, json } => list_accounts(settings, page, count, json)?,
        Commands::Show { account_number } => show_account(settings, &account_number)?,
        Commands::Routes => print_routes(&settings),
    }

    Ok(())
}

/// Builds a Controller with its accounts loaded
fn load_controller(settings: Settings) -> Controller {
    let controller = Controller::new(settings);
    controller.load_accounts();
    controller
}

/// List one page of accounts
fn list_accounts(
    settings: Settings,
    page: usize,
    count: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let per_page = count.unwrap_or(settings.page_size);
    let controller = load_controller(settings);
    let records: Vec<AccountRecord> = controller.page_records(page, per_page);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("{}", format!("Accounts (page {})\n", page.max(1)).bold());

    for record in &records {
        let account = &record.account;
        println!(
            "{} {} {} {} {}",
            account.account_number.cyan().bold(),
            account.account_name,
            account.iban.green(),
            account.amount.yellow(),
            format!("[{}]", account.account_type).dimmed(),
        );
    }

    println!(
        "\n{} Showing {} of {} accounts",
        "✓".green(),
        records.len(),
        controller.account_count()
    );

    Ok(())
}

/// Print the details modal of one account
fn show_account(settings: Settings, account_number: &str) -> anyhow::Result<()> {
    let controller = load_controller(settings);

    let modal = controller
        .modal_for(account_number)
        .ok_or_else(|| anyhow::anyhow!("No account with number '{}'", account_number))?;

    println!("{}", modal.title().bold());
    for (label, value) in modal.fields() {
        println!("  {} {}", format!("{}:", label).dimmed(), value);
    }

    Ok(())
}

/// Print every route with its full location
fn print_routes(settings: &Settings) {
    let controller = Controller::new(settings.clone());
    let routes = controller.routes();

    println!("{}", format!("Routes (base {})\n", routes.base()).bold());

    for route in Route::ALL {
        println!(
            "  {} {} {}",
            format!("{:<16}", routes.href(route)).cyan(),
            "→".dimmed(),
            route.name().green(),
        );
    }
}
