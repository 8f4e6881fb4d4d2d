use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use rockefeller_ledger::cli::{
    handle_audit, handle_balance, handle_deposit, handle_expense_command, handle_export,
    handle_history, handle_invest, handle_words, ExpenseCommands, ExportFormat, HistoryArgs,
    InvestArgs,
};
use rockefeller_ledger::config::{paths::DATA_DIR_ENV, LedgerPaths, Settings};
use rockefeller_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "rockefeller",
    version,
    about = "Envelope budgeting for đồng",
    long_about = "Rockefeller splits every deposit across five envelopes \
                  (essentials, savings, self-investment, charity, emergency) \
                  and tracks what you spend from each of them."
)]
struct Cli {
    /// Directory holding the ledger, settings and audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add money and split it across the envelopes
    Deposit {
        /// Amount in đồng, e.g. 1000000 or 1_000_000
        amount: String,
    },

    /// Record or remove expenses
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Invest from selfInvestment, topping up from emergency
    Invest(InvestArgs),

    /// Show envelope balances
    #[command(alias = "balances")]
    Balance,

    /// List past withdrawals, newest first
    History(HistoryArgs),

    /// Spell out an amount in Vietnamese words
    Words {
        /// Amount in đồng
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Export the ledger
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file (defaults to the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Pure formatting needs no data directory
    if let Some(Commands::Words { amount }) = &cli.command {
        handle_words(amount)?;
        return Ok(());
    }

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }
    let storage = Storage::new(paths.clone())?.with_audit(settings.audit_enabled);

    match cli.command {
        Some(Commands::Deposit { amount }) => handle_deposit(&storage, &settings, &amount)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Invest(args)) => handle_invest(&storage, &settings, args)?,
        Some(Commands::Balance) => handle_balance(&storage, &settings)?,
        Some(Commands::History(args)) => handle_history(&storage, &settings, args)?,
        Some(Commands::Words { .. }) => {}
        Some(Commands::Export { format, output }) => handle_export(&storage, format, output)?,
        Some(Commands::Audit { count }) => handle_audit(&storage, count)?,
        Some(Commands::Config) => {
            println!("Rockefeller Configuration");
            println!("=========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Ledger file:      {}", paths.ledger_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  History page size:     {}", settings.history_page_size);
            println!("  Collapsed history:     {}", settings.collapsed_history_count);
            println!("  Spending chart covers: {}", settings.recent_chart_count);
            println!("  Amounts in words:      {}", settings.show_amount_in_words);
            println!("  Audit log enabled:     {}", settings.audit_enabled);
        }
        None => {
            println!("Rockefeller - envelope budgeting for đồng");
            println!();
            println!("Run 'rockefeller --help' for usage information.");
            println!("Run 'rockefeller balance' to see your envelopes.");
        }
    }

    Ok(())
}
