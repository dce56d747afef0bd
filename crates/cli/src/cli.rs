use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use zenspend_core::models::transaction::TransactionType;

use crate::utils::parse_date;

#[derive(Debug, Parser)]
#[command(
    name = "zenspend",
    version,
    about = "ZenSpend: personal income/expense tracking from the terminal"
)]
pub struct Cli {
    /// Directory holding zen_transactions.json and zen_user.json
    #[arg(long, global = true, env = "ZENSPEND_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a local profile and sign in
    Register(RegisterArgs),
    /// Sign in to the stored profile
    Login(LoginArgs),
    /// Sign out (clears the profile, keeps transactions)
    Logout,
    /// Show the signed-in profile
    Whoami,
    /// Edit the profile
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// List or switch display currencies
    #[command(subcommand)]
    Currency(CurrencyCommand),
    /// Record, list and delete transactions
    #[command(subcommand)]
    Tx(TxCommand),
    /// Balance, income, expenses and budget usage
    Stats,
    /// Chart data sets
    #[command(subcommand)]
    Chart(ChartCommand),
    /// Export transactions to CSV
    Export(ExportArgs),
    /// Ask the ZenSpend assistant about your money
    Ask(AskArgs),
    /// Show financial tips
    Tips(TipsArgs),
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long, default_value = "USD")]
    pub currency: String,
    #[arg(long, default_value_t = 0.0)]
    pub monthly_income: f64,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Profile name or e-mail
    pub login: String,
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Change one or more profile fields
    Set(ProfileSetArgs),
}

#[derive(Debug, Args)]
pub struct ProfileSetArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Image data (e.g., a data: URI); empty string clears it
    #[arg(long)]
    pub avatar: Option<String>,
    #[arg(long)]
    pub monthly_income: Option<f64>,
    #[arg(long)]
    pub currency: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CurrencyCommand {
    /// Show supported currencies
    List,
    /// Change the display currency
    Set {
        /// Currency code (USD, INR, BDT)
        code: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionType {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Income => TransactionType::Income,
            KindArg::Expense => TransactionType::Expense,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum TxCommand {
    /// Record a transaction
    Add(TxAddArgs),
    /// List transactions, newest first
    List(TxListArgs),
    /// Delete a transaction by id
    Rm {
        id: String,
    },
    /// Show suggested categories
    Categories {
        #[arg(long = "type", value_enum)]
        kind: Option<KindArg>,
    },
}

#[derive(Debug, Args)]
pub struct TxAddArgs {
    #[arg(long = "type", value_enum)]
    pub kind: KindArg,
    #[arg(long)]
    pub amount: f64,
    #[arg(long)]
    pub category: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct TxListArgs {
    #[arg(long = "type", value_enum)]
    pub kind: Option<KindArg>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum ChartCommand {
    /// Income vs. expense per day
    Daily,
    /// Expenses per category
    Categories,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file (defaults to zenspend_transactions_<today>.csv)
    #[arg(long, short)]
    pub out: Option<PathBuf>,
    /// Write CSV to stdout instead of a file
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,
}

#[derive(Debug, Args)]
pub struct AskArgs {
    /// Your question, e.g. "where does my money go?"
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

#[derive(Debug, Args)]
pub struct TipsArgs {
    /// Show every tip instead of today's
    #[arg(long)]
    pub all: bool,
}
