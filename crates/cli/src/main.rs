use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use zenspend_core::ZenSpend;

use zenspend_cli::cli::{Cli, Command};
use zenspend_cli::{commands, config::Config, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let config = Config::resolve(cli.data_dir.as_deref())?;
    debug!(data_dir = %config.data_dir.display(), "opening store");
    let mut app = ZenSpend::open_dir(&config.data_dir)
        .with_context(|| format!("Open data dir {}", config.data_dir.display()))?;

    let json = cli.json;
    match &cli.command {
        Command::Register(args) => commands::session::register(&mut app, args, json)?,
        Command::Login(args) => commands::session::login(&mut app, args, json)?,
        Command::Logout => commands::session::logout(&mut app)?,
        Command::Whoami => commands::session::whoami(&app, json)?,
        Command::Profile(sub) => commands::profile::handle(&mut app, sub, json)?,
        Command::Currency(sub) => commands::currency::handle(&mut app, sub, json)?,
        Command::Tx(sub) => commands::transactions::handle(&mut app, sub, json)?,
        Command::Stats => commands::stats::handle(&app, json)?,
        Command::Chart(sub) => commands::charts::handle(&app, sub, json)?,
        Command::Export(args) => commands::exporter::handle(&app, args)?,
        Command::Ask(args) => commands::assistant::ask(&app, args, json)?,
        Command::Tips(args) => commands::assistant::tips(&app, args, json)?,
    }
    Ok(())
}
