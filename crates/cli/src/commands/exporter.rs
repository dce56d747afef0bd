use anyhow::{Context, Result};
use zenspend_core::ZenSpend;

use crate::cli::ExportArgs;
use crate::utils::today;

pub fn handle(app: &ZenSpend, args: &ExportArgs) -> Result<()> {
    if args.stdout {
        print!("{}", app.export_csv()?);
        return Ok(());
    }

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| app.default_export_file_name(today()).into());
    let rows = app
        .export_csv_to_file(&out)
        .with_context(|| format!("Export to {}", out.display()))?;
    println!("Exported {} transactions to {}", rows, out.display());
    Ok(())
}
