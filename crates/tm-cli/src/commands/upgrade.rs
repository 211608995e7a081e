//! Upgrade command implementation

use anyhow::{Context, Result};
use tm_core::Target;

use crate::cli::{GlobalArgs, MigrateArgs};
use crate::commands::common::{courier_runner, load_project, open_database};

/// Execute the upgrade command
pub async fn execute(args: &MigrateArgs, global: &GlobalArgs) -> Result<()> {
    let target = Target::parse(&args.target)?;
    let project = load_project(global)?;
    let db = open_database(&project, global)?;
    let runner = courier_runner(&project.config)?;

    if global.verbose {
        let from = runner.current(&db)?;
        eprintln!(
            "[verbose] Upgrading from {} to {target}",
            from.as_ref().map_or("base", |r| r.as_str())
        );
    }

    let applied = runner
        .upgrade(&db, &target)
        .with_context(|| format!("Upgrade to {target} failed"))?;

    if applied.is_empty() {
        println!("Already at {target}, nothing to upgrade");
        return Ok(());
    }
    for rev in &applied {
        println!("  Applied {rev}");
    }
    println!(
        "\nUpgraded {} migration{}",
        applied.len(),
        if applied.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
