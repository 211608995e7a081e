//! Downgrade command implementation

use anyhow::{Context, Result};
use tm_core::Target;

use crate::cli::{GlobalArgs, MigrateArgs};
use crate::commands::common::{courier_runner, load_project, open_database};

/// Execute the downgrade command
pub async fn execute(args: &MigrateArgs, global: &GlobalArgs) -> Result<()> {
    let target = Target::parse(&args.target)?;
    let project = load_project(global)?;
    let db = open_database(&project, global)?;
    let runner = courier_runner(&project.config)?;

    let reverted = runner
        .downgrade(&db, &target)
        .with_context(|| format!("Downgrade to {target} failed"))?;

    if reverted.is_empty() {
        println!("Already at {target}, nothing to downgrade");
        return Ok(());
    }
    for rev in &reverted {
        println!("  Reverted {rev}");
    }

    let now = runner.current(&db)?;
    println!(
        "\nDowngraded {} migration{}, now at {}",
        reverted.len(),
        if reverted.len() == 1 { "" } else { "s" },
        now.as_ref().map_or("base", |r| r.as_str())
    );
    Ok(())
}
