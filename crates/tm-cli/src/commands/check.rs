//! Check command implementation
//!
//! Builds the model schema and the migrated-to-head schema side by side in
//! two in-memory databases and reports every difference between them.

use anyhow::{Context, Result};
use tm_core::Target;
use tm_runner::Db;
use tm_schema::{capture_current, diff, Snapshot};

use crate::cli::GlobalArgs;
use crate::commands::common::{courier_runner, load_project, ExitCode, Project};

/// Execute the check command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;

    let models = model_snapshot(&project)?;
    let migrated = migrated_snapshot(&project, global)?;

    if global.verbose {
        eprintln!(
            "[verbose] Models: {} objects, migrations: {} objects",
            models.len(),
            migrated.len()
        );
    }

    let differences = diff(&models, &migrated);
    if differences.is_empty() {
        println!("Models and migrations agree ({} objects)", models.len());
        return Ok(());
    }

    for difference in &differences {
        println!("{difference}\n");
    }
    eprintln!(
        "{} difference{} between models and migrations",
        differences.len(),
        if differences.len() == 1 { "" } else { "s" }
    );
    Err(ExitCode(1).into())
}

fn scratch_db(project: &Project) -> Result<Db> {
    let db = Db::open_memory().context("Failed to open in-memory database")?;
    db.use_schema(&project.config.database.schema)?;
    Ok(db)
}

fn model_snapshot(project: &Project) -> Result<Snapshot> {
    let db = scratch_db(project)?;
    tm_models::courier::metadata()
        .create_all(db.conn())
        .context("Failed to build model schema")?;
    capture_current(db.conn()).context("Failed to capture model schema")
}

fn migrated_snapshot(project: &Project, global: &GlobalArgs) -> Result<Snapshot> {
    let db = scratch_db(project)?;
    let runner = courier_runner(&project.config)?;
    let applied = runner
        .upgrade(&db, &Target::Head)
        .context("Failed to migrate to head")?;
    if global.verbose {
        eprintln!("[verbose] Applied {} migrations", applied.len());
    }

    let snapshot = capture_current(db.conn()).context("Failed to capture migrated schema")?;
    Ok(snapshot.without_table(&project.config.version_table))
}
