//! Snapshot command implementation

use anyhow::{Context, Result};
use tm_schema::capture_current;

use crate::cli::{GlobalArgs, OutputFormat, SnapshotArgs};
use crate::commands::common::{load_project, open_database};

/// Execute the snapshot command
pub async fn execute(args: &SnapshotArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    let db = open_database(&project, global)?;

    let mut snapshot = capture_current(db.conn()).context("Failed to capture schema")?;
    if args.exclude_version_table {
        snapshot = snapshot.without_table(&project.config.version_table);
    }

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Text => {
            for (key, sql) in snapshot.iter() {
                println!("{key}");
                println!("  {}", sql.unwrap_or("<no statement>").replace('\n', "\n  "));
            }
            if global.verbose {
                eprintln!("[verbose] {} objects", snapshot.len());
            }
        }
    }
    Ok(())
}
