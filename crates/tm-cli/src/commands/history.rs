//! History command implementation

use anyhow::Result;
use serde::Serialize;

use crate::cli::{GlobalArgs, HistoryArgs, OutputFormat};
use crate::commands::common::{courier_runner, load_project};

#[derive(Serialize)]
struct HistoryEntry {
    revision: String,
    down_revision: Option<String>,
    description: String,
}

/// Execute the history command
pub async fn execute(args: &HistoryArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    let runner = courier_runner(&project.config)?;

    let entries: Vec<HistoryEntry> = runner
        .history()
        .into_iter()
        .map(|info| HistoryEntry {
            revision: info.revision.into_inner(),
            down_revision: info.down_revision.map(|r| r.into_inner()),
            description: info.description,
        })
        .collect();

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            for entry in &entries {
                println!(
                    "{} -> {}, {}",
                    entry.down_revision.as_deref().unwrap_or("<base>"),
                    entry.revision,
                    entry.description
                );
            }
        }
    }
    Ok(())
}
