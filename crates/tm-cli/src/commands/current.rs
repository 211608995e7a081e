//! Current command implementation

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::commands::common::{courier_runner, load_project, open_database};

/// Execute the current command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    let db = open_database(&project, global)?;
    let runner = courier_runner(&project.config)?;

    match runner.current(&db)? {
        Some(rev) => {
            let is_head = runner.chain().head() == Some(&rev);
            println!("{rev}{}", if is_head { " (head)" } else { "" });
        }
        None => println!("base"),
    }
    Ok(())
}
