//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tm_core::config::MEMORY_PATH;
use tm_core::Config;
use tm_runner::{Db, Runner};

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that destructors run before the process ends.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; the command already reported what went wrong
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// A loaded `tidemark.yml` and the directory it came from
pub(crate) struct Project {
    pub root: PathBuf,
    pub config: Config,
}

/// Load the project config from `--project-dir`.
pub(crate) fn load_project(global: &GlobalArgs) -> Result<Project> {
    let root = PathBuf::from(&global.project_dir);
    let config = Config::load_from_dir(&root).context("Failed to load project")?;
    if global.verbose {
        eprintln!("[verbose] Loaded project '{}' from {}", config.name, root.display());
    }
    Ok(Project { root, config })
}

/// Database location: the `--database` override, else the configured path
/// resolved against the project root. `None` means in-memory.
pub(crate) fn database_path(project: &Project, global: &GlobalArgs) -> Option<PathBuf> {
    match global.database.as_deref() {
        Some(MEMORY_PATH) => None,
        Some(path) => Some(PathBuf::from(path)),
        None => project.config.database_path(&project.root),
    }
}

/// Open the project database and select its schema.
pub(crate) fn open_database(project: &Project, global: &GlobalArgs) -> Result<Db> {
    let db = match database_path(project, global) {
        Some(path) => open_file(&path)?,
        None => Db::open_memory().context("Failed to open in-memory database")?,
    };
    db.use_schema(&project.config.database.schema)
        .with_context(|| format!("Failed to select schema '{}'", project.config.database.schema))?;
    Ok(db)
}

fn open_file(path: &Path) -> Result<Db> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Db::open(path).with_context(|| format!("Failed to open database {}", path.display()))
}

/// Runner over the courier chain, recording into the configured table.
pub(crate) fn courier_runner(config: &Config) -> Result<Runner> {
    tm_migrations::runner(&config.version_table).context("Invalid migration chain")
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
