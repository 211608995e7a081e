//! Courier schema revisions, oldest first.
//!
//! Statements here are frozen: once a revision ships its SQL never changes,
//! even when the models move on. Index statements are written the way
//! [`tm_runner::ops::create_index`] renders them.

pub mod m001_initial_schema;
pub mod m002_replies;
pub mod m003_message_file_counter;
pub mod m004_draft_replies;
pub mod m005_source_activity;

use tm_runner::Migration;

/// Every revision in this module
pub fn all() -> Vec<Box<dyn Migration>> {
    vec![
        Box::new(m001_initial_schema::InitialSchema),
        Box::new(m002_replies::AddReplies),
        Box::new(m003_message_file_counter::AddMessageFileCounter),
        Box::new(m004_draft_replies::AddDraftReplies),
        Box::new(m005_source_activity::AddSourceActivity),
    ]
}

#[cfg(test)]
#[path = "versions_test.rs"]
mod tests;
