//! Canonical models for courier, the local store of a secure-messaging
//! client.
//!
//! The courier migration chain at head must produce exactly this schema.

use crate::column::{Column, ColumnType};
use crate::metadata::MetaData;
use crate::naming::NamingConvention;
use crate::table::{Index, Table, View};

/// Per-source message totals
pub const SOURCE_ACTIVITY_SELECT: &str = "SELECT sources.id AS source_id, \
count(messages.id) AS message_count, \
max(sources.last_updated) AS last_updated \
FROM sources LEFT JOIN messages ON messages.source_id = sources.id \
GROUP BY sources.id";

/// The full courier schema.
pub fn metadata() -> MetaData {
    MetaData::new(NamingConvention::default())
        .table(users())
        .table(sources())
        .table(messages())
        .table(replies())
        .table(reply_send_statuses())
        .table(draft_replies())
        .view(View::new("v_source_activity", SOURCE_ACTIVITY_SELECT))
}

fn id() -> Column {
    Column::new("id", ColumnType::Integer).primary_key()
}

fn flag(name: &str) -> Column {
    Column::new(name, ColumnType::Boolean)
        .not_null()
        .default("false")
}

fn users() -> Table {
    Table::new("users")
        .column(id())
        .column(Column::new("username", ColumnType::Varchar).not_null())
        .column(Column::new("firstname", ColumnType::Varchar))
        .column(Column::new("lastname", ColumnType::Varchar))
        .index(Index::on(&["username"]).unique())
}

fn sources() -> Table {
    Table::new("sources")
        .column(id())
        .column(Column::new("uuid", ColumnType::Varchar).not_null())
        .column(Column::new("journalist_designation", ColumnType::Varchar).not_null())
        .column(Column::new("last_updated", ColumnType::Timestamp))
        .column(flag("is_starred"))
        .column(
            Column::new("interaction_count", ColumnType::Integer)
                .not_null()
                .default("0"),
        )
        .index(Index::on(&["uuid"]).unique())
        .index(Index::on(&["last_updated"]))
}

fn messages() -> Table {
    Table::new("messages")
        .column(id())
        .column(
            Column::new("source_id", ColumnType::Integer)
                .not_null()
                .references("sources", "id"),
        )
        .column(Column::new("filename", ColumnType::Varchar).not_null())
        .column(Column::new("size", ColumnType::Integer).not_null())
        .column(flag("is_read"))
        .column(Column::new("file_counter", ColumnType::Integer).not_null())
}

fn replies() -> Table {
    Table::new("replies")
        .column(id())
        .column(
            Column::new("source_id", ColumnType::Integer)
                .not_null()
                .references("sources", "id"),
        )
        .column(Column::new("journalist_id", ColumnType::Integer).references("users", "id"))
        .column(Column::new("filename", ColumnType::Varchar).not_null())
        .column(Column::new("size", ColumnType::Integer))
        .index(Index::on(&["source_id"]))
}

fn reply_send_statuses() -> Table {
    Table::new("reply_send_statuses")
        .column(id())
        .column(Column::new("name", ColumnType::Varchar).not_null())
        .index(Index::on(&["name"]).unique())
}

fn draft_replies() -> Table {
    Table::new("draft_replies")
        .column(id())
        .column(Column::new("uuid", ColumnType::Varchar).not_null())
        .column(Column::new("created_at", ColumnType::Timestamp).not_null())
        .column(
            Column::new("source_id", ColumnType::Integer)
                .not_null()
                .references("sources", "id"),
        )
        .column(Column::new("journalist_id", ColumnType::Integer).references("users", "id"))
        .column(Column::new("file_counter", ColumnType::Integer).not_null())
        .column(Column::new("content", ColumnType::Varchar))
        .column(
            Column::new("send_status_id", ColumnType::Integer)
                .references("reply_send_statuses", "id"),
        )
        .index(Index::on(&["uuid"]).unique())
}

#[cfg(test)]
#[path = "courier_test.rs"]
mod tests;
