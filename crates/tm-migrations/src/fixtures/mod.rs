//! Data checks for migrations that move rows.
//!
//! Each registered revision has a pair of fixtures. The upgrade fixture
//! loads rows one revision before, and after the upgrade checks they were
//! transformed. The downgrade fixture loads rows at the revision, and after
//! stepping back checks what survived.
//!
//! Fixtures are built fresh for every test through the constructors in
//! [`registry`].

pub mod m003_message_file_counter;
pub mod m004_draft_replies;
pub(crate) mod seed;

use duckdb::Connection;

/// Rows loaded before an upgrade and checked after it
pub trait UpgradeFixture {
    fn load_data(&mut self, conn: &Connection) -> anyhow::Result<()>;
    fn check_upgrade(&self, conn: &Connection) -> anyhow::Result<()>;
}

/// Rows loaded before a downgrade and checked after it
pub trait DowngradeFixture {
    fn load_data(&mut self, conn: &Connection) -> anyhow::Result<()>;
    fn check_downgrade(&self, conn: &Connection) -> anyhow::Result<()>;
}

/// Constructors for one revision's fixtures
pub struct FixturePair {
    pub revision: &'static str,
    pub upgrade: fn() -> Box<dyn UpgradeFixture>,
    pub downgrade: fn() -> Box<dyn DowngradeFixture>,
}

static REGISTRY: &[FixturePair] = &[
    FixturePair {
        revision: crate::versions::m003_message_file_counter::REVISION,
        upgrade: m003_message_file_counter::upgrade,
        downgrade: m003_message_file_counter::downgrade,
    },
    FixturePair {
        revision: crate::versions::m004_draft_replies::REVISION,
        upgrade: m004_draft_replies::upgrade,
        downgrade: m004_draft_replies::downgrade,
    },
];

/// Every revision with data fixtures
pub fn registry() -> &'static [FixturePair] {
    REGISTRY
}
