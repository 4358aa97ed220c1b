// File: usermgmt-common/src/models/mod.rs

pub mod user;
pub mod log;

pub use user::{User, UserRelation};
pub use log::{Log, LogRelation};

/// A record type that can live in a keyed table.
///
/// Identity `0` means "not yet assigned"; the store hands out a fresh id on insert.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);

    /// Drops navigation fields so only the flat row gets stored.
    fn detach(&mut self) {}
}
