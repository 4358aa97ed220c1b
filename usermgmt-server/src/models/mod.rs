// File: usermgmt-server/src/models/mod.rs

//! View models: shape-limited projections handed to the client.

pub mod logs;
pub mod users;

pub use logs::{LogDetailsViewModel, LogIndexQuery, LogIndexViewModel, LogListItemViewModel};
pub use users::{
    IdQuery, UserForm, UserFormViewModel, UserListItemViewModel, UserListViewModel, UserLogsViewModel,
    ValidUser,
};
