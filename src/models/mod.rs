//! Data-transfer models for envhub.
//!
//! Wire shapes exchanged with clients as camelCase JSON. These are plain
//! data declarations; validation and lifecycle belong to the caller.

mod environment;
mod filter;

pub use environment::{
    ConnectionTest, CreateEnvironment, Environment, EnvironmentStatus, UpdateEnvironment,
};
pub use filter::{
    CreateEnvironmentFilter, EnvironmentFilter, GroupBy, StatusFilter, TagMode,
    UpdateEnvironmentFilter,
};
