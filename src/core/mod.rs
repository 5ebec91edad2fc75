//! Core pattern — deferred outputs, declaration context, wire types.

pub mod context;
pub mod output;
pub mod time;
pub mod types;
