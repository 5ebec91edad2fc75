//! Resource declarations — one module per resource kind.

pub mod storage;
pub mod workspace;
