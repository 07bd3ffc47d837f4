//! Application layer: service orchestration.

pub mod service;
