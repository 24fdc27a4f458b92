//! Diagram model persistence.

pub mod service;

pub use service::{CreateModelRequest, ModelService};
