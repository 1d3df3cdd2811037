//! labelkit - label inference for change requests and label selector
//! matching for discovered resources.
//!
//! Two independent halves share the [`labels`] vocabulary:
//!
//! - [`infer`]: derive labels (backport, documentation, helm) from a change
//!   request's branch name and changed files
//! - [`selector`]: decide which resources satisfy a label selector and
//!   filter collections without failing the whole batch

pub mod app;
pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod infer;
pub mod labels;
pub mod pipeline;
pub mod selector;
pub mod test_utils;

pub use error::{LabelError, Result};
