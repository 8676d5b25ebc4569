#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod chat;
mod model;

pub use crate::chat::traits::*;
pub use crate::model::Model;

/// Re-export of commonly used dependencies.
pub mod prelude;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
