//! Strata core library.
//!
//! Two randomized data-preparation utilities:
//!
//! - [`DegreeGraphBuilder`] grows a simple undirected graph whose node degrees
//!   approximate a [`DegreeSequence`].
//! - [`StratifiedGroupSplitter`] deals grouped, labelled samples into
//!   class-stratified splits without dividing any group.
//!
//! Both accept an explicit seed or a caller-supplied [`rand::Rng`], and both
//! report through `tracing`.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod degree_graph;
mod error;
pub mod sampling;
mod split;

#[cfg(test)]
mod test_utils;

pub use crate::{
    degree_graph::{DegreeGraph, DegreeGraphBuilder, DegreeSequence, Edge},
    error::{ErrorKind, Result, StrataError, StrataErrorCode},
    split::{SplitResult, StratifiedGroupSplitter},
};
