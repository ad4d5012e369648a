//! Benchmark support crate for strata.
//!
//! Provides seeded synthetic degree sequences and labelled samples for the
//! Criterion benchmarks of the graph builder and the splitter.

pub mod error;
pub mod params;
pub mod source;
