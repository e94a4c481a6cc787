//! Larmor - value-semantics graphs and histograms for scientific analysis.
//!
//! Larmor wraps the reference-style primitives of its embedded plotting
//! engine in two entity types with plain value semantics: [`Graph`] for
//! drawable curves in three error representations, and [`Histogram`] for
//! binned counters in one or two dimensions. Each entity exclusively owns
//! one engine primitive; copying rebuilds the primitive instead of sharing
//! it, and persistence goes through a keyed-object container.
//!
//! # Features
//!
//! - Plain, symmetric-error, and asymmetric-error graphs
//! - 1-D and 2-D histograms detached from the engine's ambient directory
//! - Deep copies that replicate engine-side style and display ranges
//! - Keyed-object container persistence with read and recreate modes
//!
//! # Example
//!
//! ```
//! use larmor::Graph;
//!
//! let mut graph = Graph::new(vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0])?;
//! graph.set_title("Linear");
//! graph.set_axis_titles("X", "Y");
//! assert_eq!(graph.point_count(), 3);
//! # Ok::<(), larmor::LarmorError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod engine;
pub mod error;
pub mod graph;
pub mod histogram;

pub use error::{LarmorError, Result};
pub use graph::{Graph, GraphKind, DEFAULT_DRAW_OPTION};
pub use histogram::{HistKind, Histogram};
