//! The embedded plotting engine.
//!
//! This module provides the engine-side primitives the wrapper types are
//! built on: drawable plot primitives in three error representations,
//! binned histogram primitives in one or two dimensions, the ambient
//! directory new histograms attach to, and the keyed-object container used
//! for persistence.

pub mod directory;

mod file;
mod hist;
mod plot;

pub use file::{EngineObject, FileMode, KeyedFile};
pub use hist::{Axis, HistPrimitive};
pub use plot::{ErrorMode, LineStyle, MarkerStyle, MultiPlot, PlotPrimitive};
