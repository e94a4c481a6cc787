//! Histogram primitives: binned counters in one or two dimensions.

use serde::{Deserialize, Serialize};

use super::directory;

/// Fixed-width binning for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// Number of bins, excluding under/overflow.
    pub bins: usize,
    /// Lower edge of the first bin.
    pub min: f64,
    /// Upper edge of the last bin.
    pub max: f64,
}

impl Axis {
    /// Create an axis with `bins` equal-width bins over `[min, max)`.
    pub fn new(bins: usize, min: f64, max: f64) -> Self {
        Self { bins, min, max }
    }

    /// Storage cell for a coordinate: 0 is underflow, `bins + 1` overflow.
    fn cell(&self, v: f64) -> usize {
        if self.bins == 0 {
            return self.bins + 1;
        }
        if v < self.min {
            0
        } else if v >= self.max {
            self.bins + 1
        } else {
            let frac = (v - self.min) / (self.max - self.min);
            1 + ((frac * self.bins as f64) as usize).min(self.bins - 1)
        }
    }

    fn cells(&self) -> usize {
        self.bins + 2
    }
}

/// A binned counter with a reference-style identity.
///
/// New primitives attach themselves to the ambient directory under their
/// name; callers that want sole control of the lifetime call [`detach`]
/// right after construction. Storage includes under/overflow cells on each
/// axis.
///
/// [`detach`]: HistPrimitive::detach
#[derive(Debug, Serialize, Deserialize)]
pub struct HistPrimitive {
    name: String,
    title: String,
    x_axis: Axis,
    y_axis: Option<Axis>,
    x_title: String,
    y_title: String,
    contents: Vec<f64>,
    entries: f64,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
    #[serde(skip)]
    attached: bool,
}

impl HistPrimitive {
    /// Create a one-dimensional primitive.
    pub fn new_1d(name: &str, title: &str, x_axis: Axis) -> Self {
        directory::register(name);
        Self {
            name: name.to_string(),
            title: title.to_string(),
            x_axis,
            y_axis: None,
            x_title: String::new(),
            y_title: String::new(),
            contents: vec![0.0; x_axis.cells()],
            entries: 0.0,
            x_range: None,
            y_range: None,
            attached: true,
        }
    }

    /// Create a two-dimensional primitive.
    pub fn new_2d(name: &str, title: &str, x_axis: Axis, y_axis: Axis) -> Self {
        directory::register(name);
        Self {
            name: name.to_string(),
            title: title.to_string(),
            x_axis,
            y_axis: Some(y_axis),
            x_title: String::new(),
            y_title: String::new(),
            contents: vec![0.0; x_axis.cells() * y_axis.cells()],
            entries: 0.0,
            x_range: None,
            y_range: None,
            attached: true,
        }
    }

    /// Release this primitive from the ambient directory.
    pub fn detach(&mut self) {
        if self.attached {
            directory::forget(&self.name);
            self.attached = false;
        }
    }

    /// Primitive name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the primitive, moving any directory entry with it.
    pub fn set_name(&mut self, name: &str) {
        if self.attached {
            directory::forget(&self.name);
            directory::register(name);
        }
        self.name = name.to_string();
    }

    /// Primitive title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the primitive title.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// X axis binning.
    pub fn x_axis(&self) -> Axis {
        self.x_axis
    }

    /// Y axis binning, present only for two-dimensional primitives.
    pub fn y_axis(&self) -> Option<Axis> {
        self.y_axis
    }

    /// Whether this primitive is two-dimensional.
    pub fn is_two_dim(&self) -> bool {
        self.y_axis.is_some()
    }

    /// X axis title.
    pub fn x_title(&self) -> &str {
        &self.x_title
    }

    /// Y axis title.
    pub fn y_title(&self) -> &str {
        &self.y_title
    }

    /// Set the X axis title.
    pub fn set_x_title(&mut self, title: &str) {
        self.x_title = title.to_string();
    }

    /// Set the Y axis title.
    pub fn set_y_title(&mut self, title: &str) {
        self.y_title = title.to_string();
    }

    /// Explicit X display range, if one has been set.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.x_range
    }

    /// Explicit Y display range, if one has been set.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.y_range
    }

    /// Set the X display range.
    pub fn set_x_range(&mut self, min: f64, max: f64) {
        self.x_range = Some((min, max));
    }

    /// Set the Y display range.
    pub fn set_y_range(&mut self, min: f64, max: f64) {
        self.y_range = Some((min, max));
    }

    /// Total number of fill calls.
    pub fn entries(&self) -> f64 {
        self.entries
    }

    /// Fill with a single coordinate; a second coordinate of 0 is assumed
    /// for two-dimensional primitives.
    pub fn fill(&mut self, x: f64) {
        self.fill_xy(x, 0.0);
    }

    /// Fill with two coordinates; the second is ignored for one-dimensional
    /// primitives.
    pub fn fill_xy(&mut self, x: f64, y: f64) {
        let cell = match self.y_axis {
            Some(y_axis) => self.x_axis.cell(x) + self.x_axis.cells() * y_axis.cell(y),
            None => self.x_axis.cell(x),
        };
        self.contents[cell] += 1.0;
        self.entries += 1.0;
    }

    /// Content of an in-range bin of a one-dimensional primitive
    /// (0-based, under/overflow excluded).
    pub fn bin_content(&self, ix: usize) -> f64 {
        debug_assert!(self.y_axis.is_none());
        debug_assert!(ix < self.x_axis.bins);
        self.contents[ix + 1]
    }

    /// Content of an in-range bin of a two-dimensional primitive
    /// (0-based on each axis, under/overflow excluded).
    pub fn bin_content_xy(&self, ix: usize, iy: usize) -> f64 {
        debug_assert!(ix < self.x_axis.bins);
        let y_axis = self.y_axis.expect("bin_content_xy on a 1-D primitive");
        debug_assert!(iy < y_axis.bins);
        self.contents[(ix + 1) + self.x_axis.cells() * (iy + 1)]
    }

    /// Bin-wise addition of another primitive with the same bin counts.
    pub fn accumulate(&mut self, other: &Self) {
        debug_assert_eq!(self.contents.len(), other.contents.len());
        for (cell, value) in self.contents.iter_mut().zip(&other.contents) {
            *cell += value;
        }
        self.entries += other.entries;
    }

    /// Detached deep copy of this primitive.
    pub fn duplicate(&self) -> Self {
        Self {
            name: self.name.clone(),
            title: self.title.clone(),
            x_axis: self.x_axis,
            y_axis: self.y_axis,
            x_title: self.x_title.clone(),
            y_title: self.y_title.clone(),
            contents: self.contents.clone(),
            entries: self.entries,
            x_range: self.x_range,
            y_range: self.y_range,
            attached: false,
        }
    }
}

impl Drop for HistPrimitive {
    fn drop(&mut self) {
        if self.attached {
            directory::forget(&self.name);
        }
    }
}
