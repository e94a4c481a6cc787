//! Value-semantics histogram wrapper.
//!
//! A [`Histogram`] owns exactly one heap-allocated histogram primitive,
//! detached from the ambient directory so the wrapper alone governs its
//! lifetime. Copying rebuilds a fresh primitive from the cached binning and
//! accumulates the source's bin contents into it; the copy's name gets a
//! `_copy` suffix to keep engine identities distinct.

use std::path::Path;

use tracing::warn;

use crate::engine::{Axis, EngineObject, FileMode, HistPrimitive, KeyedFile};
use crate::error::{LarmorError, Result};

/// Dimensionality of a [`Histogram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistKind {
    /// One X axis.
    OneDimensional,
    /// X and Y axes.
    TwoDimensional,
}

/// A binned counter with value semantics.
#[derive(Debug)]
pub struct Histogram {
    kind: HistKind,
    name: String,
    title: String,
    x_bins: Axis,
    y_bins: Option<Axis>,
    hist: Box<HistPrimitive>,
}

impl Histogram {
    /// Create a histogram from binning parameters.
    ///
    /// `y_bins` is required for [`HistKind::TwoDimensional`] and must have a
    /// strictly positive bin count; it is ignored for one-dimensional
    /// histograms.
    pub fn new(
        kind: HistKind,
        name: &str,
        title: &str,
        x_bins: Axis,
        y_bins: Option<Axis>,
    ) -> Result<Self> {
        if x_bins.bins == 0 {
            return Err(LarmorError::invalid_config(
                "number of X bins must be positive",
            ));
        }
        let y_bins = match kind {
            HistKind::OneDimensional => None,
            HistKind::TwoDimensional => {
                let y = y_bins.ok_or_else(|| {
                    LarmorError::invalid_config(
                        "two-dimensional histogram requires Y binning parameters",
                    )
                })?;
                if y.bins == 0 {
                    return Err(LarmorError::invalid_config(
                        "number of Y bins must be positive for a two-dimensional histogram",
                    ));
                }
                Some(y)
            }
        };
        let hist = Self::make_hist(name, title, x_bins, y_bins);
        Ok(Self {
            kind,
            name: name.to_string(),
            title: title.to_string(),
            x_bins,
            y_bins,
            hist,
        })
    }

    fn make_hist(name: &str, title: &str, x_bins: Axis, y_bins: Option<Axis>) -> Box<HistPrimitive> {
        let mut hist = match y_bins {
            Some(y) => HistPrimitive::new_2d(name, title, x_bins, y),
            None => HistPrimitive::new_1d(name, title, x_bins),
        };
        hist.detach();
        hist.set_x_title("X Axis");
        if y_bins.is_some() {
            hist.set_y_title("Y Axis");
        }
        Box::new(hist)
    }

    /// Dimensionality of this histogram.
    pub fn kind(&self) -> HistKind {
        self.kind
    }

    /// Histogram name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Histogram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// X binning parameters.
    pub fn x_bins(&self) -> Axis {
        self.x_bins
    }

    /// Y binning parameters, present only for two-dimensional histograms.
    pub fn y_bins(&self) -> Option<Axis> {
        self.y_bins
    }

    /// The owned histogram primitive.
    pub fn hist(&self) -> &HistPrimitive {
        &self.hist
    }

    /// Mutable access to the owned primitive for engine-level operations.
    pub fn hist_mut(&mut self) -> &mut HistPrimitive {
        &mut self.hist
    }

    /// Rename the histogram.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        self.hist.set_name(name);
    }

    /// Set the histogram title.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.hist.set_title(title);
    }

    /// Set the X display range.
    pub fn set_x_range(&mut self, min: f64, max: f64) {
        self.x_bins.min = min;
        self.x_bins.max = max;
        self.hist.set_x_range(min, max);
    }

    /// Set the Y display range; only valid for two-dimensional histograms.
    pub fn set_y_range(&mut self, min: f64, max: f64) -> Result<()> {
        match self.y_bins.as_mut() {
            Some(y) => {
                y.min = min;
                y.max = max;
                self.hist.set_y_range(min, max);
                Ok(())
            }
            None => Err(LarmorError::invalid_config(
                "Y range can only be set on a two-dimensional histogram",
            )),
        }
    }

    /// Fill with a single coordinate; two-dimensional histograms take 0 for
    /// the Y coordinate.
    pub fn fill(&mut self, x: f64) {
        self.hist.fill(x);
    }

    /// Fill with two coordinates; one-dimensional histograms ignore `y`.
    pub fn fill_xy(&mut self, x: f64, y: f64) {
        match self.kind {
            HistKind::OneDimensional => self.hist.fill(x),
            HistKind::TwoDimensional => self.hist.fill_xy(x, y),
        }
    }

    /// Write the owned primitive into a keyed-object container.
    pub fn save_to_file(&self, path: impl AsRef<Path>, mode: FileMode) -> Result<()> {
        let path = path.as_ref();
        let mut file = KeyedFile::open(path, mode)?;
        if file.is_zombie() {
            return Err(LarmorError::InvalidFile {
                path: path.to_path_buf(),
            });
        }
        file.put(self.hist.name(), EngineObject::Hist(self.hist.duplicate()))?;
        file.close()
    }

    /// Replace this histogram with the named object from a container.
    ///
    /// The dimensionality, name, title, and binning parameters are all
    /// re-derived from the loaded object; the previously owned primitive is
    /// released. Loading an object of the other dimensionality switches the
    /// variant tag and is logged at warn level.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>, name: &str) -> Result<()> {
        let path = path.as_ref();
        let mut file = KeyedFile::open(path, FileMode::Read)?;
        if file.is_zombie() {
            return Err(LarmorError::InvalidFile {
                path: path.to_path_buf(),
            });
        }
        let loaded = file
            .get(name)
            .and_then(EngineObject::as_hist)
            .ok_or_else(|| LarmorError::not_found(name))?;

        let kind = if loaded.is_two_dim() {
            HistKind::TwoDimensional
        } else {
            HistKind::OneDimensional
        };
        if kind != self.kind {
            warn!(
                "histogram '{}' switched variant on load from {}",
                name,
                path.display()
            );
        }
        self.kind = kind;
        self.name = loaded.name().to_string();
        self.title = loaded.title().to_string();
        self.x_bins = loaded.x_axis();
        self.y_bins = loaded.y_axis();
        self.hist = Box::new(loaded.duplicate());

        file.close()
    }
}

impl Clone for Histogram {
    fn clone(&self) -> Self {
        let name = format!("{}_copy", self.name);
        let mut hist = Self::make_hist(&name, &self.title, self.x_bins, self.y_bins);
        hist.accumulate(&self.hist);
        Self {
            kind: self.kind,
            name,
            title: self.title.clone(),
            x_bins: self.x_bins,
            y_bins: self.y_bins,
            hist,
        }
    }
}
