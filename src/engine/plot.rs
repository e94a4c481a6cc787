//! Plot primitives: drawable point sets in three error representations.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Error representation of a plot primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorMode {
    /// Bare points, no error bars.
    None,
    /// One error per point and axis, drawn symmetrically.
    Symmetric,
    /// Independent low/high errors per point and axis.
    Asymmetric,
}

/// Line presentation attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Line color index.
    pub color: i32,
    /// Line style index.
    pub style: i32,
    /// Line width in pixels.
    pub width: i32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: 1,
            style: 1,
            width: 1,
        }
    }
}

/// Marker presentation attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Marker color index.
    pub color: i32,
    /// Marker glyph index.
    pub style: i32,
    /// Marker size multiplier.
    pub size: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: 1,
            style: 1,
            size: 1.0,
        }
    }
}

/// A drawable point set.
///
/// Coordinate and error buffers are fixed at construction; presentation
/// attributes and axis display ranges stay mutable for the primitive's
/// lifetime. Constructors expect all buffers to share the x buffer's length;
/// callers validate before constructing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotPrimitive {
    name: String,
    title: String,
    x_title: String,
    y_title: String,
    mode: ErrorMode,
    x: Vec<f64>,
    y: Vec<f64>,
    ex_low: Vec<f64>,
    ex_high: Vec<f64>,
    ey_low: Vec<f64>,
    ey_high: Vec<f64>,
    line: LineStyle,
    marker: MarkerStyle,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
    fit_params: Vec<f64>,
}

impl PlotPrimitive {
    fn base(mode: ErrorMode, x: &[f64], y: &[f64]) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Self {
            name: "Graph".to_string(),
            title: String::new(),
            x_title: String::new(),
            y_title: String::new(),
            mode,
            x: x.to_vec(),
            y: y.to_vec(),
            ex_low: Vec::new(),
            ex_high: Vec::new(),
            ey_low: Vec::new(),
            ey_high: Vec::new(),
            line: LineStyle::default(),
            marker: MarkerStyle::default(),
            x_range: None,
            y_range: None,
            fit_params: Vec::new(),
        }
    }

    /// Create a primitive with bare points.
    pub fn points(x: &[f64], y: &[f64]) -> Self {
        Self::base(ErrorMode::None, x, y)
    }

    /// Create a primitive with symmetric per-point errors.
    pub fn with_errors(x: &[f64], y: &[f64], ex: &[f64], ey: &[f64]) -> Self {
        debug_assert_eq!(ex.len(), x.len());
        debug_assert_eq!(ey.len(), x.len());
        let mut plot = Self::base(ErrorMode::Symmetric, x, y);
        plot.ex_low = ex.to_vec();
        plot.ex_high = ex.to_vec();
        plot.ey_low = ey.to_vec();
        plot.ey_high = ey.to_vec();
        plot
    }

    /// Create a primitive with independent low/high errors.
    pub fn with_asym_errors(
        x: &[f64],
        y: &[f64],
        exl: &[f64],
        exh: &[f64],
        eyl: &[f64],
        eyh: &[f64],
    ) -> Self {
        debug_assert!([exl, exh, eyl, eyh].iter().all(|e| e.len() == x.len()));
        let mut plot = Self::base(ErrorMode::Asymmetric, x, y);
        plot.ex_low = exl.to_vec();
        plot.ex_high = exh.to_vec();
        plot.ey_low = eyl.to_vec();
        plot.ey_high = eyh.to_vec();
        plot
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.x.len()
    }

    /// X coordinates.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Y coordinates.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Error representation of this primitive.
    pub fn mode(&self) -> ErrorMode {
        self.mode
    }

    /// Identity the primitive is written under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the primitive.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Primitive title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the primitive title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
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
    pub fn set_x_title(&mut self, title: impl Into<String>) {
        self.x_title = title.into();
    }

    /// Set the Y axis title.
    pub fn set_y_title(&mut self, title: impl Into<String>) {
        self.y_title = title.into();
    }

    /// Line presentation attributes.
    pub fn line(&self) -> LineStyle {
        self.line
    }

    /// Set the line presentation attributes.
    pub fn set_line(&mut self, line: LineStyle) {
        self.line = line;
    }

    /// Marker presentation attributes.
    pub fn marker(&self) -> MarkerStyle {
        self.marker
    }

    /// Set the marker presentation attributes.
    pub fn set_marker(&mut self, marker: MarkerStyle) {
        self.marker = marker;
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

    /// Render the primitive with the given draw option.
    pub fn draw(&self, option: &str) {
        debug!(
            "draw '{}': {} points, option '{}'",
            self.name,
            self.x.len(),
            option
        );
    }

    /// Fit a formula to the points, keeping the parameters on this primitive.
    ///
    /// Supported formulas: `pol0` (constant) and `pol1` (straight line),
    /// both by unweighted least squares.
    pub fn fit(&mut self, formula: &str, option: &str) {
        if self.x.is_empty() {
            warn!("fit '{formula}' skipped: no points");
            return;
        }
        let n = self.x.len() as f64;
        let sum_x: f64 = self.x.iter().sum();
        let sum_y: f64 = self.y.iter().sum();
        match formula {
            "pol0" => {
                self.fit_params = vec![sum_y / n];
            }
            "pol1" => {
                let sum_xx: f64 = self.x.iter().map(|v| v * v).sum();
                let sum_xy: f64 = self.x.iter().zip(&self.y).map(|(a, b)| a * b).sum();
                let denom = n * sum_xx - sum_x * sum_x;
                if denom == 0.0 {
                    warn!("fit 'pol1' skipped: degenerate x coordinates");
                    return;
                }
                let slope = (n * sum_xy - sum_x * sum_y) / denom;
                let intercept = (sum_y - slope * sum_x) / n;
                self.fit_params = vec![intercept, slope];
            }
            other => {
                warn!("unsupported fit formula '{other}'");
                return;
            }
        }
        debug!(
            "fit '{formula}' ({option}) on '{}': params {:?}",
            self.name, self.fit_params
        );
    }

    /// Parameters of the last successful fit, innermost order first.
    pub fn fit_params(&self) -> &[f64] {
        &self.fit_params
    }
}

/// Non-owning aggregate of plot primitives drawn together.
#[derive(Debug, Default)]
pub struct MultiPlot<'a> {
    entries: Vec<(&'a PlotPrimitive, String)>,
}

impl<'a> MultiPlot<'a> {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a primitive with a per-entry draw option.
    pub fn add(&mut self, plot: &'a PlotPrimitive, option: &str) {
        self.entries.push((plot, option.to_string()));
    }

    /// Number of registered primitives.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the aggregate is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render every registered primitive.
    pub fn draw(&self, option: &str) {
        debug!("draw multiplot: {} entries", self.entries.len());
        for (plot, entry_option) in &self.entries {
            let effective = if entry_option.is_empty() {
                option
            } else {
                entry_option
            };
            plot.draw(effective);
        }
    }
}
