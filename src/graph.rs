//! Value-semantics graph wrapper.
//!
//! A [`Graph`] owns exactly one plot primitive. Copying a graph never shares
//! the primitive: the copy rebuilds one from the stored coordinate arrays and
//! then replicates the source primitive's presentation attributes, so the two
//! entities can be styled independently afterwards.

use std::path::Path;

use crate::engine::{
    EngineObject, FileMode, KeyedFile, LineStyle, MarkerStyle, MultiPlot, PlotPrimitive,
};
use crate::error::{LarmorError, Result};

/// Draw option requesting axes, points, and a connecting line.
pub const DEFAULT_DRAW_OPTION: &str = "APL";

const DEFAULT_MARKER_GLYPH: i32 = 20;
const DEFAULT_LINE_WIDTH: i32 = 2;

/// Error representation of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// Bare points.
    Plain,
    /// Symmetric per-point errors.
    SymmetricErrors,
    /// Independent low/high per-point errors.
    AsymmetricErrors,
}

/// Per-point error arrays, present only for the matching variant.
#[derive(Debug, Clone)]
enum ErrorBars {
    None,
    Symmetric {
        ex: Vec<f64>,
        ey: Vec<f64>,
    },
    Asymmetric {
        exl: Vec<f64>,
        exh: Vec<f64>,
        eyl: Vec<f64>,
        eyh: Vec<f64>,
    },
}

/// A drawable curve with value semantics.
///
/// Coordinate data is fixed at construction; presentation metadata and the
/// owned primitive's style stay mutable.
#[derive(Debug)]
pub struct Graph {
    x: Vec<f64>,
    y: Vec<f64>,
    errors: ErrorBars,
    title: String,
    x_title: String,
    y_title: String,
    line: LineStyle,
    marker: MarkerStyle,
    plot: PlotPrimitive,
}

fn check_len(what: &str, expected: usize, actual: usize) -> Result<()> {
    if actual != expected {
        return Err(LarmorError::shape_mismatch(what, expected, actual));
    }
    Ok(())
}

impl Graph {
    /// Create a plain graph from index-aligned coordinate arrays.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        Self::build(x, y, ErrorBars::None)
    }

    /// Create a graph with symmetric per-point errors.
    pub fn with_errors(x: Vec<f64>, y: Vec<f64>, ex: Vec<f64>, ey: Vec<f64>) -> Result<Self> {
        Self::build(x, y, ErrorBars::Symmetric { ex, ey })
    }

    /// Create a graph with independent low/high per-point errors.
    pub fn with_asym_errors(
        x: Vec<f64>,
        y: Vec<f64>,
        exl: Vec<f64>,
        exh: Vec<f64>,
        eyl: Vec<f64>,
        eyh: Vec<f64>,
    ) -> Result<Self> {
        Self::build(x, y, ErrorBars::Asymmetric { exl, exh, eyl, eyh })
    }

    fn build(x: Vec<f64>, y: Vec<f64>, errors: ErrorBars) -> Result<Self> {
        let n = x.len();
        check_len("y", n, y.len())?;
        match &errors {
            ErrorBars::None => {}
            ErrorBars::Symmetric { ex, ey } => {
                check_len("ex", n, ex.len())?;
                check_len("ey", n, ey.len())?;
            }
            ErrorBars::Asymmetric { exl, exh, eyl, eyh } => {
                check_len("exl", n, exl.len())?;
                check_len("exh", n, exh.len())?;
                check_len("eyl", n, eyl.len())?;
                check_len("eyh", n, eyh.len())?;
            }
        }

        let title = String::new();
        let x_title = "X Axis".to_string();
        let y_title = "Y Axis".to_string();
        let line = LineStyle {
            width: DEFAULT_LINE_WIDTH,
            ..LineStyle::default()
        };
        let marker = MarkerStyle {
            style: DEFAULT_MARKER_GLYPH,
            ..MarkerStyle::default()
        };
        let plot = Self::make_plot(&x, &y, &errors, &title, &x_title, &y_title, line, marker);

        Ok(Self {
            x,
            y,
            errors,
            title,
            x_title,
            y_title,
            line,
            marker,
            plot,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn make_plot(
        x: &[f64],
        y: &[f64],
        errors: &ErrorBars,
        title: &str,
        x_title: &str,
        y_title: &str,
        line: LineStyle,
        marker: MarkerStyle,
    ) -> PlotPrimitive {
        let mut plot = match errors {
            ErrorBars::None => PlotPrimitive::points(x, y),
            ErrorBars::Symmetric { ex, ey } => PlotPrimitive::with_errors(x, y, ex, ey),
            ErrorBars::Asymmetric { exl, exh, eyl, eyh } => {
                PlotPrimitive::with_asym_errors(x, y, exl, exh, eyl, eyh)
            }
        };
        plot.set_title(title);
        plot.set_x_title(x_title);
        plot.set_y_title(y_title);
        plot.set_line(line);
        plot.set_marker(marker);
        plot
    }

    /// Error representation of this graph.
    pub fn kind(&self) -> GraphKind {
        match self.errors {
            ErrorBars::None => GraphKind::Plain,
            ErrorBars::Symmetric { .. } => GraphKind::SymmetricErrors,
            ErrorBars::Asymmetric { .. } => GraphKind::AsymmetricErrors,
        }
    }

    /// The owned plot primitive.
    pub fn plot(&self) -> &PlotPrimitive {
        &self.plot
    }

    /// Mutable access to the owned primitive for engine-level operations,
    /// such as setting explicit axis display ranges.
    pub fn plot_mut(&mut self) -> &mut PlotPrimitive {
        &mut self.plot
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.x.len()
    }

    /// Graph title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the graph title.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.plot.set_title(title);
    }

    /// Set both axis titles.
    pub fn set_axis_titles(&mut self, x_title: &str, y_title: &str) {
        self.x_title = x_title.to_string();
        self.y_title = y_title.to_string();
        self.plot.set_x_title(x_title);
        self.plot.set_y_title(y_title);
    }

    /// Set the line color, style, and width.
    pub fn set_line(&mut self, color: i32, style: i32, width: i32) {
        self.line = LineStyle {
            color,
            style,
            width,
        };
        self.plot.set_line(self.line);
    }

    /// Set the marker color, glyph, and size.
    pub fn set_marker(&mut self, color: i32, style: i32, size: f64) {
        self.marker = MarkerStyle { color, style, size };
        self.plot.set_marker(self.marker);
    }

    /// Render the graph with the given draw option.
    ///
    /// See [`DEFAULT_DRAW_OPTION`] for the usual choice.
    pub fn draw(&self, option: &str) {
        self.plot.draw(option);
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
        file.put(self.plot.name(), EngineObject::Plot(self.plot.clone()))?;
        file.close()
    }

    /// Register the owned primitive into an aggregate without giving up
    /// ownership.
    pub fn add_to_multi<'a>(&'a self, multi: &mut MultiPlot<'a>, option: &str) {
        multi.add(&self.plot, option);
    }

    /// Fit a formula to the points; results stay on the owned primitive.
    pub fn fit(&mut self, formula: &str, option: &str) {
        self.plot.fit(formula, option);
    }
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        // Rebuild the primitive from the stored arrays, then take the style
        // and any explicit display ranges from the source primitive itself.
        let mut plot = Self::make_plot(
            &self.x,
            &self.y,
            &self.errors,
            &self.title,
            &self.x_title,
            &self.y_title,
            self.plot.line(),
            self.plot.marker(),
        );
        if let Some((min, max)) = self.plot.x_range() {
            plot.set_x_range(min, max);
        }
        if let Some((min, max)) = self.plot.y_range() {
            plot.set_y_range(min, max);
        }
        Self {
            x: self.x.clone(),
            y: self.y.clone(),
            errors: self.errors.clone(),
            title: self.title.clone(),
            x_title: self.x_title.clone(),
            y_title: self.y_title.clone(),
            line: self.line,
            marker: self.marker,
            plot,
        }
    }
}
