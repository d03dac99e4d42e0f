//! Line plots of sampled (x, y) curves.
use super::{
    category_colors::palette_color, create_2d_chart, draw_legend, plot_err, AxLims, Plottable,
};
use crate::error::MeResult;
use log::warn;
use plotters::{
    backend::DrawingBackend,
    coord::Shift,
    element::PathElement,
    prelude::DrawingArea,
    series::LineSeries,
    style::{Color, RGBAColor},
};

/// A single curve of a [`CurvePlot`].
#[derive(Clone, Debug)]
pub struct CurveSeries {
    data: Vec<(f64, f64)>,
    color: RGBAColor,
    label: Option<String>,
}
impl CurveSeries {
    /// Creates a new [`CurveSeries`].
    #[must_use]
    pub const fn new(data: Vec<(f64, f64)>, color: RGBAColor, label: Option<String>) -> Self {
        Self { data, color, label }
    }
    /// Returns the data points of this [`CurveSeries`].
    #[must_use]
    pub fn data(&self) -> &[(f64, f64)] {
        &self.data
    }
    /// Returns the color of this [`CurveSeries`].
    #[must_use]
    pub const fn color(&self) -> RGBAColor {
        self.color
    }
    /// Returns the label of this [`CurveSeries`].
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Plot of one or more curves sharing the same axes.
#[derive(Clone, Debug)]
pub struct CurvePlot {
    title: String,
    x_label: String,
    y_label: String,
    series: Vec<CurveSeries>,
}
impl CurvePlot {
    /// Creates a new (empty) [`CurvePlot`].
    #[must_use]
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.to_owned(),
            x_label: x_label.to_owned(),
            y_label: y_label.to_owned(),
            series: Vec::new(),
        }
    }
    /// Adds a curve to this [`CurvePlot`].
    pub fn add_series(&mut self, series: CurveSeries) -> &mut Self {
        self.series.push(series);
        self
    }
    /// Adds a curve from separate x and y values using the next palette color.
    pub fn add_xy(&mut self, x: &[f64], y: &[f64], label: Option<String>) -> &mut Self {
        let color = palette_color(self.series.len()).to_rgba();
        let data = x.iter().copied().zip(y.iter().copied()).collect();
        self.add_series(CurveSeries::new(data, color, label))
    }
    /// Returns the curves of this [`CurvePlot`].
    #[must_use]
    pub fn series(&self) -> &[CurveSeries] {
        &self.series
    }
    /// Returns the x and y axis limits spanning all finite values of all curves.
    #[must_use]
    pub fn bounds(&self) -> (AxLims, AxLims) {
        let xs: Vec<f64> = self.series.iter().flat_map(|s| s.data.iter().map(|p| p.0)).collect();
        let ys: Vec<f64> = self.series.iter().flat_map(|s| s.data.iter().map(|p| p.1)).collect();
        let unit = AxLims {
            min: -0.5,
            max: 0.5,
        };
        (
            AxLims::finite_from_values(&xs).unwrap_or(unit),
            AxLims::finite_from_values(&ys).unwrap_or(unit),
        )
    }
}

impl Plottable for CurvePlot {
    fn draw<B: DrawingBackend>(&self, root: &DrawingArea<B, Shift>) -> MeResult<()> {
        let (x_bounds, y_bounds) = self.bounds();
        let mut chart = create_2d_chart(
            root,
            &self.title,
            x_bounds,
            y_bounds,
            (self.x_label.as_str(), self.y_label.as_str()),
        )?;
        let mut label_flag = false;
        for series in &self.series {
            let color = series.color;
            let anno = chart
                .draw_series(LineSeries::new(
                    series.data.iter().copied().filter(|p| p.0.is_finite() && p.1.is_finite()),
                    color.stroke_width(2),
                ))
                .map_err(plot_err)?;
            if let Some(label) = &series.label {
                label_flag = true;
                anno.label(label).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(4))
                });
            }
        }
        if self.series.is_empty() {
            warn!("No plot series defined! Plot stays empty.");
        }
        if label_flag {
            draw_legend(&mut chart)?;
        }
        Ok(())
    }
}
