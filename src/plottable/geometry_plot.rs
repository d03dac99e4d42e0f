//! Rendering of categorized line-segment geometry.
use super::{
    category_colors::palette_color, create_2d_chart, draw_legend, plot_err, plotting_area_size,
    AxLims, CategoryColorMap, Plottable, DEFAULT_FIG_SIZE,
};
use crate::{error::MeResult, geometry::Segment};
use log::warn;
use plotters::{
    backend::DrawingBackend,
    chart::ChartContext,
    coord::{cartesian::Cartesian2d, types::RangedCoordf64, Shift},
    element::PathElement,
    prelude::DrawingArea,
    series::LineSeries,
    style::{Color, RGBColor},
};

/// A plot of 2D segment geometry with one color and one legend entry per category.
///
/// Both axes are scaled equally so that the geometry is not distorted.
pub struct GeometryPlot<'a> {
    segments: &'a [Segment],
    title: String,
    colors: CategoryColorMap,
    fig_size: (u32, u32),
}
impl<'a> GeometryPlot<'a> {
    /// Creates a new [`GeometryPlot`] of the given segments.
    #[must_use]
    pub fn new(segments: &'a [Segment], title: &str) -> Self {
        Self {
            segments,
            title: title.to_owned(),
            colors: CategoryColorMap::from_segments(segments),
            fig_size: DEFAULT_FIG_SIZE,
        }
    }
    /// Sets the figure size in pixels.
    #[must_use]
    pub fn with_fig_size(mut self, fig_size: (u32, u32)) -> Self {
        self.fig_size = fig_size;
        self
    }
    /// Returns the title of this [`GeometryPlot`].
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
    /// Returns the category colors used by this [`GeometryPlot`].
    #[must_use]
    pub const fn colors(&self) -> &CategoryColorMap {
        &self.colors
    }
    /// Returns the legend entries (distinct categories in first-seen order).
    #[must_use]
    pub fn legend_entries(&self) -> &[String] {
        self.colors.legend_entries()
    }
    /// Returns the segments paired with their color and their (optional) legend label.
    ///
    /// Only the first segment of each category carries a label.
    #[must_use]
    pub fn styled_segments(&self) -> Vec<(&Segment, RGBColor, Option<&str>)> {
        let mut labelled = CategoryColorMap::default();
        self.segments
            .iter()
            .map(|s| {
                let (idx, first) = labelled.insert(s.category());
                let label = if first { Some(s.category()) } else { None };
                (s, palette_color(idx), label)
            })
            .collect()
    }
    /// Returns the x and y axis limits covering all segments with an equal aspect ratio for a
    /// plotting area of the given pixel size.
    ///
    /// The axis with the smaller data span per pixel is expanded symmetrically.
    #[must_use]
    pub fn equal_aspect_bounds(&self, plot_area: (u32, u32)) -> (AxLims, AxLims) {
        let xs: Vec<f64> = self.segments.iter().flat_map(|s| [s.a().x, s.b().x]).collect();
        let ys: Vec<f64> = self.segments.iter().flat_map(|s| [s.a().y, s.b().y]).collect();
        let unit = AxLims {
            min: -0.5,
            max: 0.5,
        };
        let mut x_bounds = AxLims::finite_from_values(&xs).unwrap_or(unit);
        let mut y_bounds = AxLims::finite_from_values(&ys).unwrap_or(unit);
        let units_per_pixel_x = x_bounds.range() / f64::from(plot_area.0.max(1));
        let units_per_pixel_y = y_bounds.range() / f64::from(plot_area.1.max(1));
        if units_per_pixel_x > units_per_pixel_y {
            y_bounds.expand_lim_range_by_factor(units_per_pixel_x / units_per_pixel_y);
        } else {
            x_bounds.expand_lim_range_by_factor(units_per_pixel_y / units_per_pixel_x);
        }
        (x_bounds, y_bounds)
    }
    /// Creates the chart with equal scaled axes, measured on the actual plotting area of `root`.
    fn create_chart<'b, B: DrawingBackend>(
        &self,
        root: &'b DrawingArea<B, Shift>,
    ) -> MeResult<ChartContext<'b, B, Cartesian2d<RangedCoordf64, RangedCoordf64>>> {
        let (x_bounds, y_bounds) = self.equal_aspect_bounds(plotting_area_size(root, &self.title)?);
        create_2d_chart(root, &self.title, x_bounds, y_bounds, ("X", "Y"))
    }
}

impl Plottable for GeometryPlot<'_> {
    fn fig_size(&self) -> (u32, u32) {
        self.fig_size
    }
    fn draw<B: DrawingBackend>(&self, root: &DrawingArea<B, Shift>) -> MeResult<()> {
        let mut chart = self.create_chart(root)?;
        for (segment, color, label) in self.styled_segments() {
            let anno = chart
                .draw_series(LineSeries::new(
                    [(segment.a().x, segment.a().y), (segment.b().x, segment.b().y)],
                    color.stroke_width(2),
                ))
                .map_err(plot_err)?;
            if let Some(label) = label {
                anno.label(label).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(4))
                });
            }
        }
        if self.colors.is_empty() {
            warn!("no segments to render. Plot stays empty.");
        } else {
            draw_legend(&mut chart)?;
        }
        Ok(())
    }
}

/// Render the segments with the given title onto a caller-owned drawing area.
///
/// Each category gets the next color of the categorical palette on its first appearance and a
/// single legend entry. The drawing area is presented before returning.
///
/// # Returns
///
/// The category colors used, whose [`CategoryColorMap::legend_entries`] are the legend entries
/// in drawing order.
///
/// # Errors
///
/// This function returns an error if the drawing backend fails.
pub fn render<B: DrawingBackend>(
    segments: &[Segment],
    title: &str,
    root: &DrawingArea<B, Shift>,
) -> MeResult<CategoryColorMap> {
    let plot = GeometryPlot::new(segments, title);
    plot.draw(root)?;
    root.present().map_err(plot_err)?;
    Ok(plot.colors)
}
