#![warn(missing_docs)]
//! Trait and helpers for generating (x/y) plots.
//!
//! Every plot draws onto an explicit [`DrawingArea`] handed over by the caller. The
//! [`Plottable::to_plot`] convenience function creates such an area for a file or an image
//! buffer, depending on the chosen [`PltBackEnd`].

pub mod ax_lims;
pub mod category_colors;
pub mod curve_plot;
pub mod geometry_plot;

pub use ax_lims::AxLims;
pub use category_colors::CategoryColorMap;
pub use curve_plot::{CurvePlot, CurveSeries};
pub use geometry_plot::{render, GeometryPlot};

use crate::error::{MeResult, MothEyeError};
use image::RgbImage;
use plotters::{
    backend::{DrawingBackend, PixelFormat, RGBPixel},
    chart::{ChartBuilder, ChartContext, SeriesLabelPosition},
    coord::{cartesian::Cartesian2d, types::RangedCoordf64, Shift},
    prelude::{BitMapBackend, DrawingArea, IntoDrawingArea, SVGBackend},
    style::{Color, IntoFont, BLACK, WHITE},
};
use std::path::Path;

/// Default figure size in pixels.
pub const DEFAULT_FIG_SIZE: (u32, u32) = (1600, 1000);

const CHART_MARGIN: u32 = 30;
const CAPTION_FONT_SIZE: u32 = 40;
const X_LABEL_AREA_SIZE: u32 = 65;
const Y_LABEL_AREA_SIZE: u32 = 100;

///Enum to describe which type of plotting backend should be used
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PltBackEnd {
    /// `BitmapBackend`. Used to create .png, .bmp, .jpg
    #[default]
    Bitmap,
    /// `SVGBackend`. Used to create .svg
    SVG,
    /// Buffered Backend. Used to buffer the image data into an image buffer.
    Buf,
}
impl PltBackEnd {
    /// Determine the backend from the extension of a file path.
    ///
    /// # Errors
    ///
    /// This function returns an error if the extension is missing or not supported.
    pub fn from_path(path: &Path) -> MeResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("png" | "bmp" | "jpg" | "jpeg") => Ok(Self::Bitmap),
            Some("svg") => Ok(Self::SVG),
            _ => Err(MothEyeError::Plot(format!(
                "unsupported plot file extension of {}",
                path.display()
            ))),
        }
    }
    fn check_file_ext_compatibility(&self, path: &Path) -> MeResult<()> {
        if *self == Self::Buf {
            return Ok(());
        }
        let ext_backend = Self::from_path(path)?;
        if ext_backend == *self {
            Ok(())
        } else {
            Err(MothEyeError::Plot(format!(
                "file extension of {} does not match the {self:?} backend",
                path.display()
            )))
        }
    }
}

/// Trait for adding the possibility to generate a (x/y) plot of an element.
pub trait Plottable {
    /// Returns the size of the figure in pixels: (width, height)
    fn fig_size(&self) -> (u32, u32) {
        DEFAULT_FIG_SIZE
    }
    /// Draw the plot onto the given drawing area.
    ///
    /// The drawing area is owned by the caller. This function does not present the area.
    /// # Errors
    /// This function returns an error if the underlying drawing backend fails.
    fn draw<B: DrawingBackend>(&self, root: &DrawingArea<B, Shift>) -> MeResult<()>;

    /// This method handles the plot creation into a file or an image buffer.
    /// # Attributes
    /// - `f_path`: path to the file (ignored for [`PltBackEnd::Buf`])
    /// - `backend`: used backend to create the plot. See [`PltBackEnd`]
    /// # Returns
    /// This method returns `None` if a file was written and `Some(RgbImage)` for [`PltBackEnd::Buf`]
    /// # Errors
    /// This method returns an error if
    /// - the file extension does not fit the backend
    /// - drawing or writing the plot fails
    /// - the image buffer is too small
    fn to_plot(&self, f_path: &Path, backend: PltBackEnd) -> MeResult<Option<RgbImage>> {
        backend.check_file_ext_compatibility(f_path)?;
        let fig_size = self.fig_size();
        match backend {
            PltBackEnd::Bitmap => {
                let root = BitMapBackend::new(f_path, fig_size).into_drawing_area();
                self.draw(&root)?;
                root.present().map_err(plot_err)?;
                Ok(None)
            }
            PltBackEnd::SVG => {
                let root = SVGBackend::new(f_path, fig_size).into_drawing_area();
                self.draw(&root)?;
                root.present().map_err(plot_err)?;
                Ok(None)
            }
            PltBackEnd::Buf => {
                let mut image_buffer =
                    vec![0; (fig_size.0 * fig_size.1) as usize * RGBPixel::PIXEL_SIZE];
                {
                    let root =
                        BitMapBackend::with_buffer(&mut image_buffer, fig_size).into_drawing_area();
                    self.draw(&root)?;
                    root.present().map_err(plot_err)?;
                }
                let img = RgbImage::from_raw(fig_size.0, fig_size.1, image_buffer)
                    .ok_or_else(|| MothEyeError::Plot("image buffer size too small".into()))?;
                Ok(Some(img))
            }
        }
    }
}

/// Maps a plotters drawing error into a [`MothEyeError::Plot`].
pub(crate) fn plot_err<E: std::error::Error>(e: E) -> MothEyeError {
    MothEyeError::Plot(e.to_string())
}

/// Chart layout shared by all plots: margin, caption and label areas.
fn chart_builder<'a, B: DrawingBackend>(
    root: &'a DrawingArea<B, Shift>,
    title: &str,
) -> ChartBuilder<'a, 'static, B> {
    let mut builder = ChartBuilder::on(root);
    builder
        .margin(CHART_MARGIN)
        .caption(title, ("sans-serif", f64::from(CAPTION_FONT_SIZE)).into_font())
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE);
    builder
}

/// Pixel size of the plotting area of a chart created by [`create_2d_chart`] on the given root.
///
/// The size is taken from a chart laid out on `root`, so the caption is drawn onto it. Fill the
/// area afterwards.
/// # Errors
/// This function returns an error if the chart cannot be laid out.
pub(crate) fn plotting_area_size<B: DrawingBackend>(
    root: &DrawingArea<B, Shift>,
    title: &str,
) -> MeResult<(u32, u32)> {
    let chart = chart_builder(root, title)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)
        .map_err(plot_err)?;
    Ok(chart.plotting_area().dim_in_pixel())
}

/// Creates a white 2D chart with caption, grid and axis descriptions.
pub(crate) fn create_2d_chart<'a, B: DrawingBackend>(
    root: &'a DrawingArea<B, Shift>,
    title: &str,
    x_bounds: AxLims,
    y_bounds: AxLims,
    axis_desc: (&str, &str),
) -> MeResult<ChartContext<'a, B, Cartesian2d<RangedCoordf64, RangedCoordf64>>> {
    root.fill(&WHITE).map_err(plot_err)?;
    let mut chart = chart_builder(root, title)
        .build_cartesian_2d(x_bounds.min..x_bounds.max, y_bounds.min..y_bounds.max)
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .x_desc(axis_desc.0)
        .y_desc(axis_desc.1)
        .x_labels(10)
        .y_labels(10)
        .label_style(("sans-serif", 24.0).into_font())
        .draw()
        .map_err(plot_err)?;
    Ok(chart)
}

/// Draws the legend of all labelled series of the chart.
pub(crate) fn draw_legend<'a, B: DrawingBackend + 'a>(
    chart: &mut ChartContext<'a, B, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
) -> MeResult<()> {
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .legend_area_size(50)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 24.0).into_font())
        .draw()
        .map_err(plot_err)
}
