//! Line chart of normalized series, rendered to an in-memory PNG.
//!
//! The layout mirrors a 9x6 inch figure at 100 dpi in the ggplot style: grey panel,
//! white grid, one colored polyline per ticker, monthly date ticks rotated 30 degrees
//! and a `Change (%)` y-axis label.

mod axis;
mod canvas;
mod glyphs;

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, Rgb, RgbImage};
use thiserror::Error;
use time::Date;
use tracing::debug;

use self::canvas::Canvas;
use crate::palette::PaletteColor;
use crate::series::NormalizedSeries;

pub use axis::{month_label, month_ticks, value_ticks};

pub const DEFAULT_WIDTH: u32 = 900;
pub const DEFAULT_HEIGHT: u32 = 600;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const PANEL: Rgb<u8> = Rgb([229, 229, 229]);
const GRID: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([77, 77, 77]);

const MARGIN_LEFT: i64 = 80;
const MARGIN_RIGHT: i64 = 24;
const MARGIN_TOP: i64 = 24;
const MARGIN_BOTTOM: i64 = 72;
const TICK_LENGTH: i64 = 4;
const Y_TICK_TARGET: usize = 6;
const X_LABEL_ANGLE_DEG: f64 = 30.0;
const Y_LABEL: &str = "Change (%)";

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart needs at least one non-empty series")]
    NoSeries,

    #[error("series '{ticker}' contains a non-finite value")]
    NonFiniteValue { ticker: String },

    #[error("chart is too small: {width}x{height}")]
    TooSmall { width: u32, height: u32 },

    #[error(transparent)]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
}

/// A series plus the color it is drawn in.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub color: PaletteColor,
    pub series: NormalizedSeries,
}

/// Renders [`ChartLine`]s into a PNG buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRenderer {
    width: u32,
    height: u32,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl ChartRenderer {
    pub fn new(width: u32, height: u32) -> Result<Self, ChartError> {
        let min_width = (MARGIN_LEFT + MARGIN_RIGHT) as u32 + 16;
        let min_height = (MARGIN_TOP + MARGIN_BOTTOM) as u32 + 16;
        if width < min_width || height < min_height {
            return Err(ChartError::TooSmall { width, height });
        }
        Ok(Self { width, height })
    }

    /// Draw every line onto one raster.
    pub fn render(&self, lines: &[ChartLine]) -> Result<RgbImage, ChartError> {
        let bounds = Bounds::of(lines)?;
        let plot = PlotArea {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            right: i64::from(self.width) - MARGIN_RIGHT,
            bottom: i64::from(self.height) - MARGIN_BOTTOM,
            bounds,
        };

        let mut canvas = Canvas::new(self.width, self.height, BACKGROUND);
        canvas.fill_rect(plot.left, plot.top, plot.right, plot.bottom, PANEL);
        draw_y_axis(&mut canvas, &plot);
        draw_x_axis(&mut canvas, &plot);

        for line in lines {
            let [r, g, b] = line.color.rgb;
            let color = Rgb([r, g, b]);
            let points = line
                .series
                .points
                .iter()
                .map(|(date, value)| plot.project(date.julian_day(), *value))
                .collect::<Vec<_>>();
            match points.as_slice() {
                [] => {}
                [single] => canvas.line(*single, *single, 2, color),
                _ => {
                    for pair in points.windows(2) {
                        canvas.line(pair[0], pair[1], 2, color);
                    }
                }
            }
        }

        debug!(
            width = self.width,
            height = self.height,
            lines = lines.len(),
            "rendered chart"
        );
        Ok(canvas.into_image())
    }

    /// Render and encode as PNG bytes.
    pub fn render_png(&self, lines: &[ChartLine]) -> Result<Vec<u8>, ChartError> {
        let image = self.render(lines)?;
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(buffer.into_inner())
    }
}

/// Standard (padded) base64 of a PNG buffer, as printed on stdout.
pub fn encode_base64(png: &[u8]) -> String {
    STANDARD.encode(png)
}

/// Inverse of [`encode_base64`]; tolerates surrounding whitespace.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, ChartError> {
    Ok(STANDARD.decode(text.trim())?)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    first_day: i32,
    last_day: i32,
    low: f64,
    high: f64,
}

impl Bounds {
    fn of(lines: &[ChartLine]) -> Result<Self, ChartError> {
        let mut bounds: Option<Self> = None;
        for line in lines {
            for (date, value) in &line.series.points {
                if !value.is_finite() {
                    return Err(ChartError::NonFiniteValue {
                        ticker: line.series.ticker.to_string(),
                    });
                }
                let day = date.julian_day();
                bounds = Some(match bounds {
                    None => Self {
                        first_day: day,
                        last_day: day,
                        low: *value,
                        high: *value,
                    },
                    Some(current) => Self {
                        first_day: current.first_day.min(day),
                        last_day: current.last_day.max(day),
                        low: current.low.min(*value),
                        high: current.high.max(*value),
                    },
                });
            }
        }

        let mut bounds = bounds.ok_or(ChartError::NoSeries)?;
        if bounds.first_day == bounds.last_day {
            bounds.first_day -= 1;
            bounds.last_day += 1;
        }
        let padding = if bounds.high > bounds.low {
            (bounds.high - bounds.low) * 0.05
        } else {
            1.0
        };
        bounds.low -= padding;
        bounds.high += padding;
        Ok(bounds)
    }
}

struct PlotArea {
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
    bounds: Bounds,
}

impl PlotArea {
    fn x_of(&self, day: i32) -> f64 {
        let span = f64::from(self.bounds.last_day - self.bounds.first_day);
        let offset = f64::from(day - self.bounds.first_day);
        self.left as f64 + offset / span * (self.right - self.left) as f64
    }

    fn y_of(&self, value: f64) -> f64 {
        let span = self.bounds.high - self.bounds.low;
        self.bottom as f64 - (value - self.bounds.low) / span * (self.bottom - self.top) as f64
    }

    fn project(&self, day: i32, value: f64) -> (f64, f64) {
        (self.x_of(day), self.y_of(value))
    }
}

fn draw_y_axis(canvas: &mut Canvas, plot: &PlotArea) {
    let ticks = value_ticks(plot.bounds.low, plot.bounds.high, Y_TICK_TARGET);
    let step = match ticks.as_slice() {
        [first, second, ..] => second - first,
        _ => 1.0,
    };

    for value in &ticks {
        let y = plot.y_of(*value);
        canvas.line((plot.left as f64, y), (plot.right as f64, y), 1, GRID);
        canvas.line(
            ((plot.left - TICK_LENGTH) as f64, y),
            (plot.left as f64, y),
            1,
            INK,
        );
        let label = axis::value_label(*value, step);
        let width = glyphs::text_width(&label) as f64;
        let origin = (
            (plot.left - TICK_LENGTH - 4) as f64 - width,
            y - (glyphs::GLYPH_HEIGHT / 2) as f64,
        );
        canvas.text(&label, origin, 0.0, 1, INK);
    }

    let label_width = (glyphs::text_width(Y_LABEL) * 2) as f64;
    let middle = (plot.top + plot.bottom) as f64 / 2.0;
    canvas.text(
        Y_LABEL,
        (16.0, middle + label_width / 2.0),
        std::f64::consts::FRAC_PI_2,
        2,
        INK,
    );
}

fn draw_x_axis(canvas: &mut Canvas, plot: &PlotArea) {
    let first = Date::from_julian_day(plot.bounds.first_day);
    let last = Date::from_julian_day(plot.bounds.last_day);
    let (Ok(first), Ok(last)) = (first, last) else {
        return;
    };

    let angle = X_LABEL_ANGLE_DEG.to_radians();
    let (sin, cos) = angle.sin_cos();
    for tick in month_ticks(first, last) {
        let x = plot.x_of(tick.to_julian_day());
        canvas.line((x, plot.top as f64), (x, plot.bottom as f64), 1, GRID);
        canvas.line(
            (x, plot.bottom as f64),
            (x, (plot.bottom + TICK_LENGTH) as f64),
            1,
            INK,
        );

        // Anchor the end of the rotated label just below the tick mark.
        let label = month_label(tick);
        let width = glyphs::text_width(&label) as f64;
        let anchor = (x, (plot.bottom + TICK_LENGTH + 4) as f64);
        let origin = (anchor.0 - width * cos, anchor.1 + width * sin);
        canvas.text(&label, origin, angle, 1, INK);
    }
}
