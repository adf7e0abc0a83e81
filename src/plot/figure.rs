//! Scatter, annotation and fit-line drawing on log-log axes.
//!
//! Everything here is generic over the plotters backend so the same drawing
//! code produces the PNG, the SVG and the SVG that is later turned into PDF.

use std::collections::HashSet;

use anyhow::{Result, bail};
use plotters::coord::Shift;
use plotters::coord::combinators::WithKeyPoints;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::data::Sample;
use crate::math::regression::{RegressionResult, fitted_line};
use crate::plot::ticks::{format_log_tick, major_ticks, minor_ticks, padded_log_range};

pub const DARK_VIOLET: RGBColor = RGBColor(148, 0, 211);
pub const X_LABEL: &str = "Component of mutation rate attributable to APOBEC";
pub const Y_LABEL: &str = "Time gained";

const AXIS_MARGIN: f64 = 0.05;
const CHART_MARGIN_PT: f64 = 6.0;
const MAJOR_TICK_PT: f64 = 3.5;
const MINOR_TICK_PT: f64 = 2.0;
// Extra pixels kept clear around annotation labels.
const LABEL_SLACK_PX: f64 = 4.0;

pub const MIN_CANVAS_PX: u32 = 64;
pub const MAX_CANVAS_PX: u32 = 8192;

pub type LogAxis = WithKeyPoints<LogCoord<f64>>;
pub type FigureChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<LogAxis, LogAxis>>;

/// Physical figure settings. Sizes in points are converted with `dpi`.
#[derive(Debug, Clone, Copy)]
pub struct FigureStyle {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
    pub font_pt: f64,
    pub marker_pt: f64,
    pub line_pt: f64,
    pub annotation_offset_pt: f64,
    pub color: RGBColor,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width_in: 6.4,
            height_in: 4.8,
            dpi: 200.0,
            font_pt: 14.0,
            marker_pt: 3.0,
            line_pt: 1.5,
            annotation_offset_pt: 10.0,
            color: DARK_VIOLET,
        }
    }
}

impl FigureStyle {
    pub fn with_dpi(dpi: f64) -> Self {
        Self {
            dpi,
            ..Self::default()
        }
    }

    pub fn pixels(&self, pt: f64) -> i32 {
        (pt * self.dpi / 72.0).round().max(1.0) as i32
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi).round() as u32,
            (self.height_in * self.dpi).round() as u32,
        )
    }

    /// Rejects resolutions whose canvas is degenerate or too large to rasterise.
    pub fn check_canvas(&self) -> Result<()> {
        let (w, h) = self.canvas_size();
        if w.min(h) < MIN_CANVAS_PX || w.max(h) > MAX_CANVAS_PX {
            bail!(
                "--dpi {} gives a {}x{} px canvas; each side must be within {}..={} px",
                self.dpi,
                w,
                h,
                MIN_CANVAS_PX,
                MAX_CANVAS_PX
            );
        }
        Ok(())
    }

    pub fn margin_px(&self) -> i32 {
        self.pixels(CHART_MARGIN_PT)
    }

    pub fn x_label_area_px(&self) -> i32 {
        self.pixels(2.6 * self.font_pt)
    }

    pub fn y_label_area_px(&self) -> i32 {
        self.pixels(3.4 * self.font_pt)
    }

    /// Width and height of the plotting area, inside margins and label areas.
    pub fn plot_area_px(&self) -> (f64, f64) {
        let (w, h) = self.canvas_size();
        let m = 2 * self.margin_px();
        (
            f64::from(w as i32 - m - self.y_label_area_px()),
            f64::from(h as i32 - m - self.x_label_area_px()),
        )
    }

    pub fn font(&self) -> FontDesc<'static> {
        FontDesc::new(
            FontFamily::SansSerif,
            self.pixels(self.font_pt) as f64,
            FontStyle::Normal,
        )
    }
}

/// Everything needed to draw one figure.
#[derive(Debug, Clone, Copy)]
pub struct Figure<'a> {
    pub samples: &'a [Sample],
    pub annotated: &'a [String],
    pub regression: &'a RegressionResult,
    pub style: FigureStyle,
}

pub fn render_scatter<'a, DB: DrawingBackend + 'a>(
    root: &'a DrawingArea<DB, Shift>,
    samples: &[Sample],
    annotated: &[String],
    style: &FigureStyle,
) -> Result<FigureChart<'a, DB>>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let ((x_lo, x_hi), (y_lo, y_hi)) = axis_ranges(root, samples, annotated, style)?;

    let x_axis = (x_lo..x_hi)
        .log_scale()
        .with_key_points(major_ticks(x_lo, x_hi));
    let y_axis = (y_lo..y_hi)
        .log_scale()
        .with_key_points(major_ticks(y_lo, y_hi));

    let mut chart = ChartBuilder::on(root)
        .margin(style.margin_px())
        .x_label_area_size(style.x_label_area_px())
        .y_label_area_size(style.y_label_area_px())
        .build_cartesian_2d(x_axis, y_axis)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .set_all_tick_mark_size(style.pixels(MAJOR_TICK_PT))
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .axis_desc_style(style.font())
        .label_style(style.font())
        .x_label_formatter(&|v| format_log_tick(*v))
        .y_label_formatter(&|v| format_log_tick(*v))
        .axis_style(BLACK)
        .draw()?;
    chart.plotting_area().draw(&Rectangle::new(
        [(x_lo, y_lo), (x_hi, y_hi)],
        BLACK.stroke_width(1),
    ))?;
    draw_minor_ticks(root, &chart, style)?;

    let radius = style.pixels(style.marker_pt);
    chart.draw_series(samples.iter().map(|s| {
        Circle::new(
            (s.apobec_rate_average, s.time_gained),
            radius,
            style.color.filled(),
        )
    }))?;

    Ok(chart)
}

/// Indices of the samples whose id is in `annotated`, in sample order.
pub fn annotation_targets(samples: &[Sample], annotated: &[String]) -> Vec<usize> {
    let wanted: HashSet<&str> = annotated.iter().map(String::as_str).collect();
    samples
        .iter()
        .enumerate()
        .filter(|(_, s)| wanted.contains(s.patient_id.as_str()))
        .map(|(i, _)| i)
        .collect()
}

pub fn annotate<'a, DB: DrawingBackend + 'a>(
    chart: &mut FigureChart<'a, DB>,
    samples: &[Sample],
    annotated: &[String],
    style: &FigureStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let offset = style.pixels(style.annotation_offset_pt);
    let text_style = style
        .font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    chart.draw_series(annotation_targets(samples, annotated).into_iter().map(|i| {
        let s = &samples[i];
        EmptyElement::at((s.apobec_rate_average, s.time_gained))
            + Text::new(s.patient_id.clone(), (0, -offset), text_style.clone())
    }))?;
    Ok(())
}

pub fn fit_label(regression: &RegressionResult) -> String {
    format!(
        "Fit: y = 10^({:.2} * log(x) + {:.2})\np-value = {:.3}",
        regression.slope, regression.intercept, regression.p_value
    )
}

pub fn draw_fit_line<'a, DB: DrawingBackend + 'a>(
    chart: &mut FigureChart<'a, DB>,
    samples: &[Sample],
    regression: &RegressionResult,
    style: &FigureStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let line_style = style
        .color
        .stroke_width(style.pixels(style.line_pt) as u32);
    let dash = style.pixels(3.7 * style.line_pt);
    let gap = style.pixels(1.6 * style.line_pt);
    let swatch = style.pixels(2.0 * style.font_pt);

    let label = fit_label(regression);
    let mut rows = label.lines();

    // Legends are single-line; extra label rows ride on empty series.
    chart
        .draw_series(DashedLineSeries::new(
            fitted_line(samples, regression),
            dash,
            gap,
            line_style,
        ))?
        .label(rows.next().unwrap_or_default())
        .legend(move |(x, y)| {
            DashedPathElement::new(vec![(x, y), (x + swatch, y)], dash, gap, line_style)
        });
    for row in rows {
        chart
            .draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())?
            .label(row)
            .legend(|(x, y)| PathElement::new(vec![(x, y)], TRANSPARENT));
    }
    Ok(())
}

pub fn draw_legend<'a, DB: DrawingBackend + 'a>(
    chart: &mut FigureChart<'a, DB>,
    style: &FigureStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(style.font())
        .legend_area_size(style.pixels(2.4 * style.font_pt))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()?;
    Ok(())
}

pub fn draw_figure<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    figure: &Figure<'_>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    {
        let mut chart = render_scatter(&root, figure.samples, figure.annotated, &figure.style)?;
        annotate(&mut chart, figure.samples, figure.annotated, &figure.style)?;
        draw_fit_line(&mut chart, figure.samples, figure.regression, &figure.style)?;
        draw_legend(&mut chart, &figure.style)?;
    }
    root.present()?;
    Ok(())
}

/// Short outward tick marks at the minor log subdivisions of both axes.
fn draw_minor_ticks<'a, DB: DrawingBackend + 'a>(
    root: &DrawingArea<DB, Shift>,
    chart: &FigureChart<'a, DB>,
    style: &FigureStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let len = style.pixels(MINOR_TICK_PT);
    let x = chart.x_range();
    let y = chart.y_range();
    let is_minor = |v: &f64| (v.log10() - v.log10().round()).abs() > 1e-9;

    for v in minor_ticks(x.start, x.end).into_iter().filter(is_minor) {
        let (px, py) = chart.backend_coord(&(v, y.start));
        root.draw(&PathElement::new(vec![(px, py), (px, py + len)], BLACK))?;
    }
    for v in minor_ticks(y.start, y.end).into_iter().filter(is_minor) {
        let (px, py) = chart.backend_coord(&(x.start, v));
        root.draw(&PathElement::new(vec![(px - len, py), (px, py)], BLACK))?;
    }
    Ok(())
}

/// A `(lo, hi)` pair of log10 bounds.
pub type LogRange = (f64, f64);

/// Axis ranges in data units. Starts from the padded sample extent, then
/// widens until every annotation label fits inside the plotting area.
fn axis_ranges<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    samples: &[Sample],
    annotated: &[String],
    style: &FigureStyle,
) -> Result<((f64, f64), (f64, f64))>
where
    DB::ErrorType: 'static,
{
    let x = axis_range(samples.iter().map(|s| s.apobec_rate_average))?;
    let y = axis_range(samples.iter().map(|s| s.time_gained))?;
    let mut x = (x.0.log10(), x.1.log10());
    let mut y = (y.0.log10(), y.1.log10());

    let (plot_w, plot_h) = style.plot_area_px();
    let font_px = f64::from(style.pixels(style.font_pt));
    let above = f64::from(style.pixels(style.annotation_offset_pt))
        + 1.25 * font_px
        + LABEL_SLACK_PX;
    let text_style: TextStyle = style.font().into();

    let mut labels = Vec::new();
    for i in annotation_targets(samples, annotated) {
        let s = &samples[i];
        let (w, _) = root.estimate_text_size(&s.patient_id, &text_style)?;
        let half = f64::from(w) / 2.0 + LABEL_SLACK_PX;
        labels.push((s.apobec_rate_average.log10(), s.time_gained.log10(), half));
    }

    // Widening for one label can shrink room for another, so settle over a few passes.
    for _ in 0..4 {
        for &(lx, ly, half) in &labels {
            x = make_room(x, lx, half, half, plot_w)?;
            y = make_room(y, ly, 0.0, above, plot_h)?;
        }
    }

    Ok((
        (10f64.powf(x.0), 10f64.powf(x.1)),
        (10f64.powf(y.0), 10f64.powf(y.1)),
    ))
}

/// Widens the log10 interval `range` until `anchor` has at least `below_px`
/// of the axis before it and `above_px` after it, on an axis `span_px` long.
pub fn make_room(
    range: LogRange,
    anchor: f64,
    below_px: f64,
    above_px: f64,
    span_px: f64,
) -> Result<LogRange> {
    let fb = below_px / span_px;
    let fa = above_px / span_px;
    if !span_px.is_finite() || span_px <= 0.0 || fb + fa >= 1.0 {
        bail!(
            "labels need {} px on an axis of {} px; raise --dpi",
            below_px + above_px,
            span_px
        );
    }

    let (mut lo, mut hi) = range;
    for _ in 0..64 {
        let need_hi = (anchor - fa * lo) / (1.0 - fa);
        let need_lo = (anchor - fb * hi) / (1.0 - fb);
        if need_hi <= hi && need_lo >= lo {
            break;
        }
        hi = hi.max(need_hi);
        lo = lo.min(need_lo);
    }
    Ok((lo, hi))
}

fn axis_range(values: impl Iterator<Item = f64>) -> Result<(f64, f64)> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() || min <= 0.0 {
        bail!("log axis needs finite positive values, got range {}..{}", min, max);
    }
    Ok(padded_log_range(min, max, AXIS_MARGIN))
}
