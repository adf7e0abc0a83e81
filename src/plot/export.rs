use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::prelude::*;
use tracing::info;
use usvg::{PostProcessingSteps, TreeParsing, TreePostProc, fontdb};

use crate::plot::figure::{Figure, draw_figure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureFormat {
    Pdf,
    Svg,
    Png,
}

impl FigureFormat {
    pub const ALL: [FigureFormat; 3] = [FigureFormat::Pdf, FigureFormat::Svg, FigureFormat::Png];

    pub fn extension(self) -> &'static str {
        match self {
            FigureFormat::Pdf => "pdf",
            FigureFormat::Svg => "svg",
            FigureFormat::Png => "png",
        }
    }
}

pub fn figure_path(out_dir: &Path, stem: &str, format: FigureFormat) -> PathBuf {
    out_dir.join(format!("{}.{}", stem, format.extension()))
}

/// Writes `<stem>.pdf`, `<stem>.svg` and `<stem>.png`, replacing existing files.
/// Stops at the first failure; files written before it are left in place.
pub fn export_figure(out_dir: &Path, stem: &str, figure: &Figure<'_>) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(FigureFormat::ALL.len());
    for format in FigureFormat::ALL {
        let path = figure_path(out_dir, stem, format);
        match format {
            FigureFormat::Pdf => write_pdf(&path, figure)?,
            FigureFormat::Svg => write_svg(&path, figure)?,
            FigureFormat::Png => write_png(&path, figure)?,
        }
        let bytes = fs::metadata(&path)
            .with_context(|| format!("failed to stat {}", path.display()))?
            .len();
        info!(path = %path.display(), bytes, "figure_written");
        written.push(path);
    }
    Ok(written)
}

pub fn write_png(path: &Path, figure: &Figure<'_>) -> Result<()> {
    let root = BitMapBackend::new(path, figure.style.canvas_size()).into_drawing_area();
    draw_figure(root, figure).with_context(|| format!("failed to render {}", path.display()))
}

pub fn write_svg(path: &Path, figure: &Figure<'_>) -> Result<()> {
    let root = SVGBackend::new(path, figure.style.canvas_size()).into_drawing_area();
    draw_figure(root, figure).with_context(|| format!("failed to render {}", path.display()))
}

pub fn write_pdf(path: &Path, figure: &Figure<'_>) -> Result<()> {
    let svg = render_svg_string(figure)?;
    let pdf = svg_to_pdf(&svg, figure.style.dpi)?;
    fs::write(path, pdf).with_context(|| format!("failed to write {}", path.display()))
}

pub fn render_svg_string(figure: &Figure<'_>) -> Result<String> {
    let mut buf = String::new();
    {
        let root =
            SVGBackend::with_string(&mut buf, figure.style.canvas_size()).into_drawing_area();
        draw_figure(root, figure)?;
    }
    Ok(buf)
}

/// Page size follows `dpi`, so a canvas of `w` pixels becomes `w / dpi` inches.
pub fn svg_to_pdf(svg: &str, dpi: f64) -> Result<Vec<u8>> {
    let mut tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .context("failed to parse rendered SVG")?;
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    tree.postprocess(PostProcessingSteps::default(), &db);

    let options = svg2pdf::Options {
        dpi: dpi as f32,
        ..svg2pdf::Options::default()
    };
    Ok(svg2pdf::convert_tree(&tree, options))
}
