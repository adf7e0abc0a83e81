use std::path::PathBuf;

use anyhow::Context;

use crate::data::Sample;
use crate::math::regression::RegressionResult;
use crate::plot::export::{FigureFormat, figure_path};
use crate::plot::figure::{Figure, FigureStyle};
use crate::schema::v1::FigureReportV1;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub stem: String,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub show: bool,
    pub write_json: bool,
    pub write_tsv: bool,
    pub style: FigureStyle,
    pub samples: Vec<Sample>,
    pub annotated: Vec<String>,
    pub regression: Option<RegressionResult>,
    pub fit_line: Vec<(f64, f64)>,
    pub figures: Vec<PathBuf>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: Option<FigureReportV1>,
}

impl Ctx {
    pub fn new(
        out_dir: PathBuf,
        stem: &str,
        dpi: f64,
        show: bool,
        write_json: bool,
        write_tsv: bool,
    ) -> Self {
        let json_path = out_dir.join(format!("{}.json", stem));
        let tsv_path = out_dir.join(format!("{}.tsv", stem));
        Self {
            show,
            write_json,
            write_tsv,
            style: FigureStyle::with_dpi(dpi),
            samples: Vec::new(),
            annotated: Vec::new(),
            regression: None,
            fit_line: Vec::new(),
            figures: Vec::new(),
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                stem: stem.to_string(),
                json_path,
                tsv_path,
            },
            report: None,
        }
    }

    pub fn figure_path(&self, format: FigureFormat) -> PathBuf {
        figure_path(&self.output.out_dir, &self.output.stem, format)
    }

    pub fn figure(&self) -> anyhow::Result<Figure<'_>> {
        let regression = self.regression.as_ref().context("regression missing")?;
        Ok(Figure {
            samples: &self.samples,
            annotated: &self.annotated,
            regression,
            style: self.style,
        })
    }
}
