use serde::{Deserialize, Serialize};

use crate::math::regression::RegressionResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRow {
    pub patient_id: String,
    pub apobec_rate_average: f64,
    pub time_gained: f64,
    pub log10_rate: f64,
    pub log10_time: f64,
    pub fitted_time: f64,
    pub annotated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureMeta {
    pub dpi: f64,
    pub width_in: f64,
    pub height_in: f64,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub samples: Vec<SampleRow>,
    pub regression: RegressionResult,
    pub fit_label: String,
    pub annotated: Vec<String>,
    pub figure: FigureMeta,
}
