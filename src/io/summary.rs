use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::math::regression::RegressionResult;
use crate::plot::export::FigureFormat;

pub fn format_statistics(r: &RegressionResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Slope: {}\n", r.slope));
    out.push_str(&format!("Intercept: {}\n", r.intercept));
    out.push_str(&format!("R-squared: {}\n", r.r_squared));
    out.push_str(&format!("P-value: {}\n", r.p_value));
    out.push_str(&format!("Standard Error of the Estimate: {}\n", r.std_err));
    out
}

pub fn format_saved_files(stem: &str) -> String {
    let names: Vec<String> = FigureFormat::ALL
        .iter()
        .map(|f| format!("{}.{}", stem, f.extension()))
        .collect();
    format!("Plot saved as: {}, {}, and {}\n", names[0], names[1], names[2])
}

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let regression = ctx.regression.as_ref().context("regression missing")?;
    let mut out = format_statistics(regression);
    out.push('\n');
    out.push_str(&format_saved_files(&ctx.output.stem));
    Ok(out)
}
