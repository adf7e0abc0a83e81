use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;
use crate::plot::figure::fit_label;
use crate::schema::v1::{FigureMeta, FigureReportV1, SampleRow};

pub fn build_report(ctx: &Ctx) -> Result<FigureReportV1> {
    let regression = ctx.regression.as_ref().context("regression missing")?;
    if ctx.fit_line.len() != ctx.samples.len() {
        bail!(
            "fit line length mismatch: {} != {}",
            ctx.fit_line.len(),
            ctx.samples.len()
        );
    }

    let annotated: HashSet<&str> = ctx.annotated.iter().map(String::as_str).collect();
    let samples = ctx
        .samples
        .iter()
        .zip(&ctx.fit_line)
        .map(|(s, (_, fitted))| SampleRow {
            patient_id: s.patient_id.clone(),
            apobec_rate_average: s.apobec_rate_average,
            time_gained: s.time_gained,
            log10_rate: s.apobec_rate_average.log10(),
            log10_time: s.time_gained.log10(),
            fitted_time: *fitted,
            annotated: annotated.contains(s.patient_id.as_str()),
        })
        .collect();

    let files = ctx
        .figures
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .collect();

    Ok(FigureReportV1 {
        tool: "apobec-scatter".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        samples,
        regression: *regression,
        fit_label: fit_label(regression),
        annotated: ctx.annotated.clone(),
        figure: FigureMeta {
            dpi: ctx.style.dpi,
            width_in: ctx.style.width_in,
            height_in: ctx.style.height_in,
            files,
        },
    })
}

pub fn write_json(path: &Path, report: &FigureReportV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
