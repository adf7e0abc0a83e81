use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::schema::v1::FigureReportV1;

pub const HEADER: &str =
    "patient_id\tapobec_rate_average\ttime_gained\tlog10_rate\tlog10_time\tfitted_time\tannotated";

pub fn write_tsv(path: &Path, report: &FigureReportV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "{}", HEADER)?;
    for row in &report.samples {
        writeln!(
            w,
            "{}\t{:e}\t{}\t{:.6}\t{:.6}\t{:.6}\t{}",
            row.patient_id,
            row.apobec_rate_average,
            row.time_gained,
            row.log10_rate,
            row.log10_time,
            row.fitted_time,
            u8::from(row.annotated)
        )?;
    }
    w.flush()?;
    Ok(())
}
