use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::data;
use crate::pipeline::Stage;
use crate::plot::figure::annotation_targets;

pub struct Stage1Samples;

impl Stage1Samples {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Samples {
    fn name(&self) -> &'static str {
        "stage1_samples"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        data::validate_series(
            &data::PATIENTS,
            &data::APOBEC_RATE_AVERAGE,
            &data::TIME_GAINED,
        )?;
        let samples = data::samples();
        data::validate_samples(&samples)?;
        if samples.len() < 3 {
            bail!("need at least 3 samples for a fit, got {}", samples.len());
        }

        let annotated = data::annotated_patients();
        let found = annotation_targets(&samples, &annotated).len();
        if found != annotated.len() {
            // Labels for absent patients are simply not drawn.
            ctx.warnings.push(format!(
                "{} of {} annotated patients not present in the dataset",
                annotated.len() - found,
                annotated.len()
            ));
        }

        info!(
            samples = samples.len(),
            annotated = found,
            "samples_loaded"
        );
        ctx.samples = samples;
        ctx.annotated = annotated;
        Ok(())
    }
}
