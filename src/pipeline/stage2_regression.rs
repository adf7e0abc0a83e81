use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::math::regression::{compute_regression, fitted_line};
use crate::pipeline::Stage;

pub struct Stage2Regression;

impl Stage2Regression {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Regression {
    fn name(&self) -> &'static str {
        "stage2_regression"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.samples.is_empty() {
            bail!("samples not loaded before regression");
        }
        let regression = compute_regression(&ctx.samples)?;
        info!(
            slope = regression.slope,
            intercept = regression.intercept,
            r_squared = regression.r_squared,
            p_value = regression.p_value,
            "regression_ready"
        );
        ctx.fit_line = fitted_line(&ctx.samples, &regression);
        ctx.regression = Some(regression);
        Ok(())
    }
}
