use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_samples;
pub mod stage2_regression;
pub mod stage3_figure;
pub mod stage4_display;
pub mod stage5_output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let total = Instant::now();
        let names: Vec<&str> = self.stages.iter().map(|s| s.name()).collect();
        info!(stages = self.stages.len(), order = ?names, "pipeline started");
        for (idx, stage) in self.stages.iter().enumerate() {
            let start = Instant::now();
            info!(stage = stage.name(), step = idx + 1, "stage started");
            if let Err(err) = stage.run(ctx) {
                warn!(
                    stage = stage.name(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    error = %err,
                    "stage failed"
                );
                return Err(err.context(format!("stage {} failed", stage.name())));
            }
            info!(
                stage = stage.name(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "stage finished"
            );
        }
        info!(
            stages = self.stages.len(),
            warnings = ctx.warnings.len(),
            elapsed_ms = total.elapsed().as_millis() as u64,
            "pipeline finished"
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
