use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::plot::export::export_figure;

pub struct Stage3Figure;

impl Stage3Figure {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Figure {
    fn name(&self) -> &'static str {
        "stage3_figure"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let figure = ctx.figure()?;
        let (w, h) = figure.style.canvas_size();
        let written = export_figure(&ctx.output.out_dir, &ctx.output.stem, &figure)?;
        info!(
            width_px = w,
            height_px = h,
            dpi = ctx.style.dpi,
            files = written.len(),
            "figures_ready"
        );
        ctx.figures = written;
        Ok(())
    }
}
