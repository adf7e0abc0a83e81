use anyhow::Result;
use tracing::debug;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::plot::display::show_figure;
use crate::plot::export::FigureFormat;

pub struct Stage4Display;

impl Stage4Display {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Display {
    fn name(&self) -> &'static str {
        "stage4_display"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.show {
            debug!("viewer disabled");
            return Ok(());
        }
        show_figure(&ctx.figure_path(FigureFormat::Png))
    }
}
