use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use apobec_scatter::cli::{Cli, Commands};
use apobec_scatter::ctx::Ctx;
use apobec_scatter::io;
use apobec_scatter::pipeline::Pipeline;
use apobec_scatter::pipeline::stage0_scaffold::Stage0Scaffold;
use apobec_scatter::pipeline::stage1_samples::Stage1Samples;
use apobec_scatter::pipeline::stage2_regression::Stage2Regression;
use apobec_scatter::pipeline::stage3_figure::Stage3Figure;
use apobec_scatter::pipeline::stage4_display::Stage4Display;
use apobec_scatter::pipeline::stage5_output::Stage5Output;
use apobec_scatter::plot::figure::FigureStyle;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            if !(args.dpi.is_finite() && args.dpi > 0.0) {
                anyhow::bail!("--dpi must be a positive number");
            }
            FigureStyle::with_dpi(args.dpi).check_canvas()?;
            if args.stem.is_empty() {
                anyhow::bail!("--stem must not be empty");
            }
            let mut ctx = Ctx::new(
                args.out,
                &args.stem,
                args.dpi,
                !args.no_show,
                args.json,
                args.tsv,
            );
            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Samples::new()),
                Box::new(Stage2Regression::new()),
                Box::new(Stage3Figure::new()),
                Box::new(Stage4Display::new()),
                Box::new(Stage5Output::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_summary(&ctx)?;
        }
        Commands::Stats => {
            let mut ctx = analysis_ctx();
            let pipeline = Pipeline::new(vec![
                Box::new(Stage1Samples::new()),
                Box::new(Stage2Regression::new()),
            ]);
            pipeline.run(&mut ctx)?;

            let regression = ctx.regression.as_ref().context("regression missing")?;
            print!("{}", io::summary::format_statistics(regression));
            log_warnings(&ctx);
        }
        Commands::Validate => {
            let mut ctx = analysis_ctx();
            let pipeline = Pipeline::new(vec![Box::new(Stage1Samples::new())]);
            pipeline.run(&mut ctx)?;

            println!("apobec-scatter validate ok");
            println!("samples: {}", ctx.samples.len());
            println!("annotated: {}", ctx.annotated.join(", "));
            if !ctx.warnings.is_empty() {
                println!("warnings:");
                for warning in &ctx.warnings {
                    println!("- {}", warning);
                }
            }
        }
    }

    Ok(())
}

fn analysis_ctx() -> Ctx {
    Ctx::new(PathBuf::from("."), "Figure3", 200.0, false, false, false)
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    log_warnings(ctx);
    Ok(())
}

// stdout carries only the statistics, so warnings go through the log.
fn log_warnings(ctx: &Ctx) {
    for warning in &ctx.warnings {
        warn!("{}", warning);
    }
}
