use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "apobec-scatter",
    version,
    about = "Log-log scatter of APOBEC mutation rate against time gained"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fit, render and export the figure, then print the statistics
    Run(RunArgs),
    /// Print the regression statistics without rendering
    Stats,
    /// Check the embedded dataset
    Validate,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, default_value = ".", help = "Output directory for figures and reports")]
    pub out: PathBuf,

    #[arg(long, default_value = "Figure3", help = "File stem shared by all outputs")]
    pub stem: String,

    #[arg(long, default_value_t = 200.0, help = "Resolution in dots per inch")]
    pub dpi: f64,

    #[arg(long, default_value_t = false, help = "Do not open the figure in a viewer")]
    pub no_show: bool,

    #[arg(long, default_value_t = false, help = "Also write <stem>.json")]
    pub json: bool,

    #[arg(long, default_value_t = false, help = "Also write <stem>.tsv")]
    pub tsv: bool,
}
