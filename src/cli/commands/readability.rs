use clap::Args;

use crate::cli::{utils::output_result, OutputFormat};
use crate::insights::ReadabilityReport;

#[derive(Args)]
pub struct ReadabilityArgs {
    #[arg(help = "Flesch reading-ease score", allow_negative_numbers = true)]
    pub score: f64,
}

pub async fn handle(args: ReadabilityArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let report = ReadabilityReport::from_score(args.score)?;
    output_result(
        output_format,
        &report,
        &[
            format!("{:.1} - {}", report.score, report.label),
            report.guidance.to_string(),
        ],
    )
}
