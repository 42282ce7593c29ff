use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{utils::output_result, OutputFormat};
use crate::records::{normalize_record, PersistedRecord};

#[derive(Args)]
pub struct NormalizeArgs {
    #[arg(help = "JSON file holding the record; reads stdin when omitted or '-'")]
    pub input: Option<PathBuf>,
}

pub async fn handle(args: NormalizeArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let raw = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let record: Option<PersistedRecord> =
        serde_json::from_str(&raw).context("input is not a JSON object or null")?;
    let normalized = normalize_record(record.as_ref());

    let pretty = serde_json::to_string_pretty(&normalized)?;
    output_result(output_format, &normalized, &[pretty])
}
