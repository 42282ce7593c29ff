use serde::Serialize;
use serde_json::json;

use crate::cli::OutputFormat;

/// Print `data` inside a success envelope (JSON) or as `text` lines
pub fn output_result<T: Serialize>(
    output_format: OutputFormat,
    data: &T,
    text: &[String],
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "success": true,
                "data": data
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            for line in text {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
