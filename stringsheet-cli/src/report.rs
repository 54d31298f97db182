use std::path::Path;

use serde_json::json;
use stringsheet::{Config, ConversionReport, Direction};

/// One-line human summary printed after a successful run.
pub fn summary(report: &ConversionReport) -> String {
    match report.direction {
        Direction::TableToBundles => format!(
            "Generated {} bundle(s) from {} source file(s), {} entries ({} comment rows skipped)",
            report.outputs.len(),
            report.sources.len(),
            report.entries,
            report.comments_skipped
        ),
        Direction::BundlesToTable => format!(
            "Generated {} with {} language(s) and {} key(s)",
            report
                .outputs
                .first()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            report.languages.len(),
            report.entries
        ),
    }
}

/// Writes the run summary as pretty JSON.
pub fn write_report(path: &Path, config: &Config, report: &ConversionReport) -> Result<(), String> {
    let payload = json!({
        "input": config.input,
        "output": config.output,
        "delimiter": config.delimiter,
        "direction": report.direction,
        "languages": report.languages,
        "sources": report.sources,
        "outputs": report.outputs,
        "summary": {
            "entries": report.entries,
            "comments_skipped": report.comments_skipped
        }
    });

    let text = serde_json::to_string_pretty(&payload)
        .map_err(|e| format!("Failed to serialize report JSON: {}", e))?;
    std::fs::write(path, text)
        .map_err(|e| format!("Failed to write report JSON {}: {}", path.display(), e))
}
