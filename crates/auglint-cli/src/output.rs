//! Output formatters for scan results.
//!
//! Two modes:
//! - **Human** (default): one violation message per line; a clean scan
//!   produces no stdout at all, so CI logs stay quiet on success.
//! - **JSON** (`--json`): the full structured result for machine consumers.

use auglint_enforce::types::ScanResult;

pub trait OutputFormatter {
    fn format_scan(&self, result: &ScanResult) -> String;
}

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_scan(&self, result: &ScanResult) -> String {
        let lines: Vec<&str> = result
            .violations
            .iter()
            .map(|v| v.message.as_str())
            .collect();
        lines.join("\n")
    }
}

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_scan(&self, result: &ScanResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
