use std::path::Path;

use auglint_core::config::AuglintConfig;
use auglint_enforce::engine::Engine;

use crate::output::OutputFormatter;

/// Run `auglint check [path]` — scan the tree and report violations.
///
/// Exit codes: 0 clean, 1 convention violated, 2 tool fault.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    path: &Path,
    base: Option<String>,
    prefix: Option<String>,
) -> i32 {
    let mut config = AuglintConfig::load(path);
    if let Some(base) = base {
        config.base_class = base;
    }
    if let Some(prefix) = prefix {
        config.method_prefix = prefix;
    }

    let result = match Engine::with_config(config).scan(path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("auglint check: {}", e);
            return 2;
        }
    };

    if verbose {
        eprintln!(
            "auglint check: scanned {} file(s), checked {} transform class(es), {} violation(s)",
            result.files_scanned,
            result.classes_checked,
            result.violations.len()
        );
    }

    let output = formatter.format_scan(&result);
    if !output.is_empty() {
        println!("{}", output);
    }

    result.exit_code()
}
