use std::path::Path;

use auglint_core::config::AuglintConfig;

/// Run `auglint init [path]` — write a starter `.auglint.json` into the scan
/// root with the defaults spelled out, so conventions are visible in the
/// repository. `auglint check` reads the file back from the same root.
///
/// Exit codes: 0 written, 2 refused or failed.
pub fn run(verbose: bool, force: bool, dir: &Path) -> i32 {
    let path = dir.join(AuglintConfig::FILE_NAME);
    if path.exists() && !force {
        eprintln!(
            "auglint init: {} already exists. Use --force to overwrite.",
            path.display()
        );
        return 2;
    }

    let config = AuglintConfig::default();
    let content = match serde_json::to_string_pretty(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("auglint init: failed to serialize config: {}", e);
            return 2;
        }
    };

    if let Err(e) = std::fs::write(&path, content + "\n") {
        eprintln!("auglint init: failed to write {}: {}", path.display(), e);
        return 2;
    }

    if verbose {
        eprintln!("auglint init: wrote {}", path.display());
    }
    0
}
