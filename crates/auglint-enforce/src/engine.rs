use std::path::Path;

use rayon::prelude::*;

use auglint_core::config::AuglintConfig;
use auglint_core::types::{ScanError, Violation};
use auglint_parsers::hierarchy::transform_family;
use auglint_parsers::python::{extract_classes, PyClass};
use auglint_parsers::treesitter::PyParser;
use auglint_parsers::walker::FileWalker;

use crate::types::ScanResult;
use crate::violations::check_apply_defaults;

/// Scan engine. Owns the configuration and orchestrates one pass:
/// walk → parse → select candidates → check.
pub struct Engine {
    config: AuglintConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            config: AuglintConfig::default(),
        }
    }

    pub fn with_config(config: AuglintConfig) -> Self {
        Self { config }
    }

    /// Run the full scan over the tree rooted at `root`.
    ///
    /// Any read or parse failure aborts the scan; there is no per-file
    /// recovery. Violations are sorted so repeated runs over an unchanged
    /// tree produce byte-identical output regardless of walk or worker
    /// ordering.
    pub fn scan(&self, root: &Path) -> Result<ScanResult, ScanError> {
        if !root.exists() {
            return Err(ScanError::RootNotFound(root.display().to_string()));
        }
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.display().to_string()));
        }

        let mut files = FileWalker::new(root).walk();
        files.sort();

        let classes: Vec<Vec<PyClass>> = files
            .par_iter()
            .map_init(PyParser::new, |parser, path| {
                let source = std::fs::read_to_string(path).map_err(|e| ScanError::Io {
                    path: path.display().to_string(),
                    source: e,
                })?;
                extract_classes(parser, path, &source).map_err(|e| ScanError::Parse {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<_, ScanError>>()?;
        let classes: Vec<PyClass> = classes.into_iter().flatten().collect();

        let family = transform_family(&classes, &self.config.base_class);

        let candidates: Vec<&PyClass> = classes
            .iter()
            .filter(|c| family.contains(c.name.as_str()))
            .collect();

        let mut violations: Vec<Violation> = candidates
            .iter()
            .flat_map(|c| check_apply_defaults(c, &self.config.method_prefix))
            .collect();
        violations.sort_by(|a, b| {
            (&a.file, a.line, &a.class_name, &a.method, &a.parameter)
                .cmp(&(&b.file, b.line, &b.class_name, &b.method, &b.parameter))
        });

        Ok(ScanResult {
            violations,
            files_scanned: files.len() as u32,
            classes_checked: candidates.len() as u32,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
