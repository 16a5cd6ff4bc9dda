use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::python::is_python_file;

/// Walks a library source tree and collects Python files.
pub struct FileWalker {
    root: PathBuf,
}

impl FileWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn walk(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .add_custom_ignore_filename(".auglintignore")
            .build();

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(_) => continue,
            };

            if !entry.file_type().map_or(false, |ft| ft.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if is_python_file(&path) {
                files.push(path);
            }
        }

        // A .pyi stub shadowed by its .py module would make the same class
        // parse twice; the implementation wins.
        let sources: HashSet<PathBuf> = files
            .iter()
            .filter(|f| f.extension().is_some_and(|e| e == "py"))
            .cloned()
            .collect();
        files.retain(|f| {
            if f.extension().is_some_and(|e| e == "pyi") {
                !sources.contains(&f.with_extension("py"))
            } else {
                true
            }
        });

        files
    }
}
