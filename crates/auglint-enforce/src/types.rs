use serde::Serialize;

use auglint_core::types::Violation;

/// Outcome of one scan over a library tree.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub violations: Vec<Violation>,
    pub files_scanned: u32,
    pub classes_checked: u32,
}

impl ScanResult {
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Process exit status for this result: 1 when the convention is
    /// violated anywhere, 0 on a clean tree.
    pub fn exit_code(&self) -> i32 {
        if self.has_violations() {
            1
        } else {
            0
        }
    }
}
