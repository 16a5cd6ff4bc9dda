//! Repeated scans over an unchanged tree must produce identical output.

use auglint_enforce::engine::Engine;

use crate::common::write_file;

fn library(dir: &std::path::Path) {
    write_file(
        dir,
        "interface.py",
        "class BasicTransform:\n    pass\n\nclass DualTransform(BasicTransform):\n    pass\n",
    );
    write_file(
        dir,
        "zz_rotate.py",
        "class Rotate(DualTransform):\n    def apply(self, img, angle=0, mode='nearest'):\n        return img\n",
    );
    write_file(
        dir,
        "aa_blur.py",
        "class Blur(BasicTransform):\n    def apply(self, img, ksize=3):\n        return img\n",
    );
}

#[test]
fn two_scans_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    library(dir.path());

    let engine = Engine::new();
    let first = engine.scan(dir.path()).unwrap();
    let second = engine.scan(dir.path()).unwrap();

    let render = |r: &auglint_enforce::types::ScanResult| {
        r.violations
            .iter()
            .map(|v| v.message.clone())
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(render(&first), render(&second));
    assert_eq!(first.exit_code(), second.exit_code());
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn violations_are_ordered_by_file_then_line() {
    let dir = tempfile::tempdir().unwrap();
    library(dir.path());

    let result = Engine::new().scan(dir.path()).unwrap();
    let files: Vec<&str> = result.violations.iter().map(|v| v.file.as_str()).collect();
    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
    // aa_blur.py sorts before zz_rotate.py regardless of walk order
    assert_eq!(result.violations[0].class_name, "Blur");
}
