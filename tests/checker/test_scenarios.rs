//! End-to-end scenarios over temporary library trees.

use auglint_core::config::AuglintConfig;
use auglint_enforce::engine::Engine;

use crate::common::write_file;

#[test]
fn defaulted_apply_parameter_is_reported_with_exit_1() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "augs.py",
        r#"
class BasicTransform:
    pass

class Foo(BasicTransform):
    def apply(self, img, angle=0):
        return img
"#,
    );

    let result = Engine::new().scan(dir.path()).unwrap();
    assert_eq!(result.violations.len(), 1);
    let v = &result.violations[0];
    assert_eq!(v.class_name, "Foo");
    assert_eq!(v.method, "apply");
    assert_eq!(v.parameter, "angle");
    assert_eq!(
        v.message,
        "Default argument found in Foo.apply for parameter angle with default value 0"
    );
    assert_eq!(result.exit_code(), 1);
}

#[test]
fn default_free_apply_is_clean_with_exit_0() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "augs.py",
        r#"
class BasicTransform:
    pass

class Bar(BasicTransform):
    def apply(self, img, angle):
        return img
"#,
    );

    let result = Engine::new().scan(dir.path()).unwrap();
    assert!(result.violations.is_empty());
    assert_eq!(result.exit_code(), 0);
}

#[test]
fn marker_class_defaults_are_exempt() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "interface.py",
        r#"
class BasicTransform:
    def apply(self, img, strength=1.0):
        raise NotImplementedError
"#,
    );

    let result = Engine::new().scan(dir.path()).unwrap();
    assert!(result.violations.is_empty());
    assert_eq!(result.exit_code(), 0);
}

#[test]
fn intermediate_base_classes_are_checked() {
    // Only the exact marker is exempt; an abstract base between it and the
    // concrete transforms is still part of the family.
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "interface.py",
        r#"
class BasicTransform:
    pass

class DualTransform(BasicTransform):
    def apply_to_mask(self, mask, fill=0):
        return mask
"#,
    );

    let result = Engine::new().scan(dir.path()).unwrap();
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].class_name, "DualTransform");
}

#[test]
fn family_spans_files_and_packages() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "core/transforms_interface.py",
        r#"
class BasicTransform:
    pass

class ImageOnlyTransform(BasicTransform):
    pass
"#,
    );
    write_file(
        dir.path(),
        "augmentations/blur.py",
        r#"
class Blur(ImageOnlyTransform):
    def apply(self, img, ksize=3):
        return img
"#,
    );
    write_file(
        dir.path(),
        "augmentations/crops.py",
        r#"
class RandomCrop(ImageOnlyTransform):
    def apply(self, img, h_start, w_start):
        return img
"#,
    );

    let result = Engine::new().scan(dir.path()).unwrap();
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].class_name, "Blur");
    assert_eq!(result.violations[0].parameter, "ksize");
    assert_eq!(result.files_scanned, 3);
}

#[test]
fn unrelated_classes_are_never_reported() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "compose.py",
        r#"
class BaseCompose:
    pass

class Compose(BaseCompose):
    def apply(self, img, p=0.5):
        return img
"#,
    );

    let result = Engine::new().scan(dir.path()).unwrap();
    assert!(result.violations.is_empty());
}

#[test]
fn every_defaulted_parameter_gets_its_own_violation() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "augs.py",
        r#"
class BasicTransform:
    pass

class ShiftScaleRotate(BasicTransform):
    def apply(self, img, angle=0, scale=1.0, dx=0, dy=0):
        return img
"#,
    );

    let result = Engine::new().scan(dir.path()).unwrap();
    let params: Vec<&str> = result
        .violations
        .iter()
        .map(|v| v.parameter.as_str())
        .collect();
    assert_eq!(params, vec!["angle", "scale", "dx", "dy"]);
}

#[test]
fn custom_marker_via_config() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "ops.py",
        r#"
class Operation:
    pass

class Resize(Operation):
    def apply(self, img, size=(256, 256)):
        return img
"#,
    );

    let config = AuglintConfig {
        base_class: "Operation".into(),
        ..AuglintConfig::default()
    };
    let result = Engine::with_config(config).scan(dir.path()).unwrap();
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0]
        .message
        .ends_with("with default value (256, 256)"));
}

#[test]
fn config_file_in_scan_root_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        ".auglint.json",
        r#"{ "base_class": "Operation" }"#,
    );
    write_file(
        dir.path(),
        "ops.py",
        r#"
class Operation:
    pass

class Resize(Operation):
    def apply(self, img, pad=1):
        return img
"#,
    );

    let config = AuglintConfig::load(dir.path());
    let result = Engine::with_config(config).scan(dir.path()).unwrap();
    assert_eq!(result.violations.len(), 1);
}
