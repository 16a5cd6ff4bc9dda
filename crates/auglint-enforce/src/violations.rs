use auglint_core::types::Violation;
use auglint_parsers::python::PyClass;

/// Check A001: default_argument — a method whose name starts with `prefix`
/// declares a default value for one of its parameters.
///
/// The caller is responsible for candidate selection; every class passed in
/// is reported without further filtering.
pub fn check_apply_defaults(class: &PyClass, prefix: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    for method in &class.methods {
        if !method.name.starts_with(prefix) {
            continue;
        }
        for param in &method.params {
            let Some(default) = &param.default else { continue };
            violations.push(Violation {
                message: format!(
                    "Default argument found in {}.{} for parameter {} with default value {}",
                    class.name, method.name, param.name, default
                ),
                class_name: class.name.clone(),
                method: method.name.clone(),
                parameter: param.name.clone(),
                default: default.clone(),
                file: class.file_path.clone(),
                line: param.line,
            });
        }
    }

    violations
}
