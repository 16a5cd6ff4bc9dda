//! Class, method, and parameter extraction from Python source.
//!
//! The convention check needs nested structure (class → method → parameter →
//! default), so this walks the syntax tree directly instead of flattening
//! through a query.

use std::path::Path;

use tree_sitter::Node;

use auglint_core::types::DefaultValue;

use crate::treesitter::{node_text, ParseError, PyParser};

/// A class definition extracted from source.
#[derive(Debug, Clone)]
pub struct PyClass {
    pub name: String,
    /// Base-class names as written, dotted bases reduced to their final
    /// segment (`interface.BasicTransform` → `BasicTransform`).
    pub bases: Vec<String>,
    pub file_path: String,
    pub line: u32,
    pub methods: Vec<PyMethod>,
}

/// A method (callable member) of a class.
#[derive(Debug, Clone)]
pub struct PyMethod {
    pub name: String,
    pub line: u32,
    pub params: Vec<PyParam>,
}

/// A formal parameter of a method.
#[derive(Debug, Clone)]
pub struct PyParam {
    pub name: String,
    pub line: u32,
    pub default: Option<DefaultValue>,
}

/// Parse `source` and return every class defined in it, including classes
/// nested inside conditionals or other classes.
pub fn extract_classes(
    parser: &mut PyParser,
    path: &Path,
    source: &str,
) -> Result<Vec<PyClass>, ParseError> {
    let tree = parser.parse(source.as_bytes())?;
    let bytes = source.as_bytes();
    let file_path = path.to_string_lossy().to_string();

    let mut classes = Vec::new();
    collect_classes(tree.root_node(), bytes, &file_path, &mut classes);
    Ok(classes)
}

fn collect_classes(node: Node<'_>, source: &[u8], file_path: &str, out: &mut Vec<PyClass>) {
    if node.kind() == "class_definition" {
        if let Some(class) = extract_class(node, source, file_path) {
            out.push(class);
        }
    }
    for i in 0..node.named_child_count() {
        if let Some(child) = node.named_child(i) {
            collect_classes(child, source, file_path, out);
        }
    }
}

fn extract_class(node: Node<'_>, source: &[u8], file_path: &str) -> Option<PyClass> {
    let name = node_text(node.child_by_field_name("name")?, source).to_string();

    let mut bases = Vec::new();
    if let Some(superclasses) = node.child_by_field_name("superclasses") {
        for i in 0..superclasses.named_child_count() {
            let arg = superclasses.named_child(i)?;
            match arg.kind() {
                "identifier" => bases.push(node_text(arg, source).to_string()),
                // interface.BasicTransform — link by the final segment
                "attribute" => {
                    if let Some(attr) = arg.child_by_field_name("attribute") {
                        bases.push(node_text(attr, source).to_string());
                    }
                }
                // Generic[T], metaclass=ABCMeta, etc. are not inheritance links
                _ => {}
            }
        }
    }

    let mut methods = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        for i in 0..body.named_child_count() {
            let stmt = body.named_child(i)?;
            let func = match stmt.kind() {
                "function_definition" => Some(stmt),
                "decorated_definition" => stmt
                    .child_by_field_name("definition")
                    .filter(|d| d.kind() == "function_definition"),
                _ => None,
            };
            if let Some(func) = func {
                if let Some(method) = extract_method(func, source) {
                    methods.push(method);
                }
            }
        }
    }

    Some(PyClass {
        name,
        bases,
        file_path: file_path.to_string(),
        line: node.start_position().row as u32 + 1,
        methods,
    })
}

fn extract_method(node: Node<'_>, source: &[u8]) -> Option<PyMethod> {
    let name = node_text(node.child_by_field_name("name")?, source).to_string();
    let line = node.start_position().row as u32 + 1;

    let mut params = Vec::new();
    let parameters = node.child_by_field_name("parameters")?;
    for i in 0..parameters.named_child_count() {
        let param = parameters.named_child(i)?;
        let line = param.start_position().row as u32 + 1;
        match param.kind() {
            "identifier" => params.push(PyParam {
                name: node_text(param, source).to_string(),
                line,
                default: None,
            }),
            "typed_parameter" => {
                // first named child is the parameter name
                if let Some(ident) = param.named_child(0) {
                    params.push(PyParam {
                        name: node_text(ident, source).to_string(),
                        line,
                        default: None,
                    });
                }
            }
            "default_parameter" | "typed_default_parameter" => {
                let pname = param.child_by_field_name("name")?;
                let value = param.child_by_field_name("value")?;
                params.push(PyParam {
                    name: node_text(pname, source).to_string(),
                    line,
                    default: Some(classify_default(value, source)),
                });
            }
            // *args / **kwargs / bare * and / separators cannot carry defaults
            _ => {}
        }
    }

    Some(PyMethod { name, line, params })
}

/// Map a default-value expression node to the literal kind it represents.
fn classify_default(node: Node<'_>, source: &[u8]) -> DefaultValue {
    let raw = node_text(node, source);
    match node.kind() {
        "integer" | "float" => DefaultValue::Number(raw.to_string()),
        "true" => DefaultValue::Bool(true),
        "false" => DefaultValue::Bool(false),
        "none" => DefaultValue::None,
        "string" => DefaultValue::Str(string_inner(raw)),
        // -1, -0.5: unary minus over a numeric literal is still a number
        "unary_operator" => {
            let is_numeric = node
                .child_by_field_name("argument")
                .map(|arg| matches!(arg.kind(), "integer" | "float"))
                .unwrap_or(false);
            if is_numeric {
                DefaultValue::Number(raw.to_string())
            } else {
                DefaultValue::Expr(raw.to_string())
            }
        }
        _ => DefaultValue::Expr(raw.to_string()),
    }
}

/// Strip the prefix and quotes from a string literal, leaving its content.
fn string_inner(raw: &str) -> String {
    let trimmed =
        raw.trim_start_matches(|c: char| matches!(c, 'r' | 'R' | 'b' | 'B' | 'u' | 'U' | 'f' | 'F'));
    for quote in ["\"\"\"", "'''"] {
        if trimmed.len() >= 6 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[3..trimmed.len() - 3].to_string();
        }
    }
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[1..trimmed.len() - 1].to_string();
        }
    }
    trimmed.to_string()
}

/// Whether a path looks like a Python source file.
pub fn is_python_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("py") | Some("pyi")
    )
}
