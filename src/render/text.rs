use crate::model::{CatalogView, InspectReport, TypeNodeView};

/// One `key: value` line per field, newline-terminated.
///
/// value: 1
/// type: Integer
/// superclass: Number
/// ancestors: Integer, Number, Object
/// responds_to add: true
pub fn inspect_report(report: &InspectReport) -> String {
    let mut lines = vec![
        format!("value: {}", report.value),
        format!("type: {}", report.type_name),
        format!(
            "superclass: {}",
            report.superclass.as_deref().unwrap_or("none")
        ),
        format!("ancestors: {}", report.ancestors.join(", ")),
    ];
    if let Some(check) = &report.responds_to {
        lines.push(format!("responds_to {}: {}", check.name, check.supported));
    }
    if let Some(methods) = &report.methods {
        lines.push(format!("methods: {}", methods.join(", ")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Indented type tree with own-operation counts.
pub fn catalog_tree(view: &CatalogView) -> String {
    fn walk(node: &TypeNodeView, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!(
            "{} ({} operations)\n",
            node.name,
            node.operations.len()
        ));
        for child in &node.children {
            walk(child, depth + 1, out);
        }
    }

    let mut out = String::new();
    for root in &view.roots {
        walk(root, 0, &mut out);
    }
    out
}
