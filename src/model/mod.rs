//! Report model: combine introspection queries into serializable views.

use crate::catalog::Catalog;
use crate::introspect::{Introspector, QueryResult};
use crate::value::{Kind, Value};

use serde::Serialize;

/// What to include in an inspection report beyond type and ancestry.
#[derive(Debug, Clone, Copy, Default)]
pub struct InspectRequest<'r> {
    pub operation: Option<&'r str>,
    pub methods: bool,
    /// Restrict `methods` to operations the type declares itself.
    pub own: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationCheck {
    pub name: String,
    pub supported: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    /// The value rendered back as a literal.
    pub value: String,
    pub kind: Kind,
    pub type_name: String,
    pub superclass: Option<String>,
    pub ancestors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responds_to: Option<OperationCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeNodeView {
    pub name: String,
    pub operations: Vec<String>,
    pub children: Vec<TypeNodeView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub types: usize,
    pub roots: Vec<TypeNodeView>,
}

pub fn build_inspect_report(
    intro: &Introspector<'_>,
    value: &Value,
    request: InspectRequest<'_>,
) -> QueryResult<InspectReport> {
    let descriptor = intro.describe(value)?;

    let responds_to = match request.operation {
        Some(op) => Some(OperationCheck {
            name: op.to_string(),
            supported: intro.supports_operation(value, op)?,
        }),
        None => None,
    };

    let methods = if request.methods {
        let ops = intro.list_operations(value, !request.own)?;
        Some(ops.into_iter().map(str::to_string).collect())
    } else {
        None
    };

    Ok(InspectReport {
        value: value.to_string(),
        kind: value.kind(),
        type_name: descriptor.name.clone(),
        superclass: intro.superclass(value)?.map(|p| p.name.clone()),
        ancestors: intro
            .ancestor_chain(value)?
            .into_iter()
            .map(str::to_string)
            .collect(),
        responds_to,
        methods,
    })
}

pub fn build_catalog_view(catalog: &Catalog) -> CatalogView {
    fn node(catalog: &Catalog, name: &str) -> TypeNodeView {
        let operations = catalog
            .get(name)
            .map(|t| t.operations.iter().cloned().collect())
            .unwrap_or_default();
        TypeNodeView {
            name: name.to_string(),
            operations,
            children: catalog
                .children(name)
                .into_iter()
                .map(|c| node(catalog, c))
                .collect(),
        }
    }

    CatalogView {
        types: catalog.len(),
        roots: catalog
            .roots()
            .into_iter()
            .map(|r| node(catalog, r))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn report_for_integer_with_operation() {
        let catalog = Catalog::builtin().unwrap();
        let intro = Introspector::new(&catalog);
        let report = build_inspect_report(
            &intro,
            &Value::Integer(1),
            InspectRequest {
                operation: Some("add"),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(report.value, "1");
        assert_eq!(report.kind, Kind::Integer);
        assert_eq!(report.type_name, "Integer");
        assert_eq!(report.superclass.as_deref(), Some("Number"));
        assert_eq!(report.ancestors, vec!["Integer", "Number", "Object"]);
        let check = report.responds_to.unwrap();
        assert_eq!((check.name.as_str(), check.supported), ("add", true));
        assert!(report.methods.is_none());
    }

    #[test]
    fn report_methods_respect_own_flag() {
        let catalog = Catalog::builtin().unwrap();
        let intro = Introspector::new(&catalog);
        let value = Value::Boolean(false);

        let own = build_inspect_report(
            &intro,
            &value,
            InspectRequest {
                methods: true,
                own: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(own.methods.unwrap(), vec!["and", "not", "or", "xor"]);

        let all = build_inspect_report(
            &intro,
            &value,
            InspectRequest {
                methods: true,
                ..Default::default()
            },
        )
        .unwrap();
        let all = all.methods.unwrap();
        assert!(all.contains(&"inspect".to_string()));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn report_json_omits_absent_sections() {
        let catalog = Catalog::builtin().unwrap();
        let intro = Introspector::new(&catalog);
        let report =
            build_inspect_report(&intro, &Value::Text("eol".into()), InspectRequest::default())
                .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "value": "\"eol\"",
                "kind": "text",
                "type_name": "String",
                "superclass": "Object",
                "ancestors": ["String", "Object"],
            })
        );
    }

    #[test]
    fn catalog_view_nests_children() {
        let catalog = Catalog::builtin().unwrap();
        let view = build_catalog_view(&catalog);
        assert_eq!(view.types, 5);
        assert_eq!(view.roots.len(), 1);

        let object = &view.roots[0];
        let names: Vec<&str> = object.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Boolean", "Number", "String"]);
        assert_eq!(object.children[1].children[0].name, "Integer");
    }
}
