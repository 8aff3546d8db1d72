//! JSON interchange — the save/load format.
//!
//! The wire shape is `{ "formId", "formName", "version", "components" }`
//! with each component as `{ "id", "type", "properties" }`. Import
//! validates structurally before touching the document: the error names
//! what is wrong, and a failed import leaves the current document intact
//! because nothing is applied until the whole payload parses.

use crate::id::FormId;
use crate::model::Component;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Complete serialized form — exactly what `export_form` writes and
/// `import_form` returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub form_id: FormId,
    #[serde(default = "default_form_name")]
    pub form_name: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub components: Vec<Component>,
}

fn default_form_name() -> String {
    crate::document::DEFAULT_FORM_NAME.into()
}

fn default_version() -> String {
    crate::document::DEFAULT_VERSION.into()
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("form data must be a JSON object")]
    NotAnObject,
    #[error("missing required field {0:?}")]
    MissingField(&'static str),
    #[error("\"components\" must be an array")]
    ComponentsNotArray,
    #[error("component at index {index} is malformed: {reason}")]
    BadComponent { index: usize, reason: String },
}

/// Pretty-print a snapshot for export (two-space indent, stable shape).
pub fn export_form(data: &FormData) -> String {
    // FormData contains only string-keyed maps and scalars, so
    // serialization cannot fail.
    serde_json::to_string_pretty(data).unwrap_or_default()
}

/// Parse and validate an imported document. Structural problems are
/// reported with a field-level error rather than a bare parse failure.
pub fn import_form(json: &str) -> Result<FormData, ImportError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(map) = &value else {
        return Err(ImportError::NotAnObject);
    };

    if !map.contains_key("formId") {
        return Err(ImportError::MissingField("formId"));
    }
    let components = map
        .get("components")
        .ok_or(ImportError::MissingField("components"))?;
    let Value::Array(items) = components else {
        return Err(ImportError::ComponentsNotArray);
    };
    for (index, item) in items.iter().enumerate() {
        if let Err(e) = serde_json::from_value::<Component>(item.clone()) {
            return Err(ImportError::BadComponent {
                index,
                reason: e.to_string(),
            });
        }
    }

    // Structure is sound; the typed parse also strips any transient
    // render keys a hand-edited file might carry.
    serde_json::from_value(value).map_err(ImportError::Syntax)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::model::ComponentKind;
    use pretty_assertions::assert_eq;

    fn sample() -> FormData {
        FormData {
            form_id: FormId::intern("form-feedback"),
            form_name: "Feedback".into(),
            version: "1.0.0".into(),
            components: vec![
                catalog::create_component(ComponentKind::H1),
                catalog::create_component(ComponentKind::Email),
                catalog::create_component(ComponentKind::Select),
            ],
        }
    }

    #[test]
    fn export_import_roundtrip() {
        let data = sample();
        let json = export_form(&data);
        let back = import_form(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn export_is_pretty_printed() {
        let json = export_form(&sample());
        assert!(json.contains("\n  \"formId\""));
    }

    #[test]
    fn import_rejects_malformed_syntax() {
        assert!(matches!(import_form("{not json"), Err(ImportError::Syntax(_))));
    }

    #[test]
    fn import_rejects_non_object() {
        assert!(matches!(import_form("[1,2,3]"), Err(ImportError::NotAnObject)));
    }

    #[test]
    fn import_requires_form_id_and_components() {
        let err = import_form(r#"{"components": []}"#).unwrap_err();
        assert!(matches!(err, ImportError::MissingField("formId")));

        let err = import_form(r#"{"formId": "form-1"}"#).unwrap_err();
        assert!(matches!(err, ImportError::MissingField("components")));

        let err = import_form(r#"{"formId": "form-1", "components": {}}"#).unwrap_err();
        assert!(matches!(err, ImportError::ComponentsNotArray));
    }

    #[test]
    fn import_pinpoints_the_bad_component() {
        let json = r#"{
            "formId": "form-1",
            "components": [
                {"id": "comp-1", "type": "text", "properties": {}},
                {"id": "comp-2", "type": "blink", "properties": {}}
            ]
        }"#;
        match import_form(json).unwrap_err() {
            ImportError::BadComponent { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn import_defaults_name_and_version() {
        let json = r#"{"formId": "form-1", "components": []}"#;
        let data = import_form(json).unwrap();
        assert_eq!(data.form_name, "Untitled Form");
        assert_eq!(data.version, "1.0.0");
    }
}
