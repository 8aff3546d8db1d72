//! Component catalog: the palette's source of truth.
//!
//! Each kind has one [`ComponentDefinition`] — display label, icon token,
//! category, and factory defaults. The struct `Default` impls in
//! [`crate::model`] carry the schema-level defaults; the catalog layers
//! the kind-specific ones on top (an email input starts life labelled
//! "Email", not "Text Field").

use crate::id::ComponentId;
use crate::model::{
    CheckboxProps, ChoiceProps, Component, ComponentKind, ComponentProps, NumberProps,
    SeparatorProps, TextInputProps, TextareaProps, TypographyProps,
};
use thiserror::Error;

/// Palette/catalog entry for one component kind.
#[derive(Debug, Clone, Copy)]
pub struct ComponentDefinition {
    pub kind: ComponentKind,
    /// Human-readable palette label.
    pub label: &'static str,
    /// Icon token (Bootstrap Icons class name).
    pub icon: &'static str,
}

pub const DEFINITIONS: &[ComponentDefinition] = &[
    ComponentDefinition { kind: ComponentKind::Text, label: "Text Input", icon: "bi-input-cursor-text" },
    ComponentDefinition { kind: ComponentKind::Email, label: "Email Input", icon: "bi-envelope" },
    ComponentDefinition { kind: ComponentKind::Number, label: "Number Input", icon: "bi-123" },
    ComponentDefinition { kind: ComponentKind::Tel, label: "Phone Input", icon: "bi-telephone" },
    ComponentDefinition { kind: ComponentKind::Date, label: "Date Input", icon: "bi-calendar" },
    ComponentDefinition { kind: ComponentKind::Textarea, label: "Text Area", icon: "bi-textarea-t" },
    ComponentDefinition { kind: ComponentKind::Select, label: "Select Dropdown", icon: "bi-ui-checks" },
    ComponentDefinition { kind: ComponentKind::Checkbox, label: "Checkbox", icon: "bi-check-square" },
    ComponentDefinition { kind: ComponentKind::Radio, label: "Radio Group", icon: "bi-ui-radios" },
    ComponentDefinition { kind: ComponentKind::H1, label: "Heading 1", icon: "bi-type-h1" },
    ComponentDefinition { kind: ComponentKind::H2, label: "Heading 2", icon: "bi-type-h2" },
    ComponentDefinition { kind: ComponentKind::H3, label: "Heading 3", icon: "bi-type-h3" },
    ComponentDefinition { kind: ComponentKind::H4, label: "Heading 4", icon: "bi-type" },
    ComponentDefinition { kind: ComponentKind::Paragraph, label: "Paragraph", icon: "bi-paragraph" },
    ComponentDefinition { kind: ComponentKind::Separator, label: "Line Separator", icon: "bi-dash-lg" },
];

pub fn definition(kind: ComponentKind) -> &'static ComponentDefinition {
    // DEFINITIONS is total over ComponentKind; the lookup cannot miss.
    DEFINITIONS
        .iter()
        .find(|d| d.kind == kind)
        .unwrap_or(&DEFINITIONS[0])
}

/// Definitions grouped under one palette category.
pub fn definitions_in(category: crate::model::Category) -> Vec<&'static ComponentDefinition> {
    DEFINITIONS
        .iter()
        .filter(|d| d.kind.category() == category)
        .collect()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A palette token (e.g. from a drag payload) that names no kind.
    #[error("unknown component type {0:?}")]
    UnknownType(String),
}

/// Factory defaults for a kind, per the catalog.
pub fn default_props(kind: ComponentKind) -> ComponentProps {
    match kind {
        ComponentKind::Text => ComponentProps::Text(TextInputProps::default()),
        ComponentKind::Email => ComponentProps::Email(TextInputProps {
            label: "Email".into(),
            name: "email".into(),
            placeholder: "email@example.com".into(),
            ..Default::default()
        }),
        ComponentKind::Number => ComponentProps::Number(NumberProps::default()),
        ComponentKind::Tel => ComponentProps::Tel(TextInputProps {
            label: "Phone Number".into(),
            name: "phone".into(),
            ..Default::default()
        }),
        ComponentKind::Date => ComponentProps::Date(TextInputProps {
            label: "Date".into(),
            name: "date".into(),
            ..Default::default()
        }),
        ComponentKind::Textarea => ComponentProps::Textarea(TextareaProps::default()),
        ComponentKind::Select => ComponentProps::Select(ChoiceProps::default()),
        ComponentKind::Checkbox => ComponentProps::Checkbox(CheckboxProps::default()),
        ComponentKind::Radio => ComponentProps::Radio(ChoiceProps {
            label: "Radio Group".into(),
            name: "radioGroup".into(),
            input_class: "form-check-input".into(),
            label_class: "form-label".into(),
            ..Default::default()
        }),
        ComponentKind::H1 => ComponentProps::H1(heading("Heading 1")),
        ComponentKind::H2 => ComponentProps::H2(heading("Heading 2")),
        ComponentKind::H3 => ComponentProps::H3(heading("Heading 3")),
        ComponentKind::H4 => ComponentProps::H4(heading("Heading 4")),
        ComponentKind::Paragraph => {
            ComponentProps::Paragraph(heading("This is a paragraph text."))
        }
        ComponentKind::Separator => ComponentProps::Separator(SeparatorProps::default()),
    }
}

fn heading(content: &str) -> TypographyProps {
    TypographyProps {
        content: content.into(),
        ..Default::default()
    }
}

/// Mint a new component of `kind` with a fresh id and catalog defaults.
pub fn create_component(kind: ComponentKind) -> Component {
    Component::new(ComponentId::generate(), default_props(kind))
}

/// Resolve a palette token (a drag payload string) and mint a component.
pub fn create_from_token(token: &str) -> Result<Component, CatalogError> {
    Ok(create_component(ComponentKind::parse(token)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_kind_has_a_definition() {
        assert_eq!(DEFINITIONS.len(), 15);
        for def in DEFINITIONS {
            assert_eq!(definition(def.kind).label, def.label);
        }
    }

    #[test]
    fn factory_applies_kind_specific_defaults() {
        let email = create_component(ComponentKind::Email);
        match &email.props {
            ComponentProps::Email(p) => {
                assert_eq!(p.label, "Email");
                assert_eq!(p.placeholder, "email@example.com");
            }
            _ => panic!("wrong kind"),
        }

        let h3 = create_component(ComponentKind::H3);
        match &h3.props {
            ComponentProps::H3(p) => assert_eq!(p.content, "Heading 3"),
            _ => panic!("wrong kind"),
        }
    }

    #[test]
    fn token_roundtrip_and_unknown_token() {
        let c = create_from_token("select").unwrap();
        assert_eq!(c.kind(), ComponentKind::Select);

        let err = create_from_token("carousel").unwrap_err();
        assert_eq!(err, CatalogError::UnknownType("carousel".into()));
    }

    #[test]
    fn minted_components_get_fresh_ids() {
        let a = create_component(ComponentKind::Text);
        let b = create_component(ComponentKind::Text);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn categories_partition_the_palette() {
        let fields = definitions_in(Category::FormField).len();
        let typo = definitions_in(Category::Typography).len();
        let layout = definitions_in(Category::Layout).len();
        assert_eq!(fields + typo + layout, DEFINITIONS.len());
        assert_eq!(layout, 1);
    }
}
