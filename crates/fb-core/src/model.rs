//! Component data model.
//!
//! A form is a flat, ordered list of components. Each component is a
//! record of `{ id, type, properties }`; the property schema is a tagged
//! union keyed by the component type, so a select can never carry heading
//! content and a separator can never carry an options list — mismatches
//! are caught at compile time rather than at render time.
//!
//! The wire shape (see [`crate::io`]) is exactly
//! `{"id": ..., "type": ..., "properties": {...}}` with camelCase keys.

use crate::id::ComponentId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;
use std::fmt;

// ─── Component kinds ─────────────────────────────────────────────────────

/// The closed set of catalog keys. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Text,
    Email,
    Number,
    Tel,
    Date,
    Textarea,
    Select,
    Checkbox,
    Radio,
    H1,
    H2,
    H3,
    H4,
    Paragraph,
    Separator,
}

/// Renderer category: each category has one renderer implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FormField,
    Typography,
    Layout,
}

impl ComponentKind {
    /// The wire/palette token for this kind (`"text"`, `"h1"`, …).
    pub fn token(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Date => "date",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::Paragraph => "paragraph",
            Self::Separator => "separator",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Text
            | Self::Email
            | Self::Number
            | Self::Tel
            | Self::Date
            | Self::Textarea
            | Self::Select
            | Self::Checkbox
            | Self::Radio => Category::FormField,
            Self::H1 | Self::H2 | Self::H3 | Self::H4 | Self::Paragraph => Category::Typography,
            Self::Separator => Category::Layout,
        }
    }

    /// Whether this kind carries an options list (and the remote-source
    /// configuration that goes with it).
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }

    /// Parse a palette token. This is the single place an unknown token
    /// becomes a hard error — a drop with a bogus payload aborts here.
    pub fn parse(token: &str) -> Result<Self, crate::catalog::CatalogError> {
        const ALL: &[ComponentKind] = &[
            ComponentKind::Text,
            ComponentKind::Email,
            ComponentKind::Number,
            ComponentKind::Tel,
            ComponentKind::Date,
            ComponentKind::Textarea,
            ComponentKind::Select,
            ComponentKind::Checkbox,
            ComponentKind::Radio,
            ComponentKind::H1,
            ComponentKind::H2,
            ComponentKind::H3,
            ComponentKind::H4,
            ComponentKind::Paragraph,
            ComponentKind::Separator,
        ];
        ALL.iter()
            .copied()
            .find(|k| k.token() == token)
            .ok_or_else(|| crate::catalog::CatalogError::UnknownType(token.to_string()))
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ─── Shared property pieces ──────────────────────────────────────────────

/// One selectable option. The value is an arbitrary scalar: manual entry
/// produces strings, remote sources frequently produce numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    pub value: Value,
}

impl ChoiceOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A single HTTP header row in the remote-source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeaderPair {
    pub key: String,
    pub value: String,
}

/// Where a choice component's options come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Manual,
    Api,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HttpMethod {
    #[default]
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
}

/// Bootstrap text-alignment utility class, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    #[serde(rename = "")]
    Inherit,
    #[serde(rename = "text-start")]
    Start,
    #[serde(rename = "text-center")]
    Center,
    #[serde(rename = "text-end")]
    End,
}

impl TextAlign {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Inherit => "",
            Self::Start => "text-start",
            Self::Center => "text-center",
            Self::End => "text-end",
        }
    }
}

// ─── Per-kind property sets ──────────────────────────────────────────────

/// Single-line inputs: text, email, tel, date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextInputProps {
    pub label: String,
    pub name: String,
    pub placeholder: String,
    pub required: bool,
    pub column_class: String,
    pub wrapper_class: String,
    pub input_class: String,
    pub label_class: String,
}

impl Default for TextInputProps {
    fn default() -> Self {
        Self {
            label: "Text Field".into(),
            name: "textField".into(),
            placeholder: String::new(),
            required: false,
            column_class: "col-12".into(),
            wrapper_class: "mb-3".into(),
            input_class: "form-control".into(),
            label_class: "form-label".into(),
        }
    }
}

/// Numeric input: text-input fields plus an optional min/max/step range.
/// Absent bounds stay absent — an empty field is never coerced to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberProps {
    pub label: String,
    pub name: String,
    pub placeholder: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    pub column_class: String,
    pub wrapper_class: String,
    pub input_class: String,
    pub label_class: String,
}

impl Default for NumberProps {
    fn default() -> Self {
        Self {
            label: "Number".into(),
            name: "number".into(),
            placeholder: String::new(),
            required: false,
            min: None,
            max: None,
            step: Some(1.0),
            column_class: "col-12".into(),
            wrapper_class: "mb-3".into(),
            input_class: "form-control".into(),
            label_class: "form-label".into(),
        }
    }
}

/// Multi-line input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextareaProps {
    pub label: String,
    pub name: String,
    pub placeholder: String,
    pub required: bool,
    pub rows: u32,
    pub column_class: String,
    pub wrapper_class: String,
    pub input_class: String,
    pub label_class: String,
}

impl Default for TextareaProps {
    fn default() -> Self {
        Self {
            label: "Message".into(),
            name: "message".into(),
            placeholder: String::new(),
            required: false,
            rows: 3,
            column_class: "col-12".into(),
            wrapper_class: "mb-3".into(),
            input_class: "form-control".into(),
            label_class: "form-label".into(),
        }
    }
}

/// Choice components: select dropdowns and radio groups. Options come
/// either from the manual list or from a remote endpoint described by the
/// `api*` fields. Resolved remote options are never stored here — render
/// passes carry them out of band so they can never leak into saved JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChoiceProps {
    pub label: String,
    pub name: String,
    pub required: bool,
    pub options: Vec<ChoiceOption>,
    pub data_source: DataSource,
    pub api_url: String,
    pub api_method: HttpMethod,
    pub api_headers: Vec<HeaderPair>,
    pub api_label_key: String,
    pub api_value_key: String,
    pub api_response_path: String,
    pub column_class: String,
    pub wrapper_class: String,
    pub input_class: String,
    pub label_class: String,
}

impl Default for ChoiceProps {
    fn default() -> Self {
        Self {
            label: "Select Option".into(),
            name: "select".into(),
            required: false,
            options: vec![
                ChoiceOption::new("Option 1", "option1"),
                ChoiceOption::new("Option 2", "option2"),
                ChoiceOption::new("Option 3", "option3"),
            ],
            data_source: DataSource::Manual,
            api_url: String::new(),
            api_method: HttpMethod::Get,
            api_headers: Vec::new(),
            api_label_key: "label".into(),
            api_value_key: "value".into(),
            api_response_path: String::new(),
            column_class: "col-12".into(),
            wrapper_class: "mb-3".into(),
            input_class: "form-select".into(),
            label_class: "form-label".into(),
        }
    }
}

impl ChoiceProps {
    /// Whether a render pass should attempt remote resolution.
    pub fn wants_remote_options(&self) -> bool {
        self.data_source == DataSource::Api && !self.api_url.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckboxProps {
    pub label: String,
    pub name: String,
    pub checked: bool,
    pub column_class: String,
    pub wrapper_class: String,
    pub input_class: String,
    pub label_class: String,
}

impl Default for CheckboxProps {
    fn default() -> Self {
        Self {
            label: "Checkbox Label".into(),
            name: "checkbox".into(),
            checked: false,
            column_class: "col-12".into(),
            wrapper_class: "mb-3 form-check".into(),
            input_class: "form-check-input".into(),
            label_class: "form-check-label".into(),
        }
    }
}

/// Headings and paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyProps {
    pub content: String,
    pub text_align: TextAlign,
    pub column_class: String,
    pub wrapper_class: String,
}

impl Default for TypographyProps {
    fn default() -> Self {
        Self {
            content: String::new(),
            text_align: TextAlign::Inherit,
            column_class: "col-12".into(),
            wrapper_class: "mb-3".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeparatorProps {
    pub column_class: String,
    pub wrapper_class: String,
}

impl Default for SeparatorProps {
    fn default() -> Self {
        Self {
            column_class: "col-12".into(),
            wrapper_class: "my-3".into(),
        }
    }
}

// ─── The tagged property union ───────────────────────────────────────────

/// Type-keyed property sets. Serde's adjacent tagging produces exactly the
/// interchange shape: the tag lands in `"type"`, the fields in
/// `"properties"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "properties")]
pub enum ComponentProps {
    #[serde(rename = "text")]
    Text(TextInputProps),
    #[serde(rename = "email")]
    Email(TextInputProps),
    #[serde(rename = "number")]
    Number(NumberProps),
    #[serde(rename = "tel")]
    Tel(TextInputProps),
    #[serde(rename = "date")]
    Date(TextInputProps),
    #[serde(rename = "textarea")]
    Textarea(TextareaProps),
    #[serde(rename = "select")]
    Select(ChoiceProps),
    #[serde(rename = "checkbox")]
    Checkbox(CheckboxProps),
    #[serde(rename = "radio")]
    Radio(ChoiceProps),
    #[serde(rename = "h1")]
    H1(TypographyProps),
    #[serde(rename = "h2")]
    H2(TypographyProps),
    #[serde(rename = "h3")]
    H3(TypographyProps),
    #[serde(rename = "h4")]
    H4(TypographyProps),
    #[serde(rename = "paragraph")]
    Paragraph(TypographyProps),
    #[serde(rename = "separator")]
    Separator(SeparatorProps),
}

impl ComponentProps {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Text(_) => ComponentKind::Text,
            Self::Email(_) => ComponentKind::Email,
            Self::Number(_) => ComponentKind::Number,
            Self::Tel(_) => ComponentKind::Tel,
            Self::Date(_) => ComponentKind::Date,
            Self::Textarea(_) => ComponentKind::Textarea,
            Self::Select(_) => ComponentKind::Select,
            Self::Checkbox(_) => ComponentKind::Checkbox,
            Self::Radio(_) => ComponentKind::Radio,
            Self::H1(_) => ComponentKind::H1,
            Self::H2(_) => ComponentKind::H2,
            Self::H3(_) => ComponentKind::H3,
            Self::H4(_) => ComponentKind::H4,
            Self::Paragraph(_) => ComponentKind::Paragraph,
            Self::Separator(_) => ComponentKind::Separator,
        }
    }

    /// The layout column class (`col-*`) every kind carries.
    pub fn column_class(&self) -> &str {
        match self {
            Self::Text(p) | Self::Email(p) | Self::Tel(p) | Self::Date(p) => &p.column_class,
            Self::Number(p) => &p.column_class,
            Self::Textarea(p) => &p.column_class,
            Self::Select(p) | Self::Radio(p) => &p.column_class,
            Self::Checkbox(p) => &p.column_class,
            Self::H1(p) | Self::H2(p) | Self::H3(p) | Self::H4(p) | Self::Paragraph(p) => {
                &p.column_class
            }
            Self::Separator(p) => &p.column_class,
        }
    }

    /// The wrapper (spacing) class every kind carries.
    pub fn wrapper_class(&self) -> &str {
        match self {
            Self::Text(p) | Self::Email(p) | Self::Tel(p) | Self::Date(p) => &p.wrapper_class,
            Self::Number(p) => &p.wrapper_class,
            Self::Textarea(p) => &p.wrapper_class,
            Self::Select(p) | Self::Radio(p) => &p.wrapper_class,
            Self::Checkbox(p) => &p.wrapper_class,
            Self::H1(p) | Self::H2(p) | Self::H3(p) | Self::H4(p) | Self::Paragraph(p) => {
                &p.wrapper_class
            }
            Self::Separator(p) => &p.wrapper_class,
        }
    }

    /// Choice configuration, for select/radio only.
    pub fn choice(&self) -> Option<&ChoiceProps> {
        match self {
            Self::Select(p) | Self::Radio(p) => Some(p),
            _ => None,
        }
    }
}

// ─── Property patches ────────────────────────────────────────────────────

/// A single-field edit applied through
/// [`FormDocument::update_component`](crate::document::FormDocument::update_component).
///
/// Patches mirror the shallow-merge semantics of the interchange format:
/// each patch replaces one property wholesale. Applying a patch to a kind
/// that does not carry the field is a silent no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum PropPatch {
    Label(String),
    Name(String),
    Placeholder(String),
    Required(bool),
    Min(Option<f64>),
    Max(Option<f64>),
    Step(Option<f64>),
    Rows(u32),
    Checked(bool),
    Content(String),
    TextAlign(TextAlign),
    Options(Vec<ChoiceOption>),
    DataSource(DataSource),
    ApiUrl(String),
    ApiMethod(HttpMethod),
    ApiHeaders(Vec<HeaderPair>),
    ApiLabelKey(String),
    ApiValueKey(String),
    ApiResponsePath(String),
    ColumnClass(String),
    WrapperClass(String),
}

// ─── Component record ────────────────────────────────────────────────────

/// One entry in the document: an immutable id plus the typed properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    #[serde(flatten)]
    pub props: ComponentProps,
}

impl Component {
    pub fn new(id: ComponentId, props: ComponentProps) -> Self {
        Self { id, props }
    }

    pub fn kind(&self) -> ComponentKind {
        self.props.kind()
    }

    /// Apply one patch. Fields a kind does not carry are ignored.
    pub fn apply(&mut self, patch: &PropPatch) {
        use ComponentProps::*;
        use PropPatch as P;

        match (&mut self.props, patch) {
            // Label
            (Text(p) | Email(p) | Tel(p) | Date(p), P::Label(v)) => p.label = v.clone(),
            (Number(p), P::Label(v)) => p.label = v.clone(),
            (Textarea(p), P::Label(v)) => p.label = v.clone(),
            (Select(p) | Radio(p), P::Label(v)) => p.label = v.clone(),
            (Checkbox(p), P::Label(v)) => p.label = v.clone(),

            // Name
            (Text(p) | Email(p) | Tel(p) | Date(p), P::Name(v)) => p.name = v.clone(),
            (Number(p), P::Name(v)) => p.name = v.clone(),
            (Textarea(p), P::Name(v)) => p.name = v.clone(),
            (Select(p) | Radio(p), P::Name(v)) => p.name = v.clone(),
            (Checkbox(p), P::Name(v)) => p.name = v.clone(),

            // Placeholder
            (Text(p) | Email(p) | Tel(p) | Date(p), P::Placeholder(v)) => {
                p.placeholder = v.clone()
            }
            (Number(p), P::Placeholder(v)) => p.placeholder = v.clone(),
            (Textarea(p), P::Placeholder(v)) => p.placeholder = v.clone(),

            // Required
            (Text(p) | Email(p) | Tel(p) | Date(p), P::Required(v)) => p.required = *v,
            (Number(p), P::Required(v)) => p.required = *v,
            (Textarea(p), P::Required(v)) => p.required = *v,
            (Select(p) | Radio(p), P::Required(v)) => p.required = *v,

            // Numeric range
            (Number(p), P::Min(v)) => p.min = *v,
            (Number(p), P::Max(v)) => p.max = *v,
            (Number(p), P::Step(v)) => p.step = *v,

            // Textarea
            (Textarea(p), P::Rows(v)) => p.rows = *v,

            // Checkbox
            (Checkbox(p), P::Checked(v)) => p.checked = *v,

            // Typography
            (H1(p) | H2(p) | H3(p) | H4(p) | Paragraph(p), P::Content(v)) => {
                p.content = v.clone()
            }
            (H1(p) | H2(p) | H3(p) | H4(p) | Paragraph(p), P::TextAlign(v)) => {
                p.text_align = *v
            }

            // Choice / remote source
            (Select(p) | Radio(p), P::Options(v)) => p.options = v.clone(),
            (Select(p) | Radio(p), P::DataSource(v)) => p.data_source = *v,
            (Select(p) | Radio(p), P::ApiUrl(v)) => p.api_url = v.clone(),
            (Select(p) | Radio(p), P::ApiMethod(v)) => p.api_method = *v,
            (Select(p) | Radio(p), P::ApiHeaders(v)) => p.api_headers = v.clone(),
            (Select(p) | Radio(p), P::ApiLabelKey(v)) => p.api_label_key = v.clone(),
            (Select(p) | Radio(p), P::ApiValueKey(v)) => p.api_value_key = v.clone(),
            (Select(p) | Radio(p), P::ApiResponsePath(v)) => p.api_response_path = v.clone(),

            // Layout, carried by every kind
            (Text(p) | Email(p) | Tel(p) | Date(p), P::ColumnClass(v)) => {
                p.column_class = v.clone()
            }
            (Number(p), P::ColumnClass(v)) => p.column_class = v.clone(),
            (Textarea(p), P::ColumnClass(v)) => p.column_class = v.clone(),
            (Select(p) | Radio(p), P::ColumnClass(v)) => p.column_class = v.clone(),
            (Checkbox(p), P::ColumnClass(v)) => p.column_class = v.clone(),
            (H1(p) | H2(p) | H3(p) | H4(p) | Paragraph(p), P::ColumnClass(v)) => {
                p.column_class = v.clone()
            }
            (Separator(p), P::ColumnClass(v)) => p.column_class = v.clone(),

            (Text(p) | Email(p) | Tel(p) | Date(p), P::WrapperClass(v)) => {
                p.wrapper_class = v.clone()
            }
            (Number(p), P::WrapperClass(v)) => p.wrapper_class = v.clone(),
            (Textarea(p), P::WrapperClass(v)) => p.wrapper_class = v.clone(),
            (Select(p) | Radio(p), P::WrapperClass(v)) => p.wrapper_class = v.clone(),
            (Checkbox(p), P::WrapperClass(v)) => p.wrapper_class = v.clone(),
            (H1(p) | H2(p) | H3(p) | H4(p) | Paragraph(p), P::WrapperClass(v)) => {
                p.wrapper_class = v.clone()
            }
            (Separator(p), P::WrapperClass(v)) => p.wrapper_class = v.clone(),

            // Field not carried by this kind
            _ => {}
        }
    }

    /// Apply a batch of patches in order.
    pub fn apply_all(&mut self, patches: &[PropPatch]) {
        for patch in patches {
            self.apply(patch);
        }
    }
}

/// A batch of patches, sized for the common single-field edit.
pub type PatchList = SmallVec<[PropPatch; 2]>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn props_tagging_matches_wire_shape() {
        let c = Component::new(
            ComponentId::intern("comp-1"),
            ComponentProps::Checkbox(CheckboxProps::default()),
        );
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["id"], "comp-1");
        assert_eq!(json["type"], "checkbox");
        assert_eq!(json["properties"]["label"], "Checkbox Label");
        assert_eq!(json["properties"]["wrapperClass"], "mb-3 form-check");
    }

    #[test]
    fn choice_props_roundtrip_with_numeric_values() {
        let mut props = ChoiceProps::default();
        props.options = vec![
            ChoiceOption::new("A", 1),
            ChoiceOption::new("B", "two"),
        ];
        let c = Component::new(ComponentId::intern("comp-2"), ComponentProps::Select(props));
        let json = serde_json::to_string(&c).unwrap();
        let back: Component = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn transient_keys_in_imported_json_are_dropped() {
        let json = r#"{
            "id": "comp-3",
            "type": "select",
            "properties": { "label": "Country", "_loadedOptions": [{"label":"x","value":"y"}] },
            "_apiOptions": []
        }"#;
        let c: Component = serde_json::from_str(json).unwrap();
        let out = serde_json::to_string(&c).unwrap();
        assert!(!out.contains("_loadedOptions"));
        assert!(!out.contains("_apiOptions"));
    }

    #[test]
    fn patch_applies_to_matching_kind_only() {
        let mut heading = Component::new(
            ComponentId::generate(),
            ComponentProps::H2(TypographyProps {
                content: "Title".into(),
                ..Default::default()
            }),
        );
        // Rows is a textarea field; a heading ignores it.
        heading.apply(&PropPatch::Rows(10));
        heading.apply(&PropPatch::Content("New Title".into()));
        match &heading.props {
            ComponentProps::H2(p) => assert_eq!(p.content, "New Title"),
            _ => panic!("kind changed"),
        }
    }

    #[test]
    fn number_bounds_stay_absent_when_unset() {
        let c = Component::new(
            ComponentId::intern("comp-4"),
            ComponentProps::Number(NumberProps::default()),
        );
        let json = serde_json::to_value(&c).unwrap();
        assert!(json["properties"].get("min").is_none());
        assert_eq!(json["properties"]["step"], 1.0);
    }

    #[test]
    fn column_class_patch_reaches_every_kind() {
        for props in [
            ComponentProps::Text(TextInputProps::default()),
            ComponentProps::Textarea(TextareaProps::default()),
            ComponentProps::Radio(ChoiceProps::default()),
            ComponentProps::Paragraph(TypographyProps::default()),
            ComponentProps::Separator(SeparatorProps::default()),
        ] {
            let mut c = Component::new(ComponentId::generate(), props);
            c.apply(&PropPatch::ColumnClass("col-md-6".into()));
            assert_eq!(c.props.column_class(), "col-md-6");
        }
    }
}
