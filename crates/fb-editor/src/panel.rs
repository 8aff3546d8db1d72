//! Properties panel controller.
//!
//! The panel is a pure projection of the selected component: `view()`
//! derives a typed description of every editable row, and each edit goes
//! straight back through the store as a patch. Manual option and header
//! rows follow the original editing model — every keystroke re-derives
//! the whole list from the visible rows and writes it back wholesale, so
//! row identity can never drift from the model.

use fb_core::events::{Event, EventKind};
use fb_core::model::{
    ChoiceOption, ComponentProps, DataSource, HeaderPair, HttpMethod, PropPatch, TextAlign,
};
use fb_core::{ComponentId, FormStore};
use fb_remote::{EndpointProbe, FetchError, OptionSource, OptionsRequest};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use thiserror::Error;

// ─── View model ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text { name: &'static str, label: &'static str, value: String },
    /// Optional numeric input; `None` renders as an empty box.
    Number { name: &'static str, label: &'static str, value: Option<f64> },
    Integer { name: &'static str, label: &'static str, value: u32 },
    Toggle { name: &'static str, label: &'static str, on: bool },
    Choice {
        name: &'static str,
        label: &'static str,
        value: String,
        choices: &'static [(&'static str, &'static str)],
    },
}

/// `(value, label)` pairs for the typography alignment dropdown.
pub const TEXT_ALIGN_CHOICES: &[(&str, &str)] = &[
    ("", "Default"),
    ("text-start", "Left"),
    ("text-center", "Center"),
    ("text-end", "Right"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct OptionRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRow {
    pub key: String,
    pub value: String,
}

/// The options card for select/radio components.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsView {
    pub data_source: DataSource,
    pub rows: Vec<OptionRow>,
    pub api_url: String,
    pub api_method: HttpMethod,
    pub header_rows: Vec<HeaderRow>,
    pub label_key: String,
    pub value_key: String,
    pub response_path: String,
    /// Pickers unlock after a successful endpoint test.
    pub picker_enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub content: Vec<Field>,
    pub options: Option<OptionsView>,
}

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("no component selected")]
    NoSelection,
    #[error("selected component has no options")]
    NotAChoice,
    #[error("enter an API URL first")]
    MissingUrl,
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

// ─── Controller ──────────────────────────────────────────────────────────

pub struct PanelController {
    store: Rc<FormStore>,
    source: Rc<dyn OptionSource>,
    selected: RefCell<Option<ComponentId>>,
    probe: RefCell<Option<EndpointProbe>>,
}

impl PanelController {
    pub fn new(store: Rc<FormStore>, source: Rc<dyn OptionSource>) -> Rc<Self> {
        Rc::new(Self {
            store,
            source,
            selected: RefCell::new(None),
            probe: RefCell::new(None),
        })
    }

    pub fn connect(self: &Rc<Self>) {
        let bus = self.store.bus().clone();
        {
            let weak: Weak<Self> = Rc::downgrade(self);
            bus.subscribe(EventKind::ComponentSelected, move |event| {
                let Some(panel) = weak.upgrade() else { return };
                let id = match event {
                    Event::ComponentSelected(Some(component)) => Some(component.id),
                    _ => None,
                };
                if *panel.selected.borrow() != id {
                    *panel.probe.borrow_mut() = None;
                }
                *panel.selected.borrow_mut() = id;
            });
        }
        {
            let weak: Weak<Self> = Rc::downgrade(self);
            bus.subscribe(EventKind::ComponentDeselected, move |_| {
                let Some(panel) = weak.upgrade() else { return };
                *panel.selected.borrow_mut() = None;
                *panel.probe.borrow_mut() = None;
            });
        }
    }

    pub fn selected_id(&self) -> Option<ComponentId> {
        *self.selected.borrow()
    }

    /// Typed description of the panel for the selected component; `None`
    /// renders the empty-state hint.
    pub fn view(&self) -> Option<PanelView> {
        let component = self.store.find(self.selected_id()?)?;

        let content = match &component.props {
            ComponentProps::Text(p)
            | ComponentProps::Email(p)
            | ComponentProps::Tel(p)
            | ComponentProps::Date(p) => vec![
                Field::Text { name: "label", label: "Label", value: p.label.clone() },
                Field::Text { name: "name", label: "Field Name", value: p.name.clone() },
                Field::Text {
                    name: "placeholder",
                    label: "Placeholder",
                    value: p.placeholder.clone(),
                },
                Field::Toggle { name: "required", label: "Required field", on: p.required },
            ],
            ComponentProps::Number(p) => vec![
                Field::Text { name: "label", label: "Label", value: p.label.clone() },
                Field::Text { name: "name", label: "Field Name", value: p.name.clone() },
                Field::Text {
                    name: "placeholder",
                    label: "Placeholder",
                    value: p.placeholder.clone(),
                },
                Field::Number { name: "min", label: "Min", value: p.min },
                Field::Number { name: "max", label: "Max", value: p.max },
                Field::Number { name: "step", label: "Step", value: p.step },
                Field::Toggle { name: "required", label: "Required field", on: p.required },
            ],
            ComponentProps::Textarea(p) => vec![
                Field::Text { name: "label", label: "Label", value: p.label.clone() },
                Field::Text { name: "name", label: "Field Name", value: p.name.clone() },
                Field::Text {
                    name: "placeholder",
                    label: "Placeholder",
                    value: p.placeholder.clone(),
                },
                Field::Integer { name: "rows", label: "Rows", value: p.rows },
                Field::Toggle { name: "required", label: "Required field", on: p.required },
            ],
            ComponentProps::Select(p) => vec![
                Field::Text { name: "label", label: "Label", value: p.label.clone() },
                Field::Text { name: "name", label: "Field Name", value: p.name.clone() },
                Field::Toggle { name: "required", label: "Required field", on: p.required },
            ],
            ComponentProps::Radio(p) => vec![
                Field::Text { name: "label", label: "Label", value: p.label.clone() },
                Field::Text { name: "name", label: "Group Name", value: p.name.clone() },
                Field::Toggle { name: "required", label: "Required field", on: p.required },
            ],
            ComponentProps::Checkbox(p) => vec![
                Field::Text { name: "label", label: "Label", value: p.label.clone() },
                Field::Text { name: "name", label: "Field Name", value: p.name.clone() },
                Field::Toggle { name: "checked", label: "Checked by default", on: p.checked },
            ],
            ComponentProps::H1(p)
            | ComponentProps::H2(p)
            | ComponentProps::H3(p)
            | ComponentProps::H4(p)
            | ComponentProps::Paragraph(p) => vec![
                Field::Text { name: "content", label: "Content", value: p.content.clone() },
                Field::Choice {
                    name: "textAlign",
                    label: "Text Alignment",
                    value: p.text_align.class().to_string(),
                    choices: TEXT_ALIGN_CHOICES,
                },
            ],
            ComponentProps::Separator(_) => Vec::new(),
        };

        let options = component.props.choice().map(|p| OptionsView {
            data_source: p.data_source,
            rows: p
                .options
                .iter()
                .map(|o| OptionRow {
                    label: o.label.clone(),
                    value: fb_render::component::value_attr(&o.value),
                })
                .collect(),
            api_url: p.api_url.clone(),
            api_method: p.api_method,
            header_rows: p
                .api_headers
                .iter()
                .map(|h| HeaderRow { key: h.key.clone(), value: h.value.clone() })
                .collect(),
            label_key: p.api_label_key.clone(),
            value_key: p.api_value_key.clone(),
            response_path: p.api_response_path.clone(),
            picker_enabled: self.probe.borrow().is_some(),
        });

        Some(PanelView { content, options })
    }

    // ─── Content edits ───────────────────────────────────────────────────

    fn patch(&self, patch: PropPatch) {
        if let Some(id) = self.selected_id() {
            self.store.update_component(id, &[patch]);
        }
    }

    pub fn set_label(&self, value: &str) {
        self.patch(PropPatch::Label(value.to_string()));
    }

    pub fn set_name(&self, value: &str) {
        self.patch(PropPatch::Name(value.to_string()));
    }

    pub fn set_placeholder(&self, value: &str) {
        self.patch(PropPatch::Placeholder(value.to_string()));
    }

    pub fn set_required(&self, on: bool) {
        self.patch(PropPatch::Required(on));
    }

    pub fn set_checked(&self, on: bool) {
        self.patch(PropPatch::Checked(on));
    }

    pub fn set_content(&self, value: &str) {
        self.patch(PropPatch::Content(value.to_string()));
    }

    pub fn set_text_align(&self, align: TextAlign) {
        self.patch(PropPatch::TextAlign(align));
    }

    pub fn set_rows(&self, rows: u32) {
        self.patch(PropPatch::Rows(rows));
    }

    /// Numeric fields accept free text; empty (or unparseable) input is
    /// preserved as "no bound", never coerced to zero.
    pub fn coerce_number(text: &str) -> Option<f64> {
        let text = text.trim();
        if text.is_empty() { None } else { text.parse().ok() }
    }

    pub fn set_min(&self, text: &str) {
        self.patch(PropPatch::Min(Self::coerce_number(text)));
    }

    pub fn set_max(&self, text: &str) {
        self.patch(PropPatch::Max(Self::coerce_number(text)));
    }

    pub fn set_step(&self, text: &str) {
        self.patch(PropPatch::Step(Self::coerce_number(text)));
    }

    // ─── Manual options ──────────────────────────────────────────────────

    /// Wholesale re-derive from the visible rows. Manual entry always
    /// produces string values.
    pub fn set_option_rows(&self, rows: &[OptionRow]) {
        let options = rows
            .iter()
            .map(|row| ChoiceOption::new(row.label.clone(), row.value.clone()))
            .collect();
        self.patch(PropPatch::Options(options));
    }

    pub fn add_option(&self) {
        let Some(component) = self.selected_component() else { return };
        let Some(choice) = component.props.choice() else { return };
        let mut options = choice.options.clone();
        options.push(ChoiceOption::new("New Option", "new_option"));
        self.patch(PropPatch::Options(options));
    }

    pub fn remove_option(&self, index: usize) {
        let Some(component) = self.selected_component() else { return };
        let Some(choice) = component.props.choice() else { return };
        if index >= choice.options.len() {
            return;
        }
        let mut options = choice.options.clone();
        options.remove(index);
        self.patch(PropPatch::Options(options));
    }

    // ─── Remote source configuration ─────────────────────────────────────

    pub fn set_data_source(&self, source: DataSource) {
        self.patch(PropPatch::DataSource(source));
    }

    pub fn set_api_url(&self, url: &str) {
        self.patch(PropPatch::ApiUrl(url.to_string()));
    }

    pub fn set_api_method(&self, method: HttpMethod) {
        self.patch(PropPatch::ApiMethod(method));
    }

    pub fn set_response_path(&self, path: &str) {
        self.patch(PropPatch::ApiResponsePath(path.to_string()));
    }

    pub fn set_label_key(&self, key: &str) {
        self.patch(PropPatch::ApiLabelKey(key.to_string()));
    }

    pub fn set_value_key(&self, key: &str) {
        self.patch(PropPatch::ApiValueKey(key.to_string()));
    }

    /// Wholesale re-derive of header rows; rows left entirely blank are
    /// dropped.
    pub fn set_header_rows(&self, rows: &[HeaderRow]) {
        let headers = rows
            .iter()
            .filter(|row| !row.key.is_empty() || !row.value.is_empty())
            .map(|row| HeaderPair { key: row.key.clone(), value: row.value.clone() })
            .collect();
        self.patch(PropPatch::ApiHeaders(headers));
    }

    pub fn add_header(&self) {
        let Some(component) = self.selected_component() else { return };
        let Some(choice) = component.props.choice() else { return };
        let mut headers = choice.api_headers.clone();
        headers.push(HeaderPair::default());
        self.patch(PropPatch::ApiHeaders(headers));
    }

    pub fn remove_header(&self, index: usize) {
        let Some(component) = self.selected_component() else { return };
        let Some(choice) = component.props.choice() else { return };
        if index >= choice.api_headers.len() {
            return;
        }
        let mut headers = choice.api_headers.clone();
        headers.remove(index);
        self.patch(PropPatch::ApiHeaders(headers));
    }

    // ─── Endpoint test + property picker ─────────────────────────────────

    /// Probe the configured endpoint. A successful probe is stashed and
    /// unlocks the key pickers; failures surface to the caller.
    pub async fn test_endpoint(&self) -> Result<EndpointProbe, PanelError> {
        let component = self.selected_component().ok_or(PanelError::NoSelection)?;
        let choice = component.props.choice().ok_or(PanelError::NotAChoice)?;
        if choice.api_url.is_empty() {
            return Err(PanelError::MissingUrl);
        }

        let probe = self.source.probe(&OptionsRequest::from(choice)).await?;
        *self.probe.borrow_mut() = Some(probe.clone());
        Ok(probe)
    }

    /// Dotted paths the picker can offer, from the last successful probe.
    pub fn picker_paths(&self) -> Vec<String> {
        self.probe
            .borrow()
            .as_ref()
            .map(|probe| probe.paths.clone())
            .unwrap_or_default()
    }

    pub fn pick_label_key(&self, path: &str) {
        self.set_label_key(path);
    }

    pub fn pick_value_key(&self, path: &str) {
        self.set_value_key(path);
    }

    fn selected_component(&self) -> Option<fb_core::model::Component> {
        self.store.find(self.selected_id()?)
    }
}
