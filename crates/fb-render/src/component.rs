//! Per-category component renderers.
//!
//! One renderer per catalog category, behind the [`RenderComponent`]
//! capability: form fields, typography, layout. `renderer_for` picks the
//! implementation from the component kind.
//!
//! A renderer produces the *inner* markup — the spacing wrapper and its
//! field content. The canvas item chrome (column wrapper, selection
//! marker, delete affordance, resize handles) is layered on by
//! [`render_canvas_item`]; the preview reuses the same inner markup
//! without any chrome.

use crate::markup::Element;
use fb_core::model::{ChoiceOption, Component, ComponentProps};
use fb_core::{Category, ComponentKind};
use serde_json::Value;

/// Render capability, one implementation per [`Category`].
pub trait RenderComponent {
    /// The spacing wrapper (`wrapperClass`) with the component's markup.
    /// `resolved` carries remotely fetched options for select/radio; when
    /// absent the manual options render.
    fn render(&self, component: &Component, resolved: Option<&[ChoiceOption]>) -> Element;
}

pub fn renderer_for(kind: ComponentKind) -> &'static dyn RenderComponent {
    match kind.category() {
        Category::FormField => &FormFieldRenderer,
        Category::Typography => &TypographyRenderer,
        Category::Layout => &LayoutRenderer,
    }
}

/// An option value serialized for a `value="..."` attribute. Strings pass
/// through; numbers and booleans print bare; null becomes empty.
pub fn value_attr(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Numeric attribute without a trailing `.0` for whole numbers.
fn number_attr(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn wrapper(component: &Component) -> Element {
    Element::new("div").class(component.props.wrapper_class())
}

fn field_label(label: &str, label_class: &str, required: bool) -> Element {
    let mut el = Element::new("label").class(label_class).text(label);
    if required {
        el = el.child(Element::new("span").class("text-danger").text("*"));
    }
    el
}

// ─── Form fields ─────────────────────────────────────────────────────────

pub struct FormFieldRenderer;

impl RenderComponent for FormFieldRenderer {
    fn render(&self, component: &Component, resolved: Option<&[ChoiceOption]>) -> Element {
        let body = match &component.props {
            ComponentProps::Text(p)
            | ComponentProps::Email(p)
            | ComponentProps::Tel(p)
            | ComponentProps::Date(p) => Self::input(component.kind(), p),
            ComponentProps::Number(p) => Self::number(p),
            ComponentProps::Textarea(p) => Self::textarea(p),
            ComponentProps::Select(p) => Self::select(p, resolved),
            ComponentProps::Checkbox(p) => vec![Self::checkbox(component, p)],
            ComponentProps::Radio(p) => Self::radio_group(component, p, resolved),
            other => {
                log::warn!(
                    "form-field renderer asked to draw {:?}",
                    other.kind()
                );
                vec![Element::new("div")
                    .class("alert alert-warning")
                    .text("Unknown field type")]
            }
        };
        wrapper(component).children(body)
    }
}

impl FormFieldRenderer {
    fn input(kind: ComponentKind, p: &fb_core::model::TextInputProps) -> Vec<Element> {
        vec![
            field_label(&p.label, &p.label_class, p.required),
            Element::new("input")
                .class(&p.input_class)
                .attr("type", kind.token())
                .attr("name", &p.name)
                .attr_if_present("placeholder", &p.placeholder)
                .flag("required", p.required),
        ]
    }

    fn number(p: &fb_core::model::NumberProps) -> Vec<Element> {
        let mut input = Element::new("input")
            .class(&p.input_class)
            .attr("type", "number")
            .attr("name", &p.name)
            .attr_if_present("placeholder", &p.placeholder);
        if let Some(min) = p.min {
            input = input.attr("min", number_attr(min));
        }
        if let Some(max) = p.max {
            input = input.attr("max", number_attr(max));
        }
        if let Some(step) = p.step {
            input = input.attr("step", number_attr(step));
        }
        vec![
            field_label(&p.label, &p.label_class, p.required),
            input.flag("required", p.required),
        ]
    }

    fn textarea(p: &fb_core::model::TextareaProps) -> Vec<Element> {
        vec![
            field_label(&p.label, &p.label_class, p.required),
            Element::new("textarea")
                .class(&p.input_class)
                .attr("name", &p.name)
                .attr("rows", p.rows.to_string())
                .attr_if_present("placeholder", &p.placeholder)
                .flag("required", p.required),
        ]
    }

    fn select(
        p: &fb_core::model::ChoiceProps,
        resolved: Option<&[ChoiceOption]>,
    ) -> Vec<Element> {
        let options = resolved.unwrap_or(&p.options);
        let mut select = Element::new("select")
            .class(&p.input_class)
            .attr("name", &p.name)
            .flag("required", p.required)
            .child(Element::new("option").attr("value", "").text("Choose..."));
        for opt in options {
            select = select.child(
                Element::new("option")
                    .attr("value", value_attr(&opt.value))
                    .text(&opt.label),
            );
        }
        vec![field_label(&p.label, &p.label_class, p.required), select]
    }

    fn checkbox(component: &Component, p: &fb_core::model::CheckboxProps) -> Element {
        let id = component.id.to_string();
        Element::new("div")
            .class("form-check")
            .child(
                Element::new("input")
                    .class(&p.input_class)
                    .attr("type", "checkbox")
                    .attr("name", &p.name)
                    .attr("id", &id)
                    .flag("checked", p.checked),
            )
            .child(
                Element::new("label")
                    .class(&p.label_class)
                    .attr("for", &id)
                    .text(&p.label),
            )
    }

    fn radio_group(
        component: &Component,
        p: &fb_core::model::ChoiceProps,
        resolved: Option<&[ChoiceOption]>,
    ) -> Vec<Element> {
        let options = resolved.unwrap_or(&p.options);
        let mut out = vec![
            field_label(&p.label, &p.label_class, p.required).class("d-block"),
        ];
        for (index, opt) in options.iter().enumerate() {
            let opt_id = format!("{}-{index}", component.id);
            out.push(
                Element::new("div")
                    .class("form-check")
                    .child(
                        Element::new("input")
                            .class("form-check-input")
                            .attr("type", "radio")
                            .attr("name", &p.name)
                            .attr("id", &opt_id)
                            .attr("value", value_attr(&opt.value))
                            .flag("required", p.required),
                    )
                    .child(
                        Element::new("label")
                            .class("form-check-label")
                            .attr("for", &opt_id)
                            .text(&opt.label),
                    ),
            );
        }
        out
    }
}

// ─── Typography ──────────────────────────────────────────────────────────

pub struct TypographyRenderer;

impl RenderComponent for TypographyRenderer {
    fn render(&self, component: &Component, _resolved: Option<&[ChoiceOption]>) -> Element {
        let (tag, p) = match &component.props {
            ComponentProps::H1(p) => ("h1", p),
            ComponentProps::H2(p) => ("h2", p),
            ComponentProps::H3(p) => ("h3", p),
            ComponentProps::H4(p) => ("h4", p),
            ComponentProps::Paragraph(p) => ("p", p),
            other => {
                log::warn!("typography renderer asked to draw {:?}", other.kind());
                return wrapper(component);
            }
        };
        wrapper(component).child(
            Element::new(tag)
                .class(p.text_align.class())
                .text(&p.content),
        )
    }
}

// ─── Layout ──────────────────────────────────────────────────────────────

pub struct LayoutRenderer;

impl RenderComponent for LayoutRenderer {
    fn render(&self, component: &Component, _resolved: Option<&[ChoiceOption]>) -> Element {
        match &component.props {
            ComponentProps::Separator(_) => wrapper(component).child(Element::new("hr")),
            other => {
                log::warn!("layout renderer asked to draw {:?}", other.kind());
                wrapper(component)
            }
        }
    }
}

// ─── Canvas chrome ───────────────────────────────────────────────────────

/// The full editable canvas item: column wrapper carrying the selection
/// marker and identity attributes, the component markup, a delete
/// affordance, and the left/right resize handles.
pub fn render_canvas_item(
    component: &Component,
    resolved: Option<&[ChoiceOption]>,
    selected: bool,
) -> Element {
    let inner = renderer_for(component.kind())
        .render(component, resolved)
        .child(
            Element::new("div").class("fb-component-actions").child(
                Element::new("button")
                    .class("btn btn-danger btn-sm rounded-circle")
                    .attr("type", "button")
                    .attr("data-action", "delete")
                    .child(Element::new("i").class("bi bi-x")),
            ),
        )
        .child(
            Element::new("div")
                .class("fb-resize-handle fb-resize-handle-left")
                .attr("data-resize", "left"),
        )
        .child(
            Element::new("div")
                .class("fb-resize-handle fb-resize-handle-right")
                .attr("data-resize", "right"),
        );

    Element::new("div")
        .class(component.props.column_class())
        .class("fb-component")
        .class(if selected { "fb-selected" } else { "" })
        .attr("data-component-id", component.id.to_string())
        .attr("data-component-type", component.kind().token())
        .child(inner)
}
