//! Read-only preview: the form as an end user would see it.

use crate::component::renderer_for;
use crate::markup::Element;
use fb_core::io::FormData;
use fb_core::model::ChoiceOption;
use fb_core::ComponentId;
use std::collections::HashMap;

/// Remotely fetched options, keyed by component. Kept out of the model so
/// transient data can never leak into saved JSON.
pub type ResolvedOptions = HashMap<ComponentId, Vec<ChoiceOption>>;

/// Render the whole form without any editing chrome: a `row g-3` grid of
/// column-wrapped components followed by submit/reset buttons.
pub fn render_preview(data: &FormData, resolved: &ResolvedOptions) -> Element {
    let mut form = Element::new("form").class("row g-3");
    for component in &data.components {
        let options = resolved.get(&component.id).map(Vec::as_slice);
        form = form.child(
            Element::new("div")
                .class(component.props.column_class())
                .child(renderer_for(component.kind()).render(component, options)),
        );
    }
    form.child(
        Element::new("div")
            .class("col-12")
            .child(
                Element::new("button")
                    .class("btn btn-primary")
                    .attr("type", "submit")
                    .text("Submit"),
            )
            .child(
                Element::new("button")
                    .class("btn btn-secondary")
                    .attr("type", "reset")
                    .text("Reset"),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_core::model::{ComponentProps, DataSource, PropPatch};
    use fb_core::{ComponentKind, FormId, catalog};

    fn form(kinds: &[ComponentKind]) -> FormData {
        FormData {
            form_id: FormId::generate(),
            form_name: "Preview".into(),
            version: "1.0.0".into(),
            components: kinds.iter().map(|&k| catalog::create_component(k)).collect(),
        }
    }

    #[test]
    fn preview_has_no_editing_chrome() {
        let data = form(&[ComponentKind::H1, ComponentKind::Text]);
        let html = render_preview(&data, &ResolvedOptions::new()).to_html();

        assert!(html.starts_with("<form class=\"row g-3\">"));
        assert!(!html.contains("fb-component"));
        assert!(!html.contains("data-resize"));
        assert!(html.contains("<button class=\"btn btn-primary\" type=\"submit\">Submit</button>"));
    }

    #[test]
    fn resolved_options_replace_manual_ones_per_component() {
        let mut data = form(&[ComponentKind::Select, ComponentKind::Select]);
        for c in &mut data.components {
            c.apply_all(&[
                PropPatch::DataSource(DataSource::Api),
                PropPatch::ApiUrl("https://api.test/items".into()),
            ]);
        }
        let remote_id = data.components[0].id;
        let mut resolved = ResolvedOptions::new();
        resolved.insert(remote_id, vec![ChoiceOption::new("Fetched", 9)]);

        let html = render_preview(&data, &resolved).to_html();
        // The first select shows the fetched list, the second falls back
        // to its manual options.
        assert!(html.contains(">Fetched<"));
        assert!(html.contains(">Option 1<"));
    }

    #[test]
    fn components_keep_document_order() {
        let data = form(&[ComponentKind::H1, ComponentKind::Email, ComponentKind::Separator]);
        let html = render_preview(&data, &ResolvedOptions::new()).to_html();
        let h1 = html.find("<h1").unwrap();
        let email = html.find("type=\"email\"").unwrap();
        let hr = html.find("<hr>").unwrap();
        assert!(h1 < email && email < hr);
    }

    #[test]
    fn checkbox_preview_keeps_checked_state() {
        let mut data = form(&[ComponentKind::Checkbox]);
        data.components[0].apply(&PropPatch::Checked(true));
        let html = render_preview(&data, &ResolvedOptions::new()).to_html();
        assert!(html.contains("type=\"checkbox\" "));
        assert!(html.contains(" checked>"));
        // Sanity: still the checkbox variant.
        assert!(matches!(data.components[0].props, ComponentProps::Checkbox(_)));
    }
}
