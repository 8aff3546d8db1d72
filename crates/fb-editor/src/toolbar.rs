//! Toolbar controller: save, load, clear, preview, and the keyboard
//! shortcuts.
//!
//! Host capabilities (clipboard, file download) come in as traits so the
//! controller stays testable; the save flow prefers the clipboard and
//! falls back to a download named after the form id.

use fb_core::FormStore;
use fb_core::io::{ImportError, export_form, import_form};
use fb_remote::{OptionSource, OptionsRequest};
use fb_render::preview::ResolvedOptions;
use fb_render::{Element, render_preview};
use std::rc::Rc;
use thiserror::Error;

/// Explicit confirmation token for destructive operations; the host
/// constructs one only after the user has confirmed.
#[derive(Debug, Clone, Copy)]
pub struct Confirm;

#[derive(Debug, Error)]
#[error("clipboard unavailable")]
pub struct ClipboardUnavailable;

pub trait ClipboardTarget {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardUnavailable>;
}

pub trait DownloadTarget {
    fn download(&self, filename: &str, contents: &str);
}

/// Which path a save took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Clipboard,
    Download { filename: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreviewError {
    #[error("the form has no components")]
    EmptyForm,
}

pub struct ToolbarController {
    store: Rc<FormStore>,
    source: Rc<dyn OptionSource>,
}

impl ToolbarController {
    pub fn new(store: Rc<FormStore>, source: Rc<dyn OptionSource>) -> Self {
        Self { store, source }
    }

    /// Export the current document. Clipboard first; if the host reports
    /// it unavailable, fall back to a file download.
    pub fn save_form(
        &self,
        clipboard: &dyn ClipboardTarget,
        download: &dyn DownloadTarget,
    ) -> SaveOutcome {
        let data = self.store.form_data();
        let json = export_form(&data);

        match clipboard.copy_text(&json) {
            Ok(()) => SaveOutcome::Clipboard,
            Err(e) => {
                log::warn!("{e}; falling back to download");
                let filename = format!("form-{}.json", data.form_id);
                download.download(&filename, &json);
                SaveOutcome::Download { filename }
            }
        }
    }

    /// Validate then load. On error the document is untouched.
    pub fn load_form(&self, json: &str) -> Result<(), ImportError> {
        let data = import_form(json)?;
        self.store.load(data);
        Ok(())
    }

    /// Discard everything. Destructive — requires the host's
    /// confirmation token.
    pub fn clear_form(&self, _confirm: Confirm) {
        self.store.clear();
    }

    /// Resolve remote options over a fresh snapshot (sequentially, in
    /// document order) and render the read-only preview.
    pub async fn preview(&self) -> Result<Element, PreviewError> {
        let data = self.store.form_data();
        if data.components.is_empty() {
            return Err(PreviewError::EmptyForm);
        }

        let mut resolved = ResolvedOptions::new();
        for component in &data.components {
            let Some(choice) = component.props.choice() else {
                continue;
            };
            if !choice.wants_remote_options() {
                continue;
            }
            match self.source.fetch_options(&OptionsRequest::from(choice)).await {
                Ok(options) => {
                    resolved.insert(component.id, options);
                }
                Err(e) => {
                    log::warn!("preview options fetch for {} failed: {e}", component.id);
                }
            }
        }
        Ok(render_preview(&data, &resolved))
    }

    /// Delete shortcut: remove the selected component, if any.
    pub fn delete_selected(&self) -> bool {
        match self.store.selected_id() {
            Some(id) => self.store.remove_component(id).is_some(),
            None => false,
        }
    }

    /// Escape shortcut.
    pub fn escape_deselect(&self) {
        self.store.deselect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{StaticSource, store_with};
    use fb_core::ComponentKind;
    use fb_core::model::{DataSource, PropPatch};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct NoClipboard;
    impl ClipboardTarget for NoClipboard {
        fn copy_text(&self, _text: &str) -> Result<(), ClipboardUnavailable> {
            Err(ClipboardUnavailable)
        }
    }

    struct OkClipboard(RefCell<String>);
    impl ClipboardTarget for OkClipboard {
        fn copy_text(&self, text: &str) -> Result<(), ClipboardUnavailable> {
            *self.0.borrow_mut() = text.to_string();
            Ok(())
        }
    }

    #[derive(Default)]
    struct FileSink(RefCell<Vec<(String, String)>>);
    impl DownloadTarget for FileSink {
        fn download(&self, filename: &str, contents: &str) {
            self.0.borrow_mut().push((filename.into(), contents.into()));
        }
    }

    fn toolbar(kinds: &[ComponentKind]) -> (Rc<FormStore>, ToolbarController) {
        let (store, _) = store_with(kinds);
        let toolbar = ToolbarController::new(store.clone(), Rc::new(StaticSource::empty()));
        (store, toolbar)
    }

    #[test]
    fn save_prefers_the_clipboard() {
        let (store, toolbar) = toolbar(&[ComponentKind::Text]);
        let clipboard = OkClipboard(RefCell::new(String::new()));
        let files = FileSink::default();

        assert_eq!(toolbar.save_form(&clipboard, &files), SaveOutcome::Clipboard);
        assert!(files.0.borrow().is_empty());
        assert!(clipboard.0.borrow().contains(store.form_data().form_id.as_str()));
    }

    #[test]
    fn save_falls_back_to_download() {
        let (store, toolbar) = toolbar(&[ComponentKind::Text]);
        let files = FileSink::default();

        let outcome = toolbar.save_form(&NoClipboard, &files);
        let expected = format!("form-{}.json", store.form_data().form_id);
        assert_eq!(outcome, SaveOutcome::Download { filename: expected.clone() });

        let saved = files.0.borrow();
        assert_eq!(saved[0].0, expected);
        assert!(saved[0].1.contains("\"components\""));
    }

    #[test]
    fn save_load_roundtrip() {
        let (_, toolbar) = toolbar(&[ComponentKind::H1, ComponentKind::Email]);
        let clipboard = OkClipboard(RefCell::new(String::new()));
        toolbar.save_form(&clipboard, &FileSink::default());
        let json = clipboard.0.borrow().clone();

        let (other_store, other_toolbar) = self::toolbar(&[]);
        other_toolbar.load_form(&json).unwrap();
        assert_eq!(other_store.len(), 2);
    }

    #[test]
    fn bad_json_leaves_the_document_alone() {
        let (store, toolbar) = toolbar(&[ComponentKind::Text]);
        let before = store.form_data();

        assert!(toolbar.load_form("{\"components\": []}").is_err());
        assert_eq!(store.form_data(), before);
    }

    #[test]
    fn clear_requires_the_confirmation_token() {
        let (store, toolbar) = toolbar(&[ComponentKind::Text]);
        toolbar.clear_form(Confirm);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn preview_of_an_empty_form_is_refused() {
        let (_, toolbar) = toolbar(&[]);
        assert_eq!(toolbar.preview().await, Err(PreviewError::EmptyForm));
    }

    #[tokio::test]
    async fn preview_resolves_remote_options() {
        let (store, ids) = store_with(&[ComponentKind::Select]);
        store.update_component(
            ids[0],
            &[
                PropPatch::DataSource(DataSource::Api),
                PropPatch::ApiUrl("https://api.test/items".into()),
            ],
        );
        let toolbar = ToolbarController::new(
            store,
            Rc::new(StaticSource::with_options(&[("Fetched", 1)])),
        );

        let html = toolbar.preview().await.unwrap().to_html();
        assert!(html.contains(">Fetched<"));
        assert!(html.contains("type=\"submit\""));
    }

    #[test]
    fn keyboard_shortcuts() {
        let (store, ids) = store_with(&[ComponentKind::Text]);
        let toolbar = ToolbarController::new(store.clone(), Rc::new(StaticSource::empty()));

        assert!(!toolbar.delete_selected());
        store.select_component(ids[0]);
        assert!(toolbar.delete_selected());
        assert!(store.is_empty());

        toolbar.escape_deselect();
        assert_eq!(store.selected_id(), None);
    }
}
