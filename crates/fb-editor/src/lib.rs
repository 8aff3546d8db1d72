pub mod canvas;
pub mod dropzone;
pub mod gesture;
pub mod input;
pub mod panel;
pub mod resize;
pub mod toolbar;

#[cfg(test)]
mod testutil;

pub use canvas::{CanvasController, CanvasItem};
pub use dropzone::{DropIndicator, DropZoneController};
pub use gesture::{GestureArbiter, GestureKind};
pub use input::{Edge, HitTarget, InputEvent};
pub use panel::{Field, PanelController, PanelError, PanelView};
pub use resize::{ResizeController, column_class_for, width_label};
pub use toolbar::{
    ClipboardTarget, ClipboardUnavailable, Confirm, DownloadTarget, PreviewError, SaveOutcome,
    ToolbarController,
};
