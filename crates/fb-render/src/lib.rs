pub mod component;
pub mod hit;
pub mod markup;
pub mod preview;

pub use component::{
    FormFieldRenderer, LayoutRenderer, RenderComponent, TypographyRenderer, render_canvas_item,
    renderer_for,
};
pub use hit::{InsertPoint, ItemBounds, Rect, hit_test, insertion_point};
pub use markup::Element;
pub use preview::{ResolvedOptions, render_preview};
