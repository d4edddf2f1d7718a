mod builder;
mod data;
mod renderer;

pub use builder::{
    GridBuilder, DEFAULT_IMAGES_PER_ROW, DEFAULT_IMAGE_PATH, DEFAULT_TOTAL_IMAGES,
};
pub use data::{ColumnData, GridData, ImageData, RowData, IMAGE_CLASS, ROW_CLASS};

#[cfg(target_arch = "wasm32")]
pub use renderer::DomRenderer;
pub use renderer::HtmlRenderer;
