pub(crate) mod error;
pub(crate) mod grid;
pub(crate) mod manager;
pub(crate) mod units;

pub use error::{Error, Result};
pub use grid::{
    ColumnData, GridBuilder, GridData, HtmlRenderer, ImageData, RowData, IMAGE_CLASS, ROW_CLASS,
};
pub use manager::{init_logging, GridConfig};
pub use units::Span;

#[cfg(target_arch = "wasm32")]
pub use grid::DomRenderer;
#[cfg(target_arch = "wasm32")]
pub use manager::{build_image_grid, run};
