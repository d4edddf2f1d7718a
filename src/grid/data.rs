use crate::units::Span;

/// Class applied to every generated row container.
pub const ROW_CLASS: &str = "row mb-3";

/// Class marking generated images as fluid within their column.
pub const IMAGE_CLASS: &str = "img-fluid";

/// One placeholder image: a shared source path and a 1-based label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageData {
    pub src: String,
    pub alt: String,
}

impl ImageData {
    pub(crate) fn new(src: &str, position: usize) -> Self {
        Self {
            src: src.to_string(),
            alt: format!("Image {}", position),
        }
    }
}

/// A layout cell holding exactly one image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnData {
    pub span: Span,
    pub image: ImageData,
}

/// A horizontal grouping of up to `images_per_row` columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowData {
    pub columns: Vec<ColumnData>,
}

/// The descriptor tree one build produces, in insertion order.
///
/// Building is pure; nothing here touches the document. A renderer
/// applies the tree to its target in row-then-column order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GridData {
    pub rows: Vec<RowData>,
}

impl GridData {
    pub fn image_count(&self) -> usize {
        self.rows.iter().map(|row| row.columns.len()).sum()
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageData> {
        self.rows
            .iter()
            .flat_map(|row| row.columns.iter())
            .map(|column| &column.image)
    }
}
