use log::debug;

use crate::units::Span;

use super::data::{ColumnData, GridData, ImageData, RowData};

pub const DEFAULT_TOTAL_IMAGES: usize = 100;
pub const DEFAULT_IMAGES_PER_ROW: usize = 4;
pub const DEFAULT_IMAGE_PATH: &str = "../IMAGES/reference.jpg";

/// Assembles the row/column/image tree for one grid.
///
/// Construction is a single pass: a new row starts whenever the running
/// image index is a multiple of `images_per_row`, and every column gets
/// the same [`Span`] derived from the twelve-unit system.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    total_images: usize,
    images_per_row: usize,
    image_path: String,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self {
            total_images: DEFAULT_TOTAL_IMAGES,
            images_per_row: DEFAULT_IMAGES_PER_ROW,
            image_path: DEFAULT_IMAGE_PATH.to_string(),
        }
    }
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_images(mut self, total_images: usize) -> Self {
        self.total_images = total_images;
        self
    }

    /// An `images_per_row` of 0 would break both the span arithmetic and
    /// the row-break modulo, so it is normalized to 1.
    pub fn images_per_row(mut self, images_per_row: usize) -> Self {
        self.images_per_row = images_per_row.max(1);
        self
    }

    pub fn image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = image_path.into();
        self
    }

    pub fn build(self) -> GridData {
        let span = Span::for_row_of(self.images_per_row as u32);
        let columns: Vec<ColumnData> = (0..self.total_images)
            .map(|i| ColumnData {
                span,
                image: ImageData::new(&self.image_path, i + 1),
            })
            .collect();
        let rows: Vec<RowData> = columns
            .chunks(self.images_per_row)
            .map(|columns| RowData {
                columns: columns.to_vec(),
            })
            .collect();
        debug!(
            "built grid: {} images across {} rows of {}",
            self.total_images,
            rows.len(),
            self.images_per_row
        );
        GridData { rows }
    }
}
