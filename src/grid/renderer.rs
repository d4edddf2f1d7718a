use std::fmt::Write;

use super::data::{GridData, IMAGE_CLASS, ROW_CLASS};

/// Renders a [`GridData`] to markup text.
///
/// The markup mirrors what [`DomRenderer`] builds in the document, so
/// the tree's structure can be exercised off the wasm target.
pub struct HtmlRenderer {}

impl HtmlRenderer {
    pub fn render(grid: &GridData) -> String {
        let mut out = String::new();
        for row in &grid.rows {
            let _ = writeln!(out, "<div class=\"{}\">", ROW_CLASS);
            for column in &row.columns {
                let _ = writeln!(
                    out,
                    "  <div class=\"{}\"><img src=\"{}\" alt=\"{}\" class=\"{}\"></div>",
                    column.span.class(),
                    escape_attr(&column.image.src),
                    escape_attr(&column.image.alt),
                    IMAGE_CLASS,
                );
            }
            let _ = writeln!(out, "</div>");
        }
        out
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Applies a [`GridData`] to a container element in the host document.
#[cfg(target_arch = "wasm32")]
pub struct DomRenderer {
    document: web_sys::Document,
}

#[cfg(target_arch = "wasm32")]
impl DomRenderer {
    /// `None` outside a browsing context (no window or document).
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Replaces the container's children with the grid's rows, in
    /// index order. Earlier content is discarded first, so re-applying
    /// rebuilds rather than appends.
    pub fn apply(&self, container_id: &str, grid: &GridData) -> crate::error::Result<()> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::UnwrapThrowExt;

        let container = self.document.get_element_by_id(container_id).ok_or_else(|| {
            crate::error::Error::ContainerNotFound {
                id: container_id.to_string(),
            }
        })?;
        container.set_inner_html("");

        for row in &grid.rows {
            // Element creation on literal tag names cannot fail.
            let row_el = self.document.create_element("div").unwrap_throw();
            row_el.set_class_name(ROW_CLASS);
            container.append_child(&row_el).unwrap_throw();

            for column in &row.columns {
                let col_el = self.document.create_element("div").unwrap_throw();
                col_el.set_class_name(&column.span.class());

                let img: web_sys::HtmlImageElement = self
                    .document
                    .create_element("img")
                    .unwrap_throw()
                    .dyn_into()
                    .unwrap_throw();
                img.set_src(&column.image.src);
                img.set_alt(&column.image.alt);
                img.set_class_name(IMAGE_CLASS);

                col_el.append_child(&img).unwrap_throw();
                row_el.append_child(&col_el).unwrap_throw();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::GridBuilder;

    #[test]
    fn markup_matches_the_tree() {
        let grid = GridBuilder::new()
            .total_images(5)
            .images_per_row(2)
            .image_path("x.jpg")
            .build();
        let html = HtmlRenderer::render(&grid);
        assert_eq!(html.matches(ROW_CLASS).count(), 3);
        assert_eq!(html.matches("col-sm-6").count(), 5);
        assert_eq!(html.matches("<img ").count(), 5);
        assert_eq!(html.matches(IMAGE_CLASS).count(), 5);
        assert!(html.contains("alt=\"Image 1\""));
        assert!(html.contains("alt=\"Image 5\""));
        assert!(html.contains("src=\"x.jpg\""));
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let grid = GridBuilder::new().total_images(0).build();
        assert_eq!(HtmlRenderer::render(&grid), "");
    }

    #[test]
    fn rendering_is_deterministic() {
        let grid = GridBuilder::new().total_images(8).build();
        assert_eq!(HtmlRenderer::render(&grid), HtmlRenderer::render(&grid));
    }

    #[test]
    fn attribute_text_is_escaped() {
        let grid = GridBuilder::new()
            .total_images(1)
            .image_path("a\"b&c.jpg")
            .build();
        let html = HtmlRenderer::render(&grid);
        assert!(html.contains("src=\"a&quot;b&amp;c.jpg\""));
    }
}
