use crate::grid::{DEFAULT_IMAGES_PER_ROW, DEFAULT_IMAGE_PATH, DEFAULT_TOTAL_IMAGES};

#[cfg(target_arch = "wasm32")]
use log::info;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::error::Result;
#[cfg(target_arch = "wasm32")]
use crate::grid::{DomRenderer, GridBuilder};

/// Build parameters for one grid. The defaults are the reference
/// deployment: 100 images, four per row, into `#image-row`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub container_id: String,
    pub total_images: usize,
    pub images_per_row: usize,
    pub image_path: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            container_id: "image-row".to_string(),
            total_images: DEFAULT_TOTAL_IMAGES,
            images_per_row: DEFAULT_IMAGES_PER_ROW,
            image_path: DEFAULT_IMAGE_PATH.to_string(),
        }
    }
}

/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Debug);
        } else {
            let _ = env_logger::Builder::from_default_env().try_init();
        }
    }
}

/// Builds the grid described by `config` and applies it to the host
/// document, replacing whatever the container held before.
#[cfg(target_arch = "wasm32")]
pub fn run(config: &GridConfig) -> Result<()> {
    let grid = GridBuilder::new()
        .total_images(config.total_images)
        .images_per_row(config.images_per_row)
        .image_path(config.image_path.as_str())
        .build();
    let renderer =
        DomRenderer::from_window().ok_or_else(|| crate::error::Error::ContainerNotFound {
            id: config.container_id.clone(),
        })?;
    renderer.apply(&config.container_id, &grid)?;
    info!(
        "applied {} images to #{}",
        grid.image_count(),
        config.container_id
    );
    Ok(())
}

/// Entry point for the hosting page, called from its init routine.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn build_image_grid(
    container_id: &str,
    total_images: u32,
    images_per_row: u32,
    image_path: &str,
) -> std::result::Result<(), JsValue> {
    init_logging();
    let config = GridConfig {
        container_id: container_id.to_string(),
        total_images: total_images as usize,
        images_per_row: images_per_row as usize,
        image_path: image_path.to_string(),
    };
    run(&config).map_err(|e| JsValue::from_str(&e.to_string()))
}
