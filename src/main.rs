use log::debug;

use imagegrid::*;

fn main() {
    init_logging();
    let config = GridConfig::default();
    let grid = GridBuilder::new()
        .total_images(config.total_images)
        .images_per_row(config.images_per_row)
        .image_path(config.image_path)
        .build();
    debug!(
        "grid for #{}: {} rows",
        config.container_id,
        grid.rows.len()
    );
    print!("{}", HtmlRenderer::render(&grid));
}
