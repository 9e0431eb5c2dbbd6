use wasm_bindgen::prelude::*;

use carom_diagram::{BallPlacement, DiagramConfig};

/// Regulation table, standard diamonds, and the classic opening position:
/// white on the head line, red and yellow toward the foot spot.
fn shot_diagram() -> (DiagramConfig, BallPlacement) {
    (DiagramConfig::default(), BallPlacement::default())
}

carom_web::export_diagram!(shot_diagram, "shot-diagram");

#[cfg(test)]
mod tests {
    use super::*;
    use carom_diagram::render;

    #[test]
    fn example_scene_renders() {
        let (config, placement) = shot_diagram();
        let scene = render(&config, &placement).unwrap();
        assert_eq!(scene.markers().len(), 28);
        assert!(scene.vertex_count() > 0);
    }
}
