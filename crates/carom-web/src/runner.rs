use carom_diagram::{render, BallPlacement, DiagramConfig, Scene};
use glam::Vec2;

/// Owns one diagram's config and ball placement, and rebuilds the scene
/// whenever either changes.
///
/// Each concrete diagram creates a `thread_local!` DiagramRunner and
/// exports free functions via `#[wasm_bindgen]` (see `export_diagram!`);
/// the browser host reads the vertex buffer through the pointer
/// accessors and owns the window/dismiss loop.
pub struct DiagramRunner {
    config: DiagramConfig,
    placement: BallPlacement,
    scene: Option<Scene>,
}

impl DiagramRunner {
    pub fn new(config: DiagramConfig, placement: BallPlacement) -> Self {
        Self {
            config,
            placement,
            scene: None,
        }
    }

    /// Rebuild the scene from the current config and placement.
    ///
    /// An invalid config drops the scene (empty buffer, logged) rather
    /// than panicking across the wasm boundary.
    pub fn render(&mut self) {
        match render(&self.config, &self.placement) {
            Ok(scene) => self.scene = Some(scene),
            Err(e) => {
                log::error!("diagram render failed: {}", e);
                self.scene = None;
            }
        }
    }

    /// Replace the ball placement and re-render.
    pub fn set_balls(&mut self, white: Vec2, red: Vec2, yellow: Vec2) {
        self.placement = BallPlacement::new(white, red, yellow);
        self.render();
    }

    /// Replace the config from a JSON string and re-render. A string
    /// that fails to parse leaves the current config in place.
    pub fn load_config(&mut self, json: &str) {
        match DiagramConfig::from_json(json) {
            Ok(config) => {
                self.config = config;
                self.render();
            }
            Err(e) => log::warn!("ignoring bad diagram config: {}", e),
        }
    }

    // ---- Accessors read by the display host ----

    pub fn vertices_ptr(&self) -> *const f32 {
        self.scene
            .as_ref()
            .map(|s| s.vertices_ptr())
            .unwrap_or(std::ptr::null())
    }

    pub fn vertex_count(&self) -> u32 {
        self.scene.as_ref().map(|s| s.vertex_count() as u32).unwrap_or(0)
    }

    pub fn marker_count(&self) -> u32 {
        self.scene.as_ref().map(|s| s.markers().len() as u32).unwrap_or(0)
    }

    /// Canvas extent along the long axis. The host keeps the aspect ratio
    /// of these two so cm render isometrically.
    pub fn world_width(&self) -> f32 {
        self.config.height + 2.0 * self.config.band
    }

    /// Canvas extent along the short axis.
    pub fn world_height(&self) -> f32 {
        self.config.width + 2.0 * self.config.band
    }
}
