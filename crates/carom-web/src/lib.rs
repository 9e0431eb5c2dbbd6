pub mod runner;

pub use runner::DiagramRunner;

/// Generate all `#[wasm_bindgen]` exports for a diagram.
///
/// Generates the `thread_local!` storage for the DiagramRunner, a
/// `with_runner()` helper, and the exports through which the browser host
/// pulls the tessellated scene (vertex buffer pointer, counts, world
/// bounds) and pushes config/ball updates.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// fn example() -> (carom_diagram::DiagramConfig, carom_diagram::BallPlacement) {
///     (carom_diagram::DiagramConfig::default(), carom_diagram::BallPlacement::default())
/// }
///
/// carom_web::export_diagram!(example, "my-diagram");
/// ```
///
/// # Arguments
///
/// - `$builder`: a function returning the initial `(DiagramConfig, BallPlacement)`
/// - `$name`: a string literal used in the initialization log message
#[macro_export]
macro_rules! export_diagram {
    ($builder:expr, $name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::DiagramRunner>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::DiagramRunner) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Diagram not initialized. Call diagram_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn diagram_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let (config, placement) = $builder();
            let mut runner = $crate::DiagramRunner::new(config, placement);
            runner.render();

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $name);
        }

        /// Replace the diagram config from a JSON string and re-render.
        #[wasm_bindgen]
        pub fn diagram_load_config(json: &str) {
            with_runner(|r| r.load_config(json));
        }

        /// Move the three balls (table-space cm) and re-render.
        #[wasm_bindgen]
        pub fn diagram_set_balls(
            white_x: f32,
            white_y: f32,
            red_x: f32,
            red_y: f32,
            yellow_x: f32,
            yellow_y: f32,
        ) {
            with_runner(|r| {
                r.set_balls(
                    glam::Vec2::new(white_x, white_y),
                    glam::Vec2::new(red_x, red_y),
                    glam::Vec2::new(yellow_x, yellow_y),
                )
            });
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_vertices_ptr() -> *const f32 {
            with_runner(|r| r.vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_vertex_count() -> u32 {
            with_runner(|r| r.vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_marker_count() -> u32 {
            with_runner(|r| r.marker_count())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }
    };
}
