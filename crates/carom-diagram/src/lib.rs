pub mod balls;
pub mod labels;
pub mod markers;
pub mod scene;
pub mod table;
pub mod vector;
#[cfg(feature = "vectors")]
pub mod glyphs;

// Re-export key types at crate root for convenience
pub use balls::{BallId, BallPlacement, BALL_RADIUS};
pub use labels::{LabelSystem, LONG_EDGE_MARKERS, SHORT_EDGE_MARKERS};
pub use markers::{layout_markers, Edge, LabelAnchor, Marker};
pub use scene::{render, DiagramConfig, Scene};
pub use table::{TableError, TableSpec, DEFAULT_BAND, REGULATION_HEIGHT, REGULATION_WIDTH};
pub use vector::{Color, Vertex};

#[cfg(feature = "vectors")]
pub use vector::VectorBuffer;
