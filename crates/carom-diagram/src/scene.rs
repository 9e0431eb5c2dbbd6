//! Scene assembly: configure, draw surface, draw markers, draw balls.
//!
//! `render` is pure — it turns a config and a ball placement into a
//! `Scene` holding the layout records and (with the `vectors` feature)
//! the tessellated vertex buffer. Displaying the scene is the host's job.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::balls::{BallId, BallPlacement};
#[cfg(feature = "vectors")]
use crate::balls::BALL_RADIUS;
use crate::labels::LabelSystem;
use crate::markers::{layout_markers, Marker};
use crate::table::{TableError, TableSpec, DEFAULT_BAND, REGULATION_HEIGHT, REGULATION_WIDTH};
use crate::vector::Color;
#[cfg(feature = "vectors")]
use crate::glyphs;
#[cfg(feature = "vectors")]
use crate::markers::LabelAnchor;
#[cfg(feature = "vectors")]
use crate::vector::VectorBuffer;

// Palette, matching the classic printed diagram
const BAND_COLOR: Color = Color::BLACK;
const SURFACE_COLOR: Color = Color::rgb(0.827, 0.827, 0.827); // light gray
const LABEL_COLOR: Color = Color::rgb(0.0, 0.392, 0.0); // dark green
const MARKER_COLOR: Color = Color::WHITE;
const OUTLINE_COLOR: Color = Color::BLACK;

const BORDER_WIDTH: f32 = 2.0;
const MARKER_RADIUS: f32 = 1.8;
const BALL_OUTLINE_WIDTH: f32 = 0.8;
const LABEL_SIZE: f32 = 6.0;
/// Gap between the table edge and the near side of a label (cm).
const LABEL_OFFSET: f32 = 5.0;

/// Everything the renderer needs, deserializable from a JSON string.
/// Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Playing surface long axis (cm).
    pub height: f32,
    /// Playing surface short axis (cm).
    pub width: f32,
    /// Cushion band thickness (cm).
    pub band: f32,
    /// Label-system name; unknown names fall back to "standard".
    pub label_system: String,
    /// Clamp ball centers so the full circle stays on the surface.
    pub clamp_balls: bool,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            height: REGULATION_HEIGHT,
            width: REGULATION_WIDTH,
            band: DEFAULT_BAND,
            label_system: "standard".to_string(),
            clamp_balls: true,
        }
    }
}

impl DiagramConfig {
    /// Parse a config from its JSON form; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate the dimensions into a `TableSpec`.
    pub fn table(&self) -> Result<TableSpec, TableError> {
        TableSpec::new(self.height, self.width, self.band)
    }

    /// Resolve the label system, falling back to standard.
    pub fn system(&self) -> LabelSystem {
        LabelSystem::from_name(&self.label_system)
    }
}

/// One assembled diagram: table, resolved labels, laid-out markers, balls,
/// and the tessellated geometry. Built fresh per render, consumed by a
/// single display handoff.
pub struct Scene {
    table: TableSpec,
    system: LabelSystem,
    markers: Vec<Marker>,
    balls: [(BallId, Vec2); 3],
    #[cfg(feature = "vectors")]
    vectors: VectorBuffer,
}

impl Scene {
    pub fn table(&self) -> &TableSpec {
        &self.table
    }

    pub fn system(&self) -> LabelSystem {
        self.system
    }

    /// All 28 diamond markers in layout order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Ball positions as drawn (after optional clamping), in draw order.
    pub fn balls(&self) -> &[(BallId, Vec2); 3] {
        &self.balls
    }

    /// Canvas bounds including the band.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        self.table.bounds()
    }

    /// Full canvas extent along the long axis.
    pub fn world_width(&self) -> f32 {
        self.table.world_width()
    }

    /// Full canvas extent along the short axis.
    pub fn world_height(&self) -> f32 {
        self.table.world_height()
    }

    /// The flat interleaved `x y r g b a` vertex buffer.
    #[cfg(feature = "vectors")]
    pub fn vertices(&self) -> &[f32] {
        self.vectors.vertices()
    }

    #[cfg(feature = "vectors")]
    pub fn vertex_count(&self) -> usize {
        self.vectors.vertex_count()
    }

    /// Raw pointer to the vertex buffer (for host-side copies).
    #[cfg(feature = "vectors")]
    pub fn vertices_ptr(&self) -> *const f32 {
        self.vectors.vertices_ptr()
    }
}

/// Assemble a scene: surface and band, then markers, then balls.
///
/// The only failure is invalid table dimensions; label resolution and
/// ball placement never error.
pub fn render(config: &DiagramConfig, placement: &BallPlacement) -> Result<Scene, TableError> {
    let table = config.table()?;
    let system = config.system();

    let placement = if config.clamp_balls {
        placement.clamped(&table)
    } else {
        *placement
    };

    let markers = layout_markers(&table, system);
    let balls = [
        (BallId::White, placement.white),
        (BallId::Red, placement.red),
        (BallId::Yellow, placement.yellow),
    ];

    #[cfg(feature = "vectors")]
    let vectors = {
        let mut buf = VectorBuffer::new();
        draw_surface(&mut buf, &table);
        draw_markers(&mut buf, &table, &markers);
        draw_balls(&mut buf, &balls);
        buf
    };

    Ok(Scene {
        table,
        system,
        markers,
        balls,
        #[cfg(feature = "vectors")]
        vectors,
    })
}

/// Band, playing surface, and border outline — back to front. The stroked
/// border goes last of the three so the edge stays visible.
#[cfg(feature = "vectors")]
fn draw_surface(buf: &mut VectorBuffer, table: &TableSpec) {
    let (min, _) = table.bounds();
    buf.fill_rect(min, table.world_width(), table.world_height(), BAND_COLOR);
    buf.fill_rect(Vec2::ZERO, table.height, table.width, SURFACE_COLOR);
    buf.stroke_rect(
        min,
        table.world_width(),
        table.world_height(),
        BORDER_WIDTH,
        OUTLINE_COLOR,
    );
}

#[cfg(feature = "vectors")]
fn draw_markers(buf: &mut VectorBuffer, table: &TableSpec, markers: &[Marker]) {
    for m in markers {
        let diamond = [
            Vec2::new(m.pos.x, m.pos.y + MARKER_RADIUS),
            Vec2::new(m.pos.x + MARKER_RADIUS, m.pos.y),
            Vec2::new(m.pos.x, m.pos.y - MARKER_RADIUS),
            Vec2::new(m.pos.x - MARKER_RADIUS, m.pos.y),
        ];
        buf.fill_polygon(&diamond, MARKER_COLOR);

        let text_w = glyphs::measure(&m.label, LABEL_SIZE);
        let origin = match m.edge.label_anchor() {
            LabelAnchor::Below => Vec2::new(
                m.pos.x - text_w / 2.0,
                -LABEL_OFFSET - LABEL_SIZE,
            ),
            LabelAnchor::Above => {
                Vec2::new(m.pos.x - text_w / 2.0, table.width + LABEL_OFFSET)
            }
            LabelAnchor::LeftOf => Vec2::new(
                -LABEL_OFFSET - text_w,
                m.pos.y - LABEL_SIZE / 2.0,
            ),
            LabelAnchor::RightOf => Vec2::new(
                table.height + LABEL_OFFSET,
                m.pos.y - LABEL_SIZE / 2.0,
            ),
        };
        glyphs::draw_text(buf, &m.label, origin, LABEL_SIZE, LABEL_COLOR);
    }
}

/// Balls are topmost: filled circle plus a black outline, drawn in
/// white/red/yellow order.
#[cfg(feature = "vectors")]
fn draw_balls(buf: &mut VectorBuffer, balls: &[(BallId, Vec2); 3]) {
    for (id, pos) in balls {
        buf.fill_circle(*pos, BALL_RADIUS, id.color());
        buf.stroke_circle(*pos, BALL_RADIUS, BALL_OUTLINE_WIDTH, OUTLINE_COLOR);
    }
}
