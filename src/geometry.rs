//! User-adjustable quad the fragment shader is drawn onto.

use crate::gpu::Gpu;

/// Two triangles over the four corners, sharing the bottom-right/top-left
/// diagonal. Indexes into [`Corners::vertices`].
pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// Four vec3 positions
pub const QUAD_VERTEX_FLOATS: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Order the Options panel lists them in
    pub const ALL: [Corner; 4] = [
        Corner::TopRight,
        Corner::TopLeft,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Corner::TopRight => "Top Right",
            Corner::TopLeft => "Top Left",
            Corner::BottomRight => "Bottom Right",
            Corner::BottomLeft => "Bottom Left",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Corner positions in normalized device coordinates, each component in [-1, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corners {
    top_left: [f32; 2],
    top_right: [f32; 2],
    bottom_left: [f32; 2],
    bottom_right: [f32; 2],
}

impl Default for Corners {
    /// Covers the whole viewport
    fn default() -> Self {
        Self {
            top_left: [-1.0, 1.0],
            top_right: [1.0, 1.0],
            bottom_left: [-1.0, -1.0],
            bottom_right: [1.0, -1.0],
        }
    }
}

impl Corners {
    pub fn get(&self, corner: Corner) -> [f32; 2] {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    fn slot(&mut self, corner: Corner) -> &mut [f32; 2] {
        match corner {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomLeft => &mut self.bottom_left,
            Corner::BottomRight => &mut self.bottom_right,
        }
    }

    /// Set one component, clamped to [-1, 1]. NaN leaves the value unchanged.
    pub fn set(&mut self, corner: Corner, axis: Axis, value: f32) {
        if value.is_nan() {
            return;
        }
        let slot = self.slot(corner);
        let i = match axis {
            Axis::X => 0,
            Axis::Y => 1,
        };
        slot[i] = value.clamp(-1.0, 1.0);
    }

    /// Vertex data in the layout [`QUAD_INDICES`] expects:
    /// top-right, bottom-right, bottom-left, top-left, with z = 0.
    pub fn vertices(&self) -> [f32; QUAD_VERTEX_FLOATS] {
        let [trx, try_] = self.top_right;
        let [brx, bry] = self.bottom_right;
        let [blx, bly] = self.bottom_left;
        let [tlx, tly] = self.top_left;
        [
            trx, try_, 0.0, //
            brx, bry, 0.0, //
            blx, bly, 0.0, //
            tlx, tly, 0.0,
        ]
    }
}

/// GPU-side quad. The vertex buffer is allocated once and overwritten on
/// every [`rebuild`](Self::rebuild). Rebuilding and drawing leave the
/// buffer bindings changed.
pub struct GeometryQuad<G: Gpu> {
    buffers: G::QuadBuffers,
}

impl<G: Gpu> GeometryQuad<G> {
    pub fn new(gpu: &G, corners: &Corners) -> Result<Self, String> {
        let buffers = gpu.create_quad(QUAD_VERTEX_FLOATS, &QUAD_INDICES)?;
        let quad = Self { buffers };
        quad.rebuild(gpu, corners);
        Ok(quad)
    }

    pub fn rebuild(&self, gpu: &G, corners: &Corners) {
        gpu.update_quad(&self.buffers, &corners.vertices());
    }

    pub fn draw(&self, gpu: &G) {
        gpu.draw_quad(&self.buffers, QUAD_INDICES.len());
    }

    pub fn release(self, gpu: &G) {
        gpu.release_quad(self.buffers);
    }
}
