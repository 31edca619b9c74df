//! Static particle grid; all displacement happens on the GPU.

use bytemuck::{Pod, Zeroable};

use crate::params::ParticleGridConfig;

/// Per-instance particle data (base position before wave displacement)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
}

impl ParticleInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    /// Instance-stepped vertex buffer layout
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Immutable `rows × cols` grid of particles in the z = 0 plane
#[derive(Debug, Clone)]
pub struct ParticleField {
    instances: Vec<ParticleInstance>,
    rows: usize,
    cols: usize,
    spacing: f32,
}

impl ParticleField {
    /// Lay out the grid: point `(x, y)` sits at `((x - rows/2)·s, (y - cols/2)·s, 0)`
    pub fn new(config: &ParticleGridConfig) -> Self {
        let rows = config.rows;
        let cols = config.cols;
        let spacing = config.spacing;
        let half_rows = rows as f32 / 2.0;
        let half_cols = cols as f32 / 2.0;

        let mut instances = Vec::with_capacity(config.particle_count());
        for x in 0..rows {
            for y in 0..cols {
                instances.push(ParticleInstance {
                    position: [
                        (x as f32 - half_rows) * spacing,
                        (y as f32 - half_cols) * spacing,
                        0.0,
                    ],
                });
            }
        }

        Self {
            instances,
            rows,
            cols,
            spacing,
        }
    }

    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }
}
