use bytemuck::{Pod, Zeroable};

/// Per-instance data for the page's circle pipeline.
/// 8 floats = 32 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub x: f32,
    pub y: f32,
    /// Already multiplied by the entity's scale.
    pub radius: f32,
    pub alpha: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub depth: f32,
}

impl CircleInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Depth-ordered circles for one frame.
pub struct CircleBuffer {
    instances: Vec<CircleInstance>,
}

impl CircleBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: CircleInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances(&self) -> &[CircleInstance] {
        &self.instances
    }

    /// Flat float view for copying into a GPU or JS buffer.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    pub(crate) fn sort_by_depth(&mut self) {
        self.instances.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    }
}

impl Default for CircleBuffer {
    fn default() -> Self {
        Self::new()
    }
}
