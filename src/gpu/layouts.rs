//! Bind group layout builders for GPU pipelines.

use wgpu::{BindGroupLayout, BindGroupLayoutEntry, Device, ShaderStages};

/// Binding index of the magnitude storage buffer.
pub const MAGNITUDES_BINDING: u32 = 0;

/// Binding index of the `Params` uniform buffer.
pub const PARAMS_BINDING: u32 = 1;

/// Builder for creating bind group layouts with common patterns.
pub struct BindGroupLayoutBuilder {
    label: Option<&'static str>,
    entries: Vec<BindGroupLayoutEntry>,
}

impl BindGroupLayoutBuilder {
    /// Create a new bind group layout builder.
    pub fn new(label: &'static str) -> Self {
        Self {
            label: Some(label),
            entries: Vec::new(),
        }
    }

    /// Add a uniform buffer entry.
    pub fn uniform(self, binding: u32, visibility: ShaderStages) -> Self {
        self.buffer(binding, visibility, wgpu::BufferBindingType::Uniform)
    }

    /// Add a read-only storage buffer entry.
    pub fn storage_read_only(self, binding: u32, visibility: ShaderStages) -> Self {
        self.buffer(
            binding,
            visibility,
            wgpu::BufferBindingType::Storage { read_only: true },
        )
    }

    fn buffer(
        mut self,
        binding: u32,
        visibility: ShaderStages,
        ty: wgpu::BufferBindingType,
    ) -> Self {
        self.entries.push(BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        });
        self
    }

    /// Number of entries added so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the bind group layout.
    pub fn build(self, device: &Device) -> BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: self.label,
            entries: &self.entries,
        })
    }
}

/// Builder preloaded with the spectrum layout (magnitudes, params).
pub fn spectrum_layout_builder() -> BindGroupLayoutBuilder {
    BindGroupLayoutBuilder::new("spectrum_bind_group_layout")
        .storage_read_only(MAGNITUDES_BINDING, ShaderStages::VERTEX)
        .uniform(PARAMS_BINDING, ShaderStages::VERTEX)
}

/// Create the spectrum bind group layout.
pub fn create_spectrum_layout(device: &Device) -> BindGroupLayout {
    spectrum_layout_builder().build(device)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::GpuContext;

    #[test]
    fn test_spectrum_layout_entries() {
        let builder = spectrum_layout_builder();
        assert_eq!(builder.len(), 2);

        let magnitudes = &builder.entries[0];
        assert_eq!(magnitudes.binding, MAGNITUDES_BINDING);
        assert_eq!(magnitudes.visibility, ShaderStages::VERTEX);
        assert!(matches!(
            magnitudes.ty,
            wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only: true },
                ..
            }
        ));

        let params = &builder.entries[1];
        assert_eq!(params.binding, PARAMS_BINDING);
        assert!(matches!(
            params.ty,
            wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_spectrum_layout_creation() {
        let ctx = match GpuContext::new().await {
            Ok(ctx) => ctx,
            Err(_) => return, // Skip if no GPU
        };
        if !ctx.supports_vertex_storage() {
            return;
        }

        let _layout = create_spectrum_layout(&ctx.device);
    }
}
