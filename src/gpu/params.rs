//! Uniform parameter struct for the spectrum shader.
//!
//! Must match the WGSL `Params` definition exactly, including padding.

/// WGSL: struct Params { num_bars: u32, _pad0: u32, _pad1: u32, _pad2: u32 }
/// Padded to 16 bytes, the minimum uniform buffer alignment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BarParams {
    pub num_bars: u32,
    pub _pad: [u32; 3],
}

impl BarParams {
    /// Size of the uniform in bytes.
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    pub fn new(num_bars: u32) -> Self {
        Self {
            num_bars,
            _pad: [0; 3],
        }
    }
}
