use crate::vertex::TextureCoordinate;

/// Texture coordinate given to corners without a texture index in a file whose other corners
/// have one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextureFallback {
    Fixed(TextureCoordinate),
    /// A fresh random coordinate for each corner, reproducible for a given seed.
    Random { seed: u64 },
}

impl Default for TextureFallback {
    fn default() -> Self {
        Self::Fixed([0.; 2])
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadOptions {
    pub texture_fallback: TextureFallback,
    /// Store `1 - v` instead of `v`, for a texture origin at the top left.
    pub flip_texture_v: bool,
    pub normalize_normals: bool,
}

impl LoadOptions {
    pub fn texture_fallback(mut self, texture_fallback: TextureFallback) -> Self {
        self.texture_fallback = texture_fallback;
        self
    }

    pub fn flip_texture_v(mut self, flip_texture_v: bool) -> Self {
        self.flip_texture_v = flip_texture_v;
        self
    }

    pub fn normalize_normals(mut self, normalize_normals: bool) -> Self {
        self.normalize_normals = normalize_normals;
        self
    }
}
