use std::mem::size_of;

use ash::vk;

pub type Position = [f32; 3];
pub type TextureCoordinate = [f32; 2];
pub type Normal = [f32; 3];

const POSITION_LOCATION: u32 = 0;
const TEXTURE_COORDINATE_LOCATION: u32 = 1;
const NORMAL_LOCATION: u32 = 2;

/// Attribute composition shared by every vertex of a model.
///
/// The position always comes first, followed by the texture coordinate and then the normal
/// when the layout has them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexLayout {
    Position,
    PositionTexture,
    PositionNormal,
    PositionTextureNormal,
}

impl VertexLayout {
    pub fn new(texture_coordinates: bool, normals: bool) -> Self {
        match (texture_coordinates, normals) {
            (false, false) => Self::Position,
            (true, false) => Self::PositionTexture,
            (false, true) => Self::PositionNormal,
            (true, true) => Self::PositionTextureNormal,
        }
    }

    pub fn has_texture_coordinates(self) -> bool {
        matches!(self, Self::PositionTexture | Self::PositionTextureNormal)
    }

    pub fn has_normals(self) -> bool {
        matches!(self, Self::PositionNormal | Self::PositionTextureNormal)
    }

    /// Number of `f32` components per vertex.
    pub fn stride(self) -> usize {
        let mut stride = 3;
        if self.has_texture_coordinates() {
            stride += 2;
        }
        if self.has_normals() {
            stride += 3;
        }
        stride
    }

    pub fn stride_bytes(self) -> u32 {
        (self.stride() * size_of::<f32>()) as u32
    }

    /// Byte offset of the texture coordinate inside a vertex.
    pub fn texture_coordinate_offset(self) -> Option<u32> {
        self.has_texture_coordinates()
            .then_some(size_of::<Position>() as u32)
    }

    /// Byte offset of the normal inside a vertex.
    pub fn normal_offset(self) -> Option<u32> {
        self.has_normals().then(|| {
            let offset = size_of::<Position>();
            if self.has_texture_coordinates() {
                (offset + size_of::<TextureCoordinate>()) as u32
            } else {
                offset as u32
            }
        })
    }

    pub fn binding_description(self) -> vk::VertexInputBindingDescription {
        vk::VertexInputBindingDescription::default()
            .binding(0)
            .stride(self.stride_bytes())
            .input_rate(vk::VertexInputRate::VERTEX)
    }

    /// Locations are fixed: 0 for the position, 1 for the texture coordinate and 2 for the
    /// normal, so a shader keeps its bindings whatever the layout.
    pub fn attribute_descriptions(self) -> Vec<vk::VertexInputAttributeDescription> {
        let mut descriptions = vec![vk::VertexInputAttributeDescription::default()
            .binding(0)
            .location(POSITION_LOCATION)
            .format(vk::Format::R32G32B32_SFLOAT)
            .offset(0)];

        if let Some(offset) = self.texture_coordinate_offset() {
            descriptions.push(
                vk::VertexInputAttributeDescription::default()
                    .binding(0)
                    .location(TEXTURE_COORDINATE_LOCATION)
                    .format(vk::Format::R32G32_SFLOAT)
                    .offset(offset),
            );
        }
        if let Some(offset) = self.normal_offset() {
            descriptions.push(
                vk::VertexInputAttributeDescription::default()
                    .binding(0)
                    .location(NORMAL_LOCATION)
                    .format(vk::Format::R32G32B32_SFLOAT)
                    .offset(offset),
            );
        }
        descriptions
    }
}

/// One resolved face corner.
///
/// Two vertices are equal when every attribute value compares equal as a float, which is
/// what lets the builder reuse an already stored vertex.
#[derive(Clone, Debug)]
pub struct Vertex {
    position: Position,
    texture_coordinate: Option<TextureCoordinate>,
    normal: Option<Normal>,
}

type VertexBits = ([u32; 3], Option<[u32; 2]>, Option<[u32; 3]>);

impl Vertex {
    pub fn new(
        position: Position,
        texture_coordinate: Option<TextureCoordinate>,
        normal: Option<Normal>,
    ) -> Self {
        Self {
            position,
            texture_coordinate,
            normal,
        }
    }

    /// Appends the components in layout order.
    pub fn write_components(&self, dest: &mut Vec<f32>) {
        dest.extend_from_slice(&self.position);
        if let Some(texture_coordinate) = &self.texture_coordinate {
            dest.extend_from_slice(texture_coordinate);
        }
        if let Some(normal) = &self.normal {
            dest.extend_from_slice(normal);
        }
    }

    fn to_tuple_of_bits(&self) -> VertexBits {
        (
            self.position.map(float_bits),
            self.texture_coordinate.map(|e| e.map(float_bits)),
            self.normal.map(|e| e.map(float_bits)),
        )
    }
}

// -0.0 == 0.0, so both get the same bits
fn float_bits(value: f32) -> u32 {
    if value == 0. {
        0
    } else {
        value.to_bits()
    }
}

impl std::hash::Hash for Vertex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_tuple_of_bits().hash(state)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.to_tuple_of_bits().eq(&other.to_tuple_of_bits())
    }
}

impl Eq for Vertex {}
