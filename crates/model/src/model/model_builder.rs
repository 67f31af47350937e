use std::collections::{hash_map::Entry, HashMap};

use rand::{rngs::StdRng, Rng, SeedableRng};
use rs42::extensions::vec::TryPush;

use crate::{
    obj::{triangulate_face, DirectiveKind, Element, Face, FaceReference, ValidatedObj},
    options::{LoadOptions, TextureFallback},
    vertex::{Normal, Position, TextureCoordinate, Vertex, VertexLayout},
};

use super::{BuildError, Model, VertexIndex};

/// Turns validated directives into a [`Model`].
///
/// Faces are fan-triangulated and each corner becomes a [`Vertex`]. Corners resolving to
/// the same attribute values share the vertex stored first.
pub struct ModelBuilder<'o> {
    options: &'o LoadOptions,
    rng: Option<StdRng>,

    positions: Vec<Position>,
    texture_coordinates: Vec<TextureCoordinate>,
    normals: Vec<Normal>,
    name: Option<String>,

    vertices: Vec<Vertex>,
    vertex_indices: Vec<VertexIndex>,

    vertex_map: HashMap<Vertex, VertexIndex>,
}

impl<'o> ModelBuilder<'o> {
    pub fn new(options: &'o LoadOptions) -> Self {
        Self {
            options,
            rng: None,
            positions: Vec::new(),
            texture_coordinates: Vec::new(),
            normals: Vec::new(),
            name: None,
            vertices: Vec::new(),
            vertex_indices: Vec::new(),
            vertex_map: HashMap::new(),
        }
    }

    pub fn build(mut self, validated: ValidatedObj) -> Result<Model, BuildError> {
        let mut faces: Vec<(usize, Face)> = Vec::new();

        for directive in validated.directives {
            match directive.kind {
                DirectiveKind::Position(position) => self
                    .positions
                    .try_push(position)
                    .map_err(BuildError::AllocationFailure)?,
                DirectiveKind::TextureCoordinate(texture_coordinate) => self
                    .texture_coordinates
                    .try_push(texture_coordinate)
                    .map_err(BuildError::AllocationFailure)?,
                DirectiveKind::Normal(normal) => self
                    .normals
                    .try_push(normal)
                    .map_err(BuildError::AllocationFailure)?,
                DirectiveKind::ObjectName(name) => {
                    self.name.get_or_insert(name);
                }
                DirectiveKind::Face(face) => faces
                    .try_push((directive.line, face))
                    .map_err(BuildError::AllocationFailure)?,
            }
        }

        let layout = layout_of_faces(&faces);

        for (line, face) in &faces {
            let triangles =
                triangulate_face(&face.corners).map_err(BuildError::AllocationFailure)?;
            for corner in triangles.iter().flatten() {
                let vertex = self.resolve_corner(*line, corner, layout)?;
                self.add_vertex(vertex)?;
            }
        }

        let model = self.finish(layout);
        log::debug!(
            "built model {:?}: {} distinct vertices for {} corners ({:?})",
            model.name(),
            model.vertex_count(),
            model.vertex_indices().len(),
            model.layout(),
        );
        Ok(model)
    }

    fn finish(self, layout: VertexLayout) -> Model {
        let mut vertex_data = Vec::with_capacity(self.vertices.len() * layout.stride());
        for vertex in &self.vertices {
            vertex.write_components(&mut vertex_data);
        }

        Model {
            name: self.name,
            layout,
            vertex_data: vertex_data.into_boxed_slice(),
            vertex_indices: self.vertex_indices.into_boxed_slice(),
        }
    }
}

/// Normals are present when the first corner has one, every corner has the same structure.
/// A texture slot is present when any corner has a texture index.
fn layout_of_faces(faces: &[(usize, Face)]) -> VertexLayout {
    let normals = faces
        .first()
        .and_then(|(_, face)| face.corners.first())
        .is_some_and(|corner| corner.normal.is_some());
    let texture_coordinates = faces
        .iter()
        .flat_map(|(_, face)| &face.corners)
        .any(|corner| corner.texture_coordinate.is_some());

    VertexLayout::new(texture_coordinates, normals)
}

impl ModelBuilder<'_> {
    fn resolve_corner(
        &mut self,
        line: usize,
        corner: &FaceReference,
        layout: VertexLayout,
    ) -> Result<Vertex, BuildError> {
        let position = *resolve_index(&self.positions, corner.position, line, Element::Position)?;

        let texture_coordinate = match (layout.has_texture_coordinates(), corner.texture_coordinate)
        {
            (true, Some(index)) => {
                let [u, v] = *resolve_index(
                    &self.texture_coordinates,
                    index,
                    line,
                    Element::TextureCoordinate,
                )?;
                Some(if self.options.flip_texture_v {
                    [u, 1. - v]
                } else {
                    [u, v]
                })
            }
            (true, None) => Some(self.texture_fallback()),
            (false, None) => None,
            (false, Some(_)) => return Err(BuildError::CornerDoesNotMatchLayout { line }),
        };

        let normal = match (layout.has_normals(), corner.normal) {
            (true, Some(index)) => {
                let normal = *resolve_index(&self.normals, index, line, Element::Normal)?;
                Some(if self.options.normalize_normals {
                    normalize(normal)
                } else {
                    normal
                })
            }
            (false, None) => None,
            _ => return Err(BuildError::CornerDoesNotMatchLayout { line }),
        };

        Ok(Vertex::new(position, texture_coordinate, normal))
    }

    fn texture_fallback(&mut self) -> TextureCoordinate {
        match self.options.texture_fallback {
            TextureFallback::Fixed(texture_coordinate) => texture_coordinate,
            TextureFallback::Random { seed } => {
                let rng = self
                    .rng
                    .get_or_insert_with(|| StdRng::seed_from_u64(seed));
                [rng.gen(), rng.gen()]
            }
        }
    }

    fn add_vertex(&mut self, vertex: Vertex) -> Result<(), BuildError> {
        let index = match self.vertex_map.entry(vertex) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let index = VertexIndex::try_from(self.vertices.len()).map_err(|_| {
                    BuildError::TooManyVertices {
                        vertices: self.vertices.len() + 1,
                    }
                })?;
                self.vertices
                    .try_push(entry.key().clone())
                    .map_err(BuildError::AllocationFailure)?;
                *entry.insert(index)
            }
        };

        self.vertex_indices
            .try_push(index)
            .map_err(BuildError::AllocationFailure)
    }
}

/// Positive indices count from 1, negative ones from the end of the list.
fn resolve_index<T>(
    elements: &[T],
    index: i64,
    line: usize,
    element: Element,
) -> Result<&T, BuildError> {
    let len = elements.len();
    let resolved = if index > 0 {
        usize::try_from(index - 1).ok()
    } else {
        usize::try_from(index.unsigned_abs())
            .ok()
            .and_then(|distance| len.checked_sub(distance))
    };

    resolved.and_then(|i| elements.get(i)).ok_or_else(|| {
        log::error!(
            target: "model::internal",
            "line {line}: {element} index {index} out of bounds ({len} defined) after validation"
        );
        BuildError::ReferenceOutOfBounds {
            line,
            element,
            index,
            len,
        }
    })
}

fn normalize(normal: Normal) -> Normal {
    let length = normal.iter().map(|e| e * e).sum::<f32>().sqrt();
    if length == 0. {
        return normal;
    }
    normal.map(|e| e / length)
}
