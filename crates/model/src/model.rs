mod errors;
mod model_builder;

pub use errors::{BuildError, LoadError};
pub use model_builder::ModelBuilder;

use std::path::Path;

use rs42::extensions::PipeLine;

use crate::{
    diagnostics::{Diagnostics, LogDiagnostics},
    obj::{ValidatedObj, Validator},
    options::LoadOptions,
    vertex::VertexLayout,
    ObjFile,
};

pub type VertexIndex = u32;

/// Deduplicated vertex buffer and triangle index buffer of one OBJ file.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    name: Option<String>,
    layout: VertexLayout,
    vertex_data: Box<[f32]>,
    vertex_indices: Box<[VertexIndex]>,
}

// Constructors:

impl Model {
    pub fn load(
        path: impl AsRef<Path>,
        options: &LoadOptions,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let validated = Validator::new(diagnostics).validate_file(path)?;
        let model = Self::from_validated(validated, options)?;

        log::info!(
            "Loaded {}: {} vertices, {} triangles",
            path.display(),
            model.vertex_count(),
            model.triangle_count(),
        );
        Ok(model)
    }

    /// Loads a model from lines already in memory.
    pub fn from_lines<I, S>(
        lines: I,
        options: &LoadOptions,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let validated = Validator::new(diagnostics).validate(lines)?;
        Self::from_validated(validated, options)?.pipe(Ok)
    }

    pub fn from_validated(
        validated: ValidatedObj,
        options: &LoadOptions,
    ) -> Result<Self, BuildError> {
        ModelBuilder::new(options).build(validated)
    }
}

impl TryFrom<ObjFile<'_>> for Model {
    type Error = LoadError;

    fn try_from(obj_file: ObjFile) -> Result<Self, Self::Error> {
        Self::load(obj_file.0, &LoadOptions::default(), &mut LogDiagnostics)
    }
}

// Getters:

impl Model {
    /// Name given by the first `o` line of the file.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    /// Components of every distinct vertex, `layout().stride()` floats per vertex.
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertex_data
    }

    pub fn vertex_indices(&self) -> &[VertexIndex] {
        &self.vertex_indices
    }

    pub fn vertices(&self) -> impl Iterator<Item = &[f32]> {
        self.vertex_data.chunks_exact(self.layout.stride())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len() / self.layout.stride()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_indices.len() / 3
    }

    pub fn into_buffers(self) -> (Box<[f32]>, Box<[VertexIndex]>) {
        (self.vertex_data, self.vertex_indices)
    }
}
