//! Wavefront OBJ loading for the renderer.
//!
//! Loading happens in two steps. [`Validator`] checks every line of the file and turns it
//! into line-numbered [`Directive`]s, and [`ModelBuilder`] resolves the faces of those
//! directives into a deduplicated vertex buffer and an index buffer ([`Model`]).
//!
//! ```no_run
//! use model::{LoadOptions, LogDiagnostics, Model};
//!
//! let model = Model::load("models/quad.obj", &LoadOptions::default(), &mut LogDiagnostics)?;
//! println!("{} vertices", model.vertex_count());
//! # Ok::<(), model::LoadError>(())
//! ```

pub mod diagnostics;
mod model;
pub mod obj;
mod options;
pub mod vertex;

pub use diagnostics::{Diagnostic, Diagnostics, LogDiagnostics, Severity};
pub use model::{BuildError, LoadError, Model, ModelBuilder, VertexIndex};
pub use obj::{
    Command, Directive, DirectiveKind, Element, ElementCounts, ErrorKind, Face, FaceReference,
    ObjParsingError, ObjParsingErrorDetail, ValidatedObj, Validator,
};
pub use options::{LoadOptions, TextureFallback};
pub use vertex::{Normal, Position, TextureCoordinate, Vertex, VertexLayout};

/// Path of an OBJ file, loaded with default options when converted into a [`Model`].
pub struct ObjFile<'a>(pub &'a str);
