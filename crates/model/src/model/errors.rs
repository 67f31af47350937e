use std::collections::TryReserveError;

use crate::obj::{Element, ErrorKind, ObjParsingError};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The validator accepted an index the builder cannot resolve.
    #[error(
        "Internal error at line {line}: {element} with index {index} cannot be resolved \
         ({len} defined) although the file was validated."
    )]
    ReferenceOutOfBounds {
        line: usize,
        element: Element,
        index: i64,
        len: usize,
    },
    /// A corner does not have the attributes of the model's vertex layout.
    #[error("Internal error at line {line}: face corner does not match the vertex layout.")]
    CornerDoesNotMatchLayout { line: usize },
    #[error("Model has too many distinct vertices for 32-bit indices ({vertices}).")]
    TooManyVertices { vertices: usize },
    #[error("Allocation failure: {0}")]
    AllocationFailure(#[source] TryReserveError),
}

impl BuildError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ReferenceOutOfBounds { .. } | Self::CornerDoesNotMatchLayout { .. } => {
                ErrorKind::InternalInvariant
            }
            Self::TooManyVertices { .. } => ErrorKind::Range,
            Self::AllocationFailure(_) => ErrorKind::Allocation,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Parsing(#[from] ObjParsingError),
    #[error(transparent)]
    Build(#[from] BuildError),
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parsing(err) => err.kind(),
            Self::Build(err) => err.kind(),
        }
    }
}
