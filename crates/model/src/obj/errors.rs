use std::{
    collections::TryReserveError,
    error::Error,
    fmt::{Debug, Display},
    io,
    num::{ParseFloatError, ParseIntError},
    path::{Path, PathBuf},
};

/// Broad category of a loading failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The path is missing, is not a regular file or could not be read.
    FileAccess,
    /// Wrong argument count, non-numeric value or misplaced slash.
    Syntax,
    /// An index refers to an element that does not exist.
    Range,
    /// Face corners do not share the same structure across the file.
    FormatInconsistency,
    /// The builder disagreed with the validator. This is a bug, not a bad file.
    InternalInvariant,
    Allocation,
}

/// Element list a face index points into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    Position,
    TextureCoordinate,
    Normal,
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Position => "Vertex",
            Self::TextureCoordinate => "Texture coordinate",
            Self::Normal => "Vertex normal",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ObjParsingErrorDetail {
    #[error("File does not exist: {}", .0.display())]
    FileDoesNotExist(PathBuf),
    #[error("Path is not a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("Failed to open file: {0}")]
    FailedToOpenFile(#[source] io::Error),
    #[error("Failed to read file: {0}")]
    FailedToReadFile(#[source] io::Error),

    #[error("Allocation failure: {0}")]
    AllocationFailure(#[source] TryReserveError),

    #[error("Invalid number of arguments for `v`: {found} (expected 3).")]
    NotEnoughComponentsInVertex { found: usize },
    #[error("Invalid number of arguments for `v`: {found} (expected 3).")]
    TooManyComponentsInVertex { found: usize },
    #[error("Value of `{component}` is not a float.")]
    InvalidComponentInVertex {
        component: String,
        source: ParseFloatError,
    },

    #[error("Invalid number of arguments for `vn`: {found} (expected 3).")]
    NotEnoughComponentsInNormal { found: usize },
    #[error("Invalid number of arguments for `vn`: {found} (expected 3).")]
    TooManyComponentsInNormal { found: usize },
    #[error("Value of `{component}` is not a float.")]
    InvalidComponentInNormal {
        component: String,
        source: ParseFloatError,
    },

    #[error("Invalid number of arguments for `vt`: {found} (expected 2).")]
    NotEnoughComponentsInTexture { found: usize },
    #[error("Invalid number of arguments for `vt`: {found} (expected 2).")]
    TooManyComponentsInTexture { found: usize },
    #[error("Value of `{component}` is not a float.")]
    InvalidComponentInTexture {
        component: String,
        source: ParseFloatError,
    },
    #[error("Value of `{component}` for vt must be contained by the interval [0, 1].")]
    ComponentInTextureIsNotInRange0To1 { component: String },

    #[error("Invalid number of arguments for `f`: {found} (expected at least 3).")]
    FaceShouldHaveAtLeast3Components { found: usize },
    #[error("Slash in face definition cannot be preceded or followed by a space (`{corner}`).")]
    SlashNextToSpaceInFace { corner: String },
    #[error("Vertex index must be specified (`{corner}`).")]
    MissingVertexIndexInFace { corner: String },
    #[error("Too many slashes in face corner `{corner}` (expected at most 2).")]
    TooManySubComponentsInFace { corner: String },
    #[error("{element} index must be an integer, not `{sub_component}`.")]
    InvalidSubComponentInFace {
        element: Element,
        sub_component: String,
        source: ParseIntError,
    },
    #[error("{element} with index 0 does not exist.")]
    FaceSubComponentCanNotBe0 { element: Element },
    #[error("{element} with index {index} does not exist ({count} defined).")]
    FaceElementDoesNotExist {
        element: Element,
        index: i64,
        count: usize,
    },

    #[error(
        "Faces must have the same format throughout the file. This is the first occurrence \
         where this is not the case ({found} slashes per corner, expected {expected})."
    )]
    InconsistentFaceFormat { expected: u8, found: u8 },
}

impl ObjParsingErrorDetail {
    pub fn kind(&self) -> ErrorKind {
        use ObjParsingErrorDetail::*;

        match self {
            FileDoesNotExist(_) | NotAFile(_) | FailedToOpenFile(_) | FailedToReadFile(_) => {
                ErrorKind::FileAccess
            }
            AllocationFailure(_) => ErrorKind::Allocation,
            FaceSubComponentCanNotBe0 { .. } | FaceElementDoesNotExist { .. } => ErrorKind::Range,
            InconsistentFaceFormat { .. } => ErrorKind::FormatInconsistency,
            _ => ErrorKind::Syntax,
        }
    }
}

pub struct ObjParsingError {
    file: Option<PathBuf>,
    line: Option<(usize, String)>,
    detail: ObjParsingErrorDetail,
}

impl ObjParsingError {
    pub(crate) fn new(
        file: Option<PathBuf>,
        line: Option<(usize, String)>,
        detail: ObjParsingErrorDetail,
    ) -> Self {
        Self { file, line, detail }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// 1-based line number and normalized content of the offending line.
    pub fn line(&self) -> Option<(usize, &str)> {
        self.line
            .as_ref()
            .map(|(number, content)| (*number, content.as_str()))
    }

    pub fn detail(&self) -> &ObjParsingErrorDetail {
        &self.detail
    }

    pub fn kind(&self) -> ErrorKind {
        self.detail.kind()
    }
}

impl Debug for ObjParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line.as_ref() {
            return write!(
                f,
                "ObjParsingError {{\n\tfile: {:?}\n\tline: {}\n\tline_content: \"{}\"\n\tdetails: {:?}\n}}",
                self.file, line.0, line.1, self.detail,
            );
        }
        write!(f, "ObjParsingError({:?})", self.detail)
    }
}

impl Display for ObjParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.file, &self.line) {
            (Some(file), Some((line, _))) => {
                write!(f, "Error in {}:{line}: {}", file.display(), self.detail)
            }
            (None, Some((line, _))) => write!(f, "Error at line {line}: {}", self.detail),
            _ => Display::fmt(&self.detail, f),
        }
    }
}

impl Error for ObjParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.detail)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            ObjParsingErrorDetail::NotEnoughComponentsInVertex { found: 2 }.kind(),
            ErrorKind::Syntax
        );
        assert_eq!(
            ObjParsingErrorDetail::FaceSubComponentCanNotBe0 {
                element: Element::Position
            }
            .kind(),
            ErrorKind::Range
        );
        assert_eq!(
            ObjParsingErrorDetail::InconsistentFaceFormat {
                expected: 1,
                found: 0
            }
            .kind(),
            ErrorKind::FormatInconsistency
        );
        assert_eq!(
            ObjParsingErrorDetail::FileDoesNotExist("a.obj".into()).kind(),
            ErrorKind::FileAccess
        );
        let overflow = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        assert_eq!(
            ObjParsingErrorDetail::AllocationFailure(overflow).kind(),
            ErrorKind::Allocation
        );
    }

    #[test]
    fn display_mentions_file_and_line() {
        let error = ObjParsingError::new(
            Some("cube.obj".into()),
            Some((7, "f 1 2 9".to_owned())),
            ObjParsingErrorDetail::FaceElementDoesNotExist {
                element: Element::Position,
                index: 9,
                count: 8,
            },
        );
        assert_eq!(
            error.to_string(),
            "Error in cube.obj:7: Vertex with index 9 does not exist (8 defined)."
        );
        assert_eq!(error.line(), Some((7, "f 1 2 9")));
    }
}
