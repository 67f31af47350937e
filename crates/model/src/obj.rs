//! Validation of Wavefront OBJ files.
//!
//! Every line is checked before any geometry is built: argument counts, numeric values,
//! face indices against the number of elements defined in the whole file, and the
//! uniformity of face corners. The result is a list of [`Directive`]s that the model
//! builder can consume without re-checking anything.

mod errors;
mod face;
mod handle_unrecognized_line;
mod normal;
mod texture;
mod vertex;

pub use errors::{Element, ErrorKind, ObjParsingError, ObjParsingErrorDetail};
pub use face::{triangulate_face, Face, FaceReference};

use face::{check_face_arity, check_face_format, parse_face_components};
use handle_unrecognized_line::{handle_unrecognized_line, UnsupportedCommands};
use normal::parse_normal_line;
use texture::parse_texture_line;
use vertex::parse_vertex_line;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use rs42::extensions::vec::TryPush;

use crate::{
    diagnostics::{Diagnostic, Diagnostics},
    vertex::{Normal, Position, TextureCoordinate},
};

/// Keyword starting an OBJ line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Position,
    TextureCoordinate,
    Normal,
    ParameterVertex,
    Face,
    Group,
    Object,
    Smoothing,
    LineElement,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    pub fn from_keyword(keyword: &'a str) -> Self {
        match keyword {
            "v" => Self::Position,
            "vt" => Self::TextureCoordinate,
            "vn" => Self::Normal,
            "vp" => Self::ParameterVertex,
            "f" => Self::Face,
            "g" => Self::Group,
            "o" => Self::Object,
            "s" => Self::Smoothing,
            "l" => Self::LineElement,
            _ => Self::Unknown(keyword),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    /// 1-based line number in the file.
    pub line: usize,
    pub kind: DirectiveKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DirectiveKind {
    Position(Position),
    TextureCoordinate(TextureCoordinate),
    Normal(Normal),
    Face(Face),
    ObjectName(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementCounts {
    pub positions: usize,
    pub texture_coordinates: usize,
    pub normals: usize,
}

/// Directives of a file that passed validation, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidatedObj {
    pub directives: Vec<Directive>,
    pub counts: ElementCounts,
}

impl ValidatedObj {
    pub fn faces(&self) -> impl Iterator<Item = (usize, &Face)> {
        self.directives
            .iter()
            .filter_map(|directive| match &directive.kind {
                DirectiveKind::Face(face) => Some((directive.line, face)),
                _ => None,
            })
    }
}

enum PendingDirective<'l> {
    Ready(DirectiveKind),
    Face(Vec<&'l str>),
}

pub struct Validator<'d> {
    source: Option<PathBuf>,
    diagnostics: &'d mut dyn Diagnostics,
    unsupported: UnsupportedCommands,
}

impl<'d> Validator<'d> {
    pub fn new(diagnostics: &'d mut dyn Diagnostics) -> Self {
        Self {
            source: None,
            diagnostics,
            unsupported: UnsupportedCommands::default(),
        }
    }

    /// Names the file in diagnostics and errors.
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn validate_file(self, path: impl AsRef<Path>) -> Result<ValidatedObj, ObjParsingError> {
        let path = path.as_ref();
        let file_error = |detail| ObjParsingError::new(Some(path.to_path_buf()), None, detail);

        if !path.exists() {
            return Err(file_error(ObjParsingErrorDetail::FileDoesNotExist(
                path.to_path_buf(),
            )));
        }
        if !path.is_file() {
            return Err(file_error(ObjParsingErrorDetail::NotAFile(path.to_path_buf())));
        }
        let file = File::open(path)
            .map_err(|err| file_error(ObjParsingErrorDetail::FailedToOpenFile(err)))?;

        self.with_source(path).validate_reader(BufReader::new(file))
    }

    pub fn validate_reader<R: BufRead>(self, reader: R) -> Result<ValidatedObj, ObjParsingError> {
        let lines = reader
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                ObjParsingError::new(
                    self.source.clone(),
                    None,
                    ObjParsingErrorDetail::FailedToReadFile(err),
                )
            })?;
        self.validate(lines)
    }

    /// Validates raw lines, reporting warnings as they are found.
    ///
    /// Stops at the first error, which is reported to the diagnostics sink and returned.
    pub fn validate<I, S>(mut self, lines: I) -> Result<ValidatedObj, ObjParsingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<(usize, String)> = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| (i + 1, normalize_line(line.as_ref())))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
            .collect();

        let mut counts = ElementCounts::default();
        let mut pending: Vec<(usize, &str, PendingDirective)> = Vec::new();
        for (line_number, line) in &lines {
            let pushed = match self.parse_line(*line_number, line, &mut counts) {
                Ok(Some(directive)) => pending
                    .try_push((*line_number, line.as_str(), directive))
                    .map_err(ObjParsingErrorDetail::AllocationFailure),
                Ok(None) => Ok(()),
                Err(detail) => Err(detail),
            };
            if let Err(detail) = pushed {
                return Err(self.fail(*line_number, line, detail));
            }
        }

        // Faces can only be checked once every element of the file has been counted
        let mut directives: Vec<Directive> = Vec::new();
        for (line_number, line, directive) in pending {
            let pushed = match directive {
                PendingDirective::Ready(kind) => Ok(kind),
                PendingDirective::Face(corners) => {
                    parse_face_components(&corners, counts).map(DirectiveKind::Face)
                }
            }
            .and_then(|kind| {
                directives
                    .try_push(Directive {
                        line: line_number,
                        kind,
                    })
                    .map_err(ObjParsingErrorDetail::AllocationFailure)
            });
            if let Err(detail) = pushed {
                return Err(self.fail(line_number, line, detail));
            }
        }

        let validated = ValidatedObj { directives, counts };
        if let Err((line_number, detail)) = check_face_format(validated.faces()) {
            let line = lines
                .iter()
                .find(|(number, _)| *number == line_number)
                .map_or("", |(_, line)| line.as_str());
            return Err(self.fail(line_number, line, detail));
        }

        log::debug!(
            "validated {}: {} positions, {} texture coordinates, {} normals, {} directives",
            self.source_name(),
            counts.positions,
            counts.texture_coordinates,
            counts.normals,
            validated.directives.len(),
        );
        Ok(validated)
    }

    fn parse_line<'l>(
        &mut self,
        line_number: usize,
        line: &'l str,
        counts: &mut ElementCounts,
    ) -> Result<Option<PendingDirective<'l>>, ObjParsingErrorDetail> {
        let mut split = line.split(' ');
        let Some(first_word) = split.next() else {
            return Ok(None);
        };

        let command = Command::from_keyword(first_word);
        let kind = match command {
            Command::Position => {
                counts.positions += 1;
                DirectiveKind::Position(parse_vertex_line(&mut split)?)
            }
            Command::TextureCoordinate => {
                counts.texture_coordinates += 1;
                DirectiveKind::TextureCoordinate(parse_texture_line(&mut split)?)
            }
            Command::Normal => {
                counts.normals += 1;
                DirectiveKind::Normal(parse_normal_line(&mut split)?)
            }
            Command::Face => {
                let corners: Vec<&str> = split.collect();
                check_face_arity(&corners)?;
                return Ok(Some(PendingDirective::Face(corners)));
            }
            Command::Object if self.unsupported.first_object() => {
                let name = split.collect::<Vec<_>>().join(" ");
                // A bare `o` leaves the mesh unnamed
                if name.is_empty() {
                    return Ok(None);
                }
                DirectiveKind::ObjectName(name)
            }
            _ => {
                if let Some(message) = handle_unrecognized_line(command, &mut self.unsupported) {
                    self.diagnostics.report(Diagnostic::warning(
                        self.source.as_deref(),
                        line_number,
                        message,
                    ));
                }
                return Ok(None);
            }
        };

        Ok(Some(PendingDirective::Ready(kind)))
    }

    fn fail(
        &mut self,
        line_number: usize,
        line: &str,
        detail: ObjParsingErrorDetail,
    ) -> ObjParsingError {
        self.diagnostics.report(Diagnostic::error(
            self.source.as_deref(),
            line_number,
            detail.to_string(),
        ));
        ObjParsingError::new(
            self.source.clone(),
            Some((line_number, line.to_owned())),
            detail,
        )
    }

    fn source_name(&self) -> String {
        self.source
            .as_deref()
            .map_or_else(|| "<memory>".to_owned(), |path| path.display().to_string())
    }
}

/// Trims the line and turns every run of spaces or tabs into a single space.
fn normalize_line(line: &str) -> String {
    line.trim()
        .replace('\t', " ")
        .split(' ')
        .filter(|str| !str.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses exactly `N` float components, checking the count before the values.
fn parse_components<'a, const N: usize>(
    components: &mut impl Iterator<Item = &'a str>,
    not_enough: fn(usize) -> ObjParsingErrorDetail,
    too_many: fn(usize) -> ObjParsingErrorDetail,
    parse_component: fn(&str) -> Result<f32, ObjParsingErrorDetail>,
) -> Result<[f32; N], ObjParsingErrorDetail> {
    let components: Vec<&str> = components.collect();
    if components.len() < N {
        return Err(not_enough(components.len()));
    }
    if components.len() > N {
        return Err(too_many(components.len()));
    }

    let mut parsed = [0.; N];
    for (elem, component) in parsed.iter_mut().zip(components) {
        *elem = parse_component(component)?;
    }
    Ok(parsed)
}
