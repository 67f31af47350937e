use crate::obj::{errors::Element, ElementCounts, ObjParsingErrorDetail};

use super::{Face, FaceReference};

/// Parses the corner tokens of a face and checks that every index exists in `counts`.
pub fn parse_face_components(
    corners: &[&str],
    counts: ElementCounts,
) -> Result<Face, ObjParsingErrorDetail> {
    corners
        .iter()
        .map(|corner| parse_face_sub_components(corner, counts))
        .collect::<Result<_, _>>()
        .map(|corners| Face { corners })
}

fn parse_face_sub_components(
    corner: &str,
    counts: ElementCounts,
) -> Result<FaceReference, ObjParsingErrorDetail> {
    // A slash on either end means there was a space next to it in the line
    if corner.starts_with('/') || corner.ends_with('/') {
        return Err(ObjParsingErrorDetail::SlashNextToSpaceInFace {
            corner: corner.to_owned(),
        });
    }

    let mut sub_components = corner.split('/');
    let position = sub_components.next().unwrap_or_default();
    let texture_coordinate = sub_components.next();
    let normal = sub_components.next();

    if sub_components.next().is_some() {
        return Err(ObjParsingErrorDetail::TooManySubComponentsInFace {
            corner: corner.to_owned(),
        });
    }
    if position.is_empty() {
        return Err(ObjParsingErrorDetail::MissingVertexIndexInFace {
            corner: corner.to_owned(),
        });
    }

    Ok(FaceReference {
        position: parse_index(position, Element::Position, counts.positions)?,
        texture_coordinate: parse_optional_index(
            texture_coordinate,
            Element::TextureCoordinate,
            counts.texture_coordinates,
        )?,
        normal: parse_optional_index(normal, Element::Normal, counts.normals)?,
    })
}

fn parse_optional_index(
    sub_component: Option<&str>,
    element: Element,
    count: usize,
) -> Result<Option<i64>, ObjParsingErrorDetail> {
    sub_component
        .filter(|sub_component| !sub_component.is_empty())
        .map(|sub_component| parse_index(sub_component, element, count))
        .transpose()
}

fn parse_index(
    sub_component: &str,
    element: Element,
    count: usize,
) -> Result<i64, ObjParsingErrorDetail> {
    let index = sub_component.parse::<i64>().map_err(|source| {
        ObjParsingErrorDetail::InvalidSubComponentInFace {
            element,
            sub_component: sub_component.to_owned(),
            source,
        }
    })?;

    if index == 0 {
        return Err(ObjParsingErrorDetail::FaceSubComponentCanNotBe0 { element });
    }
    // Same bound in both directions: `count` from the start or `-count` from the end
    let exists = usize::try_from(index.unsigned_abs()).is_ok_and(|distance| distance <= count);
    if !exists {
        return Err(ObjParsingErrorDetail::FaceElementDoesNotExist {
            element,
            index,
            count,
        });
    }
    Ok(index)
}
