mod parse_face_components;
mod triangulate_face;

pub use parse_face_components::parse_face_components;
pub use triangulate_face::triangulate_face;

use super::ObjParsingErrorDetail;

/// Indices found in one face corner token such as `3`, `3/1`, `3/1/2` or `3//2`.
///
/// Indices are kept as written: positive ones count from 1 at the start of the file,
/// negative ones count backwards from the last element (`-1` is the last one).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceReference {
    pub position: i64,
    pub texture_coordinate: Option<i64>,
    pub normal: Option<i64>,
}

impl FaceReference {
    pub fn new(position: i64) -> Self {
        Self {
            position,
            texture_coordinate: None,
            normal: None,
        }
    }

    pub fn with_texture_coordinate(mut self, index: i64) -> Self {
        self.texture_coordinate = Some(index);
        self
    }

    pub fn with_normal(mut self, index: i64) -> Self {
        self.normal = Some(index);
        self
    }

    /// Number of `/` in the token this reference was parsed from.
    pub fn slash_count(&self) -> u8 {
        match (self.texture_coordinate, self.normal) {
            (_, Some(_)) => 2,
            (Some(_), None) => 1,
            (None, None) => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    pub corners: Vec<FaceReference>,
}

pub fn check_face_arity(corners: &[&str]) -> Result<(), ObjParsingErrorDetail> {
    if corners.len() < 3 {
        return Err(ObjParsingErrorDetail::FaceShouldHaveAtLeast3Components {
            found: corners.len(),
        });
    }
    Ok(())
}

/// Checks that every corner of every face has as many slashes as the first corner of the file.
///
/// On failure, returns the line of the first face that diverges.
pub fn check_face_format<'a>(
    faces: impl IntoIterator<Item = (usize, &'a Face)>,
) -> Result<(), (usize, ObjParsingErrorDetail)> {
    let mut expected = None;

    for (line, face) in faces {
        for corner in &face.corners {
            let found = corner.slash_count();
            match expected {
                None => expected = Some(found),
                Some(expected) if expected != found => {
                    return Err((
                        line,
                        ObjParsingErrorDetail::InconsistentFaceFormat { expected, found },
                    ))
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn face(corners: &[FaceReference]) -> Face {
        Face {
            corners: corners.to_vec(),
        }
    }

    #[test]
    fn slash_counts() {
        assert_eq!(FaceReference::new(1).slash_count(), 0);
        assert_eq!(FaceReference::new(1).with_texture_coordinate(1).slash_count(), 1);
        assert_eq!(FaceReference::new(1).with_normal(1).slash_count(), 2);
        assert_eq!(
            FaceReference::new(1)
                .with_texture_coordinate(1)
                .with_normal(1)
                .slash_count(),
            2
        );
    }

    #[test]
    fn arity() {
        assert!(check_face_arity(&["1", "2", "3"]).is_ok());
        assert!(matches!(
            check_face_arity(&["1", "2"]),
            Err(ObjParsingErrorDetail::FaceShouldHaveAtLeast3Components { found: 2 })
        ));
    }

    #[test]
    fn uniform_faces() {
        let a = face(&[FaceReference::new(1).with_normal(1); 3]);
        let b = face(&[
            FaceReference::new(2).with_normal(1),
            FaceReference::new(3).with_texture_coordinate(1).with_normal(1),
            FaceReference::new(4).with_normal(1),
        ]);
        assert!(check_face_format([(3, &a), (4, &b)]).is_ok());
    }

    #[test]
    fn divergent_face_reports_its_own_line() {
        let a = face(&[FaceReference::new(1).with_texture_coordinate(1); 3]);
        let b = face(&[FaceReference::new(1); 3]);
        let c = face(&[FaceReference::new(1); 3]);
        let Err((line, detail)) = check_face_format([(5, &a), (6, &b), (9, &c)]) else {
            panic!("expected inconsistent faces");
        };
        assert_eq!(line, 6);
        assert!(matches!(
            detail,
            ObjParsingErrorDetail::InconsistentFaceFormat {
                expected: 1,
                found: 0
            }
        ));
    }

    #[test]
    fn divergence_inside_first_face() {
        let a = face(&[
            FaceReference::new(1),
            FaceReference::new(2),
            FaceReference::new(3).with_texture_coordinate(1),
        ]);
        assert!(matches!(check_face_format([(2, &a)]), Err((2, _))));
    }
}
