use crate::vertex::TextureCoordinate;

use super::{parse_components, ObjParsingErrorDetail};

pub fn parse_texture_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
) -> Result<TextureCoordinate, ObjParsingErrorDetail> {
    // Only `u v` is supported, not `u` alone nor `u v w`
    parse_components(
        components,
        |found| ObjParsingErrorDetail::NotEnoughComponentsInTexture { found },
        |found| ObjParsingErrorDetail::TooManyComponentsInTexture { found },
        parse_texture_component,
    )
}

fn parse_texture_component(str: &str) -> Result<f32, ObjParsingErrorDetail> {
    let component = str
        .parse::<f32>()
        .map_err(|source| ObjParsingErrorDetail::InvalidComponentInTexture {
            component: str.to_owned(),
            source,
        })?;

    if !(0. ..=1.).contains(&component) {
        return Err(ObjParsingErrorDetail::ComponentInTextureIsNotInRange0To1 {
            component: str.to_owned(),
        });
    }

    Ok(component)
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(line: &str) -> Result<TextureCoordinate, ObjParsingErrorDetail> {
        parse_texture_line(&mut line.split(' '))
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(parse("0 1").unwrap(), [0., 1.]);
    }

    #[test]
    fn out_of_range() {
        let Err(ObjParsingErrorDetail::ComponentInTextureIsNotInRange0To1 { component }) =
            parse("0.5 1.5")
        else {
            panic!("expected a range error");
        };
        assert_eq!(component, "1.5");
        assert!(parse("-0.1 0").is_err());
    }

    #[test]
    fn nan_is_out_of_range() {
        assert!(matches!(
            parse("NaN 0"),
            Err(ObjParsingErrorDetail::ComponentInTextureIsNotInRange0To1 { .. })
        ));
    }

    #[test]
    fn only_two_components() {
        assert!(matches!(
            parse("0.5"),
            Err(ObjParsingErrorDetail::NotEnoughComponentsInTexture { found: 1 })
        ));
        assert!(matches!(
            parse("0.5 0.5 0"),
            Err(ObjParsingErrorDetail::TooManyComponentsInTexture { found: 3 })
        ));
    }
}
