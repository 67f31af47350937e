use rs42::extensions::PipeLine;

use crate::vertex::Position;

use super::{parse_components, ObjParsingErrorDetail};

pub fn parse_vertex_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
) -> Result<Position, ObjParsingErrorDetail> {
    // The optional `w` component is not supported
    parse_components(
        components,
        |found| ObjParsingErrorDetail::NotEnoughComponentsInVertex { found },
        |found| ObjParsingErrorDetail::TooManyComponentsInVertex { found },
        parse_vertex_component,
    )
}

fn parse_vertex_component(str: &str) -> Result<f32, ObjParsingErrorDetail> {
    str.parse::<f32>()
        .map_err(|source| ObjParsingErrorDetail::InvalidComponentInVertex {
            component: str.to_owned(),
            source,
        })?
        .pipe(Ok)
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(line: &str) -> Result<Position, ObjParsingErrorDetail> {
        parse_vertex_line(&mut line.split(' '))
    }

    #[test]
    fn three_components() {
        assert_eq!(parse("-0.5 1e2 3").unwrap(), [-0.5, 100., 3.]);
    }

    #[test]
    fn two_components() {
        assert!(matches!(
            parse("1 2"),
            Err(ObjParsingErrorDetail::NotEnoughComponentsInVertex { found: 2 })
        ));
    }

    #[test]
    fn w_component_is_rejected() {
        assert!(matches!(
            parse("1 2 3 1"),
            Err(ObjParsingErrorDetail::TooManyComponentsInVertex { found: 4 })
        ));
    }

    #[test]
    fn count_is_checked_before_values() {
        assert!(matches!(
            parse("a b"),
            Err(ObjParsingErrorDetail::NotEnoughComponentsInVertex { .. })
        ));
    }

    #[test]
    fn invalid_component_is_named() {
        let Err(ObjParsingErrorDetail::InvalidComponentInVertex { component, .. }) =
            parse("1 x 3")
        else {
            panic!("expected an invalid component");
        };
        assert_eq!(component, "x");
    }
}
