use rs42::extensions::PipeLine;

use crate::vertex::Normal;

use super::{parse_components, ObjParsingErrorDetail};

pub fn parse_normal_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
) -> Result<Normal, ObjParsingErrorDetail> {
    parse_components(
        components,
        |found| ObjParsingErrorDetail::NotEnoughComponentsInNormal { found },
        |found| ObjParsingErrorDetail::TooManyComponentsInNormal { found },
        parse_normal_component,
    )
}

fn parse_normal_component(str: &str) -> Result<f32, ObjParsingErrorDetail> {
    str.parse::<f32>()
        .map_err(|source| ObjParsingErrorDetail::InvalidComponentInNormal {
            component: str.to_owned(),
            source,
        })?
        .pipe(Ok)
}
