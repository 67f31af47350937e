use std::mem;

use super::Command;

/// Ignored commands already warned about while validating one file.
#[derive(Default, Debug)]
pub struct UnsupportedCommands {
    parameter_space_vertex: bool,
    group: bool,
    smooth_shading: bool,
    line_element: bool,
    object_encountered: bool,
    multiple_objects: bool,
}

impl UnsupportedCommands {
    /// Returns `true` for the first `o` of the file, the only one that is used.
    pub fn first_object(&mut self) -> bool {
        !mem::replace(&mut self.object_encountered, true)
    }
}

/// Returns the warning to report for a command that is ignored, if this occurrence needs
/// one. Unknown commands are reported every time, the others only once per file.
pub fn handle_unrecognized_line(
    command: Command,
    seen: &mut UnsupportedCommands,
) -> Option<String> {
    let (already_warned, message) = match command {
        Command::ParameterVertex => (
            &mut seen.parameter_space_vertex,
            "Parameter space vertices are not supported at the moment.",
        ),
        Command::Group => (&mut seen.group, "Groups are not supported at the moment."),
        Command::Smoothing => (
            &mut seen.smooth_shading,
            "Smooth shading is not supported at the moment.",
        ),
        Command::LineElement => (
            &mut seen.line_element,
            "Line elements are not supported at the moment.",
        ),
        Command::Object => (
            &mut seen.multiple_objects,
            "Multiple objects are not supported at the moment.",
        ),
        Command::Unknown(keyword) => return Some(format!("Unknown command `{keyword}`.")),
        _ => return None,
    };

    (!mem::replace(already_warned, true)).then(|| message.to_owned())
}
