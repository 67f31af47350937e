use std::{fs, path::Path};

use model::{
    Diagnostic, ErrorKind, LoadError, LoadOptions, Model, ObjFile, Severity, VertexLayout,
};

const CUBE: &str = "\
# unit cube, one normal per side
o Cube
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
v 1 0 1
v 1 1 1
v 0 1 1

vt 0 0
vt 1 0
vt 1 1
vt 0 1

vn 0 0 -1
vn 0 0 1
vn 0 -1 0
vn 0 1 0
vn -1 0 0
vn 1 0 0

g cube
s off
usemtl default
f 1/1/1 4/4/1 3/3/1 2/2/1
f 5/1/2 6/2/2 7/3/2 8/4/2
f 1/1/3 2/2/3 6/3/3 5/4/3
f 4/1/4 8/2/4 7/3/4 3/4/4
f 1/1/5 5/2/5 8/3/5 4/4/5
f 2/1/6 3/2/6 7/3/6 6/4/6
";

fn write_obj(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_cube() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_obj(dir.path(), "cube.obj", CUBE);

    let mut diagnostics = Vec::<Diagnostic>::new();
    let model = Model::load(&path, &LoadOptions::default(), &mut diagnostics).unwrap();

    assert_eq!(model.name(), Some("Cube"));
    assert_eq!(model.layout(), VertexLayout::PositionTextureNormal);
    // 6 sides of 4 corners, no corner shared between sides because normals differ
    assert_eq!(model.vertex_count(), 24);
    assert_eq!(model.triangle_count(), 12);
    assert_eq!(model.vertex_data().len(), 24 * 8);
    assert!(model
        .vertex_indices()
        .iter()
        .all(|&index| (index as usize) < model.vertex_count()));

    let messages: Vec<_> = diagnostics
        .iter()
        .map(|diagnostic| (diagnostic.severity, diagnostic.line))
        .collect();
    assert_eq!(
        messages,
        [
            (Severity::Warning, 24),
            (Severity::Warning, 25),
            (Severity::Warning, 26),
        ]
    );
    assert_eq!(diagnostics[0].source.as_deref(), Some(path.as_path()));
}

#[test]
fn load_from_obj_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_obj(
        dir.path(),
        "triangle.obj",
        "v -0.5 -0.5 0.0\nv 0.5 -0.5 0.0\nv 0.0 0.5 0.0\nf 1 2 3\n",
    );

    let model = Model::try_from(ObjFile(path.to_str().unwrap())).unwrap();
    assert_eq!(
        model.vertex_data(),
        [-0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.0, 0.5, 0.0]
    );
    assert_eq!(model.vertex_indices(), [0, 1, 2]);
}

#[test]
fn error_reports_file_and_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_obj(
        dir.path(),
        "broken.obj",
        "v 0 0 0\nv 1 0 0\nv 0 1 0\n\nf 1 2 4\n",
    );

    let mut diagnostics = Vec::<Diagnostic>::new();
    let error = Model::load(&path, &LoadOptions::default(), &mut diagnostics).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Range);
    let LoadError::Parsing(error) = error else {
        panic!("expected a parsing error");
    };
    assert_eq!(error.line(), Some((5, "f 1 2 4")));
    assert_eq!(error.file(), Some(path.as_path()));

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(diagnostics[0].line, 5);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let error = Model::load(
        dir.path().join("missing.obj"),
        &LoadOptions::default(),
        &mut Vec::<Diagnostic>::new(),
    )
    .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::FileAccess);
}

#[test]
fn directory_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let error = Model::load(
        dir.path(),
        &LoadOptions::default(),
        &mut Vec::<Diagnostic>::new(),
    )
    .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::FileAccess);
}

#[test]
fn rejected_inputs() {
    let cases: &[(&[&str], ErrorKind)] = &[
        (&["v 1 2"], ErrorKind::Syntax),
        (&["vt 1.5 0"], ErrorKind::Syntax),
        (&["v 0 0 0", "vt 0 0", "f /2 1/1 1/1"], ErrorKind::Syntax),
        (&["v 0 0 0", "f 0 1 1"], ErrorKind::Range),
        (
            &["v 0 0 0", "vt 0 0", "f 1/1 1/1 1/1", "f 1 1 1"],
            ErrorKind::FormatInconsistency,
        ),
    ];

    for (lines, kind) in cases {
        let error = Model::from_lines(
            *lines,
            &LoadOptions::default(),
            &mut Vec::<Diagnostic>::new(),
        )
        .unwrap_err();
        assert_eq!(error.kind(), *kind, "{lines:?}");
    }
}
