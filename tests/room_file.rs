//! Integration tests for exporting rooms from room files

use std::path::Path;

use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use room_svg::{
    export, export_model, export_with_config, CurveType, EncodeError, ExportConfig, ExportError,
    RoomError, RoomModel, SvgConfig, ViewerConfig,
};

const APARTMENT: &str = include_str!("fixtures/apartment.toml");

#[test]
fn test_export_outer_boundary_by_name() {
    let config = ExportConfig::new().with_room("Living");
    let export = export_with_config(APARTMENT, &config).expect("Should export");
    assert_eq!(export.room, "Living");
    assert_snapshot!(export.path.as_str(), @"M0 80L100 80L100 20L0 20Z");
}

#[test]
fn test_export_by_room_number() {
    let config = ExportConfig::new().with_room("1");
    let export = export_with_config(APARTMENT, &config).expect("Should export");
    assert_eq!(export.room, "Living");
}

#[test]
fn test_export_inner_loop_uses_room_bounds() {
    let config = ExportConfig::new().with_room("Living").with_loop_index(1);
    let export = export_with_config(APARTMENT, &config).expect("Should export");
    assert_snapshot!(export.path.as_str(), @"M45 55L55 55L55 45L45 45Z");
}

#[test]
fn test_export_requires_room_choice() {
    let err = export(APARTMENT).unwrap_err();
    match err {
        ExportError::Room(RoomError::AmbiguousRoom { candidates }) => {
            assert_eq!(candidates, vec!["Living".to_string(), "Bay Window".to_string()]);
        }
        other => panic!("expected ambiguous room, got {other:?}"),
    }
}

#[test]
fn test_export_rejects_arc_segment() {
    let config = ExportConfig::new().with_room("Bay Window");
    let err = export_with_config(APARTMENT, &config).unwrap_err();
    match err {
        ExportError::Encode { room, source } => {
            assert_eq!(room, "Bay Window");
            assert_eq!(
                source,
                EncodeError::UnsupportedCurveType {
                    index: 1,
                    curve: CurveType::Arc,
                }
            );
        }
        other => panic!("expected encode error, got {other:?}"),
    }
}

#[test]
fn test_export_error_message_names_room() {
    let config = ExportConfig::new().with_room("Bay Window");
    let err = export_with_config(APARTMENT, &config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot export room 'Bay Window': segment 1 has unsupported curve type 'arc'; \
         only straight segments can be encoded"
    );
}

#[test]
fn test_unknown_room_suggests_names() {
    let config = ExportConfig::new().with_room("Livng");
    let err = export_with_config(APARTMENT, &config).unwrap_err();
    assert_eq!(err.to_string(), "room 'Livng' not found (did you mean Living?)");
}

#[test]
fn test_missing_loop_index() {
    let config = ExportConfig::new().with_room("Living").with_loop_index(5);
    let err = export_with_config(APARTMENT, &config).unwrap_err();
    assert!(matches!(
        err,
        ExportError::Room(RoomError::MissingLoop {
            index: 5,
            available: 2,
            ..
        })
    ));
}

#[test]
fn test_viewer_url_from_config() {
    let config = ExportConfig::new()
        .with_room("Living")
        .with_svg(SvgConfig::new().with_canvas_size(200))
        .with_viewer(ViewerConfig::local());
    let export = export_with_config(APARTMENT, &config).expect("Should export");
    assert_eq!(export.path.as_str(), "M0 160L200 160L200 40L0 40Z");
    assert_eq!(
        export.url,
        "http://127.0.0.1:5000?d=M0+160L200+160L200+40L0+40Z"
    );
}

#[test]
fn test_demo_room_file_exports() {
    let model = RoomModel::from_file(Path::new("demos/studio.toml")).expect("Should load demo");
    let export = export_model(&model, &ExportConfig::default()).expect("Should export");
    assert_eq!(export.room, "Studio");
    assert_snapshot!(export.path.as_str(), @"M0 92L72 92L72 58L100 58L100 8L0 8Z");
}

#[test]
fn test_parse_error_points_at_source() {
    let source = "[[rooms]]\nname = \"Broken\"\nbounding_box = { min = [0, 0], max = \"far\" }\n";
    let err = RoomModel::from_str(source).unwrap_err();
    assert!(err.span().is_some());

    let report = err.format(source, "broken.toml");
    assert!(report.contains("broken.toml"));
    assert!(report.contains("invalid room file"));
}
