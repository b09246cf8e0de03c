//! Rendering the comparison figures from synthetic fields.

use renderer::{
    plot_difference, plot_histogram, plot_profile, plot_side_by_side, FigureStyle, RenderError,
};
use sst_common::{GriddedField, ValidRange};
use test_utils::{regular_axis, sst_field_from_fn, temp_test_dir};

const DIFF_RANGE: ValidRange = ValidRange::new(-3.0, 8.0);
const MAP_RANGE: ValidRange = ValidRange::new(-3.0, 45.0);

fn style() -> FigureStyle {
    FigureStyle {
        dpi: 40,
        pad_inches: 0.1,
    }
}

fn gmi_like() -> GriddedField {
    sst_field_from_fn(
        regular_axis(-89.0, 2.0, 90),
        regular_axis(-179.0, 2.0, 180),
        |lat, lon| {
            if lat > 60.0 {
                f32::NAN
            } else {
                (28.0 - lat.abs() * 0.4 + lon * 0.01) as f32
            }
        },
    )
}

fn modis_like() -> GriddedField {
    let gmi = gmi_like();
    let data = gmi.data().iter().map(|v| v - 0.5).collect();
    gmi.with_data(data).unwrap()
}

#[test]
fn test_side_by_side_size_and_content() {
    let fig = plot_side_by_side(&gmi_like(), &modis_like(), MAP_RANGE, &style()).unwrap();
    assert_eq!((fig.width(), fig.height()), (480, 160));
    let bbox = fig.content_bbox().unwrap();
    assert!(bbox.width > 300);

    let cropped = fig.tight(0.1);
    assert_eq!(cropped.width(), bbox.width + 8);
}

#[test]
fn test_all_figures_save_as_png() {
    let dir = temp_test_dir();
    let out = dir.path().join("nested").join("plots");
    let gmi = gmi_like();
    let modis = modis_like();

    let figures = [
        ("sst_gmi_modis.png", plot_side_by_side(&gmi, &modis, MAP_RANGE, &style()).unwrap()),
        ("sst_diff_gmi_modis.png", plot_difference(&gmi, &modis, DIFF_RANGE, &style()).unwrap()),
        ("hist_gmi_modis.png", plot_histogram(&gmi, &modis, 50, (-8.0, 8.0), &style()).unwrap()),
        ("profile_sst.png", plot_profile(&gmi, &modis, 0.0, &style()).unwrap()),
    ];
    for (name, fig) in &figures {
        fig.save(&out.join(name), 0.1).unwrap();
    }

    for (name, _) in &figures {
        let bytes = std::fs::read(out.join(name)).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert!(decoded.width() > 0 && decoded.height() > 0, "{name} is empty");
    }
}

#[test]
fn test_difference_requires_same_grid() {
    let gmi = gmi_like();
    let other = sst_field_from_fn(regular_axis(0.0, 1.0, 3), regular_axis(0.0, 1.0, 3), |_, _| 1.0);
    let err = plot_difference(&gmi, &other, DIFF_RANGE, &style()).unwrap_err();
    assert!(matches!(err, RenderError::Grid(_)));
}

#[test]
fn test_histogram_of_all_missing_field_renders() {
    let empty = sst_field_from_fn(regular_axis(0.0, 1.0, 4), regular_axis(0.0, 1.0, 4), |_, _| f32::NAN);
    let fig = plot_histogram(&empty, &empty, 50, (-8.0, 8.0), &style()).unwrap();
    assert!(fig.content_bbox().is_some());
}

#[test]
fn test_profile_on_different_native_grids() {
    let gmi = gmi_like();
    let fine = sst_field_from_fn(
        regular_axis(10.0, -0.5, 41),
        regular_axis(-180.0, 0.5, 720),
        |_, lon| if lon.abs() < 20.0 { f32::NAN } else { 27.0 },
    );
    let fig = plot_profile(&gmi, &fine, 0.0, &style()).unwrap();
    assert!(fig.content_bbox().is_some());
}

#[test]
fn test_save_into_unwritable_path_fails() {
    let dir = temp_test_dir();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"x").unwrap();
    let fig = plot_profile(&gmi_like(), &modis_like(), 0.0, &style()).unwrap();
    let err = fig.save(&blocker.join("profile_sst.png"), 0.1).unwrap_err();
    assert!(matches!(err, RenderError::Io { .. }));
}
