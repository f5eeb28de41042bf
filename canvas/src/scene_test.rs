use super::*;
use crate::consts::{LEGEND_ROW_PX, TITLE_BAND_PX};

fn reference_result() -> MarketResult {
    MarketResult {
        tam: 5_000_000.0,
        sam: 1_000_000.0,
        som: 100_000.0,
    }
}

fn label<'a>(scene: &'a Scene, segment: Segment, kind: LabelKind) -> &'a Label {
    scene
        .labels
        .iter()
        .find(|l| l.segment == segment && l.kind == kind)
        .expect("label present")
}

// =============================================================
// Circles
// =============================================================

#[test]
fn scene_circles_are_outermost_first() {
    let scene = Scene::build("", &reference_result());
    let order = scene.circles.iter().map(|c| c.segment).collect::<Vec<_>>();
    assert_eq!(order, vec![Segment::Tam, Segment::Sam, Segment::Som]);
}

#[test]
fn scene_circles_use_area_radii_and_fixed_centers() {
    let scene = Scene::build("", &reference_result());
    let tam = &scene.circles[0];
    let sam = &scene.circles[1];
    let som = &scene.circles[2];

    assert_eq!((tam.cx, tam.cy, tam.r), (250.0, 250.0, 225.0));
    assert_eq!((sam.cx, sam.cy), (250.0, 325.0));
    assert_eq!((som.cx, som.cy), (250.0, 400.0));
    assert!((sam.r - 100.62).abs() < 0.01);
    assert!((som.r - 31.82).abs() < 0.01);
}

#[test]
fn scene_circle_fills_match_segment_palette() {
    let scene = Scene::build("", &reference_result());
    let fills = scene.circles.iter().map(|c| c.fill).collect::<Vec<_>>();
    assert_eq!(fills, vec!["#0088FE", "#00C49F", "#FFBB28"]);
}

#[test]
fn scene_empty_result_collapses_inner_circles() {
    let scene = Scene::build("", &MarketResult::default());
    assert_eq!(scene.circles[0].r, 225.0);
    assert_eq!(scene.circles[1].r, 0.0);
    assert_eq!(scene.circles[2].r, 0.0);
}

// =============================================================
// Labels and legend
// =============================================================

#[test]
fn scene_labels_show_names_and_formatted_values() {
    let scene = Scene::build("", &reference_result());
    assert_eq!(scene.labels.len(), 6);
    assert_eq!(label(&scene, Segment::Tam, LabelKind::Name).text, "TAM");
    assert_eq!(label(&scene, Segment::Tam, LabelKind::Value).text, "$5.0M");
    assert_eq!(label(&scene, Segment::Sam, LabelKind::Value).text, "$1.0M");
    assert_eq!(label(&scene, Segment::Som, LabelKind::Value).text, "$100.0K");
}

#[test]
fn scene_value_labels_sit_below_names() {
    let scene = Scene::build("", &reference_result());
    for segment in Segment::ALL {
        let name = label(&scene, segment, LabelKind::Name);
        let value = label(&scene, segment, LabelKind::Value);
        assert!(value.y > name.y);
        assert!(value.font_px > name.font_px);
    }
}

#[test]
fn scene_legend_rows_follow_segments() {
    let scene = Scene::build("", &reference_result());
    let rows = scene
        .legend
        .iter()
        .map(|r| (r.name.as_str(), r.value.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(rows, vec![("TAM:", "$5.0M"), ("SAM:", "$1.0M"), ("SOM:", "$100.0K")]);
}

// =============================================================
// Title and layout
// =============================================================

#[test]
fn scene_empty_title_is_omitted() {
    assert_eq!(Scene::build("", &reference_result()).title, None);
}

#[test]
fn scene_title_is_kept_as_typed() {
    let scene = Scene::build("  LATAM Batteries ", &reference_result());
    assert_eq!(scene.title.as_deref(), Some("  LATAM Batteries "));
}

#[test]
fn scene_whitespace_title_still_reserves_title_band() {
    let scene = Scene::build("   ", &reference_result());
    assert_eq!(scene.title.as_deref(), Some("   "));
    assert_eq!(scene.layout().chart_top, TITLE_BAND_PX);
}

#[test]
fn layout_without_title_starts_chart_at_top() {
    let layout = Scene::build("", &reference_result()).layout();
    assert_eq!(layout.width, 500.0);
    assert_eq!(layout.chart_top, 0.0);
    assert_eq!(layout.title_baseline, None);
    assert!(layout.legend_top >= 500.0);
    assert!(layout.height >= layout.legend_top + 3.0 * LEGEND_ROW_PX);
}

#[test]
fn layout_with_title_reserves_title_band() {
    let plain = Scene::build("", &reference_result()).layout();
    let titled = Scene::build("Batteries", &reference_result()).layout();
    assert_eq!(titled.chart_top, TITLE_BAND_PX);
    assert_eq!(titled.height - plain.height, TITLE_BAND_PX);
    let baseline = titled.title_baseline.expect("title baseline");
    assert!(baseline > 0.0 && baseline < TITLE_BAND_PX);
}

#[test]
fn layout_legend_rows_are_evenly_spaced() {
    let layout = Scene::build("", &reference_result()).layout();
    let first = layout.legend_row_center(0);
    let second = layout.legend_row_center(1);
    let third = layout.legend_row_center(2);
    assert_eq!(second - first, LEGEND_ROW_PX);
    assert_eq!(third - second, LEGEND_ROW_PX);
    assert!(third < layout.height);
}
