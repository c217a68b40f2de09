use super::*;
use crate::model::DimensionScore;

#[test]
fn test_format_score() {
    assert_eq!(format_score(4.0), "4");
    assert_eq!(format_score(3.5), "3.5");
    assert_eq!(format_score(0.0), "0");
}

#[test]
fn test_radar_tsv_rows_follow_dimension_order() {
    let report = ScoreReport {
        dimensions: vec![
            DimensionScore::new("构图", 4.0, 5.0),
            DimensionScore::new("色彩", 3.5, 5.0),
        ],
        feedbacks: Vec::new(),
        total: 75,
        clamped: false,
    };
    let tsv = render_radar_tsv(&report);
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines[0], "dimension\tscore\tfull_mark");
    assert_eq!(lines[1], "构图\t4\t5");
    assert_eq!(lines[2], "色彩\t3.5\t5");
    assert_eq!(lines.len(), 3);
}
