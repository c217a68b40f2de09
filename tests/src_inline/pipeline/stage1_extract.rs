use super::*;
use crate::model::FULL_MARK;

fn extract(text: &str) -> Stage1Output {
    run_stage1(text, &ScoringProfile::default_v1())
}

#[test]
fn test_extracts_pairs_left_to_right() {
    let out = extract("构图:4 色彩:3.5 建议:加强对比度");
    assert_eq!(
        out.dimensions,
        vec![
            DimensionScore::new("构图", 4.0, 5.0),
            DimensionScore::new("色彩", 3.5, 5.0),
        ]
    );
    assert_eq!(out.discarded, 0);
}

#[test]
fn test_full_width_colon_and_whitespace() {
    let out = extract("构图排版：  4\n色彩系统：\t3\nlayout: 2.25");
    let labels: Vec<&str> = out.dimensions.iter().map(|d| d.dimension.as_str()).collect();
    assert_eq!(labels, vec!["构图排版", "色彩系统", "layout"]);
    assert_eq!(out.dimensions[2].score, 2.25);
    assert!(out.dimensions.iter().all(|d| d.full_mark == FULL_MARK));
}

#[test]
fn test_duplicate_labels_are_kept() {
    let out = extract("构图:4 构图:2");
    assert_eq!(out.dimensions.len(), 2);
    assert_eq!(out.dimensions[0].score, 4.0);
    assert_eq!(out.dimensions[1].score, 2.0);
}

#[test]
fn test_plain_prose_yields_nothing() {
    let out = extract("这张图片整体不错，但是还有提升空间。");
    assert!(out.dimensions.is_empty());
    assert_eq!(out.discarded, 0);
}

#[test]
fn test_colon_without_number_is_ignored() {
    let out = extract("建议:加强对比度");
    assert!(out.dimensions.is_empty());
}

#[test]
fn test_out_of_range_score_retained() {
    let out = extract("安全:6");
    assert_eq!(out.dimensions, vec![DimensionScore::new("安全", 6.0, 5.0)]);
}

#[test]
fn test_malformed_numeric_is_discarded_and_parsing_continues() {
    // Full-width digits satisfy Unicode `\d` but not the float parser.
    let out = extract("构图:４ 色彩:3");
    assert_eq!(out.discarded, 1);
    assert_eq!(out.dimensions, vec![DimensionScore::new("色彩", 3.0, 5.0)]);
}

#[test]
fn test_overflowing_numeric_is_discarded() {
    let text = format!("构图:{} 色彩:2", "9".repeat(400));
    let out = extract(&text);
    assert_eq!(out.discarded, 1);
    assert_eq!(out.dimensions.len(), 1);
    assert_eq!(out.dimensions[0].dimension, "色彩");
}

#[test]
fn test_extraction_is_deterministic() {
    let text = "构图:4\n色彩:3.5\n字体:2";
    assert_eq!(extract(text), extract(text));
}
