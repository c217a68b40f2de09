use super::*;
use crate::model::{DimensionScore, FeedbackLine};

fn temp_out(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "kira-visualscore-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn sample_report() -> ScoreReport {
    ScoreReport {
        dimensions: vec![
            DimensionScore::new("构图", 4.0, 5.0),
            DimensionScore::new("色彩", 3.5, 5.0),
        ],
        feedbacks: vec![FeedbackLine::untagged("建议:加强对比度")],
        total: 75,
        clamped: false,
    }
}

#[test]
fn test_write_all_formats() {
    let dir = temp_out("all");
    let written = write_reports(
        &sample_report(),
        AssociationMode::Positional,
        &dir,
        ReportFormat::All,
    )
    .unwrap();
    assert_eq!(
        written,
        vec![
            dir.join("radar.tsv"),
            dir.join("report.txt"),
            dir.join("summary.json"),
        ]
    );

    let radar = fs::read_to_string(dir.join("radar.tsv")).unwrap();
    assert!(radar.contains("构图\t4\t5"));
    let text = fs::read_to_string(dir.join("report.txt")).unwrap();
    assert!(text.contains("总评分：75 / 100"));
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("summary.json")).unwrap()).unwrap();
    assert_eq!(json["report"]["total"], 75);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_json_only_skips_text() {
    let dir = temp_out("json-only");
    write_reports(
        &sample_report(),
        AssociationMode::Positional,
        &dir,
        ReportFormat::Json,
    )
    .unwrap();
    assert!(dir.join("radar.tsv").exists());
    assert!(dir.join("summary.json").exists());
    assert!(!dir.join("report.txt").exists());

    let _ = fs::remove_dir_all(&dir);
}
