use std::fs;
use std::path::PathBuf;

use mtprep::processing::{best, column, join, rank, ModelColumns};
use tempfile::tempdir;

fn models() -> ModelColumns {
    ModelColumns::new(
        vec!["claude".to_string(), "deepseek-v3".to_string()],
        "得分".to_string(),
    )
}

#[test]
fn join_uneven_files() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src_clean.txt");
    let a = dir.path().join("out.claude");
    let b = dir.path().join("out.deepseek-v3");
    fs::write(&src, "こんにちは\n  さようなら  \nありがとう\n").unwrap();
    fs::write(&a, "你好\n再见\n谢谢\n").unwrap();
    fs::write(&b, "你好\n再见\n").unwrap();

    let dst = dir.path().join("sheets/sheet.csv");
    let model_files: Vec<(String, PathBuf)> = vec![
        ("claude".to_string(), a),
        ("deepseek-v3".to_string(), b),
    ];
    let nb_rows = join::join_files(&src, "日语原文", &model_files, "得分", &dst).unwrap();

    assert_eq!(nb_rows, 2);
    assert_eq!(
        fs::read_to_string(&dst).unwrap(),
        "ID,日语原文,claude,claude得分,deepseek-v3,deepseek-v3得分\n\
         1,こんにちは,你好,,你好,\n\
         2,さようなら,再见,,再见,\n"
    );
}

#[test]
fn annotated_sheet_workflow() {
    let dir = tempdir().unwrap();
    let sheet = dir.path().join("annotated.csv");
    fs::write(
        &sheet,
        "ID,日语原文,claude,claude得分,deepseek-v3,deepseek-v3得分\n\
         1,こんにちは,你好,5,您好,4\n\
         2,さようなら,再见,3,再会,4\n\
         3,ありがとう,谢谢,,多谢,2\n",
    )
    .unwrap();

    // best outputs
    let refs = dir.path().join("ref.txt");
    let nb_errors = best::extract_best(&sheet, &refs, &models(), 0.0).unwrap();
    assert_eq!(nb_errors, 0);
    assert_eq!(fs::read_to_string(&refs).unwrap(), "你好\n再会\n多谢\n");

    // ranking, the third row is incomplete
    let report = dir.path().join("ranking.txt");
    let ranked = rank::rank_models(&sheet, &report, &models(), rank::Scale::default(), false).unwrap();
    assert_eq!(ranked[0].model, "claude");
    assert_eq!(ranked[0].count, 2);
    assert_eq!(ranked[0].average, 4.0);
    assert_eq!(ranked[1].model, "deepseek-v3");
    assert_eq!(ranked[1].average, 4.0);

    let text = fs::read_to_string(&report).unwrap();
    assert!(text.contains("1. claude: Avg Score = 4.00"));
    assert!(text.contains("2. deepseek-v3: Avg Score = 4.00"));

    // single column
    let scores = dir.path().join("claude_scores.txt");
    assert_eq!(column::extract_column(&sheet, "claude得分", &scores).unwrap(), 3);
    assert_eq!(fs::read_to_string(&scores).unwrap(), "5\n3\n\n");
}

#[test]
fn missing_sheet() {
    let dir = tempdir().unwrap();
    let r = best::extract_best(
        &dir.path().join("nope.csv"),
        &dir.path().join("out.txt"),
        &models(),
        0.0,
    );
    assert!(r.is_err());
}
