use question_ingest::config::Config;
use question_ingest::{App, FileTextExtractor, Ingestor, JsonLinesSink, MarkerSet, Record};
use std::fs;
use std::path::Path;

const BENGALI_PAPER: &str = "\
১ম অধ্যায়

1. বাংলাদেশের রাজধানী কোনটি?
(a) ঢাকা
(b) চট্টগ্রাম
(c) খুলনা
(d) রাজশাহী
উত্তর: (a)
রেফারেন্স: ভূগোল বই
কনসেপ্ট: রাজধানী

2. কোনটি মৌলিক সংখ্যা?
(a) ৪
(b) ৭
উত্তর: (b)
ররফাররন্স: গণিত বই
কনরেপ্ট: মৌলিক সংখ্যা

3. রেফারেন্স: শুধু রেফারেন্স
";

fn read_records(path: &Path) -> Vec<Record> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn test_config(dir: &Path, input: &Path) -> Config {
    Config {
        input_path: input.display().to_string(),
        output_path: dir.join("out").join("questions.jsonl").display().to_string(),
        skip_log_file: dir.join("skipped.txt").display().to_string(),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_app_ingests_plain_text_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("paper.txt");
    fs::write(&input, BENGALI_PAPER).unwrap();

    let config = test_config(dir.path(), &input);
    let output_path = config.output_path.clone();
    let skip_path = config.skip_log_file.clone();

    let report = App::initialize(config).await.unwrap().run().await.unwrap();

    // 第一个题块是题号之前的章节标题，只有题干
    assert_eq!(report.blocks_seen, 4);
    assert_eq!(report.records.len(), 3);
    assert_eq!(report.skipped.len(), 1);
    assert!(!report.cap_reached);

    let records = read_records(Path::new(&output_path));
    assert_eq!(records, report.records);

    let capital = &records[1];
    assert_eq!(capital.question_text(), "বাংলাদেশের রাজধানী কোনটি?");
    assert_eq!(capital.options().len(), 4);
    assert_eq!(capital.answer(), "(a)");
    assert_eq!(capital.reference(), "ভূগোল বই");
    assert_eq!(capital.concept(), "রাজধানী");

    let prime = &records[2];
    assert_eq!(
        prime.options(),
        &["(a) ৪", "(b) ৭", "(c) N/A", "(d) N/A"]
    );
    assert_eq!(prime.reference(), "গণিত বই");
    assert_eq!(prime.concept(), "মৌলিক সংখ্যা");

    let skipped = fs::read_to_string(&skip_path).unwrap();
    assert!(skipped.contains("রেফারেন্স: শুধু রেফারেন্স"));
}

#[tokio::test]
async fn test_app_respects_record_cap() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("many.txt");
    let text: String = (1..=150)
        .map(|i| format!("{}. Question {}?\n(a) yes\n(b) no\nAnswer: (a)\n", i, i))
        .collect();
    fs::write(&input, text).unwrap();

    let config = Config {
        max_records: 100,
        ..test_config(dir.path(), &input)
    };
    let output_path = config.output_path.clone();

    let report = App::initialize(config).await.unwrap().run().await.unwrap();
    assert_eq!(report.records.len(), 100);
    assert_eq!(report.blocks_seen, 100);
    assert!(report.cap_reached);

    assert_eq!(read_records(Path::new(&output_path)).len(), 100);
}

#[tokio::test]
async fn test_app_fails_without_valid_records() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    fs::write(&input, "   \n\n  ").unwrap();

    let config = test_config(dir.path(), &input);
    let output_path = config.output_path.clone();

    let result = App::initialize(config).await.unwrap().run().await;
    assert!(result.is_err());
    assert!(!Path::new(&output_path).exists());
}

#[tokio::test]
async fn test_skip_file_written_when_no_valid_records() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("noise.txt");
    let long_reference = format!("Reference: {}", "a very long citation text ".repeat(5));
    fs::write(&input, format!("1. {}\n2. Concept: y\n", long_reference)).unwrap();

    let config = test_config(dir.path(), &input);
    let output_path = config.output_path.clone();
    let skip_path = config.skip_log_file.clone();

    let result = App::initialize(config).await.unwrap().run().await;
    assert!(result.is_err());
    assert!(!Path::new(&output_path).exists());

    // 原文完整写入，不截断
    let skipped = fs::read_to_string(&skip_path).unwrap();
    assert!(skipped.contains(&format!("题块 1 | 原文: {}\n", long_reference.trim())));
    assert!(skipped.contains("题块 2 | 原文: Concept: y\n"));
}

#[tokio::test]
async fn test_skip_file_written_before_sink_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("paper.txt");
    fs::write(&input, "1. Reference: only\n2. Real?\n(a) x\n").unwrap();

    // 输出目录的位置被普通文件占用，写入必然失败
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let config = Config {
        output_path: blocker.join("questions.jsonl").display().to_string(),
        ..test_config(dir.path(), &input)
    };
    let skip_path = config.skip_log_file.clone();

    let result = App::initialize(config).await.unwrap().run().await;
    assert!(result.is_err());

    let skipped = fs::read_to_string(&skip_path).unwrap();
    assert!(skipped.contains("题块 1 | 原文: Reference: only\n"));
}

#[tokio::test]
async fn test_clean_run_clears_stale_skip_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("clean.txt");
    fs::write(&input, "1. Clean question?\n(a) x\n(b) y\nAnswer: (a)\n").unwrap();

    let config = test_config(dir.path(), &input);
    let skip_path = config.skip_log_file.clone();
    fs::write(&skip_path, "题块 9 | 原文: stale from last run\n").unwrap();

    let report = App::initialize(config).await.unwrap().run().await.unwrap();
    assert!(report.skipped.is_empty());

    let skipped = fs::read_to_string(&skip_path).unwrap();
    assert!(!skipped.contains("stale from last run"));
    assert!(!skipped.contains("题块 "));
}

#[tokio::test]
async fn test_app_uses_markers_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("custom.txt");
    fs::write(
        &input,
        "1. Capital of France?\n(a) Paris\n(b) Rome\nAns: (a)\nSource: atlas\n",
    )
    .unwrap();

    let markers_path = dir.path().join("markers.toml");
    fs::write(
        &markers_path,
        "answer = [\"Ans\"]\nreference = [\"Source\"]\nconcept = [\"Topic\"]\n",
    )
    .unwrap();

    let config = Config {
        markers_file: Some(markers_path.display().to_string()),
        ..test_config(dir.path(), &input)
    };

    let report = App::initialize(config).await.unwrap().run().await.unwrap();
    let record = &report.records[0];
    assert_eq!(record.question_text(), "Capital of France?");
    assert_eq!(record.answer(), "(a)");
    assert_eq!(record.reference(), "atlas");
}

#[tokio::test]
async fn test_unsupported_document_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.xlsx");
    fs::write(&input, "1. q\n(a) x").unwrap();

    let config = test_config(dir.path(), &input);
    let result = App::initialize(config).await.unwrap().run().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_ingestor_with_real_adapters() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("paper.md");
    fs::write(&input, "1. What is 2+2?\n(a) 3\n(b) 4\n(c) 5\n(d) 6\nAnswer: (b)\nReference: Math primer\n").unwrap();
    let output = dir.path().join("questions.jsonl");

    let ingestor = Ingestor::new(
        FileTextExtractor::new(),
        JsonLinesSink::new(&output),
        &MarkerSet::default(),
        100,
    )
    .unwrap();

    let report = ingestor.ingest(&input).await.unwrap();
    assert_eq!(report.records.len(), 1);

    let line = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(value["question"], "What is 2+2?");
    assert_eq!(value["answer"], "(b)");
    assert_eq!(value["references"], "Math primer");
    assert_eq!(value["concepts"], "");
    assert_eq!(value["options"].as_array().unwrap().len(), 4);
}
