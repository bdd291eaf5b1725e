use question_toolbar::cli::Commands;
use question_toolbar::export::{ArtifactSink, DirectorySink, MemorySink, PLACEHOLDER};
use question_toolbar::models::{load_question_list, save_question_list};
use question_toolbar::{App, Config, DocumentExporter, QuestionList};
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "question_toolbar_it_{}_{}",
        std::process::id(),
        name
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn count_items(tex: &str) -> usize {
    tex.matches("\\item ").count()
}

#[test]
fn export_writes_both_files() {
    let dir = temp_dir("export");
    let sink = DirectorySink::new(&dir);

    let summary = tokio_test::assert_ok!(DocumentExporter::new().export(&["", "A", "", "B"], &sink));

    let pdf = std::fs::read(dir.join("questions.pdf")).unwrap();
    let tex = std::fs::read_to_string(dir.join("questions.tex")).unwrap();
    let _ = std::fs::remove_dir_all(&dir);

    assert_eq!(summary.question_count, 2);
    assert!(pdf.starts_with(b"%PDF"));
    assert_eq!(count_items(&tex), 2);
    assert!(tex.contains("\\item A\n\\item B"));
}

#[test]
fn item_count_matches_filled_questions() {
    let questions = vec![
        "What is a lifetime?".to_string(),
        String::new(),
        String::new(),
        "Explain Send and Sync.".to_string(),
        "Why does Rust have no null?".to_string(),
    ];
    let list = QuestionList::new(questions.clone());
    let artifacts = DocumentExporter::new().render(&questions).unwrap();
    let tex = String::from_utf8(artifacts[1].bytes.clone()).unwrap();

    assert_eq!(count_items(&tex), list.filled_count());
    assert!(!tex.contains(PLACEHOLDER));
}

#[test]
fn export_is_repeatable() {
    let sink = MemorySink::new();
    let exporter = DocumentExporter::new();
    exporter.export(&["Q1"], &sink).unwrap();
    exporter.export(&["Q1"], &sink).unwrap();

    let files = sink.files();
    assert_eq!(files.len(), 4);
    assert_eq!(files[1].1, files[3].1);
}

struct FailingSink;

impl ArtifactSink for FailingSink {
    fn deliver(&self, file_name: &str, _bytes: &[u8]) -> question_toolbar::error::ExportResult<()> {
        Err(question_toolbar::ExportError::DeliveryFailed {
            file_name: file_name.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

#[test]
fn delivery_failure_propagates() {
    let result = DocumentExporter::new().export(&["Q1"], &FailingSink);
    assert!(result.is_err());
}

#[tokio::test]
async fn save_command_exports_question_file() {
    let dir = temp_dir("save_cmd");
    let questions_file = dir.join("questions.toml");
    save_question_list(
        &questions_file,
        &QuestionList::new(vec!["Q1".to_string(), String::new(), "Q2".to_string()]),
    )
    .await
    .unwrap();

    let config = Config {
        questions_file: questions_file.to_string_lossy().to_string(),
        output_dir: dir.join("out").to_string_lossy().to_string(),
        auto_confirm: true,
        ..Config::default()
    };

    let mut app = App::initialize(config).await.unwrap();
    app.run(Commands::Save).await.unwrap();

    let tex = std::fs::read_to_string(dir.join("out").join("questions.tex")).unwrap();
    let pdf_exists = dir.join("out").join("questions.pdf").exists();
    let _ = std::fs::remove_dir_all(&dir);

    assert!(pdf_exists);
    assert!(tex.contains("\\item Q1\n\\item Q2"));
}

#[tokio::test]
async fn new_command_resets_question_file() {
    let dir = temp_dir("new_cmd");
    let questions_file = dir.join("questions.toml");
    save_question_list(
        &questions_file,
        &QuestionList::new(vec!["Q1".to_string()]),
    )
    .await
    .unwrap();

    let config = Config {
        questions_file: questions_file.to_string_lossy().to_string(),
        output_dir: dir.join("out").to_string_lossy().to_string(),
        auto_confirm: true,
        ..Config::default()
    };

    let mut app = App::initialize(config).await.unwrap();
    app.run(Commands::New).await.unwrap();

    let reloaded = load_question_list(&questions_file).await.unwrap();
    let tex_exists = dir.join("out").join("questions.tex").exists();
    let _ = std::fs::remove_dir_all(&dir);

    assert!(tex_exists);
    assert_eq!(reloaded, QuestionList::blank());
}

#[tokio::test]
async fn unknown_algorithm_command_fails() {
    let dir = temp_dir("algo_cmd");
    let config = Config {
        questions_file: dir.join("missing.toml").to_string_lossy().to_string(),
        ..Config::default()
    };

    let mut app = App::initialize(config).await.unwrap();
    let result = app
        .run(Commands::Algo {
            name: "GPT".to_string(),
        })
        .await;
    let _ = std::fs::remove_dir_all(&dir);

    assert!(result.is_err());
}
