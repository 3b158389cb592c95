use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use demoji_core::{
    FileProcessor, FileScanner, Mode, ProcessConfig, Target, TargetError, classifier,
    scanner::ScanConfig,
};

/// 创建一个测试用的文档目录
fn create_docs_tree(base_path: &Path) -> Result<()> {
    let docs = base_path.join("docs");
    fs::create_dir_all(docs.join("guides"))?;

    fs::write(
        base_path.join("README.md"),
        "# Project \u{1F680}\n\nFast  and small.\n",
    )?;
    fs::write(docs.join("index.md"), "Welcome.\n")?;
    fs::write(
        docs.join("guides").join("setup.md"),
        "Step one \u{2705}\u{FE0F}\nStep two\n",
    )?;
    // 非 markdown 文件不应被目录扫描触及
    fs::write(docs.join("notes.txt"), "Reminder \u{23F0}\n")?;

    Ok(())
}

fn run(root: &Path, mode: Mode) -> Result<demoji_core::RunSummary> {
    let target = Target::resolve(root)?;
    let files = FileScanner::default().collect(&target)?;
    let processor = FileProcessor::new(ProcessConfig {
        mode,
        ..Default::default()
    });
    processor.process_files(&files)
}

#[test]
fn test_end_to_end_detect_then_remove() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    create_docs_tree(root)?;

    let detected = run(root, Mode::Detect)?;
    assert_eq!(detected.files_processed, 3);
    assert_eq!(detected.matched_files.len(), 2);
    assert!(detected.exit_failure());

    let removed = run(root, Mode::Remove)?;
    assert_eq!(removed.matched_files.len(), 2);
    assert!(!removed.exit_failure());

    assert_eq!(
        fs::read_to_string(root.join("README.md"))?,
        "# Project \n\nFast and small.\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("docs/guides/setup.md"))?,
        "Step one \nStep two\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("docs/notes.txt"))?,
        "Reminder \u{23F0}\n"
    );

    // 清理后再次检测应无结果
    let again = run(root, Mode::Detect)?;
    assert!(!again.found_any());
    assert!(!again.exit_failure());

    Ok(())
}

#[test]
fn test_single_file_any_extension() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = temp_dir.path().join("notes.txt");
    fs::write(&file, "Reminder \u{23F0} soon")?;

    let removed = run(&file, Mode::Remove)?;
    assert_eq!(removed.matched_files, vec![file.clone()]);
    assert_eq!(fs::read_to_string(&file)?, "Reminder soon");

    Ok(())
}

#[test]
fn test_unchanged_file_not_rewritten() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = temp_dir.path().join("plain.md");
    fs::write(&file, "All clear.")?;
    let modified_before = fs::metadata(&file)?.modified()?;

    std::thread::sleep(std::time::Duration::from_millis(20));
    let removed = run(&file, Mode::Remove)?;

    assert!(!removed.found_any());
    assert_eq!(fs::read_to_string(&file)?, "All clear.");
    assert_eq!(fs::metadata(&file)?.modified()?, modified_before);

    Ok(())
}

#[test]
fn test_missing_target_is_precondition_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let err = Target::resolve(&missing).unwrap_err();
    assert!(matches!(err, TargetError::NotFound(_)));
    assert_eq!(
        format!("Error: {err}"),
        format!("Error: {} does not exist", missing.display())
    );
}

#[test]
fn test_gitignore_respected_when_enabled() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    create_docs_tree(root)?;
    fs::create_dir_all(root.join(".git"))?;
    fs::write(root.join(".gitignore"), "docs/guides/\n")?;

    let target = Target::resolve(root)?;

    let all = FileScanner::default().collect(&target)?;
    assert_eq!(all.len(), 3);

    let scanner = FileScanner::new(ScanConfig {
        respect_gitignore: true,
        ..Default::default()
    });
    let files = scanner.collect(&target)?;
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|p| !p.ends_with("setup.md")));

    Ok(())
}

#[test]
fn test_detection_and_removal_are_separate_predicates() {
    let spaced = "already  spaced";
    assert!(!classifier::contains_emoji(spaced));
    assert_ne!(classifier::remove_emojis(spaced), spaced);

    let with_emoji = "hi \u{1F44B}";
    assert!(classifier::contains_emoji(with_emoji));
    assert_ne!(classifier::remove_emojis(with_emoji), with_emoji);
}
