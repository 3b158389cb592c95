use demoji_core::{FileProcessor, FileScanner, Mode, ProcessConfig, Target};
use std::fs;
use tempfile::TempDir;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 创建临时文档目录
    let temp_dir = TempDir::new()?;
    let docs = temp_dir.path().join("docs");
    fs::create_dir_all(&docs)?;
    fs::write(docs.join("intro.md"), "Welcome \u{1F44B} to the docs.\n")?;
    fs::write(docs.join("faq.md"), "No symbols here.\n")?;

    let target = Target::resolve(&docs)?;
    let files = FileScanner::default().collect(&target)?;
    println!("扫描到 {} 个文件", files.len());

    for mode in [Mode::Detect, Mode::Remove] {
        let processor = FileProcessor::new(ProcessConfig {
            mode,
            ..Default::default()
        });

        let summary = processor.process_files_with_progress(&files, |outcome| {
            println!(
                "{:?}: {} (matched: {}, emojis: {})",
                mode,
                outcome.path.display(),
                outcome.matched,
                outcome.emoji_count
            );
        })?;

        println!(
            "{:?} 完成: {} 个命中，耗时 {}ms",
            mode,
            summary.matched_files.len(),
            summary.duration_ms
        );
    }

    println!("{}", fs::read_to_string(docs.join("intro.md"))?);
    Ok(())
}
