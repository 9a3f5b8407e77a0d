/*!
 * Common test utilities for the redraft test suite
 */

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Builds a multi-paragraph document long enough to exceed small token
/// budgets
pub fn long_document(paragraphs: usize) -> String {
    let sentences = [
        "The library opened its doors at nine.",
        "A visitor asked about the old maps.",
        "The archivist found them in the basement.",
        "Most had survived the flood of 1954.",
        "Restoration work began the following spring.",
    ];

    (0..paragraphs)
        .map(|i| {
            let mut paragraph = String::new();
            for j in 0..3 {
                paragraph.push_str(sentences[(i + j) % sentences.len()]);
                paragraph.push(' ');
            }
            paragraph.push('\n');
            paragraph.push('\n');
            paragraph
        })
        .collect()
}
