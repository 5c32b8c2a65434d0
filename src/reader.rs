// Line-oriented input for the CLI. The judgement core never touches I/O;
// this reader feeds it one line at a time and reports failures as real
// errors, never as a Neutral judgement.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Configuration for line reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}

/// Statistics for one input file read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Async reader that streams an input file line by line
pub struct LineReader {
    config: ReaderConfig,
}

impl LineReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read the whole input file as lines with buffered async I/O.
    ///
    /// A missing or unreadable file is an error; there is no partial-result
    /// fallback because every line maps to exactly one judgement downstream.
    pub async fn read_lines<P: AsRef<Path>>(&self, file_path: P) -> Result<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("opening input file: {}", path.display());
        let file = File::open(path)
            .await
            .with_context(|| format!("failed to open input file {}", path.display()))?;

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut result_lines = Vec::new();
        let mut byte_count = 0u64;

        while let Some(line) = lines
            .next_line()
            .await
            .with_context(|| format!("failed reading {} as UTF-8 text", path.display()))?
        {
            byte_count += line.len() as u64 + 1; // +1 for the newline
            result_lines.push(line);
        }

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: result_lines.len() as u64,
            bytes_read: byte_count,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "read {}: {} lines, {} bytes in {}ms",
            stats.file_path, stats.lines_read, stats.bytes_read, stats.duration_ms
        );

        Ok((result_lines, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("input.txt");
        tokio::fs::write(&file_path, "佢喺屋企\n他說了很多話\n天氣晴朗")
            .await
            .unwrap();

        let reader = LineReader::new(ReaderConfig::default());
        let (lines, stats) = reader.read_lines(&file_path).await.unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "佢喺屋企");
        assert_eq!(lines[1], "他說了很多話");
        assert_eq!(stats.lines_read, 3);
        assert!(stats.bytes_read > 0);
    }

    #[tokio::test]
    async fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        tokio::fs::write(&file_path, "").await.unwrap();

        let reader = LineReader::new(ReaderConfig::default());
        let (lines, stats) = reader.read_lines(&file_path).await.unwrap();

        assert_eq!(lines.len(), 0);
        assert_eq!(stats.lines_read, 0);
        assert_eq!(stats.bytes_read, 0);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nonexistent.txt");

        let reader = LineReader::new(ReaderConfig::default());
        let result = reader.read_lines(&file_path).await;

        assert!(result.is_err());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("failed to open input file"));
    }

    #[tokio::test]
    async fn test_custom_buffer_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large.txt");
        let content = format!("{}\n{}", "一".repeat(2048), "二".repeat(2048));
        tokio::fs::write(&file_path, &content).await.unwrap();

        let reader = LineReader::new(ReaderConfig { buffer_size: 1024 });
        let (lines, _stats) = reader.read_lines(&file_path).await.unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), 2048);
    }
}
