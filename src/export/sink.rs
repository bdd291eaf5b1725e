//! 导出产物的交付（相当于浏览器下载）

use crate::error::{ExportError, ExportResult};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;

/// 交付一个已生成的文件
pub trait ArtifactSink {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> ExportResult<()>;
}

/// 写入指定目录
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> ExportResult<()> {
        let delivery_failed = |source| ExportError::DeliveryFailed {
            file_name: file_name.to_string(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(delivery_failed)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, bytes).map_err(delivery_failed)?;

        info!("💾 已保存: {} ({} 字节)", path.display(), bytes.len());
        Ok(())
    }
}

/// 内存收集，用于测试和嵌入调用
#[derive(Default)]
pub struct MemorySink {
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已交付的文件（按交付顺序）
    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.files
            .lock()
            .map(|files| files.clone())
            .unwrap_or_default()
    }

    pub fn get(&self, file_name: &str) -> Option<Vec<u8>> {
        self.files()
            .into_iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, bytes)| bytes)
    }
}

impl ArtifactSink for MemorySink {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> ExportResult<()> {
        if let Ok(mut files) = self.files.lock() {
            files.push((file_name.to_string(), bytes.to_vec()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_sink_writes_file() {
        let dir = std::env::temp_dir().join(format!("question_toolbar_sink_{}", std::process::id()));
        let sink = DirectorySink::new(&dir);

        sink.deliver("questions.tex", b"hello").unwrap();
        let written = std::fs::read(dir.join("questions.tex")).unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(written, b"hello");
    }

    #[test]
    fn memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.deliver("a", b"1").unwrap();
        sink.deliver("b", b"2").unwrap();
        let names: Vec<String> = sink.files().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(sink.get("b"), Some(b"2".to_vec()));
    }
}
