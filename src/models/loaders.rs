use crate::error::{AppError, AppResult, FileError};
use crate::models::question::QuestionList;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载题目列表
///
/// 文件不存在时视为新题目集
pub async fn load_question_list(path: &Path) -> AppResult<QuestionList> {
    let path_str = path.display().to_string();

    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("题目文件不存在，使用空白题目集: {}", path_str);
            return Ok(QuestionList::blank());
        }
        Err(e) => return Err(AppError::file_read_failed(path_str, e)),
    };

    let list: QuestionList = toml::from_str(&content).map_err(|source| FileError::TomlParseFailed {
        path: path_str.clone(),
        source,
    })?;

    tracing::info!("成功加载 {} 个题目 ({} 个已填写)", list.questions.len(), list.filled_count());

    Ok(list)
}

/// 将题目列表写回 TOML 文件
pub async fn save_question_list(path: &Path, list: &QuestionList) -> AppResult<()> {
    let path_str = path.display().to_string();

    let content = toml::to_string(list).map_err(|source| FileError::TomlSerializeFailed {
        path: path_str.clone(),
        source,
    })?;

    fs::write(path, content)
        .await
        .map_err(|e| AppError::file_write_failed(path_str, e))?;

    Ok(())
}
