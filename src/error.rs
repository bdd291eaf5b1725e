use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 导出相关错误
    #[error("导出错误: {0}")]
    Export(#[from] ExportError),
    /// API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文档导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    /// 题目中包含 PDF 标准字体无法编码的字符
    #[error("第 {question} 题包含无法编码的字符 {ch:?}")]
    UnsupportedCharacter { question: usize, ch: char },
    /// LaTeX 模板缺少占位符
    #[error("LaTeX 模板缺少占位符 {placeholder}")]
    MissingPlaceholder { placeholder: String },
    /// PDF 生成失败
    #[error("PDF 生成失败: {0}")]
    Pdf(#[from] lopdf::Error),
    /// 产物写出失败
    #[error("写出 {file_name} 失败: {source}")]
    DeliveryFailed {
        file_name: String,
        #[source]
        source: std::io::Error,
    },
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// API 返回错误响应
    #[error("API返回错误响应 ({endpoint}): status={status}")]
    BadResponse { endpoint: String, status: u16 },
    /// 构建 HTTP 客户端失败
    #[error("无法创建 HTTP 客户端: {0}")]
    ClientBuildFailed(#[source] reqwest::Error),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// TOML 序列化失败
    #[error("TOML序列化失败 ({path}): {source}")]
    TomlSerializeFailed {
        path: String,
        #[source]
        source: toml::ser::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 未知的算法名称
    #[error("未知的算法: {name}")]
    UnknownAlgorithm { name: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

/// 导出结果类型
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_error_wraps_into_app_error() {
        let err: AppError = ExportError::MissingPlaceholder {
            placeholder: "%%questions".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Export(_)));
        assert!(err.to_string().contains("%%questions"));
    }

    #[test]
    fn unsupported_character_names_question() {
        let err = ExportError::UnsupportedCharacter {
            question: 3,
            ch: '题',
        };
        let msg = err.to_string();
        assert!(msg.contains("第 3 题"));
        assert!(msg.contains('题'));
    }
}
