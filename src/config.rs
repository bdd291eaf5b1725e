use crate::error::{AppResult, ConfigError};
use crate::models::Algorithm;
use tracing::warn;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 算法切换服务地址
    pub algo_api_base_url: String,
    /// 启动时选中的算法
    pub default_algorithm: Algorithm,
    /// 算法切换成功后使用的数据库
    pub default_database: String,
    /// 题目列表 TOML 文件
    pub questions_file: String,
    /// 导出文件存放目录
    pub output_dir: String,
    /// 自定义 LaTeX 模板路径
    pub latex_template: Option<String>,
    /// HTTP 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 跳过确认对话框
    pub auto_confirm: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algo_api_base_url: "http://127.0.0.1:5000".to_string(),
            default_algorithm: Algorithm::default(),
            default_database: "Quora".to_string(),
            questions_file: "questions.toml".to_string(),
            output_dir: ".".to_string(),
            latex_template: None,
            request_timeout_secs: 10,
            auto_confirm: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量读取配置，缺省项使用默认值
    ///
    /// 数值和布尔值无法解析时回退到默认值；算法名称无法识别时返回错误
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let default = Self::default();

        let default_algorithm = match lookup("DEFAULT_ALGORITHM") {
            Some(name) => Algorithm::from_name(&name)
                .ok_or(ConfigError::UnknownAlgorithm { name })?,
            None => default.default_algorithm,
        };

        Ok(Self {
            algo_api_base_url: lookup("ALGO_API_BASE_URL").unwrap_or(default.algo_api_base_url),
            default_algorithm,
            default_database: lookup("DEFAULT_DATABASE").unwrap_or(default.default_database),
            questions_file: lookup("QUESTIONS_FILE").unwrap_or(default.questions_file),
            output_dir: lookup("OUTPUT_DIR").unwrap_or(default.output_dir),
            latex_template: lookup("LATEX_TEMPLATE").or(default.latex_template),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS").and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            auto_confirm: lookup("AUTO_CONFIRM").map_or(default.auto_confirm, |v| parse_flag("AUTO_CONFIRM", &v, default.auto_confirm)),
            verbose_logging: lookup("VERBOSE_LOGGING").map_or(default.verbose_logging, |v| parse_flag("VERBOSE_LOGGING", &v, default.verbose_logging)),
        })
    }
}

/// 解析开关类环境变量：true/false、1/0、yes/no、on/off（不区分大小写）
fn parse_flag(var_name: &str, value: &str, default: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" => true,
        "false" | "0" | "no" | "n" | "off" | "" => false,
        _ => {
            warn!("⚠️ 无法识别的开关值 {}={}，使用默认值 {}", var_name, value, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.algo_api_base_url, "http://127.0.0.1:5000");
        assert_eq!(config.default_algorithm, Algorithm::UniversalSentenceEncoder);
        assert_eq!(config.default_database, "Quora");
        assert_eq!(config.request_timeout_secs, 10);
        assert!(!config.auto_confirm);
    }

    #[test]
    fn overrides_and_bad_numbers() {
        let config = Config::from_lookup(lookup_from(&[
            ("DEFAULT_ALGORITHM", "BERT"),
            ("REQUEST_TIMEOUT_SECS", "abc"),
            ("AUTO_CONFIRM", "true"),
            ("OUTPUT_DIR", "out"),
        ]))
        .unwrap();
        assert_eq!(config.default_algorithm, Algorithm::Bert);
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.auto_confirm);
        assert_eq!(config.output_dir, "out");
    }

    #[test]
    fn flag_values_accept_common_spellings() {
        for value in ["1", "yes", "YES", "On", "true", " y "] {
            let config = Config::from_lookup(lookup_from(&[
                ("AUTO_CONFIRM", value),
                ("VERBOSE_LOGGING", value),
            ]))
            .unwrap();
            assert!(config.auto_confirm, "AUTO_CONFIRM={:?}", value);
            assert!(config.verbose_logging, "VERBOSE_LOGGING={:?}", value);
        }

        for value in ["0", "no", "OFF", "false"] {
            let config = Config::from_lookup(lookup_from(&[("AUTO_CONFIRM", value)])).unwrap();
            assert!(!config.auto_confirm, "AUTO_CONFIRM={:?}", value);
        }
    }

    #[test]
    fn unrecognised_flag_keeps_default() {
        assert!(parse_flag("AUTO_CONFIRM", "maybe", true));
        assert!(!parse_flag("AUTO_CONFIRM", "maybe", false));
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("DEFAULT_ALGORITHM", "GPT")]));
        assert!(result.is_err());
    }
}
