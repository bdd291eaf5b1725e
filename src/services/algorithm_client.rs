//! 算法切换服务 - 业务能力层
//!
//! 只负责"通知后端切换打分算法"这一能力，不关心状态和提示

use crate::config::Config;
use crate::error::{ApiError, AppResult};
use crate::models::Algorithm;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::debug;

/// 后端对切换请求的响应
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchResponse {
    pub status: u16,
    /// 响应体能解析成 JSON 时的内容
    pub body: Option<JsonValue>,
}

/// 算法切换后端
#[allow(async_fn_in_trait)]
pub trait AlgorithmBackend {
    async fn switch(&self, algorithm: Algorithm) -> Result<SwitchResponse, ApiError>;
}

/// 算法切换 HTTP 客户端
///
/// 请求形如 `GET {base_url}/?algo=USE`，非 2xx 状态视为失败
pub struct AlgorithmClient {
    client: reqwest::Client,
    base_url: String,
}

impl AlgorithmClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ApiError::ClientBuildFailed)?;

        Ok(Self {
            client,
            base_url: config.algo_api_base_url.clone(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

impl AlgorithmBackend for AlgorithmClient {
    async fn switch(&self, algorithm: Algorithm) -> Result<SwitchResponse, ApiError> {
        let endpoint = self.endpoint();
        debug!("请求切换算法: {} (algo={})", algorithm, algorithm.api_param());

        let response = self
            .client
            .get(&endpoint)
            .query(&[("algo", algorithm.api_param())])
            .send()
            .await
            .map_err(|source| ApiError::RequestFailed {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::BadResponse {
                endpoint,
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|source| ApiError::RequestFailed {
                endpoint: endpoint.clone(),
                source,
            })?;

        let body = serde_json::from_str::<JsonValue>(&text).ok();
        debug!("切换算法响应: status={} body={:?}", status.as_u16(), body);

        Ok(SwitchResponse {
            status: status.as_u16(),
            body,
        })
    }
}
