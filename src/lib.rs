//! # Question Toolbar
//!
//! 题目集编辑工具栏的核心逻辑：导出、新建题目集、切换打分算法
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目列表、算法枚举、TOML 读写
//!
//! ### ② 导出层（Export）
//! - `export/` - 把题目列表渲染为 PDF 与 LaTeX，并交付到目录或内存
//! - `DocumentRenderer` - 渲染能力（标题、题目列表、输出）
//! - `ArtifactSink` - 交付能力（相当于浏览器下载）
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `AlgorithmClient` - 通知后端切换算法
//! - `Notifier` - 提示与确认
//!
//! ### ④ 流程层（Toolbar）
//! - `toolbar/state` - 显式状态对象，状态变化为纯函数
//! - `toolbar/controller` - 新建 / 保存 / 切换算法的流程编排
//!
//! ## 模块结构

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logger;
pub mod models;
pub mod services;
pub mod toolbar;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult, ExportError};
pub use export::{DocumentExporter, ExportArtifact, ExportSummary};
pub use models::{Algorithm, QuestionList};
pub use toolbar::{SwitchOutcome, Toolbar, ToolbarState};
