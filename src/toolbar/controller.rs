//! 工具栏流程
//!
//! 新建 / 保存 / 切换算法三个按钮背后的完整流程：
//! 确认 → 导出 → 更新题目列表，或 请求后端 → 更新状态 → 提示

use crate::error::{ApiError, AppResult};
use crate::export::{ArtifactSink, DocumentExporter, ExportSummary};
use crate::models::{Algorithm, QuestionList};
use crate::services::{AlgorithmBackend, Notifier};
use crate::toolbar::state::{Action, Dialog, ToolbarState};
use tracing::{info, warn};

/// 算法切换结果
#[derive(Debug)]
pub enum SwitchOutcome {
    /// 切换成功
    Switched {
        algorithm: Algorithm,
        database: String,
    },
    /// 切换失败，已恢复为之前的算法
    Reverted {
        previous: Algorithm,
        attempted: Algorithm,
        error: ApiError,
    },
}

impl SwitchOutcome {
    pub fn is_switched(&self) -> bool {
        matches!(self, SwitchOutcome::Switched { .. })
    }
}

/// 工具栏
pub struct Toolbar<B, N> {
    state: ToolbarState,
    questions: QuestionList,
    exporter: DocumentExporter,
    backend: B,
    notifier: N,
    default_database: String,
}

impl<B: AlgorithmBackend, N: Notifier> Toolbar<B, N> {
    pub fn new(
        backend: B,
        notifier: N,
        exporter: DocumentExporter,
        questions: QuestionList,
        selected: Algorithm,
        default_database: impl Into<String>,
    ) -> Self {
        Self {
            state: ToolbarState::new(selected),
            questions,
            exporter,
            backend,
            notifier,
            default_database: default_database.into(),
        }
    }

    pub fn state(&self) -> &ToolbarState {
        &self.state
    }

    pub fn questions(&self) -> &QuestionList {
        &self.questions
    }

    pub fn set_questions(&mut self, questions: QuestionList) {
        self.questions = questions;
    }

    /// 应用一个动作；若产生提示，立即显示并关闭
    fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);

        if let Some(toast) = self.state.toast.clone() {
            self.notifier.show_toast(&toast);
            let state = std::mem::take(&mut self.state);
            self.state = state.apply(Action::DismissToast);
        }
    }

    /// 启动时按当前选中的算法初始化后端
    pub async fn initialize(&mut self) -> SwitchOutcome {
        let selected = self.state.selected;
        self.switch_algorithm(selected).await
    }

    /// 打开算法菜单，返回可选算法
    pub fn open_algorithm_menu(&mut self) -> &'static [Algorithm] {
        self.dispatch(Action::OpenDialog(Dialog::SelectAlgorithm));
        &Algorithm::ALL
    }

    /// 关闭当前对话框
    pub fn close_dialog(&mut self) {
        self.dispatch(Action::CloseDialog);
    }

    /// 切换打分算法
    ///
    /// 失败时恢复为切换前的算法，不返回错误
    pub async fn switch_algorithm(&mut self, algorithm: Algorithm) -> SwitchOutcome {
        let previous = self.state.selected;
        self.dispatch(Action::SwitchStarted(algorithm));
        info!("🔄 正在切换算法: {} → {}", previous, algorithm);

        match self.backend.switch(algorithm).await {
            Ok(_) => {
                let database = self.default_database.clone();
                self.dispatch(Action::SwitchSucceeded {
                    database: database.clone(),
                });
                info!("✓ 当前算法: {} | 数据库: {}", algorithm, database);
                SwitchOutcome::Switched {
                    algorithm,
                    database,
                }
            }
            Err(error) => {
                warn!("算法切换失败，恢复为 {}: {}", previous, error);
                self.dispatch(Action::SwitchFailed { previous });
                SwitchOutcome::Reverted {
                    previous,
                    attempted: algorithm,
                    error,
                }
            }
        }
    }

    /// 索引初始化完成
    pub fn index_initialized(&mut self) {
        self.dispatch(Action::IndexInitialized);
    }

    /// 索引初始化失败
    pub fn index_initialization_failed(&mut self) {
        self.dispatch(Action::IndexInitializationFailed);
    }

    /// 询问确认，确认后导出；返回 None 表示取消
    fn confirm_and_export(
        &mut self,
        dialog: Dialog,
        sink: &dyn ArtifactSink,
    ) -> AppResult<Option<ExportSummary>> {
        self.dispatch(Action::OpenDialog(dialog));
        let confirmed = match dialog.prompt() {
            Some(prompt) => self.notifier.confirm(&prompt),
            None => true,
        };
        self.dispatch(Action::CloseDialog);

        if !confirmed {
            info!("已取消: {}", dialog.title());
            return Ok(None);
        }

        let summary = self.exporter.export(&self.questions.questions, sink)?;
        Ok(Some(summary))
    }

    /// 保存当前题目集
    pub fn save(&mut self, sink: &dyn ArtifactSink) -> AppResult<Option<ExportSummary>> {
        self.confirm_and_export(Dialog::Save, sink)
    }

    /// 保存当前题目集并开始新的题目集
    pub fn new_question_set(
        &mut self,
        sink: &dyn ArtifactSink,
    ) -> AppResult<Option<ExportSummary>> {
        let summary = self.confirm_and_export(Dialog::NewSet, sink)?;
        if summary.is_some() {
            self.questions = QuestionList::blank();
            info!("📝 已开始新的题目集");
        }
        Ok(summary)
    }
}
