//! 工具栏状态
//!
//! 所有状态变化都通过 [`ToolbarState::apply`] 完成：输入旧状态和动作，返回新状态。

use crate::models::Algorithm;

/// 对话框
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// 新建题目集
    NewSet,
    /// 保存题目集
    Save,
    /// 选择算法
    SelectAlgorithm,
}

/// 确认对话框的文字
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: &'static str,
    pub body: &'static str,
}

impl Dialog {
    pub fn title(self) -> &'static str {
        match self {
            Dialog::NewSet => "Start a new question set?",
            Dialog::Save => "Save this question set?",
            Dialog::SelectAlgorithm => "Select Algorithm",
        }
    }

    /// 需要确认的对话框才有提示文字
    pub fn prompt(self) -> Option<ConfirmPrompt> {
        match self {
            Dialog::NewSet | Dialog::Save => Some(ConfirmPrompt {
                title: self.title(),
                body: "The current question set will be downloaded.",
            }),
            Dialog::SelectAlgorithm => None,
        }
    }
}

/// 算法切换请求的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlgoStatus {
    #[default]
    Loading,
    Failed,
    Ready,
}

/// 状态徽标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Spinner,
    Failed,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastIntent {
    Success,
    Error,
}

/// 提示消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub intent: ToastIntent,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            intent: ToastIntent::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            intent: ToastIntent::Error,
            message: message.into(),
        }
    }
}

/// 状态变化
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenDialog(Dialog),
    CloseDialog,
    SwitchStarted(Algorithm),
    SwitchSucceeded { database: String },
    SwitchFailed { previous: Algorithm },
    IndexInitialized,
    IndexInitializationFailed,
    ShowToast(Toast),
    DismissToast,
}

/// 工具栏状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolbarState {
    /// 当前打开的对话框（同一时间最多一个）
    pub open_dialog: Option<Dialog>,
    pub selected: Algorithm,
    pub status: AlgoStatus,
    pub current_database: Option<String>,
    /// 正在显示的提示
    pub toast: Option<Toast>,
}

impl ToolbarState {
    pub fn new(selected: Algorithm) -> Self {
        Self {
            selected,
            ..Self::default()
        }
    }

    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::OpenDialog(dialog) => Self {
                open_dialog: Some(dialog),
                ..self
            },
            Action::CloseDialog => Self {
                open_dialog: None,
                ..self
            },
            Action::SwitchStarted(algorithm) => Self {
                open_dialog: None,
                selected: algorithm,
                status: AlgoStatus::Loading,
                ..self
            },
            Action::SwitchSucceeded { database } => Self {
                status: AlgoStatus::Ready,
                current_database: Some(database),
                toast: Some(Toast::success("Successfully switched algorithm")),
                ..self
            },
            Action::SwitchFailed { previous } => Self {
                open_dialog: None,
                selected: previous,
                status: AlgoStatus::Failed,
                toast: Some(Toast::error("Failed to switch algorithm")),
                ..self
            },
            Action::IndexInitialized => Self {
                toast: Some(Toast::success("Index initialized successfully.")),
                ..self
            },
            Action::IndexInitializationFailed => Self {
                toast: Some(Toast::error("Index initialization failed.")),
                ..self
            },
            Action::ShowToast(toast) => Self {
                toast: Some(toast),
                ..self
            },
            Action::DismissToast => Self { toast: None, ..self },
        }
    }

    pub fn badge(&self) -> StatusBadge {
        match self.status {
            AlgoStatus::Loading => StatusBadge::Spinner,
            AlgoStatus::Failed => StatusBadge::Failed,
            AlgoStatus::Ready => StatusBadge::Ready,
        }
    }
}
