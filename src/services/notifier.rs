//! 提示与确认 - 业务能力层

use crate::toolbar::state::{ConfirmPrompt, Toast, ToastIntent};
use std::io::{BufRead, Write};
use tracing::{error, info, warn};

/// 显示提示、询问确认
pub trait Notifier {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
    fn show_toast(&self, toast: &Toast);
}

/// 终端实现：提示写入日志，确认从标准输入读取
pub struct TerminalNotifier {
    auto_confirm: bool,
}

impl TerminalNotifier {
    pub fn new(auto_confirm: bool) -> Self {
        Self { auto_confirm }
    }
}

impl Notifier for TerminalNotifier {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        if self.auto_confirm {
            info!("{} (已自动确认)", prompt.title);
            return true;
        }

        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "{}\n{} [y/N] ", prompt.title, prompt.body);
        let _ = stderr.flush();

        let mut answer = String::new();
        if let Err(e) = std::io::stdin().lock().read_line(&mut answer) {
            warn!("读取确认输入失败: {}", e);
            return false;
        }

        is_yes(&answer)
    }

    fn show_toast(&self, toast: &Toast) {
        match toast.intent {
            ToastIntent::Success => info!("✅ {}", toast.message),
            ToastIntent::Error => error!("❌ {}", toast.message),
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
