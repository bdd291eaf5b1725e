//! 日志工具模块
//!
//! 提供启动横幅、导出统计等日志输出的辅助函数

use crate::config::Config;
use crate::export::ExportSummary;
use crate::models::QuestionList;
use crate::toolbar::{StatusBadge, ToolbarState};
use tracing::{debug, info};

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 题目工具栏启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🧠 默认算法: {}", config.default_algorithm);
    info!("🌐 算法服务: {}", config.algo_api_base_url);
    info!("{}", "=".repeat(60));
}

/// 记录题目预览（debug 级别）
pub fn log_question_preview(questions: &QuestionList) {
    for item in questions.numbered() {
        debug!("  {}. {}", item.number, truncate_text(item.text, 40));
    }
}

/// 记录导出完成信息
pub fn log_export_complete(summary: &ExportSummary, output_dir: &str) {
    info!("\n{}", "─".repeat(60));
    info!(
        "✓ 导出完成: {} 道题 → {} 个文件",
        summary.question_count, summary.artifact_count
    );
    info!("📂 输出目录: {}", output_dir);
    info!("{}", "─".repeat(60));
}

/// 状态徽标的文字形式
pub fn badge_label(badge: StatusBadge) -> &'static str {
    match badge {
        StatusBadge::Spinner => "⏳ 加载中",
        StatusBadge::Failed => "❌ 失败",
        StatusBadge::Ready => "✅ 就绪",
    }
}

/// 打印工具栏状态
pub fn print_status(state: &ToolbarState) {
    info!("{}", "=".repeat(60));
    info!("🧠 当前算法: {}  {}", state.selected, badge_label(state.badge()));
    info!(
        "🗄️ 当前数据库: {}",
        state.current_database.as_deref().unwrap_or("-")
    );
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_text("短文本", 5), "短文本");
        assert_eq!(truncate_text("一二三四五六", 3), "一二三...");
    }

    #[test]
    fn badge_labels() {
        assert_eq!(badge_label(StatusBadge::Ready), "✅ 就绪");
        assert_eq!(badge_label(StatusBadge::Failed), "❌ 失败");
    }
}
