//! LaTeX 渲染：把题目列表填入固定模板

use crate::error::{ExportError, ExportResult};
use crate::export::DocumentRenderer;
use crate::models::NumberedQuestion;

pub const LATEX_FILE_NAME: &str = "questions.tex";

/// 模板中的占位符
pub const PLACEHOLDER: &str = "%%questions";

/// 每道题的前缀
pub const ITEM_MARKER: &str = "\\item ";

/// 默认模板
pub const DEFAULT_TEMPLATE: &str = r"\documentclass[12pt]{article}
\usepackage[utf8]{inputenc}
\usepackage[a4paper, margin=1in]{geometry}

\title{Questions}
\date{\today}

\begin{document}

\maketitle

\begin{enumerate}
%%questions
\end{enumerate}

\end{document}
";

/// 生成题目块：每道非空题目一行 `\item 题干`
pub fn item_block(items: &[NumberedQuestion<'_>]) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", ITEM_MARKER, item.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 检查模板是否包含占位符
pub fn validate_template(template: &str) -> ExportResult<()> {
    if template.contains(PLACEHOLDER) {
        Ok(())
    } else {
        Err(ExportError::MissingPlaceholder {
            placeholder: PLACEHOLDER.to_string(),
        })
    }
}

/// LaTeX 渲染器
///
/// 标题写在模板里，`render_title` 不做任何事
pub struct LatexRenderer {
    template: String,
    block: String,
}

impl LatexRenderer {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            block: String::new(),
        }
    }

    /// 只替换第一个占位符
    pub fn render_to_string(&self) -> ExportResult<String> {
        validate_template(&self.template)?;
        Ok(self.template.replacen(PLACEHOLDER, &self.block, 1))
    }
}

impl Default for LatexRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl DocumentRenderer for LatexRenderer {
    fn file_name(&self) -> &str {
        LATEX_FILE_NAME
    }

    fn render_title(&mut self, _title: &str) -> ExportResult<()> {
        Ok(())
    }

    fn render_items(&mut self, items: &[NumberedQuestion<'_>]) -> ExportResult<()> {
        self.block = item_block(items);
        Ok(())
    }

    fn finish(&mut self) -> ExportResult<Vec<u8>> {
        Ok(self.render_to_string()?.into_bytes())
    }
}
