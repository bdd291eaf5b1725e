//! 文档导出
//!
//! 把当前题目列表同时导出为分页 PDF 和 LaTeX 源文件。
//! 两种产物都在交付之前生成完毕，任一生成失败则不交付任何文件。

pub mod latex;
pub mod metrics;
pub mod pdf;
pub mod sink;

pub use latex::{LatexRenderer, DEFAULT_TEMPLATE, LATEX_FILE_NAME, PLACEHOLDER};
pub use pdf::{PdfLayout, PdfRenderer, PDF_FILE_NAME};
pub use sink::{ArtifactSink, DirectorySink, MemorySink};

use crate::error::ExportResult;
use crate::models::{number_questions, NumberedQuestion};
use tracing::info;

/// 文档标题
pub const DOCUMENT_TITLE: &str = "Questions";

/// 文档渲染能力：标题、题目列表、输出字节
pub trait DocumentRenderer {
    /// 交付时使用的文件名
    fn file_name(&self) -> &str;
    fn render_title(&mut self, title: &str) -> ExportResult<()>;
    fn render_items(&mut self, items: &[NumberedQuestion<'_>]) -> ExportResult<()>;
    fn finish(&mut self) -> ExportResult<Vec<u8>>;
}

/// 生成好的导出文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// 导出摘要
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// 导出的题目数（不含空题）
    pub question_count: usize,
    pub artifact_count: usize,
}

/// 文档导出器
#[derive(Debug, Clone)]
pub struct DocumentExporter {
    layout: PdfLayout,
    latex_template: String,
}

impl Default for DocumentExporter {
    fn default() -> Self {
        Self {
            layout: PdfLayout::default(),
            latex_template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl DocumentExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用自定义 LaTeX 模板，模板必须包含占位符
    pub fn with_template(template: impl Into<String>) -> ExportResult<Self> {
        let template = template.into();
        latex::validate_template(&template)?;
        Ok(Self {
            latex_template: template,
            ..Self::default()
        })
    }

    pub fn with_layout(mut self, layout: PdfLayout) -> Self {
        self.layout = layout;
        self
    }

    /// 每次导出都新建渲染器
    fn renderers(&self) -> Vec<Box<dyn DocumentRenderer>> {
        let pdf: Box<dyn DocumentRenderer> = Box::new(PdfRenderer::new(self.layout.clone()));
        let latex: Box<dyn DocumentRenderer> =
            Box::new(LatexRenderer::new(self.latex_template.clone()));
        vec![pdf, latex]
    }

    /// 生成全部产物但不交付
    pub fn render<S: AsRef<str>>(&self, questions: &[S]) -> ExportResult<Vec<ExportArtifact>> {
        let items = number_questions(questions);

        self.renderers()
            .into_iter()
            .map(|mut renderer| -> ExportResult<ExportArtifact> {
                renderer.render_title(DOCUMENT_TITLE)?;
                renderer.render_items(&items)?;
                Ok(ExportArtifact {
                    file_name: renderer.file_name().to_string(),
                    bytes: renderer.finish()?,
                })
            })
            .collect()
    }

    /// 生成 PDF 与 LaTeX 并交付
    pub fn export<S: AsRef<str>>(
        &self,
        questions: &[S],
        sink: &dyn ArtifactSink,
    ) -> ExportResult<ExportSummary> {
        let artifacts = self.render(questions)?;

        for artifact in &artifacts {
            sink.deliver(&artifact.file_name, &artifact.bytes)?;
        }

        let summary = ExportSummary {
            question_count: number_questions(questions).len(),
            artifact_count: artifacts.len(),
        };
        info!(
            "📄 导出完成: {} 道题, {} 个文件",
            summary.question_count, summary.artifact_count
        );

        Ok(summary)
    }
}
