use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "question-toolbar", version, about = "题目集工具栏：导出、新建、切换打分算法")]
pub struct Cli {
    #[arg(short = 'y', long, global = true, help = "跳过确认对话框")]
    pub yes: bool,
    #[arg(long, global = true, help = "题目列表 TOML 文件（覆盖 QUESTIONS_FILE）")]
    pub questions: Option<String>,
    #[arg(long, global = true, help = "导出目录（覆盖 OUTPUT_DIR）")]
    pub output_dir: Option<String>,
    #[arg(short, long, global = true, help = "显示详细日志")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// 导出当前题目集为 questions.pdf 和 questions.tex
    Save,
    /// 导出当前题目集后清空，开始新的题目集
    New,
    /// 切换打分算法
    Algo { name: String },
    /// 列出可选算法
    Algorithms,
    /// 初始化后端并显示当前状态
    Status,
}
