use crate::cli::Commands;
use crate::config::Config;
use crate::error::{AppError, AppResult, ConfigError, FileError};
use crate::export::{DirectorySink, DocumentExporter};
use crate::models::{load_question_list, save_question_list, Algorithm};
use crate::services::{AlgorithmClient, TerminalNotifier};
use crate::toolbar::{SwitchOutcome, Toolbar};
use crate::utils::logging::{log_export_complete, log_question_preview, log_startup, print_status};
use std::path::Path;
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
    toolbar: Toolbar<AlgorithmClient, TerminalNotifier>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);

        let exporter = load_exporter(&config).await?;
        let questions = load_question_list(Path::new(&config.questions_file)).await?;
        log_question_preview(&questions);

        let toolbar = Toolbar::new(
            AlgorithmClient::new(&config)?,
            TerminalNotifier::new(config.auto_confirm),
            exporter,
            questions,
            config.default_algorithm,
            config.default_database.clone(),
        );

        Ok(Self { config, toolbar })
    }

    /// 执行一个命令
    pub async fn run(&mut self, command: Commands) -> AppResult<()> {
        match command {
            Commands::Save => {
                let sink = DirectorySink::new(&self.config.output_dir);
                if let Some(summary) = self.toolbar.save(&sink)? {
                    log_export_complete(&summary, &self.config.output_dir);
                }
            }
            Commands::New => {
                let sink = DirectorySink::new(&self.config.output_dir);
                if let Some(summary) = self.toolbar.new_question_set(&sink)? {
                    log_export_complete(&summary, &self.config.output_dir);
                    save_question_list(
                        Path::new(&self.config.questions_file),
                        self.toolbar.questions(),
                    )
                    .await?;
                }
            }
            Commands::Algo { name } => {
                let algorithm =
                    Algorithm::from_name(&name).ok_or(ConfigError::UnknownAlgorithm { name })?;
                self.toolbar.open_algorithm_menu();
                if let SwitchOutcome::Reverted { error, .. } =
                    self.toolbar.switch_algorithm(algorithm).await
                {
                    print_status(self.toolbar.state());
                    return Err(error.into());
                }
                print_status(self.toolbar.state());
            }
            Commands::Algorithms => {
                let selected = self.toolbar.state().selected;
                for algorithm in self.toolbar.open_algorithm_menu() {
                    let marker = if *algorithm == selected { "*" } else { " " };
                    info!("{} {} (algo={})", marker, algorithm, algorithm.api_param());
                }
                self.toolbar.close_dialog();
            }
            Commands::Status => {
                self.toolbar.initialize().await;
                print_status(self.toolbar.state());
            }
        }

        Ok(())
    }
}

/// 按配置构建导出器，自定义模板从磁盘读取
async fn load_exporter(config: &Config) -> AppResult<DocumentExporter> {
    let Some(path) = &config.latex_template else {
        return Ok(DocumentExporter::new());
    };

    let template = match tokio::fs::read_to_string(path).await {
        Ok(template) => template,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(FileError::NotFound { path: path.clone() }.into());
        }
        Err(e) => return Err(AppError::file_read_failed(path.clone(), e)),
    };

    info!("📄 使用自定义 LaTeX 模板: {}", path);
    Ok(DocumentExporter::with_template(template)?)
}
