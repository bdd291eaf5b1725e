use anyhow::Result;
use clap::Parser;
use question_toolbar::cli::Cli;
use question_toolbar::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置，命令行参数优先
    let mut config = Config::from_env()?;
    config.auto_confirm |= cli.yes;
    config.verbose_logging |= cli.verbose;
    if let Some(questions) = cli.questions {
        config.questions_file = questions;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).await?.run(cli.command).await?;

    Ok(())
}
