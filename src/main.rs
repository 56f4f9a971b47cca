//! QQ Notify Resolver CLI
//!
//! 解析 QQ / TIM 通知文本

use anyhow::Result;
use clap::{Parser, Subcommand};
use qq_notify_resolver::{
    cli::{BatchArgs, ResolveArgs, TagsArgs},
    ResolverConfig,
};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "qnr")]
#[command(about = "QQ Notify Resolver - 从 QQ / TIM 通知文本中还原结构化消息")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 解析单条通知
    Resolve(ResolveArgs),
    /// 逐行解析 JSON Lines 格式的通知
    Batch(BatchArgs),
    /// 列出包名与来源映射
    Tags(TagsArgs),
}

fn main() -> Result<()> {
    // 通过 RUST_LOG 环境变量控制日志级别，默认为 info
    // 例如: RUST_LOG=debug qnr batch notifications.jsonl
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("qq_notify_resolver=info,qnr=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();
    let config = ResolverConfig::load()?;

    match cli.command {
        Commands::Resolve(args) => qq_notify_resolver::cli::handle_resolve(args, &config)?,
        Commands::Batch(args) => qq_notify_resolver::cli::handle_batch(args, &config)?,
        Commands::Tags(args) => qq_notify_resolver::cli::handle_tags(args, &config)?,
    }

    Ok(())
}
