// src/cli/tags.rs
//! Tags 命令 - 列出包名与来源映射

use super::output::format_json;
use crate::config::ResolverConfig;
use anyhow::Result;
use clap::Args;

/// Tags 命令参数
#[derive(Args, Debug, Clone)]
pub struct TagsArgs {
    /// 输出 JSON 格式
    #[arg(long)]
    pub json: bool,
}

/// 处理 tags 命令
pub fn handle_tags(args: TagsArgs, config: &ResolverConfig) -> Result<()> {
    let table = config.package_table();
    if args.json {
        println!("{}", format_json(&table, config.pretty));
    } else {
        println!("已知 {} 个包名:\n", table.len());
        for (package, tag) in &table {
            let vendor = tag
                .vendor()
                .map(|v| format!("{:?}", v))
                .unwrap_or_else(|| "-".to_string());
            println!("  {} | 来源: {} | 格式: {}", package, tag, vendor);
        }
    }
    Ok(())
}
