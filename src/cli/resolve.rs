// src/cli/resolve.rs
//! Resolve 命令 - 解析单条通知

use super::output::{format_json, format_text, ResolveRecord};
use crate::config::ResolverConfig;
use crate::notification::{Event, RawNotification};
use crate::tag::SourceTag;
use anyhow::{anyhow, Result};
use clap::Args;
use tracing::debug;

/// Resolve 命令参数
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// 来源: qq, qq-lite, qq-hd, tim
    #[arg(long, conflicts_with = "package")]
    pub tag: Option<SourceTag>,

    /// 应用包名，如 com.tencent.mobileqq
    #[arg(long)]
    pub package: Option<String>,

    /// 通知标题
    #[arg(long)]
    pub title: Option<String>,

    /// 通知 ticker
    #[arg(long)]
    pub ticker: Option<String>,

    /// 通知正文
    #[arg(long)]
    pub content: Option<String>,

    /// 输出 JSON 格式
    #[arg(long)]
    pub json: bool,
}

impl ResolveArgs {
    /// 确定来源：显式 tag 优先，其次按包名查表
    pub fn source_tag(&self, config: &ResolverConfig) -> Result<SourceTag> {
        match (&self.tag, &self.package) {
            (Some(tag), _) => Ok(*tag),
            (None, Some(package)) => Ok(config.tag_for_package(package)),
            (None, None) => Err(anyhow!("需要指定 --tag 或 --package")),
        }
    }

    pub fn to_raw(&self, tag: SourceTag) -> RawNotification {
        RawNotification {
            tag,
            title: self.title.clone(),
            content: self.content.clone(),
            ticker: self.ticker.clone(),
        }
    }
}

/// 解析参数对应的通知
pub fn resolve_args(
    args: &ResolveArgs,
    config: &ResolverConfig,
) -> Result<(SourceTag, Option<Event>)> {
    let tag = args.source_tag(config)?;
    let event = args.to_raw(tag).resolve();
    debug!(tag = %tag, matched = event.is_some(), "Resolved notification from arguments");
    Ok((tag, event))
}

/// 处理 resolve 命令
pub fn handle_resolve(args: ResolveArgs, config: &ResolverConfig) -> Result<()> {
    let (tag, event) = resolve_args(&args, config)?;
    if args.json {
        let record = ResolveRecord::new(0, tag, event);
        println!("{}", format_json(&record, config.pretty));
    } else {
        println!("{}", format_text(event.as_ref()));
    }
    Ok(())
}
