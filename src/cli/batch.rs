// src/cli/batch.rs
//! Batch 命令 - 逐行解析 JSON Lines 格式的通知
//!
//! 每行输入：`{"package": "...", "tag": "...", "title": "...", "ticker": "...", "content": "..."}`，
//! `tag` 优先于 `package`。每行输出一个 [`ResolveRecord`]。

use super::output::{format_json, ResolveRecord};
use crate::config::ResolverConfig;
use crate::notification::RawNotification;
use crate::tag::SourceTag;
use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Batch 命令参数
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// 输入文件，`-` 或省略表示 stdin
    pub input: Option<PathBuf>,
}

/// 单行输入
#[derive(Debug, Deserialize)]
pub struct BatchInput {
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub tag: Option<SourceTag>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl BatchInput {
    pub fn into_raw(self, config: &ResolverConfig) -> RawNotification {
        let tag = match (self.tag, &self.package) {
            (Some(tag), _) => tag,
            (None, Some(package)) => config.tag_for_package(package),
            (None, None) => SourceTag::Unknown,
        };
        RawNotification {
            tag,
            title: self.title,
            content: self.content,
            ticker: self.ticker,
        }
    }
}

/// 批量统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub total: usize,
    pub matched: usize,
    /// 无法解析的输入行
    pub skipped: usize,
}

/// 逐行解析并写出结果
pub fn process_batch<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    config: &ResolverConfig,
) -> Result<BatchStats> {
    let mut stats = BatchStats::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read input line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }

        let input: BatchInput = match serde_json::from_str(&line) {
            Ok(input) => input,
            Err(e) => {
                warn!(line = line_no, error = %e, "Skipping unparsable input line");
                stats.skipped += 1;
                continue;
            }
        };

        let raw = input.into_raw(config);
        let event = raw.resolve();
        stats.total += 1;
        if event.is_some() {
            stats.matched += 1;
        }

        let record = ResolveRecord::new(line_no, raw.tag, event);
        writeln!(writer, "{}", format_json(&record, false))?;
    }

    writer.flush()?;
    Ok(stats)
}

/// 处理 batch 命令
pub fn handle_batch(args: BatchArgs, config: &ResolverConfig) -> Result<()> {
    let stdout = io::stdout();
    let stats = match args.input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(&path)
                .with_context(|| format!("Cannot open input file {}", path.display()))?;
            process_batch(BufReader::new(file), stdout.lock(), config)?
        }
        _ => process_batch(io::stdin().lock(), stdout.lock(), config)?,
    };

    info!(
        total = stats.total,
        matched = stats.matched,
        skipped = stats.skipped,
        "Batch finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_process_batch() {
        let input = concat!(
            r#"{"package":"com.tencent.mobileqq","title":"咕咕咕","#,
            r#""ticker":"咕咕咕: qqq","content":"123qqq"}"#,
            "\n",
            "\n",
            "not json\n",
            r#"{"tag":"tim","title":"TIM","ticker":"你收到了2条新消息","content":"你收到了2条新消息"}"#,
            "\n",
            r#"{"package":"com.example","title":"a","ticker":"a: b","content":"b"}"#,
            "\n",
        );
        let mut out = Vec::new();

        let stats =
            process_batch(Cursor::new(input), &mut out, &ResolverConfig::default()).unwrap();
        assert_eq!(
            stats,
            BatchStats {
                total: 3,
                matched: 2,
                skipped: 1
            }
        );

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["line"], 1);
        assert_eq!(lines[0]["event"]["type"], "private_message");
        assert_eq!(lines[1]["line"], 4);
        assert_eq!(lines[1]["event"]["type"], "hidden_message");
        assert_eq!(lines[2]["tag"], "unknown");
        assert!(lines[2]["event"].is_null());
    }

    #[test]
    fn test_tag_takes_precedence_over_package() {
        let input: BatchInput =
            serde_json::from_str(r#"{"tag":"qq-hd","package":"com.tencent.tim"}"#).unwrap();
        assert_eq!(input.into_raw(&ResolverConfig::default()).tag, SourceTag::QqHd);
    }
}
