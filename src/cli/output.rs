//! Output formatting for CLI commands

use crate::notification::Event;
use crate::tag::SourceTag;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 单条解析结果，`event` 为 `None` 表示未匹配
#[derive(Debug, Clone, Serialize)]
pub struct ResolveRecord {
    /// 输入行号（单条解析时为 0）
    pub line: usize,
    pub tag: SourceTag,
    pub event: Option<Event>,
    pub resolved_at: DateTime<Utc>,
}

impl ResolveRecord {
    pub fn new(line: usize, tag: SourceTag, event: Option<Event>) -> Self {
        Self {
            line,
            tag,
            event,
            resolved_at: Utc::now(),
        }
    }
}

/// Serialize as JSON, pretty-printed when requested
pub fn format_json<T: Serialize>(data: &T, pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string(data)
    };
    result.unwrap_or_else(|_| "{}".to_string())
}

/// 人类可读输出
pub fn format_text(event: Option<&Event>) -> String {
    match event {
        Some(event) => event.to_string(),
        None => "未匹配".to_string(),
    }
}
