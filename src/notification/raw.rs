//! 原始通知 - 拦截到的三个文本字段

use crate::notification::event::Event;
use crate::tag::SourceTag;
use serde::{Deserialize, Serialize};

/// 一条待解析的原始通知
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNotification {
    pub tag: SourceTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
}

impl RawNotification {
    pub fn new(tag: SourceTag) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// 按自身来源解析
    pub fn resolve(&self) -> Option<Event> {
        crate::resolver::resolve(self.tag, self)
    }
}
