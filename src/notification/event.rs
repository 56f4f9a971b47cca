//! 解析结果事件
//!
//! 解析器的唯一输出。事件不带身份、不落盘，历史合并由调用方负责。

use crate::tag::SourceTag;
use serde::{Deserialize, Serialize};

/// 从通知文本中恢复出的结构化事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// 隐藏消息详情（应用自身的隐私选项），无可恢复内容
    HiddenMessage { tag: SourceTag },
    /// 特别关心的空间动态，总是单条
    SocialFeedSpecialPost { tag: SourceTag, content: String },
    /// 普通空间动态汇总
    SocialFeedMessage {
        tag: SourceTag,
        content: String,
        unread_count: u32,
    },
    /// 群聊消息
    GroupMessage {
        tag: SourceTag,
        group_name: String,
        nickname: String,
        message: String,
        /// 发送者是否为特别关心联系人
        is_starred: bool,
        unread_count: u32,
    },
    /// 私聊消息
    PrivateMessage {
        tag: SourceTag,
        nickname: String,
        message: String,
        is_starred: bool,
        unread_count: u32,
    },
    /// 关联账号转发的消息，`sender` 为原消息作者
    LinkedAccountMessage {
        tag: SourceTag,
        sender: String,
        message: String,
        unread_count: u32,
    },
}

impl Event {
    /// 事件来源
    pub fn tag(&self) -> SourceTag {
        match self {
            Event::HiddenMessage { tag }
            | Event::SocialFeedSpecialPost { tag, .. }
            | Event::SocialFeedMessage { tag, .. }
            | Event::GroupMessage { tag, .. }
            | Event::PrivateMessage { tag, .. }
            | Event::LinkedAccountMessage { tag, .. } => *tag,
        }
    }

    /// 该通知代表的未读条数；隐藏消息无法得知
    pub fn unread_count(&self) -> Option<u32> {
        match self {
            Event::HiddenMessage { .. } => None,
            Event::SocialFeedSpecialPost { .. } => Some(1),
            Event::SocialFeedMessage { unread_count, .. }
            | Event::GroupMessage { unread_count, .. }
            | Event::PrivateMessage { unread_count, .. }
            | Event::LinkedAccountMessage { unread_count, .. } => Some(*unread_count),
        }
    }

    pub fn is_starred(&self) -> bool {
        match self {
            Event::GroupMessage { is_starred, .. } | Event::PrivateMessage { is_starred, .. } => {
                *is_starred
            }
            _ => false,
        }
    }

    /// 与 serde `type` 字段一致的事件名
    pub fn kind(&self) -> &'static str {
        match self {
            Event::HiddenMessage { .. } => "hidden_message",
            Event::SocialFeedSpecialPost { .. } => "social_feed_special_post",
            Event::SocialFeedMessage { .. } => "social_feed_message",
            Event::GroupMessage { .. } => "group_message",
            Event::PrivateMessage { .. } => "private_message",
            Event::LinkedAccountMessage { .. } => "linked_account_message",
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let star = if self.is_starred() { "★" } else { "" };
        match self {
            Event::HiddenMessage { tag } => write!(f, "[{}] 隐藏消息", tag),
            Event::SocialFeedSpecialPost { tag, content } => {
                write!(f, "[{}] 特别关心动态: {}", tag, content)
            }
            Event::SocialFeedMessage {
                tag,
                content,
                unread_count,
            } => write!(f, "[{}] 空间动态({}): {}", tag, unread_count, content),
            Event::GroupMessage {
                tag,
                group_name,
                nickname,
                message,
                unread_count,
                ..
            } => write!(
                f,
                "[{}] 群聊 {}({}) {}{}: {}",
                tag, group_name, unread_count, star, nickname, message
            ),
            Event::PrivateMessage {
                tag,
                nickname,
                message,
                unread_count,
                ..
            } => write!(
                f,
                "[{}] 私聊 {}{}({}): {}",
                tag, star, nickname, unread_count, message
            ),
            Event::LinkedAccountMessage {
                tag,
                sender,
                message,
                unread_count,
            } => write!(f, "[{}] 关联账号 {}({}): {}", tag, sender, unread_count, message),
        }
    }
}
