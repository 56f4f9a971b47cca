//! 通知文本模式库
//!
//! 每个厂商、每类消息的文本格式，用命名捕获组描述。只有数据，没有逻辑。
//!
//! 已知限制：群聊模式要求昵称不含英文括号 `()`，否则群名与昵称的边界无法确定。
//! 消息正文使用 `(?s)`，允许跨行。

use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid notification pattern")
}

/// 两家共用的空间动态与关联账号格式
pub mod shared {
    use super::*;

    /// 空间动态标题：`QQ空间动态` 或 `QQ空间动态(共N条未读)`
    pub static QZONE_TITLE: LazyLock<Regex> =
        LazyLock::new(|| compile(r"^QQ空间动态(?:\(共(?<num>\d+)条未读\))?$"));

    /// 多人向关联账号发来消息时的汇总正文
    pub static LINKED_DIGEST_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
        compile(r"^有 (?<senders>\d+) 个联系人给你发过来(?<num>\d+)条新消息$")
    });
}

/// QQ（含轻聊版、HD）
///
/// ```text
/// 隐藏消息  title: QQ
///           ticker: QQ: 你收到了N条新消息
///           content: 你收到了N条新消息
/// 群聊      title: 群名 | 群名(N条新消息)
///           ticker: 群名(N条新消息): 昵称: 消息
///           content: [特别关心]昵称: 消息
/// 私聊      title: [特别关心]昵称 (N条新消息)
///           ticker: 昵称: 消息预览
///           content: 消息
/// 关联账号  title: 关联QQ号 | 关联QQ号 (N条新消息) | QQ（多人）
///           ticker: 关联QQ号-发送者:消息
///           content: 发送者:消息 | 有 M 个联系人给你发过来N条新消息
/// ```
pub mod qq {
    use super::*;

    pub const APP_NAME: &str = "QQ";
    pub const STARRED_TAG: &str = "[特别关心]";

    pub static HIDDEN_TICKER: LazyLock<Regex> =
        LazyLock::new(|| compile(r"^QQ: 你收到了(?<num>\d+)条新消息$"));

    pub static HIDDEN_CONTENT: LazyLock<Regex> =
        LazyLock::new(|| compile(r"^你收到了(?<num>\d+)条新消息$"));

    pub static GROUP_TICKER: LazyLock<Regex> = LazyLock::new(|| {
        compile(
            r"(?s)^(?<group>.+?)(?:\((?<num>\d+)条新消息\))?: (?<name>[^()]+?): (?<msg>.+)$",
        )
    });

    /// 群聊标题，ticker 必须以它开头
    pub static GROUP_TITLE: LazyLock<Regex> =
        LazyLock::new(|| compile(r"^(?<group>.+?)(?:\((?<num>\d+)条新消息\))?$"));

    pub static GROUP_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
        compile(r"(?s)^(?<special>\[特别关心\])?(?<name>[^()]+?): (?<msg>.+)$")
    });

    pub static PRIVATE_TICKER: LazyLock<Regex> =
        LazyLock::new(|| compile(r"(?s)^(?<name>.+?): (?<msg>.+)$"));

    pub static PRIVATE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
        compile(r"^(?<special>\[特别关心\])?(?<name>.+?)(?: \((?<num>\d+)条新消息\))?$")
    });

    pub static LINKED_TICKER: LazyLock<Regex> =
        LazyLock::new(|| compile(r"(?s)^关联QQ号-(?<sender>.+?):(?<msg>.+)$"));

    pub static LINKED_TITLE: LazyLock<Regex> =
        LazyLock::new(|| compile(r"^关联QQ号(?: \((?<num>\d+)条新消息\))?$"));
}

/// TIM
///
/// ```text
/// 隐藏消息  title: TIM
///           ticker/content: 你收到了N条新消息
/// 空间动态  ticker: 【特别关心】昵称：动态内容（特别关心）
/// 群聊      title: 群名 | 群名(N条新消息)
///           ticker: 昵称(群名):消息
///           content: [特别关注]昵称: 消息
/// 私聊      title: 昵称 | 昵称(N条新消息)
///           ticker: [特别关注]昵称: 消息预览
///           content: 消息
/// 关联账号  title: 关联QQ号 | 关联QQ号(N条新消息)
///           ticker: 关联QQ号:发送者:消息
/// ```
pub mod tim {
    use super::*;

    pub const APP_NAME: &str = "TIM";
    pub const STARRED_TAG: &str = "[特别关注]";
    pub const QZONE_SPECIAL_MARKER: &str = "【特别关心】";

    pub static HIDDEN_TICKER: LazyLock<Regex> =
        LazyLock::new(|| compile(r"^你收到了(?<num>\d+)条新消息$"));

    pub static GROUP_TICKER: LazyLock<Regex> = LazyLock::new(|| {
        compile(r"(?s)^(?<name>[^()]+?)\((?<group>.+?)\):(?<msg>.+)$")
    });

    /// 群聊标题，群名须与 ticker 中的群名一致
    pub static GROUP_TITLE: LazyLock<Regex> =
        LazyLock::new(|| compile(r"^(?<group>.+?)(?:\((?<num>\d+)条新消息\))?$"));

    pub static GROUP_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
        compile(r"(?s)^(?<special>\[特别关注\])?(?<name>.+?): (?<msg>.+)$")
    });

    pub static PRIVATE_TICKER: LazyLock<Regex> = LazyLock::new(|| {
        compile(r"(?s)^(?<special>\[特别关注\])?(?<name>.+?): (?<msg>.+)$")
    });

    pub static PRIVATE_TITLE: LazyLock<Regex> =
        LazyLock::new(|| compile(r"^(?<name>.+?)(?:\((?<num>\d+)条新消息\))?$"));

    pub static LINKED_TICKER: LazyLock<Regex> =
        LazyLock::new(|| compile(r"(?s)^关联QQ号:(?<sender>.+?):(?<msg>.+)$"));

    pub static LINKED_TITLE: LazyLock<Regex> =
        LazyLock::new(|| compile(r"^关联QQ号(?:\((?<num>\d+)条新消息\))?$"));
}
