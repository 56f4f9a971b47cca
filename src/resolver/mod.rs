//! 通知解析器
//!
//! 把 title / ticker / content 三段文本还原为结构化 [`Event`]。
//!
//! # 解析顺序
//! 每个厂商按固定优先级逐类尝试，第一个结构匹配即返回：
//! 1. 隐藏消息
//! 2. 空间动态
//! 3. 群聊
//! 4. 私聊
//! 5. 关联账号
//!
//! 结构不匹配时静默进入下一类；结构匹配但必需字段缺失视为缺陷，整次解析返回 `None`，
//! 不再尝试后续类别。

pub mod patterns;
pub mod qq;
pub mod tim;

use crate::notification::{Event, RawNotification};
use crate::tag::{SourceTag, Vendor};
use regex::Captures;
use tracing::{debug, warn};

pub use qq::QqResolver;
pub use tim::TimResolver;

/// 厂商解析器
pub trait NotificationResolver: Send + Sync {
    /// 负责的文本格式约定
    fn vendor(&self) -> Vendor;

    /// 解析一条通知
    fn resolve(
        &self,
        tag: SourceTag,
        title: Option<&str>,
        content: Option<&str>,
        ticker: Option<&str>,
    ) -> Option<Event>;
}

/// 消息类别，按解析优先级排列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Hidden,
    SocialFeed,
    Group,
    Private,
    LinkedAccount,
}

impl Category {
    /// 是否依赖 ticker；没有 ticker 时只能判断隐藏消息
    pub fn needs_ticker(&self) -> bool {
        !matches!(self, Category::Hidden)
    }
}

/// 单个类别的尝试结果
#[derive(Debug)]
pub(crate) enum Trial {
    /// 结构不匹配，继续下一类
    Skip,
    Matched(Event),
    /// 结构匹配但字段提取失败
    Malformed(&'static str),
}

/// 通过前置检查后的输入
pub(crate) struct Fields<'a> {
    pub tag: SourceTag,
    pub title: &'a str,
    pub content: &'a str,
    pub ticker: Option<&'a str>,
}

impl<'a> Fields<'a> {
    /// title 或 content 为空时不做任何解析
    pub fn new(
        tag: SourceTag,
        title: Option<&'a str>,
        content: Option<&'a str>,
        ticker: Option<&'a str>,
    ) -> Option<Self> {
        let title = title.filter(|t| !t.is_empty())?;
        let content = content.filter(|c| !c.is_empty())?;
        Some(Self {
            tag,
            title,
            content,
            ticker,
        })
    }

    /// 需要 ticker 的类别只会在 ticker 存在时被调用
    pub fn ticker(&self) -> &'a str {
        self.ticker.unwrap_or_default()
    }
}

pub(crate) type TrialFn = fn(&Fields<'_>) -> Trial;

/// 按顺序尝试各类别
pub(crate) fn run_trials(
    vendor: Vendor,
    fields: &Fields<'_>,
    trials: &[(Category, TrialFn)],
) -> Option<Event> {
    for (category, trial) in trials {
        if category.needs_ticker() && fields.ticker.is_none() {
            return None;
        }
        match trial(fields) {
            Trial::Skip => continue,
            Trial::Matched(event) => {
                debug!(vendor = ?vendor, category = ?category, "Notification resolved");
                return Some(event);
            }
            Trial::Malformed(reason) => {
                warn!(
                    vendor = ?vendor,
                    category = ?category,
                    reason = %reason,
                    title = %fields.title,
                    "Notification matched category shape but fields could not be extracted"
                );
                return None;
            }
        }
    }
    None
}

/// 解析捕获的未读数，缺失、无法解析或为 0 时按 1 处理
pub(crate) fn parse_count(caps: Option<&Captures<'_>>, name: &str) -> u32 {
    caps.and_then(|c| c.name(name))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}

static QQ_RESOLVER: QqResolver = QqResolver;
static TIM_RESOLVER: TimResolver = TimResolver;

/// 获取来源对应的解析器，未知来源返回 `None`
pub fn get_resolver(tag: SourceTag) -> Option<&'static dyn NotificationResolver> {
    match tag.vendor()? {
        Vendor::Qq => Some(&QQ_RESOLVER),
        Vendor::Tim => Some(&TIM_RESOLVER),
    }
}

/// 按来源分发解析
pub fn resolve(tag: SourceTag, raw: &RawNotification) -> Option<Event> {
    let resolver = get_resolver(tag)?;
    resolver.resolve(
        tag,
        raw.title.as_deref(),
        raw.content.as_deref(),
        raw.ticker.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_resolver_routing() {
        assert_eq!(get_resolver(SourceTag::Qq).unwrap().vendor(), Vendor::Qq);
        assert_eq!(get_resolver(SourceTag::QqLite).unwrap().vendor(), Vendor::Qq);
        assert_eq!(get_resolver(SourceTag::QqHd).unwrap().vendor(), Vendor::Qq);
        assert_eq!(get_resolver(SourceTag::Tim).unwrap().vendor(), Vendor::Tim);
        assert!(get_resolver(SourceTag::Unknown).is_none());
    }

    #[test]
    fn test_resolve_unknown_tag() {
        let raw = RawNotification::new(SourceTag::Unknown)
            .title("咕咕咕")
            .ticker("咕咕咕: qqq")
            .content("qqq");
        assert_eq!(resolve(SourceTag::Unknown, &raw), None);
    }

    #[test]
    fn test_fields_rejects_empty() {
        assert!(Fields::new(SourceTag::Qq, Some(""), Some("c"), None).is_none());
        assert!(Fields::new(SourceTag::Qq, Some("t"), Some(""), None).is_none());
        assert!(Fields::new(SourceTag::Qq, None, Some("c"), None).is_none());
        assert!(Fields::new(SourceTag::Qq, Some("t"), None, None).is_none());
        assert!(Fields::new(SourceTag::Qq, Some("t"), Some("c"), None).is_some());
    }

    #[test]
    fn test_parse_count() {
        let re = regex::Regex::new(r"^(?<num>\d+)?x$").unwrap();
        assert_eq!(parse_count(re.captures("7x").as_ref(), "num"), 7);
        assert_eq!(parse_count(re.captures("x").as_ref(), "num"), 1);
        assert_eq!(parse_count(re.captures("0x").as_ref(), "num"), 1);
        assert_eq!(parse_count(re.captures("99999999999x").as_ref(), "num"), 1);
        assert_eq!(parse_count(None, "num"), 1);
    }

    fn skip(_: &Fields<'_>) -> Trial {
        Trial::Skip
    }

    fn malformed(_: &Fields<'_>) -> Trial {
        Trial::Malformed("test")
    }

    fn hidden(f: &Fields<'_>) -> Trial {
        Trial::Matched(Event::HiddenMessage { tag: f.tag })
    }

    #[test]
    fn test_run_trials_malformed_stops_chain() {
        let fields = Fields::new(SourceTag::Qq, Some("t"), Some("c"), Some("k")).unwrap();
        let trials: [(Category, TrialFn); 3] = [
            (Category::Hidden, skip),
            (Category::Group, malformed),
            (Category::Private, hidden),
        ];
        assert_eq!(run_trials(Vendor::Qq, &fields, &trials), None);
    }

    #[test]
    fn test_run_trials_missing_ticker_stops_after_hidden() {
        let fields = Fields::new(SourceTag::Qq, Some("t"), Some("c"), None).unwrap();
        let trials: [(Category, TrialFn); 2] =
            [(Category::Hidden, skip), (Category::Private, hidden)];
        assert_eq!(run_trials(Vendor::Qq, &fields, &trials), None);

        let trials: [(Category, TrialFn); 1] = [(Category::Hidden, hidden)];
        assert_eq!(
            run_trials(Vendor::Qq, &fields, &trials),
            Some(Event::HiddenMessage { tag: SourceTag::Qq })
        );
    }
}
