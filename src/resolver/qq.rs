//! QQ 通知解析器（QQ、QQ 轻聊版、QQ HD 共用）

use super::patterns::{qq, shared};
use super::{parse_count, run_trials, Category, Fields, NotificationResolver, Trial, TrialFn};
use crate::notification::Event;
use crate::tag::{SourceTag, Vendor};

const TRIALS: [(Category, TrialFn); 5] = [
    (Category::Hidden, hidden_message),
    (Category::SocialFeed, social_feed),
    (Category::Group, group_message),
    (Category::Private, private_message),
    (Category::LinkedAccount, linked_account_message),
];

pub struct QqResolver;

impl NotificationResolver for QqResolver {
    fn vendor(&self) -> Vendor {
        Vendor::Qq
    }

    fn resolve(
        &self,
        tag: SourceTag,
        title: Option<&str>,
        content: Option<&str>,
        ticker: Option<&str>,
    ) -> Option<Event> {
        let fields = Fields::new(tag, title, content, ticker)?;
        run_trials(self.vendor(), &fields, &TRIALS)
    }
}

fn hidden_message(f: &Fields<'_>) -> Trial {
    if f.title != qq::APP_NAME || !qq::HIDDEN_CONTENT.is_match(f.content) {
        return Trial::Skip;
    }
    match f.ticker {
        Some(ticker) if !qq::HIDDEN_TICKER.is_match(ticker) => Trial::Skip,
        _ => Trial::Matched(Event::HiddenMessage { tag: f.tag }),
    }
}

/// 标题不带未读数即为特别关心动态
fn social_feed(f: &Fields<'_>) -> Trial {
    let Some(caps) = shared::QZONE_TITLE.captures(f.title) else {
        return Trial::Skip;
    };
    if caps.name("num").is_none() {
        return Trial::Matched(Event::SocialFeedSpecialPost {
            tag: f.tag,
            content: f.content.to_string(),
        });
    }
    Trial::Matched(Event::SocialFeedMessage {
        tag: f.tag,
        content: f.content.to_string(),
        unread_count: parse_count(Some(&caps), "num"),
    })
}

/// ticker 为 `标题: content`，群名与未读数取自标题，昵称、消息和特别关心标记取自 content
fn group_message(f: &Fields<'_>) -> Trial {
    let ticker = f.ticker();
    if !qq::GROUP_TICKER.is_match(ticker) {
        return Trial::Skip;
    }
    // 私聊标题带空格分隔的未读数或特别关心前缀，与群聊 ticker 的前缀对不上
    let on_title = ticker
        .strip_prefix(f.title)
        .is_some_and(|rest| rest.starts_with(": "));
    if !on_title {
        return Trial::Skip;
    }
    let Some(title_caps) = qq::GROUP_TITLE.captures(f.title) else {
        return Trial::Skip;
    };
    let Some(content_caps) = qq::GROUP_CONTENT.captures(f.content) else {
        return Trial::Malformed("group content does not match `nickname: message`");
    };

    Trial::Matched(Event::GroupMessage {
        tag: f.tag,
        group_name: title_caps["group"].to_string(),
        nickname: content_caps["name"].to_string(),
        message: content_caps["msg"].to_string(),
        is_starred: content_caps.name("special").is_some(),
        unread_count: parse_count(Some(&title_caps), "num"),
    })
}

/// ticker 中的昵称必须与标题一致，否则交给后续类别
fn private_message(f: &Fields<'_>) -> Trial {
    let Some(ticker_caps) = qq::PRIVATE_TICKER.captures(f.ticker()) else {
        return Trial::Skip;
    };
    let Some(title_caps) = qq::PRIVATE_TITLE.captures(f.title) else {
        return Trial::Skip;
    };
    let nickname = &ticker_caps["name"];
    if nickname != &title_caps["name"] {
        return Trial::Skip;
    }

    Trial::Matched(Event::PrivateMessage {
        tag: f.tag,
        nickname: nickname.to_string(),
        message: f.content.to_string(),
        is_starred: title_caps.name("special").is_some(),
        unread_count: parse_count(Some(&title_caps), "num"),
    })
}

/// 单人发来时未读数在标题，多人时在汇总正文
fn linked_account_message(f: &Fields<'_>) -> Trial {
    let Some(caps) = qq::LINKED_TICKER.captures(f.ticker()) else {
        return Trial::Skip;
    };

    let unread_count = match qq::LINKED_TITLE.captures(f.title) {
        Some(title_caps) => parse_count(Some(&title_caps), "num"),
        None => parse_count(
            shared::LINKED_DIGEST_CONTENT.captures(f.content).as_ref(),
            "num",
        ),
    };

    Trial::Matched(Event::LinkedAccountMessage {
        tag: f.tag,
        sender: caps["sender"].to_string(),
        message: caps["msg"].to_string(),
        unread_count,
    })
}
