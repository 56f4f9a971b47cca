//! TIM 通知解析器

use super::patterns::{shared, tim};
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

pub struct TimResolver;

impl NotificationResolver for TimResolver {
    fn vendor(&self) -> Vendor {
        Vendor::Tim
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
    if f.title != tim::APP_NAME || !tim::HIDDEN_TICKER.is_match(f.content) {
        return Trial::Skip;
    }
    match f.ticker {
        Some(ticker) if !tim::HIDDEN_TICKER.is_match(ticker) => Trial::Skip,
        _ => Trial::Matched(Event::HiddenMessage { tag: f.tag }),
    }
}

/// ticker 以特别关心标记开头即为特别关心动态
fn social_feed(f: &Fields<'_>) -> Trial {
    let Some(caps) = shared::QZONE_TITLE.captures(f.title) else {
        return Trial::Skip;
    };
    if f.ticker().starts_with(tim::QZONE_SPECIAL_MARKER) {
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

/// 昵称与群名取自 ticker，未读数取自标题，消息和特别关注标记取自 content
fn group_message(f: &Fields<'_>) -> Trial {
    let Some(ticker_caps) = tim::GROUP_TICKER.captures(f.ticker()) else {
        return Trial::Skip;
    };
    // 标题中的群名须与 ticker 一致，私聊正文里的 `(…):` 不构成群聊
    let Some(title_caps) = tim::GROUP_TITLE.captures(f.title) else {
        return Trial::Skip;
    };
    let group_name = &ticker_caps["group"];
    if group_name != &title_caps["group"] {
        return Trial::Skip;
    }
    let Some(content_caps) = tim::GROUP_CONTENT.captures(f.content) else {
        return Trial::Malformed("group content does not match `nickname: message`");
    };

    Trial::Matched(Event::GroupMessage {
        tag: f.tag,
        group_name: group_name.to_string(),
        nickname: ticker_caps["name"].to_string(),
        message: content_caps["msg"].to_string(),
        is_starred: content_caps.name("special").is_some(),
        unread_count: parse_count(Some(&title_caps), "num"),
    })
}

/// 特别关注标记在 ticker 内，昵称须与标题一致
fn private_message(f: &Fields<'_>) -> Trial {
    let Some(ticker_caps) = tim::PRIVATE_TICKER.captures(f.ticker()) else {
        return Trial::Skip;
    };
    let Some(title_caps) = tim::PRIVATE_TITLE.captures(f.title) else {
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
        is_starred: ticker_caps.name("special").is_some(),
        unread_count: parse_count(Some(&title_caps), "num"),
    })
}

fn linked_account_message(f: &Fields<'_>) -> Trial {
    let Some(caps) = tim::LINKED_TICKER.captures(f.ticker()) else {
        return Trial::Skip;
    };

    let unread_count = match tim::LINKED_TITLE.captures(f.title) {
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
