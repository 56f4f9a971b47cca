//! QQ Notify Resolver - 从 QQ / TIM 通知文本中还原结构化消息事件

pub mod cli;
pub mod config;
pub mod notification;
pub mod resolver;
pub mod tag;

pub use config::ResolverConfig;
pub use notification::{Event, RawNotification};
pub use resolver::{get_resolver, resolve, NotificationResolver, QqResolver, TimResolver};
pub use tag::{SourceTag, Vendor};
