//! 通知数据模型
//!
//! - [`RawNotification`]: 拦截到的原始文本字段
//! - [`Event`]: 解析得到的结构化事件

pub mod event;
pub mod raw;

pub use event::Event;
pub use raw::RawNotification;
