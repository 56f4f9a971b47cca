//! 通知来源标识 - 根据应用包名区分 QQ / TIM 及其变种

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// 通知来源
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceTag {
    #[default]
    Unknown,
    /// QQ 主版本
    Qq,
    /// QQ 轻聊版
    QqLite,
    /// QQ HD
    QqHd,
    Tim,
}

/// 文本格式约定（同一约定共享一套解析规则）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Qq,
    Tim,
}

/// 内置包名映射
pub const KNOWN_PACKAGES: [(&str, SourceTag); 4] = [
    ("com.tencent.mobileqq", SourceTag::Qq),
    ("com.tencent.qqlite", SourceTag::QqLite),
    ("com.tencent.minihd.qq", SourceTag::QqHd),
    ("com.tencent.tim", SourceTag::Tim),
];

impl SourceTag {
    /// 根据包名识别来源，未知包名返回 `Unknown`
    pub fn from_package(package: &str) -> Self {
        KNOWN_PACKAGES
            .iter()
            .find(|(name, _)| *name == package)
            .map(|(_, tag)| *tag)
            .unwrap_or(SourceTag::Unknown)
    }

    /// 对应的文本格式约定
    pub fn vendor(&self) -> Option<Vendor> {
        match self {
            SourceTag::Qq | SourceTag::QqLite | SourceTag::QqHd => Some(Vendor::Qq),
            SourceTag::Tim => Some(Vendor::Tim),
            SourceTag::Unknown => None,
        }
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceTag::Unknown => write!(f, "unknown"),
            SourceTag::Qq => write!(f, "qq"),
            SourceTag::QqLite => write!(f, "qq-lite"),
            SourceTag::QqHd => write!(f, "qq-hd"),
            SourceTag::Tim => write!(f, "tim"),
        }
    }
}

impl std::str::FromStr for SourceTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "qq" | "mobileqq" => Ok(SourceTag::Qq),
            "qq-lite" | "qqlite" => Ok(SourceTag::QqLite),
            "qq-hd" | "qqhd" | "minihd" => Ok(SourceTag::QqHd),
            "tim" => Ok(SourceTag::Tim),
            "unknown" => Ok(SourceTag::Unknown),
            _ => Err(anyhow!("Unknown source tag: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_package() {
        assert_eq!(SourceTag::from_package("com.tencent.mobileqq"), SourceTag::Qq);
        assert_eq!(SourceTag::from_package("com.tencent.qqlite"), SourceTag::QqLite);
        assert_eq!(SourceTag::from_package("com.tencent.minihd.qq"), SourceTag::QqHd);
        assert_eq!(SourceTag::from_package("com.tencent.tim"), SourceTag::Tim);
        assert_eq!(SourceTag::from_package("com.tencent.mm"), SourceTag::Unknown);
    }

    #[test]
    fn test_vendor_routing() {
        assert_eq!(SourceTag::Qq.vendor(), Some(Vendor::Qq));
        assert_eq!(SourceTag::QqLite.vendor(), Some(Vendor::Qq));
        assert_eq!(SourceTag::QqHd.vendor(), Some(Vendor::Qq));
        assert_eq!(SourceTag::Tim.vendor(), Some(Vendor::Tim));
        assert_eq!(SourceTag::Unknown.vendor(), None);
    }

    #[test]
    fn test_display_from_str() {
        for tag in [
            SourceTag::Qq,
            SourceTag::QqLite,
            SourceTag::QqHd,
            SourceTag::Tim,
            SourceTag::Unknown,
        ] {
            assert_eq!(tag.to_string().parse::<SourceTag>().unwrap(), tag);
        }
        assert_eq!("MiniHD".parse::<SourceTag>().unwrap(), SourceTag::QqHd);
        assert!("wechat".parse::<SourceTag>().is_err());
    }

    #[test]
    fn test_serde_kebab_case() {
        assert_eq!(serde_json::to_string(&SourceTag::QqLite).unwrap(), "\"qq-lite\"");
        let tag: SourceTag = serde_json::from_str("\"qq-hd\"").unwrap();
        assert_eq!(tag, SourceTag::QqHd);
    }
}
