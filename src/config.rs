//! 配置加载 - ~/.config/qq-notify-resolver/config.json
//!
//! 配置文件可选，不存在时使用默认值。

use crate::tag::{SourceTag, KNOWN_PACKAGES};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 覆盖默认配置路径的环境变量
pub const CONFIG_ENV: &str = "QNR_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// 额外的包名映射，优先于内置表
    #[serde(default)]
    pub packages: BTreeMap<String, SourceTag>,
    /// JSON 输出是否格式化
    #[serde(default)]
    pub pretty: bool,
}

impl ResolverConfig {
    /// 配置文件路径：`$QNR_CONFIG` 优先
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        dirs::home_dir().map(|h| h.join(".config/qq-notify-resolver/config.json"))
    }

    /// 从默认路径加载，文件不存在时返回默认配置
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Cannot parse config file {}", path.display()))?;
        debug!(path = %path.display(), packages = config.packages.len(), "Loaded config");
        Ok(config)
    }

    /// 包名对应的来源，配置优先
    pub fn tag_for_package(&self, package: &str) -> SourceTag {
        self.packages
            .get(package)
            .copied()
            .unwrap_or_else(|| SourceTag::from_package(package))
    }

    /// 合并后的完整包名表
    pub fn package_table(&self) -> BTreeMap<String, SourceTag> {
        let mut table: BTreeMap<String, SourceTag> = KNOWN_PACKAGES
            .iter()
            .map(|(name, tag)| (name.to_string(), *tag))
            .collect();
        table.extend(self.packages.iter().map(|(k, v)| (k.clone(), *v)));
        table
    }
}
