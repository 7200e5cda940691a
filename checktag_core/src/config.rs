use serde::Deserialize;

use crate::{error::ConfigError, matcher::DEFAULT_LIMIT};

/// 输入框默认占位文本。
pub const DEFAULT_PLACEHOLDER: &str = "Start typing…";

/// 输入框下方的固定提示。
pub const HINT: &str = "Type to search. Enter to add. Click a tag to remove.";

/// widget 配置。除 `field_name` 外都可省略。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// 只在该选择器对应的区域里找字段；为空表示整个文档
    pub scope: Option<String>,
    /// 要增强的复选框组的名字
    pub field_name: String,
    pub placeholder: String,
    /// 建议条数上限，0 表示使用默认值
    pub max_suggestions: usize,
}

/// 单个配置文件的原始内容：只有文件里写出来的键才是 `Some`。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub scope: Option<String>,
    pub field_name: Option<String>,
    pub placeholder: Option<String>,
    pub max_suggestions: Option<usize>,
}

impl ConfigFile {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            scope: None,
            field_name: String::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            max_suggestions: DEFAULT_LIMIT,
        }
    }
}

impl WidgetConfig {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            ..Self::default()
        }
    }

    /// 解析单个文件并填上默认值。
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.merge(ConfigFile::from_toml_str(s)?);
        Ok(config)
    }

    /// 把 `src` 合并进来：文件里写出的键覆盖先前的值，哪怕它等于默认值。
    /// 空字符串视同未写。
    pub fn merge(&mut self, src: ConfigFile) {
        if let Some(scope) = src.scope.filter(|s| !s.trim().is_empty()) {
            self.scope = Some(scope);
        }
        if let Some(name) = src.field_name.filter(|s| !s.is_empty()) {
            self.field_name = name;
        }
        if let Some(placeholder) = src.placeholder.filter(|s| !s.is_empty()) {
            self.placeholder = placeholder;
        }
        if let Some(limit) = src.max_suggestions {
            self.max_suggestions = limit;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_name.trim().is_empty() {
            return Err(ConfigError::MissingFieldName);
        }
        Ok(())
    }

    /// 实际使用的 scope：空白选择器等同于未配置。
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn limit(&self) -> usize {
        if self.max_suggestions == 0 {
            DEFAULT_LIMIT
        } else {
            self.max_suggestions
        }
    }

    pub fn placeholder(&self) -> &str {
        if self.placeholder.is_empty() {
            DEFAULT_PLACEHOLDER
        } else {
            &self.placeholder
        }
    }
}
