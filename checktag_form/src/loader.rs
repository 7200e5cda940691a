//! 表单描述文件（TOML）：
//!
//! ```toml
//! [[scope]]
//! selector = "#signup"
//!
//! [[scope.block]]
//! label = "Favourite colours"
//! field = "colors"
//! options = [{ value = "Red" }, { value = "Green", checked = true }]
//! ```
//!
//! - `value` 即展示文本
//! - `checked` 可省略，默认 false
//! - block 可以没有 options（用来测试“空字段不 attach”）

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{document::Document, error::FormError, fieldset::Fieldset};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSpec {
    #[serde(default)]
    pub scope: Vec<ScopeSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScopeSpec {
    pub selector: String,
    #[serde(default)]
    pub block: Vec<BlockSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockSpec {
    #[serde(default)]
    pub label: String,
    pub field: String,
    #[serde(default)]
    pub options: Vec<OptionSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionSpec {
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

impl BlockSpec {
    pub fn to_fieldset(&self) -> Fieldset {
        self.options
            .iter()
            .fold(Fieldset::new(&self.field, &self.label), |f, o| {
                f.with_option(&o.value, o.checked)
            })
    }
}

impl FormSpec {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, FormError> {
        Ok(toml::from_str(s)?)
    }

    /// 只建出空 scope 的文档：字段稍后由 `blocks` 逐个插入，模拟页面晚渲染。
    pub fn skeleton(&self) -> Document {
        let mut doc = Document::new();
        for s in &self.scope {
            if !doc.add_scope(s.selector.as_str()) {
                log::warn!("scope {} declared twice", s.selector);
            }
        }
        doc
    }

    /// 全部字段块，按文件顺序：`(scope selector, block)`。
    pub fn blocks(&self) -> impl Iterator<Item = (&str, &BlockSpec)> {
        self.scope
            .iter()
            .flat_map(|s| s.block.iter().map(move |b| (s.selector.as_str(), b)))
    }

    /// 一次性建出完整文档。
    pub fn build(&self) -> Result<Document, FormError> {
        let mut doc = self.skeleton();
        for (selector, block) in self.blocks() {
            doc.insert_field(selector, block.to_fieldset())?;
        }
        Ok(doc)
    }
}
