//! `Document`：按选择器划分区域（scope）的内存文档。
//!
//! 每个 scope 下挂若干字段块；插入/移除字段都会推进 `revision`，
//! 相当于一次 DOM mutation，观察者据此重新查找目标字段。

use crate::{
    error::FormError,
    fieldset::{Fieldset, SharedField},
};

#[derive(Debug, Clone)]
struct Scope {
    selector: String,
    fields: Vec<SharedField>,
}

impl Scope {
    fn find(&self, name: &str) -> Option<&SharedField> {
        self.fields.iter().find(|f| f.with(|f| f.name() == name))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    scopes: Vec<Scope>,
    revision: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增一个空 scope；已存在时返回 `false`。
    pub fn add_scope(&mut self, selector: impl Into<String>) -> bool {
        let selector = selector.into();
        if self.has_scope(&selector) {
            return false;
        }
        self.scopes.push(Scope {
            selector,
            fields: Vec::new(),
        });
        self.revision += 1;
        true
    }

    pub fn has_scope(&self, selector: &str) -> bool {
        self.scope(selector).is_some()
    }

    fn scope(&self, selector: &str) -> Option<&Scope> {
        self.scopes.iter().find(|s| s.selector == selector)
    }

    /// 在 scope 中插入一个字段块，返回与文档共享的句柄。
    pub fn insert_field(
        &mut self,
        selector: &str,
        fieldset: Fieldset,
    ) -> Result<SharedField, FormError> {
        let scope = self
            .scopes
            .iter_mut()
            .find(|s| s.selector == selector)
            .ok_or_else(|| FormError::UnknownScope(selector.to_string()))?;
        if scope.find(fieldset.name()).is_some() {
            return Err(FormError::DuplicateField {
                scope: selector.to_string(),
                field: fieldset.name().to_string(),
            });
        }
        let field = SharedField::new(fieldset);
        scope.fields.push(field.clone());
        self.revision += 1;
        Ok(field)
    }

    pub fn remove_field(&mut self, selector: &str, name: &str) -> Option<SharedField> {
        let scope = self.scopes.iter_mut().find(|s| s.selector == selector)?;
        let pos = scope
            .fields
            .iter()
            .position(|f| f.with(|f| f.name() == name))?;
        self.revision += 1;
        Some(scope.fields.remove(pos))
    }

    /// 查找字段：`scope` 为 `None` 时在整个文档中按 scope 顺序查找。
    pub fn find_field(&self, scope: Option<&str>, name: &str) -> Option<SharedField> {
        match scope {
            Some(selector) => self.scope(selector)?.find(name).cloned(),
            None => self.scopes.iter().find_map(|s| s.find(name).cloned()),
        }
    }

    /// 每次结构变化加一。
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> Fieldset {
        Fieldset::new(name, name).with_option("x", false)
    }

    #[test]
    fn insert_requires_known_scope() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.insert_field("#main", field("a")),
            Err(FormError::UnknownScope(_))
        ));
    }

    #[test]
    fn duplicate_fields_in_one_scope_are_rejected() {
        let mut doc = Document::new();
        doc.add_scope("#main");
        doc.insert_field("#main", field("a")).unwrap();
        assert!(matches!(
            doc.insert_field("#main", field("a")),
            Err(FormError::DuplicateField { .. })
        ));
    }

    #[test]
    fn find_field_respects_scope() {
        let mut doc = Document::new();
        doc.add_scope("#left");
        doc.add_scope("#right");
        doc.insert_field("#right", field("tags")).unwrap();

        assert!(doc.find_field(Some("#left"), "tags").is_none());
        assert!(doc.find_field(Some("#right"), "tags").is_some());
        assert!(doc.find_field(None, "tags").is_some());
        assert!(doc.find_field(Some("#nowhere"), "tags").is_none());
    }

    #[test]
    fn mutations_bump_revision() {
        let mut doc = Document::new();
        assert!(doc.add_scope("#main"));
        assert!(!doc.add_scope("#main"));
        let r = doc.revision();
        doc.insert_field("#main", field("a")).unwrap();
        assert!(doc.remove_field("#main", "a").is_some());
        assert!(doc.remove_field("#main", "a").is_none());
        assert_eq!(doc.revision(), r + 2);
    }
}
