//! `FieldWatcher`：字段检测协作方。
//!
//! 页面可能晚于脚本渲染出目标字段。宿主每次修改文档后调用 `poll`：
//! 第一次在 scope 内找到目标字段时交出字段并断开，之后永远不再交出，
//! 哪怕字段被移除后又重新出现。

use checktag_core::{
    attach::{attach, report},
    config::WidgetConfig,
    error::AttachError,
    session::Session,
};

use crate::{document::Document, fieldset::SharedField};

#[derive(Debug)]
pub struct FieldWatcher {
    scope: Option<String>,
    field_name: String,
    connected: bool,
}

impl FieldWatcher {
    /// 校验配置并开始观察；配置错误与找不到 scope 都在这里上报一次。
    pub fn new(config: &WidgetConfig, doc: &Document) -> Result<Self, AttachError> {
        if let Err(e) = Self::check(config, doc) {
            report(&e);
            return Err(e);
        }
        Ok(Self {
            scope: config.scope().map(str::to_string),
            field_name: config.field_name.trim().to_string(),
            connected: true,
        })
    }

    fn check(config: &WidgetConfig, doc: &Document) -> Result<(), AttachError> {
        config.validate()?;
        if let Some(selector) = config.scope() {
            if !doc.has_scope(selector) {
                return Err(AttachError::ScopeNotFound(selector.to_string()));
            }
        }
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// 文档变化后调用。最多返回一次 `Some`。
    pub fn poll(&mut self, doc: &Document) -> Option<SharedField> {
        if !self.connected {
            return None;
        }
        let field = doc.find_field(self.scope.as_deref(), &self.field_name)?;
        self.connected = false;
        log::debug!(
            "field {} found at revision {}, watcher disconnected",
            self.field_name,
            doc.revision()
        );
        Some(field)
    }

    /// `poll` + `attach`：找到字段就立刻挂上增强。
    ///
    /// attach 被拒绝时原因已经上报过，这里只返回 `None`，字段保持原样。
    pub fn poll_attach(
        &mut self,
        config: &WidgetConfig,
        doc: &Document,
    ) -> Option<Session<SharedField>> {
        let field = self.poll(doc)?;
        attach(config, field).ok()
    }
}
