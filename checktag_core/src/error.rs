use thiserror::Error;

/// 配置本身有问题：上报一次，不 attach，原生控件保持可用。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("field_name is required")]
    MissingFieldName,

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// attach 被拒绝的原因。
///
/// 只有“attach / 不 attach”两种结局；一旦 attach 成功，后续操作都不会失败。
#[derive(Debug, Error)]
pub enum AttachError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("scope selector not found: {0}")]
    ScopeNotFound(String),

    #[error("field not found: {0}")]
    FieldNotFound(String),

    #[error("field {0} has no controls")]
    NoControls(String),
}

impl AttachError {
    /// 配置类错误需要上报；结构缺失类（字段为空）静默放弃。
    pub fn is_config(&self) -> bool {
        matches!(self, AttachError::Config(_) | AttachError::ScopeNotFound(_))
    }
}
