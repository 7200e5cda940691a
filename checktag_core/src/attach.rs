//! `attach`：把增强挂到宿主字段上的唯一入口。
//!
//! 由外部的“字段检测”协作方最多调用一次。任何失败都只会导致“不 attach”：
//! 原生复选框保持可见、可用。

use crate::{
    candidate::CandidateSet,
    config::{HINT, WidgetConfig},
    control::HostField,
    engine::Engine,
    error::AttachError,
    session::{Session, WidgetText},
};

/// attach 到宿主字段，成功时隐藏原生控件并返回会话。
pub fn attach<H>(config: &WidgetConfig, mut host: H) -> Result<Session<H>, AttachError>
where
    H: HostField,
{
    let checked = check(config, &host);
    let candidates = match checked {
        Ok(c) => c,
        Err(e) => {
            report(&e);
            return Err(e);
        }
    };

    let name = host.name();
    let text = WidgetText {
        placeholder: config.placeholder().to_string(),
        aria_label: host.label().trim().to_string(),
        hint: HINT.to_string(),
    };
    host.set_native_visible(false);
    log::info!("attached to field {} ({} options)", name, candidates.len());

    let engine = Engine::new(host, candidates).max_suggestions(config.limit());
    Ok(Session::new(engine, text))
}

fn check<H>(config: &WidgetConfig, host: &H) -> Result<CandidateSet, AttachError>
where
    H: HostField,
{
    config.validate()?;
    let name = host.name();
    if name != config.field_name.trim() {
        return Err(AttachError::FieldNotFound(config.field_name.clone()));
    }
    CandidateSet::build(host.controls()).ok_or(AttachError::NoControls(name))
}

/// 诊断通道：配置错误报 error，结构缺失只留 debug 记录。
pub fn report(err: &AttachError) {
    if err.is_config() {
        log::error!("checktag: {err}");
    } else {
        log::debug!("checktag: not attaching: {err}");
    }
}
