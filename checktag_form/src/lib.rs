//! `checktag_form`：内存中的宿主文档，给 core 提供 `HostField` 实现。
//!
//! - `fieldset`：复选框字段 + change 通知队列
//! - `document`：按 scope 组织的字段块
//! - `watcher`：最多触发一次的字段检测
//! - `loader`：从 TOML 描述建出文档
pub mod document;
pub mod error;
pub mod fieldset;
pub mod loader;
pub mod watcher;
