//! `checktag_core`：纯逻辑层，不做任何 I/O。
//!
//! 给一个现成的复选框组加上“输入联想 + 标签（chip）”的交互，
//! 但选中状态始终以宿主控件为准：
//! - **不持有真相**：chip 与建议列表都是（控件状态, query）的投影，每次从头计算
//! - **分层清晰**：normalize -> candidate -> matcher -> mirror -> processor/session -> 输出（`UiState`）
//! - **宿主无关**：DOM、内存表单、终端都通过 `control` 里的 trait 接入
pub mod attach;
pub mod candidate;
pub mod config;
pub mod context;
pub mod control;
pub mod engine;
pub mod error;
pub mod key_event;
pub mod matcher;
pub mod mirror;
pub mod model;
pub mod normalize;
pub mod processor;
pub mod session;
