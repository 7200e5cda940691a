use crate::model::ControlId;

/// 指针按下的位置（由宿主做命中测试后给出）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// 建议面板中的第 n 行（对应当前可见列表）
    Suggestion(usize),
    /// chip 区域中的第 n 个 chip
    Chip(usize),
    /// 输入框本身
    Input,
    /// widget 渲染区域内的其它位置
    Widget,
    /// widget 渲染区域之外
    Outside,
}

/// 输入事件（逻辑事件）。
///
/// 说明：
/// - `Session`/processor 只关心“语义事件”，不关心具体平台的事件对象。
/// - 宿主层负责把 DOM/终端事件转换成这些事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// 输入框内容变为给定文本
    Input(String),
    /// 回车：确认最佳匹配
    Enter,
    /// 退格（在文本变化之前送达）
    Backspace,
    /// 收起建议面板
    Escape,
    PointerDown(PointerTarget),
    /// 输入框失去焦点
    Blur,
    /// 某个宿主控件发出了 change 通知（来源不限，包括外部写入）
    ControlChanged(ControlId),
}

/// 会话输出动作（对宿主的“副作用”请求）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 阻止该事件的默认行为（回车不提交表单；点建议行不让输入框失焦）
    PreventDefault,
}
