use crate::model::ControlId;

/// 只读的选中状态：core 判断“候选是否已选”时唯一的来源。
///
/// 匹配与渲染都通过它现读，从不缓存。
pub trait CheckedState {
    fn is_checked(&self, control: ControlId) -> bool;
}

/// 宿主的复选框组抽象：core 不关心控件来自 DOM、内存还是别的 UI。
///
/// 约定：
/// - `set_checked` 只写状态，不发通知
/// - `dispatch_change` 在该控件上发出一次会冒泡的 “change” 通知，
///   走的是宿主其它逻辑本来就在监听的那个通道
/// - 外部代码可以绕过 core 直接写控件；core 只依赖 change 通知得知此事
pub trait ControlGroup: CheckedState {
    fn set_checked(&mut self, control: ControlId, checked: bool);

    fn dispatch_change(&mut self, control: ControlId);
}

/// attach 时拿到的宿主字段：一个按名字寻址的复选框组 + 一段可读 label。
pub trait HostField: ControlGroup {
    /// 字段名（fieldset 与各复选框的 `name`）
    fn name(&self) -> String;

    /// 字段的可读 label，用作输入框的无障碍标签
    fn label(&self) -> String;

    /// 当前控件序列：`(label, control)`，顺序即文档顺序
    fn controls(&self) -> Vec<(String, ControlId)>;

    /// attach 成功后隐藏原生复选框；拒绝 attach 时不调用
    fn set_native_visible(&mut self, visible: bool);
}
