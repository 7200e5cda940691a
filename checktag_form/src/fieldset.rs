//! 内存里的复选框字段：页面上 `<fieldset name=...>` 的替身。
//!
//! change 通知不走回调，而是排进字段自己的队列，由宿主的事件循环取走再分发
//! （单线程、无重入）。

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use checktag_core::{
    control::{CheckedState, ControlGroup, HostField},
    model::ControlId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    /// 复选框的 value，同时也是展示文本
    pub value: String,
    pub checked: bool,
}

/// 一次会冒泡到表单的 change 通知。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub field: String,
    pub control: ControlId,
    pub value: String,
    pub checked: bool,
}

#[derive(Debug, Clone)]
pub struct Fieldset {
    name: String,
    label: String,
    boxes: Vec<Checkbox>,
    /// 原生控件是否显示（attach 成功后隐藏）
    visible: bool,
    pending: VecDeque<ChangeEvent>,
}

impl Fieldset {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            boxes: Vec::new(),
            visible: true,
            pending: VecDeque::new(),
        }
    }

    pub fn with_option(mut self, value: impl Into<String>, checked: bool) -> Self {
        self.boxes.push(Checkbox {
            value: value.into(),
            checked,
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn boxes(&self) -> &[Checkbox] {
        &self.boxes
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn checked_values(&self) -> Vec<&str> {
        self.boxes
            .iter()
            .filter(|b| b.checked)
            .map(|b| b.value.as_str())
            .collect()
    }

    /// 模拟用户直接点击原生复选框：翻转状态并发出 change。
    pub fn click(&mut self, index: usize) -> bool {
        let Some(b) = self.boxes.get_mut(index) else {
            return false;
        };
        b.checked = !b.checked;
        self.dispatch(index);
        true
    }

    /// 取走所有待分发的 change 通知（先进先出）。
    pub fn take_changes(&mut self) -> Vec<ChangeEvent> {
        self.pending.drain(..).collect()
    }

    fn dispatch(&mut self, index: usize) {
        let Some(b) = self.boxes.get(index) else {
            return;
        };
        self.pending.push_back(ChangeEvent {
            field: self.name.clone(),
            control: ControlId(index),
            value: b.value.clone(),
            checked: b.checked,
        });
    }
}

/// 文档与会话共享同一个字段：单线程下用 `Rc<RefCell<_>>`。
#[derive(Debug, Clone)]
pub struct SharedField(Rc<RefCell<Fieldset>>);

impl SharedField {
    pub fn new(fieldset: Fieldset) -> Self {
        Self(Rc::new(RefCell::new(fieldset)))
    }

    /// 只读访问底层字段。
    pub fn with<R>(&self, f: impl FnOnce(&Fieldset) -> R) -> R {
        f(&self.0.borrow())
    }

    /// 可写访问底层字段（外部代码绕过 widget 的写入走这里）。
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Fieldset) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    pub fn ptr_eq(&self, other: &SharedField) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl CheckedState for SharedField {
    fn is_checked(&self, control: ControlId) -> bool {
        self.0
            .borrow()
            .boxes
            .get(control.0)
            .is_some_and(|b| b.checked)
    }
}

impl ControlGroup for SharedField {
    fn set_checked(&mut self, control: ControlId, checked: bool) {
        if let Some(b) = self.0.borrow_mut().boxes.get_mut(control.0) {
            b.checked = checked;
        }
    }

    fn dispatch_change(&mut self, control: ControlId) {
        self.0.borrow_mut().dispatch(control.0);
    }
}

impl HostField for SharedField {
    fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    fn label(&self) -> String {
        self.0.borrow().label.clone()
    }

    fn controls(&self) -> Vec<(String, ControlId)> {
        self.0
            .borrow()
            .boxes
            .iter()
            .enumerate()
            .map(|(i, b)| (b.value.clone(), ControlId(i)))
            .collect()
    }

    fn set_native_visible(&mut self, visible: bool) {
        self.0.borrow_mut().visible = visible;
    }
}
