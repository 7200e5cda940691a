//! `mirror`：选中状态的镜像层。
//!
//! 宿主控件是唯一的真相来源：
//! - 写：`set_selected` 把状态写回控件，再在控件上重发 change 通知
//! - 读：`render_chips` 每次都从控件现读，从头生成 chip 列表（不做增量 diff）

use crate::{
    candidate::CandidateSet,
    control::{CheckedState, ControlGroup},
    model::{Candidate, Chip, ChipPanel},
};

/// 没有任何选中时 chip 区域显示的占位文本。
pub const EMPTY_SELECTION: &str = "No selection";

#[derive(Debug, Clone)]
pub struct SelectionMirror {
    empty_label: String,
}

impl Default for SelectionMirror {
    fn default() -> Self {
        Self {
            empty_label: EMPTY_SELECTION.to_string(),
        }
    }
}

impl SelectionMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty_label(mut self, label: impl Into<String>) -> Self {
        self.empty_label = label.into();
        self
    }

    /// 把候选的选中状态写回宿主控件。
    ///
    /// 幂等：状态没变时既不写也不通知，返回 `false`。
    /// 真正发生变化时先写状态，再 dispatch change，返回 `true`。
    pub fn set_selected(
        &self,
        controls: &mut dyn ControlGroup,
        candidate: &Candidate,
        state: bool,
    ) -> bool {
        if controls.is_checked(candidate.control) == state {
            return false;
        }
        controls.set_checked(candidate.control, state);
        controls.dispatch_change(candidate.control);
        log::debug!(
            "control {} ({:?}) -> {}",
            candidate.control.0,
            candidate.label,
            if state { "checked" } else { "unchecked" }
        );
        true
    }

    /// 从控件现读选中子集并渲染 chip 区域。
    pub fn render_chips(&self, candidates: &CandidateSet, state: &dyn CheckedState) -> ChipPanel {
        let chips: Vec<Chip> = candidates
            .selected(state)
            .map(|(id, c)| Chip {
                candidate: id,
                label: c.label.clone(),
            })
            .collect();
        if chips.is_empty() {
            ChipPanel::Empty {
                placeholder: self.empty_label.clone(),
            }
        } else {
            ChipPanel::Chips(chips)
        }
    }
}
