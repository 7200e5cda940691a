//! `processor`：输入事件处理链。
//!
//! 按顺序处理 `InputEvent`，对 `Context` 做状态变更，并可产生 `Action`
//! （例如 PreventDefault）。
//!
//! 当前链路（`Session::new` 默认组装）：
//! - `EditingProcessor`：输入变化刷新建议；空输入时退格删掉最后一个 chip
//! - `ConfirmProcessor`：回车 / 点建议行，确认候选
//! - `ChipProcessor`：点 chip，移除该选择
//! - `PanelProcessor`：Esc、点外部、失焦，收起面板
//! - `MirrorProcessor`：控件 change 通知，重绘 chip

use crate::{
    context::Context,
    key_event::{Action, InputEvent, PointerTarget},
    model::{CandidateId, ChipPanel, ControlId, Suggestion},
};

/// 给 processors 的对象安全引擎接口（避免在 processors 层引入泛型爆炸）。
pub trait EngineFacade {
    /// 建议列表（已按上限截断）
    fn suggestions(&self, query: &str) -> Vec<Suggestion>;
    /// 回车确认的最佳匹配
    fn best_match(&self, query: &str) -> Option<CandidateId>;
    /// 候选顺序中最后一个已选项
    fn last_selected(&self) -> Option<CandidateId>;
    /// 写回控件；返回是否真的发生变化
    fn set_selected(&mut self, id: CandidateId, state: bool) -> bool;
    /// 从控件现读并渲染 chip 区域
    fn render_chips(&self) -> ChipPanel;
    /// 该控件是否绑定在某个候选上
    fn binds(&self, control: ControlId) -> bool;
}

/// Processor 执行结果：是否“消费”了本次事件。
///
/// - `Consume`：本 processor 已处理该事件，后续 processor 不再执行
/// - `Continue`：本 processor 不处理该事件，交给下一个 processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Consume,
    Continue,
}

/// Processor：处理输入事件并改变 Context；必要时产生输出动作。
pub trait Processor {
    fn process(
        &mut self,
        engine: &mut dyn EngineFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>);
}

/// 编辑输入的 processor（输入变化 / 退格）。
pub struct EditingProcessor;

impl Processor for EditingProcessor {
    fn process(
        &mut self,
        engine: &mut dyn EngineFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match input_event {
            InputEvent::Input(value) => {
                context.query.clone_from(value);
                context.refresh_suggestions(engine);
                (ProcessStatus::Consume, Vec::new())
            }
            // 退格在文本变化之前送达：只有输入框本来就空时才删 chip，
            // 否则交给随后到来的 Input 事件处理。
            InputEvent::Backspace => {
                if context.query.is_empty() {
                    if let Some(last) = engine.last_selected() {
                        context.deselect(engine, last);
                    }
                }
                (ProcessStatus::Consume, Vec::new())
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

pub struct ConfirmProcessor;

impl Processor for ConfirmProcessor {
    fn process(
        &mut self,
        engine: &mut dyn EngineFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            // 回车永远阻止表单提交；没有匹配时其余状态不变。
            InputEvent::Enter => {
                if let Some(found) = engine.best_match(&context.query) {
                    context.confirm(engine, found);
                }
                (ProcessStatus::Consume, vec![Action::PreventDefault])
            }
            // 在 pointer-down 阶段就完成选择，并阻止默认行为让输入框保留焦点，
            // 这样随后可能到来的 blur 不会吞掉这次点击。
            InputEvent::PointerDown(PointerTarget::Suggestion(row)) => {
                if let Some(found) = context.suggestion_at(row) {
                    context.confirm(engine, found);
                }
                (ProcessStatus::Consume, vec![Action::PreventDefault])
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

pub struct ChipProcessor;

impl Processor for ChipProcessor {
    fn process(
        &mut self,
        engine: &mut dyn EngineFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::PointerDown(PointerTarget::Chip(index)) => {
                if let Some(found) = context.chip_at(index) {
                    context.deselect(engine, found);
                }
                (ProcessStatus::Consume, Vec::new())
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

pub struct PanelProcessor;

impl Processor for PanelProcessor {
    fn process(
        &mut self,
        _engine: &mut dyn EngineFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::Escape
            | InputEvent::Blur
            | InputEvent::PointerDown(PointerTarget::Outside) => {
                context.hide_suggestions();
                (ProcessStatus::Consume, Vec::new())
            }
            // 点在 widget 内部：面板保持原状
            InputEvent::PointerDown(PointerTarget::Input | PointerTarget::Widget) => {
                (ProcessStatus::Consume, Vec::new())
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

pub struct MirrorProcessor;

impl Processor for MirrorProcessor {
    fn process(
        &mut self,
        engine: &mut dyn EngineFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::ControlChanged(control) => {
                if engine.binds(control) {
                    context.render_chips(engine);
                }
                (ProcessStatus::Consume, Vec::new())
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Chip, SuggestionPanel};

    /// 只记录调用的假引擎：候选按下标对应 `labels`，选中状态存在 `checked`。
    struct FakeEngine {
        labels: Vec<&'static str>,
        checked: Vec<bool>,
        writes: usize,
    }

    impl FakeEngine {
        fn new(labels: &[&'static str]) -> Self {
            Self {
                labels: labels.to_vec(),
                checked: vec![false; labels.len()],
                writes: 0,
            }
        }
    }

    impl EngineFacade for FakeEngine {
        fn suggestions(&self, query: &str) -> Vec<Suggestion> {
            let q = query.trim().to_lowercase();
            if q.is_empty() {
                return Vec::new();
            }
            self.labels
                .iter()
                .enumerate()
                .filter(|(i, l)| !self.checked[*i] && l.to_lowercase().contains(&q))
                .map(|(i, l)| Suggestion {
                    candidate: CandidateId(i),
                    label: l.to_string(),
                })
                .collect()
        }

        fn best_match(&self, query: &str) -> Option<CandidateId> {
            self.suggestions(query).first().map(|s| s.candidate)
        }

        fn last_selected(&self) -> Option<CandidateId> {
            self.checked.iter().rposition(|c| *c).map(CandidateId)
        }

        fn set_selected(&mut self, id: CandidateId, state: bool) -> bool {
            if self.checked[id.0] == state {
                return false;
            }
            self.checked[id.0] = state;
            self.writes += 1;
            true
        }

        fn render_chips(&self) -> ChipPanel {
            let chips: Vec<Chip> = self
                .checked
                .iter()
                .enumerate()
                .filter(|(_, c)| **c)
                .map(|(i, _)| Chip {
                    candidate: CandidateId(i),
                    label: self.labels[i].to_string(),
                })
                .collect();
            if chips.is_empty() {
                ChipPanel::Empty {
                    placeholder: "-".to_string(),
                }
            } else {
                ChipPanel::Chips(chips)
            }
        }

        fn binds(&self, control: ControlId) -> bool {
            control.0 < self.labels.len()
        }
    }

    #[test]
    fn editing_only_deletes_on_empty_query() {
        let mut engine = FakeEngine::new(&["Red", "Green"]);
        engine.checked = vec![true, true];
        let mut ctx = Context::new(&engine);
        ctx.query = "gr".to_string();

        let (status, _) = EditingProcessor.process(&mut engine, &mut ctx, &InputEvent::Backspace);
        assert_eq!(status, ProcessStatus::Consume);
        assert_eq!(engine.writes, 0);

        ctx.query.clear();
        EditingProcessor.process(&mut engine, &mut ctx, &InputEvent::Backspace);
        assert_eq!(engine.checked, [true, false]);
        assert_eq!(ctx.chips.labels(), ["Red"]);
    }

    #[test]
    fn enter_prevents_default_even_without_match() {
        let mut engine = FakeEngine::new(&["Red"]);
        let mut ctx = Context::new(&engine);
        ctx.query = "xyz".to_string();

        let (status, actions) = ConfirmProcessor.process(&mut engine, &mut ctx, &InputEvent::Enter);
        assert_eq!(status, ProcessStatus::Consume);
        assert_eq!(actions, [Action::PreventDefault]);
        assert_eq!(ctx.query, "xyz");
        assert_eq!(engine.writes, 0);
    }

    #[test]
    fn suggestion_row_out_of_range_is_ignored() {
        let mut engine = FakeEngine::new(&["Red"]);
        let mut ctx = Context::new(&engine);
        ConfirmProcessor.process(
            &mut engine,
            &mut ctx,
            &InputEvent::PointerDown(PointerTarget::Suggestion(3)),
        );
        assert_eq!(engine.writes, 0);
    }

    #[test]
    fn panel_events_hide_and_inside_clicks_keep() {
        let mut engine = FakeEngine::new(&["Red", "Reed"]);
        let mut ctx = Context::new(&engine);
        ctx.query = "re".to_string();
        ctx.refresh_suggestions(&engine);
        assert!(ctx.suggestions.is_visible());

        PanelProcessor.process(
            &mut engine,
            &mut ctx,
            &InputEvent::PointerDown(PointerTarget::Widget),
        );
        assert!(ctx.suggestions.is_visible());

        PanelProcessor.process(&mut engine, &mut ctx, &InputEvent::Escape);
        assert_eq!(ctx.suggestions, SuggestionPanel::Hidden);
    }

    #[test]
    fn foreign_controls_do_not_rerender() {
        let mut engine = FakeEngine::new(&["Red"]);
        let mut ctx = Context::new(&engine);
        engine.checked[0] = true;

        MirrorProcessor.process(&mut engine, &mut ctx, &InputEvent::ControlChanged(ControlId(7)));
        assert!(ctx.chips.is_empty());

        MirrorProcessor.process(&mut engine, &mut ctx, &InputEvent::ControlChanged(ControlId(0)));
        assert_eq!(ctx.chips.labels(), ["Red"]);
    }
}
