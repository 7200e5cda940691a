//! `Session`：对宿主（CLI/GUI/页面胶水）提供的会话对象。
//!
//! `Session` 自身不做业务逻辑判断，而是：
//! - 持有 `Context`（状态）
//! - 持有 processors 链（可插拔）
//! - 把每次 `InputEvent` 依次交给 processors，直到被消费
//! - 最后输出 `UiState` + `Action`

use crate::{
    context::Context,
    control::ControlGroup,
    engine::Engine,
    key_event::{Action, InputEvent},
    model::UiState,
    processor::{
        ChipProcessor, ConfirmProcessor, EditingProcessor, MirrorProcessor, PanelProcessor,
        ProcessStatus, Processor,
    },
};

/// 输入框上方/下方的固定文案。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetText {
    pub placeholder: String,
    pub aria_label: String,
    pub hint: String,
}

/// 一次 attach 的会话（建议面板状态机的容器）。
pub struct Session<G> {
    /// 引擎（包含宿主控件、候选集、matcher/mirror 编排）
    engine: Engine<G>,
    /// 会话上下文（processors 共享）
    ctx: Context,
    /// processors 链（可配置/可扩展）
    processors: Vec<Box<dyn Processor>>,
    text: WidgetText,
}

impl<G> Session<G>
where
    G: ControlGroup,
{
    /// 创建会话，组装默认 processors 链，并先渲染一次 chip。
    pub fn new(engine: Engine<G>, text: WidgetText) -> Self {
        let ctx = Context::new(&engine);
        Self {
            engine,
            ctx,
            processors: vec![
                Box::new(EditingProcessor),
                Box::new(ConfirmProcessor),
                Box::new(ChipProcessor),
                Box::new(PanelProcessor),
                Box::new(MirrorProcessor),
            ],
            text,
        }
    }

    pub fn engine(&self) -> &Engine<G> {
        &self.engine
    }

    /// 外部写入口，见 [`Engine::controls_mut`]。
    pub fn controls_mut(&mut self) -> &mut G {
        self.engine.controls_mut()
    }

    /// 获取当前 UI 快照（只读）。
    pub fn ui_state(&self) -> UiState {
        UiState {
            input_value: self.ctx.query.clone(),
            placeholder: self.text.placeholder.clone(),
            aria_label: self.text.aria_label.clone(),
            hint: self.text.hint.clone(),
            chips: self.ctx.chips.clone(),
            suggestions: self.ctx.suggestions.clone(),
        }
    }

    /// 处理一个输入事件，返回最新 UI 快照与动作列表。
    pub fn handle(&mut self, ev: InputEvent) -> (UiState, Vec<Action>) {
        let mut actions = Vec::new();
        for p in &mut self.processors {
            let (status, mut a) = p.process(&mut self.engine, &mut self.ctx, &ev);
            actions.append(&mut a);
            if status == ProcessStatus::Consume {
                break;
            }
        }
        log::trace!("{ev:?} -> {:?}", self.ctx.suggestions);
        (self.ui_state(), actions)
    }
}
