//! `Context`：processor 链共享的唯一状态容器。
//!
//! 约定：
//! - `query`：输入框当前文本（确认选择后清空）
//! - `suggestions`：建议面板状态机（`Hidden` / `Visible`）
//! - `chips`：最近一次渲染出的 chip 区域，只能由 `render_chips` 整体替换
use crate::{
    model::{CandidateId, ChipPanel, SuggestionPanel},
    processor::EngineFacade,
};

/// 输入会话上下文：processor 链共享的唯一状态。
#[derive(Debug, Clone)]
pub struct Context {
    pub query: String,
    pub suggestions: SuggestionPanel,
    pub chips: ChipPanel,
}

impl Context {
    /// 以一次完整的 chip 渲染开始（页面可能已经预先勾选了部分控件）。
    pub fn new(engine: &dyn EngineFacade) -> Self {
        Self {
            query: String::new(),
            suggestions: SuggestionPanel::Hidden,
            chips: engine.render_chips(),
        }
    }

    /// 按当前 query 重新计算建议；结果为空时面板收起。
    pub fn refresh_suggestions(&mut self, engine: &dyn EngineFacade) {
        self.suggestions = SuggestionPanel::from_rows(engine.suggestions(&self.query));
    }

    pub fn hide_suggestions(&mut self) {
        self.suggestions = SuggestionPanel::Hidden;
    }

    /// 从控件现读，整体替换 chip 区域。
    pub fn render_chips(&mut self, engine: &dyn EngineFacade) {
        self.chips = engine.render_chips();
    }

    /// 确认一个候选：选中、清空输入、收起面板、重绘 chip。
    pub fn confirm(&mut self, engine: &mut dyn EngineFacade, candidate: CandidateId) {
        engine.set_selected(candidate, true);
        self.query.clear();
        self.hide_suggestions();
        self.render_chips(engine);
    }

    /// 取消选中一个候选并重绘 chip；面板与输入保持不变。
    pub fn deselect(&mut self, engine: &mut dyn EngineFacade, candidate: CandidateId) {
        engine.set_selected(candidate, false);
        self.render_chips(engine);
    }

    /// 当前可见建议列表中第 `row` 行对应的候选。
    pub fn suggestion_at(&self, row: usize) -> Option<CandidateId> {
        self.suggestions.rows().get(row).map(|s| s.candidate)
    }

    /// 最近一次渲染中第 `index` 个 chip 对应的候选。
    pub fn chip_at(&self, index: usize) -> Option<CandidateId> {
        self.chips.chips().get(index).map(|c| c.candidate)
    }
}
