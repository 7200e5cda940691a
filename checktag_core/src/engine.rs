use crate::{
    candidate::CandidateSet,
    control::ControlGroup,
    matcher::{self, DEFAULT_LIMIT},
    mirror::SelectionMirror,
    model::{CandidateId, ChipPanel, ControlId, Suggestion},
};

/// 引擎：持有宿主控件、候选集与镜像层，把 query 和选中状态转成渲染结果。
///
/// 结构上对应：
/// - engine（编排） -> matcher（建议/最佳匹配） -> mirror（写回控件、渲染 chip）
pub struct Engine<G> {
    /// 宿主复选框组（选中状态的唯一来源）
    controls: G,
    /// attach 时派生的候选集，之后不再变化
    candidates: CandidateSet,
    mirror: SelectionMirror,
    /// 建议条数上限；0 视为未配置，回退到默认值
    max_suggestions: usize,
}

impl<G> Engine<G>
where
    G: ControlGroup,
{
    pub fn new(controls: G, candidates: CandidateSet) -> Self {
        Self {
            controls,
            candidates,
            mirror: SelectionMirror::new(),
            max_suggestions: DEFAULT_LIMIT,
        }
    }

    /// 设置建议条数上限；0 回退到默认的 10。
    pub fn max_suggestions(mut self, limit: usize) -> Self {
        self.max_suggestions = if limit == 0 { DEFAULT_LIMIT } else { limit };
        self
    }

    pub fn mirror(mut self, mirror: SelectionMirror) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn controls(&self) -> &G {
        &self.controls
    }

    /// 外部写入口：绕过 widget 直接改控件。改完后应把 change 通知
    /// 以 `InputEvent::ControlChanged` 的形式交回会话。
    pub fn controls_mut(&mut self) -> &mut G {
        &mut self.controls
    }

    pub fn suggestions(&self, query: &str) -> Vec<Suggestion> {
        matcher::suggestions(&self.candidates, &self.controls, query, self.max_suggestions)
    }

    pub fn best_match(&self, query: &str) -> Option<CandidateId> {
        matcher::best_match(&self.candidates, &self.controls, query)
    }

    pub fn last_selected(&self) -> Option<CandidateId> {
        self.candidates.last_selected(&self.controls)
    }

    /// 写回选中状态；返回是否真的发生了变化。未知候选视为无变化。
    pub fn set_selected(&mut self, id: CandidateId, state: bool) -> bool {
        let Some(candidate) = self.candidates.get(id) else {
            return false;
        };
        self.mirror.set_selected(&mut self.controls, candidate, state)
    }

    pub fn render_chips(&self) -> ChipPanel {
        self.mirror.render_chips(&self.candidates, &self.controls)
    }

    pub fn binds(&self, control: ControlId) -> bool {
        self.candidates.find_control(control).is_some()
    }
}

impl<G> crate::processor::EngineFacade for Engine<G>
where
    G: ControlGroup,
{
    fn suggestions(&self, query: &str) -> Vec<Suggestion> {
        Engine::<G>::suggestions(self, query)
    }

    fn best_match(&self, query: &str) -> Option<CandidateId> {
        Engine::<G>::best_match(self, query)
    }

    fn last_selected(&self) -> Option<CandidateId> {
        Engine::<G>::last_selected(self)
    }

    fn set_selected(&mut self, id: CandidateId, state: bool) -> bool {
        Engine::<G>::set_selected(self, id, state)
    }

    fn render_chips(&self) -> ChipPanel {
        Engine::<G>::render_chips(self)
    }

    fn binds(&self, control: ControlId) -> bool {
        Engine::<G>::binds(self, control)
    }
}
