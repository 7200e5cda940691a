//! `candidate`：attach 时从宿主控件派生出的候选集合。
//!
//! 构造后不可变：不增删、不重建，顺序即控件在文档中的顺序。

use std::collections::HashSet;

use crate::{
    control::CheckedState,
    model::{Candidate, CandidateId, ControlId},
    normalize::normalize,
};

#[derive(Debug, Clone)]
pub struct CandidateSet {
    items: Vec<Candidate>,
}

impl CandidateSet {
    /// 从 `(label, control)` 序列构造候选集。
    ///
    /// 空输入返回 `None`：调用方应当放弃 attach、保留原生控件，而不是报错。
    /// 同一个控件出现多次时只保留第一次（每个候选必须独占一个控件）。
    pub fn build<I, S>(controls: I) -> Option<Self>
    where
        I: IntoIterator<Item = (S, ControlId)>,
        S: Into<String>,
    {
        let mut seen: HashSet<ControlId> = HashSet::new();
        let mut items = Vec::new();
        for (label, control) in controls {
            if !seen.insert(control) {
                log::warn!("control {} listed twice, keeping the first", control.0);
                continue;
            }
            let label: String = label.into();
            let key = normalize(&label);
            items.push(Candidate {
                label,
                key,
                control,
            });
        }
        if items.is_empty() {
            return None;
        }
        Some(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.items.get(id.0)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (CandidateId, &Candidate)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, c)| (CandidateId(i), c))
    }

    pub fn find_control(&self, control: ControlId) -> Option<CandidateId> {
        self.iter()
            .find(|(_, c)| c.control == control)
            .map(|(id, _)| id)
    }

    /// 当前选中的子集（按候选顺序），每次调用都现读控件。
    pub fn selected<'a>(
        &'a self,
        state: &'a dyn CheckedState,
    ) -> impl Iterator<Item = (CandidateId, &'a Candidate)> + 'a {
        self.iter().filter(move |(_, c)| state.is_checked(c.control))
    }

    /// 候选顺序里最靠后的已选项（Backspace 删除的对象）。
    ///
    /// 没有记录选择的先后，所以这里看的是候选顺序而不是“最近选中”。
    pub fn last_selected(&self, state: &dyn CheckedState) -> Option<CandidateId> {
        self.iter()
            .rev()
            .find(|(_, c)| state.is_checked(c.control))
            .map(|(id, _)| id)
    }
}
