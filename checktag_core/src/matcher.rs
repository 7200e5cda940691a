//! `matcher`：query -> 建议列表 / 最佳匹配。
//!
//! 两个操作都只依赖 (候选集, 当前选中状态, query)，不修改任何东西：
//! - `suggestions`：未选中且 key 包含 query key 的候选，保持候选顺序，截断到 limit
//! - `best_match`：Enter 要确认的那一个，按 精确 -> 前缀 -> 包含 分档取第一个

use crate::{
    candidate::CandidateSet,
    control::CheckedState,
    model::{CandidateId, Suggestion},
    normalize::normalize,
};

/// 建议数量默认上限。
pub const DEFAULT_LIMIT: usize = 10;

/// 匹配档位，越靠前越优先。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Exact,
    Prefix,
    Contains,
}

impl MatchTier {
    /// 判断 `key` 对 `query` 落在哪一档；`query` 必须已经 normalize 过。
    pub fn classify(key: &str, query: &str) -> Option<Self> {
        if key == query {
            Some(MatchTier::Exact)
        } else if key.starts_with(query) {
            Some(MatchTier::Prefix)
        } else if key.contains(query) {
            Some(MatchTier::Contains)
        } else {
            None
        }
    }
}

/// 建议列表。query 规整后为空时直接返回空（没有“浏览全部”模式）。
pub fn suggestions(
    candidates: &CandidateSet,
    state: &dyn CheckedState,
    query: &str,
    limit: usize,
) -> Vec<Suggestion> {
    let q = normalize(query);
    if q.is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .filter(|(_, c)| !state.is_checked(c.control) && c.key.contains(q.as_str()))
        .take(limit)
        .map(|(id, c)| Suggestion {
            candidate: id,
            label: c.label.clone(),
        })
        .collect()
}

/// 最佳匹配：先比档位，同档取候选顺序靠前者。
pub fn best_match(
    candidates: &CandidateSet,
    state: &dyn CheckedState,
    query: &str,
) -> Option<CandidateId> {
    let q = normalize(query);
    if q.is_empty() {
        return None;
    }
    let mut best: Option<(MatchTier, CandidateId)> = None;
    for (id, c) in candidates.iter() {
        if state.is_checked(c.control) {
            continue;
        }
        let Some(tier) = MatchTier::classify(&c.key, &q) else {
            continue;
        };
        if tier == MatchTier::Exact {
            return Some(id);
        }
        if best.is_none_or(|(t, _)| tier < t) {
            best = Some((tier, id));
        }
    }
    best.map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ControlId;

    struct Checks(Vec<bool>);

    impl CheckedState for Checks {
        fn is_checked(&self, control: ControlId) -> bool {
            self.0.get(control.0).copied().unwrap_or(false)
        }
    }

    fn fixture(labels: &[&str]) -> (CandidateSet, Checks) {
        let set = CandidateSet::build(
            labels
                .iter()
                .enumerate()
                .map(|(i, l)| (*l, ControlId(i))),
        )
        .unwrap();
        (set, Checks(vec![false; labels.len()]))
    }

    fn labels(set: &CandidateSet, rows: &[Suggestion]) -> Vec<String> {
        rows.iter()
            .map(|r| set.get(r.candidate).unwrap().label.clone())
            .collect()
    }

    #[test]
    fn empty_and_blank_queries_suggest_nothing() {
        let (set, checks) = fixture(&["Red", "Green"]);
        assert!(suggestions(&set, &checks, "", 10).is_empty());
        assert!(suggestions(&set, &checks, "   ", 10).is_empty());
        assert_eq!(best_match(&set, &checks, " \t"), None);
    }

    #[test]
    fn suggestions_keep_candidate_order_and_skip_selected() {
        let (set, mut checks) = fixture(&["Red", "Green", "Bored", "Reed"]);
        let rows = suggestions(&set, &checks, "re", 10);
        assert_eq!(labels(&set, &rows), ["Red", "Green", "Bored", "Reed"]);

        checks.0[0] = true;
        let rows = suggestions(&set, &checks, "RE", 10);
        assert_eq!(labels(&set, &rows), ["Green", "Bored", "Reed"]);
    }

    #[test]
    fn suggestions_respect_limit() {
        let names: Vec<String> = (0..25).map(|i| format!("item {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (set, checks) = fixture(&refs);
        for limit in [0, 1, 3, 10, 40] {
            assert!(suggestions(&set, &checks, "item", limit).len() <= limit);
        }
        assert_eq!(suggestions(&set, &checks, "item", DEFAULT_LIMIT).len(), 10);
    }

    #[test]
    fn suggestions_match_without_diacritics() {
        let (set, checks) = fixture(&["Crème brûlée", "Flan"]);
        let rows = suggestions(&set, &checks, "creme", 10);
        assert_eq!(labels(&set, &rows), ["Crème brûlée"]);
    }

    #[test]
    fn exact_beats_earlier_substring() {
        let (set, checks) = fixture(&["Pineapple", "Apple"]);
        assert_eq!(best_match(&set, &checks, "apple"), Some(CandidateId(1)));
    }

    #[test]
    fn prefix_beats_earlier_substring() {
        let (set, checks) = fixture(&["Pineapple", "Applesauce", "Apple pie"]);
        assert_eq!(best_match(&set, &checks, "apple"), Some(CandidateId(1)));
    }

    #[test]
    fn substring_is_the_last_resort() {
        let (set, checks) = fixture(&["Pineapple", "Grape"]);
        assert_eq!(best_match(&set, &checks, "APPLE"), Some(CandidateId(0)));
        assert_eq!(best_match(&set, &checks, "kiwi"), None);
    }

    #[test]
    fn selected_candidates_never_match() {
        let (set, mut checks) = fixture(&["Apple", "Pineapple"]);
        checks.0[0] = true;
        assert_eq!(best_match(&set, &checks, "apple"), Some(CandidateId(1)));
        checks.0[1] = true;
        assert_eq!(best_match(&set, &checks, "apple"), None);
    }

    #[test]
    fn classify_tiers() {
        assert_eq!(MatchTier::classify("apple", "apple"), Some(MatchTier::Exact));
        assert_eq!(MatchTier::classify("apple", "app"), Some(MatchTier::Prefix));
        assert_eq!(MatchTier::classify("apple", "ppl"), Some(MatchTier::Contains));
        assert_eq!(MatchTier::classify("apple", "pear"), None);
    }
}
