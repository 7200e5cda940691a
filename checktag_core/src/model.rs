/// 宿主控件标识：控件在所属 fieldset 里的位置。
///
/// core 不持有控件本身，只通过 [`crate::control::ControlGroup`] 按 id 读写。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub usize);

/// 候选在 `CandidateSet` 中的下标（即 attach 时控件的顺序）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(pub usize);

/// 候选项（可被建议列表展示、被选中成 chip）。
///
/// 注意：这里**没有** `selected` 字段。选中状态永远从绑定控件现读，
/// 不在 core 里缓存一份，避免和外部写入产生分歧。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// 展示文本（控件的 value）
    pub label: String,
    /// 比较 key：`normalize(label)`，attach 时计算一次
    pub key: String,
    /// 绑定的宿主控件
    pub control: ControlId,
}

/// 一个已选中候选的渲染结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub candidate: CandidateId,
    pub label: String,
}

/// chip 区域：要么是占位提示，要么是完整的 chip 列表（每次从头渲染）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipPanel {
    Empty { placeholder: String },
    Chips(Vec<Chip>),
}

impl ChipPanel {
    pub fn chips(&self) -> &[Chip] {
        match self {
            ChipPanel::Empty { .. } => &[],
            ChipPanel::Chips(chips) => chips,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.chips().iter().map(|c| c.label.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ChipPanel::Empty { .. })
    }
}

/// 建议列表中的一行。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub candidate: CandidateId,
    pub label: String,
}

/// 建议面板状态机：`Hidden` / `Visible(list)`。
///
/// `Visible` 永远带非空列表；空结果一律落到 `Hidden`。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuggestionPanel {
    #[default]
    Hidden,
    Visible(Vec<Suggestion>),
}

impl SuggestionPanel {
    pub fn from_rows(rows: Vec<Suggestion>) -> Self {
        if rows.is_empty() {
            SuggestionPanel::Hidden
        } else {
            SuggestionPanel::Visible(rows)
        }
    }

    pub fn rows(&self) -> &[Suggestion] {
        match self {
            SuggestionPanel::Hidden => &[],
            SuggestionPanel::Visible(rows) => rows,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows().iter().map(|s| s.label.as_str()).collect()
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, SuggestionPanel::Visible(_))
    }
}

/// 会话给宿主的“快照视图”。
///
/// 设计目标：
/// - 宿主只读 `UiState`，不直接读写 `Context`
/// - 便于 CLI 输出与测试断言
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// 输入框当前文本（确认选择后被清空）
    pub input_value: String,
    /// 输入框占位文本
    pub placeholder: String,
    /// 输入框的无障碍标签（取自宿主字段的 label）
    pub aria_label: String,
    /// 输入框下方的操作提示
    pub hint: String,
    pub chips: ChipPanel,
    pub suggestions: SuggestionPanel,
}
