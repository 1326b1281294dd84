use crate::category::Category;

/// 单个 emoji 条目。
///
/// 注意：`raw` 永不为空；`description` 预留给关键字搜索，loader 目前不会填充。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiEntry {
    /// emoji 的 UTF-8 原文（上屏文本）
    raw: String,
    /// 标签/关键字（可选）
    pub description: Option<String>,
}

impl EmojiEntry {
    /// 空串返回 `None`，避免渲染出空白格子。
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw,
            description: None,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// 网格中的位置：[section, item]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPosition {
    pub section: usize,
    pub item: usize,
}

impl GridPosition {
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// 一个 section 的只读视图。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub category: Category,
    /// section 标题（即分类标题）
    pub title: &'static str,
    pub items: Vec<String>,
}

/// 网格给 UI 的“快照视图”。
///
/// 设计目标：
/// - UI 层只读 `GridState`，不直接读写 `Context`
/// - 便于 GUI/CLI 输出与调试
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    /// 按 `Category::ALL` 顺序排列的全部 section（包括空 section）
    pub sections: Vec<SectionView>,
    /// 当前光标；没有任何 emoji 时为 None
    pub cursor: Option<GridPosition>,
}

impl GridState {
    /// 光标下的 emoji。
    pub fn current(&self) -> Option<&str> {
        let pos = self.cursor?;
        self.sections
            .get(pos.section)?
            .items
            .get(pos.item)
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.items.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_rejects_empty_raw() {
        assert!(EmojiEntry::new("").is_none());
        let e = EmojiEntry::new("😀").unwrap();
        assert_eq!(e.raw(), "😀");
        assert_eq!(e.description, None);
    }

    #[test]
    fn current_follows_cursor() {
        let state = GridState {
            sections: vec![SectionView {
                category: Category::People,
                title: "People",
                items: vec!["😀".to_string(), "😃".to_string()],
            }],
            cursor: Some(GridPosition::new(0, 1)),
        };
        assert_eq!(state.current(), Some("😃"));
        assert!(!state.is_empty());

        let empty = GridState {
            sections: Vec::new(),
            cursor: None,
        };
        assert_eq!(empty.current(), None);
        assert!(empty.is_empty());
    }
}
