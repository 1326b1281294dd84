use crate::category::Category;
use crate::index::CategoryIndex;
use crate::model::{GridPosition, GridState, SectionView};
use crate::source::EmojiSource;

/// 网格数据源：把 `CategoryIndex` 映射成“分区网格”所需的全部信息。
///
/// 对应关系：
/// - section 数 = 分类数（`Category::ALL` 顺序）
/// - 每个 section 的 item 数 = `emojis_for(category).len()`
/// - item 内容 = emoji 原文；section 标题 = 分类标题
///
/// 不涉及任何布局/渲染，由前端（CLI/GUI）自行决定怎么画。
pub struct EmojiGrid<S> {
    index: CategoryIndex<S>,
}

impl<S> EmojiGrid<S>
where
    S: EmojiSource,
{
    pub fn new(index: CategoryIndex<S>) -> Self {
        Self { index }
    }

    pub fn section_count(&self) -> usize {
        self.index.list_categories().len()
    }

    /// 越界 section 返回 0。
    pub fn item_count(&self, section: usize) -> usize {
        self.category(section)
            .map(|c| self.index.count_for(c))
            .unwrap_or(0)
    }

    pub fn item(&self, pos: GridPosition) -> Option<String> {
        let category = self.category(pos.section)?;
        self.index.emoji_at(category, pos.item).map(str::to_owned)
    }

    pub fn section_title(&self, section: usize) -> Option<&'static str> {
        self.category(section).map(Category::as_str)
    }

    /// 第一个非空 section 的第一个 item；完全没有数据时为 None。
    pub fn first_position(&self) -> Option<GridPosition> {
        (0..self.section_count())
            .find(|&s| self.item_count(s) > 0)
            .map(|s| GridPosition::new(s, 0))
    }

    /// 生成只读快照；越界光标会被丢弃。
    pub fn snapshot(&self, cursor: Option<GridPosition>) -> GridState {
        let sections: Vec<SectionView> = self
            .index
            .list_categories()
            .iter()
            .map(|&category| SectionView {
                category,
                title: category.as_str(),
                items: self.index.emojis_for(category),
            })
            .collect();
        let cursor = cursor.filter(|p| {
            sections
                .get(p.section)
                .is_some_and(|s| p.item < s.items.len())
        });
        GridState { sections, cursor }
    }

    fn category(&self, section: usize) -> Option<Category> {
        self.index.list_categories().get(section).copied()
    }
}

impl<S> crate::processor::GridFacade for EmojiGrid<S>
where
    S: EmojiSource,
{
    fn section_count(&self) -> usize {
        EmojiGrid::<S>::section_count(self)
    }

    fn item_count(&self, section: usize) -> usize {
        EmojiGrid::<S>::item_count(self, section)
    }

    fn item(&self, pos: GridPosition) -> Option<String> {
        EmojiGrid::<S>::item(self, pos)
    }

    fn first_position(&self) -> Option<GridPosition> {
        EmojiGrid::<S>::first_position(self)
    }

    fn snapshot(&self, cursor: Option<GridPosition>) -> GridState {
        EmojiGrid::<S>::snapshot(self, cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::EmojiEntry, table::CategoryTable};

    fn grid(records: &[(&str, &[&str])]) -> EmojiGrid<CategoryTable> {
        let mut t = CategoryTable::new();
        for (title, raw) in records {
            t.insert(*title, raw.iter().filter_map(|r| EmojiEntry::new(*r)).collect());
        }
        EmojiGrid::new(CategoryIndex::new(t))
    }

    #[test]
    fn sections_follow_categories() {
        let g = grid(&[("Nature", &["🐶", "🐱"]), ("Symbols", &["❤️"])]);
        assert_eq!(g.section_count(), 5);
        assert_eq!(g.section_title(0), Some("People"));
        assert_eq!(g.section_title(4), Some("Symbols"));
        assert_eq!(g.section_title(5), None);
        assert_eq!(g.item_count(0), 0);
        assert_eq!(g.item_count(1), 2);
        assert_eq!(g.item_count(9), 0);
        assert_eq!(g.item(GridPosition::new(1, 1)), Some("🐱".to_string()));
        assert_eq!(g.item(GridPosition::new(1, 2)), None);
    }

    #[test]
    fn first_position_skips_empty_sections() {
        let g = grid(&[("Objects", &["⌚"])]);
        assert_eq!(g.first_position(), Some(GridPosition::new(2, 0)));
        assert_eq!(grid(&[]).first_position(), None);
    }

    #[test]
    fn snapshot_contains_every_section_and_drops_bad_cursor() {
        let g = grid(&[("People", &["😀"])]);
        let state = g.snapshot(Some(GridPosition::new(0, 0)));
        assert_eq!(state.sections.len(), 5);
        assert_eq!(state.sections[0].items, ["😀"]);
        assert_eq!(state.current(), Some("😀"));

        let state = g.snapshot(Some(GridPosition::new(1, 0)));
        assert_eq!(state.cursor, None);
    }
}
