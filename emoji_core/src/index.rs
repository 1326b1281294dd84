//! `CategoryIndex`：面向消费者（网格/CLI）的只读查询门面。
//!
//! 由调用方显式构造并持有，按需传给需要它的组件；
//! 加载一次、到处复用，但没有进程级全局状态。
use crate::{category::Category, source::EmojiSource};

pub struct CategoryIndex<S> {
    source: S,
}

impl<S> CategoryIndex<S>
where
    S: EmojiSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// 固定的分类集合（规范展示顺序），与已加载数据无关。
    pub fn list_categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// 某分类下的 emoji 原文，保持数据源顺序；无数据时为空。
    pub fn emojis_for(&self, category: Category) -> Vec<String> {
        self.source
            .entries(category)
            .iter()
            .map(|e| e.raw().to_owned())
            .collect()
    }

    pub(crate) fn count_for(&self, category: Category) -> usize {
        self.source.entries(category).len()
    }

    pub(crate) fn emoji_at(&self, category: Category, item: usize) -> Option<&str> {
        self.source.entries(category).get(item).map(|e| e.raw())
    }
}
