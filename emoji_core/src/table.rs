//! `CategoryTable`：分类标题 -> 有序 emoji 列表。
//!
//! 约定：
//! - key 是数据文件里的原始标题；不在 `Category::ALL` 里的标题也会保留，只是查不到
//! - 每个 key 对应的列表非空；插入空列表等价于删除该 key
//! - 同一标题重复插入时后者整体覆盖前者（不合并）
//! - 构建完成后只读，可在多个读者间共享
use std::collections::HashMap;

use crate::{category::Category, model::EmojiEntry, source::EmojiSource};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTable {
    map: HashMap<String, Vec<EmojiEntry>>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以覆盖语义写入一个分类，返回被替换掉的旧列表。
    pub fn insert(
        &mut self,
        title: impl Into<String>,
        entries: Vec<EmojiEntry>,
    ) -> Option<Vec<EmojiEntry>> {
        let title = title.into();
        if entries.is_empty() {
            return self.map.remove(&title);
        }
        self.map.insert(title, entries)
    }

    /// 按原始标题查询；不存在时返回空切片。
    pub fn get(&self, title: &str) -> &[EmojiEntry] {
        self.map.get(title).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 已加载的分类数量（包括未知标题）。
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// 已加载的标题（按字典序，便于日志输出稳定）。
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.map.keys().map(String::as_str).collect();
        titles.sort_unstable();
        titles
    }

    /// 全部条目数量。
    pub fn entry_count(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }
}

impl EmojiSource for CategoryTable {
    fn entries(&self, category: Category) -> &[EmojiEntry] {
        self.get(category.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(raw: &[&str]) -> Vec<EmojiEntry> {
        raw.iter().filter_map(|r| EmojiEntry::new(*r)).collect()
    }

    #[test]
    fn absent_category_is_empty() {
        let table = CategoryTable::new();
        assert!(table.is_empty());
        for c in Category::ALL {
            assert!(table.entries(c).is_empty());
        }
    }

    #[test]
    fn insert_overwrites_without_merging() {
        let mut table = CategoryTable::new();
        assert!(table.insert("People", entries(&["A", "B"])).is_none());
        let old = table.insert("People", entries(&["C", "D"]));
        assert_eq!(old, Some(entries(&["A", "B"])));

        let raw: Vec<&str> = table.entries(Category::People).iter().map(EmojiEntry::raw).collect();
        assert_eq!(raw, ["C", "D"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.entry_count(), 2);
    }

    #[test]
    fn empty_insert_removes_key() {
        let mut table = CategoryTable::new();
        table.insert("Nature", entries(&["🐶"]));
        table.insert("Nature", Vec::new());
        assert!(table.entries(Category::Nature).is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn unknown_titles_are_kept_but_unreachable() {
        let mut table = CategoryTable::new();
        table.insert("Flags", entries(&["🏁"]));
        table.insert("people", entries(&["😀"]));
        assert_eq!(table.titles(), ["Flags", "people"]);
        assert_eq!(table.get("Flags").len(), 1);
        for c in Category::ALL {
            assert!(table.entries(c).is_empty());
        }
    }
}
