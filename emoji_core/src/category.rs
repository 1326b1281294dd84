//! `category`：固定的 emoji 分类集合。
//!
//! 约定：
//! - 分类集合在编译期确定，loader 与 UI 都只认这 5 个值
//! - `Category::ALL` 的顺序就是 section 的展示顺序
//! - `as_str()` 与数据文件里的 `Title` 字段逐字对应（区分大小写）
use std::{fmt, str::FromStr};

use thiserror::Error;

/// emoji 分类（封闭枚举）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    People,
    Nature,
    Objects,
    Places,
    Symbols,
}

impl Category {
    /// 规范展示顺序。
    pub const ALL: [Category; 5] = [
        Category::People,
        Category::Nature,
        Category::Objects,
        Category::Places,
        Category::Symbols,
    ];

    /// 数据文件中的标题（同时作为 section 标题展示）。
    pub fn as_str(self) -> &'static str {
        match self {
            Category::People => "People",
            Category::Nature => "Nature",
            Category::Objects => "Objects",
            Category::Places => "Places",
            Category::Symbols => "Symbols",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown emoji category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_canonical_display_order() {
        let titles: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(titles, ["People", "Nature", "Objects", "Places", "Symbols"]);
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>(), Ok(c));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!("Nature".parse::<Category>(), Ok(Category::Nature));
        assert_eq!(
            "nature".parse::<Category>(),
            Err(ParseCategoryError("nature".to_string()))
        );
        assert!("Flags".parse::<Category>().is_err());
    }

    #[test]
    fn display_matches_title() {
        assert_eq!(Category::Places.to_string(), "Places");
    }
}
