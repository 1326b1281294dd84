//! `filter`：条目后处理（修剪/过滤空白等）。

use crate::model::EmojiEntry;

/// Filter：把数据字段切出来的原始 token 变成最终条目列表。
pub trait EntryFilter {
    fn apply<'a, I>(&self, tokens: I) -> Vec<EmojiEntry>
    where
        I: IntoIterator<Item = &'a str>;
}

/// 默认 filter：去掉 token 两端空白，丢弃空 token，保持原顺序，不去重。
#[derive(Debug, Clone, Copy, Default)]
pub struct DropBlank;

impl EntryFilter for DropBlank {
    fn apply<'a, I>(&self, tokens: I) -> Vec<EmojiEntry>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .filter_map(|t| EmojiEntry::new(t.trim()))
            .collect()
    }
}

/// 按逗号切分 `Data` 字段（逗号不可转义）。
pub fn split_data<F: EntryFilter>(filter: &F, data: &str) -> Vec<EmojiEntry> {
    filter.apply(data.split(','))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raws(entries: &[EmojiEntry]) -> Vec<&str> {
        entries.iter().map(EmojiEntry::raw).collect()
    }

    #[test]
    fn splits_in_order() {
        let out = split_data(&DropBlank, "😀,😃,😄");
        assert_eq!(raws(&out), ["😀", "😃", "😄"]);
    }

    #[test]
    fn drops_blank_tokens() {
        let out = split_data(&DropBlank, ",😀,, ,😃,");
        assert_eq!(raws(&out), ["😀", "😃"]);
        assert!(split_data(&DropBlank, "").is_empty());
    }

    #[test]
    fn keeps_duplicates_and_multi_codepoint_sequences() {
        let out = split_data(&DropBlank, "👍🏽,👨‍👩‍👧,👍🏽, ❤️ ");
        assert_eq!(raws(&out), ["👍🏽", "👨‍👩‍👧", "👍🏽", "❤️"]);
    }
}
