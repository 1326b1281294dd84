use crate::{category::Category, model::EmojiEntry};

/// 数据源抽象：core 不关心 emoji 数据来自文件/内存/网络。
///
/// 约定：
/// - 返回的切片保持数据源中的原始顺序
/// - 没有数据的分类返回空切片，而不是错误
pub trait EmojiSource: Send + Sync {
    fn entries(&self, category: Category) -> &[EmojiEntry];
}

impl<S> EmojiSource for &S
where
    S: EmojiSource + ?Sized,
{
    fn entries(&self, category: Category) -> &[EmojiEntry] {
        (**self).entries(category)
    }
}

impl<S> EmojiSource for std::sync::Arc<S>
where
    S: EmojiSource + ?Sized,
{
    fn entries(&self, category: Category) -> &[EmojiEntry] {
        (**self).entries(category)
    }
}
