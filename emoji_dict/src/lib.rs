//! JSON 数据集加载：把打包的 `emoji.json` 解析成 `CategoryTable`。
//!
//! 格式：
//!
//! ```json
//! [
//!   { "Title": "People", "Data": "😀,😃,😄" },
//!   { "Title": "Nature", "Data": "🐶,🐱" }
//! ]
//! ```
//!
//! - `Title` 与 `Category::as_str()` 逐字对应（区分大小写）
//! - `Data` 是逗号分隔的 emoji 原文，逗号不可转义
//! - 缺字段/类型不对的记录直接跳过；同名记录后者覆盖前者
//! - `load_*` 在整体失败时退化为空表（只记日志）；需要知道原因时用 `try_load_*`
mod error;

use std::{fs, path::Path};

use emoji_core::{
    filter::{DropBlank, split_data},
    table::CategoryTable,
};
use serde::Deserialize;
use serde_json::Value;

pub use error::DatasetError;

/// 编译进二进制的默认数据集。
pub const BUNDLED_JSON: &[u8] = include_bytes!("../asset/emoji.json");

#[derive(Debug, Deserialize)]
struct Record {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Data")]
    data: Option<String>,
}

/// 解析打包数据集；理论上不会失败，失败时同样退化为空表。
pub fn bundled() -> CategoryTable {
    load_slice(BUNDLED_JSON)
}

/// 从文件加载；任何整体错误都退化为空表。
pub fn load_path(path: impl AsRef<Path>) -> CategoryTable {
    let path = path.as_ref();
    try_load_path(path).unwrap_or_else(|e| {
        log::warn!("falling back to an empty emoji table: {e}");
        CategoryTable::new()
    })
}

/// 从字节加载；任何整体错误都退化为空表。
pub fn load_slice(bytes: &[u8]) -> CategoryTable {
    try_load_slice(bytes).unwrap_or_else(|e| {
        log::warn!("falling back to an empty emoji table: {e}");
        CategoryTable::new()
    })
}

pub fn try_load_path(path: impl AsRef<Path>) -> Result<CategoryTable, DatasetError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = try_load_slice(&bytes)?;
    log::info!(
        "loaded {} emoji in {} categories ({}) from {}",
        table.entry_count(),
        table.len(),
        table.titles().join(", "),
        path.display()
    );
    Ok(table)
}

pub fn try_load_slice(bytes: &[u8]) -> Result<CategoryTable, DatasetError> {
    let Value::Array(records) = serde_json::from_slice::<Value>(bytes)? else {
        return Err(DatasetError::NotAList);
    };

    let mut table = CategoryTable::new();
    for (idx, value) in records.into_iter().enumerate() {
        let record = match serde_json::from_value::<Record>(value) {
            Ok(r) => r,
            Err(e) => {
                log::debug!("skipping emoji record #{idx}: {e}");
                continue;
            }
        };
        let (Some(title), Some(data)) = (record.title, record.data) else {
            log::debug!("skipping emoji record #{idx}: missing Title or Data");
            continue;
        };
        let entries = split_data(&DropBlank, &data);
        if entries.is_empty() {
            log::debug!("emoji record #{idx} ({title}) has no entries");
        }
        if table.insert(title.as_str(), entries).is_some() {
            log::debug!("emoji record #{idx} overrides earlier {title}");
        }
    }
    Ok(table)
}
