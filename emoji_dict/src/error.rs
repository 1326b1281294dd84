use std::{io, path::PathBuf};

use thiserror::Error;

/// 数据集整体加载失败的原因；单条记录的问题不会走到这里。
#[derive(Error, Debug)]
pub enum DatasetError {
    /// 文件不存在或读取失败。
    #[error("cannot read emoji dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 不是合法 JSON。
    #[error("malformed emoji dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// 顶层不是记录数组。
    #[error("emoji dataset must be a JSON array of records")]
    NotAList,
}
