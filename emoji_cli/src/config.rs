use std::path::PathBuf;

use clap::Parser;

/// 终端里的 emoji 选择器
#[derive(Parser, Debug)]
#[command(name = "emoji_cli")]
#[command(about = "Pick emoji from a categorized grid", long_about = None)]
pub struct Args {
    /// emoji 数据文件（JSON）；不指定时使用内置数据集
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// 列出所有分类及其 emoji 数量后退出
    #[arg(long)]
    pub list: bool,

    /// 打印某个分类（区分大小写，例如 People）的全部 emoji 后退出
    #[arg(long, value_name = "TITLE", conflicts_with = "list")]
    pub category: Option<String>,
}
