//! `emoji_core`：纯逻辑层，不做任何 I/O。
//!
//! 设计目标：
//! - **核心可复用**：CLI/GUI 都能复用同一套分类表与选择逻辑
//! - **分层清晰**：source(`CategoryTable`) -> index(`CategoryIndex`) -> grid -> session -> 输出（`GridState`）
//! - **加载一次**：表构建后只读，由调用方持有并注入，不使用全局单例
pub mod category;
pub mod context;
pub mod filter;
pub mod grid;
pub mod index;
pub mod key_event;
pub mod model;
pub mod processor;
pub mod session;
pub mod source;
pub mod table;

pub use category::Category;
pub use index::CategoryIndex;
pub use model::EmojiEntry;
pub use table::CategoryTable;
