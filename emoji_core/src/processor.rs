//! `processor`：输入事件处理链。
//!
//! 按顺序处理 `InputEvent`，对 `Context` 做状态变更，并可产生 `Action`（例如 Commit）。
//!
//! 当前链路（`PickerSession::new` 默认组装）：
//! - `NavigationProcessor`：移动光标（Left/Right/NextSection/PrevSection/Clear）
//! - `SelectionProcessor`：选择 emoji（Select(n)/Enter）并产生 Commit

use crate::{
    context::Context,
    key_event::{Action, InputEvent},
    model::{GridPosition, GridState},
};

/// 给 processors 的对象安全网格接口（避免在 processors 层引入泛型）。
pub trait GridFacade {
    fn section_count(&self) -> usize;
    fn item_count(&self, section: usize) -> usize;
    fn item(&self, pos: GridPosition) -> Option<String>;
    fn first_position(&self) -> Option<GridPosition>;
    fn snapshot(&self, cursor: Option<GridPosition>) -> GridState;
}

/// Processor 执行结果：是否“消费”了本次事件。
///
/// - `Consume`：本 processor 已处理该事件，后续 processor 不再执行
/// - `Continue`：本 processor 不处理该事件，交给下一个 processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Consume,
    Continue,
}

/// Processor：处理输入事件并改变 Context；必要时产生输出动作（Commit 等）。
pub trait Processor: Send + Sync {
    fn process(
        &mut self,
        grid: &dyn GridFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>);
}

/// 光标移动的 processor。
pub struct NavigationProcessor;

impl Processor for NavigationProcessor {
    fn process(
        &mut self,
        grid: &dyn GridFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::Left => context.move_left(grid),
            InputEvent::Right => context.move_right(grid),
            InputEvent::NextSection => context.jump_section(grid, true),
            InputEvent::PrevSection => context.jump_section(grid, false),
            InputEvent::Clear => context.reset(grid),
            _ => return (ProcessStatus::Continue, Vec::new()),
        }
        (ProcessStatus::Consume, Vec::new())
    }
}

pub struct SelectionProcessor;

impl Processor for SelectionProcessor {
    fn process(
        &mut self,
        grid: &dyn GridFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::Select(i) => (ProcessStatus::Consume, context.select_in_section(grid, i)),
            InputEvent::Enter => (ProcessStatus::Consume, context.commit_current(grid)),
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}
