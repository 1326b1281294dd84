//! `PickerSession`：对上层（CLI/GUI）提供的选择会话对象。
//!
//! `PickerSession` 自身不做业务逻辑判断，而是：
//! - 持有 `Context`（光标状态）
//! - 持有 processors 链（可插拔）
//! - 把每次 `InputEvent` 依次交给 processors，直到被消费
//! - 最后输出 `GridState` + `Action`，并把 Commit 通知给 `SelectionListener`

use crate::{
    context::Context,
    grid::EmojiGrid,
    key_event::{Action, InputEvent},
    model::GridState,
    processor::{NavigationProcessor, ProcessStatus, Processor, SelectionProcessor},
    source::EmojiSource,
};

/// 选中回调（宿主侧的 delegate）。
pub trait SelectionListener {
    fn did_select(&mut self, emoji: &str);
}

impl<F> SelectionListener for F
where
    F: FnMut(&str),
{
    fn did_select(&mut self, emoji: &str) {
        self(emoji)
    }
}

pub struct PickerSession<S> {
    grid: EmojiGrid<S>,
    ctx: Context,
    processors: Vec<Box<dyn Processor>>,
    listener: Option<Box<dyn SelectionListener>>,
}

impl<S> PickerSession<S>
where
    S: EmojiSource,
{
    /// 创建会话，光标放在第一个非空 section，并组装默认 processors 链。
    pub fn new(grid: EmojiGrid<S>) -> Self {
        let mut ctx = Context::default();
        ctx.reset(&grid);
        Self {
            grid,
            ctx,
            processors: vec![Box::new(NavigationProcessor), Box::new(SelectionProcessor)],
            listener: None,
        }
    }

    pub fn with_listener(mut self, listener: impl SelectionListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// 获取当前 UI 快照（只读）。
    pub fn grid_state(&self) -> GridState {
        self.ctx.grid_state(&self.grid)
    }

    /// 处理一个输入事件，返回最新 UI 快照与动作列表。
    pub fn handle(&mut self, ev: InputEvent) -> (GridState, Vec<Action>) {
        let mut actions = Vec::new();
        for p in &mut self.processors {
            let (status, mut a) = p.process(&self.grid, &mut self.ctx, &ev);
            actions.append(&mut a);
            if status == ProcessStatus::Consume {
                break;
            }
        }
        if let Some(listener) = self.listener.as_mut() {
            for action in &actions {
                let Action::Commit(emoji) = action;
                listener.did_select(emoji);
            }
        }
        (self.ctx.grid_state(&self.grid), actions)
    }
}
