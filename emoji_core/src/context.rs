//! `Context`：processor 链共享的唯一状态容器。
//!
//! 约定：
//! - `cursor`：当前高亮的位置；网格完全为空时为 None
//! - 光标永远落在非空 section 的合法 item 上
use crate::{
    key_event::Action,
    model::{GridPosition, GridState},
    processor::GridFacade,
};

/// 选择会话上下文：processor 链共享的唯一状态。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub cursor: Option<GridPosition>,
}

impl Context {
    /// 光标回到第一个非空 section 的开头。
    pub fn reset(&mut self, grid: &dyn GridFacade) {
        self.cursor = grid.first_position();
    }

    /// 生成 UI 层只读快照。
    pub fn grid_state(&self, grid: &dyn GridFacade) -> GridState {
        grid.snapshot(self.cursor)
    }

    pub fn move_right(&mut self, grid: &dyn GridFacade) {
        let Some(pos) = self.cursor else {
            return self.reset(grid);
        };
        if pos.item + 1 < grid.item_count(pos.section) {
            self.cursor = Some(GridPosition::new(pos.section, pos.item + 1));
        } else {
            self.cursor = next_non_empty(grid, pos.section, true).map(|s| GridPosition::new(s, 0));
        }
    }

    pub fn move_left(&mut self, grid: &dyn GridFacade) {
        let Some(pos) = self.cursor else {
            return self.reset(grid);
        };
        if pos.item > 0 {
            self.cursor = Some(GridPosition::new(pos.section, pos.item - 1));
        } else {
            self.cursor = next_non_empty(grid, pos.section, false)
                .map(|s| GridPosition::new(s, grid.item_count(s) - 1));
        }
    }

    /// 切换 section；`forward=false` 时向前。
    pub fn jump_section(&mut self, grid: &dyn GridFacade, forward: bool) {
        let Some(pos) = self.cursor else {
            return self.reset(grid);
        };
        self.cursor = next_non_empty(grid, pos.section, forward).map(|s| GridPosition::new(s, 0));
    }

    /// 选择当前 section 的第 `item` 个 emoji，并把光标移过去。
    pub fn select_in_section(&mut self, grid: &dyn GridFacade, item: usize) -> Vec<Action> {
        let Some(pos) = self.cursor else {
            return Vec::new();
        };
        let target = GridPosition::new(pos.section, item);
        let Some(emoji) = grid.item(target) else {
            return Vec::new();
        };
        self.cursor = Some(target);
        vec![Action::Commit(emoji)]
    }

    /// 选择光标下的 emoji。
    pub fn commit_current(&self, grid: &dyn GridFacade) -> Vec<Action> {
        self.cursor
            .and_then(|pos| grid.item(pos))
            .map(|emoji| vec![Action::Commit(emoji)])
            .unwrap_or_default()
    }
}

/// 从 `from` 出发循环查找下一个（或上一个）非空 section；
/// 绕一圈回到 `from` 自己也算，只要它非空。
fn next_non_empty(grid: &dyn GridFacade, from: usize, forward: bool) -> Option<usize> {
    let n = grid.section_count();
    if n == 0 {
        return None;
    }
    (1..=n)
        .map(|step| {
            if forward {
                (from + step) % n
            } else {
                (from + n - step) % n
            }
        })
        .find(|&s| grid.item_count(s) > 0)
}
