/// 输入事件（逻辑键盘事件）。
///
/// 说明：
/// - `PickerSession`/processor 只关心“语义事件”，不关心具体平台键值。
/// - CLI/GUI 层负责把系统按键或点击转换成这些事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// 光标左移（到 section 开头时跳到上一个非空 section 的末尾）
    Left,
    /// 光标右移（到 section 末尾时跳到下一个非空 section 的开头）
    Right,
    /// 跳到下一个非空 section
    NextSection,
    /// 跳到上一个非空 section
    PrevSection,
    /// 直接选择当前 section 的第 n 个 emoji（从 0 开始）
    Select(usize),
    /// 选择光标下的 emoji
    Enter,
    /// 光标回到第一个非空 section 的开头
    Clear,
    /// 退出（上层用；core 可忽略）
    Exit,
}

/// 会话输出动作（对 UI/宿主的“副作用”请求）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 提交选中的 emoji（上屏）
    Commit(String),
}
