mod config;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use config::Args;
use emoji_core::{
    Category, CategoryIndex, CategoryTable,
    grid::EmojiGrid,
    key_event::{Action, InputEvent},
    model::GridState,
    session::PickerSession,
};

fn main() -> io::Result<ExitCode> {
    let args = Args::parse();

    pretty_env_logger::init();

    let table = match &args.data {
        Some(path) => {
            log::info!("Using emoji dataset {}", path.display());
            emoji_dict::load_path(path)
        }
        None => {
            log::info!("Using bundled emoji dataset");
            emoji_dict::bundled()
        }
    };
    let index = CategoryIndex::new(table);

    if args.list {
        print_categories(&index)?;
        return Ok(ExitCode::SUCCESS);
    }
    if let Some(title) = &args.category {
        let category = match title.parse::<Category>() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}（可选：{}）", category_titles());
                return Ok(ExitCode::from(2));
            }
        };
        let mut out = io::stdout();
        writeln!(out, "{}", index.emojis_for(category).join(" "))?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut committed: Vec<String> = Vec::new();
    let mut session = PickerSession::new(EmojiGrid::new(index))
        .with_listener(|emoji: &str| log::debug!("selected {emoji}"));
    repl(&mut session, &mut committed)?;
    if !committed.is_empty() {
        println!("{}", committed.concat());
    }
    Ok(ExitCode::SUCCESS)
}

fn category_titles() -> String {
    Category::ALL.map(Category::as_str).join(", ")
}

fn print_categories(index: &CategoryIndex<CategoryTable>) -> io::Result<()> {
    let mut out = io::stdout();
    for &c in index.list_categories() {
        writeln!(out, "{c}\t{}", index.emojis_for(c).len())?;
    }
    Ok(())
}

fn repl(session: &mut PickerSession<CategoryTable>, committed: &mut Vec<String>) -> io::Result<()> {
    let mut out = io::stdout();
    let mut line = String::new();
    writeln!(out, "emoji picker | 分类：{}", category_titles())?;
    writeln!(out, "h/l 左右移动，n/p 切换分类，数字选择，直接回车选光标处，c 回到开头，:q 退出。")?;

    let mut ui = session.grid_state();
    loop {
        if ui.is_empty() {
            writeln!(out, "(没有可用的 emoji)")?;
            break;
        }
        render(&mut out, &ui)?;

        line.clear();
        print!("emoji> ");
        out.flush()?;
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let Some(ev) = parse_command(line.trim()) else {
            writeln!(out, "无效输入，请输入 h / l / n / p / c / 数字 / 直接回车 / :q")?;
            continue;
        };
        if ev == InputEvent::Exit {
            break;
        }

        let (next, actions) = session.handle(ev);
        for a in actions {
            let Action::Commit(s) = a;
            writeln!(out, "commit: {s}")?;
            committed.push(s);
        }
        ui = next;
    }
    Ok(())
}

fn render(out: &mut impl Write, ui: &GridState) -> io::Result<()> {
    let Some(cursor) = ui.cursor else {
        return Ok(());
    };
    let Some(section) = ui.sections.get(cursor.section) else {
        return Ok(());
    };
    writeln!(out, "--------------------")?;
    writeln!(out, "[{}] {} / {}", section.title, cursor.section + 1, ui.sections.len())?;
    for (i, emoji) in section.items.iter().enumerate() {
        if i == cursor.item {
            write!(out, "[{}.{emoji}] ", i + 1)?;
        } else {
            write!(out, "{}.{emoji} ", i + 1)?;
        }
    }
    writeln!(out)?;
    if let Some(emoji) = ui.current() {
        writeln!(out, "当前：{emoji}")?;
    }
    Ok(())
}

fn parse_command(input: &str) -> Option<InputEvent> {
    match input {
        "" => Some(InputEvent::Enter),
        "h" => Some(InputEvent::Left),
        "l" => Some(InputEvent::Right),
        "n" => Some(InputEvent::NextSection),
        "p" => Some(InputEvent::PrevSection),
        "c" => Some(InputEvent::Clear),
        ":q" | ":quit" | ":exit" => Some(InputEvent::Exit),
        _ => input
            .parse::<usize>()
            .ok()
            .filter(|&n| n >= 1)
            .map(|n| InputEvent::Select(n - 1)),
    }
}
