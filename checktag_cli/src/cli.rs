use std::path::PathBuf;

use clap::{Parser, Subcommand};

use checktag_core::key_event::{InputEvent, PointerTarget};

#[derive(Parser)]
#[command(name = "checktag")]
#[command(about = "checktag - 给复选框组加上输入联想与标签选择的终端演示")]
#[command(version)]
pub struct Cli {
    /// 表单描述文件（TOML）。默认使用自带的演示表单。
    #[arg(long)]
    pub form: Option<PathBuf>,

    /// 一个或多个 widget 配置文件（按顺序合并）。
    #[arg(long, action = clap::ArgAction::Append)]
    pub config: Vec<PathBuf>,

    /// 直接指定字段名，覆盖配置文件中的 field_name。
    #[arg(long)]
    pub field: Option<String>,

    /// 从文件读取命令（每行一条）而不是交互输入。
    #[arg(long)]
    pub script: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 生成示例配置文件。
    NewConfig {
        /// 输出路径。
        #[arg(short, long, default_value = "checktag.toml")]
        path: PathBuf,
    },
}

/// REPL 中的一行命令。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 直接转成会话事件
    Event(InputEvent),
    /// 在文本非空时模拟浏览器：先送 Backspace，再送删掉末字符后的 Input
    Backspace,
    /// 绕过 widget 点击第 n 个原生复选框（0 起）
    Toggle(usize),
    /// 打印原生复选框状态
    State,
    Help,
    Quit,
}

/// 解析一行输入。不以 `:` 开头的文本整体作为输入框的新内容。
pub fn parse_line(line: &str) -> Result<Command, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::Event(InputEvent::Input(line.to_string())));
    };
    let mut it = rest.split_whitespace();
    let name = it.next().unwrap_or("");
    let arg = it.next();

    let cmd = match name {
        "enter" => Command::Event(InputEvent::Enter),
        "bs" => Command::Backspace,
        "esc" => Command::Event(InputEvent::Escape),
        "blur" => Command::Event(InputEvent::Blur),
        "clear" => Command::Event(InputEvent::Input(String::new())),
        "outside" => Command::Event(InputEvent::PointerDown(PointerTarget::Outside)),
        "inside" => Command::Event(InputEvent::PointerDown(PointerTarget::Widget)),
        "pick" => Command::Event(InputEvent::PointerDown(PointerTarget::Suggestion(
            ordinal(arg)?,
        ))),
        "chip" => Command::Event(InputEvent::PointerDown(PointerTarget::Chip(ordinal(arg)?))),
        "toggle" => Command::Toggle(ordinal(arg)?),
        "state" => Command::State,
        "help" | "h" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command :{other}")),
    };
    Ok(cmd)
}

/// 1 起的序号 -> 0 起的下标。
fn ordinal(arg: Option<&str>) -> Result<usize, String> {
    let raw = arg.ok_or("missing number")?;
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("invalid number: {raw}")),
    }
}

pub const HELP: &str = "\
直接输入文本 = 设置输入框内容
:enter        确认最佳匹配
:bs           退格（输入框为空时删除最后一个 chip）
:esc          收起建议
:pick N       点击第 N 条建议
:chip N       点击第 N 个 chip（移除）
:outside      点击 widget 外部
:inside       点击 widget 内部
:blur         输入框失焦
:clear        清空输入框
:toggle N     绕过 widget 点击第 N 个原生复选框
:state        查看原生复选框
:q            退出";
