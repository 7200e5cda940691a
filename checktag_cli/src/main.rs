mod cli;

use std::{
    fs,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use clap::Parser;

use checktag_core::{
    config::{ConfigFile, WidgetConfig},
    key_event::InputEvent,
    model::{ChipPanel, SuggestionPanel, UiState},
    session::Session,
};
use checktag_form::{
    fieldset::SharedField,
    loader::FormSpec,
    watcher::FieldWatcher,
};
use cli::{Command, Commands, HELP};

const SAMPLE_CONFIG: &str = include_str!("../config.sample.toml");

fn main() {
    init_logger();
    let cli = cli::Cli::parse();

    if let Some(Commands::NewConfig { path }) = cli.command {
        if path.exists() {
            log::error!("config file already exists: {}", path.display());
            std::process::exit(1);
        }
        if let Err(e) = fs::write(&path, SAMPLE_CONFIG) {
            log::error!("error writing config: {}", e);
            std::process::exit(1);
        }
        log::info!("config file generated: {}", path.display());
        return;
    }

    let config = load_config(&cli.config, cli.field.as_deref());
    let form_path = cli.form.clone().unwrap_or_else(default_form_path);
    let spec = match FormSpec::from_path(&form_path) {
        Ok(s) => s,
        Err(e) => {
            log::error!("error loading form {}: {}", form_path.display(), e);
            std::process::exit(1);
        }
    };

    let Some(mut session) = render_page(&spec, &config) else {
        // 没有 attach：原生控件保持原样，演示到此为止。
        log::warn!("widget not attached, native checkboxes left as they are");
        return;
    };

    let result = match &cli.script {
        Some(path) => match fs::File::open(path) {
            Ok(f) => run(&mut session, BufReader::new(f), false),
            Err(e) => {
                log::error!("error opening script {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => run(&mut session, io::stdin().lock(), true),
    };
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// 初始化日志：默认 INFO，可用 `RUST_LOG` 覆盖。
fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            let level = if record.level() != log::Level::Info {
                format!("[{}] ", record.level())
            } else {
                String::new()
            };
            writeln!(
                buf,
                "{} {}:{} {}{}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                level,
                record.args()
            )
        })
        .init();
}

/// 按顺序加载并合并配置；`--field` 最后覆盖字段名。
fn load_config(paths: &[PathBuf], field: Option<&str>) -> WidgetConfig {
    let mut config = WidgetConfig::default();
    for path in paths {
        log::info!("loading config: {}", path.display());
        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|s| ConfigFile::from_toml_str(&s).map_err(|e| e.to_string()));
        match parsed {
            Ok(c) => config.merge(c),
            Err(e) => {
                log::error!("error loading config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }
    if let Some(name) = field {
        config.field_name = name.to_string();
    }
    config
}

fn default_form_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("asset")
        .join("form.toml")
}

/// 模拟页面逐块渲染：每插入一个字段块就让 watcher 看一眼文档。
fn render_page(spec: &FormSpec, config: &WidgetConfig) -> Option<Session<SharedField>> {
    let mut doc = spec.skeleton();
    let mut watcher = FieldWatcher::new(config, &doc).ok()?;
    let mut session = None;
    for (selector, block) in spec.blocks() {
        if let Err(e) = doc.insert_field(selector, block.to_fieldset()) {
            log::warn!("skipping block {}: {}", block.field, e);
            continue;
        }
        if let Some(s) = watcher.poll_attach(config, &doc) {
            session = Some(s);
        }
    }
    session
}

fn run(session: &mut Session<SharedField>, input: impl BufRead, interactive: bool) -> io::Result<()> {
    let mut out = io::stdout();
    let field = session.engine().controls().clone();
    writeln!(out, "checktag demo | field: {}", field.with(|f| f.name().to_string()))?;
    writeln!(out, "输入 :help 查看命令，:q 退出。")?;
    print_ui(&mut out, &session.ui_state())?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if !interactive {
            writeln!(out, "$ {line}")?;
        }
        let cmd = match cli::parse_line(&line) {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "({e})")?;
                continue;
            }
        };
        match cmd {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::State => print_native(&mut out, &field)?,
            Command::Toggle(i) => {
                if !field.with_mut(|f| f.click(i)) {
                    writeln!(out, "(no checkbox #{})", i + 1)?;
                }
            }
            Command::Backspace => {
                let query = session.ui_state().input_value;
                session.handle(InputEvent::Backspace);
                if !query.is_empty() {
                    let mut shorter = query;
                    shorter.pop();
                    session.handle(InputEvent::Input(shorter));
                }
            }
            Command::Event(ev) => {
                let (_, actions) = session.handle(ev);
                for a in actions {
                    log::debug!("host action: {:?}", a);
                }
            }
        }
        forward_changes(&mut out, session, &field)?;
        print_ui(&mut out, &session.ui_state())?;
    }
    Ok(())
}

/// 取走字段上的 change 通知：打印出来（相当于表单上的其它监听者），再交回会话。
fn forward_changes(
    out: &mut impl Write,
    session: &mut Session<SharedField>,
    field: &SharedField,
) -> io::Result<()> {
    for change in field.with_mut(|f| f.take_changes()) {
        writeln!(
            out,
            "change: {}[{}] {} -> {}",
            change.field,
            change.control.0 + 1,
            change.value,
            if change.checked { "checked" } else { "unchecked" }
        )?;
        session.handle(InputEvent::ControlChanged(change.control));
    }
    Ok(())
}

fn print_ui(out: &mut impl Write, ui: &UiState) -> io::Result<()> {
    writeln!(out, "--------------------")?;
    match &ui.chips {
        ChipPanel::Empty { placeholder } => writeln!(out, "tags: ({placeholder})")?,
        ChipPanel::Chips(chips) => {
            let tags: Vec<String> = chips
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{}.[{}]", i + 1, c.label))
                .collect();
            writeln!(out, "tags: {}", tags.join(" "))?;
        }
    }
    if ui.input_value.is_empty() {
        writeln!(out, "{}> ({})", ui.aria_label, ui.placeholder)?;
    } else {
        writeln!(out, "{}> {}", ui.aria_label, ui.input_value)?;
    }
    if let SuggestionPanel::Visible(rows) = &ui.suggestions {
        for (i, s) in rows.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, s.label)?;
        }
    }
    writeln!(out, "{}", ui.hint)?;
    out.flush()
}

fn print_native(out: &mut impl Write, field: &SharedField) -> io::Result<()> {
    let rows: Vec<(String, bool)> = field.with(|f| {
        f.boxes()
            .iter()
            .map(|b| (b.value.clone(), b.checked))
            .collect()
    });
    let visible = field.with(|f| f.is_visible());
    writeln!(out, "native fieldset ({}):", if visible { "visible" } else { "hidden" })?;
    for (i, (value, checked)) in rows.iter().enumerate() {
        let mark = if *checked { "x" } else { " " };
        writeln!(out, "  [{mark}] {}. {value}", i + 1)?;
    }
    Ok(())
}
