use std::io::Write;

use checktag_core::{
    config::WidgetConfig,
    control::CheckedState,
    error::AttachError,
    key_event::{InputEvent, PointerTarget},
    model::ControlId,
};
use checktag_form::{
    document::Document,
    fieldset::Fieldset,
    loader::FormSpec,
    watcher::FieldWatcher,
};

fn colors() -> Fieldset {
    Fieldset::new("colors", "Favourite colours")
        .with_option("Red", false)
        .with_option("Green", false)
        .with_option("Blue", false)
}

fn scoped_config() -> WidgetConfig {
    let mut config = WidgetConfig::new("colors");
    config.scope = Some("#signup".to_string());
    config
}

fn doc() -> Document {
    let mut doc = Document::new();
    doc.add_scope("#signup");
    doc.add_scope("#footer");
    doc
}

#[test]
fn fires_once_when_field_appears() {
    let mut doc = doc();
    let mut watcher = FieldWatcher::new(&scoped_config(), &doc).unwrap();
    assert!(watcher.poll(&doc).is_none());
    assert!(watcher.is_connected());

    doc.insert_field("#signup", colors()).unwrap();
    let found = watcher.poll(&doc).unwrap();
    assert_eq!(found.with(|f| f.name().to_string()), "colors");
    assert!(!watcher.is_connected());

    // 字段消失再出现：不会再次触发
    doc.remove_field("#signup", "colors");
    assert!(watcher.poll(&doc).is_none());
    doc.insert_field("#signup", colors()).unwrap();
    assert!(watcher.poll(&doc).is_none());
}

#[test]
fn ignores_fields_outside_scope() {
    let mut doc = doc();
    let mut watcher = FieldWatcher::new(&scoped_config(), &doc).unwrap();
    doc.insert_field("#footer", colors()).unwrap();
    assert!(watcher.poll(&doc).is_none());
    assert!(watcher.is_connected());
}

#[test]
fn unscoped_config_searches_whole_document() {
    let mut doc = doc();
    let mut watcher = FieldWatcher::new(&WidgetConfig::new("colors"), &doc).unwrap();
    doc.insert_field("#footer", colors()).unwrap();
    assert!(watcher.poll(&doc).is_some());
}

#[test]
fn config_errors_prevent_watching() {
    let doc = doc();

    let mut config = WidgetConfig::new("colors");
    config.scope = Some("#missing".to_string());
    let err = FieldWatcher::new(&config, &doc).unwrap_err();
    assert!(matches!(err, AttachError::ScopeNotFound(s) if s == "#missing"));

    let err = FieldWatcher::new(&WidgetConfig::default(), &doc).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn attached_session_drives_document_checkboxes() {
    let mut doc = doc();
    let config = scoped_config();
    let mut watcher = FieldWatcher::new(&config, &doc).unwrap();
    let field = doc.insert_field("#signup", colors()).unwrap();

    let mut session = watcher.poll_attach(&config, &doc).unwrap();
    assert!(!field.with(|f| f.is_visible()));

    session.handle(InputEvent::Input("gre".to_string()));
    let (ui, _) = session.handle(InputEvent::Enter);
    assert_eq!(ui.chips.labels(), ["Green"]);
    assert!(field.is_checked(ControlId(1)));

    // widget 写入的 change 通知出现在文档字段的队列上
    let changes = field.with_mut(|f| f.take_changes());
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].value, "Green");
    assert!(changes[0].checked);

    // 用户绕过 widget 直接点了原生控件
    field.with_mut(|f| f.click(2));
    for change in field.with_mut(|f| f.take_changes()) {
        session.handle(InputEvent::ControlChanged(change.control));
    }
    assert_eq!(session.ui_state().chips.labels(), ["Green", "Blue"]);

    let (ui, _) = session.handle(InputEvent::PointerDown(PointerTarget::Chip(0)));
    assert_eq!(ui.chips.labels(), ["Blue"]);
    assert_eq!(field.with(|f| f.checked_values().join(",")), "Blue");
}

#[test]
fn empty_field_is_left_alone() {
    let mut doc = doc();
    let config = scoped_config();
    let mut watcher = FieldWatcher::new(&config, &doc).unwrap();
    let field = doc
        .insert_field("#signup", Fieldset::new("colors", "Nothing here"))
        .unwrap();

    assert!(watcher.poll_attach(&config, &doc).is_none());
    assert!(field.with(|f| f.is_visible()));
    assert!(!watcher.is_connected());
}

#[test]
fn loads_form_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"
[[scope]]
selector = "#signup"

[[scope.block]]
label = "Favourite colours"
field = "colors"
options = [{{ value = "Café" }}, {{ value = "Tea", checked = true }}]
"##
    )
    .unwrap();

    let spec = FormSpec::from_path(file.path()).unwrap();
    let doc = spec.build().unwrap();
    let config = scoped_config();
    let mut watcher = FieldWatcher::new(&config, &doc).unwrap();
    let mut session = watcher.poll_attach(&config, &doc).unwrap();

    assert_eq!(session.ui_state().chips.labels(), ["Tea"]);
    session.handle(InputEvent::Input("CAFE".to_string()));
    let (ui, _) = session.handle(InputEvent::Enter);
    assert_eq!(ui.chips.labels(), ["Café", "Tea"]);
}
