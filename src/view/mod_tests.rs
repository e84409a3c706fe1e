use super::*;
use crate::config::ResolvedConfig;
use crate::model::RecordId;
use ratatui::backend::TestBackend;
use std::path::PathBuf;

fn test_config(export_dir: PathBuf) -> ResolvedConfig {
    ResolvedConfig {
        api_base_url: "http://127.0.0.1:1".to_string(),
        page_size: 10,
        default_view: View::CostAnalysis,
        dev_mode: true,
        request_timeout: Duration::from_millis(100),
        export_dir,
        log_file_path: std::env::temp_dir().join("ldash_view_tests.log"),
        no_color: true,
    }
}

fn app() -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    TuiApp::with_terminal(terminal, test_config(std::env::temp_dir().join("ldash_view_tests")))
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn q_and_ctrl_c_quit() {
    let mut app = app();
    assert!(app.handle_key(press(KeyCode::Char('q'))));

    let mut app = self::app();
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.handle_key(ctrl_c));
}

#[test]
fn initial_frame_renders() {
    let mut app = app();
    app.draw().expect("first draw must succeed");
    assert!(!app.app_boundary.is_failed());
    assert!(!app.view_boundary.is_failed());
}

#[test]
fn digits_and_tab_switch_views() {
    let mut app = app();
    app.handle_key(press(KeyCode::Char('2')));
    assert_eq!(app.state.view, View::Suppliers);

    app.handle_key(press(KeyCode::Tab));
    assert_eq!(app.state.view, View::Prediction);

    app.handle_key(press(KeyCode::BackTab));
    assert_eq!(app.state.view, View::Suppliers);

    app.handle_key(press(KeyCode::Char('H')));
    assert_eq!(app.state.view, View::CostAnalysis);
}

#[test]
fn help_overlay_captures_keys() {
    let mut app = app();
    app.handle_key(press(KeyCode::Char('?')));
    assert!(app.help_open);
    app.draw().unwrap();

    // While help is open, q closes it instead of quitting.
    assert!(!app.handle_key(press(KeyCode::Char('q'))));
    assert!(!app.help_open);
}

#[test]
fn search_editing_captures_q() {
    let mut app = app();
    app.handle_key(press(KeyCode::Char('/')));
    assert!(app.state.cost_table.search_editing);

    assert!(!app.handle_key(press(KeyCode::Char('q'))));
    assert_eq!(app.state.cost_table.filter.search_text, "q");

    app.handle_key(press(KeyCode::Backspace));
    assert_eq!(app.state.cost_table.filter.search_text, "");

    app.handle_key(press(KeyCode::Esc));
    assert!(!app.state.cost_table.search_editing);
}

#[test]
fn sort_and_direction_keys_drive_the_table() {
    let mut app = app();
    app.handle_key(press(KeyCode::Char('s')));
    assert_eq!(
        app.state.cost_table.filter.sort_field,
        crate::model::DeliverySortField::Distance
    );
    app.handle_key(press(KeyCode::Char('d')));
    assert_eq!(
        app.state.cost_table.filter.sort_direction,
        pipeline::SortDirection::Asc
    );
}

#[test]
fn vanished_selection_latches_the_view_boundary_only() {
    let mut app = app();
    app.state.view = View::Suppliers;
    // A detail selection pointing at a record no longer in the collection.
    app.state
        .supplier_table
        .select(RecordId::new("ghost-supplier").unwrap());

    app.draw().unwrap();
    assert!(app.view_boundary.is_failed(), "view boundary must latch");
    assert!(
        !app.app_boundary.is_failed(),
        "chrome boundary must stay healthy"
    );

    // While latched, ordinary view keys are swallowed.
    app.handle_key(press(KeyCode::Char('s')));
    assert_eq!(
        app.state.supplier_table.filter.sort_field,
        crate::model::SupplierSortField::Reliability
    );

    // Reset-to-home recovers: boundary cleared, home view, selection gone.
    app.handle_key(press(KeyCode::Char('H')));
    assert!(!app.view_boundary.is_failed());
    assert_eq!(app.state.view, View::CostAnalysis);
    assert!(app.state.supplier_table.selected().is_none());
    app.draw().unwrap();
    assert!(!app.view_boundary.is_failed());
}

#[test]
fn retry_key_clears_a_latched_boundary() {
    let mut app = app();
    app.state.view = View::Suppliers;
    app.state
        .supplier_table
        .select(RecordId::new("ghost-supplier").unwrap());
    app.draw().unwrap();
    assert!(app.view_boundary.is_failed());

    app.handle_key(press(KeyCode::Char('t')));
    assert!(!app.view_boundary.is_failed());
}

#[test]
fn prediction_numeric_focus_keeps_digits() {
    let mut app = app();
    app.state.view = View::Prediction;
    app.state.prediction_form.focus = PredictionField::Weight;

    // '2' must type into the field, not switch to the suppliers view.
    app.handle_key(press(KeyCode::Char('2')));
    assert_eq!(app.state.view, View::Prediction);
    assert_eq!(app.state.prediction_form.weight, "2");

    // On a choice field, digits switch views again.
    app.state.prediction_form.focus = PredictionField::FromZone;
    app.handle_key(press(KeyCode::Char('1')));
    assert_eq!(app.state.view, View::CostAnalysis);
}

#[test]
fn enter_opens_and_esc_closes_supplier_detail() {
    let mut app = app();
    app.state.view = View::Suppliers;
    app.state.suppliers.begin_load(|| {
        Ok(vec![crate::ingest::parse_suppliers(
            r#"[{"supplier": "Acme", "reliability_score": 90}]"#,
        )
        .unwrap()
        .remove(0)])
    });
    while app.state.suppliers.status() == crate::store::LoadStatus::Loading {
        app.state.poll_loads();
    }

    app.handle_key(press(KeyCode::Enter));
    assert_eq!(
        app.state.supplier_table.selected().map(|id| id.as_str()),
        Some("Acme")
    );
    app.draw().unwrap();
    assert!(!app.view_boundary.is_failed());

    app.handle_key(press(KeyCode::Esc));
    assert!(app.state.supplier_table.selected().is_none());
}

#[test]
fn export_writes_header_only_csv_for_empty_collection() {
    let dir = std::env::temp_dir().join("ldash_export_key_test");
    let _ = std::fs::remove_dir_all(&dir);

    let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let mut app = TuiApp::with_terminal(terminal, test_config(dir.clone()));
    app.handle_key(press(KeyCode::Char('e')));

    let status = app.state.status_line.clone().unwrap();
    assert!(status.starts_with("exported "), "unexpected status: {status}");

    let date = chrono::Local::now().date_naive();
    let path = dir.join(pipeline::export_filename("cost-analysis", date));
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1, "header row only");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn export_is_not_offered_on_the_prediction_view() {
    let mut app = app();
    app.state.view = View::Prediction;
    app.handle_key(press(KeyCode::Char('e')));
    let status = app.state.status_line.clone().unwrap();
    assert!(status.contains("nothing to export"));
}
