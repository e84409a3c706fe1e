use super::*;
use crate::model::RecordId;
use crate::store::LoadStatus;

#[test]
fn default_view_is_cost_analysis() {
    let state = AppState::new(View::default(), 10);
    assert_eq!(state.view, View::CostAnalysis);
}

#[test]
fn view_cycle_wraps_both_ways() {
    let mut view = View::CostAnalysis;
    for _ in 0..View::ALL.len() {
        view = view.next();
    }
    assert_eq!(view, View::CostAnalysis);
    assert_eq!(View::CostAnalysis.prev(), View::Heatmap);
    assert_eq!(View::Heatmap.next(), View::CostAnalysis);
}

#[test]
fn slug_round_trips() {
    for view in View::ALL {
        assert_eq!(View::from_slug(view.slug()), Some(view));
    }
    assert_eq!(View::from_slug("nonsense"), None);
}

#[test]
fn leaving_a_view_discards_its_transient_state() {
    let mut state = AppState::new(View::Suppliers, 10);
    state.supplier_table.push_search_char('q');
    state.supplier_table.select(RecordId::new("supplier-1").unwrap());
    state.suppliers.begin_load(|| Ok(Vec::new()));

    state.set_view(View::CostAnalysis);

    assert_eq!(state.supplier_table.filter.search_text, "");
    assert!(state.supplier_table.selected().is_none());
    assert_eq!(state.suppliers.status(), LoadStatus::Idle);
}

#[test]
fn switching_to_current_view_keeps_state() {
    let mut state = AppState::new(View::CostAnalysis, 10);
    state.cost_table.push_search_char('x');
    state.set_view(View::CostAnalysis);
    assert_eq!(state.cost_table.filter.search_text, "x");
}

#[test]
fn other_views_survive_a_switch() {
    let mut state = AppState::new(View::CostAnalysis, 10);
    state.supplier_table.push_search_char('s');

    state.set_view(View::Heatmap);

    // Only the view being left resets; suppliers was never entered.
    assert_eq!(state.supplier_table.filter.search_text, "s");
    assert_eq!(state.cost_table.filter.search_text, "");
}

#[test]
fn go_home_returns_to_cost_analysis_and_resets_the_left_view() {
    let mut state = AppState::new(View::Prediction, 10);
    state.prediction_form.step_choice(true);
    state.go_home();
    assert_eq!(state.view, View::CostAnalysis);
    assert!(state.prediction_form.from_zone.is_none());
}

#[test]
fn set_view_clears_status_line() {
    let mut state = AppState::new(View::CostAnalysis, 10);
    state.status_line = Some("exported".to_string());
    state.set_view(View::Suppliers);
    assert!(state.status_line.is_none());
}
