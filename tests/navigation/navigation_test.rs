//! Tests for tab navigation and detail resolution against a population

use pophealth::navigation::{DetailView, NavigationState, Tab, patient_picker};
use pophealth::{DisplayLimits, Vocabulary};

use crate::utils::test_population;

#[test]
fn test_drill_down_and_back() {
    let population = test_population();
    let mut nav = NavigationState::new();
    assert_eq!(nav.active_tab, Tab::Dashboard);

    nav.select_tab(Tab::CareGaps);
    nav.drill_down_patient("P10042", Tab::GapAnalyzer);
    assert_eq!(nav.active_tab, Tab::GapAnalyzer);

    let patient = nav.resolve_patient(&population).selected().unwrap();
    assert_eq!(patient.id, "P10042");

    assert!(nav.back());
    assert_eq!(nav.active_tab, Tab::CareGaps);
    assert_eq!(nav.resolve_patient(&population), DetailView::NoSelection);

    assert!(!nav.back());
    assert_eq!(nav.active_tab, Tab::CareGaps);
}

#[test]
fn test_drill_down_into_list_view_opens_patient_analyzer() {
    let mut nav = NavigationState::new();
    nav.drill_down_patient("P10001", Tab::Referral);
    assert_eq!(nav.active_tab, Tab::Analyzer);
    assert_eq!(nav.selected_patient_id.as_deref(), Some("P10001"));
}

#[test]
fn test_unknown_ids_resolve_to_no_selection() {
    let population = test_population();
    let mut nav = NavigationState::new();

    nav.drill_down_patient("P99999", Tab::Analyzer);
    assert!(!nav.resolve_patient(&population).is_selected());

    nav.select_alert("A0");
    assert_eq!(nav.resolve_alert(&population), DetailView::NoSelection);
    assert_eq!(nav.resolve_alert_patient(&population), DetailView::NoSelection);

    nav.select_referral("R-0");
    assert_eq!(nav.resolve_referral(&population), DetailView::NoSelection);
}

#[test]
fn test_orphan_referral_has_no_patient() {
    let population = test_population();
    let mut nav = NavigationState::new();

    nav.select_referral("R-89852");
    assert_eq!(nav.active_tab, Tab::ReferralAnalyzer);
    let referral = nav.resolve_referral(&population).selected().unwrap();
    assert_eq!(referral.patient_id, "P10400");
    assert_eq!(nav.resolve_referral_patient(&population), DetailView::NoSelection);

    nav.select_referral("R-89452");
    let patient = nav.resolve_referral_patient(&population).selected().unwrap();
    assert_eq!(patient.id, "P10000");
}

#[test]
fn test_alert_resolves_its_patient() {
    let population = test_population();
    let mut nav = NavigationState::new();

    nav.select_alert("A8721");
    assert_eq!(nav.active_tab, Tab::EncounterAnalyzer);
    let alert = nav.resolve_alert(&population).selected().unwrap();
    let patient = nav.resolve_alert_patient(&population).selected().unwrap();
    assert_eq!(alert.patient_id, patient.id);

    assert!(nav.back());
    assert_eq!(nav.active_tab, Tab::Encounter);
    assert!(nav.selected_alert_id.is_none());
}

#[test]
fn test_pickers_respect_limits() {
    let population = test_population();
    let limits = DisplayLimits::default();

    assert_eq!(
        patient_picker(Tab::GapAnalyzer, population.patients(), &limits).len(),
        limits.picker
    );
    assert_eq!(
        patient_picker(Tab::Analyzer, population.patients(), &limits).len(),
        limits.wide_picker
    );

    let enrolled = patient_picker(Tab::ProgramAnalyzer, population.patients(), &limits);
    assert!(!enrolled.is_empty());
    assert!(enrolled.iter().all(|p| !p.care_programs.is_empty()));

    assert!(patient_picker(Tab::ReferralAnalyzer, population.patients(), &limits).is_empty());
    assert!(patient_picker(Tab::Trends, population.patients(), &limits).is_empty());
}

#[test]
fn test_every_tab_parses_from_its_label() {
    for tab in Tab::VARIANTS {
        assert_eq!(tab.label().parse::<Tab>().unwrap(), *tab);
        assert!(!tab.title().is_empty());
    }
}
