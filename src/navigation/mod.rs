//! Dashboard navigation
//!
//! The dashboard shows one tab at a time. List views drill down into an
//! analyzer by selecting a patient, an encounter alert or a referral; an
//! analyzer goes back one level to the list view it belongs to. Selected
//! ids are resolved against the population on demand and may fail to
//! resolve, in which case the analyzer shows its empty state.

use log::{debug, warn};
use pophealth_macros::Vocabulary;

use crate::algorithm::population::Population;
use crate::config::DisplayLimits;
use crate::models::{EncounterAlert, Patient, Referral, Vocabulary};

/// Every tab of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Vocabulary)]
#[vocabulary(name = "tab")]
pub enum Tab {
    /// Population overview
    #[vocabulary(label = "population")]
    Population,
    /// Risk stratification dashboard
    #[default]
    #[vocabulary(label = "dashboard")]
    Dashboard,
    /// Care gaps
    #[vocabulary(label = "caregaps")]
    CareGaps,
    /// Safety guardrails
    #[vocabulary(label = "safety")]
    Safety,
    /// Guideline adherence
    #[vocabulary(label = "guidelines")]
    Guidelines,
    /// Abnormal results
    #[vocabulary(label = "abnormal")]
    Abnormal,
    /// Behavioral anomalies
    #[vocabulary(label = "behavioral")]
    Behavioral,
    /// Continuity of care
    #[vocabulary(label = "continuity")]
    Continuity,
    /// Care program adherence
    #[vocabulary(label = "program")]
    Program,
    /// Encounter and resourcing
    #[vocabulary(label = "encounter")]
    Encounter,
    /// Referral and coordination
    #[vocabulary(label = "referral")]
    Referral,
    /// Trend surveillance
    #[vocabulary(label = "trends")]
    Trends,
    /// Patient risk analyzer
    #[vocabulary(label = "analyzer")]
    Analyzer,
    /// Care gap analyzer
    #[vocabulary(label = "gap-analyzer")]
    GapAnalyzer,
    /// Safety analyzer
    #[vocabulary(label = "safety-analyzer")]
    SafetyAnalyzer,
    /// Guideline analyzer
    #[vocabulary(label = "guideline-analyzer")]
    GuidelineAnalyzer,
    /// Abnormal result analyzer
    #[vocabulary(label = "abnormal-analyzer")]
    AbnormalAnalyzer,
    /// Behavioral analyzer
    #[vocabulary(label = "behavior-analyzer")]
    BehaviorAnalyzer,
    /// Continuity analyzer
    #[vocabulary(label = "continuity-analyzer")]
    ContinuityAnalyzer,
    /// Program analyzer
    #[vocabulary(label = "program-analyzer")]
    ProgramAnalyzer,
    /// Encounter alert analyzer
    #[vocabulary(label = "encounter-analyzer")]
    EncounterAnalyzer,
    /// Referral analyzer
    #[vocabulary(label = "referral-analyzer")]
    ReferralAnalyzer,
}

/// What an analyzer tab shows the details of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// A patient
    Patient,
    /// An encounter alert
    Alert,
    /// A referral
    Referral,
}

impl Tab {
    /// Sidebar title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Population => "Population Dashboard",
            Self::Dashboard => "Risk Stratification",
            Self::CareGaps => "Care Gaps",
            Self::Safety => "Safety Guardrails",
            Self::Guidelines => "Guideline Adherence",
            Self::Abnormal => "Abnormal Results",
            Self::Behavioral => "Behavioral Anomalies",
            Self::Continuity => "Continuity of Care",
            Self::Program => "Care Program Adherence",
            Self::Encounter => "Encounter & Resourcing",
            Self::Referral => "Referral & Coordination",
            Self::Trends => "Trend Surveillance",
            Self::Analyzer => "Patient Risk Analyzer",
            Self::GapAnalyzer => "Care Gap Intelligence Analyzer",
            Self::SafetyAnalyzer => "Safety Guardrail Analyzer",
            Self::GuidelineAnalyzer => "Guideline Adherence Analyzer",
            Self::AbnormalAnalyzer => "Abnormal Result Intelligence Analyzer",
            Self::BehaviorAnalyzer => "Behavioral Anomaly Analyzer",
            Self::ContinuityAnalyzer => "Continuity of Care Analyzer",
            Self::ProgramAnalyzer => "Care Program Analyzer",
            Self::EncounterAnalyzer => "Encounter Alert Analyzer",
            Self::ReferralAnalyzer => "Referral Analyzer",
        }
    }

    /// List view an analyzer returns to, `None` for list views
    #[must_use]
    pub const fn list_view(self) -> Option<Self> {
        match self {
            Self::Analyzer => Some(Self::Dashboard),
            Self::GapAnalyzer => Some(Self::CareGaps),
            Self::SafetyAnalyzer => Some(Self::Safety),
            Self::GuidelineAnalyzer => Some(Self::Guidelines),
            Self::AbnormalAnalyzer => Some(Self::Abnormal),
            Self::BehaviorAnalyzer => Some(Self::Behavioral),
            Self::ContinuityAnalyzer => Some(Self::Continuity),
            Self::ProgramAnalyzer => Some(Self::Program),
            Self::EncounterAnalyzer => Some(Self::Encounter),
            Self::ReferralAnalyzer => Some(Self::Referral),
            _ => None,
        }
    }

    /// Analyzer a list view drills down into, `None` for tabs without one
    #[must_use]
    pub fn analyzer(self) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|tab| tab.list_view() == Some(self))
    }

    /// Whether this is an analyzer tab
    #[must_use]
    pub const fn is_analyzer(self) -> bool {
        self.list_view().is_some()
    }

    /// What this analyzer shows, `None` for list views
    #[must_use]
    pub const fn selection_kind(self) -> Option<SelectionKind> {
        match self {
            Self::EncounterAnalyzer => Some(SelectionKind::Alert),
            Self::ReferralAnalyzer => Some(SelectionKind::Referral),
            tab if tab.is_analyzer() => Some(SelectionKind::Patient),
            _ => None,
        }
    }

    /// Number of records this analyzer's picker offers
    #[must_use]
    pub const fn picker_limit(self, limits: &DisplayLimits) -> Option<usize> {
        match self {
            Self::GapAnalyzer
            | Self::SafetyAnalyzer
            | Self::AbnormalAnalyzer
            | Self::BehaviorAnalyzer
            | Self::ContinuityAnalyzer => Some(limits.picker),
            Self::Analyzer
            | Self::GuidelineAnalyzer
            | Self::ProgramAnalyzer
            | Self::EncounterAnalyzer
            | Self::ReferralAnalyzer => Some(limits.wide_picker),
            _ => None,
        }
    }
}

/// Outcome of resolving a selected id
#[derive(Debug, PartialEq)]
pub enum DetailView<'a, T> {
    /// The id resolved
    Selected(&'a T),
    /// Nothing is selected or the id does not resolve
    NoSelection,
}

impl<T> Clone for DetailView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DetailView<'_, T> {}

impl<'a, T> DetailView<'a, T> {
    fn from_option(record: Option<&'a T>) -> Self {
        record.map_or(Self::NoSelection, Self::Selected)
    }

    /// The resolved record
    #[must_use]
    pub const fn selected(&self) -> Option<&'a T> {
        match self {
            Self::Selected(record) => Some(*record),
            Self::NoSelection => None,
        }
    }

    /// Whether the id resolved
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

/// Active tab and the selected ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Tab on screen
    pub active_tab: Tab,
    /// Patient shown by the patient analyzers
    pub selected_patient_id: Option<String>,
    /// Alert shown by the encounter analyzer
    pub selected_alert_id: Option<String>,
    /// Referral shown by the referral analyzer
    pub selected_referral_id: Option<String>,
}

impl NavigationState {
    /// Start on the risk dashboard with nothing selected
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tabs from the sidebar; selections are kept
    pub fn select_tab(&mut self, tab: Tab) {
        debug!("Switching tab {} -> {}", self.active_tab, tab);
        self.active_tab = tab;
    }

    /// Select a patient and open a patient analyzer
    ///
    /// Tabs that do not show a patient open the patient risk analyzer.
    pub fn drill_down_patient(&mut self, patient_id: impl Into<String>, analyzer: Tab) {
        let analyzer = if analyzer.selection_kind() == Some(SelectionKind::Patient) {
            analyzer
        } else {
            warn!("{analyzer} does not show patients, opening {}", Tab::Analyzer);
            Tab::Analyzer
        };
        self.selected_patient_id = Some(patient_id.into());
        self.select_tab(analyzer);
    }

    /// Select an encounter alert and open its analyzer
    pub fn select_alert(&mut self, alert_id: impl Into<String>) {
        self.selected_alert_id = Some(alert_id.into());
        self.select_tab(Tab::EncounterAnalyzer);
    }

    /// Select a referral and open its analyzer
    pub fn select_referral(&mut self, referral_id: impl Into<String>) {
        self.selected_referral_id = Some(referral_id.into());
        self.select_tab(Tab::ReferralAnalyzer);
    }

    /// Leave an analyzer for its list view, clearing its selection
    ///
    /// Returns `false` when the active tab is not an analyzer.
    pub fn back(&mut self) -> bool {
        let Some(list_view) = self.active_tab.list_view() else {
            return false;
        };

        match self.active_tab.selection_kind() {
            Some(SelectionKind::Patient) => self.selected_patient_id = None,
            Some(SelectionKind::Alert) => self.selected_alert_id = None,
            Some(SelectionKind::Referral) => self.selected_referral_id = None,
            None => {}
        }
        self.select_tab(list_view);
        true
    }

    /// The selected patient
    #[must_use]
    pub fn resolve_patient<'a>(&self, population: &'a Population) -> DetailView<'a, Patient> {
        DetailView::from_option(
            self.selected_patient_id
                .as_deref()
                .and_then(|id| population.patient(id)),
        )
    }

    /// The selected encounter alert
    #[must_use]
    pub fn resolve_alert<'a>(&self, population: &'a Population) -> DetailView<'a, EncounterAlert> {
        DetailView::from_option(
            self.selected_alert_id
                .as_deref()
                .and_then(|id| population.encounter_alert(id)),
        )
    }

    /// The selected referral
    #[must_use]
    pub fn resolve_referral<'a>(&self, population: &'a Population) -> DetailView<'a, Referral> {
        DetailView::from_option(
            self.selected_referral_id
                .as_deref()
                .and_then(|id| population.referral(id)),
        )
    }

    /// The patient the selected referral is for; orphan referrals resolve to nothing
    #[must_use]
    pub fn resolve_referral_patient<'a>(
        &self,
        population: &'a Population,
    ) -> DetailView<'a, Patient> {
        DetailView::from_option(
            self.resolve_referral(population)
                .selected()
                .and_then(|referral| population.patient(&referral.patient_id)),
        )
    }

    /// The patient the selected alert is for; orphan alerts resolve to nothing
    #[must_use]
    pub fn resolve_alert_patient<'a>(&self, population: &'a Population) -> DetailView<'a, Patient> {
        DetailView::from_option(
            self.resolve_alert(population)
                .selected()
                .and_then(|alert| population.patient(&alert.patient_id)),
        )
    }
}

/// Patients offered by a patient analyzer's picker
///
/// The program analyzer only offers enrolled patients.
#[must_use]
pub fn patient_picker<'a>(
    tab: Tab,
    patients: &'a [Patient],
    limits: &DisplayLimits,
) -> Vec<&'a Patient> {
    if tab.selection_kind() != Some(SelectionKind::Patient) {
        return Vec::new();
    }
    let limit = tab.picker_limit(limits).unwrap_or(limits.picker);

    patients
        .iter()
        .filter(|p| tab != Tab::ProgramAnalyzer || !p.care_programs.is_empty())
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels_round_trip() {
        assert_eq!(Tab::VARIANTS.len(), 22);
        assert_eq!("gap-analyzer".parse::<Tab>().unwrap(), Tab::GapAnalyzer);
        assert_eq!(Tab::BehaviorAnalyzer.to_string(), "behavior-analyzer");
    }

    #[test]
    fn test_list_view_and_analyzer_are_inverse() {
        for tab in Tab::VARIANTS.iter().copied().filter(|t| t.is_analyzer()) {
            let list = tab.list_view().unwrap();
            assert!(!list.is_analyzer());
            assert_eq!(list.analyzer(), Some(tab));
        }
        assert_eq!(Tab::Trends.analyzer(), None);
        assert_eq!(Tab::Population.list_view(), None);
    }

    #[test]
    fn test_back_clears_only_its_selection() {
        let mut nav = NavigationState::new();
        nav.drill_down_patient("P10001", Tab::GapAnalyzer);
        nav.select_referral("R-89452");
        assert_eq!(nav.active_tab, Tab::ReferralAnalyzer);

        assert!(nav.back());
        assert_eq!(nav.active_tab, Tab::Referral);
        assert_eq!(nav.selected_referral_id, None);
        assert_eq!(nav.selected_patient_id.as_deref(), Some("P10001"));
        assert!(!nav.back());
    }

    #[test]
    fn test_drill_down_into_non_patient_tab_opens_risk_analyzer() {
        let mut nav = NavigationState::new();
        nav.drill_down_patient("P10001", Tab::Referral);
        assert_eq!(nav.active_tab, Tab::Analyzer);
    }

    #[test]
    fn test_picker_limits() {
        let limits = DisplayLimits::default();
        assert_eq!(Tab::GapAnalyzer.picker_limit(&limits), Some(15));
        assert_eq!(Tab::GuidelineAnalyzer.picker_limit(&limits), Some(20));
        assert_eq!(Tab::Dashboard.picker_limit(&limits), None);
    }
}
