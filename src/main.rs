use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;
use pophealth::algorithm::metrics::{
    AbnormalResultStats, BehavioralStats, CareGapStats, ContinuityStats, DashboardStats,
    EncounterStats, GuidelineStats, PopulationOverview, ProgramStats, ReferralStats,
    SafetyStats, flatten_records,
};
use pophealth::filter::{FilterState, apply_filter, display_page};
use pophealth::utils::logging::{log_operation_complete, log_operation_start};
use pophealth::{DisplayLimits, GeneratorConfig, Population, PopulationBuilder};

/// Generate a synthetic population and report every dashboard view
#[derive(Debug, Parser)]
#[command(name = "pophealth", version, about)]
struct Cli {
    /// Generator configuration file (JSON); defaults apply without one
    config: Option<PathBuf>,

    /// Dashboard filter file (JSON)
    #[arg(long, value_name = "PATH")]
    filters: Option<PathBuf>,

    /// Write the generated population to this JSON file
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Seed overriding the configuration
    #[arg(long)]
    seed: Option<u64>,

    /// Draw a progress bar while generating
    #[arg(long)]
    progress: bool,
}

fn load_config(cli: &Cli) -> anyhow::Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(config)
}

fn load_filters(cli: &Cli) -> anyhow::Result<FilterState> {
    let Some(path) = &cli.filters else {
        return Ok(FilterState::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read filters from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse filters from {}", path.display()))
}

/// Print the first `limit` rows of a filtered view
fn print_table<T>(title: &str, rows: &[T], limit: usize, row: impl Fn(&T) -> String) {
    let page = display_page(rows, limit);
    println!("\n{title} (showing {} of {})", page.len(), rows.len());
    for record in page {
        println!("  {}", row(record));
    }
}

fn report(
    population: &Population,
    filters: &FilterState,
    limits: &DisplayLimits,
) -> anyhow::Result<()> {
    let patients = population.patients();

    let all: Vec<_> = patients.iter().collect();
    println!("{}", PopulationOverview::compute(&all, limits.top_n).summary());

    let stratified = apply_filter(patients, &filters.patient_query()?);
    let dashboard = DashboardStats::compute(&stratified);
    info!(
        "Risk stratification: {} patients, {} high risk ({}%), average score {}",
        dashboard.total, dashboard.high_risk_count, dashboard.high_risk_percent, dashboard.avg_score
    );
    print_table("Risk stratification", &stratified, limits.dashboard, |p| {
        format!("{} {} {} {:.1}", p.id, p.name, p.risk_level, p.risk_score)
    });

    let gap_patients = apply_filter(patients, &filters.care_gap_query()?);
    let gaps = CareGapStats::compute(&gap_patients);
    info!(
        "Care gaps: {} gaps, {} critical, most common {}",
        gaps.total_gaps, gaps.critical_gaps, gaps.most_common
    );
    print_table("Care gaps", &gap_patients, limits.patient_table, |p| {
        format!("{} {} {} open gaps", p.id, p.name, p.active_gaps.len())
    });

    let safety_patients = apply_filter(patients, &filters.safety_query()?);
    let safety = SafetyStats::compute(&safety_patients);
    info!(
        "Safety: {} alerts, {} critical, {} drug interactions",
        safety.total_alerts, safety.critical, safety.drug_interactions
    );
    print_table("Safety guardrails", &safety_patients, limits.patient_table, |p| {
        format!("{} {} {} alerts", p.id, p.name, p.safety_alerts.len())
    });

    let guideline_patients = apply_filter(patients, &filters.guideline_query()?);
    let guidelines = GuidelineStats::compute(&guideline_patients);
    info!(
        "Guidelines: {} cases, {}% compliant",
        guidelines.total_cases, guidelines.compliant_rate
    );
    print_table("Guideline adherence", &guideline_patients, limits.list, |p| {
        format!("{} {} compliance {}", p.id, p.name, p.compliance_score)
    });

    let results = flatten_records(patients, |p| p.abnormal_results.as_slice());
    let abnormal_rows = apply_filter(&results, &filters.abnormal_result_query()?);
    let abnormal = AbnormalResultStats::compute(&abnormal_rows, limits.top_n);
    info!(
        "Abnormal results: {} results, {} critical ({}%), {} pending",
        abnormal.total, abnormal.critical, abnormal.critical_percent, abnormal.pending
    );
    print_table("Abnormal results", &abnormal_rows, limits.list, |r| {
        format!("{} {} {} {}", r.patient.name, r.record.test_name, r.record.value, r.record.severity)
    });

    let flags = flatten_records(patients, |p| p.behavioral_anomalies.as_slice());
    let flag_rows = apply_filter(&flags, &filters.behavioral_query()?);
    let behavioral = BehavioralStats::compute(&flag_rows, patients);
    info!(
        "Behavioral: {} flags, {}% on low-engagement patients",
        behavioral.total_flags, behavioral.high_risk_percent
    );
    print_table("Behavioral anomalies", &flag_rows, limits.list, |f| {
        format!("{} {} {}", f.patient.name, f.record.behavior_type, f.record.severity)
    });

    let transitions = flatten_records(patients, |p| p.transitions.as_slice());
    let transition_rows = apply_filter(&transitions, &filters.continuity_query()?);
    let continuity = ContinuityStats::compute(&transition_rows);
    info!(
        "Continuity: {} transitions, {} high risk, coordination {}",
        continuity.active_transitions, continuity.high_risk_count, continuity.avg_score
    );
    print_table("Continuity of care", &transition_rows, limits.list, |t| {
        format!("{} {} {}", t.patient.name, t.record.transition_type, t.record.risk_flag)
    });

    let programs = flatten_records(patients, |p| p.care_programs.as_slice());
    let program_rows = apply_filter(&programs, &filters.program_query()?);
    let program = ProgramStats::compute(&program_rows);
    info!(
        "Programs: {} enrollments, {}% completed, {} at risk",
        program.total, program.completion_rate, program.at_risk
    );
    print_table("Care programs", &program_rows, limits.list, |p| {
        format!("{} {} {}%", p.patient.name, p.record.program_type, p.record.adherence_percent)
    });

    let alerts = apply_filter(population.encounter_alerts(), &filters.encounter_query()?);
    let encounter = EncounterStats::compute(&alerts);
    info!(
        "Encounters: {} alerts, {} critical, {} urgent visits",
        encounter.active_count, encounter.critical, encounter.urgent_visits
    );
    print_table("Encounter alerts", &alerts, limits.list, |a| {
        format!("{} {} {} {}", a.id, a.patient_name, a.alert_type, a.severity)
    });

    let referrals = apply_filter(population.referrals(), &filters.referral_query()?);
    let referral = ReferralStats::compute(&referrals);
    info!(
        "Referrals: {} referrals, {} pending authorization, {}% completed",
        referral.total, referral.pending_auth, referral.completion_rate
    );
    print_table("Referrals", &referrals, limits.list, |r| {
        format!("{} {} {} {}", r.id, r.patient_name, r.specialty, r.status)
    });

    let orphans = population.orphans();
    if !orphans.is_empty() {
        info!(
            "{} referrals and {} encounter alerts reference unknown patients",
            orphans.referrals.len(),
            orphans.encounter_alerts.len()
        );
    }

    Ok(())
}

fn export(population: &Population, path: &Path) -> anyhow::Result<()> {
    log_operation_start("Exporting population to", &path.display().to_string());
    let start = Instant::now();

    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, population)
        .with_context(|| format!("Failed to write population to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    log_operation_complete(
        "exported",
        "patients",
        population.patients().len(),
        Some(start.elapsed()),
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let filters = load_filters(&cli)?;
    info!("{config}");

    let mut builder =
        PopulationBuilder::new(config).context("Invalid generator configuration")?;
    if cli.progress {
        builder = builder.with_progress();
    }
    let population = builder.build();
    info!("Generated {}", population.summary());

    report(&population, &filters, &DisplayLimits::default())?;

    if let Some(path) = &cli.export {
        export(&population, path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_positional_config_and_flags() {
        let cli = Cli::try_parse_from([
            "pophealth", "cfg.json", "--seed", "7", "--export", "out.json", "--progress",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.export, Some(PathBuf::from("out.json")));
        assert!(cli.filters.is_none());
        assert!(cli.progress);

        let config = load_config(&Cli::try_parse_from(["pophealth", "--seed", "11"]).unwrap())
            .unwrap();
        assert_eq!(config.seed, Some(11));
    }

    #[test]
    fn test_cli_rejects_unknown_flags_and_bad_seeds() {
        assert!(Cli::try_parse_from(["pophealth", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["pophealth", "--seed", "abc"]).is_err());
        assert!(Cli::try_parse_from(["pophealth", "--export"]).is_err());
    }

    #[test]
    fn test_export_writes_complete_json() {
        let config = GeneratorConfig {
            patient_count: 8,
            referral_count: 4,
            encounter_alert_count: 3,
            ..GeneratorConfig::seeded(5)
        };
        let population = PopulationBuilder::new(config).unwrap().build();
        let path =
            std::env::temp_dir().join(format!("pophealth-export-{}.json", std::process::id()));

        export(&population, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let restored: Population = serde_json::from_str(&contents).unwrap();
        assert_eq!(restored.patients(), population.patients());
        assert_eq!(restored.referrals(), population.referrals());
        assert_eq!(restored.encounter_alerts(), population.encounter_alerts());
    }

    #[test]
    fn test_report_accepts_small_limits() {
        let limits = DisplayLimits {
            dashboard: 1,
            patient_table: 1,
            list: 1,
            ..DisplayLimits::default()
        };
        let population = PopulationBuilder::new(GeneratorConfig {
            patient_count: 5,
            referral_count: 2,
            encounter_alert_count: 2,
            ..GeneratorConfig::seeded(3)
        })
        .unwrap()
        .build();
        assert!(report(&population, &FilterState::default(), &limits).is_ok());
    }
}
