//! Static catalogs the entity builders draw from
//!
//! Free-text fields of the generated records (names, gap details, test
//! values, recommendations) are picked from these tables.

use crate::models::types::{AbnormalCategory, GapType};

/// Patient names, assigned cyclically by index
pub const PATIENT_NAMES: [&str; 32] = [
    "Ahmed Hassan",
    "Fatima Al-Mansoori",
    "Khalid Bin Saeed",
    "Mariam Al-Zarooni",
    "Omar Al-Thani",
    "Fatima Noor",
    "Khalid Ibrahim",
    "Aisha Mohammed",
    "Hassan Al-Farsi",
    "Noura Al-Ketbi",
    "Mohammed Al-Zaabi",
    "Layla Al-Mazrouei",
    "Abdullah Al-Dhaheri",
    "Sara Al-Blooshi",
    "Rashid Al-Suwaidi",
    "Zayed Al-Nahyan",
    "Hessa Al-Falasi",
    "Saeed Al-Shamsi",
    "Moza Al-Marri",
    "Hamad Al-Muhairi",
    "Shamma Al-Kaabi",
    "Ali Al-Mansouri",
    "Latifa Al-Jaber",
    "Omar Al-Qasimi",
    "Noor Al-Hamadi",
    "Tariq Al-Hashemi",
    "Amna Al-Sayed",
    "Sultan Al-Otaibi",
    "Basma Al-Rawi",
    "Yousuf Al-Bader",
    "Dana Al-Khalidi",
    "Fahad Al-Saud",
];

/// Clinician surnames used for assignments
pub const CLINICIANS: [&str; 4] = ["Al-Rashid", "Kumar", "Hassan", "Patel"];

/// Clinicians eligible for a patient's care team
pub const CARE_TEAM_CLINICIANS: [&str; 3] = ["Al-Rashid", "Kumar", "Hassan"];

/// Name of a patient by generator index
#[must_use]
pub fn patient_name(index: usize) -> &'static str {
    PATIENT_NAMES[index % PATIENT_NAMES.len()]
}

/// Gap details by gap type
#[must_use]
pub const fn gap_details(gap_type: GapType) -> &'static [&'static str] {
    match gap_type {
        GapType::Vaccine => &[
            "Pneumococcal missing",
            "Influenza Overdue",
            "COVID-19 Booster Overdue",
            "Tdap Booster Overdue",
        ],
        GapType::Preventive => &[
            "Colonoscopy Overdue",
            "Mammogram Overdue",
            "Pap Smear Overdue",
            "Annual Wellness Visit",
        ],
        GapType::Diagnostic => &[
            "HbA1c Screening Overdue",
            "Lipid Panel Overdue",
            "Bone Density Scan",
            "Echocardiogram Overdue",
        ],
        GapType::Treatment => &[
            "Statin Therapy Initiation",
            "ACE/ARB Optimization",
            "Beta-Blocker Titration",
        ],
        GapType::Monitoring => &[
            "Blood Pressure Monitoring",
            "Glucose Log Review",
            "Weight Tracking Missing",
        ],
        GapType::Screening => &[
            "Depression Screening",
            "SDOH Screening",
            "Fall Risk Assessment",
        ],
    }
}

/// Medications implicated in safety alerts
pub const MEDICATIONS: [&str; 12] = [
    "Warfarin",
    "Metformin",
    "Lisinopril",
    "Atorvastatin",
    "Amiodarone",
    "Digoxin",
    "Heparin",
    "Morphine",
    "Cisplatin",
    "Rituximab",
    "Furosemide",
    "Spironolactone",
];

/// Safety alert conflict descriptions
pub const SAFETY_CONFLICTS: [&str; 10] = [
    "Concurrent use with nephrotoxic agent",
    "Allergy cross-reactivity detected",
    "Dosage exceeds renal-adjusted limit",
    "CYP3A4 interaction with current regimen",
    "Contraindicated in heart failure",
    "Duplicate therapeutic class",
    "INR > 4.0 with current dosing",
    "Potassium-sparing conflict",
    "QT prolongation risk",
    "Hepatic impairment contraindication",
];

/// Safety alert recommendations
pub const SAFETY_RECOMMENDATIONS: [&str; 6] = [
    "Discontinue and substitute with safer alternative",
    "Reduce dosage and monitor renal function",
    "Add protective co-therapy (PPI / Potassium)",
    "Consult pharmacist for regimen review",
    "Switch to non-interacting agent",
    "Order stat lab panel before next dose",
];

/// Clinical protocols tracked for adherence
pub const PROTOCOLS: [&str; 12] = [
    "HbA1c Monitoring Q3M",
    "Post-MI Beta-Blocker Therapy",
    "Colon Cancer Screening",
    "Annual Wellness Visit",
    "CHF Med Optimization",
    "Lipid Panel Monitoring",
    "Blood Pressure Control Protocol",
    "Diabetic Eye Exam",
    "ACE Inhibitor for CKD",
    "Fall Risk Assessment",
    "Depression Screening PHQ-9",
    "Pneumonia Vaccination",
];

/// Guideline deviation types
pub const DEVIATION_TYPES: [&str; 6] = [
    "Overdue monitoring",
    "Therapy not initiated",
    "Incomplete documentation",
    "Non-formulary substitution",
    "Protocol deviation",
    "Missed assessment window",
];

/// Actions a protocol can require
pub const REQUIRED_ACTIONS: [&str; 5] = [
    "Order lab test",
    "Prescribe medication",
    "Schedule visit",
    "Complete assessment",
    "Update care plan",
];

/// Recorded actual actions
pub const ACTUAL_ACTIONS: [&str; 3] = [
    "Partial compliance",
    "Alternative approach used",
    "Deferred by provider",
];

/// Guideline evidence citations
pub const EVIDENCE_SOURCES: [&str; 5] = [
    "AHA/ACC 2024",
    "ADA Standards 2025",
    "USPSTF Grade A",
    "KDIGO 2024",
    "GOLD 2025",
];

/// Consequences of guideline non-adherence
pub const NON_ADHERENCE_RISKS: [&str; 5] = [
    "Increased readmission risk",
    "Disease progression",
    "Adverse outcome",
    "Quality metric failure",
    "Regulatory non-compliance",
];

/// A test that can produce an abnormal result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestSpec {
    /// Test name
    pub name: &'static str,
    /// Category the test belongs to
    pub category: AbnormalCategory,
    /// Reference range
    pub normal_range: &'static str,
    /// Out-of-range values the generator reports
    pub abnormal_values: &'static [&'static str],
}

const fn test(
    name: &'static str,
    category: AbnormalCategory,
    normal_range: &'static str,
    abnormal_values: &'static [&'static str],
) -> TestSpec {
    TestSpec {
        name,
        category,
        normal_range,
        abnormal_values,
    }
}

/// Every test by category
pub const TESTS: [TestSpec; 25] = [
    test("Troponin I", AbnormalCategory::Lab, "0-0.04 ng/mL", &["0.12 ng/mL", "0.28 ng/mL", "0.08 ng/mL"]),
    test("Creatinine", AbnormalCategory::Lab, "0.7-1.3 mg/dL", &["2.1 mg/dL", "3.4 mg/dL", "1.8 mg/dL"]),
    test("Potassium", AbnormalCategory::Lab, "3.5-5.0 mEq/L", &["5.8 mEq/L", "6.2 mEq/L", "3.1 mEq/L"]),
    test("HbA1c", AbnormalCategory::Lab, "4.0-5.6%", &["8.2%", "9.1%", "7.4%"]),
    test("BNP", AbnormalCategory::Lab, "0-100 pg/mL", &["450 pg/mL", "820 pg/mL", "240 pg/mL"]),
    test("WBC", AbnormalCategory::Lab, "4.5-11.0 K/uL", &["14.2 K/uL", "18.5 K/uL", "2.8 K/uL"]),
    test("Hemoglobin", AbnormalCategory::Lab, "12-17 g/dL", &["8.2 g/dL", "7.1 g/dL", "10.4 g/dL"]),
    test("Platelets", AbnormalCategory::Lab, "150-400 K/uL", &["85 K/uL", "42 K/uL", "520 K/uL"]),
    test("ALT", AbnormalCategory::Lab, "7-56 U/L", &["120 U/L", "245 U/L", "82 U/L"]),
    test("TSH", AbnormalCategory::Lab, "0.4-4.0 mIU/L", &["8.2 mIU/L", "0.1 mIU/L", "12.5 mIU/L"]),
    test("Chest X-Ray", AbnormalCategory::Imaging, "Normal", &["Bilateral infiltrates", "Pleural effusion"]),
    test("CT Abdomen", AbnormalCategory::Imaging, "Normal", &["Mass detected", "Bowel obstruction"]),
    test("MRI Brain", AbnormalCategory::Imaging, "Normal", &["Acute infarct", "Mass lesion"]),
    test("Echocardiogram", AbnormalCategory::Imaging, "EF 55-70%", &["EF 25%", "EF 35%"]),
    test("Bone Density", AbnormalCategory::Imaging, "T-score > -1.0", &["T-score -2.8", "T-score -3.2"]),
    test("Blood Pressure", AbnormalCategory::VitalSigns, "90/60-120/80 mmHg", &["165/105 mmHg", "182/110 mmHg", "78/45 mmHg"]),
    test("Heart Rate", AbnormalCategory::VitalSigns, "60-100 bpm", &["122 bpm", "42 bpm", "138 bpm"]),
    test("SpO2", AbnormalCategory::VitalSigns, "95-100%", &["88%", "91%", "84%"]),
    test("Temperature", AbnormalCategory::VitalSigns, "36.1-37.2°C", &["39.2°C", "38.8°C", "40.1°C"]),
    test("Respiratory Rate", AbnormalCategory::VitalSigns, "12-20 /min", &["28 /min", "32 /min", "8 /min"]),
    test("ECG", AbnormalCategory::Diagnostics, "Normal Sinus", &["ST elevation", "Atrial fibrillation", "Ventricular tachycardia"]),
    test("Pulmonary Function", AbnormalCategory::Diagnostics, "FEV1 > 80%", &["FEV1 42%", "FEV1 55%"]),
    test("Stress Test", AbnormalCategory::Diagnostics, "Normal", &["Ischemic changes", "Exercise intolerance"]),
    test("Sleep Study", AbnormalCategory::Diagnostics, "AHI < 5", &["AHI 32", "AHI 18"]),
    test("EEG", AbnormalCategory::Diagnostics, "Normal", &["Epileptiform activity", "Focal slowing"]),
];

/// Tests belonging to a category, in catalog order
#[must_use]
pub fn tests_in(category: AbnormalCategory) -> Vec<&'static TestSpec> {
    TESTS.iter().filter(|t| t.category == category).collect()
}

/// Conflicts an abnormal result can have with the care plan
pub const CLINICAL_CONFLICTS: [&str; 3] = [
    "Conflicts with current medication regimen",
    "Unexpected given recent treatment",
    "Indicates possible sepsis",
];

/// Interventions recommended for behavioral anomalies
pub const BEHAVIOR_ACTIONS: [&str; 4] = [
    "Schedule pharmacist consult",
    "Care coordinator outreach",
    "Re-education session",
    "Social work referral",
];

/// Behavioral anomaly descriptions
pub const BEHAVIOR_DETAILS: [&str; 6] = [
    "Patient missed 3 consecutive dosing intervals.",
    "Declined recommended follow-up appointment.",
    "Significant drop in portal engagement over 30 days.",
    "Repeated no-shows for scheduled lab work.",
    "Self-discontinued prescribed therapy without consultation.",
    "Refused recommended imaging study.",
];

/// Referral care coordinators
pub const CARE_COORDINATORS: [&str; 4] = ["Sara Al-Harbi", "Omar Patel", "Layla Ahmed", "Zayed Khan"];

/// Reason shown on every generated referral
pub const REFERRAL_REASON: &str =
    "Advanced diagnostic evaluation for persistent clinical symptoms and escalating risk scores.";

/// Clinical summary shown on every generated referral
pub const REFERRAL_SUMMARY: &str = "Patient presents with multiple comorbidities requiring cross-specialty coordination. Documentation complete for baseline, awaiting specialized imaging auth.";

/// Encounter alert response windows
pub const TIME_SENSITIVITY: [&str; 4] = ["<24 hrs", "<72 hrs", "<7 days", "Immediate"];

/// Resources an encounter alert can strain
pub const RESOURCE_IMPACTS: [&str; 4] = [
    "Specialist Slot",
    "Bed Shortage",
    "Referral Backlog",
    "Staffing Load",
];

/// Owners of encounter alerts
pub const ALERT_ASSIGNEES: [&str; 4] = ["Dr. Hassan", "Ops Team", "Care Coord", "Dr. Al-Rashid"];

/// Triage notes shown on every generated encounter alert
pub const TRIAGE_NOTES: &str = "Urgent follow-up required based on recent diagnostic escalation.";
