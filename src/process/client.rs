use serde::Serialize;

use crate::process::raw_table::{RawRecord, UnifiedTable};
use crate::process::utils::{flag, normalize};
use crate::write::OutputTable;

/// One row of `client.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRecord {
    pub client_id: String,
    pub age: String,
    pub job: String,
    pub marital: String,
    /// `None` when the source said `unknown`; written as an empty field.
    pub education: Option<String>,
    pub credit_default: u8,
    pub mortgage: u8,
}

impl OutputTable for ClientRecord {
    const FILE_NAME: &'static str = "client.csv";
    const HEADERS: &'static [&'static str] = &[
        "client_id",
        "age",
        "job",
        "marital",
        "education",
        "credit_default",
        "mortgage",
    ];
}

/// `"Blue-Collar"` → `"blue_collar"`, `"admin."` → `"admin"`.
pub fn normalize_job(raw: &str) -> String {
    normalize(raw).replace('.', "").replace('-', "_")
}

/// `"University.Degree"` → `Some("university_degree")`, `"unknown"` → `None`.
pub fn normalize_education(raw: &str) -> Option<String> {
    let education = normalize(raw).replace('.', "_");
    (education != "unknown").then_some(education)
}

impl From<&RawRecord> for ClientRecord {
    fn from(raw: &RawRecord) -> Self {
        Self {
            client_id: raw.client_id.clone(),
            age: raw.age.clone(),
            job: normalize_job(&raw.job),
            marital: raw.marital.clone(),
            education: normalize_education(&raw.education),
            credit_default: flag(&raw.credit_default, "yes"),
            mortgage: flag(&raw.mortgage, "yes"),
        }
    }
}

pub fn build_client_table(table: &UnifiedTable) -> Vec<ClientRecord> {
    table.records.iter().map(ClientRecord::from).collect()
}
