use serde::Serialize;

use crate::process::raw_table::{RawRecord, UnifiedTable};
use crate::write::OutputTable;

/// One row of `economics.csv`. Values pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EconomicsRecord {
    pub client_id: String,
    pub cons_price_idx: String,
    pub euribor_three_months: String,
}

impl OutputTable for EconomicsRecord {
    const FILE_NAME: &'static str = "economics.csv";
    const HEADERS: &'static [&'static str] =
        &["client_id", "cons_price_idx", "euribor_three_months"];
}

impl From<&RawRecord> for EconomicsRecord {
    fn from(raw: &RawRecord) -> Self {
        Self {
            client_id: raw.client_id.clone(),
            cons_price_idx: raw.cons_price_idx.clone(),
            euribor_three_months: raw.euribor_three_months.clone(),
        }
    }
}

pub fn build_economics_table(table: &UnifiedTable) -> Vec<EconomicsRecord> {
    table.records.iter().map(EconomicsRecord::from).collect()
}
