use anyhow::{bail, Result};
use csv::StringRecord;
use std::path::PathBuf;

use crate::process::utils::is_index_artifact;

/// Columns every campaign CSV must carry. `RawRecord` fields follow this order.
pub const REQUIRED_COLUMNS: [&str; 16] = [
    "client_id",
    "age",
    "job",
    "marital",
    "education",
    "credit_default",
    "mortgage",
    "number_contacts",
    "contact_duration",
    "previous_campaign_contacts",
    "previous_outcome",
    "campaign_outcome",
    "month",
    "day",
    "cons_price_idx",
    "euribor_three_months",
];

/// One row of a campaign CSV, every field trimmed but otherwise untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub client_id: String,
    pub age: String,
    pub job: String,
    pub marital: String,
    pub education: String,
    pub credit_default: String,
    pub mortgage: String,
    pub number_contacts: String,
    pub contact_duration: String,
    pub previous_campaign_contacts: String,
    pub previous_outcome: String,
    pub campaign_outcome: String,
    pub month: String,
    pub day: String,
    pub cons_price_idx: String,
    pub euribor_three_months: String,
}

/// Header positions of the required columns, resolved once per CSV file.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    positions: [usize; REQUIRED_COLUMNS.len()],
    /// Index-artifact headers (`Unnamed: 0`, blank) found in the file.
    pub dropped: Vec<String>,
}

impl ColumnIndex {
    /// Look up every required column in `headers`. The first matching header wins.
    pub fn resolve(headers: &StringRecord) -> Result<Self> {
        let dropped: Vec<String> = headers
            .iter()
            .filter(|h| is_index_artifact(h))
            .map(str::to_string)
            .collect();

        let mut positions = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            match headers
                .iter()
                .position(|h| !is_index_artifact(h) && h.trim() == name)
            {
                Some(pos) => *slot = pos,
                None => bail!("missing required column `{}`", name),
            }
        }

        Ok(Self { positions, dropped })
    }

    /// Pull the required fields out of one data row.
    pub fn record(&self, row: &StringRecord) -> RawRecord {
        let mut fields = self
            .positions
            .iter()
            .map(|&pos| row.get(pos).unwrap_or_default().trim().to_string());
        let mut next = || fields.next().unwrap_or_default();

        // field order follows REQUIRED_COLUMNS
        RawRecord {
            client_id: next(),
            age: next(),
            job: next(),
            marital: next(),
            education: next(),
            credit_default: next(),
            mortgage: next(),
            number_contacts: next(),
            contact_duration: next(),
            previous_campaign_contacts: next(),
            previous_outcome: next(),
            campaign_outcome: next(),
            month: next(),
            day: next(),
            cons_price_idx: next(),
            euribor_three_months: next(),
        }
    }
}

/// The rows of the first CSV entry of one archive.
#[derive(Debug)]
pub struct RawTable {
    /// Archive the rows were read from.
    pub archive: PathBuf,
    /// Name of the CSV entry inside the archive.
    pub entry: String,
    pub records: Vec<RawRecord>,
}

/// Every loaded table appended in discovery order.
#[derive(Debug, Default)]
pub struct UnifiedTable {
    pub records: Vec<RawRecord>,
}

impl UnifiedTable {
    pub fn concat<I: IntoIterator<Item = RawTable>>(tables: I) -> Self {
        let mut records = Vec::new();
        for table in tables {
            records.extend(table.records);
        }
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
