use anyhow::{Context, Result};
use serde::Serialize;

use crate::process::date_parser::last_contact_date;
use crate::process::raw_table::{RawRecord, UnifiedTable};
use crate::process::utils::flag;
use crate::write::OutputTable;

/// One row of `campaign.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignRecord {
    pub client_id: String,
    pub number_contacts: String,
    pub contact_duration: String,
    pub previous_campaign_contacts: String,
    pub previous_outcome: u8,
    pub campaign_outcome: u8,
    pub last_contact_date: String,
}

impl OutputTable for CampaignRecord {
    const FILE_NAME: &'static str = "campaign.csv";
    const HEADERS: &'static [&'static str] = &[
        "client_id",
        "number_contacts",
        "contact_duration",
        "previous_campaign_contacts",
        "previous_outcome",
        "campaign_outcome",
        "last_contact_date",
    ];
}

impl TryFrom<&RawRecord> for CampaignRecord {
    type Error = anyhow::Error;

    fn try_from(raw: &RawRecord) -> Result<Self> {
        Ok(Self {
            client_id: raw.client_id.clone(),
            number_contacts: raw.number_contacts.clone(),
            contact_duration: raw.contact_duration.clone(),
            previous_campaign_contacts: raw.previous_campaign_contacts.clone(),
            previous_outcome: flag(&raw.previous_outcome, "success"),
            campaign_outcome: flag(&raw.campaign_outcome, "yes"),
            last_contact_date: last_contact_date(&raw.month, &raw.day)?,
        })
    }
}

/// Fails on the first row whose month is not a known abbreviation.
pub fn build_campaign_table(table: &UnifiedTable) -> Result<Vec<CampaignRecord>> {
    table
        .records
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            CampaignRecord::try_from(raw)
                .with_context(|| format!("row {} (client_id {})", idx, raw.client_id))
        })
        .collect()
}
