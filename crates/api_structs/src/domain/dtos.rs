use renewal_keeper_domain::{DomainLifetime, DomainRecord, Priority};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainDTO {
    pub domain: String,
    #[serde(default)]
    pub registration_date: String,
    pub expiration_date: String,
    #[serde(default)]
    pub system: String,
    #[serde(rename = "systemURL", default)]
    pub system_url: String,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl DomainDTO {
    pub fn new(record: DomainRecord) -> Self {
        Self {
            domain: record.domain,
            registration_date: record.registration_date,
            expiration_date: record.expiration_date,
            system: record.system,
            system_url: record.system_url,
            priority: Some(record.priority),
        }
    }

    pub fn into_record(self) -> DomainRecord {
        DomainRecord {
            domain: self.domain.trim().to_string(),
            registration_date: self.registration_date.trim().to_string(),
            expiration_date: self.expiration_date.trim().to_string(),
            system: self.system,
            system_url: self.system_url.trim().to_string(),
            priority: self.priority.unwrap_or_default(),
        }
    }
}

/// A `DomainDTO` together with where it stands at the time of the request
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DomainWithStatusDTO {
    #[serde(flatten)]
    pub domain: DomainDTO,
    /// `None` when the expiration date cannot be read
    pub days_remaining: Option<i64>,
    pub expired: Option<bool>,
}

impl DomainWithStatusDTO {
    pub fn new(record: DomainRecord, lifetime: Option<DomainLifetime>) -> Self {
        Self {
            domain: DomainDTO::new(record),
            days_remaining: lifetime.as_ref().map(|l| l.days_remaining),
            expired: lifetime.map(|l| l.expired),
        }
    }
}
