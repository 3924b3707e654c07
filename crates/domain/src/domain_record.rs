use crate::date::parse_date_to_timestamp_millis;
use crate::expiry::{days_remaining, lifetime_progress_percentage};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// How important it is to keep a `DomainRecord` renewed. The dashboard
/// uses it to group records into domains, VPS and other services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Low,
    #[serde(other)]
    Medium,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "Domain",
            Self::Medium => "VPS",
            Self::Low => "Other",
        }
    }
}

// Absent, `null` and unknown priorities all fall back to the default
fn deserialize_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Priority>::deserialize(deserializer)?.unwrap_or_default())
}

// `null` reads as an empty string, numbers and booleans as their JSON text
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!("expected a string, found {}", other))),
    }
}

/// A tracked domain (or VPS, or any other renewable service).
///
/// Dates are kept as the strings the user entered and are only checked
/// when they are used, so a record with a bad date can still be listed,
/// edited and deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    /// Unique name of the record within the domain list
    pub domain: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub registration_date: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub expiration_date: String,
    /// Name of the registrar or provider
    #[serde(default, deserialize_with = "deserialize_text")]
    pub system: String,
    /// Link to the registrar or provider
    #[serde(rename = "systemURL", default, deserialize_with = "deserialize_text")]
    pub system_url: String,
    #[serde(default, deserialize_with = "deserialize_priority")]
    pub priority: Priority,
}

#[derive(Error, Debug, PartialEq)]
pub enum DomainRecordError {
    #[error("The domain name must not be empty")]
    EmptyDomainName,
    #[error("The {field} `{value}` is not a valid date, expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("The registrar url `{0}` is not a valid http or https url")]
    InvalidSystemUrl(String),
}

/// Where a `DomainRecord` is in its registration period at a given time
#[derive(Debug, Clone, PartialEq)]
pub struct DomainLifetime {
    pub days_remaining: i64,
    pub expired: bool,
    /// Elapsed share of the registration period in percent
    pub progress_percentage: f64,
}

impl DomainRecord {
    /// Checks the fields that are required before a record is persisted
    pub fn validate(&self) -> Result<(), DomainRecordError> {
        if self.domain.trim().is_empty() {
            return Err(DomainRecordError::EmptyDomainName);
        }
        self.expires_at()?;
        if !self.registration_date.trim().is_empty() {
            self.registered_at()?;
        }
        if !self.system_url.trim().is_empty() {
            match url::Url::parse(&self.system_url) {
                Ok(url) if ["https", "http"].contains(&url.scheme()) => (),
                _ => {
                    return Err(DomainRecordError::InvalidSystemUrl(
                        self.system_url.clone(),
                    ))
                }
            }
        }
        Ok(())
    }

    /// Expiry timestamp in millis, midnight UTC of the expiration date
    pub fn expires_at(&self) -> Result<i64, DomainRecordError> {
        parse_date_to_timestamp_millis(&self.expiration_date).map_err(|_| {
            DomainRecordError::InvalidDate {
                field: "expiration date",
                value: self.expiration_date.clone(),
            }
        })
    }

    pub fn registered_at(&self) -> Result<i64, DomainRecordError> {
        parse_date_to_timestamp_millis(&self.registration_date).map_err(|_| {
            DomainRecordError::InvalidDate {
                field: "registration date",
                value: self.registration_date.clone(),
            }
        })
    }

    pub fn days_remaining(&self, now: i64) -> Result<i64, DomainRecordError> {
        Ok(days_remaining(self.expires_at()?, now))
    }

    pub fn lifetime(&self, now: i64) -> Result<DomainLifetime, DomainRecordError> {
        let expires_at = self.expires_at()?;
        // Without a registration date nothing is known about the elapsed
        // period except whether it is over
        let progress_percentage = match self.registered_at() {
            Ok(registered_at) => lifetime_progress_percentage(registered_at, expires_at, now),
            Err(_) if now > expires_at => 100.0,
            Err(_) => 0.0,
        };
        Ok(DomainLifetime {
            days_remaining: days_remaining(expires_at, now),
            expired: now > expires_at,
            progress_percentage,
        })
    }
}
