//! Email job builder.

use serde_json::{Map, Value};

use jobhands_protocols::{JobDetail, JobKey};

use super::{base_detail, JobDefinitionBuilder};
use crate::descriptor::JobDescriptor;
use crate::error::DefinitionError;

pub const EMAIL_JOB_TYPE: &str = "email";

const SUBJECT: &str = "subject";
const MESSAGE_BODY: &str = "messageBody";
const TO: &str = "to";
const CC: &str = "cc";
const BCC: &str = "bcc";

/// Builds jobs that send an email.
///
/// `data` must hold a `subject` and `messageBody` string and a non-empty
/// `to` list of addresses; `cc` and `bcc` lists are optional. Other keys
/// are stored alongside. Duplicate identities are rejected. An update
/// overlays the new fields onto the stored data and keeps the stored
/// durability and recovery flags, and the stored description when the
/// update carries none.
#[derive(Debug, Default)]
pub struct EmailJobBuilder;

impl EmailJobBuilder {
    pub fn new() -> Self {
        Self
    }

    fn validate(data: &Map<String, Value>) -> Result<(), DefinitionError> {
        for field in [SUBJECT, MESSAGE_BODY] {
            match data.get(field) {
                None => return Err(DefinitionError::MissingField(field.to_string())),
                Some(Value::String(_)) => {}
                Some(_) => {
                    return Err(DefinitionError::InvalidField {
                        field: field.to_string(),
                        message: "expected a string".to_string(),
                    })
                }
            }
        }

        let to = data
            .get(TO)
            .ok_or_else(|| DefinitionError::MissingField(TO.to_string()))?;
        if Self::address_list(TO, to)?.is_empty() {
            return Err(DefinitionError::InvalidField {
                field: TO.to_string(),
                message: "at least one recipient is required".to_string(),
            });
        }

        for field in [CC, BCC] {
            if let Some(value) = data.get(field) {
                Self::address_list(field, value)?;
            }
        }
        Ok(())
    }

    fn address_list<'a>(field: &str, value: &'a Value) -> Result<Vec<&'a str>, DefinitionError> {
        let invalid = || DefinitionError::InvalidField {
            field: field.to_string(),
            message: "expected a list of email addresses".to_string(),
        };

        let items = value.as_array().ok_or_else(invalid)?;
        items
            .iter()
            .map(|item| match item.as_str() {
                Some(address) if address.contains('@') => Ok(address),
                _ => Err(invalid()),
            })
            .collect()
    }
}

impl JobDefinitionBuilder for EmailJobBuilder {
    fn job_type(&self) -> &str {
        EMAIL_JOB_TYPE
    }

    fn build_job(
        &self,
        key: &JobKey,
        descriptor: &JobDescriptor,
    ) -> Result<JobDetail, DefinitionError> {
        Self::validate(&descriptor.data)?;
        Ok(base_detail(EMAIL_JOB_TYPE, key, descriptor).with_data(descriptor.data.clone()))
    }

    fn merge(
        &self,
        existing: &JobDetail,
        descriptor: &JobDescriptor,
    ) -> Result<JobDetail, DefinitionError> {
        let mut data = existing.data.clone();
        for (field, value) in &descriptor.data {
            data.insert(field.clone(), value.clone());
        }
        Self::validate(&data)?;

        let mut job = base_detail(EMAIL_JOB_TYPE, &existing.key, descriptor)
            .with_data(data)
            .with_durable(existing.durable)
            .with_requests_recovery(existing.requests_recovery);
        if job.description.is_none() {
            job.description = existing.description.clone();
        }
        Ok(job)
    }
}
