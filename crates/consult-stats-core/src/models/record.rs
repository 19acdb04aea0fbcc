//! Consultation record models.

use serde::{Deserialize, Serialize};

/// One patient's consultation entry as found in the input document.
///
/// Every attribute may be absent or null. Use the accessor methods rather
/// than the raw fields: they collapse absent, null and empty strings into
/// `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRecord {
    /// Demographic details
    #[serde(default)]
    pub patient_details: Option<PatientDetails>,
    /// Contact number as entered (may carry a country code)
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Prescription data for the consultation
    #[serde(default)]
    pub consultation_data: Option<ConsultationData>,
}

/// Patient demographics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientDetails {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// ISO-8601 timestamp, e.g. `1990-04-12T00:00:00.000000Z`
    #[serde(default)]
    pub birth_date: Option<String>,
    /// Single-letter code ("M", "F", ...)
    #[serde(default)]
    pub gender: Option<String>,
}

/// Prescription block of a consultation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationData {
    #[serde(default)]
    pub medicines: Option<Vec<Medicine>>,
}

/// A single prescribed medicine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    /// Name as prescribed; compared by exact string
    #[serde(default)]
    pub medicine_name: Option<String>,
    /// Whether the prescription is currently active
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl Medicine {
    /// Create a named medicine entry.
    pub fn new(name: impl Into<String>, is_active: bool) -> Self {
        Self {
            medicine_name: Some(name.into()),
            is_active: Some(is_active),
        }
    }

    /// Name of the medicine, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        non_empty(self.medicine_name.as_deref())
    }

    /// Active flag; absent or null counts as inactive.
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }
}

impl ConsultationRecord {
    pub fn first_name(&self) -> Option<&str> {
        self.details_field(|d| d.first_name.as_deref())
    }

    pub fn last_name(&self) -> Option<&str> {
        self.details_field(|d| d.last_name.as_deref())
    }

    pub fn birth_date(&self) -> Option<&str> {
        self.details_field(|d| d.birth_date.as_deref())
    }

    pub fn gender(&self) -> Option<&str> {
        self.details_field(|d| d.gender.as_deref())
    }

    pub fn phone_number(&self) -> Option<&str> {
        non_empty(self.phone_number.as_deref())
    }

    /// Prescribed medicines; empty when the block is absent.
    pub fn medicines(&self) -> &[Medicine] {
        self.consultation_data
            .as_ref()
            .and_then(|c| c.medicines.as_deref())
            .unwrap_or(&[])
    }

    /// Number of medicine entries on this record.
    pub fn medicine_count(&self) -> usize {
        self.medicines().len()
    }

    fn details_field<'a>(
        &'a self,
        get: impl FnOnce(&'a PatientDetails) -> Option<&'a str>,
    ) -> Option<&'a str> {
        non_empty(self.patient_details.as_ref().and_then(get))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "patientDetails": {
                "firstName": "Asha",
                "lastName": "Rao",
                "birthDate": "1990-04-12T00:00:00.000000Z",
                "gender": "F",
                "_id": "ignored"
            },
            "phoneNumber": "+919876543210",
            "consultationData": {
                "medicines": [
                    {"medicineName": "Paracetamol", "isActive": true},
                    {"medicineName": "Ibuprofen", "isActive": false}
                ]
            }
        }"#;

        let record: ConsultationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.first_name(), Some("Asha"));
        assert_eq!(record.gender(), Some("F"));
        assert_eq!(record.phone_number(), Some("+919876543210"));
        assert_eq!(record.medicine_count(), 2);
        assert!(record.medicines()[0].active());
        assert!(!record.medicines()[1].active());
    }

    #[test]
    fn test_empty_and_null_fields_are_missing() {
        let json = r#"{
            "patientDetails": {"firstName": "", "lastName": null},
            "phoneNumber": null,
            "consultationData": {"medicines": null}
        }"#;

        let record: ConsultationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.first_name(), None);
        assert_eq!(record.last_name(), None);
        assert_eq!(record.birth_date(), None);
        assert_eq!(record.phone_number(), None);
        assert!(record.medicines().is_empty());
    }

    #[test]
    fn test_empty_object() {
        let record: ConsultationRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, ConsultationRecord::default());
        assert_eq!(record.medicine_count(), 0);
    }

    #[test]
    fn test_medicine_without_flag_is_inactive() {
        let med: Medicine = serde_json::from_str(r#"{"medicineName": "Aspirin"}"#).unwrap();
        assert_eq!(med.name(), Some("Aspirin"));
        assert!(!med.active());
    }
}
