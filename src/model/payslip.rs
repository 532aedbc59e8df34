use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PayslipStatus {
    Pending,
    Approved,
    Rejected,
}

impl PayslipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayslipStatus::Pending => "pending",
            PayslipStatus::Approved => "approved",
            PayslipStatus::Rejected => "rejected",
        }
    }
}

// Status lives as VARCHAR in the table; the typed enum exists only
// inside the application, so conversion happens at the sqlx boundary.
impl sqlx::Type<sqlx::Postgres> for PayslipStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for PayslipStatus {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let text = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(text.parse()?)
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Payslip {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Alice Rahman")]
    pub employee_name: String,
    #[schema(example = "E1001")]
    pub employee_id: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Stored as received; never written to logs or responses.
    #[serde(skip_serializing)]
    #[schema(write_only)]
    pub password: String,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub start_month: NaiveDate,
    #[schema(example = "2024-03-01", format = "date", value_type = Option<String>)]
    pub end_month: Option<NaiveDate>,
    #[schema(example = "pending")]
    pub status: PayslipStatus,
    #[schema(example = "2024-01-05T09:30:00Z", format = "date-time", value_type = String)]
    pub submission_date: DateTime<Utc>,
}

/// Submission payload. Every field is optional at the serde layer so that
/// a missing field and an empty field fail the same way, with one message.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayslip {
    #[schema(example = "Alice Rahman")]
    pub employee_name: Option<String>,
    #[schema(example = "E1001")]
    pub employee_id: Option<String>,
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    #[schema(example = "secret")]
    pub password: Option<String>,
    /// Calendar month, "YYYY-MM".
    #[schema(example = "2024-01")]
    pub start_month: Option<String>,
    /// Calendar month, "YYYY-MM". Optional.
    #[schema(example = "2024-03")]
    pub end_month: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_maps_to_lowercase_text() {
        assert_eq!(PayslipStatus::Pending.as_str(), "pending");
        assert_eq!(PayslipStatus::Approved.as_str(), "approved");
        assert_eq!(PayslipStatus::Rejected.as_str(), "rejected");
        assert_eq!(PayslipStatus::Rejected.to_string(), "rejected");
    }

    #[test]
    fn status_parses_from_stored_text() {
        assert_eq!("pending".parse::<PayslipStatus>().unwrap(), PayslipStatus::Pending);
        assert_eq!("approved".parse::<PayslipStatus>().unwrap(), PayslipStatus::Approved);
        assert!("cancelled".parse::<PayslipStatus>().is_err());
    }

    #[test]
    fn password_is_not_serialized() {
        let row = Payslip {
            id: 7,
            employee_name: "Alice".into(),
            employee_id: "E1".into(),
            email: "a@x.com".into(),
            password: "hunter2".into(),
            start_month: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_month: None,
            status: PayslipStatus::Pending,
            submission_date: Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["status"], "pending");
        assert_eq!(json["start_month"], "2024-01-01");
        assert_eq!(json["end_month"], serde_json::Value::Null);
    }

    #[test]
    fn submit_payload_accepts_camel_case_and_missing_fields() {
        let payload: SubmitPayslip = serde_json::from_value(serde_json::json!({
            "employeeName": "Alice",
            "employeeId": "E1",
            "email": "a@x.com",
            "password": "p",
            "startMonth": "2024-01"
        }))
        .unwrap();

        assert_eq!(payload.employee_name.as_deref(), Some("Alice"));
        assert_eq!(payload.start_month.as_deref(), Some("2024-01"));
        assert!(payload.end_month.is_none());
    }
}
