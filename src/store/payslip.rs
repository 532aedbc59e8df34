use chrono::NaiveDate;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::model::payslip::{Payslip, PayslipStatus, SubmitPayslip};

const PAYSLIP_COLUMNS: &str =
    "id, employee_name, employee_id, email, password, start_month, end_month, status, submission_date";

/// Owns every statement touching the payslips table. One round trip per
/// operation; atomicity is the database's problem.
#[derive(Clone)]
pub struct PayslipStore {
    pool: PgPool,
}

impl PayslipStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Validates and inserts a submission. The row comes back with the
    /// generated id, the 'pending' default and the server-side timestamp.
    pub async fn create(&self, payload: &SubmitPayslip) -> Result<Payslip, ApiError> {
        let fields = ValidatedSubmission::try_from(payload)?;

        let sql = format!(
            r#"
            INSERT INTO payslips (employee_name, employee_id, email, password, start_month, end_month)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PAYSLIP_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Payslip>(&sql)
            .bind(fields.employee_name)
            .bind(fields.employee_id)
            .bind(fields.email)
            .bind(fields.password)
            .bind(fields.start_month)
            .bind(fields.end_month)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to insert payslip");
                ApiError::Store(e)
            })
    }

    /// Full table, HR review order: pending first, then approved, then
    /// rejected, newest submission first within each group.
    pub async fn list_all(&self) -> Result<Vec<Payslip>, ApiError> {
        let sql = format!(
            r#"
            SELECT {PAYSLIP_COLUMNS} FROM payslips ORDER BY
                CASE status WHEN 'pending' THEN 1 WHEN 'approved' THEN 2 WHEN 'rejected' THEN 3 ELSE 4 END,
                submission_date DESC
            "#
        );

        sqlx::query_as::<_, Payslip>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch payslip list");
                ApiError::Store(e)
            })
    }

    pub async fn approve(&self, id: i32) -> Result<Payslip, ApiError> {
        self.set_status(id, PayslipStatus::Approved).await
    }

    pub async fn reject(&self, id: i32) -> Result<Payslip, ApiError> {
        self.set_status(id, PayslipStatus::Rejected).await
    }

    // Unconditional overwrite: re-approving an approved row rewrites the
    // same status, and there is no transition back to pending.
    async fn set_status(&self, id: i32, status: PayslipStatus) -> Result<Payslip, ApiError> {
        let sql = format!(
            r#"
            UPDATE payslips SET status = $1 WHERE id = $2
            RETURNING {PAYSLIP_COLUMNS}
            "#
        );

        let updated = sqlx::query_as::<_, Payslip>(&sql)
            .bind(status.as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, id, status = status.as_str(), "Failed to update payslip status");
                ApiError::Store(e)
            })?;

        updated.ok_or(ApiError::NotFound)
    }
}

/// The typed shape a submission must reach before any SQL runs. Validation
/// failures here mean no insert was attempted.
#[derive(Debug)]
struct ValidatedSubmission<'a> {
    employee_name: &'a str,
    employee_id: &'a str,
    email: &'a str,
    password: &'a str,
    start_month: NaiveDate,
    end_month: Option<NaiveDate>,
}

impl<'a> TryFrom<&'a SubmitPayslip> for ValidatedSubmission<'a> {
    type Error = ApiError;

    fn try_from(payload: &'a SubmitPayslip) -> Result<Self, ApiError> {
        let employee_name = required(&payload.employee_name)?;
        let employee_id = required(&payload.employee_id)?;
        let email = required(&payload.email)?;
        let password = required(&payload.password)?;
        let start_month = parse_month(required(&payload.start_month)?, "startMonth")?;

        let end_month = match payload.end_month.as_deref() {
            Some(raw) if !raw.is_empty() => Some(parse_month(raw, "endMonth")?),
            _ => None,
        };

        // end_month < start_month is deliberately allowed: the portal has
        // never enforced an ordering between the two.
        Ok(Self {
            employee_name,
            employee_id,
            email,
            password,
            start_month,
            end_month,
        })
    }
}

fn required(value: &Option<String>) -> Result<&str, ApiError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::Validation(
            "All required fields must be provided.".into(),
        )),
    }
}

/// "YYYY-MM" → first calendar day of that month.
fn parse_month(raw: &str, field: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").map_err(|_| {
        ApiError::Validation(format!("{field} must be a month in YYYY-MM format."))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> SubmitPayslip {
        SubmitPayslip {
            employee_name: Some("Alice".into()),
            employee_id: Some("E1".into()),
            email: Some("a@x.com".into()),
            password: Some("p".into()),
            start_month: Some("2024-01".into()),
            end_month: None,
        }
    }

    #[test]
    fn month_is_normalized_to_first_day() {
        assert_eq!(
            parse_month("2024-01", "startMonth").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn month_rejects_non_month_input() {
        assert!(parse_month("2024-13", "startMonth").is_err());
        assert!(parse_month("January 2024", "startMonth").is_err());
        assert!(parse_month("", "startMonth").is_err());
    }

    #[test]
    fn submission_with_all_required_fields_passes() {
        let payload = full_payload();
        let fields = ValidatedSubmission::try_from(&payload).unwrap();
        assert_eq!(fields.employee_name, "Alice");
        assert_eq!(
            fields.start_month,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert!(fields.end_month.is_none());
    }

    #[test]
    fn missing_or_empty_required_field_is_a_validation_error() {
        let cases: [fn(&mut SubmitPayslip); 5] = [
            |p| p.employee_name = None,
            |p| p.employee_id = Some("".into()),
            |p| p.email = Some("   ".into()),
            |p| p.password = None,
            |p| p.start_month = None,
        ];
        for strip in cases {
            let mut payload = full_payload();
            strip(&mut payload);
            let err = ValidatedSubmission::try_from(&payload).unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)));
        }
    }

    #[test]
    fn optional_end_month_is_normalized_when_present() {
        let mut payload = full_payload();
        payload.end_month = Some("2024-03".into());
        let fields = ValidatedSubmission::try_from(&payload).unwrap();
        assert_eq!(
            fields.end_month,
            Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
    }

    #[test]
    fn end_month_before_start_month_is_accepted() {
        let mut payload = full_payload();
        payload.start_month = Some("2024-06".into());
        payload.end_month = Some("2024-02".into());
        assert!(ValidatedSubmission::try_from(&payload).is_ok());
    }
}
