use crate::model::payslip::{Payslip, PayslipStatus, SubmitPayslip};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payslip Portal API",
        version = "1.0.0",
        description = r#"
## Payslip Request Portal

Employees submit payslip requests; HR staff review them.

### 🔹 Endpoints
- **Submit** a payslip request for a month range
- **List** every request, pending first, newest first within a status
- **Approve / Reject** a request by id

### 📦 Response Format
- JSON-based RESTful responses
- Mutations wrap the affected row in `{"message": ..., "data": ...}`

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::payslip::submit_payslip,
        crate::api::payslip::list_payslips,
        crate::api::payslip::approve_payslip,
        crate::api::payslip::reject_payslip
    ),
    components(
        schemas(
            SubmitPayslip,
            Payslip,
            PayslipStatus
        )
    ),
    tags(
        (name = "Payslip", description = "Payslip request lifecycle APIs"),
    )
)]
pub struct ApiDoc;
