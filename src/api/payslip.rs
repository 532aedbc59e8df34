use actix_web::{HttpResponse, web};

use crate::error::ApiError;
use crate::model::payslip::{Payslip, SubmitPayslip};
use crate::store::payslip::PayslipStore;

/* =========================
Submit payslip request (employee)
========================= */
#[utoipa::path(
    post,
    path = "/api/payslip",
    request_body(
        content = SubmitPayslip,
        description = "Payslip request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Payslip submitted", body = Object, example = json!({
            "message": "Payslip submitted successfully!",
            "data": {
                "id": 1,
                "employee_name": "Alice Rahman",
                "employee_id": "E1001",
                "email": "alice@example.com",
                "start_month": "2024-01-01",
                "end_month": null,
                "status": "pending",
                "submission_date": "2024-01-05T09:30:00Z"
            }
        })),
        (status = 400, description = "Missing or malformed fields"),
        (status = 500, description = "Database failure")
    ),
    tag = "Payslip"
)]
pub async fn submit_payslip(
    store: web::Data<PayslipStore>,
    payload: web::Json<SubmitPayslip>,
) -> Result<HttpResponse, ApiError> {
    let created = store.create(&payload).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Payslip submitted successfully!",
        "data": created
    })))
}

/* =========================
List all payslip requests (HR)
========================= */
#[utoipa::path(
    get,
    path = "/api/payslips/all",
    responses(
        (status = 200, description = "All payslip requests, pending first, newest first within a status", body = [Payslip]),
        (status = 500, description = "Database failure")
    ),
    tag = "Payslip"
)]
pub async fn list_payslips(store: web::Data<PayslipStore>) -> Result<HttpResponse, ApiError> {
    let payslips = store.list_all().await?;
    Ok(HttpResponse::Ok().json(payslips))
}

/* =========================
Approve payslip request (HR)
========================= */
#[utoipa::path(
    put,
    path = "/api/payslip/approve/{id}",
    params(
        ("id" = i32, Path, description = "ID of the payslip request to approve")
    ),
    responses(
        (status = 200, description = "Payslip approved", body = Object, example = json!({
            "message": "Payslip approved successfully!"
        })),
        (status = 404, description = "No payslip with that id"),
        (status = 500, description = "Database failure")
    ),
    tag = "Payslip"
)]
pub async fn approve_payslip(
    store: web::Data<PayslipStore>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let updated = store.approve(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Payslip approved successfully!",
        "data": updated
    })))
}

/* =========================
Reject payslip request (HR)
========================= */
#[utoipa::path(
    put,
    path = "/api/payslip/reject/{id}",
    params(
        ("id" = i32, Path, description = "ID of the payslip request to reject")
    ),
    responses(
        (status = 200, description = "Payslip rejected", body = Object, example = json!({
            "message": "Payslip rejected successfully!"
        })),
        (status = 404, description = "No payslip with that id"),
        (status = 500, description = "Database failure")
    ),
    tag = "Payslip"
)]
pub async fn reject_payslip(
    store: web::Data<PayslipStore>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let updated = store.reject(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Payslip rejected successfully!",
        "data": updated
    })))
}
