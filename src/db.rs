use sqlx::postgres::{PgPool, PgPoolOptions};

const CREATE_PAYSLIPS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS payslips (
        id SERIAL PRIMARY KEY,
        employee_name VARCHAR(100) NOT NULL,
        employee_id VARCHAR(10) NOT NULL,
        email VARCHAR(100) NOT NULL,
        password VARCHAR(100) NOT NULL,
        start_month DATE NOT NULL,
        end_month DATE,
        status VARCHAR(20) DEFAULT 'pending',
        submission_date TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP
    )
"#;

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// One-shot round trip so bad credentials fail at startup, not on the
/// first request.
pub async fn check_connectivity(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Idempotent; runs before the listener binds.
pub async fn create_payslips_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PAYSLIPS_TABLE).execute(pool).await?;
    Ok(())
}
