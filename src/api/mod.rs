pub mod payslip;
