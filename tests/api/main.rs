mod cors;
mod customers;
mod dashboard;
mod health_check;
