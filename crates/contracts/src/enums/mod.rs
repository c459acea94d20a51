pub mod order_status;
pub mod user_role;
