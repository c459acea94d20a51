//! Record types shared by the back-office screens.
//!
//! Everything here is plain data: the frontend renders it, the mock data
//! layer produces it. No UI or IO dependencies.

pub mod domain;
pub mod enums;
pub mod system;
