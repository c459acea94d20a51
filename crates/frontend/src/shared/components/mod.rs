pub mod badge;
pub mod error_banner;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
