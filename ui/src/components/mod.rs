pub mod about_view;
pub mod app;
pub mod cart_view;
pub mod confirmation_view;
pub mod footer;
pub mod header;
pub mod home_view;
pub mod listing_view;
pub mod markdown;
pub mod product_card;
pub mod product_controls;
pub mod product_detail;
pub mod quick_view;
pub mod rating;
pub mod session_state;
pub mod share;
pub mod stories_view;
pub mod toast_container;
