pub mod api;
pub mod navigation;
pub mod session;
pub mod toast;
pub mod validation;
pub mod views;
