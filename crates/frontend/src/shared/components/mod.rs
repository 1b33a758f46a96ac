pub mod card_animated;
pub mod service_logo;
pub mod ui;
