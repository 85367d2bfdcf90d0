pub mod header;
pub mod notification_bar;
pub mod ui;

pub use header::Header;
pub use notification_bar::NotificationBar;
