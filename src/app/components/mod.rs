//! Shared UI components.

pub mod layout;
pub mod nav;
pub mod notification;
pub mod theme;

pub use layout::{Head, Redirect, Shell};
pub use nav::Nav;
pub use notification::{use_auto_dismiss, NotificationBanner};
