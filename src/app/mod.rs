pub mod dispatch;
pub mod interactive;
pub mod view;
