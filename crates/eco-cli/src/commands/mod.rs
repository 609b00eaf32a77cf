pub mod dispatch;
pub mod export;
pub mod schema;
pub mod shared;
pub mod transition;
pub mod validate;
