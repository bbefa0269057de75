pub mod clear;
pub mod delete;
pub mod dispatch;
pub mod list;
pub mod lookup;
pub mod save;
pub mod search;
pub mod words;
