pub mod a001_book;
pub mod a002_arts_plan_item;
pub mod common;
