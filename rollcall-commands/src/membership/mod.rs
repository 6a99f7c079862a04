pub mod info;
pub mod weekly;
