pub mod entry;
pub mod summary;
pub mod work_order;
pub mod worker;
