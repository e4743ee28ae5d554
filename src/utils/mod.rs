pub mod dates;
pub mod files;

pub use dates::{end_of_month, end_of_yesterday, months_before, start_of_day, start_of_month};
pub use files::validate_file_size;
