pub mod scenario;
pub mod util;

pub use util::{parse_seeds, report_timestamp, split_csv};
