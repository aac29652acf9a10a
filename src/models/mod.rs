pub mod bucket;
pub mod file_format;
pub mod measure;
pub mod record;
pub mod schema;
pub mod sort_mode;
pub mod table;

pub use bucket::Bucket;
pub use file_format::FileFormat;
pub use measure::Measure;
pub use record::Record;
pub use schema::Schema;
pub use sort_mode::SortMode;
pub use table::{LongRow, RawTable, WideRow, WideTable};
