//!
//! The benchmark history library.
//!

pub mod analysis;
pub mod input;
pub mod model;
pub mod output;
pub mod series;
pub mod util;

pub use crate::analysis::comparison::Comparison;
pub use crate::analysis::results::Results;
pub use crate::analysis::ALL_GROUP_NAME;
pub use crate::input::error::Error as InputError;
pub use crate::input::Input;
pub use crate::model::entry::bench::name::BenchName;
pub use crate::model::entry::bench::range::Range;
pub use crate::model::entry::bench::Bench;
pub use crate::model::entry::commit::person::Person;
pub use crate::model::entry::commit::Commit;
pub use crate::model::entry::tool::Tool;
pub use crate::model::entry::Entry;
pub use crate::model::history::issue::Issue;
pub use crate::model::history::History;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;
pub use crate::series::point::Point;
pub use crate::series::statistics::Statistics;
pub use crate::series::Series;
