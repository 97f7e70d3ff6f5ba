//! Input parsing for Fairway swimlane diagrams.
//!
//! Two concerns live here:
//!
//! - [`table`]: decoding the tabular source (a tab-separated task table
//!   delimited by a `TaskID` header row and a `###END_OF_DATA###` marker)
//!   into ordered [`fairway_core::task::TaskRow`]s.
//! - [`depends`]: the dependency-encoding mini-language used in the table's
//!   `DependsOn` column (`"3"`, `"5:yes"`, `"3,5:yes"`).
//!
//! Both are deliberately tolerant: malformed dependency tokens yield no
//! reference, and individual cell contents are taken as-is. Only the
//! structural markers of the table itself are required.

pub mod depends;
pub mod error;
pub mod table;

pub use depends::{DependencyReference, decode};
pub use error::ParseError;
pub use table::parse_table;
