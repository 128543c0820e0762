pub mod logical;

pub mod target;
pub use target::*;

pub mod sort_spec;
pub use sort_spec::*;

pub mod planner_error;
pub use planner_error::*;

pub mod planner_config;
pub use planner_config::*;

pub mod planner_util;
pub use planner_util::*;

pub mod node_path;
pub use node_path::*;

pub mod schema_refresh;
pub mod tree_edit;
pub mod node_search;
pub mod column_refs;
pub mod two_phase;
pub mod join_qual;

pub mod tuple_comparator;
pub use tuple_comparator::*;
