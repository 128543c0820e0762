pub mod expr_type;
pub use expr_type::*;

pub mod scan_node;
pub use scan_node::*;

pub mod selection_node;
pub use selection_node::*;

pub mod projection_node;
pub use projection_node::*;

pub mod group_by_node;
pub use group_by_node::*;

pub mod sort_node;
pub use sort_node::*;

pub mod store_node;
pub use store_node::*;

pub mod join_node;
pub use join_node::*;

pub mod visitor;
pub use visitor::*;

pub mod logical_node;
pub use logical_node::*;
