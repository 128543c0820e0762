pub mod eval_error;
pub use eval_error::*;

pub mod eval_type;
pub use eval_type::*;

pub mod eval_node;
pub use eval_node::*;

pub mod field_eval;
pub use field_eval::*;

pub mod const_eval;
pub use const_eval::*;

pub mod binary_eval;
pub use binary_eval::*;

pub mod func_call_eval;
pub use func_call_eval::*;

pub mod eval_tree_util;
pub use eval_tree_util::*;
