pub mod catalog;
pub use catalog::{Catalog, CatalogError, Column, DataType, MemoryCatalog, Schema, TableDesc};

pub mod datum;
pub use datum::{Datum, Tuple};

pub mod function;
pub use function::{FunctionDesc, FunctionInstance, FunctionRegistry, FunctionType};

pub mod eval;
pub use eval::{EvalError, EvalNode, EvalTreeUtil, EvalType, FuncCallEval};

pub mod planner;
pub use planner::{PlannerConfig, PlannerError, PlannerUtil, SortSpec, Target, TupleComparator};
pub use planner::logical::{ExprType, JoinType, LogicalNode};
