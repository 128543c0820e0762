pub mod function_desc;
pub use function_desc::*;

pub mod function;
pub use function::*;

pub mod accumulator;
pub use accumulator::*;

pub mod function_registry;
pub use function_registry::*;

pub mod builtins;
pub use builtins::*;
