pub mod data_type;
pub use data_type::*;

pub mod column;
pub use column::*;

pub mod schema;
pub use schema::*;

pub mod table_desc;
pub use table_desc::*;

pub mod catalog_error;
pub use catalog_error::*;

pub mod catalog;
pub use catalog::*;
