pub mod abs_impl;
pub use abs_impl::*;

pub mod string_impl;
pub use string_impl::*;

pub mod sum_impl;
pub use sum_impl::*;

pub mod count_impl;
pub use count_impl::*;

pub mod minmax_impl;
pub use minmax_impl::*;
