//! Allocation-backed types re-exported from `alloc` so the crate reads the
//! same with and without `std`.

pub type Cow<'a, B> = alloc::borrow::Cow<'a, B>;

pub type Box<T> = alloc::boxed::Box<T>;

pub type Vec<T> = alloc::vec::Vec<T>;

pub type String = alloc::string::String;

pub type Arc<T> = alloc::sync::Arc<T>;
