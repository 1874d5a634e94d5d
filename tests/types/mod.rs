mod error_details;
mod error_item;
mod merge;
mod rendering;

#[cfg(feature = "serde")]
mod serialize;
