pub mod analyze;
pub mod bands;
pub mod batch;
pub mod info;
pub mod validate;
