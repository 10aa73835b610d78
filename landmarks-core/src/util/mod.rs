pub mod form;
pub mod image;
pub mod validate;
