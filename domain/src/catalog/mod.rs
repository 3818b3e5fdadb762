//! Catalog domain - resources and their lifecycle

pub mod entities;
pub mod patch;
pub mod value_objects;
