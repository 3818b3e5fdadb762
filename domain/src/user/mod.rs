//! User ledger domain

pub mod entities;
