//! Shared UI crate for the learner records pages. Views, the record data
//! model and localization live here; platform crates only launch them.

pub mod components;
pub mod core;
pub mod i18n;
pub mod record;
pub mod views;
