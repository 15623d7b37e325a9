//! Application module

pub mod cli;
pub mod manual;
pub mod startup;
