pub mod challenge;
pub mod config;
pub mod goal;
pub mod motivation;
pub mod portfolio;
pub mod restore;
