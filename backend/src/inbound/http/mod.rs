//! HTTP inbound adapter exposing the portfolio content as REST endpoints.

pub mod about;
pub mod contact;
pub mod content_dto;
pub mod dashboard;
pub mod error;
pub mod experience;
pub mod health;
pub mod hero;
pub mod outcome;
pub mod page_cache;
pub mod portfolio;
pub mod projects;
pub mod routes;
pub mod schemas;
pub mod skills;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod validation;
