//! Game recommendation service.
//!
//! Recommends video games similar to three user-supplied titles by comparing
//! genre-flag profiles under cosine, Pearson and euclidean similarity. The
//! pipeline: fuzzy title resolution, profile aggregation, standardization
//! with catalog-fitted statistics, multi-metric scoring and ranking.

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
