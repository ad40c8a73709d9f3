//! Jeepney journey planner server.
//!
//! A web application that answers: "which jeepneys do I take to get
//! from here to there?"

pub mod cache;
pub mod catalog;
pub mod directions;
pub mod domain;
pub mod planner;
pub mod web;
