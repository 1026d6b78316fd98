// Question Bank: static interview questions with search and facet filters.

pub mod filter;
pub mod fixtures;
pub mod handlers;
pub mod models;
