//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the document,
//! index and not found pages.

pub mod doc_list;
pub mod footer;
pub mod layout;
pub mod nav;
