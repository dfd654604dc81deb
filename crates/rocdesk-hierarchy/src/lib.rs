//! # rocdesk-hierarchy
//!
//! Read-side resolution across the registry's weak references. Records
//! reference each other by id only; this crate performs the joins at
//! read time and tolerates whatever `delete` left behind — a reference
//! to a missing record is dropped from the result, never an error.

pub mod resolver;

pub use resolver::{
    audits_of_company, companies_of_director, company_overview, dashboard,
    directors_of_company, directors_with_multiple_companies, CompanyOverview, Dashboard,
    MultiDirectorship,
};
