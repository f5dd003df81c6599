// SPDX-License-Identifier: MIT

//! Curated resource wrappers over the generic CRUD layer.
//!
//! Each resource derefs to its [`CrudResource`] for `list` / `get` /
//! `create` / `update` / `delete` / `iterate`, and adds the domain actions
//! specific to that Teamleader object.

mod base;
mod companies;
mod contacts;
mod deals;
mod invoices;
mod quotations;

pub use base::{CrudResource, ListOptions, Page};
pub use companies::CompaniesResource;
pub use contacts::ContactsResource;
pub use deals::{DealsResource, LoseOptions};
pub use invoices::InvoicesResource;
pub use quotations::{QuotationSendRequest, QuotationsResource};
