// SPDX-License-Identifier: MIT

//! Curated model types for the Teamleader resources this crate wraps.
//!
//! Fields mirror the Focus API response shapes; everything optional in the
//! API is `Option` here, and date/datetime fields stay ISO 8601 strings as
//! returned by the server.

mod common;
mod company;
mod contact;
mod deal;
mod invoice;
mod quotation;

pub use common::{
    Address, AddressEntry, CustomField, DownloadLocation, Email, Money, PaymentTerm, Telephone,
    TypeAndId,
};
pub use company::Company;
pub use contact::Contact;
pub use deal::{Deal, DealPhase, DealSource};
pub use invoice::Invoice;
pub use quotation::Quotation;
