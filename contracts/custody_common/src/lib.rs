#![no_std]

//! Pieces shared by the Oracle and Sportsplex custodians: the owner/admin
//! role model, its audit events, and the client side of the SPX ledger.

pub mod access;
pub mod events;
pub mod ledger;

pub use access::AccessError;
pub use ledger::{LedgerClient, TransferError};
