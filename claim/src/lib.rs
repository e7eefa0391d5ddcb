//! Claim flow for the airdrop gate.
//!
//! A claim is only submitted once the identity has an eligible verdict and
//! the claim endpoint confirms the address has not already claimed. The
//! contract interaction itself lives behind the narrow [`ClaimGateway`]
//! trait; the HTTP implementation talks to a claim relayer that signs and
//! submits the transaction.

pub mod error;
pub mod flow;
pub mod gateway;

pub use error::ClaimError;
pub use flow::ClaimFlow;
pub use gateway::{ClaimGateway, ClaimReceipt, HttpClaimGateway};
