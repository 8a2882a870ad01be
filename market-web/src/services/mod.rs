//! Wallet connection services

pub mod connector;
pub mod injected;
pub mod notice;
pub mod wallet;

#[cfg(test)]
pub mod testing;
