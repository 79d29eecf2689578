//! Transmission Serializer
//!
//! Every producer shares one radio. [`serializer::TxSerializer`] orders
//! their messages and enforces the minimum spacing kept by
//! [`gate::SerializerGate`]; [`clock::Clock`] abstracts the time source.

pub mod clock;
pub mod gate;
pub mod serializer;
