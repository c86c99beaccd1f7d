//! RADIUS CoA/Disconnect Protocol Data Model
//!
//! This crate provides the in-memory data model for RADIUS
//! Change-of-Authorization and Disconnect messages as defined in RFC 5176,
//! plus the dictionary lookups that map numeric packet codes to their
//! symbolic names.
//!
//! Wire encoding and decoding is deliberately absent: packets arrive here
//! already decoded by the transport layer, and replies leave as structured
//! values for the transport layer to encode.
//!
//! # Example
//!
//! ```rust
//! use coa_proto::{code, Packet};
//! use coa_proto::dictionary::{Dictionary, StandardDictionary};
//!
//! let dict = StandardDictionary;
//! assert_eq!(dict.alias_for_code(code::COA_REQUEST), Some("CoA-Request"));
//!
//! let request = Packet::new(code::COA_REQUEST, 7);
//! let mut reply = Packet::reply_to(&request);
//! reply.code = code::ack_of(request.code);
//! assert_eq!(reply.code, code::COA_ACK);
//! ```

pub mod avp;
pub mod code;
pub mod dictionary;
pub mod packet;

pub use avp::{attr, Avp, AvpError, AvpValue};
pub use dictionary::{Dictionary, StandardDictionary};
pub use packet::Packet;
