//! Attribute-Value Pairs
//!
//! The processing core only ever reads and writes a handful of well-known
//! attributes, so this is a typed in-memory representation rather than a
//! full dictionary-driven codec.

use thiserror::Error;

/// Well-known attribute numbers consulted by the processing core
pub mod attr {
    /// Packet-Type (internal attribute)
    ///
    /// When present in the reply attribute list, its value replaces the
    /// computed reply code unconditionally. Never appears on the wire.
    pub const PACKET_TYPE: u32 = 1000;
}

#[derive(Error, Debug)]
pub enum AvpError {
    #[error("Attribute value too long: {0} bytes (max 253)")]
    ValueTooLong(usize),
}

/// Attribute value, typed by the dictionary kind of the attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvpValue {
    /// 32-bit unsigned integer value
    Integer(u32),
    /// UTF-8 text value
    String(String),
    /// Opaque octet value
    Octets(Vec<u8>),
}

/// A single attribute-value pair attached to a packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avp {
    /// Dictionary attribute number
    pub attr: u32,
    /// Typed value
    pub value: AvpValue,
}

impl Avp {
    /// Maximum value length (253 bytes per RFC 2865 Section 5)
    pub const MAX_VALUE_LENGTH: usize = 253;

    /// Create an integer attribute
    pub fn integer(attr: u32, value: u32) -> Self {
        Avp {
            attr,
            value: AvpValue::Integer(value),
        }
    }

    /// Create a string attribute
    pub fn string(attr: u32, value: impl Into<String>) -> Result<Self, AvpError> {
        let value = value.into();
        if value.len() > Self::MAX_VALUE_LENGTH {
            return Err(AvpError::ValueTooLong(value.len()));
        }
        Ok(Avp {
            attr,
            value: AvpValue::String(value),
        })
    }

    /// Create an opaque octets attribute
    pub fn octets(attr: u32, value: Vec<u8>) -> Result<Self, AvpError> {
        if value.len() > Self::MAX_VALUE_LENGTH {
            return Err(AvpError::ValueTooLong(value.len()));
        }
        Ok(Avp {
            attr,
            value: AvpValue::Octets(value),
        })
    }

    /// Integer view of the value, if it is an integer
    pub fn as_u32(&self) -> Option<u32> {
        match self.value {
            AvpValue::Integer(v) => Some(v),
            _ => None,
        }
    }
}

/// Find the first pair with the given attribute number
pub fn find_avp(avps: &[Avp], attr: u32) -> Option<&Avp> {
    avps.iter().find(|avp| avp.attr == attr)
}
