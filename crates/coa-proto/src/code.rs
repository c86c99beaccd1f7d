//! RADIUS packet codes for the CoA/Disconnect family
//!
//! Codes are carried as `u32` rather than a closed enum: reply codes are
//! derived arithmetically from the inbound code (ACK = code + 1,
//! NAK = code + 2) and policy may override the reply code with values this
//! crate has never heard of. A closed enum would reject exactly the traffic
//! this module exists to pass through.

/// Disconnect-Request (40) - RFC 5176
pub const DISCONNECT_REQUEST: u32 = 40;
/// Disconnect-ACK (41) - RFC 5176
pub const DISCONNECT_ACK: u32 = 41;
/// Disconnect-NAK (42) - RFC 5176
pub const DISCONNECT_NAK: u32 = 42;
/// CoA-Request (43) - RFC 5176
pub const COA_REQUEST: u32 = 43;
/// CoA-ACK (44) - RFC 5176
pub const COA_ACK: u32 = 44;
/// CoA-NAK (45) - RFC 5176
pub const COA_NAK: u32 = 45;
/// Protocol-Error (52) - RFC 7930
pub const PROTOCOL_ERROR: u32 = 52;

/// Internal sentinel: the reply is suppressed entirely.
///
/// Placed outside the one-byte wire code range so no decoded packet can
/// ever carry it; only policy can set it.
pub const DO_NOT_RESPOND: u32 = 256;

/// Positive acknowledgement code for a request code
pub fn ack_of(code: u32) -> u32 {
    code + 1
}

/// Negative acknowledgement code for a request code
pub fn nak_of(code: u32) -> u32 {
    code + 2
}
