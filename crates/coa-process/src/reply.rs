//! Reply code resolution
//!
//! Pure mapping from a policy result code to the default reply code. The
//! explicit Packet-Type override is applied by the processor after this
//! mapping, never here.

use crate::interpreter::Rcode;
use coa_proto::code;

/// Default reply code for an inbound code and a recv-section result.
///
/// `None` means the policy result was `Handled`: the reply code is left
/// exactly as policy set it. Every result code this crate has never heard
/// of maps to NAK, so new engine result codes fail safe.
pub fn default_reply_code(inbound_code: u32, rcode: Rcode) -> Option<u32> {
    match rcode {
        Rcode::Noop | Rcode::Notfound | Rcode::Ok | Rcode::Updated => {
            Some(code::ack_of(inbound_code))
        }
        Rcode::Handled => None,
        // Fail, Invalid, Reject, Userlock, and anything unrecognized
        _ => Some(code::nak_of(inbound_code)),
    }
}

/// Whether a send-section result counts as a failure for the purposes of
/// the NAK fallback.
pub fn is_failure_rcode(rcode: Rcode) -> bool {
    !matches!(
        rcode,
        Rcode::Handled | Rcode::Noop | Rcode::Notfound | Rcode::Ok | Rcode::Updated
    )
}
