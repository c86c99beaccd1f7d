//! The per-request unit of work

use coa_proto::Packet;
use std::net::{IpAddr, SocketAddr};

/// Processing phase, persisted on the request so that re-entry after a
/// suspension resumes at the right point.
///
/// Phases only ever advance (`Init` → `Recv` → `Send`) within one request
/// lifecycle; the NAK fallback re-runs a different section while staying in
/// `Send`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Not yet dispatched to a policy section
    Init,
    /// Executing the "recv" section for the inbound packet type
    Recv,
    /// Executing a "send" section for the chosen reply type
    Send,
}

/// The transport peer an external request came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peer {
    /// Address the request arrived from
    pub addr: SocketAddr,
    /// Configured source address to stamp on the reply, overriding the
    /// listener address. Works around broken DSR setups and similar
    /// routing issues.
    pub src_ip_override: Option<IpAddr>,
}

/// Where a request came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOrigin {
    /// Received from a real transport peer; a reply can be sent
    External(Peer),
    /// Generated inside the server; there is no one to answer
    Internal,
}

/// One CoA/Disconnect request being processed.
///
/// Created by the I/O framework before the first `process` call, mutated
/// only by the processor and the interpreter engine it drives, and dropped
/// by the framework once a terminal outcome is returned. Exactly one
/// `process` call is in flight per request at any time.
#[derive(Debug)]
pub struct Request {
    /// The inbound packet; treated as immutable
    pub packet: Packet,
    /// The reply being built; code 0 until processing decides it
    pub reply: Packet,
    /// Origin of the request
    pub origin: RequestOrigin,
    phase: Phase,
}

impl Request {
    /// Request received from a transport peer
    pub fn new_external(packet: Packet, peer: Peer) -> Self {
        let reply = Packet::reply_to(&packet);
        Request {
            packet,
            reply,
            origin: RequestOrigin::External(peer),
            phase: Phase::Init,
        }
    }

    /// Request generated inside the server itself
    pub fn new_internal(packet: Packet) -> Self {
        let reply = Packet::reply_to(&packet);
        Request {
            packet,
            reply,
            origin: RequestOrigin::Internal,
            phase: Phase::Init,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_internal(&self) -> bool {
        matches!(self.origin, RequestOrigin::Internal)
    }

    /// Advance the phase. Phases never regress.
    pub(crate) fn set_phase(&mut self, phase: Phase) {
        debug_assert!(phase >= self.phase, "phase must not regress");
        self.phase = phase;
    }
}

/// Terminal (or suspension) classification returned to the I/O framework.
///
/// Communicated by return value only; never stored on the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Final {
    /// Nothing further to do: reply suppressed, internal request, or the
    /// execution was stopped from outside
    Done,
    /// The engine suspended; call `process` again later with the same state
    Yield,
    /// The reply packet is ready to encode and transmit
    Reply,
    /// Unrecoverable for this request; drop it
    Fail,
}

#[cfg(test)]
mod tests {
    use super::*;
    use coa_proto::code;

    fn peer() -> Peer {
        Peer {
            addr: "192.0.2.10:3799".parse().unwrap(),
            src_ip_override: None,
        }
    }

    #[test]
    fn test_new_external_starts_in_init() {
        let request = Request::new_external(Packet::new(code::COA_REQUEST, 3), peer());
        assert_eq!(request.phase(), Phase::Init);
        assert!(!request.is_internal());
        assert_eq!(request.reply.code, 0);
        assert_eq!(request.reply.id, 3);
    }

    #[test]
    fn test_new_internal() {
        let request = Request::new_internal(Packet::new(code::DISCONNECT_REQUEST, 1));
        assert!(request.is_internal());
    }

    #[test]
    fn test_phase_ordering() {
        assert!(Phase::Init < Phase::Recv);
        assert!(Phase::Recv < Phase::Send);
    }
}
