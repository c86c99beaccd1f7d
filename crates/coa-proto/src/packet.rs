//! In-memory RADIUS packet

use crate::avp::{self, Avp};
use std::net::SocketAddr;

/// One RADIUS message, already decoded by (or awaiting encoding in) the
/// transport layer.
///
/// The inbound request packet is immutable by convention once handed to the
/// processing core; the reply packet is built up incrementally while the
/// request is processed.
#[derive(Debug, Clone)]
pub struct Packet {
    /// Packet code. See [`crate::code`] for the CoA/Disconnect family.
    pub code: u32,
    /// Identifier matching requests to replies
    pub id: u8,
    /// Ordered attribute list
    pub avps: Vec<Avp>,
    /// Source address; `None` for internally generated packets
    pub src: Option<SocketAddr>,
    /// Destination address; `None` for internally generated packets
    pub dst: Option<SocketAddr>,
}

impl Packet {
    pub fn new(code: u32, id: u8) -> Self {
        Packet {
            code,
            id,
            avps: Vec::new(),
            src: None,
            dst: None,
        }
    }

    /// Create the reply shell for a request: same identifier, addresses
    /// swapped, code unset (0) until processing decides it.
    pub fn reply_to(request: &Packet) -> Self {
        Packet {
            code: 0,
            id: request.id,
            avps: Vec::new(),
            src: request.dst,
            dst: request.src,
        }
    }

    pub fn add_avp(&mut self, avp: Avp) {
        self.avps.push(avp);
    }

    /// First attribute with the given number, if any
    pub fn find_avp(&self, attr: u32) -> Option<&Avp> {
        avp::find_avp(&self.avps, attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avp::attr;
    use crate::code;

    #[test]
    fn test_reply_to_swaps_addresses() {
        let mut request = Packet::new(code::COA_REQUEST, 9);
        request.src = Some("10.0.0.2:3799".parse().unwrap());
        request.dst = Some("10.0.0.1:3799".parse().unwrap());

        let reply = Packet::reply_to(&request);
        assert_eq!(reply.code, 0);
        assert_eq!(reply.id, 9);
        assert_eq!(reply.src, request.dst);
        assert_eq!(reply.dst, request.src);
        assert!(reply.avps.is_empty());
    }

    #[test]
    fn test_find_avp() {
        let mut packet = Packet::new(code::COA_REQUEST, 1);
        assert!(packet.find_avp(attr::PACKET_TYPE).is_none());

        packet.add_avp(Avp::integer(attr::PACKET_TYPE, code::COA_NAK));
        let found = packet.find_avp(attr::PACKET_TYPE).unwrap();
        assert_eq!(found.as_u32(), Some(code::COA_NAK));
    }
}
