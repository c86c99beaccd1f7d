//! Packet code dictionary
//!
//! Maps numeric packet codes to the symbolic aliases used to name
//! configuration sections ("recv CoA-Request", "send CoA-NAK", ...), and
//! back. The processing core takes the dictionary as an explicit capability
//! so tests can substitute their own tables.

/// Code ⇄ alias lookup service
pub trait Dictionary {
    /// Symbolic alias for a numeric packet code
    fn alias_for_code(&self, code: u32) -> Option<&str>;

    /// Numeric packet code for a symbolic alias
    fn code_for_alias(&self, alias: &str) -> Option<u32>;
}

/// The fixed RFC 5176 / RFC 7930 table, plus the internal reply-suppression
/// sentinel. Immutable; safe to share across all in-flight requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDictionary;

impl Dictionary for StandardDictionary {
    fn alias_for_code(&self, code: u32) -> Option<&str> {
        match code {
            crate::code::DISCONNECT_REQUEST => Some("Disconnect-Request"),
            crate::code::DISCONNECT_ACK => Some("Disconnect-ACK"),
            crate::code::DISCONNECT_NAK => Some("Disconnect-NAK"),
            crate::code::COA_REQUEST => Some("CoA-Request"),
            crate::code::COA_ACK => Some("CoA-ACK"),
            crate::code::COA_NAK => Some("CoA-NAK"),
            crate::code::PROTOCOL_ERROR => Some("Protocol-Error"),
            crate::code::DO_NOT_RESPOND => Some("Do-Not-Respond"),
            _ => None,
        }
    }

    fn code_for_alias(&self, alias: &str) -> Option<u32> {
        match alias {
            "Disconnect-Request" => Some(crate::code::DISCONNECT_REQUEST),
            "Disconnect-ACK" => Some(crate::code::DISCONNECT_ACK),
            "Disconnect-NAK" => Some(crate::code::DISCONNECT_NAK),
            "CoA-Request" => Some(crate::code::COA_REQUEST),
            "CoA-ACK" => Some(crate::code::COA_ACK),
            "CoA-NAK" => Some(crate::code::COA_NAK),
            "Protocol-Error" => Some(crate::code::PROTOCOL_ERROR),
            "Do-Not-Respond" => Some(crate::code::DO_NOT_RESPOND),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code;

    #[test]
    fn test_alias_round_trip() {
        let dict = StandardDictionary;
        for code in [
            code::DISCONNECT_REQUEST,
            code::DISCONNECT_ACK,
            code::DISCONNECT_NAK,
            code::COA_REQUEST,
            code::COA_ACK,
            code::COA_NAK,
            code::PROTOCOL_ERROR,
            code::DO_NOT_RESPOND,
        ] {
            let alias = dict.alias_for_code(code).unwrap();
            assert_eq!(dict.code_for_alias(alias), Some(code));
        }
    }

    #[test]
    fn test_unknown_code_has_no_alias() {
        let dict = StandardDictionary;
        assert_eq!(dict.alias_for_code(1), None);
        assert_eq!(dict.alias_for_code(99), None);
    }

    #[test]
    fn test_unknown_alias_has_no_code() {
        let dict = StandardDictionary;
        assert_eq!(dict.code_for_alias("Access-Request"), None);
    }
}
