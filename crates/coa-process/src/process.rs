//! The per-request processing state machine
//!
//! Drives one CoA-Request or Disconnect-Request through the configured
//! policy sections: the "recv" section for the inbound packet type, then
//! the "send" section for the chosen reply type, with a single-shot NAK
//! fallback when the ACK section itself fails.
//!
//! The interpreter engine decides every suspension point. Completing one
//! phase continues synchronously into the next within the same `process`
//! call; the only way back to the caller mid-request is the engine
//! reporting `Suspended`.

use crate::interpreter::{Action, ExecStatus, Interpreter, Rcode};
use crate::reply::{default_reply_code, is_failure_rcode};
use crate::request::{Final, Phase, Request, RequestOrigin};
use crate::sections::{SectionDirection, SectionTable};
use coa_proto::dictionary::Dictionary;
use coa_proto::{attr, code};
use std::net::SocketAddr;
use tracing::{debug, warn};

/// The CoA/Disconnect request processor.
///
/// Borrows the section table and dictionary built at startup; both are
/// immutable and shared read-only across every in-flight request. All
/// per-request mutable state lives on the [`Request`] itself, so one
/// processor value can serve any number of requests.
pub struct CoaProcessor<'a> {
    sections: &'a SectionTable,
    dictionary: &'a dyn Dictionary,
}

impl<'a> CoaProcessor<'a> {
    pub fn new(sections: &'a SectionTable, dictionary: &'a dyn Dictionary) -> Self {
        CoaProcessor {
            sections,
            dictionary,
        }
    }

    /// Advance a request, or deliver an out-of-band event to it.
    ///
    /// The I/O framework calls this once per scheduling opportunity. A
    /// non-[`Action::Run`] action is forwarded to the engine's suspended
    /// execution untouched and the call returns [`Final::Done`] without any
    /// phase progression.
    pub fn process(
        &self,
        request: &mut Request,
        engine: &mut dyn Interpreter,
        action: Action,
    ) -> Final {
        if let Action::Signal(signal) = action {
            engine.signal(request, signal);
            return Final::Done;
        }

        loop {
            match request.phase() {
                Phase::Init => {
                    let Some(alias) = self.dictionary.alias_for_code(request.packet.code) else {
                        warn!(
                            "Failed to find packet type for code {}",
                            request.packet.code
                        );
                        return Final::Fail;
                    };
                    debug!("Received {} ID {}", alias, request.packet.id);

                    let Some(section) =
                        self.sections.find_section(SectionDirection::Recv, alias)
                    else {
                        warn!("Failed to find 'recv {}' section", alias);
                        return Final::Fail;
                    };

                    debug!("Running 'recv {}'", alias);
                    engine.push_section(request, section, Rcode::Noop);
                    request.set_phase(Phase::Recv);
                    // Continues straight into Recv handling; the engine,
                    // not this loop, decides whether to suspend.
                }

                Phase::Recv => {
                    let rcode = match engine.resume(request) {
                        ExecStatus::Stopped => return Final::Done,
                        ExecStatus::Suspended => return Final::Yield,
                        ExecStatus::Done(rcode) => rcode,
                    };

                    if let Some(reply_code) = default_reply_code(request.packet.code, rcode) {
                        request.reply.code = reply_code;
                    }

                    // Policy may override the computed reply code outright.
                    if let Some(value) = request
                        .reply
                        .find_avp(attr::PACKET_TYPE)
                        .and_then(|avp| avp.as_u32())
                    {
                        request.reply.code = value;
                    }

                    let section = self
                        .dictionary
                        .alias_for_code(request.reply.code)
                        .and_then(|alias| {
                            self.sections.find_section(SectionDirection::Send, alias)
                        });

                    let Some(section) = section else {
                        return self.finalize(request);
                    };

                    debug!("Running 'send {}'", section.alias());
                    engine.push_section(request, section, Rcode::Noop);
                    request.set_phase(Phase::Send);
                }

                Phase::Send => {
                    let rcode = match engine.resume(request) {
                        ExecStatus::Stopped => return Final::Done,
                        ExecStatus::Suspended => return Final::Yield,
                        ExecStatus::Done(rcode) => rcode,
                    };

                    let ack = code::ack_of(request.packet.code);
                    if !is_failure_rcode(rcode) || request.reply.code != ack {
                        // Success, or the reply was already a NAK or some
                        // custom code; nothing left to decide.
                        return self.finalize(request);
                    }

                    // The ACK section itself failed: switch the reply to
                    // NAK and run the NAK section, once. If that section
                    // fails too, the guard above no longer matches and its
                    // result stands.
                    if let Some(alias) = self.dictionary.alias_for_code(ack) {
                        warn!(
                            "Failed running 'send {}', trying corresponding NAK section",
                            alias
                        );
                    }

                    request.reply.code = code::nak_of(request.packet.code);

                    let nak_alias = self.dictionary.alias_for_code(request.reply.code);
                    let section = nak_alias.and_then(|alias| {
                        self.sections.find_section(SectionDirection::Send, alias)
                    });

                    let Some(section) = section else {
                        if let Some(alias) = nak_alias {
                            warn!("Not running 'send {}' section as it does not exist", alias);
                        }
                        return self.finalize(request);
                    };

                    debug!("Running 'send {}'", section.alias());
                    engine.push_section(request, section, Rcode::Noop);
                    // Phase stays Send; the next loop iteration resumes
                    // the NAK section.
                }
            }
        }
    }

    /// No further section to run: suppress, swallow, or hand the reply to
    /// the framework for transmission.
    fn finalize(&self, request: &mut Request) -> Final {
        if request.reply.code == code::DO_NOT_RESPOND {
            debug!("Not sending reply to client");
            return Final::Done;
        }

        let peer = match &request.origin {
            // Internally generated request: there is no peer to answer.
            RequestOrigin::Internal => {
                let name = self
                    .dictionary
                    .alias_for_code(request.reply.code)
                    .unwrap_or("Unknown");
                debug!("Sent {} ID {}", name, request.reply.id);
                return Final::Done;
            }
            RequestOrigin::External(peer) => peer,
        };

        // Stamp the configured source address on the reply, keeping the
        // port the listener answers from.
        if let Some(ip) = peer.src_ip_override {
            let port = request.reply.src.map(|addr| addr.port()).unwrap_or(0);
            request.reply.src = Some(SocketAddr::new(ip, port));
        }

        Final::Reply
    }
}
