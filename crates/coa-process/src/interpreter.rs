//! Policy interpreter interface
//!
//! The policy language is an external collaborator. The processor pushes
//! compiled sections onto it, resumes it, and forwards signals to it; it
//! never looks inside. Suspension is entirely the engine's decision.

use crate::request::Request;
use crate::sections::CompiledSection;

/// Policy result codes
///
/// Marked non-exhaustive: engines may grow new result codes, and the reply
/// code resolver must treat anything it does not recognize as a failure.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rcode {
    /// Module succeeded
    Ok,
    /// Module failed
    Fail,
    /// Request was refused
    Reject,
    /// Module has handled the request itself, including the reply code
    Handled,
    /// Request was malformed from the module's point of view
    Invalid,
    /// The user account is locked out
    Userlock,
    /// The module found nothing applicable
    Notfound,
    /// Module did nothing
    Noop,
    /// Module succeeded and updated the request
    Updated,
}

/// Outcome of resuming the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecStatus {
    /// The engine has no result yet; call again after an external event
    Suspended,
    /// The request's execution was stopped from outside (client gone,
    /// processing aborted)
    Stopped,
    /// The pushed section ran to completion with this result
    Done(Rcode),
}

/// Out-of-band events forwarded to a suspended execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The request was cancelled
    Cancel,
    /// The request timed out
    Timeout,
    /// A duplicate of the request arrived
    DupDetected,
}

/// What the I/O framework is asking the processor to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Advance processing
    Run,
    /// Deliver an event to the currently suspended execution
    Signal(Signal),
}

/// The opaque policy execution engine
///
/// One engine instance serves one request at a time; the framework
/// guarantees calls are sequential and non-overlapping per request.
pub trait Interpreter {
    /// Begin executing a compiled section on behalf of `request`.
    ///
    /// `default` is the result the section yields if it runs to completion
    /// without any module setting a result.
    fn push_section(&mut self, request: &mut Request, section: &CompiledSection, default: Rcode);

    /// Resume the most recently pushed execution
    fn resume(&mut self, request: &mut Request) -> ExecStatus;

    /// Forward an out-of-band event to the suspended execution
    fn signal(&mut self, request: &mut Request, signal: Signal);
}
