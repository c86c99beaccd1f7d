//! RADIUS CoA/Disconnect Request Processing
//!
//! This crate drives a single CoA-Request or Disconnect-Request through the
//! configured policy sections and decides the reply: ACK, NAK, an explicit
//! policy override, or no reply at all.
//!
//! The crate is deliberately free of I/O. The surrounding framework decodes
//! packets, owns sockets and timers, and calls [`CoaProcessor::process`]
//! once per scheduling opportunity; the policy language itself lives behind
//! the [`Interpreter`] trait, which may suspend execution at any point and
//! report [`ExecStatus::Suspended`]. The processor resumes exactly where it
//! left off on the next call.
//!
//! # Example
//!
//! ```rust,ignore
//! use coa_process::{instantiate, Action, CoaProcessor, Final, Request, ServerScope};
//! use coa_proto::StandardDictionary;
//!
//! let scope = ServerScope::from_file("virtual-server.json")?;
//! let sections = instantiate(&scope, &mut compiler)?;
//! let dict = StandardDictionary;
//! let processor = CoaProcessor::new(&sections, &dict);
//!
//! loop {
//!     match processor.process(&mut request, &mut engine, Action::Run) {
//!         Final::Yield => continue,       // engine suspended, come back later
//!         Final::Reply => break,          // encode and transmit request.reply
//!         Final::Done | Final::Fail => break,
//!     }
//! }
//! ```

pub mod config;
pub mod interpreter;
pub mod process;
pub mod reply;
pub mod request;
pub mod sections;

pub use config::{ConfigError, RawSection, ServerScope};
pub use interpreter::{Action, ExecStatus, Interpreter, Rcode, Signal};
pub use process::CoaProcessor;
pub use reply::{default_reply_code, is_failure_rcode};
pub use request::{Final, Peer, Phase, Request, RequestOrigin};
pub use sections::{
    instantiate, CompileError, CompiledSection, InstantiateError, SectionCompiler,
    SectionDirection, SectionTable,
};
