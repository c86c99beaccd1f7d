//! Section compilation and lookup
//!
//! At startup the binder walks the virtual server's configuration scope,
//! compiles the sections CoA/Disconnect handling needs, and registers them
//! in an immutable table. At request time the processor only ever borrows
//! from that table; nothing is compiled or mutated once traffic flows.

use crate::config::{RawSection, ServerScope};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Whether a section runs on the way in or on the way out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionDirection {
    Recv,
    Send,
}

impl fmt::Display for SectionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionDirection::Recv => f.write_str("recv"),
            SectionDirection::Send => f.write_str("send"),
        }
    }
}

/// A pre-validated, ready-to-execute policy section.
///
/// The handle is assigned by the engine's compiler and is meaningless to
/// this crate; it exists so the engine can find its own compiled form when
/// the section is pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSection {
    direction: SectionDirection,
    alias: String,
    handle: u64,
}

impl CompiledSection {
    pub fn new(direction: SectionDirection, alias: impl Into<String>, handle: u64) -> Self {
        CompiledSection {
            direction,
            alias: alias.into(),
            handle,
        }
    }

    pub fn direction(&self) -> SectionDirection {
        self.direction
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn handle(&self) -> u64 {
        self.handle
    }
}

/// Section body rejected by the engine's compiler
#[derive(Error, Debug)]
#[error("{0}")]
pub struct CompileError(String);

impl CompileError {
    pub fn new(detail: impl Into<String>) -> Self {
        CompileError(detail.into())
    }
}

/// The engine-side compiler for raw section bodies
pub trait SectionCompiler {
    fn compile(
        &mut self,
        direction: SectionDirection,
        alias: &str,
        raw: &RawSection,
    ) -> Result<CompiledSection, CompileError>;
}

/// Fatal startup errors
#[derive(Error, Debug)]
pub enum InstantiateError {
    #[error("Failed to compile '{direction} {alias}' section: {source}")]
    Compile {
        direction: SectionDirection,
        alias: String,
        #[source]
        source: CompileError,
    },
    #[error("'recv {family}' is configured but the mandatory 'send {alias}' section is missing")]
    MissingSendSection { family: String, alias: String },
}

/// Immutable lookup table of compiled sections, shared read-only across all
/// in-flight requests.
#[derive(Debug, Default)]
pub struct SectionTable {
    sections: HashMap<(SectionDirection, String), Arc<CompiledSection>>,
}

impl SectionTable {
    /// Compiled section for a (direction, alias) pair, if one was bound at
    /// startup
    pub fn find_section(
        &self,
        direction: SectionDirection,
        alias: &str,
    ) -> Option<&Arc<CompiledSection>> {
        self.sections.get(&(direction, alias.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn insert(&mut self, section: CompiledSection) {
        self.sections.insert(
            (section.direction(), section.alias().to_string()),
            Arc::new(section),
        );
    }
}

/// The two request families this module handles: (request, ACK, NAK)
/// aliases.
const FAMILIES: &[(&str, &str, &str)] = &[
    ("CoA-Request", "CoA-ACK", "CoA-NAK"),
    ("Disconnect-Request", "Disconnect-ACK", "Disconnect-NAK"),
];

/// Cross-cutting send sections compiled for every deployment that has them
/// configured, regardless of which families are supported.
const COMMON_SEND: &[&str] = &["Do-Not-Respond", "Protocol-Error"];

/// Compile and register the sections this virtual server needs.
///
/// Per family: the "recv" section is optional (the deployment may simply
/// not support that family), but once it is present the matching ACK and
/// NAK "send" sections are mandatory. Any compilation error is fatal.
pub fn instantiate(
    scope: &ServerScope,
    compiler: &mut dyn SectionCompiler,
) -> Result<SectionTable, InstantiateError> {
    let mut table = SectionTable::default();

    for &(request, ack, nak) in FAMILIES {
        if !compile_optional(scope, compiler, &mut table, SectionDirection::Recv, request)? {
            continue;
        }

        compile_required(scope, compiler, &mut table, request, ack)?;
        compile_required(scope, compiler, &mut table, request, nak)?;
    }

    for &alias in COMMON_SEND {
        compile_optional(scope, compiler, &mut table, SectionDirection::Send, alias)?;
    }

    Ok(table)
}

/// Compile a section if it is configured. Absence is fine; a compile error
/// is not. Returns whether the section was present.
fn compile_optional(
    scope: &ServerScope,
    compiler: &mut dyn SectionCompiler,
    table: &mut SectionTable,
    direction: SectionDirection,
    alias: &str,
) -> Result<bool, InstantiateError> {
    let Some(raw) = scope.section(direction, alias) else {
        return Ok(false);
    };

    let section = compiler
        .compile(direction, alias, raw)
        .map_err(|source| InstantiateError::Compile {
            direction,
            alias: alias.to_string(),
            source,
        })?;

    debug!("Compiled '{} {}' section", direction, alias);
    table.insert(section);
    Ok(true)
}

/// Compile a send section whose presence is mandatory because the family's
/// recv section exists.
fn compile_required(
    scope: &ServerScope,
    compiler: &mut dyn SectionCompiler,
    table: &mut SectionTable,
    family: &str,
    alias: &str,
) -> Result<(), InstantiateError> {
    if !compile_optional(scope, compiler, table, SectionDirection::Send, alias)? {
        return Err(InstantiateError::MissingSendSection {
            family: family.to_string(),
            alias: alias.to_string(),
        });
    }
    Ok(())
}
