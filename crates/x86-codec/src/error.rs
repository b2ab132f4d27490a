//! Decode and encode error types.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::instruction::Instruction;

/// Why a single instruction could not be decoded.
///
/// Every variant is local to one instruction: a scanner may skip one byte
/// and try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DecodeError {
    /// The byte source ran out before the instruction was complete.
    TruncatedInput {
        /// Address of the first byte of the instruction.
        ip: u64,
        /// Bytes consumed before the source ran dry.
        consumed: usize,
    },

    /// No template matches the opcode bytes.
    InvalidOpcode {
        /// Address of the first byte of the instruction.
        ip: u64,
        /// Short description of the failed check.
        reason: &'static str,
    },

    /// Prefixes that cannot be combined (e.g. `66` before VEX, LOCK on a
    /// register destination).
    InvalidPrefixCombination {
        /// Address of the first byte of the instruction.
        ip: u64,
        /// Short description of the conflict.
        reason: &'static str,
    },

    /// The instruction exists but not in the current processor mode.
    InvalidModeForInstruction {
        /// Address of the first byte of the instruction.
        ip: u64,
        /// Mode width in bits.
        code_size: u32,
    },

    /// The instruction would exceed the architectural 15-byte limit.
    InstructionTooLong {
        /// Address of the first byte of the instruction.
        ip: u64,
    },
}

impl DecodeError {
    /// Address of the instruction that failed.
    pub fn ip(&self) -> u64 {
        match *self {
            DecodeError::TruncatedInput { ip, .. }
            | DecodeError::InvalidOpcode { ip, .. }
            | DecodeError::InvalidPrefixCombination { ip, .. }
            | DecodeError::InvalidModeForInstruction { ip, .. }
            | DecodeError::InstructionTooLong { ip } => ip,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::TruncatedInput { ip, consumed } => {
                write!(
                    f,
                    "{:#x}: truncated input after {} byte(s)",
                    ip, consumed
                )
            }
            DecodeError::InvalidOpcode { ip, reason } => {
                write!(f, "{:#x}: invalid opcode: {}", ip, reason)
            }
            DecodeError::InvalidPrefixCombination { ip, reason } => {
                write!(f, "{:#x}: invalid prefix combination: {}", ip, reason)
            }
            DecodeError::InvalidModeForInstruction { ip, code_size } => {
                write!(
                    f,
                    "{:#x}: instruction is not valid in {}-bit mode",
                    ip, code_size
                )
            }
            DecodeError::InstructionTooLong { ip } => {
                write!(f, "{:#x}: instruction exceeds 15 bytes", ip)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Why an instruction record could not be encoded.
///
/// Nothing is written to the sink when an error is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EncodeError {
    /// An operand has a kind or register class the form cannot encode.
    UnsupportedOperandKind {
        /// Offending record.
        instruction: Box<Instruction>,
        /// Operand index.
        operand: usize,
        /// What the form expects.
        expected: &'static str,
        /// What the record holds.
        found: String,
    },

    /// An immediate, register number or attribute does not fit its field.
    OperandOutOfRange {
        /// Offending record.
        instruction: Box<Instruction>,
        /// Operand index.
        operand: usize,
        /// Value that did not fit.
        value: i128,
        /// Minimum allowed value.
        min: i128,
        /// Maximum allowed value.
        max: i128,
    },

    /// The operand combination has no encoding for this form and mode.
    NoEncodingForOperands {
        /// Offending record.
        instruction: Box<Instruction>,
        /// Description of the rejected combination.
        detail: String,
    },

    /// The branch target is not reachable with the form's displacement.
    BranchTargetOutOfRange {
        /// Offending record.
        instruction: Box<Instruction>,
        /// Absolute target.
        target: u64,
        /// Required displacement from the next instruction.
        displacement: i64,
        /// Largest reachable displacement.
        max: i64,
    },

    /// The byte sink refused the bytes.
    Sink {
        /// Offending record.
        instruction: Box<Instruction>,
        /// Sink failure description.
        detail: String,
    },
}

impl EncodeError {
    /// The record that failed to encode.
    pub fn instruction(&self) -> &Instruction {
        match self {
            EncodeError::UnsupportedOperandKind { instruction, .. }
            | EncodeError::OperandOutOfRange { instruction, .. }
            | EncodeError::NoEncodingForOperands { instruction, .. }
            | EncodeError::BranchTargetOutOfRange { instruction, .. }
            | EncodeError::Sink { instruction, .. } => instruction,
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnsupportedOperandKind {
                instruction,
                operand,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{:?}: operand {} must be {}, found {}",
                    instruction.code(),
                    operand,
                    expected,
                    found
                )
            }
            EncodeError::OperandOutOfRange {
                instruction,
                operand,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "{:?}: operand {} value {} out of range [{}..{}]",
                    instruction.code(),
                    operand,
                    value,
                    min,
                    max
                )
            }
            EncodeError::NoEncodingForOperands {
                instruction,
                detail,
            } => {
                write!(
                    f,
                    "{:?}: no encoding for operands: {}",
                    instruction.code(),
                    detail
                )
            }
            EncodeError::BranchTargetOutOfRange {
                instruction,
                target,
                displacement,
                max,
            } => {
                write!(
                    f,
                    "{:?}: branch target {:#x} out of range (displacement={}, max=±{})",
                    instruction.code(),
                    target,
                    displacement,
                    max
                )
            }
            EncodeError::Sink {
                instruction,
                detail,
            } => {
                write!(f, "{:?}: byte sink failed: {}", instruction.code(), detail)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}
