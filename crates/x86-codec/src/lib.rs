//! # x86-codec: Pure Rust x86/x86-64 Machine-Code Decoder and Encoder
//!
//! `x86-codec` turns raw x86 bytes into structured [`Instruction`] records
//! and records back into bytes, for 16-, 32- and 64-bit code.
//!
//! ## Quick Start
//!
//! ```rust
//! use x86_codec::{decode, encode_to_vec, Code, CodeSize, Instruction, OperandValue};
//!
//! let jmp = Instruction::with_operands(
//!     CodeSize::Code32,
//!     Code::Jmp_rel8_32,
//!     &[OperandValue::Branch(0x12)],
//! );
//! let (bytes, offsets) = encode_to_vec(&jmp).unwrap();
//! assert_eq!(bytes, vec![0xEB, 0x10]);
//! assert_eq!(offsets.displacement_offset, 1);
//! assert_eq!(offsets.displacement_size, 1);
//!
//! let (decoded, len) = decode(&bytes[..], CodeSize::Code32, 0).unwrap();
//! assert_eq!(len, 2);
//! assert_eq!(decoded.code(), Code::Jmp_rel8_32);
//! assert_eq!(decoded.near_branch_target(), 0x12);
//! ```
//!
//! ## Features
//!
//! - **Every prefix family**: legacy/REX, VEX, EVEX, XOP, MVEX (Knights
//!   Corner, opt-in) and 3DNow!.
//! - **Table-driven**: one [`OpCodeTemplate`] per [`Code`] drives both
//!   directions, so decode and encode agree by construction.
//! - **Patchable output**: the encoder reports [`ConstantOffsets`] for the
//!   displacement and immediates it wrote.
//! - **`no_std` + `alloc`**: the `std` feature only adds `std::error::Error`
//!   impls and the [`IoSink`] adapter.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
// ── Pedantic lint policy ─────────────────────────────────────────────────
// A machine-code codec performs many narrowing / sign-changing casts
// between integer widths (i64→u8, u64→u32, etc.) and uses dense hex literals
// without separators (0xFFD0, 0x0F38F6).  The lints below are expected and
// acceptable in this context.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::cast_possible_wrap,
    clippy::unreadable_literal,
    clippy::match_same_arms,
    clippy::redundant_closure_for_method_calls,
    clippy::bool_to_int_with_if,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args,
    clippy::doc_markdown,
    clippy::similar_names,
    clippy::fn_params_excessive_bools,
    clippy::too_many_lines,
    clippy::single_match_else,
    clippy::manual_let_else,
    clippy::unnecessary_wraps,
    clippy::many_single_char_names,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]

extern crate alloc;

/// Dense instruction identities (`Code`) and condition codes.
pub mod code;
/// Decoder: bytes → Instruction Record, single-shot and linear sweep.
pub mod decoder;
/// Encoder: Instruction Record → bytes plus constant offsets.
pub mod encoder;
/// Decode and encode error types.
pub mod error;
/// The Instruction Record and its operand model.
pub mod instruction;
/// Byte sources, byte sinks and the stack instruction buffer.
pub mod io;
/// Instruction mnemonics.
pub mod mnemonic;
/// Constant-offset report of an encoded instruction.
pub mod offsets;
/// Registers and register classes.
pub mod register;
/// Encoding Tables: one template per `Code`.
pub mod tables;

// Re-exports
pub use code::{Code, ConditionCode};
pub use decoder::{decode, DecodeIter, Decoder, DecoderOptions, MAX_INSTRUCTION_LEN};
pub use encoder::{encode, encode_to_vec, Encoder, EncoderOptions};
pub use error::{DecodeError, EncodeError};
pub use instruction::{
    CodeSize, Instruction, MemoryOperand, MvexRegMemConv, OpKind, OperandValue, RepPrefix,
    RoundingControl, MAX_OPERANDS,
};
#[cfg(feature = "std")]
pub use io::IoSink;
pub use io::{ByteSink, ByteSource, InstrBytes, SinkError, SliceSink};
pub use mnemonic::Mnemonic;
pub use offsets::ConstantOffsets;
pub use register::{Register, RegisterClass};
pub use tables::{template, EncodingKind, OpCodeTemplate};
