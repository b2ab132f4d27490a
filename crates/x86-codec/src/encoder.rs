//! Encoder: Instruction Record → machine-code bytes.
//!
//! The template of the record's [`Code`] fixes the prefix family, the opcode
//! bytes and the slot every operand is encoded in; the record supplies the
//! register numbers, the memory operand, immediates and branch targets.
//! ModR/M, SIB and the REX/VEX/EVEX/XOP/MVEX prefixes are assembled by hand
//! from those pieces.
//!
//! Every instruction is staged in an [`InstrBytes`] buffer and handed to the
//! caller's [`ByteSink`] with one `write_all`, so a rejected record never
//! leaves partial bytes behind.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::code::Code;
use crate::decoder::MAX_INSTRUCTION_LEN;
use crate::error::EncodeError;
use crate::instruction::{zero_fits, CodeSize, Instruction, MvexRegMemConv, OpKind, RepPrefix};
use crate::io::{ByteSink, InstrBytes};
use crate::offsets::ConstantOffsets;
use crate::register::{Register, RegisterClass};
use crate::tables::{
    flags, template, BranchWidth, EncodingKind, Field, ImmediateEncoding, MandatoryPrefix,
    OpCodeTemplate, OpSize, OpcodeMap, OperandEncoding, WBit,
};

/// Encoder switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncoderOptions {
    /// Always emit the three-byte `C4` VEX form.
    pub prevent_vex2: bool,
    /// VEX.L written for templates that ignore the vector length (0 or 1).
    pub vex_l: u8,
    /// EVEX.L'L written for templates that ignore the vector length (0-3).
    pub evex_l: u8,
}

/// Table-driven encoder.
///
/// Like the decoder it holds no per-instruction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Encoder {
    options: EncoderOptions,
}

impl Encoder {
    /// Encoder with the given options.
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    /// Options the encoder was built with.
    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    /// Encodes `instr` at its [`Instruction::ip`] into `sink`.
    ///
    /// Returns the number of bytes written and where the displacement and
    /// immediates landed. Nothing is written on failure.
    pub fn encode<W: ByteSink>(
        &self,
        instr: &Instruction,
        mut sink: W,
    ) -> Result<(usize, ConstantOffsets), EncodeError> {
        let (bytes, offsets) = self.encode_to_bytes(instr)?;
        sink.write_all(&bytes).map_err(|err| {
            let err = EncodeError::Sink {
                instruction: Box::new(*instr),
                detail: err.to_string(),
            };
            log::trace!("encode rejected: {}", err);
            err
        })?;
        Ok((bytes.len(), offsets))
    }

    /// Encodes `instr` into a fresh vector.
    pub fn encode_to_vec(
        &self,
        instr: &Instruction,
    ) -> Result<(Vec<u8>, ConstantOffsets), EncodeError> {
        let (bytes, offsets) = self.encode_to_bytes(instr)?;
        Ok((bytes.to_vec(), offsets))
    }

    /// Encodes `instr` into a stack buffer.
    pub fn encode_to_bytes(
        &self,
        instr: &Instruction,
    ) -> Result<(InstrBytes, ConstantOffsets), EncodeError> {
        self.stage(instr).map_err(|failure| {
            let err = failure.into_error(instr);
            log::trace!("encode rejected: {}", err);
            err
        })
    }

    fn stage(&self, instr: &Instruction) -> Result<(InstrBytes, ConstantOffsets), Failure> {
        let code = instr.code();
        if code == Code::Invalid {
            return Err(unencodable("the record holds no instruction"));
        }
        let t = template(code);
        let mode = instr.code_size();
        if !t.is_valid_in(mode) {
            return Err(Failure::NoEncoding(format!(
                "not valid in {}-bit mode",
                mode.bits()
            )));
        }
        let long_mode = mode == CodeSize::Code64;

        let ops = collect_operands(instr, t, long_mode)?;
        let address_bits = address_bits(instr, mode)?;
        let addressing = match ops.memory {
            Some(operand) => Some(addressing(instr, t, operand, address_bits, long_mode)?),
            None => None,
        };
        let memory_form = addressing.is_some();
        if memory_form && address_bits == 16 && t.has(flags::NO_ADDR16) {
            return Err(unencodable("the form cannot use 16-bit addressing"));
        }

        let r = ops.reg.unwrap_or(0);
        let (x, b) = match (&addressing, ops.rm, ops.opcode_low) {
            (Some(a), _, _) => (a.x, a.b),
            (None, Some(rm), _) => (rm & 0x10 != 0, rm & 0x08 != 0),
            (None, None, Some(low)) => (false, low & 0x08 != 0),
            (None, None, None) => (false, false),
        };

        let mut out = Emitter::default();

        // Legacy prefixes, in the order the decoder's last-wins scan expects.
        let segment = instr.segment_prefix();
        if segment != Register::None && instr.has_memory_operand() {
            out.byte(segment_prefix_byte(segment)?);
        }
        if instr.has_address_size_override() {
            out.byte(0x67);
        }
        let legacy = matches!(t.encoding, EncodingKind::Legacy | EncodingKind::D3now);
        if legacy && needs_operand_size_prefix(t, mode)? {
            out.byte(0x66);
        }
        if instr.has_lock_prefix() {
            if !t.has(flags::LOCK) || !memory_form {
                return Err(unencodable("LOCK requires a lockable memory destination"));
            }
            out.byte(0xF0);
        }
        let mandatory_rep = matches!(t.prefix, MandatoryPrefix::PF2 | MandatoryPrefix::PF3);
        match instr.rep_prefix() {
            RepPrefix::None => {}
            _ if !t.has(flags::REP) => return Err(unencodable("REP prefix not allowed")),
            _ if mandatory_rep => {}
            RepPrefix::Repe => out.byte(0xF3),
            RepPrefix::Repne => out.byte(0xF2),
        }

        match t.encoding {
            EncodingKind::Legacy | EncodingKind::D3now => {
                reject_vector_attributes(instr, "legacy")?;
                if let Some(byte) = t.prefix.byte() {
                    out.byte(byte);
                }
                let w = t.w == WBit::W1
                    || (t.op_size == OpSize::O64
                        && !t.has(flags::FORCE64)
                        && !t.has(flags::DEFAULT64));
                let r = r & 0x08 != 0;
                if t.has(flags::NO_REX_B) && b {
                    return Err(unencodable("the form cannot use REX.B"));
                }
                if w || r || x || b || ops.byte_register_needs_rex {
                    if !long_mode {
                        return Err(unencodable("REX is only available in 64-bit mode"));
                    }
                    if ops.high_byte_register {
                        return Err(unencodable("AH/CH/DH/BH cannot be used with REX"));
                    }
                    out.byte(rex(w, r, x, b));
                }
                if t.encoding == EncodingKind::D3now {
                    // The opcode follows ModRM as a suffix byte.
                    out.bytes(&[0x0F, 0x0F]);
                } else {
                    out.bytes(legacy_escape(t.map)?);
                    out.byte(t.opcode | ops.opcode_low.unwrap_or(0) & 7);
                }
            }
            EncodingKind::Vex | EncodingKind::Xop => {
                reject_vector_attributes(instr, "VEX/XOP")?;
                let mmmmm = vector_map(t.map)?;
                let w = t.w == WBit::W1;
                let l = t.l.field().unwrap_or(self.options.vex_l) & 1 != 0;
                let vvvv = ops.vvvv.unwrap_or(0);
                let r = r & 0x08 != 0;
                let pp = t.prefix.pp();
                if t.encoding == EncodingKind::Vex
                    && mmmmm == 1
                    && !w
                    && !x
                    && !b
                    && !self.options.prevent_vex2
                {
                    emit_vex2(&mut out, r, vvvv, l, pp);
                } else {
                    let lead = if t.encoding == EncodingKind::Xop {
                        0x8F
                    } else {
                        0xC4
                    };
                    emit_vex3(&mut out, lead, r, x, b, mmmmm, w, vvvv, l, pp);
                }
                out.byte(t.opcode);
            }
            EncodingKind::Evex => {
                if instr.is_mvex_eviction_hint()
                    || instr.mvex_reg_mem_conv() != MvexRegMemConv::None
                {
                    return Err(unencodable("MVEX attributes on an EVEX form"));
                }
                let aaa = opmask_bits(instr, t)?;
                let z = instr.zeroing_masking();
                if z {
                    if !t.has(flags::ZEROING) {
                        return Err(unencodable("zeroing-masking not allowed"));
                    }
                    if aaa == 0 {
                        return Err(unencodable("zeroing-masking without an opmask"));
                    }
                }
                let default_ll = t.l.field().unwrap_or(self.options.evex_l) & 3;
                let (ll, bit_b) = evex_length_and_b(instr, t, memory_form, default_ll)?;
                let vvvv = ops.vvvv.unwrap_or(0);
                emit_evex(
                    &mut out,
                    EvexBits {
                        r: r & 0x08 != 0,
                        x,
                        b,
                        r2: r & 0x10 != 0,
                        map: vector_map(t.map)?,
                        w: t.w == WBit::W1,
                        vvvv,
                        pp: t.prefix.pp(),
                        p2: (u8::from(z) << 7)
                            | (ll << 5)
                            | (u8::from(bit_b) << 4)
                            | (u8::from(vvvv & 0x10 == 0) << 3)
                            | aaa,
                    },
                );
                out.byte(t.opcode);
            }
            EncodingKind::Mvex => {
                if instr.zeroing_masking() || instr.is_broadcast() {
                    return Err(unencodable("EVEX attributes on an MVEX form"));
                }
                let aaa = opmask_bits(instr, t)?;
                let (e, sss) = mvex_e_and_sss(instr, t, memory_form)?;
                let vvvv = ops.vvvv.unwrap_or(0);
                emit_mvex(
                    &mut out,
                    EvexBits {
                        r: r & 0x08 != 0,
                        x,
                        b,
                        r2: r & 0x10 != 0,
                        map: vector_map(t.map)?,
                        w: t.w == WBit::W1,
                        vvvv,
                        pp: t.prefix.pp(),
                        p2: (u8::from(e) << 7)
                            | (sss << 4)
                            | (u8::from(vvvv & 0x10 == 0) << 3)
                            | aaa,
                    },
                );
                out.byte(t.opcode);
            }
        }

        let mut offsets = ConstantOffsets::default();

        if t.has_modrm() {
            let reg = ops.reg.or(t.modrm_reg).unwrap_or(0);
            match &addressing {
                Some(a) => {
                    out.byte(modrm(a.mode, reg, a.rm));
                    if let Some(sib) = a.sib {
                        out.byte(sib);
                    }
                    if a.disp_size != 0 {
                        offsets.displacement_offset = out.position();
                        offsets.displacement_size = a.disp_size as u8;
                        out.le(a.disp as u64, a.disp_size);
                    }
                }
                None => {
                    let rm = ops.rm.or(t.modrm_rm).unwrap_or(0);
                    out.byte(modrm(3, reg, rm));
                }
            }
        }

        let mut branch = None;
        let mut immediates = 0;
        for (i, op) in t.operands().iter().enumerate() {
            match *op {
                OperandEncoding::Imm(ImmediateEncoding::One) => {}
                OperandEncoding::Imm(enc) => {
                    let kind = enc.op_kind();
                    let raw = instr.raw_immediate(enc == ImmediateEncoding::Imm8Second);
                    if !zero_fits(kind, raw) {
                        let (min, max) = immediate_range(enc);
                        return Err(Failure::Range {
                            operand: i,
                            value: i128::from(raw as i64),
                            min,
                            max,
                        });
                    }
                    let offset = out.position();
                    if immediates == 0 {
                        offsets.immediate_offset = offset;
                        offsets.immediate_size = enc.size() as u8;
                    } else {
                        offsets.immediate_offset2 = offset;
                        offsets.immediate_size2 = enc.size() as u8;
                    }
                    immediates += 1;
                    out.le(raw, enc.size());
                }
                OperandEncoding::Moffs => {
                    let width = (address_bits / 8) as usize;
                    let value = instr.memory_displacement();
                    if !fits_address(value, address_bits) {
                        let (min, max) = address_range(address_bits);
                        return Err(Failure::Range {
                            operand: i,
                            value: i128::from(value),
                            min,
                            max,
                        });
                    }
                    offsets.displacement_offset = out.position();
                    offsets.displacement_size = width as u8;
                    out.le(value as u64, width);
                }
                OperandEncoding::Branch(width) => {
                    offsets.displacement_offset = out.position();
                    offsets.displacement_size = width.size() as u8;
                    branch = Some((out.position() as usize, width));
                    out.le(0, width.size());
                }
                OperandEncoding::FarPtr => {
                    let offset = instr.far_branch_offset();
                    let size = if t.far_branch_kind() == OpKind::FarBranch16 {
                        if offset > 0xFFFF {
                            return Err(Failure::Range {
                                operand: i,
                                value: i128::from(offset),
                                min: 0,
                                max: 0xFFFF,
                            });
                        }
                        2
                    } else {
                        4
                    };
                    offsets.immediate_offset = out.position();
                    offsets.immediate_size = size as u8;
                    out.le(u64::from(offset), size);
                    offsets.immediate_offset2 = out.position();
                    offsets.immediate_size2 = 2;
                    out.le(u64::from(instr.far_branch_selector()), 2);
                }
                _ => {}
            }
        }
        if t.encoding == EncodingKind::D3now {
            out.byte(t.opcode);
        }

        if out.overflow || out.buf.len() > MAX_INSTRUCTION_LEN {
            return Err(unencodable("instruction exceeds 15 bytes"));
        }
        if let Some((offset, width)) = branch {
            let rel = branch_displacement(instr, t, width, out.buf.len())?;
            let field = rel.to_le_bytes();
            if let (Some(dst), Some(src)) = (
                out.buf.get_mut(offset..offset + width.size()),
                field.get(..width.size()),
            ) {
                dst.copy_from_slice(src);
            }
        }
        Ok((out.buf, offsets))
    }
}

/// Encodes `instr` with default options.
pub fn encode<W: ByteSink>(
    instr: &Instruction,
    sink: W,
) -> Result<(usize, ConstantOffsets), EncodeError> {
    Encoder::default().encode(instr, sink)
}

/// Encodes `instr` with default options into a fresh vector.
pub fn encode_to_vec(instr: &Instruction) -> Result<(Vec<u8>, ConstantOffsets), EncodeError> {
    Encoder::default().encode_to_vec(instr)
}

// ─── Failures ───────────────────────────────────────────────────────────

/// An [`EncodeError`] before the offending record is attached.
#[derive(Debug)]
enum Failure {
    Kind {
        operand: usize,
        expected: &'static str,
        found: String,
    },
    Range {
        operand: usize,
        value: i128,
        min: i128,
        max: i128,
    },
    NoEncoding(String),
    Branch {
        target: u64,
        displacement: i64,
        max: i64,
    },
}

impl Failure {
    fn into_error(self, instr: &Instruction) -> EncodeError {
        let instruction = Box::new(*instr);
        match self {
            Failure::Kind {
                operand,
                expected,
                found,
            } => EncodeError::UnsupportedOperandKind {
                instruction,
                operand,
                expected,
                found,
            },
            Failure::Range {
                operand,
                value,
                min,
                max,
            } => EncodeError::OperandOutOfRange {
                instruction,
                operand,
                value,
                min,
                max,
            },
            Failure::NoEncoding(detail) => EncodeError::NoEncodingForOperands {
                instruction,
                detail,
            },
            Failure::Branch {
                target,
                displacement,
                max,
            } => EncodeError::BranchTargetOutOfRange {
                instruction,
                target,
                displacement,
                max,
            },
        }
    }
}

fn unencodable(detail: &str) -> Failure {
    Failure::NoEncoding(detail.to_string())
}

fn describe_operand(instr: &Instruction, operand: usize) -> String {
    match instr.op_kind(operand) {
        OpKind::Register => {
            let reg = instr.op_register(operand);
            format!("{} ({})", reg, reg.class())
        }
        kind => format!("{:?}", kind),
    }
}

// ─── Operand collection ─────────────────────────────────────────────────

/// Register numbers and operand positions gathered from the record.
#[derive(Debug, Default)]
struct Operands {
    /// ModRM.reg register number.
    reg: Option<u8>,
    /// Register in ModRM.rm (mod = 11).
    rm: Option<u8>,
    vvvv: Option<u8>,
    opcode_low: Option<u8>,
    /// Operand index of the ModRM memory operand.
    memory: Option<usize>,
    /// SPL, BPL, SIL or DIL in use.
    byte_register_needs_rex: bool,
    /// AH, CH, DH or BH in use.
    high_byte_register: bool,
}

fn collect_operands(
    instr: &Instruction,
    t: &OpCodeTemplate,
    long_mode: bool,
) -> Result<Operands, Failure> {
    let mut ops = Operands::default();
    let mut string_bits = None;
    for (i, op) in t.operands().iter().enumerate() {
        let kind = instr.op_kind(i);
        let wrong_kind = |expected: &'static str| Failure::Kind {
            operand: i,
            expected,
            found: describe_operand(instr, i),
        };
        match *op {
            OperandEncoding::None => {}
            OperandEncoding::Reg(class, field) => {
                let number = register_operand(instr, i, class, t, long_mode, &mut ops)?;
                let slot = match field {
                    Field::ModrmReg => &mut ops.reg,
                    Field::ModrmRm => &mut ops.rm,
                    Field::Vvvv => &mut ops.vvvv,
                    Field::OpcodeLow => &mut ops.opcode_low,
                };
                *slot = Some(number);
            }
            OperandEncoding::RegOrMem(class) => match kind {
                OpKind::Register => {
                    ops.rm = Some(register_operand(instr, i, class, t, long_mode, &mut ops)?);
                }
                OpKind::Memory => ops.memory = Some(i),
                _ => return Err(wrong_kind(class.name())),
            },
            OperandEncoding::Fixed(reg) => {
                if kind != OpKind::Register || instr.op_register(i) != reg {
                    return Err(wrong_kind("the form's implicit register"));
                }
            }
            OperandEncoding::Mem => {
                if kind != OpKind::Memory {
                    return Err(wrong_kind("memory"));
                }
                ops.memory = Some(i);
            }
            OperandEncoding::Moffs => {
                if kind != OpKind::Memory {
                    return Err(wrong_kind("memory offset"));
                }
                if instr.memory_base() != Register::None || instr.memory_index() != Register::None {
                    return Err(unencodable("moffs takes an absolute address only"));
                }
            }
            OperandEncoding::StringSrc | OperandEncoding::StringDst => {
                let source = *op == OperandEncoding::StringSrc;
                let bits = match kind.string_address_bits() {
                    Some(bits) if source == (OpKind::string_source(bits) == kind) => bits,
                    _ => {
                        return Err(wrong_kind(if source {
                            "seg:[rSI] string operand"
                        } else {
                            "es:[rDI] string operand"
                        }))
                    }
                };
                if string_bits.is_some_and(|seen| seen != bits) {
                    return Err(unencodable("string operands disagree on the address size"));
                }
                string_bits = Some(bits);
            }
            OperandEncoding::Imm(ImmediateEncoding::One) => {
                if kind != OpKind::Immediate8 {
                    return Err(wrong_kind("the implicit 1"));
                }
                if instr.immediate(i) != 1 {
                    return Err(Failure::Range {
                        operand: i,
                        value: i128::from(instr.immediate(i)),
                        min: 1,
                        max: 1,
                    });
                }
            }
            OperandEncoding::Imm(enc) => {
                if kind != enc.op_kind() {
                    return Err(wrong_kind(immediate_name(enc)));
                }
            }
            OperandEncoding::Branch(_) => {
                if kind != t.near_branch_kind() {
                    return Err(wrong_kind("near branch"));
                }
            }
            OperandEncoding::FarPtr => {
                if kind != t.far_branch_kind() {
                    return Err(wrong_kind("far pointer"));
                }
            }
        }
    }
    Ok(ops)
}

/// Checks a register operand and returns its full hardware number.
fn register_operand(
    instr: &Instruction,
    operand: usize,
    class: RegisterClass,
    t: &OpCodeTemplate,
    long_mode: bool,
    ops: &mut Operands,
) -> Result<u8, Failure> {
    let reg = instr.op_register(operand);
    if instr.op_kind(operand) != OpKind::Register || reg.class() != class {
        return Err(Failure::Kind {
            operand,
            expected: class.name(),
            found: describe_operand(instr, operand),
        });
    }
    let number = reg.number();
    let limit = match (long_mode, t.encoding) {
        (false, _) => 8,
        (true, EncodingKind::Evex | EncodingKind::Mvex) => 32,
        (true, _) => 16,
    };
    if number >= limit {
        return Err(Failure::Range {
            operand,
            value: i128::from(number),
            min: 0,
            max: i128::from(limit - 1),
        });
    }
    if reg.requires_rex_for_byte() {
        if !long_mode {
            return Err(unencodable("SPL/BPL/SIL/DIL need 64-bit mode"));
        }
        ops.byte_register_needs_rex = true;
    }
    if reg.is_high_byte() {
        ops.high_byte_register = true;
    }
    Ok(number)
}

fn immediate_name(enc: ImmediateEncoding) -> &'static str {
    match enc {
        ImmediateEncoding::One => "the implicit 1",
        ImmediateEncoding::Imm8 | ImmediateEncoding::Imm8Second => "imm8",
        ImmediateEncoding::Imm16 => "imm16",
        ImmediateEncoding::Imm32 => "imm32",
        ImmediateEncoding::Imm64 => "imm64",
        ImmediateEncoding::Sx8To16 | ImmediateEncoding::Sx8To32 | ImmediateEncoding::Sx8To64 => {
            "sign-extended imm8"
        }
        ImmediateEncoding::Sx32To64 => "sign-extended imm32",
    }
}

/// Values accepted for an immediate, covering both signed and unsigned
/// spellings of plain immediates.
fn immediate_range(enc: ImmediateEncoding) -> (i128, i128) {
    match enc {
        ImmediateEncoding::One => (1, 1),
        ImmediateEncoding::Imm8 | ImmediateEncoding::Imm8Second => (-128, 255),
        ImmediateEncoding::Imm16 => (-32768, 65535),
        ImmediateEncoding::Imm32 => (i128::from(i32::MIN), i128::from(u32::MAX)),
        ImmediateEncoding::Imm64 => (i128::from(i64::MIN), i128::from(u64::MAX)),
        ImmediateEncoding::Sx8To16 | ImmediateEncoding::Sx8To32 | ImmediateEncoding::Sx8To64 => {
            (-128, 127)
        }
        ImmediateEncoding::Sx32To64 => (i128::from(i32::MIN), i128::from(i32::MAX)),
    }
}

// ─── Prefix helpers ─────────────────────────────────────────────────────

fn segment_prefix_byte(segment: Register) -> Result<u8, Failure> {
    match segment {
        Register::Es => Ok(0x26),
        Register::Cs => Ok(0x2E),
        Register::Ss => Ok(0x36),
        Register::Ds => Ok(0x3E),
        Register::Fs => Ok(0x64),
        Register::Gs => Ok(0x65),
        other => Err(Failure::NoEncoding(format!(
            "{} is not a segment register",
            other
        ))),
    }
}

/// Whether a `66` operand-size override selects the template's size.
fn needs_operand_size_prefix(t: &OpCodeTemplate, mode: CodeSize) -> Result<bool, Failure> {
    if t.prefix == MandatoryPrefix::P66 {
        return Ok(false);
    }
    Ok(match (t.op_size, mode) {
        (OpSize::O16, CodeSize::Code64) if t.has(flags::FORCE64) => {
            return Err(unencodable("16-bit operand size is not selectable in 64-bit mode"))
        }
        (OpSize::O16, CodeSize::Code32 | CodeSize::Code64) | (OpSize::O32, CodeSize::Code16) => {
            true
        }
        _ => false,
    })
}

/// EVEX/MVEX attributes have no place in a legacy or VEX/XOP encoding.
fn reject_vector_attributes(instr: &Instruction, family: &str) -> Result<(), Failure> {
    if instr.op_mask() != Register::None
        || instr.zeroing_masking()
        || instr.is_broadcast()
        || instr.rounding_control().bits().is_some()
        || instr.suppress_all_exceptions()
        || instr.is_mvex_eviction_hint()
        || instr.mvex_reg_mem_conv() != MvexRegMemConv::None
    {
        return Err(Failure::NoEncoding(format!(
            "EVEX/MVEX attributes on a {} form",
            family
        )));
    }
    Ok(())
}

fn legacy_escape(map: OpcodeMap) -> Result<&'static [u8], Failure> {
    match map {
        OpcodeMap::Primary => Ok(&[]),
        OpcodeMap::Map0F => Ok(&[0x0F]),
        OpcodeMap::Map0F38 => Ok(&[0x0F, 0x38]),
        OpcodeMap::Map0F3A => Ok(&[0x0F, 0x3A]),
        OpcodeMap::Xop8 | OpcodeMap::Xop9 | OpcodeMap::XopA => {
            Err(unencodable("XOP map in a legacy form"))
        }
    }
}

/// VEX `mmmmm` / EVEX `mm` / MVEX `mmmm` / XOP map select.
fn vector_map(map: OpcodeMap) -> Result<u8, Failure> {
    match map {
        OpcodeMap::Map0F => Ok(1),
        OpcodeMap::Map0F38 => Ok(2),
        OpcodeMap::Map0F3A => Ok(3),
        OpcodeMap::Xop8 => Ok(8),
        OpcodeMap::Xop9 => Ok(9),
        OpcodeMap::XopA => Ok(10),
        OpcodeMap::Primary => Err(unencodable("vector form without an opcode map")),
    }
}

fn opmask_bits(instr: &Instruction, t: &OpCodeTemplate) -> Result<u8, Failure> {
    let mask = instr.op_mask();
    if mask == Register::None {
        if t.has(flags::OPMASK_REQUIRED) {
            return Err(unencodable("opmask required"));
        }
        return Ok(0);
    }
    if !t.has(flags::OPMASK) {
        return Err(unencodable("opmask not allowed"));
    }
    if mask.class() != RegisterClass::Opmask {
        return Err(Failure::NoEncoding(format!("{} is not an opmask register", mask)));
    }
    Ok(mask.number())
}

/// EVEX L'L and b.
fn evex_length_and_b(
    instr: &Instruction,
    t: &OpCodeTemplate,
    memory_form: bool,
    default_ll: u8,
) -> Result<(u8, bool), Failure> {
    let rounding = instr.rounding_control().bits();
    let sae = instr.suppress_all_exceptions();
    if memory_form {
        if rounding.is_some() || sae {
            return Err(unencodable("rounding and SAE need a register operand"));
        }
        if instr.is_broadcast() {
            if !t.has(flags::BROADCAST) {
                return Err(unencodable("embedded broadcast not allowed"));
            }
            return Ok((default_ll, true));
        }
        return Ok((default_ll, false));
    }
    if instr.is_broadcast() {
        return Err(unencodable("broadcast needs a memory operand"));
    }
    match rounding {
        Some(rc) => {
            if !t.has(flags::ROUNDING) {
                return Err(unencodable("static rounding not allowed"));
            }
            Ok((rc, true))
        }
        None if sae => {
            if !t.has(flags::SAE) {
                return Err(unencodable("suppress-all-exceptions not allowed"));
            }
            if t.has(flags::ROUNDING) {
                // EVEX.b on a rounding form always selects a rounding mode.
                return Err(unencodable("SAE without a rounding mode on a rounding form"));
            }
            Ok((default_ll, true))
        }
        None => Ok((default_ll, false)),
    }
}

/// MVEX E and sss.
fn mvex_e_and_sss(
    instr: &Instruction,
    t: &OpCodeTemplate,
    memory_form: bool,
) -> Result<(bool, u8), Failure> {
    let rounding = instr.rounding_control().bits();
    let sae = instr.suppress_all_exceptions();
    let (conv, conv_register) = instr.mvex_reg_mem_conv().sss();
    if memory_form {
        if rounding.is_some() || sae {
            return Err(unencodable("rounding and SAE need a register operand"));
        }
        let hint = instr.is_mvex_eviction_hint();
        if hint && !t.has(flags::EVICTION_HINT) {
            return Err(unencodable("eviction hint not allowed"));
        }
        return match conv_register {
            None => Ok((hint, 0)),
            Some(false) if t.has(flags::MVEX_CONVERSION) => Ok((hint, conv)),
            Some(false) => Err(unencodable("memory conversion not allowed")),
            Some(true) => Err(unencodable("register swizzle on a memory operand")),
        };
    }
    if instr.is_mvex_eviction_hint() {
        return Err(unencodable("eviction hint needs a memory operand"));
    }
    if rounding.is_some() || sae {
        if conv_register.is_some() {
            return Err(unencodable("swizzle cannot be combined with rounding or SAE"));
        }
        return match rounding {
            Some(rc) if t.has(flags::ROUNDING) => Ok((true, rc | if sae { 4 } else { 0 })),
            Some(_) => Err(unencodable("static rounding not allowed")),
            None if t.has(flags::SAE) && !t.has(flags::ROUNDING) => Ok((true, 4)),
            None => Err(unencodable("SAE without a rounding mode on this form")),
        };
    }
    match conv_register {
        None => Ok((false, 0)),
        Some(true) if t.has(flags::MVEX_SWIZZLE) => Ok((false, conv)),
        Some(true) => Err(unencodable("register swizzle not allowed")),
        Some(false) => Err(unencodable("memory conversion on a register operand")),
    }
}

// ─── Addressing ─────────────────────────────────────────────────────────

/// Effective address width, checked against the mode.
fn address_bits(instr: &Instruction, mode: CodeSize) -> Result<u32, Failure> {
    let bits = instr.address_size().unwrap_or_else(|| mode.bits());
    match (bits, mode) {
        (64, CodeSize::Code16 | CodeSize::Code32) => {
            Err(unencodable("64-bit addressing needs 64-bit mode"))
        }
        (16, CodeSize::Code64) => Err(unencodable("16-bit addressing is not available in 64-bit mode")),
        _ => Ok(bits),
    }
}

/// ModRM.mod/rm, SIB and displacement of a memory operand.
#[derive(Debug)]
struct Addressing {
    mode: u8,
    rm: u8,
    sib: Option<u8>,
    disp: i64,
    disp_size: usize,
    /// Index register needs REX.X / VEX.X.
    x: bool,
    /// Base register needs REX.B / VEX.B.
    b: bool,
}

fn addressing(
    instr: &Instruction,
    t: &OpCodeTemplate,
    operand: usize,
    address_bits: u32,
    long_mode: bool,
) -> Result<Addressing, Failure> {
    if address_bits == 16 {
        return addressing16(instr, operand);
    }
    let base = instr.memory_base();
    let index = instr.memory_index();
    let gpr = if address_bits == 64 {
        RegisterClass::Gpr64
    } else {
        RegisterClass::Gpr32
    };
    let ip = if address_bits == 64 {
        Register::Rip
    } else {
        Register::Eip
    };
    let base_ok = base == Register::None || base.class() == gpr || (base == ip && long_mode);
    if !base_ok || !(index == Register::None || index.class() == gpr) {
        return Err(Failure::Kind {
            operand,
            expected: if address_bits == 64 {
                "64-bit base/index registers"
            } else {
                "32-bit base/index registers"
            },
            found: format!("[{} + {}]", base, index),
        });
    }
    if index.number() == 4 && index != Register::None {
        return Err(unencodable("ESP/RSP cannot be an index register"));
    }
    let ss = scale_bits(instr, operand)?;
    let disp = instr.memory_displacement();
    let displ_size = instr.memory_displ_size();
    let force_sib = t.has(flags::REQUIRES_SIB);

    if base == ip {
        if force_sib {
            return Err(unencodable("the form needs a SIB byte, not RIP-relative memory"));
        }
        let disp = check_disp32(disp, 64, operand)?;
        return Ok(Addressing {
            mode: 0,
            rm: 5,
            sib: None,
            disp,
            disp_size: 4,
            x: false,
            b: false,
        });
    }

    let disp = check_disp32(disp, address_bits, operand)?;
    let index_low = index.number() & 7;
    let x = index != Register::None && index.is_extended();

    if base == Register::None {
        // disp32 with no base: SIB base 101 with mod 00. In 64-bit mode
        // rm 101 means RIP-relative, so an absolute address needs SIB.
        if index == Register::None && !long_mode && !force_sib {
            return Ok(Addressing {
                mode: 0,
                rm: 5,
                sib: None,
                disp,
                disp_size: 4,
                x: false,
                b: false,
            });
        }
        let index_field = if index == Register::None { 4 } else { index_low };
        return Ok(Addressing {
            mode: 0,
            rm: 4,
            sib: Some(sib(ss, index_field, 5)),
            disp,
            disp_size: 4,
            x,
            b: false,
        });
    }

    let base_low = base.number() & 7;
    let scale = t.disp8_scale(instr.is_broadcast());
    let compressed = if disp % scale == 0 {
        i8::try_from(disp / scale).ok()
    } else {
        None
    };
    let (mode, disp_size) = match (displ_size, compressed) {
        (0, _) if disp == 0 && base_low != 5 => (0, 0),
        (0 | 1, Some(_)) => (1, 1),
        _ => (2, 4),
    };
    let disp = match (disp_size, compressed) {
        (1, Some(short)) => i64::from(short),
        _ => disp,
    };
    let needs_sib = force_sib || index != Register::None || base_low == 4;
    let (rm, sib_byte) = if needs_sib {
        let index_field = if index == Register::None { 4 } else { index_low };
        (4, Some(sib(ss, index_field, base_low)))
    } else {
        (base_low, None)
    };
    Ok(Addressing {
        mode,
        rm,
        sib: sib_byte,
        disp,
        disp_size,
        x,
        b: base.is_extended(),
    })
}

fn addressing16(instr: &Instruction, operand: usize) -> Result<Addressing, Failure> {
    use Register::{Bp, Bx, Di, Si};

    let base = instr.memory_base();
    let index = instr.memory_index();
    if index != Register::None && instr.memory_index_scale() != 1 {
        return Err(unencodable("16-bit addressing has no index scaling"));
    }
    let rm = match (base, index) {
        (Register::None, Register::None) => None,
        (Bx, Si) | (Si, Bx) => Some(0),
        (Bx, Di) | (Di, Bx) => Some(1),
        (Bp, Si) | (Si, Bp) => Some(2),
        (Bp, Di) | (Di, Bp) => Some(3),
        (Si, Register::None) | (Register::None, Si) => Some(4),
        (Di, Register::None) | (Register::None, Di) => Some(5),
        (Bp, Register::None) => Some(6),
        (Bx, Register::None) | (Register::None, Bx) => Some(7),
        _ => {
            return Err(Failure::Kind {
                operand,
                expected: "16-bit base/index pair",
                found: format!("[{} + {}]", base, index),
            })
        }
    };
    let disp = instr.memory_displacement();
    if i16::try_from(disp).is_err() && u16::try_from(disp).is_err() {
        return Err(Failure::Range {
            operand,
            value: i128::from(disp),
            min: i128::from(i16::MIN),
            max: i128::from(u16::MAX),
        });
    }
    let Some(rm) = rm else {
        return Ok(Addressing {
            mode: 0,
            rm: 6,
            sib: None,
            disp,
            disp_size: 2,
            x: false,
            b: false,
        });
    };
    let short = i64::from(disp as u16 as i16);
    let (mode, disp_size) = match instr.memory_displ_size() {
        0 if short == 0 && rm != 6 => (0, 0),
        0 | 1 if i8::try_from(short).is_ok() => (1, 1),
        _ => (2, 2),
    };
    Ok(Addressing {
        mode,
        rm,
        sib: None,
        disp: short,
        disp_size,
        x: false,
        b: false,
    })
}

fn scale_bits(instr: &Instruction, operand: usize) -> Result<u8, Failure> {
    if instr.memory_index() == Register::None {
        return Ok(0);
    }
    match instr.memory_index_scale() {
        1 => Ok(0),
        2 => Ok(1),
        4 => Ok(2),
        8 => Ok(3),
        other => Err(Failure::Range {
            operand,
            value: i128::from(other),
            min: 1,
            max: 8,
        }),
    }
}

/// A disp32 for `address_bits` addressing; 32-bit addressing also takes
/// the unsigned spelling of the same bits.
fn check_disp32(disp: i64, address_bits: u32, operand: usize) -> Result<i64, Failure> {
    if i32::try_from(disp).is_ok() {
        return Ok(disp);
    }
    if address_bits == 32 && u32::try_from(disp).is_ok() {
        return Ok(i64::from(disp as u32 as i32));
    }
    let max = if address_bits == 32 {
        i128::from(u32::MAX)
    } else {
        i128::from(i32::MAX)
    };
    Err(Failure::Range {
        operand,
        value: i128::from(disp),
        min: i128::from(i32::MIN),
        max,
    })
}

fn fits_address(value: i64, address_bits: u32) -> bool {
    match address_bits {
        16 => i16::try_from(value).is_ok() || u16::try_from(value).is_ok(),
        32 => i32::try_from(value).is_ok() || u32::try_from(value).is_ok(),
        _ => true,
    }
}

fn address_range(address_bits: u32) -> (i128, i128) {
    match address_bits {
        16 => (i128::from(i16::MIN), i128::from(u16::MAX)),
        32 => (i128::from(i32::MIN), i128::from(u32::MAX)),
        _ => (i128::from(i64::MIN), i128::from(u64::MAX)),
    }
}

/// Relative branch field for an instruction of `len` bytes, wrapped to the
/// branch operand size.
fn branch_displacement(
    instr: &Instruction,
    t: &OpCodeTemplate,
    width: BranchWidth,
    len: usize,
) -> Result<i64, Failure> {
    let target = instr.near_branch_target();
    let next = instr.ip().wrapping_add(len as u64);
    let delta = target.wrapping_sub(next);
    let rel = match t.near_branch_kind() {
        OpKind::NearBranch16 => i64::from(delta as u16 as i16),
        OpKind::NearBranch32 => i64::from(delta as u32 as i32),
        _ => delta as i64,
    };
    let max = match width {
        BranchWidth::Rel8 => i64::from(i8::MAX),
        BranchWidth::Rel16 => i64::from(i16::MAX),
        BranchWidth::Rel32 => i64::from(i32::MAX),
    };
    if rel < -max - 1 || rel > max {
        return Err(Failure::Branch {
            target,
            displacement: rel,
            max,
        });
    }
    Ok(rel)
}

// ─── Byte emission ──────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Emitter {
    buf: InstrBytes,
    overflow: bool,
}

impl Emitter {
    #[inline]
    fn byte(&mut self, byte: u8) {
        if !self.buf.push(byte) {
            self.overflow = true;
        }
    }

    fn bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.byte(b);
        }
    }

    /// Low `size` bytes of `value`, little-endian.
    fn le(&mut self, value: u64, size: usize) {
        for &b in value.to_le_bytes().iter().take(size) {
            self.byte(b);
        }
    }

    fn position(&self) -> u8 {
        self.buf.len() as u8
    }
}

/// Build a REX prefix byte.
#[inline]
fn rex(w: bool, r: bool, x: bool, b: bool) -> u8 {
    let mut val: u8 = 0x40;
    if w {
        val |= 0x08;
    }
    if r {
        val |= 0x04;
    }
    if x {
        val |= 0x02;
    }
    if b {
        val |= 0x01;
    }
    val
}

/// Build ModR/M byte.
#[inline]
fn modrm(mod_: u8, reg: u8, rm: u8) -> u8 {
    (mod_ << 6) | ((reg & 7) << 3) | (rm & 7)
}

/// Build SIB byte from the already-encoded scale bits.
#[inline]
fn sib(ss: u8, index: u8, base: u8) -> u8 {
    (ss << 6) | ((index & 7) << 3) | (base & 7)
}

/// Emit a 2-byte VEX prefix: C5 [R vvvv L pp].
fn emit_vex2(out: &mut Emitter, r: bool, vvvv: u8, l: bool, pp: u8) {
    let byte1 = (if r { 0 } else { 0x80 })
        | (((!vvvv) & 0x0F) << 3)
        | (if l { 0x04 } else { 0 })
        | (pp & 0x03);
    out.byte(0xC5);
    out.byte(byte1);
}

/// Emit a 3-byte VEX (`C4`) or XOP (`8F`) prefix: [R X B mmmmm] [W vvvv L pp].
#[allow(clippy::too_many_arguments)]
fn emit_vex3(
    out: &mut Emitter,
    lead: u8,
    r: bool,
    x: bool,
    b: bool,
    mmmmm: u8,
    w: bool,
    vvvv: u8,
    l: bool,
    pp: u8,
) {
    let byte1 = (if r { 0 } else { 0x80 })
        | (if x { 0 } else { 0x40 })
        | (if b { 0 } else { 0x20 })
        | (mmmmm & 0x1F);
    let byte2 = (if w { 0x80 } else { 0 })
        | (((!vvvv) & 0x0F) << 3)
        | (if l { 0x04 } else { 0 })
        | (pp & 0x03);
    out.byte(lead);
    out.byte(byte1);
    out.byte(byte2);
}

/// Fields shared by the EVEX and MVEX prefixes; `p2` is already assembled.
struct EvexBits {
    r: bool,
    x: bool,
    b: bool,
    r2: bool,
    map: u8,
    w: bool,
    vvvv: u8,
    pp: u8,
    p2: u8,
}

impl EvexBits {
    /// P0 register-extension bits: ~R ~X ~B ~R'.
    fn p0_high(&self) -> u8 {
        (if self.r { 0 } else { 0x80 })
            | (if self.x { 0 } else { 0x40 })
            | (if self.b { 0 } else { 0x20 })
            | (if self.r2 { 0 } else { 0x10 })
    }

    /// P1 without the EVEX/MVEX discriminating bit 2: W ~vvvv ? pp.
    fn p1(&self) -> u8 {
        (if self.w { 0x80 } else { 0 }) | (((!self.vvvv) & 0x0F) << 3) | (self.pp & 0x03)
    }
}

/// Emit an EVEX prefix: 62 [~R ~X ~B ~R' 0 0 mm] [W ~vvvv 1 pp] [z L'L b ~V' aaa].
fn emit_evex(out: &mut Emitter, bits: EvexBits) {
    out.byte(0x62);
    out.byte(bits.p0_high() | (bits.map & 0x03));
    out.byte(bits.p1() | 0x04);
    out.byte(bits.p2);
}

/// Emit an MVEX prefix: 62 [~R ~X ~B ~R' mmmm] [W ~vvvv 0 pp] [E sss ~V' kkk].
fn emit_mvex(out: &mut Emitter, bits: EvexBits) {
    out.byte(0x62);
    out.byte(bits.p0_high() | (bits.map & 0x0F));
    out.byte(bits.p1());
    out.byte(bits.p2);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{decode, Decoder, DecoderOptions};
    use crate::instruction::{MemoryOperand, OperandValue, RoundingControl};
    use crate::io::SliceSink;
    use alloc::vec;
    use Register::*;

    fn record(mode: CodeSize, code: Code, operands: &[OperandValue]) -> Instruction {
        Instruction::with_operands(mode, code, operands)
    }

    fn bytes64(code: Code, operands: &[OperandValue]) -> Vec<u8> {
        encode_to_vec(&record(CodeSize::Code64, code, operands))
            .unwrap()
            .0
    }

    #[test]
    fn jmp_short_in_32bit_mode() {
        let instr = record(CodeSize::Code32, Code::Jmp_rel8_32, &[OperandValue::Branch(0x12)]);
        let mut out = Vec::new();
        let (len, offsets) = encode(&instr, &mut out).unwrap();
        assert_eq!(len, 2);
        assert_eq!(out, vec![0xEB, 0x10]);
        assert_eq!(offsets.displacement_offset, 1);
        assert_eq!(offsets.displacement_size, 1);
        assert!(!offsets.has_immediate());

        let (decoded, n) = decode(&out[..], CodeSize::Code32, 0).unwrap();
        assert_eq!(n, 2);
        assert_eq!(decoded.code(), Code::Jmp_rel8_32);
        assert_eq!(decoded.near_branch_target(), 0x12);
    }

    #[test]
    fn branch_target_out_of_range() {
        let instr = record(CodeSize::Code64, Code::Jmp_rel8_64, &[OperandValue::Branch(0x1000)]);
        match encode_to_vec(&instr) {
            Err(EncodeError::BranchTargetOutOfRange {
                target,
                displacement,
                max,
                ..
            }) => {
                assert_eq!(target, 0x1000);
                assert_eq!(displacement, 0xFFE);
                assert_eq!(max, 127);
            }
            other => panic!("unexpected {:?}", other),
        }
        let mut near = instr;
        near.to_near_branch();
        assert_eq!(
            encode_to_vec(&near).unwrap().0,
            vec![0xE9, 0xFB, 0x0F, 0x00, 0x00]
        );
    }

    #[test]
    fn backward_branch_from_nonzero_ip() {
        let mut instr = record(CodeSize::Code64, Code::Jne_rel8_64, &[OperandValue::Branch(0x1000)]);
        instr.set_ip(0x1010);
        assert_eq!(encode_to_vec(&instr).unwrap().0, vec![0x75, 0xEE]);
    }

    #[test]
    fn register_forms_and_rex() {
        assert_eq!(
            bytes64(Code::Mov_rm64_r64, &[R9.into(), Rax.into()]),
            vec![0x49, 0x89, 0xC1]
        );
        assert_eq!(
            bytes64(Code::Xor_r32_rm32, &[Eax.into(), Eax.into()]),
            vec![0x33, 0xC0]
        );
        assert_eq!(bytes64(Code::Push_r64, &[R12.into()]), vec![0x41, 0x54]);
        assert_eq!(bytes64(Code::Push_r16, &[Ax.into()]), vec![0x66, 0x50]);
    }

    #[test]
    fn byte_registers_and_rex() {
        assert_eq!(
            bytes64(Code::Mov_rm8_r8, &[Sil.into(), Al.into()]),
            vec![0x40, 0x88, 0xC6]
        );
        let instr = record(CodeSize::Code64, Code::Mov_rm8_r8, &[Ah.into(), Sil.into()]);
        assert!(matches!(
            encode_to_vec(&instr),
            Err(EncodeError::NoEncodingForOperands { .. })
        ));
    }

    #[test]
    fn displacement_forms() {
        let rbp = MemoryOperand::with_base(Rbp);
        assert_eq!(
            bytes64(Code::Mov_r32_rm32, &[Eax.into(), rbp.into()]),
            vec![0x8B, 0x45, 0x00]
        );
        let rsp8 = MemoryOperand::with_base_displ(Rsp, 8);
        assert_eq!(
            bytes64(Code::Mov_r32_rm32, &[Eax.into(), rsp8.into()]),
            vec![0x8B, 0x44, 0x24, 0x08]
        );
        let forced = MemoryOperand::new(Rbx, Register::None, 1, 8, 8);
        let instr = record(CodeSize::Code64, Code::Mov_r32_rm32, &[Eax.into(), forced.into()]);
        let (bytes, offsets) = encode_to_vec(&instr).unwrap();
        assert_eq!(bytes, vec![0x8B, 0x83, 0x08, 0x00, 0x00, 0x00]);
        assert_eq!(offsets.displacement_range(), 2..6);
        let scaled = MemoryOperand::with_base_index(R13, Rcx, 4, 0);
        assert_eq!(
            bytes64(Code::Mov_r32_rm32, &[Eax.into(), scaled.into()]),
            vec![0x41, 0x8B, 0x44, 0x8D, 0x00]
        );
    }

    #[test]
    fn rsp_cannot_be_an_index() {
        let mem = MemoryOperand::with_base_index(Rax, Rsp, 1, 0);
        let instr = record(CodeSize::Code64, Code::Mov_r32_rm32, &[Eax.into(), mem.into()]);
        assert!(matches!(
            encode_to_vec(&instr),
            Err(EncodeError::NoEncodingForOperands { .. })
        ));
    }

    #[test]
    fn rip_relative_offsets() {
        let mem = MemoryOperand::with_base_displ(Rip, 0x10);
        let instr = record(CodeSize::Code64, Code::Lea_r64_m, &[Rax.into(), mem.into()]);
        let (bytes, offsets) = encode_to_vec(&instr).unwrap();
        assert_eq!(bytes, vec![0x48, 0x8D, 0x05, 0x10, 0x00, 0x00, 0x00]);
        assert_eq!(offsets.displacement_offset, 3);
        assert_eq!(offsets.displacement_size, 4);
    }

    #[test]
    fn absolute_address_in_64bit_mode_uses_sib() {
        let mem = MemoryOperand::new(Register::None, Register::None, 1, 0x1000, 8);
        assert_eq!(
            bytes64(Code::Mov_r32_rm32, &[Eax.into(), mem.into()]),
            vec![0x8B, 0x04, 0x25, 0x00, 0x10, 0x00, 0x00]
        );
    }

    #[test]
    fn immediates_and_range_checks() {
        let instr = record(CodeSize::Code64, Code::Add_rm64_imm8, &[Rax.into(), (-1i64).into()]);
        let (bytes, offsets) = encode_to_vec(&instr).unwrap();
        assert_eq!(bytes, vec![0x48, 0x83, 0xC0, 0xFF]);
        assert_eq!(offsets.immediate_range(), 3..4);

        let too_big = record(CodeSize::Code64, Code::Add_rm64_imm8, &[Rax.into(), 300i64.into()]);
        match encode_to_vec(&too_big) {
            Err(EncodeError::OperandOutOfRange {
                operand,
                value,
                min,
                max,
                ..
            }) => {
                assert_eq!((operand, value, min, max), (1, 300, -128, 127));
            }
            other => panic!("unexpected {:?}", other),
        }

        let enter = record(
            CodeSize::Code64,
            Code::Enterq_imm16_imm8,
            &[0x20i64.into(), 1i64.into()],
        );
        let (bytes, offsets) = encode_to_vec(&enter).unwrap();
        assert_eq!(bytes, vec![0xC8, 0x20, 0x00, 0x01]);
        assert_eq!((offsets.immediate_offset, offsets.immediate_size), (1, 2));
        assert_eq!((offsets.immediate_offset2, offsets.immediate_size2), (3, 1));
    }

    #[test]
    fn implicit_one_is_not_an_immediate() {
        let instr = record(CodeSize::Code64, Code::Shl_rm32_1, &[Ecx.into()]);
        let (bytes, offsets) = encode_to_vec(&instr).unwrap();
        assert_eq!(bytes, vec![0xD1, 0xE1]);
        assert!(!offsets.has_immediate());
    }

    #[test]
    fn lock_needs_a_memory_destination() {
        let mut reg = record(CodeSize::Code64, Code::Add_rm32_r32, &[Eax.into(), Ecx.into()]);
        reg.set_lock_prefix(true);
        assert!(matches!(
            encode_to_vec(&reg),
            Err(EncodeError::NoEncodingForOperands { .. })
        ));
        let mut mem = record(
            CodeSize::Code64,
            Code::Add_rm32_r32,
            &[MemoryOperand::with_base(Rax).into(), Ecx.into()],
        );
        mem.set_lock_prefix(true);
        assert_eq!(encode_to_vec(&mem).unwrap().0, vec![0xF0, 0x01, 0x08]);
    }

    #[test]
    fn sixteen_bit_addressing() {
        let mem = MemoryOperand::with_base_index(Bx, Si, 1, 4);
        let instr = record(CodeSize::Code16, Code::Mov_r16_rm16, &[Ax.into(), mem.into()]);
        assert_eq!(encode_to_vec(&instr).unwrap().0, vec![0x8B, 0x40, 0x04]);
        let in32 = record(CodeSize::Code32, Code::Mov_r16_rm16, &[Ax.into(), mem.into()]);
        assert_eq!(
            encode_to_vec(&in32).unwrap().0,
            vec![0x67, 0x66, 0x8B, 0x40, 0x04]
        );
    }

    #[test]
    fn segment_override_and_string_ops() {
        let mem = MemoryOperand::with_base(Rax).segment(Fs);
        assert_eq!(
            bytes64(Code::Mov_r32_rm32, &[Eax.into(), mem.into()]),
            vec![0x64, 0x8B, 0x00]
        );
        let mut movs = Instruction::new(CodeSize::Code64, Code::Movsb_m8_m8);
        movs.set_rep_prefix(RepPrefix::Repe);
        assert_eq!(encode_to_vec(&movs).unwrap().0, vec![0xF3, 0xA4]);
        let mut nop = Instruction::new(CodeSize::Code64, Code::Nopd);
        nop.set_rep_prefix(RepPrefix::Repe);
        assert!(encode_to_vec(&nop).is_err());
    }

    #[test]
    fn vex2_and_prevent_vex2() {
        let instr = record(
            CodeSize::Code64,
            Code::VEX_Vaddps_xmm_xmm_xmmm128,
            &[Xmm1.into(), Xmm2.into(), Xmm3.into()],
        );
        assert_eq!(
            encode_to_vec(&instr).unwrap().0,
            vec![0xC5, 0xE8, 0x58, 0xCB]
        );
        let encoder = Encoder::new(EncoderOptions {
            prevent_vex2: true,
            ..EncoderOptions::default()
        });
        assert_eq!(
            encoder.encode_to_vec(&instr).unwrap().0,
            vec![0xC4, 0xE1, 0x68, 0x58, 0xCB]
        );
        let extended = record(
            CodeSize::Code64,
            Code::VEX_Vaddps_xmm_xmm_xmmm128,
            &[Xmm1.into(), Xmm2.into(), Xmm9.into()],
        );
        assert_eq!(
            encode_to_vec(&extended).unwrap().0,
            vec![0xC4, 0xC1, 0x68, 0x58, 0xC9]
        );
    }

    #[test]
    fn evex_attributes_are_rejected_on_vex() {
        let mut instr = record(
            CodeSize::Code64,
            Code::VEX_Vaddps_xmm_xmm_xmmm128,
            &[Xmm1.into(), Xmm2.into(), Xmm3.into()],
        );
        instr.set_op_mask(K1);
        assert!(matches!(
            encode_to_vec(&instr),
            Err(EncodeError::NoEncodingForOperands { .. })
        ));
    }

    #[test]
    fn evex_mask_and_rounding() {
        let code = Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er;
        let mut instr = record(CodeSize::Code64, code, &[Zmm1.into(), Zmm2.into(), Zmm3.into()]);
        instr.set_op_mask(K1);
        assert_eq!(
            encode_to_vec(&instr).unwrap().0,
            vec![0x62, 0xF1, 0x6C, 0x49, 0x58, 0xCB]
        );
        let mut rz = record(CodeSize::Code64, code, &[Zmm1.into(), Zmm2.into(), Zmm3.into()]);
        rz.set_rounding_control(RoundingControl::RoundTowardZero);
        assert_eq!(
            encode_to_vec(&rz).unwrap().0,
            vec![0x62, 0xF1, 0x6C, 0x78, 0x58, 0xCB]
        );
        let mut zeroing = instr;
        zeroing.set_op_mask(Register::None);
        zeroing.set_zeroing_masking(true);
        assert!(encode_to_vec(&zeroing).is_err());
    }

    #[test]
    fn evex_compressed_displacement() {
        let code = Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er;
        let full = MemoryOperand::with_base_displ(Rax, 0x40);
        let (bytes, offsets) = encode_to_vec(&record(
            CodeSize::Code64,
            code,
            &[Zmm1.into(), Zmm2.into(), full.into()],
        ))
        .unwrap();
        assert_eq!(bytes, vec![0x62, 0xF1, 0x6C, 0x48, 0x58, 0x48, 0x01]);
        assert_eq!(offsets.displacement_range(), 6..7);

        let bcst = MemoryOperand::with_base_displ(Rax, 4).broadcast();
        assert_eq!(
            bytes64(code, &[Zmm1.into(), Zmm2.into(), bcst.into()]),
            vec![0x62, 0xF1, 0x6C, 0x58, 0x58, 0x48, 0x01]
        );

        // Not a multiple of 64: falls back to disp32.
        let odd = MemoryOperand::with_base_displ(Rax, 0x20);
        assert_eq!(
            bytes64(code, &[Zmm1.into(), Zmm2.into(), odd.into()]),
            vec![0x62, 0xF1, 0x6C, 0x48, 0x58, 0x88, 0x20, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn mvex_swizzle() {
        let mut instr = record(
            CodeSize::Code64,
            Code::MVEX_Vaddps_zmm_k1_zmm_zmmmt,
            &[Zmm1.into(), Zmm2.into(), Zmm3.into()],
        );
        instr.set_mvex_reg_mem_conv(MvexRegMemConv::RegSwizzleCdab);
        let bytes = encode_to_vec(&instr).unwrap().0;
        assert_eq!(bytes, vec![0x62, 0xF1, 0x68, 0x18, 0x58, 0xCB]);

        let decoder = Decoder::new(CodeSize::Code64, DecoderOptions { knc: true });
        let (decoded, _) = decoder.decode(&bytes[..], 0).unwrap();
        assert_eq!(decoded.mvex_reg_mem_conv(), MvexRegMemConv::RegSwizzleCdab);
    }

    #[test]
    fn three_dnow_suffix_follows_modrm() {
        assert_eq!(
            bytes64(Code::D3NOW_Pfadd_mm_mmm64, &[Mm0.into(), Mm1.into()]),
            vec![0x0F, 0x0F, 0xC1, 0x9E]
        );
    }

    #[test]
    fn wrong_register_class() {
        let instr = record(CodeSize::Code64, Code::Mov_r32_rm32, &[Rax.into(), Eax.into()]);
        match encode_to_vec(&instr) {
            Err(EncodeError::UnsupportedOperandKind {
                operand, expected, ..
            }) => {
                assert_eq!(operand, 0);
                assert_eq!(expected, "32-bit GPR");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn invalid_mode() {
        let instr = record(CodeSize::Code32, Code::Push_r64, &[Rax.into()]);
        assert!(matches!(
            encode_to_vec(&instr),
            Err(EncodeError::NoEncodingForOperands { .. })
        ));
        let extended = record(CodeSize::Code32, Code::Mov_r32_rm32, &[R8d.into(), Eax.into()]);
        assert!(matches!(
            encode_to_vec(&extended),
            Err(EncodeError::OperandOutOfRange { .. })
        ));
    }

    #[test]
    fn length_cap() {
        let mem = MemoryOperand::new(Eax, Ecx, 1, 0x1234_5678, 4).segment(Fs);
        let instr = record(
            CodeSize::Code64,
            Code::XOP_Bextr_r64_rm64_imm32,
            &[Rax.into(), mem.into(), 1i64.into()],
        );
        assert!(matches!(
            encode_to_vec(&instr),
            Err(EncodeError::NoEncodingForOperands { .. })
        ));
    }

    #[test]
    fn sink_failure_writes_nothing() {
        let instr = record(CodeSize::Code32, Code::Jmp_rel8_32, &[OperandValue::Branch(0x12)]);
        let mut buf = [0u8; 1];
        let err = encode(&instr, SliceSink::new(&mut buf)).unwrap_err();
        assert!(matches!(err, EncodeError::Sink { .. }));
        assert_eq!(err.instruction().code(), Code::Jmp_rel8_32);
        assert_eq!(buf, [0]);
    }

    #[test]
    fn invalid_record() {
        let instr = Instruction::default();
        assert!(matches!(
            encode_to_vec(&instr),
            Err(EncodeError::NoEncodingForOperands { .. })
        ));
    }
}
