//! Decoder: byte source → Instruction Record.
//!
//! One call decodes one instruction in fixed stages:
//!
//! 1. legacy prefixes and REX;
//! 2. family detection (escape bytes, VEX, EVEX, XOP, MVEX, 3DNow!);
//! 3. ModRM, SIB and displacement;
//! 4. template selection over the candidates of the opcode key;
//! 5. trailing immediates, branch fields and far pointers;
//! 6. validation of LOCK, vvvv and the EVEX/MVEX attributes against the
//!    selected template.
//!
//! Every failure is local to the instruction being decoded, so a scanner
//! can skip one byte and resynchronise ([`Decoder::iter`]).

use crate::code::Code;
use crate::error::DecodeError;
use crate::instruction::{
    CodeSize, Instruction, MemoryOperand, MvexRegMemConv, OpKind, RepPrefix, RoundingControl,
};
use crate::io::ByteSource;
use crate::register::{Register, RegisterClass};
use crate::tables::{
    candidates, flags, BranchWidth, EncodingKind, Field, ImmediateEncoding, MandatoryPrefix,
    OpCodeTemplate, OpcodeMap, OperandEncoding, VectorLength, WBit,
};

/// Architectural upper bound on the length of one instruction.
pub const MAX_INSTRUCTION_LEN: usize = 15;

/// Decoder switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderOptions {
    /// Decode `62` with P1 bit 2 clear as Knights Corner MVEX (64-bit mode
    /// only). Without it such bytes are rejected.
    pub knc: bool,
}

/// Decoder for one processor mode.
///
/// The decoder holds no per-instruction state; one value can be shared
/// freely and used from several threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoder {
    code_size: CodeSize,
    options: DecoderOptions,
}

impl Decoder {
    /// Decoder for `code_size` with the given options.
    pub fn new(code_size: CodeSize, options: DecoderOptions) -> Self {
        Self { code_size, options }
    }

    /// Processor mode.
    pub fn code_size(&self) -> CodeSize {
        self.code_size
    }

    /// Options the decoder was built with.
    pub fn options(&self) -> DecoderOptions {
        self.options
    }

    /// Decodes one instruction starting at address `ip`.
    ///
    /// Returns the record and the number of bytes consumed. On failure the
    /// source may have been partially consumed.
    pub fn decode<S: ByteSource>(
        &self,
        source: S,
        ip: u64,
    ) -> Result<(Instruction, usize), DecodeError> {
        self.decode_one(source, ip).map_err(|err| {
            log::trace!("decode rejected: {}", err);
            err
        })
    }

    /// Linear sweep over `bytes`, the first byte sitting at `ip`.
    ///
    /// After a failure the scanner skips one byte and tries again, so every
    /// byte is covered by exactly one successful instruction or one error.
    pub fn iter<'a>(&self, bytes: &'a [u8], ip: u64) -> DecodeIter<'a> {
        DecodeIter {
            decoder: *self,
            bytes,
            ip,
        }
    }

    fn decode_one<S: ByteSource>(
        &self,
        source: S,
        ip: u64,
    ) -> Result<(Instruction, usize), DecodeError> {
        let long_mode = self.code_size == CodeSize::Code64;
        let mut rd = Reader {
            source,
            ip,
            len: 0,
        };
        let (prefixes, first) = scan_prefixes(&mut rd, long_mode)?;
        let mut fields = Fields::from_rex(prefixes.rex);
        let mut opcode = first;
        // ByteSource cannot un-read: a byte read to disambiguate C4/C5/62/8F
        // is kept as the ModRM of the legacy form.
        let mut early_modrm = None;

        match first {
            0x0F => {
                let second = rd.byte()?;
                match second {
                    0x38 => {
                        fields.map = OpcodeMap::Map0F38;
                        opcode = rd.byte()?;
                    }
                    0x3A => {
                        fields.map = OpcodeMap::Map0F3A;
                        opcode = rd.byte()?;
                    }
                    0x0F => {
                        fields.encoding = EncodingKind::D3now;
                        fields.map = OpcodeMap::Map0F;
                    }
                    _ => {
                        fields.map = OpcodeMap::Map0F;
                        opcode = second;
                    }
                }
            }
            0xC4 | 0xC5 | 0x62 | 0x8F => {
                let next = rd.byte()?;
                let vector = if first == 0x8F {
                    next & 0x1F >= 8
                } else {
                    long_mode || next >= 0xC0
                };
                if vector {
                    if prefixes.operand_size || prefixes.rep != 0 || prefixes.lock || prefixes.rex != 0
                    {
                        return Err(DecodeError::InvalidPrefixCombination {
                            ip,
                            reason: "66/F2/F3/F0/REX before a vector prefix",
                        });
                    }
                    fields = self.vector_fields(&mut rd, first, next)?;
                    if !long_mode {
                        if fields.v2 != 0 {
                            return Err(DecodeError::InvalidOpcode {
                                ip,
                                reason: "EVEX.V' must be 1 outside 64-bit mode",
                            });
                        }
                        fields.clear_extensions();
                    }
                    opcode = rd.byte()?;
                } else {
                    early_modrm = Some(next);
                }
            }
            _ => {}
        }

        let address_bits = self.address_bits(&prefixes);
        let (needs_modrm, mod_ignored) = if fields.encoding == EncodingKind::D3now {
            (true, false)
        } else {
            match candidates(fields.encoding, fields.map, opcode).next() {
                Some((_, t)) => (t.has_modrm(), t.has(flags::MOD_IGNORED)),
                None => {
                    return Err(DecodeError::InvalidOpcode {
                        ip,
                        reason: "unassigned opcode",
                    })
                }
            }
        };
        let modrm = if needs_modrm {
            let byte = match early_modrm {
                Some(byte) => byte,
                None => rd.byte()?,
            };
            Some(ModRm::new(byte))
        } else {
            None
        };
        let raw_memory = match modrm {
            Some(m) if !m.is_register() && !mod_ignored => Some(read_memory(
                &mut rd,
                m,
                &fields,
                address_bits,
                long_mode,
            )?),
            _ => None,
        };
        if fields.encoding == EncodingKind::D3now {
            opcode = rd.byte()?;
        }

        let cx = Context {
            prefixes,
            fields,
            modrm,
            address_bits,
            legacy_prefix: legacy_mandatory_prefix(&prefixes),
            long_mode,
        };
        let (code, t) = self.select(&cx, opcode, ip)?;

        let mut instr = Instruction::new(self.code_size, code);
        let mut memory = raw_memory.map(|raw| {
            let broadcast = fields.bcst && t.encoding == EncodingKind::Evex;
            raw.operand(t.disp8_scale(broadcast), broadcast)
        });
        let mut branch_rel = None;
        let rex = prefixes.rex != 0;
        let legacy = matches!(t.encoding, EncodingKind::Legacy | EncodingKind::D3now);
        let invalid_register = DecodeError::InvalidOpcode {
            ip,
            reason: "register number out of range",
        };

        for (i, op) in t.operands().iter().enumerate() {
            match *op {
                OperandEncoding::None | OperandEncoding::Fixed(_) | OperandEncoding::Mem => {}
                OperandEncoding::Reg(class, field) => {
                    let number = cx.field_number(field, opcode);
                    let reg = register(class, number, rex, legacy).ok_or(invalid_register)?;
                    instr.set_op_register(i, reg);
                }
                OperandEncoding::RegOrMem(class) => {
                    if memory.is_some() {
                        instr.set_op_kind(i, OpKind::Memory);
                    } else {
                        let number = cx.field_number(Field::ModrmRm, opcode);
                        let reg = register(class, number, rex, legacy).ok_or(invalid_register)?;
                        instr.set_op_register(i, reg);
                    }
                }
                OperandEncoding::Moffs => {
                    let width = address_bits / 8;
                    let raw = rd.le(width as usize)?;
                    memory = Some(MemoryOperand::new(
                        Register::None,
                        Register::None,
                        1,
                        raw as i64,
                        width as u8,
                    ));
                }
                OperandEncoding::StringSrc => {
                    instr.set_op_kind(i, OpKind::string_source(address_bits));
                }
                OperandEncoding::StringDst => {
                    instr.set_op_kind(i, OpKind::string_destination(address_bits));
                }
                OperandEncoding::Imm(enc) => {
                    let raw = rd.le(enc.size())?;
                    let value = match enc {
                        ImmediateEncoding::One => 1,
                        ImmediateEncoding::Sx8To16
                        | ImmediateEncoding::Sx8To32
                        | ImmediateEncoding::Sx8To64 => i64::from(raw as u8 as i8) as u64,
                        ImmediateEncoding::Sx32To64 => i64::from(raw as u32 as i32) as u64,
                        _ => raw,
                    };
                    instr.store_immediate(enc.op_kind(), value);
                }
                OperandEncoding::Branch(width) => {
                    let raw = rd.le(width.size())?;
                    branch_rel = Some(match width {
                        BranchWidth::Rel8 => i64::from(raw as u8 as i8),
                        BranchWidth::Rel16 => i64::from(raw as u16 as i16),
                        BranchWidth::Rel32 => i64::from(raw as u32 as i32),
                    });
                }
                OperandEncoding::FarPtr => {
                    let offset_size = if t.far_branch_kind() == OpKind::FarBranch16 {
                        2
                    } else {
                        4
                    };
                    let offset = rd.le(offset_size)? as u32;
                    let selector = rd.le(2)? as u16;
                    instr.set_far_branch(selector, offset);
                }
            }
        }

        let len = rd.len;
        if let Some(rel) = branch_rel {
            let next_ip = ip.wrapping_add(len as u64);
            instr.set_near_branch_target(next_ip.wrapping_add(rel as u64));
        }
        if let Some(mem) = memory {
            instr.set_memory(&mem);
        }
        if instr.has_memory_operand() {
            instr.set_segment_prefix(prefixes.segment);
        } else {
            instr.set_segment_prefix(Register::None);
        }

        self.validate(&mut instr, t, &cx, raw_memory.map(|raw| raw.sib), ip)?;
        instr.set_ip(ip);
        instr.set_len(len);
        Ok((instr, len))
    }

    /// Reads the rest of a VEX/XOP/EVEX/MVEX prefix whose first payload
    /// byte is `byte1`.
    fn vector_fields<S: ByteSource>(
        &self,
        rd: &mut Reader<S>,
        first: u8,
        byte1: u8,
    ) -> Result<Fields, DecodeError> {
        let ip = rd.ip;
        let invalid = |reason| DecodeError::InvalidOpcode { ip, reason };
        match first {
            0xC5 => Ok(Fields::vex2(byte1)),
            0xC4 => {
                let byte2 = rd.byte()?;
                Fields::vex3(EncodingKind::Vex, byte1, byte2).ok_or(invalid("reserved VEX map"))
            }
            0x8F => {
                let byte2 = rd.byte()?;
                Fields::vex3(EncodingKind::Xop, byte1, byte2).ok_or(invalid("reserved XOP map"))
            }
            _ => {
                let p1 = rd.byte()?;
                let p2 = rd.byte()?;
                if p1 & 0x04 != 0 {
                    Fields::evex(byte1, p1, p2).ok_or(invalid("reserved EVEX P0 bits or map"))
                } else if self.options.knc && self.code_size == CodeSize::Code64 {
                    Fields::mvex(byte1, p1, p2).ok_or(invalid("reserved MVEX map"))
                } else {
                    Err(invalid("EVEX P1 bit 2 clear"))
                }
            }
        }
    }

    /// First candidate of the opcode key that accepts the decoded fields.
    fn select(
        &self,
        cx: &Context,
        opcode: u8,
        ip: u64,
    ) -> Result<(Code, &'static OpCodeTemplate), DecodeError> {
        let mut wrong_mode = false;
        for (code, t) in candidates(cx.fields.encoding, cx.fields.map, opcode) {
            match self.check(t, cx) {
                Verdict::Match => return Ok((code, t)),
                Verdict::WrongMode => wrong_mode = true,
                Verdict::Mismatch => {}
            }
        }
        if wrong_mode {
            Err(DecodeError::InvalidModeForInstruction {
                ip,
                code_size: self.code_size.bits(),
            })
        } else {
            Err(DecodeError::InvalidOpcode {
                ip,
                reason: "no template matches the encoding",
            })
        }
    }

    fn check(&self, t: &OpCodeTemplate, cx: &Context) -> Verdict {
        let f = &cx.fields;
        let register_form = cx.modrm.is_some_and(ModRm::is_register);

        if let Some(m) = cx.modrm {
            if t.modrm_reg.is_some_and(|digit| digit != m.reg) {
                return Verdict::Mismatch;
            }
            if t.modrm_rm.is_some_and(|rm| !m.is_register() || rm != m.rm) {
                return Verdict::Mismatch;
            }
            if !t.has(flags::MOD_IGNORED) {
                let fits = if m.is_register() {
                    accepts_register_rm(t)
                } else {
                    t.accepts_memory()
                };
                if !fits {
                    return Verdict::Mismatch;
                }
            }
        }

        let prefix_fits = match t.encoding {
            EncodingKind::Legacy | EncodingKind::D3now => match t.prefix {
                MandatoryPrefix::Any => true,
                MandatoryPrefix::Np => {
                    cx.legacy_prefix == MandatoryPrefix::Np
                        || (cx.legacy_prefix == MandatoryPrefix::P66 && t.op_size.bits().is_some())
                }
                required => required == cx.legacy_prefix,
            },
            _ => t.prefix == MandatoryPrefix::from_pp(f.pp),
        };
        if !prefix_fits {
            return Verdict::Mismatch;
        }

        if t
            .op_size
            .bits()
            .is_some_and(|bits| bits != self.operand_bits(t, cx))
        {
            return Verdict::Mismatch;
        }
        if t.addr_size.bits().is_some_and(|bits| bits != cx.address_bits) {
            return Verdict::Mismatch;
        }

        let w_fits = match t.w {
            WBit::Ignored => true,
            WBit::W0 => !f.w,
            WBit::W1 => f.w,
            WBit::W0In64 => !(self.code_size == CodeSize::Code64 && f.w),
        };
        if !w_fits {
            return Verdict::Mismatch;
        }

        if t.encoding == EncodingKind::Evex && f.bcst && register_form {
            // EVEX.b on a register form: L'L holds the rounding mode and the
            // vector length is 512 bits.
            if !t.has(flags::SAE) || !matches!(t.l, VectorLength::L512 | VectorLength::Ignored) {
                return Verdict::Mismatch;
            }
        } else if t.l.field().is_some_and(|l| l != f.l) {
            return Verdict::Mismatch;
        }

        if t.has(flags::NO_REX_B) && f.b != 0 {
            return Verdict::Mismatch;
        }

        if t.is_valid_in(self.code_size) {
            Verdict::Match
        } else {
            Verdict::WrongMode
        }
    }

    /// Effective operand size for template `t`.
    fn operand_bits(&self, t: &OpCodeTemplate, cx: &Context) -> u32 {
        let o66 = cx.prefixes.operand_size && t.prefix != MandatoryPrefix::P66;
        match self.code_size {
            CodeSize::Code16 => {
                if o66 {
                    32
                } else {
                    16
                }
            }
            CodeSize::Code32 => {
                if o66 {
                    16
                } else {
                    32
                }
            }
            CodeSize::Code64 => {
                if t.has(flags::FORCE64) || cx.fields.w {
                    64
                } else if o66 {
                    16
                } else if t.has(flags::DEFAULT64) {
                    64
                } else {
                    32
                }
            }
        }
    }

    fn address_bits(&self, prefixes: &Prefixes) -> u32 {
        match (self.code_size, prefixes.address_size) {
            (CodeSize::Code16, false) | (CodeSize::Code32, true) => 16,
            (CodeSize::Code16, true) | (CodeSize::Code32, false) | (CodeSize::Code64, true) => 32,
            (CodeSize::Code64, false) => 64,
        }
    }

    /// Post-selection checks plus the prefix-derived record attributes.
    fn validate(
        &self,
        instr: &mut Instruction,
        t: &OpCodeTemplate,
        cx: &Context,
        sib: Option<bool>,
        ip: u64,
    ) -> Result<(), DecodeError> {
        let invalid = |reason| DecodeError::InvalidOpcode { ip, reason };
        let p = &cx.prefixes;
        let f = &cx.fields;
        let memory_form = instr.op_kinds().any(|k| k == OpKind::Memory);

        if p.lock {
            if !t.has(flags::LOCK) || !memory_form {
                return Err(DecodeError::InvalidPrefixCombination {
                    ip,
                    reason: "LOCK without a lockable memory destination",
                });
            }
            instr.set_lock_prefix(true);
        }
        if p.rep != 0
            && t.has(flags::REP)
            && !matches!(t.prefix, MandatoryPrefix::PF2 | MandatoryPrefix::PF3)
        {
            instr.set_rep_prefix(if p.rep == 0xF3 {
                RepPrefix::Repe
            } else {
                RepPrefix::Repne
            });
        }

        if !matches!(t.encoding, EncodingKind::Legacy | EncodingKind::D3now)
            && !t.uses_vvvv()
            && (f.vvvv | f.v2) != 0
        {
            return Err(invalid("unused vvvv must be 1111"));
        }

        for i in 0..instr.op_count() {
            let reg = instr.op_register(i);
            if reg.class() == RegisterClass::Control && !matches!(reg.number(), 0 | 2 | 3 | 4 | 8) {
                return Err(invalid("reserved control register"));
            }
        }
        if t.has(flags::SREG_WRITE) && instr.op_register(0) == Register::Cs {
            return Err(invalid("CS is not a writable segment register"));
        }
        if t.has(flags::REQUIRES_SIB) && sib != Some(true) {
            return Err(invalid("memory operand requires a SIB byte"));
        }
        if t.has(flags::NO_ADDR16) && memory_form && cx.address_bits == 16 {
            return Err(invalid("16-bit addressing is reserved for this form"));
        }

        match t.encoding {
            EncodingKind::Evex => {
                apply_opmask(instr, t, f.aaa, ip)?;
                if f.z {
                    if !t.has(flags::ZEROING) {
                        return Err(invalid("zeroing-masking not allowed"));
                    }
                    if f.aaa == 0 {
                        return Err(invalid("zeroing-masking without an opmask"));
                    }
                    instr.set_zeroing_masking(true);
                }
                if f.bcst {
                    if memory_form {
                        if !t.has(flags::BROADCAST) {
                            return Err(invalid("embedded broadcast not allowed"));
                        }
                        instr.set_broadcast(true);
                    } else if t.has(flags::ROUNDING) {
                        instr.set_rounding_control(RoundingControl::from_bits(f.l));
                    } else {
                        instr.set_suppress_all_exceptions(true);
                    }
                }
            }
            EncodingKind::Mvex => {
                apply_opmask(instr, t, f.aaa, ip)?;
                if memory_form {
                    if f.bcst {
                        if !t.has(flags::EVICTION_HINT) {
                            return Err(invalid("eviction hint not allowed"));
                        }
                        instr.set_mvex_eviction_hint(true);
                    }
                    if f.sss != 0 {
                        if !t.has(flags::MVEX_CONVERSION) {
                            return Err(invalid("memory conversion not allowed"));
                        }
                        instr.set_mvex_reg_mem_conv(MvexRegMemConv::from_sss(f.sss, false));
                    }
                } else if f.bcst {
                    if t.has(flags::ROUNDING) {
                        instr.set_rounding_control(RoundingControl::from_bits(f.sss));
                        instr.set_suppress_all_exceptions(f.sss & 4 != 0);
                    } else if t.has(flags::SAE) && f.sss == 4 {
                        instr.set_suppress_all_exceptions(true);
                    } else {
                        return Err(invalid("MVEX.E on a register form"));
                    }
                } else if f.sss != 0 {
                    if !t.has(flags::MVEX_SWIZZLE) {
                        return Err(invalid("register swizzle not allowed"));
                    }
                    instr.set_mvex_reg_mem_conv(MvexRegMemConv::from_sss(f.sss, true));
                }
            }
            _ => {}
        }
        Ok(())
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(CodeSize::Code64, DecoderOptions::default())
    }
}

/// Decodes one instruction with default options.
pub fn decode<S: ByteSource>(
    source: S,
    code_size: CodeSize,
    ip: u64,
) -> Result<(Instruction, usize), DecodeError> {
    Decoder::new(code_size, DecoderOptions::default()).decode(source, ip)
}

fn apply_opmask(
    instr: &mut Instruction,
    t: &OpCodeTemplate,
    aaa: u8,
    ip: u64,
) -> Result<(), DecodeError> {
    if aaa == 0 {
        if t.has(flags::OPMASK_REQUIRED) {
            return Err(DecodeError::InvalidOpcode {
                ip,
                reason: "opmask required",
            });
        }
        return Ok(());
    }
    if !t.has(flags::OPMASK) {
        return Err(DecodeError::InvalidOpcode {
            ip,
            reason: "opmask not allowed",
        });
    }
    let mask = Register::from_class_number(RegisterClass::Opmask, aaa).unwrap_or_default();
    instr.set_op_mask(mask);
    Ok(())
}

// ─── Scanner ────────────────────────────────────────────────────────────

/// Iterator returned by [`Decoder::iter`].
#[derive(Debug, Clone)]
pub struct DecodeIter<'a> {
    decoder: Decoder,
    bytes: &'a [u8],
    ip: u64,
}

impl DecodeIter<'_> {
    /// Address of the next byte to decode.
    pub fn ip(&self) -> u64 {
        self.ip
    }

    /// Bytes not yet decoded.
    pub fn remaining(&self) -> &[u8] {
        self.bytes
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = Result<Instruction, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bytes.is_empty() {
            return None;
        }
        match self.decoder.decode(self.bytes, self.ip) {
            Ok((instr, len)) => {
                self.bytes = self.bytes.get(len..).unwrap_or(&[]);
                self.ip = self.ip.wrapping_add(len as u64);
                Some(Ok(instr))
            }
            Err(err) => {
                log::debug!("resynchronising one byte after {:#x}: {}", self.ip, err);
                self.bytes = self.bytes.get(1..).unwrap_or(&[]);
                self.ip = self.ip.wrapping_add(1);
                Some(Err(err))
            }
        }
    }
}

impl core::iter::FusedIterator for DecodeIter<'_> {}

// ─── Byte reader ────────────────────────────────────────────────────────

struct Reader<S> {
    source: S,
    ip: u64,
    len: usize,
}

impl<S: ByteSource> Reader<S> {
    fn byte(&mut self) -> Result<u8, DecodeError> {
        if self.len >= MAX_INSTRUCTION_LEN {
            return Err(DecodeError::InstructionTooLong { ip: self.ip });
        }
        let byte = self.source.next_byte().ok_or(DecodeError::TruncatedInput {
            ip: self.ip,
            consumed: self.len,
        })?;
        self.len += 1;
        Ok(byte)
    }

    /// Little-endian unsigned value of `size` bytes.
    fn le(&mut self, size: usize) -> Result<u64, DecodeError> {
        let mut value = 0u64;
        for i in 0..size {
            value |= u64::from(self.byte()?) << (8 * i);
        }
        Ok(value)
    }
}

// ─── Prefixes and vector fields ─────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
struct Prefixes {
    segment: Register,
    operand_size: bool,
    address_size: bool,
    lock: bool,
    /// Last of `F2`/`F3`, 0 when absent.
    rep: u8,
    /// REX directly before the opcode, 0 when absent.
    rex: u8,
}

/// Consumes legacy prefixes and REX; returns them with the first opcode byte.
fn scan_prefixes<S: ByteSource>(
    rd: &mut Reader<S>,
    long_mode: bool,
) -> Result<(Prefixes, u8), DecodeError> {
    let mut p = Prefixes::default();
    loop {
        let byte = rd.byte()?;
        let segment = match byte {
            0x26 => Some(Register::Es),
            0x2E => Some(Register::Cs),
            0x36 => Some(Register::Ss),
            0x3E => Some(Register::Ds),
            0x64 => Some(Register::Fs),
            0x65 => Some(Register::Gs),
            _ => None,
        };
        match (byte, segment) {
            (_, Some(seg)) => {
                // Only FS and GS override anything in 64-bit mode.
                if !long_mode || matches!(seg, Register::Fs | Register::Gs) {
                    p.segment = seg;
                }
            }
            (0x66, _) => p.operand_size = true,
            (0x67, _) => p.address_size = true,
            (0xF0, _) => p.lock = true,
            (0xF2 | 0xF3, _) => p.rep = byte,
            (0x40..=0x4F, _) if long_mode => {
                p.rex = byte;
                continue;
            }
            _ => return Ok((p, byte)),
        }
        // REX only counts when it immediately precedes the opcode.
        p.rex = 0;
    }
}

/// REX/VEX/EVEX/XOP/MVEX fields, un-inverted.
#[derive(Debug, Clone, Copy, Default)]
struct Fields {
    encoding: EncodingKind,
    map: OpcodeMap,
    pp: u8,
    w: bool,
    /// R, X and B, each as bit 3 of a register number.
    r: u8,
    x: u8,
    b: u8,
    /// EVEX R' and V', each as bit 4 of a register number.
    r2: u8,
    v2: u8,
    vvvv: u8,
    l: u8,
    z: bool,
    /// EVEX.b, or MVEX.E.
    bcst: bool,
    aaa: u8,
    sss: u8,
}

impl Fields {
    fn from_rex(rex: u8) -> Self {
        Self {
            w: rex & 0x08 != 0,
            r: (rex & 0x04) << 1,
            x: (rex & 0x02) << 2,
            b: (rex & 0x01) << 3,
            ..Self::default()
        }
    }

    fn vex2(byte1: u8) -> Self {
        Self {
            encoding: EncodingKind::Vex,
            map: OpcodeMap::Map0F,
            r: (!byte1 >> 4) & 0x08,
            vvvv: (!byte1 >> 3) & 0x0F,
            l: (byte1 >> 2) & 1,
            pp: byte1 & 3,
            ..Self::default()
        }
    }

    /// Three-byte VEX (`C4`) or XOP (`8F`) payload.
    fn vex3(encoding: EncodingKind, byte1: u8, byte2: u8) -> Option<Self> {
        let map = match (encoding, byte1 & 0x1F) {
            (EncodingKind::Vex, 1) => OpcodeMap::Map0F,
            (EncodingKind::Vex, 2) => OpcodeMap::Map0F38,
            (EncodingKind::Vex, 3) => OpcodeMap::Map0F3A,
            (EncodingKind::Xop, 8) => OpcodeMap::Xop8,
            (EncodingKind::Xop, 9) => OpcodeMap::Xop9,
            (EncodingKind::Xop, 10) => OpcodeMap::XopA,
            _ => return None,
        };
        Some(Self {
            encoding,
            map,
            r: (!byte1 >> 4) & 0x08,
            x: (!byte1 >> 3) & 0x08,
            b: (!byte1 >> 2) & 0x08,
            w: byte2 & 0x80 != 0,
            vvvv: (!byte2 >> 3) & 0x0F,
            l: (byte2 >> 2) & 1,
            pp: byte2 & 3,
            ..Self::default()
        })
    }

    fn evex(p0: u8, p1: u8, p2: u8) -> Option<Self> {
        if p0 & 0x0C != 0 {
            return None;
        }
        let map = match p0 & 3 {
            1 => OpcodeMap::Map0F,
            2 => OpcodeMap::Map0F38,
            3 => OpcodeMap::Map0F3A,
            _ => return None,
        };
        Some(Self {
            encoding: EncodingKind::Evex,
            map,
            z: p2 & 0x80 != 0,
            l: (p2 >> 5) & 3,
            bcst: p2 & 0x10 != 0,
            ..Self::evex_common(p0, p1, p2)
        })
    }

    fn mvex(p0: u8, p1: u8, p2: u8) -> Option<Self> {
        let map = match p0 & 0x0F {
            1 => OpcodeMap::Map0F,
            2 => OpcodeMap::Map0F38,
            3 => OpcodeMap::Map0F3A,
            _ => return None,
        };
        Some(Self {
            encoding: EncodingKind::Mvex,
            map,
            bcst: p2 & 0x80 != 0,
            sss: (p2 >> 4) & 7,
            ..Self::evex_common(p0, p1, p2)
        })
    }

    /// Fields laid out identically in EVEX and MVEX.
    fn evex_common(p0: u8, p1: u8, p2: u8) -> Self {
        Self {
            r: (!p0 >> 4) & 0x08,
            x: (!p0 >> 3) & 0x08,
            b: (!p0 >> 2) & 0x08,
            r2: !p0 & 0x10,
            w: p1 & 0x80 != 0,
            vvvv: (!p1 >> 3) & 0x0F,
            pp: p1 & 3,
            v2: (!p2 & 0x08) << 1,
            aaa: p2 & 7,
            ..Self::default()
        }
    }

    /// Outside 64-bit mode only eight registers are addressable. vvvv keeps
    /// its high bit so an unused vvvv other than 1111 is still rejected.
    fn clear_extensions(&mut self) {
        self.r = 0;
        self.x = 0;
        self.b = 0;
        self.r2 = 0;
    }
}

fn legacy_mandatory_prefix(p: &Prefixes) -> MandatoryPrefix {
    match p.rep {
        0xF3 => MandatoryPrefix::PF3,
        0xF2 => MandatoryPrefix::PF2,
        _ if p.operand_size => MandatoryPrefix::P66,
        _ => MandatoryPrefix::Np,
    }
}

// ─── ModRM, SIB and displacement ────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
struct ModRm {
    mode: u8,
    reg: u8,
    rm: u8,
}

impl ModRm {
    fn new(byte: u8) -> Self {
        Self {
            mode: byte >> 6,
            reg: (byte >> 3) & 7,
            rm: byte & 7,
        }
    }

    fn is_register(self) -> bool {
        self.mode == 3
    }
}

/// Memory operand as read, before disp8*N scaling.
#[derive(Debug, Clone, Copy)]
struct RawMemory {
    base: Register,
    index: Register,
    scale: u8,
    displacement: i64,
    displ_size: u8,
    disp8: bool,
    sib: bool,
}

impl RawMemory {
    fn operand(self, disp8_scale: i64, broadcast: bool) -> MemoryOperand {
        let displacement = if self.disp8 {
            self.displacement.wrapping_mul(disp8_scale)
        } else {
            self.displacement
        };
        let mut mem = MemoryOperand::new(
            self.base,
            self.index,
            self.scale,
            displacement,
            self.displ_size,
        );
        mem.broadcast = broadcast;
        mem
    }
}

/// Reads SIB and displacement for a ModRM with mod != 11.
///
/// Base-relative displacements are sign-extended; an absolute address in
/// 16- or 32-bit addressing is zero-extended to the address width.
fn read_memory<S: ByteSource>(
    rd: &mut Reader<S>,
    m: ModRm,
    f: &Fields,
    address_bits: u32,
    long_mode: bool,
) -> Result<RawMemory, DecodeError> {
    if address_bits == 16 {
        return read_memory16(rd, m);
    }
    let class = if address_bits == 64 {
        RegisterClass::Gpr64
    } else {
        RegisterClass::Gpr32
    };
    let gpr = |n: u8| Register::from_class_number(class, n).unwrap_or_default();
    let full_size = (address_bits / 8) as u8;
    let mut mem = RawMemory {
        base: Register::None,
        index: Register::None,
        scale: 1,
        displacement: 0,
        displ_size: 0,
        disp8: false,
        sib: false,
    };

    let mut no_base = false;
    let mut ip_relative = false;
    if m.rm == 4 {
        let sib = rd.byte()?;
        mem.sib = true;
        let index = ((sib >> 3) & 7) | f.x;
        if index != 4 {
            mem.index = gpr(index);
            mem.scale = 1 << (sib >> 6);
        }
        if sib & 7 == 5 && m.mode == 0 {
            no_base = true;
        } else {
            mem.base = gpr((sib & 7) | f.b);
        }
    } else if m.rm == 5 && m.mode == 0 {
        if long_mode {
            ip_relative = true;
            mem.base = if address_bits == 64 {
                Register::Rip
            } else {
                Register::Eip
            };
        } else {
            no_base = true;
        }
    } else {
        mem.base = gpr(m.rm | f.b);
    }

    match m.mode {
        0 if ip_relative => {
            mem.displacement = i64::from(rd.le(4)? as u32 as i32);
            mem.displ_size = if mem.base == Register::Rip { 8 } else { 4 };
        }
        0 if no_base => {
            let raw = rd.le(4)? as u32;
            mem.displacement = if address_bits == 32 && mem.index == Register::None {
                i64::from(raw)
            } else {
                i64::from(raw as i32)
            };
            mem.displ_size = full_size;
        }
        1 => {
            mem.displacement = i64::from(rd.byte()? as i8);
            mem.displ_size = 1;
            mem.disp8 = true;
        }
        2 => {
            mem.displacement = i64::from(rd.le(4)? as u32 as i32);
            mem.displ_size = full_size;
        }
        _ => {}
    }
    Ok(mem)
}

fn read_memory16<S: ByteSource>(rd: &mut Reader<S>, m: ModRm) -> Result<RawMemory, DecodeError> {
    let (base, index) = match m.rm {
        0 => (Register::Bx, Register::Si),
        1 => (Register::Bx, Register::Di),
        2 => (Register::Bp, Register::Si),
        3 => (Register::Bp, Register::Di),
        4 => (Register::Si, Register::None),
        5 => (Register::Di, Register::None),
        6 => (Register::Bp, Register::None),
        _ => (Register::Bx, Register::None),
    };
    let mut mem = RawMemory {
        base,
        index,
        scale: 1,
        displacement: 0,
        displ_size: 0,
        disp8: false,
        sib: false,
    };
    match m.mode {
        0 if m.rm == 6 => {
            mem.base = Register::None;
            mem.displacement = i64::from(rd.le(2)? as u16);
            mem.displ_size = 2;
        }
        1 => {
            mem.displacement = i64::from(rd.byte()? as i8);
            mem.displ_size = 1;
            mem.disp8 = true;
        }
        2 => {
            mem.displacement = i64::from(rd.le(2)? as u16 as i16);
            mem.displ_size = 2;
        }
        _ => {}
    }
    Ok(mem)
}

// ─── Template matching ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Match,
    /// Everything but the processor mode fits.
    WrongMode,
    Mismatch,
}

/// Everything template selection looks at.
struct Context {
    prefixes: Prefixes,
    fields: Fields,
    modrm: Option<ModRm>,
    address_bits: u32,
    legacy_prefix: MandatoryPrefix,
    long_mode: bool,
}

impl Context {
    /// Full register number held by `field`.
    fn field_number(&self, field: Field, opcode: u8) -> u8 {
        let f = &self.fields;
        let m = self.modrm.unwrap_or_default();
        match field {
            Field::ModrmReg => m.reg | f.r | f.r2,
            Field::ModrmRm => {
                let x = if matches!(f.encoding, EncodingKind::Evex | EncodingKind::Mvex) {
                    f.x << 1
                } else {
                    0
                };
                m.rm | f.b | x
            }
            Field::Vvvv if self.long_mode => f.vvvv | f.v2,
            Field::Vvvv => f.vvvv & 7,
            Field::OpcodeLow => (opcode & 7) | f.b,
        }
    }
}

/// Whether a register may sit in ModRM.rm (mod = 11).
fn accepts_register_rm(t: &OpCodeTemplate) -> bool {
    t.requires_register_rm()
        || t
            .operands()
            .iter()
            .any(|op| matches!(op, OperandEncoding::RegOrMem(_)))
}

/// Register `number` of `class`, or `None` when the number is reserved.
///
/// GPRs ignore EVEX.R' and EVEX.X. In legacy encodings REX.R/REX.B are
/// ignored for MMX, x87, segment and test registers. Everything else must
/// fit the class: a k, tmm or bnd number past its range is invalid rather
/// than wrapped.
fn register(class: RegisterClass, number: u8, rex: bool, legacy: bool) -> Option<Register> {
    match class {
        RegisterClass::Gpr8 => Register::gpr8(number & 0x0F, rex),
        RegisterClass::Gpr16
        | RegisterClass::Gpr32
        | RegisterClass::Gpr64
        | RegisterClass::Control
        | RegisterClass::Debug => Register::from_class_number(class, number & 0x0F),
        RegisterClass::Mmx | RegisterClass::St | RegisterClass::Segment | RegisterClass::Test
            if legacy =>
        {
            Register::from_class_number(class, number & 7)
        }
        _ => Register::from_class_number(class, number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn decode64(bytes: &[u8]) -> Result<(Instruction, usize), DecodeError> {
        decode(bytes, CodeSize::Code64, 0)
    }

    #[test]
    fn jmp_short_in_32bit_mode() {
        let (instr, len) = decode(&[0xEB, 0x10][..], CodeSize::Code32, 0x1000).unwrap();
        assert_eq!(len, 2);
        assert_eq!(instr.code(), Code::Jmp_rel8_32);
        assert_eq!(instr.len(), 2);
        assert_eq!(instr.ip(), 0x1000);
        assert_eq!(instr.op_kind(0), OpKind::NearBranch32);
        assert_eq!(instr.near_branch_target(), 0x1012);
    }

    #[test]
    fn empty_and_truncated_input() {
        assert_eq!(
            decode64(&[]),
            Err(DecodeError::TruncatedInput { ip: 0, consumed: 0 })
        );
        let full = [0x48, 0x8B, 0x05, 0x10, 0x00, 0x00, 0x00];
        assert!(decode64(&full).is_ok());
        for k in 0..full.len() {
            assert_eq!(
                decode64(&full[..k]),
                Err(DecodeError::TruncatedInput { ip: 0, consumed: k }),
                "prefix of length {}",
                k
            );
        }
    }

    #[test]
    fn rip_relative_memory() {
        let bytes = [0x48, 0x8B, 0x05, 0x10, 0x00, 0x00, 0x00];
        let (instr, len) = decode(&bytes[..], CodeSize::Code64, 0x1000).unwrap();
        assert_eq!(len, 7);
        assert_eq!(instr.code(), Code::Mov_r64_rm64);
        assert_eq!(instr.op_register(0), Register::Rax);
        assert_eq!(instr.memory_base(), Register::Rip);
        assert_eq!(instr.memory_displacement(), 0x10);
        assert_eq!(instr.memory_displ_size(), 8);
        assert_eq!(instr.ip_rel_memory_address(), Some(0x1017));
    }

    #[test]
    fn last_segment_prefix_wins() {
        let (instr, _) = decode64(&[0x64, 0x65, 0x8B, 0x00]).unwrap();
        assert_eq!(instr.code(), Code::Mov_r32_rm32);
        assert_eq!(instr.segment_prefix(), Register::Gs);
        assert_eq!(instr.memory_base(), Register::Rax);
        // CS/DS/ES/SS overrides are ignored in 64-bit mode.
        let (instr, _) = decode64(&[0x2E, 0x8B, 0x00]).unwrap();
        assert_eq!(instr.segment_prefix(), Register::None);
        let (instr, _) = decode(&[0x2E, 0x8B, 0x00][..], CodeSize::Code32, 0).unwrap();
        assert_eq!(instr.segment_prefix(), Register::Cs);
    }

    #[test]
    fn sixteen_bit_addressing() {
        let (instr, len) = decode(&[0x8B, 0x46, 0xFE][..], CodeSize::Code16, 0).unwrap();
        assert_eq!(len, 3);
        assert_eq!(instr.code(), Code::Mov_r16_rm16);
        assert_eq!(instr.op_register(0), Register::Ax);
        assert_eq!(instr.memory_base(), Register::Bp);
        assert_eq!(instr.memory_index(), Register::None);
        assert_eq!(instr.memory_displacement(), -2);
        assert_eq!(instr.memory_displ_size(), 1);
        assert_eq!(instr.memory_segment(), Register::Ss);
    }

    #[test]
    fn sign_extended_immediate() {
        let (instr, len) = decode64(&[0x48, 0x83, 0xC0, 0xFF]).unwrap();
        assert_eq!(len, 4);
        assert_eq!(instr.code(), Code::Add_rm64_imm8);
        assert_eq!(instr.op_register(0), Register::Rax);
        assert_eq!(instr.op_kind(1), OpKind::Immediate8to64);
        assert_eq!(instr.immediate(1), u64::MAX);
    }

    #[test]
    fn far_pointer() {
        let bytes = [0xEA, 0x78, 0x56, 0x34, 0x12, 0x34, 0x12];
        let (instr, len) = decode(&bytes[..], CodeSize::Code32, 0).unwrap();
        assert_eq!(len, 7);
        assert_eq!(instr.code(), Code::Jmp_ptr1632);
        assert_eq!(instr.far_branch_selector(), 0x1234);
        assert_eq!(instr.far_branch_offset(), 0x1234_5678);
    }

    #[test]
    fn opcode_63_depends_on_mode() {
        let (instr, _) = decode64(&[0x63, 0xC8]).unwrap();
        assert_eq!(instr.code(), Code::Movsxd_r32_rm32);
        assert_eq!(instr.op_register(0), Register::Ecx);
        let (instr, _) = decode(&[0x63, 0xC8][..], CodeSize::Code32, 0).unwrap();
        assert_eq!(instr.code(), Code::Arpl_r32m16_r32);
        assert_eq!(instr.op_register(0), Register::Eax);
        assert_eq!(instr.op_register(1), Register::Ecx);
        let (instr, _) = decode(&[0x63, 0xC8][..], CodeSize::Code16, 0).unwrap();
        assert_eq!(instr.code(), Code::Arpl_rm16_r16);
        assert_eq!(instr.op_register(0), Register::Ax);
        assert_eq!(instr.op_register(1), Register::Cx);
    }

    #[test]
    fn instruction_invalid_in_mode() {
        assert_eq!(
            decode64(&[0x06]),
            Err(DecodeError::InvalidModeForInstruction {
                ip: 0,
                code_size: 64
            })
        );
        let tilezero = [0xC4, 0xE2, 0x7B, 0x49, 0xC0];
        assert_eq!(
            decode(&tilezero[..], CodeSize::Code32, 0),
            Err(DecodeError::InvalidModeForInstruction {
                ip: 0,
                code_size: 32
            })
        );
        let (instr, _) = decode64(&tilezero).unwrap();
        assert_eq!(instr.code(), Code::VEX_Tilezero_tmm);
        assert_eq!(instr.op_register(0), Register::Tmm0);
    }

    #[test]
    fn lock_requires_memory_destination() {
        assert!(matches!(
            decode64(&[0xF0, 0x01, 0xC0]),
            Err(DecodeError::InvalidPrefixCombination { .. })
        ));
        let (instr, _) = decode64(&[0xF0, 0x01, 0x00]).unwrap();
        assert_eq!(instr.code(), Code::Add_rm32_r32);
        assert!(instr.has_lock_prefix());
    }

    #[test]
    fn rep_prefix_on_string_instruction() {
        let (instr, len) = decode64(&[0xF3, 0xA4]).unwrap();
        assert_eq!(len, 2);
        assert_eq!(instr.code(), Code::Movsb_m8_m8);
        assert_eq!(instr.rep_prefix(), RepPrefix::Repe);
        assert_eq!(instr.op_kind(0), OpKind::MemoryEsRdi);
        assert_eq!(instr.op_kind(1), OpKind::MemorySegRsi);
        let (instr, _) = decode64(&[0x67, 0xA4]).unwrap();
        assert_eq!(instr.op_kind(1), OpKind::MemorySegEsi);
    }

    #[test]
    fn mandatory_prefix_selects_pause() {
        let (instr, _) = decode64(&[0xF3, 0x90]).unwrap();
        assert_eq!(instr.code(), Code::Pause);
        assert_eq!(instr.rep_prefix(), RepPrefix::None);
        let (instr, _) = decode64(&[0x90]).unwrap();
        assert_eq!(instr.code(), Code::Nopd);
        let (instr, _) = decode64(&[0x41, 0x90]).unwrap();
        assert_eq!(instr.code(), Code::Xchg_r32_EAX);
        assert_eq!(instr.op_register(0), Register::R8d);
    }

    #[test]
    fn too_long() {
        let mut bytes = [0x66u8; 16];
        bytes[15] = 0x90;
        assert_eq!(
            decode64(&bytes),
            Err(DecodeError::InstructionTooLong { ip: 0 })
        );
        let (instr, len) = decode64(&bytes[1..]).unwrap();
        assert_eq!(len, 15);
        assert_eq!(instr.code(), Code::Nopw);
    }

    #[test]
    fn les_lds_outside_64bit_mode() {
        let (instr, len) = decode(&[0xC5, 0x00][..], CodeSize::Code32, 0).unwrap();
        assert_eq!(len, 2);
        assert_eq!(instr.code(), Code::Lds_r32_m1632);
        assert_eq!(instr.memory_base(), Register::Eax);
    }

    #[test]
    fn vex2_vaddps() {
        let (instr, len) = decode64(&[0xC5, 0xE8, 0x58, 0xCB]).unwrap();
        assert_eq!(len, 4);
        assert_eq!(instr.code(), Code::VEX_Vaddps_xmm_xmm_xmmm128);
        assert_eq!(instr.op_register(0), Register::Xmm1);
        assert_eq!(instr.op_register(1), Register::Xmm2);
        assert_eq!(instr.op_register(2), Register::Xmm3);
    }

    #[test]
    fn legacy_prefix_before_vex_is_rejected() {
        assert!(matches!(
            decode64(&[0x66, 0xC5, 0xE8, 0x58, 0xCB]),
            Err(DecodeError::InvalidPrefixCombination { .. })
        ));
    }

    #[test]
    fn evex_with_opmask() {
        let (instr, len) = decode64(&[0x62, 0xF1, 0x6C, 0x49, 0x58, 0xCB]).unwrap();
        assert_eq!(len, 6);
        assert_eq!(instr.code(), Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er);
        assert_eq!(instr.op_register(0), Register::Zmm1);
        assert_eq!(instr.op_register(1), Register::Zmm2);
        assert_eq!(instr.op_register(2), Register::Zmm3);
        assert_eq!(instr.op_mask(), Register::K1);
        assert!(!instr.zeroing_masking());
    }

    #[test]
    fn evex_compressed_displacement_and_broadcast() {
        let (instr, _) = decode64(&[0x62, 0xF1, 0x6C, 0x48, 0x58, 0x48, 0x01]).unwrap();
        assert_eq!(instr.memory_displacement(), 64);
        assert_eq!(instr.memory_displ_size(), 1);
        assert!(!instr.is_broadcast());
        let (instr, _) = decode64(&[0x62, 0xF1, 0x6C, 0x58, 0x58, 0x48, 0x01]).unwrap();
        assert_eq!(instr.code(), Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er);
        assert_eq!(instr.memory_displacement(), 4);
        assert!(instr.is_broadcast());
    }

    #[test]
    fn evex_embedded_rounding() {
        let (instr, _) = decode64(&[0x62, 0xF1, 0x6C, 0x18, 0x58, 0xCB]).unwrap();
        assert_eq!(instr.code(), Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er);
        assert_eq!(instr.rounding_control(), RoundingControl::RoundToNearest);
        let (instr, _) = decode64(&[0x62, 0xF1, 0x6C, 0x78, 0x58, 0xCB]).unwrap();
        assert_eq!(instr.rounding_control(), RoundingControl::RoundTowardZero);
    }

    #[test]
    fn evex_zeroing_without_mask_is_invalid() {
        assert!(matches!(
            decode64(&[0x62, 0xF1, 0x6C, 0xC8, 0x58, 0xCB]),
            Err(DecodeError::InvalidOpcode { .. })
        ));
    }

    #[test]
    fn mvex_needs_knc() {
        let bytes = [0x62, 0xF1, 0x68, 0x08, 0x58, 0xCB];
        assert!(matches!(
            decode64(&bytes),
            Err(DecodeError::InvalidOpcode { .. })
        ));
        let knc = Decoder::new(CodeSize::Code64, DecoderOptions { knc: true });
        let (instr, len) = knc.decode(&bytes[..], 0).unwrap();
        assert_eq!(len, 6);
        assert_eq!(instr.code(), Code::MVEX_Vaddps_zmm_k1_zmm_zmmmt);
        assert_eq!(instr.mvex_reg_mem_conv(), MvexRegMemConv::None);
        let swizzled = [0x62, 0xF1, 0x68, 0x18, 0x58, 0xCB];
        let (instr, _) = knc.decode(&swizzled[..], 0).unwrap();
        assert_eq!(instr.mvex_reg_mem_conv(), MvexRegMemConv::RegSwizzleCdab);
    }

    #[test]
    fn three_dnow_suffix_selects_the_instruction() {
        let (instr, len) = decode(&[0x0F, 0x0F, 0xC1, 0x9E][..], CodeSize::Code32, 0).unwrap();
        assert_eq!(len, 4);
        assert_eq!(instr.code(), Code::D3NOW_Pfadd_mm_mmm64);
        assert_eq!(instr.op_register(0), Register::Mm0);
        assert_eq!(instr.op_register(1), Register::Mm1);
    }

    #[test]
    fn scanner_resynchronises_after_a_bad_byte() {
        let decoder = Decoder::new(CodeSize::Code64, DecoderOptions::default());
        let results: Vec<_> = decoder.iter(&[0x06, 0x90, 0xC3], 0x10).collect();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].unwrap_err().ip(), 0x10);
        let nop = results[1].unwrap();
        assert_eq!(nop.code(), Code::Nopd);
        assert_eq!(nop.ip(), 0x11);
        let ret = results[2].unwrap();
        assert_eq!(ret.code(), Code::Retnq);
        assert_eq!(ret.ip(), 0x12);
    }

    #[test]
    fn source_is_advanced_through_mut_ref() {
        let mut src: &[u8] = &[0x90, 0xC3];
        let decoder = Decoder::default();
        let (first, _) = decoder.decode(&mut src, 0).unwrap();
        let (second, _) = decoder.decode(&mut src, 1).unwrap();
        assert_eq!(first.code(), Code::Nopd);
        assert_eq!(second.code(), Code::Retnq);
        assert!(src.is_empty());
    }
}
