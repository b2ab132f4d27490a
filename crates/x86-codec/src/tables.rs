//! Encoding Tables: one [`OpCodeTemplate`] per [`Code`].
//!
//! The tables serve both directions:
//!
//! - **encode**: [`template`] indexes the flat template array by the dense
//!   `Code` identity;
//! - **decode**: [`candidates`] walks the templates registered under an
//!   (encoding family, opcode map, opcode byte) key, in table order. The key
//!   index is computed at compile time from the same template array, so the
//!   two directions cannot drift apart.
//!
//! Templates overloading one opcode byte are told apart by ModRM.reg/rm
//! digits, mod (register vs memory), mandatory prefix, operand/address size,
//! VEX/EVEX W and L, and the processor mode.

use crate::code::{Code, TEMPLATES};
use crate::instruction::{CodeSize, OpKind};
use crate::mnemonic::Mnemonic;
use crate::register::{Register, RegisterClass};

/// Instruction encoding family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodingKind {
    /// Legacy/REX encoding.
    #[default]
    Legacy,
    /// VEX (`C4`/`C5`).
    Vex,
    /// EVEX (`62`).
    Evex,
    /// AMD XOP (`8F`).
    Xop,
    /// Knights Corner MVEX (`62`, P1 bit 2 clear).
    Mvex,
    /// AMD 3DNow! (`0F 0F /r ib`).
    D3now,
}

/// Opcode map selected by the escape bytes or by the VEX/EVEX/XOP map field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpcodeMap {
    /// One-byte opcode space.
    #[default]
    Primary,
    /// `0F xx`.
    Map0F,
    /// `0F 38 xx`.
    Map0F38,
    /// `0F 3A xx`.
    Map0F3A,
    /// XOP map 8.
    Xop8,
    /// XOP map 9.
    Xop9,
    /// XOP map 10.
    XopA,
}

/// Mandatory prefix of SSE-style opcodes (VEX/EVEX/XOP `pp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MandatoryPrefix {
    /// Opcode is not prefix-selected: `66` is an operand-size override and
    /// `F2`/`F3` are REP prefixes.
    #[default]
    Any,
    /// No `66`/`F2`/`F3` (a `66` is still accepted when it selects the
    /// operand size of a sized template).
    Np,
    /// `66`.
    P66,
    /// `F3`.
    PF3,
    /// `F2`.
    PF2,
}

impl MandatoryPrefix {
    /// VEX/EVEX/XOP `pp` field value.
    pub fn pp(self) -> u8 {
        match self {
            MandatoryPrefix::Any | MandatoryPrefix::Np => 0,
            MandatoryPrefix::P66 => 1,
            MandatoryPrefix::PF3 => 2,
            MandatoryPrefix::PF2 => 3,
        }
    }

    /// Inverse of [`MandatoryPrefix::pp`].
    pub fn from_pp(pp: u8) -> Self {
        match pp & 3 {
            0 => MandatoryPrefix::Np,
            1 => MandatoryPrefix::P66,
            2 => MandatoryPrefix::PF3,
            _ => MandatoryPrefix::PF2,
        }
    }

    /// Legacy prefix byte, if any.
    pub fn byte(self) -> Option<u8> {
        match self {
            MandatoryPrefix::Any | MandatoryPrefix::Np => None,
            MandatoryPrefix::P66 => Some(0x66),
            MandatoryPrefix::PF3 => Some(0xF3),
            MandatoryPrefix::PF2 => Some(0xF2),
        }
    }
}

/// Operand size a template is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpSize {
    /// Not operand-size sensitive.
    #[default]
    Any,
    /// 16-bit.
    O16,
    /// 32-bit.
    O32,
    /// 64-bit.
    O64,
}

impl OpSize {
    /// Width in bits, if sized.
    pub fn bits(self) -> Option<u32> {
        match self {
            OpSize::Any => None,
            OpSize::O16 => Some(16),
            OpSize::O32 => Some(32),
            OpSize::O64 => Some(64),
        }
    }
}

/// Address size a template is bound to (counter-register branches).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddrSize {
    /// Follows the memory operands / mode.
    #[default]
    Any,
    /// 16-bit.
    A16,
    /// 32-bit.
    A32,
    /// 64-bit.
    A64,
}

impl AddrSize {
    /// Width in bits, if fixed.
    pub fn bits(self) -> Option<u32> {
        match self {
            AddrSize::Any => None,
            AddrSize::A16 => Some(16),
            AddrSize::A32 => Some(32),
            AddrSize::A64 => Some(64),
        }
    }
}

/// W bit requirement (REX.W for legacy templates, VEX/EVEX/XOP.W otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WBit {
    /// W is ignored.
    #[default]
    Ignored,
    /// W must be 0.
    W0,
    /// W must be 1.
    W1,
    /// W must be 0 in 64-bit mode and is ignored elsewhere.
    W0In64,
}

/// Vector length requirement (VEX.L / EVEX.L'L).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VectorLength {
    /// L is ignored (scalar and legacy templates).
    #[default]
    Ignored,
    /// 128-bit (L = 0).
    L128,
    /// 256-bit (L = 1).
    L256,
    /// 512-bit (L'L = 2).
    L512,
}

impl VectorLength {
    /// L / L'L field value; `None` when the template ignores it.
    pub fn field(self) -> Option<u8> {
        match self {
            VectorLength::Ignored => None,
            VectorLength::L128 => Some(0),
            VectorLength::L256 => Some(1),
            VectorLength::L512 => Some(2),
        }
    }

    /// Vector width in bytes (16 for templates that ignore L).
    pub fn bytes(self) -> u32 {
        match self {
            VectorLength::Ignored | VectorLength::L128 => 16,
            VectorLength::L256 => 32,
            VectorLength::L512 => 64,
        }
    }
}

/// EVEX memory tuple type, which selects the disp8*N scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TupleType {
    /// No compression (N = 1).
    #[default]
    None,
    /// Full vector; element size when broadcasting.
    Full,
    /// Full vector memory, no broadcast.
    FullMem,
    /// Single scalar element.
    Scalar,
}

/// Where a register operand lives in the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// ModRM.reg (+ R, R').
    ModrmReg,
    /// ModRM.rm with mod = 11 (+ B, X).
    ModrmRm,
    /// VEX/EVEX/XOP vvvv (+ V').
    Vvvv,
    /// Low three bits of the opcode byte (+ B).
    OpcodeLow,
}

/// Encoding of an immediate operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImmediateEncoding {
    /// Implicit constant 1 (shift-by-one); no bytes in the stream.
    One,
    /// imm8.
    Imm8,
    /// Second imm8 (ENTER).
    Imm8Second,
    /// imm16.
    Imm16,
    /// imm32.
    Imm32,
    /// imm64.
    Imm64,
    /// imm8 sign-extended to 16 bits.
    Sx8To16,
    /// imm8 sign-extended to 32 bits.
    Sx8To32,
    /// imm8 sign-extended to 64 bits.
    Sx8To64,
    /// imm32 sign-extended to 64 bits.
    Sx32To64,
}

impl ImmediateEncoding {
    /// Operand kind carried by the record.
    pub fn op_kind(self) -> OpKind {
        match self {
            ImmediateEncoding::One | ImmediateEncoding::Imm8 => OpKind::Immediate8,
            ImmediateEncoding::Imm8Second => OpKind::Immediate8Second,
            ImmediateEncoding::Imm16 => OpKind::Immediate16,
            ImmediateEncoding::Imm32 => OpKind::Immediate32,
            ImmediateEncoding::Imm64 => OpKind::Immediate64,
            ImmediateEncoding::Sx8To16 => OpKind::Immediate8to16,
            ImmediateEncoding::Sx8To32 => OpKind::Immediate8to32,
            ImmediateEncoding::Sx8To64 => OpKind::Immediate8to64,
            ImmediateEncoding::Sx32To64 => OpKind::Immediate32to64,
        }
    }

    /// Bytes occupied in the instruction stream.
    pub fn size(self) -> usize {
        match self {
            ImmediateEncoding::One => 0,
            ImmediateEncoding::Imm8
            | ImmediateEncoding::Imm8Second
            | ImmediateEncoding::Sx8To16
            | ImmediateEncoding::Sx8To32
            | ImmediateEncoding::Sx8To64 => 1,
            ImmediateEncoding::Imm16 => 2,
            ImmediateEncoding::Imm32 | ImmediateEncoding::Sx32To64 => 4,
            ImmediateEncoding::Imm64 => 8,
        }
    }
}

/// Relative branch field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BranchWidth {
    /// rel8.
    Rel8,
    /// rel16.
    Rel16,
    /// rel32.
    Rel32,
}

impl BranchWidth {
    /// Bytes occupied in the instruction stream.
    pub fn size(self) -> usize {
        match self {
            BranchWidth::Rel8 => 1,
            BranchWidth::Rel16 => 2,
            BranchWidth::Rel32 => 4,
        }
    }
}

/// How one operand slot is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperandEncoding {
    /// Unused slot.
    #[default]
    None,
    /// Register of `class` in `field`.
    Reg(RegisterClass, Field),
    /// ModRM.rm: register of `class` (mod = 11) or memory.
    RegOrMem(RegisterClass),
    /// Implied register, not encoded.
    Fixed(Register),
    /// ModRM.rm memory only.
    Mem,
    /// Absolute address with address-size width (`A0`-`A3`).
    Moffs,
    /// Implicit `seg:[rSI]`.
    StringSrc,
    /// Implicit `es:[rDI]`.
    StringDst,
    /// Immediate.
    Imm(ImmediateEncoding),
    /// Relative branch target.
    Branch(BranchWidth),
    /// `ptr16:16` / `ptr16:32` far target.
    FarPtr,
}

/// Template flag bits.
pub mod flags {
    /// Valid in 16-bit mode.
    pub const MODE16: u32 = 1 << 0;
    /// Valid in 32-bit mode.
    pub const MODE32: u32 = 1 << 1;
    /// Valid in 64-bit mode.
    pub const MODE64: u32 = 1 << 2;
    /// All three modes.
    pub const ALL_MODES: u32 = MODE16 | MODE32 | MODE64;
    /// LOCK permitted (with a memory destination).
    pub const LOCK: u32 = 1 << 3;
    /// REP/REPE/REPNE permitted.
    pub const REP: u32 = 1 << 4;
    /// 64-bit operand size by default in 64-bit mode (66 selects 16).
    pub const DEFAULT64: u32 = 1 << 5;
    /// 64-bit operand size forced in 64-bit mode (66 ignored).
    pub const FORCE64: u32 = 1 << 6;
    /// EVEX embedded broadcast.
    pub const BROADCAST: u32 = 1 << 7;
    /// EVEX/MVEX embedded rounding control.
    pub const ROUNDING: u32 = 1 << 8;
    /// EVEX/MVEX suppress-all-exceptions.
    pub const SAE: u32 = 1 << 9;
    /// Opmask permitted.
    pub const OPMASK: u32 = 1 << 10;
    /// Opmask required (K0 rejected).
    pub const OPMASK_REQUIRED: u32 = 1 << 11;
    /// Zeroing-masking permitted.
    pub const ZEROING: u32 = 1 << 12;
    /// REX.B must be clear (`90` NOP vs `XCHG r8, rAX`).
    pub const NO_REX_B: u32 = 1 << 13;
    /// ModRM.mod is ignored and rm always names a register (MOV CRn/DRn/TRn).
    pub const MOD_IGNORED: u32 = 1 << 14;
    /// Memory operand must use a SIB byte.
    pub const REQUIRES_SIB: u32 = 1 << 15;
    /// Destination is a segment register; CS is rejected.
    pub const SREG_WRITE: u32 = 1 << 16;
    /// MVEX eviction hint permitted.
    pub const EVICTION_HINT: u32 = 1 << 17;
    /// MVEX memory up-conversion/broadcast permitted.
    pub const MVEX_CONVERSION: u32 = 1 << 18;
    /// MVEX register swizzle permitted.
    pub const MVEX_SWIZZLE: u32 = 1 << 19;
    /// Memory forms #UD with 16-bit addressing (MPX).
    pub const NO_ADDR16: u32 = 1 << 20;
}

/// Static metadata describing how one [`Code`] is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpCodeTemplate {
    /// Mnemonic.
    pub mnemonic: Mnemonic,
    /// Encoding family.
    pub encoding: EncodingKind,
    /// Opcode map.
    pub map: OpcodeMap,
    /// Opcode byte (the 3DNow! suffix for [`EncodingKind::D3now`]). For
    /// opcode-register templates this is the base with the low three bits clear.
    pub opcode: u8,
    /// Mandatory prefix / pp.
    pub prefix: MandatoryPrefix,
    /// Fixed ModRM.reg digit (`/digit`).
    pub modrm_reg: Option<u8>,
    /// Fixed ModRM.rm (implies mod = 11).
    pub modrm_rm: Option<u8>,
    /// Operand size.
    pub op_size: OpSize,
    /// Address size.
    pub addr_size: AddrSize,
    /// W requirement.
    pub w: WBit,
    /// Vector length requirement.
    pub l: VectorLength,
    /// EVEX tuple type.
    pub tuple: TupleType,
    /// Element size in bytes (broadcast / scalar tuple).
    pub element_size: u8,
    /// Operand slots; only the first `op_count` are meaningful.
    pub operands: [OperandEncoding; 5],
    /// Number of operands.
    pub op_count: u8,
    /// [`flags`] bits.
    pub flags: u32,
}

impl OpCodeTemplate {
    /// Template of [`Code::Invalid`].
    pub const INVALID: OpCodeTemplate = OpCodeTemplate {
        mnemonic: Mnemonic::Invalid,
        encoding: EncodingKind::Legacy,
        map: OpcodeMap::Primary,
        opcode: 0,
        prefix: MandatoryPrefix::Any,
        modrm_reg: None,
        modrm_rm: None,
        op_size: OpSize::Any,
        addr_size: AddrSize::Any,
        w: WBit::Ignored,
        l: VectorLength::Ignored,
        tuple: TupleType::None,
        element_size: 0,
        operands: [OperandEncoding::None; 5],
        op_count: 0,
        flags: 0,
    };

    /// Operand slots in use.
    pub fn operands(&self) -> &[OperandEncoding] {
        let count = (self.op_count as usize).min(self.operands.len());
        &self.operands[..count]
    }

    /// Whether all bits of `flag` are set.
    #[inline]
    pub fn has(&self, flag: u32) -> bool {
        self.flags & flag == flag
    }

    /// Whether the template can be encoded/decoded in `mode`.
    pub fn is_valid_in(&self, mode: CodeSize) -> bool {
        let bit = match mode {
            CodeSize::Code16 => flags::MODE16,
            CodeSize::Code32 => flags::MODE32,
            CodeSize::Code64 => flags::MODE64,
        };
        self.flags & bit != 0
    }

    /// Whether a ModRM byte follows the opcode.
    pub fn has_modrm(&self) -> bool {
        self.modrm_reg.is_some()
            || self.modrm_rm.is_some()
            || self.operands().iter().any(|op| {
                matches!(
                    op,
                    OperandEncoding::Reg(_, Field::ModrmReg | Field::ModrmRm)
                        | OperandEncoding::RegOrMem(_)
                        | OperandEncoding::Mem
                )
            })
    }

    /// Whether some operand may be a ModRM memory operand.
    pub fn accepts_memory(&self) -> bool {
        self.operands()
            .iter()
            .any(|op| matches!(op, OperandEncoding::RegOrMem(_) | OperandEncoding::Mem))
    }

    /// Whether ModRM must select memory (mod != 11).
    pub fn requires_memory(&self) -> bool {
        self.operands()
            .iter()
            .any(|op| matches!(op, OperandEncoding::Mem))
    }

    /// Whether ModRM must select a register (mod = 11).
    pub fn requires_register_rm(&self) -> bool {
        self.modrm_rm.is_some()
            || self
                .operands()
                .iter()
                .any(|op| matches!(op, OperandEncoding::Reg(_, Field::ModrmRm)))
    }

    /// Whether some operand is encoded in vvvv.
    pub fn uses_vvvv(&self) -> bool {
        self.operands()
            .iter()
            .any(|op| matches!(op, OperandEncoding::Reg(_, Field::Vvvv)))
    }

    /// Whether the register is encoded in the low three opcode bits.
    pub const fn opcode_in_low_bits(&self) -> bool {
        let mut i = 0;
        while i < self.op_count as usize && i < self.operands.len() {
            if matches!(self.operands[i], OperandEncoding::Reg(_, Field::OpcodeLow)) {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Near-branch operand kind implied by the operand size.
    pub fn near_branch_kind(&self) -> OpKind {
        match self.op_size {
            OpSize::O16 => OpKind::NearBranch16,
            OpSize::O64 => OpKind::NearBranch64,
            OpSize::Any | OpSize::O32 => OpKind::NearBranch32,
        }
    }

    /// EVEX disp8*N scale of the memory operand; 1 for other families.
    pub fn disp8_scale(&self, broadcast: bool) -> i64 {
        if !matches!(self.encoding, EncodingKind::Evex) {
            return 1;
        }
        let n = match self.tuple {
            TupleType::None => 1,
            TupleType::Full if broadcast => u32::from(self.element_size),
            TupleType::Full | TupleType::FullMem => self.l.bytes(),
            TupleType::Scalar => u32::from(self.element_size),
        };
        i64::from(n.max(1))
    }

    /// Far-branch operand kind implied by the operand size.
    pub fn far_branch_kind(&self) -> OpKind {
        match self.op_size {
            OpSize::O16 => OpKind::FarBranch16,
            _ => OpKind::FarBranch32,
        }
    }

    // ─── const builders used by the code table ──────────────────────────

    const fn new(encoding: EncodingKind, map: OpcodeMap, opcode: u8, mnemonic: Mnemonic) -> Self {
        let mut t = Self::INVALID;
        t.mnemonic = mnemonic;
        t.encoding = encoding;
        t.map = map;
        t.opcode = opcode;
        t.flags = flags::ALL_MODES;
        if !matches!(encoding, EncodingKind::Legacy) {
            t.prefix = MandatoryPrefix::Np;
        }
        t
    }

    pub(crate) const fn ops<const N: usize>(mut self, ops: [OperandEncoding; N]) -> Self {
        let mut i = 0;
        while i < N {
            self.operands[i] = ops[i];
            i += 1;
        }
        self.op_count = N as u8;
        self
    }

    pub(crate) const fn digit(mut self, reg: u8) -> Self {
        self.modrm_reg = Some(reg);
        self
    }

    pub(crate) const fn fixed_rm(mut self, rm: u8) -> Self {
        self.modrm_rm = Some(rm);
        self
    }

    pub(crate) const fn o16(mut self) -> Self {
        self.op_size = OpSize::O16;
        self
    }

    pub(crate) const fn o32(mut self) -> Self {
        self.op_size = OpSize::O32;
        self
    }

    pub(crate) const fn o64(mut self) -> Self {
        self.op_size = OpSize::O64;
        self
    }

    pub(crate) const fn a16(mut self) -> Self {
        self.addr_size = AddrSize::A16;
        self
    }

    pub(crate) const fn a32(mut self) -> Self {
        self.addr_size = AddrSize::A32;
        self
    }

    pub(crate) const fn a64(mut self) -> Self {
        self.addr_size = AddrSize::A64;
        self
    }

    pub(crate) const fn w0(mut self) -> Self {
        self.w = WBit::W0;
        self
    }

    pub(crate) const fn w1(mut self) -> Self {
        self.w = WBit::W1;
        self
    }

    pub(crate) const fn wig32(mut self) -> Self {
        self.w = WBit::W0In64;
        self
    }

    pub(crate) const fn l128(mut self) -> Self {
        self.l = VectorLength::L128;
        self
    }

    pub(crate) const fn l256(mut self) -> Self {
        self.l = VectorLength::L256;
        self
    }

    pub(crate) const fn l512(mut self) -> Self {
        self.l = VectorLength::L512;
        self
    }

    pub(crate) const fn np(mut self) -> Self {
        self.prefix = MandatoryPrefix::Np;
        self
    }

    pub(crate) const fn p66(mut self) -> Self {
        self.prefix = MandatoryPrefix::P66;
        self
    }

    pub(crate) const fn pf3(mut self) -> Self {
        self.prefix = MandatoryPrefix::PF3;
        self
    }

    pub(crate) const fn pf2(mut self) -> Self {
        self.prefix = MandatoryPrefix::PF2;
        self
    }

    pub(crate) const fn not64(mut self) -> Self {
        self.flags &= !flags::MODE64;
        self
    }

    pub(crate) const fn only64(mut self) -> Self {
        self.flags &= !(flags::MODE16 | flags::MODE32);
        self
    }

    pub(crate) const fn with(mut self, flag: u32) -> Self {
        self.flags |= flag;
        self
    }

    pub(crate) const fn lock(self) -> Self {
        self.with(flags::LOCK)
    }

    pub(crate) const fn rep(self) -> Self {
        self.with(flags::REP)
    }

    pub(crate) const fn d64(self) -> Self {
        self.with(flags::DEFAULT64)
    }

    pub(crate) const fn f64(self) -> Self {
        self.with(flags::FORCE64)
    }

    pub(crate) const fn no_a16(self) -> Self {
        self.with(flags::NO_ADDR16)
    }

    pub(crate) const fn k(self) -> Self {
        self.with(flags::OPMASK)
    }

    pub(crate) const fn kz(self) -> Self {
        self.with(flags::OPMASK | flags::ZEROING)
    }

    pub(crate) const fn bcst(self) -> Self {
        self.with(flags::BROADCAST)
    }

    pub(crate) const fn er(self) -> Self {
        self.with(flags::ROUNDING | flags::SAE)
    }

    pub(crate) const fn sae(self) -> Self {
        self.with(flags::SAE)
    }

    pub(crate) const fn fv(mut self, element_size: u8) -> Self {
        self.tuple = TupleType::Full;
        self.element_size = element_size;
        self
    }

    pub(crate) const fn fvm(mut self) -> Self {
        self.tuple = TupleType::FullMem;
        self
    }

    pub(crate) const fn t1s(mut self, element_size: u8) -> Self {
        self.tuple = TupleType::Scalar;
        self.element_size = element_size;
        self
    }
}

/// Template constructors and operand shorthands for the code table.
pub(crate) mod dsl {
    use super::*;

    pub(crate) const fn legacy(map: OpcodeMap, opcode: u8, mnemonic: Mnemonic) -> OpCodeTemplate {
        OpCodeTemplate::new(EncodingKind::Legacy, map, opcode, mnemonic)
    }

    pub(crate) const fn vex(map: OpcodeMap, opcode: u8, mnemonic: Mnemonic) -> OpCodeTemplate {
        OpCodeTemplate::new(EncodingKind::Vex, map, opcode, mnemonic)
    }

    pub(crate) const fn evex(map: OpcodeMap, opcode: u8, mnemonic: Mnemonic) -> OpCodeTemplate {
        OpCodeTemplate::new(EncodingKind::Evex, map, opcode, mnemonic)
    }

    pub(crate) const fn xop(map: OpcodeMap, opcode: u8, mnemonic: Mnemonic) -> OpCodeTemplate {
        OpCodeTemplate::new(EncodingKind::Xop, map, opcode, mnemonic)
    }

    pub(crate) const fn mvex(map: OpcodeMap, opcode: u8, mnemonic: Mnemonic) -> OpCodeTemplate {
        OpCodeTemplate::new(EncodingKind::Mvex, map, opcode, mnemonic)
            .only64()
            .with(flags::EVICTION_HINT)
    }

    /// 3DNow! instruction selected by its trailing `suffix` byte.
    pub(crate) const fn now3d(suffix: u8, mnemonic: Mnemonic) -> OpCodeTemplate {
        OpCodeTemplate::new(EncodingKind::D3now, OpcodeMap::Map0F, suffix, mnemonic)
    }

    pub(crate) const G8: RegisterClass = RegisterClass::Gpr8;
    pub(crate) const G16: RegisterClass = RegisterClass::Gpr16;
    pub(crate) const G32: RegisterClass = RegisterClass::Gpr32;
    pub(crate) const G64: RegisterClass = RegisterClass::Gpr64;
    pub(crate) const SEG: RegisterClass = RegisterClass::Segment;
    pub(crate) const XMM: RegisterClass = RegisterClass::Xmm;
    pub(crate) const YMM: RegisterClass = RegisterClass::Ymm;
    pub(crate) const ZMM: RegisterClass = RegisterClass::Zmm;
    pub(crate) const KR: RegisterClass = RegisterClass::Opmask;
    pub(crate) const BND: RegisterClass = RegisterClass::Bound;
    pub(crate) const CR: RegisterClass = RegisterClass::Control;
    pub(crate) const DR: RegisterClass = RegisterClass::Debug;
    pub(crate) const TR: RegisterClass = RegisterClass::Test;
    pub(crate) const STI: RegisterClass = RegisterClass::St;
    pub(crate) const MM: RegisterClass = RegisterClass::Mmx;
    pub(crate) const TMM: RegisterClass = RegisterClass::Tile;

    /// ModRM.reg register.
    pub(crate) const fn r(class: RegisterClass) -> OperandEncoding {
        OperandEncoding::Reg(class, Field::ModrmReg)
    }

    /// ModRM.rm register or memory.
    pub(crate) const fn rm(class: RegisterClass) -> OperandEncoding {
        OperandEncoding::RegOrMem(class)
    }

    /// ModRM.rm register only.
    pub(crate) const fn rr(class: RegisterClass) -> OperandEncoding {
        OperandEncoding::Reg(class, Field::ModrmRm)
    }

    /// vvvv register.
    pub(crate) const fn v(class: RegisterClass) -> OperandEncoding {
        OperandEncoding::Reg(class, Field::Vvvv)
    }

    /// Register in the low opcode bits.
    pub(crate) const fn o(class: RegisterClass) -> OperandEncoding {
        OperandEncoding::Reg(class, Field::OpcodeLow)
    }

    pub(crate) const M: OperandEncoding = OperandEncoding::Mem;
    pub(crate) const MOFFS: OperandEncoding = OperandEncoding::Moffs;
    pub(crate) const SRC: OperandEncoding = OperandEncoding::StringSrc;
    pub(crate) const DST: OperandEncoding = OperandEncoding::StringDst;
    pub(crate) const FAR: OperandEncoding = OperandEncoding::FarPtr;

    pub(crate) const IMM1: OperandEncoding = OperandEncoding::Imm(ImmediateEncoding::One);
    pub(crate) const IB: OperandEncoding = OperandEncoding::Imm(ImmediateEncoding::Imm8);
    pub(crate) const IB2: OperandEncoding = OperandEncoding::Imm(ImmediateEncoding::Imm8Second);
    pub(crate) const IW: OperandEncoding = OperandEncoding::Imm(ImmediateEncoding::Imm16);
    pub(crate) const ID: OperandEncoding = OperandEncoding::Imm(ImmediateEncoding::Imm32);
    pub(crate) const IQ: OperandEncoding = OperandEncoding::Imm(ImmediateEncoding::Imm64);
    pub(crate) const IBW: OperandEncoding = OperandEncoding::Imm(ImmediateEncoding::Sx8To16);
    pub(crate) const IBD: OperandEncoding = OperandEncoding::Imm(ImmediateEncoding::Sx8To32);
    pub(crate) const IBQ: OperandEncoding = OperandEncoding::Imm(ImmediateEncoding::Sx8To64);
    pub(crate) const IDQ: OperandEncoding = OperandEncoding::Imm(ImmediateEncoding::Sx32To64);

    pub(crate) const REL8: OperandEncoding = OperandEncoding::Branch(BranchWidth::Rel8);
    pub(crate) const REL16: OperandEncoding = OperandEncoding::Branch(BranchWidth::Rel16);
    pub(crate) const REL32: OperandEncoding = OperandEncoding::Branch(BranchWidth::Rel32);

    pub(crate) const AL: OperandEncoding = OperandEncoding::Fixed(Register::Al);
    pub(crate) const CL: OperandEncoding = OperandEncoding::Fixed(Register::Cl);
    pub(crate) const AX: OperandEncoding = OperandEncoding::Fixed(Register::Ax);
    pub(crate) const DX: OperandEncoding = OperandEncoding::Fixed(Register::Dx);
    pub(crate) const EAX: OperandEncoding = OperandEncoding::Fixed(Register::Eax);
    pub(crate) const RAX: OperandEncoding = OperandEncoding::Fixed(Register::Rax);
    pub(crate) const ES: OperandEncoding = OperandEncoding::Fixed(Register::Es);
    pub(crate) const CS: OperandEncoding = OperandEncoding::Fixed(Register::Cs);
    pub(crate) const SS: OperandEncoding = OperandEncoding::Fixed(Register::Ss);
    pub(crate) const DS: OperandEncoding = OperandEncoding::Fixed(Register::Ds);
    pub(crate) const FS: OperandEncoding = OperandEncoding::Fixed(Register::Fs);
    pub(crate) const GS: OperandEncoding = OperandEncoding::Fixed(Register::Gs);
    pub(crate) const ST0: OperandEncoding = OperandEncoding::Fixed(Register::St0);
}

// ─── Lookup ─────────────────────────────────────────────────────────────

/// Template for `code` (encode direction).
pub fn template(code: Code) -> &'static OpCodeTemplate {
    TEMPLATE_TABLE
        .get(code as usize)
        .unwrap_or(&OpCodeTemplate::INVALID)
}

static TEMPLATE_TABLE: &[OpCodeTemplate] = TEMPLATES;

/// Number of (family, map) tables in the decode index.
const TABLE_SLOTS: usize = 17;
const KEYS: usize = TABLE_SLOTS * 256;

const fn table_slot(encoding: EncodingKind, map: OpcodeMap) -> usize {
    match (encoding, map) {
        (EncodingKind::Legacy, OpcodeMap::Primary) => 0,
        (EncodingKind::Legacy, OpcodeMap::Map0F) => 1,
        (EncodingKind::Legacy, OpcodeMap::Map0F38) => 2,
        (EncodingKind::Legacy, OpcodeMap::Map0F3A) => 3,
        (EncodingKind::Vex, OpcodeMap::Map0F) => 4,
        (EncodingKind::Vex, OpcodeMap::Map0F38) => 5,
        (EncodingKind::Vex, OpcodeMap::Map0F3A) => 6,
        (EncodingKind::Evex, OpcodeMap::Map0F) => 7,
        (EncodingKind::Evex, OpcodeMap::Map0F38) => 8,
        (EncodingKind::Evex, OpcodeMap::Map0F3A) => 9,
        (EncodingKind::Xop, OpcodeMap::Xop8) => 10,
        (EncodingKind::Xop, OpcodeMap::Xop9) => 11,
        (EncodingKind::Xop, OpcodeMap::XopA) => 12,
        (EncodingKind::Mvex, OpcodeMap::Map0F) => 13,
        (EncodingKind::Mvex, OpcodeMap::Map0F38) => 14,
        (EncodingKind::Mvex, OpcodeMap::Map0F3A) => 15,
        (EncodingKind::D3now, _) => 16,
        _ => TABLE_SLOTS,
    }
}

/// Number of index keys a template occupies (eight for `+r` opcodes).
const fn key_span(t: &OpCodeTemplate) -> usize {
    if t.opcode_in_low_bits() {
        8
    } else {
        1
    }
}

const fn count_entries() -> usize {
    let mut total = 0;
    let mut i = 1;
    while i < TEMPLATES.len() {
        let t = &TEMPLATES[i];
        if table_slot(t.encoding, t.map) < TABLE_SLOTS {
            total += key_span(t);
        }
        i += 1;
    }
    total
}

const ENTRY_COUNT: usize = count_entries();

/// Candidate lists in CSR form: the codes registered under key `k` are
/// `entries[starts[k]..starts[k + 1]]`, in table order.
struct DecodeIndex {
    starts: [u16; KEYS + 1],
    entries: [u16; ENTRY_COUNT],
}

const fn build_index() -> DecodeIndex {
    let mut starts = [0u16; KEYS + 1];
    let mut i = 1;
    while i < TEMPLATES.len() {
        let t = &TEMPLATES[i];
        let slot = table_slot(t.encoding, t.map);
        if slot < TABLE_SLOTS {
            let mut j = 0;
            while j < key_span(t) {
                let key = slot * 256 + ((t.opcode as usize + j) & 0xFF);
                starts[key + 1] += 1;
                j += 1;
            }
        }
        i += 1;
    }
    let mut k = 0;
    while k < KEYS {
        starts[k + 1] += starts[k];
        k += 1;
    }

    let mut cursor = starts;
    let mut entries = [0u16; ENTRY_COUNT];
    let mut i = 1;
    while i < TEMPLATES.len() {
        let t = &TEMPLATES[i];
        let slot = table_slot(t.encoding, t.map);
        if slot < TABLE_SLOTS {
            let mut j = 0;
            while j < key_span(t) {
                let key = slot * 256 + ((t.opcode as usize + j) & 0xFF);
                entries[cursor[key] as usize] = i as u16;
                cursor[key] += 1;
                j += 1;
            }
        }
        i += 1;
    }
    DecodeIndex { starts, entries }
}

static DECODE_INDEX: DecodeIndex = build_index();

/// Templates registered for `opcode` in the given family/map (decode
/// direction), in priority order.
pub fn candidates(
    encoding: EncodingKind,
    map: OpcodeMap,
    opcode: u8,
) -> impl Iterator<Item = (Code, &'static OpCodeTemplate)> {
    let slot = table_slot(encoding, map);
    let key = slot * 256 + opcode as usize;
    let range = match (
        DECODE_INDEX.starts.get(key),
        DECODE_INDEX.starts.get(key + 1),
    ) {
        (Some(&start), Some(&end)) if slot < TABLE_SLOTS => start as usize..end as usize,
        _ => 0..0,
    };
    DECODE_INDEX
        .entries
        .get(range)
        .unwrap_or(&[])
        .iter()
        .filter_map(|&index| Code::from_index(index as usize))
        .map(|code| (code, template(code)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_a_template() {
        assert_eq!(TEMPLATES.len(), Code::COUNT);
        assert_eq!(template(Code::Invalid).mnemonic, Mnemonic::Invalid);
    }

    #[test]
    fn opcode_register_templates_are_aligned() {
        for code in Code::values() {
            let t = template(code);
            if t.opcode_in_low_bits() {
                assert_eq!(t.opcode & 7, 0, "{:?} base opcode not aligned", code);
            }
        }
    }

    #[test]
    fn every_template_is_reachable_from_the_decode_index() {
        for code in Code::values().skip(1) {
            let t = template(code);
            let found = candidates(t.encoding, t.map, t.opcode).any(|(c, _)| c == code);
            assert!(found, "{:?} missing from decode index", code);
        }
    }

    #[test]
    fn opcode_register_forms_cover_eight_bytes() {
        let hits = (0x50..0x58u8)
            .filter(|&op| {
                candidates(EncodingKind::Legacy, OpcodeMap::Primary, op)
                    .any(|(c, _)| c == Code::Push_r64)
            })
            .count();
        assert_eq!(hits, 8);
    }

    #[test]
    fn candidates_preserve_table_order() {
        let codes: alloc::vec::Vec<Code> =
            candidates(EncodingKind::Legacy, OpcodeMap::Primary, 0x90)
                .map(|(c, _)| c)
                .collect();
        let pause = codes.iter().position(|&c| c == Code::Pause);
        let xchg = codes.iter().position(|&c| c == Code::Xchg_r32_EAX);
        assert!(pause < xchg);
    }

    #[test]
    fn operand_shape_queries() {
        let t = template(Code::Lea_r32_m);
        assert!(t.has_modrm());
        assert!(t.requires_memory());
        assert!(!t.requires_register_rm());
        let t = template(Code::Jmp_rel8_32);
        assert!(!t.has_modrm());
        assert_eq!(t.near_branch_kind(), OpKind::NearBranch32);
        assert!(template(Code::VEX_Vaddps_xmm_xmm_xmmm128).uses_vvvv());
    }

    #[test]
    fn disp8_scale_follows_tuple_type() {
        let t = template(Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er);
        assert_eq!(t.disp8_scale(false), 64);
        assert_eq!(t.disp8_scale(true), 4);
        assert_eq!(template(Code::EVEX_Vaddss_xmm_k1z_xmm_xmmm32_er).disp8_scale(false), 4);
        assert_eq!(template(Code::VEX_Vaddps_xmm_xmm_xmmm128).disp8_scale(false), 1);
    }

    #[test]
    fn mandatory_prefix_pp_round_trips() {
        for pp in 0..4 {
            assert_eq!(MandatoryPrefix::from_pp(pp).pp(), pp);
        }
        assert_eq!(MandatoryPrefix::PF2.byte(), Some(0xF2));
        assert_eq!(MandatoryPrefix::Any.byte(), None);
    }

    #[test]
    fn unknown_family_map_pairs_have_no_candidates() {
        assert_eq!(
            candidates(EncodingKind::Vex, OpcodeMap::Primary, 0x58).count(),
            0
        );
    }
}
