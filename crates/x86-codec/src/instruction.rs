//! The Instruction Record: a flat, copyable description of one instruction.
//!
//! The decoder fills a record, the encoder consumes one, and callers may
//! build or edit records in between. Operand slots are described by
//! [`OpKind`]; register, immediate, branch and memory payloads live in
//! dedicated fields so the record stays `Copy` and allocation free.

use core::fmt;

use crate::code::{Code, ConditionCode};
use crate::mnemonic::Mnemonic;
use crate::register::{Register, RegisterClass};
use crate::tables::{template, ImmediateEncoding, OperandEncoding};

/// Maximum number of operands a record carries.
pub const MAX_OPERANDS: usize = 5;

/// Processor mode (default operand/address width).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodeSize {
    /// 16-bit mode.
    Code16,
    /// 32-bit mode.
    Code32,
    /// 64-bit (long) mode.
    #[default]
    Code64,
}

impl CodeSize {
    /// Mode width in bits.
    pub fn bits(self) -> u32 {
        match self {
            CodeSize::Code16 => 16,
            CodeSize::Code32 => 32,
            CodeSize::Code64 => 64,
        }
    }

    /// Mode for a width of 16, 32 or 64 bits.
    pub fn from_bits(bits: u32) -> Option<CodeSize> {
        match bits {
            16 => Some(CodeSize::Code16),
            32 => Some(CodeSize::Code32),
            64 => Some(CodeSize::Code64),
            _ => None,
        }
    }
}

/// Kind of one operand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpKind {
    /// Unused slot.
    #[default]
    None,
    /// Register ([`Instruction::op_register`]).
    Register,
    /// Near branch target with 16-bit operand size.
    NearBranch16,
    /// Near branch target with 32-bit operand size.
    NearBranch32,
    /// Near branch target with 64-bit operand size.
    NearBranch64,
    /// `ptr16:16`.
    FarBranch16,
    /// `ptr16:32`.
    FarBranch32,
    /// imm8 (also the implicit `1` of shift-by-one).
    Immediate8,
    /// Second imm8 (ENTER).
    Immediate8Second,
    /// imm16.
    Immediate16,
    /// imm32.
    Immediate32,
    /// imm64.
    Immediate64,
    /// imm8 sign-extended to 16 bits.
    Immediate8to16,
    /// imm8 sign-extended to 32 bits.
    Immediate8to32,
    /// imm8 sign-extended to 64 bits.
    Immediate8to64,
    /// imm32 sign-extended to 64 bits.
    Immediate32to64,
    /// `seg:[si]`.
    MemorySegSi,
    /// `seg:[esi]`.
    MemorySegEsi,
    /// `seg:[rsi]`.
    MemorySegRsi,
    /// `es:[di]`.
    MemoryEsDi,
    /// `es:[edi]`.
    MemoryEsEdi,
    /// `es:[rdi]`.
    MemoryEsRdi,
    /// ModRM or moffs memory ([`Instruction::memory_base`] and friends).
    Memory,
}

impl OpKind {
    /// Whether the kind carries an immediate value.
    pub fn is_immediate(self) -> bool {
        matches!(
            self,
            OpKind::Immediate8
                | OpKind::Immediate8Second
                | OpKind::Immediate16
                | OpKind::Immediate32
                | OpKind::Immediate64
                | OpKind::Immediate8to16
                | OpKind::Immediate8to32
                | OpKind::Immediate8to64
                | OpKind::Immediate32to64
        )
    }

    /// Whether the kind is a near branch.
    pub fn is_near_branch(self) -> bool {
        matches!(
            self,
            OpKind::NearBranch16 | OpKind::NearBranch32 | OpKind::NearBranch64
        )
    }

    /// Whether the kind is an implicit string-instruction memory operand.
    pub fn is_string_memory(self) -> bool {
        matches!(
            self,
            OpKind::MemorySegSi
                | OpKind::MemorySegEsi
                | OpKind::MemorySegRsi
                | OpKind::MemoryEsDi
                | OpKind::MemoryEsEdi
                | OpKind::MemoryEsRdi
        )
    }

    /// Address width of a string memory kind.
    pub(crate) fn string_address_bits(self) -> Option<u32> {
        match self {
            OpKind::MemorySegSi | OpKind::MemoryEsDi => Some(16),
            OpKind::MemorySegEsi | OpKind::MemoryEsEdi => Some(32),
            OpKind::MemorySegRsi | OpKind::MemoryEsRdi => Some(64),
            _ => None,
        }
    }

    /// Source (`seg:[rSI]`) string kind for an address width.
    pub(crate) fn string_source(bits: u32) -> OpKind {
        match bits {
            16 => OpKind::MemorySegSi,
            32 => OpKind::MemorySegEsi,
            _ => OpKind::MemorySegRsi,
        }
    }

    /// Destination (`es:[rDI]`) string kind for an address width.
    pub(crate) fn string_destination(bits: u32) -> OpKind {
        match bits {
            16 => OpKind::MemoryEsDi,
            32 => OpKind::MemoryEsEdi,
            _ => OpKind::MemoryEsRdi,
        }
    }
}

/// REP-family prefix attached to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RepPrefix {
    /// No prefix.
    #[default]
    None,
    /// `F3` (REP / REPE).
    Repe,
    /// `F2` (REPNE).
    Repne,
}

/// EVEX/MVEX static rounding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingControl {
    /// Use MXCSR.
    #[default]
    None,
    /// `{rn-sae}`.
    RoundToNearest,
    /// `{rd-sae}`.
    RoundDown,
    /// `{ru-sae}`.
    RoundUp,
    /// `{rz-sae}`.
    RoundTowardZero,
}

impl RoundingControl {
    pub(crate) fn from_bits(bits: u8) -> RoundingControl {
        match bits & 3 {
            0 => RoundingControl::RoundToNearest,
            1 => RoundingControl::RoundDown,
            2 => RoundingControl::RoundUp,
            _ => RoundingControl::RoundTowardZero,
        }
    }

    pub(crate) fn bits(self) -> Option<u8> {
        match self {
            RoundingControl::None => None,
            RoundingControl::RoundToNearest => Some(0),
            RoundingControl::RoundDown => Some(1),
            RoundingControl::RoundUp => Some(2),
            RoundingControl::RoundTowardZero => Some(3),
        }
    }
}

/// MVEX register swizzle or memory up-conversion (the `sss` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MvexRegMemConv {
    /// No swizzle / conversion.
    #[default]
    None,
    /// Register swizzle `{cdab}`.
    RegSwizzleCdab,
    /// Register swizzle `{badc}`.
    RegSwizzleBadc,
    /// Register swizzle `{dacb}`.
    RegSwizzleDacb,
    /// Register swizzle `{aaaa}`.
    RegSwizzleAaaa,
    /// Register swizzle `{bbbb}`.
    RegSwizzleBbbb,
    /// Register swizzle `{cccc}`.
    RegSwizzleCccc,
    /// Register swizzle `{dddd}`.
    RegSwizzleDddd,
    /// Memory broadcast `{1to16}`.
    MemBroadcast1To16,
    /// Memory broadcast `{4to16}`.
    MemBroadcast4To16,
    /// Memory conversion from float16.
    MemFloat16,
    /// Memory conversion from uint8.
    MemUint8,
    /// Memory conversion from sint8.
    MemSint8,
    /// Memory conversion from uint16.
    MemUint16,
    /// Memory conversion from sint16.
    MemSint16,
}

impl MvexRegMemConv {
    /// Decodes `sss` for a register (`register == true`) or memory operand.
    pub(crate) fn from_sss(sss: u8, register: bool) -> MvexRegMemConv {
        let sss = sss & 7;
        if register {
            match sss {
                1 => MvexRegMemConv::RegSwizzleCdab,
                2 => MvexRegMemConv::RegSwizzleBadc,
                3 => MvexRegMemConv::RegSwizzleDacb,
                4 => MvexRegMemConv::RegSwizzleAaaa,
                5 => MvexRegMemConv::RegSwizzleBbbb,
                6 => MvexRegMemConv::RegSwizzleCccc,
                7 => MvexRegMemConv::RegSwizzleDddd,
                _ => MvexRegMemConv::None,
            }
        } else {
            match sss {
                1 => MvexRegMemConv::MemBroadcast1To16,
                2 => MvexRegMemConv::MemBroadcast4To16,
                3 => MvexRegMemConv::MemFloat16,
                4 => MvexRegMemConv::MemUint8,
                5 => MvexRegMemConv::MemSint8,
                6 => MvexRegMemConv::MemUint16,
                7 => MvexRegMemConv::MemSint16,
                _ => MvexRegMemConv::None,
            }
        }
    }

    /// `sss` value and whether the conversion applies to a register operand.
    pub(crate) fn sss(self) -> (u8, Option<bool>) {
        match self {
            MvexRegMemConv::None => (0, None),
            MvexRegMemConv::RegSwizzleCdab => (1, Some(true)),
            MvexRegMemConv::RegSwizzleBadc => (2, Some(true)),
            MvexRegMemConv::RegSwizzleDacb => (3, Some(true)),
            MvexRegMemConv::RegSwizzleAaaa => (4, Some(true)),
            MvexRegMemConv::RegSwizzleBbbb => (5, Some(true)),
            MvexRegMemConv::RegSwizzleCccc => (6, Some(true)),
            MvexRegMemConv::RegSwizzleDddd => (7, Some(true)),
            MvexRegMemConv::MemBroadcast1To16 => (1, Some(false)),
            MvexRegMemConv::MemBroadcast4To16 => (2, Some(false)),
            MvexRegMemConv::MemFloat16 => (3, Some(false)),
            MvexRegMemConv::MemUint8 => (4, Some(false)),
            MvexRegMemConv::MemSint8 => (5, Some(false)),
            MvexRegMemConv::MemUint16 => (6, Some(false)),
            MvexRegMemConv::MemSint16 => (7, Some(false)),
        }
    }
}

/// Memory operand used when building a record.
///
/// `displ_size` follows the record convention:
///
/// - 0: no displacement byte when the displacement is zero and the base
///   allows it, otherwise the shortest form;
/// - 1: disp8 (EVEX-compressed where applicable) when it fits, otherwise the
///   full width;
/// - 2: disp16 (16-bit addressing);
/// - 4: disp32 with 32-bit addressing;
/// - 8: disp32 with 64-bit addressing, or a 64-bit moffs.
///
/// The decoder reports exactly the form it read, and [`MemoryOperand::with_base_displ`]
/// and [`MemoryOperand::with_base_index`] pick the size the decoder would
/// report for the shortest legacy encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryOperand {
    /// Base register, `Rip`/`Eip`, or `None`.
    pub base: Register,
    /// Index register or `None`.
    pub index: Register,
    /// 1, 2, 4 or 8.
    pub scale: u8,
    /// Signed displacement (absolute address when there is no base/index).
    pub displacement: i64,
    /// Displacement size, see the type docs.
    pub displ_size: u8,
    /// Segment override or `None`.
    pub segment: Register,
    /// EVEX embedded broadcast.
    pub broadcast: bool,
}

impl Default for MemoryOperand {
    fn default() -> Self {
        Self {
            base: Register::None,
            index: Register::None,
            scale: 1,
            displacement: 0,
            displ_size: 0,
            segment: Register::None,
            broadcast: false,
        }
    }
}

impl MemoryOperand {
    /// Fully specified operand.
    pub fn new(
        base: Register,
        index: Register,
        scale: u8,
        displacement: i64,
        displ_size: u8,
    ) -> Self {
        Self {
            base,
            index,
            scale,
            displacement,
            displ_size,
            ..Self::default()
        }
    }

    /// `[base]`.
    pub fn with_base(base: Register) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// `[base + displacement]` with the shortest displacement encoding.
    pub fn with_base_displ(base: Register, displacement: i64) -> Self {
        Self {
            base,
            displacement,
            displ_size: shortest_displ_size(base, Register::None, displacement),
            ..Self::default()
        }
    }

    /// `[base + index*scale + displacement]` with the shortest displacement.
    pub fn with_base_index(base: Register, index: Register, scale: u8, displacement: i64) -> Self {
        Self {
            base,
            index,
            scale,
            displacement,
            displ_size: shortest_displ_size(base, index, displacement),
            ..Self::default()
        }
    }

    /// Sets the segment override.
    pub fn segment(mut self, segment: Register) -> Self {
        self.segment = segment;
        self
    }

    /// Sets EVEX embedded broadcast.
    pub fn broadcast(mut self) -> Self {
        self.broadcast = true;
        self
    }
}

/// One operand value handed to [`Instruction::with_operands`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperandValue {
    /// Register operand.
    Register(Register),
    /// Memory operand (ModRM, moffs or string).
    Memory(MemoryOperand),
    /// Immediate; negative values are accepted for any width they fit.
    Immediate(i64),
    /// Absolute near-branch target.
    Branch(u64),
    /// Far pointer.
    Far {
        /// Segment selector.
        selector: u16,
        /// Offset.
        offset: u32,
    },
}

impl From<Register> for OperandValue {
    fn from(reg: Register) -> Self {
        OperandValue::Register(reg)
    }
}

impl From<MemoryOperand> for OperandValue {
    fn from(mem: MemoryOperand) -> Self {
        OperandValue::Memory(mem)
    }
}

impl From<i64> for OperandValue {
    fn from(imm: i64) -> Self {
        OperandValue::Immediate(imm)
    }
}

impl From<i32> for OperandValue {
    fn from(imm: i32) -> Self {
        OperandValue::Immediate(i64::from(imm))
    }
}

/// A decoded or to-be-encoded instruction.
///
/// Immediates are stored widened to 64 bits: sign-extending kinds
/// (`Immediate8to32`, `Immediate32to64`, ...) hold the value sign-extended
/// to their operand width, plain kinds hold the zero-extended value. Near-branch targets are
/// absolute and masked to the operand size. RIP/EIP-relative memory keeps the
/// raw displacement; [`Instruction::ip_rel_memory_address`] resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    ip: u64,
    code: Code,
    code_size: CodeSize,
    len: u8,
    op_kinds: [OpKind; MAX_OPERANDS],
    op_registers: [Register; MAX_OPERANDS],
    immediates: [u64; 2],
    near_branch: u64,
    far_branch: u32,
    far_selector: u16,
    mem_base: Register,
    mem_index: Register,
    mem_scale: u8,
    mem_displacement: i64,
    mem_displ_size: u8,
    segment_prefix: Register,
    lock: bool,
    rep: RepPrefix,
    op_mask: Register,
    zeroing: bool,
    broadcast: bool,
    rounding: RoundingControl,
    sae: bool,
    eviction_hint: bool,
    mvex_conv: MvexRegMemConv,
}

impl Instruction {
    /// Empty record for `code` with operand kinds taken from its template.
    /// Register, immediate and memory payloads are left at their defaults.
    pub fn new(code_size: CodeSize, code: Code) -> Self {
        let mut instr = Instruction {
            code,
            code_size,
            mem_scale: 1,
            ..Instruction::default()
        };
        let bits = instr.default_address_bits();
        for (i, op) in template(code).operands().iter().enumerate() {
            let kind = match *op {
                OperandEncoding::None => OpKind::None,
                OperandEncoding::Reg(..) | OperandEncoding::Fixed(_) => OpKind::Register,
                OperandEncoding::RegOrMem(_) => OpKind::Register,
                OperandEncoding::Mem | OperandEncoding::Moffs => OpKind::Memory,
                OperandEncoding::StringSrc => OpKind::string_source(bits),
                OperandEncoding::StringDst => OpKind::string_destination(bits),
                OperandEncoding::Imm(enc) => enc.op_kind(),
                OperandEncoding::Branch(_) => template(code).near_branch_kind(),
                OperandEncoding::FarPtr => template(code).far_branch_kind(),
            };
            instr.op_kinds[i] = kind;
            if let OperandEncoding::Fixed(reg) = *op {
                instr.op_registers[i] = reg;
            }
            if let OperandEncoding::Imm(ImmediateEncoding::One) = *op {
                instr.immediates[0] = 1;
            }
        }
        instr
    }

    /// Record for `code` with operand payloads taken from `operands`, in
    /// operand order. Operand kinds come from the template; a register given
    /// for an r/m slot selects the register form, a memory operand the memory
    /// form. Implicit operands (fixed registers, the shift count `1`) may be
    /// omitted or given explicitly.
    pub fn with_operands(code_size: CodeSize, code: Code, operands: &[OperandValue]) -> Self {
        let mut instr = Instruction::new(code_size, code);
        let slots = template(code).operands();
        for (i, value) in operands.iter().enumerate().take(MAX_OPERANDS) {
            let slot = slots.get(i).copied().unwrap_or_default();
            match *value {
                OperandValue::Register(reg) => {
                    instr.op_kinds[i] = OpKind::Register;
                    instr.op_registers[i] = reg;
                }
                OperandValue::Memory(mem) => {
                    instr.op_kinds[i] = match slot {
                        OperandEncoding::StringSrc => {
                            OpKind::string_source(string_bits(&mem, instr.default_address_bits()))
                        }
                        OperandEncoding::StringDst => OpKind::string_destination(string_bits(
                            &mem,
                            instr.default_address_bits(),
                        )),
                        _ => OpKind::Memory,
                    };
                    if instr.op_kinds[i] == OpKind::Memory {
                        instr.set_memory(&mem);
                    } else if mem.segment != Register::None {
                        instr.segment_prefix = mem.segment;
                    }
                }
                OperandValue::Immediate(value) => {
                    let kind = match slot {
                        OperandEncoding::Imm(enc) => enc.op_kind(),
                        _ => OpKind::Immediate64,
                    };
                    instr.op_kinds[i] = kind;
                    instr.store_immediate(kind, value as u64);
                }
                OperandValue::Branch(target) => {
                    let kind = template(code).near_branch_kind();
                    instr.op_kinds[i] = kind;
                    instr.set_near_branch_target(target);
                }
                OperandValue::Far { selector, offset } => {
                    instr.op_kinds[i] = template(code).far_branch_kind();
                    instr.far_selector = selector;
                    instr.far_branch = offset;
                }
            }
        }
        instr
    }

    fn default_address_bits(&self) -> u32 {
        match template(self.code).addr_size.bits() {
            Some(bits) => bits,
            None => self.code_size.bits(),
        }
    }

    // ─── Identity ───────────────────────────────────────────────────────

    /// Address of the first byte.
    pub fn ip(&self) -> u64 {
        self.ip
    }

    /// Sets the address of the first byte.
    pub fn set_ip(&mut self, ip: u64) {
        self.ip = ip;
    }

    /// Address of the following instruction.
    pub fn next_ip(&self) -> u64 {
        let next = self.ip.wrapping_add(u64::from(self.len));
        match self.code_size {
            CodeSize::Code16 | CodeSize::Code32 => next & 0xFFFF_FFFF,
            CodeSize::Code64 => next,
        }
    }

    /// Instruction form.
    pub fn code(&self) -> Code {
        self.code
    }

    /// Replaces the form; operand payloads are kept.
    pub fn set_code(&mut self, code: Code) {
        self.code = code;
    }

    /// Mnemonic of [`Instruction::code`].
    pub fn mnemonic(&self) -> Mnemonic {
        self.code.mnemonic()
    }

    /// Whether the record holds a real instruction.
    pub fn is_invalid(&self) -> bool {
        self.code == Code::Invalid
    }

    /// Mode the record was decoded in / is meant for.
    pub fn code_size(&self) -> CodeSize {
        self.code_size
    }

    /// Sets the mode.
    pub fn set_code_size(&mut self, code_size: CodeSize) {
        self.code_size = code_size;
    }

    /// Encoded length in bytes (0 for hand-built records).
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether [`Instruction::len`] is zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the encoded length.
    pub fn set_len(&mut self, len: usize) {
        self.len = len.min(u8::MAX as usize) as u8;
    }

    // ─── Operands ───────────────────────────────────────────────────────

    /// Number of operands of the form.
    pub fn op_count(&self) -> usize {
        self.code.op_count()
    }

    /// Kind of operand `operand` (`None` past the end).
    pub fn op_kind(&self, operand: usize) -> OpKind {
        self.op_kinds.get(operand).copied().unwrap_or_default()
    }

    /// Sets the kind of operand `operand`.
    pub fn set_op_kind(&mut self, operand: usize, kind: OpKind) {
        if let Some(slot) = self.op_kinds.get_mut(operand) {
            *slot = kind;
        }
    }

    /// Kinds of all operands of the form.
    pub fn op_kinds(&self) -> impl Iterator<Item = OpKind> + '_ {
        self.op_kinds.iter().copied().take(self.op_count())
    }

    /// Register of operand `operand` (`None` if it is not a register).
    pub fn op_register(&self, operand: usize) -> Register {
        self.op_registers.get(operand).copied().unwrap_or_default()
    }

    /// Sets the register of operand `operand`.
    pub fn set_op_register(&mut self, operand: usize, reg: Register) {
        if let Some(slot) = self.op_registers.get_mut(operand) {
            *slot = reg;
        }
    }

    /// Whether operand `operand` is implied by the form (fixed register or
    /// the shift-by-one count).
    pub fn is_implicit_operand(&self, operand: usize) -> bool {
        matches!(
            template(self.code).operands().get(operand),
            Some(OperandEncoding::Fixed(_) | OperandEncoding::Imm(ImmediateEncoding::One))
        )
    }

    // ─── Immediates ─────────────────────────────────────────────────────

    pub(crate) fn store_immediate(&mut self, kind: OpKind, value: u64) {
        let stored = match kind {
            OpKind::Immediate8 => value & 0xFF,
            OpKind::Immediate8Second => value & 0xFF,
            OpKind::Immediate16 => value & 0xFFFF,
            OpKind::Immediate32 => value & 0xFFFF_FFFF,
            OpKind::Immediate8to16 => i64::from(value as i8) as u64 & 0xFFFF,
            OpKind::Immediate8to32 => i64::from(value as i8) as u64 & 0xFFFF_FFFF,
            OpKind::Immediate8to64 => i64::from(value as i8) as u64,
            OpKind::Immediate32to64 => i64::from(value as i32) as u64,
            _ => value,
        };
        // Preserve out-of-range values so the encoder can reject them.
        let stored = if sign_fits(kind, value as i64) || zero_fits(kind, value) {
            stored
        } else {
            value
        };
        if kind == OpKind::Immediate8Second {
            self.immediates[1] = stored;
        } else {
            self.immediates[0] = stored;
        }
    }

    /// Immediate of operand `operand`, widened as described on the type.
    pub fn immediate(&self, operand: usize) -> u64 {
        match self.op_kind(operand) {
            OpKind::Immediate8Second => self.immediates[1],
            kind if kind.is_immediate() => self.immediates[0],
            _ => 0,
        }
    }

    /// Sets the immediate of operand `operand` (kind must already be set).
    pub fn set_immediate(&mut self, operand: usize, value: u64) {
        let kind = self.op_kind(operand);
        if kind.is_immediate() {
            self.store_immediate(kind, value);
        }
    }

    /// First immediate truncated to 8 bits.
    pub fn immediate8(&self) -> u8 {
        self.immediates[0] as u8
    }

    /// Second immediate (ENTER nesting level).
    pub fn immediate8_2nd(&self) -> u8 {
        self.immediates[1] as u8
    }

    /// First immediate truncated to 16 bits.
    pub fn immediate16(&self) -> u16 {
        self.immediates[0] as u16
    }

    /// First immediate truncated to 32 bits.
    pub fn immediate32(&self) -> u32 {
        self.immediates[0] as u32
    }

    /// First immediate.
    pub fn immediate64(&self) -> u64 {
        self.immediates[0]
    }

    pub(crate) fn raw_immediate(&self, second: bool) -> u64 {
        self.immediates[usize::from(second)]
    }

    // ─── Branches ───────────────────────────────────────────────────────

    /// Absolute near-branch target.
    pub fn near_branch_target(&self) -> u64 {
        self.near_branch
    }

    /// Sets the near-branch target, masked to the branch operand size.
    pub fn set_near_branch_target(&mut self, target: u64) {
        self.near_branch = match template(self.code).near_branch_kind() {
            OpKind::NearBranch16 => target & 0xFFFF,
            OpKind::NearBranch32 => target & 0xFFFF_FFFF,
            _ => target,
        };
    }

    /// Far-branch selector.
    pub fn far_branch_selector(&self) -> u16 {
        self.far_selector
    }

    /// Far-branch offset.
    pub fn far_branch_offset(&self) -> u32 {
        self.far_branch
    }

    /// Sets the far-branch target.
    pub fn set_far_branch(&mut self, selector: u16, offset: u32) {
        self.far_selector = selector;
        self.far_branch = offset;
    }

    // ─── Memory ─────────────────────────────────────────────────────────

    /// Copies base, index, scale, displacement, segment and broadcast.
    pub fn set_memory(&mut self, mem: &MemoryOperand) {
        self.mem_base = mem.base;
        self.mem_index = mem.index;
        self.mem_scale = if mem.index == Register::None {
            1
        } else {
            mem.scale
        };
        self.mem_displacement = mem.displacement;
        self.mem_displ_size = mem.displ_size;
        self.segment_prefix = mem.segment;
        self.broadcast = mem.broadcast;
    }

    /// Memory base register (`Rip`/`Eip` for IP-relative).
    pub fn memory_base(&self) -> Register {
        self.mem_base
    }

    /// Sets the memory base register.
    pub fn set_memory_base(&mut self, reg: Register) {
        self.mem_base = reg;
    }

    /// Memory index register.
    pub fn memory_index(&self) -> Register {
        self.mem_index
    }

    /// Sets the memory index register.
    pub fn set_memory_index(&mut self, reg: Register) {
        self.mem_index = reg;
    }

    /// Index scale (1 when there is no index).
    pub fn memory_index_scale(&self) -> u8 {
        self.mem_scale
    }

    /// Sets the index scale.
    pub fn set_memory_index_scale(&mut self, scale: u8) {
        self.mem_scale = scale;
    }

    /// Signed displacement; an absolute address for moffs and base/index-less
    /// memory, the raw rel32 for IP-relative memory.
    pub fn memory_displacement(&self) -> i64 {
        self.mem_displacement
    }

    /// Sets the displacement.
    pub fn set_memory_displacement(&mut self, displacement: i64) {
        self.mem_displacement = displacement;
    }

    /// Displacement size (see [`MemoryOperand`]).
    pub fn memory_displ_size(&self) -> u8 {
        self.mem_displ_size
    }

    /// Sets the displacement size.
    pub fn set_memory_displ_size(&mut self, size: u8) {
        self.mem_displ_size = size;
    }

    /// Explicit segment override (`None` when absent).
    pub fn segment_prefix(&self) -> Register {
        self.segment_prefix
    }

    /// Sets the segment override.
    pub fn set_segment_prefix(&mut self, segment: Register) {
        self.segment_prefix = segment;
    }

    /// Segment used by the memory operand: the override, else SS for
    /// rBP/rSP-based addressing, else DS.
    pub fn memory_segment(&self) -> Register {
        if self.segment_prefix != Register::None {
            return self.segment_prefix;
        }
        match self.mem_base {
            Register::Bp | Register::Ebp | Register::Rbp | Register::Sp | Register::Esp
            | Register::Rsp => Register::Ss,
            _ => Register::Ds,
        }
    }

    /// Whether the memory operand is RIP/EIP-relative.
    pub fn is_ip_rel_memory_operand(&self) -> bool {
        matches!(self.mem_base, Register::Rip | Register::Eip)
    }

    /// Absolute address of an IP-relative memory operand.
    pub fn ip_rel_memory_address(&self) -> Option<u64> {
        let target = self.next_ip().wrapping_add(self.mem_displacement as u64);
        match self.mem_base {
            Register::Rip => Some(target),
            Register::Eip => Some(target & 0xFFFF_FFFF),
            _ => None,
        }
    }

    /// Whether any operand is memory (ModRM, moffs or string).
    pub fn has_memory_operand(&self) -> bool {
        self.op_kinds()
            .any(|k| k == OpKind::Memory || k.is_string_memory())
    }

    /// Effective address width of the memory operands, if the record has any
    /// address-size dependent operand.
    pub fn address_size(&self) -> Option<u32> {
        if let Some(bits) = self.op_kinds().find_map(OpKind::string_address_bits) {
            return Some(bits);
        }
        if let Some(bits) = template(self.code).addr_size.bits() {
            return Some(bits);
        }
        if !self.op_kinds().any(|k| k == OpKind::Memory) {
            return None;
        }
        let from_reg = |reg: Register| match reg.class() {
            RegisterClass::Gpr16 => Some(16),
            RegisterClass::Gpr32 => Some(32),
            RegisterClass::Gpr64 => Some(64),
            RegisterClass::Ip => Some(if reg == Register::Eip { 32 } else { 64 }),
            _ => None,
        };
        let bits = from_reg(self.mem_base)
            .or_else(|| from_reg(self.mem_index))
            .or(match self.mem_displ_size {
                2 => Some(16),
                4 => Some(32),
                8 => Some(64),
                _ => None,
            })
            .unwrap_or_else(|| self.code_size.bits());
        Some(bits)
    }

    /// Whether encoding needs an `67` address-size override.
    pub fn has_address_size_override(&self) -> bool {
        matches!(
            (self.address_size(), self.code_size),
            (Some(32), CodeSize::Code16 | CodeSize::Code64) | (Some(16), CodeSize::Code32)
        )
    }

    // ─── Prefixes and EVEX/MVEX attributes ──────────────────────────────

    /// Whether the record carries LOCK.
    pub fn has_lock_prefix(&self) -> bool {
        self.lock
    }

    /// Sets LOCK.
    pub fn set_lock_prefix(&mut self, lock: bool) {
        self.lock = lock;
    }

    /// REP-family prefix.
    pub fn rep_prefix(&self) -> RepPrefix {
        self.rep
    }

    /// Sets the REP-family prefix.
    pub fn set_rep_prefix(&mut self, rep: RepPrefix) {
        self.rep = rep;
    }

    /// Opmask register (`None` when unmasked).
    pub fn op_mask(&self) -> Register {
        self.op_mask
    }

    /// Sets the opmask; `K0` and `None` both mean unmasked.
    pub fn set_op_mask(&mut self, mask: Register) {
        self.op_mask = if mask == Register::K0 {
            Register::None
        } else {
            mask
        };
    }

    /// Whether zeroing-masking (`{z}`) is selected.
    pub fn zeroing_masking(&self) -> bool {
        self.zeroing
    }

    /// Sets zeroing-masking.
    pub fn set_zeroing_masking(&mut self, zeroing: bool) {
        self.zeroing = zeroing;
    }

    /// Whether the memory operand is an embedded broadcast.
    pub fn is_broadcast(&self) -> bool {
        self.broadcast
    }

    /// Sets embedded broadcast.
    pub fn set_broadcast(&mut self, broadcast: bool) {
        self.broadcast = broadcast;
    }

    /// Static rounding mode.
    pub fn rounding_control(&self) -> RoundingControl {
        self.rounding
    }

    /// Sets the static rounding mode.
    pub fn set_rounding_control(&mut self, rounding: RoundingControl) {
        self.rounding = rounding;
    }

    /// Whether exceptions are suppressed (`{sae}`, implied by rounding).
    pub fn suppress_all_exceptions(&self) -> bool {
        self.sae
    }

    /// Sets suppress-all-exceptions.
    pub fn set_suppress_all_exceptions(&mut self, sae: bool) {
        self.sae = sae;
    }

    /// MVEX eviction hint.
    pub fn is_mvex_eviction_hint(&self) -> bool {
        self.eviction_hint
    }

    /// Sets the MVEX eviction hint.
    pub fn set_mvex_eviction_hint(&mut self, hint: bool) {
        self.eviction_hint = hint;
    }

    /// MVEX swizzle / conversion.
    pub fn mvex_reg_mem_conv(&self) -> MvexRegMemConv {
        self.mvex_conv
    }

    /// Sets the MVEX swizzle / conversion.
    pub fn set_mvex_reg_mem_conv(&mut self, conv: MvexRegMemConv) {
        self.mvex_conv = conv;
    }

    // ─── Mutators ───────────────────────────────────────────────────────

    /// Condition tested by the instruction.
    pub fn condition_code(&self) -> ConditionCode {
        self.code.condition_code()
    }

    /// Inverts the condition of a Jcc/SETcc/CMOVcc/LOOPcc; no-op otherwise.
    pub fn negate_condition_code(&mut self) {
        self.code = self.code.negate_condition_code();
    }

    /// Switches a near Jcc/JMP to its rel8 form; no-op otherwise. The
    /// target is kept, so re-encoding may fail if it is out of rel8 range.
    pub fn to_short_branch(&mut self) {
        self.code = self.code.as_short_branch();
    }

    /// Switches a short Jcc/JMP to its rel16/rel32 form; no-op otherwise.
    pub fn to_near_branch(&mut self) {
        self.code = self.code.as_near_branch();
    }
}

// ─── Intel-syntax rendering ─────────────────────────────────────────────

impl fmt::Display for Instruction {
    /// Lowercase Intel syntax with hexadecimal constants, e.g.
    /// `add eax, 0x10` or `vaddps zmm1 {k1}{z}, zmm2, zmm3, {rz-sae}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lock {
            f.write_str("lock ")?;
        }
        match self.rep {
            RepPrefix::None => {}
            RepPrefix::Repe => f.write_str("rep ")?,
            RepPrefix::Repne => f.write_str("repne ")?,
        }
        write!(f, "{}", self.mnemonic())?;
        for operand in 0..self.op_count() {
            f.write_str(if operand == 0 { " " } else { ", " })?;
            self.fmt_operand(f, operand)?;
            if operand == 0 && self.op_mask != Register::None {
                write!(f, " {{{}}}", self.op_mask)?;
            }
            if operand == 0 && self.zeroing {
                f.write_str("{z}")?;
            }
        }
        let rounding = match self.rounding {
            RoundingControl::None if self.sae => Some("sae"),
            RoundingControl::None => None,
            RoundingControl::RoundToNearest => Some("rn-sae"),
            RoundingControl::RoundDown => Some("rd-sae"),
            RoundingControl::RoundUp => Some("ru-sae"),
            RoundingControl::RoundTowardZero => Some("rz-sae"),
        };
        if let Some(rounding) = rounding {
            write!(f, ", {{{}}}", rounding)?;
        }
        Ok(())
    }
}

impl Instruction {
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, operand: usize) -> fmt::Result {
        match self.op_kind(operand) {
            OpKind::None => Ok(()),
            OpKind::Register => write!(f, "{}", self.op_register(operand)),
            OpKind::NearBranch16 | OpKind::NearBranch32 | OpKind::NearBranch64 => {
                write!(f, "{:#x}", self.near_branch)
            }
            OpKind::FarBranch16 | OpKind::FarBranch32 => {
                write!(f, "{:#x}:{:#x}", self.far_selector, self.far_branch)
            }
            OpKind::Memory => self.fmt_memory(f),
            kind if kind.is_string_memory() => {
                let bits = kind.string_address_bits().unwrap_or(64);
                let (si, di) = match bits {
                    16 => ("si", "di"),
                    32 => ("esi", "edi"),
                    _ => ("rsi", "rdi"),
                };
                if kind == OpKind::string_source(bits) {
                    if self.segment_prefix != Register::None {
                        write!(f, "{}:", self.segment_prefix)?;
                    }
                    write!(f, "[{}]", si)
                } else {
                    write!(f, "es:[{}]", di)
                }
            }
            _ => write!(f, "{:#x}", self.immediate(operand)),
        }
    }

    fn fmt_memory(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segment_prefix != Register::None {
            write!(f, "{}:", self.segment_prefix)?;
        }
        f.write_str("[")?;
        let mut first = true;
        if self.mem_base != Register::None {
            write!(f, "{}", self.mem_base)?;
            first = false;
        }
        if self.mem_index != Register::None {
            if !first {
                f.write_str("+")?;
            }
            write!(f, "{}", self.mem_index)?;
            if self.mem_scale > 1 {
                write!(f, "*{}", self.mem_scale)?;
            }
            first = false;
        }
        let disp = self.mem_displacement;
        if first {
            write!(f, "{:#x}", disp as u64)?;
        } else if disp < 0 {
            write!(f, "-{:#x}", disp.unsigned_abs())?;
        } else if disp > 0 {
            write!(f, "+{:#x}", disp)?;
        }
        f.write_str("]")?;
        if self.broadcast {
            let t = template(self.code);
            let elements = t.l.bytes() / u32::from(t.element_size.max(1));
            write!(f, "{{1to{}}}", elements)?;
        }
        Ok(())
    }
}

/// Displacement size the shortest legacy encoding of `[base + index + disp]`
/// carries.
fn shortest_displ_size(base: Register, index: Register, displacement: i64) -> u8 {
    let needs_byte = match base {
        Register::Ebp | Register::Rbp | Register::R13d | Register::R13 => true,
        Register::Bp => index == Register::None,
        _ => false,
    };
    let full = match base.class() {
        RegisterClass::Gpr16 => 2,
        RegisterClass::Gpr32 => 4,
        RegisterClass::Ip => return if base == Register::Eip { 4 } else { 8 },
        RegisterClass::Gpr64 => 8,
        _ => match index.class() {
            RegisterClass::Gpr16 => 2,
            RegisterClass::Gpr32 => 4,
            _ => 8,
        },
    };
    if base == Register::None {
        full
    } else if displacement == 0 {
        u8::from(needs_byte)
    } else if i8::try_from(displacement).is_ok() {
        1
    } else {
        full
    }
}

fn string_bits(mem: &MemoryOperand, default_bits: u32) -> u32 {
    match mem.base.class() {
        RegisterClass::Gpr16 => 16,
        RegisterClass::Gpr32 => 32,
        RegisterClass::Gpr64 => 64,
        _ => default_bits,
    }
}

/// Whether `value` is representable as a signed value of the kind's width.
fn sign_fits(kind: OpKind, value: i64) -> bool {
    match kind {
        OpKind::Immediate8 | OpKind::Immediate8Second => i8::try_from(value).is_ok(),
        OpKind::Immediate16 => i16::try_from(value).is_ok(),
        OpKind::Immediate32 => i32::try_from(value).is_ok(),
        OpKind::Immediate8to16 | OpKind::Immediate8to32 | OpKind::Immediate8to64 => {
            i8::try_from(value).is_ok()
        }
        OpKind::Immediate32to64 => i32::try_from(value).is_ok(),
        _ => true,
    }
}

/// Whether `value` is representable as the canonical stored form of `kind`.
pub(crate) fn zero_fits(kind: OpKind, value: u64) -> bool {
    match kind {
        OpKind::Immediate8 | OpKind::Immediate8Second => value <= 0xFF,
        OpKind::Immediate16 => value <= 0xFFFF,
        OpKind::Immediate32 => value <= 0xFFFF_FFFF,
        OpKind::Immediate8to16 => {
            value <= 0x7F || (0xFF80..=0xFFFF).contains(&value)
        }
        OpKind::Immediate8to32 => {
            value <= 0x7F || (0xFFFF_FF80..=0xFFFF_FFFF).contains(&value)
        }
        OpKind::Immediate8to64 => i8::try_from(value as i64).is_ok(),
        OpKind::Immediate32to64 => i32::try_from(value as i64).is_ok(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn new_fills_kinds_from_the_template() {
        let instr = Instruction::new(CodeSize::Code64, Code::Add_rm32_imm8);
        assert_eq!(instr.op_count(), 2);
        assert_eq!(instr.op_kind(0), OpKind::Register);
        assert_eq!(instr.op_kind(1), OpKind::Immediate8to32);
        assert_eq!(instr.op_kind(2), OpKind::None);
        assert_eq!(instr.op_kind(99), OpKind::None);
    }

    #[test]
    fn fixed_registers_and_implicit_one_are_prefilled() {
        let instr = Instruction::new(CodeSize::Code32, Code::Add_EAX_imm32);
        assert_eq!(instr.op_register(0), Register::Eax);
        assert!(instr.is_implicit_operand(0));
        assert!(!instr.is_implicit_operand(1));
        let instr = Instruction::new(CodeSize::Code64, Code::Shl_rm32_1);
        assert_eq!(instr.immediate(1), 1);
        assert!(instr.is_implicit_operand(1));
    }

    #[test]
    fn sign_extending_immediates_are_widened() {
        let instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::Add_rm64_imm8,
            &[Register::Rax.into(), OperandValue::Immediate(-1)],
        );
        assert_eq!(instr.immediate(1), u64::MAX);
        let instr = Instruction::with_operands(
            CodeSize::Code32,
            Code::Add_rm32_imm8,
            &[Register::Eax.into(), OperandValue::Immediate(-2)],
        );
        assert_eq!(instr.immediate(1), 0xFFFF_FFFE);
    }

    #[test]
    fn plain_immediates_are_zero_extended() {
        let instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::Mov_rm8_imm8,
            &[Register::Al.into(), OperandValue::Immediate(-1)],
        );
        assert_eq!(instr.immediate(1), 0xFF);
        assert_eq!(instr.immediate8(), 0xFF);
    }

    #[test]
    fn out_of_range_immediates_are_preserved() {
        let instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::Add_rm64_imm8,
            &[Register::Rax.into(), OperandValue::Immediate(0x1234)],
        );
        assert_eq!(instr.immediate(1), 0x1234);
    }

    #[test]
    fn enter_uses_both_immediates() {
        let instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::Enterq_imm16_imm8,
            &[OperandValue::Immediate(0x20), OperandValue::Immediate(1)],
        );
        assert_eq!(instr.immediate(0), 0x20);
        assert_eq!(instr.immediate(1), 1);
        assert_eq!(instr.immediate8_2nd(), 1);
    }

    #[test]
    fn branch_targets_are_masked_to_operand_size() {
        let instr = Instruction::with_operands(
            CodeSize::Code32,
            Code::Jmp_rel8_32,
            &[OperandValue::Branch(0x1_0000_0010)],
        );
        assert_eq!(instr.op_kind(0), OpKind::NearBranch32);
        assert_eq!(instr.near_branch_target(), 0x10);
    }

    #[test]
    fn memory_operands_fill_memory_fields() {
        let mem = MemoryOperand::with_base_index(Register::Rbx, Register::Rcx, 4, 8)
            .segment(Register::Fs);
        let instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::Mov_r64_rm64,
            &[Register::Rax.into(), mem.into()],
        );
        assert_eq!(instr.op_kind(1), OpKind::Memory);
        assert_eq!(instr.memory_base(), Register::Rbx);
        assert_eq!(instr.memory_index(), Register::Rcx);
        assert_eq!(instr.memory_index_scale(), 4);
        assert_eq!(instr.memory_displacement(), 8);
        assert_eq!(instr.memory_displ_size(), 1);
        assert_eq!(instr.memory_segment(), Register::Fs);
        assert_eq!(instr.address_size(), Some(64));
        assert!(!instr.has_address_size_override());
    }

    #[test]
    fn default_segment_follows_the_base() {
        let mut instr = Instruction::new(CodeSize::Code64, Code::Mov_r64_rm64);
        instr.set_memory(&MemoryOperand::with_base(Register::Rbp));
        assert_eq!(instr.memory_segment(), Register::Ss);
        instr.set_memory(&MemoryOperand::with_base(Register::Rax));
        assert_eq!(instr.memory_segment(), Register::Ds);
    }

    #[test]
    fn string_kinds_follow_address_width() {
        let instr = Instruction::new(CodeSize::Code32, Code::Movsb_m8_m8);
        assert_eq!(instr.op_kind(0), OpKind::MemoryEsEdi);
        assert_eq!(instr.op_kind(1), OpKind::MemorySegEsi);
        let instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::Lodsb_AL_m8,
            &[
                Register::Al.into(),
                MemoryOperand::with_base(Register::Esi).into(),
            ],
        );
        assert_eq!(instr.op_kind(1), OpKind::MemorySegEsi);
        assert!(instr.has_address_size_override());
    }

    #[test]
    fn ip_relative_address_uses_next_ip() {
        let mut instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::Lea_r64_m,
            &[
                Register::Rax.into(),
                MemoryOperand::new(Register::Rip, Register::None, 1, 0x10, 8).into(),
            ],
        );
        instr.set_ip(0x1000);
        instr.set_len(7);
        assert!(instr.is_ip_rel_memory_operand());
        assert_eq!(instr.ip_rel_memory_address(), Some(0x1017));
    }

    #[test]
    fn mutators_rewrite_the_code() {
        let mut instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::Je_rel8_64,
            &[OperandValue::Branch(0x2000)],
        );
        instr.negate_condition_code();
        assert_eq!(instr.code(), Code::Jne_rel8_64);
        instr.to_near_branch();
        assert_eq!(instr.code(), Code::Jne_rel32_64);
        instr.to_short_branch();
        assert_eq!(instr.code(), Code::Jne_rel8_64);
        assert_eq!(instr.near_branch_target(), 0x2000);
        assert_eq!(instr.condition_code(), ConditionCode::Ne);
    }

    #[test]
    fn opmask_k0_means_unmasked() {
        let mut instr = Instruction::default();
        instr.set_op_mask(Register::K0);
        assert_eq!(instr.op_mask(), Register::None);
        instr.set_op_mask(Register::K3);
        assert_eq!(instr.op_mask(), Register::K3);
    }

    #[test]
    fn code_size_bits_round_trip() {
        for size in [CodeSize::Code16, CodeSize::Code32, CodeSize::Code64] {
            assert_eq!(CodeSize::from_bits(size.bits()), Some(size));
        }
        assert_eq!(CodeSize::from_bits(8), None);
    }

    #[test]
    fn intel_syntax_display() {
        let instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::Add_rm32_imm8,
            &[Register::Eax.into(), OperandValue::Immediate(0x10)],
        );
        assert_eq!(instr.to_string(), "add eax, 0x10");

        let mem = MemoryOperand::with_base_index(Register::Rax, Register::Rcx, 4, -8)
            .segment(Register::Fs);
        let instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::Mov_r32_rm32,
            &[Register::Edx.into(), mem.into()],
        );
        assert_eq!(instr.to_string(), "mov edx, fs:[rax+rcx*4-0x8]");

        let jmp = Instruction::with_operands(
            CodeSize::Code32,
            Code::Jmp_rel8_32,
            &[OperandValue::Branch(0x12)],
        );
        assert_eq!(jmp.to_string(), "jmp 0x12");
    }

    #[test]
    fn display_shows_masking_and_rounding() {
        let mut instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er,
            &[Register::Zmm1.into(), Register::Zmm2.into(), Register::Zmm3.into()],
        );
        instr.set_op_mask(Register::K1);
        instr.set_zeroing_masking(true);
        instr.set_rounding_control(RoundingControl::RoundTowardZero);
        assert_eq!(
            instr.to_string(),
            "vaddps zmm1 {k1}{z}, zmm2, zmm3, {rz-sae}"
        );
    }
}
