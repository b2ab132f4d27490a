//! Register identities shared by the decoder, the encoder and the tables.
//!
//! [`Register`] is a dense `u8` identity: every register family occupies a
//! contiguous range, so the class and the in-class number of a register are
//! simple range arithmetic (see [`Register::class`] and [`Register::number`]).

use core::fmt;

/// Register family. Determines which ModRM/VEX/EVEX field widths apply and
/// which operand slots a register may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegisterClass {
    /// No register.
    #[default]
    None,
    /// 8-bit general-purpose.
    Gpr8,
    /// 16-bit general-purpose.
    Gpr16,
    /// 32-bit general-purpose.
    Gpr32,
    /// 64-bit general-purpose.
    Gpr64,
    /// EIP / RIP.
    Ip,
    /// ES, CS, SS, DS, FS, GS.
    Segment,
    /// 128-bit vector.
    Xmm,
    /// 256-bit vector.
    Ymm,
    /// 512-bit vector.
    Zmm,
    /// AVX-512 opmask (K0-K7).
    Opmask,
    /// MPX bound (BND0-BND3).
    Bound,
    /// CR0-CR15.
    Control,
    /// DR0-DR7.
    Debug,
    /// TR0-TR7.
    Test,
    /// x87 ST(0)-ST(7).
    St,
    /// MMX MM0-MM7.
    Mmx,
    /// AMX TMM0-TMM7.
    Tile,
}

impl RegisterClass {
    /// Human-readable family name, as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            RegisterClass::None => "none",
            RegisterClass::Gpr8 => "8-bit GPR",
            RegisterClass::Gpr16 => "16-bit GPR",
            RegisterClass::Gpr32 => "32-bit GPR",
            RegisterClass::Gpr64 => "64-bit GPR",
            RegisterClass::Ip => "instruction pointer",
            RegisterClass::Segment => "segment register",
            RegisterClass::Xmm => "XMM register",
            RegisterClass::Ymm => "YMM register",
            RegisterClass::Zmm => "ZMM register",
            RegisterClass::Opmask => "opmask register",
            RegisterClass::Bound => "bound register",
            RegisterClass::Control => "control register",
            RegisterClass::Debug => "debug register",
            RegisterClass::Test => "test register",
            RegisterClass::St => "x87 register",
            RegisterClass::Mmx => "MMX register",
            RegisterClass::Tile => "tile register",
        }
    }
}

impl fmt::Display for RegisterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! register_enum {
    ($($name:ident),+ $(,)?) => {
        /// A machine register.
        ///
        /// The discriminant is a dense identity; families are contiguous and
        /// ordered by their hardware encoding number.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        pub enum Register {
            /// No register.
            #[default]
            None,
            $(
                #[allow(missing_docs)]
                $name,
            )+
        }

        impl Register {
            /// Every register, indexed by its dense identity.
            const ALL: &'static [Register] = &[Register::None, $(Register::$name,)+];
        }
    };
}

register_enum! {
    // -- 8-bit general-purpose registers, in ModRM order (AH..BH without REX, SPL..DIL with REX) --
    Al, Cl, Dl, Bl, Ah, Ch, Dh, Bh, Spl, Bpl, Sil, Dil, R8b, R9b, R10b, R11b, R12b, R13b, R14b,
    R15b,
    // -- 16-bit general-purpose registers --
    Ax, Cx, Dx, Bx, Sp, Bp, Si, Di, R8w, R9w, R10w, R11w, R12w, R13w, R14w, R15w,
    // -- 32-bit general-purpose registers --
    Eax, Ecx, Edx, Ebx, Esp, Ebp, Esi, Edi, R8d, R9d, R10d, R11d, R12d, R13d, R14d, R15d,
    // -- 64-bit general-purpose registers --
    Rax, Rcx, Rdx, Rbx, Rsp, Rbp, Rsi, Rdi, R8, R9, R10, R11, R12, R13, R14, R15,
    // -- Instruction pointers (only valid as a RIP/EIP-relative memory base) --
    Eip, Rip,
    // -- Segment registers, in Sreg encoding order --
    Es, Cs, Ss, Ds, Fs, Gs,
    // -- SSE/AVX/AVX-512 vector registers --
    Xmm0, Xmm1, Xmm2, Xmm3, Xmm4, Xmm5, Xmm6, Xmm7, Xmm8, Xmm9, Xmm10, Xmm11, Xmm12, Xmm13,
    Xmm14, Xmm15, Xmm16, Xmm17, Xmm18, Xmm19, Xmm20, Xmm21, Xmm22, Xmm23, Xmm24, Xmm25, Xmm26,
    Xmm27, Xmm28, Xmm29, Xmm30, Xmm31,
    Ymm0, Ymm1, Ymm2, Ymm3, Ymm4, Ymm5, Ymm6, Ymm7, Ymm8, Ymm9, Ymm10, Ymm11, Ymm12, Ymm13,
    Ymm14, Ymm15, Ymm16, Ymm17, Ymm18, Ymm19, Ymm20, Ymm21, Ymm22, Ymm23, Ymm24, Ymm25, Ymm26,
    Ymm27, Ymm28, Ymm29, Ymm30, Ymm31,
    Zmm0, Zmm1, Zmm2, Zmm3, Zmm4, Zmm5, Zmm6, Zmm7, Zmm8, Zmm9, Zmm10, Zmm11, Zmm12, Zmm13,
    Zmm14, Zmm15, Zmm16, Zmm17, Zmm18, Zmm19, Zmm20, Zmm21, Zmm22, Zmm23, Zmm24, Zmm25, Zmm26,
    Zmm27, Zmm28, Zmm29, Zmm30, Zmm31,
    // -- AVX-512 opmask registers --
    K0, K1, K2, K3, K4, K5, K6, K7,
    // -- MPX bound registers --
    Bnd0, Bnd1, Bnd2, Bnd3,
    // -- Control registers --
    Cr0, Cr1, Cr2, Cr3, Cr4, Cr5, Cr6, Cr7, Cr8, Cr9, Cr10, Cr11, Cr12, Cr13, Cr14, Cr15,
    // -- Debug registers --
    Dr0, Dr1, Dr2, Dr3, Dr4, Dr5, Dr6, Dr7,
    // -- Test registers (386/486 only) --
    Tr0, Tr1, Tr2, Tr3, Tr4, Tr5, Tr6, Tr7,
    // -- x87 stack registers --
    St0, St1, St2, St3, St4, St5, St6, St7,
    // -- MMX registers --
    Mm0, Mm1, Mm2, Mm3, Mm4, Mm5, Mm6, Mm7,
    // -- AMX tile registers --
    Tmm0, Tmm1, Tmm2, Tmm3, Tmm4, Tmm5, Tmm6, Tmm7,
}

/// First register, class and count of every register family.
const CLASS_RANGES: [(Register, RegisterClass, u8); 17] = [
    (Register::Al, RegisterClass::Gpr8, 20),
    (Register::Ax, RegisterClass::Gpr16, 16),
    (Register::Eax, RegisterClass::Gpr32, 16),
    (Register::Rax, RegisterClass::Gpr64, 16),
    (Register::Eip, RegisterClass::Ip, 2),
    (Register::Es, RegisterClass::Segment, 6),
    (Register::Xmm0, RegisterClass::Xmm, 32),
    (Register::Ymm0, RegisterClass::Ymm, 32),
    (Register::Zmm0, RegisterClass::Zmm, 32),
    (Register::K0, RegisterClass::Opmask, 8),
    (Register::Bnd0, RegisterClass::Bound, 4),
    (Register::Cr0, RegisterClass::Control, 16),
    (Register::Dr0, RegisterClass::Debug, 8),
    (Register::Tr0, RegisterClass::Test, 8),
    (Register::St0, RegisterClass::St, 8),
    (Register::Mm0, RegisterClass::Mmx, 8),
    (Register::Tmm0, RegisterClass::Tile, 8),
];

impl Register {
    /// Number of distinct register identities, including [`Register::None`].
    pub const COUNT: usize = Self::ALL.len();

    /// Look a register up by its dense identity.
    pub fn from_index(index: usize) -> Option<Register> {
        Self::ALL.get(index).copied()
    }

    /// Register `number` of `class` (0-based hardware number).
    ///
    /// For [`RegisterClass::Gpr8`] numbers 4-7 resolve to SPL..DIL (the REX
    /// interpretation); use [`Register::gpr8`] to pick AH..BH.
    pub fn from_class_number(class: RegisterClass, number: u8) -> Option<Register> {
        if class == RegisterClass::Gpr8 {
            return Self::gpr8(number, true);
        }
        let &(first, _, count) = CLASS_RANGES.iter().find(|(_, c, _)| *c == class)?;
        if number >= count {
            return None;
        }
        Self::from_index(first as usize + number as usize)
    }

    /// 8-bit GPR `number`; without a REX prefix 4-7 select AH, CH, DH, BH.
    pub fn gpr8(number: u8, rex: bool) -> Option<Register> {
        let index = match number {
            0..=3 => number,
            4..=7 if rex => number + 4,
            4..=7 => number,
            8..=15 => number + 4,
            _ => return None,
        };
        Self::from_index(Register::Al as usize + index as usize)
    }

    /// Register family.
    pub fn class(self) -> RegisterClass {
        self.range().map_or(RegisterClass::None, |(_, class, _)| class)
    }

    fn range(self) -> Option<(Register, RegisterClass, u8)> {
        let id = self as u8;
        CLASS_RANGES
            .iter()
            .copied()
            .find(|&(first, _, count)| id >= first as u8 && id < first as u8 + count)
    }

    /// Hardware register number within the family (0-31).
    pub fn number(self) -> u8 {
        match self.range() {
            Some((first, RegisterClass::Gpr8, _)) => {
                let index = self as u8 - first as u8;
                if index < 8 {
                    index
                } else {
                    index - 4
                }
            }
            Some((first, _, _)) => self as u8 - first as u8,
            None => 0,
        }
    }

    /// The 3-bit register encoding (bits 0-2 of the register number).
    pub fn base_code(self) -> u8 {
        self.number() & 7
    }

    /// Whether bit 3 of the register number is set (needs REX/VEX/EVEX R, X or B).
    pub fn is_extended(self) -> bool {
        self.number() & 0x08 != 0
    }

    /// Whether bit 4 of the register number is set (EVEX R', V' or X).
    pub fn is_evex_extended(self) -> bool {
        self.number() & 0x10 != 0
    }

    /// Width in bits of the value held by the register.
    pub fn size_bits(self) -> u16 {
        match self.class() {
            RegisterClass::None => 0,
            RegisterClass::Gpr8 => 8,
            RegisterClass::Gpr16 | RegisterClass::Segment => 16,
            RegisterClass::Gpr32 | RegisterClass::Test => 32,
            RegisterClass::Gpr64 | RegisterClass::Opmask | RegisterClass::Mmx => 64,
            RegisterClass::Control | RegisterClass::Debug => 64,
            RegisterClass::Ip => {
                if self == Register::Eip {
                    32
                } else {
                    64
                }
            }
            RegisterClass::Xmm | RegisterClass::Bound => 128,
            RegisterClass::Ymm => 256,
            RegisterClass::Zmm => 512,
            RegisterClass::St => 80,
            RegisterClass::Tile => 8192,
        }
    }

    /// SPL, BPL, SIL and DIL are only addressable with a REX prefix.
    pub fn requires_rex_for_byte(self) -> bool {
        matches!(
            self,
            Register::Spl | Register::Bpl | Register::Sil | Register::Dil
        )
    }

    /// AH, CH, DH and BH cannot be encoded together with a REX prefix.
    pub fn is_high_byte(self) -> bool {
        matches!(self, Register::Ah | Register::Ch | Register::Dh | Register::Bh)
    }

    /// Any 8/16/32/64-bit general-purpose register.
    pub fn is_gpr(self) -> bool {
        matches!(
            self.class(),
            RegisterClass::Gpr8 | RegisterClass::Gpr16 | RegisterClass::Gpr32 | RegisterClass::Gpr64
        )
    }

    /// XMM, YMM or ZMM.
    pub fn is_vector(self) -> bool {
        matches!(
            self.class(),
            RegisterClass::Xmm | RegisterClass::Ymm | RegisterClass::Zmm
        )
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lowercase(f, self)
    }
}

/// Writes the `Debug` name of `value` lowercased, without allocating.
pub(crate) fn write_lowercase(f: &mut fmt::Formatter<'_>, value: &dyn fmt::Debug) -> fmt::Result {
    use fmt::Write as _;
    struct LowerWriter<'a, 'b>(&'a mut fmt::Formatter<'b>);
    impl fmt::Write for LowerWriter<'_, '_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            for c in s.chars() {
                self.0.write_char(c.to_ascii_lowercase())?;
            }
            Ok(())
        }
    }
    write!(LowerWriter(f), "{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn dense_identity_round_trips() {
        for (i, reg) in Register::ALL.iter().enumerate() {
            assert_eq!(*reg as usize, i);
            assert_eq!(Register::from_index(i), Some(*reg));
        }
        assert_eq!(Register::from_index(Register::COUNT), None);
    }

    #[test]
    fn class_ranges_are_contiguous() {
        let mut next = Register::Al as u8;
        for (first, _, count) in CLASS_RANGES {
            assert_eq!(first as u8, next);
            next += count;
        }
        assert_eq!(next as usize, Register::COUNT);
    }

    #[test]
    fn gpr_numbers() {
        assert_eq!(Register::Rax.number(), 0);
        assert_eq!(Register::R15.number(), 15);
        assert_eq!(Register::Ah.number(), 4);
        assert_eq!(Register::Spl.number(), 4);
        assert_eq!(Register::R8b.number(), 8);
        assert_eq!(Register::R12d.base_code(), 4);
        assert!(Register::R12d.is_extended());
        assert!(!Register::Esp.is_extended());
    }

    #[test]
    fn gpr8_rex_selection() {
        assert_eq!(Register::gpr8(4, false), Some(Register::Ah));
        assert_eq!(Register::gpr8(4, true), Some(Register::Spl));
        assert_eq!(Register::gpr8(7, false), Some(Register::Bh));
        assert_eq!(Register::gpr8(15, true), Some(Register::R15b));
        assert_eq!(Register::gpr8(16, true), None);
    }

    #[test]
    fn from_class_number_bounds() {
        assert_eq!(
            Register::from_class_number(RegisterClass::Zmm, 31),
            Some(Register::Zmm31)
        );
        assert_eq!(Register::from_class_number(RegisterClass::Opmask, 8), None);
        assert_eq!(Register::from_class_number(RegisterClass::Segment, 6), None);
        assert_eq!(
            Register::from_class_number(RegisterClass::Segment, 5),
            Some(Register::Gs)
        );
    }

    #[test]
    fn classes_and_sizes() {
        assert_eq!(Register::Xmm17.class(), RegisterClass::Xmm);
        assert!(Register::Xmm17.is_evex_extended());
        assert_eq!(Register::Ymm3.size_bits(), 256);
        assert_eq!(Register::Eip.size_bits(), 32);
        assert_eq!(Register::None.class(), RegisterClass::None);
        assert_eq!(Register::St3.number(), 3);
        assert_eq!(Register::Tmm7.class(), RegisterClass::Tile);
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(format!("{}", Register::R10d), "r10d");
        assert_eq!(format!("{}", Register::Zmm31), "zmm31");
        assert_eq!(format!("{}", RegisterClass::Gpr32), "32-bit GPR");
    }
}
