//! Instruction mnemonics.
//!
//! A [`Mnemonic`] groups every [`Code`](crate::Code) that shares an assembler
//! name: `ADD r/m32, r32` and `ADD AL, imm8` are both [`Mnemonic::Add`].

use core::fmt;

use crate::register::write_lowercase;

macro_rules! mnemonic_enum {
    ($($name:ident),+ $(,)?) => {
        /// Assembler mnemonic of an instruction.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u16)]
        pub enum Mnemonic {
            /// Not a valid instruction.
            #[default]
            Invalid,
            $(
                #[allow(missing_docs)]
                $name,
            )+
        }

        impl Mnemonic {
            const ALL: &'static [Mnemonic] = &[Mnemonic::Invalid, $(Mnemonic::$name,)+];
        }
    };
}

mnemonic_enum! {
    Add, Or, Adc, Sbb, And, Sub, Xor, Cmp, Test, Not, Neg, Mul, Imul, Div, Idiv, Inc, Dec, Mov,
    Lea, Xchg, Pause, Nop, Movzx, Movsx, Movsxd, Arpl, Push, Pop, Pusha, Pushad, Popa, Popad,
    Pushf, Pushfd, Pushfq, Popf, Popfd, Popfq, Jo, Jno, Jb, Jae, Je, Jne, Jbe, Ja, Js, Jns, Jp,
    Jnp, Jl, Jge, Jle, Jg, Seto, Setno, Setb, Setae, Sete, Setne, Setbe, Seta, Sets, Setns,
    Setp, Setnp, Setl, Setge, Setle, Setg, Cmovo, Cmovno, Cmovb, Cmovae, Cmove, Cmovne, Cmovbe,
    Cmova, Cmovs, Cmovns, Cmovp, Cmovnp, Cmovl, Cmovge, Cmovle, Cmovg, Jmp, Call, Loopne,
    Loope, Loop, Jcxz, Jecxz, Jrcxz, Ret, Retf, Iret, Iretd, Iretq, Enter, Leave, Int3, Int,
    Into, Int1, Hlt, Cmc, Clc, Stc, Cli, Sti, Cld, Std, Sahf, Lahf, Wait, Xlatb, Cbw, Cwde,
    Cdqe, Cwd, Cdq, Cqo, Aam, Aad, Daa, Das, Aaa, Aas, Bound, Les, Lds, In, Out, Rol, Ror, Rcl,
    Rcr, Shl, Shr, Sar, Movsb, Movsw, Movsd, Movsq, Cmpsb, Cmpsw, Cmpsd, Cmpsq, Stosb, Stosw,
    Stosd, Stosq, Lodsb, Lodsw, Lodsd, Lodsq, Scasb, Scasw, Scasd, Scasq, Insb, Insw, Insd,
    Outsb, Outsw, Outsd, Syscall, Clts, Invd, Wbinvd, Ud2, Femms, Wrmsr, Rdtsc, Rdmsr, Rdpmc,
    Sysenter, Cpuid, Emms, Xgetbv, Rdtscp, Lfence, Mfence, Sfence, Clflush, Bt, Bts, Btr, Btc,
    Popcnt, Tzcnt, Lzcnt, Bsf, Bsr, Xadd, Cmpxchg, Cmpxchg8b, Cmpxchg16b, Bswap, Shld, Shrd,
    Crc32, Movbe, Movss, Movups, Movupd, Movaps, Movapd,
    Sqrtps, Sqrtpd, Sqrtss, Sqrtsd, Andps, Andpd, Xorps, Xorpd, Addps, Addpd, Addss, Addsd,
    Mulps, Mulpd, Mulss, Mulsd, Subps, Subpd, Subss, Subsd, Divps, Divpd, Divss, Divsd,
    Cvtsi2ss, Cvtsi2sd, Cvttss2si, Cvttsd2si, Cmpps, Cmppd, Cmpss, Movd, Movq, Movdqa, Movdqu,
    Pshufw, Pshufd, Pshufhw, Pshuflw, Pcmpeqb, Paddq, Pxor, Paddb, Paddd, Pmovmskb, Pshufb,
    Roundss, Palignr, Pextrd, Pextrq, Pinsrd, Pinsrq, Bndmov, Bndcl, Bndcu, Fadd, Fmul, Fld,
    Fst, Fstp, Fxch, Fnop, Fld1, Fldz, Fild, Fistp, Fninit, Fnstsw, Faddp, Pi2fd, Pf2id, Pfmin,
    Pfrcp, Pfsub, Pfadd, Pfmax, Pfcmpeq, Pfmul, Pavgusb, Vmovups, Vmovdqu, Vmovdqa, Vaddps,
    Vaddpd, Vmulps, Vsubps, Vandps, Vxorps, Vpaddd, Vpxor, Vpshufb, Vfmadd231ps, Vfmadd231pd,
    Vaddss, Vaddsd, Vpshufd, Vbroadcastss, Vperm2f128, Vzeroupper, Vzeroall, Vcvtsi2ss, Vmovd,
    Vmovq, Andn, Bzhi, Pdep, Pext, Mulx, Shlx, Sarx, Shrx, Rorx, Blsr, Blsmsk, Blsi, Kmovw,
    Kmovq, Kmovb, Kmovd, Kandw, Knotw, Kortestw, Tilerelease, Tilezero, Tileloadd, Tdpbssd,
    Vsqrtps, Vmovdqu32, Vmovdqu64, Vmovdqa64, Vpaddq, Vpxord, Vpxorq, Vpandd, Vpcmpeqd, Vcmpps,
    Vpternlogd, Vpbroadcastd, Vprotb, Vprotd, Vphaddbw, Vfrczps, Bextr, Blcfill, Vmovaps,
}

impl Mnemonic {
    /// Number of mnemonics, including [`Mnemonic::Invalid`].
    pub const COUNT: usize = Self::ALL.len();

    /// Mnemonic with dense index `index`.
    pub fn from_index(index: usize) -> Option<Mnemonic> {
        Self::ALL.get(index).copied()
    }

    /// All mnemonics in declaration order.
    pub fn values() -> impl Iterator<Item = Mnemonic> {
        Self::ALL.iter().copied()
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lowercase(f, self)
    }
}
