#![cfg(not(target_arch = "wasm32"))]
//! Property-based tests using proptest.
//!
//! These tests verify codec invariants across large, randomly generated
//! input spaces, complementing the targeted unit/integration tests and the
//! libfuzzer-based fuzz targets.

use proptest::prelude::*;
use x86_codec::{
    decode, encode_to_vec, Code, CodeSize, Decoder, DecoderOptions, Instruction, MemoryOperand,
    OperandValue, Register, MAX_INSTRUCTION_LEN,
};

// ── Strategies ──────────────────────────────────────────────────────────

const GPR64: [Register; 16] = [
    Register::Rax,
    Register::Rcx,
    Register::Rdx,
    Register::Rbx,
    Register::Rsp,
    Register::Rbp,
    Register::Rsi,
    Register::Rdi,
    Register::R8,
    Register::R9,
    Register::R10,
    Register::R11,
    Register::R12,
    Register::R13,
    Register::R14,
    Register::R15,
];

fn arb_mode() -> impl Strategy<Value = CodeSize> {
    prop::sample::select(vec![CodeSize::Code16, CodeSize::Code32, CodeSize::Code64])
}

fn arb_gpr64() -> impl Strategy<Value = Register> {
    prop::sample::select(GPR64.to_vec())
}

/// Any GPR64 but RSP, which cannot be an index.
fn arb_index64() -> impl Strategy<Value = Register> {
    prop::sample::select(
        GPR64
            .iter()
            .copied()
            .filter(|&r| r != Register::Rsp)
            .collect::<Vec<_>>(),
    )
}

fn arb_memory64() -> impl Strategy<Value = MemoryOperand> {
    (
        arb_gpr64(),
        prop::option::of(arb_index64()),
        prop::sample::select(vec![1u8, 2, 4, 8]),
        any::<i32>(),
    )
        .prop_map(|(base, index, scale, disp)| {
            let index = index.unwrap_or(Register::None);
            MemoryOperand::with_base_index(base, index, scale, i64::from(disp))
        })
}

fn arb_xmm() -> impl Strategy<Value = Register> {
    (0u8..16).prop_map(|n| {
        Register::from_class_number(x86_codec::RegisterClass::Xmm, n).unwrap_or(Register::Xmm0)
    })
}

fn arb_zmm() -> impl Strategy<Value = Register> {
    (0u8..32).prop_map(|n| {
        Register::from_class_number(x86_codec::RegisterClass::Zmm, n).unwrap_or(Register::Zmm0)
    })
}

/// Sign-extends the little-endian field at `range`.
fn read_signed(bytes: &[u8], range: core::ops::Range<usize>) -> i64 {
    let field = &bytes[range];
    let mut value = 0i64;
    for (i, &b) in field.iter().enumerate() {
        value |= i64::from(b) << (8 * i);
    }
    let shift = 64 - 8 * field.len() as u32;
    (value << shift) >> shift
}

fn encode_then_decode(instr: &Instruction) -> Instruction {
    let (bytes, offsets) = encode_to_vec(instr).expect("encode");
    assert!(bytes.len() <= MAX_INSTRUCTION_LEN);
    if offsets.has_displacement() {
        assert!(offsets.displacement_range().end <= bytes.len());
    }
    let (back, len) = decode(&bytes[..], instr.code_size(), instr.ip()).expect("decode");
    assert_eq!(len, bytes.len());
    back
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// The decoder never panics and never reports more than 15 bytes.
    #[test]
    fn decode_never_panics(
        bytes in prop::collection::vec(any::<u8>(), 0..32),
        mode in arb_mode(),
        knc in any::<bool>(),
    ) {
        let decoder = Decoder::new(mode, DecoderOptions { knc });
        if let Ok((instr, len)) = decoder.decode(&bytes[..], 0) {
            prop_assert!(len >= 1);
            prop_assert!(len <= MAX_INSTRUCTION_LEN);
            prop_assert!(len <= bytes.len());
            prop_assert_eq!(instr.len(), len);
            prop_assert!(instr.op_count() <= x86_codec::MAX_OPERANDS);
        }
    }

    /// The linear sweep accounts for every byte exactly once.
    #[test]
    fn sweep_covers_input(
        bytes in prop::collection::vec(any::<u8>(), 0..128),
        mode in arb_mode(),
    ) {
        let decoder = Decoder::new(mode, DecoderOptions::default());
        let mut covered = 0usize;
        for item in decoder.iter(&bytes, 0x40_0000) {
            match item {
                Ok(instr) => {
                    prop_assert_eq!(instr.ip(), 0x40_0000 + covered as u64);
                    covered += instr.len();
                }
                Err(err) => {
                    prop_assert_eq!(err.ip(), 0x40_0000 + covered as u64);
                    covered += 1;
                }
            }
        }
        prop_assert_eq!(covered, bytes.len());
    }

    /// Sign-extended imm8 forms accept exactly the i8 range.
    #[test]
    fn add_imm8_range(reg in arb_gpr64(), value in -1000i64..1000) {
        let instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::Add_rm64_imm8,
            &[reg.into(), value.into()],
        );
        let fits = i8::try_from(value).is_ok();
        prop_assert_eq!(encode_to_vec(&instr).is_ok(), fits);
        if fits {
            let back = encode_then_decode(&instr);
            prop_assert_eq!(back.code(), Code::Add_rm64_imm8);
            prop_assert_eq!(back.op_register(0), reg);
            prop_assert_eq!(back.immediate(1) as i64, value);
        }
    }

    /// Any [base + index*scale + disp32] survives encode → decode.
    #[test]
    fn memory_operands_survive(reg in arb_gpr64(), mem in arb_memory64()) {
        let instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::Mov_rm64_r64,
            &[mem.into(), reg.into()],
        );
        let back = encode_then_decode(&instr);
        prop_assert_eq!(back.code(), Code::Mov_rm64_r64);
        prop_assert_eq!(back.op_register(1), reg);
        prop_assert_eq!(back.memory_base(), mem.base);
        prop_assert_eq!(back.memory_index(), mem.index);
        if mem.index != Register::None {
            prop_assert_eq!(back.memory_index_scale(), mem.scale);
        }
        prop_assert_eq!(back.memory_displacement(), mem.displacement);
    }

    /// Near branches land where they were aimed, or are rejected.
    #[test]
    fn near_branch_targets(ip in 0u64..0x1_0000_0000, delta in -200i64..200) {
        let target = ip.wrapping_add(delta as u64);
        let mut instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::Jne_rel8_64,
            &[OperandValue::Branch(target)],
        );
        instr.set_ip(ip);
        let rel = delta - 2;
        match encode_to_vec(&instr) {
            Ok(_) => {
                prop_assert!(i8::try_from(rel).is_ok());
                let back = encode_then_decode(&instr);
                prop_assert_eq!(back.near_branch_target(), target);
            }
            Err(_) => prop_assert!(i8::try_from(rel).is_err()),
        }
    }

    /// VEX register triples survive, whichever prefix length is chosen.
    #[test]
    fn vex_registers_survive(a in arb_xmm(), b in arb_xmm(), c in arb_xmm()) {
        let instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::VEX_Vaddps_xmm_xmm_xmmm128,
            &[a.into(), b.into(), c.into()],
        );
        let back = encode_then_decode(&instr);
        prop_assert_eq!(back.code(), Code::VEX_Vaddps_xmm_xmm_xmmm128);
        prop_assert_eq!(
            (back.op_register(0), back.op_register(1), back.op_register(2)),
            (a, b, c)
        );
    }

    /// EVEX register triples with any opmask survive.
    #[test]
    fn evex_registers_survive(
        a in arb_zmm(),
        b in arb_zmm(),
        c in arb_zmm(),
        mask in 0u8..8,
    ) {
        let mut instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er,
            &[a.into(), b.into(), c.into()],
        );
        let k = Register::from_class_number(x86_codec::RegisterClass::Opmask, mask)
            .unwrap_or(Register::K0);
        instr.set_op_mask(k);
        let back = encode_then_decode(&instr);
        prop_assert_eq!(
            (back.op_register(0), back.op_register(1), back.op_register(2)),
            (a, b, c)
        );
        prop_assert_eq!(back.op_mask(), instr.op_mask());
    }

    /// A successful decode never survives dropping its last byte.
    #[test]
    fn truncation_is_detected(
        bytes in prop::collection::vec(any::<u8>(), 1..16),
        mode in arb_mode(),
    ) {
        if let Ok((_, len)) = decode(&bytes[..], mode, 0) {
            if let Ok((_, shorter)) = decode(&bytes[..len - 1], mode, 0) {
                prop_assert!(shorter < len);
            }
        }
    }

    /// The reported constant ranges hold exactly the values of the record.
    #[test]
    fn constant_offsets_locate_values(mem in arb_memory64(), value in any::<i32>()) {
        let instr = Instruction::with_operands(
            CodeSize::Code64,
            Code::Mov_rm64_imm32,
            &[mem.into(), value.into()],
        );
        let (bytes, offsets) = encode_to_vec(&instr).expect("encode");
        prop_assert!(offsets.has_immediate());
        prop_assert_eq!(offsets.immediate_range().end, bytes.len());
        prop_assert_eq!(read_signed(&bytes, offsets.immediate_range()), i64::from(value));
        if offsets.has_displacement() {
            prop_assert!(offsets.displacement_range().end <= offsets.immediate_range().start);
            prop_assert_eq!(
                read_signed(&bytes, offsets.displacement_range()),
                mem.displacement
            );
        } else {
            prop_assert_eq!(mem.displacement, 0);
        }
    }

    /// Near → short → near restores the record for every Jcc and JMP.
    #[test]
    fn branch_conversion_involution(
        pick in any::<prop::sample::Index>(),
        target in any::<u64>(),
    ) {
        let near: Vec<Code> = Code::values()
            .filter(|c| c.is_jcc_near() || c.is_jmp_near())
            .collect();
        let code = *pick.get(&near);
        let mut instr = Instruction::new(CodeSize::Code64, code);
        instr.set_near_branch_target(target);
        let original = instr;
        instr.to_short_branch();
        prop_assert!(instr.code().is_jcc_short() || instr.code().is_jmp_short());
        instr.to_near_branch();
        prop_assert_eq!(instr, original);
    }

    /// Negating twice restores the record.
    #[test]
    fn negation_involution(index in 0..Code::COUNT) {
        let code = Code::from_index(index).unwrap_or(Code::Invalid);
        let mut instr = Instruction::new(CodeSize::Code64, code);
        instr.negate_condition_code();
        instr.negate_condition_code();
        prop_assert_eq!(instr.code(), code);
    }
}
