#![cfg(not(target_arch = "wasm32"))]
//! Cross-validation tests against iced-x86.
//!
//! The same bytes are decoded by x86_codec and by iced-x86, and bytes encoded
//! by x86_codec are decoded by iced-x86. Form names are compared through
//! `Debug`, since both libraries name encoding forms the same way, and
//! registers through their lowercase names.

use iced_x86::{Decoder as IcedDecoder, DecoderOptions as IcedOptions};
use x86_codec::{
    decode, encode_to_vec, Code, CodeSize, Instruction, MemoryOperand, OperandValue, Register,
};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn iced_decode(mode: CodeSize, ip: u64, bytes: &[u8]) -> iced_x86::Instruction {
    let mut decoder = IcedDecoder::with_ip(mode.bits(), bytes, ip, IcedOptions::NONE);
    let instr = decoder.decode();
    assert!(
        !instr.is_invalid(),
        "iced-x86 decoded INVALID for {:02X?}",
        bytes
    );
    instr
}

/// Asserts that both decoders agree on form, length, registers and branch
/// targets.
fn agree(mode: CodeSize, ip: u64, bytes: &[u8]) {
    let ours = match decode(bytes, mode, ip) {
        Ok((instr, len)) => {
            assert_eq!(len, bytes.len(), "partial decode of {:02X?}", bytes);
            instr
        }
        Err(e) => panic!("x86_codec failed on {:02X?}: {e}", bytes),
    };
    let theirs = iced_decode(mode, ip, bytes);

    assert_eq!(theirs.len(), bytes.len(), "iced length for {:02X?}", bytes);
    assert_eq!(
        format!("{:?}", ours.code()),
        format!("{:?}", theirs.code()),
        "form mismatch for {:02X?}",
        bytes
    );
    for operand in 0..ours.op_count() {
        if ours.op_kind(operand) == x86_codec::OpKind::Register {
            assert_eq!(
                ours.op_register(operand).to_string(),
                format!("{:?}", theirs.op_register(operand as u32)).to_lowercase(),
                "operand {operand} of {:02X?}",
                bytes
            );
        }
    }
    if ours.op_kind(0).is_near_branch() {
        assert_eq!(ours.near_branch_target(), theirs.near_branch_target());
    }
}

fn encoded_agrees(instr: &Instruction) {
    let (bytes, _) = encode_to_vec(instr)
        .unwrap_or_else(|e| panic!("failed to encode {:?}: {e}", instr.code()));
    agree(instr.code_size(), instr.ip(), &bytes);
}

// ─── Decoder agreement ────────────────────────────────────────────────────────

#[test]
fn legacy_64_agrees() {
    let corpus: &[&[u8]] = &[
        &[0x90],
        &[0xC3],
        &[0x49, 0x89, 0xC1],
        &[0x40, 0x88, 0xC6],
        &[0x41, 0x54],
        &[0x48, 0x8B, 0x05, 0x10, 0x00, 0x00, 0x00],
        &[0x41, 0x8B, 0x44, 0x8D, 0x00],
        &[0x48, 0x83, 0xC0, 0xFF],
        &[0x48, 0x69, 0xC1, 0x00, 0x10, 0x00, 0x00],
        &[0x48, 0xB8, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11],
        &[0xF0, 0x01, 0x08],
        &[0xF3, 0xA4],
        &[0xF3, 0x90],
        &[0xC8, 0x20, 0x00, 0x01],
        &[0xD1, 0xE1],
        &[0x63, 0xC8],
    ];
    for bytes in corpus {
        agree(CodeSize::Code64, 0, bytes);
    }
}

#[test]
fn branches_agree() {
    agree(CodeSize::Code64, 0x1000, &[0xE8, 0xFB, 0x0F, 0x00, 0x00]);
    agree(CodeSize::Code64, 0x10, &[0x74, 0xFE]);
    agree(CodeSize::Code32, 0, &[0xEB, 0x10]);
    agree(CodeSize::Code32, 0xFFFF_FFF0, &[0xE9, 0x00, 0x01, 0x00, 0x00]);
}

#[test]
fn legacy_32_and_16_agree() {
    agree(CodeSize::Code32, 0, &[0xEA, 0x78, 0x56, 0x34, 0x12, 0x34, 0x12]);
    agree(CodeSize::Code32, 0, &[0xA1, 0x78, 0x56, 0x34, 0x12]);
    agree(CodeSize::Code32, 0, &[0x0F, 0x0F, 0xC1, 0x9E]);
    agree(CodeSize::Code32, 0, &[0x63, 0xC8]);
    agree(CodeSize::Code32, 0, &[0xC5, 0x00]);
    agree(CodeSize::Code16, 0, &[0x8B, 0x46, 0xFE]);
}

#[test]
fn vector_agrees() {
    let corpus: &[&[u8]] = &[
        &[0xC5, 0xE8, 0x58, 0xCB],
        &[0xC4, 0xC1, 0x68, 0x58, 0xC9],
        &[0x62, 0xF1, 0x6C, 0x48, 0x58, 0x48, 0x01],
        &[0x62, 0xF1, 0x6C, 0x49, 0x58, 0xCB],
        &[0x62, 0xA1, 0x6C, 0x40, 0x58, 0xCB],
        &[0x62, 0xF2, 0x7D, 0xC9, 0x7C, 0xC8],
        &[0x8F, 0xEA, 0xF8, 0x10, 0xC0, 0x01, 0x00, 0x00, 0x00],
    ];
    for bytes in corpus {
        agree(CodeSize::Code64, 0, bytes);
    }
}

// ─── Encoder output ───────────────────────────────────────────────────────────

#[test]
fn encoded_legacy_forms_decode_in_iced() {
    use Register::*;
    let cases = [
        Instruction::with_operands(CodeSize::Code64, Code::Mov_rm64_r64, &[R9.into(), Rax.into()]),
        Instruction::with_operands(
            CodeSize::Code64,
            Code::Mov_r32_rm32,
            &[
                Eax.into(),
                MemoryOperand::with_base_index(R12, R13, 8, -0x80).into(),
            ],
        ),
        Instruction::with_operands(
            CodeSize::Code64,
            Code::Lea_r64_m,
            &[R15.into(), MemoryOperand::with_base_displ(Rip, -4).into()],
        ),
        Instruction::with_operands(
            CodeSize::Code64,
            Code::Imul_r64_rm64_imm32,
            &[R10.into(), R11.into(), (-2i64).into()],
        ),
        Instruction::with_operands(
            CodeSize::Code32,
            Code::Call_ptr1616,
            &[OperandValue::Far {
                selector: 8,
                offset: 0x1234,
            }],
        ),
        Instruction::with_operands(
            CodeSize::Code16,
            Code::Mov_r16_rm16,
            &[Di.into(), MemoryOperand::with_base_index(Bp, Si, 1, 0x200).into()],
        ),
    ];
    for instr in &cases {
        encoded_agrees(instr);
    }
}

#[test]
fn encoded_vector_forms_decode_in_iced() {
    use Register::*;
    let mut masked = Instruction::with_operands(
        CodeSize::Code64,
        Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er,
        &[Zmm31.into(), Zmm0.into(), MemoryOperand::with_base_displ(R8, 0x1000).into()],
    );
    masked.set_op_mask(K7);
    masked.set_zeroing_masking(true);
    let cases = [
        Instruction::with_operands(
            CodeSize::Code64,
            Code::VEX_Vaddps_xmm_xmm_xmmm128,
            &[Xmm15.into(), Xmm8.into(), Xmm1.into()],
        ),
        masked,
        Instruction::with_operands(
            CodeSize::Code32,
            Code::VEX_Vaddps_xmm_xmm_xmmm128,
            &[Xmm7.into(), Xmm6.into(), Xmm5.into()],
        ),
        Instruction::with_operands(
            CodeSize::Code64,
            Code::XOP_Bextr_r64_rm64_imm32,
            &[R8.into(), R9.into(), 0x0804i64.into()],
        ),
        Instruction::with_operands(
            CodeSize::Code64,
            Code::D3NOW_Pfadd_mm_mmm64,
            &[Mm3.into(), MemoryOperand::with_base(Rax).into()],
        ),
    ];
    for instr in &cases {
        encoded_agrees(instr);
    }
}
