//! Encoder integration tests through the public API.
//!
//! Expected bytes are the canonical encodings produced by mainstream
//! assemblers for the same instruction.

use x86_codec::{
    encode, encode_to_vec, Code, CodeSize, ConstantOffsets, EncodeError, Encoder, EncoderOptions,
    Instruction, IoSink, MemoryOperand, OperandValue, Register, SliceSink,
};

use Register::*;

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn encode_in(mode: CodeSize, code: Code, operands: &[OperandValue]) -> (Vec<u8>, ConstantOffsets) {
    let instr = Instruction::with_operands(mode, code, operands);
    encode_to_vec(&instr).unwrap_or_else(|e| panic!("failed to encode {code:?}: {e}"))
}

fn bytes64(code: Code, operands: &[OperandValue]) -> Vec<u8> {
    encode_in(CodeSize::Code64, code, operands).0
}

fn rejected(mode: CodeSize, code: Code, operands: &[OperandValue]) -> EncodeError {
    let instr = Instruction::with_operands(mode, code, operands);
    match encode_to_vec(&instr) {
        Ok((bytes, _)) => panic!("{code:?} unexpectedly encoded as {:02X?}", bytes),
        Err(err) => err,
    }
}

// ─── Legacy forms ─────────────────────────────────────────────────────────────

#[test]
fn the_short_jump_example() {
    let jmp = Instruction::with_operands(
        CodeSize::Code32,
        Code::Jmp_rel8_32,
        &[OperandValue::Branch(0x12)],
    );
    let mut out = Vec::new();
    let (len, offsets) = encode(&jmp, &mut out).unwrap();
    assert_eq!(len, 2);
    assert_eq!(out, [0xEB, 0x10]);
    assert_eq!(offsets.displacement_offset, 1);
    assert_eq!(offsets.displacement_size, 1);
}

#[test]
fn imm64_offsets() {
    let (bytes, offsets) = encode_in(
        CodeSize::Code64,
        Code::Mov_r64_imm64,
        &[Rax.into(), 0x1122_3344_5566_7788i64.into()],
    );
    assert_eq!(
        bytes,
        [0x48, 0xB8, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]
    );
    assert_eq!(offsets.immediate_range(), 2..10);
    assert!(!offsets.has_displacement());
}

#[test]
fn three_operand_imul() {
    assert_eq!(
        bytes64(
            Code::Imul_r64_rm64_imm32,
            &[Rax.into(), Rcx.into(), 0x1000i64.into()]
        ),
        [0x48, 0x69, 0xC1, 0x00, 0x10, 0x00, 0x00]
    );
}

#[test]
fn rip_relative_with_immediate() {
    let mem = MemoryOperand::with_base_displ(Rip, 0x100);
    let (bytes, offsets) = encode_in(
        CodeSize::Code64,
        Code::Cmp_rm64_imm32,
        &[mem.into(), (-1i64).into()],
    );
    assert_eq!(
        bytes,
        [0x48, 0x81, 0x3D, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]
    );
    assert_eq!(offsets.displacement_range(), 3..7);
    assert_eq!(offsets.immediate_range(), 7..11);
}

#[test]
fn register_register_forms() {
    assert_eq!(bytes64(Code::Test_rm32_r32, &[Ecx.into(), Edx.into()]), [0x85, 0xD1]);
    assert_eq!(bytes64(Code::Push_r64, &[R12.into()]), [0x41, 0x54]);
    assert_eq!(
        bytes64(Code::Mov_rm64_r64, &[R9.into(), Rax.into()]),
        [0x49, 0x89, 0xC1]
    );
}

#[test]
fn index_without_base() {
    let mem = MemoryOperand::new(Register::None, Rcx, 8, 0x10, 8);
    assert_eq!(
        bytes64(Code::Mov_r32_rm32, &[Eax.into(), mem.into()]),
        [0x8B, 0x04, 0xCD, 0x10, 0x00, 0x00, 0x00]
    );
}

#[test]
fn address_size_override() {
    let mem = MemoryOperand::with_base(Ecx);
    assert_eq!(
        bytes64(Code::Mov_r32_rm32, &[Eax.into(), mem.into()]),
        [0x67, 0x8B, 0x01]
    );
    let ax = MemoryOperand::with_base(Bx);
    assert!(matches!(
        rejected(CodeSize::Code64, Code::Mov_r32_rm32, &[Eax.into(), ax.into()]),
        EncodeError::NoEncodingForOperands { .. }
    ));
}

#[test]
fn absolute_addresses_in_legacy_modes() {
    let abs32 = MemoryOperand::new(Register::None, Register::None, 1, 0x1000, 4);
    assert_eq!(
        encode_in(CodeSize::Code32, Code::Mov_r32_rm32, &[Eax.into(), abs32.into()]).0,
        [0x8B, 0x05, 0x00, 0x10, 0x00, 0x00]
    );
    let abs16 = MemoryOperand::new(Register::None, Register::None, 1, 0x1234, 2);
    assert_eq!(
        encode_in(CodeSize::Code16, Code::Mov_r16_rm16, &[Ax.into(), abs16.into()]).0,
        [0x8B, 0x06, 0x34, 0x12]
    );
}

#[test]
fn moffs_is_reported_as_displacement() {
    let addr = MemoryOperand::new(Register::None, Register::None, 1, 0x1234_5678, 4);
    let (bytes, offsets) = encode_in(
        CodeSize::Code32,
        Code::Mov_EAX_moffs32,
        &[Eax.into(), addr.into()],
    );
    assert_eq!(bytes, [0xA1, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(offsets.displacement_range(), 1..5);
}

#[test]
fn far_pointer_offsets() {
    let (bytes, offsets) = encode_in(
        CodeSize::Code32,
        Code::Jmp_ptr1632,
        &[OperandValue::Far {
            selector: 0x1234,
            offset: 0x1234_5678,
        }],
    );
    assert_eq!(bytes, [0xEA, 0x78, 0x56, 0x34, 0x12, 0x34, 0x12]);
    assert_eq!(offsets.immediate_range(), 1..5);
    assert_eq!(offsets.immediate_offset2, 5);
    assert_eq!(offsets.immediate_size2, 2);
}

#[test]
fn branches_are_relative_to_the_record_ip() {
    let mut call = Instruction::with_operands(
        CodeSize::Code64,
        Code::Call_rel32_64,
        &[OperandValue::Branch(0x2000)],
    );
    call.set_ip(0x1000);
    assert_eq!(
        encode_to_vec(&call).unwrap().0,
        [0xE8, 0xFB, 0x0F, 0x00, 0x00]
    );

    let mut spin = Instruction::with_operands(
        CodeSize::Code64,
        Code::Je_rel8_64,
        &[OperandValue::Branch(0x10)],
    );
    spin.set_ip(0x10);
    assert_eq!(encode_to_vec(&spin).unwrap().0, [0x74, 0xFE]);
}

#[test]
fn near_branch_can_be_shortened() {
    let mut jmp = Instruction::with_operands(
        CodeSize::Code64,
        Code::Jmp_rel32_64,
        &[OperandValue::Branch(0x40)],
    );
    assert_eq!(
        encode_to_vec(&jmp).unwrap().0,
        [0xE9, 0x3B, 0x00, 0x00, 0x00]
    );
    jmp.to_short_branch();
    assert_eq!(jmp.code(), Code::Jmp_rel8_64);
    assert_eq!(encode_to_vec(&jmp).unwrap().0, [0xEB, 0x3E]);
}

// ─── Vector forms ─────────────────────────────────────────────────────────────

#[test]
fn evex_zeroing_broadcast_from_gpr() {
    let mut instr = Instruction::with_operands(
        CodeSize::Code64,
        Code::EVEX_Vpbroadcastd_zmm_k1z_r32,
        &[Zmm1.into(), Eax.into()],
    );
    instr.set_op_mask(K1);
    instr.set_zeroing_masking(true);
    assert_eq!(
        encode_to_vec(&instr).unwrap().0,
        [0x62, 0xF2, 0x7D, 0xC9, 0x7C, 0xC8]
    );
}

#[test]
fn evex_high_registers() {
    assert_eq!(
        bytes64(
            Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er,
            &[Zmm17.into(), Zmm18.into(), Zmm19.into()]
        ),
        [0x62, 0xA1, 0x6C, 0x40, 0x58, 0xCB]
    );
    // zmm16-31 only exist in 64-bit mode.
    assert!(matches!(
        rejected(
            CodeSize::Code32,
            Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er,
            &[Zmm17.into(), Zmm2.into(), Zmm3.into()]
        ),
        EncodeError::OperandOutOfRange { operand: 0, .. }
    ));
}

#[test]
fn xop_uses_the_8f_escape() {
    assert_eq!(
        bytes64(
            Code::XOP_Bextr_r64_rm64_imm32,
            &[Rax.into(), Rax.into(), 1i64.into()]
        ),
        [0x8F, 0xEA, 0xF8, 0x10, 0xC0, 0x01, 0x00, 0x00, 0x00]
    );
}

#[test]
fn prevent_vex2_option() {
    let instr = Instruction::with_operands(
        CodeSize::Code64,
        Code::VEX_Vaddps_xmm_xmm_xmmm128,
        &[Xmm1.into(), Xmm2.into(), Xmm3.into()],
    );
    let encoder = Encoder::new(EncoderOptions {
        prevent_vex2: true,
        ..EncoderOptions::default()
    });
    assert!(encoder.options().prevent_vex2);
    assert_eq!(
        encoder.encode_to_vec(&instr).unwrap().0,
        [0xC4, 0xE1, 0x68, 0x58, 0xCB]
    );
}

// ─── Rejections ───────────────────────────────────────────────────────────────

#[test]
fn immediate_out_of_range() {
    match rejected(
        CodeSize::Code64,
        Code::Enterq_imm16_imm8,
        &[0x1_0000i64.into(), 0i64.into()],
    ) {
        EncodeError::OperandOutOfRange {
            operand,
            value,
            min,
            max,
            ..
        } => assert_eq!((operand, value, min, max), (0, 0x1_0000, -32768, 65535)),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn shift_by_one_only_takes_one() {
    match rejected(CodeSize::Code64, Code::Shl_rm32_1, &[Ecx.into(), 2i64.into()]) {
        EncodeError::OperandOutOfRange {
            operand, value, ..
        } => assert_eq!((operand, value), (1, 2)),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn wrong_operand_kind_is_described() {
    let err = rejected(
        CodeSize::Code64,
        Code::Lea_r64_m,
        &[Rax.into(), Rcx.into()],
    );
    match &err {
        EncodeError::UnsupportedOperandKind {
            operand, expected, ..
        } => {
            assert_eq!(*operand, 1);
            assert_eq!(*expected, "memory");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(err.instruction().code(), Code::Lea_r64_m);
}

// ─── Sinks ────────────────────────────────────────────────────────────────────

#[test]
fn consecutive_encodes_append() {
    let mut out = Vec::new();
    let push = Instruction::with_operands(CodeSize::Code64, Code::Push_r64, &[Rbp.into()]);
    let ret = Instruction::new(CodeSize::Code64, Code::Retnq);
    encode(&push, &mut out).unwrap();
    encode(&ret, &mut out).unwrap();
    assert_eq!(out, [0x55, 0xC3]);
}

#[test]
fn slice_sink_in_place() {
    let mut buf = [0xCCu8; 8];
    let mut sink = SliceSink::new(&mut buf);
    let ret = Instruction::new(CodeSize::Code64, Code::Retnq);
    encode(&ret, &mut sink).unwrap();
    assert_eq!(sink.position(), 1);
    assert_eq!(sink.remaining(), 7);
    assert_eq!(buf[..2], [0xC3, 0xCC]);
}

#[test]
fn io_sink_forwards_to_writer() {
    let ret = Instruction::new(CodeSize::Code64, Code::Retnq);
    let mut sink = IoSink(std::io::Cursor::new(Vec::new()));
    let (len, _) = encode(&ret, &mut sink).unwrap();
    assert_eq!(len, 1);
    assert_eq!(sink.into_inner().into_inner(), [0xC3]);
}
