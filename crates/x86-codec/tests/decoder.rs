//! Decoder integration tests through the public API.
//!
//! Byte sequences are taken from well-known encodings; each test checks the
//! selected form, the consumed length and the operand payloads.

use x86_codec::{
    decode, ByteSource, Code, CodeSize, DecodeError, Decoder, DecoderOptions, OpKind, Register,
    RepPrefix, MAX_INSTRUCTION_LEN,
};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn decode_in(mode: CodeSize, bytes: &[u8]) -> x86_codec::Instruction {
    let (instr, len) = decode(bytes, mode, 0)
        .unwrap_or_else(|e| panic!("failed to decode {:02X?}: {e}", bytes));
    assert_eq!(len, bytes.len(), "partial decode of {:02X?}", bytes);
    assert_eq!(instr.len(), len);
    instr
}

fn decode64(bytes: &[u8]) -> x86_codec::Instruction {
    decode_in(CodeSize::Code64, bytes)
}

// ─── Legacy forms ─────────────────────────────────────────────────────────────

#[test]
fn jmp_short_is_relative_to_the_next_instruction() {
    let (instr, len) = decode(&[0xEB, 0x10][..], CodeSize::Code32, 0).unwrap();
    assert_eq!(len, 2);
    assert_eq!(instr.code(), Code::Jmp_rel8_32);
    assert_eq!(instr.near_branch_target(), 0x12);
    assert_eq!(instr.next_ip(), 2);
}

#[test]
fn backward_branch_wraps_to_operand_size() {
    let (instr, _) = decode(&[0xEB, 0xFE][..], CodeSize::Code32, 0).unwrap();
    assert_eq!(instr.near_branch_target(), 0);
    let (instr, _) = decode(&[0xEB, 0xFC][..], CodeSize::Code32, 0).unwrap();
    assert_eq!(instr.near_branch_target(), 0xFFFF_FFFE);
    let (instr, _) = decode(&[0xEB, 0xFC][..], CodeSize::Code64, 0).unwrap();
    assert_eq!(instr.near_branch_target(), 0xFFFF_FFFF_FFFF_FFFE);
}

#[test]
fn rex_extends_registers() {
    let instr = decode64(&[0x49, 0x89, 0xC1]);
    assert_eq!(instr.code(), Code::Mov_rm64_r64);
    assert_eq!(instr.op_register(0), Register::R9);
    assert_eq!(instr.op_register(1), Register::Rax);
}

#[test]
fn rex_selects_uniform_byte_registers() {
    let instr = decode64(&[0x40, 0x88, 0xC6]);
    assert_eq!(instr.code(), Code::Mov_rm8_r8);
    assert_eq!(instr.op_register(0), Register::Sil);
    let instr = decode64(&[0x88, 0xC6]);
    assert_eq!(instr.op_register(0), Register::Dh);
}

#[test]
fn opcode_register_forms() {
    let instr = decode64(&[0x41, 0x54]);
    assert_eq!(instr.code(), Code::Push_r64);
    assert_eq!(instr.op_register(0), Register::R12);
    let instr = decode64(&[0x48, 0xB8, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
    assert_eq!(instr.code(), Code::Mov_r64_imm64);
    assert_eq!(instr.immediate(1), 0x1122_3344_5566_7788);
}

#[test]
fn sib_and_displacement_sizes() {
    let instr = decode64(&[0x8B, 0x44, 0x24, 0x08]);
    assert_eq!(instr.memory_base(), Register::Rsp);
    assert_eq!(instr.memory_index(), Register::None);
    assert_eq!(instr.memory_displacement(), 8);
    assert_eq!(instr.memory_displ_size(), 1);

    let instr = decode64(&[0x41, 0x8B, 0x44, 0x8D, 0x00]);
    assert_eq!(instr.memory_base(), Register::R13);
    assert_eq!(instr.memory_index(), Register::Rcx);
    assert_eq!(instr.memory_index_scale(), 4);
    assert_eq!(instr.memory_displ_size(), 1);

    let instr = decode64(&[0x8B, 0x83, 0x08, 0x00, 0x00, 0x00]);
    assert_eq!(instr.memory_base(), Register::Rbx);
    assert_eq!(instr.memory_displacement(), 8);
    assert_eq!(instr.memory_displ_size(), 8);
}

#[test]
fn absolute_addresses() {
    let instr = decode64(&[0x8B, 0x04, 0x25, 0x00, 0x10, 0x00, 0x00]);
    assert_eq!(instr.memory_base(), Register::None);
    assert_eq!(instr.memory_index(), Register::None);
    assert_eq!(instr.memory_displacement(), 0x1000);

    let instr = decode_in(CodeSize::Code32, &[0x8B, 0x05, 0xF0, 0xFF, 0xFF, 0xFF]);
    assert_eq!(instr.memory_base(), Register::None);
    assert_eq!(instr.memory_displacement(), 0xFFFF_FFF0);
    assert_eq!(instr.memory_displ_size(), 4);
}

#[test]
fn moffs_width_follows_address_size() {
    let instr = decode_in(CodeSize::Code32, &[0xA1, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(instr.code(), Code::Mov_EAX_moffs32);
    assert_eq!(instr.op_register(0), Register::Eax);
    assert_eq!(instr.memory_displacement(), 0x1234_5678);
    assert_eq!(instr.memory_displ_size(), 4);
}

#[test]
fn enter_carries_two_immediates() {
    let instr = decode64(&[0xC8, 0x20, 0x00, 0x01]);
    assert_eq!(instr.code(), Code::Enterq_imm16_imm8);
    assert_eq!(instr.op_kind(0), OpKind::Immediate16);
    assert_eq!(instr.op_kind(1), OpKind::Immediate8Second);
    assert_eq!(instr.immediate16(), 0x20);
    assert_eq!(instr.immediate8_2nd(), 1);
}

#[test]
fn operand_size_prefix_in_each_mode() {
    let instr = decode_in(CodeSize::Code16, &[0x8B, 0x40, 0x04]);
    assert_eq!(instr.code(), Code::Mov_r16_rm16);
    assert_eq!(instr.memory_base(), Register::Bx);
    assert_eq!(instr.memory_index(), Register::Si);
    let instr = decode_in(CodeSize::Code32, &[0x67, 0x66, 0x8B, 0x40, 0x04]);
    assert_eq!(instr.code(), Code::Mov_r16_rm16);
    assert_eq!(instr.memory_base(), Register::Bx);
    assert_eq!(instr.memory_displacement(), 4);
}

#[test]
fn string_instruction_with_rep() {
    let instr = decode64(&[0xF3, 0xA4]);
    assert_eq!(instr.code(), Code::Movsb_m8_m8);
    assert_eq!(instr.rep_prefix(), RepPrefix::Repe);
    assert!(instr.has_memory_operand());
}

#[test]
fn segment_prefix_without_memory_is_dropped() {
    let instr = decode64(&[0x64, 0x90]);
    assert_eq!(instr.code(), Code::Nopd);
    assert_eq!(instr.segment_prefix(), Register::None);
}

// ─── Vector forms ─────────────────────────────────────────────────────────────

#[test]
fn vex3_with_extended_rm() {
    let instr = decode64(&[0xC4, 0xC1, 0x68, 0x58, 0xC9]);
    assert_eq!(instr.code(), Code::VEX_Vaddps_xmm_xmm_xmmm128);
    assert_eq!(instr.op_register(2), Register::Xmm9);
}

#[test]
fn evex_high_registers() {
    // vaddps zmm17, zmm18, zmm19: R' = 1, V' = 1, X = 1 for rm.
    let instr = decode64(&[0x62, 0xA1, 0x6C, 0x40, 0x58, 0xCB]);
    assert_eq!(instr.code(), Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er);
    assert_eq!(instr.op_register(0), Register::Zmm17);
    assert_eq!(instr.op_register(1), Register::Zmm18);
    assert_eq!(instr.op_register(2), Register::Zmm19);
}

#[test]
fn xop_immediate_form() {
    let instr = decode64(&[0x8F, 0xEA, 0xF8, 0x10, 0xC0, 0x01, 0x00, 0x00, 0x00]);
    assert_eq!(instr.code(), Code::XOP_Bextr_r64_rm64_imm32);
    assert_eq!(instr.op_register(0), Register::Rax);
    assert_eq!(instr.op_register(1), Register::Rax);
    assert_eq!(instr.immediate32(), 1);
}

#[test]
fn vex_lead_bytes_are_les_lds_in_legacy_modes() {
    let instr = decode_in(CodeSize::Code32, &[0xC4, 0x00]);
    assert_eq!(instr.code(), Code::Les_r32_m1632);
}

// ─── Errors ───────────────────────────────────────────────────────────────────

#[test]
fn errors_carry_the_instruction_address() {
    let err = decode(&[0x06][..], CodeSize::Code64, 0x4000).unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidModeForInstruction {
            ip: 0x4000,
            code_size: 64
        }
    );
    assert_eq!(err.ip(), 0x4000);
    assert_eq!(
        err.to_string(),
        "0x4000: instruction is not valid in 64-bit mode"
    );
}

#[test]
fn fifteen_byte_limit() {
    let mut bytes = vec![0x66u8; MAX_INSTRUCTION_LEN];
    bytes.push(0x90);
    assert_eq!(
        decode(&bytes[..], CodeSize::Code64, 0),
        Err(DecodeError::InstructionTooLong { ip: 0 })
    );
}

#[test]
fn truncated_immediate() {
    assert_eq!(
        decode(&[0x48, 0xB8, 0x01, 0x02][..], CodeSize::Code64, 0),
        Err(DecodeError::TruncatedInput { ip: 0, consumed: 4 })
    );
}

fn is_invalid(mode: CodeSize, bytes: &[u8]) -> bool {
    matches!(
        decode(bytes, mode, 0),
        Err(DecodeError::InvalidOpcode { ip: 0, .. })
    )
}

#[test]
fn opmask_numbers_above_seven_are_reserved() {
    // kmovw k1, k2
    let instr = decode64(&[0xC5, 0xF8, 0x90, 0xCA]);
    assert_eq!(instr.code(), Code::VEX_Kmovw_kr_km16);
    assert_eq!(instr.op_register(0), Register::K1);
    assert_eq!(instr.op_register(1), Register::K2);

    // VEX.R on a k destination
    assert!(is_invalid(CodeSize::Code64, &[0xC5, 0x78, 0x90, 0xC1]));
    // vvvv naming k8
    assert!(is_invalid(CodeSize::Code64, &[0xC5, 0xBC, 0x41, 0xC3]));
    // EVEX.R and EVEX.R' on the vcmpps k destination
    assert!(is_invalid(
        CodeSize::Code64,
        &[0x62, 0x01, 0x4C, 0x4A, 0xC2, 0xCD, 0xAE]
    ));
}

#[test]
fn high_vvvv_outside_64bit_mode() {
    // EVEX.V' clear selects registers 16-31, which 32-bit code cannot name.
    assert!(is_invalid(
        CodeSize::Code32,
        &[0x62, 0xE1, 0xBD, 0x82, 0xEF, 0xC0]
    ));
    // vprotd takes no vvvv operand, so the field must read 1111.
    assert!(is_invalid(
        CodeSize::Code16,
        &[0x8F, 0x48, 0x38, 0xC2, 0xFA, 0x63]
    ));
}

#[test]
fn no_prefix_forms_reject_66() {
    assert_eq!(decode64(&[0x0F, 0x01, 0xD0]).code(), Code::Xgetbv);
    assert!(is_invalid(CodeSize::Code64, &[0x66, 0x0F, 0x01, 0xD0]));
    assert!(is_invalid(CodeSize::Code32, &[0x66, 0x0F, 0x01, 0xD0]));
    assert!(is_invalid(CodeSize::Code16, &[0x66, 0x0F, 0x01, 0xF9]));
    assert!(decode(&[0xF3, 0x0F, 0x01, 0xD0][..], CodeSize::Code64, 0).is_err());
}

#[test]
fn near_return_ignores_66_in_64bit_mode() {
    let instr = decode64(&[0x66, 0xC3]);
    assert_eq!(instr.code(), Code::Retnq);
    assert_eq!(instr.len(), 2);
    assert_eq!(decode64(&[0x66, 0xC2, 0x08, 0x00]).code(), Code::Retnq_imm16);
    assert_eq!(decode_in(CodeSize::Code32, &[0x66, 0xC3]).code(), Code::Retnw);
    assert_eq!(decode_in(CodeSize::Code16, &[0xC3]).code(), Code::Retnw);
}

#[test]
fn bound_memory_needs_32bit_addressing() {
    // bndmov bnd0, [bx]
    assert!(is_invalid(CodeSize::Code16, &[0x66, 0x0F, 0x1A, 0x07]));
    assert!(is_invalid(CodeSize::Code32, &[0x67, 0x66, 0x0F, 0x1A, 0x07]));

    let instr = decode_in(CodeSize::Code32, &[0x66, 0x0F, 0x1A, 0x07]);
    assert_eq!(instr.code(), Code::Bndmov_bnd_bndm64);
    assert_eq!(instr.memory_base(), Register::Edi);
    // Register forms do not address memory.
    let instr = decode_in(CodeSize::Code16, &[0x66, 0x0F, 0x1A, 0xC1]);
    assert_eq!(instr.op_register(1), Register::Bnd1);
}

// ─── Sources and scanner ──────────────────────────────────────────────────────

/// Source that yields bytes from a fixed program one at a time.
struct Counting<'a> {
    bytes: &'a [u8],
    pulled: usize,
}

impl ByteSource for Counting<'_> {
    fn next_byte(&mut self) -> Option<u8> {
        let b = *self.bytes.get(self.pulled)?;
        self.pulled += 1;
        Some(b)
    }
}

#[test]
fn custom_source_is_read_exactly_once_per_byte() {
    let mut src = Counting {
        bytes: &[0x48, 0x83, 0xC0, 0xFF, 0xC3],
        pulled: 0,
    };
    let decoder = Decoder::new(CodeSize::Code64, DecoderOptions::default());
    let (instr, len) = decoder.decode(&mut src, 0).unwrap();
    assert_eq!(instr.code(), Code::Add_rm64_imm8);
    assert_eq!(len, 4);
    assert_eq!(src.pulled, 4);
}

#[test]
fn linear_sweep_covers_every_byte() {
    let program = [
        0x55, // push rbp
        0x48, 0x89, 0xE5, // mov rbp, rsp
        0x06, // invalid in 64-bit mode
        0x8B, 0x45, 0x00, // mov eax, [rbp]
        0xC3, // ret
    ];
    let decoder = Decoder::new(CodeSize::Code64, DecoderOptions::default());
    let mut iter = decoder.iter(&program, 0x1000);
    let mut covered = 0;
    let mut errors = 0;
    for item in iter.by_ref() {
        match item {
            Ok(instr) => {
                assert_eq!(instr.ip(), 0x1000 + covered as u64);
                covered += instr.len();
            }
            Err(err) => {
                assert_eq!(err.ip(), 0x1000 + covered as u64);
                covered += 1;
                errors += 1;
            }
        }
    }
    assert_eq!(covered, program.len());
    assert_eq!(errors, 1);
    assert!(iter.remaining().is_empty());
    assert_eq!(iter.ip(), 0x1000 + program.len() as u64);
}
