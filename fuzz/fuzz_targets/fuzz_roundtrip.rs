#![no_main]
use libfuzzer_sys::fuzz_target;
use x86_codec::{CodeSize, Decoder, DecoderOptions, Encoder, EncoderOptions, OpKind};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, bytes)) = data.split_first() else {
        return;
    };
    let mode = match selector % 3 {
        0 => CodeSize::Code16,
        1 => CodeSize::Code32,
        _ => CodeSize::Code64,
    };
    let decoder = Decoder::new(mode, DecoderOptions { knc: selector & 0x80 != 0 });
    let Ok((instr, _)) = decoder.decode(bytes, 0x40_0000) else {
        return;
    };

    // Whatever decodes and re-encodes must decode to the same form and operands.
    let encoder = Encoder::new(EncoderOptions::default());
    let Ok((encoded, offsets)) = encoder.encode_to_vec(&instr) else {
        return;
    };
    let (back, len) = decoder
        .decode(&encoded[..], 0x40_0000)
        .expect("re-encoded bytes must decode");
    assert_eq!(len, encoded.len());
    assert_eq!(back.code(), instr.code());
    assert_eq!(back.op_count(), instr.op_count());
    for operand in 0..instr.op_count() {
        assert_eq!(back.op_kind(operand), instr.op_kind(operand));
        match instr.op_kind(operand) {
            OpKind::Register => assert_eq!(back.op_register(operand), instr.op_register(operand)),
            OpKind::Memory => {
                assert_eq!(back.memory_base(), instr.memory_base());
                assert_eq!(back.memory_index(), instr.memory_index());
                assert_eq!(back.memory_displacement(), instr.memory_displacement());
            }
            kind if kind.is_near_branch() => {
                assert_eq!(back.near_branch_target(), instr.near_branch_target());
            }
            kind if kind.is_immediate() => {
                assert_eq!(back.immediate(operand), instr.immediate(operand));
            }
            _ => {}
        }
    }
    if offsets.has_displacement() {
        assert!(offsets.displacement_range().end <= encoded.len());
    }
    if offsets.has_immediate() {
        assert!(offsets.immediate_range().end <= encoded.len());
    }
});
