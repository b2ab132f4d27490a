//! Branch relocation example: encodes a call whose target is not known
//! yet, then patches the displacement in place using the constant offsets
//! reported by the encoder.
//!
//! Run with: `cargo run --example patch_branch`

use x86_codec::{
    decode, encode_to_vec, Code, CodeSize, Instruction, MemoryOperand, OperandValue, Register,
};

fn main() {
    let ip = 0x40_1000u64;

    // --- Direct branch: patch rel32 once the callee is placed ---
    println!("1. call rel32 with a placeholder target:");
    let mut call = Instruction::with_operands(
        CodeSize::Code64,
        Code::Call_rel32_64,
        &[OperandValue::Branch(ip + 5)],
    );
    call.set_ip(ip);
    let (mut bytes, offsets) = encode_to_vec(&call).unwrap();
    println!("   encoded: {:02X?}", bytes);
    println!(
        "   branch field: offset {} size {}",
        offsets.displacement_offset, offsets.displacement_size
    );

    let callee = 0x40_8000u64;
    let rel = (callee as i64 - (ip as i64 + bytes.len() as i64)) as i32;
    bytes[offsets.displacement_range()].copy_from_slice(&rel.to_le_bytes());
    let (patched, _) = decode(&bytes[..], CodeSize::Code64, ip).unwrap();
    println!("   patched: {:02X?} -> {}", bytes, patched);

    // --- RIP-relative load: patch disp32 to point at a data slot ---
    println!("\n2. RIP-relative load:");
    let mut load = Instruction::with_operands(
        CodeSize::Code64,
        Code::Mov_r64_rm64,
        &[
            Register::Rax.into(),
            MemoryOperand::with_base_displ(Register::Rip, 0).into(),
        ],
    );
    load.set_ip(ip);
    let (mut bytes, offsets) = encode_to_vec(&load).unwrap();
    println!(
        "   displacement field: offset {} size {}",
        offsets.displacement_offset, offsets.displacement_size
    );

    let slot = 0x40_2000u64;
    let disp = (slot as i64 - (ip as i64 + bytes.len() as i64)) as i32;
    bytes[offsets.displacement_range()].copy_from_slice(&disp.to_le_bytes());
    let (patched, _) = decode(&bytes[..], CodeSize::Code64, ip).unwrap();
    println!("   patched: {:02X?} -> {}", bytes, patched);
    println!(
        "   effective address: {:#X}",
        patched.ip_rel_memory_address().unwrap_or_default()
    );
}
