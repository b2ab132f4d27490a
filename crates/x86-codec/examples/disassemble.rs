//! Linear-sweep disassembly example: decodes a buffer and prints an
//! Intel-syntax listing with addresses and raw bytes.
//!
//! Run with: `cargo run --example disassemble`

use x86_codec::{CodeSize, Decoder, DecoderOptions};

const CODE: &[u8] = &[
    0x55, // push rbp
    0x48, 0x89, 0xE5, // mov rbp, rsp
    0x48, 0x83, 0xEC, 0x20, // sub rsp, 0x20
    0x48, 0x8B, 0x05, 0x10, 0x00, 0x00, 0x00, // mov rax, [rip+0x10]
    0x62, 0xF1, 0x6C, 0x49, 0x58, 0x48, 0x01, // vaddps zmm1{k1}, zmm2, [rax+0x40]
    0x0F, 0x0B, // ud2
    0xFF, 0xFF, // (invalid)
    0x74, 0xF0, // je
    0xC9, // leave
    0xC3, // ret
];

fn main() {
    let base = 0x40_1000;
    let decoder = Decoder::new(CodeSize::Code64, DecoderOptions::default());

    println!("=== x86_codec linear sweep ({} bytes) ===\n", CODE.len());
    for item in decoder.iter(CODE, base) {
        match item {
            Ok(instr) => {
                let start = (instr.ip() - base) as usize;
                let raw = &CODE[start..start + instr.len()];
                println!("{:016X}  {:<30}  {}", instr.ip(), hex(raw), instr);
            }
            Err(err) => {
                let start = (err.ip() - base) as usize;
                println!("{:016X}  {:<30}  (bad) {}", err.ip(), hex(&CODE[start..=start]), err);
            }
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
