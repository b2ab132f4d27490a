#![no_main]
use libfuzzer_sys::fuzz_target;
use x86_codec::{CodeSize, Decoder, DecoderOptions, MAX_INSTRUCTION_LEN};

fuzz_target!(|data: &[u8]| {
    // The decoder must never panic, in any mode, with or without MVEX.
    for mode in [CodeSize::Code16, CodeSize::Code32, CodeSize::Code64] {
        for knc in [false, true] {
            let decoder = Decoder::new(mode, DecoderOptions { knc });
            if let Ok((instr, len)) = decoder.decode(data, 0x1000) {
                assert!(len <= MAX_INSTRUCTION_LEN);
                assert_eq!(instr.len(), len);
            }

            // Linear sweep must account for every byte.
            let mut covered = 0usize;
            for item in decoder.iter(data, 0) {
                covered += item.map_or(1, |instr| instr.len());
            }
            assert_eq!(covered, data.len());
        }
    }
});
