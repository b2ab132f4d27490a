//! Dense instruction identities.
//!
//! A [`Code`] names one concrete encoding form: mnemonic, operand shapes,
//! operand size and encoding family (`Add_rm32_imm8`, `Jmp_rel8_64`,
//! `EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er`, ...). Each code owns exactly one
//! template in the [Encoding Tables](crate::tables). Declaration order is also
//! the priority order the decoder uses between templates sharing an opcode.

use crate::mnemonic::Mnemonic;
use crate::mnemonic::Mnemonic as Mn;
use crate::tables::dsl::*;
use crate::tables::OpcodeMap::*;
use crate::tables::{flags, template, EncodingKind, OpCodeTemplate};

macro_rules! code_table {
    ($($name:ident => $template:expr,)+) => {
        /// Concrete instruction form.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[allow(non_camel_case_types)]
        #[repr(u16)]
        pub enum Code {
            /// Decoding failed or the record is empty.
            #[default]
            Invalid,
            $(
                #[allow(missing_docs)]
                $name,
            )+
        }

        impl Code {
            const ALL: &'static [Code] = &[Code::Invalid, $(Code::$name,)+];
        }

        /// Templates indexed by `Code as usize`.
        pub(crate) const TEMPLATES: &[OpCodeTemplate] = &[OpCodeTemplate::INVALID, $($template,)+];
    };
}

code_table! {
    Add_rm8_r8 => legacy(Primary, 0x00, Mn::Add).ops([rm(G8), r(G8)]).lock(),
    Add_rm16_r16 => legacy(Primary, 0x01, Mn::Add).ops([rm(G16), r(G16)]).o16().lock(),
    Add_rm32_r32 => legacy(Primary, 0x01, Mn::Add).ops([rm(G32), r(G32)]).o32().lock(),
    Add_rm64_r64 => legacy(Primary, 0x01, Mn::Add).ops([rm(G64), r(G64)]).o64().only64().lock(),
    Add_r8_rm8 => legacy(Primary, 0x02, Mn::Add).ops([r(G8), rm(G8)]),
    Add_r16_rm16 => legacy(Primary, 0x03, Mn::Add).ops([r(G16), rm(G16)]).o16(),
    Add_r32_rm32 => legacy(Primary, 0x03, Mn::Add).ops([r(G32), rm(G32)]).o32(),
    Add_r64_rm64 => legacy(Primary, 0x03, Mn::Add).ops([r(G64), rm(G64)]).o64().only64(),
    Add_AL_imm8 => legacy(Primary, 0x04, Mn::Add).ops([AL, IB]),
    Add_AX_imm16 => legacy(Primary, 0x05, Mn::Add).ops([AX, IW]).o16(),
    Add_EAX_imm32 => legacy(Primary, 0x05, Mn::Add).ops([EAX, ID]).o32(),
    Add_RAX_imm32 => legacy(Primary, 0x05, Mn::Add).ops([RAX, IDQ]).o64().only64(),
    Or_rm8_r8 => legacy(Primary, 0x08, Mn::Or).ops([rm(G8), r(G8)]).lock(),
    Or_rm16_r16 => legacy(Primary, 0x09, Mn::Or).ops([rm(G16), r(G16)]).o16().lock(),
    Or_rm32_r32 => legacy(Primary, 0x09, Mn::Or).ops([rm(G32), r(G32)]).o32().lock(),
    Or_rm64_r64 => legacy(Primary, 0x09, Mn::Or).ops([rm(G64), r(G64)]).o64().only64().lock(),
    Or_r8_rm8 => legacy(Primary, 0x0A, Mn::Or).ops([r(G8), rm(G8)]),
    Or_r16_rm16 => legacy(Primary, 0x0B, Mn::Or).ops([r(G16), rm(G16)]).o16(),
    Or_r32_rm32 => legacy(Primary, 0x0B, Mn::Or).ops([r(G32), rm(G32)]).o32(),
    Or_r64_rm64 => legacy(Primary, 0x0B, Mn::Or).ops([r(G64), rm(G64)]).o64().only64(),
    Or_AL_imm8 => legacy(Primary, 0x0C, Mn::Or).ops([AL, IB]),
    Or_AX_imm16 => legacy(Primary, 0x0D, Mn::Or).ops([AX, IW]).o16(),
    Or_EAX_imm32 => legacy(Primary, 0x0D, Mn::Or).ops([EAX, ID]).o32(),
    Or_RAX_imm32 => legacy(Primary, 0x0D, Mn::Or).ops([RAX, IDQ]).o64().only64(),
    Adc_rm8_r8 => legacy(Primary, 0x10, Mn::Adc).ops([rm(G8), r(G8)]).lock(),
    Adc_rm16_r16 => legacy(Primary, 0x11, Mn::Adc).ops([rm(G16), r(G16)]).o16().lock(),
    Adc_rm32_r32 => legacy(Primary, 0x11, Mn::Adc).ops([rm(G32), r(G32)]).o32().lock(),
    Adc_rm64_r64 => legacy(Primary, 0x11, Mn::Adc).ops([rm(G64), r(G64)]).o64().only64().lock(),
    Adc_r8_rm8 => legacy(Primary, 0x12, Mn::Adc).ops([r(G8), rm(G8)]),
    Adc_r16_rm16 => legacy(Primary, 0x13, Mn::Adc).ops([r(G16), rm(G16)]).o16(),
    Adc_r32_rm32 => legacy(Primary, 0x13, Mn::Adc).ops([r(G32), rm(G32)]).o32(),
    Adc_r64_rm64 => legacy(Primary, 0x13, Mn::Adc).ops([r(G64), rm(G64)]).o64().only64(),
    Adc_AL_imm8 => legacy(Primary, 0x14, Mn::Adc).ops([AL, IB]),
    Adc_AX_imm16 => legacy(Primary, 0x15, Mn::Adc).ops([AX, IW]).o16(),
    Adc_EAX_imm32 => legacy(Primary, 0x15, Mn::Adc).ops([EAX, ID]).o32(),
    Adc_RAX_imm32 => legacy(Primary, 0x15, Mn::Adc).ops([RAX, IDQ]).o64().only64(),
    Sbb_rm8_r8 => legacy(Primary, 0x18, Mn::Sbb).ops([rm(G8), r(G8)]).lock(),
    Sbb_rm16_r16 => legacy(Primary, 0x19, Mn::Sbb).ops([rm(G16), r(G16)]).o16().lock(),
    Sbb_rm32_r32 => legacy(Primary, 0x19, Mn::Sbb).ops([rm(G32), r(G32)]).o32().lock(),
    Sbb_rm64_r64 => legacy(Primary, 0x19, Mn::Sbb).ops([rm(G64), r(G64)]).o64().only64().lock(),
    Sbb_r8_rm8 => legacy(Primary, 0x1A, Mn::Sbb).ops([r(G8), rm(G8)]),
    Sbb_r16_rm16 => legacy(Primary, 0x1B, Mn::Sbb).ops([r(G16), rm(G16)]).o16(),
    Sbb_r32_rm32 => legacy(Primary, 0x1B, Mn::Sbb).ops([r(G32), rm(G32)]).o32(),
    Sbb_r64_rm64 => legacy(Primary, 0x1B, Mn::Sbb).ops([r(G64), rm(G64)]).o64().only64(),
    Sbb_AL_imm8 => legacy(Primary, 0x1C, Mn::Sbb).ops([AL, IB]),
    Sbb_AX_imm16 => legacy(Primary, 0x1D, Mn::Sbb).ops([AX, IW]).o16(),
    Sbb_EAX_imm32 => legacy(Primary, 0x1D, Mn::Sbb).ops([EAX, ID]).o32(),
    Sbb_RAX_imm32 => legacy(Primary, 0x1D, Mn::Sbb).ops([RAX, IDQ]).o64().only64(),
    And_rm8_r8 => legacy(Primary, 0x20, Mn::And).ops([rm(G8), r(G8)]).lock(),
    And_rm16_r16 => legacy(Primary, 0x21, Mn::And).ops([rm(G16), r(G16)]).o16().lock(),
    And_rm32_r32 => legacy(Primary, 0x21, Mn::And).ops([rm(G32), r(G32)]).o32().lock(),
    And_rm64_r64 => legacy(Primary, 0x21, Mn::And).ops([rm(G64), r(G64)]).o64().only64().lock(),
    And_r8_rm8 => legacy(Primary, 0x22, Mn::And).ops([r(G8), rm(G8)]),
    And_r16_rm16 => legacy(Primary, 0x23, Mn::And).ops([r(G16), rm(G16)]).o16(),
    And_r32_rm32 => legacy(Primary, 0x23, Mn::And).ops([r(G32), rm(G32)]).o32(),
    And_r64_rm64 => legacy(Primary, 0x23, Mn::And).ops([r(G64), rm(G64)]).o64().only64(),
    And_AL_imm8 => legacy(Primary, 0x24, Mn::And).ops([AL, IB]),
    And_AX_imm16 => legacy(Primary, 0x25, Mn::And).ops([AX, IW]).o16(),
    And_EAX_imm32 => legacy(Primary, 0x25, Mn::And).ops([EAX, ID]).o32(),
    And_RAX_imm32 => legacy(Primary, 0x25, Mn::And).ops([RAX, IDQ]).o64().only64(),
    Sub_rm8_r8 => legacy(Primary, 0x28, Mn::Sub).ops([rm(G8), r(G8)]).lock(),
    Sub_rm16_r16 => legacy(Primary, 0x29, Mn::Sub).ops([rm(G16), r(G16)]).o16().lock(),
    Sub_rm32_r32 => legacy(Primary, 0x29, Mn::Sub).ops([rm(G32), r(G32)]).o32().lock(),
    Sub_rm64_r64 => legacy(Primary, 0x29, Mn::Sub).ops([rm(G64), r(G64)]).o64().only64().lock(),
    Sub_r8_rm8 => legacy(Primary, 0x2A, Mn::Sub).ops([r(G8), rm(G8)]),
    Sub_r16_rm16 => legacy(Primary, 0x2B, Mn::Sub).ops([r(G16), rm(G16)]).o16(),
    Sub_r32_rm32 => legacy(Primary, 0x2B, Mn::Sub).ops([r(G32), rm(G32)]).o32(),
    Sub_r64_rm64 => legacy(Primary, 0x2B, Mn::Sub).ops([r(G64), rm(G64)]).o64().only64(),
    Sub_AL_imm8 => legacy(Primary, 0x2C, Mn::Sub).ops([AL, IB]),
    Sub_AX_imm16 => legacy(Primary, 0x2D, Mn::Sub).ops([AX, IW]).o16(),
    Sub_EAX_imm32 => legacy(Primary, 0x2D, Mn::Sub).ops([EAX, ID]).o32(),
    Sub_RAX_imm32 => legacy(Primary, 0x2D, Mn::Sub).ops([RAX, IDQ]).o64().only64(),
    Xor_rm8_r8 => legacy(Primary, 0x30, Mn::Xor).ops([rm(G8), r(G8)]).lock(),
    Xor_rm16_r16 => legacy(Primary, 0x31, Mn::Xor).ops([rm(G16), r(G16)]).o16().lock(),
    Xor_rm32_r32 => legacy(Primary, 0x31, Mn::Xor).ops([rm(G32), r(G32)]).o32().lock(),
    Xor_rm64_r64 => legacy(Primary, 0x31, Mn::Xor).ops([rm(G64), r(G64)]).o64().only64().lock(),
    Xor_r8_rm8 => legacy(Primary, 0x32, Mn::Xor).ops([r(G8), rm(G8)]),
    Xor_r16_rm16 => legacy(Primary, 0x33, Mn::Xor).ops([r(G16), rm(G16)]).o16(),
    Xor_r32_rm32 => legacy(Primary, 0x33, Mn::Xor).ops([r(G32), rm(G32)]).o32(),
    Xor_r64_rm64 => legacy(Primary, 0x33, Mn::Xor).ops([r(G64), rm(G64)]).o64().only64(),
    Xor_AL_imm8 => legacy(Primary, 0x34, Mn::Xor).ops([AL, IB]),
    Xor_AX_imm16 => legacy(Primary, 0x35, Mn::Xor).ops([AX, IW]).o16(),
    Xor_EAX_imm32 => legacy(Primary, 0x35, Mn::Xor).ops([EAX, ID]).o32(),
    Xor_RAX_imm32 => legacy(Primary, 0x35, Mn::Xor).ops([RAX, IDQ]).o64().only64(),
    Cmp_rm8_r8 => legacy(Primary, 0x38, Mn::Cmp).ops([rm(G8), r(G8)]),
    Cmp_rm16_r16 => legacy(Primary, 0x39, Mn::Cmp).ops([rm(G16), r(G16)]).o16(),
    Cmp_rm32_r32 => legacy(Primary, 0x39, Mn::Cmp).ops([rm(G32), r(G32)]).o32(),
    Cmp_rm64_r64 => legacy(Primary, 0x39, Mn::Cmp).ops([rm(G64), r(G64)]).o64().only64(),
    Cmp_r8_rm8 => legacy(Primary, 0x3A, Mn::Cmp).ops([r(G8), rm(G8)]),
    Cmp_r16_rm16 => legacy(Primary, 0x3B, Mn::Cmp).ops([r(G16), rm(G16)]).o16(),
    Cmp_r32_rm32 => legacy(Primary, 0x3B, Mn::Cmp).ops([r(G32), rm(G32)]).o32(),
    Cmp_r64_rm64 => legacy(Primary, 0x3B, Mn::Cmp).ops([r(G64), rm(G64)]).o64().only64(),
    Cmp_AL_imm8 => legacy(Primary, 0x3C, Mn::Cmp).ops([AL, IB]),
    Cmp_AX_imm16 => legacy(Primary, 0x3D, Mn::Cmp).ops([AX, IW]).o16(),
    Cmp_EAX_imm32 => legacy(Primary, 0x3D, Mn::Cmp).ops([EAX, ID]).o32(),
    Cmp_RAX_imm32 => legacy(Primary, 0x3D, Mn::Cmp).ops([RAX, IDQ]).o64().only64(),
    Add_rm8_imm8 => legacy(Primary, 0x80, Mn::Add).digit(0).ops([rm(G8), IB]).lock(),
    Add_rm16_imm16 => legacy(Primary, 0x81, Mn::Add).digit(0).ops([rm(G16), IW]).o16().lock(),
    Add_rm32_imm32 => legacy(Primary, 0x81, Mn::Add).digit(0).ops([rm(G32), ID]).o32().lock(),
    Add_rm64_imm32 => legacy(Primary, 0x81, Mn::Add).digit(0).ops([rm(G64), IDQ]).o64().only64().lock(),
    Add_rm8_imm8_82 => legacy(Primary, 0x82, Mn::Add).digit(0).ops([rm(G8), IB]).not64().lock(),
    Add_rm16_imm8 => legacy(Primary, 0x83, Mn::Add).digit(0).ops([rm(G16), IBW]).o16().lock(),
    Add_rm32_imm8 => legacy(Primary, 0x83, Mn::Add).digit(0).ops([rm(G32), IBD]).o32().lock(),
    Add_rm64_imm8 => legacy(Primary, 0x83, Mn::Add).digit(0).ops([rm(G64), IBQ]).o64().only64().lock(),
    Or_rm8_imm8 => legacy(Primary, 0x80, Mn::Or).digit(1).ops([rm(G8), IB]).lock(),
    Or_rm16_imm16 => legacy(Primary, 0x81, Mn::Or).digit(1).ops([rm(G16), IW]).o16().lock(),
    Or_rm32_imm32 => legacy(Primary, 0x81, Mn::Or).digit(1).ops([rm(G32), ID]).o32().lock(),
    Or_rm64_imm32 => legacy(Primary, 0x81, Mn::Or).digit(1).ops([rm(G64), IDQ]).o64().only64().lock(),
    Or_rm8_imm8_82 => legacy(Primary, 0x82, Mn::Or).digit(1).ops([rm(G8), IB]).not64().lock(),
    Or_rm16_imm8 => legacy(Primary, 0x83, Mn::Or).digit(1).ops([rm(G16), IBW]).o16().lock(),
    Or_rm32_imm8 => legacy(Primary, 0x83, Mn::Or).digit(1).ops([rm(G32), IBD]).o32().lock(),
    Or_rm64_imm8 => legacy(Primary, 0x83, Mn::Or).digit(1).ops([rm(G64), IBQ]).o64().only64().lock(),
    Adc_rm8_imm8 => legacy(Primary, 0x80, Mn::Adc).digit(2).ops([rm(G8), IB]).lock(),
    Adc_rm16_imm16 => legacy(Primary, 0x81, Mn::Adc).digit(2).ops([rm(G16), IW]).o16().lock(),
    Adc_rm32_imm32 => legacy(Primary, 0x81, Mn::Adc).digit(2).ops([rm(G32), ID]).o32().lock(),
    Adc_rm64_imm32 => legacy(Primary, 0x81, Mn::Adc).digit(2).ops([rm(G64), IDQ]).o64().only64().lock(),
    Adc_rm8_imm8_82 => legacy(Primary, 0x82, Mn::Adc).digit(2).ops([rm(G8), IB]).not64().lock(),
    Adc_rm16_imm8 => legacy(Primary, 0x83, Mn::Adc).digit(2).ops([rm(G16), IBW]).o16().lock(),
    Adc_rm32_imm8 => legacy(Primary, 0x83, Mn::Adc).digit(2).ops([rm(G32), IBD]).o32().lock(),
    Adc_rm64_imm8 => legacy(Primary, 0x83, Mn::Adc).digit(2).ops([rm(G64), IBQ]).o64().only64().lock(),
    Sbb_rm8_imm8 => legacy(Primary, 0x80, Mn::Sbb).digit(3).ops([rm(G8), IB]).lock(),
    Sbb_rm16_imm16 => legacy(Primary, 0x81, Mn::Sbb).digit(3).ops([rm(G16), IW]).o16().lock(),
    Sbb_rm32_imm32 => legacy(Primary, 0x81, Mn::Sbb).digit(3).ops([rm(G32), ID]).o32().lock(),
    Sbb_rm64_imm32 => legacy(Primary, 0x81, Mn::Sbb).digit(3).ops([rm(G64), IDQ]).o64().only64().lock(),
    Sbb_rm8_imm8_82 => legacy(Primary, 0x82, Mn::Sbb).digit(3).ops([rm(G8), IB]).not64().lock(),
    Sbb_rm16_imm8 => legacy(Primary, 0x83, Mn::Sbb).digit(3).ops([rm(G16), IBW]).o16().lock(),
    Sbb_rm32_imm8 => legacy(Primary, 0x83, Mn::Sbb).digit(3).ops([rm(G32), IBD]).o32().lock(),
    Sbb_rm64_imm8 => legacy(Primary, 0x83, Mn::Sbb).digit(3).ops([rm(G64), IBQ]).o64().only64().lock(),
    And_rm8_imm8 => legacy(Primary, 0x80, Mn::And).digit(4).ops([rm(G8), IB]).lock(),
    And_rm16_imm16 => legacy(Primary, 0x81, Mn::And).digit(4).ops([rm(G16), IW]).o16().lock(),
    And_rm32_imm32 => legacy(Primary, 0x81, Mn::And).digit(4).ops([rm(G32), ID]).o32().lock(),
    And_rm64_imm32 => legacy(Primary, 0x81, Mn::And).digit(4).ops([rm(G64), IDQ]).o64().only64().lock(),
    And_rm8_imm8_82 => legacy(Primary, 0x82, Mn::And).digit(4).ops([rm(G8), IB]).not64().lock(),
    And_rm16_imm8 => legacy(Primary, 0x83, Mn::And).digit(4).ops([rm(G16), IBW]).o16().lock(),
    And_rm32_imm8 => legacy(Primary, 0x83, Mn::And).digit(4).ops([rm(G32), IBD]).o32().lock(),
    And_rm64_imm8 => legacy(Primary, 0x83, Mn::And).digit(4).ops([rm(G64), IBQ]).o64().only64().lock(),
    Sub_rm8_imm8 => legacy(Primary, 0x80, Mn::Sub).digit(5).ops([rm(G8), IB]).lock(),
    Sub_rm16_imm16 => legacy(Primary, 0x81, Mn::Sub).digit(5).ops([rm(G16), IW]).o16().lock(),
    Sub_rm32_imm32 => legacy(Primary, 0x81, Mn::Sub).digit(5).ops([rm(G32), ID]).o32().lock(),
    Sub_rm64_imm32 => legacy(Primary, 0x81, Mn::Sub).digit(5).ops([rm(G64), IDQ]).o64().only64().lock(),
    Sub_rm8_imm8_82 => legacy(Primary, 0x82, Mn::Sub).digit(5).ops([rm(G8), IB]).not64().lock(),
    Sub_rm16_imm8 => legacy(Primary, 0x83, Mn::Sub).digit(5).ops([rm(G16), IBW]).o16().lock(),
    Sub_rm32_imm8 => legacy(Primary, 0x83, Mn::Sub).digit(5).ops([rm(G32), IBD]).o32().lock(),
    Sub_rm64_imm8 => legacy(Primary, 0x83, Mn::Sub).digit(5).ops([rm(G64), IBQ]).o64().only64().lock(),
    Xor_rm8_imm8 => legacy(Primary, 0x80, Mn::Xor).digit(6).ops([rm(G8), IB]).lock(),
    Xor_rm16_imm16 => legacy(Primary, 0x81, Mn::Xor).digit(6).ops([rm(G16), IW]).o16().lock(),
    Xor_rm32_imm32 => legacy(Primary, 0x81, Mn::Xor).digit(6).ops([rm(G32), ID]).o32().lock(),
    Xor_rm64_imm32 => legacy(Primary, 0x81, Mn::Xor).digit(6).ops([rm(G64), IDQ]).o64().only64().lock(),
    Xor_rm8_imm8_82 => legacy(Primary, 0x82, Mn::Xor).digit(6).ops([rm(G8), IB]).not64().lock(),
    Xor_rm16_imm8 => legacy(Primary, 0x83, Mn::Xor).digit(6).ops([rm(G16), IBW]).o16().lock(),
    Xor_rm32_imm8 => legacy(Primary, 0x83, Mn::Xor).digit(6).ops([rm(G32), IBD]).o32().lock(),
    Xor_rm64_imm8 => legacy(Primary, 0x83, Mn::Xor).digit(6).ops([rm(G64), IBQ]).o64().only64().lock(),
    Cmp_rm8_imm8 => legacy(Primary, 0x80, Mn::Cmp).digit(7).ops([rm(G8), IB]),
    Cmp_rm16_imm16 => legacy(Primary, 0x81, Mn::Cmp).digit(7).ops([rm(G16), IW]).o16(),
    Cmp_rm32_imm32 => legacy(Primary, 0x81, Mn::Cmp).digit(7).ops([rm(G32), ID]).o32(),
    Cmp_rm64_imm32 => legacy(Primary, 0x81, Mn::Cmp).digit(7).ops([rm(G64), IDQ]).o64().only64(),
    Cmp_rm8_imm8_82 => legacy(Primary, 0x82, Mn::Cmp).digit(7).ops([rm(G8), IB]).not64(),
    Cmp_rm16_imm8 => legacy(Primary, 0x83, Mn::Cmp).digit(7).ops([rm(G16), IBW]).o16(),
    Cmp_rm32_imm8 => legacy(Primary, 0x83, Mn::Cmp).digit(7).ops([rm(G32), IBD]).o32(),
    Cmp_rm64_imm8 => legacy(Primary, 0x83, Mn::Cmp).digit(7).ops([rm(G64), IBQ]).o64().only64(),
    Test_rm8_r8 => legacy(Primary, 0x84, Mn::Test).ops([rm(G8), r(G8)]),
    Test_rm16_r16 => legacy(Primary, 0x85, Mn::Test).ops([rm(G16), r(G16)]).o16(),
    Test_rm32_r32 => legacy(Primary, 0x85, Mn::Test).ops([rm(G32), r(G32)]).o32(),
    Test_rm64_r64 => legacy(Primary, 0x85, Mn::Test).ops([rm(G64), r(G64)]).o64().only64(),
    Test_AL_imm8 => legacy(Primary, 0xA8, Mn::Test).ops([AL, IB]),
    Test_AX_imm16 => legacy(Primary, 0xA9, Mn::Test).ops([AX, IW]).o16(),
    Test_EAX_imm32 => legacy(Primary, 0xA9, Mn::Test).ops([EAX, ID]).o32(),
    Test_RAX_imm32 => legacy(Primary, 0xA9, Mn::Test).ops([RAX, IDQ]).o64().only64(),
    Test_rm8_imm8 => legacy(Primary, 0xF6, Mn::Test).digit(0).ops([rm(G8), IB]),
    Test_rm16_imm16 => legacy(Primary, 0xF7, Mn::Test).digit(0).ops([rm(G16), IW]).o16(),
    Test_rm32_imm32 => legacy(Primary, 0xF7, Mn::Test).digit(0).ops([rm(G32), ID]).o32(),
    Test_rm64_imm32 => legacy(Primary, 0xF7, Mn::Test).digit(0).ops([rm(G64), IDQ]).o64().only64(),
    Not_rm8 => legacy(Primary, 0xF6, Mn::Not).digit(2).ops([rm(G8)]).lock(),
    Not_rm16 => legacy(Primary, 0xF7, Mn::Not).digit(2).ops([rm(G16)]).o16().lock(),
    Not_rm32 => legacy(Primary, 0xF7, Mn::Not).digit(2).ops([rm(G32)]).o32().lock(),
    Not_rm64 => legacy(Primary, 0xF7, Mn::Not).digit(2).ops([rm(G64)]).o64().only64().lock(),
    Neg_rm8 => legacy(Primary, 0xF6, Mn::Neg).digit(3).ops([rm(G8)]).lock(),
    Neg_rm16 => legacy(Primary, 0xF7, Mn::Neg).digit(3).ops([rm(G16)]).o16().lock(),
    Neg_rm32 => legacy(Primary, 0xF7, Mn::Neg).digit(3).ops([rm(G32)]).o32().lock(),
    Neg_rm64 => legacy(Primary, 0xF7, Mn::Neg).digit(3).ops([rm(G64)]).o64().only64().lock(),
    Mul_rm8 => legacy(Primary, 0xF6, Mn::Mul).digit(4).ops([rm(G8)]),
    Mul_rm16 => legacy(Primary, 0xF7, Mn::Mul).digit(4).ops([rm(G16)]).o16(),
    Mul_rm32 => legacy(Primary, 0xF7, Mn::Mul).digit(4).ops([rm(G32)]).o32(),
    Mul_rm64 => legacy(Primary, 0xF7, Mn::Mul).digit(4).ops([rm(G64)]).o64().only64(),
    Imul_rm8 => legacy(Primary, 0xF6, Mn::Imul).digit(5).ops([rm(G8)]),
    Imul_rm16 => legacy(Primary, 0xF7, Mn::Imul).digit(5).ops([rm(G16)]).o16(),
    Imul_rm32 => legacy(Primary, 0xF7, Mn::Imul).digit(5).ops([rm(G32)]).o32(),
    Imul_rm64 => legacy(Primary, 0xF7, Mn::Imul).digit(5).ops([rm(G64)]).o64().only64(),
    Div_rm8 => legacy(Primary, 0xF6, Mn::Div).digit(6).ops([rm(G8)]),
    Div_rm16 => legacy(Primary, 0xF7, Mn::Div).digit(6).ops([rm(G16)]).o16(),
    Div_rm32 => legacy(Primary, 0xF7, Mn::Div).digit(6).ops([rm(G32)]).o32(),
    Div_rm64 => legacy(Primary, 0xF7, Mn::Div).digit(6).ops([rm(G64)]).o64().only64(),
    Idiv_rm8 => legacy(Primary, 0xF6, Mn::Idiv).digit(7).ops([rm(G8)]),
    Idiv_rm16 => legacy(Primary, 0xF7, Mn::Idiv).digit(7).ops([rm(G16)]).o16(),
    Idiv_rm32 => legacy(Primary, 0xF7, Mn::Idiv).digit(7).ops([rm(G32)]).o32(),
    Idiv_rm64 => legacy(Primary, 0xF7, Mn::Idiv).digit(7).ops([rm(G64)]).o64().only64(),
    Inc_rm8 => legacy(Primary, 0xFE, Mn::Inc).digit(0).ops([rm(G8)]).lock(),
    Inc_rm16 => legacy(Primary, 0xFF, Mn::Inc).digit(0).ops([rm(G16)]).o16().lock(),
    Inc_rm32 => legacy(Primary, 0xFF, Mn::Inc).digit(0).ops([rm(G32)]).o32().lock(),
    Inc_rm64 => legacy(Primary, 0xFF, Mn::Inc).digit(0).ops([rm(G64)]).o64().only64().lock(),
    Dec_rm8 => legacy(Primary, 0xFE, Mn::Dec).digit(1).ops([rm(G8)]).lock(),
    Dec_rm16 => legacy(Primary, 0xFF, Mn::Dec).digit(1).ops([rm(G16)]).o16().lock(),
    Dec_rm32 => legacy(Primary, 0xFF, Mn::Dec).digit(1).ops([rm(G32)]).o32().lock(),
    Dec_rm64 => legacy(Primary, 0xFF, Mn::Dec).digit(1).ops([rm(G64)]).o64().only64().lock(),
    Inc_r16 => legacy(Primary, 0x40, Mn::Inc).ops([o(G16)]).o16().not64(),
    Inc_r32 => legacy(Primary, 0x40, Mn::Inc).ops([o(G32)]).o32().not64(),
    Dec_r16 => legacy(Primary, 0x48, Mn::Dec).ops([o(G16)]).o16().not64(),
    Dec_r32 => legacy(Primary, 0x48, Mn::Dec).ops([o(G32)]).o32().not64(),
    Imul_r16_rm16 => legacy(Map0F, 0xAF, Mn::Imul).ops([r(G16), rm(G16)]).o16(),
    Imul_r32_rm32 => legacy(Map0F, 0xAF, Mn::Imul).ops([r(G32), rm(G32)]).o32(),
    Imul_r64_rm64 => legacy(Map0F, 0xAF, Mn::Imul).ops([r(G64), rm(G64)]).o64().only64(),
    Imul_r16_rm16_imm16 => legacy(Primary, 0x69, Mn::Imul).ops([r(G16), rm(G16), IW]).o16(),
    Imul_r32_rm32_imm32 => legacy(Primary, 0x69, Mn::Imul).ops([r(G32), rm(G32), ID]).o32(),
    Imul_r64_rm64_imm32 => legacy(Primary, 0x69, Mn::Imul).ops([r(G64), rm(G64), IDQ]).o64().only64(),
    Imul_r16_rm16_imm8 => legacy(Primary, 0x6B, Mn::Imul).ops([r(G16), rm(G16), IBW]).o16(),
    Imul_r32_rm32_imm8 => legacy(Primary, 0x6B, Mn::Imul).ops([r(G32), rm(G32), IBD]).o32(),
    Imul_r64_rm64_imm8 => legacy(Primary, 0x6B, Mn::Imul).ops([r(G64), rm(G64), IBQ]).o64().only64(),
    Mov_rm8_r8 => legacy(Primary, 0x88, Mn::Mov).ops([rm(G8), r(G8)]),
    Mov_rm16_r16 => legacy(Primary, 0x89, Mn::Mov).ops([rm(G16), r(G16)]).o16(),
    Mov_rm32_r32 => legacy(Primary, 0x89, Mn::Mov).ops([rm(G32), r(G32)]).o32(),
    Mov_rm64_r64 => legacy(Primary, 0x89, Mn::Mov).ops([rm(G64), r(G64)]).o64().only64(),
    Mov_r8_rm8 => legacy(Primary, 0x8A, Mn::Mov).ops([r(G8), rm(G8)]),
    Mov_r16_rm16 => legacy(Primary, 0x8B, Mn::Mov).ops([r(G16), rm(G16)]).o16(),
    Mov_r32_rm32 => legacy(Primary, 0x8B, Mn::Mov).ops([r(G32), rm(G32)]).o32(),
    Mov_r64_rm64 => legacy(Primary, 0x8B, Mn::Mov).ops([r(G64), rm(G64)]).o64().only64(),
    Mov_rm16_Sreg => legacy(Primary, 0x8C, Mn::Mov).ops([rm(G16), r(SEG)]).o16(),
    Mov_r32m16_Sreg => legacy(Primary, 0x8C, Mn::Mov).ops([rm(G32), r(SEG)]).o32(),
    Mov_r64m16_Sreg => legacy(Primary, 0x8C, Mn::Mov).ops([rm(G64), r(SEG)]).o64().only64(),
    Mov_Sreg_rm16 => legacy(Primary, 0x8E, Mn::Mov).ops([r(SEG), rm(G16)]).o16().with(flags::SREG_WRITE),
    Mov_Sreg_r32m16 => legacy(Primary, 0x8E, Mn::Mov).ops([r(SEG), rm(G32)]).o32().with(flags::SREG_WRITE),
    Mov_Sreg_r64m16 => legacy(Primary, 0x8E, Mn::Mov).ops([r(SEG), rm(G64)]).o64().only64().with(flags::SREG_WRITE),
    Mov_AL_moffs8 => legacy(Primary, 0xA0, Mn::Mov).ops([AL, MOFFS]),
    Mov_AX_moffs16 => legacy(Primary, 0xA1, Mn::Mov).ops([AX, MOFFS]).o16(),
    Mov_EAX_moffs32 => legacy(Primary, 0xA1, Mn::Mov).ops([EAX, MOFFS]).o32(),
    Mov_RAX_moffs64 => legacy(Primary, 0xA1, Mn::Mov).ops([RAX, MOFFS]).o64().only64(),
    Mov_moffs8_AL => legacy(Primary, 0xA2, Mn::Mov).ops([MOFFS, AL]),
    Mov_moffs16_AX => legacy(Primary, 0xA3, Mn::Mov).ops([MOFFS, AX]).o16(),
    Mov_moffs32_EAX => legacy(Primary, 0xA3, Mn::Mov).ops([MOFFS, EAX]).o32(),
    Mov_moffs64_RAX => legacy(Primary, 0xA3, Mn::Mov).ops([MOFFS, RAX]).o64().only64(),
    Mov_r8_imm8 => legacy(Primary, 0xB0, Mn::Mov).ops([o(G8), IB]),
    Mov_r16_imm16 => legacy(Primary, 0xB8, Mn::Mov).ops([o(G16), IW]).o16(),
    Mov_r32_imm32 => legacy(Primary, 0xB8, Mn::Mov).ops([o(G32), ID]).o32(),
    Mov_r64_imm64 => legacy(Primary, 0xB8, Mn::Mov).ops([o(G64), IQ]).o64().only64(),
    Mov_rm8_imm8 => legacy(Primary, 0xC6, Mn::Mov).digit(0).ops([rm(G8), IB]),
    Mov_rm16_imm16 => legacy(Primary, 0xC7, Mn::Mov).digit(0).ops([rm(G16), IW]).o16(),
    Mov_rm32_imm32 => legacy(Primary, 0xC7, Mn::Mov).digit(0).ops([rm(G32), ID]).o32(),
    Mov_rm64_imm32 => legacy(Primary, 0xC7, Mn::Mov).digit(0).ops([rm(G64), IDQ]).o64().only64(),
    Mov_r32_cr => legacy(Map0F, 0x20, Mn::Mov).ops([rr(G32), r(CR)]).not64().with(flags::MOD_IGNORED),
    Mov_r64_cr => legacy(Map0F, 0x20, Mn::Mov).ops([rr(G64), r(CR)]).only64().with(flags::MOD_IGNORED),
    Mov_r32_dr => legacy(Map0F, 0x21, Mn::Mov).ops([rr(G32), r(DR)]).not64().with(flags::MOD_IGNORED),
    Mov_r64_dr => legacy(Map0F, 0x21, Mn::Mov).ops([rr(G64), r(DR)]).only64().with(flags::MOD_IGNORED),
    Mov_cr_r32 => legacy(Map0F, 0x22, Mn::Mov).ops([r(CR), rr(G32)]).not64().with(flags::MOD_IGNORED),
    Mov_cr_r64 => legacy(Map0F, 0x22, Mn::Mov).ops([r(CR), rr(G64)]).only64().with(flags::MOD_IGNORED),
    Mov_dr_r32 => legacy(Map0F, 0x23, Mn::Mov).ops([r(DR), rr(G32)]).not64().with(flags::MOD_IGNORED),
    Mov_dr_r64 => legacy(Map0F, 0x23, Mn::Mov).ops([r(DR), rr(G64)]).only64().with(flags::MOD_IGNORED),
    Mov_r32_tr => legacy(Map0F, 0x24, Mn::Mov).ops([rr(G32), r(TR)]).not64().with(flags::MOD_IGNORED),
    Mov_tr_r32 => legacy(Map0F, 0x26, Mn::Mov).ops([r(TR), rr(G32)]).not64().with(flags::MOD_IGNORED),
    Lea_r16_m => legacy(Primary, 0x8D, Mn::Lea).ops([r(G16), M]).o16(),
    Lea_r32_m => legacy(Primary, 0x8D, Mn::Lea).ops([r(G32), M]).o32(),
    Lea_r64_m => legacy(Primary, 0x8D, Mn::Lea).ops([r(G64), M]).o64().only64(),
    Xchg_rm8_r8 => legacy(Primary, 0x86, Mn::Xchg).ops([rm(G8), r(G8)]).lock(),
    Xchg_rm16_r16 => legacy(Primary, 0x87, Mn::Xchg).ops([rm(G16), r(G16)]).o16().lock(),
    Xchg_rm32_r32 => legacy(Primary, 0x87, Mn::Xchg).ops([rm(G32), r(G32)]).o32().lock(),
    Xchg_rm64_r64 => legacy(Primary, 0x87, Mn::Xchg).ops([rm(G64), r(G64)]).o64().only64().lock(),
    Pause => legacy(Primary, 0x90, Mn::Pause).pf3().with(flags::NO_REX_B),
    Nopw => legacy(Primary, 0x90, Mn::Nop).o16().with(flags::NO_REX_B),
    Nopd => legacy(Primary, 0x90, Mn::Nop).o32().with(flags::NO_REX_B),
    Nopq => legacy(Primary, 0x90, Mn::Nop).o64().only64().with(flags::NO_REX_B),
    Xchg_r16_AX => legacy(Primary, 0x90, Mn::Xchg).ops([o(G16), AX]).o16(),
    Xchg_r32_EAX => legacy(Primary, 0x90, Mn::Xchg).ops([o(G32), EAX]).o32(),
    Xchg_r64_RAX => legacy(Primary, 0x90, Mn::Xchg).ops([o(G64), RAX]).o64().only64(),
    Movzx_r16_rm8 => legacy(Map0F, 0xB6, Mn::Movzx).ops([r(G16), rm(G8)]).o16(),
    Movzx_r32_rm8 => legacy(Map0F, 0xB6, Mn::Movzx).ops([r(G32), rm(G8)]).o32(),
    Movzx_r64_rm8 => legacy(Map0F, 0xB6, Mn::Movzx).ops([r(G64), rm(G8)]).o64().only64(),
    Movzx_r16_rm16 => legacy(Map0F, 0xB7, Mn::Movzx).ops([r(G16), rm(G16)]).o16(),
    Movzx_r32_rm16 => legacy(Map0F, 0xB7, Mn::Movzx).ops([r(G32), rm(G16)]).o32(),
    Movzx_r64_rm16 => legacy(Map0F, 0xB7, Mn::Movzx).ops([r(G64), rm(G16)]).o64().only64(),
    Movsx_r16_rm8 => legacy(Map0F, 0xBE, Mn::Movsx).ops([r(G16), rm(G8)]).o16(),
    Movsx_r32_rm8 => legacy(Map0F, 0xBE, Mn::Movsx).ops([r(G32), rm(G8)]).o32(),
    Movsx_r64_rm8 => legacy(Map0F, 0xBE, Mn::Movsx).ops([r(G64), rm(G8)]).o64().only64(),
    Movsx_r16_rm16 => legacy(Map0F, 0xBF, Mn::Movsx).ops([r(G16), rm(G16)]).o16(),
    Movsx_r32_rm16 => legacy(Map0F, 0xBF, Mn::Movsx).ops([r(G32), rm(G16)]).o32(),
    Movsx_r64_rm16 => legacy(Map0F, 0xBF, Mn::Movsx).ops([r(G64), rm(G16)]).o64().only64(),
    Movsxd_r16_rm16 => legacy(Primary, 0x63, Mn::Movsxd).ops([r(G16), rm(G16)]).o16().only64(),
    Movsxd_r32_rm32 => legacy(Primary, 0x63, Mn::Movsxd).ops([r(G32), rm(G32)]).o32().only64(),
    Movsxd_r64_rm32 => legacy(Primary, 0x63, Mn::Movsxd).ops([r(G64), rm(G32)]).o64().only64(),
    Arpl_rm16_r16 => legacy(Primary, 0x63, Mn::Arpl).ops([rm(G16), r(G16)]).o16().not64(),
    Arpl_r32m16_r32 => legacy(Primary, 0x63, Mn::Arpl).ops([rm(G32), r(G32)]).o32().not64(),
    Push_r16 => legacy(Primary, 0x50, Mn::Push).ops([o(G16)]).o16(),
    Push_r32 => legacy(Primary, 0x50, Mn::Push).ops([o(G32)]).o32().not64(),
    Push_r64 => legacy(Primary, 0x50, Mn::Push).ops([o(G64)]).o64().only64().d64(),
    Pop_r16 => legacy(Primary, 0x58, Mn::Pop).ops([o(G16)]).o16(),
    Pop_r32 => legacy(Primary, 0x58, Mn::Pop).ops([o(G32)]).o32().not64(),
    Pop_r64 => legacy(Primary, 0x58, Mn::Pop).ops([o(G64)]).o64().only64().d64(),
    Push_rm16 => legacy(Primary, 0xFF, Mn::Push).digit(6).ops([rm(G16)]).o16(),
    Push_rm32 => legacy(Primary, 0xFF, Mn::Push).digit(6).ops([rm(G32)]).o32().not64(),
    Push_rm64 => legacy(Primary, 0xFF, Mn::Push).digit(6).ops([rm(G64)]).o64().only64().d64(),
    Pop_rm16 => legacy(Primary, 0x8F, Mn::Pop).digit(0).ops([rm(G16)]).o16(),
    Pop_rm32 => legacy(Primary, 0x8F, Mn::Pop).digit(0).ops([rm(G32)]).o32().not64(),
    Pop_rm64 => legacy(Primary, 0x8F, Mn::Pop).digit(0).ops([rm(G64)]).o64().only64().d64(),
    Push_imm16 => legacy(Primary, 0x68, Mn::Push).ops([IW]).o16(),
    Pushd_imm32 => legacy(Primary, 0x68, Mn::Push).ops([ID]).o32().not64(),
    Pushq_imm32 => legacy(Primary, 0x68, Mn::Push).ops([IDQ]).o64().only64().d64(),
    Pushw_imm8 => legacy(Primary, 0x6A, Mn::Push).ops([IBW]).o16(),
    Pushd_imm8 => legacy(Primary, 0x6A, Mn::Push).ops([IBD]).o32().not64(),
    Pushq_imm8 => legacy(Primary, 0x6A, Mn::Push).ops([IBQ]).o64().only64().d64(),
    Pushw_ES => legacy(Primary, 0x06, Mn::Push).ops([ES]).o16().not64(),
    Pushd_ES => legacy(Primary, 0x06, Mn::Push).ops([ES]).o32().not64(),
    Popw_ES => legacy(Primary, 0x07, Mn::Pop).ops([ES]).o16().not64(),
    Popd_ES => legacy(Primary, 0x07, Mn::Pop).ops([ES]).o32().not64(),
    Pushw_CS => legacy(Primary, 0x0E, Mn::Push).ops([CS]).o16().not64(),
    Pushd_CS => legacy(Primary, 0x0E, Mn::Push).ops([CS]).o32().not64(),
    Pushw_SS => legacy(Primary, 0x16, Mn::Push).ops([SS]).o16().not64(),
    Pushd_SS => legacy(Primary, 0x16, Mn::Push).ops([SS]).o32().not64(),
    Popw_SS => legacy(Primary, 0x17, Mn::Pop).ops([SS]).o16().not64(),
    Popd_SS => legacy(Primary, 0x17, Mn::Pop).ops([SS]).o32().not64(),
    Pushw_DS => legacy(Primary, 0x1E, Mn::Push).ops([DS]).o16().not64(),
    Pushd_DS => legacy(Primary, 0x1E, Mn::Push).ops([DS]).o32().not64(),
    Popw_DS => legacy(Primary, 0x1F, Mn::Pop).ops([DS]).o16().not64(),
    Popd_DS => legacy(Primary, 0x1F, Mn::Pop).ops([DS]).o32().not64(),
    Pushw_FS => legacy(Map0F, 0xA0, Mn::Push).ops([FS]).o16(),
    Pushd_FS => legacy(Map0F, 0xA0, Mn::Push).ops([FS]).o32().not64(),
    Pushq_FS => legacy(Map0F, 0xA0, Mn::Push).ops([FS]).o64().only64().d64(),
    Popw_FS => legacy(Map0F, 0xA1, Mn::Pop).ops([FS]).o16(),
    Popd_FS => legacy(Map0F, 0xA1, Mn::Pop).ops([FS]).o32().not64(),
    Popq_FS => legacy(Map0F, 0xA1, Mn::Pop).ops([FS]).o64().only64().d64(),
    Pushw_GS => legacy(Map0F, 0xA8, Mn::Push).ops([GS]).o16(),
    Pushd_GS => legacy(Map0F, 0xA8, Mn::Push).ops([GS]).o32().not64(),
    Pushq_GS => legacy(Map0F, 0xA8, Mn::Push).ops([GS]).o64().only64().d64(),
    Popw_GS => legacy(Map0F, 0xA9, Mn::Pop).ops([GS]).o16(),
    Popd_GS => legacy(Map0F, 0xA9, Mn::Pop).ops([GS]).o32().not64(),
    Popq_GS => legacy(Map0F, 0xA9, Mn::Pop).ops([GS]).o64().only64().d64(),
    Pushaw => legacy(Primary, 0x60, Mn::Pusha).o16().not64(),
    Pushad => legacy(Primary, 0x60, Mn::Pushad).o32().not64(),
    Popaw => legacy(Primary, 0x61, Mn::Popa).o16().not64(),
    Popad => legacy(Primary, 0x61, Mn::Popad).o32().not64(),
    Pushfw => legacy(Primary, 0x9C, Mn::Pushf).o16(),
    Pushfd => legacy(Primary, 0x9C, Mn::Pushfd).o32().not64(),
    Pushfq => legacy(Primary, 0x9C, Mn::Pushfq).o64().only64().d64(),
    Popfw => legacy(Primary, 0x9D, Mn::Popf).o16(),
    Popfd => legacy(Primary, 0x9D, Mn::Popfd).o32().not64(),
    Popfq => legacy(Primary, 0x9D, Mn::Popfq).o64().only64().d64(),
    Jo_rel8_16 => legacy(Primary, 0x70, Mn::Jo).ops([REL8]).o16().not64(),
    Jo_rel8_32 => legacy(Primary, 0x70, Mn::Jo).ops([REL8]).o32().not64(),
    Jo_rel8_64 => legacy(Primary, 0x70, Mn::Jo).ops([REL8]).o64().only64().f64(),
    Jno_rel8_16 => legacy(Primary, 0x71, Mn::Jno).ops([REL8]).o16().not64(),
    Jno_rel8_32 => legacy(Primary, 0x71, Mn::Jno).ops([REL8]).o32().not64(),
    Jno_rel8_64 => legacy(Primary, 0x71, Mn::Jno).ops([REL8]).o64().only64().f64(),
    Jb_rel8_16 => legacy(Primary, 0x72, Mn::Jb).ops([REL8]).o16().not64(),
    Jb_rel8_32 => legacy(Primary, 0x72, Mn::Jb).ops([REL8]).o32().not64(),
    Jb_rel8_64 => legacy(Primary, 0x72, Mn::Jb).ops([REL8]).o64().only64().f64(),
    Jae_rel8_16 => legacy(Primary, 0x73, Mn::Jae).ops([REL8]).o16().not64(),
    Jae_rel8_32 => legacy(Primary, 0x73, Mn::Jae).ops([REL8]).o32().not64(),
    Jae_rel8_64 => legacy(Primary, 0x73, Mn::Jae).ops([REL8]).o64().only64().f64(),
    Je_rel8_16 => legacy(Primary, 0x74, Mn::Je).ops([REL8]).o16().not64(),
    Je_rel8_32 => legacy(Primary, 0x74, Mn::Je).ops([REL8]).o32().not64(),
    Je_rel8_64 => legacy(Primary, 0x74, Mn::Je).ops([REL8]).o64().only64().f64(),
    Jne_rel8_16 => legacy(Primary, 0x75, Mn::Jne).ops([REL8]).o16().not64(),
    Jne_rel8_32 => legacy(Primary, 0x75, Mn::Jne).ops([REL8]).o32().not64(),
    Jne_rel8_64 => legacy(Primary, 0x75, Mn::Jne).ops([REL8]).o64().only64().f64(),
    Jbe_rel8_16 => legacy(Primary, 0x76, Mn::Jbe).ops([REL8]).o16().not64(),
    Jbe_rel8_32 => legacy(Primary, 0x76, Mn::Jbe).ops([REL8]).o32().not64(),
    Jbe_rel8_64 => legacy(Primary, 0x76, Mn::Jbe).ops([REL8]).o64().only64().f64(),
    Ja_rel8_16 => legacy(Primary, 0x77, Mn::Ja).ops([REL8]).o16().not64(),
    Ja_rel8_32 => legacy(Primary, 0x77, Mn::Ja).ops([REL8]).o32().not64(),
    Ja_rel8_64 => legacy(Primary, 0x77, Mn::Ja).ops([REL8]).o64().only64().f64(),
    Js_rel8_16 => legacy(Primary, 0x78, Mn::Js).ops([REL8]).o16().not64(),
    Js_rel8_32 => legacy(Primary, 0x78, Mn::Js).ops([REL8]).o32().not64(),
    Js_rel8_64 => legacy(Primary, 0x78, Mn::Js).ops([REL8]).o64().only64().f64(),
    Jns_rel8_16 => legacy(Primary, 0x79, Mn::Jns).ops([REL8]).o16().not64(),
    Jns_rel8_32 => legacy(Primary, 0x79, Mn::Jns).ops([REL8]).o32().not64(),
    Jns_rel8_64 => legacy(Primary, 0x79, Mn::Jns).ops([REL8]).o64().only64().f64(),
    Jp_rel8_16 => legacy(Primary, 0x7A, Mn::Jp).ops([REL8]).o16().not64(),
    Jp_rel8_32 => legacy(Primary, 0x7A, Mn::Jp).ops([REL8]).o32().not64(),
    Jp_rel8_64 => legacy(Primary, 0x7A, Mn::Jp).ops([REL8]).o64().only64().f64(),
    Jnp_rel8_16 => legacy(Primary, 0x7B, Mn::Jnp).ops([REL8]).o16().not64(),
    Jnp_rel8_32 => legacy(Primary, 0x7B, Mn::Jnp).ops([REL8]).o32().not64(),
    Jnp_rel8_64 => legacy(Primary, 0x7B, Mn::Jnp).ops([REL8]).o64().only64().f64(),
    Jl_rel8_16 => legacy(Primary, 0x7C, Mn::Jl).ops([REL8]).o16().not64(),
    Jl_rel8_32 => legacy(Primary, 0x7C, Mn::Jl).ops([REL8]).o32().not64(),
    Jl_rel8_64 => legacy(Primary, 0x7C, Mn::Jl).ops([REL8]).o64().only64().f64(),
    Jge_rel8_16 => legacy(Primary, 0x7D, Mn::Jge).ops([REL8]).o16().not64(),
    Jge_rel8_32 => legacy(Primary, 0x7D, Mn::Jge).ops([REL8]).o32().not64(),
    Jge_rel8_64 => legacy(Primary, 0x7D, Mn::Jge).ops([REL8]).o64().only64().f64(),
    Jle_rel8_16 => legacy(Primary, 0x7E, Mn::Jle).ops([REL8]).o16().not64(),
    Jle_rel8_32 => legacy(Primary, 0x7E, Mn::Jle).ops([REL8]).o32().not64(),
    Jle_rel8_64 => legacy(Primary, 0x7E, Mn::Jle).ops([REL8]).o64().only64().f64(),
    Jg_rel8_16 => legacy(Primary, 0x7F, Mn::Jg).ops([REL8]).o16().not64(),
    Jg_rel8_32 => legacy(Primary, 0x7F, Mn::Jg).ops([REL8]).o32().not64(),
    Jg_rel8_64 => legacy(Primary, 0x7F, Mn::Jg).ops([REL8]).o64().only64().f64(),
    Jo_rel16 => legacy(Map0F, 0x80, Mn::Jo).ops([REL16]).o16().not64(),
    Jo_rel32_32 => legacy(Map0F, 0x80, Mn::Jo).ops([REL32]).o32().not64(),
    Jo_rel32_64 => legacy(Map0F, 0x80, Mn::Jo).ops([REL32]).o64().only64().f64(),
    Jno_rel16 => legacy(Map0F, 0x81, Mn::Jno).ops([REL16]).o16().not64(),
    Jno_rel32_32 => legacy(Map0F, 0x81, Mn::Jno).ops([REL32]).o32().not64(),
    Jno_rel32_64 => legacy(Map0F, 0x81, Mn::Jno).ops([REL32]).o64().only64().f64(),
    Jb_rel16 => legacy(Map0F, 0x82, Mn::Jb).ops([REL16]).o16().not64(),
    Jb_rel32_32 => legacy(Map0F, 0x82, Mn::Jb).ops([REL32]).o32().not64(),
    Jb_rel32_64 => legacy(Map0F, 0x82, Mn::Jb).ops([REL32]).o64().only64().f64(),
    Jae_rel16 => legacy(Map0F, 0x83, Mn::Jae).ops([REL16]).o16().not64(),
    Jae_rel32_32 => legacy(Map0F, 0x83, Mn::Jae).ops([REL32]).o32().not64(),
    Jae_rel32_64 => legacy(Map0F, 0x83, Mn::Jae).ops([REL32]).o64().only64().f64(),
    Je_rel16 => legacy(Map0F, 0x84, Mn::Je).ops([REL16]).o16().not64(),
    Je_rel32_32 => legacy(Map0F, 0x84, Mn::Je).ops([REL32]).o32().not64(),
    Je_rel32_64 => legacy(Map0F, 0x84, Mn::Je).ops([REL32]).o64().only64().f64(),
    Jne_rel16 => legacy(Map0F, 0x85, Mn::Jne).ops([REL16]).o16().not64(),
    Jne_rel32_32 => legacy(Map0F, 0x85, Mn::Jne).ops([REL32]).o32().not64(),
    Jne_rel32_64 => legacy(Map0F, 0x85, Mn::Jne).ops([REL32]).o64().only64().f64(),
    Jbe_rel16 => legacy(Map0F, 0x86, Mn::Jbe).ops([REL16]).o16().not64(),
    Jbe_rel32_32 => legacy(Map0F, 0x86, Mn::Jbe).ops([REL32]).o32().not64(),
    Jbe_rel32_64 => legacy(Map0F, 0x86, Mn::Jbe).ops([REL32]).o64().only64().f64(),
    Ja_rel16 => legacy(Map0F, 0x87, Mn::Ja).ops([REL16]).o16().not64(),
    Ja_rel32_32 => legacy(Map0F, 0x87, Mn::Ja).ops([REL32]).o32().not64(),
    Ja_rel32_64 => legacy(Map0F, 0x87, Mn::Ja).ops([REL32]).o64().only64().f64(),
    Js_rel16 => legacy(Map0F, 0x88, Mn::Js).ops([REL16]).o16().not64(),
    Js_rel32_32 => legacy(Map0F, 0x88, Mn::Js).ops([REL32]).o32().not64(),
    Js_rel32_64 => legacy(Map0F, 0x88, Mn::Js).ops([REL32]).o64().only64().f64(),
    Jns_rel16 => legacy(Map0F, 0x89, Mn::Jns).ops([REL16]).o16().not64(),
    Jns_rel32_32 => legacy(Map0F, 0x89, Mn::Jns).ops([REL32]).o32().not64(),
    Jns_rel32_64 => legacy(Map0F, 0x89, Mn::Jns).ops([REL32]).o64().only64().f64(),
    Jp_rel16 => legacy(Map0F, 0x8A, Mn::Jp).ops([REL16]).o16().not64(),
    Jp_rel32_32 => legacy(Map0F, 0x8A, Mn::Jp).ops([REL32]).o32().not64(),
    Jp_rel32_64 => legacy(Map0F, 0x8A, Mn::Jp).ops([REL32]).o64().only64().f64(),
    Jnp_rel16 => legacy(Map0F, 0x8B, Mn::Jnp).ops([REL16]).o16().not64(),
    Jnp_rel32_32 => legacy(Map0F, 0x8B, Mn::Jnp).ops([REL32]).o32().not64(),
    Jnp_rel32_64 => legacy(Map0F, 0x8B, Mn::Jnp).ops([REL32]).o64().only64().f64(),
    Jl_rel16 => legacy(Map0F, 0x8C, Mn::Jl).ops([REL16]).o16().not64(),
    Jl_rel32_32 => legacy(Map0F, 0x8C, Mn::Jl).ops([REL32]).o32().not64(),
    Jl_rel32_64 => legacy(Map0F, 0x8C, Mn::Jl).ops([REL32]).o64().only64().f64(),
    Jge_rel16 => legacy(Map0F, 0x8D, Mn::Jge).ops([REL16]).o16().not64(),
    Jge_rel32_32 => legacy(Map0F, 0x8D, Mn::Jge).ops([REL32]).o32().not64(),
    Jge_rel32_64 => legacy(Map0F, 0x8D, Mn::Jge).ops([REL32]).o64().only64().f64(),
    Jle_rel16 => legacy(Map0F, 0x8E, Mn::Jle).ops([REL16]).o16().not64(),
    Jle_rel32_32 => legacy(Map0F, 0x8E, Mn::Jle).ops([REL32]).o32().not64(),
    Jle_rel32_64 => legacy(Map0F, 0x8E, Mn::Jle).ops([REL32]).o64().only64().f64(),
    Jg_rel16 => legacy(Map0F, 0x8F, Mn::Jg).ops([REL16]).o16().not64(),
    Jg_rel32_32 => legacy(Map0F, 0x8F, Mn::Jg).ops([REL32]).o32().not64(),
    Jg_rel32_64 => legacy(Map0F, 0x8F, Mn::Jg).ops([REL32]).o64().only64().f64(),
    Seto_rm8 => legacy(Map0F, 0x90, Mn::Seto).ops([rm(G8)]),
    Setno_rm8 => legacy(Map0F, 0x91, Mn::Setno).ops([rm(G8)]),
    Setb_rm8 => legacy(Map0F, 0x92, Mn::Setb).ops([rm(G8)]),
    Setae_rm8 => legacy(Map0F, 0x93, Mn::Setae).ops([rm(G8)]),
    Sete_rm8 => legacy(Map0F, 0x94, Mn::Sete).ops([rm(G8)]),
    Setne_rm8 => legacy(Map0F, 0x95, Mn::Setne).ops([rm(G8)]),
    Setbe_rm8 => legacy(Map0F, 0x96, Mn::Setbe).ops([rm(G8)]),
    Seta_rm8 => legacy(Map0F, 0x97, Mn::Seta).ops([rm(G8)]),
    Sets_rm8 => legacy(Map0F, 0x98, Mn::Sets).ops([rm(G8)]),
    Setns_rm8 => legacy(Map0F, 0x99, Mn::Setns).ops([rm(G8)]),
    Setp_rm8 => legacy(Map0F, 0x9A, Mn::Setp).ops([rm(G8)]),
    Setnp_rm8 => legacy(Map0F, 0x9B, Mn::Setnp).ops([rm(G8)]),
    Setl_rm8 => legacy(Map0F, 0x9C, Mn::Setl).ops([rm(G8)]),
    Setge_rm8 => legacy(Map0F, 0x9D, Mn::Setge).ops([rm(G8)]),
    Setle_rm8 => legacy(Map0F, 0x9E, Mn::Setle).ops([rm(G8)]),
    Setg_rm8 => legacy(Map0F, 0x9F, Mn::Setg).ops([rm(G8)]),
    Cmovo_r16_rm16 => legacy(Map0F, 0x40, Mn::Cmovo).ops([r(G16), rm(G16)]).o16(),
    Cmovo_r32_rm32 => legacy(Map0F, 0x40, Mn::Cmovo).ops([r(G32), rm(G32)]).o32(),
    Cmovo_r64_rm64 => legacy(Map0F, 0x40, Mn::Cmovo).ops([r(G64), rm(G64)]).o64().only64(),
    Cmovno_r16_rm16 => legacy(Map0F, 0x41, Mn::Cmovno).ops([r(G16), rm(G16)]).o16(),
    Cmovno_r32_rm32 => legacy(Map0F, 0x41, Mn::Cmovno).ops([r(G32), rm(G32)]).o32(),
    Cmovno_r64_rm64 => legacy(Map0F, 0x41, Mn::Cmovno).ops([r(G64), rm(G64)]).o64().only64(),
    Cmovb_r16_rm16 => legacy(Map0F, 0x42, Mn::Cmovb).ops([r(G16), rm(G16)]).o16(),
    Cmovb_r32_rm32 => legacy(Map0F, 0x42, Mn::Cmovb).ops([r(G32), rm(G32)]).o32(),
    Cmovb_r64_rm64 => legacy(Map0F, 0x42, Mn::Cmovb).ops([r(G64), rm(G64)]).o64().only64(),
    Cmovae_r16_rm16 => legacy(Map0F, 0x43, Mn::Cmovae).ops([r(G16), rm(G16)]).o16(),
    Cmovae_r32_rm32 => legacy(Map0F, 0x43, Mn::Cmovae).ops([r(G32), rm(G32)]).o32(),
    Cmovae_r64_rm64 => legacy(Map0F, 0x43, Mn::Cmovae).ops([r(G64), rm(G64)]).o64().only64(),
    Cmove_r16_rm16 => legacy(Map0F, 0x44, Mn::Cmove).ops([r(G16), rm(G16)]).o16(),
    Cmove_r32_rm32 => legacy(Map0F, 0x44, Mn::Cmove).ops([r(G32), rm(G32)]).o32(),
    Cmove_r64_rm64 => legacy(Map0F, 0x44, Mn::Cmove).ops([r(G64), rm(G64)]).o64().only64(),
    Cmovne_r16_rm16 => legacy(Map0F, 0x45, Mn::Cmovne).ops([r(G16), rm(G16)]).o16(),
    Cmovne_r32_rm32 => legacy(Map0F, 0x45, Mn::Cmovne).ops([r(G32), rm(G32)]).o32(),
    Cmovne_r64_rm64 => legacy(Map0F, 0x45, Mn::Cmovne).ops([r(G64), rm(G64)]).o64().only64(),
    Cmovbe_r16_rm16 => legacy(Map0F, 0x46, Mn::Cmovbe).ops([r(G16), rm(G16)]).o16(),
    Cmovbe_r32_rm32 => legacy(Map0F, 0x46, Mn::Cmovbe).ops([r(G32), rm(G32)]).o32(),
    Cmovbe_r64_rm64 => legacy(Map0F, 0x46, Mn::Cmovbe).ops([r(G64), rm(G64)]).o64().only64(),
    Cmova_r16_rm16 => legacy(Map0F, 0x47, Mn::Cmova).ops([r(G16), rm(G16)]).o16(),
    Cmova_r32_rm32 => legacy(Map0F, 0x47, Mn::Cmova).ops([r(G32), rm(G32)]).o32(),
    Cmova_r64_rm64 => legacy(Map0F, 0x47, Mn::Cmova).ops([r(G64), rm(G64)]).o64().only64(),
    Cmovs_r16_rm16 => legacy(Map0F, 0x48, Mn::Cmovs).ops([r(G16), rm(G16)]).o16(),
    Cmovs_r32_rm32 => legacy(Map0F, 0x48, Mn::Cmovs).ops([r(G32), rm(G32)]).o32(),
    Cmovs_r64_rm64 => legacy(Map0F, 0x48, Mn::Cmovs).ops([r(G64), rm(G64)]).o64().only64(),
    Cmovns_r16_rm16 => legacy(Map0F, 0x49, Mn::Cmovns).ops([r(G16), rm(G16)]).o16(),
    Cmovns_r32_rm32 => legacy(Map0F, 0x49, Mn::Cmovns).ops([r(G32), rm(G32)]).o32(),
    Cmovns_r64_rm64 => legacy(Map0F, 0x49, Mn::Cmovns).ops([r(G64), rm(G64)]).o64().only64(),
    Cmovp_r16_rm16 => legacy(Map0F, 0x4A, Mn::Cmovp).ops([r(G16), rm(G16)]).o16(),
    Cmovp_r32_rm32 => legacy(Map0F, 0x4A, Mn::Cmovp).ops([r(G32), rm(G32)]).o32(),
    Cmovp_r64_rm64 => legacy(Map0F, 0x4A, Mn::Cmovp).ops([r(G64), rm(G64)]).o64().only64(),
    Cmovnp_r16_rm16 => legacy(Map0F, 0x4B, Mn::Cmovnp).ops([r(G16), rm(G16)]).o16(),
    Cmovnp_r32_rm32 => legacy(Map0F, 0x4B, Mn::Cmovnp).ops([r(G32), rm(G32)]).o32(),
    Cmovnp_r64_rm64 => legacy(Map0F, 0x4B, Mn::Cmovnp).ops([r(G64), rm(G64)]).o64().only64(),
    Cmovl_r16_rm16 => legacy(Map0F, 0x4C, Mn::Cmovl).ops([r(G16), rm(G16)]).o16(),
    Cmovl_r32_rm32 => legacy(Map0F, 0x4C, Mn::Cmovl).ops([r(G32), rm(G32)]).o32(),
    Cmovl_r64_rm64 => legacy(Map0F, 0x4C, Mn::Cmovl).ops([r(G64), rm(G64)]).o64().only64(),
    Cmovge_r16_rm16 => legacy(Map0F, 0x4D, Mn::Cmovge).ops([r(G16), rm(G16)]).o16(),
    Cmovge_r32_rm32 => legacy(Map0F, 0x4D, Mn::Cmovge).ops([r(G32), rm(G32)]).o32(),
    Cmovge_r64_rm64 => legacy(Map0F, 0x4D, Mn::Cmovge).ops([r(G64), rm(G64)]).o64().only64(),
    Cmovle_r16_rm16 => legacy(Map0F, 0x4E, Mn::Cmovle).ops([r(G16), rm(G16)]).o16(),
    Cmovle_r32_rm32 => legacy(Map0F, 0x4E, Mn::Cmovle).ops([r(G32), rm(G32)]).o32(),
    Cmovle_r64_rm64 => legacy(Map0F, 0x4E, Mn::Cmovle).ops([r(G64), rm(G64)]).o64().only64(),
    Cmovg_r16_rm16 => legacy(Map0F, 0x4F, Mn::Cmovg).ops([r(G16), rm(G16)]).o16(),
    Cmovg_r32_rm32 => legacy(Map0F, 0x4F, Mn::Cmovg).ops([r(G32), rm(G32)]).o32(),
    Cmovg_r64_rm64 => legacy(Map0F, 0x4F, Mn::Cmovg).ops([r(G64), rm(G64)]).o64().only64(),
    Jmp_rel8_16 => legacy(Primary, 0xEB, Mn::Jmp).ops([REL8]).o16().not64(),
    Jmp_rel8_32 => legacy(Primary, 0xEB, Mn::Jmp).ops([REL8]).o32().not64(),
    Jmp_rel8_64 => legacy(Primary, 0xEB, Mn::Jmp).ops([REL8]).o64().only64().f64(),
    Jmp_rel16 => legacy(Primary, 0xE9, Mn::Jmp).ops([REL16]).o16().not64(),
    Jmp_rel32_32 => legacy(Primary, 0xE9, Mn::Jmp).ops([REL32]).o32().not64(),
    Jmp_rel32_64 => legacy(Primary, 0xE9, Mn::Jmp).ops([REL32]).o64().only64().f64(),
    Call_rel16 => legacy(Primary, 0xE8, Mn::Call).ops([REL16]).o16().not64(),
    Call_rel32_32 => legacy(Primary, 0xE8, Mn::Call).ops([REL32]).o32().not64(),
    Call_rel32_64 => legacy(Primary, 0xE8, Mn::Call).ops([REL32]).o64().only64().f64(),
    Jmp_rm16 => legacy(Primary, 0xFF, Mn::Jmp).digit(4).ops([rm(G16)]).o16().not64(),
    Jmp_rm32 => legacy(Primary, 0xFF, Mn::Jmp).digit(4).ops([rm(G32)]).o32().not64(),
    Jmp_rm64 => legacy(Primary, 0xFF, Mn::Jmp).digit(4).ops([rm(G64)]).o64().only64().f64(),
    Jmp_m1616 => legacy(Primary, 0xFF, Mn::Jmp).digit(5).ops([M]).o16(),
    Jmp_m1632 => legacy(Primary, 0xFF, Mn::Jmp).digit(5).ops([M]).o32(),
    Jmp_m1664 => legacy(Primary, 0xFF, Mn::Jmp).digit(5).ops([M]).o64().only64(),
    Call_rm16 => legacy(Primary, 0xFF, Mn::Call).digit(2).ops([rm(G16)]).o16().not64(),
    Call_rm32 => legacy(Primary, 0xFF, Mn::Call).digit(2).ops([rm(G32)]).o32().not64(),
    Call_rm64 => legacy(Primary, 0xFF, Mn::Call).digit(2).ops([rm(G64)]).o64().only64().f64(),
    Call_m1616 => legacy(Primary, 0xFF, Mn::Call).digit(3).ops([M]).o16(),
    Call_m1632 => legacy(Primary, 0xFF, Mn::Call).digit(3).ops([M]).o32(),
    Call_m1664 => legacy(Primary, 0xFF, Mn::Call).digit(3).ops([M]).o64().only64(),
    Jmp_ptr1616 => legacy(Primary, 0xEA, Mn::Jmp).ops([FAR]).o16().not64(),
    Jmp_ptr1632 => legacy(Primary, 0xEA, Mn::Jmp).ops([FAR]).o32().not64(),
    Call_ptr1616 => legacy(Primary, 0x9A, Mn::Call).ops([FAR]).o16().not64(),
    Call_ptr1632 => legacy(Primary, 0x9A, Mn::Call).ops([FAR]).o32().not64(),
    Loopne_rel8_16_CX => legacy(Primary, 0xE0, Mn::Loopne).ops([REL8]).o16().a16().not64(),
    Loopne_rel8_32_CX => legacy(Primary, 0xE0, Mn::Loopne).ops([REL8]).o32().a16().not64(),
    Loopne_rel8_16_ECX => legacy(Primary, 0xE0, Mn::Loopne).ops([REL8]).o16().a32().not64(),
    Loopne_rel8_32_ECX => legacy(Primary, 0xE0, Mn::Loopne).ops([REL8]).o32().a32().not64(),
    Loopne_rel8_64_ECX => legacy(Primary, 0xE0, Mn::Loopne).ops([REL8]).o64().a32().only64().f64(),
    Loopne_rel8_64_RCX => legacy(Primary, 0xE0, Mn::Loopne).ops([REL8]).o64().a64().only64().f64(),
    Loope_rel8_16_CX => legacy(Primary, 0xE1, Mn::Loope).ops([REL8]).o16().a16().not64(),
    Loope_rel8_32_CX => legacy(Primary, 0xE1, Mn::Loope).ops([REL8]).o32().a16().not64(),
    Loope_rel8_16_ECX => legacy(Primary, 0xE1, Mn::Loope).ops([REL8]).o16().a32().not64(),
    Loope_rel8_32_ECX => legacy(Primary, 0xE1, Mn::Loope).ops([REL8]).o32().a32().not64(),
    Loope_rel8_64_ECX => legacy(Primary, 0xE1, Mn::Loope).ops([REL8]).o64().a32().only64().f64(),
    Loope_rel8_64_RCX => legacy(Primary, 0xE1, Mn::Loope).ops([REL8]).o64().a64().only64().f64(),
    Loop_rel8_16_CX => legacy(Primary, 0xE2, Mn::Loop).ops([REL8]).o16().a16().not64(),
    Loop_rel8_32_CX => legacy(Primary, 0xE2, Mn::Loop).ops([REL8]).o32().a16().not64(),
    Loop_rel8_16_ECX => legacy(Primary, 0xE2, Mn::Loop).ops([REL8]).o16().a32().not64(),
    Loop_rel8_32_ECX => legacy(Primary, 0xE2, Mn::Loop).ops([REL8]).o32().a32().not64(),
    Loop_rel8_64_ECX => legacy(Primary, 0xE2, Mn::Loop).ops([REL8]).o64().a32().only64().f64(),
    Loop_rel8_64_RCX => legacy(Primary, 0xE2, Mn::Loop).ops([REL8]).o64().a64().only64().f64(),
    Jcxz_rel8_16 => legacy(Primary, 0xE3, Mn::Jcxz).ops([REL8]).o16().a16().not64(),
    Jcxz_rel8_32 => legacy(Primary, 0xE3, Mn::Jcxz).ops([REL8]).o32().a16().not64(),
    Jecxz_rel8_16 => legacy(Primary, 0xE3, Mn::Jecxz).ops([REL8]).o16().a32().not64(),
    Jecxz_rel8_32 => legacy(Primary, 0xE3, Mn::Jecxz).ops([REL8]).o32().a32().not64(),
    Jecxz_rel8_64 => legacy(Primary, 0xE3, Mn::Jecxz).ops([REL8]).o64().a32().only64().f64(),
    Jrcxz_rel8_64 => legacy(Primary, 0xE3, Mn::Jrcxz).ops([REL8]).o64().a64().only64().f64(),
    Retnw => legacy(Primary, 0xC3, Mn::Ret).o16().not64(),
    Retnd => legacy(Primary, 0xC3, Mn::Ret).o32().not64(),
    Retnq => legacy(Primary, 0xC3, Mn::Ret).o64().only64().f64(),
    Retnw_imm16 => legacy(Primary, 0xC2, Mn::Ret).ops([IW]).o16().not64(),
    Retnd_imm16 => legacy(Primary, 0xC2, Mn::Ret).ops([IW]).o32().not64(),
    Retnq_imm16 => legacy(Primary, 0xC2, Mn::Ret).ops([IW]).o64().only64().f64(),
    Retfw => legacy(Primary, 0xCB, Mn::Retf).o16(),
    Retfd => legacy(Primary, 0xCB, Mn::Retf).o32(),
    Retfq => legacy(Primary, 0xCB, Mn::Retf).o64().only64(),
    Retfw_imm16 => legacy(Primary, 0xCA, Mn::Retf).ops([IW]).o16(),
    Retfd_imm16 => legacy(Primary, 0xCA, Mn::Retf).ops([IW]).o32(),
    Retfq_imm16 => legacy(Primary, 0xCA, Mn::Retf).ops([IW]).o64().only64(),
    Iretw => legacy(Primary, 0xCF, Mn::Iret).o16(),
    Iretd => legacy(Primary, 0xCF, Mn::Iretd).o32(),
    Iretq => legacy(Primary, 0xCF, Mn::Iretq).o64().only64(),
    Enterw_imm16_imm8 => legacy(Primary, 0xC8, Mn::Enter).ops([IW, IB2]).o16(),
    Enterd_imm16_imm8 => legacy(Primary, 0xC8, Mn::Enter).ops([IW, IB2]).o32().not64(),
    Enterq_imm16_imm8 => legacy(Primary, 0xC8, Mn::Enter).ops([IW, IB2]).o64().only64().d64(),
    Leavew => legacy(Primary, 0xC9, Mn::Leave).o16(),
    Leaved => legacy(Primary, 0xC9, Mn::Leave).o32().not64(),
    Leaveq => legacy(Primary, 0xC9, Mn::Leave).o64().only64().d64(),
    Int3 => legacy(Primary, 0xCC, Mn::Int3),
    Int_imm8 => legacy(Primary, 0xCD, Mn::Int).ops([IB]),
    Into => legacy(Primary, 0xCE, Mn::Into).not64(),
    Int1 => legacy(Primary, 0xF1, Mn::Int1),
    Hlt => legacy(Primary, 0xF4, Mn::Hlt),
    Cmc => legacy(Primary, 0xF5, Mn::Cmc),
    Clc => legacy(Primary, 0xF8, Mn::Clc),
    Stc => legacy(Primary, 0xF9, Mn::Stc),
    Cli => legacy(Primary, 0xFA, Mn::Cli),
    Sti => legacy(Primary, 0xFB, Mn::Sti),
    Cld => legacy(Primary, 0xFC, Mn::Cld),
    Std => legacy(Primary, 0xFD, Mn::Std),
    Sahf => legacy(Primary, 0x9E, Mn::Sahf),
    Lahf => legacy(Primary, 0x9F, Mn::Lahf),
    Wait => legacy(Primary, 0x9B, Mn::Wait),
    Xlatb => legacy(Primary, 0xD7, Mn::Xlatb),
    Cbw => legacy(Primary, 0x98, Mn::Cbw).o16(),
    Cwde => legacy(Primary, 0x98, Mn::Cwde).o32(),
    Cdqe => legacy(Primary, 0x98, Mn::Cdqe).o64().only64(),
    Cwd => legacy(Primary, 0x99, Mn::Cwd).o16(),
    Cdq => legacy(Primary, 0x99, Mn::Cdq).o32(),
    Cqo => legacy(Primary, 0x99, Mn::Cqo).o64().only64(),
    Aam_imm8 => legacy(Primary, 0xD4, Mn::Aam).ops([IB]).not64(),
    Aad_imm8 => legacy(Primary, 0xD5, Mn::Aad).ops([IB]).not64(),
    Daa => legacy(Primary, 0x27, Mn::Daa).not64(),
    Das => legacy(Primary, 0x2F, Mn::Das).not64(),
    Aaa => legacy(Primary, 0x37, Mn::Aaa).not64(),
    Aas => legacy(Primary, 0x3F, Mn::Aas).not64(),
    Bound_r16_m1616 => legacy(Primary, 0x62, Mn::Bound).ops([r(G16), M]).o16().not64(),
    Bound_r32_m3232 => legacy(Primary, 0x62, Mn::Bound).ops([r(G32), M]).o32().not64(),
    Les_r16_m1616 => legacy(Primary, 0xC4, Mn::Les).ops([r(G16), M]).o16().not64(),
    Les_r32_m1632 => legacy(Primary, 0xC4, Mn::Les).ops([r(G32), M]).o32().not64(),
    Lds_r16_m1616 => legacy(Primary, 0xC5, Mn::Lds).ops([r(G16), M]).o16().not64(),
    Lds_r32_m1632 => legacy(Primary, 0xC5, Mn::Lds).ops([r(G32), M]).o32().not64(),
    In_AL_imm8 => legacy(Primary, 0xE4, Mn::In).ops([AL, IB]),
    In_AX_imm8 => legacy(Primary, 0xE5, Mn::In).ops([AX, IB]).o16(),
    In_EAX_imm8 => legacy(Primary, 0xE5, Mn::In).ops([EAX, IB]).o32(),
    Out_imm8_AL => legacy(Primary, 0xE6, Mn::Out).ops([IB, AL]),
    Out_imm8_AX => legacy(Primary, 0xE7, Mn::Out).ops([IB, AX]).o16(),
    Out_imm8_EAX => legacy(Primary, 0xE7, Mn::Out).ops([IB, EAX]).o32(),
    In_AL_DX => legacy(Primary, 0xEC, Mn::In).ops([AL, DX]),
    In_AX_DX => legacy(Primary, 0xED, Mn::In).ops([AX, DX]).o16(),
    In_EAX_DX => legacy(Primary, 0xED, Mn::In).ops([EAX, DX]).o32(),
    Out_DX_AL => legacy(Primary, 0xEE, Mn::Out).ops([DX, AL]),
    Out_DX_AX => legacy(Primary, 0xEF, Mn::Out).ops([DX, AX]).o16(),
    Out_DX_EAX => legacy(Primary, 0xEF, Mn::Out).ops([DX, EAX]).o32(),
    Rol_rm8_imm8 => legacy(Primary, 0xC0, Mn::Rol).digit(0).ops([rm(G8), IB]),
    Rol_rm16_imm8 => legacy(Primary, 0xC1, Mn::Rol).digit(0).ops([rm(G16), IB]).o16(),
    Rol_rm32_imm8 => legacy(Primary, 0xC1, Mn::Rol).digit(0).ops([rm(G32), IB]).o32(),
    Rol_rm64_imm8 => legacy(Primary, 0xC1, Mn::Rol).digit(0).ops([rm(G64), IB]).o64().only64(),
    Rol_rm8_1 => legacy(Primary, 0xD0, Mn::Rol).digit(0).ops([rm(G8), IMM1]),
    Rol_rm16_1 => legacy(Primary, 0xD1, Mn::Rol).digit(0).ops([rm(G16), IMM1]).o16(),
    Rol_rm32_1 => legacy(Primary, 0xD1, Mn::Rol).digit(0).ops([rm(G32), IMM1]).o32(),
    Rol_rm64_1 => legacy(Primary, 0xD1, Mn::Rol).digit(0).ops([rm(G64), IMM1]).o64().only64(),
    Rol_rm8_CL => legacy(Primary, 0xD2, Mn::Rol).digit(0).ops([rm(G8), CL]),
    Rol_rm16_CL => legacy(Primary, 0xD3, Mn::Rol).digit(0).ops([rm(G16), CL]).o16(),
    Rol_rm32_CL => legacy(Primary, 0xD3, Mn::Rol).digit(0).ops([rm(G32), CL]).o32(),
    Rol_rm64_CL => legacy(Primary, 0xD3, Mn::Rol).digit(0).ops([rm(G64), CL]).o64().only64(),
    Ror_rm8_imm8 => legacy(Primary, 0xC0, Mn::Ror).digit(1).ops([rm(G8), IB]),
    Ror_rm16_imm8 => legacy(Primary, 0xC1, Mn::Ror).digit(1).ops([rm(G16), IB]).o16(),
    Ror_rm32_imm8 => legacy(Primary, 0xC1, Mn::Ror).digit(1).ops([rm(G32), IB]).o32(),
    Ror_rm64_imm8 => legacy(Primary, 0xC1, Mn::Ror).digit(1).ops([rm(G64), IB]).o64().only64(),
    Ror_rm8_1 => legacy(Primary, 0xD0, Mn::Ror).digit(1).ops([rm(G8), IMM1]),
    Ror_rm16_1 => legacy(Primary, 0xD1, Mn::Ror).digit(1).ops([rm(G16), IMM1]).o16(),
    Ror_rm32_1 => legacy(Primary, 0xD1, Mn::Ror).digit(1).ops([rm(G32), IMM1]).o32(),
    Ror_rm64_1 => legacy(Primary, 0xD1, Mn::Ror).digit(1).ops([rm(G64), IMM1]).o64().only64(),
    Ror_rm8_CL => legacy(Primary, 0xD2, Mn::Ror).digit(1).ops([rm(G8), CL]),
    Ror_rm16_CL => legacy(Primary, 0xD3, Mn::Ror).digit(1).ops([rm(G16), CL]).o16(),
    Ror_rm32_CL => legacy(Primary, 0xD3, Mn::Ror).digit(1).ops([rm(G32), CL]).o32(),
    Ror_rm64_CL => legacy(Primary, 0xD3, Mn::Ror).digit(1).ops([rm(G64), CL]).o64().only64(),
    Rcl_rm8_imm8 => legacy(Primary, 0xC0, Mn::Rcl).digit(2).ops([rm(G8), IB]),
    Rcl_rm16_imm8 => legacy(Primary, 0xC1, Mn::Rcl).digit(2).ops([rm(G16), IB]).o16(),
    Rcl_rm32_imm8 => legacy(Primary, 0xC1, Mn::Rcl).digit(2).ops([rm(G32), IB]).o32(),
    Rcl_rm64_imm8 => legacy(Primary, 0xC1, Mn::Rcl).digit(2).ops([rm(G64), IB]).o64().only64(),
    Rcl_rm8_1 => legacy(Primary, 0xD0, Mn::Rcl).digit(2).ops([rm(G8), IMM1]),
    Rcl_rm16_1 => legacy(Primary, 0xD1, Mn::Rcl).digit(2).ops([rm(G16), IMM1]).o16(),
    Rcl_rm32_1 => legacy(Primary, 0xD1, Mn::Rcl).digit(2).ops([rm(G32), IMM1]).o32(),
    Rcl_rm64_1 => legacy(Primary, 0xD1, Mn::Rcl).digit(2).ops([rm(G64), IMM1]).o64().only64(),
    Rcl_rm8_CL => legacy(Primary, 0xD2, Mn::Rcl).digit(2).ops([rm(G8), CL]),
    Rcl_rm16_CL => legacy(Primary, 0xD3, Mn::Rcl).digit(2).ops([rm(G16), CL]).o16(),
    Rcl_rm32_CL => legacy(Primary, 0xD3, Mn::Rcl).digit(2).ops([rm(G32), CL]).o32(),
    Rcl_rm64_CL => legacy(Primary, 0xD3, Mn::Rcl).digit(2).ops([rm(G64), CL]).o64().only64(),
    Rcr_rm8_imm8 => legacy(Primary, 0xC0, Mn::Rcr).digit(3).ops([rm(G8), IB]),
    Rcr_rm16_imm8 => legacy(Primary, 0xC1, Mn::Rcr).digit(3).ops([rm(G16), IB]).o16(),
    Rcr_rm32_imm8 => legacy(Primary, 0xC1, Mn::Rcr).digit(3).ops([rm(G32), IB]).o32(),
    Rcr_rm64_imm8 => legacy(Primary, 0xC1, Mn::Rcr).digit(3).ops([rm(G64), IB]).o64().only64(),
    Rcr_rm8_1 => legacy(Primary, 0xD0, Mn::Rcr).digit(3).ops([rm(G8), IMM1]),
    Rcr_rm16_1 => legacy(Primary, 0xD1, Mn::Rcr).digit(3).ops([rm(G16), IMM1]).o16(),
    Rcr_rm32_1 => legacy(Primary, 0xD1, Mn::Rcr).digit(3).ops([rm(G32), IMM1]).o32(),
    Rcr_rm64_1 => legacy(Primary, 0xD1, Mn::Rcr).digit(3).ops([rm(G64), IMM1]).o64().only64(),
    Rcr_rm8_CL => legacy(Primary, 0xD2, Mn::Rcr).digit(3).ops([rm(G8), CL]),
    Rcr_rm16_CL => legacy(Primary, 0xD3, Mn::Rcr).digit(3).ops([rm(G16), CL]).o16(),
    Rcr_rm32_CL => legacy(Primary, 0xD3, Mn::Rcr).digit(3).ops([rm(G32), CL]).o32(),
    Rcr_rm64_CL => legacy(Primary, 0xD3, Mn::Rcr).digit(3).ops([rm(G64), CL]).o64().only64(),
    Shl_rm8_imm8 => legacy(Primary, 0xC0, Mn::Shl).digit(4).ops([rm(G8), IB]),
    Shl_rm16_imm8 => legacy(Primary, 0xC1, Mn::Shl).digit(4).ops([rm(G16), IB]).o16(),
    Shl_rm32_imm8 => legacy(Primary, 0xC1, Mn::Shl).digit(4).ops([rm(G32), IB]).o32(),
    Shl_rm64_imm8 => legacy(Primary, 0xC1, Mn::Shl).digit(4).ops([rm(G64), IB]).o64().only64(),
    Shl_rm8_1 => legacy(Primary, 0xD0, Mn::Shl).digit(4).ops([rm(G8), IMM1]),
    Shl_rm16_1 => legacy(Primary, 0xD1, Mn::Shl).digit(4).ops([rm(G16), IMM1]).o16(),
    Shl_rm32_1 => legacy(Primary, 0xD1, Mn::Shl).digit(4).ops([rm(G32), IMM1]).o32(),
    Shl_rm64_1 => legacy(Primary, 0xD1, Mn::Shl).digit(4).ops([rm(G64), IMM1]).o64().only64(),
    Shl_rm8_CL => legacy(Primary, 0xD2, Mn::Shl).digit(4).ops([rm(G8), CL]),
    Shl_rm16_CL => legacy(Primary, 0xD3, Mn::Shl).digit(4).ops([rm(G16), CL]).o16(),
    Shl_rm32_CL => legacy(Primary, 0xD3, Mn::Shl).digit(4).ops([rm(G32), CL]).o32(),
    Shl_rm64_CL => legacy(Primary, 0xD3, Mn::Shl).digit(4).ops([rm(G64), CL]).o64().only64(),
    Shr_rm8_imm8 => legacy(Primary, 0xC0, Mn::Shr).digit(5).ops([rm(G8), IB]),
    Shr_rm16_imm8 => legacy(Primary, 0xC1, Mn::Shr).digit(5).ops([rm(G16), IB]).o16(),
    Shr_rm32_imm8 => legacy(Primary, 0xC1, Mn::Shr).digit(5).ops([rm(G32), IB]).o32(),
    Shr_rm64_imm8 => legacy(Primary, 0xC1, Mn::Shr).digit(5).ops([rm(G64), IB]).o64().only64(),
    Shr_rm8_1 => legacy(Primary, 0xD0, Mn::Shr).digit(5).ops([rm(G8), IMM1]),
    Shr_rm16_1 => legacy(Primary, 0xD1, Mn::Shr).digit(5).ops([rm(G16), IMM1]).o16(),
    Shr_rm32_1 => legacy(Primary, 0xD1, Mn::Shr).digit(5).ops([rm(G32), IMM1]).o32(),
    Shr_rm64_1 => legacy(Primary, 0xD1, Mn::Shr).digit(5).ops([rm(G64), IMM1]).o64().only64(),
    Shr_rm8_CL => legacy(Primary, 0xD2, Mn::Shr).digit(5).ops([rm(G8), CL]),
    Shr_rm16_CL => legacy(Primary, 0xD3, Mn::Shr).digit(5).ops([rm(G16), CL]).o16(),
    Shr_rm32_CL => legacy(Primary, 0xD3, Mn::Shr).digit(5).ops([rm(G32), CL]).o32(),
    Shr_rm64_CL => legacy(Primary, 0xD3, Mn::Shr).digit(5).ops([rm(G64), CL]).o64().only64(),
    Sar_rm8_imm8 => legacy(Primary, 0xC0, Mn::Sar).digit(7).ops([rm(G8), IB]),
    Sar_rm16_imm8 => legacy(Primary, 0xC1, Mn::Sar).digit(7).ops([rm(G16), IB]).o16(),
    Sar_rm32_imm8 => legacy(Primary, 0xC1, Mn::Sar).digit(7).ops([rm(G32), IB]).o32(),
    Sar_rm64_imm8 => legacy(Primary, 0xC1, Mn::Sar).digit(7).ops([rm(G64), IB]).o64().only64(),
    Sar_rm8_1 => legacy(Primary, 0xD0, Mn::Sar).digit(7).ops([rm(G8), IMM1]),
    Sar_rm16_1 => legacy(Primary, 0xD1, Mn::Sar).digit(7).ops([rm(G16), IMM1]).o16(),
    Sar_rm32_1 => legacy(Primary, 0xD1, Mn::Sar).digit(7).ops([rm(G32), IMM1]).o32(),
    Sar_rm64_1 => legacy(Primary, 0xD1, Mn::Sar).digit(7).ops([rm(G64), IMM1]).o64().only64(),
    Sar_rm8_CL => legacy(Primary, 0xD2, Mn::Sar).digit(7).ops([rm(G8), CL]),
    Sar_rm16_CL => legacy(Primary, 0xD3, Mn::Sar).digit(7).ops([rm(G16), CL]).o16(),
    Sar_rm32_CL => legacy(Primary, 0xD3, Mn::Sar).digit(7).ops([rm(G32), CL]).o32(),
    Sar_rm64_CL => legacy(Primary, 0xD3, Mn::Sar).digit(7).ops([rm(G64), CL]).o64().only64(),
    Movsb_m8_m8 => legacy(Primary, 0xA4, Mn::Movsb).ops([DST, SRC]).rep(),
    Movsw_m16_m16 => legacy(Primary, 0xA5, Mn::Movsw).ops([DST, SRC]).o16().rep(),
    Movsd_m32_m32 => legacy(Primary, 0xA5, Mn::Movsd).ops([DST, SRC]).o32().rep(),
    Movsq_m64_m64 => legacy(Primary, 0xA5, Mn::Movsq).ops([DST, SRC]).o64().only64().rep(),
    Cmpsb_m8_m8 => legacy(Primary, 0xA6, Mn::Cmpsb).ops([SRC, DST]).rep(),
    Cmpsw_m16_m16 => legacy(Primary, 0xA7, Mn::Cmpsw).ops([SRC, DST]).o16().rep(),
    Cmpsd_m32_m32 => legacy(Primary, 0xA7, Mn::Cmpsd).ops([SRC, DST]).o32().rep(),
    Cmpsq_m64_m64 => legacy(Primary, 0xA7, Mn::Cmpsq).ops([SRC, DST]).o64().only64().rep(),
    Stosb_m8_AL => legacy(Primary, 0xAA, Mn::Stosb).ops([DST, AL]).rep(),
    Stosw_m16_AX => legacy(Primary, 0xAB, Mn::Stosw).ops([DST, AX]).o16().rep(),
    Stosd_m32_EAX => legacy(Primary, 0xAB, Mn::Stosd).ops([DST, EAX]).o32().rep(),
    Stosq_m64_RAX => legacy(Primary, 0xAB, Mn::Stosq).ops([DST, RAX]).o64().only64().rep(),
    Lodsb_AL_m8 => legacy(Primary, 0xAC, Mn::Lodsb).ops([AL, SRC]).rep(),
    Lodsw_AX_m16 => legacy(Primary, 0xAD, Mn::Lodsw).ops([AX, SRC]).o16().rep(),
    Lodsd_EAX_m32 => legacy(Primary, 0xAD, Mn::Lodsd).ops([EAX, SRC]).o32().rep(),
    Lodsq_RAX_m64 => legacy(Primary, 0xAD, Mn::Lodsq).ops([RAX, SRC]).o64().only64().rep(),
    Scasb_AL_m8 => legacy(Primary, 0xAE, Mn::Scasb).ops([AL, DST]).rep(),
    Scasw_AX_m16 => legacy(Primary, 0xAF, Mn::Scasw).ops([AX, DST]).o16().rep(),
    Scasd_EAX_m32 => legacy(Primary, 0xAF, Mn::Scasd).ops([EAX, DST]).o32().rep(),
    Scasq_RAX_m64 => legacy(Primary, 0xAF, Mn::Scasq).ops([RAX, DST]).o64().only64().rep(),
    Insb_m8_DX => legacy(Primary, 0x6C, Mn::Insb).ops([DST, DX]).rep(),
    Insw_m16_DX => legacy(Primary, 0x6D, Mn::Insw).ops([DST, DX]).o16().rep(),
    Insd_m32_DX => legacy(Primary, 0x6D, Mn::Insd).ops([DST, DX]).o32().rep(),
    Outsb_DX_m8 => legacy(Primary, 0x6E, Mn::Outsb).ops([DX, SRC]).rep(),
    Outsw_DX_m16 => legacy(Primary, 0x6F, Mn::Outsw).ops([DX, SRC]).o16().rep(),
    Outsd_DX_m32 => legacy(Primary, 0x6F, Mn::Outsd).ops([DX, SRC]).o32().rep(),
    Syscall => legacy(Map0F, 0x05, Mn::Syscall),
    Clts => legacy(Map0F, 0x06, Mn::Clts),
    Invd => legacy(Map0F, 0x08, Mn::Invd),
    Wbinvd => legacy(Map0F, 0x09, Mn::Wbinvd),
    Ud2 => legacy(Map0F, 0x0B, Mn::Ud2),
    Femms => legacy(Map0F, 0x0E, Mn::Femms),
    Wrmsr => legacy(Map0F, 0x30, Mn::Wrmsr),
    Rdtsc => legacy(Map0F, 0x31, Mn::Rdtsc),
    Rdmsr => legacy(Map0F, 0x32, Mn::Rdmsr),
    Rdpmc => legacy(Map0F, 0x33, Mn::Rdpmc),
    Sysenter => legacy(Map0F, 0x34, Mn::Sysenter),
    Cpuid => legacy(Map0F, 0xA2, Mn::Cpuid),
    Emms => legacy(Map0F, 0x77, Mn::Emms).np(),
    Xgetbv => legacy(Map0F, 0x01, Mn::Xgetbv).np().digit(2).fixed_rm(0),
    Rdtscp => legacy(Map0F, 0x01, Mn::Rdtscp).np().digit(7).fixed_rm(1),
    Lfence => legacy(Map0F, 0xAE, Mn::Lfence).np().digit(5).fixed_rm(0),
    Mfence => legacy(Map0F, 0xAE, Mn::Mfence).np().digit(6).fixed_rm(0),
    Sfence => legacy(Map0F, 0xAE, Mn::Sfence).np().digit(7).fixed_rm(0),
    Clflush_m8 => legacy(Map0F, 0xAE, Mn::Clflush).np().digit(7).ops([M]),
    Nop_rm16 => legacy(Map0F, 0x1F, Mn::Nop).digit(0).ops([rm(G16)]).o16(),
    Nop_rm32 => legacy(Map0F, 0x1F, Mn::Nop).digit(0).ops([rm(G32)]).o32(),
    Nop_rm64 => legacy(Map0F, 0x1F, Mn::Nop).digit(0).ops([rm(G64)]).o64().only64(),
    Bt_rm16_r16 => legacy(Map0F, 0xA3, Mn::Bt).ops([rm(G16), r(G16)]).o16(),
    Bt_rm32_r32 => legacy(Map0F, 0xA3, Mn::Bt).ops([rm(G32), r(G32)]).o32(),
    Bt_rm64_r64 => legacy(Map0F, 0xA3, Mn::Bt).ops([rm(G64), r(G64)]).o64().only64(),
    Bts_rm16_r16 => legacy(Map0F, 0xAB, Mn::Bts).ops([rm(G16), r(G16)]).o16().lock(),
    Bts_rm32_r32 => legacy(Map0F, 0xAB, Mn::Bts).ops([rm(G32), r(G32)]).o32().lock(),
    Bts_rm64_r64 => legacy(Map0F, 0xAB, Mn::Bts).ops([rm(G64), r(G64)]).o64().only64().lock(),
    Btr_rm16_r16 => legacy(Map0F, 0xB3, Mn::Btr).ops([rm(G16), r(G16)]).o16().lock(),
    Btr_rm32_r32 => legacy(Map0F, 0xB3, Mn::Btr).ops([rm(G32), r(G32)]).o32().lock(),
    Btr_rm64_r64 => legacy(Map0F, 0xB3, Mn::Btr).ops([rm(G64), r(G64)]).o64().only64().lock(),
    Btc_rm16_r16 => legacy(Map0F, 0xBB, Mn::Btc).ops([rm(G16), r(G16)]).o16().lock(),
    Btc_rm32_r32 => legacy(Map0F, 0xBB, Mn::Btc).ops([rm(G32), r(G32)]).o32().lock(),
    Btc_rm64_r64 => legacy(Map0F, 0xBB, Mn::Btc).ops([rm(G64), r(G64)]).o64().only64().lock(),
    Bt_rm16_imm8 => legacy(Map0F, 0xBA, Mn::Bt).digit(4).ops([rm(G16), IB]).o16(),
    Bt_rm32_imm8 => legacy(Map0F, 0xBA, Mn::Bt).digit(4).ops([rm(G32), IB]).o32(),
    Bt_rm64_imm8 => legacy(Map0F, 0xBA, Mn::Bt).digit(4).ops([rm(G64), IB]).o64().only64(),
    Bts_rm16_imm8 => legacy(Map0F, 0xBA, Mn::Bts).digit(5).ops([rm(G16), IB]).o16().lock(),
    Bts_rm32_imm8 => legacy(Map0F, 0xBA, Mn::Bts).digit(5).ops([rm(G32), IB]).o32().lock(),
    Bts_rm64_imm8 => legacy(Map0F, 0xBA, Mn::Bts).digit(5).ops([rm(G64), IB]).o64().only64().lock(),
    Btr_rm16_imm8 => legacy(Map0F, 0xBA, Mn::Btr).digit(6).ops([rm(G16), IB]).o16().lock(),
    Btr_rm32_imm8 => legacy(Map0F, 0xBA, Mn::Btr).digit(6).ops([rm(G32), IB]).o32().lock(),
    Btr_rm64_imm8 => legacy(Map0F, 0xBA, Mn::Btr).digit(6).ops([rm(G64), IB]).o64().only64().lock(),
    Btc_rm16_imm8 => legacy(Map0F, 0xBA, Mn::Btc).digit(7).ops([rm(G16), IB]).o16().lock(),
    Btc_rm32_imm8 => legacy(Map0F, 0xBA, Mn::Btc).digit(7).ops([rm(G32), IB]).o32().lock(),
    Btc_rm64_imm8 => legacy(Map0F, 0xBA, Mn::Btc).digit(7).ops([rm(G64), IB]).o64().only64().lock(),
    Popcnt_r16_rm16 => legacy(Map0F, 0xB8, Mn::Popcnt).pf3().ops([r(G16), rm(G16)]).o16(),
    Popcnt_r32_rm32 => legacy(Map0F, 0xB8, Mn::Popcnt).pf3().ops([r(G32), rm(G32)]).o32(),
    Popcnt_r64_rm64 => legacy(Map0F, 0xB8, Mn::Popcnt).pf3().ops([r(G64), rm(G64)]).o64().only64(),
    Tzcnt_r16_rm16 => legacy(Map0F, 0xBC, Mn::Tzcnt).pf3().ops([r(G16), rm(G16)]).o16(),
    Tzcnt_r32_rm32 => legacy(Map0F, 0xBC, Mn::Tzcnt).pf3().ops([r(G32), rm(G32)]).o32(),
    Tzcnt_r64_rm64 => legacy(Map0F, 0xBC, Mn::Tzcnt).pf3().ops([r(G64), rm(G64)]).o64().only64(),
    Lzcnt_r16_rm16 => legacy(Map0F, 0xBD, Mn::Lzcnt).pf3().ops([r(G16), rm(G16)]).o16(),
    Lzcnt_r32_rm32 => legacy(Map0F, 0xBD, Mn::Lzcnt).pf3().ops([r(G32), rm(G32)]).o32(),
    Lzcnt_r64_rm64 => legacy(Map0F, 0xBD, Mn::Lzcnt).pf3().ops([r(G64), rm(G64)]).o64().only64(),
    Bsf_r16_rm16 => legacy(Map0F, 0xBC, Mn::Bsf).ops([r(G16), rm(G16)]).o16(),
    Bsf_r32_rm32 => legacy(Map0F, 0xBC, Mn::Bsf).ops([r(G32), rm(G32)]).o32(),
    Bsf_r64_rm64 => legacy(Map0F, 0xBC, Mn::Bsf).ops([r(G64), rm(G64)]).o64().only64(),
    Bsr_r16_rm16 => legacy(Map0F, 0xBD, Mn::Bsr).ops([r(G16), rm(G16)]).o16(),
    Bsr_r32_rm32 => legacy(Map0F, 0xBD, Mn::Bsr).ops([r(G32), rm(G32)]).o32(),
    Bsr_r64_rm64 => legacy(Map0F, 0xBD, Mn::Bsr).ops([r(G64), rm(G64)]).o64().only64(),
    Xadd_rm8_r8 => legacy(Map0F, 0xC0, Mn::Xadd).ops([rm(G8), r(G8)]).lock(),
    Xadd_rm16_r16 => legacy(Map0F, 0xC1, Mn::Xadd).ops([rm(G16), r(G16)]).o16().lock(),
    Xadd_rm32_r32 => legacy(Map0F, 0xC1, Mn::Xadd).ops([rm(G32), r(G32)]).o32().lock(),
    Xadd_rm64_r64 => legacy(Map0F, 0xC1, Mn::Xadd).ops([rm(G64), r(G64)]).o64().only64().lock(),
    Cmpxchg_rm8_r8 => legacy(Map0F, 0xB0, Mn::Cmpxchg).ops([rm(G8), r(G8)]).lock(),
    Cmpxchg_rm16_r16 => legacy(Map0F, 0xB1, Mn::Cmpxchg).ops([rm(G16), r(G16)]).o16().lock(),
    Cmpxchg_rm32_r32 => legacy(Map0F, 0xB1, Mn::Cmpxchg).ops([rm(G32), r(G32)]).o32().lock(),
    Cmpxchg_rm64_r64 => legacy(Map0F, 0xB1, Mn::Cmpxchg).ops([rm(G64), r(G64)]).o64().only64().lock(),
    Cmpxchg8b_m64 => legacy(Map0F, 0xC7, Mn::Cmpxchg8b).digit(1).ops([M]).w0().lock(),
    Cmpxchg16b_m128 => legacy(Map0F, 0xC7, Mn::Cmpxchg16b).digit(1).ops([M]).w1().only64().lock(),
    Bswap_r32 => legacy(Map0F, 0xC8, Mn::Bswap).ops([o(G32)]).o32(),
    Bswap_r64 => legacy(Map0F, 0xC8, Mn::Bswap).ops([o(G64)]).o64().only64(),
    Shld_rm16_r16_imm8 => legacy(Map0F, 0xA4, Mn::Shld).ops([rm(G16), r(G16), IB]).o16(),
    Shld_rm16_r16_CL => legacy(Map0F, 0xA5, Mn::Shld).ops([rm(G16), r(G16), CL]).o16(),
    Shld_rm32_r32_imm8 => legacy(Map0F, 0xA4, Mn::Shld).ops([rm(G32), r(G32), IB]).o32(),
    Shld_rm32_r32_CL => legacy(Map0F, 0xA5, Mn::Shld).ops([rm(G32), r(G32), CL]).o32(),
    Shld_rm64_r64_imm8 => legacy(Map0F, 0xA4, Mn::Shld).ops([rm(G64), r(G64), IB]).o64().only64(),
    Shld_rm64_r64_CL => legacy(Map0F, 0xA5, Mn::Shld).ops([rm(G64), r(G64), CL]).o64().only64(),
    Shrd_rm16_r16_imm8 => legacy(Map0F, 0xAC, Mn::Shrd).ops([rm(G16), r(G16), IB]).o16(),
    Shrd_rm16_r16_CL => legacy(Map0F, 0xAD, Mn::Shrd).ops([rm(G16), r(G16), CL]).o16(),
    Shrd_rm32_r32_imm8 => legacy(Map0F, 0xAC, Mn::Shrd).ops([rm(G32), r(G32), IB]).o32(),
    Shrd_rm32_r32_CL => legacy(Map0F, 0xAD, Mn::Shrd).ops([rm(G32), r(G32), CL]).o32(),
    Shrd_rm64_r64_imm8 => legacy(Map0F, 0xAC, Mn::Shrd).ops([rm(G64), r(G64), IB]).o64().only64(),
    Shrd_rm64_r64_CL => legacy(Map0F, 0xAD, Mn::Shrd).ops([rm(G64), r(G64), CL]).o64().only64(),
    Crc32_r32_rm8 => legacy(Map0F38, 0xF0, Mn::Crc32).pf2().ops([r(G32), rm(G8)]).w0(),
    Crc32_r64_rm8 => legacy(Map0F38, 0xF0, Mn::Crc32).pf2().ops([r(G64), rm(G8)]).w1().only64(),
    Crc32_r32_rm16 => legacy(Map0F38, 0xF1, Mn::Crc32).pf2().ops([r(G32), rm(G16)]).o16(),
    Crc32_r32_rm32 => legacy(Map0F38, 0xF1, Mn::Crc32).pf2().ops([r(G32), rm(G32)]).o32(),
    Crc32_r64_rm64 => legacy(Map0F38, 0xF1, Mn::Crc32).pf2().ops([r(G64), rm(G64)]).o64().only64(),
    Movbe_r16_m16 => legacy(Map0F38, 0xF0, Mn::Movbe).np().ops([r(G16), M]).o16(),
    Movbe_r32_m32 => legacy(Map0F38, 0xF0, Mn::Movbe).np().ops([r(G32), M]).o32(),
    Movbe_r64_m64 => legacy(Map0F38, 0xF0, Mn::Movbe).np().ops([r(G64), M]).o64().only64(),
    Movbe_m16_r16 => legacy(Map0F38, 0xF1, Mn::Movbe).np().ops([M, r(G16)]).o16(),
    Movbe_m32_r32 => legacy(Map0F38, 0xF1, Mn::Movbe).np().ops([M, r(G32)]).o32(),
    Movbe_m64_r64 => legacy(Map0F38, 0xF1, Mn::Movbe).np().ops([M, r(G64)]).o64().only64(),
    Movups_xmm_xmmm128 => legacy(Map0F, 0x10, Mn::Movups).np().ops([r(XMM), rm(XMM)]),
    Movupd_xmm_xmmm128 => legacy(Map0F, 0x10, Mn::Movupd).p66().ops([r(XMM), rm(XMM)]),
    Movss_xmm_xmmm32 => legacy(Map0F, 0x10, Mn::Movss).pf3().ops([r(XMM), rm(XMM)]),
    Movsd_xmm_xmmm64 => legacy(Map0F, 0x10, Mn::Movsd).pf2().ops([r(XMM), rm(XMM)]),
    Movups_xmmm128_xmm => legacy(Map0F, 0x11, Mn::Movups).np().ops([rm(XMM), r(XMM)]),
    Movupd_xmmm128_xmm => legacy(Map0F, 0x11, Mn::Movupd).p66().ops([rm(XMM), r(XMM)]),
    Movss_xmmm32_xmm => legacy(Map0F, 0x11, Mn::Movss).pf3().ops([rm(XMM), r(XMM)]),
    Movsd_xmmm64_xmm => legacy(Map0F, 0x11, Mn::Movsd).pf2().ops([rm(XMM), r(XMM)]),
    Movaps_xmm_xmmm128 => legacy(Map0F, 0x28, Mn::Movaps).np().ops([r(XMM), rm(XMM)]),
    Movapd_xmm_xmmm128 => legacy(Map0F, 0x28, Mn::Movapd).p66().ops([r(XMM), rm(XMM)]),
    Movaps_xmmm128_xmm => legacy(Map0F, 0x29, Mn::Movaps).np().ops([rm(XMM), r(XMM)]),
    Movapd_xmmm128_xmm => legacy(Map0F, 0x29, Mn::Movapd).p66().ops([rm(XMM), r(XMM)]),
    Sqrtps_xmm_xmmm128 => legacy(Map0F, 0x51, Mn::Sqrtps).np().ops([r(XMM), rm(XMM)]),
    Sqrtpd_xmm_xmmm128 => legacy(Map0F, 0x51, Mn::Sqrtpd).p66().ops([r(XMM), rm(XMM)]),
    Sqrtss_xmm_xmmm32 => legacy(Map0F, 0x51, Mn::Sqrtss).pf3().ops([r(XMM), rm(XMM)]),
    Sqrtsd_xmm_xmmm64 => legacy(Map0F, 0x51, Mn::Sqrtsd).pf2().ops([r(XMM), rm(XMM)]),
    Andps_xmm_xmmm128 => legacy(Map0F, 0x54, Mn::Andps).np().ops([r(XMM), rm(XMM)]),
    Andpd_xmm_xmmm128 => legacy(Map0F, 0x54, Mn::Andpd).p66().ops([r(XMM), rm(XMM)]),
    Xorps_xmm_xmmm128 => legacy(Map0F, 0x57, Mn::Xorps).np().ops([r(XMM), rm(XMM)]),
    Xorpd_xmm_xmmm128 => legacy(Map0F, 0x57, Mn::Xorpd).p66().ops([r(XMM), rm(XMM)]),
    Addps_xmm_xmmm128 => legacy(Map0F, 0x58, Mn::Addps).np().ops([r(XMM), rm(XMM)]),
    Addpd_xmm_xmmm128 => legacy(Map0F, 0x58, Mn::Addpd).p66().ops([r(XMM), rm(XMM)]),
    Addss_xmm_xmmm32 => legacy(Map0F, 0x58, Mn::Addss).pf3().ops([r(XMM), rm(XMM)]),
    Addsd_xmm_xmmm64 => legacy(Map0F, 0x58, Mn::Addsd).pf2().ops([r(XMM), rm(XMM)]),
    Mulps_xmm_xmmm128 => legacy(Map0F, 0x59, Mn::Mulps).np().ops([r(XMM), rm(XMM)]),
    Mulpd_xmm_xmmm128 => legacy(Map0F, 0x59, Mn::Mulpd).p66().ops([r(XMM), rm(XMM)]),
    Mulss_xmm_xmmm32 => legacy(Map0F, 0x59, Mn::Mulss).pf3().ops([r(XMM), rm(XMM)]),
    Mulsd_xmm_xmmm64 => legacy(Map0F, 0x59, Mn::Mulsd).pf2().ops([r(XMM), rm(XMM)]),
    Subps_xmm_xmmm128 => legacy(Map0F, 0x5C, Mn::Subps).np().ops([r(XMM), rm(XMM)]),
    Subpd_xmm_xmmm128 => legacy(Map0F, 0x5C, Mn::Subpd).p66().ops([r(XMM), rm(XMM)]),
    Subss_xmm_xmmm32 => legacy(Map0F, 0x5C, Mn::Subss).pf3().ops([r(XMM), rm(XMM)]),
    Subsd_xmm_xmmm64 => legacy(Map0F, 0x5C, Mn::Subsd).pf2().ops([r(XMM), rm(XMM)]),
    Divps_xmm_xmmm128 => legacy(Map0F, 0x5E, Mn::Divps).np().ops([r(XMM), rm(XMM)]),
    Divpd_xmm_xmmm128 => legacy(Map0F, 0x5E, Mn::Divpd).p66().ops([r(XMM), rm(XMM)]),
    Divss_xmm_xmmm32 => legacy(Map0F, 0x5E, Mn::Divss).pf3().ops([r(XMM), rm(XMM)]),
    Divsd_xmm_xmmm64 => legacy(Map0F, 0x5E, Mn::Divsd).pf2().ops([r(XMM), rm(XMM)]),
    Cvtsi2ss_xmm_rm32 => legacy(Map0F, 0x2A, Mn::Cvtsi2ss).pf3().ops([r(XMM), rm(G32)]).w0(),
    Cvtsi2ss_xmm_rm64 => legacy(Map0F, 0x2A, Mn::Cvtsi2ss).pf3().ops([r(XMM), rm(G64)]).w1().only64(),
    Cvtsi2sd_xmm_rm32 => legacy(Map0F, 0x2A, Mn::Cvtsi2sd).pf2().ops([r(XMM), rm(G32)]).w0(),
    Cvtsi2sd_xmm_rm64 => legacy(Map0F, 0x2A, Mn::Cvtsi2sd).pf2().ops([r(XMM), rm(G64)]).w1().only64(),
    Cvttss2si_r32_xmmm32 => legacy(Map0F, 0x2C, Mn::Cvttss2si).pf3().ops([r(G32), rm(XMM)]).w0(),
    Cvttss2si_r64_xmmm32 => legacy(Map0F, 0x2C, Mn::Cvttss2si).pf3().ops([r(G64), rm(XMM)]).w1().only64(),
    Cvttsd2si_r32_xmmm64 => legacy(Map0F, 0x2C, Mn::Cvttsd2si).pf2().ops([r(G32), rm(XMM)]).w0(),
    Cvttsd2si_r64_xmmm64 => legacy(Map0F, 0x2C, Mn::Cvttsd2si).pf2().ops([r(G64), rm(XMM)]).w1().only64(),
    Cmpps_xmm_xmmm128_imm8 => legacy(Map0F, 0xC2, Mn::Cmpps).np().ops([r(XMM), rm(XMM), IB]),
    Cmppd_xmm_xmmm128_imm8 => legacy(Map0F, 0xC2, Mn::Cmppd).p66().ops([r(XMM), rm(XMM), IB]),
    Cmpss_xmm_xmmm32_imm8 => legacy(Map0F, 0xC2, Mn::Cmpss).pf3().ops([r(XMM), rm(XMM), IB]),
    Cmpsd_xmm_xmmm64_imm8 => legacy(Map0F, 0xC2, Mn::Cmpsd).pf2().ops([r(XMM), rm(XMM), IB]),
    Movd_mm_rm32 => legacy(Map0F, 0x6E, Mn::Movd).np().ops([r(MM), rm(G32)]).w0(),
    Movq_mm_rm64 => legacy(Map0F, 0x6E, Mn::Movq).np().ops([r(MM), rm(G64)]).w1().only64(),
    Movd_xmm_rm32 => legacy(Map0F, 0x6E, Mn::Movd).p66().ops([r(XMM), rm(G32)]).w0(),
    Movq_xmm_rm64 => legacy(Map0F, 0x6E, Mn::Movq).p66().ops([r(XMM), rm(G64)]).w1().only64(),
    Movd_rm32_mm => legacy(Map0F, 0x7E, Mn::Movd).np().ops([rm(G32), r(MM)]).w0(),
    Movq_rm64_mm => legacy(Map0F, 0x7E, Mn::Movq).np().ops([rm(G64), r(MM)]).w1().only64(),
    Movd_rm32_xmm => legacy(Map0F, 0x7E, Mn::Movd).p66().ops([rm(G32), r(XMM)]).w0(),
    Movq_rm64_xmm => legacy(Map0F, 0x7E, Mn::Movq).p66().ops([rm(G64), r(XMM)]).w1().only64(),
    Movq_xmm_xmmm64 => legacy(Map0F, 0x7E, Mn::Movq).pf3().ops([r(XMM), rm(XMM)]),
    Movq_mm_mmm64 => legacy(Map0F, 0x6F, Mn::Movq).np().ops([r(MM), rm(MM)]),
    Movdqa_xmm_xmmm128 => legacy(Map0F, 0x6F, Mn::Movdqa).p66().ops([r(XMM), rm(XMM)]),
    Movdqu_xmm_xmmm128 => legacy(Map0F, 0x6F, Mn::Movdqu).pf3().ops([r(XMM), rm(XMM)]),
    Movq_mmm64_mm => legacy(Map0F, 0x7F, Mn::Movq).np().ops([rm(MM), r(MM)]),
    Movdqa_xmmm128_xmm => legacy(Map0F, 0x7F, Mn::Movdqa).p66().ops([rm(XMM), r(XMM)]),
    Movdqu_xmmm128_xmm => legacy(Map0F, 0x7F, Mn::Movdqu).pf3().ops([rm(XMM), r(XMM)]),
    Pshufw_mm_mmm64_imm8 => legacy(Map0F, 0x70, Mn::Pshufw).np().ops([r(MM), rm(MM), IB]),
    Pshufd_xmm_xmmm128_imm8 => legacy(Map0F, 0x70, Mn::Pshufd).p66().ops([r(XMM), rm(XMM), IB]),
    Pshufhw_xmm_xmmm128_imm8 => legacy(Map0F, 0x70, Mn::Pshufhw).pf3().ops([r(XMM), rm(XMM), IB]),
    Pshuflw_xmm_xmmm128_imm8 => legacy(Map0F, 0x70, Mn::Pshuflw).pf2().ops([r(XMM), rm(XMM), IB]),
    Pcmpeqb_mm_mmm64 => legacy(Map0F, 0x74, Mn::Pcmpeqb).np().ops([r(MM), rm(MM)]),
    Pcmpeqb_xmm_xmmm128 => legacy(Map0F, 0x74, Mn::Pcmpeqb).p66().ops([r(XMM), rm(XMM)]),
    Paddq_mm_mmm64 => legacy(Map0F, 0xD4, Mn::Paddq).np().ops([r(MM), rm(MM)]),
    Paddq_xmm_xmmm128 => legacy(Map0F, 0xD4, Mn::Paddq).p66().ops([r(XMM), rm(XMM)]),
    Pxor_mm_mmm64 => legacy(Map0F, 0xEF, Mn::Pxor).np().ops([r(MM), rm(MM)]),
    Pxor_xmm_xmmm128 => legacy(Map0F, 0xEF, Mn::Pxor).p66().ops([r(XMM), rm(XMM)]),
    Paddb_mm_mmm64 => legacy(Map0F, 0xFC, Mn::Paddb).np().ops([r(MM), rm(MM)]),
    Paddb_xmm_xmmm128 => legacy(Map0F, 0xFC, Mn::Paddb).p66().ops([r(XMM), rm(XMM)]),
    Paddd_mm_mmm64 => legacy(Map0F, 0xFE, Mn::Paddd).np().ops([r(MM), rm(MM)]),
    Paddd_xmm_xmmm128 => legacy(Map0F, 0xFE, Mn::Paddd).p66().ops([r(XMM), rm(XMM)]),
    Pmovmskb_r32_xmm => legacy(Map0F, 0xD7, Mn::Pmovmskb).p66().ops([r(G32), rr(XMM)]),
    Pshufb_mm_mmm64 => legacy(Map0F38, 0x00, Mn::Pshufb).np().ops([r(MM), rm(MM)]),
    Pshufb_xmm_xmmm128 => legacy(Map0F38, 0x00, Mn::Pshufb).p66().ops([r(XMM), rm(XMM)]),
    Roundss_xmm_xmmm32_imm8 => legacy(Map0F3A, 0x0A, Mn::Roundss).p66().ops([r(XMM), rm(XMM), IB]),
    Palignr_mm_mmm64_imm8 => legacy(Map0F3A, 0x0F, Mn::Palignr).np().ops([r(MM), rm(MM), IB]),
    Palignr_xmm_xmmm128_imm8 => legacy(Map0F3A, 0x0F, Mn::Palignr).p66().ops([r(XMM), rm(XMM), IB]),
    Pextrd_rm32_xmm_imm8 => legacy(Map0F3A, 0x16, Mn::Pextrd).p66().ops([rm(G32), r(XMM), IB]).w0(),
    Pextrq_rm64_xmm_imm8 => legacy(Map0F3A, 0x16, Mn::Pextrq).p66().ops([rm(G64), r(XMM), IB]).w1().only64(),
    Pinsrd_xmm_rm32_imm8 => legacy(Map0F3A, 0x22, Mn::Pinsrd).p66().ops([r(XMM), rm(G32), IB]).w0(),
    Pinsrq_xmm_rm64_imm8 => legacy(Map0F3A, 0x22, Mn::Pinsrq).p66().ops([r(XMM), rm(G64), IB]).w1().only64(),
    Bndmov_bnd_bndm64 => legacy(Map0F, 0x1A, Mn::Bndmov).p66().ops([r(BND), rm(BND)]).not64().no_a16(),
    Bndmov_bnd_bndm128 => legacy(Map0F, 0x1A, Mn::Bndmov).p66().ops([r(BND), rm(BND)]).only64(),
    Bndcl_bnd_rm32 => legacy(Map0F, 0x1A, Mn::Bndcl).pf3().ops([r(BND), rm(G32)]).not64().no_a16(),
    Bndcl_bnd_rm64 => legacy(Map0F, 0x1A, Mn::Bndcl).pf3().ops([r(BND), rm(G64)]).only64(),
    Bndcu_bnd_rm32 => legacy(Map0F, 0x1A, Mn::Bndcu).pf2().ops([r(BND), rm(G32)]).not64().no_a16(),
    Bndcu_bnd_rm64 => legacy(Map0F, 0x1A, Mn::Bndcu).pf2().ops([r(BND), rm(G64)]).only64(),
    Bndmov_bndm64_bnd => legacy(Map0F, 0x1B, Mn::Bndmov).p66().ops([rm(BND), r(BND)]).not64().no_a16(),
    Bndmov_bndm128_bnd => legacy(Map0F, 0x1B, Mn::Bndmov).p66().ops([rm(BND), r(BND)]).only64(),
    Fadd_m32fp => legacy(Primary, 0xD8, Mn::Fadd).digit(0).ops([M]),
    Fmul_m32fp => legacy(Primary, 0xD8, Mn::Fmul).digit(1).ops([M]),
    Fadd_st0_sti => legacy(Primary, 0xD8, Mn::Fadd).digit(0).ops([ST0, rr(STI)]),
    Fmul_st0_sti => legacy(Primary, 0xD8, Mn::Fmul).digit(1).ops([ST0, rr(STI)]),
    Fld_m32fp => legacy(Primary, 0xD9, Mn::Fld).digit(0).ops([M]),
    Fst_m32fp => legacy(Primary, 0xD9, Mn::Fst).digit(2).ops([M]),
    Fstp_m32fp => legacy(Primary, 0xD9, Mn::Fstp).digit(3).ops([M]),
    Fld_sti => legacy(Primary, 0xD9, Mn::Fld).digit(0).ops([rr(STI)]),
    Fxch_st0_sti => legacy(Primary, 0xD9, Mn::Fxch).digit(1).ops([ST0, rr(STI)]),
    Fnop => legacy(Primary, 0xD9, Mn::Fnop).digit(2).fixed_rm(0),
    Fld1 => legacy(Primary, 0xD9, Mn::Fld1).digit(5).fixed_rm(0),
    Fldz => legacy(Primary, 0xD9, Mn::Fldz).digit(5).fixed_rm(6),
    Fild_m32int => legacy(Primary, 0xDB, Mn::Fild).digit(0).ops([M]),
    Fistp_m32int => legacy(Primary, 0xDB, Mn::Fistp).digit(3).ops([M]),
    Fninit => legacy(Primary, 0xDB, Mn::Fninit).digit(4).fixed_rm(3),
    Fadd_sti_st0 => legacy(Primary, 0xDC, Mn::Fadd).digit(0).ops([rr(STI), ST0]),
    Fld_m64fp => legacy(Primary, 0xDD, Mn::Fld).digit(0).ops([M]),
    Fstp_m64fp => legacy(Primary, 0xDD, Mn::Fstp).digit(3).ops([M]),
    Fnstsw_m2byte => legacy(Primary, 0xDD, Mn::Fnstsw).digit(7).ops([M]),
    Fstp_sti => legacy(Primary, 0xDD, Mn::Fstp).digit(3).ops([rr(STI)]),
    Faddp_sti_st0 => legacy(Primary, 0xDE, Mn::Faddp).digit(0).ops([rr(STI), ST0]),
    Fnstsw_AX => legacy(Primary, 0xDF, Mn::Fnstsw).digit(4).fixed_rm(0).ops([AX]),
    D3NOW_Pi2fd_mm_mmm64 => now3d(0x0D, Mn::Pi2fd).ops([r(MM), rm(MM)]),
    D3NOW_Pf2id_mm_mmm64 => now3d(0x1D, Mn::Pf2id).ops([r(MM), rm(MM)]),
    D3NOW_Pfmin_mm_mmm64 => now3d(0x94, Mn::Pfmin).ops([r(MM), rm(MM)]),
    D3NOW_Pfrcp_mm_mmm64 => now3d(0x96, Mn::Pfrcp).ops([r(MM), rm(MM)]),
    D3NOW_Pfsub_mm_mmm64 => now3d(0x9A, Mn::Pfsub).ops([r(MM), rm(MM)]),
    D3NOW_Pfadd_mm_mmm64 => now3d(0x9E, Mn::Pfadd).ops([r(MM), rm(MM)]),
    D3NOW_Pfmax_mm_mmm64 => now3d(0xA4, Mn::Pfmax).ops([r(MM), rm(MM)]),
    D3NOW_Pfcmpeq_mm_mmm64 => now3d(0xB0, Mn::Pfcmpeq).ops([r(MM), rm(MM)]),
    D3NOW_Pfmul_mm_mmm64 => now3d(0xB4, Mn::Pfmul).ops([r(MM), rm(MM)]),
    D3NOW_Pavgusb_mm_mmm64 => now3d(0xBF, Mn::Pavgusb).ops([r(MM), rm(MM)]),
    VEX_Vmovups_xmm_xmmm128 => vex(Map0F, 0x10, Mn::Vmovups).np().l128().ops([r(XMM), rm(XMM)]),
    VEX_Vmovups_ymm_ymmm256 => vex(Map0F, 0x10, Mn::Vmovups).np().l256().ops([r(YMM), rm(YMM)]),
    VEX_Vmovups_xmmm128_xmm => vex(Map0F, 0x11, Mn::Vmovups).np().l128().ops([rm(XMM), r(XMM)]),
    VEX_Vmovups_ymmm256_ymm => vex(Map0F, 0x11, Mn::Vmovups).np().l256().ops([rm(YMM), r(YMM)]),
    VEX_Vmovdqu_xmm_xmmm128 => vex(Map0F, 0x6F, Mn::Vmovdqu).pf3().l128().ops([r(XMM), rm(XMM)]),
    VEX_Vmovdqu_ymm_ymmm256 => vex(Map0F, 0x6F, Mn::Vmovdqu).pf3().l256().ops([r(YMM), rm(YMM)]),
    VEX_Vmovdqu_xmmm128_xmm => vex(Map0F, 0x7F, Mn::Vmovdqu).pf3().l128().ops([rm(XMM), r(XMM)]),
    VEX_Vmovdqu_ymmm256_ymm => vex(Map0F, 0x7F, Mn::Vmovdqu).pf3().l256().ops([rm(YMM), r(YMM)]),
    VEX_Vmovdqa_xmm_xmmm128 => vex(Map0F, 0x6F, Mn::Vmovdqa).p66().l128().ops([r(XMM), rm(XMM)]),
    VEX_Vmovdqa_ymm_ymmm256 => vex(Map0F, 0x6F, Mn::Vmovdqa).p66().l256().ops([r(YMM), rm(YMM)]),
    VEX_Vmovdqa_xmmm128_xmm => vex(Map0F, 0x7F, Mn::Vmovdqa).p66().l128().ops([rm(XMM), r(XMM)]),
    VEX_Vmovdqa_ymmm256_ymm => vex(Map0F, 0x7F, Mn::Vmovdqa).p66().l256().ops([rm(YMM), r(YMM)]),
    VEX_Vaddps_xmm_xmm_xmmm128 => vex(Map0F, 0x58, Mn::Vaddps).np().l128().ops([r(XMM), v(XMM), rm(XMM)]),
    VEX_Vaddps_ymm_ymm_ymmm256 => vex(Map0F, 0x58, Mn::Vaddps).np().l256().ops([r(YMM), v(YMM), rm(YMM)]),
    VEX_Vaddpd_xmm_xmm_xmmm128 => vex(Map0F, 0x58, Mn::Vaddpd).p66().l128().ops([r(XMM), v(XMM), rm(XMM)]),
    VEX_Vaddpd_ymm_ymm_ymmm256 => vex(Map0F, 0x58, Mn::Vaddpd).p66().l256().ops([r(YMM), v(YMM), rm(YMM)]),
    VEX_Vmulps_xmm_xmm_xmmm128 => vex(Map0F, 0x59, Mn::Vmulps).np().l128().ops([r(XMM), v(XMM), rm(XMM)]),
    VEX_Vmulps_ymm_ymm_ymmm256 => vex(Map0F, 0x59, Mn::Vmulps).np().l256().ops([r(YMM), v(YMM), rm(YMM)]),
    VEX_Vsubps_xmm_xmm_xmmm128 => vex(Map0F, 0x5C, Mn::Vsubps).np().l128().ops([r(XMM), v(XMM), rm(XMM)]),
    VEX_Vsubps_ymm_ymm_ymmm256 => vex(Map0F, 0x5C, Mn::Vsubps).np().l256().ops([r(YMM), v(YMM), rm(YMM)]),
    VEX_Vandps_xmm_xmm_xmmm128 => vex(Map0F, 0x54, Mn::Vandps).np().l128().ops([r(XMM), v(XMM), rm(XMM)]),
    VEX_Vandps_ymm_ymm_ymmm256 => vex(Map0F, 0x54, Mn::Vandps).np().l256().ops([r(YMM), v(YMM), rm(YMM)]),
    VEX_Vxorps_xmm_xmm_xmmm128 => vex(Map0F, 0x57, Mn::Vxorps).np().l128().ops([r(XMM), v(XMM), rm(XMM)]),
    VEX_Vxorps_ymm_ymm_ymmm256 => vex(Map0F, 0x57, Mn::Vxorps).np().l256().ops([r(YMM), v(YMM), rm(YMM)]),
    VEX_Vpaddd_xmm_xmm_xmmm128 => vex(Map0F, 0xFE, Mn::Vpaddd).p66().l128().ops([r(XMM), v(XMM), rm(XMM)]),
    VEX_Vpaddd_ymm_ymm_ymmm256 => vex(Map0F, 0xFE, Mn::Vpaddd).p66().l256().ops([r(YMM), v(YMM), rm(YMM)]),
    VEX_Vpxor_xmm_xmm_xmmm128 => vex(Map0F, 0xEF, Mn::Vpxor).p66().l128().ops([r(XMM), v(XMM), rm(XMM)]),
    VEX_Vpxor_ymm_ymm_ymmm256 => vex(Map0F, 0xEF, Mn::Vpxor).p66().l256().ops([r(YMM), v(YMM), rm(YMM)]),
    VEX_Vpshufb_xmm_xmm_xmmm128 => vex(Map0F38, 0x00, Mn::Vpshufb).p66().l128().ops([r(XMM), v(XMM), rm(XMM)]),
    VEX_Vpshufb_ymm_ymm_ymmm256 => vex(Map0F38, 0x00, Mn::Vpshufb).p66().l256().ops([r(YMM), v(YMM), rm(YMM)]),
    VEX_Vfmadd231ps_xmm_xmm_xmmm128 => vex(Map0F38, 0xB8, Mn::Vfmadd231ps).p66().l128().w0().ops([r(XMM), v(XMM), rm(XMM)]),
    VEX_Vfmadd231ps_ymm_ymm_ymmm256 => vex(Map0F38, 0xB8, Mn::Vfmadd231ps).p66().l256().w0().ops([r(YMM), v(YMM), rm(YMM)]),
    VEX_Vfmadd231pd_xmm_xmm_xmmm128 => vex(Map0F38, 0xB8, Mn::Vfmadd231pd).p66().l128().w1().ops([r(XMM), v(XMM), rm(XMM)]),
    VEX_Vfmadd231pd_ymm_ymm_ymmm256 => vex(Map0F38, 0xB8, Mn::Vfmadd231pd).p66().l256().w1().ops([r(YMM), v(YMM), rm(YMM)]),
    VEX_Vaddss_xmm_xmm_xmmm32 => vex(Map0F, 0x58, Mn::Vaddss).pf3().ops([r(XMM), v(XMM), rm(XMM)]),
    VEX_Vaddsd_xmm_xmm_xmmm64 => vex(Map0F, 0x58, Mn::Vaddsd).pf2().ops([r(XMM), v(XMM), rm(XMM)]),
    VEX_Vpshufd_xmm_xmmm128_imm8 => vex(Map0F, 0x70, Mn::Vpshufd).p66().l128().ops([r(XMM), rm(XMM), IB]),
    VEX_Vpshufd_ymm_ymmm256_imm8 => vex(Map0F, 0x70, Mn::Vpshufd).p66().l256().ops([r(YMM), rm(YMM), IB]),
    VEX_Vbroadcastss_xmm_m32 => vex(Map0F38, 0x18, Mn::Vbroadcastss).p66().l128().w0().ops([r(XMM), M]),
    VEX_Vbroadcastss_ymm_m32 => vex(Map0F38, 0x18, Mn::Vbroadcastss).p66().l256().w0().ops([r(YMM), M]),
    VEX_Vperm2f128_ymm_ymm_ymmm256_imm8 => vex(Map0F3A, 0x06, Mn::Vperm2f128).p66().l256().w0().ops([r(YMM), v(YMM), rm(YMM), IB]),
    VEX_Vzeroupper => vex(Map0F, 0x77, Mn::Vzeroupper).np().l128(),
    VEX_Vzeroall => vex(Map0F, 0x77, Mn::Vzeroall).np().l256(),
    VEX_Vcvtsi2ss_xmm_xmm_rm32 => vex(Map0F, 0x2A, Mn::Vcvtsi2ss).pf3().wig32().ops([r(XMM), v(XMM), rm(G32)]),
    VEX_Vcvtsi2ss_xmm_xmm_rm64 => vex(Map0F, 0x2A, Mn::Vcvtsi2ss).pf3().w1().only64().ops([r(XMM), v(XMM), rm(G64)]),
    VEX_Vmovd_xmm_rm32 => vex(Map0F, 0x6E, Mn::Vmovd).p66().l128().wig32().ops([r(XMM), rm(G32)]),
    VEX_Vmovq_xmm_rm64 => vex(Map0F, 0x6E, Mn::Vmovq).p66().l128().w1().only64().ops([r(XMM), rm(G64)]),
    VEX_Vmovd_rm32_xmm => vex(Map0F, 0x7E, Mn::Vmovd).p66().l128().wig32().ops([rm(G32), r(XMM)]),
    VEX_Vmovq_rm64_xmm => vex(Map0F, 0x7E, Mn::Vmovq).p66().l128().w1().only64().ops([rm(G64), r(XMM)]),
    VEX_Andn_r32_r32_rm32 => vex(Map0F38, 0xF2, Mn::Andn).np().l128().wig32().ops([r(G32), v(G32), rm(G32)]),
    VEX_Andn_r64_r64_rm64 => vex(Map0F38, 0xF2, Mn::Andn).np().l128().w1().only64().ops([r(G64), v(G64), rm(G64)]),
    VEX_Bzhi_r32_rm32_r32 => vex(Map0F38, 0xF5, Mn::Bzhi).np().l128().wig32().ops([r(G32), rm(G32), v(G32)]),
    VEX_Bzhi_r64_rm64_r64 => vex(Map0F38, 0xF5, Mn::Bzhi).np().l128().w1().only64().ops([r(G64), rm(G64), v(G64)]),
    VEX_Pdep_r32_r32_rm32 => vex(Map0F38, 0xF5, Mn::Pdep).pf2().l128().wig32().ops([r(G32), v(G32), rm(G32)]),
    VEX_Pdep_r64_r64_rm64 => vex(Map0F38, 0xF5, Mn::Pdep).pf2().l128().w1().only64().ops([r(G64), v(G64), rm(G64)]),
    VEX_Pext_r32_r32_rm32 => vex(Map0F38, 0xF5, Mn::Pext).pf3().l128().wig32().ops([r(G32), v(G32), rm(G32)]),
    VEX_Pext_r64_r64_rm64 => vex(Map0F38, 0xF5, Mn::Pext).pf3().l128().w1().only64().ops([r(G64), v(G64), rm(G64)]),
    VEX_Mulx_r32_r32_rm32 => vex(Map0F38, 0xF6, Mn::Mulx).pf2().l128().wig32().ops([r(G32), v(G32), rm(G32)]),
    VEX_Mulx_r64_r64_rm64 => vex(Map0F38, 0xF6, Mn::Mulx).pf2().l128().w1().only64().ops([r(G64), v(G64), rm(G64)]),
    VEX_Shlx_r32_rm32_r32 => vex(Map0F38, 0xF7, Mn::Shlx).p66().l128().wig32().ops([r(G32), rm(G32), v(G32)]),
    VEX_Shlx_r64_rm64_r64 => vex(Map0F38, 0xF7, Mn::Shlx).p66().l128().w1().only64().ops([r(G64), rm(G64), v(G64)]),
    VEX_Sarx_r32_rm32_r32 => vex(Map0F38, 0xF7, Mn::Sarx).pf3().l128().wig32().ops([r(G32), rm(G32), v(G32)]),
    VEX_Sarx_r64_rm64_r64 => vex(Map0F38, 0xF7, Mn::Sarx).pf3().l128().w1().only64().ops([r(G64), rm(G64), v(G64)]),
    VEX_Shrx_r32_rm32_r32 => vex(Map0F38, 0xF7, Mn::Shrx).pf2().l128().wig32().ops([r(G32), rm(G32), v(G32)]),
    VEX_Shrx_r64_rm64_r64 => vex(Map0F38, 0xF7, Mn::Shrx).pf2().l128().w1().only64().ops([r(G64), rm(G64), v(G64)]),
    VEX_Rorx_r32_rm32_imm8 => vex(Map0F3A, 0xF0, Mn::Rorx).pf2().l128().wig32().ops([r(G32), rm(G32), IB]),
    VEX_Rorx_r64_rm64_imm8 => vex(Map0F3A, 0xF0, Mn::Rorx).pf2().l128().w1().only64().ops([r(G64), rm(G64), IB]),
    VEX_Blsr_r32_rm32 => vex(Map0F38, 0xF3, Mn::Blsr).np().l128().wig32().digit(1).ops([v(G32), rm(G32)]),
    VEX_Blsr_r64_rm64 => vex(Map0F38, 0xF3, Mn::Blsr).np().l128().w1().only64().digit(1).ops([v(G64), rm(G64)]),
    VEX_Blsmsk_r32_rm32 => vex(Map0F38, 0xF3, Mn::Blsmsk).np().l128().wig32().digit(2).ops([v(G32), rm(G32)]),
    VEX_Blsmsk_r64_rm64 => vex(Map0F38, 0xF3, Mn::Blsmsk).np().l128().w1().only64().digit(2).ops([v(G64), rm(G64)]),
    VEX_Blsi_r32_rm32 => vex(Map0F38, 0xF3, Mn::Blsi).np().l128().wig32().digit(3).ops([v(G32), rm(G32)]),
    VEX_Blsi_r64_rm64 => vex(Map0F38, 0xF3, Mn::Blsi).np().l128().w1().only64().digit(3).ops([v(G64), rm(G64)]),
    VEX_Kmovw_kr_km16 => vex(Map0F, 0x90, Mn::Kmovw).np().l128().w0().ops([r(KR), rm(KR)]),
    VEX_Kmovq_kr_km64 => vex(Map0F, 0x90, Mn::Kmovq).np().l128().w1().ops([r(KR), rm(KR)]),
    VEX_Kmovb_kr_km8 => vex(Map0F, 0x90, Mn::Kmovb).p66().l128().w0().ops([r(KR), rm(KR)]),
    VEX_Kmovd_kr_km32 => vex(Map0F, 0x90, Mn::Kmovd).p66().l128().w1().ops([r(KR), rm(KR)]),
    VEX_Kmovw_m16_kr => vex(Map0F, 0x91, Mn::Kmovw).np().l128().w0().ops([M, r(KR)]),
    VEX_Kmovw_kr_r32 => vex(Map0F, 0x92, Mn::Kmovw).np().l128().w0().ops([r(KR), rr(G32)]),
    VEX_Kmovw_r32_kr => vex(Map0F, 0x93, Mn::Kmovw).np().l128().w0().ops([r(G32), rr(KR)]),
    VEX_Kandw_kr_kr_kr => vex(Map0F, 0x41, Mn::Kandw).np().l256().w0().ops([r(KR), v(KR), rr(KR)]),
    VEX_Knotw_kr_kr => vex(Map0F, 0x44, Mn::Knotw).np().l128().w0().ops([r(KR), rr(KR)]),
    VEX_Kortestw_kr_kr => vex(Map0F, 0x98, Mn::Kortestw).np().l128().w0().ops([r(KR), rr(KR)]),
    VEX_Tilerelease => vex(Map0F38, 0x49, Mn::Tilerelease).np().l128().w0().only64().digit(0).fixed_rm(0),
    VEX_Tilezero_tmm => vex(Map0F38, 0x49, Mn::Tilezero).pf2().l128().w0().only64().fixed_rm(0).ops([r(TMM)]),
    VEX_Tileloadd_tmm_sibmem => vex(Map0F38, 0x4B, Mn::Tileloadd).pf2().l128().w0().only64().with(flags::REQUIRES_SIB).ops([r(TMM), M]),
    VEX_Tdpbssd_tmm_tmm_tmm => vex(Map0F38, 0x5E, Mn::Tdpbssd).pf2().l128().w0().only64().ops([r(TMM), rr(TMM), v(TMM)]),
    EVEX_Vaddps_xmm_k1z_xmm_xmmm128b32 => evex(Map0F, 0x58, Mn::Vaddps).np().w0().kz().bcst().fv(4).l128().ops([r(XMM), v(XMM), rm(XMM)]),
    EVEX_Vaddps_ymm_k1z_ymm_ymmm256b32 => evex(Map0F, 0x58, Mn::Vaddps).np().w0().kz().bcst().fv(4).l256().ops([r(YMM), v(YMM), rm(YMM)]),
    EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er => evex(Map0F, 0x58, Mn::Vaddps).np().w0().kz().bcst().fv(4).l512().er().ops([r(ZMM), v(ZMM), rm(ZMM)]),
    EVEX_Vaddpd_xmm_k1z_xmm_xmmm128b64 => evex(Map0F, 0x58, Mn::Vaddpd).p66().w1().kz().bcst().fv(8).l128().ops([r(XMM), v(XMM), rm(XMM)]),
    EVEX_Vaddpd_ymm_k1z_ymm_ymmm256b64 => evex(Map0F, 0x58, Mn::Vaddpd).p66().w1().kz().bcst().fv(8).l256().ops([r(YMM), v(YMM), rm(YMM)]),
    EVEX_Vaddpd_zmm_k1z_zmm_zmmm512b64_er => evex(Map0F, 0x58, Mn::Vaddpd).p66().w1().kz().bcst().fv(8).l512().er().ops([r(ZMM), v(ZMM), rm(ZMM)]),
    EVEX_Vmulps_xmm_k1z_xmm_xmmm128b32 => evex(Map0F, 0x59, Mn::Vmulps).np().w0().kz().bcst().fv(4).l128().ops([r(XMM), v(XMM), rm(XMM)]),
    EVEX_Vmulps_ymm_k1z_ymm_ymmm256b32 => evex(Map0F, 0x59, Mn::Vmulps).np().w0().kz().bcst().fv(4).l256().ops([r(YMM), v(YMM), rm(YMM)]),
    EVEX_Vmulps_zmm_k1z_zmm_zmmm512b32_er => evex(Map0F, 0x59, Mn::Vmulps).np().w0().kz().bcst().fv(4).l512().er().ops([r(ZMM), v(ZMM), rm(ZMM)]),
    EVEX_Vsubps_xmm_k1z_xmm_xmmm128b32 => evex(Map0F, 0x5C, Mn::Vsubps).np().w0().kz().bcst().fv(4).l128().ops([r(XMM), v(XMM), rm(XMM)]),
    EVEX_Vsubps_ymm_k1z_ymm_ymmm256b32 => evex(Map0F, 0x5C, Mn::Vsubps).np().w0().kz().bcst().fv(4).l256().ops([r(YMM), v(YMM), rm(YMM)]),
    EVEX_Vsubps_zmm_k1z_zmm_zmmm512b32_er => evex(Map0F, 0x5C, Mn::Vsubps).np().w0().kz().bcst().fv(4).l512().er().ops([r(ZMM), v(ZMM), rm(ZMM)]),
    EVEX_Vsqrtps_xmm_k1z_xmmm128b32 => evex(Map0F, 0x51, Mn::Vsqrtps).np().w0().kz().bcst().fv(4).l128().ops([r(XMM), rm(XMM)]),
    EVEX_Vsqrtps_ymm_k1z_ymmm256b32 => evex(Map0F, 0x51, Mn::Vsqrtps).np().w0().kz().bcst().fv(4).l256().ops([r(YMM), rm(YMM)]),
    EVEX_Vsqrtps_zmm_k1z_zmmm512b32_er => evex(Map0F, 0x51, Mn::Vsqrtps).np().w0().kz().bcst().fv(4).l512().er().ops([r(ZMM), rm(ZMM)]),
    EVEX_Vaddss_xmm_k1z_xmm_xmmm32_er => evex(Map0F, 0x58, Mn::Vaddss).pf3().w0().kz().er().t1s(4).ops([r(XMM), v(XMM), rm(XMM)]),
    EVEX_Vaddsd_xmm_k1z_xmm_xmmm64_er => evex(Map0F, 0x58, Mn::Vaddsd).pf2().w1().kz().er().t1s(8).ops([r(XMM), v(XMM), rm(XMM)]),
    EVEX_Vmovups_xmm_k1z_xmmm128 => evex(Map0F, 0x10, Mn::Vmovups).np().w0().kz().fvm().l128().ops([r(XMM), rm(XMM)]),
    EVEX_Vmovups_ymm_k1z_ymmm256 => evex(Map0F, 0x10, Mn::Vmovups).np().w0().kz().fvm().l256().ops([r(YMM), rm(YMM)]),
    EVEX_Vmovups_zmm_k1z_zmmm512 => evex(Map0F, 0x10, Mn::Vmovups).np().w0().kz().fvm().l512().ops([r(ZMM), rm(ZMM)]),
    EVEX_Vmovups_xmmm128_k1_xmm => evex(Map0F, 0x11, Mn::Vmovups).np().w0().k().fvm().l128().ops([rm(XMM), r(XMM)]),
    EVEX_Vmovups_ymmm256_k1_ymm => evex(Map0F, 0x11, Mn::Vmovups).np().w0().k().fvm().l256().ops([rm(YMM), r(YMM)]),
    EVEX_Vmovups_zmmm512_k1_zmm => evex(Map0F, 0x11, Mn::Vmovups).np().w0().k().fvm().l512().ops([rm(ZMM), r(ZMM)]),
    EVEX_Vmovdqu32_xmm_k1z_xmmm128 => evex(Map0F, 0x6F, Mn::Vmovdqu32).pf3().w0().kz().fvm().l128().ops([r(XMM), rm(XMM)]),
    EVEX_Vmovdqu32_ymm_k1z_ymmm256 => evex(Map0F, 0x6F, Mn::Vmovdqu32).pf3().w0().kz().fvm().l256().ops([r(YMM), rm(YMM)]),
    EVEX_Vmovdqu32_zmm_k1z_zmmm512 => evex(Map0F, 0x6F, Mn::Vmovdqu32).pf3().w0().kz().fvm().l512().ops([r(ZMM), rm(ZMM)]),
    EVEX_Vmovdqu64_xmm_k1z_xmmm128 => evex(Map0F, 0x6F, Mn::Vmovdqu64).pf3().w1().kz().fvm().l128().ops([r(XMM), rm(XMM)]),
    EVEX_Vmovdqu64_ymm_k1z_ymmm256 => evex(Map0F, 0x6F, Mn::Vmovdqu64).pf3().w1().kz().fvm().l256().ops([r(YMM), rm(YMM)]),
    EVEX_Vmovdqu64_zmm_k1z_zmmm512 => evex(Map0F, 0x6F, Mn::Vmovdqu64).pf3().w1().kz().fvm().l512().ops([r(ZMM), rm(ZMM)]),
    EVEX_Vmovdqu32_xmmm128_k1_xmm => evex(Map0F, 0x7F, Mn::Vmovdqu32).pf3().w0().k().fvm().l128().ops([rm(XMM), r(XMM)]),
    EVEX_Vmovdqu32_ymmm256_k1_ymm => evex(Map0F, 0x7F, Mn::Vmovdqu32).pf3().w0().k().fvm().l256().ops([rm(YMM), r(YMM)]),
    EVEX_Vmovdqu32_zmmm512_k1_zmm => evex(Map0F, 0x7F, Mn::Vmovdqu32).pf3().w0().k().fvm().l512().ops([rm(ZMM), r(ZMM)]),
    EVEX_Vmovdqa64_xmm_k1z_xmmm128 => evex(Map0F, 0x6F, Mn::Vmovdqa64).p66().w1().kz().fvm().l128().ops([r(XMM), rm(XMM)]),
    EVEX_Vmovdqa64_ymm_k1z_ymmm256 => evex(Map0F, 0x6F, Mn::Vmovdqa64).p66().w1().kz().fvm().l256().ops([r(YMM), rm(YMM)]),
    EVEX_Vmovdqa64_zmm_k1z_zmmm512 => evex(Map0F, 0x6F, Mn::Vmovdqa64).p66().w1().kz().fvm().l512().ops([r(ZMM), rm(ZMM)]),
    EVEX_Vpaddd_xmm_k1z_xmm_xmmm128b32 => evex(Map0F, 0xFE, Mn::Vpaddd).p66().w0().kz().bcst().fv(4).l128().ops([r(XMM), v(XMM), rm(XMM)]),
    EVEX_Vpaddd_ymm_k1z_ymm_ymmm256b32 => evex(Map0F, 0xFE, Mn::Vpaddd).p66().w0().kz().bcst().fv(4).l256().ops([r(YMM), v(YMM), rm(YMM)]),
    EVEX_Vpaddd_zmm_k1z_zmm_zmmm512b32 => evex(Map0F, 0xFE, Mn::Vpaddd).p66().w0().kz().bcst().fv(4).l512().ops([r(ZMM), v(ZMM), rm(ZMM)]),
    EVEX_Vpaddq_xmm_k1z_xmm_xmmm128b64 => evex(Map0F, 0xD4, Mn::Vpaddq).p66().w1().kz().bcst().fv(8).l128().ops([r(XMM), v(XMM), rm(XMM)]),
    EVEX_Vpaddq_ymm_k1z_ymm_ymmm256b64 => evex(Map0F, 0xD4, Mn::Vpaddq).p66().w1().kz().bcst().fv(8).l256().ops([r(YMM), v(YMM), rm(YMM)]),
    EVEX_Vpaddq_zmm_k1z_zmm_zmmm512b64 => evex(Map0F, 0xD4, Mn::Vpaddq).p66().w1().kz().bcst().fv(8).l512().ops([r(ZMM), v(ZMM), rm(ZMM)]),
    EVEX_Vpxord_xmm_k1z_xmm_xmmm128b32 => evex(Map0F, 0xEF, Mn::Vpxord).p66().w0().kz().bcst().fv(4).l128().ops([r(XMM), v(XMM), rm(XMM)]),
    EVEX_Vpxord_ymm_k1z_ymm_ymmm256b32 => evex(Map0F, 0xEF, Mn::Vpxord).p66().w0().kz().bcst().fv(4).l256().ops([r(YMM), v(YMM), rm(YMM)]),
    EVEX_Vpxord_zmm_k1z_zmm_zmmm512b32 => evex(Map0F, 0xEF, Mn::Vpxord).p66().w0().kz().bcst().fv(4).l512().ops([r(ZMM), v(ZMM), rm(ZMM)]),
    EVEX_Vpxorq_xmm_k1z_xmm_xmmm128b64 => evex(Map0F, 0xEF, Mn::Vpxorq).p66().w1().kz().bcst().fv(8).l128().ops([r(XMM), v(XMM), rm(XMM)]),
    EVEX_Vpxorq_ymm_k1z_ymm_ymmm256b64 => evex(Map0F, 0xEF, Mn::Vpxorq).p66().w1().kz().bcst().fv(8).l256().ops([r(YMM), v(YMM), rm(YMM)]),
    EVEX_Vpxorq_zmm_k1z_zmm_zmmm512b64 => evex(Map0F, 0xEF, Mn::Vpxorq).p66().w1().kz().bcst().fv(8).l512().ops([r(ZMM), v(ZMM), rm(ZMM)]),
    EVEX_Vpandd_xmm_k1z_xmm_xmmm128b32 => evex(Map0F, 0xDB, Mn::Vpandd).p66().w0().kz().bcst().fv(4).l128().ops([r(XMM), v(XMM), rm(XMM)]),
    EVEX_Vpandd_ymm_k1z_ymm_ymmm256b32 => evex(Map0F, 0xDB, Mn::Vpandd).p66().w0().kz().bcst().fv(4).l256().ops([r(YMM), v(YMM), rm(YMM)]),
    EVEX_Vpandd_zmm_k1z_zmm_zmmm512b32 => evex(Map0F, 0xDB, Mn::Vpandd).p66().w0().kz().bcst().fv(4).l512().ops([r(ZMM), v(ZMM), rm(ZMM)]),
    EVEX_Vpcmpeqd_kr_k1_xmm_xmmm128b32 => evex(Map0F, 0x76, Mn::Vpcmpeqd).p66().w0().k().bcst().fv(4).l128().ops([r(KR), v(XMM), rm(XMM)]),
    EVEX_Vpcmpeqd_kr_k1_ymm_ymmm256b32 => evex(Map0F, 0x76, Mn::Vpcmpeqd).p66().w0().k().bcst().fv(4).l256().ops([r(KR), v(YMM), rm(YMM)]),
    EVEX_Vpcmpeqd_kr_k1_zmm_zmmm512b32 => evex(Map0F, 0x76, Mn::Vpcmpeqd).p66().w0().k().bcst().fv(4).l512().ops([r(KR), v(ZMM), rm(ZMM)]),
    EVEX_Vcmpps_kr_k1_xmm_xmmm128b32_imm8 => evex(Map0F, 0xC2, Mn::Vcmpps).np().w0().k().bcst().fv(4).l128().ops([r(KR), v(XMM), rm(XMM), IB]),
    EVEX_Vcmpps_kr_k1_ymm_ymmm256b32_imm8 => evex(Map0F, 0xC2, Mn::Vcmpps).np().w0().k().bcst().fv(4).l256().ops([r(KR), v(YMM), rm(YMM), IB]),
    EVEX_Vcmpps_kr_k1_zmm_zmmm512b32_sae_imm8 => evex(Map0F, 0xC2, Mn::Vcmpps).np().w0().k().bcst().fv(4).l512().sae().ops([r(KR), v(ZMM), rm(ZMM), IB]),
    EVEX_Vpternlogd_xmm_k1z_xmm_xmmm128b32_imm8 => evex(Map0F3A, 0x25, Mn::Vpternlogd).p66().w0().kz().bcst().fv(4).l128().ops([r(XMM), v(XMM), rm(XMM), IB]),
    EVEX_Vpternlogd_ymm_k1z_ymm_ymmm256b32_imm8 => evex(Map0F3A, 0x25, Mn::Vpternlogd).p66().w0().kz().bcst().fv(4).l256().ops([r(YMM), v(YMM), rm(YMM), IB]),
    EVEX_Vpternlogd_zmm_k1z_zmm_zmmm512b32_imm8 => evex(Map0F3A, 0x25, Mn::Vpternlogd).p66().w0().kz().bcst().fv(4).l512().ops([r(ZMM), v(ZMM), rm(ZMM), IB]),
    EVEX_Vbroadcastss_xmm_k1z_xmmm32 => evex(Map0F38, 0x18, Mn::Vbroadcastss).p66().w0().kz().t1s(4).l128().ops([r(XMM), rm(XMM)]),
    EVEX_Vbroadcastss_ymm_k1z_xmmm32 => evex(Map0F38, 0x18, Mn::Vbroadcastss).p66().w0().kz().t1s(4).l256().ops([r(YMM), rm(XMM)]),
    EVEX_Vbroadcastss_zmm_k1z_xmmm32 => evex(Map0F38, 0x18, Mn::Vbroadcastss).p66().w0().kz().t1s(4).l512().ops([r(ZMM), rm(XMM)]),
    EVEX_Vpbroadcastd_xmm_k1z_r32 => evex(Map0F38, 0x7C, Mn::Vpbroadcastd).p66().wig32().kz().l128().ops([r(XMM), rr(G32)]),
    EVEX_Vpbroadcastd_ymm_k1z_r32 => evex(Map0F38, 0x7C, Mn::Vpbroadcastd).p66().wig32().kz().l256().ops([r(YMM), rr(G32)]),
    EVEX_Vpbroadcastd_zmm_k1z_r32 => evex(Map0F38, 0x7C, Mn::Vpbroadcastd).p66().wig32().kz().l512().ops([r(ZMM), rr(G32)]),
    XOP_Vprotb_xmm_xmmm128_xmm => xop(Xop9, 0x90, Mn::Vprotb).w0().l128().ops([r(XMM), rm(XMM), v(XMM)]),
    XOP_Vprotb_xmm_xmm_xmmm128 => xop(Xop9, 0x90, Mn::Vprotb).w1().l128().ops([r(XMM), v(XMM), rm(XMM)]),
    XOP_Vprotd_xmm_xmmm128_xmm => xop(Xop9, 0x92, Mn::Vprotd).w0().l128().ops([r(XMM), rm(XMM), v(XMM)]),
    XOP_Vprotd_xmm_xmm_xmmm128 => xop(Xop9, 0x92, Mn::Vprotd).w1().l128().ops([r(XMM), v(XMM), rm(XMM)]),
    XOP_Vprotb_xmm_xmmm128_imm8 => xop(Xop8, 0xC0, Mn::Vprotb).w0().l128().ops([r(XMM), rm(XMM), IB]),
    XOP_Vprotd_xmm_xmmm128_imm8 => xop(Xop8, 0xC2, Mn::Vprotd).w0().l128().ops([r(XMM), rm(XMM), IB]),
    XOP_Vphaddbw_xmm_xmmm128 => xop(Xop9, 0xC1, Mn::Vphaddbw).w0().l128().ops([r(XMM), rm(XMM)]),
    XOP_Vfrczps_xmm_xmmm128 => xop(Xop9, 0x80, Mn::Vfrczps).w0().l128().ops([r(XMM), rm(XMM)]),
    XOP_Vfrczps_ymm_ymmm256 => xop(Xop9, 0x80, Mn::Vfrczps).w0().l256().ops([r(YMM), rm(YMM)]),
    XOP_Bextr_r32_rm32_imm32 => xop(XopA, 0x10, Mn::Bextr).wig32().l128().ops([r(G32), rm(G32), ID]),
    XOP_Bextr_r64_rm64_imm32 => xop(XopA, 0x10, Mn::Bextr).w1().l128().only64().ops([r(G64), rm(G64), ID]),
    XOP_Blcfill_r32_rm32 => xop(Xop9, 0x01, Mn::Blcfill).wig32().l128().digit(1).ops([v(G32), rm(G32)]),
    XOP_Blcfill_r64_rm64 => xop(Xop9, 0x01, Mn::Blcfill).w1().l128().only64().digit(1).ops([v(G64), rm(G64)]),
    MVEX_Vaddps_zmm_k1_zmm_zmmmt => mvex(Map0F, 0x58, Mn::Vaddps).np().w0().k().er().with(flags::MVEX_CONVERSION | flags::MVEX_SWIZZLE).ops([r(ZMM), v(ZMM), rm(ZMM)]),
    MVEX_Vpaddd_zmm_k1_zmm_zmmmt => mvex(Map0F, 0xFE, Mn::Vpaddd).p66().w0().k().with(flags::MVEX_CONVERSION | flags::MVEX_SWIZZLE).ops([r(ZMM), v(ZMM), rm(ZMM)]),
    MVEX_Vmovaps_zmm_k1_zmmmt => mvex(Map0F, 0x28, Mn::Vmovaps).np().w0().k().with(flags::MVEX_CONVERSION | flags::MVEX_SWIZZLE).ops([r(ZMM), rm(ZMM)]),
    MVEX_Vmovaps_mt_k1_zmm => mvex(Map0F, 0x29, Mn::Vmovaps).np().w0().k().with(flags::MVEX_CONVERSION).ops([M, r(ZMM)]),
}

/// Condition tested by a Jcc/SETcc/CMOVcc/LOOPcc instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionCode {
    /// Not a conditional instruction.
    #[default]
    None,
    /// Overflow.
    O,
    /// No overflow.
    No,
    /// Below (CF = 1).
    B,
    /// Above or equal (CF = 0).
    Ae,
    /// Equal (ZF = 1).
    E,
    /// Not equal (ZF = 0).
    Ne,
    /// Below or equal.
    Be,
    /// Above.
    A,
    /// Sign.
    S,
    /// No sign.
    Ns,
    /// Parity.
    P,
    /// No parity.
    Np,
    /// Less.
    L,
    /// Greater or equal.
    Ge,
    /// Less or equal.
    Le,
    /// Greater.
    G,
}

impl ConditionCode {
    const BY_CC: [ConditionCode; 16] = [
        ConditionCode::O,
        ConditionCode::No,
        ConditionCode::B,
        ConditionCode::Ae,
        ConditionCode::E,
        ConditionCode::Ne,
        ConditionCode::Be,
        ConditionCode::A,
        ConditionCode::S,
        ConditionCode::Ns,
        ConditionCode::P,
        ConditionCode::Np,
        ConditionCode::L,
        ConditionCode::Ge,
        ConditionCode::Le,
        ConditionCode::G,
    ];

    fn from_cc(cc: usize) -> ConditionCode {
        Self::BY_CC.get(cc).copied().unwrap_or(ConditionCode::None)
    }
}

// ─── Branch and condition families ──────────────────────────────────────
//
// Rows are indexed by operand size (16, 32, 64) and columns by the 4-bit
// condition field, so flipping bit 0 of the column negates the condition.

const JCC_SHORT: [[Code; 16]; 3] = [
    [
        Code::Jo_rel8_16,
        Code::Jno_rel8_16,
        Code::Jb_rel8_16,
        Code::Jae_rel8_16,
        Code::Je_rel8_16,
        Code::Jne_rel8_16,
        Code::Jbe_rel8_16,
        Code::Ja_rel8_16,
        Code::Js_rel8_16,
        Code::Jns_rel8_16,
        Code::Jp_rel8_16,
        Code::Jnp_rel8_16,
        Code::Jl_rel8_16,
        Code::Jge_rel8_16,
        Code::Jle_rel8_16,
        Code::Jg_rel8_16,
    ],
    [
        Code::Jo_rel8_32,
        Code::Jno_rel8_32,
        Code::Jb_rel8_32,
        Code::Jae_rel8_32,
        Code::Je_rel8_32,
        Code::Jne_rel8_32,
        Code::Jbe_rel8_32,
        Code::Ja_rel8_32,
        Code::Js_rel8_32,
        Code::Jns_rel8_32,
        Code::Jp_rel8_32,
        Code::Jnp_rel8_32,
        Code::Jl_rel8_32,
        Code::Jge_rel8_32,
        Code::Jle_rel8_32,
        Code::Jg_rel8_32,
    ],
    [
        Code::Jo_rel8_64,
        Code::Jno_rel8_64,
        Code::Jb_rel8_64,
        Code::Jae_rel8_64,
        Code::Je_rel8_64,
        Code::Jne_rel8_64,
        Code::Jbe_rel8_64,
        Code::Ja_rel8_64,
        Code::Js_rel8_64,
        Code::Jns_rel8_64,
        Code::Jp_rel8_64,
        Code::Jnp_rel8_64,
        Code::Jl_rel8_64,
        Code::Jge_rel8_64,
        Code::Jle_rel8_64,
        Code::Jg_rel8_64,
    ],
];

const JCC_NEAR: [[Code; 16]; 3] = [
    [
        Code::Jo_rel16,
        Code::Jno_rel16,
        Code::Jb_rel16,
        Code::Jae_rel16,
        Code::Je_rel16,
        Code::Jne_rel16,
        Code::Jbe_rel16,
        Code::Ja_rel16,
        Code::Js_rel16,
        Code::Jns_rel16,
        Code::Jp_rel16,
        Code::Jnp_rel16,
        Code::Jl_rel16,
        Code::Jge_rel16,
        Code::Jle_rel16,
        Code::Jg_rel16,
    ],
    [
        Code::Jo_rel32_32,
        Code::Jno_rel32_32,
        Code::Jb_rel32_32,
        Code::Jae_rel32_32,
        Code::Je_rel32_32,
        Code::Jne_rel32_32,
        Code::Jbe_rel32_32,
        Code::Ja_rel32_32,
        Code::Js_rel32_32,
        Code::Jns_rel32_32,
        Code::Jp_rel32_32,
        Code::Jnp_rel32_32,
        Code::Jl_rel32_32,
        Code::Jge_rel32_32,
        Code::Jle_rel32_32,
        Code::Jg_rel32_32,
    ],
    [
        Code::Jo_rel32_64,
        Code::Jno_rel32_64,
        Code::Jb_rel32_64,
        Code::Jae_rel32_64,
        Code::Je_rel32_64,
        Code::Jne_rel32_64,
        Code::Jbe_rel32_64,
        Code::Ja_rel32_64,
        Code::Js_rel32_64,
        Code::Jns_rel32_64,
        Code::Jp_rel32_64,
        Code::Jnp_rel32_64,
        Code::Jl_rel32_64,
        Code::Jge_rel32_64,
        Code::Jle_rel32_64,
        Code::Jg_rel32_64,
    ],
];

const SETCC: [Code; 16] = [
    Code::Seto_rm8,
    Code::Setno_rm8,
    Code::Setb_rm8,
    Code::Setae_rm8,
    Code::Sete_rm8,
    Code::Setne_rm8,
    Code::Setbe_rm8,
    Code::Seta_rm8,
    Code::Sets_rm8,
    Code::Setns_rm8,
    Code::Setp_rm8,
    Code::Setnp_rm8,
    Code::Setl_rm8,
    Code::Setge_rm8,
    Code::Setle_rm8,
    Code::Setg_rm8,
];

const CMOVCC: [[Code; 16]; 3] = [
    [
        Code::Cmovo_r16_rm16,
        Code::Cmovno_r16_rm16,
        Code::Cmovb_r16_rm16,
        Code::Cmovae_r16_rm16,
        Code::Cmove_r16_rm16,
        Code::Cmovne_r16_rm16,
        Code::Cmovbe_r16_rm16,
        Code::Cmova_r16_rm16,
        Code::Cmovs_r16_rm16,
        Code::Cmovns_r16_rm16,
        Code::Cmovp_r16_rm16,
        Code::Cmovnp_r16_rm16,
        Code::Cmovl_r16_rm16,
        Code::Cmovge_r16_rm16,
        Code::Cmovle_r16_rm16,
        Code::Cmovg_r16_rm16,
    ],
    [
        Code::Cmovo_r32_rm32,
        Code::Cmovno_r32_rm32,
        Code::Cmovb_r32_rm32,
        Code::Cmovae_r32_rm32,
        Code::Cmove_r32_rm32,
        Code::Cmovne_r32_rm32,
        Code::Cmovbe_r32_rm32,
        Code::Cmova_r32_rm32,
        Code::Cmovs_r32_rm32,
        Code::Cmovns_r32_rm32,
        Code::Cmovp_r32_rm32,
        Code::Cmovnp_r32_rm32,
        Code::Cmovl_r32_rm32,
        Code::Cmovge_r32_rm32,
        Code::Cmovle_r32_rm32,
        Code::Cmovg_r32_rm32,
    ],
    [
        Code::Cmovo_r64_rm64,
        Code::Cmovno_r64_rm64,
        Code::Cmovb_r64_rm64,
        Code::Cmovae_r64_rm64,
        Code::Cmove_r64_rm64,
        Code::Cmovne_r64_rm64,
        Code::Cmovbe_r64_rm64,
        Code::Cmova_r64_rm64,
        Code::Cmovs_r64_rm64,
        Code::Cmovns_r64_rm64,
        Code::Cmovp_r64_rm64,
        Code::Cmovnp_r64_rm64,
        Code::Cmovl_r64_rm64,
        Code::Cmovge_r64_rm64,
        Code::Cmovle_r64_rm64,
        Code::Cmovg_r64_rm64,
    ],
];

const LOOPE: [Code; 6] = [
    Code::Loope_rel8_16_CX,
    Code::Loope_rel8_32_CX,
    Code::Loope_rel8_16_ECX,
    Code::Loope_rel8_32_ECX,
    Code::Loope_rel8_64_ECX,
    Code::Loope_rel8_64_RCX,
];

const LOOPNE: [Code; 6] = [
    Code::Loopne_rel8_16_CX,
    Code::Loopne_rel8_32_CX,
    Code::Loopne_rel8_16_ECX,
    Code::Loopne_rel8_32_ECX,
    Code::Loopne_rel8_64_ECX,
    Code::Loopne_rel8_64_RCX,
];

const JMP_SHORT: [Code; 3] = [Code::Jmp_rel8_16, Code::Jmp_rel8_32, Code::Jmp_rel8_64];

const JMP_NEAR: [Code; 3] = [Code::Jmp_rel16, Code::Jmp_rel32_32, Code::Jmp_rel32_64];

/// Position of `code` in a `[row][cc]` family table.
fn locate<const N: usize>(family: &[[Code; N]], code: Code) -> Option<(usize, usize)> {
    family.iter().enumerate().find_map(|(row, codes)| {
        codes
            .iter()
            .position(|&c| c == code)
            .map(|col| (row, col))
    })
}

impl Code {
    /// Number of codes, including [`Code::Invalid`].
    pub const COUNT: usize = Self::ALL.len();

    /// Code with dense index `index`.
    pub fn from_index(index: usize) -> Option<Code> {
        Self::ALL.get(index).copied()
    }

    /// All codes in table order.
    pub fn values() -> impl Iterator<Item = Code> {
        Self::ALL.iter().copied()
    }

    /// Encoding template.
    pub fn template(self) -> &'static OpCodeTemplate {
        template(self)
    }

    /// Assembler mnemonic.
    pub fn mnemonic(self) -> Mnemonic {
        template(self).mnemonic
    }

    /// Encoding family.
    pub fn encoding(self) -> EncodingKind {
        template(self).encoding
    }

    /// Number of explicit and implicit operands.
    pub fn op_count(self) -> usize {
        template(self).op_count as usize
    }

    /// Whether this is a short (rel8) Jcc.
    pub fn is_jcc_short(self) -> bool {
        locate(&JCC_SHORT, self).is_some()
    }

    /// Whether this is a near (rel16/rel32) Jcc.
    pub fn is_jcc_near(self) -> bool {
        locate(&JCC_NEAR, self).is_some()
    }

    /// Whether this is `JMP rel8`.
    pub fn is_jmp_short(self) -> bool {
        JMP_SHORT.contains(&self)
    }

    /// Whether this is `JMP rel16/rel32`.
    pub fn is_jmp_near(self) -> bool {
        JMP_NEAR.contains(&self)
    }

    /// Condition tested by this code.
    pub fn condition_code(self) -> ConditionCode {
        if let Some((_, cc)) = locate(&JCC_SHORT, self)
            .or_else(|| locate(&JCC_NEAR, self))
            .or_else(|| locate(&CMOVCC, self))
            .or_else(|| locate(&[SETCC], self))
        {
            return ConditionCode::from_cc(cc);
        }
        if LOOPE.contains(&self) {
            ConditionCode::E
        } else if LOOPNE.contains(&self) {
            ConditionCode::Ne
        } else {
            ConditionCode::None
        }
    }

    /// Same form with the opposite condition; unconditional codes map to
    /// themselves.
    pub fn negate_condition_code(self) -> Code {
        for family in [&JCC_SHORT, &JCC_NEAR, &CMOVCC] {
            if let Some((row, cc)) = locate(family, self) {
                return family[row][cc ^ 1];
            }
        }
        if let Some(cc) = SETCC.iter().position(|&c| c == self) {
            return SETCC[cc ^ 1];
        }
        if let Some(i) = LOOPE.iter().position(|&c| c == self) {
            return LOOPNE[i];
        }
        if let Some(i) = LOOPNE.iter().position(|&c| c == self) {
            return LOOPE[i];
        }
        self
    }

    /// rel8 form of a near Jcc/JMP with the same operand size; other codes
    /// map to themselves.
    pub fn as_short_branch(self) -> Code {
        if let Some((row, cc)) = locate(&JCC_NEAR, self) {
            return JCC_SHORT[row][cc];
        }
        match JMP_NEAR.iter().position(|&c| c == self) {
            Some(row) => JMP_SHORT[row],
            None => self,
        }
    }

    /// rel16/rel32 form of a short Jcc/JMP with the same operand size; other
    /// codes map to themselves.
    pub fn as_near_branch(self) -> Code {
        if let Some((row, cc)) = locate(&JCC_SHORT, self) {
            return JCC_NEAR[row][cc];
        }
        match JMP_SHORT.iter().position(|&c| c == self) {
            Some(row) => JMP_NEAR[row],
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_identity_round_trips() {
        for (i, code) in Code::values().enumerate() {
            assert_eq!(code as usize, i);
            assert_eq!(Code::from_index(i), Some(code));
        }
        assert_eq!(Code::from_index(Code::COUNT), None);
    }

    #[test]
    fn families_share_mnemonics_per_column() {
        for cc in 0..16 {
            let m = JCC_SHORT[0][cc].mnemonic();
            for row in 0..3 {
                assert_eq!(JCC_SHORT[row][cc].mnemonic(), m);
                assert_eq!(JCC_NEAR[row][cc].mnemonic(), m);
            }
        }
    }

    #[test]
    fn negation_is_an_involution() {
        for code in Code::values() {
            assert_eq!(code.negate_condition_code().negate_condition_code(), code);
        }
    }

    #[test]
    fn negation_flips_the_condition() {
        assert_eq!(Code::Je_rel8_64.negate_condition_code(), Code::Jne_rel8_64);
        assert_eq!(Code::Jl_rel32_32.negate_condition_code(), Code::Jge_rel32_32);
        assert_eq!(Code::Seta_rm8.negate_condition_code(), Code::Setbe_rm8);
        assert_eq!(Code::Cmovs_r64_rm64.negate_condition_code(), Code::Cmovns_r64_rm64);
        assert_eq!(Code::Loope_rel8_64_RCX.negate_condition_code(), Code::Loopne_rel8_64_RCX);
        assert_eq!(Code::Add_rm8_r8.negate_condition_code(), Code::Add_rm8_r8);
    }

    #[test]
    fn short_and_near_forms_pair_up() {
        assert_eq!(Code::Jne_rel32_64.as_short_branch(), Code::Jne_rel8_64);
        assert_eq!(Code::Jne_rel8_64.as_near_branch(), Code::Jne_rel32_64);
        assert_eq!(Code::Jmp_rel16.as_short_branch(), Code::Jmp_rel8_16);
        assert_eq!(Code::Jmp_rel8_32.as_near_branch(), Code::Jmp_rel32_32);
        assert_eq!(Code::Jrcxz_rel8_64.as_near_branch(), Code::Jrcxz_rel8_64);
        assert_eq!(Code::Call_rel32_64.as_short_branch(), Code::Call_rel32_64);
    }

    #[test]
    fn condition_codes() {
        assert_eq!(Code::Jae_rel8_32.condition_code(), ConditionCode::Ae);
        assert_eq!(Code::Setg_rm8.condition_code(), ConditionCode::G);
        assert_eq!(Code::Loopne_rel8_16_CX.condition_code(), ConditionCode::Ne);
        assert_eq!(Code::Jmp_rel8_64.condition_code(), ConditionCode::None);
        assert!(Code::Jo_rel16.is_jcc_near());
        assert!(Code::Jo_rel8_16.is_jcc_short());
        assert!(Code::Jmp_rel8_64.is_jmp_short());
        assert!(Code::Jmp_rel32_64.is_jmp_near());
    }

    #[test]
    fn mnemonic_and_encoding() {
        assert_eq!(Code::Retnq.mnemonic(), Mnemonic::Ret);
        assert_eq!(Code::VEX_Vaddps_ymm_ymm_ymmm256.encoding(), EncodingKind::Vex);
        assert_eq!(Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er.encoding(), EncodingKind::Evex);
        assert_eq!(Code::D3NOW_Pfadd_mm_mmm64.encoding(), EncodingKind::D3now);
        assert_eq!(Code::Invalid.op_count(), 0);
        assert_eq!(Code::Imul_r32_rm32_imm8.op_count(), 3);
    }
}
