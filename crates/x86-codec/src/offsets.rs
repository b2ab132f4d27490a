//! Positions of the patchable constants inside an encoded instruction.

/// Byte offsets and sizes of the displacement and immediates inside an
/// encoded instruction.
///
/// A relative branch field is reported as the displacement. For far
/// pointers the offset is the first immediate and the selector the second.
/// Implicit constants (the shift-by-one count) and the 3DNow! opcode suffix
/// are not reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantOffsets {
    /// Offset of the displacement (or branch field).
    pub displacement_offset: u8,
    /// Size of the displacement in bytes, 0 if absent.
    pub displacement_size: u8,
    /// Offset of the first immediate.
    pub immediate_offset: u8,
    /// Size of the first immediate in bytes, 0 if absent.
    pub immediate_size: u8,
    /// Offset of the second immediate.
    pub immediate_offset2: u8,
    /// Size of the second immediate in bytes, 0 if absent.
    pub immediate_size2: u8,
}

impl ConstantOffsets {
    /// Whether the instruction has a displacement or branch field.
    pub fn has_displacement(&self) -> bool {
        self.displacement_size != 0
    }

    /// Whether the instruction has a first immediate.
    pub fn has_immediate(&self) -> bool {
        self.immediate_size != 0
    }

    /// Whether the instruction has a second immediate.
    pub fn has_immediate2(&self) -> bool {
        self.immediate_size2 != 0
    }

    /// Byte range of the displacement within the encoding.
    pub fn displacement_range(&self) -> core::ops::Range<usize> {
        let start = self.displacement_offset as usize;
        start..start + self.displacement_size as usize
    }

    /// Byte range of the first immediate within the encoding.
    pub fn immediate_range(&self) -> core::ops::Range<usize> {
        let start = self.immediate_offset as usize;
        start..start + self.immediate_size as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_offsets_report_nothing() {
        let offsets = ConstantOffsets::default();
        assert!(!offsets.has_displacement());
        assert!(!offsets.has_immediate());
        assert!(!offsets.has_immediate2());
        assert!(offsets.displacement_range().is_empty());
    }

    #[test]
    fn ranges_follow_offset_and_size() {
        let offsets = ConstantOffsets {
            displacement_offset: 2,
            displacement_size: 4,
            immediate_offset: 6,
            immediate_size: 1,
            ..ConstantOffsets::default()
        };
        assert_eq!(offsets.displacement_range(), 2..6);
        assert_eq!(offsets.immediate_range(), 6..7);
        assert!(offsets.has_displacement());
        assert!(offsets.has_immediate());
    }
}
