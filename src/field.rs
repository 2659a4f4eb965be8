use crate::bit::Bit;

/// A named, contiguous range of bits within a 32-bit instruction word. The
/// label is the conventional `high:low` bit-position pair shown in encoding
/// tables.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub msb: u32,
    pub lsb: u32,
}

impl FieldSpec {
    const fn new(label: &'static str, msb: u32, lsb: u32) -> Self {
        Self { label, msb, lsb }
    }

    /// The width of the field in bits.
    pub const fn bits(&self) -> u32 {
        self.msb - self.lsb + 1
    }
}

/// The six-field breakdown shared by the common fixed 32-bit encoding
/// formats.
pub static STANDARD: [FieldSpec; 6] = [
    FieldSpec::new("31:25", 31, 25),
    FieldSpec::new("24:20", 24, 20),
    FieldSpec::new("19:15", 19, 15),
    FieldSpec::new("14:12", 14, 12),
    FieldSpec::new("11:7", 11, 7),
    FieldSpec::new("6:0", 6, 0),
];

/// Five-field breakdown merging the two highest standard fields into a
/// single 12-bit field.
pub static CUSTOM: [FieldSpec; 5] = [
    FieldSpec::new("31:20", 31, 20),
    FieldSpec::new("19:15", 19, 15),
    FieldSpec::new("14:12", 14, 12),
    FieldSpec::new("11:7", 11, 7),
    FieldSpec::new("6:0", 6, 0),
];

/// The value of a single field, decoded from a specific instruction word.
pub struct FieldValue<'a> {
    pub spec: &'a FieldSpec,
    pub value: u32,
}

/// Decode `word` against each spec in order.
pub fn extract(word: u32, specs: &[FieldSpec]) -> Vec<FieldValue<'_>> {
    specs
        .iter()
        .map(|spec| FieldValue {
            spec,
            value: word.bit_range(spec.lsb, spec.msb),
        })
        .collect()
}

#[test]
fn test_layouts_well_formed() {
    for spec in STANDARD.iter().chain(CUSTOM.iter()) {
        assert!(spec.msb >= spec.lsb);
        assert!(spec.msb <= 31);
    }

    // Both layouts cover all 32 bits without overlap.
    for layout in [&STANDARD[..], &CUSTOM[..]] {
        let total: u32 = layout.iter().map(|spec| spec.bits()).sum();
        assert_eq!(32, total);
    }
}

#[test]
fn test_fields_recombine() {
    for word in [0, 1, 0x00000093, 0xdeadbeef, 0x80000000, u32::MAX] {
        let sum = extract(word, &STANDARD)
            .iter()
            .fold(0, |acc, field| acc | (field.value << field.spec.lsb));
        assert_eq!(word, sum);
    }
}

#[test]
fn test_merged_field_concatenates() {
    for word in [0, 0x00000093, 0xdeadbeef, u32::MAX] {
        let std = extract(word, &STANDARD);
        let custom = extract(word, &CUSTOM);
        assert_eq!(custom[0].value, (std[0].value << 5) | std[1].value);
    }
}

#[test]
fn test_extract_addi() {
    let fields = extract(0x00000093, &STANDARD);
    let values: Vec<u32> = fields.iter().map(|field| field.value).collect();
    assert_eq!(vec![0, 0, 0, 0, 1, 0x13], values);
}
