/// Inputs shared by the parse benches, one per digit count.
pub const NUMBERS: &[&str] = &[
    "1",
    "12",
    "123",
    "1234",
    "12345",
    "123456",
    "1234567",
    "12345678",
    "123456789",
    "1234567890",
    "12345678901",
    "123456789012",
    "1234567890123",
    "12345678901234",
    "123456789012345",
    "1234567890123456",
    "12345678901234567",
    "123456789012345678",
    "1234567890123456789",
    "18446744073709551615",
];

/// A short mix of field widths, like ids and counters in a text record.
pub const FIELDS: &[&str] = &[
    "123498",
    "987234",
    "8907239874",
    "982734",
    "123876",
    "10987",
    "84750",
];
