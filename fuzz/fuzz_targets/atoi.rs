#![no_main]

use libfuzzer_sys::fuzz_target;
use sonic_atoi_fuzz::{sonic_atoi_fuzz, DigitsInput};

fuzz_target!(|input: DigitsInput| {
    sonic_atoi_fuzz(&input.bytes());
    sonic_atoi_fuzz(&input.digits);
});
