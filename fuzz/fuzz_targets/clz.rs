#![no_main]

use libfuzzer_sys::fuzz_target;
use sonic_atoi_fuzz::clz_fuzz;

fuzz_target!(|x: u64| {
    clz_fuzz(x);
});
