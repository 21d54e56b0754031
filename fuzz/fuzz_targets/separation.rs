#![no_main]

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = linesep::arbitrary::check_separation(&mut Unstructured::new(data));
});
