#![no_main]

use libfuzzer_sys::fuzz_target;
use srm::IndexFormat;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(format) = IndexFormat::new(raw) {
            let _ = format.render(i128::from(i64::MIN), raw);
            let _ = format.render(i128::from(i64::MAX) + 1, "");
        }
    }
});
