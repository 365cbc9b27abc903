#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        // lvs JSON parsing - this should never panic
        let _ = lvm_auto_snapshot::infrastructure::lvm::parse_lvs_report(json);
    }
});
