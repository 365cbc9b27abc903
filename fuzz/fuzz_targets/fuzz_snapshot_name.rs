#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(candidate) = std::str::from_utf8(data) {
        // Snapshot name parsing - this should never panic
        let _ = lvm_auto_snapshot::parse_snapshot_name(candidate, "data");
        if let Some((source, rest)) = candidate.split_once('\n') {
            let _ = lvm_auto_snapshot::parse_snapshot_name(rest, source);
        }
    }
});
