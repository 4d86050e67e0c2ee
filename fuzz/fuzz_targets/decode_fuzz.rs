#![no_main]
use libfuzzer_sys::fuzz_target;
use lzp::decoder;

fuzz_target!(|data: &[u8]| {
    // The decoder must never panic on arbitrary input — only ever return
    // Ok or a tagged DecodeError.
    let _ = decoder::decode(data, &[], false);

    if data.len() >= 2 {
        let split = data.len() / 2;
        let (source, patch) = data.split_at(split);
        let _ = decoder::decode(patch, &[source], false);
    }

    if data.len() >= 9 {
        // Also exercise the header path directly.
        let _ = decoder::decode(data, &[], true);
    }
});
