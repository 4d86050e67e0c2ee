#![no_main]
use libfuzzer_sys::fuzz_target;
use lzp::encoder::{self, EncodeOptions};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Use the first byte as control flags and split the rest into an
    // optional source and the target to encode.
    let flags = data[0];
    let payload = &data[1..];
    let use_source = flags & 1 != 0;

    let split = payload.len() / 2;
    let (source, target) = if use_source && split > 0 {
        (&payload[..split], &payload[split..])
    } else {
        (&[] as &[u8], payload)
    };

    let opts = EncodeOptions {
        header: flags & 2 != 0,
        min_match: 2,
    };
    let (patch, _) = encoder::encode_with_options(target, &[source], &opts).unwrap();
    let decoded = lzp::decoder::decode(&patch, &[source], opts.header).unwrap();
    assert_eq!(decoded, target);
});
