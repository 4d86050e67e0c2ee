// Per-source checksum: Adler-32.
//
// SIMD-accelerated by default (feature-gated `adler32`), with a pure-Rust
// fallback below for builds that disable it.

/// Compute the Adler-32 checksum of `data`.
pub fn compute(data: &[u8]) -> u32 {
    #[cfg(feature = "adler32")]
    {
        use simd_adler32::Adler32;
        let mut hasher = Adler32::new();
        hasher.write(data);
        hasher.finish()
    }
    #[cfg(not(feature = "adler32"))]
    {
        compute_fallback(data)
    }
}

#[cfg_attr(feature = "adler32", allow(dead_code))]
fn compute_fallback(data: &[u8]) -> u32 {
    const MOD_ADLER: u32 = 65521;
    let mut a: u32 = 1;
    let mut b: u32 = 0;
    for &byte in data {
        a = (a + u32::from(byte)) % MOD_ADLER;
        b = (b + a) % MOD_ADLER;
    }
    (b << 16) | a
}
