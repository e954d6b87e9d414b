#![no_main]

use libfuzzer_sys::fuzz_target;

use chanpick_core::parse_selection;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the catalog size, the rest is the expression.
    let len = usize::from(data[0]) % 64;
    let Ok(input) = std::str::from_utf8(&data[1..]) else {
        return;
    };

    if let Ok(indices) = parse_selection(input, len) {
        // A successful parse is non-empty, sorted, unique, and in bounds.
        assert!(!indices.is_empty());
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        assert!(indices.iter().all(|&i| i < len));
    }
});
