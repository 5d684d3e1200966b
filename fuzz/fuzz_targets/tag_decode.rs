#![no_main]

use libfuzzer_sys::fuzz_target;
use tag::{decode, encode, Limits};

fuzz_target!(|data: &[u8]| {
    let limits = Limits::for_testing();
    if let Ok(root) = decode(data, &limits) {
        // Anything that decodes must re-encode to the exact input.
        let bytes = encode(&root).expect("decoded tree re-encodes");
        assert_eq!(bytes, data);
    }
});
