#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use times_core::fraction::BigFraction;
use times_store::state_file;

fuzz_target!(|data: &[u8]| {
    let Ok(checkpoint) = state_file::decode(Path::new("state.txt"), data) else {
        return;
    };

    // Anything accepted must re-encode and decode to the same record.
    let mut encoded = Vec::new();
    state_file::encode(&mut encoded, checkpoint.cursor, &checkpoint.words).unwrap();
    let again = state_file::decode(Path::new("state.txt"), encoded.as_slice()).unwrap();
    assert_eq!(again, checkpoint);

    if !checkpoint.is_fresh() {
        let top_is_zero = checkpoint.words.last() == Some(&0);
        assert_eq!(BigFraction::from_words(checkpoint.words).is_ok(), !top_is_zero);
    }
});
