#![no_main]

use libfuzzer_sys::fuzz_target;
use times_core::constants::{MAX_DIGITS, WORD_MASK};
use times_core::fraction::BigFraction;
use times_core::indexer::BinIndexer;

fuzz_target!(|input: (u8, u32, Vec<u64>)| {
    let (digits, index, words) = input;
    let digits = u32::from(digits) % MAX_DIGITS + 1;
    let mut words: Vec<u64> = words.into_iter().take(64).map(|w| w & WORD_MASK).collect();
    match words.last_mut() {
        None => words.push(3),
        Some(top) if *top == 0 => *top = 1,
        Some(_) => {}
    }

    let indexer = BinIndexer::new(digits).unwrap();
    let mut value = BigFraction::from_words(words).unwrap();
    let before = value.len();
    value.advance();
    assert!(value.len() == before || value.len() == before + 1);
    assert!(value.words().iter().all(|&w| w <= WORD_MASK));

    let bin = indexer.bin(&value, u64::from(index));
    assert!(bin < indexer.bin_count());
});
