#![no_main]

use byteops::{and, lrotate, lshift, not, or, rrotate, rshift, xor};
use libfuzzer_sys::fuzz_target;

// Input layout (3 bytes):
// [0] first operand
// [1] second operand
// [2] shift/rotate count

const INPUT_SIZE: usize = 3;

fuzz_target!(|data: &[u8]| {
    if data.len() < INPUT_SIZE {
        return;
    }

    let (a, b, n) = (data[0], data[1], data[2]);

    // Every operation must be total: no operand or count may panic.
    let _ = and(a, b);
    let _ = or(a, b);
    let _ = xor(a, b);
    let _ = not(a);
    let _ = lshift(a, n);
    let _ = rshift(a, n);
    let _ = lrotate(a, n);
    let _ = rrotate(a, n);

    assert_eq!(not(not(a)), a);
    assert_eq!(xor(xor(a, b), b), a);
    assert_eq!(lrotate(rrotate(a, n), n), a);
    assert_eq!(rrotate(lrotate(a, n), n), a);
    assert_eq!(lshift(a, n), lshift(a, n % 8));
    assert_eq!(rshift(a, n), rshift(a, n % 8));
});
