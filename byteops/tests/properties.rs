//! Property-based tests over arbitrary operands and counts.

use byteops::{and, lrotate, lshift, not, or, rrotate, rshift, xor};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rotation_round_trips_for_any_count(a in any::<u8>(), n in any::<u8>()) {
        prop_assert_eq!(lrotate(rrotate(a, n), n), a);
        prop_assert_eq!(rrotate(lrotate(a, n), n), a);
    }

    #[test]
    fn xor_is_an_involution(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(xor(xor(a, b), b), a);
    }

    #[test]
    fn de_morgan_holds(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(not(and(a, b)), or(not(a), not(b)));
        prop_assert_eq!(not(or(a, b)), and(not(a), not(b)));
    }

    #[test]
    fn rotations_compose_additively(a in any::<u8>(), m in 0u8..8, n in 0u8..8) {
        prop_assert_eq!(lrotate(lrotate(a, m), n), lrotate(a, (m + n) % 8));
        prop_assert_eq!(rrotate(rrotate(a, m), n), rrotate(a, (m + n) % 8));
    }

    #[test]
    fn counts_reduce_modulo_the_byte_width(a in any::<u8>(), n in any::<u8>()) {
        prop_assert_eq!(lshift(a, n), lshift(a, n % 8));
        prop_assert_eq!(rshift(a, n), rshift(a, n % 8));
        prop_assert_eq!(lrotate(a, n), lrotate(a, n % 8));
        prop_assert_eq!(rrotate(a, n), rrotate(a, n % 8));
    }

    #[test]
    fn a_rotation_never_changes_the_population_count(a in any::<u8>(), n in any::<u8>()) {
        prop_assert_eq!(lrotate(a, n).count_ones(), a.count_ones());
        prop_assert_eq!(rrotate(a, n).count_ones(), a.count_ones());
    }

    #[test]
    fn shifted_out_bits_are_zero_filled(a in any::<u8>(), n in 0u8..8) {
        // The n low bits after a left shift, and the n high bits after a
        // right shift, must be zero.
        prop_assert_eq!(lshift(a, n) & !(0xFFu8 << n), 0);
        prop_assert_eq!(rshift(a, n) & !(0xFFu8 >> n), 0);
    }
}
