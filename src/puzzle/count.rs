//! Minimal step count
//!
//! The optimal solution for `n` disks has exactly `2^n - 1` moves. At 64
//! disks `2^n` no longer fits in a `u64`, so the count is always computed as
//! a [`BigUint`].

use num_bigint::BigUint;
use num_traits::One;

/// Exact minimal number of moves for `n` disks: `2^n - 1`
pub fn min_moves(n: u32) -> BigUint {
    (BigUint::one() << n) - BigUint::one()
}

/// Format an integer with `,` between groups of three digits
pub fn format_grouped(value: &BigUint) -> String {
    let digits = value.to_str_radix(10);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_counts() {
        assert_eq!(min_moves(0), BigUint::from(0u32));
        assert_eq!(min_moves(1), BigUint::from(1u32));
        assert_eq!(min_moves(2), BigUint::from(3u32));
        assert_eq!(min_moves(12), BigUint::from(4095u32));
    }

    #[test]
    fn test_sixty_four_disks() {
        assert_eq!(min_moves(64), BigUint::from(u64::MAX));
        assert_eq!(min_moves(64).to_string(), "18446744073709551615");
        assert_eq!(min_moves(65).bits(), 65);
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(&BigUint::from(0u32)), "0");
        assert_eq!(format_grouped(&BigUint::from(999u32)), "999");
        assert_eq!(format_grouped(&BigUint::from(1000u32)), "1,000");
        assert_eq!(format_grouped(&BigUint::from(4095u32)), "4,095");
        assert_eq!(
            format_grouped(&min_moves(64)),
            "18,446,744,073,709,551,615"
        );
    }
}
