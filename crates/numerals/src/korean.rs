//! Sino-Korean numeral transliteration.
//!
//! Numbers are partitioned into base-10000 groups. Within a group each
//! non-zero decimal digit is written as digit word + positional multiplier
//! (십/백/천), with the digit word elided when the digit is 1 and the
//! position carries a multiplier (십 rather than 일십). Non-zero groups take
//! the large-unit suffix for their position (만/억/조/경).

/// Digit words 1–9; index 0 is unused padding.
const DIGITS: [&str; 10] = ["", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

/// Positional multipliers for the tens/hundreds/thousands places.
const POSITIONS: [&str; 4] = ["", "십", "백", "천"];

/// Large-unit suffixes per base-10000 group: 10^4, 10^8, 10^12, 10^16.
const GROUPS: [&str; 5] = ["", "만", "억", "조", "경"];

/// The word for zero, returned exactly at input 0.
const ZERO: &str = "영";

/// Transliterate a non-negative integer into Sino-Korean numeral words.
///
/// ```
/// use crimson_numerals::to_korean_numeral;
///
/// assert_eq!(to_korean_numeral(0), "영");
/// assert_eq!(to_korean_numeral(10), "십");
/// assert_eq!(to_korean_numeral(100_000), "십만");
/// assert_eq!(to_korean_numeral(1_234_567), "백이십삼만사천오백육십칠");
/// ```
pub fn to_korean_numeral(n: u64) -> String {
    if n == 0 {
        return ZERO.to_string();
    }

    // Least-significant group first; u64 never exceeds the 경 group.
    let mut groups = [0u16; 5];
    let mut rest = n;
    let mut count = 0;
    while rest > 0 {
        groups[count] = (rest % 10_000) as u16;
        rest /= 10_000;
        count += 1;
    }

    let mut out = String::new();
    for idx in (0..count).rev() {
        let group = groups[idx];
        if group == 0 {
            continue;
        }
        push_group_words(&mut out, group);
        out.push_str(GROUPS[idx]);
    }
    out
}

/// Write the words for one base-10000 group (1..=9999).
fn push_group_words(out: &mut String, group: u16) {
    let mut divisor = 1_000;
    for position in (0..4).rev() {
        let digit = usize::from((group / divisor) % 10);
        if digit != 0 {
            // Sino-Korean elision: 1 is implicit before a multiplier.
            if !(digit == 1 && position > 0) {
                out.push_str(DIGITS[digit]);
            }
            out.push_str(POSITIONS[position]);
        }
        divisor /= 10;
    }
}
