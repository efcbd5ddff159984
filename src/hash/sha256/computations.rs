//! SHA-256 logical functions and round loop
//!
//! All functions operate on 32-bit words with wrapping arithmetic and
//! contain no data-dependent branches.
//!
//! The message schedule is kept as a rolling window of 16 words: word
//! `W[t]` for `t >= 16` overwrites slot `t mod 16`, which held `W[t - 16]`.

use super::K256;

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// `Ch(e, f, g)`: each bit of `e` chooses between `f` and `g`.
#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

/// `Maj(a, b, c)`: bitwise majority vote.
#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Computes schedule word `W[t]` in place for `16 <= t < 64`.
#[inline(always)]
fn expand(w: &mut [u32; 16], t: usize) {
    let w16 = w[t & 15];
    let w15 = w[(t + 1) & 15];
    let w7 = w[(t + 9) & 15];
    let w2 = w[(t + 14) & 15];

    w[t & 15] = w16
        .wrapping_add(small_sigma0(w15))
        .wrapping_add(w7)
        .wrapping_add(small_sigma1(w2));
}

/// Working variables `a..h` of one compression.
struct Working([u32; 8]);

impl Working {
    #[inline(always)]
    fn round(&mut self, wi: u32, ki: u32) {
        let [a, b, c, d, e, f, g, h] = self.0;

        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(wi)
            .wrapping_add(ki);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        self.0 = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
    }

    #[inline(always)]
    fn fold_into(self, state: &mut [u32; 8]) {
        for (s, v) in state.iter_mut().zip(self.0) {
            *s = s.wrapping_add(v);
        }
    }
}

/// Runs the 64 SHA-256 rounds over one block and adds the result into
/// `state`.
///
/// `w` holds the first 16 schedule words of the block (big-endian
/// decoded); the remaining 48 are expanded on the fly.
#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u32; 8], mut w: [u32; 16]) {
    let mut v = Working(*state);

    for (t, &kt) in K256.iter().enumerate() {
        if t >= 16 {
            expand(&mut w, t);
        }

        v.round(w[t & 15], kt);
    }

    v.fold_into(state);
}

/// Runs the 64 SHA-256 rounds over one block and adds the result into
/// `state`.
///
/// Same contract as the looped variant, with every round expanded at
/// compile time.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u32; 8], mut w: [u32; 16]) {
    let mut v = Working(*state);

    macro_rules! rounds {
        (load: $($t:literal)*) => {
            $( v.round(w[$t], K256[$t]); )*
        };
        (expand: $($t:literal)*) => {
            $(
                expand(&mut w, $t);
                v.round(w[$t & 15], K256[$t]);
            )*
        };
    }

    rounds!(load: 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15);

    rounds!(expand: 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31);
    rounds!(expand: 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47);
    rounds!(expand: 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63);

    v.fold_into(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ch_selects_by_bit() {
        assert_eq!(ch(0xFFFF_0000, 0x1234_5678, 0x9ABC_DEF0), 0x1234_DEF0);
    }

    #[test]
    fn maj_votes_by_bit() {
        assert_eq!(maj(0b1100, 0b1010, 0b0110), 0b1110);
    }

    #[test]
    fn expand_matches_direct_formula() {
        // W[16] = sigma1(W[14]) + W[9] + sigma0(W[1]) + W[0]
        let mut w = [0u32; 16];
        for (i, slot) in w.iter_mut().enumerate() {
            *slot = (i as u32).wrapping_mul(0x9E37_79B9);
        }
        let expected = small_sigma1(w[14])
            .wrapping_add(w[9])
            .wrapping_add(small_sigma0(w[1]))
            .wrapping_add(w[0]);

        expand(&mut w, 16);

        assert_eq!(w[0], expected);
    }

    /// Full 64-word schedule, no rolling window or unrolling.
    fn textbook_rounds(state: &mut [u32; 8], block: [u32; 16]) {
        let mut w = [0u32; 64];
        w[..16].copy_from_slice(&block);
        for t in 16..64 {
            w[t] = small_sigma1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(small_sigma0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
        for t in 0..64 {
            let t1 = h
                .wrapping_add(big_sigma1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K256[t])
                .wrapping_add(w[t]);
            let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *s = s.wrapping_add(v);
        }
    }

    #[test]
    fn all_rounds_matches_textbook_schedule() {
        // Checks whichever variant the `speed` feature selects
        let mut block = [0u32; 16];
        let mut state = super::super::H256_INIT;

        for round in 0..8u32 {
            for (i, slot) in block.iter_mut().enumerate() {
                *slot = (i as u32 ^ round).wrapping_mul(0x0101_0101).rotate_left(round);
            }

            let mut expected = state;
            textbook_rounds(&mut expected, block);
            all_rounds(&mut state, block);

            assert_eq!(state, expected);
        }
    }
}
