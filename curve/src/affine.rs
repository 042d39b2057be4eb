use crate::basefield::BaseField;
use crate::projective::Projective;

/// Affine point in `(x, u)` coordinates with `u = x / y`.
///
/// Only used for precomputed windows and never serialized; points cross
/// the API boundary through [`Projective::decode`]. The neutral element is
/// `(0, 0)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Affine {
    pub x: BaseField,
    pub u: BaseField,
}

impl Affine {
    /// The neutral element.
    pub const NEUTRAL: Self = Affine {
        x: BaseField::ZERO,
        u: BaseField::ZERO,
    };

    pub const fn new(x: BaseField, u: BaseField) -> Self {
        Affine { x, u }
    }

    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.u.is_zero()
    }

    #[inline]
    pub fn to_projective(&self) -> Projective {
        Projective {
            x: self.x,
            z: BaseField::ONE,
            u: self.u,
            t: BaseField::ONE,
        }
    }

    #[inline]
    pub fn negate(&self) -> Self {
        Affine {
            x: self.x,
            u: -self.u,
        }
    }

    /// Encoding `w = 1/u` of the point; the neutral encodes to zero.
    #[inline]
    pub fn encode(&self) -> BaseField {
        self.u.inverse_or_zero()
    }

    /// Constant-time lookup of `k * P` in a window holding
    /// `[P, 2P, ..., len * P]`, for `-len <= k <= len`.
    ///
    /// Every entry is read regardless of `k`.
    pub fn lookup(window: &[Affine], k: i32) -> Affine {
        // split k into sign and magnitude
        let sign = ((k as u32) >> 31).wrapping_neg();
        let ka = ((k as u32) ^ sign).wrapping_sub(sign);
        let km1 = ka.wrapping_sub(1);

        let mut x = BaseField::ZERO;
        let mut u = BaseField::ZERO;
        for (i, entry) in window.iter().enumerate() {
            let m = km1.wrapping_sub(i as u32);
            // zero iff m == 0
            let hit = ((m | m.wrapping_neg()) >> 31) == 0;
            x = BaseField::conditional_select(&x, &entry.x, hit);
            u = BaseField::conditional_select(&u, &entry.u, hit);
        }

        // k == 0 matched nothing and leaves the neutral (0, 0)
        let neg_u = -u;
        u = BaseField::conditional_select(&u, &neg_u, sign != 0);

        Affine { x, u }
    }

    /// Same as [`Affine::lookup`] but indexes directly; only for public `k`.
    pub fn lookup_vartime(window: &[Affine], k: i32) -> Affine {
        match k {
            0 => Self::NEUTRAL,
            k if k > 0 => window[(k - 1) as usize],
            k => window[(-k - 1) as usize].negate(),
        }
    }
}

impl From<Affine> for Projective {
    fn from(point: Affine) -> Self {
        point.to_projective()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Group;

    fn window() -> [Affine; 16] {
        Projective::GENERATOR.make_window()
    }

    #[test]
    fn test_lookup_positive_and_negative() {
        let win = window();
        let g = Projective::GENERATOR;

        for k in 1..=16i32 {
            let expected = g.mul_u64(k as u64);
            assert_eq!(Affine::lookup(&win, k).to_projective(), expected);
            assert_eq!(Affine::lookup(&win, -k).to_projective(), -expected);
        }
    }

    #[test]
    fn test_lookup_zero_is_neutral() {
        let win = window();
        let p = Affine::lookup(&win, 0);
        assert_eq!(p, Affine::NEUTRAL);
        assert!(p.is_neutral());
    }

    #[test]
    fn test_lookup_matches_vartime() {
        let win = window();
        for k in -16..=16 {
            assert_eq!(Affine::lookup(&win, k), Affine::lookup_vartime(&win, k));
        }
    }

    #[test]
    fn test_affine_encode_matches_projective() {
        let win = window();
        for entry in win.iter() {
            assert_eq!(entry.encode(), entry.to_projective().encode());
        }
    }
}
