use crate::polynomial::Polynomial;
use ::sampling::source::Source;

impl Polynomial<i64> {
    /// Builds a polynomial of the given degree with coefficients uniform in
    /// \[-2^{basek-1}, 2^{basek-1}).
    pub fn uniform(degree: usize, basek: usize, source: &mut Source) -> Self {
        let base2k: u64 = 1 << basek;
        let mask: u64 = base2k - 1;
        let base2k_half: i64 = (base2k >> 1) as i64;
        Polynomial(
            (0..=degree)
                .map(|_| (source.next_u64n(base2k, mask) as i64) - base2k_half)
                .collect(),
        )
    }
}

impl Polynomial<f64> {
    /// Builds a polynomial of the given degree with coefficients uniform in
    /// \[min, max).
    pub fn uniform(degree: usize, min: f64, max: f64, source: &mut Source) -> Self {
        Polynomial((0..=degree).map(|_| source.next_f64(min, max)).collect())
    }
}
