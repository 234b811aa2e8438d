use nalgebra::RealField;

/// A cubic in Bernstein form.
#[derive(Copy, Clone, Debug)]
pub struct BernsteinPolynomial<T: RealField + Copy> {
    pub coeffs: [T; 4],
}

fn binomial(n: usize, k: usize) -> f64 {
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

impl<T: RealField + Copy> BernsteinPolynomial<T> {
    /// Converts `a_0 + a_1 t + a_2 t^2 + a_3 t^3` into Bernstein form.
    pub fn from_power_basis(power: [T; 4]) -> Self {
        let coeffs = [0, 1, 2, 3].map(|i| {
            (0..=i).fold(T::zero(), |acc, k| {
                let weight: T = nalgebra::convert(binomial(i, k) / binomial(3, k));
                acc + power[k] * weight
            })
        });

        Self { coeffs }
    }
}

#[cfg(test)]
impl<T: RealField + Copy> BernsteinPolynomial<T> {
    pub(crate) fn value(&self, t: T) -> T {
        let t1 = T::one() - t;
        let mut values = self.coeffs;

        // De Casteljau algorithm
        for i in (1..values.len()).rev() {
            for j in 0..i {
                values[j] = t1 * values[j] + t * values[j + 1];
            }
        }

        values[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn power_basis_conversion_preserves_values() {
        let power = [1.0, -2.0, 0.5, 3.0];
        let bernstein = BernsteinPolynomial::from_power_basis(power);

        for t in [0.0_f64, 0.25, 0.5, 0.75, 1.0] {
            let expected: f64 = power
                .iter()
                .enumerate()
                .map(|(k, a)| a * t.powi(k as i32))
                .sum();
            assert_relative_eq!(bernstein.value(t), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn cubic_conversion_matches_known_control_points() {
        // 3t - 3t^2 + t^3 is the Bernstein polynomial with control values 0, 1, 1, 1.
        let bernstein = BernsteinPolynomial::from_power_basis([0.0, 3.0, -3.0, 1.0]);
        for (got, want) in bernstein.coeffs.iter().zip([0.0, 1.0, 1.0, 1.0]) {
            assert_relative_eq!(*got, want, epsilon = 1e-12);
        }
    }
}
