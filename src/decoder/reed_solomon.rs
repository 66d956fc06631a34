/// Reed-Solomon error correction for QR codes
/// Codewords are polynomials with c[0] the coefficient of x^(n-1); the code's
/// generator has roots a^0 .. a^(nsym-1).
use crate::encoder::gf256::Gf256;

/// Reed-Solomon decoder for QR codes
pub struct ReedSolomonDecoder {
    field: Gf256,
    num_ecc_codewords: usize,
}

impl ReedSolomonDecoder {
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self {
            field: Gf256::new(),
            num_ecc_codewords,
        }
    }

    /// Most codeword errors this decoder can repair
    pub fn max_errors(&self) -> usize {
        self.num_ecc_codewords / 2
    }

    /// Correct `received` in place, returning how many codewords were repaired
    pub fn decode(&self, received: &mut [u8]) -> Result<usize, &'static str> {
        let syndrome = self.calculate_syndrome(received);
        if syndrome.iter().all(|&s| s == 0) {
            return Ok(0);
        }

        let (sigma, num_errors) = self.find_error_locator(&syndrome);
        if num_errors == 0 || num_errors > self.max_errors() || sigma.len() - 1 != num_errors {
            return Err("Too many errors");
        }

        let positions = self.find_error_positions(&sigma, received.len())?;
        let values = self.find_error_values(&sigma, &syndrome, &positions, received.len())?;

        for (&pos, &value) in positions.iter().zip(&values) {
            received[pos] ^= value;
        }

        if self.calculate_syndrome(received).iter().any(|&s| s != 0) {
            return Err("Uncorrectable error");
        }

        Ok(positions.len())
    }

    /// S_i = r(a^i)
    fn calculate_syndrome(&self, received: &[u8]) -> Vec<u8> {
        (0..self.num_ecc_codewords)
            .map(|i| self.field.poly_eval(received, self.field.exp(i)))
            .collect()
    }

    /// Berlekamp-Massey. Returns sigma in ascending order (sigma[0] = 1, trailing
    /// zeros trimmed) and the register length, which is the error count when
    /// the word is correctable.
    fn find_error_locator(&self, syndrome: &[u8]) -> (Vec<u8>, usize) {
        let gf = &self.field;
        let mut sigma = vec![1u8];
        let mut prev = vec![1u8];
        let mut prev_delta: u8 = 1;
        let mut l = 0;
        let mut m = 1;

        for i in 0..syndrome.len() {
            let mut delta = syndrome[i];
            for j in 1..=l {
                if j < sigma.len() {
                    delta ^= gf.mul(sigma[j], syndrome[i - j]);
                }
            }

            if delta == 0 {
                m += 1;
                continue;
            }

            let scale = gf.div(delta, prev_delta);
            let snapshot = sigma.clone();
            if sigma.len() < prev.len() + m {
                sigma.resize(prev.len() + m, 0);
            }
            // sigma = sigma - scale * x^m * prev
            for (j, &p) in prev.iter().enumerate() {
                sigma[j + m] ^= gf.mul(scale, p);
            }

            if 2 * l <= i {
                l = i + 1 - l;
                prev = snapshot;
                prev_delta = delta;
                m = 1;
            } else {
                m += 1;
            }
        }

        while sigma.len() > 1 && sigma.last() == Some(&0) {
            sigma.pop();
        }
        (sigma, l)
    }

    /// a^-(n-1-pos), the inverse locator of a codeword position
    fn inverse_locator(&self, pos: usize, n: usize) -> u8 {
        let e = (n - 1 - pos) % 255;
        self.field.exp((255 - e) % 255)
    }

    fn eval_ascending(&self, poly: &[u8], x: u8) -> u8 {
        poly.iter().rev().fold(0u8, |acc, &c| self.field.mul(acc, x) ^ c)
    }

    /// Chien search: positions whose inverse locator is a root of sigma
    fn find_error_positions(&self, sigma: &[u8], n: usize) -> Result<Vec<usize>, &'static str> {
        let positions: Vec<usize> = (0..n)
            .filter(|&pos| self.eval_ascending(sigma, self.inverse_locator(pos, n)) == 0)
            .collect();

        if positions.len() != sigma.len() - 1 {
            return Err("Wrong number of error positions found");
        }
        Ok(positions)
    }

    /// Forney: e = X * omega(X^-1) / sigma'(X^-1) for first root a^0
    fn find_error_values(
        &self,
        sigma: &[u8],
        syndrome: &[u8],
        positions: &[usize],
        n: usize,
    ) -> Result<Vec<u8>, &'static str> {
        let gf = &self.field;

        // omega = syndrome * sigma mod x^nsym
        let mut omega = vec![0u8; syndrome.len()];
        for (i, o) in omega.iter_mut().enumerate() {
            for j in 0..=i.min(sigma.len() - 1) {
                *o ^= gf.mul(sigma[j], syndrome[i - j]);
            }
        }

        // formal derivative: odd-power terms shift down one degree
        let derivative: Vec<u8> = (1..sigma.len())
            .map(|i| if i % 2 == 1 { sigma[i] } else { 0 })
            .collect();

        positions
            .iter()
            .map(|&pos| {
                let x_inv = self.inverse_locator(pos, n);
                let x = gf.inv(x_inv);
                let denom = self.eval_ascending(&derivative, x_inv);
                if denom == 0 {
                    return Err("Forney denominator is zero");
                }
                let numer = gf.mul(x, self.eval_ascending(&omega, x_inv));
                Ok(gf.div(numer, denom))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::reed_solomon::ReedSolomonEncoder;

    fn codeword() -> Vec<u8> {
        let data: Vec<u8> = (0..55u8).map(|i| i.wrapping_mul(91).wrapping_add(7)).collect();
        let mut cw = data.clone();
        cw.extend(ReedSolomonEncoder::new(15).encode(&data));
        cw
    }

    #[test]
    fn test_clean_codeword() {
        let mut cw = codeword();
        let rs = ReedSolomonDecoder::new(15);
        assert_eq!(rs.decode(&mut cw), Ok(0));
        assert_eq!(cw, codeword());
    }

    #[test]
    fn test_corrects_up_to_seven() {
        let rs = ReedSolomonDecoder::new(15);
        for count in 1..=7 {
            let mut received = codeword();
            for k in 0..count {
                let pos = (k * 11 + 3) % received.len();
                received[pos] ^= 0x5A ^ (k as u8);
            }
            assert_eq!(rs.decode(&mut received), Ok(count), "{count} errors");
            assert_eq!(received, codeword());
        }
    }

    #[test]
    fn test_corrects_first_and_last() {
        let rs = ReedSolomonDecoder::new(15);
        let mut received = codeword();
        received[0] ^= 0xFF;
        received[69] ^= 0x01;
        assert_eq!(rs.decode(&mut received), Ok(2));
        assert_eq!(received, codeword());
    }

    #[test]
    fn test_rejects_too_many() {
        let rs = ReedSolomonDecoder::new(15);
        let mut received = codeword();
        for b in received.iter_mut().take(20) {
            *b ^= 0xA5;
        }
        assert!(rs.decode(&mut received).is_err());
    }
}
