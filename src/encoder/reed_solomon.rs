/// Reed-Solomon encoder for QR codes
/// Systematic encoding: ECC codewords are the remainder of data(x) * x^n / g(x)
use super::gf256::Gf256;

/// Reed-Solomon encoder with a precomputed generator polynomial
pub struct ReedSolomonEncoder {
    field: Gf256,
    /// g(x) = (x - a^0)(x - a^1)...(x - a^(n-1)), highest degree first, monic
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self::with_field(Gf256::new(), num_ecc_codewords)
    }

    pub fn with_field(field: Gf256, num_ecc_codewords: usize) -> Self {
        let mut generator = vec![1u8];
        for i in 0..num_ecc_codewords {
            generator = field.poly_mul(&generator, &[1, field.exp(i)]);
        }
        Self { field, generator }
    }

    pub fn num_ecc_codewords(&self) -> usize {
        self.generator.len() - 1
    }

    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    pub fn field(&self) -> &Gf256 {
        &self.field
    }

    /// Compute the ECC codewords for `data` by polynomial long division
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let ecc_len = self.num_ecc_codewords();
        let mut msg = Vec::with_capacity(data.len() + ecc_len);
        msg.extend_from_slice(data);
        msg.resize(data.len() + ecc_len, 0);

        for i in 0..data.len() {
            let coef = msg[i];
            if coef == 0 {
                continue;
            }
            for (j, &g) in self.generator.iter().enumerate() {
                msg[i + j] ^= self.field.mul(g, coef);
            }
        }

        msg.split_off(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_degree_and_roots() {
        let rs = ReedSolomonEncoder::new(15);
        assert_eq!(rs.generator().len(), 16);
        assert_eq!(rs.generator()[0], 1);
        let gf = rs.field();
        for i in 0..15 {
            assert_eq!(gf.poly_eval(rs.generator(), gf.exp(i)), 0, "root a^{i}");
        }
    }

    #[test]
    fn test_generator_degree_7_known() {
        // Generator for 7 ECC codewords from the QR standard, as exponents:
        // x^7 + a^87 x^6 + a^229 x^5 + a^146 x^4 + a^149 x^3 + a^238 x^2 + a^102 x + a^21
        let rs = ReedSolomonEncoder::new(7);
        let gf = rs.field();
        let expected: Vec<u8> = [0usize, 87, 229, 146, 149, 238, 102, 21]
            .iter()
            .map(|&e| gf.exp(e))
            .collect();
        assert_eq!(rs.generator(), expected.as_slice());
    }

    #[test]
    fn test_encode_known_vector() {
        // Version 1-M "01234567" example from ISO/IEC 18004 Annex I
        let data = [
            0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
            0xEC, 0x11,
        ];
        let rs = ReedSolomonEncoder::new(10);
        let ecc = rs.encode(&data);
        assert_eq!(
            ecc,
            vec![0xA5, 0x24, 0xD4, 0xC1, 0xED, 0x36, 0xC7, 0x87, 0x2C, 0x55]
        );
    }

    #[test]
    fn test_codeword_is_multiple_of_generator() {
        let rs = ReedSolomonEncoder::new(15);
        let data: Vec<u8> = (0..55u8).map(|i| i.wrapping_mul(37).wrapping_add(11)).collect();
        let mut codeword = data.clone();
        codeword.extend(rs.encode(&data));
        assert_eq!(codeword.len(), 70);
        let gf = rs.field();
        for i in 0..15 {
            assert_eq!(gf.poly_eval(&codeword, gf.exp(i)), 0);
        }
    }

    #[test]
    fn test_all_zero_data() {
        let rs = ReedSolomonEncoder::new(15);
        assert_eq!(rs.encode(&[0u8; 55]), vec![0u8; 15]);
    }
}
