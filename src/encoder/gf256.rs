/// GF(256) arithmetic for QR Reed-Solomon coding
/// Primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D), generator alpha = 2
///
/// Tables are built per instance instead of living in a static, so every
/// caller owns its own copy and nothing needs synchronisation.
#[derive(Debug, Clone)]
pub struct Gf256 {
    /// alpha^i for i in 0..255, mirrored into 255..510 so `log a + log b` never wraps
    exp: [u8; 510],
    /// log[alpha^i] = i; log[0] is unused
    log: [u8; 256],
}

const PRIMITIVE_POLY: u16 = 0x11D;

impl Gf256 {
    pub fn new() -> Self {
        let mut exp = [0u8; 510];
        let mut log = [0u8; 256];

        let mut x: u16 = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLY;
            }
        }
        for i in 255..510 {
            exp[i] = exp[i - 255];
        }

        Self { exp, log }
    }

    /// alpha^n
    pub fn exp(&self, n: usize) -> u8 {
        self.exp[n % 255]
    }

    /// Discrete log of a non-zero element
    pub fn log(&self, a: u8) -> usize {
        debug_assert!(a != 0, "log of zero is undefined");
        self.log[a as usize] as usize
    }

    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    pub fn div(&self, a: u8, b: u8) -> u8 {
        assert!(b != 0, "Division by zero");
        if a == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + 255 - self.log[b as usize] as usize]
    }

    pub fn inv(&self, a: u8) -> u8 {
        self.div(1, a)
    }

    /// Product of two polynomials, coefficients highest degree first.
    /// Addition in GF(256) is XOR.
    pub fn poly_mul(&self, a: &[u8], b: &[u8]) -> Vec<u8> {
        if a.is_empty() || b.is_empty() {
            return Vec::new();
        }
        let mut out = vec![0u8; a.len() + b.len() - 1];
        for (i, &ai) in a.iter().enumerate() {
            for (j, &bj) in b.iter().enumerate() {
                out[i + j] ^= self.mul(ai, bj);
            }
        }
        out
    }

    /// Evaluate a polynomial (highest degree first) at x using Horner's rule
    pub fn poly_eval(&self, poly: &[u8], x: u8) -> u8 {
        poly.iter().fold(0u8, |acc, &c| self.mul(acc, x) ^ c)
    }
}

impl Default for Gf256 {
    fn default() -> Self {
        Self::new()
    }
}
