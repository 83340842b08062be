/// Imaginary parts smaller than this are treated as rounding noise.
pub const NEGLIGIBLE_IMAGINARY: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
  pub re: f64,
  pub im: f64,
}

impl Complex {
  pub const I: Complex = Complex { re: 0.0, im: 1.0 };

  pub fn new(re: f64, im: f64) -> Self {
    Complex { re, im }
  }

  pub fn from_real(re: f64) -> Self {
    Complex { re, im: 0.0 }
  }

  pub fn is_zero(self) -> bool {
    self.re == 0.0 && self.im == 0.0
  }

  pub fn has_negligible_imaginary(self) -> bool {
    self.im.abs() < NEGLIGIBLE_IMAGINARY
  }

  pub fn norm(self) -> f64 {
    self.re.hypot(self.im)
  }

  pub fn arg(self) -> f64 {
    self.im.atan2(self.re)
  }

  /// Principal branch of the natural logarithm.
  pub fn ln(self) -> Self {
    Complex::new(self.norm().ln(), self.arg())
  }

  pub fn exp(self) -> Self {
    let scale = self.re.exp();
    Complex::new(scale * self.im.cos(), scale * self.im.sin())
  }

  /// Principal square root.
  pub fn sqrt(self) -> Self {
    if self.im == 0.0 {
      return if self.re >= 0.0 {
        Complex::from_real(self.re.sqrt())
      } else {
        Complex::new(0.0, (-self.re).sqrt())
      };
    }
    let r = self.norm();
    let re = ((r + self.re) / 2.0).sqrt();
    let im = ((r - self.re) / 2.0).sqrt().copysign(self.im);
    Complex::new(re, im)
  }

  pub fn powc(self, exponent: Complex) -> Self {
    if self.is_zero() {
      return if exponent.re > 0.0 {
        Complex::from_real(0.0)
      } else {
        Complex::from_real(f64::INFINITY)
      };
    }
    (exponent * self.ln()).exp()
  }

  /// asin(z) = -i ln(iz + sqrt(1 - z²))
  pub fn asin(self) -> Self {
    let one = Complex::from_real(1.0);
    let root = (one - self * self).sqrt();
    -(Complex::I * (Complex::I * self + root).ln())
  }

  /// acos(z) = π/2 - asin(z)
  pub fn acos(self) -> Self {
    Complex::from_real(std::f64::consts::FRAC_PI_2) - self.asin()
  }
}

impl std::ops::Add for Complex {
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    Complex::new(self.re + rhs.re, self.im + rhs.im)
  }
}

impl std::ops::Sub for Complex {
  type Output = Self;

  fn sub(self, rhs: Self) -> Self {
    Complex::new(self.re - rhs.re, self.im - rhs.im)
  }
}

impl std::ops::Mul for Complex {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self {
    Complex::new(
      self.re * rhs.re - self.im * rhs.im,
      self.re * rhs.im + self.im * rhs.re,
    )
  }
}

impl std::ops::Div for Complex {
  type Output = Self;

  fn div(self, rhs: Self) -> Self {
    let denom = rhs.re * rhs.re + rhs.im * rhs.im;
    Complex::new(
      (self.re * rhs.re + self.im * rhs.im) / denom,
      (self.im * rhs.re - self.re * rhs.im) / denom,
    )
  }
}

impl std::ops::Neg for Complex {
  type Output = Self;

  fn neg(self) -> Self {
    Complex::new(-self.re, -self.im)
  }
}

/// Intermediate result of evaluating a sub-expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Real(f64),
  Complex(Complex),
  List(Vec<Value>),
}

impl Value {
  /// Collapse exact-zero imaginary parts back to reals.
  pub fn from_complex(c: Complex) -> Value {
    if c.im == 0.0 {
      Value::Real(c.re)
    } else {
      Value::Complex(c)
    }
  }

  /// The value as a real number, tolerating negligible imaginary noise.
  pub fn as_real(&self) -> Option<f64> {
    match self {
      Value::Real(n) => Some(*n),
      Value::Complex(c) if c.has_negligible_imaginary() => Some(c.re),
      _ => None,
    }
  }

  pub fn as_complex(&self) -> Option<Complex> {
    match self {
      Value::Real(n) => Some(Complex::from_real(*n)),
      Value::Complex(c) => Some(*c),
      Value::List(_) => None,
    }
  }
}
