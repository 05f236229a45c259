/// Keeps a derivative buffer the same length as the state it is computed for.
///
/// Steppers call `same_size` before every step and `resize` only when it
/// returns `false`.
pub trait Resizer<X> {
  fn same_size(&self, x1: &X, x2: &X) -> bool;

  fn resize(&self, x: &X, dxdt: &mut X);
}

/// Containers whose length is only known at runtime.
pub trait Resize {
  fn len(&self) -> usize;

  /// Make `self` as long as `other`. Does nothing if they already match.
  fn resize_as(&mut self, other: &Self);
}

/// Containers whose length is part of their type.
pub trait FixedLength {
  const LEN: usize;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DynamicResizer;

impl<X: Resize> Resizer<X> for DynamicResizer {
  #[inline]
  fn same_size(&self, x1: &X, x2: &X) -> bool {
    x1.len() == x2.len()
  }

  fn resize(&self, x: &X, dxdt: &mut X) {
    dxdt.resize_as(x);
  }
}

/// Sizes always match for fixed length containers, the type system already
/// checked it.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedResizer;

impl<X: FixedLength> Resizer<X> for FixedResizer {
  #[inline]
  fn same_size(&self, _: &X, _: &X) -> bool {
    true
  }

  fn resize(&self, _: &X, _: &mut X) {
    unreachable!(
      "resize called on a fixed length container of length {}",
      X::LEN
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use nalgebra::{DVector, SVector};

  #[test]
  fn dynamic_same_size() {
    let r = DynamicResizer;
    assert!(r.same_size(&vec![1.0f64, 2.0], &vec![0.0, 0.0]));
    assert!(!r.same_size(&vec![1.0, 2.0], &Vec::<f64>::new()));
    assert!(r.same_size(&Vec::<f64>::new(), &Vec::<f64>::new()));
  }

  #[test]
  fn dynamic_resize_vec() {
    let r = DynamicResizer;
    let x = vec![1.0f64, 2.0, 3.0];
    let mut dxdt = Vec::new();

    r.resize(&x, &mut dxdt);
    assert_eq!(dxdt.len(), 3);
    assert!(r.same_size(&x, &dxdt));

    dxdt[1] = 7.0;
    r.resize(&x, &mut dxdt);
    assert_eq!(dxdt, vec![0.0, 7.0, 0.0]);

    let shorter = vec![1.0f64];
    r.resize(&shorter, &mut dxdt);
    assert_eq!(dxdt, vec![0.0]);
  }

  #[test]
  fn dynamic_resize_dvector() {
    let r = DynamicResizer;
    let x = DVector::from_vec(vec![1.0f64, 2.0, 3.0, 4.0]);
    let mut dxdt = DVector::<f64>::zeros(0);

    assert!(!r.same_size(&x, &dxdt));
    r.resize(&x, &mut dxdt);
    assert_eq!(dxdt.len(), 4);
    assert!(r.same_size(&x, &dxdt));
  }

  #[test]
  fn fixed_same_size() {
    let r = FixedResizer;
    assert!(r.same_size(&[1.0, 2.0, 3.0], &[0.0; 3]));
    assert!(r.same_size(
      &SVector::<f64, 2>::new(1.0, 2.0),
      &SVector::<f64, 2>::zeros()
    ));
  }

  #[test]
  #[should_panic(expected = "resize called on a fixed length container")]
  fn fixed_resize_panics() {
    let mut dxdt = [0.0f64; 3];
    FixedResizer.resize(&[1.0, 2.0, 3.0], &mut dxdt);
  }
}
