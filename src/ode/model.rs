use crate::ode::{DynamicResizer, FixedLength, FixedResizer, Resize, Resizer};
use alga::general::RealField;
use nalgebra::{DVector, SVector, Scalar};

/// A container usable as ODE state and as the derivative buffer for it.
pub trait ModelState: Sized
where
  for<'a> &'a Self: IntoIterator<Item = &'a Self::S>,
  for<'a> &'a mut Self: IntoIterator<Item = &'a mut Self::S>,
{
  type S: RealField + From<f32>;

  /// Strategy used to match a derivative buffer to a state of this type.
  type Resizer: Resizer<Self> + Default;

  /// An empty (or zeroed, if the length is fixed) container.
  fn new() -> Self;
}

/// Right hand side of dx/dt = f(x, t) for systems which are more
/// convenient to write as a type than as a closure.
pub trait Model
where
  for<'a> &'a Self::State:
    IntoIterator<Item = &'a <Self::State as ModelState>::S>,
  for<'a> &'a mut Self::State:
    IntoIterator<Item = &'a mut <Self::State as ModelState>::S>,
{
  type State: ModelState;

  fn derivative(
    &self,
    x: &Self::State,
    dxdt: &mut Self::State,
    t: <Self::State as ModelState>::S,
  );
}

impl<S: RealField + From<f32>> Resize for Vec<S> {
  #[inline]
  fn len(&self) -> usize {
    Vec::len(self)
  }

  fn resize_as(&mut self, other: &Self) {
    self.resize(other.len(), 0.0.into());
  }
}

impl<S: RealField + From<f32>> ModelState for Vec<S> {
  type S = S;
  type Resizer = DynamicResizer;

  fn new() -> Self {
    Vec::new()
  }
}

impl<S: RealField + From<f32> + Scalar> Resize for DVector<S> {
  #[inline]
  fn len(&self) -> usize {
    self.nrows()
  }

  fn resize_as(&mut self, other: &Self) {
    if self.nrows() != other.nrows() {
      self.resize_vertically_mut(other.nrows(), 0.0.into());
    }
  }
}

impl<S: RealField + From<f32> + Scalar> ModelState for DVector<S> {
  type S = S;
  type Resizer = DynamicResizer;

  fn new() -> Self {
    DVector::from_element(0, 0.0.into())
  }
}

impl<S, const N: usize> FixedLength for [S; N] {
  const LEN: usize = N;
}

impl<S: RealField + From<f32>, const N: usize> ModelState for [S; N] {
  type S = S;
  type Resizer = FixedResizer;

  fn new() -> Self {
    [0.0.into(); N]
  }
}

impl<S: Scalar, const N: usize> FixedLength for SVector<S, N> {
  const LEN: usize = N;
}

impl<S: RealField + From<f32> + Scalar, const N: usize> ModelState
  for SVector<S, N>
{
  type S = S;
  type Resizer = FixedResizer;

  fn new() -> Self {
    SVector::from_element(0.0.into())
  }
}
