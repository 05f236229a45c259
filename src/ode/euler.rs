use crate::ode::{Model, ModelState, Resizer};
use std::convert::Infallible;

/// Explicit (forward) Euler stepper: x(t + dt) = x(t) + dt * f(x, t).
///
/// The derivative buffer is kept between steps and only resized when the
/// resizer reports that it no longer matches the state.
#[derive(Clone, Debug)]
pub struct Euler<X, R = <X as ModelState>::Resizer>
where
  X: ModelState,
  for<'a> &'a X: IntoIterator<Item = &'a X::S>,
  for<'a> &'a mut X: IntoIterator<Item = &'a mut X::S>,
  R: Resizer<X>,
{
  dxdt: X,
  resizer: R,
}

impl<X, R> Euler<X, R>
where
  X: ModelState,
  for<'a> &'a X: IntoIterator<Item = &'a X::S>,
  for<'a> &'a mut X: IntoIterator<Item = &'a mut X::S>,
  R: Resizer<X>,
{
  pub fn new() -> Self
  where
    R: Default,
  {
    Self::with_resizer(R::default())
  }

  pub fn with_resizer(resizer: R) -> Self {
    Self {
      dxdt: X::new(),
      resizer,
    }
  }

  /// Advance `x` by one step of `dt`. `system(x, dxdt, t)` must fill all of
  /// `dxdt` without changing its length.
  pub fn do_step<F>(&mut self, mut system: F, x: &mut X, t: X::S, dt: X::S)
  where
    F: FnMut(&X, &mut X, X::S),
  {
    let result = self.try_do_step(
      |x, dxdt, t| -> Result<(), Infallible> {
        system(x, dxdt, t);
        Ok(())
      },
      x,
      t,
      dt,
    );

    match result {
      Ok(()) => {}
      Err(never) => match never {},
    }
  }

  /// Same as `do_step` for a fallible system. An error is returned as is and
  /// `x` is left untouched.
  pub fn try_do_step<F, E>(
    &mut self,
    mut system: F,
    x: &mut X,
    t: X::S,
    dt: X::S,
  ) -> Result<(), E>
  where
    F: FnMut(&X, &mut X, X::S) -> Result<(), E>,
  {
    if !self.resizer.same_size(x, &self.dxdt) {
      self.resizer.resize(x, &mut self.dxdt);
      assert!(
        self.resizer.same_size(x, &self.dxdt),
        "derivative buffer still differs in size from the state after resize"
      );
    }

    system(x, &mut self.dxdt, t)?;

    for (x, dxdt) in (&mut *x).into_iter().zip(&self.dxdt) {
      *x += dt * *dxdt;
    }

    Ok(())
  }

  pub fn step<M>(&mut self, model: &M, x: &mut X, t: X::S, dt: X::S)
  where
    M: Model<State = X>,
  {
    self.do_step(|x, dxdt, t| model.derivative(x, dxdt, t), x, t, dt);
  }
}

impl<X, R> Default for Euler<X, R>
where
  X: ModelState,
  for<'a> &'a X: IntoIterator<Item = &'a X::S>,
  for<'a> &'a mut X: IntoIterator<Item = &'a mut X::S>,
  R: Resizer<X> + Default,
{
  fn default() -> Self {
    Self::new()
  }
}
