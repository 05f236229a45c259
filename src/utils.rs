#[macro_export]
macro_rules! assert_float_eq {
  ($l : expr, $r : expr) => {
    $crate::assert_float_eq!($l, $r, 1e-9)
  };
  ($l : expr, $r : expr, $eps : expr) => {
    assert!(($l - $r).abs() < $eps, "{} != {}", $l, $r);
  };
}
