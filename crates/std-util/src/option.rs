/// Unwraps a `Some`, panicking otherwise.
#[macro_export]
macro_rules! assert_some {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => panic!("expected `Some`; actual=None"),
        }
    };
}

#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        match $e {
            None => {}
            Some(v) => panic!("expected `None`; actual=Some({:?})", v),
        }
    };
}
