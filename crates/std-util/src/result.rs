/// Unwraps an `Ok`, panicking with the error otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; actual=Err({:?})", e),
        }
    };
}

/// Unwraps an `Err`, panicking with the value otherwise.
///
/// With a second argument, also checks the error against the named
/// predicate method, e.g. `assert_err!(res, is_shape_mismatch)`.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            Ok(v) => panic!("expected `Err`; actual=Ok({:?})", v),
        }
    };
    ($e:expr, $is:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$is(),
            concat!("expected error matching `", stringify!($is), "`; actual={:?}"),
            err
        );
        err
    }};
}
