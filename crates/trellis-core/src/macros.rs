/// Builds a [`Row`](crate::stmt::Row) from `key => value` pairs.
#[macro_export]
macro_rules! row {
    () => {
        $crate::stmt::Row::new()
    };
    (
        $( $key:expr => $value:expr ),+ $(,)?
    ) => {{
        let mut row = $crate::stmt::Row::new();
        $( row.insert($key, $value); )+
        row
    }};
}
