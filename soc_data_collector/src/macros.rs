/// Attaches a formatted context message to a [`Result`] or [`Option`].
#[macro_export]
macro_rules! context {
    ($val:expr; $($arg:tt)*) => {
        anyhow::Context::with_context($val, || format!($($arg)*))
    };
}
