/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a `Result`, or logs the error with a context line and exits with
/// status 1. Only the binary's setup path uses it.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        $crate::unwrap_or_exit!($expr, "Fatal error")
    };
    ($expr:expr, $context:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}: {}", $context, e);
                std::process::exit(1);
            }
        }
    };
}
