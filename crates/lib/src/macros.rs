/// Load the input of a day from the `inputs` directory of the calling crate,
/// unless overridden with `--input`.
///
/// Evaluates to `(IStr, Box<Path>)` and returns early with the error if the
/// input can't be read.
#[macro_export]
macro_rules! input {
    ($opts:expr, $path:literal) => {
        $crate::env::input(
            $opts,
            concat!("inputs/", $path),
            concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path),
        )?
    };
}

/// Declare the entrypoint of a day.
///
/// The wrapped function takes the input and returns the answers. The
/// generated `main` parses options, loads the input and either prints the
/// answers or benches the function. If `expect` is given, the answers are
/// checked against it unless a custom input is used, and a mismatch is an
/// error.
///
/// ```ignore
/// lib::entry! {
///     input = "d01.txt",
///     expect = (514579, 241861950),
///     fn main(mut input: IStr) -> Result<(i64, i64)> {
///         /* .. */
///     }
/// }
/// ```
#[macro_export]
macro_rules! entry {
    (
        input = $path:literal
        $(, expect = $expect:expr)?
        ,
        $(#[$meta:meta])*
        fn $name:ident($($arg:tt)*) -> $ret:ty $body:block
    ) => {
        fn main() -> $crate::prelude::Result<()> {
            $(#[$meta])*
            fn $name($($arg)*) -> $ret $body

            let opts = $crate::cli::Opts::parse()?;
            let (input, path) = $crate::input!(&opts, $path);

            match opts.mode {
                $crate::cli::Mode::Default => {
                    let value = match $name(input) {
                        Ok(value) => value,
                        Err(error) => return Err($crate::cli::error_context(&path, input, error)),
                    };

                    $($crate::cli::check_expected(&opts, &value, &$expect)?;)?

                    $crate::cli::answers(&opts, &value)?;
                }
                $crate::cli::Mode::Bench => {
                    let mut b = $crate::cli::Bencher::new();
                    let call = || $name(input).map_err(|error| $crate::cli::error_context(&path, input, error));
                    $crate::entry!(@bench b, opts, call $(, $expect)?);
                }
            }

            Ok(())
        }
    };

    (@bench $b:ident, $opts:ident, $call:expr, $expect:expr) => {
        $b.iter_expected(&$opts, $expect, $call)?
    };

    (@bench $b:ident, $opts:ident, $call:expr) => {
        $b.iter(&$opts, $call)?
    };
}
