//! Launch parameters
//!
//! Arguments are read as URL query pairs, so `demo=true`, `?demo=true`
//! and `--demo=true` are all accepted. Several pairs may be joined with
//! `&` in a single argument.

/// Flags read from the command line at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaunchParams {
    /// Pre-fill the form with the demo sample
    pub demo: bool,
}

impl LaunchParams {
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Self::default();

        for arg in args {
            let arg = arg.as_ref();
            let query = arg
                .strip_prefix('?')
                .or_else(|| arg.strip_prefix("--"))
                .unwrap_or(arg);

            for pair in query.split('&') {
                if let Some(("demo", value)) = pair.split_once('=') {
                    params.demo = value == "true";
                }
            }
        }

        params
    }
}
