//! fibo: Fibonacci terms and sums from the command line
//!
//! Prints one computed value to standard output. With no arguments it prints the
//! sum of the first 7 Fibonacci terms; a positional term count selects another.
//! Out-of-range inputs are reported on standard error with a non-zero exit status.
#![allow(clippy::multiple_crate_versions)]

/// Command-line interface for computing Fibonacci values.
#[cfg(feature = "cli")]
pub mod inner {
    use facet::Facet;
    use fibo::{
        debug, dummy_fibo_sum, fibo, fibo_sum, fibo_sum_linear, fibo_sum_wrapping, fibo_wrapping,
        FiboError, BUILD_CONFIG, DUMMY_TERM,
    };
    use std::io;

    /// Helper macro for verbose logging, expecting the last argument(s) in braces
    macro_rules! vlog {
        ($args:expr, { $($arg:tt)* }) => {
            if $args.verbose {
                eprintln!($($arg)*);
            }
        };
    }

    #[derive(Facet)]
    struct Args {
        /// Term index or number of terms (default: 7)
        #[facet(positional, default)]
        term: Option<String>,

        /// Print fibo(TERM) instead of fibo_sum(TERM)
        #[facet(named, short = 'f', long, default)]
        fibo: bool,

        /// Sum in a single pass instead of one fibo() call per term
        #[facet(named, short = 'l', long, default)]
        linear: bool,

        /// Use the unchecked functions, which wrap instead of failing
        #[facet(named, short = 'w', long, default)]
        wrapping: bool,

        /// Print the build configuration before the result
        #[facet(named, short = 'b', long, default)]
        build_config: bool,

        /// Show verbose output
        #[facet(named, short = 'v', long, default)]
        verbose: bool,

        /// Show this help message
        #[facet(named, short = 'h', long, default)]
        help: bool,
    }

    fn print_usage() {
        println!("Usage: fibo [OPTIONS] [TERM]");
        println!();
        println!("Compute a Fibonacci sum (or term) and print it.");
        println!();
        println!("Arguments:");
        println!("  [TERM]              Term index or number of terms (default: 7)");
        println!();
        println!("Options:");
        println!("  -f, --fibo          Print fibo(TERM) instead of fibo_sum(TERM)");
        println!("  -l, --linear        Sum in a single pass instead of one fibo() call per term");
        println!("  -w, --wrapping      Use the unchecked functions, which wrap instead of failing");
        println!("  -b, --build-config  Print the build configuration before the result");
        println!("  -v, --verbose       Show verbose output");
        println!("  -h, --help          Show this help message");
        println!();
        println!("Examples:");
        println!("  # Sum of the first 7 terms");
        println!("  fibo");
        println!();
        println!("  # The 50th term");
        println!("  fibo --fibo 50 (or `-f 50`)");
        println!();
        println!("  # A sum too large for u64, wrapped");
        println!("  fibo --wrapping 5000 (or `-w 5000`)");
    }

    /// Computes the requested value, labelled the way it is printed.
    fn compute(args: &Args, term: u32) -> Result<(&'static str, u64), FiboError> {
        if args.fibo {
            let value = if args.wrapping {
                fibo_wrapping(term)
            } else {
                fibo(term)?
            };
            return Ok(("fibo", value));
        }
        let value = if args.wrapping {
            fibo_sum_wrapping(term)
        } else if args.linear {
            fibo_sum_linear(term)?
        } else if args.term.is_none() {
            dummy_fibo_sum()?.value
        } else {
            fibo_sum(term)?
        };
        Ok(("fibo_sum", value))
    }

    /// Entry point for the `fibo` command-line interface.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if command-line argument parsing fails.
    ///
    /// The process exits with a non-zero status if the term is invalid or the
    /// result would overflow.
    pub fn main() -> io::Result<()> {
        let args: Args = facet_args::from_std_args()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{e}")))?;

        if args.help {
            print_usage();
            std::process::exit(0);
        }

        if args.verbose {
            debug::set_debug(true);
        }

        let term = match &args.term {
            None => DUMMY_TERM,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(term) => term,
                Err(_) => {
                    eprintln!("Error: invalid term '{raw}'");
                    std::process::exit(1);
                }
            },
        };

        vlog!(args, {"Term: {}", term});
        vlog!(args, {"Mode: {}", if args.fibo { "term" } else if args.linear { "linear sum" } else { "sum" }});
        vlog!(args, {"Wrapping: {}", args.wrapping});

        if args.build_config {
            println!("build: {BUILD_CONFIG}");
        }

        match compute(&args, term) {
            Ok((label, value)) => {
                println!("{label}({term}) = {value}");
                Ok(())
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}

/// Hint replacement CLI for when the cli module is used without building the cli feature.
#[cfg(not(feature = "cli"))]
pub mod inner {
    /// Provide a hint to the user that they did not build this crate with the cli feature.
    pub fn main() {
        eprintln!("Please build with the cli feature to run the CLI");
        eprintln!("Example: cargo install fibo --features cli");
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn main() -> std::io::Result<()> {
    inner::main()
}

#[cfg(not(feature = "cli"))]
fn main() {
    inner::main();
}
