use clap::Parser;

/// Arguments for the fallback command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Root page:\n    zohmg-install fallback /\n\n\
                  Not-found page:\n    zohmg-install fallback /unknown/x")]
pub struct FallbackArgs {
    /// Request path, e.g. /data/
    pub path: String,
}
