//! Fallback command implementation

use crate::cli::FallbackArgs;
use crate::error::Result;
use crate::fallback;

/// Print the fallback response for a request path
pub fn run(args: FallbackArgs) -> Result<()> {
    let response = fallback::handle(&args.path);
    println!("{}", response);
    Ok(())
}
