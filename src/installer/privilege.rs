//! Privilege gate

use tracing::debug;

use crate::error::{Result, step};
use crate::host::Host;

/// Fail unless the process runs with an effective uid of 0
pub fn check_privilege<H: Host>(host: &H) -> Result<()> {
    let euid = host.effective_uid();
    debug!(euid, "checking privilege");

    if euid != 0 {
        return Err(step::insufficient_privilege(euid));
    }
    Ok(())
}
