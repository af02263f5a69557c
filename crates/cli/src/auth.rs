// Admin gate: a static shared secret

use anyhow::{bail, Result};

/// Accept the admin password only if it matches the configured secret
pub fn verify_admin(password: &str, secret: &str) -> Result<()> {
    if secret.is_empty() {
        bail!("Admin secret is empty; set BRANCHQ_ADMIN_SECRET");
    }
    if password != secret {
        tracing::warn!("Admin login rejected");
        bail!("Invalid password");
    }
    Ok(())
}
