//! Send and region commands.

use std::path::Path;
use std::time::Duration;

use tracing::info;

use crate::cli::{output, RegionArg, SendArgs};
use crate::core::config::{Region, RegionConfig};
use crate::core::sender::{SecretSender, SenderOptions};
use crate::core::store::CredentialStore;
use crate::error::{Result, ValidationError};

/// Share a stored credential or free text and print the link.
pub fn execute(dir: &Path, args: SendArgs) -> Result<()> {
    let mut options = SenderOptions::default();
    if let Some(secs) = args.timeout {
        options.timeout = Some(Duration::from_secs(secs));
    }
    options.base_url = args.endpoint;

    let sender = SecretSender::with_options(dir, options)?;
    if let Some(region) = args.region {
        let region = Region::from(region);
        sender.set_region(region)?;
        info!(%region, "region switched");
    }

    let passphrase = args.passphrase.as_deref();
    let url = match (args.conn_id, args.secret) {
        (Some(conn_id), _) => {
            output::warn(&format!(
                "sending {} in clear to {}",
                output::key(&conn_id),
                sender.base_url()?
            ));
            let store = CredentialStore::open(dir)?;
            sender.send_credential(&store, &conn_id, passphrase, args.ttl)?
        }
        (None, Some(secret)) => sender.send_secret(&secret, passphrase, args.ttl)?,
        (None, None) => return Err(ValidationError::EmptyValue("secret").into()),
    };

    println!("{}", url);
    Ok(())
}

/// Show the region, or persist a new one.
pub fn region(dir: &Path, region: Option<RegionArg>) -> Result<()> {
    let config = RegionConfig::load_or_init(dir)?;
    match region {
        Some(region) => {
            let region = Region::from(region);
            config.set_region(region)?;
            output::success(&format!("region set to {}", region));
        }
        None => println!("{}", config.region()?),
    }
    Ok(())
}
