use tracing::{debug, warn};
use uc_core::{AppConfig, DeviceId};

/// Device id reported on create: the configured id, else
/// `desktop-<hostname>`, else a random id.
pub fn resolve_device_id(config: &AppConfig) -> DeviceId {
    let hostname = gethostname::gethostname().into_string().ok();
    resolve_with_hostname(config, hostname)
}

fn resolve_with_hostname(config: &AppConfig, hostname: Option<String>) -> DeviceId {
    if let Some(id) = config
        .device
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    {
        debug!(device_id = %id, "Using configured device id");
        return DeviceId::from(id);
    }

    match hostname {
        Some(hostname) => DeviceId::for_desktop(&hostname),
        None => {
            warn!("Hostname is not valid UTF-8, using a random device id");
            DeviceId::random()
        }
    }
}
