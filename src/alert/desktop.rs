//! Desktop notifications through `notify-rust`.

use notify_rust::Notification;
use tracing::debug;

use super::error::AlertError;
use super::Permission;

/// Application name reported to the notification server.
pub const APP_NAME: &str = "pomotimer";

/// Sends desktop notifications once permission has been granted.
#[derive(Debug, Default)]
pub struct DesktopNotifier {
    permission: Permission,
}

impl DesktopNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current permission state.
    #[must_use]
    pub fn permission(&self) -> Permission {
        self.permission
    }

    /// Checks that a notification server is reachable.
    ///
    /// # Errors
    ///
    /// Returns `AlertError::NotificationUnavailable` if no server answers;
    /// the permission is then recorded as denied.
    pub fn request_permission(&mut self) -> Result<Permission, AlertError> {
        if self.permission == Permission::Granted {
            return Ok(Permission::Granted);
        }

        match check_server() {
            Ok(()) => {
                self.permission = Permission::Granted;
                Ok(Permission::Granted)
            }
            Err(e) => {
                self.permission = Permission::Denied;
                Err(e)
            }
        }
    }

    /// Shows a notification.
    ///
    /// # Errors
    ///
    /// Returns `AlertError::PermissionDenied` before permission is granted,
    /// or `AlertError::SendFailed` if the server rejects it.
    pub fn notify(&self, title: &str, message: &str) -> Result<(), AlertError> {
        if self.permission != Permission::Granted {
            return Err(AlertError::PermissionDenied);
        }

        Notification::new()
            .appname(APP_NAME)
            .summary(title)
            .body(message)
            .show()
            .map_err(|e| AlertError::SendFailed(e.to_string()))?;

        debug!("Notification sent: {}", message);
        Ok(())
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn check_server() -> Result<(), AlertError> {
    let info = notify_rust::get_server_information()
        .map_err(|e| AlertError::NotificationUnavailable(e.to_string()))?;
    debug!("Notification server: {} {}", info.name, info.version);
    Ok(())
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn check_server() -> Result<(), AlertError> {
    Ok(())
}
