use std::fmt;

/// Priority value for sending the notification immediately.
pub const PRIORITY_IMMEDIATE: u8 = 10;

/// Priority value for sending the notification when it suits the device's
/// power budget.
pub const PRIORITY_POWER_CONSERVE: u8 = 5;

/// The importance how fast to bring the notification for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Send the push message immediately. Notifications with this priority must
    /// trigger an alert, sound, or badge on the target device. Cannot be used
    /// with the silent notification.
    High,

    /// Send the push message at a time that takes into account power
    /// considerations for the device. Notifications with this priority might be
    /// grouped and delivered in bursts. They are throttled, and in some cases
    /// are not delivered.
    Normal,
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> u8 {
        match priority {
            Priority::High => PRIORITY_IMMEDIATE,
            Priority::Normal => PRIORITY_POWER_CONSERVE,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}
