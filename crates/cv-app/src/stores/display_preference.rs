use cv_core::{DisplayProfile, Palette};
use tokio::sync::watch;
use tracing::info;

/// Process-wide display preference, owned by the application root.
///
/// Views receive it by handle and either read [`current`](Self::current) on
/// render or [`subscribe`](Self::subscribe) to be woken on change. Nothing is
/// persisted; a new session starts from the configured default.
///
/// 显示偏好：由应用根持有，通过句柄传给各视图，不持久化。
pub struct DisplayPreferenceStore {
    current: watch::Sender<DisplayProfile>,
}

impl DisplayPreferenceStore {
    pub fn new(initial: DisplayProfile) -> Self {
        let (current, _) = watch::channel(initial);
        Self { current }
    }

    pub fn current(&self) -> DisplayProfile {
        *self.current.borrow()
    }

    pub fn palette(&self) -> Palette {
        self.current().palette()
    }

    /// Flip between the two profiles and return the new one.
    pub fn toggle(&self) -> DisplayProfile {
        self.current.send_modify(|profile| *profile = profile.toggled());
        let profile = self.current();
        info!(profile = %profile, "Display profile toggled");
        profile
    }

    pub fn subscribe(&self) -> watch::Receiver<DisplayProfile> {
        self.current.subscribe()
    }
}

impl Default for DisplayPreferenceStore {
    fn default() -> Self {
        Self::new(DisplayProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_starts_dark() {
        let store = DisplayPreferenceStore::default();
        assert_eq!(store.current(), DisplayProfile::Dark);
        assert_eq!(store.palette(), DisplayProfile::Dark.palette());
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let store = DisplayPreferenceStore::new(DisplayProfile::Light);
        assert_eq!(store.toggle(), DisplayProfile::Dark);
        assert_eq!(store.toggle(), DisplayProfile::Light);
    }

    #[tokio::test]
    async fn test_subscriber_is_notified() {
        let store = DisplayPreferenceStore::default();
        let mut rx = store.subscribe();

        store.toggle();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), DisplayProfile::Light);
    }
}
