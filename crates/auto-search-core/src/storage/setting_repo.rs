//! Setting Repository
//!
//! Single-record persistence for the extension setting.

use std::rc::Rc;

use crate::codec::{decode_record, encode_record, Decoded};
use crate::domain::Setting;

use super::backend::StorageBackend;
use super::SETTING_KEY;

pub struct SettingRepository<B: StorageBackend> {
    backend: Rc<B>,
}

impl<B: StorageBackend> SettingRepository<B> {
    pub fn new(backend: Rc<B>) -> Self {
        Self { backend }
    }

    /// Load the stored setting. Absent and unreadable records both
    /// read as the default setting.
    pub async fn load(&self) -> Setting {
        let raw = self.backend.get(SETTING_KEY).await;
        match decode_record(raw.as_deref()) {
            Decoded::Parsed(setting) => setting,
            Decoded::Missing => Setting::default(),
            Decoded::Corrupt(e) => {
                log::warn!("setting record is unreadable, using defaults: {}", e);
                Setting::default()
            }
        }
    }

    /// Overwrite the stored setting.
    pub fn save(&self, setting: &Setting) {
        self.backend.set(SETTING_KEY, encode_record(setting));
    }
}
