//! Settings page: profile, notification toggles and display preferences.
//!
//! # Invariants
//! - Defaults mirror a freshly provisioned operations-manager account.
//! - Saving a section never persists anything; it records and logs intent.
//! - Profile saves require a non-blank name and email.

use crate::format::DateFormat;
use crate::model::time_of_day::TimeFormat;
use crate::page::{Intent, Reducer};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[default]
    Operations,
    Clinical,
    Administration,
    #[serde(rename = "Human Resources")]
    HumanResources,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub position: String,
    pub phone: String,
    pub department: Department,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Dr. Sarah Wilson".to_string(),
            email: "sarah.wilson@visitingangels.com".to_string(),
            position: "Operations Manager".to_string(),
            phone: "(555) 987-6543".to_string(),
            department: Department::Operations,
        }
    }
}

/// Editable free-text profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Position,
    Phone,
}

impl Profile {
    fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Position => &mut self.position,
            ProfileField::Phone => &mut self.phone,
        }
    }

    /// Required fields that are blank.
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(ProfileField::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(ProfileField::Email);
        }
        missing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Email,
    Push,
    Sms,
    AppointmentReminders,
    StaffUpdates,
    SystemAlerts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub sms_notifications: bool,
    pub appointment_reminders: bool,
    pub staff_updates: bool,
    pub system_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            sms_notifications: false,
            appointment_reminders: true,
            staff_updates: true,
            system_alerts: true,
        }
    }
}

impl NotificationSettings {
    pub fn is_enabled(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Email => self.email_notifications,
            NotificationKind::Push => self.push_notifications,
            NotificationKind::Sms => self.sms_notifications,
            NotificationKind::AppointmentReminders => self.appointment_reminders,
            NotificationKind::StaffUpdates => self.staff_updates,
            NotificationKind::SystemAlerts => self.system_alerts,
        }
    }

    fn set(&mut self, kind: NotificationKind, enabled: bool) {
        let slot = match kind {
            NotificationKind::Email => &mut self.email_notifications,
            NotificationKind::Push => &mut self.push_notifications,
            NotificationKind::Sms => &mut self.sms_notifications,
            NotificationKind::AppointmentReminders => &mut self.appointment_reminders,
            NotificationKind::StaffUpdates => &mut self.staff_updates,
            NotificationKind::SystemAlerts => &mut self.system_alerts,
        };
        *slot = enabled;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Fr,
    Es,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
    /// IANA zone name, e.g. `America/Toronto`.
    pub timezone: String,
    pub date_format: DateFormat,
    pub time_format: TimeFormat,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: Language::En,
            timezone: "America/Toronto".to_string(),
            date_format: DateFormat::MonthDayYear,
            time_format: TimeFormat::TwelveHour,
        }
    }
}

/// All user settings, as one serializable document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub profile: Profile,
    pub notifications: NotificationSettings,
    pub preferences: Preferences,
}

/// Independently saved settings card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsSection {
    Profile,
    Notifications,
    Preferences,
}

impl SettingsSection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Notifications => "notifications",
            Self::Preferences => "preferences",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    EditProfile(ProfileField, String),
    SetDepartment(Department),
    SetNotification(NotificationKind, bool),
    SetTheme(Theme),
    SetLanguage(Language),
    SetTimezone(String),
    SetDateFormat(DateFormat),
    SetTimeFormat(TimeFormat),
    Save(SettingsSection),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPage {
    settings: Settings,
    last_intent: Option<Intent>,
}

impl SettingsPage {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            last_intent: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn last_intent(&self) -> Option<&Intent> {
        self.last_intent.as_ref()
    }

    fn save(mut self, section: SettingsSection) -> Self {
        if section == SettingsSection::Profile {
            let missing = self.settings.profile.missing_fields();
            if !missing.is_empty() {
                warn!(
                    "event=settings_saved module=settings status=rejected target=profile missing={}",
                    missing.len()
                );
                return self;
            }
        }
        self.last_intent = Some(Intent::SettingsSaved(section).record("settings"));
        self
    }
}

impl Reducer for SettingsPage {
    type Event = SettingsEvent;

    fn reduce(mut self, event: Self::Event) -> Self {
        let Settings {
            profile,
            notifications,
            preferences,
        } = &mut self.settings;
        match event {
            SettingsEvent::EditProfile(field, value) => *profile.field_mut(field) = value,
            SettingsEvent::SetDepartment(department) => profile.department = department,
            SettingsEvent::SetNotification(kind, enabled) => notifications.set(kind, enabled),
            SettingsEvent::SetTheme(theme) => preferences.theme = theme,
            SettingsEvent::SetLanguage(language) => preferences.language = language,
            SettingsEvent::SetTimezone(timezone) => preferences.timezone = timezone,
            SettingsEvent::SetDateFormat(format) => preferences.date_format = format,
            SettingsEvent::SetTimeFormat(format) => preferences.time_format = format,
            SettingsEvent::Save(section) => return self.save(section),
        }
        self
    }
}
