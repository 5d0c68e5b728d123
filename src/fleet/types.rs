// Fleet domain types.
// Static records shown by the dashboard: buses, routes, drivers, demand, heat points, settings.

use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};

/// Reported status of a bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusStatus {
    OnRoute,
    Available,
    Crowded,
}

impl BusStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BusStatus::OnRoute => "On Route",
            BusStatus::Available => "Available",
            BusStatus::Crowded => "Crowded",
        }
    }
}

/// A bus in the live fleet table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bus {
    pub id: u32,
    /// Route number the bus is serving.
    pub number: String,
    pub location: String,
    /// Passenger load in percent. Not clamped.
    pub occupancy: i32,
    pub status: BusStatus,
    pub lat: f64,
    pub lng: f64,
}

/// Average demand category of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

impl DemandLevel {
    pub fn label(&self) -> &'static str {
        match self {
            DemandLevel::High => "High",
            DemandLevel::Medium => "Medium",
            DemandLevel::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: u32,
    pub number: String,
    pub start_point: String,
    pub end_point: String,
    pub avg_demand: DemandLevel,
}

/// Duty status of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    OnDuty,
    Break,
    OffDuty,
}

impl DutyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OnDuty => "On Duty",
            DutyStatus::Break => "Break",
            DutyStatus::OffDuty => "Off Duty",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: u32,
    pub name: String,
    pub bus_number: String,
    pub status: DutyStatus,
    pub rating: f32,
}

/// One point of the hourly demand series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandSample {
    pub time: String,
    pub passengers: u64,
}

/// Map coordinate with an intensity in 0..=1 (not validated).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    pub intensity: f64,
}

/// A KPI card on the overview panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

/// How operators are notified about reassignment proposals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMethod {
    #[default]
    App,
    Sms,
    Email,
}

impl NotificationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationMethod::App => "app",
            NotificationMethod::Sms => "sms",
            NotificationMethod::Email => "email",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            NotificationMethod::App => NotificationMethod::Sms,
            NotificationMethod::Sms => NotificationMethod::Email,
            NotificationMethod::Email => NotificationMethod::App,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            NotificationMethod::App => NotificationMethod::Email,
            NotificationMethod::Sms => NotificationMethod::App,
            NotificationMethod::Email => NotificationMethod::Sms,
        }
    }
}

/// System settings edited on the Settings panel. Held in memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Percent occupancy at which a bus counts as crowded.
    pub crowding_threshold: i64,
    /// Kilometres.
    pub reassignment_radius: i64,
    /// Minutes.
    pub demand_prediction_interval: i64,
    /// Seconds.
    pub data_refresh_rate: i64,
    /// Minutes.
    pub minimum_idle_time_before_reassignment: i64,
    /// Seconds.
    pub reassignment_confirmation_timeout: i64,
    pub notification_method: NotificationMethod,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            crowding_threshold: 80,
            reassignment_radius: 5,
            demand_prediction_interval: 30,
            data_refresh_rate: 10,
            minimum_idle_time_before_reassignment: 5,
            reassignment_confirmation_timeout: 5,
            notification_method: NotificationMethod::App,
        }
    }
}

/// Identifies one row of the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    CrowdingThreshold,
    ReassignmentRadius,
    DemandPredictionInterval,
    DataRefreshRate,
    MinimumIdleTimeBeforeReassignment,
    ReassignmentConfirmationTimeout,
    NotificationMethod,
}

impl SettingKey {
    /// Form order.
    pub const ALL: [SettingKey; 7] = [
        SettingKey::CrowdingThreshold,
        SettingKey::ReassignmentRadius,
        SettingKey::DemandPredictionInterval,
        SettingKey::DataRefreshRate,
        SettingKey::MinimumIdleTimeBeforeReassignment,
        SettingKey::ReassignmentConfirmationTimeout,
        SettingKey::NotificationMethod,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SettingKey::CrowdingThreshold => "crowdingThreshold",
            SettingKey::ReassignmentRadius => "reassignmentRadius",
            SettingKey::DemandPredictionInterval => "demandPredictionInterval",
            SettingKey::DataRefreshRate => "dataRefreshRate",
            SettingKey::MinimumIdleTimeBeforeReassignment => "minimumIdleTimeBeforeReassignment",
            SettingKey::ReassignmentConfirmationTimeout => "reassignmentConfirmationTimeout",
            SettingKey::NotificationMethod => "notificationMethod",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingKey::CrowdingThreshold => "Crowding Threshold (%)",
            SettingKey::ReassignmentRadius => "Reassignment Radius (km)",
            SettingKey::DemandPredictionInterval => "Demand Prediction Interval (minutes)",
            SettingKey::DataRefreshRate => "Data Refresh Rate (seconds)",
            SettingKey::MinimumIdleTimeBeforeReassignment => {
                "Minimum Idle Time Before Reassignment (minutes)"
            }
            SettingKey::ReassignmentConfirmationTimeout => {
                "Reassignment Confirmation Timeout (seconds)"
            }
            SettingKey::NotificationMethod => "Notification Method",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, SettingKey::NotificationMethod)
    }

    /// Parse raw form input into a value for this key.
    pub fn parse(&self, input: &str) -> Result<SettingField> {
        let trimmed = input.trim();
        let invalid = || DashError::InvalidSettingValue {
            field: self.name(),
            value: input.to_string(),
        };

        let number = || trimmed.parse::<i64>().map_err(|_| invalid());

        Ok(match self {
            SettingKey::CrowdingThreshold => SettingField::CrowdingThreshold(number()?),
            SettingKey::ReassignmentRadius => SettingField::ReassignmentRadius(number()?),
            SettingKey::DemandPredictionInterval => {
                SettingField::DemandPredictionInterval(number()?)
            }
            SettingKey::DataRefreshRate => SettingField::DataRefreshRate(number()?),
            SettingKey::MinimumIdleTimeBeforeReassignment => {
                SettingField::MinimumIdleTimeBeforeReassignment(number()?)
            }
            SettingKey::ReassignmentConfirmationTimeout => {
                SettingField::ReassignmentConfirmationTimeout(number()?)
            }
            SettingKey::NotificationMethod => {
                let method = match trimmed.to_ascii_lowercase().as_str() {
                    "app" => NotificationMethod::App,
                    "sms" => NotificationMethod::Sms,
                    "email" => NotificationMethod::Email,
                    _ => return Err(invalid()),
                };
                SettingField::NotificationMethod(method)
            }
        })
    }
}

/// A new value for exactly one setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    CrowdingThreshold(i64),
    ReassignmentRadius(i64),
    DemandPredictionInterval(i64),
    DataRefreshRate(i64),
    MinimumIdleTimeBeforeReassignment(i64),
    ReassignmentConfirmationTimeout(i64),
    NotificationMethod(NotificationMethod),
}

impl SettingField {
    pub fn key(&self) -> SettingKey {
        match self {
            SettingField::CrowdingThreshold(_) => SettingKey::CrowdingThreshold,
            SettingField::ReassignmentRadius(_) => SettingKey::ReassignmentRadius,
            SettingField::DemandPredictionInterval(_) => SettingKey::DemandPredictionInterval,
            SettingField::DataRefreshRate(_) => SettingKey::DataRefreshRate,
            SettingField::MinimumIdleTimeBeforeReassignment(_) => {
                SettingKey::MinimumIdleTimeBeforeReassignment
            }
            SettingField::ReassignmentConfirmationTimeout(_) => {
                SettingKey::ReassignmentConfirmationTimeout
            }
            SettingField::NotificationMethod(_) => SettingKey::NotificationMethod,
        }
    }
}

impl Settings {
    /// Overwrite one field, leaving the rest untouched. No range checks.
    pub fn update_field(&mut self, field: SettingField) {
        match field {
            SettingField::CrowdingThreshold(v) => self.crowding_threshold = v,
            SettingField::ReassignmentRadius(v) => self.reassignment_radius = v,
            SettingField::DemandPredictionInterval(v) => self.demand_prediction_interval = v,
            SettingField::DataRefreshRate(v) => self.data_refresh_rate = v,
            SettingField::MinimumIdleTimeBeforeReassignment(v) => {
                self.minimum_idle_time_before_reassignment = v
            }
            SettingField::ReassignmentConfirmationTimeout(v) => {
                self.reassignment_confirmation_timeout = v
            }
            SettingField::NotificationMethod(m) => self.notification_method = m,
        }
    }

    /// Display value of one field.
    pub fn display(&self, key: SettingKey) -> String {
        match key {
            SettingKey::CrowdingThreshold => self.crowding_threshold.to_string(),
            SettingKey::ReassignmentRadius => self.reassignment_radius.to_string(),
            SettingKey::DemandPredictionInterval => self.demand_prediction_interval.to_string(),
            SettingKey::DataRefreshRate => self.data_refresh_rate.to_string(),
            SettingKey::MinimumIdleTimeBeforeReassignment => {
                self.minimum_idle_time_before_reassignment.to_string()
            }
            SettingKey::ReassignmentConfirmationTimeout => {
                self.reassignment_confirmation_timeout.to_string()
            }
            SettingKey::NotificationMethod => self.notification_method.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let s = Settings::default();
        assert_eq!(s.crowding_threshold, 80);
        assert_eq!(s.reassignment_radius, 5);
        assert_eq!(s.demand_prediction_interval, 30);
        assert_eq!(s.data_refresh_rate, 10);
        assert_eq!(s.minimum_idle_time_before_reassignment, 5);
        assert_eq!(s.reassignment_confirmation_timeout, 5);
        assert_eq!(s.notification_method.as_str(), "app");
    }

    #[test]
    fn test_update_field_changes_only_that_field() {
        let fields = [
            SettingField::CrowdingThreshold(95),
            SettingField::ReassignmentRadius(12),
            SettingField::DemandPredictionInterval(15),
            SettingField::DataRefreshRate(3),
            SettingField::MinimumIdleTimeBeforeReassignment(9),
            SettingField::ReassignmentConfirmationTimeout(20),
            SettingField::NotificationMethod(NotificationMethod::Email),
        ];

        for field in fields {
            let before = Settings::default();
            let mut after = before.clone();
            after.update_field(field);

            for key in SettingKey::ALL {
                if key == field.key() {
                    assert_ne!(before.display(key), after.display(key), "{:?}", key);
                } else {
                    assert_eq!(before.display(key), after.display(key), "{:?}", key);
                }
            }
        }
    }

    #[test]
    fn test_update_field_accepts_out_of_range() {
        let mut s = Settings::default();
        s.update_field(SettingField::CrowdingThreshold(-40));
        assert_eq!(s.crowding_threshold, -40);
    }

    #[test]
    fn test_parse_numeric() {
        let field = SettingKey::DataRefreshRate.parse(" 25 ").unwrap();
        assert_eq!(field, SettingField::DataRefreshRate(25));

        let err = SettingKey::DataRefreshRate.parse("fast").unwrap_err();
        assert!(matches!(
            err,
            DashError::InvalidSettingValue {
                field: "dataRefreshRate",
                ..
            }
        ));
        assert!(SettingKey::CrowdingThreshold.parse("").is_err());
    }

    #[test]
    fn test_parse_notification_method() {
        assert_eq!(
            SettingKey::NotificationMethod.parse("SMS").unwrap(),
            SettingField::NotificationMethod(NotificationMethod::Sms)
        );
        assert!(SettingKey::NotificationMethod.parse("pager").is_err());
    }

    #[test]
    fn test_minimum_idle_key_targets_its_own_field() {
        let mut s = Settings::default();
        let field = SettingKey::MinimumIdleTimeBeforeReassignment
            .parse("11")
            .unwrap();
        s.update_field(field);
        assert_eq!(s.minimum_idle_time_before_reassignment, 11);
        assert_eq!(
            s.display(SettingKey::MinimumIdleTimeBeforeReassignment),
            "11"
        );
    }

    #[test]
    fn test_notification_method_cycle() {
        let m = NotificationMethod::App;
        assert_eq!(m.next().next().next(), m);
        assert_eq!(m.prev(), NotificationMethod::Email);
    }

    #[test]
    fn test_settings_partial_json_uses_defaults() {
        let s: Settings = serde_json::from_str(r#"{"crowdingThreshold": 70}"#).unwrap();
        assert_eq!(s.crowding_threshold, 70);
        assert_eq!(s.data_refresh_rate, 10);
        assert_eq!(s.notification_method, NotificationMethod::App);
    }
}
