// Dashboard domain model
use super::panel::Row;
use super::templating::TemplateVariable;
use serde::Serialize;

pub const GENERATED_NOTE: &str = "AUTOMATICALLY GENERATED by dashgen";
pub const SCHEMA_VERSION: u32 = 12;
pub const DASHBOARD_VERSION: u32 = 9;
pub const DEFAULT_DATASOURCE: &str = "metronome";

const REFRESH_INTERVALS: [&str; 10] = ["5s", "10s", "30s", "1m", "5m", "15m", "30m", "1h", "2h", "1d"];
const TIME_OPTIONS: [&str; 9] = ["5m", "15m", "1h", "6h", "12h", "24h", "2d", "7d", "30d"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(rename = "___NOTE___")]
    pub note: String,
    /// Always null; the consumer assigns one on import.
    pub id: Option<u64>,
    pub title: String,
    pub tags: Vec<String>,
    pub style: String,
    pub timezone: String,
    pub editable: bool,
    pub hide_controls: bool,
    pub shared_crosshair: bool,
    pub rows: Vec<Row>,
    pub time: TimeRange,
    pub timepicker: TimePicker,
    pub templating: Templating,
    pub annotations: Annotations,
    pub refresh: bool,
    pub schema_version: u32,
    pub version: u32,
    pub links: Vec<serde_json::Value>,
    pub gnet_id: Option<u64>,
}

impl Dashboard {
    pub fn new(title: String) -> Self {
        Self {
            note: GENERATED_NOTE.to_string(),
            id: None,
            title,
            tags: Vec::new(),
            style: "light".to_string(),
            timezone: "browser".to_string(),
            editable: true,
            hide_controls: false,
            shared_crosshair: true,
            rows: Vec::new(),
            time: TimeRange::default(),
            timepicker: TimePicker::default(),
            templating: Templating { list: Vec::new() },
            annotations: Annotations { list: Vec::new() },
            refresh: false,
            schema_version: SCHEMA_VERSION,
            version: DASHBOARD_VERSION,
            links: Vec::new(),
            gnet_id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

impl Default for TimeRange {
    fn default() -> Self {
        Self {
            from: "now-6h".to_string(),
            to: "now".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimePicker {
    pub refresh_intervals: Vec<String>,
    pub time_options: Vec<String>,
}

impl Default for TimePicker {
    fn default() -> Self {
        Self {
            refresh_intervals: REFRESH_INTERVALS.iter().map(|s| s.to_string()).collect(),
            time_options: TIME_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Templating {
    pub list: Vec<TemplateVariable>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Annotations {
    pub list: Vec<serde_json::Value>,
}
