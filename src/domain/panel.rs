// Graph row and panel domain models
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

pub const ROW_HEIGHT: &str = "250px";
pub const PANEL_SPAN: u32 = 12;
pub const DEFAULT_Y_FORMAT: &str = "short";

const THRESHOLD1_COLOR: &str = "rgba(216, 200, 27, 0.27)";
const THRESHOLD2_COLOR: &str = "rgba(234, 112, 112, 0.22)";

#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub title: String,
    pub collapse: bool,
    pub editable: bool,
    pub height: String,
    pub panels: Vec<Panel>,
}

impl Row {
    pub fn new(title: String, collapse: bool, panel: Panel) -> Self {
        Self {
            title,
            collapse,
            editable: true,
            height: ROW_HEIGHT.to_string(),
            panels: vec![panel],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub title: String,
    pub datasource: String,
    pub alias_colors: BTreeMap<String, String>,
    pub bars: bool,
    pub editable: bool,
    pub error: bool,
    pub fill: u32,
    pub grid: Grid,
    pub id: u32,
    pub is_new: bool,
    pub legend: Legend,
    pub lines: bool,
    pub linewidth: u32,
    pub links: Vec<serde_json::Value>,
    pub null_point_mode: String,
    pub percentage: bool,
    pub pointradius: u32,
    pub points: bool,
    pub renderer: String,
    pub series_overrides: Vec<serde_json::Value>,
    pub span: u32,
    pub stack: bool,
    pub stepped_line: bool,
    pub targets: Vec<Target>,
    pub time_from: Option<String>,
    pub time_shift: Option<String>,
    pub tooltip: Tooltip,
    #[serde(rename = "type")]
    pub panel_type: String,
    pub xaxis: XAxis,
    pub yaxes: [YAxis; 2],
}

impl Panel {
    /// Graph panel with the consumer's default styling. Targets get their
    /// reference ids from their position in `queries`.
    pub fn graph(
        id: u32,
        title: String,
        datasource: String,
        queries: Vec<String>,
        stack: bool,
        primary_axis: YAxis,
    ) -> Self {
        let targets = queries
            .into_iter()
            .enumerate()
            .map(|(index, query)| Target::new(ref_id(index), query))
            .collect();

        Self {
            title,
            datasource,
            alias_colors: BTreeMap::new(),
            bars: false,
            editable: true,
            error: false,
            fill: 1,
            grid: Grid::default(),
            id,
            is_new: true,
            legend: Legend::default(),
            lines: true,
            linewidth: 2,
            links: Vec::new(),
            null_point_mode: "null".to_string(),
            percentage: false,
            pointradius: 5,
            points: false,
            renderer: "flot".to_string(),
            series_overrides: Vec::new(),
            span: PANEL_SPAN,
            stack,
            stepped_line: false,
            targets,
            time_from: None,
            time_shift: None,
            tooltip: Tooltip::default(),
            panel_type: "graph".to_string(),
            xaxis: XAxis { show: true },
            yaxes: [primary_axis, YAxis::secondary()],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub hide: bool,
    pub ref_id: String,
    pub target: String,
}

impl Target {
    pub fn new(ref_id: String, target: String) -> Self {
        Self {
            hide: false,
            ref_id,
            target,
        }
    }
}

/// Reference id for the target at `index` within one panel.
///
/// The first 26 targets get `A`..`Z`. Past that the ids continue the way
/// spreadsheet columns do: `AA`, `AB`, ... `ZZ`, `AAA`.
pub fn ref_id(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub format: String,
    pub label: Option<String>,
    pub log_base: u32,
    #[serde(serialize_with = "axis_bound")]
    pub max: Option<f64>,
    #[serde(serialize_with = "axis_bound")]
    pub min: Option<f64>,
    pub show: bool,
}

impl YAxis {
    pub fn primary(format: String, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            format,
            label: None,
            log_base: 1,
            max,
            min,
            show: true,
        }
    }

    pub fn secondary() -> Self {
        Self::primary(DEFAULT_Y_FORMAT.to_string(), None, None)
    }
}

// Whole-number bounds go out as integers, e.g. `0` rather than `0.0`.
fn axis_bound<S: Serializer>(bound: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match bound {
        Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
            serializer.serialize_i64(*value as i64)
        }
        Some(value) => serializer.serialize_f64(*value),
        None => serializer.serialize_none(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct XAxis {
    pub show: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub threshold1: Option<f64>,
    pub threshold1_color: String,
    pub threshold2: Option<f64>,
    pub threshold2_color: String,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            threshold1: None,
            threshold1_color: THRESHOLD1_COLOR.to_string(),
            threshold2: None,
            threshold2_color: THRESHOLD2_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub avg: bool,
    pub current: bool,
    pub max: bool,
    pub min: bool,
    pub show: bool,
    pub total: bool,
    pub values: bool,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            avg: false,
            current: false,
            max: false,
            min: false,
            show: true,
            total: false,
            values: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub ms_resolution: bool,
    pub shared: bool,
    pub sort: u32,
    #[serde(rename = "value_type")]
    pub value_type: String,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            ms_resolution: true,
            shared: true,
            sort: 0,
            value_type: "cumulative".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_id_single_letters() {
        assert_eq!(ref_id(0), "A");
        assert_eq!(ref_id(1), "B");
        assert_eq!(ref_id(25), "Z");
    }

    #[test]
    fn test_ref_id_past_z() {
        assert_eq!(ref_id(26), "AA");
        assert_eq!(ref_id(27), "AB");
        assert_eq!(ref_id(51), "AZ");
        assert_eq!(ref_id(52), "BA");
        assert_eq!(ref_id(701), "ZZ");
        assert_eq!(ref_id(702), "AAA");
    }

    #[test]
    fn test_graph_panel_targets_restart_at_a() {
        let queries = vec!["a.b".to_string(), "c.d".to_string()];
        let panel = Panel::graph(
            7,
            "Panel".to_string(),
            "metronome".to_string(),
            queries,
            false,
            YAxis::primary("short".to_string(), Some(0.0), None),
        );

        assert_eq!(panel.id, 7);
        let refs: Vec<&str> = panel.targets.iter().map(|t| t.ref_id.as_str()).collect();
        assert_eq!(refs, vec!["A", "B"]);
        assert_eq!(panel.targets[1].target, "c.d");
        assert!(!panel.targets[0].hide);
    }

    #[test]
    fn test_axis_bounds_serialize_as_integers_when_whole() {
        let axis = YAxis::primary("percent".to_string(), Some(0.0), Some(100.0));
        let value = serde_json::to_value(&axis).unwrap();
        assert_eq!(value["min"], serde_json::json!(0));
        assert_eq!(value["max"], serde_json::json!(100));
        assert!(value["min"].is_i64());

        let axis = YAxis::primary("percentunit".to_string(), Some(0.5), None);
        let value = serde_json::to_value(&axis).unwrap();
        assert_eq!(value["min"], serde_json::json!(0.5));
        assert!(value["max"].is_null());
    }

    #[test]
    fn test_panel_keys_use_consumer_spelling() {
        let panel = Panel::graph(
            1,
            "Panel".to_string(),
            "metronome".to_string(),
            vec!["q".to_string()],
            true,
            YAxis::primary("short".to_string(), Some(0.0), None),
        );
        let value = serde_json::to_value(&panel).unwrap();

        assert_eq!(value["type"], "graph");
        assert_eq!(value["nullPointMode"], "null");
        assert_eq!(value["tooltip"]["value_type"], "cumulative");
        assert_eq!(value["tooltip"]["msResolution"], true);
        assert_eq!(value["grid"]["threshold1Color"], THRESHOLD1_COLOR);
        assert_eq!(value["yaxes"][0]["logBase"], 1);
        assert_eq!(value["yaxes"][1]["format"], "short");
        assert!(value["yaxes"][1]["min"].is_null());
        assert_eq!(value["targets"][0]["refId"], "A");
        assert_eq!(value["span"], 12);
        assert_eq!(value["stack"], true);
    }
}
