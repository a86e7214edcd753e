//! Typed chart widget options. The shapes match what the chart layer
//! consumes verbatim, so an option serializes straight into a `setOption`
//! payload.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(rename = "xAxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(rename = "yAxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    pub series: Vec<Series>,
}

/// Empty object enables the default tooltip.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tooltip {}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Legend {}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(rename = "type")]
    pub axis_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
    #[serde(rename = "axisLabel", skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<AxisLabel>,
}

impl Axis {
    pub fn category(data: Vec<String>) -> Self {
        Self {
            axis_type: "category".to_string(),
            data,
            axis_label: None,
        }
    }

    pub fn value() -> Self {
        Self {
            axis_type: "value".to_string(),
            ..Self::default()
        }
    }

    pub fn with_label_rotate(mut self, rotate: i32) -> Self {
        self.axis_label = Some(AxisLabel { rotate });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AxisLabel {
    pub rotate: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Series {
    Graph(GraphSeries),
    Bar(BarSeries),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphSeries {
    pub layout: String,
    pub roam: bool,
    pub data: Vec<GraphSeriesNode>,
    pub links: Vec<GraphSeriesLink>,
    pub force: ForceLayout,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphSeriesNode {
    pub id: String,
    pub name: String,
    pub category: String,
    pub value: String,
    #[serde(rename = "symbolSize")]
    pub symbol_size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphSeriesLink {
    pub source: String,
    pub target: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ForceLayout {
    pub repulsion: u32,
    #[serde(rename = "edgeLength")]
    pub edge_length: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BarSeries {
    pub data: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_series_tagged() {
        let option = ChartOption {
            tooltip: Some(Tooltip::default()),
            x_axis: Some(Axis::category(vec!["a".to_string()]).with_label_rotate(30)),
            y_axis: Some(Axis::value()),
            series: vec![Series::Bar(BarSeries { data: vec![0.5] })],
            ..ChartOption::default()
        };

        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["series"][0]["type"], "bar");
        assert_eq!(json["xAxis"]["axisLabel"]["rotate"], 30);
        assert_eq!(json["yAxis"]["type"], "value");
    }

    #[test]
    fn test_graph_series_field_names() {
        let series = Series::Graph(GraphSeries {
            layout: "force".to_string(),
            roam: true,
            data: vec![GraphSeriesNode {
                id: "1".to_string(),
                name: "n".to_string(),
                category: "tech".to_string(),
                value: "BCI".to_string(),
                symbol_size: 40,
            }],
            links: vec![],
            force: ForceLayout {
                repulsion: 260,
                edge_length: 160,
            },
        });

        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["type"], "graph");
        assert_eq!(json["data"][0]["symbolSize"], 40);
        assert_eq!(json["force"]["edgeLength"], 160);
    }
}
