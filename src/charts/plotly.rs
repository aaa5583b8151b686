//! Plotly figure rendering
//!
//! Converts chart specs into Plotly.js figure JSON (`{"data": [...],
//! "layout": {...}}`) that the dashboard page hands to `Plotly.react`.

use super::spec::{BarSpec, BoxSpec, LineSpec, PieSpec};
use super::ChartSet;
use crate::dataset::Sex;
use serde::Serialize;
use serde_json::{json, Value};

/// Colors for HeartDisease values and sex series
const SERIES_COLORS: [&str; 4] = [
    "#636EFA", // Blue
    "#EF553B", // Red
    "#00CC96", // Green
    "#AB63FA", // Purple
];

/// Figures for all four charts
#[derive(Debug, Clone, Serialize)]
pub struct Figures {
    pub line: Value,
    pub bar: Value,
    pub pie: Value,
    #[serde(rename = "box")]
    pub boxplot: Value,
}

impl ChartSet {
    /// Render every chart as a Plotly figure
    pub fn to_figures(&self) -> Figures {
        Figures {
            line: self.line.to_figure(),
            bar: self.bar.to_figure(),
            pie: self.pie.to_figure(),
            boxplot: self.boxplot.to_figure(),
        }
    }
}

impl LineSpec {
    pub fn to_figure(&self) -> Value {
        let column = self.feature.column();
        let traces: Vec<Value> = self
            .series
            .iter()
            .map(|series| {
                json!({
                    "type": "scatter",
                    "mode": "lines",
                    "name": series.heart_disease.to_string(),
                    "legendgroup": series.heart_disease.to_string(),
                    "line": { "color": color(series.heart_disease as usize) },
                    "x": series.points.iter().map(|p| p.age).collect::<Vec<_>>(),
                    "y": series.points.iter().map(|p| p.value).collect::<Vec<_>>(),
                    "customdata": series
                        .points
                        .iter()
                        .map(|p| json!([p.age, p.value, p.heart_disease]))
                        .collect::<Vec<_>>(),
                    "hovertemplate": format!(
                        "Age=%{{customdata[0]}}<br>{}=%{{customdata[1]}}<br>HeartDisease=%{{customdata[2]}}<extra></extra>",
                        column
                    ),
                })
            })
            .collect();

        figure(
            traces,
            layout("Line Chart of Age vs. Feature", "Age", column, Some("HeartDisease")),
        )
    }
}

impl BarSpec {
    pub fn to_figure(&self) -> Value {
        let column = self.feature.column();
        let traces: Vec<Value> = self
            .series
            .iter()
            .map(|series| {
                json!({
                    "type": "bar",
                    "name": series.sex.code(),
                    "marker": { "color": sex_color(series.sex) },
                    "x": series.segments.iter().map(|s| s.heart_disease).collect::<Vec<_>>(),
                    "y": series.segments.iter().map(|s| s.value).collect::<Vec<_>>(),
                    "customdata": series
                        .segments
                        .iter()
                        .map(|s| json!([s.heart_disease, s.value]))
                        .collect::<Vec<_>>(),
                    "hovertemplate": format!(
                        "Sex={}<br>HeartDisease=%{{customdata[0]}}<br>{}=%{{customdata[1]}}<extra></extra>",
                        series.sex.code(),
                        column
                    ),
                })
            })
            .collect();

        let mut layout = layout(
            "Bar Chart of Feature by Gender and Heart Disease",
            "HeartDisease",
            column,
            Some("Sex"),
        );
        layout["barmode"] = json!("relative");

        figure(traces, layout)
    }
}

impl PieSpec {
    pub fn to_figure(&self) -> Value {
        let trace = json!({
            "type": "pie",
            "labels": self.slices.iter().map(|s| s.heart_disease.to_string()).collect::<Vec<_>>(),
            "values": self.slices.iter().map(|s| s.count).collect::<Vec<_>>(),
            "customdata": self.slices.iter().map(|s| json!([s.heart_disease])).collect::<Vec<_>>(),
            "marker": {
                "colors": self
                    .slices
                    .iter()
                    .map(|s| color(s.heart_disease as usize))
                    .collect::<Vec<_>>(),
            },
            "hovertemplate": "HeartDisease=%{customdata[0]}<br>count=%{value}<extra></extra>",
        });

        let traces = if self.slices.is_empty() {
            Vec::new()
        } else {
            vec![trace]
        };

        figure(
            traces,
            json!({
                "title": { "text": "Distribution of Heart Disease" },
                "legend": { "title": { "text": "HeartDisease" } },
                "template": "plotly_dark",
            }),
        )
    }
}

impl BoxSpec {
    pub fn to_figure(&self) -> Value {
        let column = self.feature.column();
        let traces: Vec<Value> = self
            .boxes
            .iter()
            .map(|group| {
                json!({
                    "type": "box",
                    "name": group.heart_disease.to_string(),
                    "marker": { "color": color(group.heart_disease as usize) },
                    "x": vec![group.heart_disease; group.values.len()],
                    "y": group.values,
                    "boxpoints": "outliers",
                    "quartilemethod": "linear",
                    "meta": group.stats,
                    "hovertemplate": format!(
                        "HeartDisease=%{{x}}<br>{}=%{{y}}<extra></extra>",
                        column
                    ),
                })
            })
            .collect();

        figure(
            traces,
            layout(
                "Box Plot of Feature by Heart Disease",
                "HeartDisease",
                column,
                Some("HeartDisease"),
            ),
        )
    }
}

fn color(idx: usize) -> &'static str {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

/// Fixed per sex so filtering never recolors a series
fn sex_color(sex: Sex) -> &'static str {
    match sex {
        Sex::Female => SERIES_COLORS[2],
        Sex::Male => SERIES_COLORS[3],
    }
}

fn figure(traces: Vec<Value>, layout: Value) -> Value {
    json!({ "data": traces, "layout": layout })
}

fn layout(title: &str, x_title: &str, y_title: &str, legend_title: Option<&str>) -> Value {
    let mut layout = json!({
        "title": { "text": title },
        "xaxis": { "title": { "text": x_title } },
        "yaxis": { "title": { "text": y_title } },
        "template": "plotly_dark",
    });
    if let Some(legend) = legend_title {
        layout["legend"] = json!({ "title": { "text": legend } });
    }
    layout
}

#[cfg(test)]
mod tests {
    use crate::charts::{update, Feature, GenderFilter};
    use crate::dataset::test_support::sample_dataset;
    use crate::dataset::Dataset;

    #[test]
    fn test_figures_have_titles() {
        let dataset = sample_dataset();
        let figures = update(&dataset, Feature::Oldpeak, GenderFilter::All).to_figures();

        assert_eq!(figures.line["layout"]["title"]["text"], "Line Chart of Age vs. Feature");
        assert_eq!(
            figures.bar["layout"]["title"]["text"],
            "Bar Chart of Feature by Gender and Heart Disease"
        );
        assert_eq!(figures.pie["layout"]["title"]["text"], "Distribution of Heart Disease");
        assert_eq!(
            figures.boxplot["layout"]["title"]["text"],
            "Box Plot of Feature by Heart Disease"
        );
        assert_eq!(figures.line["layout"]["yaxis"]["title"]["text"], "Oldpeak");
        assert_eq!(figures.bar["layout"]["barmode"], "relative");
    }

    #[test]
    fn test_line_traces() {
        let dataset = sample_dataset();
        let figures = update(&dataset, Feature::Age, GenderFilter::All).to_figures();

        let traces = figures.line["data"].as_array().unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["name"], "0");
        assert_eq!(traces[0]["x"].as_array().unwrap().len(), 3);
        assert_eq!(traces[0]["customdata"][0].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_bar_colors_follow_sex() {
        let dataset = sample_dataset();
        let all = update(&dataset, Feature::Age, GenderFilter::All).to_figures();
        let male = update(&dataset, Feature::Age, GenderFilter::Male).to_figures();
        let female = update(&dataset, Feature::Age, GenderFilter::Female).to_figures();

        let all_traces = all.bar["data"].as_array().unwrap();
        assert_eq!(all_traces[0]["name"], "F");
        assert_eq!(all_traces[1]["name"], "M");
        assert_ne!(all_traces[0]["marker"]["color"], all_traces[1]["marker"]["color"]);

        assert_eq!(male.bar["data"][0]["name"], "M");
        assert_eq!(male.bar["data"][0]["marker"]["color"], all_traces[1]["marker"]["color"]);
        assert_eq!(female.bar["data"][0]["marker"]["color"], all_traces[0]["marker"]["color"]);
    }

    #[test]
    fn test_pie_trace() {
        let dataset = sample_dataset();
        let figures = update(&dataset, Feature::Age, GenderFilter::Female).to_figures();

        let trace = &figures.pie["data"][0];
        assert_eq!(trace["labels"], serde_json::json!(["1"]));
        assert_eq!(trace["values"], serde_json::json!([2]));
    }

    #[test]
    fn test_empty_figures_are_valid() {
        let dataset = Dataset::from_records(Vec::new());
        let figures = update(&dataset, Feature::Age, GenderFilter::Male).to_figures();

        for figure in [&figures.line, &figures.bar, &figures.pie, &figures.boxplot] {
            assert_eq!(figure["data"], serde_json::json!([]));
            assert!(figure["layout"]["title"]["text"].is_string());
        }
    }
}
