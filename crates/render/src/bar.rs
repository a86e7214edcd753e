use model::RankItem;

use crate::chart::{Axis, BarSeries, ChartOption, Series, Tooltip};

const LABEL_ROTATE_DEGREES: i32 = 30;

/// Bar-chart option for the ranking screen: names on the category axis,
/// key scores as the bar series. Empty input yields an empty chart, not an
/// error.
pub fn ranking_bar(items: &[RankItem]) -> ChartOption {
    let names = items.iter().map(|item| item.name.clone()).collect();
    let scores = items.iter().map(|item| item.key_score).collect();

    ChartOption {
        tooltip: Some(Tooltip::default()),
        x_axis: Some(Axis::category(names).with_label_rotate(LABEL_ROTATE_DEGREES)),
        y_axis: Some(Axis::value()),
        series: vec![Series::Bar(BarSeries { data: scores })],
        ..ChartOption::default()
    }
}
