use crate::domain::market_data::HistoryRow;

/// Domain entity - one named line series with index-aligned x labels and values.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl LineSeries {
    /// Close prices keyed by date, in row order.
    pub fn closes(name: impl Into<String>, rows: &[HistoryRow]) -> Self {
        let (labels, values) = rows
            .iter()
            .map(|row| (row.date.clone(), row.close))
            .unzip();
        Self { name: name.into(), labels, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Label and value at `index`, if both exist.
    pub fn point(&self, index: usize) -> Option<(&str, f64)> {
        let label = self.labels.get(index)?;
        let value = self.values.get(index)?;
        Some((label.as_str(), *value))
    }
}
