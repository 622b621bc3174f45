//! Built-in demonstration data set

use crate::point::{Coordinate, DemandPoint, PointKind};

/// (id, name, x, y, volume in tons, freight rate per ton-km)
const FOUR_MARKETS: [(&str, &str, f64, f64, f64, f64); 4] = [
    ("1", "Shenzhen Pinghu (D1)", 85.0, 15.0, 800.0, 1.2),
    ("2", "Foshan Sanshan (D2)", 25.0, 65.0, 500.0, 0.8),
    ("3", "Dongguan Changping (D3)", 70.0, 55.0, 600.0, 1.0),
    ("4", "Zhongshan Sanjiao (D4)", 20.0, 25.0, 400.0, 1.5),
];

/// Four Pearl River Delta markets supplied from a single distribution center.
///
/// Weights are volume times freight rate: 960, 400, 600 and 600.
pub fn four_markets() -> Vec<DemandPoint> {
    FOUR_MARKETS
        .iter()
        .map(|&(id, name, x, y, volume, rate)| DemandPoint {
            id: id.to_string(),
            name: Some(name.to_string()),
            coordinate: Coordinate::new(x, y),
            weight: volume * rate,
            volume: Some(volume),
            rate: Some(rate),
            kind: PointKind::Market,
        })
        .collect()
}
