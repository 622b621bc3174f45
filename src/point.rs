use crate::error::SolverError;
use ndarray::ArrayView2;

/// A position in the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate
    #[inline]
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Role of a location in the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointKind {
    #[default]
    Market,
    Supplier,
}

/// A fixed customer or supply location pulling on the facility.
///
/// Weight is the pull strength, usually shipment volume times freight rate.
/// All fields are fixed at construction; a run only ever reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandPoint {
    pub(crate) id: String,
    pub(crate) name: Option<String>,
    pub(crate) coordinate: Coordinate,
    pub(crate) weight: f64,
    pub(crate) volume: Option<f64>,
    pub(crate) rate: Option<f64>,
    pub(crate) kind: PointKind,
}

impl DemandPoint {
    /// Create a demand point with an explicit weight.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidWeight`] if `weight` is negative or not finite.
    pub fn new(
        id: impl Into<String>,
        coordinate: impl Into<Coordinate>,
        weight: f64,
    ) -> Result<Self, SolverError> {
        let id = id.into();
        check_non_negative(&id, "weight", weight)?;

        Ok(Self {
            id,
            name: None,
            coordinate: coordinate.into(),
            weight,
            volume: None,
            rate: None,
            kind: PointKind::default(),
        })
    }

    /// Create a demand point whose weight is `volume * rate`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidWeight`] if either factor is negative or not finite.
    pub fn from_volume_rate(
        id: impl Into<String>,
        coordinate: impl Into<Coordinate>,
        volume: f64,
        rate: f64,
    ) -> Result<Self, SolverError> {
        let id = id.into();
        check_non_negative(&id, "volume", volume)?;
        check_non_negative(&id, "rate", rate)?;

        let mut point = Self::new(id, coordinate, volume * rate)?;
        point.volume = Some(volume);
        point.rate = Some(rate);
        Ok(point)
    }

    /// Attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the location kind
    pub fn with_kind(mut self, kind: PointKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, falling back to the id
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Shipment volume, if the weight was derived from volume and rate
    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    /// Freight rate, if the weight was derived from volume and rate
    pub fn rate(&self) -> Option<f64> {
        self.rate
    }

    pub fn kind(&self) -> PointKind {
        self.kind
    }
}

fn check_non_negative(id: &str, field: &str, value: f64) -> Result<(), SolverError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SolverError::InvalidWeight(format!(
            "point {}: {} must be finite and non-negative, got {}",
            id, field, value
        )))
    }
}

/// Build demand points from an array of `[x, y, weight]` rows.
///
/// Point ids are the row indices.
///
/// # Errors
///
/// Returns an error if the array does not have exactly 3 columns or a row
/// carries an invalid weight.
pub fn points_from_array(data: &ArrayView2<f64>) -> Result<Vec<DemandPoint>, SolverError> {
    if data.ncols() != 3 {
        return Err(SolverError::InvalidDimensions(format!(
            "Expected 3 columns [x, y, weight], got {}",
            data.ncols()
        )));
    }

    data.outer_iter()
        .enumerate()
        .map(|(i, row)| DemandPoint::new(i.to_string(), (row[0], row[1]), row[2]))
        .collect()
}
