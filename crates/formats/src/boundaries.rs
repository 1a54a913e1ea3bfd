use foundation::math::GeoPoint;
use serde_json::Value;

/// A closed ring of boundary vertices in (lon, lat) degrees.
pub type Ring = Vec<GeoPoint>;

#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryGeometry {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl BoundaryGeometry {
    /// All rings of the geometry, outer and holes alike, in input order.
    pub fn rings(&self) -> Vec<&[GeoPoint]> {
        match self {
            BoundaryGeometry::Polygon(rings) => rings.iter().map(|r| r.as_slice()).collect(),
            BoundaryGeometry::MultiPolygon(polys) => polys
                .iter()
                .flat_map(|rings| rings.iter().map(|r| r.as_slice()))
                .collect(),
        }
    }
}

/// One country boundary: stable identifier plus polygon geometry.
///
/// `code` comes from the GeoJSON feature `id` (ISO alpha-3 in the source
/// dataset); features without an id keep an empty code and render as
/// no-data.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub code: String,
    pub name: String,
    pub geometry: BoundaryGeometry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundarySet {
    pub features: Vec<BoundaryFeature>,
}

#[derive(Debug)]
pub enum BoundaryError {
    NotAFeatureCollection,
    InvalidFeature { index: usize, reason: String },
}

impl std::fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryError::NotAFeatureCollection => {
                write!(f, "expected GeoJSON FeatureCollection")
            }
            BoundaryError::InvalidFeature { index, reason } => {
                write!(f, "invalid feature at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for BoundaryError {}

impl BoundarySet {
    pub fn from_geojson_str(payload: &str) -> Result<Self, BoundaryError> {
        let value: Value =
            serde_json::from_str(payload).map_err(|e| BoundaryError::InvalidFeature {
                index: 0,
                reason: format!("JSON parse error: {e}"),
            })?;
        Self::from_geojson_value(&value)
    }

    pub fn from_geojson_value(value: &Value) -> Result<Self, BoundaryError> {
        let obj = value.as_object().ok_or(BoundaryError::NotAFeatureCollection)?;
        let ty = obj
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or(BoundaryError::NotAFeatureCollection)?;
        if ty != "FeatureCollection" {
            return Err(BoundaryError::NotAFeatureCollection);
        }

        let features_val = obj
            .get("features")
            .and_then(|v| v.as_array())
            .ok_or(BoundaryError::NotAFeatureCollection)?;

        let mut features = Vec::with_capacity(features_val.len());
        for (index, feat_val) in features_val.iter().enumerate() {
            let feat_obj = feat_val.as_object().ok_or(BoundaryError::InvalidFeature {
                index,
                reason: "feature must be an object".to_string(),
            })?;

            let feat_type = feat_obj.get("type").and_then(|v| v.as_str()).ok_or(
                BoundaryError::InvalidFeature {
                    index,
                    reason: "feature missing type".to_string(),
                },
            )?;
            if feat_type != "Feature" {
                return Err(BoundaryError::InvalidFeature {
                    index,
                    reason: format!("unexpected feature type: {feat_type}"),
                });
            }

            let code = match feat_obj.get("id") {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => String::new(),
            };

            let name = feat_obj
                .get("properties")
                .and_then(|v| v.as_object())
                .and_then(|props| props.get("name"))
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();

            let geometry_val =
                feat_obj
                    .get("geometry")
                    .ok_or(BoundaryError::InvalidFeature {
                        index,
                        reason: "feature missing geometry".to_string(),
                    })?;
            let geometry = parse_geometry(geometry_val)
                .map_err(|reason| BoundaryError::InvalidFeature { index, reason })?;

            features.push(BoundaryFeature {
                code,
                name,
                geometry,
            });
        }

        Ok(Self { features })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn feature(&self, code: &str) -> Option<&BoundaryFeature> {
        self.features.iter().find(|f| f.code == code)
    }
}

fn parse_geometry(value: &Value) -> Result<BoundaryGeometry, String> {
    let obj = value
        .as_object()
        .ok_or("geometry must be an object".to_string())?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or("geometry missing type".to_string())?;

    let coords = obj
        .get("coordinates")
        .ok_or("geometry missing coordinates".to_string())?;

    match ty {
        "Polygon" => Ok(BoundaryGeometry::Polygon(parse_polygon(coords)?)),
        "MultiPolygon" => Ok(BoundaryGeometry::MultiPolygon(parse_multi_polygon(coords)?)),
        other => Err(format!("unsupported geometry type: {other}")),
    }
}

fn parse_point(coords: &Value) -> Result<GeoPoint, String> {
    let arr = coords
        .as_array()
        .ok_or("position must be an array".to_string())?;
    if arr.len() < 2 {
        return Err("position must have [lon, lat]".to_string());
    }
    let lon = arr[0].as_f64().ok_or("lon must be a number".to_string())?;
    let lat = arr[1].as_f64().ok_or("lat must be a number".to_string())?;
    Ok(GeoPoint::new(lon, lat))
}

fn parse_ring(coords: &Value) -> Result<Ring, String> {
    let arr = coords
        .as_array()
        .ok_or("ring must be an array of positions".to_string())?;
    let mut out = Vec::with_capacity(arr.len());
    for item in arr {
        out.push(parse_point(item)?);
    }
    Ok(out)
}

fn parse_polygon(coords: &Value) -> Result<Vec<Ring>, String> {
    let rings = coords
        .as_array()
        .ok_or("Polygon coordinates must be an array of rings".to_string())?;
    let mut out = Vec::with_capacity(rings.len());
    for ring in rings {
        out.push(parse_ring(ring)?);
    }
    Ok(out)
}

fn parse_multi_polygon(coords: &Value) -> Result<Vec<Vec<Ring>>, String> {
    let polys = coords
        .as_array()
        .ok_or("MultiPolygon coordinates must be an array of polygons".to_string())?;
    let mut out = Vec::with_capacity(polys.len());
    for poly in polys {
        out.push(parse_polygon(poly)?);
    }
    Ok(out)
}
