use foundation::geo::LonLat;
use serde_json::Value;

/// One named administrative boundary, flattened to a ring list.
///
/// Multi-part geometries contribute all of their rings; the even-odd rule
/// used downstream (hit-testing and SVG fill) keeps islands and holes
/// rendering correctly without tracking part structure.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub name: String,
    pub rings: Vec<Vec<LonLat>>,
}

/// Decoded boundary topology.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    pub features: Vec<BoundaryFeature>,
}

#[derive(Debug)]
pub enum TopologyError {
    NotATopology,
    InvalidTransform(String),
    InvalidArc { index: usize, reason: String },
    InvalidGeometry { object: String, index: usize, reason: String },
}

impl std::fmt::Display for TopologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologyError::NotATopology => write!(f, "expected a TopoJSON Topology"),
            TopologyError::InvalidTransform(reason) => {
                write!(f, "invalid transform: {reason}")
            }
            TopologyError::InvalidArc { index, reason } => {
                write!(f, "invalid arc at index {index}: {reason}")
            }
            TopologyError::InvalidGeometry {
                object,
                index,
                reason,
            } => {
                write!(f, "invalid geometry {object}[{index}]: {reason}")
            }
        }
    }
}

impl std::error::Error for TopologyError {}

#[derive(Debug, Copy, Clone)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

impl Topology {
    pub fn from_topojson_str(payload: &str) -> Result<Self, TopologyError> {
        let value: Value =
            serde_json::from_str(payload).map_err(|_| TopologyError::NotATopology)?;
        Self::from_topojson_value(value)
    }

    /// Decodes the TopoJSON subset this system consumes: a `Topology` whose
    /// objects are `GeometryCollection`s of named `Polygon`/`MultiPolygon`
    /// geometries. Non-areal geometry types are skipped (they are not
    /// boundaries); unknown type strings are an error.
    pub fn from_topojson_value(value: Value) -> Result<Self, TopologyError> {
        let obj = value.as_object().ok_or(TopologyError::NotATopology)?;
        let ty = obj
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or(TopologyError::NotATopology)?;
        if ty != "Topology" {
            return Err(TopologyError::NotATopology);
        }

        let transform = match obj.get("transform") {
            Some(t) => Some(parse_transform(t)?),
            None => None,
        };

        let arcs_val = obj
            .get("arcs")
            .and_then(|v| v.as_array())
            .ok_or(TopologyError::NotATopology)?;
        let arcs = decode_arcs(arcs_val, transform)?;

        let objects = obj
            .get("objects")
            .and_then(|v| v.as_object())
            .ok_or(TopologyError::NotATopology)?;

        let mut features = Vec::new();
        for (object_name, object_val) in objects {
            collect_object_features(object_name, object_val, &arcs, &mut features)?;
        }

        Ok(Self { features })
    }
}

fn parse_transform(value: &Value) -> Result<Transform, TopologyError> {
    let obj = value
        .as_object()
        .ok_or_else(|| TopologyError::InvalidTransform("must be an object".to_string()))?;
    let scale = parse_pair(obj.get("scale"))
        .ok_or_else(|| TopologyError::InvalidTransform("missing scale pair".to_string()))?;
    let translate = parse_pair(obj.get("translate"))
        .ok_or_else(|| TopologyError::InvalidTransform("missing translate pair".to_string()))?;
    Ok(Transform { scale, translate })
}

fn parse_pair(value: Option<&Value>) -> Option<[f64; 2]> {
    let arr = value?.as_array()?;
    if arr.len() < 2 {
        return None;
    }
    Some([arr[0].as_f64()?, arr[1].as_f64()?])
}

/// Decodes the shared arc pool.
///
/// With a quantization transform, positions are cumulative integer deltas
/// scaled back into degrees; without one they are absolute coordinates.
fn decode_arcs(
    arcs_val: &[Value],
    transform: Option<Transform>,
) -> Result<Vec<Vec<LonLat>>, TopologyError> {
    let mut arcs = Vec::with_capacity(arcs_val.len());
    for (index, arc_val) in arcs_val.iter().enumerate() {
        let positions = arc_val.as_array().ok_or(TopologyError::InvalidArc {
            index,
            reason: "arc must be an array of positions".to_string(),
        })?;

        let mut points = Vec::with_capacity(positions.len());
        let mut x = 0.0;
        let mut y = 0.0;
        for pos in positions {
            let Some([dx, dy]) = parse_pair(Some(pos)) else {
                return Err(TopologyError::InvalidArc {
                    index,
                    reason: "position must be a [x, y] number pair".to_string(),
                });
            };
            match transform {
                Some(t) => {
                    x += dx;
                    y += dy;
                    points.push(LonLat::new(
                        x * t.scale[0] + t.translate[0],
                        y * t.scale[1] + t.translate[1],
                    ));
                }
                None => points.push(LonLat::new(dx, dy)),
            }
        }

        if points.len() < 2 {
            return Err(TopologyError::InvalidArc {
                index,
                reason: "arc needs at least two positions".to_string(),
            });
        }
        arcs.push(points);
    }
    Ok(arcs)
}

fn collect_object_features(
    object_name: &str,
    object_val: &Value,
    arcs: &[Vec<LonLat>],
    out: &mut Vec<BoundaryFeature>,
) -> Result<(), TopologyError> {
    let obj = object_val
        .as_object()
        .ok_or_else(|| TopologyError::InvalidGeometry {
            object: object_name.to_string(),
            index: 0,
            reason: "object must be a geometry object".to_string(),
        })?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| TopologyError::InvalidGeometry {
            object: object_name.to_string(),
            index: 0,
            reason: "object missing type".to_string(),
        })?;

    match ty {
        "GeometryCollection" => {
            let geometries = obj.get("geometries").and_then(|v| v.as_array()).ok_or_else(
                || TopologyError::InvalidGeometry {
                    object: object_name.to_string(),
                    index: 0,
                    reason: "GeometryCollection missing geometries".to_string(),
                },
            )?;
            for (index, geom) in geometries.iter().enumerate() {
                if let Some(feature) = decode_geometry(object_name, index, geom, arcs)? {
                    out.push(feature);
                }
            }
            Ok(())
        }
        _ => {
            if let Some(feature) = decode_geometry(object_name, 0, object_val, arcs)? {
                out.push(feature);
            }
            Ok(())
        }
    }
}

fn decode_geometry(
    object_name: &str,
    index: usize,
    value: &Value,
    arcs: &[Vec<LonLat>],
) -> Result<Option<BoundaryFeature>, TopologyError> {
    let invalid = |reason: String| TopologyError::InvalidGeometry {
        object: object_name.to_string(),
        index,
        reason,
    };

    let obj = value
        .as_object()
        .ok_or_else(|| invalid("geometry must be an object".to_string()))?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| invalid("geometry missing type".to_string()))?;

    let ring_groups: Vec<&Value> = match ty {
        "Polygon" => {
            let arcs_val = obj
                .get("arcs")
                .ok_or_else(|| invalid("Polygon missing arcs".to_string()))?;
            vec![arcs_val]
        }
        "MultiPolygon" => obj
            .get("arcs")
            .and_then(|v| v.as_array())
            .ok_or_else(|| invalid("MultiPolygon missing arcs".to_string()))?
            .iter()
            .collect(),
        // Not a boundary; nothing to extract.
        "Point" | "MultiPoint" | "LineString" | "MultiLineString" => return Ok(None),
        other => return Err(invalid(format!("unsupported geometry type: {other}"))),
    };

    let name = geometry_name(obj)
        .ok_or_else(|| invalid("geometry missing a name property".to_string()))?;

    let mut rings = Vec::new();
    for group in ring_groups {
        let group_rings = group
            .as_array()
            .ok_or_else(|| invalid("polygon arcs must be an array of rings".to_string()))?;
        for ring_val in group_rings {
            let arc_refs = ring_val
                .as_array()
                .ok_or_else(|| invalid("ring must be an array of arc indices".to_string()))?;
            let ring = stitch_ring(arc_refs, arcs).map_err(&invalid)?;
            // Degenerate slivers can survive quantization; they carry no area.
            if ring.len() >= 3 {
                rings.push(ring);
            }
        }
    }

    Ok(Some(BoundaryFeature { name, rings }))
}

fn geometry_name(obj: &serde_json::Map<String, Value>) -> Option<String> {
    let from_properties = obj
        .get("properties")
        .and_then(|p| p.as_object())
        .and_then(|p| p.get("name"))
        .and_then(|n| n.as_str());
    if let Some(name) = from_properties {
        return Some(name.to_string());
    }
    match obj.get("id") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Stitches a ring out of arc references.
///
/// A non-negative index uses the arc forward; a negative index `i` uses arc
/// `!i` reversed. Consecutive arcs share their junction vertex, which is
/// emitted once; a closing duplicate of the first vertex is dropped.
fn stitch_ring(arc_refs: &[Value], arcs: &[Vec<LonLat>]) -> Result<Vec<LonLat>, String> {
    let mut ring: Vec<LonLat> = Vec::new();

    for arc_ref in arc_refs {
        let raw = arc_ref
            .as_i64()
            .ok_or("arc reference must be an integer".to_string())?;
        let (arc_index, reversed) = if raw < 0 {
            ((!raw) as usize, true)
        } else {
            (raw as usize, false)
        };
        let arc = arcs
            .get(arc_index)
            .ok_or(format!("arc reference {raw} out of range"))?;

        let points: Vec<LonLat> = if reversed {
            arc.iter().rev().copied().collect()
        } else {
            arc.clone()
        };

        let skip_junction = usize::from(!ring.is_empty());
        ring.extend(points.into_iter().skip(skip_junction));
    }

    if ring.len() >= 2 && ring.first() == ring.last() {
        ring.pop();
    }
    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::{Topology, TopologyError};
    use foundation::geo::LonLat;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_quantized_polygon() {
        let payload = r#"{
            "type": "Topology",
            "transform": {"scale": [0.001, 0.001], "translate": [126.0, 36.0]},
            "arcs": [[[0, 0], [1000, 0], [0, 1000], [-1000, 0], [0, -1000]]],
            "objects": {
                "provinces": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "Polygon", "arcs": [[0]], "properties": {"name": "서울특별시"}}
                    ]
                }
            }
        }"#;

        let topo = Topology::from_topojson_str(payload).expect("decode");
        assert_eq!(topo.features.len(), 1);
        assert_eq!(topo.features[0].name, "서울특별시");
        assert_eq!(
            topo.features[0].rings,
            vec![vec![
                LonLat::new(126.0, 36.0),
                LonLat::new(127.0, 36.0),
                LonLat::new(127.0, 37.0),
                LonLat::new(126.0, 37.0),
            ]]
        );
    }

    #[test]
    fn stitches_consecutive_arcs_without_duplicating_junctions() {
        let payload = r#"{
            "type": "Topology",
            "arcs": [
                [[126.0, 36.0], [127.0, 36.0], [127.0, 37.0]],
                [[127.0, 37.0], [126.0, 37.0], [126.0, 36.0]]
            ],
            "objects": {
                "provinces": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "Polygon", "arcs": [[0, 1]], "properties": {"name": "경기도"}}
                    ]
                }
            }
        }"#;

        let topo = Topology::from_topojson_str(payload).expect("decode");
        assert_eq!(
            topo.features[0].rings,
            vec![vec![
                LonLat::new(126.0, 36.0),
                LonLat::new(127.0, 36.0),
                LonLat::new(127.0, 37.0),
                LonLat::new(126.0, 37.0),
            ]]
        );
    }

    #[test]
    fn negative_reference_walks_the_arc_backwards() {
        let payload = r#"{
            "type": "Topology",
            "arcs": [
                [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
                [[1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]
            ],
            "objects": {
                "provinces": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "Polygon", "arcs": [[-2, -1]], "properties": {"name": "rev"}}
                    ]
                }
            }
        }"#;

        let topo = Topology::from_topojson_str(payload).expect("decode");
        // Reversed arc 1 then reversed arc 0 traces the same square backwards.
        assert_eq!(
            topo.features[0].rings,
            vec![vec![
                LonLat::new(0.0, 0.0),
                LonLat::new(0.0, 1.0),
                LonLat::new(1.0, 1.0),
                LonLat::new(1.0, 0.0),
            ]]
        );
    }

    #[test]
    fn multipolygon_contributes_all_rings() {
        let payload = r#"{
            "type": "Topology",
            "arcs": [
                [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]],
                [[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 6.0], [5.0, 5.0]]
            ],
            "objects": {
                "provinces": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {
                            "type": "MultiPolygon",
                            "arcs": [[[0]], [[1]]],
                            "properties": {"name": "경상남도"}
                        }
                    ]
                }
            }
        }"#;

        let topo = Topology::from_topojson_str(payload).expect("decode");
        assert_eq!(topo.features[0].rings.len(), 2);
        assert_eq!(topo.features[0].rings[1][0], LonLat::new(5.0, 5.0));
    }

    #[test]
    fn rejects_non_topology_payloads() {
        let err = Topology::from_topojson_str(r#"{"type": "FeatureCollection"}"#).unwrap_err();
        assert!(matches!(err, TopologyError::NotATopology));

        let err = Topology::from_topojson_str("not json").unwrap_err();
        assert!(matches!(err, TopologyError::NotATopology));
    }

    #[test]
    fn rejects_malformed_arcs() {
        let payload = r#"{
            "type": "Topology",
            "arcs": [[[0.0, 0.0]]],
            "objects": {}
        }"#;
        let err = Topology::from_topojson_str(payload).unwrap_err();
        assert!(matches!(err, TopologyError::InvalidArc { index: 0, .. }));
    }

    #[test]
    fn rejects_out_of_range_arc_references() {
        let payload = r#"{
            "type": "Topology",
            "arcs": [[[0.0, 0.0], [1.0, 1.0]]],
            "objects": {
                "provinces": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "Polygon", "arcs": [[7]], "properties": {"name": "x"}}
                    ]
                }
            }
        }"#;
        let err = Topology::from_topojson_str(payload).unwrap_err();
        assert!(matches!(err, TopologyError::InvalidGeometry { .. }));
    }

    #[test]
    fn skips_non_areal_geometries() {
        let payload = r#"{
            "type": "Topology",
            "arcs": [],
            "objects": {
                "labels": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "Point", "coordinates": [127.0, 36.0]}
                    ]
                }
            }
        }"#;
        let topo = Topology::from_topojson_str(payload).expect("decode");
        assert!(topo.features.is_empty());
    }
}
