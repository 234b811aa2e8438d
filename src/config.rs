use crate::{
    error::SplineError,
    spline::{basis::InterpolationStyle, knot::Knot, storage::SplineStorage, Spline},
};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KnotConfig {
    pub position: [f64; 3],
    #[serde(default)]
    pub tangent: [f64; 3],
}

impl From<KnotConfig> for Knot {
    fn from(config: KnotConfig) -> Self {
        Knot::new(Point3::from(config.position), Vector3::from(config.tangent))
    }
}

impl From<&Knot> for KnotConfig {
    fn from(knot: &Knot) -> Self {
        Self {
            position: knot.position.coords.into(),
            tangent: knot.tangent.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SplineConfig {
    pub style: InterpolationStyle,
    pub max_knots: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<f64>,
    #[serde(default)]
    pub knots: Vec<KnotConfig>,
}

impl SplineConfig {
    pub fn from_json(source: &str) -> Result<Self, SplineError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}

impl Spline {
    pub fn from_config(config: &SplineConfig) -> Result<Self, SplineError> {
        let storage = SplineStorage::for_style(config.style, config.max_knots);
        let mut spline = Self::init(config.style, config.max_knots, storage)?;

        if let Some(shape) = config.shape {
            spline.set_tension(shape)?;
        }

        for knot in &config.knots {
            spline.push_knot(knot.clone().into())?;
        }

        Ok(spline)
    }

    pub fn to_config(&self) -> SplineConfig {
        SplineConfig {
            style: self.style(),
            max_knots: self.max_num_knots(),
            shape: Some(self.tension()),
            knots: self.knots().iter().map(KnotConfig::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CARDINAL_JSON: &str = r#"{
        "style": "cardinal",
        "maxKnots": 8,
        "shape": 0.3,
        "knots": [
            { "position": [0.0, 1.0, 0.0] },
            { "position": [1.0, 0.0, 0.0] },
            { "position": [0.0, -1.0, 0.0] },
            { "position": [-1.0, 0.0, 0.0] },
            { "position": [0.0, 1.0, 0.0] }
        ]
    }"#;

    #[test]
    fn spline_from_json_config() {
        let config = SplineConfig::from_json(CARDINAL_JSON).unwrap();
        let spline = Spline::from_config(&config).unwrap();

        assert_eq!(spline.style(), InterpolationStyle::Cardinal);
        assert_eq!(spline.max_num_knots(), 8);
        assert_eq!(spline.num_knots(), 5);
        assert_eq!(spline.num_segments(), 2);
        assert_relative_eq!(spline.tension(), 0.3);
        assert_relative_eq!(spline.eval(0.0).unwrap(), Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn missing_shape_uses_style_default() {
        let config = SplineConfig::from_json(r#"{ "style": "centripetal_catmull_rom", "maxKnots": 4 }"#)
            .unwrap();
        let spline = Spline::from_config(&config).unwrap();

        assert_eq!(spline.tension(), 0.5);
        assert_eq!(spline.num_knots(), 0);
    }

    #[test]
    fn too_many_configured_knots_is_a_capacity_error() {
        let mut config = SplineConfig::from_json(CARDINAL_JSON).unwrap();
        config.max_knots = 3;

        assert!(matches!(
            Spline::from_config(&config),
            Err(SplineError::Capacity { capacity: 3 })
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            SplineConfig::from_json(r#"{ "style": "nurbs", "maxKnots": 4 }"#),
            Err(SplineError::ConfigParse(_))
        ));
    }

    #[test]
    fn config_snapshot_round_trips() {
        let config = SplineConfig::from_json(CARDINAL_JSON).unwrap();
        let spline = Spline::from_config(&config).unwrap();
        let snapshot = spline.to_config();

        assert_eq!(snapshot.knots, config.knots);
        assert_eq!(snapshot.to_json()["maxKnots"], 8);

        let rebuilt = Spline::from_config(&snapshot).unwrap();
        assert_eq!(rebuilt.segment_matrices(), spline.segment_matrices());
    }
}
