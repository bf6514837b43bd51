//! Vertical stretching specifications.

use serde::{Deserialize, Serialize};
use strata_core::{Extent, StretchingError};

/// How the faces of a stretched axis are laid out.
///
/// Either the faces are given outright, or a named [`StretchingRule`]
/// generates them from the declared bounds. Both forms serialize, so a
/// grid's construction record can always be written to a checkpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stretching {
    /// Explicit face coordinates, bottom to top, `size + 1` of them.
    Faces(Vec<f64>),
    /// Faces generated by a rule over the declared bounds.
    Rule(StretchingRule),
}

impl Stretching {
    /// Evaluate a generating function at face indices `0..=size`.
    ///
    /// ```
    /// use strata_grid::Stretching;
    ///
    /// // Quadratic spacing: thin cells near the bottom.
    /// let s = Stretching::from_fn(4, |k| (k * k) as f64);
    /// assert_eq!(s, Stretching::Faces(vec![0.0, 1.0, 4.0, 9.0, 16.0]));
    /// ```
    pub fn from_fn(size: usize, f: impl FnMut(usize) -> f64) -> Self {
        Stretching::Faces((0..=size).map(f).collect())
    }

    /// Face coordinates for an axis of `size` cells spanning `bounds`.
    ///
    /// Explicit faces are returned as given; shape checks happen at grid
    /// construction.
    pub fn faces(&self, size: usize, bounds: Extent<f64>) -> Result<Vec<f64>, StretchingError> {
        match self {
            Stretching::Faces(faces) => Ok(faces.clone()),
            Stretching::Rule(rule) => {
                let unit = rule.unit_faces(size)?;
                let length = bounds.upper - bounds.lower;
                Ok(unit.into_iter().map(|s| bounds.lower + s * length).collect())
            }
        }
    }
}

impl From<Vec<f64>> for Stretching {
    fn from(faces: Vec<f64>) -> Self {
        Stretching::Faces(faces)
    }
}

impl From<StretchingRule> for Stretching {
    fn from(rule: StretchingRule) -> Self {
        Stretching::Rule(rule)
    }
}

/// Named monotonic maps from face index to a fraction of the axis length.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StretchingRule {
    /// Equal cell thickness.
    Uniform,
    /// Each cell is `ratio` times thicker than the one below it.
    Geometric {
        /// Thickness ratio between neighbouring cells; must be positive.
        ratio: f64,
    },
    /// Hyperbolic-tangent clustering of cells toward the upper bound.
    /// Larger `strength` gives thinner surface cells.
    SurfaceRefined {
        /// Clustering strength; must be positive.
        strength: f64,
    },
}

impl StretchingRule {
    /// Face positions in `[0, 1]` for `size` cells, exactly `0` first and
    /// `1` last.
    pub fn unit_faces(&self, size: usize) -> Result<Vec<f64>, StretchingError> {
        if size == 0 {
            return Err(StretchingError::InvalidRule {
                reason: "rule needs at least one cell".into(),
            });
        }
        let n = size as f64;
        let mut unit: Vec<f64> = match *self {
            StretchingRule::Uniform => (0..=size).map(|k| k as f64 / n).collect(),
            StretchingRule::Geometric { ratio } => {
                if !ratio.is_finite() || ratio <= 0.0 {
                    return Err(StretchingError::InvalidRule {
                        reason: format!("geometric ratio must be finite and positive, got {ratio}"),
                    });
                }
                if ratio == 1.0 {
                    (0..=size).map(|k| k as f64 / n).collect()
                } else {
                    let denom = ratio.powf(n) - 1.0;
                    if !denom.is_finite() {
                        return Err(StretchingError::InvalidRule {
                            reason: format!("geometric ratio {ratio} overflows over {size} cells"),
                        });
                    }
                    (0..=size)
                        .map(|k| (ratio.powi(k as i32) - 1.0) / denom)
                        .collect()
                }
            }
            StretchingRule::SurfaceRefined { strength } => {
                if !strength.is_finite() || strength <= 0.0 {
                    return Err(StretchingError::InvalidRule {
                        reason: format!("surface refinement strength must be finite and positive, got {strength}"),
                    });
                }
                let t = strength.tanh();
                (0..=size)
                    .map(|k| (strength * k as f64 / n).tanh() / t)
                    .collect()
            }
        };
        unit[0] = 0.0;
        unit[size] = 1.0;
        Ok(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strictly_increasing(v: &[f64]) -> bool {
        v.windows(2).all(|w| w[1] > w[0])
    }

    #[test]
    fn uniform_rule_matches_even_spacing() {
        let faces = Stretching::Rule(StretchingRule::Uniform)
            .faces(4, Extent::new(-8.0, 0.0))
            .unwrap();
        assert_eq!(faces, vec![-8.0, -6.0, -4.0, -2.0, 0.0]);
    }

    #[test]
    fn geometric_rule_has_constant_thickness_ratio() {
        let unit = StretchingRule::Geometric { ratio: 2.0 }.unit_faces(3).unwrap();
        // Thicknesses 1, 2, 4 out of 7.
        let expected = [0.0, 1.0 / 7.0, 3.0 / 7.0, 1.0];
        for (u, e) in unit.iter().zip(expected) {
            assert!((u - e).abs() < 1e-15);
        }
    }

    #[test]
    fn geometric_ratio_one_is_uniform() {
        let unit = StretchingRule::Geometric { ratio: 1.0 }.unit_faces(4).unwrap();
        assert_eq!(unit, StretchingRule::Uniform.unit_faces(4).unwrap());
    }

    #[test]
    fn surface_refined_thins_toward_top() {
        let unit = StretchingRule::SurfaceRefined { strength: 3.0 }
            .unit_faces(10)
            .unwrap();
        assert!(strictly_increasing(&unit));
        assert_eq!(unit[0], 0.0);
        assert_eq!(unit[10], 1.0);
        let bottom = unit[1] - unit[0];
        let top = unit[10] - unit[9];
        assert!(top < bottom);
    }

    #[test]
    fn invalid_rule_parameters_rejected() {
        for rule in [
            StretchingRule::Geometric { ratio: 0.0 },
            StretchingRule::Geometric { ratio: f64::NAN },
            StretchingRule::SurfaceRefined { strength: -1.0 },
        ] {
            assert!(matches!(
                rule.unit_faces(4),
                Err(StretchingError::InvalidRule { .. })
            ));
        }
    }

    #[test]
    fn explicit_faces_pass_through() {
        let s = Stretching::from(vec![0.0, 2.0, 1.0, 4.0]);
        assert_eq!(
            s.faces(3, Extent::new(0.0, 4.0)).unwrap(),
            vec![0.0, 2.0, 1.0, 4.0]
        );
    }

    #[test]
    fn serde_forms() {
        let rule: Stretching = StretchingRule::Geometric { ratio: 1.1 }.into();
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, r#"{"rule":{"kind":"geometric","ratio":1.1}}"#);
        let faces = Stretching::Faces(vec![0.0, 1.0]);
        let json = serde_json::to_string(&faces).unwrap();
        assert_eq!(json, r#"{"faces":[0.0,1.0]}"#);
        let back: Stretching = serde_json::from_str(&json).unwrap();
        assert_eq!(back, faces);
    }
}
