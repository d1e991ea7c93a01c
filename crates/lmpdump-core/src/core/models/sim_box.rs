/// The simulation box a snapshot was taken in.
///
/// Describes the boundary configuration written into the dump header: six
/// orthogonal bounds, three shear scalars (legacy layout only), and the
/// triclinic flag plus 3×2 boundary-condition matrix (revised layout only).
///
/// Only orthogonal boxes are supported: [`SimulationBox::orthogonal`] is the
/// sole constructor, and it fixes shear to zero, the triclinic flag to off,
/// and the boundary matrix to all zeros. The fields exist because the wire
/// formats carry them, not because non-zero values are supported; consumers of
/// non-zero shear or boundary values are undocumented, so those stay
/// extension points.
///
/// Bounds are not validated (`min ≤ max` is the caller's responsibility).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationBox {
    /// Lower x bound.
    pub x_min: f64,
    /// Upper x bound.
    pub x_max: f64,
    /// Lower y bound.
    pub y_min: f64,
    /// Upper y bound.
    pub y_max: f64,
    /// Lower z bound.
    pub z_min: f64,
    /// Upper z bound.
    pub z_max: f64,
    /// Tilt factors (xy, xz, yz). Always zero for an orthogonal box.
    pub shear: [f64; 3],
    /// Whether the box is triclinic. Always `false` in this scope.
    pub triclinic: bool,
    /// Per-axis boundary-condition codes, two faces per axis. All zeros here.
    pub boundary: [[i32; 2]; 3],
}

impl SimulationBox {
    /// Creates an orthogonal (non-sheared, non-triclinic) box from its six
    /// bounds.
    pub fn orthogonal(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        z_min: f64,
        z_max: f64,
    ) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            z_min,
            z_max,
            shear: [0.0; 3],
            triclinic: false,
            boundary: [[0; 2]; 3],
        }
    }

    /// Returns the bounds in wire order: x min/max, y min/max, z min/max.
    pub fn bounds(&self) -> [f64; 6] {
        [
            self.x_min, self.x_max, self.y_min, self.y_max, self.z_min, self.z_max,
        ]
    }

    /// Returns the boundary matrix flattened row-major, as the revised layout
    /// writes it.
    pub fn boundary_flat(&self) -> [i32; 6] {
        [
            self.boundary[0][0],
            self.boundary[0][1],
            self.boundary[1][0],
            self.boundary[1][1],
            self.boundary[2][0],
            self.boundary[2][1],
        ]
    }
}
