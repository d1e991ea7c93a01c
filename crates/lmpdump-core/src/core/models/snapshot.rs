use nalgebra::Point3;
use thiserror::Error;

/// Errors that can occur when constructing a [`Snapshot`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// The atom type and position sequences differ in length.
    #[error("Atom type/position length mismatch: {atom_types} atom types vs {positions} positions")]
    LengthMismatch {
        /// Number of atom type codes supplied.
        atom_types: usize,
        /// Number of position vectors supplied.
        positions: usize,
    },
}

/// A particle snapshot at a single timestep.
///
/// Holds one integer type code and one 3D position per particle, in matching
/// insertion order (index `i` in both sequences describes the same particle).
/// The length invariant is enforced at construction; a `Snapshot` is immutable
/// afterwards, so encoders can rely on the two sequences staying in step.
///
/// A zero-particle snapshot is valid and encodes to a well-formed dump with an
/// empty payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    atom_types: Vec<u32>,
    positions: Vec<Point3<f64>>,
}

impl Snapshot {
    /// Creates a new `Snapshot` from parallel atom-type and position sequences.
    ///
    /// # Arguments
    ///
    /// * `atom_types` - One integer type code per particle.
    /// * `positions` - One position per particle, same order as `atom_types`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::LengthMismatch`] if the sequences differ in
    /// length. This check is what lets the encoders index both sequences
    /// without bounds failures.
    pub fn new(
        atom_types: Vec<u32>,
        positions: Vec<Point3<f64>>,
    ) -> Result<Self, SnapshotError> {
        if atom_types.len() != positions.len() {
            return Err(SnapshotError::LengthMismatch {
                atom_types: atom_types.len(),
                positions: positions.len(),
            });
        }
        Ok(Self {
            atom_types,
            positions,
        })
    }

    /// Returns the number of particles in the snapshot.
    pub fn len(&self) -> usize {
        self.atom_types.len()
    }

    /// Returns `true` if the snapshot contains no particles.
    pub fn is_empty(&self) -> bool {
        self.atom_types.is_empty()
    }

    /// Returns the atom type codes, one per particle.
    pub fn atom_types(&self) -> &[u32] {
        &self.atom_types
    }

    /// Returns the particle positions, one per particle.
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Iterates over `(atom_type, position)` pairs in particle order.
    pub fn particles(&self) -> impl Iterator<Item = (u32, &Point3<f64>)> {
        self.atom_types
            .iter()
            .copied()
            .zip(self.positions.iter())
    }
}
