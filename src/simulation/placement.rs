//! World transform attached to a body
//!
//! A 4x4 affine matrix in column-vector convention: the translation lives in
//! column 3 and the local X/Y/Z axes are columns 0/1/2 of the upper-left 3x3.
//! Shape orientation (box edges, plane normal) is read from here and nowhere else

use nalgebra::{Matrix4, Rotation3};

use super::states::NVec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    matrix: Matrix4<f64>,
}

impl Default for Placement {
    fn default() -> Self {
        Self::identity()
    }
}

impl Placement {
    pub fn identity() -> Self {
        Self { matrix: Matrix4::identity() }
    }

    pub fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// Pure translation, axes aligned with the world
    pub fn from_position(position: NVec3) -> Self {
        Self { matrix: Matrix4::new_translation(&position) }
    }

    /// Rotation followed by translation to `position`
    pub fn from_position_rotation(position: NVec3, rotation: Rotation3<f64>) -> Self {
        Self { matrix: Matrix4::new_translation(&position) * rotation.to_homogeneous() }
    }

    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    pub fn set_matrix(&mut self, matrix: Matrix4<f64>) {
        self.matrix = matrix;
    }

    pub fn position(&self) -> NVec3 {
        self.column(3)
    }

    pub fn set_position(&mut self, position: NVec3) {
        self.matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&position);
    }

    /// Overwrite the vertical (Y) component of the translation only
    pub fn set_height(&mut self, y: f64) {
        self.matrix[(1, 3)] = y;
    }

    pub fn x_axis(&self) -> NVec3 {
        self.column(0)
    }

    pub fn y_axis(&self) -> NVec3 {
        self.column(1)
    }

    pub fn z_axis(&self) -> NVec3 {
        self.column(2)
    }

    /// Left-multiply a world-space translation into the transform
    pub fn translate(&mut self, delta: &NVec3) {
        self.matrix = Matrix4::new_translation(delta) * self.matrix;
    }

    fn column(&self, i: usize) -> NVec3 {
        self.matrix.fixed_view::<3, 1>(0, i).into_owned()
    }
}
