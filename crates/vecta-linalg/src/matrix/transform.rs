//! Builders for affine transforms and camera matrices.
//!
//! All of them produce matrices for column vectors multiplied on the right, with translation in
//! the last column. Angles are always in degrees.

use crate::{math::to_rad, Float, Vec3, Vector};

use super::Mat4;

impl<T: Float> Mat4<T> {
    /// Creates a translation by `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let m = Mat4f::translate([1.0, 2.0, 3.0]);
    /// assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));
    /// // Directions (w = 0) are not affected.
    /// assert_eq!(m * vec4(0.0, 1.0, 0.0, 0.0), vec4(0.0, 1.0, 0.0, 0.0));
    /// ```
    pub fn translate<V: Into<Vec3<T>>>(offset: V) -> Self {
        let v = offset.into();
        let (o, l) = (T::ZERO, T::ONE);
        #[rustfmt::skip]
        let m = Self::from_rows([
            [l, o, o, v.x],
            [o, l, o, v.y],
            [o, o, l, v.z],
            [o, o, o, l],
        ]);
        m
    }

    /// Creates a non-uniform scaling by `factors` along the X, Y and Z axes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let m = Mat4d::scale([2.0, 3.0, 0.5]);
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 0.5, 1.0));
    /// ```
    pub fn scale<V: Into<Vec3<T>>>(factors: V) -> Self {
        Self::from_diagonal(factors.into().extend(T::ONE))
    }

    /// Creates a uniform scaling by `factor`.
    pub fn scale_uniform(factor: T) -> Self {
        Self::scale(Vector::splat(factor))
    }

    /// Creates a counter-clockwise rotation around the X axis by `degrees`.
    pub fn rotate_x(degrees: T) -> Self {
        let (s, c) = to_rad(degrees).sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        #[rustfmt::skip]
        let m = Self::from_rows([
            [l, o,  o, o],
            [o, c, -s, o],
            [o, s,  c, o],
            [o, o,  o, l],
        ]);
        m
    }

    /// Creates a counter-clockwise rotation around the Y axis by `degrees`.
    pub fn rotate_y(degrees: T) -> Self {
        let (s, c) = to_rad(degrees).sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        #[rustfmt::skip]
        let m = Self::from_rows([
            [ c, o, s, o],
            [ o, l, o, o],
            [-s, o, c, o],
            [ o, o, o, l],
        ]);
        m
    }

    /// Creates a counter-clockwise rotation around the Z axis by `degrees`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let v = Mat4f::rotate_z(90.0) * Vec4f::X;
    /// assert_approx_eq!(v, Vec4f::Y);
    /// ```
    pub fn rotate_z(degrees: T) -> Self {
        let (s, c) = to_rad(degrees).sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        #[rustfmt::skip]
        let m = Self::from_rows([
            [c, -s, o, o],
            [s,  c, o, o],
            [o,  o, l, o],
            [o,  o, o, l],
        ]);
        m
    }

    /// Creates a right-handed view matrix for a camera at `eye` looking at `target`.
    ///
    /// The camera looks down its local -Z axis, with `world_up` determining its roll. The rows of
    /// the upper-left 3x3 block form an orthonormal basis (side, up, -front), and the last column
    /// moves `eye` to the origin.
    ///
    /// `eye` and `target` must not coincide, and `world_up` must not be parallel to the viewing
    /// direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let view = Mat4f::view([0.0, 0.0, 5.0], Vec3f::ZERO, Vec3f::Y);
    /// assert_eq!(view * vec4(0.0, 0.0, 0.0, 1.0), vec4(0.0, 0.0, -5.0, 1.0));
    /// ```
    pub fn view<E, P, W>(eye: E, target: P, world_up: W) -> Self
    where
        E: Into<Vec3<T>>,
        P: Into<Vec3<T>>,
        W: Into<Vec3<T>>,
    {
        let (eye, target, world_up) = (eye.into(), target.into(), world_up.into());
        let front = (target - eye).normalize();
        let side = front.cross(world_up).normalize();
        let up = side.cross(front);

        let o = T::ZERO;
        #[rustfmt::skip]
        let m = Self::from_rows([
            [ side.x,   side.y,   side.z, -side.dot(eye)],
            [   up.x,     up.y,     up.z,   -up.dot(eye)],
            [-front.x, -front.y, -front.z, front.dot(eye)],
            [      o,        o,        o,          T::ONE],
        ]);
        log::trace!("view(eye={eye:?}, target={target:?}, world_up={world_up:?}) = {m:?}");
        m
    }

    /// Creates a right-handed perspective projection.
    ///
    /// `fov_y_degrees` is the vertical field of view and `aspect` is width divided by height.
    /// Points on the near plane (`z = -near`) end up at a normalized depth of -1, points on the far
    /// plane (`z = -far`) at +1, after dividing by `w`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecta_linalg::*;
    /// let proj = Mat4d::projection(1.0, 10.0, 90.0, 1.0);
    /// let clip = proj * vec4(0.0, 0.0, -1.0, 1.0);
    /// assert_approx_eq!(clip.z / clip.w, -1.0).abs(1e-12);
    /// let clip = proj * vec4(0.0, 0.0, -10.0, 1.0);
    /// assert_approx_eq!(clip.z / clip.w, 1.0).abs(1e-12);
    /// ```
    pub fn projection(near: T, far: T, fov_y_degrees: T, aspect: T) -> Self {
        let two = T::ONE + T::ONE;
        let focal = T::ONE / (to_rad(fov_y_degrees) / two).tan();
        let depth = near - far;

        let o = T::ZERO;
        #[rustfmt::skip]
        let m = Self::from_rows([
            [focal / aspect,     o,                     o,                          o],
            [             o, focal,                     o,                          o],
            [             o,     o, (near + far) / depth, two * near * far / depth],
            [             o,     o,              -T::ONE,                          o],
        ]);
        log::trace!(
            "projection(near={near:?}, far={far:?}, fov_y={fov_y_degrees:?}, aspect={aspect:?}) = {m:?}"
        );
        m
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, vec4, Mat4d, Mat4f, Vec3d, Vec4d, Vec4f};

    #[test]
    fn translate_moves_points_only() {
        let m = Mat4f::translate([1.0, 2.0, 3.0]);
        assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 0.0), vec4(1.0, 1.0, 1.0, 0.0));
        assert_eq!(m.column(3), vec4(1.0, 2.0, 3.0, 1.0));
        assert_eq!(m.row(3), Vec4f::W);

        let back = Mat4f::translate(vec3(-1.0, -2.0, -3.0));
        assert_eq!(back * m, Mat4f::IDENTITY);
    }

    #[test]
    fn scale() {
        let m = Mat4d::scale([2.0, -1.0, 0.5]);
        assert_eq!(m * vec4(1.0, 1.0, 4.0, 1.0), vec4(2.0, -1.0, 2.0, 1.0));
        assert_eq!(Mat4d::scale_uniform(3.0).diagonal(), vec4(3.0, 3.0, 3.0, 1.0));
        assert_eq!(Mat4d::scale_uniform(1.0), Mat4d::IDENTITY);
    }

    #[test]
    fn rotations_follow_right_hand_rule() {
        assert_approx_eq!(Mat4d::rotate_x(90.0) * Vec4d::Y, Vec4d::Z);
        assert_approx_eq!(Mat4d::rotate_y(90.0) * Vec4d::Z, Vec4d::X);
        assert_approx_eq!(Mat4d::rotate_z(90.0) * Vec4d::X, Vec4d::Y);
        assert_approx_eq!(Mat4d::rotate_z(-90.0) * Vec4d::Y, Vec4d::X);
        assert_eq!(Mat4f::rotate_x(0.0), Mat4f::IDENTITY);
    }

    #[test]
    fn rotation_is_orthonormal() {
        let m = Mat4d::rotate_y(37.0) * Mat4d::rotate_x(-12.5);
        assert_approx_eq!(m * m.transpose(), Mat4d::IDENTITY).abs(1e-12);
        assert_approx_eq!(Mat4d::rotate_z(30.0) * Mat4d::rotate_z(60.0), Mat4d::rotate_z(90.0))
            .abs(1e-12);
    }

    #[test]
    fn view_moves_eye_to_origin() {
        let view = Mat4d::view([0.0, 0.0, 5.0], Vec3d::ZERO, Vec3d::Y);
        assert_eq!(view * vec4(0.0, 0.0, 0.0, 1.0), vec4(0.0, 0.0, -5.0, 1.0));
        assert_eq!(view * vec4(0.0, 0.0, 5.0, 1.0), Vec4d::W);

        let eye = vec3(4.0, 3.0, 5.0);
        let view = Mat4d::view(eye, vec3(0.0, 0.5, 0.0), Vec3d::Y);
        assert_approx_eq!(view * eye.extend(1.0), Vec4d::W).abs(1e-12);
        // The target ends up straight ahead, on the -Z axis.
        let target = view * vec4(0.0, 0.5, 0.0, 1.0);
        assert_approx_eq!(target.x, 0.0).abs(1e-12);
        assert_approx_eq!(target.y, 0.0).abs(1e-12);
        assert!(target.z < 0.0);
    }

    #[test]
    fn view_basis_is_orthonormal() {
        let view = Mat4d::view([-3.0, 7.0, 2.0], [1.0, -1.0, 0.5], Vec3d::Y);
        let rows = view.into_rows().map(|row| row.truncate());
        for (i, a) in rows[..3].iter().enumerate() {
            assert_approx_eq!(a.length(), 1.0).abs(1e-12);
            for b in &rows[i + 1..3] {
                assert_approx_eq!(a.dot(*b), 0.0).abs(1e-12);
            }
        }
    }

    #[test]
    fn projection_maps_depth_range() {
        let (near, far) = (0.1, 100.0);
        let proj = Mat4d::projection(near, far, 60.0, 16.0 / 9.0);
        let clip = proj * vec4(0.0, 0.0, -near, 1.0);
        assert_approx_eq!(clip.z / clip.w, -1.0).abs(1e-9);
        let clip = proj * vec4(0.0, 0.0, -far, 1.0);
        assert_approx_eq!(clip.z / clip.w, 1.0).abs(1e-9);
        assert_eq!(proj[3], vec4(0.0, 0.0, -1.0, 0.0));
    }

    #[test]
    fn projection_focal_length() {
        let proj = Mat4f::projection(1.0, 2.0, 90.0, 2.0);
        assert_approx_eq!(proj[(1, 1)], 1.0).abs(1e-6);
        assert_approx_eq!(proj[(0, 0)], 0.5).abs(1e-6);
    }
}
